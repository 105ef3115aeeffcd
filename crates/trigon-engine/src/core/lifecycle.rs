use std::fmt;

use crate::input::{InputState, Key};

/// Why the loop left the running state.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CloseReason {
    /// The window manager asked to close the window.
    WindowClosed,
    /// A quit key was held when input was polled.
    QuitKey,
    /// The application asked to exit.
    AppRequested,
    /// The surface failed in a way that cannot be recovered.
    SurfaceFatal,
    /// Window, GPU or scene creation failed.
    StartupFailed,
}

impl fmt::Display for CloseReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CloseReason::WindowClosed => "window closed",
            CloseReason::QuitKey => "quit key pressed",
            CloseReason::AppRequested => "application exit",
            CloseReason::SurfaceFatal => "fatal surface error",
            CloseReason::StartupFailed => "startup failed",
        };
        f.write_str(s)
    }
}

/// State of the frame loop. `Closing` is terminal.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum LoopState {
    #[default]
    Running,
    Closing(CloseReason),
}

impl LoopState {
    #[inline]
    pub fn is_running(self) -> bool {
        self == LoopState::Running
    }

    /// Signals the close condition.
    ///
    /// Idempotent: only the first call transitions and returns `true`; the
    /// first reason is kept.
    pub fn close(&mut self, reason: CloseReason) -> bool {
        if !self.is_running() {
            return false;
        }
        log::info!("closing: {reason}");
        *self = LoopState::Closing(reason);
        true
    }

    /// Polls input at the start of a frame iteration.
    ///
    /// Returns whether the frame should be drawn: `false` once closing,
    /// including when one of `quit_keys` is held right now.
    pub fn begin_frame(&mut self, input: &InputState, quit_keys: &[Key]) -> bool {
        if self.is_running() && input.any_down(quit_keys) {
            self.close(CloseReason::QuitKey);
        }
        self.is_running()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{InputEvent, KeyState};

    const QUIT: [Key; 2] = [Key::Escape, Key::R];

    fn pressed(key: Key) -> InputState {
        let mut input = InputState::default();
        input.apply_event(&InputEvent::Key { key, state: KeyState::Pressed, repeat: false });
        input
    }

    #[test]
    fn starts_running() {
        assert!(LoopState::default().is_running());
    }

    #[test]
    fn idle_input_keeps_running() {
        let mut state = LoopState::default();
        for _ in 0..3 {
            assert!(state.begin_frame(&InputState::default(), &QUIT));
        }
    }

    #[test]
    fn escape_or_r_closes_on_next_poll() {
        for key in QUIT {
            let mut state = LoopState::default();
            assert!(!state.begin_frame(&pressed(key), &QUIT));
            assert_eq!(state, LoopState::Closing(CloseReason::QuitKey));
        }
    }

    #[test]
    fn other_keys_do_not_close() {
        let mut state = LoopState::default();
        assert!(state.begin_frame(&pressed(Key::Unknown(7)), &QUIT));
    }

    #[test]
    fn closing_is_terminal() {
        let mut state = LoopState::default();
        assert!(state.close(CloseReason::WindowClosed));
        assert!(!state.close(CloseReason::QuitKey));
        assert!(!state.begin_frame(&InputState::default(), &QUIT));
        assert_eq!(state, LoopState::Closing(CloseReason::WindowClosed));
    }
}
