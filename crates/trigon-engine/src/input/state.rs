use std::collections::HashSet;

use super::types::{InputEvent, Key, KeyState};

/// Current input state for the window.
///
/// Holds which keys are down right now; the frame loop queries it once per
/// iteration.
#[derive(Debug, Default)]
pub struct InputState {
    /// Whether the window is focused.
    pub focused: bool,

    /// Set of currently held keys.
    pub keys_down: HashSet<Key>,
}

impl InputState {
    /// Folds a platform-agnostic input event into the current state.
    pub fn apply_event(&mut self, ev: &InputEvent) {
        match ev {
            InputEvent::Focused(f) => {
                self.focused = *f;
                if !*f {
                    // Release events are not delivered to unfocused windows.
                    self.keys_down.clear();
                }
            }

            InputEvent::Key { key, state, .. } => match state {
                KeyState::Pressed => {
                    if self.keys_down.insert(*key) {
                        log::trace!("key down: {key}");
                    }
                }
                KeyState::Released => {
                    self.keys_down.remove(key);
                }
            },
        }
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    /// True when at least one of `keys` is held.
    pub fn any_down(&self, keys: &[Key]) -> bool {
        keys.iter().any(|k| self.key_down(*k))
    }
}
