use winit::window::Window;

use crate::coords::Viewport;
use crate::device::{Gpu, SurfaceErrorAction};
use crate::input::InputState;
use crate::paint::Color;
use crate::render::RenderTarget;

use super::app::AppControl;

/// Per-frame context passed to `core::App::on_frame`.
///
/// Lifetimes:
/// - `'a` is the duration of the callback invocation
/// - `'w` is the window-borrow lifetime carried by `Gpu<'w>`
pub struct FrameCtx<'a, 'w> {
    pub window: &'a Window,
    pub gpu: &'a mut Gpu<'w>,
    pub input: &'a InputState,
    pub frame_index: u64,

    /// Set when presentation failed for good; the runtime closes the loop.
    pub(crate) surface_fatal: bool,
}

impl FrameCtx<'_, '_> {
    /// Acquires a frame, clears it to `clear`, lets `draw` record into the
    /// pass with the current viewport, then submits and presents.
    ///
    /// Skips the frame while the window has no drawable area.
    pub fn render<F>(&mut self, clear: Color, draw: F) -> AppControl
    where
        F: FnOnce(&mut RenderTarget<'_>, Viewport),
    {
        let viewport = self.gpu.viewport();
        if !viewport.is_drawable() {
            return AppControl::Continue;
        }

        let mut frame = match self.gpu.begin_frame() {
            Ok(f) => f,
            Err(err) => {
                if self.gpu.handle_surface_error(err) == SurfaceErrorAction::Fatal {
                    self.surface_fatal = true;
                    return AppControl::Exit;
                }
                return AppControl::Continue;
            }
        };

        // The pass borrows the encoder; it must end before submit() takes the frame.
        {
            let mut target = RenderTarget::begin(&mut frame.encoder, &frame.view, clear);
            draw(&mut target, viewport);
        }

        self.window.pre_present_notify();
        self.gpu.submit(frame);

        if self.frame_index == 0 {
            log::debug!("first frame presented");
        }
        AppControl::Continue
    }
}
