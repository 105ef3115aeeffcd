use anyhow::Result;
use winit::event::WindowEvent;

use crate::device::Gpu;

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by higher layers.
///
/// Call order: `on_gpu_ready` once, then `on_window_event`/`on_frame` while
/// the loop is running, then `on_exit` once. The GPU context passed to
/// `on_exit` is still alive; it is destroyed right after the call returns.
pub trait App {
    /// Creates GPU resources. An error aborts startup.
    fn on_gpu_ready(&mut self, gpu: &Gpu<'_>) -> Result<()>;

    /// Called for window events.
    fn on_window_event(&mut self, event: &WindowEvent) -> AppControl {
        let _ = event;
        AppControl::Continue
    }

    /// Called once per rendered frame.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;

    /// Releases GPU resources.
    fn on_exit(&mut self, gpu: &Gpu<'_>);
}
