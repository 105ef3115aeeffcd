//! Core engine-facing contracts.
//!
//! Defines the interface between the runtime (platform loop) and the
//! application: lifecycle callbacks, the per-frame context, and the
//! running/closing state of the loop.

mod app;
mod ctx;
mod lifecycle;

pub use app::{App, AppControl};
pub use ctx::FrameCtx;
pub use lifecycle::{CloseReason, LoopState};
