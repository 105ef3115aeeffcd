//! Input subsystem.
//!
//! Public API is platform-agnostic. `platform::winit` translates window-system
//! events into `InputEvent`s; `InputState` folds them into held-key state.

pub mod platform;
mod state;
mod types;

pub use state::InputState;
pub use types::{InputEvent, Key, KeyState};
