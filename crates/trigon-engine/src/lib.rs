//! Trigon engine crate.
//!
//! Owns the platform + GPU runtime pieces and the triangle scene drawn on top
//! of them. The binary crate only wires these together.

pub mod coords;
pub mod core;
pub mod device;
pub mod input;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
pub mod window;
