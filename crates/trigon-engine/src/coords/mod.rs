//! Coordinate and geometry types.
//!
//! Two spaces are in play:
//! - clip space (NDC), where triangle vertices live: origin center, +Y up
//! - framebuffer pixels, where the viewport lives: origin top-left, +Y down

mod rect;
mod vec2;
mod viewport;

pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;
