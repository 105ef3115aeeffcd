//! The triangle scene.
//!
//! `shapes` holds the fixed triangles and their colors; `context` owns the GPU
//! handles built from them and records the per-frame draw sequence.

mod context;
mod shapes;

pub use context::{DrawPair, GpuScene, RenderContext};
pub use shapes::{EQUILATERAL, ISOSCELES, RIGHT, SHAPE_COUNT, SHAPES, Shape};
