//! GPU rendering subsystem.
//!
//! The scene talks to the GPU only through the [`Backend`] and [`DrawTarget`]
//! traits. [`RenderCtx`] and [`RenderTarget`] implement them on top of wgpu.
//!
//! Convention:
//! - vertex positions are given in clip space and passed through unchanged
//! - one program = one render pipeline (shared vertex stage + colored fragment stage)

mod backend;
mod ctx;
mod geometry;
mod resources;
pub mod shader;

pub use backend::{Backend, DrawTarget};
pub use ctx::{RenderCtx, RenderTarget};
pub use geometry::{Triangle, VERTICES_PER_TRIANGLE, Vertex};
pub use resources::{GpuGeometry, GpuProgram};
pub use shader::ProgramSource;
