use std::ops::Range;

use anyhow::Result;

use crate::coords::Viewport;

use super::{ProgramSource, Triangle};

/// Creates and releases GPU objects.
///
/// Handles are opaque to callers. Every handle obtained from `build_program`
/// or `upload_geometry` must be given back exactly once to the matching
/// `release_*` method while the device is still alive.
pub trait Backend {
    type Program;
    type Geometry;

    /// Builds a linked program from the shared vertex stage and `source`'s
    /// fragment stage. Fails when either stage does not compile.
    fn build_program(&mut self, source: &ProgramSource) -> Result<Self::Program>;

    /// Uploads one triangle as static vertex data (position at location 0).
    fn upload_geometry(&mut self, label: &str, triangle: &Triangle) -> Result<Self::Geometry>;

    fn release_program(&mut self, program: Self::Program);

    fn release_geometry(&mut self, geometry: Self::Geometry);
}

/// Receives the draw commands of one render pass.
///
/// Clearing happens when the pass begins; everything recorded afterwards
/// draws on top of the clear color.
pub trait DrawTarget {
    type Program;
    type Geometry;

    fn set_viewport(&mut self, viewport: Viewport);

    fn bind_program(&mut self, program: &Self::Program);

    fn bind_geometry(&mut self, geometry: &Self::Geometry);

    /// Non-indexed draw of `vertices` as a triangle list.
    fn draw(&mut self, vertices: Range<u32>);
}
