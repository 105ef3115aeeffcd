use anyhow::{Context, Result};

use crate::coords::Viewport;
use crate::render::{Backend, DrawTarget, GpuGeometry, GpuProgram, ProgramSource, VERTICES_PER_TRIANGLE};

use super::shapes::{SHAPE_COUNT, SHAPES, Shape};

/// A program and the geometry it draws.
pub struct DrawPair<P, G> {
    pub name: &'static str,
    pub program: P,
    pub geometry: G,
}

/// Owns every GPU handle of the scene, in draw order.
///
/// Built once after the GPU context exists and destroyed once before it goes
/// away. Handles are never shared or rebuilt in between.
pub struct RenderContext<P, G> {
    pairs: [DrawPair<P, G>; SHAPE_COUNT],
}

/// The scene as held by the application, on wgpu handles.
pub type GpuScene = RenderContext<GpuProgram, GpuGeometry>;

impl<P, G> RenderContext<P, G> {
    /// Builds one program and uploads one triangle per shape.
    ///
    /// On failure, everything built so far is released before returning.
    pub fn build<B>(backend: &mut B) -> Result<Self>
    where
        B: Backend<Program = P, Geometry = G>,
    {
        let mut built: Vec<DrawPair<P, G>> = Vec::with_capacity(SHAPE_COUNT);

        for shape in &SHAPES {
            match build_pair(backend, shape) {
                Ok(pair) => built.push(pair),
                Err(err) => {
                    release_all(backend, built);
                    return Err(err);
                }
            }
        }

        let pairs: [DrawPair<P, G>; SHAPE_COUNT] = built
            .try_into()
            .map_err(|v: Vec<_>| anyhow::anyhow!("built {} draw pairs, expected {SHAPE_COUNT}", v.len()))?;

        log::info!("scene ready: {SHAPE_COUNT} programs, {SHAPE_COUNT} vertex buffers");
        Ok(Self { pairs })
    }

    pub fn pairs(&self) -> &[DrawPair<P, G>; SHAPE_COUNT] {
        &self.pairs
    }

    /// Records one frame: viewport, then every pair in fixed order.
    pub fn draw<T>(&self, target: &mut T, viewport: Viewport)
    where
        T: DrawTarget<Program = P, Geometry = G>,
    {
        target.set_viewport(viewport);

        for pair in &self.pairs {
            target.bind_program(&pair.program);
            target.bind_geometry(&pair.geometry);
            target.draw(0..VERTICES_PER_TRIANGLE);
        }
    }

    /// Releases every program and geometry exactly once.
    pub fn destroy<B>(self, backend: &mut B)
    where
        B: Backend<Program = P, Geometry = G>,
    {
        release_all(backend, self.pairs);
        log::info!("scene released");
    }
}

fn build_pair<B: Backend>(backend: &mut B, shape: &Shape) -> Result<DrawPair<B::Program, B::Geometry>> {
    let source = ProgramSource::solid(shape.name, shape.color);
    let program = backend
        .build_program(&source)
        .with_context(|| format!("failed to build {} program", shape.name))?;

    let geometry = match backend.upload_geometry(shape.name, &shape.triangle) {
        Ok(g) => g,
        Err(err) => {
            backend.release_program(program);
            return Err(err.context(format!("failed to upload {} geometry", shape.name)));
        }
    };

    Ok(DrawPair {
        name: shape.name,
        program,
        geometry,
    })
}

fn release_all<B: Backend>(
    backend: &mut B,
    pairs: impl IntoIterator<Item = DrawPair<B::Program, B::Geometry>>,
) {
    for pair in pairs {
        backend.release_geometry(pair.geometry);
        backend.release_program(pair.program);
    }
}
