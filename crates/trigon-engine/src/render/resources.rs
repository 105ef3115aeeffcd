/// A linked program: one render pipeline.
#[derive(Debug)]
pub struct GpuProgram {
    pub(super) label: String,
    pub(super) pipeline: wgpu::RenderPipeline,
}

/// Static vertex buffer holding one triangle.
#[derive(Debug)]
pub struct GpuGeometry {
    pub(super) label: String,
    pub(super) buffer: wgpu::Buffer,
}
