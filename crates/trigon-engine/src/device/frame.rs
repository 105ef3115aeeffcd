/// Represents a single acquired frame.
///
/// Short-lived: holding the surface texture blocks acquisition of the next
/// one. Dropping it after submission presents the frame.
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}
