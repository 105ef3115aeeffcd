use std::ops::Range;

use anyhow::Result;
use wgpu::util::DeviceExt;

use crate::coords::Viewport;
use crate::paint::Color;

use super::backend::{Backend, DrawTarget};
use super::resources::{GpuGeometry, GpuProgram};
use super::shader::{self, Diagnostic, ProgramSource, Stage};
use super::{Triangle, Vertex};

/// wgpu-backed [`Backend`]: device + the surface format pipelines target.
///
/// Borrowed from the GPU context for the duration of setup or teardown.
pub struct RenderCtx<'a> {
    pub device: &'a wgpu::Device,
    pub surface_format: wgpu::TextureFormat,
}

impl<'a> RenderCtx<'a> {
    #[inline]
    pub fn new(device: &'a wgpu::Device, surface_format: wgpu::TextureFormat) -> Self {
        Self {
            device,
            surface_format,
        }
    }

    /// Builds a shader module and checks its compilation messages.
    ///
    /// Validation errors are caught in an error scope so they come back as
    /// `Err` instead of reaching the device's uncaptured-error handler.
    fn compile(&self, label: &str, stage: Stage, source: &str) -> Result<wgpu::ShaderModule> {
        let scope = self.device.push_error_scope(wgpu::ErrorFilter::Validation);
        let module = self
            .device
            .create_shader_module(wgpu::ShaderModuleDescriptor {
                label: Some(format!("trigon {label} {stage} shader").as_str()),
                source: wgpu::ShaderSource::Wgsl(source.into()),
            });
        let scoped = pollster::block_on(scope.pop());

        // Compilation info carries line numbers; prefer it over the scoped error.
        let info = pollster::block_on(module.get_compilation_info());
        let diagnostics: Vec<Diagnostic> = info.messages.iter().map(Diagnostic::from_wgpu).collect();
        shader::check_compilation(label, stage, &diagnostics)?;

        if let Some(err) = scoped {
            anyhow::bail!("{label}: {stage} shader failed to compile:\n  {err}");
        }

        Ok(module)
    }
}

impl Backend for RenderCtx<'_> {
    type Program = GpuProgram;
    type Geometry = GpuGeometry;

    fn build_program(&mut self, source: &ProgramSource) -> Result<GpuProgram> {
        let label = source.label.as_str();
        let vs = self.compile(label, Stage::Vertex, source.vertex)?;
        let fs = self.compile(label, Stage::Fragment, &source.fragment)?;

        let layout = self
            .device
            .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some(format!("trigon {label} pipeline layout").as_str()),
                bind_group_layouts: &[],
                immediate_size: 0,
            });

        let scope = self.device.push_error_scope(wgpu::ErrorFilter::Validation);
        let pipeline = self
            .device
            .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(format!("trigon {label} pipeline").as_str()),
                layout: Some(&layout),

                vertex: wgpu::VertexState {
                    module: &vs,
                    entry_point: Some(shader::VERTEX_ENTRY),
                    compilation_options: Default::default(),
                    buffers: &[Vertex::layout()],
                },

                fragment: Some(wgpu::FragmentState {
                    module: &fs,
                    entry_point: Some(shader::FRAGMENT_ENTRY),
                    compilation_options: Default::default(),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: self.surface_format,
                        blend: Some(wgpu::BlendState::REPLACE),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                }),

                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::TriangleList,
                    strip_index_format: None,
                    front_face: wgpu::FrontFace::Ccw,
                    // Winding differs between the three triangles.
                    cull_mode: None,
                    polygon_mode: wgpu::PolygonMode::Fill,
                    unclipped_depth: false,
                    conservative: false,
                },

                depth_stencil: None,
                multisample: wgpu::MultisampleState::default(),
                multiview_mask: None,
                cache: None,
            });
        if let Some(err) = pollster::block_on(scope.pop()) {
            anyhow::bail!("{label}: failed to create render pipeline: {err}");
        }

        log::debug!("built program {label} ({:?})", source.color);

        Ok(GpuProgram {
            label: source.label.clone(),
            pipeline,
        })
    }

    fn upload_geometry(&mut self, label: &str, triangle: &Triangle) -> Result<GpuGeometry> {
        let buffer = self
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(format!("trigon {label} vbo").as_str()),
                contents: triangle.as_bytes(),
                usage: wgpu::BufferUsages::VERTEX,
            });

        log::debug!("uploaded geometry {label} ({} bytes)", buffer.size());

        Ok(GpuGeometry {
            label: label.to_string(),
            buffer,
        })
    }

    fn release_program(&mut self, program: GpuProgram) {
        log::debug!("released program {}", program.label);
        drop(program);
    }

    fn release_geometry(&mut self, geometry: GpuGeometry) {
        geometry.buffer.destroy();
        log::debug!("released geometry {}", geometry.label);
    }
}

/// Target for drawing: one render pass over the frame's color view.
pub struct RenderTarget<'a> {
    pass: wgpu::RenderPass<'a>,
}

impl<'a> RenderTarget<'a> {
    /// Begins the frame's render pass, clearing the color view to `clear`.
    pub fn begin(
        encoder: &'a mut wgpu::CommandEncoder,
        color_view: &'a wgpu::TextureView,
        clear: Color,
    ) -> Self {
        let pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("trigon frame pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(clear.to_wgpu()),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        Self { pass }
    }
}

impl DrawTarget for RenderTarget<'_> {
    type Program = GpuProgram;
    type Geometry = GpuGeometry;

    fn set_viewport(&mut self, viewport: Viewport) {
        self.pass.set_viewport(
            viewport.x as f32,
            viewport.y as f32,
            viewport.width as f32,
            viewport.height as f32,
            0.0,
            1.0,
        );
    }

    fn bind_program(&mut self, program: &GpuProgram) {
        self.pass.set_pipeline(&program.pipeline);
    }

    fn bind_geometry(&mut self, geometry: &GpuGeometry) {
        self.pass.set_vertex_buffer(0, geometry.buffer.slice(..));
    }

    fn draw(&mut self, vertices: Range<u32>) {
        self.pass.draw(vertices, 0..1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{GpuScene, SHAPES};

    const FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Bgra8Unorm;

    fn noop_device() -> (wgpu::Device, wgpu::Queue) {
        wgpu::Device::noop(&wgpu::DeviceDescriptor::default())
    }

    #[test]
    fn builds_a_program_per_shape_color() {
        let (device, _queue) = noop_device();
        let mut ctx = RenderCtx::new(&device, FORMAT);

        for shape in &SHAPES {
            let program = ctx
                .build_program(&ProgramSource::solid(shape.name, shape.color))
                .expect("solid program builds");
            assert_eq!(program.label, shape.name);
            ctx.release_program(program);
        }
    }

    #[test]
    fn broken_fragment_is_an_error_not_a_panic() {
        let (device, _queue) = noop_device();
        let mut ctx = RenderCtx::new(&device, FORMAT);

        let mut source = ProgramSource::solid("broken", Color::LIME);
        source.fragment = "@fragment\nfn fs_main() -> @location(0) vec4<f32> {\n    return nope;\n}\n".to_string();

        let err = ctx.build_program(&source).expect_err("unknown identifier must fail");
        let text = format!("{err:#}");
        assert!(text.contains("broken: fragment shader failed to compile"), "{text}");
    }

    #[test]
    fn uploads_one_triangle_as_36_bytes() {
        let (device, _queue) = noop_device();
        let mut ctx = RenderCtx::new(&device, FORMAT);

        let geometry = ctx
            .upload_geometry("right", &SHAPES[0].triangle)
            .expect("upload succeeds");
        assert_eq!(geometry.buffer.size(), 36);
        assert!(geometry.buffer.usage().contains(wgpu::BufferUsages::VERTEX));

        ctx.release_geometry(geometry);
    }

    #[test]
    fn scene_builds_and_tears_down_on_a_real_device() {
        let (device, _queue) = noop_device();
        let mut ctx = RenderCtx::new(&device, FORMAT);

        let scene = GpuScene::build(&mut ctx).expect("scene builds");
        assert_eq!(scene.pairs().len(), SHAPES.len());
        scene.destroy(&mut ctx);
    }
}
