use anyhow::Result;

use trigon_engine::core::{App, AppControl, FrameCtx};
use trigon_engine::device::Gpu;
use trigon_engine::paint::Color;
use trigon_engine::render::RenderCtx;
use trigon_engine::scene::GpuScene;

/// Draws the three fixed triangles on a white background.
#[derive(Default)]
pub struct TrianglesApp {
    scene: Option<GpuScene>,
}

impl App for TrianglesApp {
    fn on_gpu_ready(&mut self, gpu: &Gpu<'_>) -> Result<()> {
        let mut backend = RenderCtx::new(gpu.device(), gpu.surface_format());
        self.scene = Some(GpuScene::build(&mut backend)?);
        Ok(())
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let Some(scene) = self.scene.as_ref() else {
            log::warn!("frame requested before the scene was built");
            return AppControl::Exit;
        };

        ctx.render(Color::WHITE, |target, viewport| scene.draw(target, viewport))
    }

    fn on_exit(&mut self, gpu: &Gpu<'_>) {
        if let Some(scene) = self.scene.take() {
            let mut backend = RenderCtx::new(gpu.device(), gpu.surface_format());
            scene.destroy(&mut backend);
        }
    }
}
