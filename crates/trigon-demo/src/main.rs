mod app;

use trigon_engine::device::GpuInit;
use trigon_engine::input::Key;
use trigon_engine::logging::{LoggingConfig, init_logging};
use trigon_engine::window::{Runtime, RuntimeConfig};
use winit::dpi::PhysicalSize;

use app::TrianglesApp;

const WINDOW_TITLE: &str = "Different types of triangles";
const WINDOW_WIDTH: u32 = 800;
const WINDOW_HEIGHT: u32 = 600;

fn main() {
    init_logging(LoggingConfig::default());

    let config = RuntimeConfig {
        title: WINDOW_TITLE.to_string(),
        initial_size: PhysicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT).into(),
        quit_keys: vec![Key::Escape, Key::R],
    };

    if let Err(err) = Runtime::run(config, GpuInit::default(), TrianglesApp::default()) {
        log::error!("{err:#}");
        std::process::exit(-1);
    }
}
