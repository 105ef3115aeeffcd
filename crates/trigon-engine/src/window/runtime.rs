use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::{PhysicalSize, Size};
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::core::{App, AppControl, CloseReason, FrameCtx, LoopState};
use crate::device::{Gpu, GpuInit};
use crate::input::platform::winit::translate_window_event;
use crate::input::{InputState, Key};

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: Size,
    /// Holding any of these keys closes the window.
    pub quit_keys: Vec<Key>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "trigon".to_string(),
            initial_size: PhysicalSize::new(800, 600).into(),
            quit_keys: vec![Key::Escape],
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens the window and runs the frame loop until it closes.
    ///
    /// Returns the startup error, if window, GPU or application setup failed.
    pub fn run<A>(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Result<()>
    where
        A: App + 'static,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, gpu_init, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.startup_error.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[self_referencing]
struct WindowEntry {
    input: InputState,
    frame_index: u64,

    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

struct AppState<A>
where
    A: App + 'static,
{
    config: RuntimeConfig,
    gpu_init: GpuInit,
    app: A,

    entry: Option<WindowEntry>,
    state: LoopState,
    startup_error: Option<anyhow::Error>,
}

impl<A> AppState<A>
where
    A: App + 'static,
{
    fn new(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Self {
        Self {
            config,
            gpu_init,
            app,
            entry: None,
            state: LoopState::default(),
            startup_error: None,
        }
    }

    fn create_window_entry(&mut self, event_loop: &ActiveEventLoop) -> Result<WindowEntry> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let gpu_init = self.gpu_init.clone();

        WindowEntryTryBuilder {
            input: InputState::default(),
            frame_index: 0,
            window,
            gpu_builder: |w| pollster::block_on(Gpu::new(w, gpu_init)),
        }
        .try_build()
        .context("failed to initialize the GPU context")
    }

    fn fail_startup(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::debug!("startup failed, leaving the event loop");
        self.startup_error = Some(err);
        self.state.close(CloseReason::StartupFailed);
        self.shutdown(event_loop);
    }

    /// Releases application GPU resources, then the GPU context, then the window.
    fn shutdown(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(entry) = self.entry.take() {
            let app = &mut self.app;
            entry.with_gpu(|gpu| app.on_exit(gpu));
            // ouroboros drops `gpu` before the `window` it borrows.
            drop(entry);
            log::debug!("window and GPU context destroyed");
        }
        event_loop.exit();
    }

    fn redraw(&mut self) {
        let Some(entry) = self.entry.as_mut() else {
            return;
        };

        let (app, state, quit_keys) = (&mut self.app, &mut self.state, &self.config.quit_keys);

        entry.with_mut(|fields| {
            if !state.begin_frame(fields.input, quit_keys) {
                return;
            }

            let mut ctx = FrameCtx {
                window: fields.window,
                gpu: fields.gpu,
                input: fields.input,
                frame_index: *fields.frame_index,
                surface_fatal: false,
            };
            let control = app.on_frame(&mut ctx);
            let surface_fatal = ctx.surface_fatal;
            drop(ctx);

            *fields.frame_index = fields.frame_index.wrapping_add(1);

            if surface_fatal {
                state.close(CloseReason::SurfaceFatal);
            } else if control == AppControl::Exit {
                state.close(CloseReason::AppRequested);
            }
        });
    }
}

impl<A> ApplicationHandler for AppState<A>
where
    A: App + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.entry.is_some() || !self.state.is_running() {
            return;
        }

        let entry = match self.create_window_entry(event_loop) {
            Ok(entry) => entry,
            Err(err) => return self.fail_startup(event_loop, err),
        };

        let app = &mut self.app;
        if let Err(err) = entry.with_gpu(|gpu| app.on_gpu_ready(gpu)) {
            // The entry (GPU context + window) drops here, after the app's partial cleanup.
            return self.fail_startup(event_loop, err.context("failed to set up the scene"));
        }

        entry.with_window(|w| w.request_redraw());
        self.entry = Some(entry);

        // Non-blocking: frames run back to back, paced only by presentation.
        event_loop.set_control_flow(ControlFlow::Poll);
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if !self.state.is_running() {
            self.shutdown(event_loop);
            return;
        }

        if let Some(entry) = self.entry.as_ref() {
            entry.with_window(|w| w.request_redraw());
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(entry) = self.entry.as_mut() else {
            return;
        };
        if entry.with_window(|w| w.id()) != window_id {
            return;
        }

        if let Some(ev) = translate_window_event(&event) {
            entry.with_input_mut(|input| input.apply_event(&ev));
        }

        if self.app.on_window_event(&event) == AppControl::Exit {
            self.state.close(CloseReason::AppRequested);
        }

        match &event {
            WindowEvent::CloseRequested => {
                self.state.close(CloseReason::WindowClosed);
            }

            WindowEvent::Resized(new_size) => {
                entry.with_gpu_mut(|gpu| gpu.resize(*new_size));
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                let new_size = entry.with_window(|w| w.inner_size());
                entry.with_gpu_mut(|gpu| gpu.resize(new_size));
            }

            WindowEvent::RedrawRequested => self.redraw(),

            _ => {}
        }

        if !self.state.is_running() {
            self.shutdown(event_loop);
        }
    }

    fn exiting(&mut self, event_loop: &ActiveEventLoop) {
        self.shutdown(event_loop);
    }
}
