use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::core::{App, AppControl, FrameCtx, WindowCtx};
use crate::device::{Gpu, GpuInit};
use crate::render::RenderCtx;
use crate::time::FrameClock;

use super::phase::{LoopPhase, LoopState};

/// Window configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "cyclogon".to_string(),
            initial_size: LogicalSize::new(1000.0, 900.0),
        }
    }
}

/// Entry point for the render loop.
pub struct Runtime;

impl Runtime {
    /// Opens one window and drives `app` until the window is closed.
    ///
    /// Returns the first initialization error (event loop, window, GPU or
    /// `App::on_ready`), if any. Steady-state errors are not reported here.
    pub fn run<A>(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Result<()>
    where
        A: App + 'static,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut state = AppState::new(config, gpu_init, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.init_error.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[self_referencing]
struct WindowEntry {
    clock: FrameClock,

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
    init_error: Option<anyhow::Error>,
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
            state: LoopState::new(),
            init_error: None,
        }
    }

    /// Uninitialized → Ready: window, GPU context, then the app's resources.
    fn initialize(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let gpu_init = self.gpu_init.clone();
        let entry = WindowEntryTryBuilder {
            clock: FrameClock::new(),
            window,
            gpu_builder: |w| pollster::block_on(Gpu::new(w, gpu_init)),
        }
        .try_build()
        .context("GPU initialization failed")?;

        let app = &mut self.app;
        entry
            .with_gpu(|gpu| {
                let rctx = RenderCtx::new(
                    gpu.device(),
                    gpu.queue(),
                    gpu.surface_format(),
                    gpu.sample_count(),
                    gpu.size().into(),
                );
                app.on_ready(&rctx)
            })
            .context("application setup failed")?;

        self.entry = Some(entry);
        Ok(())
    }

    /// ShuttingDown → Terminated: app resources first, then GPU and window.
    fn shutdown(&mut self, event_loop: &ActiveEventLoop) {
        if !self.state.advance(LoopPhase::ShuttingDown) {
            return;
        }

        self.app.on_shutdown();

        if let Some(entry) = self.entry.take() {
            entry.with_clock(|clock| {
                log::info!(
                    "rendered {} frames ({:.1} fps average)",
                    clock.frames(),
                    clock.average_fps()
                );
            });
            drop(entry);
        }

        self.state.advance(LoopPhase::Terminated);
        event_loop.exit();
    }

    fn draw_frame(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId) {
        if self.state.phase() == LoopPhase::Ready {
            self.state.advance(LoopPhase::Running);
        }
        if self.state.phase() != LoopPhase::Running {
            return;
        }

        let (app, entry) = (&mut self.app, &mut self.entry);
        let Some(entry) = entry.as_mut() else { return };

        let control = entry.with_mut(|fields| {
            let time = fields.clock.tick();
            log::trace!("frame {} dt={:.4}s", time.frame_index, time.dt);

            let mut ctx = FrameCtx {
                window: WindowCtx {
                    id: window_id,
                    window: fields.window,
                },
                gpu: fields.gpu,
                time,
            };
            app.on_frame(&mut ctx)
        });

        if control == AppControl::Exit {
            self.shutdown(event_loop);
        }
    }
}

impl<A> ApplicationHandler for AppState<A>
where
    A: App + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.phase() != LoopPhase::Uninitialized {
            return;
        }

        match self.initialize(event_loop) {
            Ok(()) => {
                self.state.advance(LoopPhase::Ready);
                if let Some(entry) = self.entry.as_ref() {
                    entry.with_window(|w| w.request_redraw());
                }
            }
            Err(err) => {
                self.init_error = Some(err);
                self.state.advance(LoopPhase::Terminated);
                event_loop.exit();
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if !self.state.phase().wants_redraw() {
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
        if !self.state.phase().wants_redraw() {
            return;
        }

        match &event {
            WindowEvent::CloseRequested => self.shutdown(event_loop),

            WindowEvent::Resized(new_size) => {
                if let Some(entry) = self.entry.as_mut() {
                    entry.with_gpu_mut(|gpu| gpu.resize(*new_size));
                }
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(entry) = self.entry.as_mut() {
                    let new_size = entry.with_window(|w| w.inner_size());
                    entry.with_gpu_mut(|gpu| gpu.resize(new_size));
                }
            }

            WindowEvent::RedrawRequested => self.draw_frame(event_loop, window_id),

            _ => {
                if self.app.on_window_event(&event) == AppControl::Exit {
                    self.shutdown(event_loop);
                }
            }
        }
    }

    fn exiting(&mut self, event_loop: &ActiveEventLoop) {
        // The platform may end the loop without a close request.
        if self.state.phase().wants_redraw() {
            self.shutdown(event_loop);
        }
    }
}
