//! Window + event loop.
//!
//! One window, one GPU context, one scene. Escape or closing the window exits.

use std::time::Instant;

use anyhow::{Context, Result};
use ouroboros::self_referencing;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use crate::device::{Gpu, GpuInit, SurfaceErrorAction};
use crate::scene::{Scene, SceneConfig};

/// Window configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "facet".to_string(),
            initial_size: LogicalSize::new(960.0, 640.0),
        }
    }
}

pub struct Runtime;

impl Runtime {
    pub fn run(config: RuntimeConfig, gpu_init: GpuInit, scene: SceneConfig) -> Result<()> {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, gpu_init, scene);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.failure {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

#[self_referencing]
struct WindowEntry {
    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

struct AppState {
    config: RuntimeConfig,
    gpu_init: GpuInit,
    scene_config: SceneConfig,

    // `scene` is dropped before the window it renders into.
    scene: Option<Scene>,
    window: Option<WindowEntry>,

    started: Instant,
    failure: Option<anyhow::Error>,
}

impl AppState {
    fn new(config: RuntimeConfig, gpu_init: GpuInit, scene_config: SceneConfig) -> Self {
        Self {
            config,
            gpu_init,
            scene_config,
            scene: None,
            window: None,
            started: Instant::now(),
            failure: None,
        }
    }

    fn open_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let gpu_init = self.gpu_init.clone();
        let entry = WindowEntryTryBuilder {
            window,
            gpu_builder: |w| pollster::block_on(Gpu::new(w, gpu_init)),
        }
        .try_build()
        .context("GPU initialization failed")?;

        let scene = entry.with_gpu(|gpu| {
            let size = gpu.size();
            log::info!(
                "{}x{} surface, {:?}",
                size.width,
                size.height,
                gpu.surface_format()
            );
            Scene::new(&gpu.render_ctx(), &self.scene_config)
        })?;

        entry.with_window(|w| w.request_redraw());
        self.scene = Some(scene);
        self.window = Some(entry);
        self.started = Instant::now();
        Ok(())
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("{err:#}");
        self.failure = Some(err);
        self.close(event_loop);
    }

    fn close(&mut self, event_loop: &ActiveEventLoop) {
        self.scene = None;
        self.window = None;
        event_loop.exit();
    }

    fn redraw(&mut self) -> Option<SurfaceErrorAction> {
        let time = self.started.elapsed().as_secs_f32();
        let (Some(entry), Some(scene)) = (self.window.as_mut(), self.scene.as_mut()) else {
            return None;
        };

        if !entry.borrow_gpu().is_drawable() {
            return None;
        }

        entry.with_gpu_mut(|gpu| match gpu.begin_frame() {
            Ok(mut frame) => {
                scene.render(&gpu.render_ctx(), &mut frame.target(), time);
                gpu.submit(frame);
                None
            }
            Err(err) => {
                let action = gpu.handle_surface_error(err);
                log::warn!("surface error ({action:?})");
                Some(action)
            }
        })
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.open_window(event_loop) {
            self.fail(event_loop, e);
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        event_loop.set_control_flow(ControlFlow::Wait);

        // Continuous redraw; the instanced scene animates every frame. A
        // minimized window waits for the next `Resized`.
        if let Some(entry) = &self.window {
            if entry.borrow_gpu().is_drawable() {
                entry.with_window(|w| w.request_redraw());
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => self.close(event_loop),

            WindowEvent::Resized(new_size) => {
                if let Some(entry) = self.window.as_mut() {
                    entry.with_gpu_mut(|gpu| gpu.resize(new_size));
                    entry.with_window(|w| w.request_redraw());
                }
            }

            WindowEvent::RedrawRequested => {
                if self.redraw() == Some(SurfaceErrorAction::Fatal) {
                    self.fail(event_loop, anyhow::anyhow!("surface lost: out of memory"));
                }
            }

            _ => {}
        }
    }
}
