use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use log::{error, info, warn};
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use wave_morph::cli::Cli;
use wave_morph::core::Clock;
use wave_morph::panel::ParameterPanel;
use wave_morph::renderer::WaveRenderer;
use wave_morph::{SceneHost, SharedParameters, WaveConfig};

const WINDOW_TITLE: &str = "Wave Morph";

struct App {
    config: WaveConfig,
    params: SharedParameters,
    host: SceneHost<Arc<Window>, WaveRenderer>,
}

impl App {
    fn new(config: WaveConfig) -> Self {
        let params = SharedParameters::new(config.parameters);
        let host = SceneHost::new(config.scene(), params.clone(), Clock::new(), config.normals);
        Self {
            config,
            params,
            host,
        }
    }

    fn create_window(&self, event_loop: &ActiveEventLoop) -> Option<Arc<Window>> {
        let mut attributes = Window::default_attributes().with_title(WINDOW_TITLE);
        attributes = match self.config.window_size() {
            Some((width, height)) => {
                attributes.with_inner_size(winit::dpi::PhysicalSize::new(width, height))
            }
            None => attributes.with_maximized(true),
        };

        match event_loop.create_window(attributes) {
            Ok(window) => Some(Arc::new(window)),
            Err(e) => {
                warn!("Failed to create window: {}", e);
                None
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.host.is_active() {
            return;
        }

        let window = self.create_window(event_loop);
        let panel = self
            .config
            .show_ui
            .then(|| ParameterPanel::new(self.params.clone()));

        let mounted = self.host.activate(window, |window, scene| {
            pollster::block_on(WaveRenderer::new(window.clone(), scene, panel))
        });

        match mounted {
            Ok(true) => {}
            Ok(false) => {
                error!("No window available; nothing to draw on");
                event_loop.exit();
            }
            Err(e) => {
                error!("Failed to initialize renderer: {:#}", e);
                event_loop.exit();
            }
        }
    }

    fn suspended(&mut self, _event_loop: &ActiveEventLoop) {
        self.host.deactivate();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // Let egui handle the event first
        if let Some(renderer) = self.host.renderer_mut() {
            if renderer.handle_event(&event) {
                return;
            }
        }

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
            } => {
                self.host.deactivate();
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                self.host.on_resize(size.width, size.height);
            }
            WindowEvent::RedrawRequested => {
                if let Err(e) = self.host.on_frame() {
                    error!("Render error, animation stopped: {:#}", e);
                }
            }
            _ => {}
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.host.deactivate();
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = WaveConfig::from_cli(&cli)?;
    info!(
        "Starting wave morph: frequency={} speed={:.1} amount={:.2} color={}",
        config.parameters.frequency, config.parameters.speed, config.parameters.amount, config.color
    );

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config);

    event_loop.run_app(&mut app)?;

    Ok(())
}
