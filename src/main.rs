use std::sync::Arc;

use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, MouseButton, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use scene_lab::app::App;
use scene_lab::cli::Cli;
use scene_lab::renderer::Renderer;

const INITIAL_WINDOW_WIDTH: u32 = 1280;
const INITIAL_WINDOW_HEIGHT: u32 = 720;
const LINE_SCROLL_FACTOR: f32 = 3.0;

#[derive(Default)]
struct MouseState {
    dragging: bool,
    last_position: Option<(f64, f64)>,
}

/// winit shell: owns the window, the renderer and the application
/// context, and translates host events into loop operations
struct Demo {
    cli: Cli,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    app: Option<App>,
    mouse: MouseState,
}

impl Demo {
    fn new(cli: Cli) -> Self {
        Self {
            cli,
            window: None,
            renderer: None,
            app: None,
            mouse: MouseState::default(),
        }
    }
}

impl ApplicationHandler for Demo {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match event_loop.create_window(
            Window::default_attributes()
                .with_title("Scene Lab")
                .with_inner_size(winit::dpi::LogicalSize::new(
                    INITIAL_WINDOW_WIDTH,
                    INITIAL_WINDOW_HEIGHT,
                )),
        ) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let size = window.inner_size();
        let app = App::new(size.width, size.height, !self.cli.no_ui);

        let renderer = match pollster::block_on(Renderer::new(window.clone(), &app.scene)) {
            Ok(r) => r,
            Err(e) => {
                log::error!("failed to initialize renderer: {e}");
                event_loop.exit();
                return;
            }
        };

        self.window = Some(window);
        self.renderer = Some(renderer);
        self.app = Some(app);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let (Some(window), Some(renderer), Some(app)) =
            (&self.window, &mut self.renderer, &mut self.app)
        else {
            return;
        };

        // Let egui handle the event first
        if renderer.handle_event(window, &event) {
            return;
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
            } => event_loop.exit(),
            WindowEvent::Resized(size) => app.resize(renderer, size),
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                self.mouse.dragging = state.is_pressed();
                if !self.mouse.dragging {
                    self.mouse.last_position = None;
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                if self.mouse.dragging {
                    if let Some((lx, ly)) = self.mouse.last_position {
                        app.camera
                            .orbit((position.x - lx) as f32, (position.y - ly) as f32);
                    }
                    self.mouse.last_position = Some((position.x, position.y));
                } else {
                    self.mouse.last_position = None;
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let scroll = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y * LINE_SCROLL_FACTOR,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / 20.0,
                };
                app.camera.zoom(scroll);
            }
            WindowEvent::RedrawRequested => match app.tick(renderer, window) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    // Surface went stale (e.g. mid-resize): reconfigure and
                    // let the next tick redraw
                    renderer.resize(window.inner_size());
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("surface out of memory, exiting");
                    event_loop.exit();
                }
                Err(e) => log::warn!("dropped frame: {e}"),
            },
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let event_loop = EventLoop::new()?;
    let mut demo = Demo::new(cli);

    log::info!("Scene Lab - drag to orbit, scroll to zoom, Escape to quit");
    event_loop.run_app(&mut demo)?;

    Ok(())
}
