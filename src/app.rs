use winit::window::Window;

use crate::camera::Camera;
use crate::clock::FrameClock;
use crate::panel::{self, ControlPanel};
use crate::renderer::Renderer;
use crate::scene::Scene;
use crate::stats::FpsCounter;

/// Everything the frame loop owns: scene registry, camera, clock, panel
/// and FPS counter. Created once at startup, torn down with the process.
/// No module-level globals - the loop, resize handler and panel all work
/// through this context.
pub struct App {
    pub scene: Scene,
    pub camera: Camera,
    pub clock: FrameClock,
    pub panel: ControlPanel,
    pub fps: FpsCounter,
    pub show_ui: bool,
}

impl App {
    pub fn new(width: u32, height: u32, show_ui: bool) -> Self {
        Self {
            scene: Scene::compose(),
            camera: Camera::new(width, height),
            clock: FrameClock::new(),
            panel: panel::debug_panel(),
            fps: FpsCounter::new(),
            show_ui,
        }
    }

    /// Viewport resize: renderer output size and camera aspect together,
    /// so the two can never diverge
    pub fn resize(&mut self, renderer: &mut Renderer, size: winit::dpi::PhysicalSize<u32>) {
        if size.width == 0 || size.height == 0 {
            return;
        }
        renderer.resize(size);
        self.camera.set_aspect(size.width, size.height);
    }

    /// One frame tick: clock delta, pending panel changes, entity updates
    /// in registration order, draw, FPS bookkeeping
    pub fn tick(
        &mut self,
        renderer: &mut Renderer,
        window: &Window,
    ) -> Result<(), wgpu::SurfaceError> {
        let delta = self.clock.tick();

        self.panel.apply_pending(&mut self.scene);
        self.scene.update_all(delta);

        let Self {
            scene,
            camera,
            panel,
            fps,
            show_ui,
            ..
        } = self;
        renderer.render(scene, camera, window, |ctx| {
            if *show_ui {
                panel.ui(ctx);
                fps.ui(ctx);
            }
        })?;

        self.fps.tick(delta);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_starts_with_the_composed_scene() {
        let app = App::new(800, 600, true);
        assert_eq!(app.scene.len(), 6);
        assert!((app.camera.aspect() - 800.0 / 600.0).abs() < 0.001);
        assert_eq!(app.panel.value("Intensity"), Some(1.0));
    }
}
