use glam::{Mat4, Vec3};

pub const FOV_Y_DEGREES: f32 = 35.0;
pub const NEAR_PLANE: f32 = 0.1;
pub const FAR_PLANE: f32 = 300.0;
pub const INITIAL_EYE: Vec3 = Vec3::new(100.0, 100.0, 100.0);

const ORBIT_SENSITIVITY: f32 = 0.008;
const ZOOM_SENSITIVITY: f32 = 4.0;
const MIN_RADIUS: f32 = 5.0;
const MAX_RADIUS: f32 = 280.0;
// Keep the camera off the poles so the up vector stays valid
const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 0.01;

/// Perspective camera orbiting a fixed target point.
///
/// Mouse drag rotates yaw/pitch around the target, scroll wheel moves the
/// eye along the view ray. Projection constants match the demo scene.
pub struct Camera {
    pub target: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub radius: f32,
    aspect: f32,
}

impl Camera {
    pub fn new(width: u32, height: u32) -> Self {
        let offset = INITIAL_EYE;
        let radius = offset.length();
        Self {
            target: Vec3::ZERO,
            yaw: offset.x.atan2(offset.z),
            pitch: (offset.y / radius).asin(),
            radius,
            aspect: width as f32 / height.max(1) as f32,
        }
    }

    pub fn eye(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        self.target
            + self.radius * Vec3::new(sin_yaw * cos_pitch, sin_pitch, cos_yaw * cos_pitch)
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// Recompute the projection aspect ratio from a new viewport size.
    /// Idempotent: the same size always yields the same aspect.
    pub fn set_aspect(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height.max(1) as f32;
    }

    pub fn orbit(&mut self, dx: f32, dy: f32) {
        self.yaw -= dx * ORBIT_SENSITIVITY;
        self.pitch = (self.pitch + dy * ORBIT_SENSITIVITY).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    pub fn zoom(&mut self, scroll: f32) {
        self.radius = (self.radius - scroll * ZOOM_SENSITIVITY).clamp(MIN_RADIUS, MAX_RADIUS);
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.target, Vec3::Y)
    }

    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh(FOV_Y_DEGREES.to_radians(), self.aspect, NEAR_PLANE, FAR_PLANE)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection() * self.view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_eye_matches_demo_constants() {
        let camera = Camera::new(800, 600);
        let eye = camera.eye();
        assert!((eye - INITIAL_EYE).length() < 0.01);
        assert!((camera.aspect() - 800.0 / 600.0).abs() < 0.001);
    }

    #[test]
    fn resize_updates_aspect() {
        let mut camera = Camera::new(800, 600);
        assert!((camera.aspect() - 1.333).abs() < 0.001);

        camera.set_aspect(1600, 900);
        assert!((camera.aspect() - 1.778).abs() < 0.001);
    }

    #[test]
    fn resize_is_idempotent() {
        let mut camera = Camera::new(800, 600);
        camera.set_aspect(1600, 900);
        let once = (camera.aspect(), camera.view_proj());

        camera.set_aspect(1600, 900);
        assert_eq!(once.0, camera.aspect());
        assert_eq!(once.1, camera.view_proj());
    }

    #[test]
    fn zero_height_does_not_divide_by_zero() {
        let mut camera = Camera::new(800, 600);
        camera.set_aspect(800, 0);
        assert!(camera.aspect().is_finite());
    }

    #[test]
    fn pitch_stays_off_the_poles() {
        let mut camera = Camera::new(800, 600);
        camera.orbit(0.0, 10_000.0);
        assert!(camera.pitch < std::f32::consts::FRAC_PI_2);
        assert!(camera.eye().is_finite());
    }

    #[test]
    fn zoom_clamps_radius() {
        let mut camera = Camera::new(800, 600);
        camera.zoom(10_000.0);
        assert!((camera.radius - MIN_RADIUS).abs() < 1e-3);
        camera.zoom(-10_000.0);
        assert!((camera.radius - MAX_RADIUS).abs() < 1e-3);
    }
}
