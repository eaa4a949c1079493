use glam::{Mat4, Vec3};

use crate::error::FrameUpdateError;
use crate::geometry::{self, Mesh};
use crate::scene::Entity;

const SIZE: f32 = 6.0;
const POSITION: Vec3 = Vec3::new(20.0, 4.0, -12.0);
const ANGULAR_VELOCITY: f32 = 0.8; // rad/s around Y

/// Cube spinning at a fixed angular velocity - the minimal animated entity
pub struct SpinningCube {
    mesh: Mesh,
    angle: f32,
}

impl SpinningCube {
    pub fn new() -> Self {
        Self {
            mesh: geometry::cuboid(Vec3::splat(SIZE), [0.2, 0.5, 0.9]),
            angle: 0.0,
        }
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }
}

impl Default for SpinningCube {
    fn default() -> Self {
        Self::new()
    }
}

impl Entity for SpinningCube {
    fn name(&self) -> &str {
        "cube"
    }

    fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    fn instances(&self) -> Vec<Mat4> {
        vec![Mat4::from_translation(POSITION) * Mat4::from_rotation_y(self.angle)]
    }

    fn update(&mut self, delta: f32) -> Result<(), FrameUpdateError> {
        if !delta.is_finite() {
            return Err(FrameUpdateError::new(self.name(), "non-finite frame delta"));
        }
        self.angle = (self.angle + ANGULAR_VELOCITY * delta) % std::f32::consts::TAU;
        Ok(())
    }
}
