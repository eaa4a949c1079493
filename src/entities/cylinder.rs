use glam::{Mat4, Vec3};

use crate::geometry::{self, Mesh};
use crate::scene::Entity;

const RADIUS: f32 = 5.0;
const HEIGHT: f32 = 16.0;
const SEGMENTS: u32 = 32;
const COLOR: [f32; 3] = [0.8, 0.6, 0.2];

/// Static cylinder resting on the ground plane
pub struct Cylinder {
    mesh: Mesh,
    position: Vec3,
}

impl Cylinder {
    pub fn new() -> Self {
        Self {
            mesh: geometry::cylinder(RADIUS, HEIGHT, SEGMENTS, COLOR),
            position: Vec3::new(0.0, HEIGHT / 2.0, 0.0),
        }
    }
}

impl Default for Cylinder {
    fn default() -> Self {
        Self::new()
    }
}

impl Entity for Cylinder {
    fn name(&self) -> &str {
        "cylinder"
    }

    fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    fn instances(&self) -> Vec<Mat4> {
        vec![Mat4::from_translation(self.position)]
    }
}
