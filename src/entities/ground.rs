use glam::Mat4;

use crate::geometry::{self, Mesh};
use crate::scene::Entity;

const SIZE: f32 = 200.0;
const COLOR: [f32; 3] = [0.35, 0.42, 0.3];

/// Static ground plane at y = 0
pub struct Ground {
    mesh: Mesh,
}

impl Ground {
    pub fn new() -> Self {
        Self {
            mesh: geometry::plane(SIZE, SIZE, COLOR),
        }
    }
}

impl Default for Ground {
    fn default() -> Self {
        Self::new()
    }
}

impl Entity for Ground {
    fn name(&self) -> &str {
        "ground"
    }

    fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    fn instances(&self) -> Vec<Mat4> {
        vec![Mat4::IDENTITY]
    }
}
