use std::f32::consts::TAU;

use glam::{Mat4, Vec3};

use crate::geometry::{self, Mesh};
use crate::scene::{Entity, SpotLight};

const AXIS_LENGTH: f32 = 50.0;
const WIRE_THICKNESS: f32 = 0.15;
const CONE_EDGES: u32 = 8;

/// Debug visualization of the world axes: +X red, +Y green, +Z blue
pub struct AxesHelper {
    mesh: Mesh,
}

impl AxesHelper {
    pub fn new() -> Self {
        let mut mesh = geometry::line_segment(
            Vec3::ZERO,
            Vec3::X * AXIS_LENGTH,
            WIRE_THICKNESS,
            [1.0, 0.0, 0.0],
        );
        mesh.merge(geometry::line_segment(
            Vec3::ZERO,
            Vec3::Y * AXIS_LENGTH,
            WIRE_THICKNESS,
            [0.0, 1.0, 0.0],
        ));
        mesh.merge(geometry::line_segment(
            Vec3::ZERO,
            Vec3::Z * AXIS_LENGTH,
            WIRE_THICKNESS,
            [0.0, 0.0, 1.0],
        ));
        Self { mesh }
    }
}

impl Default for AxesHelper {
    fn default() -> Self {
        Self::new()
    }
}

impl Entity for AxesHelper {
    fn name(&self) -> &str {
        "axes"
    }

    fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    fn instances(&self) -> Vec<Mat4> {
        vec![Mat4::IDENTITY]
    }
}

/// Wire cone visualizing the spot light's position, direction and beam
/// angle: edge rays from the apex to a rim ring at the target distance
pub struct SpotLightHelper {
    mesh: Mesh,
}

impl SpotLightHelper {
    pub fn new(spot: &SpotLight) -> Self {
        let apex = spot.position;
        let axis = spot.target - spot.position;
        let reach = axis.length();
        let direction = axis.normalize_or(-Vec3::Y);
        let rim_radius = spot.angle.tan() * reach;
        let rim_center = apex + direction * reach;
        let (side, up) = direction.any_orthonormal_pair();

        let rim_point = |i: u32| {
            let angle = i as f32 / CONE_EDGES as f32 * TAU;
            rim_center + (side * angle.cos() + up * angle.sin()) * rim_radius
        };

        let mut mesh = Mesh::default();
        for i in 0..CONE_EDGES {
            mesh.merge(geometry::line_segment(
                apex,
                rim_point(i),
                WIRE_THICKNESS,
                spot.color,
            ));
            mesh.merge(geometry::line_segment(
                rim_point(i),
                rim_point(i + 1),
                WIRE_THICKNESS,
                spot.color,
            ));
        }
        Self { mesh }
    }
}

impl Entity for SpotLightHelper {
    fn name(&self) -> &str {
        "spot-helper"
    }

    fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    fn instances(&self) -> Vec<Mat4> {
        vec![Mat4::IDENTITY]
    }
}
