use glam::{Mat4, Vec3};

use crate::entities::{AxesHelper, Cylinder, Flock, Ground, SpinningCube, SpotLightHelper};
use crate::error::FrameUpdateError;
use crate::geometry::Mesh;

/// Uniform light applied to every surface regardless of direction
#[derive(Debug, Clone, Copy)]
pub struct AmbientLight {
    pub color: [f32; 3],
    pub intensity: f32,
}

/// Cone-shaped light with distance decay and a soft penumbra edge.
/// `cast_shadow` is declarative scene data; the forward pass has no
/// shadow-map stage.
#[derive(Debug, Clone, Copy)]
pub struct SpotLight {
    pub color: [f32; 3],
    pub intensity: f32,
    pub position: Vec3,
    pub target: Vec3,
    pub angle: f32,
    pub penumbra: f32,
    pub decay: f32,
    pub cast_shadow: bool,
}

/// Anything that lives in the scene. Static entities keep the default
/// no-op `update`; animated ones advance their own state from the frame
/// delta. A failed update is reported, never panicked, so one entity
/// cannot halt the frame loop.
pub trait Entity {
    fn name(&self) -> &str;

    /// Geometry shared by all instances of this entity
    fn mesh(&self) -> &Mesh;

    /// Model matrices, one per drawn instance
    fn instances(&self) -> Vec<Mat4>;

    fn update(&mut self, _delta: f32) -> Result<(), FrameUpdateError> {
        Ok(())
    }
}

/// The single authoritative registry: the render pass draws and the frame
/// loop updates the same list, in registration order.
pub struct Scene {
    entities: Vec<Box<dyn Entity>>,
    pub ambient: AmbientLight,
    pub spot: SpotLight,
}

impl Scene {
    pub fn new(ambient: AmbientLight, spot: SpotLight) -> Self {
        Self {
            entities: Vec::new(),
            ambient,
            spot,
        }
    }

    /// One-shot composition of the demo scene: lights plus the declared
    /// active entity set. Runs once before the frame loop starts.
    pub fn compose() -> Self {
        let ambient = AmbientLight {
            color: [1.0, 1.0, 1.0],
            intensity: 1.0,
        };
        let spot = SpotLight {
            color: [0.0, 0.0, 1.0],
            intensity: 50.0,
            position: Vec3::new(5.0, 15.0, 5.0),
            target: Vec3::ZERO,
            angle: std::f32::consts::PI / 5.0,
            penumbra: 0.3,
            decay: 0.3,
            cast_shadow: true,
        };

        let mut scene = Self::new(ambient, spot);
        scene.add(Box::new(Ground::new()));
        scene.add(Box::new(Cylinder::new()));
        scene.add(Box::new(SpinningCube::new()));
        scene.add(Box::new(Flock::new(40)));
        // Debug visualizations: world axes and the spot light's beam cone
        scene.add(Box::new(AxesHelper::new()));
        scene.add(Box::new(SpotLightHelper::new(&spot)));
        scene
    }

    pub fn add(&mut self, entity: Box<dyn Entity>) {
        self.entities.push(entity);
    }

    pub fn entities(&self) -> &[Box<dyn Entity>] {
        &self.entities
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Advance every entity by `delta` seconds, in registration order.
    /// A failing entity is logged and skipped for this frame; the rest
    /// still update. Returns the number of failures.
    pub fn update_all(&mut self, delta: f32) -> usize {
        let mut failures = 0;
        for entity in &mut self.entities {
            if let Err(err) = entity.update(delta) {
                log::warn!("skipping entity this frame: {err}");
                failures += 1;
            }
        }
        failures
    }
}
