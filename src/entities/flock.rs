use glam::{Mat4, Quat, Vec3};

use crate::error::FrameUpdateError;
use crate::geometry::{self, Mesh};
use crate::scene::Entity;

const BIRD_SIZE: f32 = 1.2;
const COLOR: [f32; 3] = [0.15, 0.15, 0.18];

const NEIGHBOR_RADIUS: f32 = 12.0;
const SEPARATION_RADIUS: f32 = 4.0;
const SEPARATION_WEIGHT: f32 = 18.0;
const ALIGNMENT_WEIGHT: f32 = 2.0;
const COHESION_WEIGHT: f32 = 1.2;
const BOUNDS_WEIGHT: f32 = 3.0;
const MIN_SPEED: f32 = 6.0;
const MAX_SPEED: f32 = 16.0;

// Birds roam inside a sphere around this point above the scene
const ROOST: Vec3 = Vec3::new(0.0, 30.0, 0.0);
const ROAM_RADIUS: f32 = 40.0;

#[derive(Debug, Clone, Copy)]
struct Bird {
    position: Vec3,
    velocity: Vec3,
}

/// Boids flock: separation, alignment, cohesion, plus a pull back toward
/// the roost when a bird strays. Each bird is one instance of a shared
/// arrowhead mesh oriented along its velocity.
pub struct Flock {
    mesh: Mesh,
    birds: Vec<Bird>,
}

impl Flock {
    pub fn new(count: usize) -> Self {
        use rand::Rng;
        let mut rng = rand::thread_rng();

        let birds = (0..count)
            .map(|_| {
                let position = ROOST
                    + Vec3::new(
                        rng.gen_range(-0.5..0.5) * ROAM_RADIUS,
                        rng.gen_range(-0.5..0.5) * ROAM_RADIUS * 0.5,
                        rng.gen_range(-0.5..0.5) * ROAM_RADIUS,
                    );
                let heading = Vec3::new(
                    rng.gen_range(-0.5..0.5),
                    rng.gen_range(-0.1..0.1),
                    rng.gen_range(-0.5..0.5),
                )
                .normalize_or(Vec3::Z);

                Bird {
                    position,
                    velocity: heading * (MIN_SPEED + MAX_SPEED) * 0.5,
                }
            })
            .collect();

        Self {
            mesh: geometry::bird(BIRD_SIZE, COLOR),
            birds,
        }
    }

    pub fn len(&self) -> usize {
        self.birds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.birds.is_empty()
    }

    fn steering(&self, index: usize) -> Vec3 {
        let bird = self.birds[index];
        let mut separation = Vec3::ZERO;
        let mut heading_sum = Vec3::ZERO;
        let mut center_sum = Vec3::ZERO;
        let mut neighbors = 0;

        for (j, other) in self.birds.iter().enumerate() {
            if j == index {
                continue;
            }
            let offset = bird.position - other.position;
            let dist = offset.length();
            if dist >= NEIGHBOR_RADIUS {
                continue;
            }
            neighbors += 1;
            heading_sum += other.velocity;
            center_sum += other.position;
            if dist < SEPARATION_RADIUS && dist > 1e-4 {
                separation += offset / (dist * dist);
            }
        }

        let mut accel = separation * SEPARATION_WEIGHT;
        if neighbors > 0 {
            let n = neighbors as f32;
            accel += (heading_sum / n - bird.velocity) * ALIGNMENT_WEIGHT;
            accel += (center_sum / n - bird.position) * COHESION_WEIGHT;
        }

        let from_roost = bird.position - ROOST;
        if from_roost.length() > ROAM_RADIUS {
            accel -= from_roost.normalize() * BOUNDS_WEIGHT * MAX_SPEED;
        }

        accel
    }
}

impl Entity for Flock {
    fn name(&self) -> &str {
        "flock"
    }

    fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    fn instances(&self) -> Vec<Mat4> {
        self.birds
            .iter()
            .map(|bird| {
                let heading = bird.velocity.normalize_or(Vec3::Z);
                Mat4::from_rotation_translation(
                    Quat::from_rotation_arc(Vec3::Z, heading),
                    bird.position,
                )
            })
            .collect()
    }

    fn update(&mut self, delta: f32) -> Result<(), FrameUpdateError> {
        if !delta.is_finite() {
            return Err(FrameUpdateError::new(self.name(), "non-finite frame delta"));
        }

        let accels: Vec<Vec3> = (0..self.birds.len()).map(|i| self.steering(i)).collect();

        for (bird, accel) in self.birds.iter_mut().zip(accels) {
            bird.velocity += accel * delta;
            let speed = bird.velocity.length().clamp(MIN_SPEED, MAX_SPEED);
            bird.velocity = bird.velocity.normalize_or(Vec3::Z) * speed;
            bird.position += bird.velocity * delta;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_flock_spawns_spread_out_near_the_roost() {
        let flock = Flock::new(20);

        for bird in &flock.birds {
            let offset = bird.position - ROOST;
            assert!(offset.x.abs() <= ROAM_RADIUS * 0.5);
            assert!(offset.y.abs() <= ROAM_RADIUS * 0.25);
            assert!(offset.z.abs() <= ROAM_RADIUS * 0.5);
            assert!((bird.velocity.length() - (MIN_SPEED + MAX_SPEED) * 0.5).abs() < 1e-3);
        }

        // Sampled positions, not a single point
        let first = flock.birds[0].position;
        assert!(flock.birds.iter().any(|b| (b.position - first).length() > 1e-3));
    }

    #[test]
    fn flock_keeps_its_bird_count() {
        let mut flock = Flock::new(30);
        for _ in 0..120 {
            flock.update(0.016).unwrap();
        }
        assert_eq!(flock.len(), 30);
        assert_eq!(flock.instances().len(), 30);
    }

    #[test]
    fn birds_move_and_stay_finite() {
        let mut flock = Flock::new(10);
        let before: Vec<Vec3> = flock.birds.iter().map(|b| b.position).collect();

        for _ in 0..60 {
            flock.update(0.016).unwrap();
        }

        let mut moved = 0;
        for (bird, old) in flock.birds.iter().zip(&before) {
            assert!(bird.position.is_finite());
            assert!(bird.velocity.is_finite());
            if (bird.position - *old).length() > 1e-3 {
                moved += 1;
            }
        }
        assert_eq!(moved, 10);
    }

    #[test]
    fn speed_stays_within_limits() {
        let mut flock = Flock::new(20);
        for _ in 0..60 {
            flock.update(0.02).unwrap();
        }
        for bird in &flock.birds {
            let speed = bird.velocity.length();
            assert!(speed >= MIN_SPEED - 1e-3 && speed <= MAX_SPEED + 1e-3);
        }
    }

    #[test]
    fn zero_delta_is_a_no_op() {
        let mut flock = Flock::new(5);
        let before: Vec<Vec3> = flock.birds.iter().map(|b| b.position).collect();
        flock.update(0.0).unwrap();
        for (bird, old) in flock.birds.iter().zip(&before) {
            assert_eq!(bird.position, *old);
        }
    }
}
