mod cube;
mod cylinder;
mod flock;
mod ground;
mod helpers;

pub use cube::SpinningCube;
pub use cylinder::Cylinder;
pub use flock::Flock;
pub use ground::Ground;
pub use helpers::{AxesHelper, SpotLightHelper};
