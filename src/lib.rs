pub mod app;
pub mod camera;
pub mod cli;
pub mod clock;
pub mod entities;
pub mod error;
pub mod geometry;
pub mod panel;
pub mod renderer;
pub mod scene;
pub mod stats;

pub use app::App;
pub use camera::Camera;
pub use clock::FrameClock;
pub use error::{FrameUpdateError, InitError};
pub use panel::ControlPanel;
pub use scene::{AmbientLight, Entity, Scene, SpotLight};
