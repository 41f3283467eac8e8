//! Fieldwalk gameplay: first-person touch locomotion over a flat field,
//! picking up scattered collectibles.
//!
//! Scene construction, rendering and UI chrome live with the host; this crate
//! owns the per-frame simulation and exposes the camera, collectible
//! instances and score for drawing.

pub mod autopilot;
pub mod camera;
pub mod collectible;
pub mod config;
pub mod error;
pub mod session;
pub mod spawner;

pub use camera::{CameraController, CameraUniform};
pub use collectible::{Collectible, CollectibleDetector};
pub use config::GameConfig;
pub use error::ConfigError;
pub use session::{Session, TickReport};
pub use spawner::CollectibleSpawner;
