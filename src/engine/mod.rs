pub mod config;
#[allow(clippy::module_inception)]
pub mod engine;
pub mod fan;
pub mod ray;
pub mod reorder;
pub mod visibility;

pub use config::{ConfigError, EngineConfig};
pub use engine::Engine;
pub use fan::RayFan;
pub use ray::{RayCaster, RayHit};
pub use visibility::{CandidateList, VisibilitySet};
