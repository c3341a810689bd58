//! Configuration repair
//!
//! - [`compute_gradient`]: central-difference gradient of a robot SDF
//! - [`project_to_valid`]: noisy restarts pushed out of collision
//! - [`valid_configurations`]: lanes that ended collision-free
//! - [`project_batch_parallel`]: many seeds across the rayon pool

mod config;
mod gradient;
mod project;

pub use config::ProjectionConfig;
pub use gradient::{compute_gradient, DEFAULT_GRADIENT_STEP};
pub use project::{project_batch_parallel, project_to_valid, valid_configurations};
