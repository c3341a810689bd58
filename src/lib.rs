//! # clearance-sdf
//!
//! Collision distance and configuration repair for sphere-approximated
//! robots.
//!
//! A robot body is a set of bounding spheres; the world is a list of
//! sphere and cuboid obstacles. Signed distance is positive when clear
//! and negative when penetrating. Configurations are processed `RAKE` at
//! a time in SIMD lanes, and colliding configurations are pushed out along
//! a numeric gradient of that distance.
//!
//! ## Features
//!
//! - **Kernels**: sphere-cuboid in squared and exact L2 form, z-aligned
//!   variants, sphere-sphere
//! - **Environment**: scalar scene builder, one-time broadcast to lanes
//! - **Evaluation**: batched and rayon-parallel SDF over configurations
//! - **Repair**: central-difference gradient and `project_to_valid`
//!
//! ## Example
//!
//! ```rust
//! use clearance_sdf::prelude::*;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut scene = Environment::new();
//! scene.add_sphere(Sphere::from_array([0.55, 0.0, 0.25], 0.2));
//! scene.add_cuboid(Cuboid::axis_aligned(Vec3::new(0.0, 0.6, 0.25), Vec3::splat(0.1)));
//! scene.sort();
//!
//! let env = EnvironmentVector::from(&scene);
//! let robot = FloatingSphere::new(0.05).with_scale(2.0);
//!
//! let seed = robot.configuration_for(Vec3::new(0.5, 0.0, 0.25));
//! assert!(robot.sdf_single(&env, &seed) < 0.0);
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let block = project_to_valid(&robot, &seed, &env, &ProjectionConfig::default(), &mut rng);
//! for q in valid_configurations(&robot, &env, &block) {
//!     assert!(robot.sdf_single(&env, &q) >= 0.0);
//! }
//! ```

#![warn(missing_docs)]

pub mod collision;
pub mod environment;
pub mod error;
pub mod eval;
pub mod optimization;
pub mod robot;
pub mod robots;
pub mod shapes;
pub mod simd;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude - commonly used types and functions
pub mod prelude {
    pub use crate::collision::{
        sphere_cuboid, sphere_cuboid_l2, sphere_environment_sdf, sphere_sphere_l2,
        sphere_z_aligned_cuboid, sphere_z_aligned_cuboid_l2, spheres_environment_sdf,
    };
    pub use crate::environment::{Environment, EnvironmentInput, EnvironmentVector};
    pub use crate::error::SdfError;
    pub use crate::eval::{sdf_batch, sdf_batch_parallel, sdf_block};
    pub use crate::optimization::{
        compute_gradient, project_batch_parallel, project_to_valid, valid_configurations,
        ProjectionConfig, DEFAULT_GRADIENT_STEP,
    };
    pub use crate::robot::{ConfigurationBlock, Robot, Spheres};
    pub use crate::robots::{FloatingSphere, PlanarArm};
    pub use crate::shapes::{Cuboid, Sphere};
    pub use crate::simd::{FloatVector, Lane, RAKE};
    pub use glam::Vec3;
}

// Re-exports for convenience
pub use environment::Environment;
pub use error::SdfError;
pub use optimization::{compute_gradient, project_to_valid, ProjectionConfig};
pub use robot::{ConfigurationBlock, Robot};
