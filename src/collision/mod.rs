//! Closed-form sphere distance kernels
//!
//! All kernels are generic over [`Lane`](crate::simd::Lane) and work
//! unchanged on scalar (`f32`) and lane-wide (`FloatVector`) shapes.
//!
//! # Example
//!
//! ```rust
//! use clearance_sdf::collision::sphere_cuboid_l2;
//! use clearance_sdf::prelude::*;
//!
//! let floor = Cuboid::axis_aligned(Vec3::new(0.0, 0.0, -0.1), Vec3::new(1.0, 1.0, 0.1));
//! // Sphere of radius 0.05 resting 0.1 above the floor
//! let d = sphere_cuboid_l2(&floor, 0.0, 0.0, 0.15, 0.05);
//! assert!((d - 0.1).abs() < 1e-6);
//! ```

mod environment;
mod sphere_cuboid;
mod sphere_sphere;

pub use environment::{
    sphere_environment_in_collision, sphere_environment_sdf, spheres_environment_sdf,
    NO_OBSTACLE_CLEARANCE,
};
pub use sphere_cuboid::{
    sphere_cuboid, sphere_cuboid_l2, sphere_cuboid_l2_sphere, sphere_cuboid_sphere,
    sphere_z_aligned_cuboid, sphere_z_aligned_cuboid_l2, sphere_z_aligned_cuboid_l2_sphere,
    sphere_z_aligned_cuboid_sphere,
};
pub use sphere_sphere::{sphere_sphere_l2, sphere_sphere_l2_sphere, sphere_sphere_sql2};
