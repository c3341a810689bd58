//! Sphere vs. environment signed distance
//!
//! Minimum of the Euclidean signed distance over every obstacle. Cuboids
//! in `z_aligned_cuboids` use the z-aligned kernel.

use super::sphere_cuboid::{sphere_cuboid_l2, sphere_z_aligned_cuboid_l2};
use super::sphere_sphere::sphere_sphere_l2;
use crate::environment::Environment;
use crate::robot::Spheres;
use crate::shapes::Sphere;
use crate::simd::{FloatVector, Lane};

/// Clearance reported against an empty environment
///
/// Finite, so empty environments never produce non-finite lanes.
pub const NO_OBSTACLE_CLEARANCE: f32 = f32::MAX;

/// Signed distance from one sphere to the nearest obstacle
#[inline]
pub fn sphere_environment_sdf<T: Lane>(env: &Environment<T>, s: &Sphere<T>) -> T {
    let mut d = T::splat(NO_OBSTACLE_CLEARANCE);

    for o in &env.spheres {
        d = d.min(sphere_sphere_l2(o, s.x, s.y, s.z, s.r));
    }
    for c in &env.cuboids {
        d = d.min(sphere_cuboid_l2(c, s.x, s.y, s.z, s.r));
    }
    for c in &env.z_aligned_cuboids {
        d = d.min(sphere_z_aligned_cuboid_l2(c, s.x, s.y, s.z, s.r));
    }

    d
}

/// Signed distance from a set of robot spheres to the nearest obstacle
pub fn spheres_environment_sdf(env: &Environment<FloatVector>, spheres: &Spheres) -> FloatVector {
    let mut d = FloatVector::splat(NO_OBSTACLE_CLEARANCE);
    for i in 0..spheres.len() {
        d = d.min(sphere_environment_sdf(env, &spheres.sphere(i)));
    }
    d
}

/// True if the sphere penetrates any obstacle in any lane
pub fn sphere_environment_in_collision(
    env: &Environment<FloatVector>,
    s: &Sphere<FloatVector>,
) -> bool {
    sphere_environment_sdf(env, s)
        .to_array()
        .iter()
        .any(|&d| d < 0.0)
}
