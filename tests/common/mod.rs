//! Common test helpers for clearance-sdf integration tests

use clearance_sdf::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// ============================================================================
// Standard scenes
// ============================================================================

/// Single spherical obstacle of radius 0.2 at (0.55, 0, 0.25)
pub fn sphere_obstacle() -> EnvironmentInput {
    Environment::new().with_sphere(Sphere::from_array([0.55, 0.0, 0.25], 0.2))
}

/// Tabletop: floor slab, a rotated box, a z-aligned box and two spheres
#[allow(dead_code)]
pub fn tabletop() -> EnvironmentInput {
    let mut env = Environment::new();
    env.add_cuboid(Cuboid::axis_aligned(
        Vec3::new(0.0, 0.0, -0.05),
        Vec3::new(1.5, 1.5, 0.05),
    ));
    env.add_cuboid(Cuboid::from_euler(
        Vec3::new(0.4, -0.4, 0.3),
        Vec3::new(0.3, 0.2, 0.5),
        Vec3::new(0.1, 0.15, 0.2),
    ));
    env.add_cuboid(Cuboid::z_rotated(
        Vec3::new(-0.4, 0.4, 0.2),
        0.7,
        Vec3::new(0.12, 0.08, 0.2),
    ));
    env.add_sphere(Sphere::from_array([0.55, 0.0, 0.25], 0.2));
    env.add_sphere(Sphere::from_array([-0.3, -0.5, 0.4], 0.1));
    env.sort();
    env
}

/// Free-flying sphere whose joint space is twice as coarse as world space
#[allow(dead_code)]
pub fn floating_sphere() -> FloatingSphere {
    FloatingSphere::new(0.05).with_scale(2.0)
}

/// One-link arm whose tip sphere sits 0.14 from the obstacle center at `q = 0`
///
/// Near `q = 0` the tip moves almost tangentially to the obstacle, so a
/// colliding lane needs many small steps before it clears the surface.
#[allow(dead_code)]
pub fn reaching_arm() -> PlanarArm<1> {
    PlanarArm::new(Vec3::new(-0.85, 0.0, 0.25), [1.54]).with_spheres_per_link(1)
}

// ============================================================================
// Random inputs
// ============================================================================

/// `count` configurations uniform in `[-range, range]^DIM`
#[allow(dead_code)]
pub fn random_configurations<const DIM: usize>(
    count: usize,
    range: f32,
    seed: u64,
) -> Vec<[f32; DIM]> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| std::array::from_fn(|_| rng.gen_range(-range..=range)))
        .collect()
}

/// Random oriented cuboid near the origin
#[allow(dead_code)]
pub fn random_cuboid(rng: &mut StdRng) -> Cuboid<f32> {
    Cuboid::from_euler(
        Vec3::new(
            rng.gen_range(-0.5..0.5),
            rng.gen_range(-0.5..0.5),
            rng.gen_range(-0.5..0.5),
        ),
        Vec3::new(
            rng.gen_range(-3.0..3.0),
            rng.gen_range(-3.0..3.0),
            rng.gen_range(-3.0..3.0),
        ),
        Vec3::new(
            rng.gen_range(0.05..0.4),
            rng.gen_range(0.05..0.4),
            rng.gen_range(0.05..0.4),
        ),
    )
}

/// Random sphere near the origin
#[allow(dead_code)]
pub fn random_sphere(rng: &mut StdRng) -> Sphere<f32> {
    Sphere::from_array(
        [
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
        ],
        rng.gen_range(0.01..0.3),
    )
}

// ============================================================================
// Assertion helpers
// ============================================================================

/// Fraction of a block's lanes with non-negative signed distance
#[allow(dead_code)]
pub fn valid_fraction<R: Robot<DIM>, const DIM: usize>(
    robot: &R,
    env: &EnvironmentVector,
    block: &ConfigurationBlock<DIM>,
) -> f32 {
    valid_configurations(robot, env, block).len() as f32 / RAKE as f32
}

/// Assert every lane of a lane vector is finite
#[allow(dead_code)]
pub fn assert_all_finite(values: FloatVector, msg: &str) {
    let lanes = values.to_array();
    assert!(
        lanes.iter().all(|v| v.is_finite()),
        "{}: non-finite lane in {:?}",
        msg,
        lanes
    );
}
