//! Configuration repair by penetration-weighted gradient steps
//!
//! # Algorithm
//!
//! ```text
//! q[lane][i] = seed[i] + U(-noise, noise)
//! repeat steps:
//!     d = sdf(q)
//!     g = gradient(q)
//!     m = learning_rate * max(-d, 0)
//!     q[i] += g[i] * m
//! ```
//!
//! Lanes with non-negative distance get a zero step and stay where they
//! are. Colliding lanes move along the raw gradient, scaled by their
//! penetration depth. There is no normalization and no early exit; the
//! returned block may still contain colliding lanes.

use super::config::ProjectionConfig;
use super::gradient::compute_gradient;
use crate::environment::Environment;
use crate::error::SdfError;
use crate::robot::{ConfigurationBlock, Robot};
use crate::simd::{FloatVector, RAKE};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use tracing::{debug, trace, Level};

/// Seed plus independent uniform noise in every lane and joint
fn noised_block<G: Rng, const DIM: usize>(
    seed: &[f32; DIM],
    noise_scale: f32,
    rng: &mut G,
) -> ConfigurationBlock<DIM> {
    let mut block = ConfigurationBlock::zeros();
    for (joint, &value) in seed.iter().enumerate() {
        let lanes: [f32; RAKE] =
            std::array::from_fn(|_| value + rng.gen_range(-1.0f32..=1.0) * noise_scale);
        block[joint] = FloatVector::new(lanes);
    }
    block
}

#[inline]
fn count_valid(distance: FloatVector) -> usize {
    distance.to_array().iter().filter(|&&d| d >= 0.0).count()
}

/// Push `RAKE` noisy copies of `seed` out of collision
///
/// Runs exactly `config.steps` iterations. With `steps == 0` the noised
/// initialization is returned as-is. The caller should re-check each lane
/// with [`valid_configurations`] or [`Robot::sdf`].
///
/// `config` is used as given; run [`ProjectionConfig::validate`] first if
/// it comes from outside.
///
/// # Arguments
/// * `robot` - Robot model
/// * `seed` - Configuration every lane starts near
/// * `environment` - Lane-wide environment
/// * `config` - Iterations, learning rate, noise, gradient step
/// * `rng` - Noise source
///
/// # Example
/// ```
/// use clearance_sdf::prelude::*;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let env = Environment::new().with_sphere(Sphere::from_array([0.55, 0.0, 0.25], 0.2));
/// let env = EnvironmentVector::from(&env);
/// let robot = FloatingSphere::new(0.05);
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let config = ProjectionConfig::default().with_noise_scale(0.05);
/// let block = project_to_valid(&robot, &[0.5, 0.0, 0.25], &env, &config, &mut rng);
/// let valid = valid_configurations(&robot, &env, &block);
/// assert!(valid.len() <= RAKE);
/// ```
pub fn project_to_valid<R, G, const DIM: usize>(
    robot: &R,
    seed: &[f32; DIM],
    environment: &Environment<FloatVector>,
    config: &ProjectionConfig,
    rng: &mut G,
) -> ConfigurationBlock<DIM>
where
    R: Robot<DIM> + ?Sized,
    G: Rng,
{
    debug!(
        dimension = DIM,
        steps = config.steps,
        learning_rate = config.learning_rate,
        noise_scale = config.noise_scale,
        "projecting seed"
    );

    let mut state = noised_block(seed, config.noise_scale, rng);
    let learning_rate = FloatVector::splat(config.learning_rate);

    for step in 0..config.steps {
        let distance = robot.sdf(environment, &state);
        let gradient = compute_gradient(robot, environment, &state, config.gradient_step);
        let magnitude = learning_rate * (-distance).max(FloatVector::ZERO);

        for joint in 0..DIM {
            state[joint] = state[joint] + gradient[joint] * magnitude;
        }

        trace!(step, colliding = RAKE - count_valid(distance), "projection step");
    }

    state
}

/// Lanes of `block` whose signed distance is non-negative
///
/// Returned in lane order.
pub fn valid_configurations<R, const DIM: usize>(
    robot: &R,
    environment: &Environment<FloatVector>,
    block: &ConfigurationBlock<DIM>,
) -> Vec<[f32; DIM]>
where
    R: Robot<DIM> + ?Sized,
{
    let distance = robot.sdf(environment, block).to_array();
    block
        .configurations()
        .into_iter()
        .zip(distance)
        .filter(|(_, d)| *d >= 0.0)
        .map(|(q, _)| q)
        .collect()
}

/// Run [`project_to_valid`] for many seeds on the rayon pool
///
/// Seed `i` gets its own `StdRng` seeded with `base_seed + i`, so the
/// output depends only on the inputs, not on scheduling. One block is
/// returned per seed, in seed order.
pub fn project_batch_parallel<R, const DIM: usize>(
    robot: &R,
    seeds: &[[f32; DIM]],
    environment: &Environment<FloatVector>,
    config: &ProjectionConfig,
    base_seed: u64,
) -> Result<Vec<ConfigurationBlock<DIM>>, SdfError>
where
    R: Robot<DIM> + Sync + ?Sized,
{
    config.validate()?;

    let blocks: Vec<ConfigurationBlock<DIM>> = seeds
        .par_iter()
        .enumerate()
        .map(|(index, seed)| {
            let mut rng = StdRng::seed_from_u64(base_seed.wrapping_add(index as u64));
            project_to_valid(robot, seed, environment, config, &mut rng)
        })
        .collect();

    // Re-checking every block costs one SDF call per seed
    if tracing::enabled!(Level::DEBUG) {
        let valid: usize = blocks
            .iter()
            .map(|block| count_valid(robot.sdf(environment, block)))
            .sum();
        debug!(
            seeds = seeds.len(),
            steps = config.steps,
            valid_lanes = valid,
            total_lanes = blocks.len() * RAKE,
            "batch projection finished"
        );
    }

    Ok(blocks)
}
