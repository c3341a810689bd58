//! Batched signed-distance evaluation
//!
//! Scalar configurations are packed `RAKE` at a time into
//! [`ConfigurationBlock`]s, the tail block is zero-padded, and results are
//! unpacked back to one value per input.

pub mod parallel;

pub use parallel::sdf_batch_parallel;

use crate::environment::Environment;
use crate::robot::{ConfigurationBlock, Robot};
use crate::simd::{FloatVector, RAKE};

/// Signed distance for every lane of a block, as plain scalars
#[inline]
pub fn sdf_block<R, const DIM: usize>(
    robot: &R,
    environment: &Environment<FloatVector>,
    block: &ConfigurationBlock<DIM>,
) -> [f32; RAKE]
where
    R: Robot<DIM> + ?Sized,
{
    robot.sdf(environment, block).to_array()
}

/// Signed distance for any number of configurations (single-threaded)
///
/// Returns exactly one value per configuration, in input order.
pub fn sdf_batch<R, const DIM: usize>(
    robot: &R,
    environment: &Environment<FloatVector>,
    configurations: &[[f32; DIM]],
) -> Vec<f32>
where
    R: Robot<DIM> + ?Sized,
{
    let mut out = Vec::with_capacity(configurations.len());
    for chunk in configurations.chunks(RAKE) {
        let lanes = sdf_block(robot, environment, &ConfigurationBlock::load_padded(chunk));
        out.extend_from_slice(&lanes[..chunk.len()]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::EnvironmentVector;
    use crate::prelude::*;

    fn env() -> EnvironmentVector {
        let env = Environment::new().with_sphere(Sphere::from_array([0.55, 0.0, 0.25], 0.2));
        EnvironmentVector::from(&env)
    }

    #[test]
    fn test_batch_matches_individual() {
        let robot = FloatingSphere::new(0.05);
        let env_v = env();
        let configs: Vec<[f32; 3]> = (0..19)
            .map(|i| [i as f32 * 0.05, 0.0, 0.25])
            .collect();

        let batch = sdf_batch(&robot, &env_v, &configs);
        assert_eq!(batch.len(), configs.len());
        for (q, d) in configs.iter().zip(&batch) {
            let single = robot.sdf_single(&env_v, q);
            assert!((single - d).abs() < 1e-6, "{:?}: {} vs {}", q, single, d);
        }
    }

    #[test]
    fn test_empty_input() {
        let robot = FloatingSphere::new(0.05);
        let none: &[[f32; 3]] = &[];
        assert!(sdf_batch(&robot, &env(), none).is_empty());
    }

    #[test]
    fn test_padded_lanes_are_finite() {
        let robot = PlanarArm::new(Vec3::new(0.0, 0.0, 0.25), [0.4, 0.3, 0.2]);
        let block = ConfigurationBlock::from_configurations(&[[0.1, 0.2, 0.3]]).unwrap();
        let lanes = sdf_block(&robot, &env(), &block);
        assert!(lanes.iter().all(|d| d.is_finite()), "{:?}", lanes);
    }
}
