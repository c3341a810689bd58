//! Parallel batched evaluation
//!
//! Configuration blocks are independent, so blocks are distributed across
//! the rayon pool while the lane-wide environment is shared read-only.

use super::sdf_block;
use crate::environment::Environment;
use crate::robot::{ConfigurationBlock, Robot};
use crate::simd::{FloatVector, RAKE};
use rayon::prelude::*;

/// Signed distance for any number of configurations (parallel)
///
/// Same output as [`sdf_batch`](super::sdf_batch): one value per input
/// configuration, in input order.
///
/// # Arguments
/// * `robot` - Robot model shared by every worker
/// * `environment` - Lane-wide environment
/// * `configurations` - Scalar configurations to evaluate
pub fn sdf_batch_parallel<R, const DIM: usize>(
    robot: &R,
    environment: &Environment<FloatVector>,
    configurations: &[[f32; DIM]],
) -> Vec<f32>
where
    R: Robot<DIM> + Sync + ?Sized,
{
    configurations
        .par_chunks(RAKE)
        .flat_map_iter(|chunk| {
            let lanes = sdf_block(robot, environment, &ConfigurationBlock::load_padded(chunk));
            lanes.into_iter().take(chunk.len())
        })
        .collect()
}
