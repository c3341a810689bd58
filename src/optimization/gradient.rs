//! Central-difference gradient of a robot SDF in joint space
//!
//! Each joint row is perturbed by `+h` and `-h` in every lane at once,
//! leaving the other rows untouched, so one call costs exactly
//! `2 * DIM` SDF evaluations.

use crate::environment::Environment;
use crate::robot::{ConfigurationBlock, Robot};
use crate::simd::FloatVector;

/// Default finite-difference step
pub const DEFAULT_GRADIENT_STEP: f32 = 1e-4;

/// Estimate `d sdf / d q` for every lane of `state`
///
/// Returns `(f(q + h e_i) - f(q - h e_i)) / (2h)` per joint `i` and lane.
/// `h` must be positive; it is a tunable, too small a value loses the
/// difference to f32 cancellation.
///
/// # Arguments
/// * `robot` - Robot whose [`Robot::sdf`] is differentiated
/// * `environment` - Lane-wide environment
/// * `state` - Block to differentiate at
/// * `h` - Finite-difference step
#[inline]
pub fn compute_gradient<R, const DIM: usize>(
    robot: &R,
    environment: &Environment<FloatVector>,
    state: &ConfigurationBlock<DIM>,
    h: f32,
) -> ConfigurationBlock<DIM>
where
    R: Robot<DIM> + ?Sized,
{
    let step = FloatVector::splat(h);
    let inv_2h = FloatVector::splat(1.0 / (2.0 * h));

    let mut perturbed = *state;
    let mut gradient = ConfigurationBlock::zeros();

    for joint in 0..DIM {
        let original = perturbed[joint];

        perturbed[joint] = original + step;
        let forward = robot.sdf(environment, &perturbed);

        perturbed[joint] = original - step;
        let backward = robot.sdf(environment, &perturbed);

        perturbed[joint] = original;
        gradient[joint] = (forward - backward) * inv_2h;
    }

    gradient
}
