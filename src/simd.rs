//! Lane-width vector types for rake-batched evaluation
//!
//! Every kernel in this crate is written once against the [`Lane`] trait and
//! instantiated twice: with `f32` for the scalar environment and with
//! [`FloatVector`] (8 lanes) for the lane-wide environment.
//!
//! ```text
//! row q0: [q0_0, q0_1, q0_2, q0_3, q0_4, q0_5, q0_6, q0_7]  <- one f32x8
//! row q1: [q1_0, q1_1, q1_2, q1_3, q1_4, q1_5, q1_6, q1_7]  <- one f32x8
//! ...
//! ```
//!
//! Lanes never interact: lane `k` of every output depends only on lane `k`
//! of every input.

use std::ops::{Add, Mul, Neg, Sub};
use wide::f32x8;

/// Lane-wide float vector (8 independent `f32` lanes)
pub type FloatVector = f32x8;

/// Number of lanes in a [`FloatVector`] (the rake of a configuration block)
pub const RAKE: usize = 8;

/// Arithmetic shared by scalar and lane-wide floats.
///
/// Implemented for `f32` and [`FloatVector`]. Operations are elementwise.
pub trait Lane:
    Copy + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self> + Neg<Output = Self>
{
    /// Zero in every lane
    const ZERO: Self;

    /// Broadcast a scalar into every lane
    fn splat(value: f32) -> Self;

    /// Elementwise absolute value
    fn abs(self) -> Self;

    /// Elementwise maximum
    fn max(self, other: Self) -> Self;

    /// Elementwise minimum
    fn min(self, other: Self) -> Self;

    /// Elementwise square root
    fn sqrt(self) -> Self;
}

impl Lane for f32 {
    const ZERO: Self = 0.0;

    #[inline(always)]
    fn splat(value: f32) -> Self {
        value
    }

    #[inline(always)]
    fn abs(self) -> Self {
        f32::abs(self)
    }

    #[inline(always)]
    fn max(self, other: Self) -> Self {
        f32::max(self, other)
    }

    #[inline(always)]
    fn min(self, other: Self) -> Self {
        f32::min(self, other)
    }

    #[inline(always)]
    fn sqrt(self) -> Self {
        f32::sqrt(self)
    }
}

impl Lane for FloatVector {
    const ZERO: Self = f32x8::ZERO;

    #[inline(always)]
    fn splat(value: f32) -> Self {
        f32x8::splat(value)
    }

    #[inline(always)]
    fn abs(self) -> Self {
        f32x8::abs(self)
    }

    #[inline(always)]
    fn max(self, other: Self) -> Self {
        f32x8::max(self, other)
    }

    #[inline(always)]
    fn min(self, other: Self) -> Self {
        f32x8::min(self, other)
    }

    #[inline(always)]
    fn sqrt(self) -> Self {
        f32x8::sqrt(self)
    }
}

/// `ax * bx + ay * by`
#[inline(always)]
pub fn dot_2<T: Lane>(ax: T, ay: T, bx: T, by: T) -> T {
    ax * bx + ay * by
}

/// `ax * bx + ay * by + az * bz`
#[inline(always)]
pub fn dot_3<T: Lane>(ax: T, ay: T, az: T, bx: T, by: T, bz: T) -> T {
    ax * bx + ay * by + az * bz
}

/// Load up to [`RAKE`] scalars into a lane vector, zero-padding the tail.
///
/// Extra values beyond [`RAKE`] are ignored.
#[inline]
pub fn lanes_from_slice(values: &[f32]) -> FloatVector {
    let mut lanes = [0.0f32; RAKE];
    for (lane, &v) in lanes.iter_mut().zip(values) {
        *lane = v;
    }
    f32x8::new(lanes)
}
