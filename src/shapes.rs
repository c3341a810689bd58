//! Obstacle and robot-link primitives
//!
//! Shapes are stored as flat parameter structs, generic over the lane type:
//! `Sphere<f32>` / `Cuboid<f32>` in the scalar environment and
//! `Sphere<FloatVector>` / `Cuboid<FloatVector>` (every lane holding the same
//! value) in the lane-wide environment.

use crate::simd::{FloatVector, Lane};
use glam::{EulerRot, Mat3, Vec3};
use serde::{Deserialize, Serialize};

/// Tolerance used to classify a cuboid's third axis as the global z axis
const Z_ALIGNED_EPSILON: f32 = 1e-6;

/// Sphere: center and radius
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sphere<T> {
    /// Center X
    pub x: T,
    /// Center Y
    pub y: T,
    /// Center Z
    pub z: T,
    /// Radius
    pub r: T,
}

/// Oriented box: center, three orthonormal axes and their half-extents
///
/// Axes are not re-normalized anywhere; non-orthonormal axes give
/// meaningless distances.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cuboid<T> {
    /// Center X
    pub x: T,
    /// Center Y
    pub y: T,
    /// Center Z
    pub z: T,

    /// First axis, X component
    pub axis_1_x: T,
    /// First axis, Y component
    pub axis_1_y: T,
    /// First axis, Z component
    pub axis_1_z: T,
    /// Second axis, X component
    pub axis_2_x: T,
    /// Second axis, Y component
    pub axis_2_y: T,
    /// Second axis, Z component
    pub axis_2_z: T,
    /// Third axis, X component
    pub axis_3_x: T,
    /// Third axis, Y component
    pub axis_3_y: T,
    /// Third axis, Z component
    pub axis_3_z: T,

    /// Half-extent along the first axis
    pub axis_1_r: T,
    /// Half-extent along the second axis
    pub axis_2_r: T,
    /// Half-extent along the third axis
    pub axis_3_r: T,
}

impl<T: Lane> Sphere<T> {
    /// Sphere from raw lane values
    #[inline]
    pub fn from_lanes(x: T, y: T, z: T, r: T) -> Self {
        Sphere { x, y, z, r }
    }
}

impl Sphere<f32> {
    /// Sphere at `center` with radius `r`
    pub fn new(center: Vec3, r: f32) -> Self {
        Sphere {
            x: center.x,
            y: center.y,
            z: center.z,
            r,
        }
    }

    /// Sphere from a `[x, y, z]` center array
    pub fn from_array(center: [f32; 3], r: f32) -> Self {
        Self::new(Vec3::from_array(center), r)
    }

    /// Center as a vector
    #[inline]
    pub fn center(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Distance from the world origin to the sphere surface
    pub fn min_distance(&self) -> f32 {
        self.center().length() - self.r
    }

    /// Broadcast into every lane
    #[inline]
    pub fn broadcast(&self) -> Sphere<FloatVector> {
        Sphere {
            x: FloatVector::splat(self.x),
            y: FloatVector::splat(self.y),
            z: FloatVector::splat(self.z),
            r: FloatVector::splat(self.r),
        }
    }
}

impl Cuboid<f32> {
    /// Cuboid from center, three orthonormal axes and half-extents
    pub fn new(center: Vec3, axes: [Vec3; 3], half_extents: Vec3) -> Self {
        let [a1, a2, a3] = axes;
        Cuboid {
            x: center.x,
            y: center.y,
            z: center.z,
            axis_1_x: a1.x,
            axis_1_y: a1.y,
            axis_1_z: a1.z,
            axis_2_x: a2.x,
            axis_2_y: a2.y,
            axis_2_z: a2.z,
            axis_3_x: a3.x,
            axis_3_y: a3.y,
            axis_3_z: a3.z,
            axis_1_r: half_extents.x,
            axis_2_r: half_extents.y,
            axis_3_r: half_extents.z,
        }
    }

    /// Axis-aligned cuboid
    pub fn axis_aligned(center: Vec3, half_extents: Vec3) -> Self {
        Self::new(center, [Vec3::X, Vec3::Y, Vec3::Z], half_extents)
    }

    /// Cuboid rotated by intrinsic XYZ Euler angles (radians)
    ///
    /// The axes are the columns of the rotation matrix.
    pub fn from_euler(center: Vec3, euler_xyz: Vec3, half_extents: Vec3) -> Self {
        let m = Mat3::from_euler(EulerRot::XYZ, euler_xyz.x, euler_xyz.y, euler_xyz.z);
        Self::new(center, [m.x_axis, m.y_axis, m.z_axis], half_extents)
    }

    /// Cuboid rotated about the global z axis only
    pub fn z_rotated(center: Vec3, yaw: f32, half_extents: Vec3) -> Self {
        let (s, c) = yaw.sin_cos();
        Self::new(
            center,
            [Vec3::new(c, s, 0.0), Vec3::new(-s, c, 0.0), Vec3::Z],
            half_extents,
        )
    }

    /// Center as a vector
    #[inline]
    pub fn center(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Axes as vectors
    pub fn axes(&self) -> [Vec3; 3] {
        [
            Vec3::new(self.axis_1_x, self.axis_1_y, self.axis_1_z),
            Vec3::new(self.axis_2_x, self.axis_2_y, self.axis_2_z),
            Vec3::new(self.axis_3_x, self.axis_3_y, self.axis_3_z),
        ]
    }

    /// Half-extents as a vector
    #[inline]
    pub fn half_extents(&self) -> Vec3 {
        Vec3::new(self.axis_1_r, self.axis_2_r, self.axis_3_r)
    }

    /// True if the third axis is the global z axis (either sign)
    pub fn is_z_aligned(&self) -> bool {
        self.axis_3_x.abs() < Z_ALIGNED_EPSILON
            && self.axis_3_y.abs() < Z_ALIGNED_EPSILON
            && (self.axis_3_z.abs() - 1.0).abs() < Z_ALIGNED_EPSILON
    }

    /// Distance from the world origin to the cuboid's bounding sphere
    pub fn min_distance(&self) -> f32 {
        self.center().length() - self.half_extents().length()
    }

    /// Broadcast into every lane
    pub fn broadcast(&self) -> Cuboid<FloatVector> {
        let s = FloatVector::splat;
        Cuboid {
            x: s(self.x),
            y: s(self.y),
            z: s(self.z),
            axis_1_x: s(self.axis_1_x),
            axis_1_y: s(self.axis_1_y),
            axis_1_z: s(self.axis_1_z),
            axis_2_x: s(self.axis_2_x),
            axis_2_y: s(self.axis_2_y),
            axis_2_z: s(self.axis_2_z),
            axis_3_x: s(self.axis_3_x),
            axis_3_y: s(self.axis_3_y),
            axis_3_z: s(self.axis_3_z),
            axis_1_r: s(self.axis_1_r),
            axis_2_r: s(self.axis_2_r),
            axis_3_r: s(self.axis_3_r),
        }
    }
}
