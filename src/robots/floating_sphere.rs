//! Free-flying sphere
//!
//! Three prismatic joints move one sphere: `center = origin + scale * q`.
//! `scale` converts joint units to meters, so the SDF gradient in joint
//! space has magnitude `scale` wherever it is defined.

use crate::robot::{ConfigurationBlock, Robot, Spheres};
use crate::shapes::Sphere;
use crate::simd::FloatVector;
use glam::Vec3;

/// One sphere positioned directly by three joint coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatingSphere {
    /// Center at the zero configuration
    pub origin: Vec3,
    /// Meters per joint unit
    pub scale: f32,
    /// Sphere radius
    pub radius: f32,
}

impl FloatingSphere {
    /// Sphere of `radius` at the world origin, one meter per joint unit
    pub fn new(radius: f32) -> Self {
        FloatingSphere {
            origin: Vec3::ZERO,
            scale: 1.0,
            radius,
        }
    }

    /// Set the center at the zero configuration
    pub fn with_origin(mut self, origin: Vec3) -> Self {
        self.origin = origin;
        self
    }

    /// Set meters per joint unit
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Joint coordinates that put the center at `center`
    pub fn configuration_for(&self, center: Vec3) -> [f32; 3] {
        ((center - self.origin) / self.scale).to_array()
    }
}

impl Robot<3> for FloatingSphere {
    fn sphere_fk(&self, q: &ConfigurationBlock<3>) -> Spheres {
        let scale = FloatVector::splat(self.scale);
        let mut spheres = Spheres::with_capacity(1);
        spheres.push(Sphere {
            x: FloatVector::splat(self.origin.x) + q[0] * scale,
            y: FloatVector::splat(self.origin.y) + q[1] * scale,
            z: FloatVector::splat(self.origin.z) + q[2] * scale,
            r: FloatVector::splat(self.radius),
        });
        spheres
    }
}
