//! Planar serial arm
//!
//! `N` revolute joints about the vertical axis, links lying in the
//! horizontal plane through `base`. Each link is covered by evenly spaced
//! spheres from its start joint to its end joint.

use crate::robot::{ConfigurationBlock, Robot, Spheres};
use crate::shapes::Sphere;
use crate::simd::FloatVector;
use glam::Vec3;

/// Horizontal `N`-link arm
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanarArm<const N: usize> {
    /// Position of the first joint
    pub base: Vec3,
    /// Length of each link
    pub link_lengths: [f32; N],
    /// Radius of every link sphere
    pub link_radius: f32,
    /// Spheres per link (at least 1)
    pub spheres_per_link: usize,
}

impl<const N: usize> PlanarArm<N> {
    /// Arm at `base` with the given link lengths
    pub fn new(base: Vec3, link_lengths: [f32; N]) -> Self {
        PlanarArm {
            base,
            link_lengths,
            link_radius: 0.05,
            spheres_per_link: 4,
        }
    }

    /// Set the link sphere radius
    pub fn with_link_radius(mut self, radius: f32) -> Self {
        self.link_radius = radius;
        self
    }

    /// Set the number of spheres per link
    pub fn with_spheres_per_link(mut self, count: usize) -> Self {
        self.spheres_per_link = count.max(1);
        self
    }

    /// Total number of link spheres
    pub fn sphere_count(&self) -> usize {
        N * self.spheres_per_link.max(1)
    }

    /// End-effector position of a single configuration
    pub fn tip(&self, q: &[f32; N]) -> Vec3 {
        let mut p = self.base;
        let mut theta = 0.0f32;
        for (angle, length) in q.iter().zip(self.link_lengths) {
            theta += angle;
            let (s, c) = theta.sin_cos();
            p += Vec3::new(c, s, 0.0) * length;
        }
        p
    }
}

impl<const N: usize> Robot<N> for PlanarArm<N> {
    fn sphere_fk(&self, q: &ConfigurationBlock<N>) -> Spheres {
        let per_link = self.spheres_per_link.max(1);
        let mut spheres = Spheres::with_capacity(self.sphere_count());

        let mut px = FloatVector::splat(self.base.x);
        let mut py = FloatVector::splat(self.base.y);
        let pz = FloatVector::splat(self.base.z);
        let r = FloatVector::splat(self.link_radius);
        let mut theta = FloatVector::ZERO;

        for (joint, &length) in self.link_lengths.iter().enumerate() {
            theta = theta + q[joint];
            let (s, c) = theta.sin_cos();
            let dx = c * FloatVector::splat(length);
            let dy = s * FloatVector::splat(length);

            // Spheres at t = 1/m, 2/m, ..., 1 along the link
            for k in 1..=per_link {
                let t = FloatVector::splat(k as f32 / per_link as f32);
                spheres.push(Sphere {
                    x: px + dx * t,
                    y: py + dy * t,
                    z: pz,
                    r,
                });
            }

            px = px + dx;
            py = py + dy;
        }

        spheres
    }
}
