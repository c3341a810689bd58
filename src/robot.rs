//! Robot capability interface and rake-batched configurations
//!
//! A robot is anything that can turn a [`ConfigurationBlock`] into link
//! spheres and a signed distance. The crate never looks inside forward
//! kinematics; solvers only call [`Robot::sdf`].
//!
//! # Memory Layout
//!
//! ```text
//! ConfigurationBlock<DIM>:
//!   rows[0]: [q0 of lane 0, q0 of lane 1, ..., q0 of lane 7]
//!   rows[1]: [q1 of lane 0, q1 of lane 1, ..., q1 of lane 7]
//!   ...
//!   rows[DIM - 1]
//! ```

use crate::collision::spheres_environment_sdf;
use crate::environment::Environment;
use crate::error::SdfError;
use crate::shapes::Sphere;
use crate::simd::{FloatVector, RAKE};
use std::ops::{Index, IndexMut};

/// `RAKE` configurations of a `DIM`-joint robot, one lane vector per joint
#[derive(Debug, Clone, Copy)]
pub struct ConfigurationBlock<const DIM: usize> {
    rows: [FloatVector; DIM],
}

impl<const DIM: usize> Default for ConfigurationBlock<DIM> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<const DIM: usize> ConfigurationBlock<DIM> {
    /// Block with every lane at the zero configuration
    pub fn zeros() -> Self {
        ConfigurationBlock {
            rows: [FloatVector::ZERO; DIM],
        }
    }

    /// Block from joint rows
    pub fn from_rows(rows: [FloatVector; DIM]) -> Self {
        ConfigurationBlock { rows }
    }

    /// Same configuration in every lane
    pub fn broadcast(configuration: &[f32; DIM]) -> Self {
        ConfigurationBlock {
            rows: configuration.map(FloatVector::splat),
        }
    }

    /// Pack up to `RAKE` configurations, one per lane
    ///
    /// Unused lanes hold the zero configuration, which is still evaluated
    /// and must stay finite.
    pub fn from_configurations(configurations: &[[f32; DIM]]) -> Result<Self, SdfError> {
        if configurations.len() > RAKE {
            return Err(SdfError::TooManyConfigurations {
                given: configurations.len(),
                rake: RAKE,
            });
        }
        Ok(Self::load_padded(configurations))
    }

    /// Pack the first `RAKE` configurations, zero-padding missing lanes
    pub fn load_padded(configurations: &[[f32; DIM]]) -> Self {
        let mut rows = [[0.0f32; RAKE]; DIM];
        for (lane, configuration) in configurations.iter().take(RAKE).enumerate() {
            for (row, &value) in rows.iter_mut().zip(configuration) {
                row[lane] = value;
            }
        }
        ConfigurationBlock {
            rows: rows.map(FloatVector::new),
        }
    }

    /// Joint rows
    #[inline]
    pub fn rows(&self) -> &[FloatVector; DIM] {
        &self.rows
    }

    /// Configuration held in one lane
    pub fn configuration(&self, lane: usize) -> [f32; DIM] {
        debug_assert!(lane < RAKE);
        self.rows.map(|row| row.to_array()[lane])
    }

    /// Every lane's configuration, in lane order
    pub fn configurations(&self) -> [[f32; DIM]; RAKE] {
        let rows = self.rows.map(|row| row.to_array());
        std::array::from_fn(|lane| std::array::from_fn(|joint| rows[joint][lane]))
    }
}

impl<const DIM: usize> Index<usize> for ConfigurationBlock<DIM> {
    type Output = FloatVector;

    #[inline]
    fn index(&self, joint: usize) -> &FloatVector {
        &self.rows[joint]
    }
}

impl<const DIM: usize> IndexMut<usize> for ConfigurationBlock<DIM> {
    #[inline]
    fn index_mut(&mut self, joint: usize) -> &mut FloatVector {
        &mut self.rows[joint]
    }
}

/// Lane-wide link spheres produced by forward kinematics
#[derive(Debug, Clone, Default)]
pub struct Spheres {
    /// Center X per link sphere
    pub x: Vec<FloatVector>,
    /// Center Y per link sphere
    pub y: Vec<FloatVector>,
    /// Center Z per link sphere
    pub z: Vec<FloatVector>,
    /// Radius per link sphere
    pub r: Vec<FloatVector>,
}

impl Spheres {
    /// Empty set with room for `capacity` spheres
    pub fn with_capacity(capacity: usize) -> Self {
        Spheres {
            x: Vec::with_capacity(capacity),
            y: Vec::with_capacity(capacity),
            z: Vec::with_capacity(capacity),
            r: Vec::with_capacity(capacity),
        }
    }

    /// Append one sphere
    #[inline]
    pub fn push(&mut self, sphere: Sphere<FloatVector>) {
        self.x.push(sphere.x);
        self.y.push(sphere.y);
        self.z.push(sphere.z);
        self.r.push(sphere.r);
    }

    /// Number of spheres
    #[inline]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// True if there are no spheres
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Sphere `i`, all lanes
    #[inline]
    pub fn sphere(&self, i: usize) -> Sphere<FloatVector> {
        Sphere {
            x: self.x[i],
            y: self.y[i],
            z: self.z[i],
            r: self.r[i],
        }
    }

    /// Sphere `i` as seen by one lane
    pub fn lane(&self, i: usize, lane: usize) -> Sphere<f32> {
        Sphere {
            x: self.x[i].to_array()[lane],
            y: self.y[i].to_array()[lane],
            z: self.z[i].to_array()[lane],
            r: self.r[i].to_array()[lane],
        }
    }
}

/// Robot model: joint count, sphere forward kinematics and signed distance
///
/// `sdf` must be pure, deterministic, lane-independent, and finite on
/// zero-padded lanes. Positive values are clearance; negative values are
/// penetration depth.
pub trait Robot<const DIM: usize> {
    /// Number of joint coordinates
    const DIMENSION: usize = DIM;

    /// Link spheres for every lane of `q`
    fn sphere_fk(&self, q: &ConfigurationBlock<DIM>) -> Spheres;

    /// Minimum signed distance from any link sphere to any obstacle
    fn sdf(
        &self,
        environment: &Environment<FloatVector>,
        q: &ConfigurationBlock<DIM>,
    ) -> FloatVector {
        spheres_environment_sdf(environment, &self.sphere_fk(q))
    }

    /// Signed distance of a single configuration
    fn sdf_single(
        &self,
        environment: &Environment<FloatVector>,
        configuration: &[f32; DIM],
    ) -> f32 {
        self.sdf(environment, &ConfigurationBlock::broadcast(configuration))
            .to_array()[0]
    }
}
