//! Obstacle environments
//!
//! An [`Environment`] is built once per planning problem in scalar form,
//! sorted, and converted once into its lane-wide form. The lane-wide form is
//! read-only and may be shared by reference across threads; every lane sees
//! the same obstacles.
//!
//! ```rust
//! use clearance_sdf::prelude::*;
//!
//! let mut env = Environment::new();
//! env.add_sphere(Sphere::from_array([0.55, 0.0, 0.25], 0.2));
//! env.add_cuboid(Cuboid::axis_aligned(Vec3::new(0.0, 0.0, -0.05), Vec3::new(1.0, 1.0, 0.05)));
//! env.sort();
//!
//! let env_v = EnvironmentVector::from(&env);
//! assert_eq!(env_v.len(), 2);
//! ```

use crate::error::SdfError;
use crate::shapes::{Cuboid, Sphere};
use crate::simd::FloatVector;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::debug;

/// Obstacles grouped by primitive kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Environment<T> {
    /// Sphere obstacles
    #[serde(default)]
    pub spheres: Vec<Sphere<T>>,
    /// Oriented cuboid obstacles
    #[serde(default)]
    pub cuboids: Vec<Cuboid<T>>,
    /// Cuboids whose third axis is the global z axis
    #[serde(default)]
    pub z_aligned_cuboids: Vec<Cuboid<T>>,
}

/// Scalar environment (one `f32` per field)
pub type EnvironmentInput = Environment<f32>;

/// Lane-wide environment (each field broadcast into every lane)
pub type EnvironmentVector = Environment<FloatVector>;

impl<T> Default for Environment<T> {
    fn default() -> Self {
        Environment {
            spheres: Vec::new(),
            cuboids: Vec::new(),
            z_aligned_cuboids: Vec::new(),
        }
    }
}

impl<T> Environment<T> {
    /// Total number of obstacles
    pub fn len(&self) -> usize {
        self.spheres.len() + self.cuboids.len() + self.z_aligned_cuboids.len()
    }

    /// True if there are no obstacles
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Environment<f32> {
    /// Empty environment
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from sphere and cuboid descriptors
    pub fn from_obstacles(
        spheres: impl IntoIterator<Item = Sphere<f32>>,
        cuboids: impl IntoIterator<Item = Cuboid<f32>>,
    ) -> Self {
        let mut env = Self::new();
        for s in spheres {
            env.add_sphere(s);
        }
        for c in cuboids {
            env.add_cuboid(c);
        }
        env
    }

    /// Add a sphere obstacle
    pub fn add_sphere(&mut self, sphere: Sphere<f32>) {
        self.spheres.push(sphere);
    }

    /// Add a cuboid obstacle
    ///
    /// Cuboids whose third axis is the global z axis go to
    /// [`Environment::z_aligned_cuboids`] and are evaluated with the cheaper
    /// z-aligned kernel.
    pub fn add_cuboid(&mut self, cuboid: Cuboid<f32>) {
        if cuboid.is_z_aligned() {
            self.z_aligned_cuboids.push(cuboid);
        } else {
            self.cuboids.push(cuboid);
        }
    }

    /// Chaining form of [`Environment::add_sphere`]
    pub fn with_sphere(mut self, sphere: Sphere<f32>) -> Self {
        self.add_sphere(sphere);
        self
    }

    /// Chaining form of [`Environment::add_cuboid`]
    pub fn with_cuboid(mut self, cuboid: Cuboid<f32>) -> Self {
        self.add_cuboid(cuboid);
        self
    }

    /// Stable sort of every obstacle list by distance from the world origin
    ///
    /// Nearest obstacles come first. Only locality depends on this; results
    /// do not.
    pub fn sort(&mut self) {
        let by_distance = |a: f32, b: f32| a.partial_cmp(&b).unwrap_or(Ordering::Equal);
        self.spheres
            .sort_by(|a, b| by_distance(a.min_distance(), b.min_distance()));
        self.cuboids
            .sort_by(|a, b| by_distance(a.min_distance(), b.min_distance()));
        self.z_aligned_cuboids
            .sort_by(|a, b| by_distance(a.min_distance(), b.min_distance()));
    }

    /// Serialize to a JSON string
    pub fn to_json(&self) -> Result<String, SdfError> {
        serde_json::to_string(self).map_err(|e| SdfError::Serialization(e.to_string()))
    }

    /// Parse from a JSON string
    pub fn from_json(json: &str) -> Result<Self, SdfError> {
        serde_json::from_str(json).map_err(|e| SdfError::Serialization(e.to_string()))
    }
}

impl From<&Environment<f32>> for Environment<FloatVector> {
    fn from(env: &Environment<f32>) -> Self {
        debug!(
            spheres = env.spheres.len(),
            cuboids = env.cuboids.len(),
            z_aligned_cuboids = env.z_aligned_cuboids.len(),
            "building lane-wide environment"
        );
        Environment {
            spheres: env.spheres.iter().map(|s| s.broadcast()).collect(),
            cuboids: env.cuboids.iter().map(|c| c.broadcast()).collect(),
            z_aligned_cuboids: env.z_aligned_cuboids.iter().map(|c| c.broadcast()).collect(),
        }
    }
}
