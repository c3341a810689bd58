//! Solver parameters

use super::gradient::DEFAULT_GRADIENT_STEP;
use crate::error::SdfError;
use serde::{Deserialize, Serialize};

/// Parameters for [`project_to_valid`](super::project_to_valid)
///
/// Missing fields fall back to [`Default`] when read from JSON.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    /// Iterations, always run in full
    pub steps: usize,
    /// Step scale applied to penetration depth
    pub learning_rate: f32,
    /// Half-width of the uniform noise added to the seed
    pub noise_scale: f32,
    /// Finite-difference step for the gradient
    pub gradient_step: f32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        ProjectionConfig {
            steps: 100,
            learning_rate: 0.5,
            noise_scale: 0.1,
            gradient_step: DEFAULT_GRADIENT_STEP,
        }
    }
}

impl ProjectionConfig {
    /// Config with the given iteration count, learning rate and noise
    pub fn new(steps: usize, learning_rate: f32, noise_scale: f32) -> Self {
        ProjectionConfig {
            steps,
            learning_rate,
            noise_scale,
            ..Default::default()
        }
    }

    /// Set the iteration count
    pub fn with_steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }

    /// Set the learning rate
    pub fn with_learning_rate(mut self, learning_rate: f32) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    /// Set the noise half-width
    pub fn with_noise_scale(mut self, noise_scale: f32) -> Self {
        self.noise_scale = noise_scale;
        self
    }

    /// Set the finite-difference step
    pub fn with_gradient_step(mut self, gradient_step: f32) -> Self {
        self.gradient_step = gradient_step;
        self
    }

    /// Check every parameter is usable
    ///
    /// Learning rate and noise must be finite and non-negative; the
    /// gradient step must be finite and positive.
    pub fn validate(&self) -> Result<(), SdfError> {
        if !self.learning_rate.is_finite() || self.learning_rate < 0.0 {
            return Err(SdfError::InvalidParameter {
                name: "learning_rate",
                value: self.learning_rate,
            });
        }
        if !self.noise_scale.is_finite() || self.noise_scale < 0.0 {
            return Err(SdfError::InvalidParameter {
                name: "noise_scale",
                value: self.noise_scale,
            });
        }
        if !self.gradient_step.is_finite() || self.gradient_step <= 0.0 {
            return Err(SdfError::InvalidParameter {
                name: "gradient_step",
                value: self.gradient_step,
            });
        }
        Ok(())
    }

    /// Serialize to a JSON string
    pub fn to_json(&self) -> Result<String, SdfError> {
        serde_json::to_string_pretty(self).map_err(|e| SdfError::Serialization(e.to_string()))
    }

    /// Parse from a JSON string and validate
    pub fn from_json(json: &str) -> Result<Self, SdfError> {
        let config: ProjectionConfig =
            serde_json::from_str(json).map_err(|e| SdfError::Serialization(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}
