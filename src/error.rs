//! Error types
//!
//! Distance kernels, gradient estimation and the solver itself never fail;
//! errors only come from building blocks out of caller data and from
//! configuration handling.

use thiserror::Error;

/// Errors reported by block construction and configuration handling
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SdfError {
    /// More configurations than lanes in one block
    #[error("Too many configurations for one block: {given} given, rake is {rake}")]
    TooManyConfigurations {
        /// Number of configurations supplied
        given: usize,
        /// Lane width of a block
        rake: usize,
    },

    /// Parameter outside its valid range
    #[error("Invalid parameter `{name}`: {value}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// Offending value
        value: f32,
    },

    /// JSON (de)serialization failure
    #[error("Serialization error: {0}")]
    Serialization(String),
}
