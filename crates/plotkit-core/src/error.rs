//! Error types for plot configuration validation.

use thiserror::Error;

/// Errors raised when a [`crate::PlotConfig`] fails validation.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A dimension or offset is zero, negative, or non-finite.
    #[error("Invalid value for '{name}': {value}")]
    InvalidDimension { name: &'static str, value: f64 },

    /// The feed rate must be a positive integer.
    #[error("Feed rate must be positive")]
    ZeroFeedRate,
}

/// Result type alias for configuration validation.
pub type ConfigResult<T> = Result<T, ConfigError>;
