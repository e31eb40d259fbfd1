//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid bind address: {0}")]
    InvalidAddress(String),

    #[error("Radar radius must be a positive number")]
    InvalidRadarRadius,

    #[error("Radar label radius must be at least {min}, got {actual}")]
    LabelInsideChart { min: f64, actual: f64 },

    #[error("Log filter must not be empty")]
    EmptyLogFilter,
}
