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
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid variation value: {0}")]
    InvalidVariation(String),

    #[error("Variation must be greater than -1.0, got {0}")]
    VariationOutOfRange(f64),

    #[error("Criterion '{0}' is listed as both cost and benefit")]
    ConflictingCriterionType(String),

    #[error("Invalid log filter: {0}")]
    InvalidLogFilter(String),

    #[error("Invalid default preferences: {0}")]
    InvalidPreferences(#[from] crate::domain::foundation::ValidationError),
}
