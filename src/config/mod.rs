//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `STUDENT_DSS` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use student_migration_dss::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Reading dataset from {}", config.storage.dataset_path);
//! ```

mod analysis;
mod error;
mod logging;
mod storage;

pub use analysis::AnalysisConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use storage::StorageConfig;

use serde::Deserialize;

use crate::application::AnalysisHandlerConfig;
use crate::domain::analysis::UserPreferences;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a usable
/// configuration. Load using [`AppConfig::load()`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Scoring and sensitivity settings
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Dataset and result locations
    #[serde(default)]
    pub storage: StorageConfig,

    /// Log output settings
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Default preference weights used when none are given on the command line
    #[serde(default)]
    pub preferences: UserPreferences,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `STUDENT_DSS` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `STUDENT_DSS__ANALYSIS__NORMALIZATION_METHOD=z_score` -> `analysis.normalization_method`
    /// - `STUDENT_DSS__PREFERENCES__COST_WEIGHT=2.5` -> `preferences.cost_weight`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("STUDENT_DSS")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.analysis.validate()?;
        self.storage.validate()?;
        self.logging.validate()?;
        self.preferences.validate()?;
        Ok(())
    }

    /// Settings for the analysis handlers
    pub fn handler_config(&self) -> Result<AnalysisHandlerConfig, ValidationError> {
        Ok(AnalysisHandlerConfig {
            normalization: self.analysis.normalization_method,
            variations: self.analysis.variations_list()?,
            catalog: self.analysis.catalog(),
        })
    }
}
