//! Storage configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Dataset and result locations
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Dataset file (JSON, or YAML by extension)
    #[serde(default = "default_dataset_path")]
    pub dataset_path: String,

    /// Directory for stored analysis records
    #[serde(default = "default_results_dir")]
    pub results_dir: String,

    /// Store every run in the results directory
    #[serde(default = "default_persist_results")]
    pub persist_results: bool,
}

impl StorageConfig {
    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.dataset_path.trim().is_empty() {
            return Err(ValidationError::MissingRequired("storage.dataset_path"));
        }
        if self.persist_results && self.results_dir.trim().is_empty() {
            return Err(ValidationError::MissingRequired("storage.results_dir"));
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dataset_path: default_dataset_path(),
            results_dir: default_results_dir(),
            persist_results: default_persist_results(),
        }
    }
}

fn default_dataset_path() -> String {
    "data/countries.json".to_string()
}

fn default_results_dir() -> String {
    "data/results".to_string()
}

fn default_persist_results() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = StorageConfig::default();
        assert_eq!(config.dataset_path, "data/countries.json");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_dataset_path_rejected() {
        let config = StorageConfig {
            dataset_path: " ".to_string(),
            ..StorageConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::MissingRequired("storage.dataset_path"))
        ));
    }

    #[test]
    fn test_results_dir_only_required_when_persisting() {
        let config = StorageConfig {
            results_dir: String::new(),
            persist_results: false,
            ..StorageConfig::default()
        };
        assert!(config.validate().is_ok());
    }
}
