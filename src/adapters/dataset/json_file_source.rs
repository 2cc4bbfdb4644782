//! File-backed dataset source.
//!
//! Reads alternatives and criterion values from a JSON or YAML file. Two
//! layouts are accepted:
//!
//! ```json
//! [{"name": "Canada", "cost_of_living": 7.0, "safety_index": 8.5}]
//! ```
//!
//! ```json
//! {"alternatives": ["Canada"], "columns": {"cost_of_living": [7.0]}}
//! ```

use async_trait::async_trait;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

use crate::domain::analysis::Dataset;
use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};
use crate::ports::AnalysisDataSource;

/// One alternative with its criterion values.
#[derive(Debug, Deserialize)]
struct AlternativeRow {
    name: String,
    #[serde(flatten)]
    values: BTreeMap<String, f64>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DatasetFile {
    Rows(Vec<AlternativeRow>),
    Columns(Dataset),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileFormat {
    Json,
    Yaml,
}

impl FileFormat {
    fn of(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => FileFormat::Yaml,
            _ => FileFormat::Json,
        }
    }
}

/// Dataset source reading a JSON or YAML file
#[derive(Debug, Clone)]
pub struct JsonFileDataSource {
    path: PathBuf,
}

impl JsonFileDataSource {
    /// Create a source for the given file. The format follows the extension;
    /// anything other than `.yaml`/`.yml` is read as JSON.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parse(&self, content: &str) -> Result<DatasetFile, DomainError> {
        let parsed = match FileFormat::of(&self.path) {
            FileFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            FileFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
        };

        parsed.map_err(|reason| {
            DomainError::new(ErrorCode::SerializationError, "Failed to parse dataset file")
                .with_detail("path", self.path.display().to_string())
                .with_detail("reason", reason)
        })
    }
}

/// Pivots row records into columns.
///
/// Every row must carry the same criteria.
fn rows_to_dataset(rows: Vec<AlternativeRow>) -> Result<Dataset, ValidationError> {
    let criteria: Vec<String> = rows
        .first()
        .map(|row| row.values.keys().cloned().collect())
        .unwrap_or_default();

    let mut dataset = Dataset::new(Vec::<String>::new());
    for criterion in &criteria {
        dataset.columns.insert(criterion.clone(), Vec::with_capacity(rows.len()));
    }

    for row in rows {
        if row.values.len() != criteria.len() {
            return Err(ValidationError::invalid_format(
                "dataset",
                format!("alternative '{}' does not have the same criteria as the first row", row.name),
            ));
        }
        for (criterion, value) in row.values {
            match dataset.columns.get_mut(&criterion) {
                Some(column) => column.push(value),
                None => {
                    return Err(ValidationError::invalid_format(
                        "dataset",
                        format!("alternative '{}' has unexpected criterion '{}'", row.name, criterion),
                    ))
                }
            }
        }
        dataset.alternatives.push(row.name);
    }

    Ok(dataset)
}

/// Checks every column is as long as the alternative list.
fn check_columns(dataset: &Dataset) -> Result<(), ValidationError> {
    let expected = dataset.alternatives.len();
    for (criterion, values) in &dataset.columns {
        if values.len() != expected {
            return Err(ValidationError::length_mismatch(criterion.clone(), expected, values.len()));
        }
    }
    Ok(())
}

#[async_trait]
impl AnalysisDataSource for JsonFileDataSource {
    async fn load_dataset(&self) -> Result<Dataset, DomainError> {
        if !self.path.exists() {
            return Err(DomainError::new(ErrorCode::DatasetNotFound, "Dataset file not found")
                .with_detail("path", self.path.display().to_string()));
        }

        let content = fs::read_to_string(&self.path).await.map_err(|e| {
            DomainError::new(ErrorCode::StorageError, "Failed to read dataset file")
                .with_detail("path", self.path.display().to_string())
                .with_detail("reason", e.to_string())
        })?;

        let dataset = match self.parse(&content)? {
            DatasetFile::Rows(rows) => {
                debug!(rows = rows.len(), "Pivoting row-oriented dataset");
                rows_to_dataset(rows)?
            }
            DatasetFile::Columns(dataset) => dataset,
        };
        check_columns(&dataset)?;

        info!(
            path = %self.path.display(),
            alternatives = dataset.alternatives.len(),
            criteria = dataset.columns.len(),
            "Loaded dataset"
        );

        Ok(dataset)
    }
}
