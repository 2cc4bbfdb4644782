//! Analysis data source port.
//!
//! Supplies the raw alternatives and criterion columns an analysis runs on.
//! Direction tags are attached later from the criterion catalog.

use async_trait::async_trait;

use crate::domain::analysis::Dataset;
use crate::domain::foundation::DomainError;

/// Port for loading the dataset to analyze.
#[async_trait]
pub trait AnalysisDataSource: Send + Sync {
    /// Load the full dataset.
    ///
    /// # Errors
    ///
    /// - `DatasetNotFound` if the source does not exist
    /// - `SerializationError` if the source cannot be parsed
    /// - `ValidationFailed` if columns and alternatives disagree in length
    async fn load_dataset(&self) -> Result<Dataset, DomainError>;
}
