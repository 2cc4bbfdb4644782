//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AnalysisDataSource` - Supplies alternatives and criterion columns
//! - `AnalysisResultStore` - Persists ranking runs and sensitivity sweeps

mod analysis_data_source;
mod analysis_result_store;

pub use analysis_data_source::AnalysisDataSource;
pub use analysis_result_store::{AnalysisResultStore, ResultStoreError};
