//! Analysis handlers.
//!
//! Use cases that load a dataset through the data source port, run the pure
//! analysis core and optionally persist the outcome.

mod compare_alternatives;
mod config;
mod errors;
mod run_analysis;
mod run_sensitivity;

pub use compare_alternatives::{CompareAlternativesHandler, CompareAlternativesQuery};
pub use self::config::AnalysisHandlerConfig;
pub use errors::AnalysisHandlerError;
pub use run_analysis::{RunAnalysisCommand, RunAnalysisHandler, RunAnalysisResult};
pub use run_sensitivity::{RunSensitivityCommand, RunSensitivityHandler};
