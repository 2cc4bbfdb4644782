//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod analysis;

pub use analysis::{
    AnalysisHandlerConfig, AnalysisHandlerError, CompareAlternativesHandler,
    CompareAlternativesQuery, RunAnalysisCommand, RunAnalysisHandler, RunAnalysisResult,
    RunSensitivityCommand, RunSensitivityHandler,
};
