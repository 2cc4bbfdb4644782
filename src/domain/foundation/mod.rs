//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types
//! that form the vocabulary of the decision support domain.

mod errors;
mod ids;
mod percentage;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::AnalysisId;
pub use percentage::{round_to, Percentage};
pub use timestamp::Timestamp;
