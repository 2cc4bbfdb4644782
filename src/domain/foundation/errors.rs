//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors raised when input data or a value object is malformed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: f64,
        max: f64,
        actual: f64,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    #[error("Data length mismatch for '{criterion}': expected {expected}, got {actual}")]
    LengthMismatch {
        criterion: String,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid value for '{criterion}' at position {index}: {value}")]
    InvalidValue {
        criterion: String,
        index: usize,
        value: f64,
    },

    #[error("Invalid weight value for '{key}': {value}")]
    InvalidWeight { key: String, value: f64 },

    #[error("Weight for '{key}' cannot be negative: {value}")]
    NegativeWeight { key: String, value: f64 },

    #[error("Duplicate alternative name: '{name}'")]
    DuplicateAlternative { name: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: f64, max: f64, actual: f64) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn length_mismatch(criterion: impl Into<String>, expected: usize, actual: usize) -> Self {
        ValidationError::LengthMismatch {
            criterion: criterion.into(),
            expected,
            actual,
        }
    }

    pub fn invalid_value(criterion: impl Into<String>, index: usize, value: f64) -> Self {
        ValidationError::InvalidValue {
            criterion: criterion.into(),
            index,
            value,
        }
    }

    pub fn invalid_weight(key: impl Into<String>, value: f64) -> Self {
        ValidationError::InvalidWeight {
            key: key.into(),
            value,
        }
    }

    pub fn negative_weight(key: impl Into<String>, value: f64) -> Self {
        ValidationError::NegativeWeight {
            key: key.into(),
            value,
        }
    }

    pub fn duplicate_alternative(name: impl Into<String>) -> Self {
        ValidationError::DuplicateAlternative { name: name.into() }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,

    // Analysis errors
    ComputationFailed,

    // Not found errors
    DatasetNotFound,
    AnalysisNotFound,

    // Infrastructure errors
    StorageError,
    SerializationError,
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::ComputationFailed => "COMPUTATION_FAILED",
            ErrorCode::DatasetNotFound => "DATASET_NOT_FOUND",
            ErrorCode::AnalysisNotFound => "ANALYSIS_NOT_FOUND",
            ErrorCode::StorageError => "STORAGE_ERROR",
            ErrorCode::SerializationError => "SERIALIZATION_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Creates a validation error for a specific field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::ValidationFailed,
            message: message.into(),
            details: HashMap::new(),
        }
        .with_detail("field", field.into())
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        DomainError::new(ErrorCode::ValidationFailed, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_empty_field_displays_correctly() {
        let err = ValidationError::empty_field("alternatives");
        assert_eq!(format!("{}", err), "Field 'alternatives' cannot be empty");
    }

    #[test]
    fn validation_error_out_of_range_displays_correctly() {
        let err = ValidationError::out_of_range("cost_weight", 0.0, 10.0, 12.5);
        assert_eq!(
            format!("{}", err),
            "Field 'cost_weight' must be between 0 and 10, got 12.5"
        );
    }

    #[test]
    fn validation_error_length_mismatch_displays_correctly() {
        let err = ValidationError::length_mismatch("safety_index", 3, 2);
        assert_eq!(
            format!("{}", err),
            "Data length mismatch for 'safety_index': expected 3, got 2"
        );
    }

    #[test]
    fn validation_error_negative_weight_displays_correctly() {
        let err = ValidationError::negative_weight("visa_difficulty_weight", -1.5);
        assert_eq!(
            format!("{}", err),
            "Weight for 'visa_difficulty_weight' cannot be negative: -1.5"
        );
    }

    #[test]
    fn domain_error_displays_code_and_message() {
        let err = DomainError::new(ErrorCode::AnalysisNotFound, "Analysis not found");
        assert_eq!(format!("{}", err), "[ANALYSIS_NOT_FOUND] Analysis not found");
    }

    #[test]
    fn domain_error_with_detail_adds_detail() {
        let err = DomainError::new(ErrorCode::ValidationFailed, "Validation failed")
            .with_detail("field", "weights")
            .with_detail("reason", "empty");

        assert_eq!(err.details.get("field"), Some(&"weights".to_string()));
        assert_eq!(err.details.get("reason"), Some(&"empty".to_string()));
    }

    #[test]
    fn domain_error_from_validation_error_keeps_message() {
        let err: DomainError = ValidationError::duplicate_alternative("Canada").into();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert!(err.message.contains("Canada"));
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::DatasetNotFound), "DATASET_NOT_FOUND");
        assert_eq!(format!("{}", ErrorCode::InternalError), "INTERNAL_ERROR");
    }
}
