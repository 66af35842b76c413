//! Custom error types for spendlog
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// Input rejected before it reaches the store
///
/// Every case gets its own variant so presentation layers can decide how to
/// prompt for a correction.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Description cannot be empty")]
    EmptyDescription,

    #[error("Amount cannot be empty")]
    EmptyAmount,

    #[error("Invalid amount '{0}': not a number")]
    NonNumericAmount(String),

    #[error("Amount must be a positive number, got zero")]
    ZeroAmount,

    #[error("Amount must be a positive number, got '{0}'")]
    NegativeAmount(String),

    #[error("Invalid amount '{0}': must be a finite number")]
    NonFiniteAmount(String),

    #[error("Invalid date '{0}'. Use YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid month '{0}'. Use YYYY-MM")]
    InvalidMonth(String),

    #[error("Invalid value '{value}' for setting '{key}'")]
    InvalidSetting { key: String, value: String },
}

/// The main error type for spendlog operations
#[derive(Error, Debug)]
pub enum SpendlogError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for user input
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Persistence errors on the store document
    #[error("Storage error: {0}")]
    Storage(String),

    /// The document already uses the largest representable id
    #[error("No expense ids left: the store already holds id {0}")]
    IdsExhausted(u32),
}

impl SpendlogError {
    /// Create a "not found" error for expenses
    pub fn expense_not_found(id: u32) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: id.to_string(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// The underlying validation error, if any
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SpendlogError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SpendlogError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for spendlog operations
pub type SpendlogResult<T> = Result<T, SpendlogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SpendlogError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = SpendlogError::expense_not_found(42);
        assert_eq!(err.to_string(), "Expense not found: 42");
        assert!(err.is_not_found());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_validation_error_wraps() {
        let err: SpendlogError = ValidationError::ZeroAmount.into();
        assert!(err.is_validation());
        assert_eq!(err.as_validation(), Some(&ValidationError::ZeroAmount));
        assert_eq!(
            err.to_string(),
            "Validation error: Amount must be a positive number, got zero"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: SpendlogError = io_err.into();
        assert!(matches!(err, SpendlogError::Io(_)));
    }
}
