//! Custom error types for Salary Insights
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for Salary Insights operations
#[derive(Error, Debug)]
pub enum InsightsError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// The employee store exists but does not hold a JSON array
    #[error("Failed to parse employee store {}: {message}", .path.display())]
    StoreParse { path: PathBuf, message: String },

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Export requested before any employee was added this session
    #[error("No report generated yet! Please add an employee first.")]
    MissingLastRecord,

    /// A main menu number outside the offered options
    #[error("Invalid choice! Try again.")]
    InvalidMenuChoice(i64),

    /// An export submenu number outside the offered formats
    #[error("Invalid export option!")]
    InvalidExportChoice(i64),

    /// Standard input ended while a prompt was waiting
    #[error("Input closed while waiting for a response")]
    InputClosed,

    /// Bounded retry policy gave up on a prompt
    #[error("Gave up after {attempts} invalid entries for '{prompt}'")]
    InputAttemptsExhausted { prompt: String, attempts: u32 },
}

impl InsightsError {
    /// Check if the session can report this error and keep running
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::MissingLastRecord | Self::InvalidMenuChoice(_) | Self::InvalidExportChoice(_)
        )
    }

    /// Check if this is a corrupt store error
    pub fn is_store_parse(&self) -> bool {
        matches!(self, Self::StoreParse { .. })
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for InsightsError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for InsightsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Salary Insights operations
pub type InsightsResult<T> = Result<T, InsightsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = InsightsError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_missing_last_record_message() {
        let err = InsightsError::MissingLastRecord;
        assert!(err.to_string().contains("No report generated yet"));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_invalid_choice_is_recoverable() {
        let err = InsightsError::InvalidMenuChoice(7);
        assert_eq!(err.to_string(), "Invalid choice! Try again.");
        assert!(err.is_recoverable());

        let err = InsightsError::InvalidExportChoice(9);
        assert_eq!(err.to_string(), "Invalid export option!");
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_store_parse_is_fatal() {
        let err = InsightsError::StoreParse {
            path: PathBuf::from("employees.json"),
            message: "expected value at line 1 column 1".into(),
        };
        assert!(err.is_store_parse());
        assert!(!err.is_recoverable());
        assert_eq!(
            err.to_string(),
            "Failed to parse employee store employees.json: expected value at line 1 column 1"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: InsightsError = io_err.into();
        assert!(matches!(err, InsightsError::Io(_)));
        assert!(!err.is_recoverable());
    }
}
