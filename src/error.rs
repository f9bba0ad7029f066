//! Custom error types for the revenue report
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. Every variant is fatal to a report run;
//! unmatched products are not errors and never surface here.

use thiserror::Error;

/// The main error type for report operations
#[derive(Error, Debug)]
pub enum ReportError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// CSV reader errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// Expected column missing from the export header
    #[error("Schema error: {0}")]
    Schema(String),

    /// A value in a data row could not be parsed
    #[error("Parse error at row {row}, column '{column}': {message}")]
    Parse {
        row: usize,
        column: &'static str,
        message: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Validation errors for user-supplied values
    #[error("Validation error: {0}")]
    Validation(String),

    /// Export rendering errors
    #[error("Export error: {0}")]
    Export(String),
}

impl ReportError {
    /// Create a parse error for a data row
    pub fn parse(row: usize, column: &'static str, message: impl Into<String>) -> Self {
        Self::Parse {
            row,
            column,
            message: message.into(),
        }
    }

    /// Create a "duplicate" error for catalog prices
    pub fn duplicate_price(identifier: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type: "Catalog price",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a schema error
    pub fn is_schema(&self) -> bool {
        matches!(self, Self::Schema(_))
    }

    /// Check if this is a row parse error
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for ReportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<csv::Error> for ReportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for report operations
pub type ReportResult<T> = Result<T, ReportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ReportError::Schema("missing column 'Amount'".into());
        assert_eq!(err.to_string(), "Schema error: missing column 'Amount'");
        assert!(err.is_schema());
    }

    #[test]
    fn test_parse_error() {
        let err = ReportError::parse(4, "Amount", "Invalid money format: abc");
        assert_eq!(
            err.to_string(),
            "Parse error at row 4, column 'Amount': Invalid money format: abc"
        );
        assert!(err.is_parse());
    }

    #[test]
    fn test_duplicate_price_error() {
        let err = ReportError::duplicate_price("£590");
        assert_eq!(err.to_string(), "Catalog price already exists: £590");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let report_err: ReportError = io_err.into();
        assert!(matches!(report_err, ReportError::Io(_)));
    }
}
