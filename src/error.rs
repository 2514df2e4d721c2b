//! Custom error types for salesdash
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for salesdash operations
#[derive(Error, Debug)]
pub enum DashError {
    /// The uploaded file could not be read as delimited text
    #[error("Failed to load data: {0}")]
    Load(String),

    /// One or more required columns are absent
    #[error("Missing required column(s): {}", missing.join(", "))]
    Schema { missing: Vec<String> },

    /// A required column holds the wrong kind of values
    #[error("Column '{column}' holds {found} values, expected {expected}")]
    ColumnType {
        column: String,
        expected: String,
        found: String,
    },

    /// Margin requested while total sales is zero
    #[error("Margin is undefined when total sales is zero")]
    DivisionUndefined,

    /// A running total left the range of an exact amount
    #[error("{0} total is too large to compute exactly")]
    Overflow(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl DashError {
    /// Create a schema error for a single missing column
    pub fn missing_column(column: impl Into<String>) -> Self {
        Self::Schema {
            missing: vec![column.into()],
        }
    }

    /// Create an overflow error for the named total
    pub fn overflow(what: impl Into<String>) -> Self {
        Self::Overflow(what.into())
    }

    /// Check if this is a load error
    pub fn is_load(&self) -> bool {
        matches!(self, Self::Load(_))
    }

    /// Check if this is a schema error (absent or mistyped column)
    pub fn is_schema(&self) -> bool {
        matches!(self, Self::Schema { .. } | Self::ColumnType { .. })
    }
}

impl From<std::io::Error> for DashError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for DashError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for DashError {
    fn from(err: csv::Error) -> Self {
        Self::Load(err.to_string())
    }
}

/// Result type alias for salesdash operations
pub type DashResult<T> = Result<T, DashError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DashError::Load("bad quoting".into());
        assert_eq!(err.to_string(), "Failed to load data: bad quoting");
        assert!(err.is_load());
    }

    #[test]
    fn test_schema_error_names_columns() {
        let err = DashError::Schema {
            missing: vec!["Profit".into(), "Category".into()],
        };
        assert_eq!(
            err.to_string(),
            "Missing required column(s): Profit, Category"
        );
        assert!(err.is_schema());
    }

    #[test]
    fn test_missing_column_helper() {
        let err = DashError::missing_column("Sales");
        assert!(err.to_string().contains("Sales"));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: DashError = io_err.into();
        assert!(matches!(err, DashError::Io(_)));
    }
}
