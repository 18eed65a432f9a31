//! Error types for the settlement report

use thiserror::Error;

/// Main error type for report loading and rendering.
///
/// Instruction validity is not an error: rejected instructions are kept in
/// the report's invalid bucket. These variants cover the boundaries around
/// the report (CSV input, configuration files, output serialisation).
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Data error: {0}")]
    DataError(String),

    #[error("Invalid {field} on row {row}: {value:?}")]
    InvalidField {
        row: usize,
        field: &'static str,
        value: String,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

/// Result type alias for report operations
pub type Result<T> = std::result::Result<T, ReportError>;
