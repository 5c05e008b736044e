//! Error types for the polex-core library.

use thiserror::Error;

/// Main error type for the polex library.
#[derive(Error, Debug)]
pub enum PolexError {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised while building the field table or noise filter from configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Field name has no registered extractor.
    #[error("unknown field: {0}")]
    UnknownField(String),

    /// Field listed more than once.
    #[error("duplicate field: {0}")]
    DuplicateField(String),

    /// The field table is empty.
    #[error("no fields configured")]
    NoFields,

    /// A noise marker is empty and would match every line.
    #[error("empty marker in {0}")]
    EmptyMarker(&'static str),
}

/// Result type for the polex library.
pub type Result<T> = std::result::Result<T, PolexError>;
