//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while loading a transactions file
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read transactions file: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON deserialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid transactions format: {0}")]
    InvalidFormat(String),
}

/// Errors that can occur during aggregation
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AnalyzerError {
    #[error("Cannot average an empty collection of transactions")]
    EmptyCollection,
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
