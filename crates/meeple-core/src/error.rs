//! Error types for the exporter

use thiserror::Error;

/// Core error type shared across the exporter crates
#[derive(Error, Debug)]
pub enum MeepleError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Query error: {0}")]
    Query(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for exporter operations
pub type Result<T> = std::result::Result<T, MeepleError>;
