//! Error types for reel-core

use thiserror::Error;

/// Result type alias using reel-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in reel-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Database error
    #[error("Database error: {0}")]
    Database(String),

    /// libSQL error
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Document not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Thumbnail could not be derived from the source URL
    #[error("Error generating thumbnail for URL: {0}")]
    Thumbnail(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
