//! Error types for Sentinel.
//!
//! `WriteError` covers persisting a record to disk. `CoreError` covers reading
//! a record's fields back.

use std::path::PathBuf;

use thiserror::Error;

/// Failure while persisting a verification record.
#[derive(Debug, Error)]
pub enum WriteError {
    /// A parent directory of the output path could not be created.
    #[error("failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The output file could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The record could not be serialized.
    #[error("failed to serialize verification record: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Errors raised when interpreting record data.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),
}
