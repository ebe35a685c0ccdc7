//! Core error types for tempo-core.
//!
//! Nothing in this hierarchy is fatal to the timer: storage failures are
//! logged and the in-memory state remains authoritative (see the storage
//! module). Errors surface only at the outer CLI boundary.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for tempo-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Storage-specific errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to read a key from the backing store
    #[error("Failed to read key '{key}': {source}")]
    ReadFailed {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a key to the backing store
    #[error("Failed to write key '{key}': {source}")]
    WriteFailed {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// Could not create or locate the data directory
    #[error("Data directory unavailable at {path}: {message}")]
    DataDirUnavailable { path: PathBuf, message: String },

    /// In-memory store lock poisoned by a panicking writer
    #[error("Store lock poisoned")]
    Poisoned,
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
