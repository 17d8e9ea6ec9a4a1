//! Storage-specific error types for the preference store.
//!
//! This module provides error types that wrap io and JSON errors and convert
//! them to the storage-agnostic error types defined in `taskpie_core`.

use thiserror::Error;
use taskpie_core::errors::{Error, StoreError};

/// Storage-specific errors that wrap io and serde_json types.
///
/// These errors are internal to the storage layer and are converted to
/// `taskpie_core::Error` before being returned to callers.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("File operation failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to write preference file: {0}")]
    WriteFailed(String),

    #[error("JSON encoding/decoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Store lock poisoned: {0}")]
    LockPoisoned(String),
}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Io(e) => Error::Store(StoreError::ReadFailed(e.to_string())),
            StorageError::WriteFailed(e) => Error::Store(StoreError::WriteFailed(e)),
            StorageError::Json(e) => Error::Store(StoreError::Serialization(e.to_string())),
            StorageError::NotFound(e) => Error::Store(StoreError::NotFound(e)),
            StorageError::LockPoisoned(e) => Error::Store(StoreError::Internal(e)),
        }
    }
}
