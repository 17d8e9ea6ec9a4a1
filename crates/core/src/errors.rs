//! Core error types for the Taskpie application.
//!
//! This module defines storage-agnostic error types. Storage-specific errors
//! (io, JSON decoding, etc.) are converted to these types by the storage layer.

use std::num::ParseFloatError;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the application.
///
/// Storage-specific errors are wrapped in string form to keep this type
/// agnostic of the backing store.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Store operation failed: {0}")]
    Store(#[from] StoreError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Storage-agnostic error type for preference store operations.
///
/// This enum uses `String` for all error details, allowing the storage layer
/// to convert its own errors (io, serde, etc.) into this format.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to read preference store: {0}")]
    ReadFailed(String),

    #[error("Failed to write preference store: {0}")]
    WriteFailed(String),

    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Serialization failed: {0}")]
    Serialization(String),

    #[error("Internal store error: {0}")]
    Internal(String),
}

/// Validation errors for user input.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Failed to parse number: {0}")]
    NumberParse(#[from] ParseFloatError),
}
