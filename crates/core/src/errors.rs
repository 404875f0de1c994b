//! Core error types for the Financa application.
//!
//! This module defines storage-agnostic error types. Storage-specific
//! errors (I/O, serialization) are converted to these types by the
//! storage layer.

use thiserror::Error;

use crate::auth::AuthError;
use crate::users::UserError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Store operation failed: {0}")]
    Store(#[from] StoreError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Authentication failed: {0}")]
    Auth(#[from] AuthError),

    #[error("User error: {0}")]
    User(#[from] UserError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Storage-agnostic error type for key-value store operations.
///
/// This enum uses `String` for all error details, allowing the storage
/// layer to convert backend-specific errors into this format.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to read an entry from the store.
    #[error("Failed to read from the store: {0}")]
    ReadFailed(String),

    /// Failed to write an entry to the store.
    #[error("Failed to write to the store: {0}")]
    WriteFailed(String),

    /// A stored record could not be decoded.
    #[error("Stored record is corrupted: {0}")]
    Corrupted(String),
}

/// Validation errors for user-submitted input. These are recovered
/// locally and rendered as inline messages; none are fatal.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Password must be at least {0} characters long")]
    PasswordTooShort(usize),

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Amount must not be negative")]
    NegativeAmount,
}
