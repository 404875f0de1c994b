//! Storage-specific error types for the local key-value store.
//!
//! This module provides error types that wrap I/O and serialization
//! errors and convert them to the storage-agnostic error types defined
//! in `financa_core`.

use financa_core::errors::{Error, StoreError};
use thiserror::Error;

/// Storage-specific errors internal to this crate. They are converted
/// to `financa_core::Error` before being returned to callers.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to read the store file: {0}")]
    ReadFailed(std::io::Error),

    #[error("Failed to write the store file: {0}")]
    WriteFailed(std::io::Error),

    #[error("Store content is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::ReadFailed(e) => Error::Store(StoreError::ReadFailed(e.to_string())),
            StorageError::WriteFailed(e) => Error::Store(StoreError::WriteFailed(e.to_string())),
            StorageError::Decode(e) => Error::Store(StoreError::Corrupted(e.to_string())),
        }
    }
}
