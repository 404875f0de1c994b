//! Local key-value storage implementation for Financa.
//!
//! This crate provides the persistence backends and implements the
//! repository traits defined in `financa-core`. It contains:
//! - The `KvStore` abstraction (get/set/remove by string key)
//! - A JSON-file-backed store and an ephemeral in-memory store
//! - Repository implementations for the user directory, the per-user
//!   financial record, and the session marker
//!
//! # Architecture
//!
//! This crate is the only place in the application that touches the
//! filesystem. `financa-core` is storage-agnostic and works with
//! traits.
//!
//! ```text
//!        core (domain)
//!              │
//!              ▼
//!     storage-local (this crate)
//!              │
//!              ▼
//!      key-value store file
//! ```

pub mod errors;
pub mod store;

// Repository implementations
pub mod ledger;
pub mod session;
pub mod users;

// Re-export store utilities
pub use store::{FileStore, KvStore, MemoryStore};

// Re-export storage errors
pub use errors::StorageError;

// Re-export from financa-core for convenience
pub use financa_core::errors::{Error, Result, StoreError};
