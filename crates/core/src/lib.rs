//! Financa Core - domain entities, services, and traits.
//!
//! This crate contains the core business logic for Financa, a
//! personal finance tracker. It is storage-agnostic and defines
//! repository traits that are implemented by the `storage-local`
//! crate.

pub mod auth;
pub mod constants;
pub mod context;
pub mod dashboard;
pub mod errors;
pub mod ledger;
pub mod users;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
