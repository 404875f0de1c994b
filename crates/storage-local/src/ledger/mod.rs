//! Financial record repository backed by the key-value store.

mod repository;

pub use repository::{LedgerRepository, DATA_KEY_PREFIX};
