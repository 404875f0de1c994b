//! User directory repository backed by the key-value store.

mod repository;

pub use repository::{UserRepository, USERS_KEY};
