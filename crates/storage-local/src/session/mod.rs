//! Session marker repository. Intended to sit on a `MemoryStore` so
//! the marker dies with the session.

mod repository;

pub use repository::{SessionRepository, SESSION_KEY};
