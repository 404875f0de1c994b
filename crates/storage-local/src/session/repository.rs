use std::sync::Arc;

use financa_core::auth::SessionRepositoryTrait;
use financa_core::errors::{Error, Result, StoreError};
use financa_core::users::User;

use crate::store::KvStore;

/// Key holding the currently authenticated identity, password
/// stripped.
pub const SESSION_KEY: &str = "fs_logged_user";

pub struct SessionRepository {
    store: Arc<dyn KvStore>,
}

impl SessionRepository {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        SessionRepository { store }
    }
}

impl SessionRepositoryTrait for SessionRepository {
    fn get_session(&self) -> Result<Option<User>> {
        match self.store.get(SESSION_KEY)? {
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|e| Error::Store(StoreError::Corrupted(e.to_string()))),
            None => Ok(None),
        }
    }

    fn set_session(&self, user: &User) -> Result<()> {
        let raw = serde_json::to_string(user)
            .map_err(|e| Error::Store(StoreError::WriteFailed(e.to_string())))?;
        self.store.set(SESSION_KEY, &raw)
    }

    fn clear_session(&self) -> Result<()> {
        self.store.remove(SESSION_KEY)
    }
}
