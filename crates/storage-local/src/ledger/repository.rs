use std::sync::Arc;

use financa_core::errors::{Error, Result, StoreError};
use financa_core::ledger::{FinancialData, LedgerRepositoryTrait};

use crate::store::KvStore;

/// Per-user record keys are `fs_data_{user_id}`, one blob per user.
pub const DATA_KEY_PREFIX: &str = "fs_data_";

pub struct LedgerRepository {
    store: Arc<dyn KvStore>,
}

impl LedgerRepository {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        LedgerRepository { store }
    }

    fn data_key(user_id: &str) -> String {
        format!("{DATA_KEY_PREFIX}{user_id}")
    }
}

impl LedgerRepositoryTrait for LedgerRepository {
    fn load(&self, user_id: &str) -> Result<Option<FinancialData>> {
        match self.store.get(&Self::data_key(user_id))? {
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|e| Error::Store(StoreError::Corrupted(e.to_string()))),
            None => Ok(None),
        }
    }

    fn save(&self, user_id: &str, data: &FinancialData) -> Result<()> {
        let raw = serde_json::to_string(data)
            .map_err(|e| Error::Store(StoreError::WriteFailed(e.to_string())))?;
        self.store.set(&Self::data_key(user_id), &raw)
    }

    fn delete(&self, user_id: &str) -> Result<()> {
        self.store.remove(&Self::data_key(user_id))
    }
}
