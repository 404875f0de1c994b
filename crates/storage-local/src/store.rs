//! Key-value store backends.
//!
//! `FileStore` keeps the whole store as one JSON object on disk and
//! rewrites it on every change, which gives the same last-write-wins
//! behavior as the browser storage it replaces. `MemoryStore` is the
//! ephemeral counterpart used for the session marker and for tests.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::RwLock;

use financa_core::errors::Result;
use log::debug;

use crate::errors::StorageError;

/// The key-value persistence collaborator: get/set/remove by string
/// key. Values are opaque strings; callers own the encoding.
pub trait KvStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// JSON-file-backed store. The file is loaded once on open and fully
/// rewritten on every mutation; there is no merge and no conflict
/// detection.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: RwLock<HashMap<String, String>>,
}

impl FileStore {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = if path.exists() {
            let raw = fs::read_to_string(&path).map_err(StorageError::ReadFailed)?;
            serde_json::from_str(&raw).map_err(StorageError::from)?
        } else {
            HashMap::new()
        };
        debug!("Opened store {} with {} entries", path.display(), entries.len());
        Ok(FileStore {
            path,
            entries: RwLock::new(entries),
        })
    }

    fn persist(&self, entries: &HashMap<String, String>) -> Result<()> {
        let raw = serde_json::to_string_pretty(entries).map_err(StorageError::from)?;
        fs::write(&self.path, raw).map_err(StorageError::WriteFailed)?;
        Ok(())
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.read().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.write().unwrap();
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.write().unwrap();
        entries.remove(key);
        self.persist(&entries)
    }
}

/// In-memory store. Contents are lost when the process ends.
#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.read().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .write()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.write().unwrap().remove(key);
        Ok(())
    }
}
