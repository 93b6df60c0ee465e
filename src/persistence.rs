//! Local Persistence
//!
//! Saves the whole item list as JSON under one key. Failures are logged and
//! never fatal: the in-memory store stays authoritative for the session.

use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use crate::item_store::ItemStore;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("local storage is unavailable")]
    Unavailable,
    #[error("failed to read '{key}': {message}")]
    Read { key: String, message: String },
    #[error("failed to write '{key}': {message}")]
    Write { key: String, message: String },
    #[error("failed to serialize items: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("stored items are not valid: {0}")]
    Deserialize(#[source] serde_json::Error),
}

/// String key-value storage
pub trait StorageBackend {
    fn read(&self, key: &str) -> Result<Option<String>, PersistenceError>;
    fn write(&self, key: &str, value: &str) -> Result<(), PersistenceError>;
}

/// Backend shared by the app state
pub type SharedStorage = Arc<dyn StorageBackend + Send + Sync>;

impl<B: StorageBackend + ?Sized> StorageBackend for Arc<B> {
    fn read(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        (**self).write(key, value)
    }
}

/// `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Result<web_sys::Storage, PersistenceError> {
        web_sys::window()
            .ok_or(PersistenceError::Unavailable)?
            .local_storage()
            .map_err(|_| PersistenceError::Unavailable)?
            .ok_or(PersistenceError::Unavailable)
    }
}

impl StorageBackend for BrowserStorage {
    fn read(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        Self::storage()?.get_item(key).map_err(|e| PersistenceError::Read {
            key: key.to_string(),
            message: format!("{:?}", e),
        })
    }

    fn write(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        // Quota errors surface here
        Self::storage()?.set_item(key, value).map_err(|e| PersistenceError::Write {
            key: key.to_string(),
            message: format!("{:?}", e),
        })
    }
}

/// Item list persisted under a fixed key
#[derive(Clone)]
pub struct Persistence<B> {
    key: String,
    backend: B,
}

impl<B> fmt::Debug for Persistence<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Persistence").field("key", &self.key).finish_non_exhaustive()
    }
}

impl Persistence<SharedStorage> {
    pub fn browser(key: impl Into<String>) -> Self {
        Self::new(key, Arc::new(BrowserStorage))
    }
}

impl<B: StorageBackend> Persistence<B> {
    pub fn new(key: impl Into<String>, backend: B) -> Self {
        Self { key: key.into(), backend }
    }

    /// Stored items, `None` if nothing has been saved yet
    pub fn try_load(&self) -> Result<Option<ItemStore>, PersistenceError> {
        match self.backend.read(&self.key)? {
            Some(raw) => serde_json::from_str(&raw).map(Some).map_err(PersistenceError::Deserialize),
            None => Ok(None),
        }
    }

    /// Stored items, or `fallback` when missing or unreadable
    pub fn load_or(&self, fallback: impl FnOnce() -> ItemStore) -> ItemStore {
        match self.try_load() {
            Ok(Some(items)) => {
                tracing::info!("[STORAGE] loaded {} items from '{}'", items.len(), self.key);
                items
            }
            Ok(None) => fallback(),
            Err(e) => {
                tracing::warn!("[STORAGE] {}; starting from defaults", e);
                fallback()
            }
        }
    }

    pub fn try_save(&self, items: &ItemStore) -> Result<(), PersistenceError> {
        let raw = serde_json::to_string(items).map_err(PersistenceError::Serialize)?;
        self.backend.write(&self.key, &raw)
    }

    /// Write the full list, logging instead of failing
    pub fn save(&self, items: &ItemStore) {
        if let Err(e) = self.try_save(items) {
            tracing::warn!("[STORAGE] {}", e);
        }
    }
}

/// In-memory backend counting writes
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct MemoryStorage {
    entries: std::sync::Mutex<std::collections::HashMap<String, String>>,
    writes: std::sync::atomic::AtomicUsize,
    broken: bool,
}

#[cfg(test)]
impl MemoryStorage {
    pub(crate) fn with(key: &str, value: &str) -> Self {
        let storage = Self::default();
        storage.entries.lock().unwrap().insert(key.to_string(), value.to_string());
        storage
    }

    pub(crate) fn broken() -> Self {
        Self { broken: true, ..Self::default() }
    }

    pub(crate) fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    pub(crate) fn writes(&self) -> usize {
        self.writes.load(std::sync::atomic::Ordering::SeqCst)
    }
}

#[cfg(test)]
impl StorageBackend for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        if self.broken {
            return Err(PersistenceError::Unavailable);
        }
        Ok(self.get(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        if self.broken {
            return Err(PersistenceError::Write {
                key: key.to_string(),
                message: "QuotaExceededError".to_string(),
            });
        }
        self.writes.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        self.entries.lock().unwrap().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
