//! Key-value persistence port.
//!
//! The history store only needs `get` and `set` on a single key. Production
//! code writes through [`SqliteKeyValueStore`]; tests use
//! [`MemoryKeyValueStore`], which can also be told to reject writes.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::database::connection::Database;
use crate::types::errors::StorageError;

/// Durable key-value store addressed by string keys.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;
    fn set(&mut self, key: &str, value: &[u8]) -> Result<(), StorageError>;
}

/// Key-value store persisted in the `kv_store` SQLite table.
pub struct SqliteKeyValueStore {
    db: Arc<Database>,
}

impl SqliteKeyValueStore {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

impl KeyValueStore for SqliteKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        self.db
            .get_value(key)
            .map_err(|e| StorageError::DatabaseError(e.to_string()))
    }

    fn set(&mut self, key: &str, value: &[u8]) -> Result<(), StorageError> {
        self.db
            .put_value(key, value)
            .map_err(|e| StorageError::DatabaseError(e.to_string()))
    }
}

#[derive(Debug, Default)]
struct MemoryInner {
    values: HashMap<String, Vec<u8>>,
    fail_writes: bool,
    writes: usize,
}

/// In-memory store. Clones share the same contents.
#[derive(Debug, Default, Clone)]
pub struct MemoryKeyValueStore {
    inner: Arc<Mutex<MemoryInner>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// When enabled, every `set` fails with `StorageError::Unavailable`.
    pub fn set_fail_writes(&self, fail: bool) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.fail_writes = fail;
        }
    }

    /// Stores raw bytes directly, bypassing the failure switch.
    pub fn insert_raw(&self, key: &str, value: &[u8]) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.values.insert(key.to_string(), value.to_vec());
        }
    }

    /// Returns the raw bytes stored under `key`.
    pub fn raw(&self, key: &str) -> Option<Vec<u8>> {
        self.inner
            .lock()
            .ok()
            .and_then(|inner| inner.values.get(key).cloned())
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        self.inner.lock().map(|inner| inner.writes).unwrap_or(0)
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        let inner = self
            .inner
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        Ok(inner.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &[u8]) -> Result<(), StorageError> {
        let mut inner = self
            .inner
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        if inner.fail_writes {
            return Err(StorageError::Unavailable("Quota exceeded".to_string()));
        }
        inner.values.insert(key.to_string(), value.to_vec());
        inner.writes += 1;
        Ok(())
    }
}
