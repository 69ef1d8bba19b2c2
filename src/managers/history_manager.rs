//! History store for pwforge.
//!
//! Implements `HistoryStoreTrait`: a newest-first log of generated passwords,
//! capped in size and pruned by age on load. The whole list is written
//! through to a [`KeyValueStore`] as JSON after every mutation.

use std::sync::Arc;

use crate::services::clock::Clock;
use crate::services::storage::KeyValueStore;
use crate::types::errors::HistoryError;
use crate::types::history::{HistoryEntry, HistoryPolicy};

/// Trait defining password history operations.
pub trait HistoryStoreTrait {
    fn load_and_prune(&mut self) -> &[HistoryEntry];
    fn append(&mut self, password: &str, timestamp: i64) -> &[HistoryEntry];
    fn entries(&self) -> &[HistoryEntry];
}

/// Size- and age-bounded password history.
pub struct HistoryStore {
    storage: Box<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
    policy: HistoryPolicy,
    entries: Vec<HistoryEntry>,
    last_persist_error: Option<HistoryError>,
    last_load_error: Option<HistoryError>,
}

impl HistoryStore {
    pub fn new(
        storage: Box<dyn KeyValueStore>,
        clock: Arc<dyn Clock>,
        policy: HistoryPolicy,
    ) -> Self {
        Self {
            storage,
            clock,
            policy,
            entries: Vec::new(),
            last_persist_error: None,
            last_load_error: None,
        }
    }

    pub fn policy(&self) -> &HistoryPolicy {
        &self.policy
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recently appended entry.
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.first()
    }

    /// The error from the most recent write, cleared by the next successful one.
    pub fn last_persist_error(&self) -> Option<&HistoryError> {
        self.last_persist_error.as_ref()
    }

    /// Why the last `load_and_prune` started from an empty history, if it had to.
    pub fn last_load_error(&self) -> Option<&HistoryError> {
        self.last_load_error.as_ref()
    }

    /// Reads and decodes the stored history. A missing key is an empty history.
    fn read_persisted(&self) -> Result<Vec<HistoryEntry>, HistoryError> {
        match self.storage.get(&self.policy.storage_key)? {
            Some(bytes) => serde_json::from_slice(&bytes)
                .map_err(|e| HistoryError::Decode(e.to_string())),
            None => Ok(Vec::new()),
        }
    }

    /// Writes the full list. Failures are logged and remembered, never returned.
    fn persist(&mut self) {
        let result = serde_json::to_vec(&self.entries)
            .map_err(|e| HistoryError::Persistence(e.to_string()))
            .and_then(|bytes| {
                self.storage
                    .set(&self.policy.storage_key, &bytes)
                    .map_err(HistoryError::from)
            });

        match result {
            Ok(()) => self.last_persist_error = None,
            Err(err) => {
                log::warn!("{}; keeping in-memory history", err);
                self.last_persist_error = Some(err);
            }
        }
    }
}

impl HistoryStoreTrait for HistoryStore {
    /// Loads the persisted history, drops entries at or past the TTL,
    /// enforces the capacity, writes the result back and returns it.
    fn load_and_prune(&mut self) -> &[HistoryEntry] {
        let now = self.clock.now_ms();
        let ttl = self.policy.ttl_ms;

        let loaded = match self.read_persisted() {
            Ok(entries) => {
                self.last_load_error = None;
                entries
            }
            Err(err) => {
                log::warn!("{}; starting with empty history", err);
                self.last_load_error = Some(err);
                Vec::new()
            }
        };
        let loaded_count = loaded.len();

        let mut kept: Vec<HistoryEntry> = loaded
            .into_iter()
            .filter(|entry| now.saturating_sub(entry.timestamp) < ttl)
            .collect();
        kept.truncate(self.policy.capacity);

        log::info!(
            "Loaded {} history entries, pruned {}",
            kept.len(),
            loaded_count - kept.len()
        );

        self.entries = kept;
        self.persist();
        &self.entries
    }

    /// Prepends a new entry, truncates to capacity and writes through.
    fn append(&mut self, password: &str, timestamp: i64) -> &[HistoryEntry] {
        self.entries.insert(
            0,
            HistoryEntry {
                password: password.to_string(),
                timestamp,
            },
        );
        self.entries.truncate(self.policy.capacity);
        self.persist();
        &self.entries
    }

    fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }
}
