use serde::{Deserialize, Serialize};

/// Maximum age of a history entry: six 30-day months, in milliseconds.
pub const HISTORY_TTL_MS: i64 = 1000 * 60 * 60 * 24 * 30 * 6;

/// Maximum number of entries kept in the password history.
pub const HISTORY_CAPACITY: usize = 50;

/// Key under which the history is persisted.
pub const HISTORY_STORAGE_KEY: &str = "password_history";

/// A single previously generated password.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HistoryEntry {
    pub password: String,
    /// Milliseconds since the UNIX epoch.
    pub timestamp: i64,
}

/// Retention rules applied by the history store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryPolicy {
    pub capacity: usize,
    pub ttl_ms: i64,
    pub storage_key: String,
}

impl Default for HistoryPolicy {
    fn default() -> Self {
        Self {
            capacity: HISTORY_CAPACITY,
            ttl_ms: HISTORY_TTL_MS,
            storage_key: HISTORY_STORAGE_KEY.to_string(),
        }
    }
}
