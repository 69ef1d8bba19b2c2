use serde::{Deserialize, Serialize};

use super::generation::GenerationConfig;
use super::history::{HistoryPolicy, HISTORY_CAPACITY, HISTORY_STORAGE_KEY};

/// Default trailing-edge debounce delay for configuration changes.
pub const DEFAULT_DEBOUNCE_MS: u64 = 150;

/// Top-level settings container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PwforgeSettings {
    pub generator: GenerationConfig,
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    pub history: HistorySettings,
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

impl Default for PwforgeSettings {
    fn default() -> Self {
        Self {
            generator: GenerationConfig::default(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            history: HistorySettings::default(),
        }
    }
}

/// Password history retention settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistorySettings {
    pub capacity: usize,
    pub ttl_days: u32,
    pub storage_key: String,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self {
            capacity: HISTORY_CAPACITY,
            ttl_days: 180,
            storage_key: HISTORY_STORAGE_KEY.to_string(),
        }
    }
}

impl HistorySettings {
    /// Converts these settings into the policy the history store enforces.
    pub fn policy(&self) -> HistoryPolicy {
        HistoryPolicy {
            capacity: self.capacity,
            ttl_ms: i64::from(self.ttl_days) * 24 * 60 * 60 * 1000,
            storage_key: self.storage_key.clone(),
        }
    }
}
