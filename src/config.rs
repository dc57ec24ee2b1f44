//! App Configuration
//!
//! Defaults, optionally overridden by JSON saved under [`CONFIG_KEY`].

use serde::{Deserialize, Serialize};
use todo_core::PersistConfig;

use crate::storage::WebStorage;

/// Storage key holding config overrides
pub const CONFIG_KEY: &str = "todo:config";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub persist: PersistConfig,
    /// Wait before retrying a failed save
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u32,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Log lines kept for the save-failure details panel
    #[serde(default = "default_log_capacity")]
    pub log_capacity: usize,
}

fn default_retry_delay_ms() -> u32 {
    2000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_capacity() -> usize {
    200
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            persist: PersistConfig::default(),
            retry_delay_ms: default_retry_delay_ms(),
            log_level: default_log_level(),
            log_capacity: default_log_capacity(),
        }
    }
}

impl AppConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Saved config or defaults. The second value says why saved config was
    /// ignored; it is returned rather than logged because the logger is not
    /// installed yet.
    pub fn load() -> (Self, Option<String>) {
        match WebStorage::new().read_now(CONFIG_KEY) {
            Ok(None) => (Self::default(), None),
            Ok(Some(raw)) => match Self::from_json(&raw) {
                Ok(config) => (config, None),
                Err(err) => (Self::default(), Some(err.to_string())),
            },
            Err(err) => (Self::default(), Some(err.to_string())),
        }
    }
}
