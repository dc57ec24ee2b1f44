//! Persistence Settings

use serde::{Deserialize, Serialize};

/// Key the list is stored under unless configured otherwise
pub const DEFAULT_STORAGE_KEY: &str = "todos";

/// How the bridge talks to storage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistConfig {
    /// Single storage key holding the serialized list
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// Attempts per write before giving up (at least one is always made)
    #[serde(default = "default_write_attempts")]
    pub write_attempts: u32,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_write_attempts() -> u32 {
    3
}

impl Default for PersistConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            write_attempts: default_write_attempts(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: PersistConfig = serde_json::from_str(r#"{"write_attempts":5}"#).unwrap();
        assert_eq!(config.storage_key, "todos");
        assert_eq!(config.write_attempts, 5);

        let config: PersistConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, PersistConfig::default());
    }
}
