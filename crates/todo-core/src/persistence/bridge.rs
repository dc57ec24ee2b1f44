//! Persistence Bridge
//!
//! Restores the list once at startup and mirrors every later snapshot into
//! storage as a whole-list overwrite. Reads never fail outward: missing or
//! malformed data restores as an empty list.

use std::cell::Cell;

use super::traits::KeyValueStorage;
use crate::config::PersistConfig;
use crate::domain::{PersistError, TodoItem};

/// How restore went
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestoreOutcome {
    /// Nothing stored yet
    Empty,
    /// Stored list decoded
    Restored { count: usize },
    /// Storage failed or held something that is not a todo list
    Recovered { reason: String },
}

/// Result of [`PersistenceBridge::restore`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestoreReport {
    pub items: Vec<TodoItem>,
    pub outcome: RestoreOutcome,
}

impl RestoreReport {
    fn empty(outcome: RestoreOutcome) -> Self {
        Self {
            items: Vec::new(),
            outcome,
        }
    }
}

/// Result of a successful [`PersistenceBridge::persist`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistOutcome {
    Written { attempts: u32 },
    /// A newer revision was already written; nothing done
    Stale,
}

/// Mirrors store snapshots into a single storage key
pub struct PersistenceBridge<S> {
    storage: S,
    config: PersistConfig,
    last_written: Cell<Option<u64>>,
    ready: Cell<bool>,
}

impl<S: KeyValueStorage> PersistenceBridge<S> {
    pub fn new(storage: S, config: PersistConfig) -> Self {
        Self {
            storage,
            config,
            last_written: Cell::new(None),
            ready: Cell::new(false),
        }
    }

    pub fn config(&self) -> &PersistConfig {
        &self.config
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// True once restore has finished, whatever it found
    pub fn is_ready(&self) -> bool {
        self.ready.get()
    }

    pub fn last_written_revision(&self) -> Option<u64> {
        self.last_written.get()
    }

    /// Load the stored list
    pub async fn restore(&self) -> RestoreReport {
        let key = &self.config.storage_key;
        let report = match self.storage.get(key).await {
            Ok(None) => {
                log::info!("no stored todos under {key:?}, starting empty");
                RestoreReport::empty(RestoreOutcome::Empty)
            }
            Ok(Some(raw)) => match serde_json::from_str::<Vec<TodoItem>>(&raw) {
                Ok(items) => {
                    log::info!("restored {} todo(s) from {key:?}", items.len());
                    RestoreReport {
                        outcome: RestoreOutcome::Restored { count: items.len() },
                        items,
                    }
                }
                Err(err) => {
                    log::warn!("stored value under {key:?} is not a todo list: {err}");
                    RestoreReport::empty(RestoreOutcome::Recovered {
                        reason: err.to_string(),
                    })
                }
            },
            Err(err) => {
                log::warn!("reading {key:?} failed, starting empty: {err}");
                RestoreReport::empty(RestoreOutcome::Recovered {
                    reason: err.to_string(),
                })
            }
        };
        self.ready.set(true);
        report
    }

    /// Overwrite the stored list with the snapshot taken at `revision`
    pub async fn persist(
        &self,
        revision: u64,
        items: &[TodoItem],
    ) -> Result<PersistOutcome, PersistError> {
        if matches!(self.last_written.get(), Some(last) if revision < last) {
            log::debug!("skipping stale snapshot r{revision}");
            return Ok(PersistOutcome::Stale);
        }

        let payload =
            serde_json::to_string(items).map_err(|err| PersistError::Encode(err.to_string()))?;
        let key = &self.config.storage_key;
        let attempts = self.config.write_attempts.max(1);
        let mut attempt = 1;
        loop {
            match self.storage.set(key, &payload).await {
                Ok(()) => {
                    self.last_written.set(Some(revision));
                    log::debug!("wrote {} todo(s) at r{revision}", items.len());
                    return Ok(PersistOutcome::Written { attempts: attempt });
                }
                Err(source) if attempt >= attempts => {
                    log::error!("giving up writing r{revision} after {attempt} attempt(s): {source}");
                    return Err(PersistError::WriteFailed { attempts, source });
                }
                Err(err) => {
                    log::warn!("write attempt {attempt}/{attempts} for r{revision} failed: {err}");
                    attempt += 1;
                }
            }
        }
    }
}
