//! In-Memory Storage
//!
//! Map-backed `KeyValueStorage` for tests and hosts without a browser.
//! Failures can be injected to exercise recovery paths.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use async_trait::async_trait;

use super::traits::KeyValueStorage;
use crate::domain::{StorageError, StorageResult};

#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: RefCell<HashMap<String, String>>,
    failing_writes: Cell<u32>,
    failing_reads: Cell<bool>,
    writes: Cell<u32>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-filled with `value` under `key`
    pub fn with_value(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage.insert(key, value);
        storage
    }

    pub fn insert(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    pub fn value(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    /// Make the next `count` writes fail
    pub fn fail_next_writes(&self, count: u32) {
        self.failing_writes.set(count);
    }

    /// Make every read fail until switched off
    pub fn fail_reads(&self, failing: bool) {
        self.failing_reads.set(failing);
    }

    /// Successful writes so far
    pub fn write_count(&self) -> u32 {
        self.writes.get()
    }
}

#[async_trait(?Send)]
impl KeyValueStorage for MemoryStorage {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        if self.failing_reads.get() {
            return Err(StorageError::Read(format!("injected read failure for {key}")));
        }
        Ok(self.value(key))
    }

    async fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let remaining = self.failing_writes.get();
        if remaining > 0 {
            self.failing_writes.set(remaining - 1);
            return Err(StorageError::Write(format!("injected write failure for {key}")));
        }
        self.insert(key, value);
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}
