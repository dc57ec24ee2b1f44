//! Storage Layer - Core Trait
//!
//! The key-value store the bridge mirrors the list into.
//! Implementations: browser `localStorage`, in-memory map.

use async_trait::async_trait;

use crate::domain::StorageResult;

/// String key-value storage
///
/// Both calls may be asynchronous. Futures are not required to be `Send`
/// so single-threaded browser handles can implement it.
#[async_trait(?Send)]
pub trait KeyValueStorage {
    /// Read the value under `key`, `None` when absent
    async fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Overwrite the value under `key`
    async fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}

#[async_trait(?Send)]
impl<S: KeyValueStorage + ?Sized> KeyValueStorage for std::rc::Rc<S> {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value).await
    }
}
