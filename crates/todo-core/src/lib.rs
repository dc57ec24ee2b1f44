//! Todo Core
//!
//! Layered like the app it serves:
//! - domain: todo entity, filter, errors
//! - store: the owned list and its change notifications
//! - persistence: storage trait, bridge, in-memory backend

pub mod config;
pub mod domain;
pub mod persistence;
pub mod store;

#[cfg(test)]
mod properties;

pub use config::PersistConfig;
pub use domain::{
    Filter, PersistError, StorageError, StorageResult, StoreError, StoreResult, TodoId, TodoItem,
};
pub use persistence::{
    KeyValueStorage, MemoryStorage, PersistOutcome, PersistenceBridge, RestoreOutcome,
    RestoreReport,
};
pub use store::{ChangeEvent, ChangeKind, SubscriptionId, TodoCounts, TodoStore};
