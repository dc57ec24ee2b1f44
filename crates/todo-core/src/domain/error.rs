//! Error Types
//!
//! Store, storage and persistence failures. Messages are kept as strings so
//! every error stays `Clone` and can be handed to UI signals.

use thiserror::Error;

use super::item::TodoId;

/// Result type for store mutations
pub type StoreResult<T> = Result<T, StoreError>;

/// Result type for storage backends
pub type StorageResult<T> = Result<T, StorageError>;

/// Rejected store operation; the list is unchanged
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("description is empty")]
    EmptyDescription,
    #[error("todo {0} not found")]
    NotFound(TodoId),
    #[error("index {index} is out of bounds for a list of {len} todos")]
    OutOfBounds { index: usize, len: usize },
}

/// Failure reported by a key-value storage backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage read failed: {0}")]
    Read(String),
    #[error("storage write failed: {0}")]
    Write(String),
}

/// Failure mirroring the list into storage
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PersistError {
    #[error("failed to encode todo list: {0}")]
    Encode(String),
    #[error("write failed after {attempts} attempt(s): {source}")]
    WriteFailed {
        attempts: u32,
        #[source]
        source: StorageError,
    },
}
