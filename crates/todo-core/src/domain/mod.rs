//! Domain Layer
//!
//! Todo entity, view filter and error types.
//! No I/O happens here.

mod error;
mod filter;
mod item;

pub use error::{PersistError, StorageError, StorageResult, StoreError, StoreResult};
pub use filter::Filter;
pub use item::{TodoId, TodoItem};

pub(crate) use item::normalize_description;
