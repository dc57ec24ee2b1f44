//! Persistence Layer
//!
//! Storage abstraction and the bridge that mirrors the store into it.

mod bridge;
mod memory;
mod traits;

#[cfg(test)]
mod tests;

pub use bridge::{PersistOutcome, PersistenceBridge, RestoreOutcome, RestoreReport};
pub use memory::MemoryStorage;
pub use traits::KeyValueStorage;
