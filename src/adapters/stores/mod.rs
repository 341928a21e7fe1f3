//! Storage backends for the [`StateStore`](crate::ports::StateStore) port.

mod json;
mod memory;

pub use json::{JsonFileStore, StoreLock};
pub use memory::MemoryStore;
