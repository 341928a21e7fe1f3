//! In-memory store implementation for testing.

use std::path::PathBuf;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::domain::PoolState;
use crate::error::{Result, StoreError};
use crate::ports::StateStore;

/// In-memory store for testing purposes.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RwLock<Option<PoolState>>,
}

impl MemoryStore {
    /// Create an empty store; `load` reports NotFound until seeded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with prior state.
    #[must_use]
    pub fn with_state(state: PoolState) -> Self {
        Self {
            state: RwLock::new(Some(state)),
        }
    }

    /// Snapshot of what is currently persisted, if anything.
    #[must_use]
    pub fn current(&self) -> Option<PoolState> {
        self.state.read().clone()
    }
}

#[async_trait]
impl StateStore for MemoryStore {
    async fn load(&self) -> Result<PoolState> {
        self.state.read().clone().ok_or_else(|| {
            StoreError::NotFound {
                path: PathBuf::from("<memory>"),
            }
            .into()
        })
    }

    async fn save(&self, state: &PoolState) -> Result<()> {
        *self.state.write() = Some(state.clone());
        Ok(())
    }
}
