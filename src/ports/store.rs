use async_trait::async_trait;

use crate::domain::PoolState;
use crate::error::Result;

/// Persistence for the pool aggregate. The whole state is read once per run
/// and rewritten in full; there is no partial update.
#[async_trait]
pub trait StateStore: Send + Sync {
    /// Load the prior state. Absence is an error: with nothing to reconcile
    /// against, the run cannot proceed.
    async fn load(&self) -> Result<PoolState>;

    /// Replace the persisted state.
    async fn save(&self, state: &PoolState) -> Result<()>;
}
