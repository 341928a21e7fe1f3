use async_trait::async_trait;

use crate::domain::TeamRecordSnapshot;
use crate::error::Result;

/// Supplier of current team records.
///
/// Implementations own their retry policy and their external-name mapping.
/// A returned snapshot may cover fewer teams than the pool tracks; the
/// caller treats a non-empty partial result as degraded success.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Fetch the current record for every team the source can resolve.
    async fn fetch_current_records(&self) -> Result<TeamRecordSnapshot>;

    /// Human-readable name for logs and diagnostics.
    fn source_name(&self) -> &'static str;
}
