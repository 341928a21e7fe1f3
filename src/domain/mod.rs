//! Source-agnostic domain logic. No I/O lives here.

mod money;
mod reconcile;
mod record;
mod state;
mod teams;

pub use money::{round_earnings, Earnings, RATE};
pub use reconcile::{ReconcileOutcome, Reconciler, RoundingPolicy};
pub use record::{TeamDelta, TeamRecord, TeamRecordSnapshot};
pub use state::{ParticipantLedger, PoolState};
pub use teams::TeamDirectory;
