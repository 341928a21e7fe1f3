//! Team win/loss records and the deltas between two snapshots of them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A team's cumulative season record at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub wins: u32,
    pub losses: u32,
}

impl TeamRecord {
    #[must_use]
    pub fn new(wins: u32, losses: u32) -> Self {
        Self { wins, losses }
    }

    /// Change from `prior` to `self`. Negative components are legitimate:
    /// the source may revise a record downward (vacated game, correction).
    #[must_use]
    pub fn delta_from(&self, prior: &TeamRecord) -> TeamDelta {
        TeamDelta {
            wins: i64::from(self.wins) - i64::from(prior.wins),
            losses: i64::from(self.losses) - i64::from(prior.losses),
        }
    }
}

/// Point-in-time mapping of team display name to record.
pub type TeamRecordSnapshot = BTreeMap<String, TeamRecord>;

/// Change in a team's record between two snapshots. Derived, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamDelta {
    pub wins: i64,
    pub losses: i64,
}

impl TeamDelta {
    /// Whether this delta belongs in the set of changes to apply.
    ///
    /// Matches the reporting rule: at least one positive component. An
    /// all-zero delta is a no-op; a purely downward correction stays out of
    /// the change set until some later positive movement carries it along.
    #[must_use]
    pub fn is_change(&self) -> bool {
        self.wins > 0 || self.losses > 0
    }
}

impl std::fmt::Display for TeamDelta {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:+}W, {:+}L", self.wins, self.losses)
    }
}
