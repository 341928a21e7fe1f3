//! The persisted pool aggregate: team baseline plus participant ledgers.
//!
//! The JSON shape of these types is the one bit-exact external contract:
//! top-level `team_records`, `players`, and `last_updated` (`YYYY-MM-DD`).
//! Earnings serialize as a plain JSON number.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::money::Earnings;
use super::record::{TeamDelta, TeamRecordSnapshot};

/// One participant's cumulative tally across the teams they have claimed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipantLedger {
    /// Teams this participant has claimed. May be empty; claims may overlap
    /// with other participants'.
    pub teams: Vec<String>,
    pub wins: u32,
    pub losses: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub earnings: Earnings,
}

impl ParticipantLedger {
    #[must_use]
    pub fn new(teams: Vec<String>) -> Self {
        Self {
            teams,
            wins: 0,
            losses: 0,
            earnings: Earnings::ZERO,
        }
    }

    /// Fold one team's delta into the tally. Win/loss counters saturate at
    /// zero if a downward correction overshoots; earnings move exactly.
    pub(crate) fn apply(&mut self, delta: &TeamDelta, rate: Earnings) {
        self.wins = add_signed(self.wins, delta.wins);
        self.losses = add_signed(self.losses, delta.losses);
        self.earnings += Earnings::from(delta.wins) * rate;
        self.earnings -= Earnings::from(delta.losses) * rate;
    }
}

fn add_signed(count: u32, delta: i64) -> u32 {
    let result = i64::from(count) + delta;
    u32::try_from(result.max(0)).unwrap_or(u32::MAX)
}

/// The whole persisted state. Read once per run, transformed in memory,
/// rewritten in full.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoolState {
    pub team_records: TeamRecordSnapshot,
    pub players: BTreeMap<String, ParticipantLedger>,
    pub last_updated: NaiveDate,
}
