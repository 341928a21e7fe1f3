//! Shared builders and scripted ports for integration tests.
#![allow(dead_code)]

use std::collections::VecDeque;

use async_trait::async_trait;
use chrono::NaiveDate;
use parking_lot::Mutex;
use rust_decimal::Decimal;

use courtside::domain::{
    ParticipantLedger, PoolState, TeamRecord, TeamRecordSnapshot,
};
use courtside::error::{Result, SourceError};
use courtside::ports::RecordSource;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn snapshot(records: &[(&str, u32, u32)]) -> TeamRecordSnapshot {
    records
        .iter()
        .map(|(name, w, l)| (name.to_string(), TeamRecord::new(*w, *l)))
        .collect()
}

pub fn ledger(teams: &[&str], wins: u32, losses: u32, earnings: Decimal) -> ParticipantLedger {
    let mut ledger = ParticipantLedger::new(teams.iter().map(|t| t.to_string()).collect());
    ledger.wins = wins;
    ledger.losses = losses;
    ledger.earnings = earnings;
    ledger
}

pub fn state(
    records: &[(&str, u32, u32)],
    players: Vec<(&str, ParticipantLedger)>,
    last_updated: NaiveDate,
) -> PoolState {
    PoolState {
        team_records: snapshot(records),
        players: players
            .into_iter()
            .map(|(name, ledger)| (name.to_string(), ledger))
            .collect(),
        last_updated,
    }
}

/// One scripted fetch outcome.
pub enum ScriptedFetch {
    Records(TeamRecordSnapshot),
    Unavailable,
}

/// Record source that replays a script, one entry per fetch.
#[derive(Default)]
pub struct ScriptedSource {
    script: Mutex<VecDeque<ScriptedFetch>>,
    calls: Mutex<usize>,
}

impl ScriptedSource {
    pub fn new(script: Vec<ScriptedFetch>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            calls: Mutex::new(0),
        }
    }

    pub fn returning(records: TeamRecordSnapshot) -> Self {
        Self::new(vec![ScriptedFetch::Records(records)])
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock()
    }
}

#[async_trait]
impl RecordSource for ScriptedSource {
    async fn fetch_current_records(&self) -> Result<TeamRecordSnapshot> {
        *self.calls.lock() += 1;
        match self.script.lock().pop_front() {
            Some(ScriptedFetch::Records(records)) => Ok(records),
            Some(ScriptedFetch::Unavailable) | None => Err(SourceError::Unavailable {
                attempts: 1,
                last_error: "scripted outage".into(),
            }
            .into()),
        }
    }

    fn source_name(&self) -> &'static str {
        "scripted"
    }
}
