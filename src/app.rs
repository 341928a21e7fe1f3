//! App orchestration: one update run from fetch to write-back.

use std::collections::BTreeMap;

use chrono::{Local, NaiveDate};
use tracing::{info, warn};

use crate::adapters::nba::NbaStandingsClient;
use crate::adapters::stores::{JsonFileStore, StoreLock};
use crate::config::Config;
use crate::domain::{Reconciler, RoundingPolicy, TeamDelta};
use crate::error::Result;
use crate::ports::{RecordSource, StateStore};

/// What one update run did, for the operator summary.
#[derive(Debug, Clone)]
pub struct UpdateReport {
    /// Teams whose records moved, and by how much.
    pub changes: BTreeMap<String, TeamDelta>,
    /// Teams the source actually returned.
    pub teams_fetched: usize,
    /// Teams the pool tracks.
    pub teams_expected: usize,
    /// Participants on the ledger.
    pub players: usize,
    /// False in dry-run mode: nothing was written back.
    pub saved: bool,
}

/// Runs load → fetch → reconcile → save against injected ports.
pub struct Updater {
    reconciler: Reconciler,
    teams_expected: usize,
    dry_run: bool,
}

impl Updater {
    #[must_use]
    pub fn new(rounding: RoundingPolicy, teams_expected: usize) -> Self {
        Self {
            reconciler: Reconciler::new(rounding),
            teams_expected,
            dry_run: false,
        }
    }

    /// Reconcile and report, but skip the write-back.
    #[must_use]
    pub fn dry_run(mut self, enabled: bool) -> Self {
        self.dry_run = enabled;
        self
    }

    /// Execute one run. Prior state is loaded before the fetch so a missing
    /// store fails without touching the network; a failed save discards the
    /// in-memory result and leaves the prior state as it was.
    pub async fn execute(
        &self,
        source: &dyn RecordSource,
        store: &dyn StateStore,
        today: NaiveDate,
    ) -> Result<UpdateReport> {
        let prior = store.load().await?;

        let new_records = source.fetch_current_records().await?;
        if new_records.len() < self.teams_expected {
            warn!(
                source = source.source_name(),
                returned = new_records.len(),
                expected = self.teams_expected,
                "Partial coverage; missing teams keep their prior record this run"
            );
        }

        let outcome = self.reconciler.reconcile(&prior, &new_records, today);

        if self.dry_run {
            info!(changes = outcome.changes.len(), "Dry run, skipping write-back");
        } else {
            store.save(&outcome.state).await?;
        }

        for (team, delta) in &outcome.changes {
            info!(team = %team, delta = %delta, "Record changed");
        }

        Ok(UpdateReport {
            changes: outcome.changes,
            teams_fetched: new_records.len(),
            teams_expected: self.teams_expected,
            players: outcome.state.players.len(),
            saved: !self.dry_run,
        })
    }
}

/// Main application struct.
pub struct App;

impl App {
    /// Wire the configured adapters and run one update.
    pub async fn run(config: &Config, dry_run: bool) -> Result<UpdateReport> {
        let directory = config.team_directory();
        let source = NbaStandingsClient::new(&config.source, directory.clone())?;
        let store = JsonFileStore::new(config.store.data_file.clone());

        // Held across the whole cycle; a concurrent run fails fast instead
        // of silently losing this one's deltas.
        let _lock = StoreLock::acquire(store.path())?;

        let updater = Updater::new(config.pool.rounding, directory.len()).dry_run(dry_run);
        updater
            .execute(&source, &store, Local::now().date_naive())
            .await
    }
}
