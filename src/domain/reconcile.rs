//! The reconciliation core: snapshot deltas applied to participant ledgers.
//!
//! Pure given its inputs. The current date is passed in rather than read
//! from the clock, so a run is reproducible in tests.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::money::{round_earnings, RATE};
use super::record::{TeamDelta, TeamRecordSnapshot};
use super::state::PoolState;

/// How participant earnings are rounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoundingPolicy {
    /// Round each participant to 2 decimals at the end of every run, then
    /// accumulate on the rounded value next run. This compounds rounding
    /// across a season and is the behavior the ledger has always had.
    #[default]
    PerRun,
    /// Accumulate exact amounts; round only when rendering. Useful for
    /// measuring how far per-run rounding drifts.
    DisplayOnly,
}

/// Applies snapshot deltas to every participant ledger.
#[derive(Debug, Clone)]
pub struct Reconciler {
    rate: Decimal,
    rounding: RoundingPolicy,
}

impl Default for Reconciler {
    fn default() -> Self {
        Self::new(RoundingPolicy::PerRun)
    }
}

/// Result of one reconciliation run.
#[derive(Debug, Clone)]
pub struct ReconcileOutcome {
    /// The next persisted state: updated ledgers, the new snapshot as the
    /// new baseline, and `last_updated` set to the run date.
    pub state: PoolState,
    /// Teams whose records moved, for the operator summary.
    pub changes: BTreeMap<String, TeamDelta>,
}

impl Reconciler {
    #[must_use]
    pub fn new(rounding: RoundingPolicy) -> Self {
        Self {
            rate: RATE,
            rounding,
        }
    }

    /// Compute per-team deltas between `prior.team_records` and
    /// `new_records`, fold them into every claiming participant's ledger,
    /// and return the next state with `new_records` as the new baseline.
    ///
    /// Teams only in the new snapshot contribute nothing this run; they
    /// become usable as a baseline from the next run. Teams missing from
    /// the new snapshot generate no delta, and the returned baseline is
    /// `new_records` exactly, not a merge.
    #[must_use]
    pub fn reconcile(
        &self,
        prior: &PoolState,
        new_records: &TeamRecordSnapshot,
        today: NaiveDate,
    ) -> ReconcileOutcome {
        let changes = self.collect_changes(prior, new_records);

        let mut players = prior.players.clone();
        for ledger in players.values_mut() {
            for team in ledger.teams.clone() {
                if let Some(delta) = changes.get(&team) {
                    ledger.apply(delta, self.rate);
                }
            }
            // Once per participant per run, after all claimed teams summed.
            if self.rounding == RoundingPolicy::PerRun {
                ledger.earnings = round_earnings(ledger.earnings);
            }
        }

        ReconcileOutcome {
            state: PoolState {
                team_records: new_records.clone(),
                players,
                last_updated: today,
            },
            changes,
        }
    }

    fn collect_changes(
        &self,
        prior: &PoolState,
        new_records: &TeamRecordSnapshot,
    ) -> BTreeMap<String, TeamDelta> {
        let mut changes = BTreeMap::new();
        for (team, prior_record) in &prior.team_records {
            let Some(new_record) = new_records.get(team) else {
                // Missing from this fetch; no delta this run.
                continue;
            };
            let delta = new_record.delta_from(prior_record);
            if delta.is_change() {
                changes.insert(team.clone(), delta);
            }
        }
        changes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::TeamRecord;
    use crate::domain::state::ParticipantLedger;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn state_with(
        records: &[(&str, u32, u32)],
        players: &[(&str, &[&str], u32, u32, Decimal)],
    ) -> PoolState {
        let team_records = records
            .iter()
            .map(|(name, w, l)| (name.to_string(), TeamRecord::new(*w, *l)))
            .collect();
        let players = players
            .iter()
            .map(|(name, teams, wins, losses, earnings)| {
                let mut ledger =
                    ParticipantLedger::new(teams.iter().map(|t| t.to_string()).collect());
                ledger.wins = *wins;
                ledger.losses = *losses;
                ledger.earnings = *earnings;
                (name.to_string(), ledger)
            })
            .collect();
        PoolState {
            team_records,
            players,
            last_updated: date(2026, 1, 1),
        }
    }

    #[test]
    fn single_team_delta_reaches_the_claiming_participant() {
        let prior = state_with(
            &[("Team A", 10, 5)],
            &[("P1", &["Team A"], 10, 5, dec!(12.50))],
        );
        let mut new_records = TeamRecordSnapshot::new();
        new_records.insert("Team A".into(), TeamRecord::new(11, 5));

        let outcome = Reconciler::default().reconcile(&prior, &new_records, date(2026, 1, 2));

        let p1 = &outcome.state.players["P1"];
        assert_eq!(p1.wins, 11);
        assert_eq!(p1.losses, 5);
        assert_eq!(p1.earnings, dec!(12.75));
        assert_eq!(outcome.state.team_records["Team A"], TeamRecord::new(11, 5));
        assert_eq!(outcome.changes.len(), 1);
        assert_eq!(outcome.changes["Team A"], TeamDelta { wins: 1, losses: 0 });
        assert_eq!(outcome.state.last_updated, date(2026, 1, 2));
    }

    #[test]
    fn identical_snapshot_changes_nothing() {
        let prior = state_with(
            &[("Celtics", 20, 4), ("Lakers", 15, 9)],
            &[("P1", &["Celtics"], 20, 4, dec!(4.00))],
        );
        let outcome =
            Reconciler::default().reconcile(&prior, &prior.team_records, date(2026, 1, 2));

        assert!(outcome.changes.is_empty());
        assert_eq!(outcome.state.team_records, prior.team_records);
        assert_eq!(outcome.state.players, prior.players);
    }

    #[test]
    fn unclaimed_team_moves_the_baseline_but_no_ledger() {
        let prior = state_with(
            &[("Celtics", 20, 4), ("Lakers", 15, 9)],
            &[("P1", &["Celtics"], 20, 4, dec!(4.00))],
        );
        let mut new_records = prior.team_records.clone();
        new_records.insert("Lakers".into(), TeamRecord::new(16, 10));

        let outcome = Reconciler::default().reconcile(&prior, &new_records, date(2026, 1, 2));

        assert_eq!(outcome.changes.len(), 1);
        assert!(outcome.changes.contains_key("Lakers"));
        assert_eq!(outcome.state.players["P1"], prior.players["P1"]);
        assert_eq!(outcome.state.team_records["Lakers"], TeamRecord::new(16, 10));
    }

    #[test]
    fn co_owned_team_pays_each_claimant_in_full() {
        let prior = state_with(
            &[("Suns", 8, 8)],
            &[
                ("P1", &["Suns"], 8, 8, dec!(0.00)),
                ("P2", &["Suns"], 8, 8, dec!(0.00)),
            ],
        );
        let mut new_records = TeamRecordSnapshot::new();
        new_records.insert("Suns".into(), TeamRecord::new(10, 8));

        let outcome = Reconciler::default().reconcile(&prior, &new_records, date(2026, 1, 2));

        assert_eq!(outcome.state.players["P1"].earnings, dec!(0.50));
        assert_eq!(outcome.state.players["P2"].earnings, dec!(0.50));
    }

    #[test]
    fn multi_team_contributions_round_once_after_summation() {
        // Two teams whose per-team contributions would each round, summed
        // before the single rounding step.
        let prior = state_with(
            &[("Bucks", 10, 5), ("Heat", 9, 6)],
            &[("P1", &["Bucks", "Heat"], 19, 11, dec!(2.00))],
        );
        let mut new_records = TeamRecordSnapshot::new();
        new_records.insert("Bucks".into(), TeamRecord::new(12, 5));
        new_records.insert("Heat".into(), TeamRecord::new(9, 8));

        let outcome = Reconciler::default().reconcile(&prior, &new_records, date(2026, 1, 2));

        // +2W on Bucks (+0.50), +2L on Heat (-0.50): net zero.
        let p1 = &outcome.state.players["P1"];
        assert_eq!(p1.wins, 21);
        assert_eq!(p1.losses, 13);
        assert_eq!(p1.earnings, dec!(2.00));
    }

    #[test]
    fn team_new_to_the_snapshot_contributes_nothing_until_next_run() {
        let prior = state_with(&[("Celtics", 20, 4)], &[("P1", &["Nets"], 0, 0, dec!(0.00))]);
        let mut new_records = prior.team_records.clone();
        new_records.insert("Nets".into(), TeamRecord::new(6, 18));

        let first = Reconciler::default().reconcile(&prior, &new_records, date(2026, 1, 2));
        assert!(first.changes.is_empty());
        assert_eq!(first.state.players["P1"].earnings, dec!(0.00));

        // Next run the team is in the baseline and deltas flow normally.
        let mut later = new_records.clone();
        later.insert("Nets".into(), TeamRecord::new(7, 18));
        let second = Reconciler::default().reconcile(&first.state, &later, date(2026, 1, 3));
        assert_eq!(second.changes["Nets"], TeamDelta { wins: 1, losses: 0 });
        assert_eq!(second.state.players["P1"].earnings, dec!(0.25));
    }

    #[test]
    fn participant_with_no_teams_is_untouched_but_re_rounded() {
        let prior = state_with(&[("Celtics", 20, 4)], &[("P1", &[], 0, 0, dec!(1.005))]);
        let mut new_records = TeamRecordSnapshot::new();
        new_records.insert("Celtics".into(), TeamRecord::new(21, 4));

        let outcome = Reconciler::default().reconcile(&prior, &new_records, date(2026, 1, 2));

        let p1 = &outcome.state.players["P1"];
        assert_eq!(p1.wins, 0);
        assert_eq!(p1.losses, 0);
        // Stored value was unrounded; per-run policy re-rounds it.
        assert_eq!(p1.earnings, dec!(1.00));
    }

    #[test]
    fn unknown_claimed_team_degrades_to_no_effect() {
        let prior = state_with(
            &[("Celtics", 20, 4)],
            &[("P1", &["Sonics"], 3, 3, dec!(0.00))],
        );
        let mut new_records = TeamRecordSnapshot::new();
        new_records.insert("Celtics".into(), TeamRecord::new(21, 4));

        let outcome = Reconciler::default().reconcile(&prior, &new_records, date(2026, 1, 2));
        assert_eq!(outcome.state.players["P1"], prior.players["P1"]);
    }

    #[test]
    fn downward_correction_rides_along_with_a_positive_change() {
        // Wins revised down while losses tick up: the delta qualifies as a
        // change (losses > 0) and the negative win component is applied
        // exactly, not clamped.
        let prior = state_with(&[("Jazz", 10, 5)], &[("P1", &["Jazz"], 10, 5, dec!(1.25))]);
        let mut new_records = TeamRecordSnapshot::new();
        new_records.insert("Jazz".into(), TeamRecord::new(9, 6));

        let outcome = Reconciler::default().reconcile(&prior, &new_records, date(2026, 1, 2));

        let p1 = &outcome.state.players["P1"];
        assert_eq!(p1.wins, 9);
        assert_eq!(p1.losses, 6);
        // -1W (-0.25) and +1L (-0.25).
        assert_eq!(p1.earnings, dec!(0.75));
    }

    #[test]
    fn purely_downward_correction_is_not_a_change() {
        let prior = state_with(&[("Jazz", 10, 5)], &[("P1", &["Jazz"], 10, 5, dec!(1.25))]);
        let mut new_records = TeamRecordSnapshot::new();
        new_records.insert("Jazz".into(), TeamRecord::new(9, 5));

        let outcome = Reconciler::default().reconcile(&prior, &new_records, date(2026, 1, 2));

        assert!(outcome.changes.is_empty());
        assert_eq!(outcome.state.players["P1"], prior.players["P1"]);
        // Baseline still replaced verbatim, so the correction lands there.
        assert_eq!(outcome.state.team_records["Jazz"], TeamRecord::new(9, 5));
    }

    #[test]
    fn display_only_policy_skips_per_run_rounding() {
        let prior = state_with(&[("Celtics", 20, 4)], &[("P1", &[], 0, 0, dec!(1.005))]);
        let outcome = Reconciler::new(RoundingPolicy::DisplayOnly).reconcile(
            &prior,
            &prior.team_records,
            date(2026, 1, 2),
        );
        assert_eq!(outcome.state.players["P1"].earnings, dec!(1.005));
    }

    #[test]
    fn missing_team_keeps_prior_out_of_changes() {
        // Partial fetch: Lakers absent from the new snapshot.
        let prior = state_with(
            &[("Celtics", 20, 4), ("Lakers", 15, 9)],
            &[("P1", &["Lakers"], 15, 9, dec!(1.50))],
        );
        let mut new_records = TeamRecordSnapshot::new();
        new_records.insert("Celtics".into(), TeamRecord::new(21, 4));

        let outcome = Reconciler::default().reconcile(&prior, &new_records, date(2026, 1, 2));

        assert_eq!(outcome.changes.len(), 1);
        assert!(!outcome.changes.contains_key("Lakers"));
        assert_eq!(outcome.state.players["P1"], prior.players["P1"]);
        // Verbatim replacement means the partial snapshot IS the new baseline.
        assert!(!outcome.state.team_records.contains_key("Lakers"));
    }
}
