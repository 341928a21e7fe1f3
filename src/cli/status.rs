//! Handler for the `status` command: the persisted leaderboard.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::adapters::stores::JsonFileStore;
use crate::cli::{output, ConfigPathArg};
use crate::config::Config;
use crate::domain::{round_earnings, ParticipantLedger, PoolState};
use crate::error::Result;
use crate::ports::StateStore;

#[derive(Tabled)]
struct LeaderboardRow {
    #[tabled(rename = "Rank")]
    rank: usize,
    #[tabled(rename = "Player")]
    player: String,
    #[tabled(rename = "Record")]
    record: String,
    #[tabled(rename = "Earnings")]
    earnings: String,
}

/// Execute the status command.
pub async fn execute(args: &ConfigPathArg) -> Result<()> {
    let config = Config::load(&args.config)?;
    let store = JsonFileStore::new(config.store.data_file.clone());
    let state = store.load().await?;

    output::section("Leaderboard");
    output::key_value("Last updated", state.last_updated);
    println!("{}", leaderboard_table(&state));

    Ok(())
}

fn leaderboard_table(state: &PoolState) -> String {
    let mut players: Vec<(&String, &ParticipantLedger)> = state.players.iter().collect();
    // Highest earnings first; ties stay in name order.
    players.sort_by(|a, b| b.1.earnings.cmp(&a.1.earnings));

    let rows: Vec<LeaderboardRow> = players
        .into_iter()
        .enumerate()
        .map(|(i, (name, ledger))| LeaderboardRow {
            rank: i + 1,
            player: name.clone(),
            record: format!("{}-{}", ledger.wins, ledger.losses),
            earnings: format!("${:.2}", round_earnings(ledger.earnings)),
        })
        .collect();

    Table::new(rows).with(Style::sharp()).to_string()
}
