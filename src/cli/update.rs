//! Handler for the `update` command.

use tracing::info;

use crate::app::App;
use crate::cli::{output, UpdateArgs};
use crate::config::Config;
use crate::error::Result;

/// Execute the update command.
pub async fn execute(args: &UpdateArgs) -> Result<()> {
    let mut config = Config::load(&args.config)?;

    // Apply CLI overrides
    if let Some(ref level) = args.log_level {
        config.logging.level = level.clone();
    }
    if args.json_logs {
        config.logging.format = "json".to_string();
    }

    config.init_logging();

    if args.dry_run {
        info!("Dry-run mode enabled - no write-back");
    }

    let report = App::run(&config, args.dry_run).await?;

    output::section("Update summary");
    output::key_value("Teams fetched", format!(
        "{}/{}",
        report.teams_fetched, report.teams_expected
    ));
    if report.teams_fetched < report.teams_expected {
        output::warn("Partial coverage; missing teams kept their prior record");
    }
    output::key_value("Participants", report.players);
    output::key_value("Changes", report.changes.len());
    for (team, delta) in &report.changes {
        output::note(&format!("  {team}: {delta}"));
    }
    if report.saved {
        output::ok("Standings updated");
    } else {
        output::note("Dry run - nothing written");
    }

    Ok(())
}
