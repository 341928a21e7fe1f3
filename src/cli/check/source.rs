//! Handler for `check source`: one fetch, coverage report.

use crate::adapters::nba::NbaStandingsClient;
use crate::cli::{output, ConfigPathArg};
use crate::config::Config;
use crate::error::Result;
use crate::ports::RecordSource;

/// Execute the source check.
pub async fn execute(args: &ConfigPathArg) -> Result<()> {
    let config = Config::load(&args.config)?;
    let directory = config.team_directory();
    let client = NbaStandingsClient::new(&config.source, directory.clone())?;

    output::section("Source check");
    output::key_value("Source", client.source_name());
    output::key_value("Season", &config.source.season);

    let snapshot = client.fetch_current_records().await?;

    output::key_value("Coverage", format!("{}/{}", snapshot.len(), directory.len()));
    if snapshot.len() < directory.len() {
        output::warn("Source returned fewer teams than the pool tracks");
    } else {
        output::ok("Full coverage");
    }

    Ok(())
}
