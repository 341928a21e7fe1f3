//! Handler for `check config`: load, validate, echo the resolved settings.

use crate::cli::{output, ConfigPathArg};
use crate::config::Config;
use crate::error::Result;

/// Execute the config check.
pub fn execute(args: &ConfigPathArg) -> Result<()> {
    let config = Config::load(&args.config)?;

    output::section("Configuration");
    output::key_value("Config file", args.config.display());
    output::key_value("Source", &config.source.api_url);
    output::key_value("Season", &config.source.season);
    output::key_value("Data file", config.store.data_file.display());
    output::key_value("Teams", config.team_directory().len());
    output::key_value("Rounding", format!("{:?}", config.pool.rounding));
    output::ok("Configuration is valid");

    Ok(())
}
