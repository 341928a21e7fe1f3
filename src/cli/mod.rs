//! Command-line interface definitions.

pub mod check;
pub mod output;
pub mod status;
pub mod update;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Courtside - standings updater and earnings ledger for informal NBA pools.
#[derive(Parser, Debug)]
#[command(name = "courtside")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch current records, apply deltas to the ledger, write back
    Update(UpdateArgs),

    /// Show the persisted leaderboard
    Status(ConfigPathArg),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Subcommands for `courtside check`
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate configuration file
    Config(ConfigPathArg),
    /// Fetch once and report team coverage
    Source(ConfigPathArg),
}

/// Shared argument for commands that only need a config path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,
}

/// Arguments for the `update` subcommand.
#[derive(Parser, Debug)]
pub struct UpdateArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Fetch and reconcile but don't write the result back
    #[arg(long)]
    pub dry_run: bool,

    /// Override log level (debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Use JSON log format instead of pretty
    #[arg(long)]
    pub json_logs: bool,
}
