//! Application configuration loading and validation.
//!
//! Configuration comes from a TOML file; `.env` is honored for ad-hoc
//! overrides of the process environment (log filtering via `RUST_LOG`).

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};

use crate::domain::{RoundingPolicy, TeamDirectory};
use crate::error::{ConfigError, Result};

/// Main application configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub pool: PoolConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Optional override of the external-name table: `full name = "Display"`.
    /// Absent means the standard NBA table.
    #[serde(default)]
    pub teams: Option<HashMap<String, String>>,
}

/// Standings source configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    pub api_url: String,
    /// Season string the stats API expects, e.g. `2025-26`.
    pub season: String,
    pub timeout_secs: u64,
    #[serde(default)]
    pub retry: RetryConfig,
}

/// Bounded exponential backoff for transient fetch failures.
#[derive(Debug, Clone, Deserialize)]
pub struct RetryConfig {
    pub max_attempts: u32,
    pub initial_delay_ms: u64,
    pub backoff_multiplier: f64,
    pub max_delay_ms: u64,
}

/// Snapshot store configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    pub data_file: PathBuf,
}

/// Pool-level knobs.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PoolConfig {
    #[serde(default)]
    pub rounding: RoundingPolicy,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;

        let config: Self = toml::from_str(&content).map_err(ConfigError::Parse)?;

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.source.api_url.is_empty() {
            return Err(ConfigError::MissingField { field: "api_url" }.into());
        }
        if self.source.season.is_empty() {
            return Err(ConfigError::MissingField { field: "season" }.into());
        }
        if self.source.retry.max_attempts == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_attempts",
                reason: "must be at least 1".into(),
            }
            .into());
        }
        if self.source.retry.backoff_multiplier < 1.0 {
            return Err(ConfigError::InvalidValue {
                field: "backoff_multiplier",
                reason: format!("{} is below 1.0", self.source.retry.backoff_multiplier),
            }
            .into());
        }
        if self.store.data_file.as_os_str().is_empty() {
            return Err(ConfigError::MissingField { field: "data_file" }.into());
        }
        if let Some(teams) = &self.teams {
            if teams.is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "teams",
                    reason: "override table must not be empty".into(),
                }
                .into());
            }
        }
        Ok(())
    }

    /// Directory the source adapter maps external names through.
    #[must_use]
    pub fn team_directory(&self) -> TeamDirectory {
        match &self.teams {
            Some(map) => TeamDirectory::from_map(map.clone()),
            None => TeamDirectory::nba(),
        }
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}

impl LoggingConfig {
    /// Initialize the tracing subscriber with this logging configuration.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        match self.format.as_str() {
            "json" => {
                fmt().json().with_env_filter(filter).init();
            }
            _ => {
                fmt().with_env_filter(filter).init();
            }
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            api_url: "https://stats.nba.com".into(),
            season: "2025-26".into(),
            timeout_secs: 30,
            retry: RetryConfig::default(),
        }
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 4,
            initial_delay_ms: 500,
            backoff_multiplier: 2.0,
            max_delay_ms: 8_000,
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("data/standings.json"),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "pretty".into(),
        }
    }
}
