use std::path::PathBuf;

use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Failures from the team record source.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("standings source unreachable after {attempts} attempts: {last_error}")]
    Unavailable { attempts: u32, last_error: String },

    #[error("standings source returned no usable team records")]
    Empty,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("malformed standings response: {0}")]
    Malformed(String),
}

/// Failures from the snapshot store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("no prior state at {}", path.display())]
    NotFound { path: PathBuf },

    #[error("another update holds the lock at {}", path.display())]
    Locked { path: PathBuf },

    #[error("failed to read state file: {0}")]
    Read(#[source] std::io::Error),

    #[error("failed to write state file: {0}")]
    Write(#[source] std::io::Error),

    #[error("failed to parse state file: {0}")]
    Parse(#[source] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
