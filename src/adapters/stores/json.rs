//! Single-document JSON store for the pool state.

use std::io::Write as _;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::PoolState;
use crate::error::{Result, StoreError};
use crate::ports::StateStore;

/// Stores the whole pool aggregate as one JSON document.
///
/// Saves go through a sibling temp file and a rename, so readers never see a
/// torn write and a failed save leaves the prior state intact.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl StateStore for JsonFileStore {
    async fn load(&self) -> Result<PoolState> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(StoreError::NotFound {
                    path: self.path.clone(),
                }
                .into());
            }
            Err(e) => return Err(StoreError::Read(e).into()),
        };

        let state: PoolState = serde_json::from_str(&content).map_err(StoreError::Parse)?;
        debug!(path = %self.path.display(), teams = state.team_records.len(),
            players = state.players.len(), "Loaded pool state");
        Ok(state)
    }

    async fn save(&self, state: &PoolState) -> Result<()> {
        let json = serde_json::to_string_pretty(state)?;

        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, json.as_bytes())
            .await
            .map_err(StoreError::Write)?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(StoreError::Write)?;

        info!(path = %self.path.display(), "Saved pool state");
        Ok(())
    }
}

/// Exclusive-create lock file guarding a load → reconcile → save cycle.
///
/// A second run against the same data file fails fast instead of silently
/// losing the first run's update. The lock is released on drop; a crashed
/// run leaves it behind for the operator to remove.
#[derive(Debug)]
pub struct StoreLock {
    path: PathBuf,
}

impl StoreLock {
    /// Take the lock beside `data_file`, failing if it is already held.
    pub fn acquire(data_file: &Path) -> Result<Self> {
        let path = data_file.with_extension("json.lock");
        match std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
        {
            Ok(mut file) => {
                let _ = writeln!(file, "{}", std::process::id());
                Ok(Self { path })
            }
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                Err(StoreError::Locked { path }.into())
            }
            Err(e) => Err(StoreError::Write(e).into()),
        }
    }
}

impl Drop for StoreLock {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}
