//! HTTP client for the NBA stats `leaguestandings` endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, REFERER, USER_AGENT};
use reqwest::Client as HttpClient;
use tokio::time::sleep;
use tracing::{debug, info, warn};

use super::response::{StandingsResponse, StandingsRow};
use crate::config::{RetryConfig, SourceConfig};
use crate::domain::{TeamDirectory, TeamRecord, TeamRecordSnapshot};
use crate::error::{Error, Result, SourceError};
use crate::ports::RecordSource;

/// Fetches current team records from the NBA stats API.
///
/// The directory is injected at construction; swapping seasons or tables
/// never touches the reconciliation core.
pub struct NbaStandingsClient {
    http: HttpClient,
    base_url: String,
    season: String,
    retry: RetryConfig,
    directory: TeamDirectory,
}

impl NbaStandingsClient {
    /// Create a client for the configured season and base URL.
    pub fn new(config: &SourceConfig, directory: TeamDirectory) -> Result<Self> {
        // The stats API rejects requests without browser-ish headers.
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static("Mozilla/5.0 (compatible; courtside/0.1)"),
        );
        headers.insert(REFERER, HeaderValue::from_static("https://stats.nba.com/"));

        let http = HttpClient::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(SourceError::Http)?;

        Ok(Self {
            http,
            base_url: config.api_url.clone(),
            season: config.season.clone(),
            retry: config.retry.clone(),
            directory,
        })
    }

    async fn fetch_once(&self) -> Result<TeamRecordSnapshot> {
        let url = format!(
            "{}/stats/leaguestandings?LeagueID=00&Season={}&SeasonType=Regular%20Season",
            self.base_url, self.season
        );

        debug!(url = %url, "Fetching league standings");

        let response: StandingsResponse = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(SourceError::Http)?
            .error_for_status()
            .map_err(SourceError::Http)?
            .json()
            .await
            .map_err(SourceError::Http)?;

        let rows = response.standings_rows()?;
        Ok(map_rows(&rows, &self.directory))
    }
}

#[async_trait]
impl RecordSource for NbaStandingsClient {
    async fn fetch_current_records(&self) -> Result<TeamRecordSnapshot> {
        let mut delay = Duration::from_millis(self.retry.initial_delay_ms);
        let mut last_error = String::new();

        for attempt in 1..=self.retry.max_attempts {
            match self.fetch_once().await {
                Ok(snapshot) if snapshot.is_empty() => {
                    // Nothing mapped: not transient, retrying won't help.
                    return Err(SourceError::Empty.into());
                }
                Ok(snapshot) => {
                    info!(teams = snapshot.len(), attempt, "Fetched team records");
                    return Ok(snapshot);
                }
                // Transport-level trouble is worth retrying; anything else
                // (malformed payload) fails the run immediately.
                Err(Error::Source(SourceError::Http(e))) => {
                    last_error = e.to_string();
                    if attempt < self.retry.max_attempts {
                        warn!(attempt, error = %last_error, delay_ms = delay.as_millis() as u64,
                            "Standings fetch failed, backing off");
                        sleep(delay).await;
                        delay = next_delay(delay, &self.retry);
                    }
                }
                Err(e) => return Err(e),
            }
        }

        Err(SourceError::Unavailable {
            attempts: self.retry.max_attempts,
            last_error,
        }
        .into())
    }

    fn source_name(&self) -> &'static str {
        "NBA stats"
    }
}

fn next_delay(current: Duration, retry: &RetryConfig) -> Duration {
    let scaled = (current.as_millis() as f64 * retry.backoff_multiplier) as u64;
    Duration::from_millis(scaled.min(retry.max_delay_ms))
}

/// Translate decoded rows into the pool's snapshot, keeping only teams the
/// directory knows. The drop is deliberate: the source may list teams or
/// aliases the pool never tracked.
fn map_rows(rows: &[StandingsRow], directory: &TeamDirectory) -> TeamRecordSnapshot {
    let mut snapshot = TeamRecordSnapshot::new();
    for row in rows {
        match directory.display_name(&row.full_name) {
            Some(display) => {
                snapshot.insert(display.to_string(), TeamRecord::new(row.wins, row.losses));
            }
            None => {
                debug!(team = %row.full_name, "Dropping team with no display-name mapping");
            }
        }
    }
    snapshot
}
