//! Deserialization of the stats API's tabular standings payload.
//!
//! The endpoint returns column-oriented result sets: a `headers` array names
//! the columns and each `rowSet` entry is a positional array of values. The
//! decoder resolves the columns it needs by header name, so reordering or
//! new columns upstream are harmless.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{Result, SourceError};

#[derive(Debug, Deserialize)]
pub struct StandingsResponse {
    #[serde(rename = "resultSets")]
    pub result_sets: Vec<ResultSet>,
}

#[derive(Debug, Deserialize)]
pub struct ResultSet {
    pub name: String,
    pub headers: Vec<String>,
    #[serde(rename = "rowSet")]
    pub row_set: Vec<Vec<Value>>,
}

/// One decoded standings row, still keyed by the source's full team name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandingsRow {
    pub full_name: String,
    pub wins: u32,
    pub losses: u32,
}

impl StandingsResponse {
    /// Decode the `Standings` result set into rows.
    pub fn standings_rows(&self) -> Result<Vec<StandingsRow>> {
        let set = self
            .result_sets
            .iter()
            .find(|s| s.name == "Standings")
            .ok_or_else(|| SourceError::Malformed("no Standings result set".into()))?;

        let city = column_index(set, "TeamCity")?;
        let name = column_index(set, "TeamName")?;
        let wins = column_index(set, "WINS")?;
        let losses = column_index(set, "LOSSES")?;

        set.row_set
            .iter()
            .map(|row| {
                Ok(StandingsRow {
                    full_name: format!("{} {}", string_at(row, city)?, string_at(row, name)?),
                    wins: count_at(row, wins)?,
                    losses: count_at(row, losses)?,
                })
            })
            .collect()
    }
}

fn column_index(set: &ResultSet, header: &str) -> Result<usize> {
    set.headers
        .iter()
        .position(|h| h == header)
        .ok_or_else(|| SourceError::Malformed(format!("missing column {header}")).into())
}

fn string_at(row: &[Value], index: usize) -> Result<&str> {
    row.get(index)
        .and_then(Value::as_str)
        .ok_or_else(|| SourceError::Malformed(format!("non-string value at column {index}")).into())
}

fn count_at(row: &[Value], index: usize) -> Result<u32> {
    let raw = row
        .get(index)
        .and_then(Value::as_i64)
        .ok_or_else(|| SourceError::Malformed(format!("non-numeric value at column {index}")))?;
    u32::try_from(raw).map_err(|_| {
        SourceError::Malformed(format!("negative win/loss count at column {index}")).into()
    })
}
