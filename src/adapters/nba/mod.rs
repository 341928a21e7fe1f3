//! NBA stats API adapter for the [`RecordSource`](crate::ports::RecordSource) port.

mod client;
mod response;

pub use client::NbaStandingsClient;
pub use response::{StandingsResponse, StandingsRow};
