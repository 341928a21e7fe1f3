//! Courtside - standings updater and earnings ledger for informal NBA pools.
//!
//! Each run fetches current team win/loss records, computes per-team deltas
//! against the persisted baseline, credits or debits every participant who
//! claimed a changed team at a fixed rate per win/loss, and atomically
//! rewrites the persisted state.
//!
//! # Modules
//!
//! - [`domain`] - Pure types and the reconciliation core; no I/O
//! - [`ports`] - Trait seams: the record source and the state store
//! - [`adapters`] - NBA stats API client, JSON file store, in-memory store
//! - [`app`] - Orchestration of one run: lock, load, fetch, reconcile, save
//! - [`cli`] - clap commands: `update`, `status`, `check`
//! - [`config`] - TOML configuration and logging setup
//! - [`error`] - Error types for the crate

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod ports;
