//! Diagnostic subcommands.

pub mod config;
pub mod source;
