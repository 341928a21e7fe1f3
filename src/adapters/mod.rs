//! Concrete implementations of the ports.

pub mod nba;
pub mod stores;
