//! Trait definitions (hexagonal ports). Depend only on domain.

mod source;
mod store;

pub use source::RecordSource;
pub use store::StateStore;
