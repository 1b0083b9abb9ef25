//! Trademark dataset: record types, loading and statistics

pub mod loader;
pub mod record;
pub mod stats;

pub use loader::{load, LoadError};
pub use record::{Dataset, Record};
pub use stats::{statistics, Statistics};
