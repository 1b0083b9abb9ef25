//! Trademark search: field filters, fuzzy name ranking and query execution
//!
//! The engine borrows a read-only `Dataset` and never mutates it, so any
//! number of searches may run concurrently over one shared dataset.

pub mod engine;
pub mod fuzzy;
pub mod matcher;
pub mod query;
pub mod ranking;

#[cfg(test)]
mod property_tests;

pub use engine::{SearchEngine, SearchResult};
pub use query::Query;
