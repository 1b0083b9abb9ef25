//! Query execution
//!
//! Composes the field predicates, the name filter and the similarity
//! ranker into one pipeline over a borrowed, read-only dataset. Results
//! borrow their records; scores live only on the result.

use super::fuzzy::FuzzyMatcher;
use super::matcher::name_contains;
use super::query::Query;
use super::ranking::{Ranker, Scored};
use crate::dataset::{Dataset, Record};
use serde::Serialize;
use tracing::debug;

/// One matched record with its optional similarity score
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SearchResult<'a> {
    #[serde(flatten)]
    pub record: &'a Record,
    /// Present only for fuzzy name searches
    #[serde(skip_serializing_if = "Option::is_none")]
    pub similarity_score: Option<f64>,
}

impl<'a> SearchResult<'a> {
    fn plain(record: &'a Record) -> Self {
        Self {
            record,
            similarity_score: None,
        }
    }
}

impl<'a> From<Scored<'a>> for SearchResult<'a> {
    fn from(scored: Scored<'a>) -> Self {
        Self {
            record: scored.record,
            similarity_score: Some(scored.score),
        }
    }
}

/// Stateless search pipeline
#[derive(Debug, Clone, Default)]
pub struct SearchEngine {
    ranker: Ranker,
}

impl SearchEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `query` against `dataset`
    ///
    /// Field predicates run first in a single fused pass, then the name
    /// filter. Substring name matching keeps dataset order; fuzzy
    /// matching orders by score with ties in dataset order. Both orders
    /// are independent of when the field predicates run.
    pub fn search<'a>(&self, dataset: &'a Dataset, query: &Query) -> Vec<SearchResult<'a>> {
        let filters = query.field_filters();

        let candidates: Vec<&'a Record> = dataset
            .records()
            .iter()
            .filter(|record| filters.iter().all(|filter| filter.matches(record)))
            .collect();

        let mut results: Vec<SearchResult<'a>> = match query.name() {
            Some(name) if query.use_fuzzy_search => {
                let matcher = FuzzyMatcher::new(name);
                self.ranker
                    .rank(&matcher, &candidates)
                    .into_iter()
                    .map(SearchResult::from)
                    .collect()
            }
            Some(name) => {
                let needle = name.to_lowercase();
                candidates
                    .into_iter()
                    .filter(|record| name_contains(record, &needle))
                    .map(SearchResult::plain)
                    .collect()
            }
            None => candidates.into_iter().map(SearchResult::plain).collect(),
        };

        debug!(
            "Search with {} criteria (fuzzy: {}, filters: {}) matched {} of {} records",
            query.criteria_count(),
            query.use_fuzzy_search,
            filters.len(),
            results.len(),
            dataset.len()
        );

        if let Some(limit) = query.limit {
            results.truncate(limit);
        }

        results
    }
}
