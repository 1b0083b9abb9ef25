//! Similarity ranking
//!
//! Scores every candidate, drops those under the threshold and orders
//! the rest by descending score. Equal scores keep their input order.

use super::fuzzy::FuzzyMatcher;
use crate::dataset::Record;
use rayon::prelude::*;

/// Minimum similarity (inclusive) for a fuzzy match
pub const SIMILARITY_THRESHOLD: f64 = 40.0;

/// A record paired with its per-query similarity score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scored<'a> {
    pub record: &'a Record,
    pub score: f64,
}

#[derive(Debug, Clone)]
pub struct Ranker {
    threshold: f64,
}

impl Default for Ranker {
    fn default() -> Self {
        Self::new(SIMILARITY_THRESHOLD)
    }
}

impl Ranker {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    #[allow(dead_code)]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn passes(&self, score: f64) -> bool {
        score >= self.threshold
    }

    /// Score and rank `candidates` against the matcher's query
    ///
    /// Scoring runs in parallel; the indexed collect keeps input order so
    /// the stable sort below leaves ties in dataset order.
    pub fn rank<'a>(
        &self,
        matcher: &FuzzyMatcher,
        candidates: &[&'a Record],
    ) -> Vec<Scored<'a>> {
        let scored: Vec<Scored<'a>> = candidates
            .par_iter()
            .filter_map(|&record| {
                let score = matcher.score_record(record);
                self.passes(score).then_some(Scored { record, score })
            })
            .collect();

        sort_by_score(scored)
    }
}

/// Stable sort by descending score
pub fn sort_by_score(mut scored: Vec<Scored<'_>>) -> Vec<Scored<'_>> {
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored
}
