//! Dataset statistics

use super::record::Dataset;
use serde::Serialize;
use std::collections::BTreeMap;

/// Bucket for records without a registration status
pub const UNCLASSIFIED_STATUS: &str = "unclassified";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Statistics {
    pub total: usize,
    pub status_counts: BTreeMap<String, usize>,
}

/// Count records per distinct `registerStatus` value
pub fn statistics(dataset: &Dataset) -> Statistics {
    let mut status_counts = BTreeMap::new();

    for record in dataset.records() {
        let status = record
            .register_status
            .as_deref()
            .unwrap_or(UNCLASSIFIED_STATUS);
        *status_counts.entry(status.to_string()).or_insert(0) += 1;
    }

    Statistics {
        total: dataset.len(),
        status_counts,
    }
}
