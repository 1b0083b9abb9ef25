use super::matcher::{parse_code_list, FieldFilter};
use super::fuzzy::similarity_ratio;
use super::ranking::SIMILARITY_THRESHOLD;
use super::{Query, SearchEngine};
use crate::dataset::{Dataset, Record};
use proptest::prelude::*;

fn small_text() -> impl Strategy<Value = String> {
    "[a-cA-C]{0,6}"
}

fn record_strategy() -> impl Strategy<Value = Record> {
    (
        proptest::option::of(small_text()),
        proptest::option::of(small_text()),
        proptest::option::of(prop_oneof![Just("등록"), Just("실효"), Just("거절")]),
        proptest::option::of(proptest::collection::vec("[0-9]{1,2}", 0..3)),
        proptest::option::of("[0-9]{0,5}"),
    )
        .prop_map(|(name, eng, status, codes, app)| Record {
            product_name: name,
            product_name_eng: eng,
            register_status: status.map(str::to_string),
            asign_product_main_code_list: codes,
            application_number: app,
            ..Default::default()
        })
}

fn dataset_strategy() -> impl Strategy<Value = Dataset> {
    proptest::collection::vec(record_strategy(), 0..24).prop_map(Dataset::new)
}

fn addresses(results: &[super::SearchResult<'_>]) -> Vec<*const Record> {
    results.iter().map(|r| r.record as *const Record).collect()
}

// Adding criteria can only narrow the result set
proptest! {
    #[test]
    fn more_criteria_yield_subset(
        dataset in dataset_strategy(),
        name in "[a-c]{1,2}",
        code in "[0-9]",
        fuzzy in any::<bool>(),
    ) {
        let engine = SearchEngine::new();
        let base = Query {
            product_name: Some(name),
            use_fuzzy_search: fuzzy,
            ..Default::default()
        };
        let narrowed = Query {
            status: Some("등록".to_string()),
            asign_product_main_code_list: Some(code),
            ..base.clone()
        };

        let wide = addresses(&engine.search(&dataset, &base));
        let narrow = addresses(&engine.search(&dataset, &narrowed));
        prop_assert!(narrow.iter().all(|r| wide.contains(r)));
    }
}

// Re-running a query over its own output changes nothing
proptest! {
    #[test]
    fn search_is_idempotent(dataset in dataset_strategy(), name in "[a-c]{1,3}", fuzzy in any::<bool>()) {
        let engine = SearchEngine::new();
        let query = Query {
            product_name: Some(name),
            use_fuzzy_search: fuzzy,
            ..Default::default()
        };

        let first: Vec<Record> = engine
            .search(&dataset, &query)
            .iter()
            .map(|r| r.record.clone())
            .collect();
        let again = Dataset::new(first.clone());
        let second: Vec<Record> = engine
            .search(&again, &query)
            .iter()
            .map(|r| r.record.clone())
            .collect();

        prop_assert_eq!(first, second);
    }
}

// Fuzzy output is thresholded and sorted by descending score
proptest! {
    #[test]
    fn fuzzy_results_sorted_and_thresholded(dataset in dataset_strategy(), name in "[a-c]{1,4}") {
        let query = Query {
            product_name: Some(name),
            use_fuzzy_search: true,
            ..Default::default()
        };
        let results = SearchEngine::new().search(&dataset, &query);

        for result in &results {
            let score = result.similarity_score.unwrap_or(-1.0);
            prop_assert!(score >= SIMILARITY_THRESHOLD);
        }
        prop_assert!(results
            .windows(2)
            .all(|w| w[0].similarity_score >= w[1].similarity_score));
    }
}

// A limited search is a prefix of the unbounded one
proptest! {
    #[test]
    fn limit_truncates_prefix(dataset in dataset_strategy(), limit in 0usize..30) {
        let engine = SearchEngine::new();
        let query = Query {
            status: Some("등록".to_string()),
            ..Default::default()
        };

        let all = addresses(&engine.search(&dataset, &query));
        let limited = addresses(&engine.search(&dataset, &query.clone().with_limit(Some(limit))));
        prop_assert_eq!(limited.len(), all.len().min(limit));
        prop_assert_eq!(&all[..limited.len()], &limited[..]);
    }
}

// Single digit codes match the same records with or without a leading zero
proptest! {
    #[test]
    fn code_padding_is_transparent(record in record_strategy(), digit in 0u8..10) {
        let unpadded = FieldFilter::MainCodes(parse_code_list(&digit.to_string()));
        let padded = FieldFilter::MainCodes(parse_code_list(&format!("0{}", digit)));
        prop_assert_eq!(unpadded.matches(&record), padded.matches(&record));
    }
}

proptest! {
    #[test]
    fn similarity_bounded_and_symmetric(a in "\\PC{0,12}", b in "\\PC{0,12}") {
        let ab = similarity_ratio(&a, &b);
        prop_assert!((0.0..=100.0).contains(&ab));
        prop_assert_eq!(ab, similarity_ratio(&b, &a));
        prop_assert_eq!(similarity_ratio(&a, &a), 100.0);
    }
}
