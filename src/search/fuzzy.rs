//! Fuzzy name similarity
//!
//! Scores are the normalized Indel similarity of two strings, scaled to
//! 0..=100: `100 * 2 * lcs(a, b) / (len(a) + len(b))`, where lengths
//! count Unicode scalar values. Only insertions and deletions are edit
//! operations, so "aple" vs "apple" scores 88.9.

use crate::dataset::Record;
use unicode_normalization::UnicodeNormalization;

/// Similarity ratio between two strings in the range 0..=100
///
/// Two empty strings are identical and score 100. Comparison is exact;
/// callers normalize case beforehand.
#[allow(dead_code)] // Matcher-free entry point for one-off comparisons
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    ratio_of(&a, &b)
}

fn ratio_of(a: &[char], b: &[char]) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 100.0;
    }

    let common = lcs_len(a, b);
    100.0 * (2 * common) as f64 / total as f64
}

/// Longest common subsequence length, single rolling row
fn lcs_len(a: &[char], b: &[char]) -> usize {
    // Keep the shorter string in the row
    let (outer, inner) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    if inner.is_empty() {
        return 0;
    }

    let mut row = vec![0usize; inner.len() + 1];
    for &oc in outer {
        let mut diagonal = 0;
        for (j, &ic) in inner.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if oc == ic {
                diagonal + 1
            } else {
                above.max(row[j])
            };
            diagonal = above;
        }
    }

    row[inner.len()]
}

/// Scores records against one fuzzy name query
///
/// The query is normalized once (NFC, lowercase); each candidate name is
/// normalized the same way before comparison.
#[derive(Debug, Clone)]
pub struct FuzzyMatcher {
    query: Vec<char>,
}

impl FuzzyMatcher {
    pub fn new(query: &str) -> Self {
        Self {
            query: Self::normalize_for_matching(query).chars().collect(),
        }
    }

    /// Unicode NFC composition followed by lowercasing
    ///
    /// Hangul names can arrive decomposed (NFD); composing first keeps
    /// syllable counts comparable.
    pub fn normalize_for_matching(text: &str) -> String {
        text.nfc().collect::<String>().to_lowercase()
    }

    /// Similarity between the query and one candidate string
    pub fn score(&self, candidate: &str) -> f64 {
        let candidate: Vec<char> = Self::normalize_for_matching(candidate).chars().collect();
        ratio_of(&self.query, &candidate)
    }

    /// Best similarity over the primary and English names
    ///
    /// A missing or empty name contributes 0.
    pub fn score_record(&self, record: &Record) -> f64 {
        let score_name = |name: &Option<String>| match name.as_deref() {
            Some(name) if !name.is_empty() => self.score(name),
            _ => 0.0,
        };

        score_name(&record.product_name).max(score_name(&record.product_name_eng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 0.01
    }

    #[test]
    fn test_similarity_identical() {
        assert_eq!(similarity_ratio("apple", "apple"), 100.0);
        assert_eq!(similarity_ratio("", ""), 100.0);
    }

    #[test]
    fn test_similarity_disjoint() {
        assert_eq!(similarity_ratio("abc", "xyz"), 0.0);
        assert_eq!(similarity_ratio("abc", ""), 0.0);
    }

    #[test]
    fn test_similarity_single_deletion() {
        // 2 * 4 / 9
        assert!(approx(similarity_ratio("aple", "apple"), 88.89));
    }

    #[test]
    fn test_similarity_is_symmetric() {
        let pairs = [("kitten", "sitting"), ("사과", "사과나무"), ("acme", "acne corp")];
        for (a, b) in pairs {
            assert_eq!(similarity_ratio(a, b), similarity_ratio(b, a));
        }
    }

    #[test]
    fn test_similarity_substitution_counts_twice() {
        // kitten / sitting: lcs "ittn" = 4, lengths 6 + 7
        assert!(approx(similarity_ratio("kitten", "sitting"), 800.0 / 13.0));
    }

    #[test]
    fn test_similarity_exact_forty() {
        // lcs "ab" = 2 over 10 characters
        assert_eq!(similarity_ratio("abcde", "abxyz"), 40.0);
    }

    #[test]
    fn test_similarity_counts_characters_not_bytes() {
        // Each Hangul syllable is one character
        assert!(approx(similarity_ratio("사과", "사과나무"), 200.0 * 2.0 / 6.0));
    }

    #[test]
    fn test_matcher_is_case_insensitive() {
        let matcher = FuzzyMatcher::new("APLE");
        assert!(approx(matcher.score("Apple"), 88.89));
    }

    #[test]
    fn test_matcher_composes_decomposed_hangul() {
        let composed = "한";
        let decomposed: String = composed.nfd().collect();
        assert_ne!(composed, decomposed);

        let matcher = FuzzyMatcher::new(composed);
        assert_eq!(matcher.score(&decomposed), 100.0);
    }

    #[test]
    fn test_score_record_takes_best_name() {
        let matcher = FuzzyMatcher::new("acme");
        let record = Record {
            product_name: Some("애크미".to_string()),
            product_name_eng: Some("ACME".to_string()),
            ..Default::default()
        };
        assert_eq!(matcher.score_record(&record), 100.0);
    }

    #[test]
    fn test_score_record_missing_names() {
        let matcher = FuzzyMatcher::new("acme");
        assert_eq!(matcher.score_record(&Record::default()), 0.0);

        let empty = Record {
            product_name: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(matcher.score_record(&empty), 0.0);
    }
}
