//! Search criteria
//!
//! A `Query` is the validated, engine-facing form of the search
//! parameters. Every criterion is optional; an empty string counts as
//! not supplied.

use super::matcher::{parse_code_list, FieldFilter, TextField};

/// Search criteria plus result limit and name-matching mode
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    /// Matched against the primary and English names
    pub product_name: Option<String>,
    /// Exact registration status
    pub status: Option<String>,
    pub application_number: Option<String>,
    pub publication_number: Option<String>,
    pub registration_number: Option<String>,
    pub international_reg_numbers: Option<String>,
    pub priority_claim_num_list: Option<String>,
    /// Comma separated main classification codes
    pub asign_product_main_code_list: Option<String>,
    pub vienna_code_list: Option<String>,
    /// Maximum number of results; `None` returns every match
    pub limit: Option<usize>,
    /// Rank names by similarity instead of substring matching
    pub use_fuzzy_search: bool,
}

impl Query {
    #[allow(dead_code)]
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(dead_code)]
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    /// Name criterion, if one was given
    pub fn name(&self) -> Option<&str> {
        non_empty(&self.product_name)
    }

    /// Number of criteria that will actually filter
    pub fn criteria_count(&self) -> usize {
        [
            &self.product_name,
            &self.status,
            &self.application_number,
            &self.publication_number,
            &self.registration_number,
            &self.international_reg_numbers,
            &self.priority_claim_num_list,
            &self.asign_product_main_code_list,
            &self.vienna_code_list,
        ]
        .into_iter()
        .filter(|criterion| non_empty(criterion).is_some())
        .count()
    }

    /// True when no criterion is set (limit and mode do not count)
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.criteria_count() == 0
    }

    /// Compile every non-name criterion into a record predicate
    ///
    /// Order: status, main codes, then the substring filters. Selective
    /// equality checks go first so later passes see fewer records.
    pub fn field_filters(&self) -> Vec<FieldFilter> {
        let mut filters = Vec::new();

        if let Some(status) = non_empty(&self.status) {
            filters.push(FieldFilter::Status(status.to_string()));
        }

        if let Some(codes) = non_empty(&self.asign_product_main_code_list) {
            filters.push(FieldFilter::MainCodes(parse_code_list(codes)));
        }

        let substring_criteria = [
            (TextField::ApplicationNumber, &self.application_number),
            (TextField::PublicationNumber, &self.publication_number),
            (TextField::RegistrationNumber, &self.registration_number),
            (
                TextField::InternationalRegNumbers,
                &self.international_reg_numbers,
            ),
            (TextField::PriorityClaimNumList, &self.priority_claim_num_list),
            (TextField::ViennaCodeList, &self.vienna_code_list),
        ];

        for (field, criterion) in substring_criteria {
            if let Some(needle) = non_empty(criterion) {
                filters.push(FieldFilter::Contains {
                    field,
                    needle: needle.to_string(),
                });
            }
        }

        filters
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}
