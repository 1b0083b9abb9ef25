//! Field matching predicates
//!
//! All comparisons here are case-sensitive. A record whose field is
//! absent never matches; absence is not an error.

use crate::dataset::Record;

/// Record fields that support substring lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    ApplicationNumber,
    PublicationNumber,
    RegistrationNumber,
    InternationalRegNumbers,
    PriorityClaimNumList,
    ViennaCodeList,
}

impl TextField {
    fn contains(&self, record: &Record, needle: &str) -> bool {
        match self {
            TextField::ApplicationNumber => text_contains(&record.application_number, needle),
            TextField::PublicationNumber => text_contains(&record.publication_number, needle),
            TextField::RegistrationNumber => list_contains(&record.registration_number, needle),
            TextField::InternationalRegNumbers => {
                list_contains(&record.international_reg_numbers, needle)
            }
            TextField::PriorityClaimNumList => {
                list_contains(&record.priority_claim_num_list, needle)
            }
            TextField::ViennaCodeList => list_contains(&record.vienna_code_list, needle),
        }
    }
}

/// A compiled, non-name filter criterion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldFilter {
    /// `registerStatus` must equal the value
    Status(String),
    /// At least one normalized code must occur in the main code list
    MainCodes(Vec<String>),
    /// The field must contain `needle` as a substring
    Contains { field: TextField, needle: String },
}

impl FieldFilter {
    pub fn matches(&self, record: &Record) -> bool {
        match self {
            FieldFilter::Status(status) => {
                record.register_status.as_deref() == Some(status.as_str())
            }
            FieldFilter::MainCodes(codes) => codes
                .iter()
                .any(|code| list_contains(&record.asign_product_main_code_list, code)),
            FieldFilter::Contains { field, needle } => field.contains(record, needle),
        }
    }
}

/// Split a comma separated code list and normalize each token
///
/// Blank tokens are dropped, so `"9,"` is the same as `"9"`.
pub fn parse_code_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(normalize_code)
        .collect()
}

/// Zero-pad single digit classification codes: `"7"` becomes `"07"`
///
/// Only a lone digit is padded; every other token, including `"007"`
/// and `"+7"`, passes through as written.
pub fn normalize_code(code: &str) -> String {
    let code = code.trim();
    if code.len() == 1 && code.bytes().all(|b| b.is_ascii_digit()) {
        format!("0{}", code)
    } else {
        code.to_string()
    }
}

/// Case-insensitive name match against either name field
///
/// `needle` must already be lowercased.
pub fn name_contains(record: &Record, needle: &str) -> bool {
    let matches = |name: &Option<String>| {
        name.as_deref()
            .is_some_and(|name| name.to_lowercase().contains(needle))
    };
    matches(&record.product_name) || matches(&record.product_name_eng)
}

fn text_contains(value: &Option<String>, needle: &str) -> bool {
    value.as_deref().is_some_and(|value| value.contains(needle))
}

fn list_contains(values: &Option<Vec<String>>, needle: &str) -> bool {
    values
        .as_deref()
        .is_some_and(|values| values.iter().any(|value| value.contains(needle)))
}
