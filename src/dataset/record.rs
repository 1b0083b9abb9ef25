//! Trademark record types
//!
//! Field names on the wire follow the source dataset (camelCase). Every
//! field is optional: a missing key and an explicit `null` both become
//! `None`, which is distinct from a present-but-empty value. Keys the
//! search never looks at are kept verbatim and written back on output.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// One trademark entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Trademark name (primary, usually Korean)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name_eng: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_date: Option<String>,
    /// Registration status, e.g. "등록", "실효", "거절", "출원"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub register_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publication_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publication_date: Option<String>,
    #[serde(
        default,
        deserialize_with = "string_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub registration_number: Option<Vec<String>>,
    #[serde(
        default,
        deserialize_with = "string_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub registration_date: Option<Vec<String>>,
    #[serde(
        default,
        deserialize_with = "string_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub international_reg_numbers: Option<Vec<String>>,
    #[serde(
        default,
        deserialize_with = "string_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub international_reg_date: Option<Vec<String>>,
    #[serde(
        default,
        deserialize_with = "string_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub priority_claim_num_list: Option<Vec<String>>,
    #[serde(
        default,
        deserialize_with = "string_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub priority_claim_date_list: Option<Vec<String>>,
    /// Product main classification codes (two-digit, zero padded in clean data)
    #[serde(
        default,
        deserialize_with = "string_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub asign_product_main_code_list: Option<Vec<String>>,
    #[serde(
        default,
        deserialize_with = "string_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub asign_product_sub_code_list: Option<Vec<String>>,
    #[serde(
        default,
        deserialize_with = "string_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub vienna_code_list: Option<Vec<String>>,
    /// Any other source keys, e.g. `drawing` or `fullText`
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Accepts `null`, a single string, or an array of strings.
///
/// Some exports write one-element lists as bare strings; both shapes
/// end up as a list so the matchers only deal with one representation.
fn string_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        None => None,
        Some(OneOrMany::One(value)) => Some(vec![value]),
        Some(OneOrMany::Many(values)) => Some(values),
    })
}

/// The full, read-only record collection
///
/// Built once at startup and shared behind an `Arc`; nothing mutates it
/// after construction.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl From<Vec<Record>> for Dataset {
    fn from(records: Vec<Record>) -> Self {
        Self::new(records)
    }
}
