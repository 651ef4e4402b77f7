//! Wire DTOs for the operator admin endpoints and the keyword search endpoints.
//!
//! DESIGN
//! ======
//! Shapes mirror the backend's serializers. Extra fields are tolerated so the
//! server can grow its payloads without breaking the client.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use super::error::ApiError;

/// A search operator as returned by the edit endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorRecord {
    /// Backend document identifier.
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    /// Operator name, used as the `name:` prefix in search tags.
    pub name: String,
    /// XPath expressions the operator searches in.
    #[serde(default)]
    pub xpath_list: Vec<String>,
}

impl OperatorRecord {
    /// XPath list as the multi-line value shown in the edit form.
    pub fn xpath_text(&self) -> String {
        self.xpath_list.join("\n")
    }
}

/// One entry of the operator list endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorListItem {
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub xpath_list: Vec<String>,
}

/// Raw autocomplete entry; only entries with a label are shown.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SuggestionEntry {
    #[serde(default)]
    pub label: Option<String>,
}

/// Body of the suggestions endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct SuggestionsResponse {
    #[serde(default)]
    pub suggestions: Vec<SuggestionEntry>,
}

impl SuggestionsResponse {
    /// Labeled entries in server order.
    pub fn labeled(self) -> Vec<Suggestion> {
        self.suggestions
            .into_iter()
            .filter_map(|entry| entry.label)
            .filter(|label| !label.is_empty())
            .map(Suggestion::from_label)
            .collect()
    }
}

/// A rendered autocomplete choice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Suggestion {
    pub label: String,
    pub value: String,
}

impl Suggestion {
    pub fn from_label(label: String) -> Self {
        Self { value: label.clone(), label }
    }
}

/// Result of a call whose failure path can carry a replacement form.
///
/// The backend answers a form request with JSON when it accepts it and with
/// a rendered form fragment when it does not (validation errors inline) or
/// when it prefers to hand back a prefilled form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormOutcome<T> {
    /// JSON payload on a success status.
    Success(T),
    /// Server-rendered form markup that replaces the dialog's form body.
    Markup(String),
    /// Transport failure or a response the dialog cannot use.
    Failed(ApiError),
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    id_from_value(value).ok_or_else(|| D::Error::custom("expected string or integer id"))
}

fn deserialize_optional_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    id_from_value(value)
        .map(Some)
        .ok_or_else(|| D::Error::custom("expected string or integer id"))
}

fn id_from_value(value: serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Number(n) if n.is_i64() || n.is_u64() => Some(n.to_string()),
        _ => None,
    }
}
