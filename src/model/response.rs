//! Typed view of the search endpoint's JSON response.

use serde::{Deserialize, Deserializer, Serialize};

/// A country as reported by the registry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Country {
    #[serde(deserialize_with = "null_as_default")]
    pub organization_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub iso_code: String,
}

/// Coded value with a human-readable description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodeDescription {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
}

/// A single published food/feed safety alert.
///
/// Every field is lenient: absent or `null` values fall back to their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Notification {
    #[serde(deserialize_with = "null_as_default")]
    pub notif_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub ec_validation_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub reference: String,
    #[serde(deserialize_with = "null_as_default")]
    pub notifying_country: Country,
    #[serde(deserialize_with = "null_as_default")]
    pub subject: String,
    #[serde(deserialize_with = "null_as_default")]
    pub product_category: CodeDescription,
    #[serde(deserialize_with = "null_as_default")]
    pub product_type: CodeDescription,
    #[serde(deserialize_with = "null_as_default")]
    pub notification_classification: CodeDescription,
    #[serde(deserialize_with = "null_as_default")]
    pub risk_decision: CodeDescription,
    #[serde(deserialize_with = "null_as_default")]
    pub published: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub origin_countries: Vec<Country>,
}

/// One page of search results. The three top-level fields are required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub notifications: Vec<Notification>,
    pub total_pages: u64,
    pub total_elements: u64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
