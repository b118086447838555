// src/domain/listing.rs

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One real-estate record as it appears in the dataset file.
///
/// Field access is best-effort: a field that is missing, `null` or of the
/// wrong type falls back to empty text / `None` instead of rejecting the
/// record. The German keys are what the dataset ships with; the English
/// aliases are accepted as well.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Listing {
    #[serde(rename = "titel", alias = "title", default, deserialize_with = "lenient_text")]
    pub title: String,

    #[serde(rename = "stadt", alias = "city", default, deserialize_with = "lenient_text")]
    pub city: String,

    #[serde(rename = "zimmer", alias = "rooms", default, deserialize_with = "lenient_number")]
    pub rooms: Option<f64>,

    #[serde(rename = "kaufpreis", alias = "price", default, deserialize_with = "lenient_number")]
    pub price: Option<f64>,

    #[serde(rename = "groesse_qm", alias = "sizeSqm", default, deserialize_with = "lenient_number")]
    pub size_sqm: Option<f64>,

    #[serde(rename = "bild_url", alias = "imageUrl", default, deserialize_with = "lenient_text")]
    pub image_url: String,

    #[serde(rename = "key_facts", alias = "keyFacts", default, deserialize_with = "lenient_list")]
    pub key_facts: Vec<String>,
}

fn value_to_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value_to_text(Value::deserialize(deserializer)?))
}

/// Numbers and numeric strings (`"3"`, `" 2.5 "`); anything else is `None`.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let number = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(number.filter(|n| n.is_finite()))
}

/// An array of facts, or a single string as one fact. Anything else is empty.
fn lenient_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items.into_iter().map(value_to_text).collect(),
        Value::String(s) => vec![s],
        _ => Vec::new(),
    })
}

impl Listing {
    /// Key facts as a single display line.
    pub fn key_facts_line(&self) -> String {
        self.key_facts.join(" | ")
    }
}
