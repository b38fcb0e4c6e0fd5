use serde::{Deserialize, Deserializer, de::Error};
use serde_json::Value;

/// Xtream panels are inconsistent about quoting ids, so accept both
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    lenient_optional_string(deserializer)?
        .ok_or_else(|| D::Error::custom("Expected string or number"))
}

fn lenient_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        _ => Err(D::Error::custom("Expected string, number, or null")),
    }
}

/// Logos are cosmetic, anything that is not a string or a number is treated as absent
fn tolerant_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// A `get_live_categories` record
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Category {
    #[serde(deserialize_with = "lenient_string")]
    pub category_id: String,
    #[serde(deserialize_with = "lenient_string")]
    pub category_name: String,
}

/// A `get_live_streams` record
///
/// Only the fields the playlist needs are kept, any of them may be missing upstream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Channel {
    #[serde(default, deserialize_with = "lenient_optional_string")]
    pub category_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_optional_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_optional_string")]
    pub stream_id: Option<String>,
    #[serde(default, deserialize_with = "tolerant_string")]
    pub stream_icon: Option<String>,
}
