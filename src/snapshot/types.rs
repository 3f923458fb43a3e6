//! Snapshot record types and decoding rules.
//!
//! Snapshot sections arrive as loosely-shaped JSON objects. The decode step
//! here defines the defaults for every optional field up front, so downstream
//! code (the aggregator in particular) never touches raw JSON.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One sentiment observation from the snapshot's `sentiment` section.
///
/// Decoding is lenient: a missing or non-string `region` stays `None` (the
/// aggregator substitutes the `"Unknown"` label), and a missing or
/// non-numeric `sentiment` becomes `0.0`. A malformed record never fails the
/// request.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SentimentRecord {
    /// Region label as found in the record; `None` when absent or not a string.
    #[serde(default, deserialize_with = "lenient_region")]
    pub region: Option<String>,
    /// Sentiment score; `0.0` when absent or not coercible to a float.
    #[serde(default, deserialize_with = "lenient_sentiment")]
    pub sentiment: f64,
}

impl SentimentRecord {
    /// Decodes a raw snapshot record.
    ///
    /// Records that are not JSON objects decode to the all-defaults record
    /// (no region, `0.0` sentiment) rather than failing.
    pub fn from_value(value: &Value) -> Self {
        serde_json::from_value(value.clone()).unwrap_or_default()
    }
}

/// One trend popularity record, the response model of `/trends/popularity`.
///
/// Unlike [`SentimentRecord`] this decode is strict: every field is required,
/// and a record missing one fails the whole request with a server error.
/// Extra source fields (such as `region`) are dropped from the response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendData {
    /// Platform the trend was observed on (e.g. "twitter").
    pub platform: String,
    /// Trend name or hashtag.
    pub trend: String,
    /// Number of mentions counted by the pipeline.
    pub mentions: i64,
    /// Average mention volume over the observation window.
    pub avg_volume: f64,
    /// Peak mention volume over the observation window.
    pub max_volume: f64,
}

/// Returns true when a raw record's `region` field is a string exactly equal
/// to `region`.
///
/// Records without the field (or with a non-string value) never match, not
/// even a filter of `"Unknown"`: that label is invented by the aggregator,
/// the data never carries it.
pub fn matches_region(record: &Value, region: &str) -> bool {
    record.get("region").and_then(Value::as_str) == Some(region)
}

fn lenient_region<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => Some(s),
        _ => None,
    })
}

fn lenient_sentiment<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_f64(&value))
}

/// Best-effort numeric coercion: JSON numbers pass through, numeric strings
/// are parsed, anything else is `0.0`.
fn coerce_f64(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}
