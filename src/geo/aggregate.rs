//! The regional sentiment aggregation routine.

use std::collections::HashMap;

use serde::Serialize;

use crate::config::UNKNOWN_REGION;
use crate::geo::tables::GeoTables;
use crate::snapshot::SentimentRecord;

/// One aggregated region, ready for map rendering.
///
/// Serialized with a `"type"` tag; the field set depends on the kind:
/// cities carry `lat`/`lon`, countries carry `country_code` (empty when the
/// label is not in the country table).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum GeoEntry {
    /// A named city from the city table, with point coordinates.
    City {
        /// Region label as seen in the data.
        region: String,
        /// Latitude in degrees.
        lat: f64,
        /// Longitude in degrees.
        lon: f64,
        /// Mean sentiment, rounded to two decimals.
        sentiment: f64,
        /// Number of records contributing to the mean.
        count: usize,
    },
    /// Any other label, resolved against the country table.
    Country {
        /// Region label as seen in the data (or `"Unknown"`).
        region: String,
        /// 3-letter code, or empty when the label is not a known country.
        country_code: String,
        /// Mean sentiment, rounded to two decimals.
        sentiment: f64,
        /// Number of records contributing to the mean.
        count: usize,
    },
}

/// Per-region running totals for the grouping pass.
#[derive(Debug, Default)]
struct RegionAccumulator {
    total_sentiment: f64,
    count: usize,
}

/// Groups sentiment records by region and enriches each region with
/// geographic metadata.
///
/// Records with no region are grouped under the `"Unknown"` label. Output
/// order is the first-seen order of region labels in the input. For each
/// region the mean sentiment is rounded to two decimals, then the label is
/// resolved. The city table wins: only labels absent from it fall through
/// to the country table (with an empty code on a miss there too).
///
/// This is a pure function of its inputs; it allocates fresh state per call
/// and never fails. Empty input yields empty output.
pub fn aggregate_by_region(records: &[SentimentRecord], tables: &GeoTables) -> Vec<GeoEntry> {
    let mut totals: HashMap<String, RegionAccumulator> = HashMap::new();
    let mut order: Vec<String> = Vec::new();

    for record in records {
        let region = record.region.as_deref().unwrap_or(UNKNOWN_REGION);
        if !totals.contains_key(region) {
            order.push(region.to_string());
        }
        let acc = totals.entry(region.to_string()).or_default();
        acc.total_sentiment += record.sentiment;
        acc.count += 1;
    }

    let mut results = Vec::with_capacity(order.len());
    for region in order {
        let Some(acc) = totals.get(&region) else {
            continue;
        };
        // count is at least 1 for every key inserted above
        let mean = if acc.count > 0 {
            acc.total_sentiment / acc.count as f64
        } else {
            0.0
        };
        let sentiment = round2(mean);

        let entry = match tables.city(&region) {
            Some((lat, lon)) => GeoEntry::City {
                region,
                lat,
                lon,
                sentiment,
                count: acc.count,
            },
            None => {
                let country_code = tables.country_code(&region).unwrap_or_default().to_string();
                GeoEntry::Country {
                    region,
                    country_code,
                    sentiment,
                    count: acc.count,
                }
            }
        };
        results.push(entry);
    }

    results
}

/// Rounds to two decimal places, half away from zero (`f64::round`
/// semantics; 0.005 → 0.01, -0.005 → -0.01).
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
