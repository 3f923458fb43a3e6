//! Handlers for the section-backed trend endpoints.
//!
//! These three endpoints serve a snapshot section more or less verbatim;
//! only the popularity view decodes into a typed record. The geographical
//! view lives in its own handler because it aggregates instead.

use axum::extract::{Query, State};
use axum::Json;
use serde_json::Value;

use super::super::types::{AppState, TrendParams};
use crate::config::{SECTION_POPULARITY, SECTION_SENTIMENT, SECTION_TEMPORAL};
use crate::error_handling::ApiError;
use crate::snapshot::{matches_region, TrendData};

/// Loads the named section from the latest snapshot and applies the optional
/// region filter.
///
/// A data directory with no snapshot yields an empty section, not an error.
async fn filtered_section(
    state: &AppState,
    section: &str,
    region: Option<&str>,
) -> Result<Vec<Value>, ApiError> {
    let Some(snapshot) = state.store.load_latest().await? else {
        return Ok(Vec::new());
    };
    let mut records = snapshot.section(section);
    if let Some(region) = region {
        records.retain(|record| matches_region(record, region));
    }
    Ok(records)
}

/// `GET /trends/popularity` - ranked trend popularity records
pub async fn popularity_handler(
    State(state): State<AppState>,
    Query(params): Query<TrendParams>,
) -> Result<Json<Vec<TrendData>>, ApiError> {
    let records = filtered_section(&state, SECTION_POPULARITY, params.region_filter()).await?;
    let trends: Vec<TrendData> =
        serde_json::from_value(Value::Array(records)).map_err(ApiError::PopularityDecode)?;
    Ok(Json(trends))
}

/// `GET /trends/sentiment` - per-trend sentiment records, served as stored
pub async fn sentiment_handler(
    State(state): State<AppState>,
    Query(params): Query<TrendParams>,
) -> Result<Json<Vec<Value>>, ApiError> {
    let records = filtered_section(&state, SECTION_SENTIMENT, params.region_filter()).await?;
    Ok(Json(records))
}

/// `GET /trends/temporal` - time-bucketed trend records, served as stored
pub async fn temporal_handler(
    State(state): State<AppState>,
    Query(params): Query<TrendParams>,
) -> Result<Json<Vec<Value>>, ApiError> {
    let records = filtered_section(&state, SECTION_TEMPORAL, params.region_filter()).await?;
    Ok(Json(records))
}
