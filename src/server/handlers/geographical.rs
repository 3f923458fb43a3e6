//! Handler for the geographical aggregation endpoint.

use axum::extract::{Query, State};
use axum::Json;

use super::super::types::{AppState, TrendParams};
use crate::error_handling::ApiError;
use crate::geo::{aggregate_by_region, GeoEntry};

/// `GET /trends/geographical` - sentiment grouped by region and enriched
/// with coordinates (cities) or country codes
pub async fn geographical_handler(
    State(state): State<AppState>,
    Query(params): Query<TrendParams>,
) -> Result<Json<Vec<GeoEntry>>, ApiError> {
    let Some(snapshot) = state.store.load_latest().await? else {
        return Ok(Json(Vec::new()));
    };

    let mut records = snapshot.sentiment_records();
    if let Some(region) = params.region_filter() {
        // The filter sees the raw region field, so records without one never
        // match any filter value, "Unknown" included
        records.retain(|record| record.region.as_deref() == Some(region));
    }

    Ok(Json(aggregate_by_region(&records, &state.tables)))
}
