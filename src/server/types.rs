//! Trend server data structures.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::geo::GeoTables;
use crate::snapshot::SnapshotStore;

/// Shared state for the trend server
#[derive(Clone)]
pub struct AppState {
    /// Snapshot discovery and loading, rooted at the configured data directory.
    pub store: Arc<SnapshotStore>,
    /// City and country lookup tables for the geographical view.
    pub tables: Arc<GeoTables>,
}

/// Query parameters accepted by the `/trends/*` endpoints
#[derive(Debug, Default, Deserialize)]
pub struct TrendParams {
    /// When present, only records whose `region` field equals this value
    /// exactly are served.
    pub region: Option<String>,
}

impl TrendParams {
    /// The region filter to apply, if any.
    ///
    /// An empty value (`?region=`, a cleared frontend selector) is treated
    /// the same as an absent parameter: no filtering.
    pub fn region_filter(&self) -> Option<&str> {
        self.region.as_deref().filter(|region| !region.is_empty())
    }
}

/// JSON response for the `/health` endpoint
#[derive(Serialize)]
pub struct HealthResponse {
    /// Always `"healthy"`; the endpoint answering at all is the signal.
    pub status: &'static str,
    /// Local wall-clock time with microsecond precision.
    pub timestamp: String,
}
