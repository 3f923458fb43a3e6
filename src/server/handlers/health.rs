//! Liveness handler.

use axum::Json;
use chrono::Local;

use super::super::types::HealthResponse;

/// `GET /health` - liveness check with the current local time
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: Local::now()
            .naive_local()
            .format("%Y-%m-%dT%H:%M:%S%.6f")
            .to_string(),
    })
}
