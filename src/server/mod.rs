//! HTTP API over the latest processed trend snapshot.
//!
//! Provides five endpoints:
//! - `/trends/popularity` - ranked trend popularity
//! - `/trends/sentiment` - per-trend sentiment breakdowns
//! - `/trends/temporal` - time-bucketed trend activity
//! - `/trends/geographical` - sentiment aggregated by region
//! - `/health` - liveness check
//!
//! Every data endpoint re-reads the latest snapshot per request, so a
//! refreshed data directory is picked up without a restart.

mod handlers;
mod types;

use std::sync::Arc;

use axum::http::HeaderValue;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};

use crate::config::Config;
use crate::geo::GeoTables;
use crate::snapshot::SnapshotStore;
use handlers::{
    geographical_handler, health_handler, popularity_handler, sentiment_handler, temporal_handler,
};
pub use types::{AppState, HealthResponse, TrendParams};

/// Parses configured origins into header values, skipping (and logging)
/// wildcard entries and anything that is not a valid header value.
fn parse_origins(allowed_origins: &[String]) -> Vec<HeaderValue> {
    allowed_origins
        .iter()
        .filter_map(|origin| {
            if origin == "*" {
                // "*" parses as a header value but AllowOrigin::list panics
                // on it, and a credentialed layer could never answer with it
                log::warn!("Ignoring wildcard CORS origin: {}", origin);
                return None;
            }
            match origin.parse::<HeaderValue>() {
                Ok(value) => Some(value),
                Err(_) => {
                    log::warn!("Ignoring invalid CORS origin: {}", origin);
                    None
                }
            }
        })
        .collect()
}

/// Builds the application router with CORS restricted to the given origins.
pub fn build_router(state: AppState, allowed_origins: &[String]) -> Router {
    // Credentialed CORS cannot use wildcards, so methods and headers mirror
    // the preflight request instead
    let cors = CorsLayer::new()
        .allow_origin(parse_origins(allowed_origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    Router::new()
        .route("/trends/popularity", get(popularity_handler))
        .route("/trends/sentiment", get(sentiment_handler))
        .route("/trends/temporal", get(temporal_handler))
        .route("/trends/geographical", get(geographical_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .with_state(state)
}

/// Creates and runs the trend server until it is shut down.
pub async fn run_server(config: Config) -> Result<(), anyhow::Error> {
    let store = Arc::new(SnapshotStore::new(&config.data_dir));
    let state = AppState {
        store: Arc::clone(&store),
        tables: Arc::new(GeoTables::builtin()),
    };
    let app = build_router(state, &config.allowed_origins);

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", config.port))
        .await
        .map_err(|e| {
            anyhow::anyhow!("Failed to bind trend server to port {}: {}", config.port, e)
        })?;

    log::info!("Trend server listening on http://127.0.0.1:{}/", config.port);
    log::info!(
        "  - Popularity: http://127.0.0.1:{}/trends/popularity",
        config.port
    );
    log::info!(
        "  - Sentiment: http://127.0.0.1:{}/trends/sentiment",
        config.port
    );
    log::info!(
        "  - Temporal: http://127.0.0.1:{}/trends/temporal",
        config.port
    );
    log::info!(
        "  - Geographical: http://127.0.0.1:{}/trends/geographical",
        config.port
    );
    log::info!("  - Health: http://127.0.0.1:{}/health", config.port);
    log::info!("Serving snapshots from {}", store.data_dir().display());

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Trend server error: {}", e))?;

    Ok(())
}
