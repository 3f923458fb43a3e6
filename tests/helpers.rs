// Shared test helpers for snapshot fixtures and server setup.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use serde_json::{json, Value};

use trend_api::{build_router, AppState, GeoTables, SnapshotStore};

/// Writes a snapshot document under the given file name in the data directory.
#[allow(dead_code)] // Used by other test files
pub fn write_snapshot(data_dir: &Path, name: &str, document: &Value) {
    std::fs::write(data_dir.join(name), document.to_string())
        .expect("Failed to write snapshot file");
}

/// A well-formed snapshot document touching every section.
///
/// The sentiment records are arranged so the geographical view exercises all
/// three lookup outcomes: a city (Toronto), a country (Germany), and records
/// with no region at all (grouped under "Unknown").
#[allow(dead_code)] // Used by other test files
pub fn sample_document() -> Value {
    json!({
        "popularity": [
            {
                "platform": "twitter",
                "trend": "#rustlang",
                "mentions": 4200,
                "avg_volume": 310.5,
                "max_volume": 880.0
            },
            {
                "platform": "reddit",
                "trend": "#ai",
                "mentions": 1800,
                "avg_volume": 120.25,
                "max_volume": 400.0
            }
        ],
        "sentiment": [
            {"trend": "#rustlang", "region": "Toronto", "sentiment": 0.5, "confidence": 0.9},
            {"trend": "#rustlang", "region": "Germany", "sentiment": 0.5},
            {"trend": "#ai", "region": "Toronto", "sentiment": 0.1},
            {"trend": "#ai", "region": "Germany", "sentiment": -0.3},
            {"trend": "#ml", "sentiment": 0.8}
        ],
        "temporal": [
            {"hour": 14, "platform": "twitter", "count": 120},
            {"hour": 15, "platform": "twitter", "count": 95}
        ]
    })
}

/// Starts the full router on an ephemeral port and returns its address.
#[allow(dead_code)] // Used by other test files
pub async fn spawn_app(data_dir: &Path) -> SocketAddr {
    spawn_app_with_origins(data_dir, &["http://localhost:3000".to_string()]).await
}

/// Starts the full router with a custom CORS origin list.
#[allow(dead_code)] // Used by other test files
pub async fn spawn_app_with_origins(data_dir: &Path, origins: &[String]) -> SocketAddr {
    let state = AppState {
        store: Arc::new(SnapshotStore::new(data_dir)),
        tables: Arc::new(GeoTables::builtin()),
    };
    let app = build_router(state, origins);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener
        .local_addr()
        .expect("Failed to read test listener address");

    tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("Test server failed");
    });

    addr
}
