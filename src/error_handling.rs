//! Error types for snapshot access and request handling.
//!
//! Two families of failure exist in this service:
//! - **Startup failures** (logger setup, port binding): surfaced as
//!   `InitializationError` / `anyhow::Error` and fatal to the process.
//! - **Request failures** (`ApiError`): anything that goes wrong while
//!   locating, reading, parsing, or decoding the snapshot during a request.
//!   Every variant maps to HTTP 500 with the wire body
//!   `{"detail": "Error fetching data: <cause>"}` that API consumers expect.
//!
//! A *missing* snapshot file is not an error: endpoints answer with an
//! empty result set instead.

use std::path::PathBuf;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::SetLoggerError;
use serde_json::json;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Error types for snapshot access during request handling.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The latest snapshot file exists but could not be read.
    #[error("failed to read snapshot file {path}: {source}")]
    SnapshotRead {
        /// Path of the snapshot file that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The latest snapshot file is not valid JSON.
    #[error("failed to parse snapshot file {path}: {source}")]
    SnapshotParse {
        /// Path of the snapshot file that failed to parse.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// A popularity record does not match the response model.
    #[error("malformed popularity record: {0}")]
    PopularityDecode(#[source] serde_json::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        log::warn!("request failed: {}", self);
        let detail = format!("Error fetching data: {}", self);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "detail": detail })),
        )
            .into_response()
    }
}
