//! trend_api library: read-only HTTP API over processed trend snapshots
//!
//! This library serves trend popularity, sentiment, temporal, and geographical
//! views from the most recent processed snapshot in a data directory. Nothing
//! is cached between requests; every request re-reads the latest snapshot, so
//! dropping a newer file into the directory is all a data refresh takes.
//!
//! # Example
//!
//! ```no_run
//! use trend_api::{run_server, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     data_dir: std::path::PathBuf::from("data"),
//!     port: 8000,
//!     ..Default::default()
//! };
//!
//! run_server(config).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

pub mod config;
mod error_handling;
mod geo;
pub mod initialization;
mod server;
mod snapshot;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{ApiError, InitializationError};
pub use geo::{aggregate_by_region, GeoEntry, GeoTables};
pub use server::{build_router, run_server, AppState, HealthResponse, TrendParams};
pub use snapshot::{SentimentRecord, Snapshot, SnapshotStore, TrendData};
