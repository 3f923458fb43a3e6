//! Configuration constants.
//!
//! This module defines all configuration constants used throughout the application,
//! including the snapshot naming scheme, section keys, and server defaults.

/// Default directory scanned for processed snapshot files
pub const DEFAULT_DATA_DIR: &str = "data";

/// Snapshot filename prefix.
///
/// The upstream processing pipeline writes one snapshot per run, named
/// `processed_data_<timestamp>.json`. Because the timestamp suffix sorts
/// lexicographically in time order, the lexicographically greatest matching
/// filename is the latest snapshot. That selection rule must not change:
/// downstream deployments rely on it.
pub const SNAPSHOT_PREFIX: &str = "processed_data_";

/// Snapshot filename suffix
pub const SNAPSHOT_SUFFIX: &str = ".json";

/// Default HTTP listen port
pub const DEFAULT_PORT: u16 = 8000;

/// Snapshot section holding trend popularity records
pub const SECTION_POPULARITY: &str = "popularity";

/// Snapshot section holding per-mention sentiment records
pub const SECTION_SENTIMENT: &str = "sentiment";

/// Snapshot section holding temporal trend patterns
pub const SECTION_TEMPORAL: &str = "temporal";

/// Region label substituted when a sentiment record carries no region
pub const UNKNOWN_REGION: &str = "Unknown";

/// Default CORS allow-list: the frontend dev servers
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 2] =
    ["http://localhost:3000", "http://localhost:3001"];
