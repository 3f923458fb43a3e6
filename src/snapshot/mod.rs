//! Snapshot discovery, loading, and record decoding.
//!
//! The upstream processing pipeline drops one JSON document per run into the
//! data directory (`processed_data_<timestamp>.json`). This module finds the
//! latest snapshot, parses it, and exposes its sections: raw for the
//! passthrough endpoints, decoded for aggregation.

mod store;
mod types;

// Re-export public API
pub use store::{Snapshot, SnapshotStore};
pub use types::{matches_region, SentimentRecord, TrendData};
