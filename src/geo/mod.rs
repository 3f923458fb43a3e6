//! Regional sentiment aggregation with geographic enrichment.
//!
//! This is the one non-trivial computation in the service: it reduces the
//! snapshot's flat list of sentiment records into per-region summary
//! statistics and tags each region with map-renderable metadata (point
//! coordinates for named cities, an ISO-style country code otherwise).

mod aggregate;
mod tables;

// Re-export public API
pub use aggregate::{aggregate_by_region, GeoEntry};
pub use tables::GeoTables;
