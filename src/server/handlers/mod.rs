//! Trend server HTTP handlers.

mod geographical;
mod health;
mod trends;

pub use geographical::geographical_handler;
pub use health::health_handler;
pub use trends::{popularity_handler, sentiment_handler, temporal_handler};
