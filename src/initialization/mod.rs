//! Application initialization.
//!
//! Logger setup lives here. The server builds its own state in
//! `run_server`, so there is nothing else to wire up ahead of time.

mod logger;

// Re-export public API
pub use logger::init_logger_with;
