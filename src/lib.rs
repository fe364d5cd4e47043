//! # Neowatch - Near-Earth Object Watcher
//!
//! Pulls the NASA NeoWs feed over a rolling window of days into a local
//! SQLite file and reports the largest objects approaching soon.
//!
//! Neowatch provides:
//! - Feed window planning and an HTTP client for the NeoWs `feed` endpoint
//! - Mapping of feed entries into asteroid rows
//! - SQLite-backed storage behind the `AsteroidStore` handle
//! - A report generator returning structured entries
//! - A pipeline that sequences reset, ingestion and reporting

pub mod asteroid;
pub mod config;
pub mod feed;
pub mod ingest;
pub mod pipeline;
pub mod report;
pub mod storage;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_support;

// Re-exports for convenient access
pub use asteroid::{AsteroidRecord, NewAsteroid};
pub use config::NeoConfig;
pub use feed::{FeedClient, FeedSource, FeedWindow, FetchOutcome};
pub use report::{Report, ReportEntry};
pub use storage::{AsteroidStore, SqliteStore};

/// Result type alias for Neowatch operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Neowatch operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}
