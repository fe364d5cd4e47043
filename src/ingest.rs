//! Ingestion: fetch loop and record writer
//!
//! Failures are handled at the narrowest scope: a bad entry skips that entry,
//! a failed request skips that window, and only a rate limit stops the loop.

use tracing::{debug, error, info, warn};

use crate::feed::{parse_entry, EntryError, FeedPayload, FeedSource, FeedWindow, FetchOutcome};
use crate::storage::AsteroidStore;

/// Rows written from one payload
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteSummary {
    pub stored: usize,
    pub skipped: usize,
}

/// Totals for a whole fetch loop
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestSummary {
    /// Requests issued, including the one that was rate limited
    pub requests: usize,
    /// Windows whose payload reached the record writer
    pub fetched_windows: usize,
    pub stored: usize,
    pub skipped: usize,
    pub rate_limited: bool,
}

/// Write every entry of a payload, one committed insert per entry.
pub fn write_payload<S: AsteroidStore + ?Sized>(store: &S, payload: &FeedPayload) -> WriteSummary {
    let mut summary = WriteSummary::default();

    for (date, entry) in payload.entries() {
        let asteroid = match parse_entry(entry) {
            Ok(asteroid) => asteroid,
            Err(e @ EntryError::MissingKey(_)) => {
                warn!(date, "{}", e);
                summary.skipped += 1;
                continue;
            }
            Err(e) => {
                warn!(date, error = %e, "Skipping asteroid entry");
                summary.skipped += 1;
                continue;
            }
        };

        match store.insert(&asteroid) {
            Ok(id) => {
                debug!(id, name = %asteroid.name, "Stored asteroid");
                summary.stored += 1;
            }
            Err(e) => {
                error!(name = %asteroid.name, error = %e, "Error inserting data into database");
                summary.skipped += 1;
            }
        }
    }

    summary
}

/// Request each window in order and write what comes back.
pub async fn ingest<F, S>(source: &F, store: &S, windows: &[FeedWindow]) -> IngestSummary
where
    F: FeedSource + ?Sized,
    S: AsteroidStore + ?Sized,
{
    let mut summary = IngestSummary::default();

    for window in windows {
        summary.requests += 1;

        match source.fetch(window).await {
            FetchOutcome::Fetched(payload) => {
                let written = write_payload(store, &payload);
                info!(
                    window = %window,
                    entries = payload.entry_count(),
                    stored = written.stored,
                    skipped = written.skipped,
                    "Fetched feed window"
                );
                summary.fetched_windows += 1;
                summary.stored += written.stored;
                summary.skipped += written.skipped;
            }
            FetchOutcome::RateLimited { body } => {
                error!(status = 429, body = %body, "Error: Received non-success status code");
                warn!("Please try to connect to another internet network");
                summary.rate_limited = true;
                break;
            }
            FetchOutcome::HttpError { status, body } => {
                error!(status, body = %body, "Error: Received non-success status code");
            }
            FetchOutcome::Transport(e) => {
                error!(window = %window, error = %e, "API request failed");
            }
            FetchOutcome::Parse(e) => {
                error!(error = %e, "Failed to parse JSON response for dates {}", window);
            }
        }
    }

    summary
}
