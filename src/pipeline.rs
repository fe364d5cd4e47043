//! Run orchestration: reset, create, ingest, report

use chrono::NaiveDate;
use tracing::{error, info};

use crate::config::NeoConfig;
use crate::feed::{plan_windows, FeedSource};
use crate::ingest::{ingest, IngestSummary};
use crate::report::{build_report, Report};
use crate::storage::{reset_schema, AsteroidStore, ResetOutcome};
use crate::Result;

/// Everything a run produced, for the terminal layer to print
#[derive(Debug)]
pub struct RunSummary {
    pub reset: ResetOutcome,
    /// False when `CREATE TABLE` failed; inserts and the report then fail and are logged
    pub table_created: bool,
    pub ingest: IngestSummary,
    /// `None` when the report query failed (already logged)
    pub report: Option<Report>,
    pub total_rows: usize,
}

/// Run one full cycle against `store`, starting the horizon at `today`.
///
/// Only an invalid config is returned as an error; storage, feed and report
/// failures are logged and reflected in the summary.
pub async fn run<F, S>(
    config: &NeoConfig,
    store: &S,
    source: &F,
    today: NaiveDate,
) -> Result<RunSummary>
where
    F: FeedSource + ?Sized,
    S: AsteroidStore + ?Sized,
{
    config.validate()?;

    let reset = reset_schema(store);
    let table_created = match store.create_table() {
        Ok(()) => true,
        Err(e) => {
            error!(error = %e, "Failed to create the asteroid table");
            false
        }
    };

    let windows = plan_windows(today, config.horizon_days, config.window_days);
    info!(
        windows = windows.len(),
        horizon_days = config.horizon_days,
        window_days = config.window_days,
        "Fetching near-Earth objects"
    );
    let ingest = ingest(source, store, &windows).await;

    let report = match build_report(store, today, config.horizon_days, config.report_limit) {
        Ok(report) => Some(report),
        Err(e) => {
            error!(error = %e, "Failed to build asteroid report");
            None
        }
    };

    let total_rows = store.count().unwrap_or_else(|e| {
        error!(error = %e, "Failed to count stored asteroids");
        0
    });

    Ok(RunSummary {
        reset,
        table_created,
        ingest,
        report,
        total_rows,
    })
}
