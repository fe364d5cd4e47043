use tabled::{settings::Style, Table, Tabled};

use crate::pipeline::RunSummary;
use crate::storage::ResetOutcome;

#[derive(Tabled)]
pub struct TableRow {
    #[tabled(rename = "Metric")]
    pub metric: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

fn row(metric: &str, value: impl ToString) -> TableRow {
    TableRow {
        metric: metric.to_string(),
        value: value.to_string(),
    }
}

fn reset_label(reset: &ResetOutcome) -> String {
    match reset {
        ResetOutcome::NoTables => "no tables".to_string(),
        ResetOutcome::Dropped(tables) => format!("dropped {}", tables.len()),
        ResetOutcome::Failed(_) => "failed".to_string(),
    }
}

/// Rounded two-column table summarising a run
pub fn summary_table(summary: &RunSummary) -> String {
    let ingest = &summary.ingest;
    let mut rows = vec![
        row("Reset", reset_label(&summary.reset)),
        row("Table created", if summary.table_created { "yes" } else { "no" }),
        row("Requests", ingest.requests),
        row("Windows fetched", ingest.fetched_windows),
        row("Rows stored", ingest.stored),
        row("Entries skipped", ingest.skipped),
        row("Rows in database", summary.total_rows),
    ];
    if ingest.rate_limited {
        rows.push(row("Rate limited", "yes"));
    }
    if let Some(report) = &summary.report {
        rows.push(row("Approaching", report.approaching().count()));
    }

    Table::new(&rows).with(Style::rounded()).to_string()
}
