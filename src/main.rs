//! Neowatch CLI - fetch the next month of near-Earth objects and report the largest

use chrono::Local;
use clap::Parser;
use neowatch::config::{ensure_db_dir, NeoConfig};
use neowatch::storage::SqliteStore;
use neowatch::ui::{self, Spinner};
use neowatch::{pipeline, FeedClient};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "neowatch")]
#[command(version)]
#[command(about = "Fetch NASA NeoWs near-Earth objects and report the largest upcoming approaches")]
#[command(long_about = r#"
Neowatch rebuilds data.db on every run:
  • drops every existing table
  • fetches the next 30 days of the NeoWs feed, 6 days per request
  • reports the 5 largest stored objects and whether they approach within 30 days
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let config = NeoConfig::default();
    ensure_db_dir(&config.database)?;

    let store = SqliteStore::open(&config.database)?;
    let client = FeedClient::new(&config)?;
    let today = Local::now().date_naive();

    tracing::info!(database = %config.database.display(), %today, "Starting run");

    let spinner = Spinner::new(&format!(
        "Fetching {} windows of {} days...",
        config.window_count(),
        config.window_days
    ));
    let result = pipeline::run(&config, &store, &client, today).await;
    spinner.finish("Feed processed");

    let summary = match result {
        Ok(summary) => summary,
        Err(e) => {
            ui::error(&format!("Run aborted: {}", e));
            store.close()?;
            return Err(e.into());
        }
    };

    if let Some(report) = &summary.report {
        ui::print_report(report);
    }
    if summary.ingest.rate_limited {
        ui::warn("Rate limited by the feed API; remaining windows were not fetched.");
    }

    println!();
    println!("{} Run summary", ui::Icons::STATS);
    println!("{}", ui::summary_table(&summary));

    store.close()?;
    Ok(())
}
