//! Schema reset
//!
//! Every run starts from an empty database. Reset is best-effort: a storage
//! failure is logged and reported in the outcome, never returned as an error.

use tracing::{error, info};

use super::{schema, AsteroidStore};

/// What a reset did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResetOutcome {
    /// The database had no tables at all
    NoTables,
    /// These tables were dropped (may be empty if only bookkeeping tables existed)
    Dropped(Vec<String>),
    /// Listing or dropping failed; nothing is guaranteed about the schema
    Failed(String),
}

/// Drop every table except SQLite's sequence bookkeeping.
///
/// Listing and dropping go through the same handle, and all drops are
/// committed together.
pub fn reset_schema<S: AsteroidStore + ?Sized>(store: &S) -> ResetOutcome {
    let tables = match store.list_tables() {
        Ok(tables) => tables,
        Err(e) => {
            error!(error = %e, "An error occurred while listing tables");
            return ResetOutcome::Failed(e.to_string());
        }
    };

    if tables.is_empty() {
        info!("No tables found in the database.");
        return ResetOutcome::NoTables;
    }

    let to_drop: Vec<String> = tables
        .into_iter()
        .filter(|name| name != schema::SEQUENCE_TABLE)
        .collect();

    match store.drop_tables(&to_drop) {
        Ok(()) => {
            info!(tables = ?to_drop, "Dropped existing tables");
            ResetOutcome::Dropped(to_drop)
        }
        Err(e) => {
            error!(error = %e, "An error occurred while dropping tables");
            ResetOutcome::Failed(e.to_string())
        }
    }
}
