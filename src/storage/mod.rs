//! Storage Layer - SQLite-backed persistence
//!
//! System of record is a single SQLite file with one table:
//! - Asteroids(id, name, diameter, closest_approach_date, relative_velocity)
//!
//! Components receive the store through the `AsteroidStore` handle rather
//! than reaching for a shared connection.

pub mod reset;
pub mod schema;
pub mod sqlite;

pub use reset::{reset_schema, ResetOutcome};
pub use sqlite::SqliteStore;

use crate::asteroid::{AsteroidRecord, NewAsteroid};
use crate::Result;

/// Storage handle used by the resetter, record writer and report generator.
pub trait AsteroidStore {
    /// Names of every table currently defined
    fn list_tables(&self) -> Result<Vec<String>>;

    /// Drop the given tables in one transaction
    fn drop_tables(&self, names: &[String]) -> Result<()>;

    /// Create the asteroid table if it does not exist
    fn create_table(&self) -> Result<()>;

    /// Insert one row and commit it, returning the assigned id
    fn insert(&self, asteroid: &NewAsteroid) -> Result<i64>;

    /// The `limit` rows with the largest diameter, largest first
    fn largest(&self, limit: usize) -> Result<Vec<AsteroidRecord>>;

    /// Number of stored rows
    fn count(&self) -> Result<usize>;
}
