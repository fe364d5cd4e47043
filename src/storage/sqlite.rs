//! SQLite storage implementation

use std::path::Path;
use rusqlite::{Connection, params};
use crate::Result;
use crate::asteroid::{AsteroidRecord, NewAsteroid};
use super::{schema, AsteroidStore};

/// SQLite-backed storage for asteroid rows
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open a database file (creates if doesn't exist)
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        Ok(Self { conn })
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }

    /// Close the connection, surfacing any error SQLite reports on close
    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, e)| e.into())
    }

    /// Helper to convert a row to an AsteroidRecord
    fn row_to_record(row: &rusqlite::Row) -> rusqlite::Result<AsteroidRecord> {
        Ok(AsteroidRecord {
            id: row.get(0)?,
            name: row.get(1)?,
            diameter: row.get(2)?,
            closest_approach_date: row.get(3)?,
            relative_velocity: row.get(4)?,
        })
    }
}

impl AsteroidStore for SqliteStore {
    fn list_tables(&self) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare(schema::LIST_TABLES)?;
        let names = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(names)
    }

    fn drop_tables(&self, names: &[String]) -> Result<()> {
        let tx = self.conn.unchecked_transaction()?;
        for name in names {
            tx.execute(&schema::drop_table_statement(name), [])?;
        }
        tx.commit()?;
        Ok(())
    }

    fn create_table(&self) -> Result<()> {
        self.conn.execute(schema::CREATE_ASTEROIDS_TABLE, [])?;
        Ok(())
    }

    fn insert(&self, asteroid: &NewAsteroid) -> Result<i64> {
        // Autocommit: each insert is durable on return
        self.conn.execute(
            schema::INSERT_ASTEROID,
            params![
                asteroid.name,
                asteroid.diameter_m.to_string(),
                asteroid.closest_approach_date,
                asteroid.velocity_km_s.to_string(),
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn largest(&self, limit: usize) -> Result<Vec<AsteroidRecord>> {
        let mut stmt = self.conn.prepare(schema::SELECT_LARGEST)?;
        let records = stmt
            .query_map(params![limit as i64], Self::row_to_record)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(records)
    }

    fn count(&self) -> Result<usize> {
        let count: i64 =
            self.conn.query_row("SELECT COUNT(*) FROM Asteroids", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}
