//! Database schema definitions

/// Name of the asteroid table
pub const ASTEROIDS_TABLE: &str = "Asteroids";

/// SQLite's AUTOINCREMENT bookkeeping table; it cannot be dropped
pub const SEQUENCE_TABLE: &str = "sqlite_sequence";

/// SQL to create the asteroids table
pub const CREATE_ASTEROIDS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS Asteroids (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    diameter TEXT NOT NULL,
    closest_approach_date DATE NOT NULL,
    relative_velocity TEXT NOT NULL
)
"#;

/// SQL to insert one asteroid
pub const INSERT_ASTEROID: &str = r#"
INSERT INTO Asteroids (name, diameter, closest_approach_date, relative_velocity)
VALUES (?1, ?2, ?3, ?4)
"#;

/// SQL to select the largest asteroids.
/// `DATE` has numeric affinity, so the date is cast back to text on the way out.
pub const SELECT_LARGEST: &str = r#"
SELECT id, name, diameter, CAST(closest_approach_date AS TEXT), relative_velocity
FROM Asteroids
ORDER BY CAST(diameter AS REAL) DESC
LIMIT ?1
"#;

/// SQL to list every table in the database
pub const LIST_TABLES: &str = "SELECT name FROM sqlite_master WHERE type = 'table'";

/// `DROP TABLE IF EXISTS` with the identifier quoted.
pub fn drop_table_statement(name: &str) -> String {
    format!("DROP TABLE IF EXISTS \"{}\"", name.replace('"', "\"\""))
}
