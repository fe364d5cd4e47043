//! Asteroid rows
//!
//! `NewAsteroid` is what the record writer hands to storage; `AsteroidRecord`
//! is what comes back. Numeric columns are stored as text, so a record keeps
//! them as the strings the database returned.

use chrono::NaiveDate;

/// Date format used by the feed and the `closest_approach_date` column
pub const APPROACH_DATE_FORMAT: &str = "%Y-%m-%d";

/// Kilometers per hour to kilometers per second
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// A row ready to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAsteroid {
    pub name: String,
    /// Maximum estimated diameter in meters
    pub diameter_m: f64,
    pub closest_approach_date: String,
    /// Relative velocity in km/s
    pub velocity_km_s: f64,
}

impl NewAsteroid {
    pub fn new(
        name: impl Into<String>,
        diameter_m: f64,
        closest_approach_date: impl Into<String>,
        velocity_km_h: f64,
    ) -> Self {
        Self {
            name: name.into(),
            diameter_m,
            closest_approach_date: closest_approach_date.into(),
            velocity_km_s: velocity_km_h / SECONDS_PER_HOUR,
        }
    }
}

/// A stored row, as read back from the `Asteroids` table.
#[derive(Debug, Clone, PartialEq)]
pub struct AsteroidRecord {
    pub id: i64,
    pub name: String,
    pub diameter: String,
    pub closest_approach_date: String,
    pub relative_velocity: String,
}

impl AsteroidRecord {
    /// Parse the stored approach date. `None` when it is not `YYYY-MM-DD`.
    pub fn approach_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.closest_approach_date, APPROACH_DATE_FORMAT).ok()
    }
}
