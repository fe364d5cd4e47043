//! Feed payload types
//!
//! A feed response maps each date to the objects approaching on it. Entries
//! stay as raw JSON until the record writer maps them one at a time, so a
//! malformed entry only costs that entry.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

use crate::asteroid::NewAsteroid;

/// Body of a successful `feed` response
#[derive(Debug, Clone, Deserialize)]
pub struct FeedPayload {
    pub near_earth_objects: BTreeMap<String, Vec<Value>>,
}

impl FeedPayload {
    /// Total entries across all dates
    pub fn entry_count(&self) -> usize {
        self.near_earth_objects.values().map(Vec::len).sum()
    }

    /// Iterate `(date, entry)` pairs in date order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.near_earth_objects
            .iter()
            .flat_map(|(date, entries)| entries.iter().map(move |e| (date.as_str(), e)))
    }
}

/// Why a single feed entry could not become a row
#[derive(Debug, thiserror::Error)]
pub enum EntryError {
    #[error("Missing key in asteroid data: {0}")]
    MissingKey(&'static str),

    #[error("Invalid number for {key}: {value}")]
    InvalidNumber { key: &'static str, value: String },

    #[error("Malformed asteroid data: {0}")]
    Malformed(#[from] serde_json::Error),
}

const KEY_NAME: &str = "name";
const KEY_DIAMETER: &str = "estimated_diameter.meters.estimated_diameter_max";
const KEY_APPROACH: &str = "close_approach_data[0]";
const KEY_APPROACH_DATE: &str = "close_approach_data[0].close_approach_date";
const KEY_VELOCITY: &str = "close_approach_data[0].relative_velocity.kilometers_per_hour";

#[derive(Deserialize)]
struct RawObject {
    name: Option<String>,
    estimated_diameter: Option<RawDiameter>,
    close_approach_data: Option<Vec<RawApproach>>,
}

#[derive(Deserialize)]
struct RawDiameter {
    meters: Option<RawRange>,
}

#[derive(Deserialize)]
struct RawRange {
    estimated_diameter_max: Option<f64>,
}

#[derive(Deserialize)]
struct RawApproach {
    close_approach_date: Option<String>,
    relative_velocity: Option<RawVelocity>,
}

#[derive(Deserialize)]
struct RawVelocity {
    kilometers_per_hour: Option<NumberOrText>,
}

/// The feed sends velocities as strings; plain numbers are accepted too.
#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

impl NumberOrText {
    fn to_f64(&self, key: &'static str) -> Result<f64, EntryError> {
        match self {
            NumberOrText::Number(n) => Ok(*n),
            NumberOrText::Text(s) => s.trim().parse().map_err(|_| EntryError::InvalidNumber {
                key,
                value: s.clone(),
            }),
        }
    }
}

/// Map one feed entry into a row, using the first close-approach record.
pub fn parse_entry(entry: &Value) -> Result<NewAsteroid, EntryError> {
    let raw = RawObject::deserialize(entry)?;

    let name = raw.name.ok_or(EntryError::MissingKey(KEY_NAME))?;
    let diameter_m = raw
        .estimated_diameter
        .and_then(|d| d.meters)
        .and_then(|m| m.estimated_diameter_max)
        .ok_or(EntryError::MissingKey(KEY_DIAMETER))?;

    let approach = raw
        .close_approach_data
        .and_then(|data| data.into_iter().next())
        .ok_or(EntryError::MissingKey(KEY_APPROACH))?;
    let date = approach
        .close_approach_date
        .ok_or(EntryError::MissingKey(KEY_APPROACH_DATE))?;
    let velocity_km_h = approach
        .relative_velocity
        .and_then(|v| v.kilometers_per_hour)
        .ok_or(EntryError::MissingKey(KEY_VELOCITY))?
        .to_f64(KEY_VELOCITY)?;

    Ok(NewAsteroid::new(name, diameter_m, date, velocity_km_h))
}
