//! Report generator
//!
//! Takes the largest stored objects and sorts each into approaching within
//! the horizon, approaching later, or unreadable. The largest-N selection
//! happens first; the horizon only decides how each of those N is reported.

use chrono::{Days, NaiveDate};
use tracing::warn;

use crate::asteroid::AsteroidRecord;
use crate::storage::AsteroidStore;
use crate::Result;

/// One line of the report
#[derive(Debug, Clone, PartialEq)]
pub enum ReportEntry {
    /// Closest approach falls within the horizon
    Approaching(AsteroidRecord),
    /// Closest approach is before today or after the horizon
    OutsideHorizon(AsteroidRecord),
    /// Stored date is not `YYYY-MM-DD`; logged and left out of printed output
    InvalidDate(AsteroidRecord),
}

impl ReportEntry {
    pub fn record(&self) -> &AsteroidRecord {
        match self {
            ReportEntry::Approaching(r)
            | ReportEntry::OutsideHorizon(r)
            | ReportEntry::InvalidDate(r) => r,
        }
    }
}

/// Largest objects, classified against `[today, today + horizon_days]`
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub today: NaiveDate,
    pub horizon_days: u32,
    entries: Vec<ReportEntry>,
}

impl Report {
    /// True when nothing was stored at all
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    /// Last day still inside the horizon
    pub fn horizon_end(&self) -> NaiveDate {
        self.today + Days::new(u64::from(self.horizon_days))
    }

    pub fn approaching(&self) -> impl Iterator<Item = &AsteroidRecord> {
        self.entries.iter().filter_map(|entry| match entry {
            ReportEntry::Approaching(record) => Some(record),
            _ => None,
        })
    }
}

/// Build the report from the `limit` largest stored objects.
pub fn build_report<S: AsteroidStore + ?Sized>(
    store: &S,
    today: NaiveDate,
    horizon_days: u32,
    limit: usize,
) -> Result<Report> {
    let largest = store.largest(limit)?;
    let mut report = Report {
        today,
        horizon_days,
        entries: Vec::with_capacity(largest.len()),
    };
    let horizon_end = report.horizon_end();

    for record in largest {
        let entry = match record.approach_date() {
            None => {
                warn!(
                    "Invalid date format for asteroid {} ({}), skipping.",
                    record.name, record.closest_approach_date
                );
                ReportEntry::InvalidDate(record)
            }
            Some(date) if today <= date && date <= horizon_end => ReportEntry::Approaching(record),
            Some(_) => ReportEntry::OutsideHorizon(record),
        };
        report.entries.push(entry);
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asteroid::NewAsteroid;
    use crate::storage::SqliteStore;
    use crate::test_support::capture_logs;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    fn in_days(days: u64) -> String {
        (today() + Days::new(days)).format("%Y-%m-%d").to_string()
    }

    fn store() -> SqliteStore {
        let store = SqliteStore::open_in_memory().unwrap();
        store.create_table().unwrap();
        store
    }

    #[test]
    fn test_empty_store_gives_empty_report() {
        let report = build_report(&store(), today(), 30, 5).unwrap();
        assert!(report.is_empty());
        assert_eq!(report.approaching().count(), 0);
    }

    #[test]
    fn test_largest_far_away_excluded_small_close_included() {
        let store = store();
        store.insert(&NewAsteroid::new("giant", 999.0, in_days(45), 3600.0)).unwrap();
        store.insert(&NewAsteroid::new("pebble", 15.0, in_days(10), 3600.0)).unwrap();

        let report = build_report(&store, today(), 30, 5).unwrap();

        assert_eq!(report.entries().len(), 2);
        assert!(matches!(
            &report.entries()[0],
            ReportEntry::OutsideHorizon(r) if r.name == "giant"
        ));
        let approaching: Vec<&str> = report.approaching().map(|r| r.name.as_str()).collect();
        assert_eq!(approaching, vec!["pebble"]);
    }

    #[test]
    fn test_horizon_bounds_are_inclusive() {
        let store = store();
        store.insert(&NewAsteroid::new("today", 3.0, in_days(0), 3600.0)).unwrap();
        store.insert(&NewAsteroid::new("last-day", 2.0, in_days(30), 3600.0)).unwrap();
        store.insert(&NewAsteroid::new("too-late", 1.0, in_days(31), 3600.0)).unwrap();

        let report = build_report(&store, today(), 30, 5).unwrap();

        let approaching: Vec<&str> = report.approaching().map(|r| r.name.as_str()).collect();
        assert_eq!(approaching, vec!["today", "last-day"]);
        assert_eq!(report.horizon_end(), NaiveDate::from_ymd_opt(2026, 11, 17).unwrap());
    }

    #[test]
    fn test_past_approach_is_outside_horizon() {
        let store = store();
        store.insert(&NewAsteroid::new("gone", 5.0, "2026-10-01", 3600.0)).unwrap();

        let report = build_report(&store, today(), 30, 5).unwrap();
        assert!(matches!(report.entries()[0], ReportEntry::OutsideHorizon(_)));
    }

    #[test]
    fn test_invalid_date_is_flagged_not_approaching() {
        let store = store();
        store.insert(&NewAsteroid::new("garbled", 500.0, "not-a-date", 3600.0)).unwrap();
        store.insert(&NewAsteroid::new("fine", 5.0, in_days(3), 3600.0)).unwrap();

        let report = build_report(&store, today(), 30, 5).unwrap();

        assert!(matches!(
            &report.entries()[0],
            ReportEntry::InvalidDate(r) if r.name == "garbled"
        ));
        let approaching: Vec<&str> = report.approaching().map(|r| r.name.as_str()).collect();
        assert_eq!(approaching, vec!["fine"]);
    }

    #[test]
    fn test_selection_limited_before_horizon_filter() {
        let store = store();
        let sizes = [
            ("a", 50.0),
            ("b", 200.0),
            ("c", 10.0),
            ("d", 999.0),
            ("e", 5.0),
            ("f", 300.0),
            ("g", 15.0),
        ];
        for (name, diameter) in sizes {
            store.insert(&NewAsteroid::new(name, diameter, in_days(1), 3600.0)).unwrap();
        }

        let report = build_report(&store, today(), 30, 5).unwrap();
        let names: Vec<&str> =
            report.entries().iter().map(|e| e.record().name.as_str()).collect();
        assert_eq!(names, vec!["d", "f", "b", "a", "g"]);
    }

    #[test]
    fn test_invalid_date_logs_warning() {
        let store = store();
        store.insert(&NewAsteroid::new("garbled", 500.0, "not-a-date", 3600.0)).unwrap();

        let (report, logs) = capture_logs(|| build_report(&store, today(), 30, 5));

        assert_eq!(report.unwrap().approaching().count(), 0);
        assert!(logs.contains("WARN"));
        assert!(logs.contains("Invalid date format for asteroid garbled (not-a-date), skipping."));
    }
}
