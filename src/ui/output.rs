use crate::asteroid::AsteroidRecord;
use crate::report::{Report, ReportEntry};
use crate::ui::{theme, Icons};
use owo_colors::OwoColorize;

pub fn approaching_line(record: &AsteroidRecord) -> String {
    format!(
        "Name: {}, Diameter: {} meters, Closest Approach Date: {}, Relative Velocity: {} km/s",
        record.name, record.diameter, record.closest_approach_date, record.relative_velocity
    )
}

pub fn outside_horizon_line(record: &AsteroidRecord, horizon_days: u32) -> String {
    format!(
        "Asteroid {} will not approach Earth within the next {} days.",
        record.name, horizon_days
    )
}

pub fn none_found(horizon_days: u32) -> String {
    format!("No asteroids found within the next {} days.", horizon_days)
}

pub fn header(text: &str) {
    println!("{} {}", Icons::COMET, text.style(theme().header.clone()));
}

pub fn warn(label: &str) {
    eprintln!("{} {}", Icons::WARN, label.style(theme().warn.clone()));
}

pub fn error(label: &str) {
    eprintln!("{} {}", Icons::CROSS, label.style(theme().error.clone()));
}

/// Print the report. Entries with unreadable dates were already logged and are left out.
pub fn print_report(report: &Report) {
    header(&format!(
        "Largest asteroids approaching Earth in the next {} days:",
        report.horizon_days
    ));

    if report.is_empty() {
        println!("  {}", none_found(report.horizon_days).style(theme().distant.clone()));
        return;
    }

    for entry in report.entries() {
        match entry {
            ReportEntry::Approaching(record) => println!(
                "{} {}",
                Icons::TARGET,
                approaching_line(record).style(theme().approaching.clone())
            ),
            ReportEntry::OutsideHorizon(record) => println!(
                "{} {}",
                Icons::DISTANT,
                outside_horizon_line(record, report.horizon_days).style(theme().distant.clone())
            ),
            ReportEntry::InvalidDate(_) => {}
        }
    }
}
