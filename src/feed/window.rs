//! Feed window planning
//!
//! The feed endpoint accepts a bounded date range per call, so the horizon is
//! split into consecutive windows of `window_days`, one request each.

use chrono::{Days, NaiveDate};

use crate::asteroid::APPROACH_DATE_FORMAT;

/// A date range submitted as one feed request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl FeedWindow {
    pub fn new(start: NaiveDate, days: u32) -> Self {
        Self {
            start,
            end: start + Days::new(u64::from(days)),
        }
    }

    /// `start_date` query value
    pub fn start_param(&self) -> String {
        self.start.format(APPROACH_DATE_FORMAT).to_string()
    }

    /// `end_date` query value
    pub fn end_param(&self) -> String {
        self.end.format(APPROACH_DATE_FORMAT).to_string()
    }
}

impl std::fmt::Display for FeedWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.start_param(), self.end_param())
    }
}

/// Plan `ceil(horizon_days / window_days)` windows starting at `start`.
///
/// Window *k* starts `k * window_days` after `start` and spans `window_days`.
/// Returns no windows when `window_days` is zero.
pub fn plan_windows(start: NaiveDate, horizon_days: u32, window_days: u32) -> Vec<FeedWindow> {
    if window_days == 0 {
        return Vec::new();
    }

    let count = horizon_days.div_ceil(window_days);
    (0..count)
        .map(|k| {
            let offset = Days::new(u64::from(k) * u64::from(window_days));
            FeedWindow::new(start + offset, window_days)
        })
        .collect()
}
