use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::{Error, Result};

pub const DEFAULT_DATABASE: &str = "data.db";
pub const DEFAULT_FEED_URL: &str = "https://api.nasa.gov/neo/rest/v1/feed";
pub const DEFAULT_API_KEY: &str = "DEMO_KEY";

/// Fixed run parameters. There is no file, flag or environment override;
/// tests build their own instances.
#[derive(Debug, Clone)]
pub struct NeoConfig {
    pub database: PathBuf,
    pub feed_url: String,
    pub api_key: String,
    /// Days ahead covered by the fetch loop and the report filter
    pub horizon_days: u32,
    /// Days per feed request; the API rejects ranges over 7 days
    pub window_days: u32,
    /// How many of the largest stored objects the report looks at
    pub report_limit: usize,
    pub request_timeout: Duration,
}

impl Default for NeoConfig {
    fn default() -> Self {
        Self {
            database: PathBuf::from(DEFAULT_DATABASE),
            feed_url: DEFAULT_FEED_URL.to_string(),
            api_key: DEFAULT_API_KEY.to_string(),
            horizon_days: 30,
            window_days: 6,
            report_limit: 5,
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl NeoConfig {
    /// Number of feed requests needed to cover the horizon.
    pub fn window_count(&self) -> u32 {
        self.horizon_days.div_ceil(self.window_days)
    }

    pub fn validate(&self) -> Result<()> {
        if self.window_days == 0 {
            return Err(Error::Config("window_days must be greater than zero".to_string()));
        }
        if self.horizon_days == 0 {
            return Err(Error::Config("horizon_days must be greater than zero".to_string()));
        }
        if self.report_limit == 0 {
            return Err(Error::Config("report_limit must be greater than zero".to_string()));
        }
        Ok(())
    }
}

pub fn ensure_db_dir(db_path: &Path) -> Result<()> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
