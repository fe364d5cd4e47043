//! NeoWs feed access
//!
//! - `window`: splitting the horizon into request-sized date ranges
//! - `client`: the HTTP client and per-request outcomes
//! - `payload`: response types and entry-to-row mapping

pub mod client;
pub mod payload;
pub mod window;

pub use client::{FeedClient, FeedSource, FetchOutcome};
pub use payload::{parse_entry, EntryError, FeedPayload};
pub use window::{plan_windows, FeedWindow};
