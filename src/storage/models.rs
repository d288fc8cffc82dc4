//! Data models for the storage layer

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::projections::{count_players, Projection};

/// Display form of `last_updated`, e.g. "October 19, 2025 at 08:15 PM".
pub const LAST_UPDATED_DISPLAY_FORMAT: &str = "%B %d, %Y at %I:%M %p";

/// Everything one `update` run produces, as persisted on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionCache {
    pub projections: Vec<Projection>,
    pub total_players: usize,
    pub projection_count: usize,
    pub formats: Vec<String>,
    /// RFC 3339 timestamp of the run.
    pub last_updated: String,
    pub last_updated_display: String,
    /// Unix seconds, fractional.
    pub last_updated_timestamp: f64,
}

impl ProjectionCache {
    pub fn new<Tz>(projections: Vec<Projection>, formats: Vec<String>, now: &DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let last_updated_timestamp =
            now.timestamp() as f64 + f64::from(now.timestamp_subsec_micros()) / 1_000_000.0;

        Self {
            total_players: count_players(&projections),
            projection_count: projections.len(),
            projections,
            formats,
            last_updated: now.to_rfc3339(),
            last_updated_display: now.format(LAST_UPDATED_DISPLAY_FORMAT).to_string(),
            last_updated_timestamp,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.projections.is_empty()
    }
}
