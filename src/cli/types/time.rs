//! Time-related types for NFL game weeks.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Last week of the NFL regular season.
pub const LAST_REGULAR_SEASON_WEEK: u16 = 18;

/// Week label attached to a projection.
///
/// Serialized as `"Week N"` or `"TBD"` so the cache stays readable by
/// consumers that only display it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameWeek {
    Week(u16),
    #[default]
    Tbd,
}

impl GameWeek {
    pub fn as_u16(&self) -> Option<u16> {
        match self {
            GameWeek::Week(w) => Some(*w),
            GameWeek::Tbd => None,
        }
    }
}

impl fmt::Display for GameWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameWeek::Week(w) => write!(f, "Week {}", w),
            GameWeek::Tbd => write!(f, "TBD"),
        }
    }
}

impl FromStr for GameWeek {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("TBD") {
            return Ok(GameWeek::Tbd);
        }
        let digits = s
            .strip_prefix("Week ")
            .or_else(|| s.strip_prefix("week "))
            .unwrap_or(s);
        digits
            .trim()
            .parse::<u16>()
            .map(GameWeek::Week)
            .map_err(|_| format!("invalid week label: {s}"))
    }
}

impl Serialize for GameWeek {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for GameWeek {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}
