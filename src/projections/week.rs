//! Map a game's kickoff time to its NFL regular-season week.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

use crate::cli::types::time::{GameWeek, LAST_REGULAR_SEASON_WEEK};

/// Kickoff Thursday of week 1 for the 2025 season.
pub const DEFAULT_SEASON_START: (i32, u32, u32) = (2025, 9, 4);

/// Regular-season calendar anchored on the week-1 kickoff date.
///
/// Week boundaries fall at midnight in the kickoff's own UTC offset, so a
/// late Wednesday game listed at `-05:00` stays in the week it was played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NflCalendar {
    week_one_start: NaiveDateTime,
}

impl NflCalendar {
    /// Calendar whose week 1 begins at midnight on `start`.
    pub fn starting(start: NaiveDate) -> Self {
        Self {
            week_one_start: start.and_time(NaiveTime::default()),
        }
    }

    /// Local start of week 1, without an offset.
    pub fn week_one_start(&self) -> NaiveDateTime {
        self.week_one_start
    }

    /// Week for an RFC 3339 kickoff time such as `2025-09-07T17:00:00Z`.
    ///
    /// Games before week 1 count as week 1 and games after the regular
    /// season as week 18. Missing or unparseable times are `TBD`.
    pub fn week_for(&self, commence_time: Option<&str>) -> GameWeek {
        let Some(raw) = commence_time.filter(|s| !s.trim().is_empty()) else {
            return GameWeek::Tbd;
        };
        let Ok(kickoff) = DateTime::parse_from_rfc3339(raw.trim()) else {
            log::debug!("unparseable commence_time {:?}", raw);
            return GameWeek::Tbd;
        };

        let elapsed = kickoff.naive_local() - self.week_one_start;
        if elapsed.num_seconds() < 0 {
            return GameWeek::Week(1);
        }
        let week = (elapsed.num_days() / 7 + 1).min(i64::from(LAST_REGULAR_SEASON_WEEK));
        GameWeek::Week(week as u16)
    }
}

impl Default for NflCalendar {
    fn default() -> Self {
        let (y, m, d) = DEFAULT_SEASON_START;
        NaiveDate::from_ymd_opt(y, m, d)
            .map(Self::starting)
            .unwrap_or(Self {
                week_one_start: NaiveDateTime::default(),
            })
    }
}
