//! Logical simulation time.
//!
//! # Design
//!
//! Time is represented as Unix seconds in an `i64` newtype, [`SimTime`].
//! Using an integer second as the canonical unit means all issue-timestamp
//! arithmetic is exact (no floating-point drift) and comparisons are O(1).
//!
//! Input rosters carry timestamps in `YYYY-MM-DD HH:MM:SS` form, so the type
//! also parses and displays that format.  Calendar conversion uses integer
//! civil-date arithmetic (the usual era/year-of-era decomposition) rather
//! than a datetime library; the simulator never needs time zones or DST.

use std::fmt;

use crate::error::{CoreError, CoreResult};

// ── SimTime ───────────────────────────────────────────────────────────────────

/// An absolute logical timestamp, stored as Unix seconds.
///
/// `i64` covers ±292 billion years around the epoch — negative values (before
/// 1970) are valid and behave consistently through parse/format.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(pub i64);

impl SimTime {
    pub const EPOCH: SimTime = SimTime(0);

    /// Construct from a civil date and time-of-day.
    ///
    /// Out-of-range components (month 13, February 30, hour 24, …) are a
    /// `CoreError::Parse`.
    pub fn from_civil(
        year: i64,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> CoreResult<SimTime> {
        if !(1..=12).contains(&month) {
            return Err(CoreError::Parse(format!("month {month} out of range")));
        }
        if day < 1 || day > days_in_month(year, month) {
            return Err(CoreError::Parse(format!(
                "day {day} out of range for {year}-{month:02}"
            )));
        }
        if hour > 23 || minute > 59 || second > 59 {
            return Err(CoreError::Parse(format!(
                "time-of-day {hour:02}:{minute:02}:{second:02} out of range"
            )));
        }
        let days = days_from_civil(year, month, day);
        Ok(SimTime(
            days * 86_400 + i64::from(hour) * 3_600 + i64::from(minute) * 60 + i64::from(second),
        ))
    }

    /// Parse a `YYYY-MM-DD HH:MM:SS` timestamp.
    pub fn parse(s: &str) -> CoreResult<SimTime> {
        let malformed = || {
            CoreError::Parse(format!(
                "invalid timestamp {s:?}: expected YYYY-MM-DD HH:MM:SS"
            ))
        };

        let (date, clock) = s.trim().split_once(' ').ok_or_else(malformed)?;
        let mut date_parts = date.splitn(3, '-');
        let mut clock_parts = clock.splitn(3, ':');

        let year: i64 = next_field(&mut date_parts).ok_or_else(malformed)?;
        let month: u32 = next_field(&mut date_parts).ok_or_else(malformed)?;
        let day: u32 = next_field(&mut date_parts).ok_or_else(malformed)?;
        let hour: u32 = next_field(&mut clock_parts).ok_or_else(malformed)?;
        let minute: u32 = next_field(&mut clock_parts).ok_or_else(malformed)?;
        let second: u32 = next_field(&mut clock_parts).ok_or_else(malformed)?;

        SimTime::from_civil(year, month, day, hour, minute, second)
    }

    /// Raw Unix seconds.
    #[inline]
    pub fn unix_secs(self) -> i64 {
        self.0
    }

    /// Seconds elapsed from `earlier` to `self` (negative if `earlier` is later).
    #[inline]
    pub fn since(self, earlier: SimTime) -> i64 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u64> for SimTime {
    type Output = SimTime;
    #[inline]
    fn add(self, secs: u64) -> SimTime {
        SimTime(self.0 + secs as i64)
    }
}

impl std::ops::Sub for SimTime {
    type Output = i64;
    #[inline]
    fn sub(self, rhs: SimTime) -> i64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let days = self.0.div_euclid(86_400);
        let secs_of_day = self.0.rem_euclid(86_400);
        let (year, month, day) = civil_from_days(days);
        let hour = secs_of_day / 3_600;
        let minute = (secs_of_day % 3_600) / 60;
        let second = secs_of_day % 60;
        write!(
            f,
            "{year:04}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02}"
        )
    }
}

// ── Civil calendar arithmetic ─────────────────────────────────────────────────

fn next_field<T: std::str::FromStr>(parts: &mut std::str::SplitN<'_, char>) -> Option<T> {
    parts.next()?.parse().ok()
}

fn is_leap_year(year: i64) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

fn days_in_month(year: i64, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        _ => 28,
    }
}

/// Days from the Unix epoch to the given civil date (negative before 1970).
fn days_from_civil(year: i64, month: u32, day: u32) -> i64 {
    let y = if month <= 2 { year - 1 } else { year };
    let era = if y >= 0 { y } else { y - 399 } / 400;
    let yoe = y - era * 400; // [0, 399]
    let mp = i64::from((month + 9) % 12); // March-based month [0, 11]
    let doy = (153 * mp + 2) / 5 + i64::from(day) - 1; // [0, 365]
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy; // [0, 146096]
    era * 146_097 + doe - 719_468
}

/// Inverse of [`days_from_civil`]: `(year, month, day)` for an epoch day count.
fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + 719_468;
    let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
    let doe = z - era * 146_097; // [0, 146096]
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365; // [0, 399]
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100); // [0, 365]
    let mp = (5 * doy + 2) / 153; // [0, 11]
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32; // [1, 31]
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
    let year = yoe + era * 400 + i64::from(month <= 2);
    (year, month, day)
}
