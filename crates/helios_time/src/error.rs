//! Error types for calendar and time conversions.

use thiserror::Error;

/// Errors from civil calendar validation or parsing.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Year before -4713, the earliest local year of a non-negative Julian Day.
    #[error("year {0} precedes the earliest supported year (-4713)")]
    YearOutOfRange(i32),
    /// Julian Day negative or not finite.
    #[error("Julian Day {0} outside the supported range (>= 0)")]
    JulianDayOutOfRange(f64),
    /// Month outside 1..=12.
    #[error("invalid month: {0} (expected 1-12)")]
    InvalidMonth(u32),
    /// Day outside the length of the given month.
    #[error("invalid day {day} for {year:04}-{month:02} (month has {max} days)")]
    InvalidDay { year: i32, month: u32, day: u32, max: u32 },
    /// Hour, minute or second outside its range.
    #[error("invalid time of day: {0}")]
    InvalidTime(&'static str),
    /// UTC offset larger than ±18 hours.
    #[error("invalid UTC offset: {0} s")]
    InvalidOffset(i32),
    /// Date skipped by the Gregorian reform (1582-10-05 through 1582-10-14).
    #[error("{year:04}-{month:02}-{day:02} does not exist (Gregorian reform gap)")]
    NonexistentDate { year: i32, month: u32, day: u32 },
    /// Textual date/time could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),
}
