//! Calendar and time foundations for the solar position pipeline.
//!
//! This crate provides:
//! - Angle normalization and sexagesimal conversions
//! - Julian Day ↔ calendar conversions (Julian/Gregorian aware)
//! - `CivilDateTime`, a validated civil instant with a UTC offset
//! - Greenwich mean sidereal time (unnormalized)
//! - `TimeArg`, the unit-tagged time argument used by every series

pub mod angle;
pub mod civil;
pub mod error;
pub mod julian;
pub mod sidereal;

pub use angle::{
    Dms, Hms, deg_to_dms, deg_to_hms, dms_to_deg, hms_to_deg, normalize_180, normalize_360,
    normalize_angle, sexagesimal_to_deg,
};
pub use civil::{CivilDateTime, MAX_UTC_OFFSET_SECONDS, MIN_YEAR, UNIX_EPOCH_JD};
pub use error::TimeError;
pub use julian::{
    DAYS_PER_CENTURY, GREGORIAN_START_JD, J2000_JD, SECONDS_PER_DAY, TimeArg, calendar_to_jd,
    centuries_to_jd, days_in_month, is_gregorian_date, is_leap_year, jd_to_calendar,
    jd_to_centuries,
};
pub use sidereal::{SIDEREAL_DEG_PER_DAY, local_sidereal_time_deg, mean_sidereal_time_deg};
