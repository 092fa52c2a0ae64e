//! Julian Day ↔ calendar conversions.
//!
//! Meeus, *Astronomical Algorithms*, 2nd ed., ch. 7. Dates before
//! 1582-10-15 are proleptic Julian, dates on or after are Gregorian. The
//! cutover is fixed.

/// Julian Day of the J2000.0 epoch (2000-01-01 12:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Days in a Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Seconds in a day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Julian Day of 1582-10-15 0h, the first Gregorian date.
pub const GREGORIAN_START_JD: f64 = 2_299_160.5;

/// First Gregorian calendar date as (year, month, day).
pub const GREGORIAN_START: (i32, u32, u32) = (1582, 10, 15);

/// First integer day number (`⌊JD + 0.5⌋`) that belongs to the Gregorian calendar.
const GREGORIAN_START_DAY: f64 = 2_299_161.0;

/// Whether a calendar date falls on the Gregorian side of the reform.
pub fn is_gregorian_date(year: i32, month: u32, day: u32) -> bool {
    (year, month, day) >= GREGORIAN_START
}

/// Leap-year rule of the calendar in force for `year`.
///
/// 1582 itself uses the Julian rule, which agrees with the Gregorian one.
pub fn is_leap_year(year: i32) -> bool {
    if year > GREGORIAN_START.0 {
        (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
    } else {
        year.rem_euclid(4) == 0
    }
}

/// Number of days in `month` of `year`, or `None` for an invalid month.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 => Some(if is_leap_year(year) { 29 } else { 28 }),
        _ => None,
    }
}

/// Calendar date to Julian Day.
///
/// `day_frac` carries the time of day as a fraction (4.81 = 4th, 19:26:24).
/// No range checking is done here; [`crate::CivilDateTime`] validates input.
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };

    let b = if is_gregorian_date(year, month, day_frac.floor() as u32) {
        let a = (y as f64 / 100.0).floor();
        2.0 - a + (a / 4.0).floor()
    } else {
        0.0
    };

    (365.25 * (y as f64 + 4716.0)).floor() + (30.6001 * (m as f64 + 1.0)).floor() + day_frac + b
        - 1524.5
}

/// Julian Day to calendar date `(year, month, day_frac)`.
///
/// Valid for `jd >= 0`.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let jd5 = jd + 0.5;
    let z = jd5.floor();
    let f = jd5 - z;
    let (year, month, day) = day_number_to_calendar(z);
    (year, month, day as f64 + f)
}

/// Integer day number `Z = ⌊JD + 0.5⌋` to `(year, month, day)`.
pub(crate) fn day_number_to_calendar(z: f64) -> (i32, u32, u32) {
    let a = if z < GREGORIAN_START_DAY {
        z
    } else {
        let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
        z + 1.0 + alpha - (alpha / 4.0).floor()
    };
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor();
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };
    (year as i32, month as u32, day as u32)
}

/// Julian centuries since J2000.0.
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}

/// Julian Day from Julian centuries since J2000.0.
pub fn centuries_to_jd(t: f64) -> f64 {
    J2000_JD + t * DAYS_PER_CENTURY
}

/// Time argument for series that are polynomials in time.
///
/// Nutation, obliquity and the solar theory all work in Julian centuries.
/// Tagging the unit keeps a raw Julian Day from being read as centuries.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimeArg {
    /// A Julian Day (UT).
    JulianDay(f64),
    /// Julian centuries since J2000.0.
    JulianCenturies(f64),
}

impl TimeArg {
    /// Julian centuries since J2000.0.
    pub fn centuries(self) -> f64 {
        match self {
            Self::JulianDay(jd) => jd_to_centuries(jd),
            Self::JulianCenturies(t) => t,
        }
    }

    /// Julian Day.
    pub fn jd(self) -> f64 {
        match self {
            Self::JulianDay(jd) => jd,
            Self::JulianCenturies(t) => centuries_to_jd(t),
        }
    }
}
