//! Civil date and time with a fixed UTC offset.
//!
//! `CivilDateTime` is the validated input of the pipeline. The calendar
//! system is implied by the date itself (proleptic Julian before
//! 1582-10-15, Gregorian after), and the offset normalizes wall-clock time
//! to UT. UT is taken as UTC; leap seconds and ΔT are ignored.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{DateTime, Offset, TimeZone};

use crate::error::TimeError;
use crate::julian::{
    SECONDS_PER_DAY, calendar_to_jd, day_number_to_calendar, days_in_month, jd_to_centuries,
};

/// Largest accepted UTC offset in seconds (±18 h).
pub const MAX_UTC_OFFSET_SECONDS: i32 = 18 * 3600;

/// Earliest accepted year.
///
/// JD 0 falls on -4712-01-01 12:00 UT; a negative UTC offset can put the
/// local date of an instant after JD 0 on the last days of -4713.
pub const MIN_YEAR: i32 = -4713;

/// Julian Day of the Unix epoch, 1970-01-01 00:00 UTC.
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

const MS_PER_DAY: i64 = 86_400_000;

/// A validated civil instant: calendar date, wall-clock time and UTC offset.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "String", try_from = "String")
)]
pub struct CivilDateTime {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: f64,
    utc_offset_seconds: i32,
}

impl CivilDateTime {
    /// Build a civil instant, rejecting out-of-range fields.
    ///
    /// `utc_offset_seconds` is local time minus UTC (Mountain Standard Time
    /// is `-7 * 3600`).
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
        utc_offset_seconds: i32,
    ) -> Result<Self, TimeError> {
        if year < MIN_YEAR {
            return Err(TimeError::YearOutOfRange(year));
        }
        let max = days_in_month(year, month).ok_or(TimeError::InvalidMonth(month))?;
        if day == 0 || day > max {
            return Err(TimeError::InvalidDay {
                year,
                month,
                day,
                max,
            });
        }
        if year == 1582 && month == 10 && (5..=14).contains(&day) {
            return Err(TimeError::NonexistentDate { year, month, day });
        }
        if hour > 23 {
            return Err(TimeError::InvalidTime("hour must be 0-23"));
        }
        if minute > 59 {
            return Err(TimeError::InvalidTime("minute must be 0-59"));
        }
        // 60.x is accepted for a leap second.
        if !second.is_finite() || !(0.0..61.0).contains(&second) {
            return Err(TimeError::InvalidTime("second must be in [0, 61)"));
        }
        if utc_offset_seconds.abs() > MAX_UTC_OFFSET_SECONDS {
            return Err(TimeError::InvalidOffset(utc_offset_seconds));
        }
        let t = Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            utc_offset_seconds,
        };
        let jd = t.to_jd();
        if jd < 0.0 {
            return Err(TimeError::JulianDayOutOfRange(jd));
        }
        Ok(t)
    }

    /// Civil instant in UTC.
    pub fn utc(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Result<Self, TimeError> {
        Self::new(year, month, day, hour, minute, second, 0)
    }

    /// Midnight UTC at the start of the given date.
    pub fn date(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        Self::new(year, month, day, 0, 0, 0.0, 0)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn second(&self) -> f64 {
        self.second
    }

    pub fn utc_offset_seconds(&self) -> i32 {
        self.utc_offset_seconds
    }

    /// Seconds from local midnight to this instant, minus the UTC offset.
    fn ut_seconds_from_local_midnight(&self) -> f64 {
        self.hour as f64 * 3600.0 + self.minute as f64 * 60.0 + self.second
            - self.utc_offset_seconds as f64
    }

    /// Julian Day (UT) of this instant.
    ///
    /// The calendar system is chosen from the local date. The offset is
    /// removed in seconds, before converting to days.
    pub fn to_jd(&self) -> f64 {
        calendar_to_jd(self.year, self.month, self.day as f64)
            + self.ut_seconds_from_local_midnight() / SECONDS_PER_DAY
    }

    /// Julian centuries since J2000.0.
    pub fn centuries(&self) -> f64 {
        jd_to_centuries(self.to_jd())
    }

    /// UTC civil instant for a Julian Day, to the nearest millisecond.
    pub fn from_jd(jd: f64) -> Result<Self, TimeError> {
        Self::from_jd_with_offset(jd, 0)
    }

    /// Civil instant for a Julian Day, expressed at the given UTC offset.
    pub fn from_jd_with_offset(jd: f64, utc_offset_seconds: i32) -> Result<Self, TimeError> {
        if !jd.is_finite() || jd < 0.0 {
            return Err(TimeError::JulianDayOutOfRange(jd));
        }
        if utc_offset_seconds.abs() > MAX_UTC_OFFSET_SECONDS {
            return Err(TimeError::InvalidOffset(utc_offset_seconds));
        }

        let local = jd + utc_offset_seconds as f64 / SECONDS_PER_DAY + 0.5;
        let mut z = local.floor();
        let mut ms = ((local - z) * MS_PER_DAY as f64).round() as i64;
        if ms >= MS_PER_DAY {
            z += 1.0;
            ms -= MS_PER_DAY;
        }

        let (year, month, day) = day_number_to_calendar(z);
        let hour = (ms / 3_600_000) as u32;
        let minute = ((ms / 60_000) % 60) as u32;
        let second = (ms % 60_000) as f64 / 1000.0;
        Self::new(year, month, day, hour, minute, second, utc_offset_seconds)
    }

    /// The same instant expressed at another UTC offset.
    pub fn with_offset(&self, utc_offset_seconds: i32) -> Result<Self, TimeError> {
        Self::from_jd_with_offset(self.to_jd(), utc_offset_seconds)
    }
}

impl<Tz: TimeZone> TryFrom<DateTime<Tz>> for CivilDateTime {
    type Error = TimeError;

    /// Goes through the Unix timestamp, so instants before 1582-10-15 land
    /// on the Julian calendar even though chrono itself is proleptic
    /// Gregorian.
    fn try_from(dt: DateTime<Tz>) -> Result<Self, Self::Error> {
        let offset = dt.offset().fix().local_minus_utc();
        let jd = UNIX_EPOCH_JD
            + dt.timestamp() as f64 / SECONDS_PER_DAY
            + dt.timestamp_subsec_millis() as f64 / MS_PER_DAY as f64;
        Self::from_jd_with_offset(jd, offset)
    }
}

impl Display for CivilDateTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.year < 0 {
            write!(f, "-{:04}", -self.year)?;
        } else {
            write!(f, "{:04}", self.year)?;
        }
        write!(f, "-{:02}-{:02}T{:02}:{:02}:", self.month, self.day, self.hour, self.minute)?;

        let whole = self.second.trunc();
        if (self.second - whole).abs() < 1e-9 {
            write!(f, "{:02}", whole as u32)?;
        } else {
            write!(f, "{:06.3}", self.second)?;
        }

        if self.utc_offset_seconds == 0 {
            write!(f, "Z")
        } else {
            let sign = if self.utc_offset_seconds < 0 { '-' } else { '+' };
            let abs = self.utc_offset_seconds.abs();
            write!(f, "{sign}{:02}:{:02}", abs / 3600, (abs % 3600) / 60)
        }
    }
}

impl FromStr for CivilDateTime {
    type Err = TimeError;

    /// Parse `YYYY-MM-DD[Thh:mm[:ss[.fff]]][Z|±hh:mm]`.
    ///
    /// A space may replace the `T`. Years may carry a leading `-`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (date, time) = match s.split_once(['T', ' ']) {
            Some((d, t)) => (d, Some(t)),
            None => (s, None),
        };

        let (negative, date_body) = match date.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, date.strip_prefix('+').unwrap_or(date)),
        };
        let date_parts: Vec<&str> = date_body.split('-').collect();
        if date_parts.len() != 3 {
            return Err(TimeError::Parse(format!("expected YYYY-MM-DD, got {date}")));
        }
        let year: i32 = parse_field(date_parts[0], "year")?;
        let year = if negative { -year } else { year };
        let month: u32 = parse_field(date_parts[1], "month")?;
        let day: u32 = parse_field(date_parts[2], "day")?;

        let Some(time) = time else {
            return Self::new(year, month, day, 0, 0, 0.0, 0);
        };

        let (clock, offset) = split_zone(time)?;
        let clock_parts: Vec<&str> = clock.split(':').collect();
        let (hour, minute, second): (u32, u32, f64) = match clock_parts.as_slice() {
            [h, m] => (parse_field(h, "hour")?, parse_field(m, "minute")?, 0.0),
            [h, m, s] => (
                parse_field(h, "hour")?,
                parse_field(m, "minute")?,
                parse_field(s, "second")?,
            ),
            _ => return Err(TimeError::Parse(format!("expected hh:mm[:ss], got {clock}"))),
        };

        Self::new(year, month, day, hour, minute, second, offset)
    }
}

impl From<CivilDateTime> for String {
    fn from(t: CivilDateTime) -> Self {
        t.to_string()
    }
}

impl TryFrom<String> for CivilDateTime {
    type Error = TimeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

fn parse_field<T: FromStr>(s: &str, what: &str) -> Result<T, TimeError> {
    s.parse()
        .map_err(|_| TimeError::Parse(format!("invalid {what}: {s:?}")))
}

/// Split `hh:mm:ss±hh:mm` / `hh:mm:ssZ` into the clock part and an offset in seconds.
fn split_zone(time: &str) -> Result<(&str, i32), TimeError> {
    if let Some(clock) = time.strip_suffix('Z') {
        return Ok((clock, 0));
    }
    let Some(idx) = time.rfind(['+', '-']) else {
        return Ok((time, 0));
    };
    let (clock, zone) = time.split_at(idx);
    let sign = if zone.starts_with('-') { -1 } else { 1 };
    let digits: String = zone[1..].chars().filter(|c| *c != ':').collect();
    let (hh, mm) = match digits.len() {
        2 => (parse_field::<i32>(&digits, "offset hours")?, 0),
        4 => (
            parse_field::<i32>(&digits[..2], "offset hours")?,
            parse_field::<i32>(&digits[2..], "offset minutes")?,
        ),
        _ => return Err(TimeError::Parse(format!("invalid UTC offset: {zone}"))),
    };
    Ok((clock, sign * (hh * 3600 + mm * 60)))
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, Utc};

    use super::*;

    #[test]
    fn noon_utc_julian_calendar() {
        let t = CivilDateTime::utc(333, 1, 27, 12, 0, 0.0).unwrap();
        assert!((t.to_jd() - 1_842_713.0).abs() < 1e-9);
    }

    #[test]
    fn offset_is_removed() {
        // 12:12:12 MST is 19:12:12 UTC.
        let local = CivilDateTime::new(2012, 12, 21, 12, 12, 12.0, -7 * 3600).unwrap();
        let utc = CivilDateTime::utc(2012, 12, 21, 19, 12, 12.0).unwrap();
        assert!((local.to_jd() - utc.to_jd()).abs() < 1e-9);
        assert!((utc.to_jd() - 2_456_283.300_138_889).abs() < 1e-8);
    }

    #[test]
    fn offset_across_midnight() {
        let local = CivilDateTime::new(2024, 1, 1, 1, 0, 0.0, 3 * 3600).unwrap();
        let back = CivilDateTime::from_jd(local.to_jd()).unwrap();
        assert_eq!((back.year(), back.month(), back.day(), back.hour()), (2023, 12, 31, 22));
    }

    #[test]
    fn from_jd_sputnik() {
        let t = CivilDateTime::from_jd(2_436_116.31).unwrap();
        assert_eq!(t.to_string(), "1957-10-04T19:26:24Z");
    }

    #[test]
    fn from_jd_rounds_up_into_next_day() {
        let jd = calendar_to_jd(2000, 1, 1.0) - 1e-10;
        let t = CivilDateTime::from_jd(jd).unwrap();
        assert_eq!((t.year(), t.month(), t.day(), t.hour()), (2000, 1, 1, 0));
    }

    #[test]
    fn from_jd_rejects_negative() {
        assert!(matches!(
            CivilDateTime::from_jd(-1.0),
            Err(TimeError::JulianDayOutOfRange(_))
        ));
        assert!(CivilDateTime::from_jd(f64::NAN).is_err());
    }

    #[test]
    fn with_offset_keeps_instant() {
        let utc = CivilDateTime::utc(1987, 4, 10, 19, 21, 0.0).unwrap();
        let est = utc.with_offset(-5 * 3600).unwrap();
        assert_eq!(est.hour(), 14);
        assert!((est.to_jd() - utc.to_jd()).abs() < 1e-9);
    }

    #[test]
    fn rejects_bad_month_and_day() {
        assert_eq!(
            CivilDateTime::date(2024, 13, 1),
            Err(TimeError::InvalidMonth(13))
        );
        assert!(matches!(
            CivilDateTime::date(2023, 2, 29),
            Err(TimeError::InvalidDay { max: 28, .. })
        ));
        assert!(CivilDateTime::date(2024, 2, 29).is_ok());
        assert!(CivilDateTime::date(1500, 2, 29).is_ok());
        assert!(matches!(
            CivilDateTime::date(2024, 4, 0),
            Err(TimeError::InvalidDay { .. })
        ));
    }

    #[test]
    fn rejects_reform_gap() {
        assert!(matches!(
            CivilDateTime::date(1582, 10, 10),
            Err(TimeError::NonexistentDate { .. })
        ));
        assert!(CivilDateTime::date(1582, 10, 4).is_ok());
        assert!(CivilDateTime::date(1582, 10, 15).is_ok());
    }

    #[test]
    fn rejects_bad_clock_and_offset() {
        assert!(CivilDateTime::utc(2024, 1, 1, 24, 0, 0.0).is_err());
        assert!(CivilDateTime::utc(2024, 1, 1, 0, 60, 0.0).is_err());
        assert!(CivilDateTime::utc(2024, 1, 1, 0, 0, 61.0).is_err());
        assert!(CivilDateTime::utc(2024, 1, 1, 0, 0, -0.5).is_err());
        assert!(CivilDateTime::utc(2016, 12, 31, 23, 59, 60.0).is_ok());
        assert_eq!(
            CivilDateTime::new(2024, 1, 1, 0, 0, 0.0, 19 * 3600),
            Err(TimeError::InvalidOffset(19 * 3600))
        );
        assert_eq!(
            CivilDateTime::date(-4714, 1, 1),
            Err(TimeError::YearOutOfRange(-4714))
        );
    }

    #[test]
    fn rejects_instants_before_jd_zero() {
        // -4712-01-01 00:00 UT is JD -0.5.
        assert_eq!(
            CivilDateTime::utc(-4712, 1, 1, 0, 0, 0.0),
            Err(TimeError::JulianDayOutOfRange(-0.5))
        );
        assert!(matches!(
            CivilDateTime::new(-4712, 1, 1, 0, 0, 0.0, 14 * 3600),
            Err(TimeError::JulianDayOutOfRange(_))
        ));
        assert!(matches!(
            CivilDateTime::date(-4713, 1, 1),
            Err(TimeError::JulianDayOutOfRange(_))
        ));
    }

    #[test]
    fn jd_zero_round_trips_at_extreme_offsets() {
        for offset in [-MAX_UTC_OFFSET_SECONDS, 0, MAX_UTC_OFFSET_SECONDS] {
            let t = CivilDateTime::from_jd_with_offset(0.0, offset).unwrap();
            assert_eq!(t.to_jd(), 0.0, "offset {offset}");
            let again = CivilDateTime::new(
                t.year(),
                t.month(),
                t.day(),
                t.hour(),
                t.minute(),
                t.second(),
                offset,
            )
            .unwrap();
            assert_eq!(again, t);
        }

        // 18 h west of Greenwich, JD 0 is the evening of -4713-12-31.
        let west = CivilDateTime::from_jd_with_offset(0.0, -MAX_UTC_OFFSET_SECONDS).unwrap();
        assert_eq!((west.year(), west.month(), west.day(), west.hour()), (-4713, 12, 31, 18));
        let east = CivilDateTime::from_jd_with_offset(0.0, MAX_UTC_OFFSET_SECONDS).unwrap();
        assert_eq!((east.year(), east.month(), east.day(), east.hour()), (-4712, 1, 2, 6));

        let t = CivilDateTime::from_jd_with_offset(0.1, -MAX_UTC_OFFSET_SECONDS).unwrap();
        assert!((t.to_jd() - 0.1).abs() * SECONDS_PER_DAY < 1e-3);
    }

    #[test]
    fn parse_utc_and_offset() {
        let t: CivilDateTime = "2012-12-21T12:12:12-07:00".parse().unwrap();
        assert_eq!(t.utc_offset_seconds(), -7 * 3600);
        assert_eq!(t.hour(), 12);

        let z: CivilDateTime = "1987-04-10T19:21:00Z".parse().unwrap();
        assert!((z.to_jd() - 2_446_896.306_25).abs() < 1e-9);

        let plain: CivilDateTime = "1999-01-01".parse().unwrap();
        assert!((plain.to_jd() - 2_451_179.5).abs() < 1e-9);

        let compact: CivilDateTime = "2024-06-01 08:30+0530".parse().unwrap();
        assert_eq!(compact.utc_offset_seconds(), 5 * 3600 + 1800);
    }

    #[test]
    fn parse_negative_year() {
        let t: CivilDateTime = "-4712-01-01T12:00:00Z".parse().unwrap();
        assert_eq!(t.year(), -4712);
        assert!(t.to_jd().abs() < 1e-9);
    }

    #[test]
    fn parse_errors() {
        assert!(matches!(
            "2024/01/01".parse::<CivilDateTime>(),
            Err(TimeError::Parse(_))
        ));
        assert!(matches!(
            "2024-01-01T12".parse::<CivilDateTime>(),
            Err(TimeError::Parse(_))
        ));
        assert!(matches!(
            "2024-01-01T12:00:00+7".parse::<CivilDateTime>(),
            Err(TimeError::Parse(_))
        ));
        assert!(matches!(
            "2024-02-30T00:00:00Z".parse::<CivilDateTime>(),
            Err(TimeError::InvalidDay { .. })
        ));
    }

    #[test]
    fn display_roundtrip() {
        let t = CivilDateTime::new(2024, 3, 20, 12, 30, 45.5, 5 * 3600 + 1800).unwrap();
        let s = t.to_string();
        assert_eq!(s, "2024-03-20T12:30:45.500+05:30");
        let back: CivilDateTime = s.parse().unwrap();
        assert_eq!(back, t);
    }

    #[test]
    fn from_chrono_fixed_offset() {
        let mst = FixedOffset::west_opt(7 * 3600).unwrap();
        let dt = mst.with_ymd_and_hms(2012, 12, 21, 12, 12, 12).unwrap();
        let t = CivilDateTime::try_from(dt).unwrap();
        assert_eq!(t.utc_offset_seconds(), -7 * 3600);
        assert_eq!((t.year(), t.month(), t.day(), t.hour(), t.minute()), (2012, 12, 21, 12, 12));
        assert!((t.second() - 12.0).abs() < 1e-9);
    }

    #[test]
    fn from_chrono_utc() {
        let dt = Utc.with_ymd_and_hms(1999, 1, 1, 0, 0, 0).unwrap();
        let t = CivilDateTime::try_from(dt).unwrap();
        assert!((t.to_jd() - 2_451_179.5).abs() < 1e-9);
    }
}
