//! Angle normalization and sexagesimal conversions.
//!
//! Degrees are the unit at every public boundary. Hours convert at
//! 15° per hour (24 h = 360°).

use std::fmt::{Display, Formatter};

/// Map `value` into the half-open interval `[min, max)`.
///
/// The result differs from `value` by an integer multiple of `max - min`.
/// Negative inputs are handled with Euclidean remainder, so the result is
/// never shifted the wrong way.
pub fn normalize_angle(value: f64, min: f64, max: f64) -> f64 {
    let span = max - min;
    let r = (value - min).rem_euclid(span) + min;
    // rem_euclid can round up to exactly `span` for tiny negative inputs.
    if r >= max { min } else { r }
}

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    normalize_angle(deg, 0.0, 360.0)
}

/// Normalize an angle to [-180, 180) degrees.
pub fn normalize_180(deg: f64) -> f64 {
    normalize_angle(deg, -180.0, 180.0)
}

/// Convert a base-60 triplet to decimal degrees.
///
/// The sign comes from `degree` alone; minutes and seconds are always added.
/// A negative angle with a zero degree part (e.g. −0°30′) cannot be written
/// this way: negate the positive result instead, or use [`dms_to_deg`].
pub fn sexagesimal_to_deg(degree: i32, arcminute: u32, arcsecond: f64) -> f64 {
    degree as f64 + arcminute as f64 / 60.0 + arcsecond / 3600.0
}

/// Signed degrees/minutes/seconds to decimal degrees.
pub fn dms_to_deg(negative: bool, degree: u32, arcminute: u32, arcsecond: f64) -> f64 {
    let magnitude = degree as f64 + arcminute as f64 / 60.0 + arcsecond / 3600.0;
    if negative { -magnitude } else { magnitude }
}

/// Hours/minutes/seconds of time to decimal degrees.
pub fn hms_to_deg(hour: i32, minute: u32, second: f64) -> f64 {
    sexagesimal_to_deg(hour, minute, second) * 15.0
}

/// Degrees/arcminutes/arcseconds representation of an angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dms {
    pub negative: bool,
    pub degrees: u32,
    pub minutes: u32,
    pub seconds: f64,
}

/// Hours/minutes/seconds representation of an angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hms {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: f64,
}

/// Split decimal degrees into [`Dms`].
pub fn deg_to_dms(deg: f64) -> Dms {
    let d = deg.abs();
    let degrees = d.floor();
    let remainder = (d - degrees) * 60.0;
    let minutes = remainder.floor();
    Dms {
        negative: deg < 0.0,
        degrees: degrees as u32,
        minutes: minutes as u32,
        seconds: (remainder - minutes) * 60.0,
    }
}

/// Normalize to [0, 360) and split into hours of time.
pub fn deg_to_hms(deg: f64) -> Hms {
    let h = normalize_360(deg) / 15.0;
    let hours = h.floor();
    let remainder = (h - hours) * 60.0;
    let minutes = remainder.floor();
    Hms {
        hours: hours as u32,
        minutes: minutes as u32,
        seconds: (remainder - minutes) * 60.0,
    }
}

impl Dms {
    /// Back to decimal degrees.
    pub fn to_deg(self) -> f64 {
        dms_to_deg(self.negative, self.degrees, self.minutes, self.seconds)
    }
}

impl Hms {
    /// Back to decimal degrees.
    pub fn to_deg(self) -> f64 {
        hms_to_deg(self.hours as i32, self.minutes, self.seconds)
    }
}

impl Display for Dms {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let sign = if self.negative { '-' } else { '+' };
        write!(
            f,
            "{sign}{}°{:02}′{:06.3}″",
            self.degrees, self.minutes, self.seconds
        )
    }
}

impl Display for Hms {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}h{:02}m{:07.4}s", self.hours, self.minutes, self.seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_zero() {
        assert_eq!(normalize_360(0.0), 0.0);
    }

    #[test]
    fn normalize_360_wraps() {
        assert!((normalize_360(360.0) - 0.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_negative() {
        assert!((normalize_360(-10.0) - 350.0).abs() < 1e-12);
    }

    #[test]
    fn normalize_large_negative() {
        // Unnormalized mean sidereal time from 1987-04-10 19:21 UT.
        let r = normalize_360(-1_677_831.262_126_6);
        assert!((r - 128.737_873_4).abs() < 1e-6, "got {r}");
    }

    #[test]
    fn normalize_custom_range() {
        assert!((normalize_angle(190.0, -180.0, 180.0) - (-170.0)).abs() < 1e-12);
        assert!((normalize_angle(-180.0, -180.0, 180.0) - (-180.0)).abs() < 1e-12);
        assert!((normalize_angle(180.0, -180.0, 180.0) - (-180.0)).abs() < 1e-12);
        assert!((normalize_angle(25.0, 0.0, 24.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn normalize_tiny_negative_stays_in_range() {
        let r = normalize_360(-1e-17);
        assert!((0.0..360.0).contains(&r), "got {r}");
    }

    #[test]
    fn sexagesimal_basic() {
        let d = sexagesimal_to_deg(23, 26, 21.448);
        assert!((d - 23.439_291_111).abs() < 1e-9);
    }

    #[test]
    fn sexagesimal_sign_from_degree_only() {
        // -6°43′11.61″ must be pre-negated; passing -6 adds the minutes.
        let wrong = sexagesimal_to_deg(-6, 43, 11.61);
        let right = -sexagesimal_to_deg(6, 43, 11.61);
        assert!((wrong - (-5.280_108_3)).abs() < 1e-6);
        assert!((right - (-6.719_891_667)).abs() < 1e-9);
        assert!((dms_to_deg(true, 6, 43, 11.61) - right).abs() < 1e-15);
    }

    #[test]
    fn hms_is_fifteen_degrees_per_hour() {
        assert!((hms_to_deg(1, 0, 0.0) - 15.0).abs() < 1e-15);
        assert!((hms_to_deg(13, 10, 46.1351) - 197.692_229_583).abs() < 1e-8);
    }

    #[test]
    fn dms_split_and_display() {
        let dms = deg_to_dms(23.439_291_111_111);
        assert_eq!(dms.degrees, 23);
        assert_eq!(dms.minutes, 26);
        assert!((dms.seconds - 21.448).abs() < 1e-6);
        assert_eq!(dms.to_string(), "+23°26′21.448″");
        assert!((dms.to_deg() - 23.439_291_111_111).abs() < 1e-12);
    }

    #[test]
    fn dms_negative() {
        let dms = deg_to_dms(-0.5);
        assert!(dms.negative);
        assert_eq!(dms.degrees, 0);
        assert_eq!(dms.minutes, 30);
        assert!((dms.to_deg() + 0.5).abs() < 1e-12);
    }

    #[test]
    fn hms_split_and_display() {
        let hms = deg_to_hms(hms_to_deg(13, 10, 46.1351));
        assert_eq!(hms.hours, 13);
        assert_eq!(hms.minutes, 10);
        assert!((hms.seconds - 46.1351).abs() < 1e-6);
        assert_eq!(hms.to_string(), "13h10m46.1351s");
    }

    #[test]
    fn hms_wraps_negative() {
        let hms = deg_to_hms(-15.0);
        assert_eq!(hms.hours, 23);
        assert_eq!(hms.minutes, 0);
    }
}
