//! Greenwich mean sidereal time.
//!
//! Meeus eq. 12.4. Input is a Julian Day in UT; output is in degrees.
//!
//! The mean value is left unnormalized: the apparent correction is added to
//! the raw value and normalization happens once, at the end.

use crate::angle::normalize_360;
use crate::julian::{J2000_JD, jd_to_centuries};

/// Sidereal degrees gained per solar day.
pub const SIDEREAL_DEG_PER_DAY: f64 = 360.985_647_366_29;

/// Greenwich mean sidereal time in degrees, unnormalized.
///
/// θ₀ = 280.46061837 + 360.98564736629·(JD − 2451545.0)
///      + 0.000387933·T² − T³/38710000
pub fn mean_sidereal_time_deg(jd: f64) -> f64 {
    let t = jd_to_centuries(jd);
    let t2 = t * t;
    280.460_618_37 + SIDEREAL_DEG_PER_DAY * (jd - J2000_JD) + 0.000_387_933 * t2
        - t2 * t / 38_710_000.0
}

/// Local sidereal time from Greenwich sidereal time and a west-positive
/// longitude. Returns degrees in [0, 360).
pub fn local_sidereal_time_deg(gst_deg: f64, longitude_west_deg: f64) -> f64 {
    normalize_360(gst_deg - longitude_west_deg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::hms_to_deg;

    #[test]
    fn mean_sidereal_unnormalized() {
        // 1987-04-10 19:21:00 UT.
        let gst = mean_sidereal_time_deg(2_446_896.306_25);
        assert!(
            (gst - (-1_677_831.262_126_6)).abs() < 1e-6,
            "GMST = {gst}"
        );
    }

    #[test]
    fn mean_sidereal_1987_midnight() {
        // 1987-04-10 0h UT: 13h10m46.3668s.
        let gst = normalize_360(mean_sidereal_time_deg(2_446_895.5));
        assert!((gst - hms_to_deg(13, 10, 46.3668)).abs() < 1e-5, "GMST = {gst}");
    }

    #[test]
    fn mean_sidereal_j2000() {
        let gst = mean_sidereal_time_deg(J2000_JD);
        assert!((gst - 280.460_618_37).abs() < 1e-12);
    }

    #[test]
    fn advances_one_sidereal_day() {
        let g1 = mean_sidereal_time_deg(2_451_545.0);
        let g2 = mean_sidereal_time_deg(2_451_546.0);
        assert!((g2 - g1 - SIDEREAL_DEG_PER_DAY).abs() < 1e-6);
    }

    #[test]
    fn local_west_offset() {
        let lst = local_sidereal_time_deg(10.0, 77.0);
        assert!((lst - 293.0).abs() < 1e-12);
        let lst_east = local_sidereal_time_deg(10.0, -20.0);
        assert!((lst_east - 30.0).abs() < 1e-12);
    }
}
