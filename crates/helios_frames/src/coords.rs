//! Equatorial, ecliptic and horizontal coordinates (Meeus ch. 13).
//!
//! Conventions:
//! - Longitudes of the observer are **west positive**.
//! - Horizontal azimuth is measured from the **south**, positive westward.
//!   [`HorizontalCoords::azimuth_from_north_deg`] converts to the
//!   navigational convention.

use helios_time::{normalize_360, normalize_180};

/// Right ascension and declination.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquatorialCoords {
    /// Right ascension in degrees, [0, 360).
    pub ra_deg: f64,
    /// Declination in degrees, [-90, 90].
    pub dec_deg: f64,
}

impl EquatorialCoords {
    pub fn new(ra_deg: f64, dec_deg: f64) -> Self {
        Self { ra_deg, dec_deg }
    }

    /// Build from right ascension in hours.
    pub fn from_hours(ra_hours: f64, dec_deg: f64) -> Self {
        Self {
            ra_deg: ra_hours * 15.0,
            dec_deg,
        }
    }

    /// Right ascension in hours.
    pub fn ra_hours(&self) -> f64 {
        self.ra_deg / 15.0
    }
}

/// Ecliptic longitude and latitude.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EclipticCoords {
    /// Longitude in degrees, [0, 360).
    pub lon_deg: f64,
    /// Latitude in degrees, [-90, 90].
    pub lat_deg: f64,
}

/// Azimuth and altitude.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HorizontalCoords {
    /// Azimuth in degrees from the south, positive westward, [0, 360).
    pub azimuth_deg: f64,
    /// Altitude in degrees above the horizon, [-90, 90].
    pub altitude_deg: f64,
}

impl HorizontalCoords {
    /// Azimuth from the north, positive eastward, [0, 360).
    pub fn azimuth_from_north_deg(&self) -> f64 {
        normalize_360(self.azimuth_deg + 180.0)
    }
}

/// Observer position for the horizontal frame.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Observer {
    /// Longitude in degrees, west positive.
    pub longitude_west_deg: f64,
    /// Latitude in degrees, north positive.
    pub latitude_deg: f64,
}

impl Observer {
    pub fn new(longitude_west_deg: f64, latitude_deg: f64) -> Self {
        Self {
            longitude_west_deg,
            latitude_deg,
        }
    }
}

/// Local hour angle H = θ − L − α in degrees, [0, 360).
///
/// `gst_deg` is Greenwich sidereal time and may be unnormalized.
pub fn hour_angle_deg(gst_deg: f64, longitude_west_deg: f64, ra_deg: f64) -> f64 {
    normalize_360(gst_deg - longitude_west_deg - ra_deg)
}

/// Clamp before `asin` so rounding can't push the argument out of domain.
fn asin_clamped(x: f64) -> f64 {
    x.clamp(-1.0, 1.0).asin()
}

/// Equatorial → horizontal (Meeus 13.5, 13.6).
pub fn equatorial_to_horizontal(
    eq: &EquatorialCoords,
    gst_deg: f64,
    observer: &Observer,
) -> HorizontalCoords {
    let h = hour_angle_deg(gst_deg, observer.longitude_west_deg, eq.ra_deg).to_radians();
    let dec = eq.dec_deg.to_radians();
    let lat = observer.latitude_deg.to_radians();

    let (sin_h, cos_h) = h.sin_cos();
    let (sin_lat, cos_lat) = lat.sin_cos();

    let az = sin_h.atan2(cos_h * sin_lat - dec.tan() * cos_lat);
    let alt = asin_clamped(sin_lat * dec.sin() + cos_lat * dec.cos() * cos_h);

    HorizontalCoords {
        azimuth_deg: normalize_360(az.to_degrees()),
        altitude_deg: alt.to_degrees(),
    }
}

/// Horizontal → equatorial, the inverse of [`equatorial_to_horizontal`].
pub fn horizontal_to_equatorial(
    hor: &HorizontalCoords,
    gst_deg: f64,
    observer: &Observer,
) -> EquatorialCoords {
    let az = hor.azimuth_deg.to_radians();
    let alt = hor.altitude_deg.to_radians();
    let lat = observer.latitude_deg.to_radians();

    let (sin_az, cos_az) = az.sin_cos();
    let (sin_lat, cos_lat) = lat.sin_cos();

    let h = sin_az.atan2(cos_az * sin_lat + alt.tan() * cos_lat);
    let dec = asin_clamped(sin_lat * alt.sin() - cos_lat * alt.cos() * cos_az);

    EquatorialCoords {
        ra_deg: normalize_360(gst_deg - observer.longitude_west_deg - h.to_degrees()),
        dec_deg: dec.to_degrees(),
    }
}

/// Ecliptic → equatorial for obliquity `eps_deg` (Meeus 13.3, 13.4).
pub fn ecliptic_to_equatorial(ecl: &EclipticCoords, eps_deg: f64) -> EquatorialCoords {
    let lon = ecl.lon_deg.to_radians();
    let lat = ecl.lat_deg.to_radians();
    let (sin_e, cos_e) = eps_deg.to_radians().sin_cos();

    let ra = (lon.sin() * cos_e - lat.tan() * sin_e).atan2(lon.cos());
    let dec = asin_clamped(lat.sin() * cos_e + lat.cos() * sin_e * lon.sin());

    EquatorialCoords {
        ra_deg: normalize_360(ra.to_degrees()),
        dec_deg: dec.to_degrees(),
    }
}

/// Equatorial → ecliptic for obliquity `eps_deg` (Meeus 13.1, 13.2).
pub fn equatorial_to_ecliptic(eq: &EquatorialCoords, eps_deg: f64) -> EclipticCoords {
    let ra = eq.ra_deg.to_radians();
    let dec = eq.dec_deg.to_radians();
    let (sin_e, cos_e) = eps_deg.to_radians().sin_cos();

    let lon = (ra.sin() * cos_e + dec.tan() * sin_e).atan2(ra.cos());
    let lat = asin_clamped(dec.sin() * cos_e - dec.cos() * sin_e * ra.sin());

    EclipticCoords {
        lon_deg: normalize_360(lon.to_degrees()),
        lat_deg: lat.to_degrees(),
    }
}

/// Signed angular difference `a − b` in (−180, 180], for comparing angles.
pub fn angle_diff_deg(a: f64, b: f64) -> f64 {
    -normalize_180(b - a)
}
