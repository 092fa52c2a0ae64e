//! Types for solar position queries.
//!
//! Provides the observer location, configuration, and result types used by
//! the [`crate::sun`] pipeline.

use helios_frames::{
    AtmosphericConditions, EquatorialCoords, HorizontalCoords, Nutation, NutationModel, Observer,
};

use crate::error::SunError;

/// Geographic location on Earth's surface.
///
/// Longitude is **west positive** (Meeus). Use [`GeoLocation::from_east`]
/// for the more common east-positive convention.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoLocation {
    longitude_west_deg: f64,
    latitude_deg: f64,
}

impl GeoLocation {
    /// Create a location from a west-positive longitude and a latitude.
    ///
    /// Rejects latitudes outside [-90, 90] and non-finite values.
    pub fn new(longitude_west_deg: f64, latitude_deg: f64) -> Result<Self, SunError> {
        if !longitude_west_deg.is_finite()
            || !latitude_deg.is_finite()
            || !(-90.0..=90.0).contains(&latitude_deg)
        {
            return Err(SunError::InvalidLocation {
                longitude_deg: longitude_west_deg,
                latitude_deg,
            });
        }
        Ok(Self {
            longitude_west_deg,
            latitude_deg,
        })
    }

    /// Create a location from an east-positive longitude.
    pub fn from_east(longitude_east_deg: f64, latitude_deg: f64) -> Result<Self, SunError> {
        Self::new(-longitude_east_deg, latitude_deg)
    }

    /// Longitude in degrees, west positive.
    pub fn longitude_west_deg(&self) -> f64 {
        self.longitude_west_deg
    }

    /// Longitude in degrees, east positive.
    pub fn longitude_east_deg(&self) -> f64 {
        -self.longitude_west_deg
    }

    /// Latitude in degrees, north positive.
    pub fn latitude_deg(&self) -> f64 {
        self.latitude_deg
    }
}

impl From<GeoLocation> for Observer {
    fn from(loc: GeoLocation) -> Self {
        Observer::new(loc.longitude_west_deg, loc.latitude_deg)
    }
}

/// Configurable parameters for a solar position query.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SunConfig {
    /// Nutation series. Default: [`NutationModel::Meeus63`].
    pub nutation: NutationModel,
    /// Atmosphere used for refraction; `None` reports the geometric
    /// altitude. Default: standard atmosphere (1010 mbar, 10 °C).
    pub refraction: Option<AtmosphericConditions>,
}

impl Default for SunConfig {
    fn default() -> Self {
        Self {
            nutation: NutationModel::Meeus63,
            refraction: Some(AtmosphericConditions::STANDARD),
        }
    }
}

impl SunConfig {
    /// Default configuration with refraction turned off.
    pub fn geometric() -> Self {
        Self {
            refraction: None,
            ..Self::default()
        }
    }

    pub fn with_nutation(mut self, nutation: NutationModel) -> Self {
        self.nutation = nutation;
        self
    }

    pub fn with_refraction(mut self, refraction: Option<AtmosphericConditions>) -> Self {
        self.refraction = refraction;
        self
    }
}

/// Apparent position of the Sun in the observer's sky.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SunPosition {
    /// Azimuth in degrees from the north, positive eastward, [0, 360).
    pub azimuth_deg: f64,
    /// Altitude in degrees; refracted unless refraction is disabled.
    pub altitude_deg: f64,
}

impl SunPosition {
    /// Whether the Sun's centre is above the horizon.
    pub fn is_above_horizon(&self) -> bool {
        self.altitude_deg > 0.0
    }

    /// Zenith distance in degrees.
    pub fn zenith_deg(&self) -> f64 {
        90.0 - self.altitude_deg
    }
}

/// Every intermediate of a solar position computation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SunPositionDetail {
    /// Julian Day (UT).
    pub jd: f64,
    /// Julian centuries since J2000.0.
    pub t: f64,
    /// Geometric mean longitude L0, degrees [0, 360).
    pub mean_longitude_deg: f64,
    /// Mean anomaly M, degrees [0, 360).
    pub mean_anomaly_deg: f64,
    /// Equation of the centre C, degrees.
    pub equation_of_center_deg: f64,
    /// True longitude L0 + C, degrees [0, 360).
    pub true_longitude_deg: f64,
    /// Apparent longitude λ (aberration and nutation), degrees [0, 360).
    pub apparent_longitude_deg: f64,
    /// Nutation in longitude and obliquity, arcseconds.
    pub nutation: Nutation,
    /// True obliquity ε, degrees.
    pub true_obliquity_deg: f64,
    /// Apparent right ascension and declination, degrees.
    pub equatorial: EquatorialCoords,
    /// Greenwich apparent sidereal time, degrees [0, 360).
    pub apparent_sidereal_time_deg: f64,
    /// Local hour angle, degrees [0, 360).
    pub hour_angle_deg: f64,
    /// Unrefracted horizontal position (azimuth from the south).
    pub horizontal: HorizontalCoords,
    /// Refraction applied, arcminutes (0 when disabled).
    pub refraction_arcmin: f64,
    /// Final position (azimuth from the north).
    pub position: SunPosition,
}
