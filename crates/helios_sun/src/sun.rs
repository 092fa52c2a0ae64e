//! Apparent solar position from a civil instant and an observer.
//!
//! Low-accuracy solar theory of Meeus ch. 25: the Sun's geometric mean
//! longitude and mean anomaly, a three-term equation of the centre, then
//! aberration (−20.5″) and nutation in longitude. Accuracy is about 0.01°
//! near the present epoch. The apparent longitude is rotated to the equator
//! with the true obliquity, then to the horizon with apparent sidereal time.
//!
//! Nutation is evaluated once per query and shared by the longitude, the
//! obliquity and sidereal time.

use helios_frames::{
    EclipticCoords, Nutation, Observer, Refraction, apparent_sidereal_time_with_nutation,
    ecliptic_to_equatorial, equatorial_to_horizontal, hour_angle_deg, true_obliquity_with_deps,
};
use helios_time::{CivilDateTime, TimeArg, TimeError, jd_to_centuries, normalize_360};
use tracing::{debug_span, trace};

use crate::error::SunError;
use crate::sun_types::{GeoLocation, SunConfig, SunPosition, SunPositionDetail};

/// Aberration correction, degrees (−20.4898″ rounded as Meeus does).
const ABERRATION_DEG: f64 = -0.005_69;

/// Geometric mean longitude L0 of the Sun, degrees (unreduced).
pub fn sun_mean_longitude_deg(t: f64) -> f64 {
    280.466_46 + 36_000.769_83 * t + 0.000_303_2 * t * t
}

/// Mean anomaly M of the Sun, degrees (unreduced).
pub fn sun_mean_anomaly_deg(t: f64) -> f64 {
    357.529_11 + 35_999.050_29 * t - 0.000_153_7 * t * t
}

/// Equation of the centre C in degrees for mean anomaly `m_deg`.
pub fn sun_equation_of_center_deg(t: f64, m_deg: f64) -> f64 {
    let m = m_deg.to_radians();
    (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * m.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m).sin()
        + 0.000_289 * (3.0 * m).sin()
}

/// Sun's apparent position for a civil instant.
pub fn sun_position(
    instant: &CivilDateTime,
    location: &GeoLocation,
    config: &SunConfig,
) -> SunPosition {
    sun_position_detail(instant, location, config).position
}

/// Like [`sun_position`], also returning every intermediate value.
pub fn sun_position_detail(
    instant: &CivilDateTime,
    location: &GeoLocation,
    config: &SunConfig,
) -> SunPositionDetail {
    compute_detail(instant.to_jd(), location, config)
}

/// Sun's apparent position for a Julian Day (UT).
pub fn sun_position_jd(
    jd: f64,
    location: &GeoLocation,
    config: &SunConfig,
) -> Result<SunPosition, SunError> {
    Ok(sun_position_detail_jd(jd, location, config)?.position)
}

/// Like [`sun_position_jd`], also returning every intermediate value.
pub fn sun_position_detail_jd(
    jd: f64,
    location: &GeoLocation,
    config: &SunConfig,
) -> Result<SunPositionDetail, SunError> {
    if !jd.is_finite() || jd < 0.0 {
        return Err(TimeError::JulianDayOutOfRange(jd).into());
    }
    Ok(compute_detail(jd, location, config))
}

fn compute_detail(jd: f64, location: &GeoLocation, config: &SunConfig) -> SunPositionDetail {
    let span = debug_span!(
        "sun_position",
        jd,
        lon_west = location.longitude_west_deg(),
        lat = location.latitude_deg(),
        model = ?config.nutation,
    );
    let _guard = span.enter();

    let t = jd_to_centuries(jd);
    let nutation = Nutation::compute(config.nutation, TimeArg::JulianCenturies(t));

    let l0 = normalize_360(sun_mean_longitude_deg(t));
    let m = normalize_360(sun_mean_anomaly_deg(t));
    let c = sun_equation_of_center_deg(t, m);
    let true_lon = normalize_360(l0 + c);
    let lambda = normalize_360(true_lon + ABERRATION_DEG + nutation.delta_psi_deg());
    trace!(t, l0, m, c, true_lon, lambda, "solar longitude");

    let eps = true_obliquity_with_deps(t, nutation.delta_eps_arcsec);
    let equatorial = ecliptic_to_equatorial(
        &EclipticCoords {
            lon_deg: lambda,
            lat_deg: 0.0,
        },
        eps,
    );
    trace!(
        dpsi = nutation.delta_psi_arcsec,
        deps = nutation.delta_eps_arcsec,
        eps,
        ra = equatorial.ra_deg,
        dec = equatorial.dec_deg,
        "equatorial"
    );

    let gast_raw = apparent_sidereal_time_with_nutation(jd, &nutation);
    let observer = Observer::from(*location);
    let horizontal = equatorial_to_horizontal(&equatorial, gast_raw, &observer);
    let gast = normalize_360(gast_raw);
    let hour_angle = hour_angle_deg(gast, observer.longitude_west_deg, equatorial.ra_deg);

    let (refraction_arcmin, altitude_deg) = match &config.refraction {
        Some(conditions) => {
            let r = Refraction::from_true_altitude(horizontal.altitude_deg, conditions);
            (r.refraction_arcmin, r.apparent_altitude_deg)
        }
        None => (0.0, horizontal.altitude_deg),
    };
    let position = SunPosition {
        azimuth_deg: horizontal.azimuth_from_north_deg(),
        altitude_deg,
    };
    trace!(
        gast,
        hour_angle,
        az_south = horizontal.azimuth_deg,
        alt_geometric = horizontal.altitude_deg,
        refraction_arcmin,
        azimuth = position.azimuth_deg,
        altitude = position.altitude_deg,
        "horizontal"
    );

    SunPositionDetail {
        jd,
        t,
        mean_longitude_deg: l0,
        mean_anomaly_deg: m,
        equation_of_center_deg: c,
        true_longitude_deg: true_lon,
        apparent_longitude_deg: lambda,
        nutation,
        true_obliquity_deg: eps,
        equatorial,
        apparent_sidereal_time_deg: gast,
        hour_angle_deg: hour_angle,
        horizontal,
        refraction_arcmin,
        position,
    }
}
