//! Apparent position of the Sun for a terrestrial observer.
//!
//! This crate provides:
//! - `GeoLocation`, a validated observer location (west-positive longitude)
//! - `SunConfig`, selecting the nutation series and the refraction model
//! - `sun_position` / `sun_position_detail`, the civil-time pipeline
//! - `sun_position_jd` / `sun_position_detail_jd`, the Julian Day entry points
//!
//! Time is taken as UT. The difference ΔT between dynamical and universal
//! time is ignored, which is well below the accuracy of the solar theory.

pub mod error;
pub mod sun;
pub mod sun_types;

pub use error::SunError;
pub use sun::{
    sun_equation_of_center_deg, sun_mean_anomaly_deg, sun_mean_longitude_deg, sun_position,
    sun_position_detail, sun_position_detail_jd, sun_position_jd,
};
pub use sun_types::{GeoLocation, SunConfig, SunPosition, SunPositionDetail};

pub use helios_frames::{AtmosphericConditions, NutationModel};
pub use helios_time::CivilDateTime;
