//! Earth-orientation corrections and coordinate frames.
//!
//! Builds on `helios_time` with nutation, the obliquity of the ecliptic,
//! apparent sidereal time, ecliptic/equatorial/horizontal conversions and
//! atmospheric refraction.

pub mod coords;
pub mod nutation;
pub mod obliquity;
pub mod refraction;
pub mod sidereal;

pub use coords::{
    EclipticCoords, EquatorialCoords, HorizontalCoords, Observer, angle_diff_deg,
    ecliptic_to_equatorial, equatorial_to_ecliptic, equatorial_to_horizontal, hour_angle_deg,
    horizontal_to_equatorial,
};
pub use nutation::{
    Nutation, NutationModel, fundamental_arguments, nutation_meeus63, nutation_two_term,
};
pub use obliquity::{
    MEAN_OBLIQUITY_J2000_DEG, mean_obliquity, mean_obliquity_deg, true_obliquity,
    true_obliquity_deg, true_obliquity_with_deps, true_obliquity_with_nutation,
};
pub use refraction::{
    AtmosphericConditions, REFRACTION_FLOOR_DEG, Refraction, refraction_arcmin,
    true_altitude_from_apparent,
};
pub use sidereal::{
    apparent_sidereal_time_deg, apparent_sidereal_time_with_nutation, equation_of_equinoxes_deg,
};
