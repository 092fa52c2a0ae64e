//! Obliquity of the ecliptic (Meeus eq. 22.2).
//!
//! The polynomial is fitted over ±10 000 years but loses accuracy quickly
//! outside a few centuries of J2000.0. No range check is applied.

use helios_time::{TimeArg, sexagesimal_to_deg};

use crate::nutation::{Nutation, NutationModel};

/// Mean obliquity at J2000.0 in degrees (23°26′21.448″).
pub const MEAN_OBLIQUITY_J2000_DEG: f64 = 23.0 + 26.0 / 60.0 + 21.448 / 3600.0;

/// Mean obliquity of the ecliptic in degrees for `t` Julian centuries
/// since J2000.0.
pub fn mean_obliquity_deg(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let arcsec = -46.8150 * t - 0.000_59 * t2 + 0.001_813 * t3;
    sexagesimal_to_deg(23, 26, 21.448) + arcsec / 3600.0
}

/// [`mean_obliquity_deg`] for a unit-tagged time argument.
pub fn mean_obliquity(time: TimeArg) -> f64 {
    mean_obliquity_deg(time.centuries())
}

/// True obliquity in degrees, computing Δε with `model`.
pub fn true_obliquity_deg(t: f64, model: NutationModel) -> f64 {
    let (_, deps) = model.evaluate(t);
    true_obliquity_with_deps(t, deps)
}

/// True obliquity in degrees from a precomputed Δε (arcseconds).
pub fn true_obliquity_with_deps(t: f64, deps_arcsec: f64) -> f64 {
    mean_obliquity_deg(t) + deps_arcsec / 3600.0
}

/// [`true_obliquity_deg`] for a unit-tagged time argument.
pub fn true_obliquity(time: TimeArg, model: NutationModel) -> f64 {
    true_obliquity_deg(time.centuries(), model)
}

/// True obliquity reusing an already computed [`Nutation`].
pub fn true_obliquity_with_nutation(time: TimeArg, nutation: &Nutation) -> f64 {
    true_obliquity_with_deps(time.centuries(), nutation.delta_eps_arcsec)
}
