//! Greenwich apparent sidereal time.
//!
//! Apparent = mean + Δψ·cos ε, where ε is the true obliquity (Meeus ch. 12).
//! Values stay unnormalized like [`mean_sidereal_time_deg`].

use helios_time::{TimeArg, jd_to_centuries, mean_sidereal_time_deg};

use crate::nutation::{Nutation, NutationModel};
use crate::obliquity::true_obliquity_with_deps;

/// Equation of the equinoxes in degrees: Δψ·cos ε.
pub fn equation_of_equinoxes_deg(jd: f64, nutation: &Nutation) -> f64 {
    let eps = true_obliquity_with_deps(jd_to_centuries(jd), nutation.delta_eps_arcsec);
    nutation.delta_psi_deg() * eps.to_radians().cos()
}

/// Greenwich apparent sidereal time in degrees (unnormalized), evaluating
/// nutation with `model`.
pub fn apparent_sidereal_time_deg(jd: f64, model: NutationModel) -> f64 {
    let nutation = Nutation::compute(model, TimeArg::JulianDay(jd));
    apparent_sidereal_time_with_nutation(jd, &nutation)
}

/// Greenwich apparent sidereal time in degrees (unnormalized) from a
/// precomputed nutation.
pub fn apparent_sidereal_time_with_nutation(jd: f64, nutation: &Nutation) -> f64 {
    mean_sidereal_time_deg(jd) + equation_of_equinoxes_deg(jd, nutation)
}
