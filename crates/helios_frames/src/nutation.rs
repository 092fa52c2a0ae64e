//! Nutation in longitude (Δψ) and obliquity (Δε).
//!
//! Two models are available:
//! - [`NutationModel::Meeus63`]: the 63-term series of Meeus Table 22.A
//!   (IAU 1980 theory truncated at 0.0003″), accurate to about 0.01″.
//! - [`NutationModel::TwoTerm`]: the short approximation of Meeus ch. 22
//!   built on the Moon's node and the mean longitudes of Sun and Moon,
//!   good to 0.5″ in Δψ and 0.1″ in Δε.
//!
//! Both take Julian centuries since J2000.0. Results are in arcseconds.

use helios_time::TimeArg;

/// Choice of nutation series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NutationModel {
    /// Full 63-term series.
    #[default]
    Meeus63,
    /// Dominant terms only.
    TwoTerm,
}

impl NutationModel {
    /// `(Δψ, Δε)` in arcseconds for `t` Julian centuries since J2000.0.
    pub fn evaluate(self, t: f64) -> (f64, f64) {
        match self {
            Self::Meeus63 => nutation_meeus63(t),
            Self::TwoTerm => nutation_two_term(t),
        }
    }
}

/// Nutation at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Nutation {
    /// Nutation in longitude, arcseconds.
    pub delta_psi_arcsec: f64,
    /// Nutation in obliquity, arcseconds.
    pub delta_eps_arcsec: f64,
}

impl Nutation {
    /// Evaluate `model` at `time`.
    pub fn compute(model: NutationModel, time: TimeArg) -> Self {
        let (delta_psi_arcsec, delta_eps_arcsec) = model.evaluate(time.centuries());
        Self {
            delta_psi_arcsec,
            delta_eps_arcsec,
        }
    }

    /// Nutation in longitude, degrees.
    pub fn delta_psi_deg(&self) -> f64 {
        self.delta_psi_arcsec / 3600.0
    }

    /// Nutation in obliquity, degrees.
    pub fn delta_eps_deg(&self) -> f64 {
        self.delta_eps_arcsec / 3600.0
    }
}

/// The five fundamental arguments in degrees (unreduced).
///
/// Returns `[D, M, M′, F, Ω]`:
/// - `D`  = mean elongation of the Moon from the Sun
/// - `M`  = mean anomaly of the Sun
/// - `M′` = mean anomaly of the Moon
/// - `F`  = Moon's argument of latitude
/// - `Ω`  = longitude of the ascending node of the Moon's mean orbit
pub fn fundamental_arguments(t: f64) -> [f64; 5] {
    let t2 = t * t;
    let t3 = t2 * t;

    let d = 297.850_36 + 445_267.111_480 * t - 0.001_914_2 * t2 + t3 / 189_474.0;
    let m = 357.527_72 + 35_999.050_340 * t - 0.000_160_3 * t2 - t3 / 300_000.0;
    let mp = 134.962_98 + 477_198.867_398 * t + 0.008_697_2 * t2 + t3 / 56_250.0;
    let f = 93.271_91 + 483_202.017_538 * t - 0.003_682_5 * t2 + t3 / 327_270.0;
    let om = moon_node_deg(t);

    [d, m, mp, f, om]
}

/// Longitude of the Moon's ascending node, degrees.
fn moon_node_deg(t: f64) -> f64 {
    let t2 = t * t;
    125.044_52 - 1934.136_261 * t + 0.002_070_8 * t2 + t2 * t / 450_000.0
}

/// Meeus Table 22.A.
///
/// Each row: `([D, M, M′, F, Ω], [S, S′, C, C′])`. Δψ gains
/// `(S + S′·T)·sin(arg)` and Δε gains `(C + C′·T)·cos(arg)`, in units of
/// 0.0001″.
#[rustfmt::skip]
static MEEUS_TERMS: [([i8; 5], [f64; 4]); 63] = [
    ([  0,   0,   0,   0,   1], [-171996.0,  -174.2,  92025.0,   8.9]),
    ([ -2,   0,   0,   2,   2], [ -13187.0,    -1.6,   5736.0,  -3.1]),
    ([  0,   0,   0,   2,   2], [  -2274.0,    -0.2,    977.0,  -0.5]),
    ([  0,   0,   0,   0,   2], [   2062.0,     0.2,   -895.0,   0.5]),
    ([  0,   1,   0,   0,   0], [   1426.0,    -3.4,     54.0,  -0.1]),
    ([  0,   0,   1,   0,   0], [    712.0,     0.1,     -7.0,   0.0]),
    ([ -2,   1,   0,   2,   2], [   -517.0,     1.2,    224.0,  -0.6]),
    ([  0,   0,   0,   2,   1], [   -386.0,    -0.4,    200.0,   0.0]),
    ([  0,   0,   1,   2,   2], [   -301.0,     0.0,    129.0,  -0.1]),
    ([ -2,  -1,   0,   2,   2], [    217.0,    -0.5,    -95.0,   0.3]),
    ([ -2,   0,   1,   0,   0], [   -158.0,     0.0,      0.0,   0.0]),
    ([ -2,   0,   0,   2,   1], [    129.0,     0.1,    -70.0,   0.0]),
    ([  0,   0,  -1,   2,   2], [    123.0,     0.0,    -53.0,   0.0]),
    ([  2,   0,   0,   0,   0], [     63.0,     0.0,      0.0,   0.0]),
    ([  0,   0,   1,   0,   1], [     63.0,     0.1,    -33.0,   0.0]),
    ([  2,   0,  -1,   2,   2], [    -59.0,     0.0,     26.0,   0.0]),
    ([  0,   0,  -1,   0,   1], [    -58.0,    -0.1,     32.0,   0.0]),
    ([  0,   0,   1,   2,   1], [    -51.0,     0.0,     27.0,   0.0]),
    ([ -2,   0,   2,   0,   0], [     48.0,     0.0,      0.0,   0.0]),
    ([  0,   0,  -2,   2,   1], [     46.0,     0.0,    -24.0,   0.0]),
    ([  2,   0,   0,   2,   2], [    -38.0,     0.0,     16.0,   0.0]),
    ([  0,   0,   2,   2,   2], [    -31.0,     0.0,     13.0,   0.0]),
    ([  0,   0,   2,   0,   0], [     29.0,     0.0,      0.0,   0.0]),
    ([ -2,   0,   1,   2,   2], [     29.0,     0.0,    -12.0,   0.0]),
    ([  0,   0,   0,   2,   0], [     26.0,     0.0,      0.0,   0.0]),
    ([ -2,   0,   0,   2,   0], [    -22.0,     0.0,      0.0,   0.0]),
    ([  0,   0,  -1,   2,   1], [     21.0,     0.0,    -10.0,   0.0]),
    ([  0,   2,   0,   0,   0], [     17.0,    -0.1,      0.0,   0.0]),
    ([  2,   0,  -1,   0,   1], [     16.0,     0.0,     -8.0,   0.0]),
    ([ -2,   2,   0,   2,   2], [    -16.0,     0.1,      7.0,   0.0]),
    ([  0,   1,   0,   0,   1], [    -15.0,     0.0,      9.0,   0.0]),
    ([ -2,   0,   1,   0,   1], [    -13.0,     0.0,      7.0,   0.0]),
    ([  0,  -1,   0,   0,   1], [    -12.0,     0.0,      6.0,   0.0]),
    ([  0,   0,   2,  -2,   0], [     11.0,     0.0,      0.0,   0.0]),
    ([  2,   0,  -1,   2,   1], [    -10.0,     0.0,      5.0,   0.0]),
    ([  2,   0,   1,   2,   2], [     -8.0,     0.0,      3.0,   0.0]),
    ([  0,   1,   0,   2,   2], [      7.0,     0.0,     -3.0,   0.0]),
    ([ -2,   1,   1,   0,   0], [     -7.0,     0.0,      0.0,   0.0]),
    ([  0,  -1,   0,   2,   2], [     -7.0,     0.0,      3.0,   0.0]),
    ([  2,   0,   0,   2,   1], [     -7.0,     0.0,      3.0,   0.0]),
    ([  2,   0,   1,   0,   0], [      6.0,     0.0,      0.0,   0.0]),
    ([ -2,   0,   2,   2,   2], [      6.0,     0.0,     -3.0,   0.0]),
    ([ -2,   0,   1,   2,   1], [      6.0,     0.0,     -3.0,   0.0]),
    ([  2,   0,  -2,   0,   1], [     -6.0,     0.0,      3.0,   0.0]),
    ([  2,   0,   0,   0,   1], [     -6.0,     0.0,      3.0,   0.0]),
    ([  0,  -1,   1,   0,   0], [      5.0,     0.0,      0.0,   0.0]),
    ([ -2,  -1,   0,   2,   1], [     -5.0,     0.0,      3.0,   0.0]),
    ([ -2,   0,   0,   0,   1], [     -5.0,     0.0,      3.0,   0.0]),
    ([  0,   0,   2,   2,   1], [     -5.0,     0.0,      3.0,   0.0]),
    ([ -2,   0,   2,   0,   1], [      4.0,     0.0,      0.0,   0.0]),
    ([ -2,   1,   0,   2,   1], [      4.0,     0.0,      0.0,   0.0]),
    ([  0,   0,   1,  -2,   0], [      4.0,     0.0,      0.0,   0.0]),
    ([ -1,   0,   1,   0,   0], [     -4.0,     0.0,      0.0,   0.0]),
    ([ -2,   1,   0,   0,   0], [     -4.0,     0.0,      0.0,   0.0]),
    ([  1,   0,   0,   0,   0], [     -4.0,     0.0,      0.0,   0.0]),
    ([  0,   0,   1,   2,   0], [      3.0,     0.0,      0.0,   0.0]),
    ([  0,   0,  -2,   2,   2], [     -3.0,     0.0,      0.0,   0.0]),
    ([ -1,  -1,   1,   0,   0], [     -3.0,     0.0,      0.0,   0.0]),
    ([  0,   1,   1,   0,   0], [     -3.0,     0.0,      0.0,   0.0]),
    ([  0,  -1,   1,   2,   2], [     -3.0,     0.0,      0.0,   0.0]),
    ([  2,  -1,  -1,   2,   2], [     -3.0,     0.0,      0.0,   0.0]),
    ([  0,   0,   3,   2,   2], [     -3.0,     0.0,      0.0,   0.0]),
    ([  2,  -1,   0,   2,   2], [     -3.0,     0.0,      0.0,   0.0]),
];

/// 63-term nutation: returns `(Δψ, Δε)` in arcseconds.
pub fn nutation_meeus63(t: f64) -> (f64, f64) {
    let args = fundamental_arguments(t);

    let mut dpsi = 0.0;
    let mut deps = 0.0;

    for (mult, amp) in &MEEUS_TERMS {
        let arg_deg: f64 = mult
            .iter()
            .zip(args.iter())
            .map(|(&k, &a)| k as f64 * a)
            .sum();
        let (sin_arg, cos_arg) = arg_deg.to_radians().sin_cos();

        dpsi += (amp[0] + amp[1] * t) * sin_arg;
        deps += (amp[2] + amp[3] * t) * cos_arg;
    }

    // 0.0001″ to arcseconds
    (dpsi * 1e-4, deps * 1e-4)
}

/// Two-term nutation: returns `(Δψ, Δε)` in arcseconds.
///
/// Δψ = −17.20″ sin Ω − 1.32″ sin 2L − 0.23″ sin 2L′ + 0.21″ sin 2Ω
/// Δε =  +9.20″ cos Ω + 0.57″ cos 2L + 0.10″ cos 2L′ − 0.09″ cos 2Ω
///
/// where L and L′ are the mean longitudes of the Sun and the Moon.
pub fn nutation_two_term(t: f64) -> (f64, f64) {
    let om = moon_node_deg(t).to_radians();
    let l = (280.4665 + 36_000.7698 * t).to_radians();
    let lp = (218.3165 + 481_267.8813 * t).to_radians();

    let dpsi = -17.20 * om.sin() - 1.32 * (2.0 * l).sin() - 0.23 * (2.0 * lp).sin()
        + 0.21 * (2.0 * om).sin();
    let deps = 9.20 * om.cos() + 0.57 * (2.0 * l).cos() + 0.10 * (2.0 * lp).cos()
        - 0.09 * (2.0 * om).cos();

    (dpsi, deps)
}
