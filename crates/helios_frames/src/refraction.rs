//! Atmospheric refraction near the horizon (Meeus ch. 16).
//!
//! Saemundsson's formula maps a true (geometric) altitude to the refraction
//! in arcminutes; Bennett's formula goes the other way. Both are scaled for
//! pressure and temperature. Below [`REFRACTION_FLOOR_DEG`] the formulas
//! diverge and the correction is taken as zero.

/// Altitudes below this get no refraction correction.
pub const REFRACTION_FLOOR_DEG: f64 = -5.0;

/// Bennett's formula has a pole at −4.4°; apparent altitudes below this
/// are returned unchanged.
const BENNETT_FLOOR_DEG: f64 = -4.0;

/// Atmospheric state at the observer.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AtmosphericConditions {
    /// Surface pressure in millibars.
    pub pressure_mbar: f64,
    /// Surface temperature in degrees Celsius.
    pub temperature_c: f64,
}

impl Default for AtmosphericConditions {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl AtmosphericConditions {
    /// 1010 mbar and 10 °C, for which the formulas were tabulated.
    pub const STANDARD: Self = Self {
        pressure_mbar: 1010.0,
        temperature_c: 10.0,
    };

    pub fn new(pressure_mbar: f64, temperature_c: f64) -> Self {
        Self {
            pressure_mbar,
            temperature_c,
        }
    }

    /// Multiplier applied to the standard refraction: `P/1010 · 283/(273 + T)`.
    pub fn scale_factor(&self) -> f64 {
        (self.pressure_mbar / 1010.0) * (283.0 / (273.0 + self.temperature_c))
    }
}

/// Refraction applied to a true altitude.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Refraction {
    /// Refraction in arcminutes (0 below the floor).
    pub refraction_arcmin: f64,
    /// `h + R/60`, degrees.
    pub apparent_altitude_deg: f64,
}

impl Refraction {
    /// Saemundsson: `R = 1.02 / tan(h + 10.3/(h + 5.11))`, `h` in degrees.
    pub fn from_true_altitude(true_altitude_deg: f64, conditions: &AtmosphericConditions) -> Self {
        let refraction_arcmin = refraction_arcmin(true_altitude_deg, conditions);
        Self {
            refraction_arcmin,
            apparent_altitude_deg: true_altitude_deg + refraction_arcmin / 60.0,
        }
    }
}

/// Refraction in arcminutes for a true altitude in degrees.
pub fn refraction_arcmin(true_altitude_deg: f64, conditions: &AtmosphericConditions) -> f64 {
    let h = true_altitude_deg;
    if h < REFRACTION_FLOOR_DEG {
        return 0.0;
    }
    let r = 1.02 / (h + 10.3 / (h + 5.11)).to_radians().tan();
    r * conditions.scale_factor()
}

/// Bennett: true altitude in degrees from an apparent altitude in degrees.
///
/// `R = 1 / tan(h0 + 7.31/(h0 + 4.4))` arcminutes; accurate to about 0.07′
/// for apparent altitudes between 0° and 90°.
pub fn true_altitude_from_apparent(
    apparent_altitude_deg: f64,
    conditions: &AtmosphericConditions,
) -> f64 {
    let h0 = apparent_altitude_deg;
    if h0 < BENNETT_FLOOR_DEG {
        return h0;
    }
    let r = 1.0 / (h0 + 7.31 / (h0 + 4.4)).to_radians().tan() * conditions.scale_factor();
    h0 - r / 60.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeus_16_saemundsson() {
        // Venus at 0.5541° true altitude.
        let r = Refraction::from_true_altitude(0.5541, &AtmosphericConditions::default());
        assert!((r.refraction_arcmin - 24.618).abs() < 0.001, "R = {}", r.refraction_arcmin);
        assert!(
            (r.apparent_altitude_deg - 57.864 / 60.0).abs() < 0.001,
            "h0 = {}",
            r.apparent_altitude_deg
        );
    }

    #[test]
    fn standard_scale_is_one() {
        assert!((AtmosphericConditions::STANDARD.scale_factor() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn zenith_is_nearly_unrefracted() {
        let r = refraction_arcmin(90.0, &AtmosphericConditions::default());
        assert!(r.abs() < 0.01, "R = {r}");
    }

    #[test]
    fn floor_disables_correction() {
        let r = Refraction::from_true_altitude(-10.0, &AtmosphericConditions::default());
        assert_eq!(r.refraction_arcmin, 0.0);
        assert_eq!(r.apparent_altitude_deg, -10.0);
        assert_eq!(true_altitude_from_apparent(-10.0, &AtmosphericConditions::default()), -10.0);
    }

    #[test]
    fn finite_from_floor_to_zenith() {
        let cond = AtmosphericConditions::default();
        let mut h = REFRACTION_FLOOR_DEG;
        while h <= 90.0 {
            let r = refraction_arcmin(h, &cond);
            assert!(r.is_finite() && r > -0.01, "R({h}) = {r}");
            h += 0.25;
        }
    }

    #[test]
    fn thin_cold_air_scales() {
        let thin = AtmosphericConditions::new(505.0, 10.0);
        let std_r = refraction_arcmin(5.0, &AtmosphericConditions::STANDARD);
        let thin_r = refraction_arcmin(5.0, &thin);
        assert!((thin_r - std_r / 2.0).abs() < 1e-12);

        let cold = AtmosphericConditions::new(1010.0, -20.0);
        assert!(refraction_arcmin(5.0, &cold) > std_r);
    }

    #[test]
    fn bennett_inverts_saemundsson() {
        let cond = AtmosphericConditions::default();
        for h in [0.0_f64, 1.0, 5.0, 15.0, 30.0, 60.0] {
            let apparent = Refraction::from_true_altitude(h, &cond).apparent_altitude_deg;
            let back = true_altitude_from_apparent(apparent, &cond);
            // The two fits disagree by a fraction of an arcminute at the horizon.
            assert!((back - h).abs() < 0.3 / 60.0, "h={h} back={back}");
        }
    }
}
