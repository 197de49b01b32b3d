//! Tree crown scorch, bark thickness and post-fire mortality
//!
//! # References
//! - Van Wagner, C.E. (1973). "Height of crown scorch in forest fires."
//!   Canadian Journal of Forest Research, 3, 373-378.
//! - Ryan, K.C., Reinhardt, E.D. (1988). "Predicting postfire mortality of seven western conifers."
//!   Canadian Journal of Forest Research, 18, 1291-1297.
//! - Reinhardt, E.D., Keane, R.E., Brown, J.K. (1997). "First Order Fire Effects Model: FOFEM 4.0."
//!   USDA Forest Service GTR INT-344.
//! - Hood, S.M., McHugh, C.W., Ryan, K.C., Reinhardt, E., Smith, S.L. (2007). "Evaluation of a
//!   post-fire tree mortality model for western USA conifers." Int. J. Wildland Fire, 16, 679-689.
//! - Brown, J.K., DeByle, N.V. (1987). "Fire damage, mortality, and suckering in aspen."
//!   Canadian Journal of Forest Research, 17, 1100-1109.

use crate::error::{EqError, Result};
use crate::SMIDGEN;

/// FOFEM single-bark-thickness coefficients in mortality species order
const BARK_COEFFICIENTS: [f64; 19] = [
    0.047, 0.048, 0.046, 0.041, 0.045, 0.060, 0.025, 0.063, 0.030, 0.028, 0.036, 0.068, 0.072,
    0.035, 0.063, 0.063, 0.035, 0.040, 0.040,
];

/// Index of Engelmann spruce in the mortality species list
const SPRUCE: usize = 10;

/// Scorch height (ft)
///
/// Van Wagner (1973), with temperature in °F and midflame wind in mi/h:
/// ```text
/// h_s = 63 / (140 - T) × I^(7/6) / sqrt(I + U³)
/// ```
pub fn scorch_height(fli: f64, wind_mph: f64, air_temp: f64) -> f64 {
    if fli < SMIDGEN {
        return 0.0;
    }
    let denom = (140.0 - air_temp).max(SMIDGEN);
    63.0 / denom * fli.powf(7.0 / 6.0) / (fli + wind_mph.powi(3)).sqrt()
}

/// Bark thickness (in) from diameter at breast height (in)
pub fn bark_thickness(species: usize, dbh: f64) -> Result<f64> {
    let coef = BARK_COEFFICIENTS.get(species).ok_or(EqError::SpeciesOutOfRange {
        table: "bark thickness",
        index: species,
        count: BARK_COEFFICIENTS.len(),
    })?;
    Ok(coef * dbh.max(1.0))
}

/// Crown ratio (crown length over tree height) from cover and base heights
pub fn crown_ratio(base_ht: f64, cover_ht: f64) -> f64 {
    if cover_ht < SMIDGEN {
        0.0
    } else {
        (cover_ht - base_ht) / cover_ht
    }
}

/// Crown base height from the crown ratio
pub fn crown_base_height(crown_ratio: f64, tree_ht: f64) -> f64 {
    tree_ht * (1.0 - crown_ratio)
}

/// Length, length fraction and volume fraction of crown scorched
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CrownScorch {
    pub length: f64,
    pub length_fraction: f64,
    pub volume_fraction: f64,
}

/// Crown scorch geometry treating the crown as a paraboloid
///
/// # Formula
/// ```text
/// L   = H × CR
/// L_s = clamp(h_s - (H - L), 0, L)
/// V_s = L_s (2L - L_s) / L²
/// ```
pub fn crown_scorch(tree_ht: f64, crown_ratio: f64, scorch_ht: f64) -> CrownScorch {
    let length = tree_ht * crown_ratio;
    if length < SMIDGEN {
        return CrownScorch::default();
    }
    let base = tree_ht - length;
    let scorched = (scorch_ht - base).clamp(0.0, length);
    CrownScorch {
        length: scorched,
        length_fraction: scorched / length,
        volume_fraction: scorched * (2.0 * length - scorched) / (length * length),
    }
}

/// Ryan and Reinhardt (1988) mortality probability
///
/// ```text
/// P_m = 1 / (1 + exp(-1.941 + 6.316 (1 - exp(-BT)) - 0.000535 CVS²))
/// ```
/// CVS in percent, bark thickness in inches. Spruce never drops below 0.8.
pub fn mortality_ryan_reinhardt(bark: f64, crown_vol_scorched: f64, spruce: bool) -> f64 {
    let cvs = 100.0 * crown_vol_scorched;
    let x = -1.941 + 6.316 * (1.0 - (-bark).exp()) - 0.000535 * cvs * cvs;
    let pm = 1.0 / (1.0 + x.exp());
    if spruce {
        pm.max(0.8)
    } else {
        pm
    }
}

/// FOFEM mortality for a species from the mortality species list
pub fn mortality_fofem(species: usize, bark: f64, crown_vol_scorched: f64) -> f64 {
    mortality_ryan_reinhardt(bark, crown_vol_scorched, species == SPRUCE)
}

fn logistic(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Hood et al. (2007) species-specific mortality
///
/// Species without their own equation fall back to FOFEM.
///
/// # Arguments
/// * `species` - Index into the mortality species list
/// * `dbh` - Diameter at breast height (in)
/// * `crown_len_scorched` - Crown length fraction scorched
/// * `crown_vol_scorched` - Crown volume fraction scorched
/// * `bark` - Bark thickness (in)
pub fn mortality_hood(
    species: usize,
    dbh: f64,
    crown_len_scorched: f64,
    crown_vol_scorched: f64,
    bark: f64,
) -> f64 {
    let cls = 100.0 * crown_len_scorched;
    let cvs = 100.0 * crown_vol_scorched;
    let x = match species {
        // ABCO
        1 => -3.5083 + 0.0956 * cls - 0.00184 * cls.powi(2) + 0.000017 * cls.powi(3),
        // ABGR, ABLA
        2 | 3 => -1.6950 + 0.2071 * cvs - 0.0047 * cvs.powi(2) + 0.000035 * cvs.powi(3),
        // ABMA
        4 => -2.3085 + 0.000004059 * cls.powi(3),
        // CADE27
        5 => -4.2466 + 0.000007172 * cls.powi(3),
        // LAOC
        7 => -1.6594 + 0.0327 * cvs,
        // PIAL, PICO
        8 | 9 => {
            let dbh_cm = 2.54 * dbh;
            -0.3268 + 0.1387 * cls - 0.0033 * cls.powi(2) + 0.000025 * cls.powi(3) - 0.0266 * dbh_cm
        }
        // PIEN
        10 => 0.0845 + 0.0445 * cvs,
        // PILA
        12 => -2.0588 + 0.000814 * cls.powi(2),
        // PIJE, PIPO
        11 | 14 => -2.7103 + 0.000004093 * cvs.powi(3),
        // PSME
        15 => -2.0346 + 0.0906 * cvs - 0.0022 * cvs.powi(2) + 0.000019 * cvs.powi(3),
        _ => return mortality_fofem(species, bark, crown_vol_scorched),
    };
    logistic(x)
}

/// Aspen fire severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AspenSeverity {
    Low,
    ModerateOrHigh,
}

/// Brown and DeByle (1987) aspen mortality
///
/// # Arguments
/// * `dbh` - Diameter at breast height (in)
/// * `flame_length` - Flame length (ft)
pub fn mortality_aspen(dbh: f64, flame_length: f64, severity: AspenSeverity) -> f64 {
    let x = match severity {
        AspenSeverity::Low => -4.407 + 0.638 * dbh - 2.134 * flame_length,
        AspenSeverity::ModerateOrHigh => -2.157 + 0.218 * dbh - 3.600 * flame_length,
    };
    1.0 / (1.0 + x.exp())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_scorch_height() {
        // 100 Btu/ft/s, calm, 77 °F: 63/63 × 100^(7/6) / 10
        assert_relative_eq!(scorch_height(100.0, 0.0, 77.0), 100.0_f64.powf(7.0 / 6.0) / 10.0, epsilon = 1e-9);
        assert!(scorch_height(100.0, 10.0, 77.0) < scorch_height(100.0, 0.0, 77.0));
        assert_eq!(scorch_height(0.0, 5.0, 77.0), 0.0);
    }

    #[test]
    fn test_bark_thickness() {
        assert_relative_eq!(bark_thickness(14, 20.0).unwrap(), 1.26, epsilon = 1e-12);
        // dbh below one inch is treated as one inch
        assert_relative_eq!(bark_thickness(0, 0.2).unwrap(), 0.047);
        assert!(bark_thickness(19, 10.0).is_err());
    }

    #[test]
    fn test_crown_geometry() {
        assert_relative_eq!(crown_ratio(20.0, 80.0), 0.75);
        assert_eq!(crown_ratio(20.0, 0.0), 0.0);
        assert_relative_eq!(crown_base_height(0.75, 80.0), 20.0);

        let s = crown_scorch(80.0, 0.5, 60.0);
        assert_relative_eq!(s.length, 20.0);
        assert_relative_eq!(s.length_fraction, 0.5);
        assert_relative_eq!(s.volume_fraction, 0.75);

        let full = crown_scorch(80.0, 0.5, 200.0);
        assert_relative_eq!(full.volume_fraction, 1.0);
        assert_eq!(crown_scorch(80.0, 0.5, 10.0).volume_fraction, 0.0);
    }

    #[test]
    fn test_fofem_mortality_falls_with_bark() {
        let thin = mortality_fofem(14, 0.2, 0.5);
        let thick = mortality_fofem(14, 2.0, 0.5);
        assert!(thin > thick);
        assert!(mortality_fofem(SPRUCE, 2.0, 0.0) >= 0.8);
    }

    #[test]
    fn test_hood_mortality_and_fallback() {
        let low = mortality_hood(15, 20.0, 0.1, 0.1, 1.0);
        let high = mortality_hood(15, 20.0, 0.9, 0.9, 1.0);
        assert!(high > low);
        // THPL has no dedicated equation
        assert_relative_eq!(mortality_hood(16, 20.0, 0.5, 0.5, 1.0), mortality_fofem(16, 1.0, 0.5));
    }

    #[test]
    fn test_aspen_mortality() {
        let low = mortality_aspen(6.0, 1.0, AspenSeverity::Low);
        let high = mortality_aspen(6.0, 1.0, AspenSeverity::ModerateOrHigh);
        assert!(low > 0.0 && low < 1.0);
        assert!(high > low);
        assert!(mortality_aspen(6.0, 4.0, AspenSeverity::Low) > low);
    }
}
