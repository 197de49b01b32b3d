//! Special fuel types: palmetto-gallberry and western aspen
//!
//! Both produce fuel loads from stand descriptors instead of a fuel model
//! catalog entry. Loads are returned in lb/ft².
//!
//! # References
//! - Hough, W.A., Albini, F.A. (1978). "Predicting fire behavior in palmetto-gallberry fuel complexes."
//!   USDA Forest Service Research Paper SE-174.
//! - Brown, J.K., Simmerman, D.G. (1986). "Appraising fuels and flammability in western aspen:
//!   a prescribed fire guide." USDA Forest Service GTR INT-205.

use crate::catalog::TONS_PER_ACRE;
use crate::fuel_bed::{AspenFuel, PalmettoLoads};

/// Dead fuel moisture of extinction for palmetto-gallberry
pub const PALMETTO_MEXT: f64 = 0.40;
/// Dead fuel moisture of extinction for aspen
pub const ASPEN_MEXT: f64 = 0.25;

/// Palmetto-gallberry fuel bed depth (ft) from understory height (ft)
pub fn palmetto_depth(height: f64) -> f64 {
    2.0 * height / 3.0
}

/// Hough and Albini (1978) palmetto-gallberry loads
///
/// # Arguments
/// * `age` - Age of rough (years)
/// * `cover` - Palmetto coverage (fraction)
/// * `height` - Understory height (ft)
/// * `basal_area` - Overstory basal area (ft²/ac)
pub fn palmetto_loads(age: f64, cover: f64, height: f64, basal_area: f64) -> PalmettoLoads {
    let pc = 100.0 * cover;
    let h2 = height * height;
    let ln_age = if age > 0.0 { age.ln() } else { 0.0 };
    PalmettoLoads {
        dead1: (-0.00121 + 0.00379 * ln_age + 0.00118 * h2).max(0.0),
        dead10: (-0.00775 + 0.00021 * pc + 0.00007 * age * age).max(0.0),
        dead_foliage: (0.00221 * age.max(0.0).powf(0.51263) * (0.02482 * pc).exp()).max(0.0),
        live1: (0.00546 + 0.00092 * age + 0.00212 * h2).max(0.0),
        live10: (-0.02128 + 0.00014 * age * age + 0.00314 * h2).max(0.0),
        live_foliage: (-0.0036 + 0.00253 * age + 0.00049 * pc + 0.00282 * h2).max(0.0),
        litter: ((0.03632 + 0.0005336 * basal_area) * (1.0 - 0.25_f64.powf(age))).max(0.0),
    }
}

/// Brown and Simmerman (1986) aspen fuel types, in item order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AspenType {
    AspenShrub,
    AspenTallForb,
    AspenLowForb,
    MixedForb,
    MixedShrub,
}

impl AspenType {
    pub fn from_index(index: usize) -> Option<Self> {
        Some(match index {
            0 => Self::AspenShrub,
            1 => Self::AspenTallForb,
            2 => Self::AspenLowForb,
            3 => Self::MixedForb,
            4 => Self::MixedShrub,
            _ => return None,
        })
    }

    fn row(self) -> usize {
        self as usize
    }

    /// Fuel bed depth (ft)
    pub fn depth(self) -> f64 {
        [0.65, 0.30, 0.18, 0.50, 0.18][self.row()]
    }
}

const CURING: [f64; 6] = [0.0, 0.3, 0.5, 0.7, 0.9, 1.0];

// Loads in tons per acre by curing level
const LOAD_DEAD1: [[f64; 6]; 5] = [
    [0.800, 0.893, 1.056, 1.218, 1.379, 1.4595],
    [0.738, 0.930, 1.056, 1.183, 1.309, 1.3720],
    [0.601, 0.645, 0.671, 0.699, 0.730, 0.7455],
    [0.880, 0.906, 1.037, 1.167, 1.300, 1.3665],
    [0.754, 0.797, 0.825, 0.854, 0.884, 0.8990],
];
const LOAD_DEAD10: [f64; 5] = [0.975, 0.475, 1.035, 1.340, 1.115];
const LOAD_LIVE_HERB: [[f64; 6]; 5] = [
    [0.335, 0.268, 0.198, 0.129, 0.063, 0.0],
    [0.665, 0.540, 0.398, 0.258, 0.127, 0.0],
    [0.387, 0.300, 0.213, 0.127, 0.040, 0.0],
    [0.457, 0.405, 0.339, 0.265, 0.185, 0.0],
    [0.650, 0.558, 0.447, 0.328, 0.202, 0.0],
];
const LOAD_LIVE_WOODY: [[f64; 6]; 5] = [
    [0.403, 0.403, 0.333, 0.283, 0.277, 0.274],
    [0.000, 0.000, 0.000, 0.000, 0.000, 0.000],
    [0.000, 0.000, 0.000, 0.000, 0.000, 0.000],
    [0.000, 0.000, 0.000, 0.000, 0.000, 0.000],
    [0.455, 0.455, 0.364, 0.290, 0.261, 0.2465],
];
const SAVR_DEAD1: [[f64; 6]; 5] = [
    [1440.0, 1620.0, 1910.0, 2090.0, 2220.0, 2285.0],
    [1480.0, 1890.0, 2050.0, 2160.0, 2240.0, 2280.0],
    [1400.0, 1540.0, 1620.0, 1690.0, 1750.0, 1780.0],
    [1350.0, 1420.0, 1710.0, 1910.0, 2060.0, 2135.0],
    [1420.0, 1540.0, 1610.0, 1670.0, 1720.0, 1745.0],
];
const SAVR_LIVE_WOODY: [[f64; 6]; 5] = [
    [2440.0, 2440.0, 2310.0, 2090.0, 1670.0, 1670.0],
    [2440.0, 2440.0, 2440.0, 2440.0, 2440.0, 2440.0],
    [2440.0, 2440.0, 2440.0, 2440.0, 2440.0, 2440.0],
    [2440.0, 2440.0, 2440.0, 2440.0, 2440.0, 2440.0],
    [2440.0, 2440.0, 2250.0, 2090.0, 1670.0, 1670.0],
];
const SAVR_DEAD10: f64 = 109.0;
const SAVR_LIVE_HERB: f64 = 2800.0;

/// Linear interpolation of a table row over the curing levels
fn interpolate(row: &[f64; 6], curing: f64) -> f64 {
    let c = curing.clamp(0.0, 1.0);
    for i in 1..CURING.len() {
        if c <= CURING[i] {
            let t = (c - CURING[i - 1]) / (CURING[i] - CURING[i - 1]);
            return row[i - 1] + t * (row[i] - row[i - 1]);
        }
    }
    row[CURING.len() - 1]
}

/// Aspen loads and SAVRs for a fuel type at the given curing level (fraction)
pub fn aspen_fuel(kind: AspenType, curing: f64) -> AspenFuel {
    let r = kind.row();
    AspenFuel {
        load_dead1: interpolate(&LOAD_DEAD1[r], curing) * TONS_PER_ACRE,
        load_dead10: LOAD_DEAD10[r] * TONS_PER_ACRE,
        load_live_herb: interpolate(&LOAD_LIVE_HERB[r], curing) * TONS_PER_ACRE,
        load_live_woody: interpolate(&LOAD_LIVE_WOODY[r], curing) * TONS_PER_ACRE,
        savr_dead1: interpolate(&SAVR_DEAD1[r], curing),
        savr_dead10: SAVR_DEAD10,
        savr_live_herb: SAVR_LIVE_HERB,
        savr_live_woody: interpolate(&SAVR_LIVE_WOODY[r], curing),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_palmetto_loads_are_non_negative() {
        let young = palmetto_loads(1.0, 0.1, 1.0, 0.0);
        assert!(young.dead1 >= 0.0 && young.dead10 >= 0.0 && young.live10 >= 0.0);
        assert_relative_eq!(young.litter, 0.03632 * 0.75, epsilon = 1e-12);
    }

    #[test]
    fn test_palmetto_rough_grows_with_age() {
        let young = palmetto_loads(2.0, 0.5, 3.0, 50.0);
        let old = palmetto_loads(15.0, 0.5, 3.0, 50.0);
        assert!(old.live_foliage > young.live_foliage);
        assert!(old.litter > young.litter);
        assert_relative_eq!(palmetto_depth(3.0), 2.0);
    }

    #[test]
    fn test_aspen_interpolation() {
        let a = aspen_fuel(AspenType::AspenShrub, 0.4);
        assert_relative_eq!(a.load_dead1, (0.893 + 1.056) / 2.0 * TONS_PER_ACRE, epsilon = 1e-12);
        assert_relative_eq!(a.savr_dead1, 1765.0, epsilon = 1e-9);
        let cured = aspen_fuel(AspenType::AspenTallForb, 1.0);
        assert_eq!(cured.load_live_herb, 0.0);
        assert_relative_eq!(aspen_fuel(AspenType::MixedShrub, 2.0).load_dead1, 0.899 * TONS_PER_ACRE);
        assert_eq!(AspenType::from_index(5), None);
        assert_relative_eq!(AspenType::AspenLowForb.depth(), 0.18);
    }
}
