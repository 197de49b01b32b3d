//! Wind speed reduction from open 20-ft wind to midflame height
//!
//! # References
//! - Albini, F.A., Baughman, R.G. (1979). "Estimating windspeeds for predicting wildland fire behavior."
//!   USDA Forest Service Research Paper INT-221.
//! - Turner, J.A., Lawson, B.D. (1978). "Weather in the Canadian Forest Fire Danger Rating System."
//!   Pacific Forest Research Centre BC-X-177 (10-m to 20-ft conversion).

use crate::SMIDGEN;

/// 10-m wind over 20-ft wind
pub const TEN_METER_RATIO: f64 = 1.15;

/// Canopy crown fill fraction below which the fuel is unsheltered
const SHELTER_THRESHOLD: f64 = 0.05;

/// How the wind adjustment factor was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WafMethod {
    Sheltered,
    Unsheltered,
}

impl WafMethod {
    /// Item index in the wind adjustment method list
    pub fn index(self) -> usize {
        match self {
            Self::Sheltered => 0,
            Self::Unsheltered => 1,
        }
    }
}

/// Wind adjustment factor and the canopy description behind it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindAdjustment {
    pub factor: f64,
    pub method: WafMethod,
    /// Fraction of the canopy volume filled with crowns
    pub crown_fill: f64,
}

/// 20-ft wind from a 10-m wind
pub fn wind_at_20ft(wind_10m: f64) -> f64 {
    wind_10m / TEN_METER_RATIO
}

/// Albini and Baughman (1979) wind adjustment factor
///
/// # Formula
/// ```text
/// f = cover × crown ratio / 3
/// unsheltered (f < 0.05):  WAF = 1.83 / ln((20 + 0.36 δ) / (0.13 δ))
/// sheltered:               WAF = 0.555 / (sqrt(f H) × ln((20 + 0.36 H) / (0.13 H)))
/// ```
/// δ is the fuel bed depth and H the canopy height (ft).
///
/// # Arguments
/// * `canopy_cover` - Canopy cover (fraction)
/// * `canopy_ht` - Canopy height (ft)
/// * `crown_ratio` - Crown ratio (fraction)
/// * `fuel_depth` - Fuel bed depth (ft)
pub fn wind_adjustment_factor(
    canopy_cover: f64,
    canopy_ht: f64,
    crown_ratio: f64,
    fuel_depth: f64,
) -> WindAdjustment {
    let crown_fill = canopy_cover * crown_ratio / 3.0;

    if crown_fill < SHELTER_THRESHOLD || canopy_ht < SMIDGEN {
        let factor = if fuel_depth < SMIDGEN {
            1.0
        } else {
            1.83 / ((20.0 + 0.36 * fuel_depth) / (0.13 * fuel_depth)).ln()
        };
        return WindAdjustment {
            factor,
            method: WafMethod::Unsheltered,
            crown_fill,
        };
    }

    let h = canopy_ht;
    WindAdjustment {
        factor: 0.555 / ((crown_fill * h).sqrt() * ((20.0 + 0.36 * h) / (0.13 * h)).ln()),
        method: WafMethod::Sheltered,
        crown_fill,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ten_meter_conversion() {
        assert_relative_eq!(wind_at_20ft(11.5), 10.0);
    }

    #[test]
    fn test_unsheltered_grass() {
        // 1-ft grass bed gives the familiar 0.36
        let waf = wind_adjustment_factor(0.0, 0.0, 0.0, 1.0);
        assert_eq!(waf.method, WafMethod::Unsheltered);
        assert_relative_eq!(waf.factor, 0.36, epsilon = 0.01);
        assert_eq!(wind_adjustment_factor(0.0, 0.0, 0.0, 0.0).factor, 1.0);
    }

    #[test]
    fn test_sheltered_canopy() {
        let waf = wind_adjustment_factor(0.5, 60.0, 0.6, 1.0);
        assert_eq!(waf.method, WafMethod::Sheltered);
        assert_relative_eq!(waf.crown_fill, 0.1);
        assert!(waf.factor > 0.05 && waf.factor < 0.2, "waf {}", waf.factor);
        assert_eq!(waf.method.index(), 0);
    }
}
