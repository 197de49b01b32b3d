//! Crown Fire Initiation and Spread
//!
//! Van Wagner's initiation and active-spread criteria, Rothermel's (1991)
//! crown spread rate and power ratio, and Scott and Reinhardt's fire type
//! classification. Inputs and outputs are in native English units; the
//! metric criteria are converted internally.
//!
//! # Scientific References
//! - Van Wagner, C.E. (1977). "Conditions for the start and spread of crown fire"
//!   Canadian Journal of Forest Research, 7(1), 23-34
//! - Rothermel, R.C. (1991). "Predicting behavior and size of crown fires in the Northern Rocky Mountains."
//!   USDA Forest Service Research Paper INT-438.
//! - Scott, J.H., Reinhardt, E.D. (2001). "Assessing crown fire potential by linking models of surface
//!   and crown fire behavior." USDA Forest Service Research Paper RMRS-RP-29.
//! - Thomas, P.H. (1963). "The size of flames from natural fires." 9th Symposium on Combustion.

use crate::fuel_bed::StandardFuel;
use crate::physics::rothermel;
use crate::SMIDGEN;

/// kW/m per Btu/ft/s
const KW_PER_M_PER_BTU_FT_S: f64 = 3.46165;
/// kg/m³ per lb/ft³
const KG_M3_PER_LB_FT3: f64 = 16.0185;
/// Canopy fuel heat of combustion (Btu/lb)
pub const CANOPY_HEAT: f64 = 8000.0;

/// Crown fire type (Scott and Reinhardt 2001)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrownFireType {
    /// No crown involvement
    Surface,
    /// Passive crown fire, individual trees torch
    Torching,
    /// Active crown fire could be sustained but is not initiated
    ConditionalCrown,
    /// Active crown fire
    Crowning,
}

impl CrownFireType {
    /// Item index in the crown fire type list
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Critical surface fireline intensity for crown initiation (Btu/ft/s)
///
/// Van Wagner (1977):
/// ```text
/// I_0 = (0.010 × CBH × (460 + 25.9 × FMC))^1.5     [kW/m, CBH in m, FMC in %]
/// ```
///
/// # Arguments
/// * `foliar_mois` - Foliar moisture content (fraction)
/// * `base_ht` - Crown base height (ft)
pub fn critical_surface_intensity(foliar_mois: f64, base_ht: f64) -> f64 {
    let cbh_m = (base_ht * 0.3048).max(0.0);
    let fmc = 100.0 * foliar_mois;
    (0.010 * cbh_m * (460.0 + 25.9 * fmc)).powf(1.5) / KW_PER_M_PER_BTU_FT_S
}

/// Surface flame length at the critical intensity (ft)
pub fn critical_surface_flame_length(critical_fli: f64) -> f64 {
    rothermel::flame_length(critical_fli)
}

/// Critical active crown spread rate R'_active = 3 / CBD (ft/min)
///
/// # Arguments
/// * `bulk_density` - Canopy bulk density (lb/ft³)
pub fn critical_crown_spread_rate(bulk_density: f64) -> f64 {
    let cbd = bulk_density * KG_M3_PER_LB_FT3;
    if cbd < SMIDGEN {
        0.0
    } else {
        3.0 / cbd / 0.3048
    }
}

/// Ratio of actual to critical value; 0 when the critical value vanishes
pub fn ratio(actual: f64, critical: f64) -> f64 {
    if critical < SMIDGEN {
        0.0
    } else {
        actual / critical
    }
}

/// Classifies the fire from its transition and active ratios
pub fn fire_type(transition_ratio: f64, active_ratio: f64) -> CrownFireType {
    match (transition_ratio >= 1.0, active_ratio >= 1.0) {
        (false, false) => CrownFireType::Surface,
        (false, true) => CrownFireType::ConditionalCrown,
        (true, false) => CrownFireType::Torching,
        (true, true) => CrownFireType::Crowning,
    }
}

/// Active crown fire spread rate (ft/min)
///
/// Rothermel (1991): 3.34 times the surface spread rate in fuel model 10 with
/// a 0.4 wind reduction applied to the 20-ft wind, on flat ground.
///
/// # Arguments
/// * `wind20` - 20-ft wind speed (mi/h)
/// * `mois1`, `mois10`, `mois100` - Dead fuel moistures (fraction)
/// * `mois_wood` - Live woody moisture (fraction)
pub fn crown_spread_rate(wind20: f64, mois1: f64, mois10: f64, mois100: f64, mois_wood: f64) -> f64 {
    const TONS: f64 = crate::catalog::TONS_PER_ACRE;
    let model10 = StandardFuel {
        load1: 3.01 * TONS,
        load10: 2.00 * TONS,
        load100: 5.01 * TONS,
        load_herb: 0.0,
        load_wood: 2.00 * TONS,
        savr1: 2000.0,
        savr_herb: 1500.0,
        savr_wood: 1500.0,
        heat_dead: 8000.0,
        heat_live: 8000.0,
    };
    let mut particles = model10.particles();
    for (p, mois) in particles
        .iter_mut()
        .zip([mois1, mois10, mois100, mois_wood, mois_wood, mois1])
    {
        p.mois = mois;
    }

    let bed = rothermel::bed_intermediates(&particles, 1.0);
    let sink = rothermel::heat_sink(&particles, bed.bulk_density, 0.25);
    let rx = rothermel::reaction_intensity(&bed, sink.dead_mois, 0.25, sink.live_mois, sink.live_mext);
    let flux = rothermel::propagating_flux(bed.packing_ratio, bed.sigma);
    let ros0 = rothermel::no_wind_rate(rx.total, flux, sink.rb_qig);
    let head = rothermel::forward_spread(&bed, ros0, rx.total, 0.0, 0.4 * wind20, 0.0, false);
    3.34 * head.ros_max
}

/// Canopy fuel load CBD × (canopy height - base height) (lb/ft²)
pub fn canopy_fuel_load(bulk_density: f64, canopy_ht: f64, base_ht: f64) -> f64 {
    bulk_density * (canopy_ht - base_ht).max(0.0)
}

/// Crown fireline intensity from heat per unit area and spread rate (Btu/ft/s)
pub fn crown_fireline_intensity(hpua: f64, ros: f64) -> f64 {
    hpua * ros / 60.0
}

/// Thomas (1963) flame length L = 0.2 × I^(2/3) (ft)
pub fn crown_flame_length(fli: f64) -> f64 {
    if fli < SMIDGEN {
        0.0
    } else {
        0.2 * fli.powf(2.0 / 3.0)
    }
}

/// Power of the fire P_f = I / 129 (ft-lb/s/ft²)
pub fn power_of_fire(fli: f64) -> f64 {
    fli / 129.0
}

/// Power of the wind (ft-lb/s/ft²)
///
/// # Formula
/// ```text
/// P_w = ρ × (U - R)³ / (2 g),   ρ = 0.0749 lb/ft³, g = 32.2 ft/s², speeds in ft/s
/// ```
/// Zero when the fire outruns the wind.
///
/// # Arguments
/// * `wind_fpm` - 20-ft wind speed (ft/min)
/// * `ros` - Crown spread rate (ft/min)
pub fn power_of_wind(wind_fpm: f64, ros: f64) -> f64 {
    let excess = (wind_fpm - ros) / 60.0;
    if excess <= 0.0 {
        0.0
    } else {
        0.0749 * excess.powi(3) / 64.4
    }
}

/// Crown fire length-to-width ratio 1 + 0.125 × U_20 (mi/h)
pub fn crown_length_to_width(wind20: f64) -> f64 {
    1.0 + 0.125 * wind20.max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_critical_intensity_grows_with_base_height() {
        let low = critical_surface_intensity(1.0, 5.0);
        let high = critical_surface_intensity(1.0, 20.0);
        assert!(high > low);
        // 8 m base height at 100% foliar moisture gives about 3070 kW/m
        let i0 = critical_surface_intensity(1.0, 8.0 / 0.3048) * KW_PER_M_PER_BTU_FT_S;
        assert_relative_eq!(i0, 3070.0, max_relative = 0.01);
    }

    #[test]
    fn test_critical_crown_spread_rate() {
        // 0.15 kg/m³ needs 20 m/min
        let r = critical_crown_spread_rate(0.15 / KG_M3_PER_LB_FT3) * 0.3048;
        assert_relative_eq!(r, 20.0, epsilon = 1e-9);
        assert_eq!(critical_crown_spread_rate(0.0), 0.0);
    }

    #[test]
    fn test_fire_type_matrix() {
        assert_eq!(fire_type(0.5, 0.5), CrownFireType::Surface);
        assert_eq!(fire_type(1.5, 0.5), CrownFireType::Torching);
        assert_eq!(fire_type(0.5, 1.5), CrownFireType::ConditionalCrown);
        assert_eq!(fire_type(1.5, 1.5), CrownFireType::Crowning);
        assert_eq!(CrownFireType::Crowning.index(), 3);
    }

    #[test]
    fn test_crown_spread_responds_to_wind() {
        let calm = crown_spread_rate(0.0, 0.06, 0.07, 0.08, 1.0);
        let windy = crown_spread_rate(20.0, 0.06, 0.07, 0.08, 1.0);
        assert!(calm > 0.0);
        assert!(windy > 3.0 * calm);
    }

    #[test]
    fn test_power_of_wind_zero_when_fire_outruns_wind() {
        assert_eq!(power_of_wind(100.0, 200.0), 0.0);
        assert!(power_of_wind(2000.0, 100.0) > 0.0);
        assert_relative_eq!(crown_length_to_width(8.0), 2.0);
    }
}
