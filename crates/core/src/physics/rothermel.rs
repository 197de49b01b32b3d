//! Rothermel Surface Fire Spread Model (1972)
//!
//! Multi-particle fuel bed formulation with Albini's (1976) wind and slope
//! vectoring. All quantities are in native English units: ft, lb, Btu, min,
//! and mi/h for wind speeds at the node boundary.
//!
//! # References
//! - Rothermel, R.C. (1972). "A mathematical model for predicting fire spread in wildland fuels."
//!   USDA Forest Service Research Paper INT-115.
//! - Albini, F.A. (1976). "Estimating wildfire behavior and effects."
//!   USDA Forest Service General Technical Report INT-30.
//! - Andrews, P.L. (2018). "The Rothermel surface fire spread model and associated developments."
//!   USDA Forest Service General Technical Report RMRS-GTR-371.

use crate::fuel_bed::{FuelBedState, FuelParticle, LifeTotals, ParticleKind};
use crate::SMIDGEN;

/// Feet per minute in one mile per hour
pub const FPM_PER_MPH: f64 = 88.0;

/// Surface-area weights of each particle within its life category,
/// and of each category within the bed
fn area_weights(particles: &[FuelParticle]) -> (Vec<f64>, [f64; 2]) {
    let mut life_area = [0.0; 2];
    for p in particles {
        life_area[p.life.category()] += p.surface_area();
    }
    let total = life_area[0] + life_area[1];

    let within = particles
        .iter()
        .map(|p| {
            let a = life_area[p.life.category()];
            if a > SMIDGEN {
                p.surface_area() / a
            } else {
                0.0
            }
        })
        .collect();

    let fractions = if total > SMIDGEN {
        [life_area[0] / total, life_area[1] / total]
    } else {
        [0.0; 2]
    };
    (within, fractions)
}

/// Fraction of the live herbaceous load that has cured
///
/// # Formula
/// ```text
/// f = 1.333 - 1.11 × M_herb,  clamped to [0, 1]
/// ```
/// Fully cured at 30% moisture, fully green at 120%.
pub fn cured_herb_fraction(herb_mois: f64) -> f64 {
    (1.333 - 1.11 * herb_mois).clamp(0.0, 1.0)
}

/// Moves `fraction` of the live herb load onto the dead herb particle
///
/// Returns the transferred load (lb/ft²). Beds without both particles are
/// left untouched.
pub fn transfer_herb_load(particles: &mut [FuelParticle], fraction: f64) -> f64 {
    let live = particles.iter().position(|p| p.kind == ParticleKind::LiveHerb);
    let dead = particles.iter().position(|p| p.kind == ParticleKind::DeadHerb);
    let (Some(live), Some(dead)) = (live, dead) else {
        return 0.0;
    };
    let moved = fraction * particles[live].load;
    particles[live].load -= moved;
    particles[dead].load = moved;
    moved
}

/// Computes the bed geometry, optimum reaction velocity and wind/slope coefficients
///
/// # Formula
/// ```text
/// σ    = Σ_life f_life × Σ_i f_i × σ_i
/// ρ_b  = Σ w_i / δ
/// β    = Σ (w_i / ρ_p,i) / δ
/// β_op = 3.348 × σ^-0.8189
/// Γ'   = Γ'_max × (β/β_op)^A × exp(A × (1 - β/β_op))
/// Γ'_max = σ^1.5 / (495 + 0.0594 × σ^1.5),   A = 133 × σ^-0.7913
/// ```
///
/// # Arguments
/// * `particles` - Fuel particles with their current loads
/// * `depth` - Fuel bed depth (ft)
pub fn bed_intermediates(particles: &[FuelParticle], depth: f64) -> FuelBedState {
    let (within, fractions) = area_weights(particles);
    let mut bed = FuelBedState::default();
    if depth < SMIDGEN {
        return bed;
    }

    let mut total_load = 0.0;
    let mut volume = 0.0;
    let mut life = [LifeTotals::default(); 2];
    for (p, &f) in particles.iter().zip(&within) {
        let c = p.life.category();
        total_load += p.load;
        if p.dens > 0.0 {
            volume += p.load / p.dens;
        }
        bed.sigma += fractions[c] * f * p.savr;
        life[c].net_load += f * p.load * (1.0 - p.stot);
        life[c].heat += f * p.heat;
        life[c].seff += f * p.seff;
    }
    life[0].area_fraction = fractions[0];
    life[1].area_fraction = fractions[1];
    bed.life = life;

    bed.bulk_density = total_load / depth;
    bed.packing_ratio = volume / depth;
    if bed.sigma < SMIDGEN {
        return bed;
    }

    let sigma = bed.sigma;
    let beta_opt = 3.348 * sigma.powf(-0.8189);
    bed.beta_ratio = bed.packing_ratio / beta_opt;

    let sigma15 = sigma.powf(1.5);
    let gamma_max = sigma15 / (495.0 + 0.0594 * sigma15);
    let a = 133.0 * sigma.powf(-0.7913);
    let ratio = bed.beta_ratio;
    bed.gamma = if ratio > SMIDGEN {
        gamma_max * ratio.powf(a) * (a * (1.0 - ratio)).exp()
    } else {
        0.0
    };

    bed.wind_c = 7.47 * (-0.133 * sigma.powf(0.55)).exp();
    bed.wind_b = 0.02526 * sigma.powf(0.54);
    bed.wind_e = 0.715 * (-0.000359 * sigma).exp();
    bed.slope_k = if bed.packing_ratio > SMIDGEN {
        5.275 * bed.packing_ratio.powf(-0.3)
    } else {
        0.0
    };
    bed
}

/// Bed heat sink and category moistures
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HeatSink {
    /// Area-weighted dead moisture (fraction)
    pub dead_mois: f64,
    /// Area-weighted live moisture (fraction)
    pub live_mois: f64,
    /// Live moisture of extinction (fraction)
    pub live_mext: f64,
    /// ρ_b × ε × Q_ig (Btu/ft³)
    pub rb_qig: f64,
}

/// Heat required to bring the bed to ignition
///
/// # Formula
/// ```text
/// Q_ig,i = 250 + 1116 × M_i
/// ρ_b ε Q_ig = ρ_b × Σ_life f_life × Σ_i f_i × exp(-138 / σ_i) × Q_ig,i
/// M_x,live = 2.9 × (W_dead / W_live) × (1 - M_fine,dead / M_x,dead) - 0.226
/// ```
/// The live extinction moisture is never below the dead extinction moisture.
pub fn heat_sink(particles: &[FuelParticle], bulk_density: f64, mext_dead: f64) -> HeatSink {
    let (within, fractions) = area_weights(particles);
    let mut mois = [0.0; 2];
    let mut qig = [0.0; 2];
    let mut fine_dead = 0.0;
    let mut fine_live = 0.0;
    let mut fine_dead_water = 0.0;

    for (p, &f) in particles.iter().zip(&within) {
        let c = p.life.category();
        mois[c] += f * p.mois;
        if p.savr > SMIDGEN {
            qig[c] += f * (-138.0 / p.savr).exp() * (250.0 + 1116.0 * p.mois);
        }
        if p.life.is_dead() {
            if p.savr > SMIDGEN {
                let w = p.load * (-138.0 / p.savr).exp();
                fine_dead += w;
                fine_dead_water += w * p.mois;
            }
        } else if p.savr > SMIDGEN {
            fine_live += p.load * (-500.0 / p.savr).exp();
        }
    }

    let live_mext = if fine_live > SMIDGEN && fine_dead > SMIDGEN && mext_dead > SMIDGEN {
        let fine_mois = fine_dead_water / fine_dead;
        let mx = 2.9 * (fine_dead / fine_live) * (1.0 - fine_mois / mext_dead) - 0.226;
        mx.max(mext_dead)
    } else {
        mext_dead
    };

    HeatSink {
        dead_mois: mois[0],
        live_mois: mois[1],
        live_mext,
        rb_qig: bulk_density * (fractions[0] * qig[0] + fractions[1] * qig[1]),
    }
}

/// Moisture damping coefficient η_M
///
/// # Formula
/// ```text
/// r = M / M_x
/// η_M = 1 - 2.59 r + 5.11 r² - 3.52 r³,   0 when M ≥ M_x
/// ```
pub fn moisture_damping(mois: f64, mext: f64) -> f64 {
    if mext < SMIDGEN || mois >= mext {
        return 0.0;
    }
    let r = mois / mext;
    (1.0 - 2.59 * r + 5.11 * r * r - 3.52 * r * r * r).clamp(0.0, 1.0)
}

/// Mineral damping coefficient η_s = 0.174 × S_e^-0.19, capped at 1
pub fn mineral_damping(seff: f64) -> f64 {
    if seff < SMIDGEN {
        return 1.0;
    }
    (0.174 * seff.powf(-0.19)).min(1.0)
}

/// Reaction intensity split by category (Btu/ft²/min)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ReactionIntensity {
    pub total: f64,
    pub dead: f64,
    pub live: f64,
}

/// Rate of heat release per unit area of the flaming front
///
/// # Formula
/// ```text
/// I_R = Γ' × Σ_life w_n × h × η_M × η_s
/// ```
pub fn reaction_intensity(
    bed: &FuelBedState,
    dead_mois: f64,
    dead_mext: f64,
    live_mois: f64,
    live_mext: f64,
) -> ReactionIntensity {
    let category = |t: &LifeTotals, mois: f64, mext: f64| {
        bed.gamma * t.net_load * t.heat * moisture_damping(mois, mext) * mineral_damping(t.seff)
    };
    let dead = category(&bed.life[0], dead_mois, dead_mext);
    let live = category(&bed.life[1], live_mois, live_mext);
    ReactionIntensity {
        total: dead + live,
        dead,
        live,
    }
}

/// Propagating flux ratio ξ = exp((0.792 + 0.681 σ^0.5)(β + 0.1)) / (192 + 0.2595 σ)
pub fn propagating_flux(packing_ratio: f64, sigma: f64) -> f64 {
    if sigma < SMIDGEN {
        return 0.0;
    }
    ((0.792 + 0.681 * sigma.sqrt()) * (packing_ratio + 0.1)).exp() / (192.0 + 0.2595 * sigma)
}

/// Flame residence time τ = 384 / σ (min)
pub fn residence_time(sigma: f64) -> f64 {
    if sigma < SMIDGEN {
        0.0
    } else {
        384.0 / sigma
    }
}

/// No-wind, no-slope spread rate R_0 = I_R × ξ / (ρ_b ε Q_ig) (ft/min)
pub fn no_wind_rate(reaction_int: f64, prop_flux: f64, rb_qig: f64) -> f64 {
    if rb_qig < SMIDGEN {
        0.0
    } else {
        reaction_int * prop_flux / rb_qig
    }
}

/// Wind factor φ_w = C × U^B × (β/β_op)^-E, U in ft/min
pub fn wind_factor(bed: &FuelBedState, wind_fpm: f64) -> f64 {
    if wind_fpm < SMIDGEN || bed.beta_ratio < SMIDGEN {
        return 0.0;
    }
    bed.wind_c * wind_fpm.powf(bed.wind_b) * bed.beta_ratio.powf(-bed.wind_e)
}

/// Wind speed (ft/min) that would produce the combined factor φ_e on flat ground
fn wind_from_factor(bed: &FuelBedState, phi: f64) -> f64 {
    if phi < SMIDGEN || bed.wind_c < SMIDGEN || bed.wind_b < SMIDGEN {
        return 0.0;
    }
    (phi * bed.beta_ratio.powf(bed.wind_e) / bed.wind_c).powf(1.0 / bed.wind_b)
}

/// Result of the forward (head fire) spread computation
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ForwardSpread {
    /// Spread rate in the direction of maximum spread (ft/min)
    pub ros_max: f64,
    /// Direction of maximum spread, degrees clockwise from upslope
    pub dir_max: f64,
    /// Effective wind speed (mi/h)
    pub eff_wind: f64,
    /// Maximum reliable wind speed (mi/h)
    pub wind_limit: f64,
    /// True when the effective wind exceeded the reliable limit
    pub limit_exceeded: bool,
    pub wind_factor: f64,
    pub slope_factor: f64,
}

/// Spread rate and direction under combined wind and slope
///
/// # Formula
/// ```text
/// x = R_0 φ_s + R_0 φ_w cos(ω),   y = R_0 φ_w sin(ω)
/// R_max = R_0 + sqrt(x² + y²),    θ_max = atan2(y, x)
/// U_limit = 0.9 × I_R (ft/min)
/// ```
///
/// # Arguments
/// * `bed` - Bed coefficients from [`bed_intermediates`]
/// * `ros0` - No-wind, no-slope spread rate (ft/min)
/// * `reaction_int` - Reaction intensity (Btu/ft²/min)
/// * `slope` - Slope steepness (rise/reach)
/// * `wind_mph` - Midflame wind speed (mi/h)
/// * `wind_dir` - Direction the wind blows toward, degrees clockwise from upslope
/// * `apply_limit` - Cap the effective wind at the reliable limit
pub fn forward_spread(
    bed: &FuelBedState,
    ros0: f64,
    reaction_int: f64,
    slope: f64,
    wind_mph: f64,
    wind_dir: f64,
    apply_limit: bool,
) -> ForwardSpread {
    let wind_fpm = wind_mph * FPM_PER_MPH;
    let limit_fpm = 0.9 * reaction_int;
    let mut out = ForwardSpread {
        wind_factor: wind_factor(bed, wind_fpm),
        slope_factor: bed.slope_k * slope * slope,
        wind_limit: limit_fpm / FPM_PER_MPH,
        ..ForwardSpread::default()
    };
    if ros0 < SMIDGEN {
        return out;
    }

    let slope_rate = ros0 * out.slope_factor;
    let wind_rate = ros0 * out.wind_factor;
    let split = wind_dir.to_radians();
    let x = slope_rate + wind_rate * split.cos();
    let y = wind_rate * split.sin();
    let vector = x.hypot(y);

    out.ros_max = ros0 + vector;
    if vector > SMIDGEN {
        let mut dir = y.atan2(x).to_degrees();
        if dir < 0.0 {
            dir += 360.0;
        }
        out.dir_max = dir;
    }

    let mut eff_fpm = wind_from_factor(bed, out.ros_max / ros0 - 1.0);
    if eff_fpm > limit_fpm {
        out.limit_exceeded = true;
        if apply_limit {
            let phi = wind_factor(bed, limit_fpm);
            out.ros_max = ros0 * (1.0 + phi);
            eff_fpm = limit_fpm;
        }
    }
    out.eff_wind = eff_fpm / FPM_PER_MPH;
    out
}

/// Effective wind speed (mi/h) implied by the spread rate in an arbitrary direction
pub fn effective_wind_at_vector(bed: &FuelBedState, ros0: f64, ros_vector: f64) -> f64 {
    if ros0 < SMIDGEN {
        return 0.0;
    }
    wind_from_factor(bed, ros_vector / ros0 - 1.0) / FPM_PER_MPH
}

/// Byram's fireline intensity I_B = R × I_R × τ / 60 (Btu/ft/s)
pub fn fireline_intensity(ros: f64, reaction_int: f64, residence: f64) -> f64 {
    ros * reaction_int * residence / 60.0
}

/// Byram's flame length L = 0.45 × I_B^0.46 (ft)
pub fn flame_length(fli: f64) -> f64 {
    if fli < SMIDGEN {
        0.0
    } else {
        0.45 * fli.powf(0.46)
    }
}

/// Inverse of [`flame_length`]: I_B = (L / 0.45)^(1 / 0.46)
pub fn fireline_intensity_from_flame(flame: f64) -> f64 {
    if flame < SMIDGEN {
        0.0
    } else {
        (flame / 0.45).powf(1.0 / 0.46)
    }
}

/// Heat per unit area H_A = I_R × τ (Btu/ft²)
pub fn heat_per_unit_area(reaction_int: f64, residence: f64) -> f64 {
    reaction_int * residence
}

/// Heat source I_R ξ (1 + φ_w + φ_s) written as R × ρ_b ε Q_ig (Btu/ft²/min)
pub fn heat_source(ros: f64, rb_qig: f64) -> f64 {
    ros * rb_qig
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fuel_bed::StandardFuel;
    use approx::assert_relative_eq;

    /// Anderson fuel model 1, short grass
    fn short_grass() -> Vec<FuelParticle> {
        let mut parts = StandardFuel {
            load1: 0.034,
            savr1: 3500.0,
            savr_herb: 1500.0,
            savr_wood: 1500.0,
            heat_dead: 8000.0,
            heat_live: 8000.0,
            ..StandardFuel::default()
        }
        .particles();
        for p in &mut parts {
            p.mois = 0.06;
        }
        parts
    }

    fn grass_ros0() -> (FuelBedState, f64, f64) {
        let parts = short_grass();
        let bed = bed_intermediates(&parts, 1.0);
        let sink = heat_sink(&parts, bed.bulk_density, 0.12);
        let rx = reaction_intensity(&bed, sink.dead_mois, 0.12, sink.live_mois, sink.live_mext);
        let flux = propagating_flux(bed.packing_ratio, bed.sigma);
        (bed, rx.total, no_wind_rate(rx.total, flux, sink.rb_qig))
    }

    #[test]
    fn test_grass_bed_intermediates() {
        let bed = bed_intermediates(&short_grass(), 1.0);
        assert_relative_eq!(bed.sigma, 3500.0, epsilon = 1e-9);
        assert_relative_eq!(bed.bulk_density, 0.034, epsilon = 1e-12);
        assert_relative_eq!(bed.packing_ratio, 0.034 / 32.0, epsilon = 1e-12);
        assert_eq!(bed.life[1].area_fraction, 0.0);
    }

    #[test]
    fn test_grass_no_wind_rate() {
        let (_, rxi, ros0) = grass_ros0();
        assert!(rxi > 700.0 && rxi < 950.0, "reaction intensity {rxi}");
        assert!(ros0 > 3.5 && ros0 < 6.0, "no-wind rate {ros0}");
    }

    #[test]
    fn test_wind_increases_spread_and_sets_direction() {
        let (bed, rxi, ros0) = grass_ros0();
        let calm = forward_spread(&bed, ros0, rxi, 0.0, 0.0, 0.0, true);
        let windy = forward_spread(&bed, ros0, rxi, 0.0, 5.0, 90.0, true);
        assert_relative_eq!(calm.ros_max, ros0, epsilon = 1e-12);
        // Fuel model 1 at 5 mi/h midflame spreads near 78 ch/h (103 ft/min)
        assert!(windy.ros_max > 95.0 && windy.ros_max < 110.0, "head rate {}", windy.ros_max);
        assert_relative_eq!(windy.dir_max, 90.0, epsilon = 1e-9);
        assert_relative_eq!(windy.eff_wind, 5.0, epsilon = 1e-6);
        assert!(!windy.limit_exceeded);
    }

    #[test]
    fn test_wind_limit_caps_effective_wind() {
        let (bed, rxi, ros0) = grass_ros0();
        let capped = forward_spread(&bed, ros0, rxi, 0.0, 200.0, 0.0, true);
        let uncapped = forward_spread(&bed, ros0, rxi, 0.0, 200.0, 0.0, false);
        assert!(capped.limit_exceeded && uncapped.limit_exceeded);
        assert_relative_eq!(capped.eff_wind, capped.wind_limit, epsilon = 1e-9);
        assert!(uncapped.ros_max > capped.ros_max);
    }

    #[test]
    fn test_effective_wind_at_vector_inverts_head() {
        let (bed, rxi, ros0) = grass_ros0();
        let head = forward_spread(&bed, ros0, rxi, 0.0, 4.0, 0.0, false);
        let eff = effective_wind_at_vector(&bed, ros0, head.ros_max);
        assert_relative_eq!(eff, 4.0, epsilon = 1e-6);
    }

    #[test]
    fn test_moisture_damping_bounds() {
        assert_relative_eq!(moisture_damping(0.0, 0.3), 1.0);
        assert_eq!(moisture_damping(0.3, 0.3), 0.0);
        assert!(moisture_damping(0.15, 0.3) < 1.0);
    }

    #[test]
    fn test_herb_transfer() {
        let mut parts = StandardFuel {
            load_herb: 1.0,
            savr_herb: 1800.0,
            ..StandardFuel::default()
        }
        .particles();
        let moved = transfer_herb_load(&mut parts, 0.25);
        assert_relative_eq!(moved, 0.25);
        assert_relative_eq!(parts[3].load, 0.75);
        assert_relative_eq!(parts[5].load, 0.25);
        assert_relative_eq!(cured_herb_fraction(0.3), 1.0, epsilon = 0.01);
        assert_eq!(cured_herb_fraction(1.5), 0.0);
    }

    #[test]
    fn test_flame_length_round_trip() {
        let fli = fireline_intensity_from_flame(4.0);
        assert_relative_eq!(flame_length(fli), 4.0, epsilon = 1e-9);
        assert_eq!(flame_length(0.0), 0.0);
    }
}
