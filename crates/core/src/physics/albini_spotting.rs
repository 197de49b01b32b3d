//! Albini Spotting Distance Model (1979, 1983)
//!
//! Maximum spotting distance from three firebrand sources: a burning pile,
//! a group of torching trees and a wind-driven surface fire. Each source
//! yields an initial firebrand height; the height is carried downwind over
//! flat terrain and then corrected for a ridge-valley profile.
//!
//! # Scientific References
//!
//! - Albini, F.A. (1979). "Spot fire distance from burning trees: a predictive model"
//!   USDA Forest Service General Technical Report INT-56
//! - Albini, F.A. (1983). "Potential spotting distance from wind-driven surface fires"
//!   USDA Forest Service Research Paper INT-309
//! - Chase, C.H. (1981). "Spot fire distance equations for pocket calculators"
//!   USDA Forest Service Research Note INT-310
//! - Tarifa, C.S., del Notario, P.P., Moreno, F.G. (1965). "Transport and combustion of firebrands"
//!   Final Report, Grant FG-SP-114 and Grant FG-SP-146
//!
//! # Model Overview
//!
//! 1. Initial firebrand height from the source
//! 2. Flat-terrain distance from firebrand height, cover height and 20-ft wind
//! 3. Straight-glide landing over a cosine ridge-valley profile

use crate::error::{EqError, Result};
use crate::physics::rothermel;
use crate::SMIDGEN;

const FT_PER_MI: f64 = 5280.0;
const M_PER_FT: f64 = 0.3048;
const KW_PER_M_PER_BTU_FT_S: f64 = 3.46165;
/// Smallest cover height carried into the flat-terrain equation (ft)
const MIN_COVER_HT: f64 = 1.0;

/// Location of the firebrand source in a ridge-valley profile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireSource {
    RidgeTop,
    MidslopeWindward,
    ValleyBottom,
    MidslopeLeeward,
}

impl FireSource {
    /// Source from its item index; out-of-range indices fall back to the ridge top
    pub fn from_index(index: usize) -> Self {
        match index {
            1 => Self::MidslopeWindward,
            2 => Self::ValleyBottom,
            3 => Self::MidslopeLeeward,
            _ => Self::RidgeTop,
        }
    }

    /// Source position in ridge-to-valley distances downwind of the ridge
    fn offset(self) -> f64 {
        match self {
            Self::RidgeTop => 0.0,
            Self::MidslopeWindward => -0.5,
            Self::ValleyBottom => 1.0,
            Self::MidslopeLeeward => 0.5,
        }
    }
}

/// Ridge-valley terrain between the source and the landing point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RidgeValley {
    /// Ridge-to-valley elevation difference (ft)
    pub elevation: f64,
    /// Ridge-to-valley horizontal distance (mi)
    pub distance: f64,
    pub source: FireSource,
}

/// Results shared by every source
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SpotResult {
    /// Cover height carried into the flat-terrain equation (ft)
    pub cover_ht_used: f64,
    /// Initial firebrand height (ft)
    pub firebrand_ht: f64,
    /// Flat-terrain spotting distance (mi)
    pub flat_dist: f64,
    /// Terrain-corrected spotting distance (mi)
    pub dist: f64,
}

/// Torching-tree flame intermediates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TorchingFlame {
    /// Steady flame height (ft)
    pub height: f64,
    /// Steady flame duration (min)
    pub duration: f64,
    /// Tree height to flame height
    pub ratio: f64,
}

/// Flame height (a, b) and duration (c, d) coefficients per torching species
///
/// Order matches the torching species item list.
const TORCHING_COEFFICIENTS: [(f64, f64, f64, f64); 14] = [
    (16.5, 0.515, 10.7, -0.278), // balsam fir
    (16.5, 0.515, 10.7, -0.278), // grand fir
    (15.7, 0.451, 10.7, -0.278), // subalpine fir
    (12.9, 0.453, 12.6, -0.256), // lodgepole pine
    (2.71, 1.000, 11.9, -0.389), // shortleaf pine
    (2.71, 1.000, 11.9, -0.389), // slash pine
    (15.7, 0.451, 12.6, -0.256), // Engelmann spruce
    (12.9, 0.453, 10.7, -0.278), // western white pine
    (2.71, 1.000, 11.9, -0.389), // longleaf pine
    (12.9, 0.453, 12.6, -0.256), // ponderosa pine
    (2.71, 1.000, 11.9, -0.389), // pond pine
    (2.71, 1.000, 11.9, -0.389), // loblolly pine
    (15.7, 0.451, 10.7, -0.278), // Douglas-fir
    (15.7, 0.451, 6.3, -0.249),  // western hemlock
];

/// Calculate ember lofting height above a line fire
///
/// Albini (1979):
/// H = 12.2 × I^0.4
///
/// # Arguments
/// * `fireline_intensity` - Byram's fireline intensity (kW/m)
///
/// # Returns
/// Lofting height in meters
pub fn calculate_lofting_height(fireline_intensity: f64) -> f64 {
    if fireline_intensity <= 0.0 {
        return 0.0;
    }
    12.2 * fireline_intensity.powf(0.4)
}

/// Wind speed at height from a power-law profile
///
/// u(z) = u_ref × (z / z_ref)^α with α = 0.15 for open terrain.
pub(crate) fn wind_speed_at_height(wind_ref: f64, ref_height: f64, height: f64) -> f64 {
    const WIND_SHEAR_EXPONENT: f64 = 0.15;
    if height <= 0.0 || ref_height <= 0.0 {
        return 0.0;
    }
    wind_ref * (height / ref_height).powf(WIND_SHEAR_EXPONENT)
}

/// Terminal velocity of a falling ember (m/s)
///
/// Drag balance w_f = sqrt(2 m g / (ρ_air C_d A)), Tarifa et al. (1965).
pub(crate) fn calculate_terminal_velocity(ember_mass: f64, ember_diameter: f64) -> f64 {
    const AIR_DENSITY: f64 = 1.225;
    const DRAG_COEFFICIENT: f64 = 0.4;
    const GRAVITY: f64 = 9.81;

    if ember_mass <= 0.0 || ember_diameter <= 0.0 {
        return 0.0;
    }
    let cross_section_area = std::f64::consts::PI * (ember_diameter / 2.0).powi(2);
    (2.0 * ember_mass * GRAVITY / (AIR_DENSITY * DRAG_COEFFICIENT * cross_section_area)).sqrt()
}

/// Flat-terrain spotting distance (mi)
///
/// # Formula
/// ```text
/// D = 0.000718 × U_20 × sqrt(H) × (0.362 + sqrt(z / H) / 2 × ln(z / H))
/// ```
/// where U_20 is the 20-ft wind (mi/h), H the cover height (ft) and z the
/// firebrand height (ft). Negative results clamp to zero.
pub fn flat_distance(firebrand_ht: f64, cover_ht: f64, wind20: f64) -> f64 {
    if firebrand_ht < SMIDGEN || cover_ht < SMIDGEN || wind20 < SMIDGEN {
        return 0.0;
    }
    let r = firebrand_ht / cover_ht;
    let d = 0.000718 * wind20 * cover_ht.sqrt() * (0.362 + r.sqrt() / 2.0 * r.ln());
    d.max(0.0)
}

/// Landing distance over a ridge-valley profile (mi)
///
/// The firebrand glides along a straight line from its initial height to
/// the flat-terrain landing point. Terrain follows a cosine with crests at
/// the ridges; the first point where the glide path meets the terrain is
/// the landing point.
pub fn mountain_distance(flat_dist: f64, firebrand_ht: f64, terrain: &RidgeValley) -> f64 {
    const STEPS: usize = 400;

    if flat_dist < SMIDGEN
        || firebrand_ht < SMIDGEN
        || terrain.elevation < SMIDGEN
        || terrain.distance < SMIDGEN
    {
        return flat_dist;
    }

    let x0 = terrain.source.offset();
    let half = terrain.elevation / 2.0;
    let base = (std::f64::consts::PI * x0).cos();
    // Height of the glide path above the terrain at `d` miles downwind
    let clearance = |d: f64| {
        let glide = firebrand_ht * (1.0 - d / flat_dist);
        let ground = half * ((std::f64::consts::PI * (x0 + d / terrain.distance)).cos() - base);
        glide - ground
    };

    let reach = flat_dist * (1.0 + terrain.elevation / firebrand_ht);
    let step = reach / STEPS as f64;
    let mut lo = 0.0;
    let mut hi = reach;
    for i in 1..=STEPS {
        let d = step * i as f64;
        if clearance(d) <= 0.0 {
            lo = d - step;
            hi = d;
            break;
        }
    }
    for _ in 0..60 {
        let mid = 0.5 * (lo + hi);
        if clearance(mid) > 0.0 {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    0.5 * (lo + hi)
}

fn carry(firebrand_ht: f64, cover_ht: f64, wind20: f64, terrain: &RidgeValley) -> SpotResult {
    let cover_ht_used = cover_ht.max(MIN_COVER_HT);
    let flat_dist = flat_distance(firebrand_ht, cover_ht_used, wind20);
    SpotResult {
        cover_ht_used,
        firebrand_ht,
        flat_dist,
        dist: mountain_distance(flat_dist, firebrand_ht, terrain),
    }
}

/// Spotting from a burning pile with the given flame height (ft)
///
/// The initial firebrand height is z = 12.2 × flame height.
pub fn burning_pile(flame_ht: f64, cover_ht: f64, wind20: f64, terrain: &RidgeValley) -> SpotResult {
    let firebrand_ht = 12.2 * flame_ht.max(0.0);
    carry(firebrand_ht, cover_ht, wind20, terrain)
}

/// Steady flame height and duration for a group of torching trees
///
/// # Formula
/// ```text
/// z_F = a × DBH^b × N^0.4
/// t_F = c × DBH^d × N^-0.2
/// ```
///
/// # Arguments
/// * `species` - Index into the torching species list
/// * `dbh` - Diameter at breast height (in)
/// * `tree_ht` - Tree height (ft)
/// * `count` - Number of trees torching together
pub fn torching_flame(species: usize, dbh: f64, tree_ht: f64, count: f64) -> Result<TorchingFlame> {
    let &(a, b, c, d) = TORCHING_COEFFICIENTS
        .get(species)
        .ok_or(EqError::SpeciesOutOfRange {
            table: "torching trees",
            index: species,
            count: TORCHING_COEFFICIENTS.len(),
        })?;
    if dbh < SMIDGEN || count < SMIDGEN {
        return Ok(TorchingFlame::default());
    }
    let height = a * dbh.powf(b) * count.powf(0.4);
    let duration = c * dbh.powf(d) * count.powf(-0.2);
    Ok(TorchingFlame {
        height,
        duration,
        ratio: tree_ht / height,
    })
}

/// Spotting from torching trees
///
/// Initial firebrand height z = A × t_F^B × z_F + z_F / 2, with (A, B)
/// chosen by the ratio of tree height to flame height.
pub fn torching_trees(
    flame: &TorchingFlame,
    cover_ht: f64,
    wind20: f64,
    terrain: &RidgeValley,
) -> SpotResult {
    if flame.height < SMIDGEN {
        return SpotResult {
            cover_ht_used: cover_ht.max(MIN_COVER_HT),
            ..SpotResult::default()
        };
    }
    let (a, b) = if flame.ratio >= 1.0 {
        (4.24, 0.332)
    } else if flame.ratio >= 0.5 {
        (3.64, 0.391)
    } else {
        (2.78, 0.418)
    };
    let firebrand_ht = a * flame.duration.powf(b) * flame.height + 0.5 * flame.height;
    carry(firebrand_ht, cover_ht, wind20, terrain)
}

/// Surface fire spotting result with firebrand drift during lofting
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SurfaceSpot {
    pub spot: SpotResult,
    /// Downwind drift while the firebrand is lofted (mi)
    pub drift: f64,
}

/// Spotting from a wind-driven surface fire
///
/// The flame length is converted to Byram's intensity and lofts a reference
/// firebrand (1 cm, 0.5 g) to the Albini height. The drift is the wind at
/// the lofting height times the time the firebrand needs to fall that
/// height at terminal velocity, and is added to the flat-terrain distance.
///
/// # Arguments
/// * `flame_length` - Surface flame length at the head (ft)
/// * `cover_ht` - Downwind cover height (ft)
/// * `wind20` - 20-ft wind speed (mi/h)
pub fn surface_fire(flame_length: f64, cover_ht: f64, wind20: f64, terrain: &RidgeValley) -> SurfaceSpot {
    const REFERENCE_EMBER_MASS: f64 = 0.0005;
    const REFERENCE_EMBER_DIAMETER: f64 = 0.01;
    const MPS_PER_MPH: f64 = 0.44704;

    let fli = rothermel::fireline_intensity_from_flame(flame_length) * KW_PER_M_PER_BTU_FT_S;
    let loft_m = calculate_lofting_height(fli);
    if loft_m < SMIDGEN || wind20 < SMIDGEN {
        return SurfaceSpot {
            spot: SpotResult {
                cover_ht_used: cover_ht.max(MIN_COVER_HT),
                firebrand_ht: loft_m / M_PER_FT,
                ..SpotResult::default()
            },
            drift: 0.0,
        };
    }

    let wind_at_loft = wind_speed_at_height(wind20 * MPS_PER_MPH, 20.0 * M_PER_FT, loft_m);
    let fall_time = loft_m / calculate_terminal_velocity(REFERENCE_EMBER_MASS, REFERENCE_EMBER_DIAMETER);
    let drift = wind_at_loft * fall_time / M_PER_FT / FT_PER_MI;

    let mut spot = carry(loft_m / M_PER_FT, cover_ht, wind20, terrain);
    spot.flat_dist += drift;
    spot.dist += drift;
    SurfaceSpot { spot, drift }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const FLAT: RidgeValley = RidgeValley {
        elevation: 0.0,
        distance: 0.0,
        source: FireSource::RidgeTop,
    };

    #[test]
    fn test_lofting_height_calculation() {
        // H = 12.2 × 5000^0.4 ≈ 368 m
        let height = calculate_lofting_height(5000.0);
        assert!((height - 368.0).abs() < 5.0, "Height was {height}");
        assert_eq!(calculate_lofting_height(0.0), 0.0);
    }

    #[test]
    fn test_wind_profile() {
        let low = wind_speed_at_height(10.0, 6.1, 3.0);
        let high = wind_speed_at_height(10.0, 6.1, 100.0);
        assert!(low < 10.0);
        assert!(high > 10.0);
        assert_relative_eq!(wind_speed_at_height(10.0, 6.1, 6.1), 10.0);
    }

    #[test]
    fn test_terminal_velocity() {
        let w = calculate_terminal_velocity(0.0005, 0.01);
        assert!(w > 10.0 && w < 20.0, "w was {w}");
        assert_eq!(calculate_terminal_velocity(0.0, 0.01), 0.0);
    }

    #[test]
    fn test_flat_distance_increases_with_wind_and_height() {
        let base = flat_distance(200.0, 50.0, 10.0);
        assert!(base > 0.0);
        assert!(flat_distance(200.0, 50.0, 20.0) > base);
        assert!(flat_distance(400.0, 50.0, 10.0) > base);
        assert_eq!(flat_distance(200.0, 50.0, 0.0), 0.0);
    }

    #[test]
    fn test_burning_pile_flat_terrain() {
        let r = burning_pile(10.0, 30.0, 15.0, &FLAT);
        assert_relative_eq!(r.firebrand_ht, 122.0);
        assert_relative_eq!(r.dist, r.flat_dist);
        assert!(r.flat_dist > 0.0);
    }

    #[test]
    fn test_mountain_valley_source_lands_short() {
        let flat = burning_pile(20.0, 30.0, 20.0, &FLAT);
        let valley = burning_pile(
            20.0,
            30.0,
            20.0,
            &RidgeValley {
                elevation: 2000.0,
                distance: 1.0,
                source: FireSource::ValleyBottom,
            },
        );
        let ridge = burning_pile(
            20.0,
            30.0,
            20.0,
            &RidgeValley {
                elevation: 2000.0,
                distance: 1.0,
                source: FireSource::RidgeTop,
            },
        );
        assert!(valley.dist < flat.flat_dist);
        assert!(ridge.dist > flat.flat_dist);
    }

    #[test]
    fn test_torching_flame_for_douglas_fir() {
        let flame = torching_flame(12, 20.0, 150.0, 5.0).unwrap();
        assert_relative_eq!(flame.height, 15.7 * 20.0_f64.powf(0.451) * 5.0_f64.powf(0.4), epsilon = 1e-9);
        assert!(flame.ratio > 1.0);
        let spot = torching_trees(&flame, 80.0, 15.0, &FLAT);
        assert!(spot.firebrand_ht > flame.height);
        assert!(spot.dist > 0.0);
    }

    #[test]
    fn test_torching_species_out_of_range() {
        assert!(matches!(
            torching_flame(14, 20.0, 100.0, 5.0),
            Err(EqError::SpeciesOutOfRange { index: 14, .. })
        ));
    }

    #[test]
    fn test_surface_fire_drift_is_added() {
        let s = surface_fire(4.0, 10.0, 15.0, &FLAT);
        assert!(s.drift > 0.0);
        assert!(s.spot.flat_dist > s.drift);
        assert_relative_eq!(s.spot.dist, s.spot.flat_dist);
        assert_eq!(surface_fire(0.0, 10.0, 15.0, &FLAT).spot.dist, 0.0);
    }
}
