//! Two-fuel-model blending
//!
//! Each fuel model runs the surface fire subgraph on its own clone of the
//! state. The clones are discarded after their outputs are captured into a
//! [`PassRecord`], so neither pass can see the other's intermediates. The
//! records are then merged into the caller's state: spread rates through the
//! configured blend formula, everything else through a fixed per-output rule.

use super::run;
use crate::config::{FuelChoice, Moisture, SpreadDir, SurfaceOptions, WindSpeed};
use crate::error::Result;
use crate::expected_spread::{ExpectedSpreadSampler, SpreadSample};
use crate::function::FunId;
use crate::state::{EqContext, EqState};
use crate::variable::{VarId, VariableStore};
use tracing::debug;

/// Coverage above which one fuel model stands alone
const DOMINANCE: f64 = 0.999;

/// Rates at or below this are treated as zero by the harmonic mean
const HARMONIC_GUARD: f64 = 1.0e-6;

/// Outputs captured from one fuel model pass
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct PassRecord {
    ros_head: f64,
    ros_vector: f64,
    reaction_int: f64,
    max_dir: f64,
    waf: f64,
    midflame: f64,
    eff_wind_head: f64,
    eff_wind_vector: f64,
    wind_limit: f64,
    wind_limit_exceeded: bool,
    lw_ratio: f64,
    eccentricity: f64,
    no_wind_rate: f64,
    hpua: f64,
    fli_head: f64,
    fli_vector: f64,
    flame_head: f64,
    flame_vector: f64,
    depth: f64,
}

impl PassRecord {
    fn capture(v: &VariableStore) -> Self {
        let midflame = v.value(VarId::WindSpeedAtMidflame);
        let wind_limit = v.value(VarId::SurfaceFireWindSpeedLimit);
        Self {
            ros_head: v.value(VarId::SurfaceFireSpreadAtHead),
            ros_vector: v.value(VarId::SurfaceFireSpreadAtVector),
            reaction_int: v.value(VarId::SurfaceFireReactionInt),
            max_dir: v.value(VarId::SurfaceFireMaxDirFromUpslope),
            waf: v.value(VarId::WindAdjFactor),
            midflame,
            eff_wind_head: v.value(VarId::SurfaceFireEffWindAtHead),
            eff_wind_vector: v.value(VarId::SurfaceFireEffWindAtVector),
            wind_limit,
            wind_limit_exceeded: midflame > wind_limit,
            lw_ratio: v.value(VarId::SurfaceFireLengthToWidth),
            eccentricity: v.value(VarId::SurfaceFireEccentricity),
            no_wind_rate: v.value(VarId::SurfaceFireNoWindRate),
            hpua: v.value(VarId::SurfaceFireHeatPerUnitArea),
            fli_head: v.value(VarId::SurfaceFireLineIntAtHead),
            fli_vector: v.value(VarId::SurfaceFireLineIntAtVector),
            flame_head: v.value(VarId::SurfaceFireFlameLengAtHead),
            flame_vector: v.value(VarId::SurfaceFireFlameLengAtVector),
            depth: v.value(VarId::SurfaceFuelBedDepth),
        }
    }
}

/// Runs both fuel models and writes the blended outputs
pub(super) fn fuel_bed_weighted(state: &mut EqState, ctx: &EqContext<'_>) -> Result<()> {
    let cover0 = state.vars.value(VarId::SurfaceFuelBedCoverage1);
    let passes = [
        run_pass(state, ctx, VarId::SurfaceFuelBedModel1)?,
        run_pass(state, ctx, VarId::SurfaceFuelBedModel2)?,
    ];

    let surface = &ctx.config.surface;
    let [first, second] = &passes;
    // the two-dimensional sampler takes its shape from the last pass
    let lw = second.lw_ratio;
    let (head, vector) = blend_rates(
        surface,
        [first.ros_head, second.ros_head],
        [first.ros_vector, second.ros_vector],
        cover0,
        lw,
        ctx.sampler,
    );
    let merged = merge(&passes, cover0);
    debug!(
        cover0,
        head,
        vector,
        method = ?surface.fuel,
        "blended two fuel models"
    );

    let v = &mut state.vars;
    v.set(VarId::SurfaceFireSpreadAtHead, head);
    v.set(VarId::SurfaceFireSpreadAtVector, vector);
    store(v, &merged)
}

/// One isolated pass of the surface subgraph for the model named by `model_var`
fn run_pass(state: &EqState, ctx: &EqContext<'_>, model_var: VarId) -> Result<PassRecord> {
    let mut pass = state.clone();
    let model = ctx.catalog.fuel_model(pass.vars.item_name(model_var))?;
    super::fuel::load_fuel_model(&mut pass.vars, model)?;

    let surface = &ctx.config.surface;
    let mut steps = vec![
        FunId::SurfaceFuelBedParms,
        FunId::SurfaceFuelLoadTransferFraction,
        FunId::SurfaceFuelBedIntermediates,
        FunId::SurfaceFireResidenceTime,
    ];
    match surface.moisture {
        Moisture::LifeCategory => steps.push(FunId::SurfaceFuelMoisLifeClass),
        Moisture::Scenario => steps.push(FunId::SurfaceFuelMoisScenarioModel),
        Moisture::TimeLag => {}
    }
    steps.extend([
        FunId::SurfaceFuelMoisTimeLag,
        FunId::SurfaceFuelBedHeatSink,
        FunId::SurfaceFirePropagatingFlux,
        FunId::SurfaceFireReactionInt,
        FunId::SurfaceFireNoWindRate,
    ]);
    if surface.wind_speed.computes_waf() {
        steps.push(FunId::WindAdjFactor);
    }
    if surface.wind_speed.from_10m() {
        steps.push(FunId::WindSpeedAt20Ft);
    }
    if surface.wind_speed != WindSpeed::Midflame {
        steps.push(FunId::WindSpeedAtMidflame);
    }
    steps.extend([
        FunId::SurfaceFireSpreadAtHead,
        FunId::SurfaceFireLineIntAtHead,
        FunId::SurfaceFireFlameLengAtHead,
        FunId::SurfaceFireLengthToWidth,
        FunId::SurfaceFireEccentricity,
    ]);
    for &id in &steps {
        run(id, &mut pass, ctx)?;
    }

    // spreading in the direction of maximum spread only
    if surface.spread_dir == SpreadDir::Max {
        pass.vars.set(VarId::SurfaceFireVectorBeta, 0.0);
    } else {
        run(FunId::SurfaceFireVectorBeta, &mut pass, ctx)?;
    }
    for id in [
        FunId::SurfaceFireSpreadAtBeta,
        FunId::SurfaceFireLineIntAtVector,
        FunId::SurfaceFireFlameLengAtVector,
        FunId::SurfaceFireEffWindAtVector,
        FunId::SurfaceFireHeatPerUnitArea,
    ] {
        run(id, &mut pass, ctx)?;
    }
    Ok(PassRecord::capture(&pass.vars))
}

/// Blends the head and vector spread rates with the configured method
///
/// The harmonic mean zero guard looks at the head rates only and decides
/// both results.
fn blend_rates(
    surface: &SurfaceOptions,
    head: [f64; 2],
    vector: [f64; 2],
    cover0: f64,
    lw_ratio: f64,
    sampler: &dyn ExpectedSpreadSampler,
) -> (f64, f64) {
    let cover = [cover0, 1.0 - cover0];
    match surface.fuel {
        FuelChoice::HarmonicMean => {
            if head[0] > HARMONIC_GUARD && head[1] > HARMONIC_GUARD {
                let harmonic = |ros: [f64; 2]| 1.0 / (cover[0] / ros[0] + cover[1] / ros[1]);
                (harmonic(head), harmonic(vector))
            } else {
                (0.0, 0.0)
            }
        }
        FuelChoice::TwoDimensional => {
            let expected = |ros| {
                sampler.expected_rate(&SpreadSample {
                    ros,
                    cover0,
                    lw_ratio,
                    samples: surface.samples_2d,
                    depth: surface.depth_2d,
                    laterals: surface.laterals_2d,
                })
            };
            (expected(head), expected(vector))
        }
        _ => {
            let weighted = |ros: [f64; 2]| cover[0] * ros[0] + cover[1] * ros[1];
            (weighted(head), weighted(vector))
        }
    }
}

/// Non-spread outputs of the blend
///
/// A dominant model supplies every value. Otherwise intensities take the
/// larger model, the wind limit the smaller, the exceeded flag either, and
/// the fire shape and wind values come from the first model.
fn merge(passes: &[PassRecord; 2], cover0: f64) -> PassRecord {
    if cover0 > DOMINANCE {
        return passes[0];
    }
    if 1.0 - cover0 > DOMINANCE {
        return passes[1];
    }
    let [a, b] = passes;
    PassRecord {
        reaction_int: a.reaction_int.max(b.reaction_int),
        wind_limit: a.wind_limit.min(b.wind_limit),
        wind_limit_exceeded: a.wind_limit_exceeded || b.wind_limit_exceeded,
        hpua: a.hpua.max(b.hpua),
        fli_head: a.fli_head.max(b.fli_head),
        fli_vector: a.fli_vector.max(b.fli_vector),
        flame_head: a.flame_head.max(b.flame_head),
        flame_vector: a.flame_vector.max(b.flame_vector),
        depth: a.depth.max(b.depth),
        ..*a
    }
}

fn store(v: &mut VariableStore, merged: &PassRecord) -> Result<()> {
    v.set(VarId::SurfaceFireReactionInt, merged.reaction_int);
    v.set(VarId::SurfaceFireMaxDirFromUpslope, merged.max_dir);
    v.set(VarId::WindAdjFactor, merged.waf);
    v.set(VarId::WindSpeedAtMidflame, merged.midflame);
    v.set(VarId::SurfaceFireEffWindAtHead, merged.eff_wind_head);
    v.set(VarId::SurfaceFireEffWindAtVector, merged.eff_wind_vector);
    v.set(VarId::SurfaceFireWindSpeedLimit, merged.wind_limit);
    v.set_item(VarId::SurfaceFireWindSpeedFlag, usize::from(merged.wind_limit_exceeded))?;
    v.set(VarId::SurfaceFireLengthToWidth, merged.lw_ratio);
    v.set(VarId::SurfaceFireEccentricity, merged.eccentricity);
    v.set(VarId::SurfaceFireNoWindRate, merged.no_wind_rate);
    v.set(VarId::SurfaceFireHeatPerUnitArea, merged.hpua);
    v.set(VarId::SurfaceFireLineIntAtHead, merged.fli_head);
    v.set(VarId::SurfaceFireLineIntAtVector, merged.fli_vector);
    v.set(VarId::SurfaceFireFlameLengAtHead, merged.flame_head);
    v.set(VarId::SurfaceFireFlameLengAtVector, merged.flame_vector);
    v.set(VarId::SurfaceFuelBedDepth, merged.depth);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Configuration;
    use crate::expected_spread::FinneySampler;
    use approx::assert_relative_eq;

    fn record(scale: f64) -> PassRecord {
        PassRecord {
            ros_head: 10.0 * scale,
            ros_vector: 5.0 * scale,
            reaction_int: 1000.0 * scale,
            max_dir: 30.0 * scale,
            waf: 0.4 * scale,
            midflame: 4.0 * scale,
            eff_wind_head: 5.0 * scale,
            eff_wind_vector: 3.0 * scale,
            wind_limit: 20.0 * scale,
            wind_limit_exceeded: scale > 1.5,
            lw_ratio: 1.5 * scale,
            eccentricity: 0.5,
            no_wind_rate: 1.0 * scale,
            hpua: 500.0 * scale,
            fli_head: 100.0 * scale,
            fli_vector: 50.0 * scale,
            flame_head: 3.0 * scale,
            flame_vector: 2.0 * scale,
            depth: 1.0 * scale,
        }
    }

    fn surface(fuel: FuelChoice) -> SurfaceOptions {
        let mut surface = Configuration::default().surface;
        surface.fuel = fuel;
        surface
    }

    #[test]
    fn test_area_weighted_rate() {
        let (head, vector) = blend_rates(
            &surface(FuelChoice::AreaWeighted),
            [10.0, 20.0],
            [4.0, 8.0],
            0.3,
            1.0,
            &FinneySampler::default(),
        );
        assert_relative_eq!(head, 17.0);
        assert_relative_eq!(vector, 6.8);
    }

    #[test]
    fn test_harmonic_mean_zero_guard() {
        let harmonic = surface(FuelChoice::HarmonicMean);
        let sampler = FinneySampler::default();
        assert_eq!(blend_rates(&harmonic, [0.0, 5.0], [1.0, 2.0], 0.5, 1.0, &sampler), (0.0, 0.0));

        let (head, vector) = blend_rates(&harmonic, [10.0, 20.0], [2.0, 4.0], 0.5, 1.0, &sampler);
        assert_relative_eq!(head, 1.0 / (0.5 / 10.0 + 0.5 / 20.0));
        assert_relative_eq!(vector, 1.0 / (0.5 / 2.0 + 0.5 / 4.0));
    }

    #[test]
    fn test_harmonic_guard_follows_head_rates() {
        let harmonic = surface(FuelChoice::HarmonicMean);
        let sampler = FinneySampler::default();
        // slow vector rates still blend once both head rates spread
        let (_, vector) = blend_rates(&harmonic, [10.0, 20.0], [1.0e-7, 4.0], 0.5, 1.0, &sampler);
        assert!(vector > 0.0);
        assert_relative_eq!(vector, 1.0 / (0.5 / 1.0e-7 + 0.5 / 4.0));
    }

    #[test]
    fn test_dominant_model_supplies_everything() {
        let passes = [record(1.0), record(2.0)];
        assert_eq!(merge(&passes, 1.0), passes[0]);
        assert_eq!(merge(&passes, 0.0), passes[1]);
    }

    #[test]
    fn test_mixed_merge_rules() {
        let passes = [record(1.0), record(2.0)];
        let merged = merge(&passes, 0.5);
        assert_relative_eq!(merged.reaction_int, 2000.0);
        assert_relative_eq!(merged.wind_limit, 20.0);
        assert!(merged.wind_limit_exceeded);
        assert_relative_eq!(merged.hpua, 1000.0);
        assert_relative_eq!(merged.flame_vector, 4.0);
        assert_relative_eq!(merged.depth, 2.0);
        // shape and wind from the first model
        assert_relative_eq!(merged.max_dir, 30.0);
        assert_relative_eq!(merged.lw_ratio, 1.5);
        assert_relative_eq!(merged.midflame, 4.0);
        assert_relative_eq!(merged.no_wind_rate, 1.0);
    }
}
