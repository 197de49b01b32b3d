//! Computation nodes
//!
//! Every [`FunId`] maps to one node here. A node reads its declared inputs
//! from the variable store, calls into [`crate::physics`] and writes its
//! declared outputs. Nodes never check whether they are active; that is the
//! graph's job.

mod blend;
mod contain;
mod crown;
mod fuel;
mod ignition;
mod safety;
mod site;
mod size;
mod spot;
mod surface;
mod tree;
mod weather;

use crate::error::Result;
use crate::function::FunId;
use crate::state::{EqContext, EqState};
use crate::variable::VarId;

/// Runs node `id` against `state`
///
/// # Errors
/// Catalog lookups and discrete item updates can fail; the state may then
/// hold partial outputs of this node.
pub fn run(id: FunId, state: &mut EqState, ctx: &EqContext<'_>) -> Result<()> {
    let v = &mut state.vars;
    match id {
        // Time, map and site
        FunId::TimeJulianDate => site::julian_date(v),
        FunId::MapScale => site::map_scale(v),
        FunId::MapSlope => site::map_slope(v),
        FunId::SiteSlopeFraction => site::slope_fraction(v),
        FunId::SiteAspectDirFromNorth => site::aspect_from_north(v),
        FunId::SiteUpslopeDirFromNorth => site::upslope_from_north(v),
        FunId::SiteRidgeToValleyDist => site::ridge_to_valley_dist(v),
        FunId::WindDirFromNorth => site::wind_from_north(v),
        FunId::WindDirFromUpslope => site::wind_from_upslope(v),

        // Fuel
        FunId::SurfaceFuelMoisLifeClass => fuel::mois_life_class(v),
        FunId::SurfaceFuelMoisScenarioModel => fuel::mois_scenario(v, ctx.catalog)?,
        FunId::SurfaceFuelBedModel => fuel::bed_model(v, ctx.catalog)?,
        FunId::SurfaceFuelBedParms => fuel::bed_parms(state),
        FunId::SurfaceFuelPalmettoModel => fuel::palmetto_model(v),
        FunId::SurfaceFuelPalmettoParms => fuel::palmetto_parms(state),
        FunId::SurfaceFuelAspenModel => fuel::aspen_model(v)?,
        FunId::SurfaceFuelAspenParms => fuel::aspen_parms(state),
        FunId::SurfaceFuelLoadTransferFraction => fuel::load_transfer_fraction(v),
        FunId::SurfaceFuelMoisTimeLag => fuel::mois_time_lag(state),
        FunId::SurfaceFuelBedIntermediates => fuel::bed_intermediates(state),
        FunId::SurfaceFuelBedHeatSink => fuel::heat_sink(state),

        // Canopy and wind
        FunId::TreeCrownRatio => tree::crown_ratio(v),
        FunId::TreeCrownBaseHt => tree::crown_base_ht(v),
        FunId::WindAdjFactor => site::wind_adj_factor(v)?,
        FunId::WindSpeedAt20Ft => site::wind_at_20ft(v),
        FunId::WindSpeedAtMidflame => site::wind_at_midflame(v),

        // Surface fire
        FunId::SurfaceFireResidenceTime => surface::residence_time(v),
        FunId::SurfaceFirePropagatingFlux => surface::propagating_flux(v),
        FunId::SurfaceFireReactionInt => surface::reaction_int(state),
        FunId::SurfaceFireNoWindRate => surface::no_wind_rate(v),
        FunId::SurfaceFireSpreadAtHead => surface::spread_at_head(state, ctx.config)?,
        FunId::SurfaceFireLineIntAtHead => surface::line_int_at_head(v),
        FunId::SurfaceFireFlameLengAtHead => surface::flame_leng_at_head(v),
        FunId::SurfaceFireLengthToWidth => surface::length_to_width(v),
        FunId::SurfaceFireEccentricity => surface::eccentricity(v),
        FunId::SurfaceFireVectorDirFromNorth => surface::vector_from_north(v),
        FunId::SurfaceFireVectorDirFromUpslope => surface::vector_from_upslope(v),
        FunId::SurfaceFireVectorBeta => surface::vector_beta(v),
        FunId::SurfaceFireSpreadAtBeta => surface::spread_at_beta(v),
        FunId::SurfaceFireLineIntAtVector => surface::line_int_at_vector(v),
        FunId::SurfaceFireFlameLengAtVector => surface::flame_leng_at_vector(v),
        FunId::SurfaceFireEffWindAtVector => surface::eff_wind_at_vector(state),
        FunId::SurfaceFireHeatPerUnitArea => surface::heat_per_unit_area(v),
        FunId::SurfaceFuelBedWeighted => blend::fuel_bed_weighted(state, ctx)?,
        FunId::SurfaceFireMaxDirFromNorth => surface::max_dir_from_north(v),
        FunId::SurfaceFireHeatSource => surface::heat_source(v),
        FunId::SurfaceFireFlameHtAtVector => surface::flame_ht_at_vector(v),
        FunId::SurfaceFireCharacteristicsDiagram => surface::bump(v, VarId::SurfaceFireCharacteristicsDiagram),
        FunId::SurfaceFireMaxDirDiagram => surface::bump(v, VarId::SurfaceFireMaxDirDiagram),
        FunId::SurfaceFireDistAtHead => {
            surface::dist(v, VarId::SurfaceFireSpreadAtHead, VarId::SurfaceFireDistAtHead);
        }
        FunId::SurfaceFireDistAtVector => {
            surface::dist(v, VarId::SurfaceFireSpreadAtVector, VarId::SurfaceFireDistAtVector);
        }
        FunId::SurfaceFireMapDistAtHead => {
            surface::map_dist(v, VarId::SurfaceFireDistAtHead, VarId::SurfaceFireMapDistAtHead);
        }
        FunId::SurfaceFireMapDistAtVector => {
            surface::map_dist(v, VarId::SurfaceFireDistAtVector, VarId::SurfaceFireMapDistAtVector);
        }

        // Scorch
        FunId::SurfaceFireScorchHtFromFliAtVector => surface::scorch_ht_from_fli(v),
        FunId::SurfaceFireScorchHtFromFlameLengAtVector => surface::scorch_ht_from_flame(v),

        // Size
        FunId::SurfaceFireSpreadAtBack => size::spread_at_back(v),
        FunId::SurfaceFireDistAtBack => size::dist_at_back(v),
        FunId::SurfaceFireMapDistAtBack => size::map_dist_at_back(v),
        FunId::SurfaceFireLengDist => size::leng_dist(v),
        FunId::SurfaceFireLengMapDist => size::leng_map_dist(v),
        FunId::SurfaceFireWidthDist => size::width_dist(v),
        FunId::SurfaceFireWidthMapDist => size::width_map_dist(v),
        FunId::SurfaceFireArea => size::area(v),
        FunId::SurfaceFirePerimeter => size::perimeter(v),
        FunId::SurfaceFireShapeDiagram => surface::bump(v, VarId::SurfaceFireShapeDiagram),

        // Crown fire
        FunId::CrownFireCritSurfFireInt => crown::crit_surf_fire_int(v),
        FunId::CrownFireCritSurfFlameLeng => crown::crit_surf_flame_leng(v),
        FunId::CrownFireCritCrownSpreadRate => crown::crit_crown_spread_rate(v),
        FunId::CrownFireTransRatioFromFireIntAtVector => crown::trans_ratio_from_fli(v),
        FunId::CrownFireTransRatioFromFlameLengAtVector => crown::trans_ratio_from_flame(v),
        FunId::CrownFireTransToCrown => crown::trans_to_crown(v)?,
        FunId::CrownFireSpreadRate => crown::spread_rate(v),
        FunId::CrownFireActiveRatio => crown::active_ratio(v),
        FunId::CrownFireActiveCrown => crown::active_crown(v)?,
        FunId::CrownFireType => crown::fire_type(v)?,
        FunId::CrownFireFuelLoad => crown::fuel_load(v),
        FunId::CrownFireHeatPerUnitAreaCanopy => crown::heat_per_unit_area_canopy(v),
        FunId::CrownFireHeatPerUnitArea => crown::heat_per_unit_area(v),
        FunId::CrownFireLineInt => crown::line_int(v),
        FunId::CrownFireFlameLeng => crown::flame_leng(v),
        FunId::CrownFirePowerOfFire => crown::power_of_fire(v),
        FunId::CrownFirePowerOfWind => crown::power_of_wind(v),
        FunId::CrownFirePowerRatio => crown::power_ratio(v),
        FunId::CrownFireWindDriven => crown::wind_driven(v)?,
        FunId::CrownFireLengthToWidth => crown::length_to_width(v),
        FunId::CrownFireSpreadDist => crown::spread_dist(v),
        FunId::CrownFireSpreadMapDist => crown::spread_map_dist(v),
        FunId::CrownFireArea => crown::area(v),
        FunId::CrownFirePerimeter => crown::perimeter(v),

        // Containment
        FunId::ContainFFReportSize => contain::report_size(v),
        FunId::ContainFFReportSpread => contain::report_spread(v),
        FunId::ContainFFReportRatio => contain::report_ratio(v),
        FunId::ContainFF => contain::contain_multiple(v, &ctx.config.contain, ctx.contain)?,
        FunId::ContainFFSingle => contain::contain_single(v, &ctx.config.contain, ctx.contain)?,

        // Spotting
        FunId::SpotDistBurningPile => spot::burning_pile(v),
        FunId::SpotDistSurfaceFire => spot::surface_fire(v),
        FunId::SpotDistTorchingTrees => spot::torching_trees(v)?,
        FunId::SpotMapDistBurningPile => spot::map_dist(v, VarId::SpotDistBurningPile, VarId::SpotMapDistBurningPile),
        FunId::SpotMapDistSurfaceFire => spot::map_dist(v, VarId::SpotDistSurfaceFire, VarId::SpotMapDistSurfaceFire),
        FunId::SpotMapDistTorchingTrees => {
            spot::map_dist(v, VarId::SpotDistTorchingTrees, VarId::SpotMapDistTorchingTrees);
        }

        // Tree mortality
        FunId::TreeBarkThicknessFofem => tree::bark_thickness(v)?,
        FunId::TreeCrownVolScorchedAtVector => tree::crown_vol_scorched(v),
        FunId::TreeMortalityRateFofemAtVector => tree::mortality_fofem(v),
        FunId::TreeMortalityRateFofem2AtVector => tree::mortality_fofem2(v),
        FunId::TreeMortalityRateFofemHoodAtVector => tree::mortality_hood(v),
        FunId::TreeMortalityRateAspenAtVector => tree::mortality_aspen(v),
        FunId::TreeMortalityCountAtVector => tree::mortality_count(v),

        // Ignition
        FunId::SurfaceFuelTemp => ignition::fuel_temp(v),
        FunId::IgnitionFirebrandFuelMoisFromDead1Hr => ignition::firebrand_mois_from_dead1(v),
        FunId::IgnitionFirebrandProb => ignition::firebrand_prob(v),
        FunId::IgnitionLightningFuelMoisFromDead100Hr => ignition::lightning_mois_from_dead100(v),
        FunId::IgnitionLightningProb => ignition::lightning_prob(v)?,

        // Weather
        FunId::WthrDewPointTemp => weather::dew_point(v),
        FunId::WthrRelativeHumidity => weather::relative_humidity(v),
        FunId::WthrCumulusBaseHt => weather::cumulus_base_ht(v),
        FunId::WthrHeatIndex => weather::heat_index(v),
        FunId::WthrSummerSimmerIndex => weather::summer_simmer_index(v),
        FunId::WthrWindChillTemp => weather::wind_chill(v),

        // Safety zone
        FunId::SafetyZoneSepDist => safety::sep_dist(v),
        FunId::SafetyZoneRadius => safety::radius(v),
    }
    Ok(())
}

