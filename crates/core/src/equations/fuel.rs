//! Fuel bed nodes
//!
//! Parameter nodes rebuild [`EqState::particles`] from the fuel variables;
//! the moisture, intermediates and heat sink nodes then work on that list.

use crate::catalog::{Catalog, FuelModel};
use crate::error::{EqError, Result};
use crate::fuel_bed::{AspenFuel, FuelParticle, Life, PalmettoLoads, ParticleKind, StandardFuel};
use crate::function::FunId;
use crate::physics::fuel_types::{self, AspenType};
use crate::physics::rothermel;
use crate::state::EqState;
use crate::variable::{VarId, VarKind, VariableStore};
use crate::SMIDGEN;

/// Smallest transfer fraction that moves any herbaceous load
const MIN_TRANSFER: f64 = 1.0e-5;

pub(super) fn mois_life_class(v: &mut VariableStore) {
    let dead = v.value(VarId::SurfaceFuelMoisLifeDead);
    let live = v.value(VarId::SurfaceFuelMoisLifeLive);
    for id in [
        VarId::SurfaceFuelMoisDead1,
        VarId::SurfaceFuelMoisDead10,
        VarId::SurfaceFuelMoisDead100,
        VarId::SurfaceFuelMoisDead1000,
    ] {
        v.set(id, dead);
    }
    v.set(VarId::SurfaceFuelMoisLiveHerb, live);
    v.set(VarId::SurfaceFuelMoisLiveWood, live);
}

pub(super) fn mois_scenario(v: &mut VariableStore, catalog: &Catalog) -> Result<()> {
    let scenario = catalog.scenario(v.item_name(VarId::SurfaceFuelMoisScenario))?;
    v.set(VarId::SurfaceFuelMoisDead1, scenario.dead1);
    v.set(VarId::SurfaceFuelMoisDead10, scenario.dead10);
    v.set(VarId::SurfaceFuelMoisDead100, scenario.dead100);
    v.set(VarId::SurfaceFuelMoisDead1000, scenario.dead1000);
    v.set(VarId::SurfaceFuelMoisLiveHerb, scenario.live_herb);
    v.set(VarId::SurfaceFuelMoisLiveWood, scenario.live_wood);
    Ok(())
}

/// Copies a catalog fuel model into the standard fuel variables
pub(crate) fn load_fuel_model(v: &mut VariableStore, model: &FuelModel) -> Result<()> {
    v.set_item(VarId::SurfaceFuelLoadTransferEq, model.transfer)?;
    v.set(VarId::SurfaceFuelBedDepth, model.depth);
    v.set(VarId::SurfaceFuelBedMextDead, model.mext);
    v.set(VarId::SurfaceFuelHeatDead, model.heat_dead);
    v.set(VarId::SurfaceFuelHeatLive, model.heat_live);
    v.set(VarId::SurfaceFuelLoadDead1, model.load1);
    v.set(VarId::SurfaceFuelLoadDead10, model.load10);
    v.set(VarId::SurfaceFuelLoadDead100, model.load100);
    v.set(VarId::SurfaceFuelLoadLiveHerb, model.load_herb);
    v.set(VarId::SurfaceFuelLoadLiveWood, model.load_wood);
    v.set(VarId::SurfaceFuelSavrDead1, model.savr1);
    v.set(VarId::SurfaceFuelSavrLiveHerb, model.savr_herb);
    v.set(VarId::SurfaceFuelSavrLiveWood, model.savr_wood);
    Ok(())
}

pub(super) fn bed_model(v: &mut VariableStore, catalog: &Catalog) -> Result<()> {
    let model = catalog.fuel_model(v.item_name(VarId::SurfaceFuelBedModel))?;
    load_fuel_model(v, model)?;
    // Keep the entry text in step with the copied values
    for &id in FunId::SurfaceFuelBedModel.outputs() {
        if id.spec().kind == VarKind::Continuous {
            v.get_mut(id).sync_text();
        }
    }
    Ok(())
}

pub(super) fn bed_parms(state: &mut EqState) {
    let v = &state.vars;
    let fuel = StandardFuel {
        load1: v.value(VarId::SurfaceFuelLoadDead1),
        load10: v.value(VarId::SurfaceFuelLoadDead10),
        load100: v.value(VarId::SurfaceFuelLoadDead100),
        load_herb: v.value(VarId::SurfaceFuelLoadLiveHerb),
        load_wood: v.value(VarId::SurfaceFuelLoadLiveWood),
        savr1: v.value(VarId::SurfaceFuelSavrDead1),
        savr_herb: v.value(VarId::SurfaceFuelSavrLiveHerb),
        savr_wood: v.value(VarId::SurfaceFuelSavrLiveWood),
        heat_dead: v.value(VarId::SurfaceFuelHeatDead),
        heat_live: v.value(VarId::SurfaceFuelHeatLive),
    };
    state.particles = fuel.particles();
}

pub(super) fn palmetto_model(v: &mut VariableStore) {
    let height = v.value(VarId::SurfaceFuelPalmettoHeight);
    let loads = fuel_types::palmetto_loads(
        v.value(VarId::SurfaceFuelPalmettoAge),
        v.value(VarId::SurfaceFuelPalmettoCover),
        height,
        v.value(VarId::SurfaceFuelPalmettoOverstoryBasalArea),
    );
    v.set(VarId::SurfaceFuelBedDepth, fuel_types::palmetto_depth(height));
    v.set(VarId::SurfaceFuelBedMextDead, fuel_types::PALMETTO_MEXT);
    v.set(VarId::SurfaceFuelPalmettoLoadDead1, loads.dead1);
    v.set(VarId::SurfaceFuelPalmettoLoadDead10, loads.dead10);
    v.set(VarId::SurfaceFuelPalmettoLoadDeadFoliage, loads.dead_foliage);
    v.set(VarId::SurfaceFuelPalmettoLoadLitter, loads.litter);
    v.set(VarId::SurfaceFuelPalmettoLoadLive1, loads.live1);
    v.set(VarId::SurfaceFuelPalmettoLoadLive10, loads.live10);
    v.set(VarId::SurfaceFuelPalmettoLoadLiveFoliage, loads.live_foliage);
}

pub(super) fn palmetto_parms(state: &mut EqState) {
    let v = &state.vars;
    let loads = PalmettoLoads {
        dead1: v.value(VarId::SurfaceFuelPalmettoLoadDead1),
        dead10: v.value(VarId::SurfaceFuelPalmettoLoadDead10),
        dead_foliage: v.value(VarId::SurfaceFuelPalmettoLoadDeadFoliage),
        live1: v.value(VarId::SurfaceFuelPalmettoLoadLive1),
        live10: v.value(VarId::SurfaceFuelPalmettoLoadLive10),
        live_foliage: v.value(VarId::SurfaceFuelPalmettoLoadLiveFoliage),
        litter: v.value(VarId::SurfaceFuelPalmettoLoadLitter),
    };
    state.particles = loads.particles();
}

pub(super) fn aspen_model(v: &mut VariableStore) -> Result<()> {
    let index = v.item(VarId::SurfaceFuelAspenType);
    let kind = AspenType::from_index(index).ok_or(EqError::ItemOutOfRange {
        variable: VarId::SurfaceFuelAspenType.name(),
        index,
        count: v.get(VarId::SurfaceFuelAspenType).items().len(),
    })?;
    let fuel = fuel_types::aspen_fuel(kind, v.value(VarId::SurfaceFuelAspenCuring));
    v.set(VarId::SurfaceFuelBedDepth, kind.depth());
    v.set(VarId::SurfaceFuelBedMextDead, fuel_types::ASPEN_MEXT);
    v.set(VarId::SurfaceFuelAspenLoadDead1, fuel.load_dead1);
    v.set(VarId::SurfaceFuelAspenLoadDead10, fuel.load_dead10);
    v.set(VarId::SurfaceFuelAspenLoadLiveHerb, fuel.load_live_herb);
    v.set(VarId::SurfaceFuelAspenLoadLiveWoody, fuel.load_live_woody);
    v.set(VarId::SurfaceFuelAspenSavrDead1, fuel.savr_dead1);
    v.set(VarId::SurfaceFuelAspenSavrDead10, fuel.savr_dead10);
    v.set(VarId::SurfaceFuelAspenSavrLiveHerb, fuel.savr_live_herb);
    v.set(VarId::SurfaceFuelAspenSavrLiveWoody, fuel.savr_live_woody);
    Ok(())
}

pub(super) fn aspen_parms(state: &mut EqState) {
    let v = &state.vars;
    let fuel = AspenFuel {
        load_dead1: v.value(VarId::SurfaceFuelAspenLoadDead1),
        load_dead10: v.value(VarId::SurfaceFuelAspenLoadDead10),
        load_live_herb: v.value(VarId::SurfaceFuelAspenLoadLiveHerb),
        load_live_woody: v.value(VarId::SurfaceFuelAspenLoadLiveWoody),
        savr_dead1: v.value(VarId::SurfaceFuelAspenSavrDead1),
        savr_dead10: v.value(VarId::SurfaceFuelAspenSavrDead10),
        savr_live_herb: v.value(VarId::SurfaceFuelAspenSavrLiveHerb),
        savr_live_woody: v.value(VarId::SurfaceFuelAspenSavrLiveWoody),
    };
    state.particles = fuel.particles();
}

/// Cured fraction of the herbaceous load; zero for static models
pub(super) fn load_transfer_fraction(v: &mut VariableStore) {
    let fraction = if v.item(VarId::SurfaceFuelLoadTransferEq) == 0 {
        0.0
    } else {
        rothermel::cured_herb_fraction(v.value(VarId::SurfaceFuelMoisLiveHerb))
    };
    v.set(VarId::SurfaceFuelLoadTransferFraction, fraction);
}

/// Assigns each particle the moisture of its life and size class
///
/// Dead particles take the time-lag class of their SAVR; litter takes the
/// 100-h moisture.
pub(super) fn mois_time_lag(state: &mut EqState) {
    let v = &state.vars;
    for p in &mut state.particles {
        let id = match p.life {
            Life::LiveHerb => VarId::SurfaceFuelMoisLiveHerb,
            Life::LiveWood => VarId::SurfaceFuelMoisLiveWood,
            Life::Litter => VarId::SurfaceFuelMoisDead100,
            Life::Dead if p.savr > 192.0 => VarId::SurfaceFuelMoisDead1,
            Life::Dead if p.savr > 48.0 => VarId::SurfaceFuelMoisDead10,
            Life::Dead if p.savr > 16.0 => VarId::SurfaceFuelMoisDead100,
            Life::Dead => VarId::SurfaceFuelMoisDead1000,
        };
        p.mois = v.value(id);
    }
}

/// Copy of the bed with the cured herbaceous load moved to the dead herb particle
///
/// The stored particles keep their entered loads.
fn transferred(particles: &[FuelParticle], fraction: f64) -> Vec<FuelParticle> {
    let mut bed = particles.to_vec();
    if fraction > MIN_TRANSFER {
        rothermel::transfer_herb_load(&mut bed, fraction);
    }
    bed
}

pub(super) fn bed_intermediates(state: &mut EqState) {
    let v = &mut state.vars;
    let fraction = if v.item(VarId::SurfaceFuelLoadTransferEq) == 0 {
        0.0
    } else {
        v.value(VarId::SurfaceFuelLoadTransferFraction)
    };
    let particles = transferred(&state.particles, fraction);

    let (mut dead, mut live) = (0.0, 0.0);
    for p in &particles {
        if p.life.is_dead() {
            dead += p.load;
        } else {
            live += p.load;
        }
    }
    let total = dead + live;
    let dead_fraction = if total < SMIDGEN { 0.0 } else { dead / total };
    let load_of = |kind| particles.iter().find(|p| p.kind == kind).map_or(0.0, |p| p.load);

    let bed = rothermel::bed_intermediates(&particles, v.value(VarId::SurfaceFuelBedDepth));
    v.set(VarId::SurfaceFuelBedSigma, bed.sigma);
    v.set(VarId::SurfaceFuelBedBulkDensity, bed.bulk_density);
    v.set(VarId::SurfaceFuelBedPackingRatio, bed.packing_ratio);
    v.set(VarId::SurfaceFuelBedBetaRatio, bed.beta_ratio);
    v.set(VarId::SurfaceFuelBedDeadFraction, dead_fraction);
    v.set(VarId::SurfaceFuelBedLiveFraction, 1.0 - dead_fraction);
    v.set(VarId::SurfaceFuelLoadDeadHerb, load_of(ParticleKind::DeadHerb));
    v.set(VarId::SurfaceFuelLoadUndeadHerb, load_of(ParticleKind::LiveHerb));
    v.set(VarId::SurfaceFuelLoadDead, dead);
    v.set(VarId::SurfaceFuelLoadLive, live);
    state.bed = bed;
    state.bed_loads = particles.iter().map(|p| p.load).collect();
}

/// Current particle moistures over the loads the last intermediates node used
fn sink_particles(state: &EqState) -> Vec<FuelParticle> {
    let mut particles = state.particles.clone();
    if particles.len() == state.bed_loads.len() {
        for (p, &load) in particles.iter_mut().zip(&state.bed_loads) {
            p.load = load;
        }
    }
    particles
}

pub(super) fn heat_sink(state: &mut EqState) {
    let particles = sink_particles(state);
    let v = &mut state.vars;
    let sink = rothermel::heat_sink(
        &particles,
        v.value(VarId::SurfaceFuelBedBulkDensity),
        v.value(VarId::SurfaceFuelBedMextDead),
    );
    v.set(VarId::SurfaceFuelBedMoisDead, sink.dead_mois);
    v.set(VarId::SurfaceFuelBedMoisLive, sink.live_mois);
    v.set(VarId::SurfaceFuelBedMextLive, sink.live_mext);
    v.set(VarId::SurfaceFuelBedHeatSink, sink.rb_qig);
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn state() -> EqState {
        EqState::new(&Catalog::default()).unwrap()
    }

    #[test]
    fn test_bed_model_copies_catalog_values() {
        let catalog = Catalog::default();
        let mut s = state();
        s.vars.set_item_by_name(VarId::SurfaceFuelBedModel, "1").unwrap();
        bed_model(&mut s.vars, &catalog).unwrap();
        let fm1 = catalog.fuel_model("1").unwrap();
        assert_relative_eq!(s.vars.value(VarId::SurfaceFuelBedDepth), fm1.depth);
        assert_relative_eq!(s.vars.value(VarId::SurfaceFuelLoadDead1), fm1.load1);
        assert_eq!(s.vars.item(VarId::SurfaceFuelLoadTransferEq), fm1.transfer);
    }

    #[test]
    fn test_time_lag_classes() {
        let mut s = state();
        s.vars.set(VarId::SurfaceFuelSavrDead1, 2000.0);
        s.vars.set(VarId::SurfaceFuelSavrLiveHerb, 1800.0);
        s.vars.set(VarId::SurfaceFuelMoisDead1, 0.06);
        s.vars.set(VarId::SurfaceFuelMoisDead10, 0.07);
        s.vars.set(VarId::SurfaceFuelMoisDead100, 0.08);
        s.vars.set(VarId::SurfaceFuelMoisLiveHerb, 0.9);
        s.vars.set(VarId::SurfaceFuelMoisLiveWood, 1.2);
        bed_parms(&mut s);
        mois_time_lag(&mut s);
        let mois: Vec<f64> = s.particles.iter().map(|p| p.mois).collect();
        // 1-h, 10-h (109), 100-h (30), herb, wood, dead herb (1800 -> 1-h)
        assert_eq!(mois, vec![0.06, 0.07, 0.08, 0.9, 1.2, 0.06]);
    }

    #[test]
    fn test_intermediates_apply_transfer_and_guard_empty_bed() {
        let mut s = state();
        s.vars.set(VarId::SurfaceFuelLoadLiveHerb, 0.2);
        s.vars.set(VarId::SurfaceFuelSavrLiveHerb, 1800.0);
        s.vars.set(VarId::SurfaceFuelBedDepth, 1.0);
        s.vars.set_item(VarId::SurfaceFuelLoadTransferEq, 1).unwrap();
        s.vars.set(VarId::SurfaceFuelLoadTransferFraction, 0.25);
        bed_parms(&mut s);
        bed_intermediates(&mut s);
        assert_relative_eq!(s.vars.value(VarId::SurfaceFuelLoadDeadHerb), 0.05);
        assert_relative_eq!(s.vars.value(VarId::SurfaceFuelLoadUndeadHerb), 0.15);
        assert_relative_eq!(s.vars.value(VarId::SurfaceFuelBedDeadFraction), 0.25);

        // entered loads are untouched, so a repeat moves the same share
        let herb = |s: &EqState| s.particles.iter().find(|p| p.kind == ParticleKind::LiveHerb).map(|p| p.load);
        assert_eq!(herb(&s), Some(0.2));
        bed_intermediates(&mut s);
        assert_relative_eq!(s.vars.value(VarId::SurfaceFuelLoadDeadHerb), 0.05);
        assert_relative_eq!(s.vars.value(VarId::SurfaceFuelLoadUndeadHerb), 0.15);
        assert_relative_eq!(s.bed_loads[3], 0.15);
        assert_relative_eq!(s.bed_loads[5], 0.05);

        let mut empty = state();
        empty.vars.set(VarId::SurfaceFuelBedDepth, 1.0);
        bed_parms(&mut empty);
        bed_intermediates(&mut empty);
        assert_eq!(empty.vars.value(VarId::SurfaceFuelBedDeadFraction), 0.0);
        assert_eq!(empty.vars.value(VarId::SurfaceFuelBedLiveFraction), 1.0);
    }

    #[test]
    fn test_static_models_never_transfer() {
        let mut s = state();
        s.vars.set(VarId::SurfaceFuelMoisLiveHerb, 0.3);
        load_transfer_fraction(&mut s.vars);
        assert_eq!(s.vars.value(VarId::SurfaceFuelLoadTransferFraction), 0.0);

        s.vars.set_item(VarId::SurfaceFuelLoadTransferEq, 1).unwrap();
        load_transfer_fraction(&mut s.vars);
        assert_relative_eq!(s.vars.value(VarId::SurfaceFuelLoadTransferFraction), 1.0);
    }

    #[test]
    fn test_aspen_and_palmetto_beds() {
        let mut s = state();
        s.vars.set_item(VarId::SurfaceFuelAspenType, 1).unwrap();
        s.vars.set(VarId::SurfaceFuelAspenCuring, 0.5);
        aspen_model(&mut s.vars).unwrap();
        aspen_parms(&mut s);
        assert_eq!(s.particles.len(), 4);
        assert_relative_eq!(s.vars.value(VarId::SurfaceFuelBedMextDead), fuel_types::ASPEN_MEXT);

        s.vars.set(VarId::SurfaceFuelPalmettoAge, 5.0);
        s.vars.set(VarId::SurfaceFuelPalmettoCover, 0.5);
        s.vars.set(VarId::SurfaceFuelPalmettoHeight, 3.0);
        palmetto_model(&mut s.vars);
        palmetto_parms(&mut s);
        assert_eq!(s.particles.len(), 7);
        assert_relative_eq!(s.vars.value(VarId::SurfaceFuelBedDepth), 2.0);
    }
}
