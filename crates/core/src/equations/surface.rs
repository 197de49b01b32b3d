//! Surface fire nodes

use crate::config::{Configuration, FuelChoice};
use crate::error::Result;
use crate::physics::{fire_shape, mortality, rothermel};
use crate::state::EqState;
use crate::variable::{VarId, VariableStore};

/// Feet per mile, for map distances from ground distances in feet
pub(super) const FEET_PER_MILE: f64 = 5280.0;

pub(super) fn residence_time(v: &mut VariableStore) {
    let sigma = v.value(VarId::SurfaceFuelBedSigma);
    v.set(VarId::SurfaceFireResidenceTime, rothermel::residence_time(sigma));
}

pub(super) fn propagating_flux(v: &mut VariableStore) {
    let flux = rothermel::propagating_flux(
        v.value(VarId::SurfaceFuelBedPackingRatio),
        v.value(VarId::SurfaceFuelBedSigma),
    );
    v.set(VarId::SurfaceFirePropagatingFlux, flux);
}

pub(super) fn reaction_int(state: &mut EqState) {
    let v = &mut state.vars;
    let rxi = rothermel::reaction_intensity(
        &state.bed,
        v.value(VarId::SurfaceFuelBedMoisDead),
        v.value(VarId::SurfaceFuelBedMextDead),
        v.value(VarId::SurfaceFuelBedMoisLive),
        v.value(VarId::SurfaceFuelBedMextLive),
    );
    v.set(VarId::SurfaceFireReactionInt, rxi.total);
    v.set(VarId::SurfaceFireReactionIntDead, rxi.dead);
    v.set(VarId::SurfaceFireReactionIntLive, rxi.live);
}

pub(super) fn no_wind_rate(v: &mut VariableStore) {
    let ros0 = rothermel::no_wind_rate(
        v.value(VarId::SurfaceFireReactionInt),
        v.value(VarId::SurfaceFirePropagatingFlux),
        v.value(VarId::SurfaceFuelBedHeatSink),
    );
    v.set(VarId::SurfaceFireNoWindRate, ros0);
}

/// Head fire spread under wind and slope
///
/// The wind limit is applied when configured, except for aspen beds.
pub(super) fn spread_at_head(state: &mut EqState, config: &Configuration) -> Result<()> {
    let apply_limit = config.surface.wind_limit_applied && config.surface.fuel != FuelChoice::Aspen;
    let v = &mut state.vars;
    let head = rothermel::forward_spread(
        &state.bed,
        v.value(VarId::SurfaceFireNoWindRate),
        v.value(VarId::SurfaceFireReactionInt),
        v.value(VarId::SiteSlopeFraction),
        v.value(VarId::WindSpeedAtMidflame),
        v.value(VarId::WindDirFromUpslope),
        apply_limit,
    );
    v.set(VarId::SurfaceFireSpreadAtHead, head.ros_max);
    v.set(VarId::SurfaceFireMaxDirFromUpslope, head.dir_max);
    v.set(VarId::SurfaceFireEffWindAtHead, head.eff_wind);
    v.set(VarId::SurfaceFireWindSpeedLimit, head.wind_limit);
    v.set_item(VarId::SurfaceFireWindSpeedFlag, usize::from(head.limit_exceeded))?;
    v.set(VarId::SurfaceFireWindFactor, head.wind_factor);
    v.set(VarId::SurfaceFireSlopeFactor, head.slope_factor);
    Ok(())
}

pub(super) fn line_int_at_head(v: &mut VariableStore) {
    let fli = rothermel::fireline_intensity(
        v.value(VarId::SurfaceFireSpreadAtHead),
        v.value(VarId::SurfaceFireReactionInt),
        v.value(VarId::SurfaceFireResidenceTime),
    );
    v.set(VarId::SurfaceFireLineIntAtHead, fli);
}

pub(super) fn flame_leng_at_head(v: &mut VariableStore) {
    let fl = rothermel::flame_length(v.value(VarId::SurfaceFireLineIntAtHead));
    v.set(VarId::SurfaceFireFlameLengAtHead, fl);
}

pub(super) fn length_to_width(v: &mut VariableStore) {
    let lw = fire_shape::length_to_width(v.value(VarId::SurfaceFireEffWindAtHead));
    v.set(VarId::SurfaceFireLengthToWidth, lw);
}

pub(super) fn eccentricity(v: &mut VariableStore) {
    let e = fire_shape::eccentricity(v.value(VarId::SurfaceFireLengthToWidth));
    v.set(VarId::SurfaceFireEccentricity, e);
}

pub(super) fn vector_from_north(v: &mut VariableStore) {
    let degrees = 22.5 * v.item(VarId::SurfaceFireVectorDirFromCompass) as f64;
    v.set(VarId::SurfaceFireVectorDirFromNorth, degrees);
}

pub(super) fn vector_from_upslope(v: &mut VariableStore) {
    let mut dir = v.value(VarId::SurfaceFireVectorDirFromNorth) - v.value(VarId::SiteUpslopeDirFromNorth);
    if dir < 0.0 {
        dir += 360.0;
    }
    v.set(VarId::SurfaceFireVectorDirFromUpslope, dir);
}

pub(super) fn vector_beta(v: &mut VariableStore) {
    let beta = fire_shape::vector_beta(
        v.value(VarId::SurfaceFireMaxDirFromUpslope),
        v.value(VarId::SurfaceFireVectorDirFromUpslope),
    );
    v.set(VarId::SurfaceFireVectorBeta, beta);
}

pub(super) fn spread_at_beta(v: &mut VariableStore) {
    let ros = fire_shape::spread_at_beta(
        v.value(VarId::SurfaceFireSpreadAtHead),
        v.value(VarId::SurfaceFireEccentricity),
        v.value(VarId::SurfaceFireVectorBeta),
    );
    v.set(VarId::SurfaceFireSpreadAtVector, ros);
}

pub(super) fn line_int_at_vector(v: &mut VariableStore) {
    let fli = rothermel::fireline_intensity(
        v.value(VarId::SurfaceFireSpreadAtVector),
        v.value(VarId::SurfaceFireReactionInt),
        v.value(VarId::SurfaceFireResidenceTime),
    );
    v.set(VarId::SurfaceFireLineIntAtVector, fli);
}

pub(super) fn flame_leng_at_vector(v: &mut VariableStore) {
    let fl = rothermel::flame_length(v.value(VarId::SurfaceFireLineIntAtVector));
    v.set(VarId::SurfaceFireFlameLengAtVector, fl);
}

pub(super) fn eff_wind_at_vector(state: &mut EqState) {
    let v = &mut state.vars;
    let wind = rothermel::effective_wind_at_vector(
        &state.bed,
        v.value(VarId::SurfaceFireNoWindRate),
        v.value(VarId::SurfaceFireSpreadAtVector),
    );
    v.set(VarId::SurfaceFireEffWindAtVector, wind);
}

pub(super) fn heat_per_unit_area(v: &mut VariableStore) {
    let hpua = rothermel::heat_per_unit_area(
        v.value(VarId::SurfaceFireReactionInt),
        v.value(VarId::SurfaceFireResidenceTime),
    );
    v.set(VarId::SurfaceFireHeatPerUnitArea, hpua);
}

/// Direction of maximum spread clockwise from north, in [0, 360)
pub(super) fn max_dir_from_north(v: &mut VariableStore) {
    let mut dir = v.value(VarId::SiteUpslopeDirFromNorth) + v.value(VarId::SurfaceFireMaxDirFromUpslope);
    if dir >= 360.0 {
        dir -= 360.0;
    }
    if dir < 0.0 {
        dir += 360.0;
    }
    if dir < 0.5 {
        dir = 0.0;
    }
    v.set(VarId::SurfaceFireMaxDirFromNorth, dir);
}

pub(super) fn heat_source(v: &mut VariableStore) {
    let source = rothermel::heat_source(
        v.value(VarId::SurfaceFireSpreadAtHead),
        v.value(VarId::SurfaceFuelBedHeatSink),
    );
    v.set(VarId::SurfaceFireHeatSource, source);
}

/// Flame height reported as the flame length; the flame angle is not applied
pub(super) fn flame_ht_at_vector(v: &mut VariableStore) {
    let fl = v.value(VarId::SurfaceFireFlameLengAtVector);
    v.set(VarId::SurfaceFireFlameHtAtVector, fl);
}

/// Diagram variables count the times their diagram was requested
pub(super) fn bump(v: &mut VariableStore, id: VarId) {
    let n = v.value(id);
    v.set(id, n + 1.0);
}

pub(super) fn dist(v: &mut VariableStore, rate: VarId, out: VarId) {
    let d = v.value(rate) * v.value(VarId::SurfaceFireElapsedTime);
    v.set(out, d);
}

/// Map distance (in) of a ground distance (ft)
pub(super) fn map_dist(v: &mut VariableStore, ground: VarId, out: VarId) {
    let d = v.value(VarId::MapScale) * v.value(ground) / FEET_PER_MILE;
    v.set(out, d);
}

pub(super) fn scorch_ht_from_fli(v: &mut VariableStore) {
    let ht = mortality::scorch_height(
        v.value(VarId::SurfaceFireLineIntAtVector),
        v.value(VarId::WindSpeedAtMidflame),
        v.value(VarId::WthrAirTemp),
    );
    v.set(VarId::SurfaceFireScorchHtAtVector, ht);
}

pub(super) fn scorch_ht_from_flame(v: &mut VariableStore) {
    let fli = rothermel::fireline_intensity_from_flame(v.value(VarId::SurfaceFireFlameLengAtVector));
    let ht = mortality::scorch_height(fli, v.value(VarId::WindSpeedAtMidflame), v.value(VarId::WthrAirTemp));
    v.set(VarId::SurfaceFireScorchHtAtVector, ht);
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn store() -> VariableStore {
        VariableStore::new(&["1".to_string()], &["D1L1".to_string()]).unwrap()
    }

    #[test]
    fn test_max_dir_from_north_wraps() {
        let mut v = store();
        v.set(VarId::SiteUpslopeDirFromNorth, 300.0);
        v.set(VarId::SurfaceFireMaxDirFromUpslope, 90.0);
        max_dir_from_north(&mut v);
        assert_relative_eq!(v.value(VarId::SurfaceFireMaxDirFromNorth), 30.0);

        v.set(VarId::SiteUpslopeDirFromNorth, 359.8);
        v.set(VarId::SurfaceFireMaxDirFromUpslope, 0.0);
        max_dir_from_north(&mut v);
        assert_relative_eq!(v.value(VarId::SurfaceFireMaxDirFromNorth), 359.8);

        v.set(VarId::SiteUpslopeDirFromNorth, 180.0);
        v.set(VarId::SurfaceFireMaxDirFromUpslope, 180.2);
        max_dir_from_north(&mut v);
        assert_eq!(v.value(VarId::SurfaceFireMaxDirFromNorth), 0.0);
    }

    #[test]
    fn test_vector_from_upslope() {
        let mut v = store();
        v.set(VarId::SurfaceFireVectorDirFromNorth, 45.0);
        v.set(VarId::SiteUpslopeDirFromNorth, 90.0);
        vector_from_upslope(&mut v);
        assert_relative_eq!(v.value(VarId::SurfaceFireVectorDirFromUpslope), 315.0);
    }

    #[test]
    fn test_distances() {
        let mut v = store();
        v.set(VarId::SurfaceFireSpreadAtHead, 10.0);
        v.set(VarId::SurfaceFireElapsedTime, 60.0);
        dist(&mut v, VarId::SurfaceFireSpreadAtHead, VarId::SurfaceFireDistAtHead);
        assert_relative_eq!(v.value(VarId::SurfaceFireDistAtHead), 600.0);

        v.set(VarId::MapScale, 2.64);
        map_dist(&mut v, VarId::SurfaceFireDistAtHead, VarId::SurfaceFireMapDistAtHead);
        assert_relative_eq!(v.value(VarId::SurfaceFireMapDistAtHead), 2.64 * 600.0 / 5280.0);

        v.set(VarId::MapScale, 0.0);
        map_dist(&mut v, VarId::SurfaceFireDistAtHead, VarId::SurfaceFireMapDistAtHead);
        assert_eq!(v.value(VarId::SurfaceFireMapDistAtHead), 0.0);
    }

    #[test]
    fn test_diagram_counter() {
        let mut v = store();
        bump(&mut v, VarId::SurfaceFireShapeDiagram);
        bump(&mut v, VarId::SurfaceFireShapeDiagram);
        assert_eq!(v.value(VarId::SurfaceFireShapeDiagram), 2.0);
    }

    #[test]
    fn test_scorch_from_flame_matches_intensity() {
        let mut v = store();
        v.set(VarId::WthrAirTemp, 77.0);
        v.set(VarId::WindSpeedAtMidflame, 5.0);
        v.set(VarId::SurfaceFireLineIntAtVector, 250.0);
        scorch_ht_from_fli(&mut v);
        let from_fli = v.value(VarId::SurfaceFireScorchHtAtVector);

        v.set(VarId::SurfaceFireFlameLengAtVector, rothermel::flame_length(250.0));
        scorch_ht_from_flame(&mut v);
        assert_relative_eq!(v.value(VarId::SurfaceFireScorchHtAtVector), from_fli, epsilon = 1e-6);
    }
}
