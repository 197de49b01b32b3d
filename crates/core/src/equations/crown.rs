//! Crown fire nodes
//!
//! Transition uses Van Wagner's critical surface intensity, active spread
//! uses Rothermel's (1991) correlation, and the wind-driven test compares the
//! power of the fire with the power of the wind.

use super::surface::{dist, map_dist};
use crate::error::Result;
use crate::physics::{crown_fire, fire_shape, rothermel};
use crate::variable::{VarId, VariableStore};

pub(super) fn crit_surf_fire_int(v: &mut VariableStore) {
    let fli = crown_fire::critical_surface_intensity(v.value(VarId::TreeFoliarMois), v.value(VarId::TreeCrownBaseHt));
    v.set(VarId::CrownFireCritSurfFireInt, fli);
}

pub(super) fn crit_surf_flame_leng(v: &mut VariableStore) {
    let fl = crown_fire::critical_surface_flame_length(v.value(VarId::CrownFireCritSurfFireInt));
    v.set(VarId::CrownFireCritSurfFlameLeng, fl);
}

pub(super) fn crit_crown_spread_rate(v: &mut VariableStore) {
    let ros = crown_fire::critical_crown_spread_rate(v.value(VarId::TreeCanopyBulkDens));
    v.set(VarId::CrownFireCritCrownSpreadRate, ros);
}

pub(super) fn trans_ratio_from_fli(v: &mut VariableStore) {
    let r = crown_fire::ratio(
        v.value(VarId::SurfaceFireLineIntAtVector),
        v.value(VarId::CrownFireCritSurfFireInt),
    );
    v.set(VarId::CrownFireTransRatio, r);
}

pub(super) fn trans_ratio_from_flame(v: &mut VariableStore) {
    let fli = rothermel::fireline_intensity_from_flame(v.value(VarId::SurfaceFireFlameLengAtVector));
    let r = crown_fire::ratio(fli, v.value(VarId::CrownFireCritSurfFireInt));
    v.set(VarId::CrownFireTransRatio, r);
}

pub(super) fn trans_to_crown(v: &mut VariableStore) -> Result<()> {
    let yes = v.value(VarId::CrownFireTransRatio) >= 1.0;
    v.set_item(VarId::CrownFireTransToCrown, usize::from(yes))
}

pub(super) fn spread_rate(v: &mut VariableStore) {
    let ros = crown_fire::crown_spread_rate(
        v.value(VarId::WindSpeedAt20Ft),
        v.value(VarId::SurfaceFuelMoisDead1),
        v.value(VarId::SurfaceFuelMoisDead10),
        v.value(VarId::SurfaceFuelMoisDead100),
        v.value(VarId::SurfaceFuelMoisLiveWood),
    );
    v.set(VarId::CrownFireSpreadRate, ros);
}

pub(super) fn active_ratio(v: &mut VariableStore) {
    let r = crown_fire::ratio(
        v.value(VarId::CrownFireSpreadRate),
        v.value(VarId::CrownFireCritCrownSpreadRate),
    );
    v.set(VarId::CrownFireActiveRatio, r);
}

pub(super) fn active_crown(v: &mut VariableStore) -> Result<()> {
    let yes = v.value(VarId::CrownFireActiveRatio) >= 1.0;
    v.set_item(VarId::CrownFireActiveCrown, usize::from(yes))
}

pub(super) fn fire_type(v: &mut VariableStore) -> Result<()> {
    let kind = crown_fire::fire_type(
        v.value(VarId::CrownFireTransRatio),
        v.value(VarId::CrownFireActiveRatio),
    );
    v.set_item(VarId::CrownFireType, kind.index())
}

pub(super) fn fuel_load(v: &mut VariableStore) {
    let load = crown_fire::canopy_fuel_load(
        v.value(VarId::TreeCanopyBulkDens),
        v.value(VarId::TreeCoverHt),
        v.value(VarId::TreeCrownBaseHt),
    );
    v.set(VarId::CrownFireFuelLoad, load);
}

pub(super) fn heat_per_unit_area_canopy(v: &mut VariableStore) {
    let hpua = v.value(VarId::CrownFireFuelLoad) * crown_fire::CANOPY_HEAT;
    v.set(VarId::CrownFireHeatPerUnitAreaCanopy, hpua);
}

pub(super) fn heat_per_unit_area(v: &mut VariableStore) {
    let hpua = v.value(VarId::SurfaceFireHeatPerUnitArea) + v.value(VarId::CrownFireHeatPerUnitAreaCanopy);
    v.set(VarId::CrownFireHeatPerUnitArea, hpua);
}

pub(super) fn line_int(v: &mut VariableStore) {
    let fli = crown_fire::crown_fireline_intensity(
        v.value(VarId::CrownFireHeatPerUnitArea),
        v.value(VarId::CrownFireSpreadRate),
    );
    v.set(VarId::CrownFireLineInt, fli);
}

pub(super) fn flame_leng(v: &mut VariableStore) {
    let fl = crown_fire::crown_flame_length(v.value(VarId::CrownFireLineInt));
    v.set(VarId::CrownFireFlameLeng, fl);
}

pub(super) fn power_of_fire(v: &mut VariableStore) {
    let p = crown_fire::power_of_fire(v.value(VarId::CrownFireLineInt));
    v.set(VarId::CrownFirePowerOfFire, p);
}

pub(super) fn power_of_wind(v: &mut VariableStore) {
    let wind_fpm = v.value(VarId::WindSpeedAt20Ft) * rothermel::FPM_PER_MPH;
    let p = crown_fire::power_of_wind(wind_fpm, v.value(VarId::CrownFireSpreadRate));
    v.set(VarId::CrownFirePowerOfWind, p);
}

pub(super) fn power_ratio(v: &mut VariableStore) {
    let r = crown_fire::ratio(
        v.value(VarId::CrownFirePowerOfFire),
        v.value(VarId::CrownFirePowerOfWind),
    );
    v.set(VarId::CrownFirePowerRatio, r);
}

/// Wind driven when the wind's power exceeds the fire's
pub(super) fn wind_driven(v: &mut VariableStore) -> Result<()> {
    let ratio = v.value(VarId::CrownFirePowerRatio);
    let driven = ratio > 1.0e-5 && ratio < 1.0;
    v.set_item(VarId::CrownFireWindDriven, usize::from(driven))
}

pub(super) fn length_to_width(v: &mut VariableStore) {
    let lw = crown_fire::crown_length_to_width(v.value(VarId::WindSpeedAt20Ft));
    v.set(VarId::CrownFireLengthToWidth, lw);
}

pub(super) fn spread_dist(v: &mut VariableStore) {
    dist(v, VarId::CrownFireSpreadRate, VarId::CrownFireSpreadDist);
}

pub(super) fn spread_map_dist(v: &mut VariableStore) {
    map_dist(v, VarId::CrownFireSpreadDist, VarId::CrownFireSpreadMapDist);
}

pub(super) fn area(v: &mut VariableStore) {
    let length = v.value(VarId::CrownFireSpreadDist);
    let width = fire_shape::width(length, v.value(VarId::CrownFireLengthToWidth));
    v.set(VarId::CrownFireArea, fire_shape::area(length, width) * fire_shape::ACRES_PER_SQ_FT);
}

pub(super) fn perimeter(v: &mut VariableStore) {
    let length = v.value(VarId::CrownFireSpreadDist);
    let width = fire_shape::width(length, v.value(VarId::CrownFireLengthToWidth));
    v.set(VarId::CrownFirePerimeter, fire_shape::perimeter(length, width));
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn store() -> VariableStore {
        VariableStore::new(&["1".to_string()], &["D1L1".to_string()]).unwrap()
    }

    #[test]
    fn test_transition_flag_follows_ratio() {
        let mut v = store();
        v.set(VarId::CrownFireCritSurfFireInt, 500.0);
        v.set(VarId::SurfaceFireLineIntAtVector, 750.0);
        trans_ratio_from_fli(&mut v);
        trans_to_crown(&mut v).unwrap();
        assert_relative_eq!(v.value(VarId::CrownFireTransRatio), 1.5);
        assert_eq!(v.item_name(VarId::CrownFireTransToCrown), "Yes");

        v.set(VarId::SurfaceFireLineIntAtVector, 250.0);
        trans_ratio_from_fli(&mut v);
        trans_to_crown(&mut v).unwrap();
        assert_eq!(v.item(VarId::CrownFireTransToCrown), 0);
    }

    #[test]
    fn test_fire_type_items() {
        let mut v = store();
        v.set(VarId::CrownFireTransRatio, 2.0);
        v.set(VarId::CrownFireActiveRatio, 0.5);
        fire_type(&mut v).unwrap();
        assert_eq!(v.item(VarId::CrownFireType), crown_fire::CrownFireType::Torching.index());
    }

    #[test]
    fn test_heat_per_unit_area_adds_canopy() {
        let mut v = store();
        v.set(VarId::TreeCanopyBulkDens, 0.01);
        v.set(VarId::TreeCoverHt, 60.0);
        v.set(VarId::TreeCrownBaseHt, 10.0);
        v.set(VarId::SurfaceFireHeatPerUnitArea, 1000.0);
        fuel_load(&mut v);
        heat_per_unit_area_canopy(&mut v);
        heat_per_unit_area(&mut v);
        assert_relative_eq!(v.value(VarId::CrownFireFuelLoad), 0.5);
        assert_relative_eq!(v.value(VarId::CrownFireHeatPerUnitArea), 1000.0 + 0.5 * crown_fire::CANOPY_HEAT);
    }

    #[test]
    fn test_wind_driven_band() {
        let mut v = store();
        v.set(VarId::CrownFirePowerRatio, 0.5);
        wind_driven(&mut v).unwrap();
        assert_eq!(v.item(VarId::CrownFireWindDriven), 1);

        v.set(VarId::CrownFirePowerRatio, 0.0);
        wind_driven(&mut v).unwrap();
        assert_eq!(v.item(VarId::CrownFireWindDriven), 0);

        v.set(VarId::CrownFirePowerRatio, 3.0);
        wind_driven(&mut v).unwrap();
        assert_eq!(v.item(VarId::CrownFireWindDriven), 0);
    }

    #[test]
    fn test_crown_area_uses_its_own_shape() {
        let mut v = store();
        v.set(VarId::CrownFireSpreadRate, 20.0);
        v.set(VarId::SurfaceFireElapsedTime, 60.0);
        v.set(VarId::WindSpeedAt20Ft, 16.0);
        length_to_width(&mut v);
        spread_dist(&mut v);
        area(&mut v);
        assert_relative_eq!(v.value(VarId::CrownFireLengthToWidth), 3.0);
        let expected = std::f64::consts::PI * 1200.0 * 400.0 / 4.0 * fire_shape::ACRES_PER_SQ_FT;
        assert_relative_eq!(v.value(VarId::CrownFireArea), expected, epsilon = 1e-9);
    }
}
