//! Ignition probability nodes

use crate::error::{EqError, Result};
use crate::physics::ignition::{self, LightningCharge, LightningFuel};
use crate::variable::{VarId, VariableStore};

pub(super) fn fuel_temp(v: &mut VariableStore) {
    let t = ignition::fuel_temperature(v.value(VarId::WthrAirTemp), v.value(VarId::SiteSunShading));
    v.set(VarId::SurfaceFuelTemp, t);
}

pub(super) fn firebrand_mois_from_dead1(v: &mut VariableStore) {
    let m = v.value(VarId::SurfaceFuelMoisDead1);
    v.set(VarId::IgnitionFirebrandFuelMois, m);
}

pub(super) fn firebrand_prob(v: &mut VariableStore) {
    let p = ignition::firebrand_probability(
        v.value(VarId::SurfaceFuelTemp),
        v.value(VarId::IgnitionFirebrandFuelMois),
    );
    v.set(VarId::IgnitionFirebrandProb, p);
}

pub(super) fn lightning_mois_from_dead100(v: &mut VariableStore) {
    let m = v.value(VarId::SurfaceFuelMoisDead100);
    v.set(VarId::IgnitionLightningFuelMois, m);
}

pub(super) fn lightning_prob(v: &mut VariableStore) -> Result<()> {
    let index = v.item(VarId::IgnitionLightningFuelType);
    let fuel = LightningFuel::from_index(index).ok_or(EqError::ItemOutOfRange {
        variable: v.get(VarId::IgnitionLightningFuelType).name(),
        index,
        count: v.get(VarId::IgnitionLightningFuelType).items().len(),
    })?;
    let p = ignition::lightning_probability(
        fuel,
        v.value(VarId::IgnitionLightningDuffDepth),
        v.value(VarId::IgnitionLightningFuelMois),
        LightningCharge::from_index(v.item(VarId::WthrLightningStrikeType)),
    );
    v.set(VarId::IgnitionLightningProb, p);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drier_fuel_ignites_more_often() {
        let mut v = VariableStore::new(&["1".to_string()], &["D1L1".to_string()]).unwrap();
        v.set(VarId::WthrAirTemp, 85.0);
        v.set(VarId::SiteSunShading, 0.0);
        fuel_temp(&mut v);
        assert!(v.value(VarId::SurfaceFuelTemp) >= 85.0);

        v.set(VarId::SurfaceFuelMoisDead1, 0.04);
        firebrand_mois_from_dead1(&mut v);
        firebrand_prob(&mut v);
        let dry = v.value(VarId::IgnitionFirebrandProb);

        v.set(VarId::SurfaceFuelMoisDead1, 0.15);
        firebrand_mois_from_dead1(&mut v);
        firebrand_prob(&mut v);
        assert!(dry > v.value(VarId::IgnitionFirebrandProb));
    }

    #[test]
    fn test_lightning_probability_in_unit_range() {
        let mut v = VariableStore::new(&["1".to_string()], &["D1L1".to_string()]).unwrap();
        v.set(VarId::SurfaceFuelMoisDead100, 0.1);
        v.set(VarId::IgnitionLightningDuffDepth, 1.0);
        lightning_mois_from_dead100(&mut v);
        lightning_prob(&mut v).unwrap();
        let p = v.value(VarId::IgnitionLightningProb);
        assert!((0.0..=1.0).contains(&p));
    }
}
