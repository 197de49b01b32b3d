//! Tree crown, bark and mortality nodes

use crate::error::Result;
use crate::physics::mortality::{self, AspenSeverity};
use crate::variable::{VarId, VariableStore};

pub(super) fn crown_ratio(v: &mut VariableStore) {
    let cr = mortality::crown_ratio(v.value(VarId::TreeCrownBaseHt), v.value(VarId::TreeCoverHt));
    v.set(VarId::TreeCrownRatio, cr);
}

pub(super) fn crown_base_ht(v: &mut VariableStore) {
    let base = mortality::crown_base_height(v.value(VarId::TreeCrownRatio), v.value(VarId::TreeHt));
    v.set(VarId::TreeCrownBaseHt, base);
}

pub(super) fn bark_thickness(v: &mut VariableStore) -> Result<()> {
    let bark = mortality::bark_thickness(v.item(VarId::TreeSpecies), v.value(VarId::TreeDbh))?;
    v.set(VarId::TreeBarkThickness, bark);
    Ok(())
}

pub(super) fn crown_vol_scorched(v: &mut VariableStore) {
    let scorch = mortality::crown_scorch(
        v.value(VarId::TreeCoverHt),
        v.value(VarId::TreeCrownRatio),
        v.value(VarId::SurfaceFireScorchHtAtVector),
    );
    v.set(VarId::TreeCrownLengScorchedAtVector, scorch.length);
    v.set(VarId::TreeCrownLengFractionScorchedAtVector, scorch.length_fraction);
    v.set(VarId::TreeCrownVolScorchedAtVector, scorch.volume_fraction);
}

pub(super) fn mortality_fofem(v: &mut VariableStore) {
    let pm = mortality::mortality_fofem(
        v.item(VarId::TreeSpecies),
        v.value(VarId::TreeBarkThickness),
        v.value(VarId::TreeCrownVolScorchedAtVector),
    );
    v.set(VarId::TreeMortalityRateAtVector, pm);
}

/// Ryan and Reinhardt with the two-class spruce/non-spruce species list
pub(super) fn mortality_fofem2(v: &mut VariableStore) {
    let pm = mortality::mortality_ryan_reinhardt(
        v.value(VarId::TreeBarkThickness),
        v.value(VarId::TreeCrownVolScorchedAtVector),
        v.item(VarId::TreeSpeciesMortality) == 1,
    );
    v.set(VarId::TreeMortalityRateAtVector, pm);
}

pub(super) fn mortality_hood(v: &mut VariableStore) {
    let pm = mortality::mortality_hood(
        v.item(VarId::TreeSpecies),
        v.value(VarId::TreeDbh),
        v.value(VarId::TreeCrownLengFractionScorchedAtVector),
        v.value(VarId::TreeCrownVolScorchedAtVector),
        v.value(VarId::TreeBarkThickness),
    );
    v.set(VarId::TreeMortalityRateAtVector, pm);
}

pub(super) fn mortality_aspen(v: &mut VariableStore) {
    let severity = if v.item(VarId::SurfaceFireSeverityAspen) == 0 {
        AspenSeverity::Low
    } else {
        AspenSeverity::ModerateOrHigh
    };
    let pm = mortality::mortality_aspen(
        v.value(VarId::TreeDbh),
        v.value(VarId::SurfaceFireFlameLengAtVector),
        severity,
    );
    v.set(VarId::TreeMortalityRateAspenAtVector, pm);
}

pub(super) fn mortality_count(v: &mut VariableStore) {
    let killed = v.value(VarId::TreeMortalityRateAtVector) * v.value(VarId::TreeCount);
    v.set(VarId::TreeMortalityCountAtVector, killed);
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn store() -> VariableStore {
        VariableStore::new(&["1".to_string()], &["D1L1".to_string()]).unwrap()
    }

    #[test]
    fn test_crown_ratio_and_base_are_inverse() {
        let mut v = store();
        v.set(VarId::TreeCoverHt, 80.0);
        v.set(VarId::TreeHt, 80.0);
        v.set(VarId::TreeCrownBaseHt, 20.0);
        crown_ratio(&mut v);
        assert_relative_eq!(v.value(VarId::TreeCrownRatio), 0.75);
        crown_base_ht(&mut v);
        assert_relative_eq!(v.value(VarId::TreeCrownBaseHt), 20.0);
    }

    #[test]
    fn test_full_scorch_kills_more() {
        let mut v = store();
        v.set(VarId::TreeCoverHt, 60.0);
        v.set(VarId::TreeCrownRatio, 0.5);
        v.set(VarId::TreeDbh, 10.0);
        bark_thickness(&mut v).unwrap();

        v.set(VarId::SurfaceFireScorchHtAtVector, 20.0);
        crown_vol_scorched(&mut v);
        assert_eq!(v.value(VarId::TreeCrownVolScorchedAtVector), 0.0);
        mortality_fofem2(&mut v);
        let unscorched = v.value(VarId::TreeMortalityRateAtVector);

        v.set(VarId::SurfaceFireScorchHtAtVector, 60.0);
        crown_vol_scorched(&mut v);
        assert_relative_eq!(v.value(VarId::TreeCrownVolScorchedAtVector), 1.0);
        mortality_fofem2(&mut v);
        assert!(v.value(VarId::TreeMortalityRateAtVector) > unscorched);
    }

    #[test]
    fn test_spruce_floor() {
        let mut v = store();
        v.set(VarId::TreeBarkThickness, 2.0);
        v.set(VarId::TreeCrownVolScorchedAtVector, 0.0);
        v.set_item(VarId::TreeSpeciesMortality, 1).unwrap();
        mortality_fofem2(&mut v);
        assert!(v.value(VarId::TreeMortalityRateAtVector) >= 0.8);
    }

    #[test]
    fn test_mortality_count() {
        let mut v = store();
        v.set(VarId::TreeMortalityRateAtVector, 0.25);
        v.set(VarId::TreeCount, 40.0);
        mortality_count(&mut v);
        assert_relative_eq!(v.value(VarId::TreeMortalityCountAtVector), 10.0);
    }
}
