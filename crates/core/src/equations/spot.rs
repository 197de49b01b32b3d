//! Spotting distance nodes

use crate::error::Result;
use crate::physics::albini_spotting::{self, FireSource, RidgeValley, SpotResult};
use crate::variable::{VarId, VariableStore};

fn terrain(v: &VariableStore) -> RidgeValley {
    RidgeValley {
        elevation: v.value(VarId::SiteRidgeToValleyElev),
        distance: v.value(VarId::SiteRidgeToValleyDist),
        source: FireSource::from_index(v.item(VarId::SpotFireSource)),
    }
}

/// Writes the outputs every source shares
fn store(v: &mut VariableStore, spot: &SpotResult, outs: [VarId; 4]) {
    let [cover, dist, firebrand, flat] = outs;
    v.set(cover, spot.cover_ht_used);
    v.set(dist, spot.dist);
    v.set(firebrand, spot.firebrand_ht);
    v.set(flat, spot.flat_dist);
}

pub(super) fn burning_pile(v: &mut VariableStore) {
    let spot = albini_spotting::burning_pile(
        v.value(VarId::SurfaceFireFlameHtPile),
        v.value(VarId::TreeCoverHtDownwind),
        v.value(VarId::WindSpeedAt20Ft),
        &terrain(v),
    );
    store(
        v,
        &spot,
        [
            VarId::SpotCoverHtBurningPile,
            VarId::SpotDistBurningPile,
            VarId::SpotFirebrandHtBurningPile,
            VarId::SpotFlatDistBurningPile,
        ],
    );
}

pub(super) fn surface_fire(v: &mut VariableStore) {
    let result = albini_spotting::surface_fire(
        v.value(VarId::SurfaceFireFlameLengAtHead),
        v.value(VarId::TreeCoverHtDownwind),
        v.value(VarId::WindSpeedAt20Ft),
        &terrain(v),
    );
    store(
        v,
        &result.spot,
        [
            VarId::SpotCoverHtSurfaceFire,
            VarId::SpotDistSurfaceFire,
            VarId::SpotFirebrandHtSurfaceFire,
            VarId::SpotFlatDistSurfaceFire,
        ],
    );
    v.set(VarId::SpotFirebrandDriftSurfaceFire, result.drift);
}

pub(super) fn torching_trees(v: &mut VariableStore) -> Result<()> {
    let flame = albini_spotting::torching_flame(
        v.item(VarId::TreeSpeciesSpot),
        v.value(VarId::TreeDbh),
        v.value(VarId::TreeHt),
        v.value(VarId::SpotTorchingTrees),
    )?;
    let spot = albini_spotting::torching_trees(
        &flame,
        v.value(VarId::TreeCoverHtDownwind),
        v.value(VarId::WindSpeedAt20Ft),
        &terrain(v),
    );
    store(
        v,
        &spot,
        [
            VarId::SpotCoverHtTorchingTrees,
            VarId::SpotDistTorchingTrees,
            VarId::SpotFirebrandHtTorchingTrees,
            VarId::SpotFlatDistTorchingTrees,
        ],
    );
    v.set(VarId::SpotFlameDurTorchingTrees, flame.duration);
    v.set(VarId::SpotFlameHtTorchingTrees, flame.height);
    v.set(VarId::SpotFlameRatioTorchingTrees, flame.ratio);
    Ok(())
}

/// Map distance (in) of a spotting distance (mi)
pub(super) fn map_dist(v: &mut VariableStore, miles: VarId, out: VarId) {
    let d = v.value(VarId::MapScale) * v.value(miles);
    v.set(out, d);
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn store() -> VariableStore {
        let mut v = VariableStore::new(&["1".to_string()], &["D1L1".to_string()]).unwrap();
        v.set(VarId::TreeCoverHtDownwind, 30.0);
        v.set(VarId::WindSpeedAt20Ft, 20.0);
        v.set(VarId::SiteRidgeToValleyElev, 0.0);
        v.set(VarId::SiteRidgeToValleyDist, 1.0);
        v
    }

    #[test]
    fn test_burning_pile_outputs() {
        let mut v = store();
        v.set(VarId::SurfaceFireFlameHtPile, 10.0);
        burning_pile(&mut v);
        assert_relative_eq!(v.value(VarId::SpotFirebrandHtBurningPile), 122.0);
        assert!(v.value(VarId::SpotDistBurningPile) > 0.0);
        assert_relative_eq!(v.value(VarId::SpotCoverHtBurningPile), 30.0);
    }

    #[test]
    fn test_torching_trees_flame() {
        let mut v = store();
        v.set_item(VarId::TreeSpeciesSpot, 9).unwrap();
        v.set(VarId::TreeDbh, 20.0);
        v.set(VarId::TreeHt, 80.0);
        v.set(VarId::SpotTorchingTrees, 1.0);
        torching_trees(&mut v).unwrap();
        assert_relative_eq!(v.value(VarId::SpotFlameHtTorchingTrees), 12.9 * 20.0_f64.powf(0.453), epsilon = 1e-9);
        assert!(v.value(VarId::SpotDistTorchingTrees) > 0.0);
    }

    #[test]
    fn test_map_distance_is_scale_times_miles() {
        let mut v = store();
        v.set(VarId::MapScale, 2.64);
        v.set(VarId::SpotDistSurfaceFire, 0.5);
        map_dist(&mut v, VarId::SpotDistSurfaceFire, VarId::SpotMapDistSurfaceFire);
        assert_relative_eq!(v.value(VarId::SpotMapDistSurfaceFire), 1.32);
    }
}
