//! Safety zone nodes

use crate::physics::safety_zone;
use crate::variable::{VarId, VariableStore};

pub(super) fn sep_dist(v: &mut VariableStore) {
    let d = safety_zone::separation_distance(v.value(VarId::SurfaceFireFlameLengAtHead));
    v.set(VarId::SafetyZoneSepDist, d);
}

pub(super) fn radius(v: &mut VariableStore) {
    let (radius, size) = safety_zone::radius_and_size(
        v.value(VarId::SafetyZoneSepDist),
        v.value(VarId::SafetyZonePersonnelNumber),
        v.value(VarId::SafetyZonePersonnelArea),
        v.value(VarId::SafetyZoneEquipmentNumber),
        v.value(VarId::SafetyZoneEquipmentArea),
    );
    v.set(VarId::SafetyZoneRadius, radius);
    v.set(VarId::SafetyZoneSize, size);
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zone_grows_with_flame() {
        let mut v = VariableStore::new(&["1".to_string()], &["D1L1".to_string()]).unwrap();
        v.set(VarId::SurfaceFireFlameLengAtHead, 10.0);
        v.set(VarId::SafetyZonePersonnelNumber, 0.0);
        v.set(VarId::SafetyZoneEquipmentNumber, 0.0);
        sep_dist(&mut v);
        radius(&mut v);
        assert_relative_eq!(v.value(VarId::SafetyZoneSepDist), 40.0);
        assert_relative_eq!(v.value(VarId::SafetyZoneRadius), 40.0);
        assert_relative_eq!(v.value(VarId::SafetyZoneSize), std::f64::consts::PI * 1600.0);
    }
}
