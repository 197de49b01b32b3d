//! Elliptical fire size nodes

use super::surface::{dist, map_dist};
use crate::physics::fire_shape;
use crate::variable::{VarId, VariableStore};

pub(super) fn spread_at_back(v: &mut VariableStore) {
    let back = fire_shape::backing_rate(
        v.value(VarId::SurfaceFireSpreadAtHead),
        v.value(VarId::SurfaceFireEccentricity),
    );
    v.set(VarId::SurfaceFireSpreadAtBack, back);
}

pub(super) fn dist_at_back(v: &mut VariableStore) {
    dist(v, VarId::SurfaceFireSpreadAtBack, VarId::SurfaceFireDistAtBack);
}

pub(super) fn map_dist_at_back(v: &mut VariableStore) {
    map_dist(v, VarId::SurfaceFireDistAtBack, VarId::SurfaceFireMapDistAtBack);
}

/// Fire length is the backing plus heading distance
pub(super) fn leng_dist(v: &mut VariableStore) {
    let length = v.value(VarId::SurfaceFireDistAtBack) + v.value(VarId::SurfaceFireDistAtHead);
    v.set(VarId::SurfaceFireLengDist, length);
}

pub(super) fn leng_map_dist(v: &mut VariableStore) {
    map_dist(v, VarId::SurfaceFireLengDist, VarId::SurfaceFireLengMapDist);
}

pub(super) fn width_dist(v: &mut VariableStore) {
    let width = fire_shape::width(
        v.value(VarId::SurfaceFireLengDist),
        v.value(VarId::SurfaceFireLengthToWidth),
    );
    v.set(VarId::SurfaceFireWidthDist, width);
}

pub(super) fn width_map_dist(v: &mut VariableStore) {
    map_dist(v, VarId::SurfaceFireWidthDist, VarId::SurfaceFireWidthMapDist);
}

pub(super) fn area(v: &mut VariableStore) {
    let sq_ft = fire_shape::area(v.value(VarId::SurfaceFireLengDist), v.value(VarId::SurfaceFireWidthDist));
    v.set(VarId::SurfaceFireArea, sq_ft * fire_shape::ACRES_PER_SQ_FT);
}

pub(super) fn perimeter(v: &mut VariableStore) {
    let p = fire_shape::perimeter(v.value(VarId::SurfaceFireLengDist), v.value(VarId::SurfaceFireWidthDist));
    v.set(VarId::SurfaceFirePerimeter, p);
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ellipse_from_head_and_shape() {
        let mut v = VariableStore::new(&["1".to_string()], &["D1L1".to_string()]).unwrap();
        v.set(VarId::SurfaceFireSpreadAtHead, 10.0);
        v.set(VarId::SurfaceFireLengthToWidth, 2.0);
        v.set(VarId::SurfaceFireEccentricity, fire_shape::eccentricity(2.0));
        v.set(VarId::SurfaceFireElapsedTime, 60.0);

        super::super::surface::dist(&mut v, VarId::SurfaceFireSpreadAtHead, VarId::SurfaceFireDistAtHead);
        spread_at_back(&mut v);
        dist_at_back(&mut v);
        leng_dist(&mut v);
        width_dist(&mut v);
        area(&mut v);
        perimeter(&mut v);

        let back = v.value(VarId::SurfaceFireSpreadAtBack);
        assert!(back > 0.0 && back < 10.0);
        let length = v.value(VarId::SurfaceFireLengDist);
        assert_relative_eq!(length, 600.0 + 60.0 * back);
        assert_relative_eq!(v.value(VarId::SurfaceFireWidthDist), length / 2.0);
        assert_relative_eq!(
            v.value(VarId::SurfaceFireArea),
            std::f64::consts::PI * length * length / 8.0 * fire_shape::ACRES_PER_SQ_FT
        );
        assert_relative_eq!(v.value(VarId::SurfaceFirePerimeter), std::f64::consts::PI * 1.5 * length / 2.0);
    }
}
