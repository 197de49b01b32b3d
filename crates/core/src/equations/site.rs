//! Time, map, site and wind nodes

use crate::error::Result;
use crate::physics::{julian, wind};
use crate::variable::{VarId, VariableStore};
use crate::SMIDGEN;

/// Inches on a map per mile on the ground at a 1:1 fraction
const INCHES_PER_MILE: f64 = 63_360.0;

/// Compass item index to degrees clockwise from north
fn compass_degrees(v: &VariableStore, id: VarId) -> f64 {
    22.5 * v.item(id) as f64
}

pub(super) fn julian_date(v: &mut VariableStore) {
    let (year, month, day, hour) = julian::split_integer_date(v.value(VarId::TimeIntegerDate));
    let jd = julian::julian_date(year, month, day, hour);
    v.set(VarId::TimeJulianDate, julian::modified_julian_date(jd));
}

pub(super) fn map_scale(v: &mut VariableStore) {
    let denom = v.value(VarId::MapFraction);
    let scale = if denom < SMIDGEN { 0.0 } else { INCHES_PER_MILE / denom };
    v.set(VarId::MapScale, scale);
}

/// Slope from the contour count crossed over a measured map distance
pub(super) fn map_slope(v: &mut VariableStore) {
    let rise = v.value(VarId::MapContourInterval) * v.value(VarId::MapContourCount);
    let reach = v.value(VarId::MapFraction) * v.value(VarId::MapDist) / 12.0;
    let degrees = if reach < SMIDGEN {
        0.0
    } else {
        (rise / reach).atan().to_degrees()
    };
    v.set(VarId::SiteSlopeDegrees, degrees);
    v.set(VarId::SiteSlopeRise, rise);
    v.set(VarId::SiteSlopeReach, reach);
}

pub(super) fn slope_fraction(v: &mut VariableStore) {
    let degrees = v.value(VarId::SiteSlopeDegrees);
    v.set(VarId::SiteSlopeFraction, degrees.to_radians().tan());
}

pub(super) fn aspect_from_north(v: &mut VariableStore) {
    let degrees = compass_degrees(v, VarId::SiteAspectDirFromCompass);
    v.set(VarId::SiteAspectDirFromNorth, degrees);
}

/// Upslope faces opposite the aspect
pub(super) fn upslope_from_north(v: &mut VariableStore) {
    let aspect = v.value(VarId::SiteAspectDirFromNorth);
    let upslope = if aspect >= 180.0 { aspect - 180.0 } else { aspect + 180.0 };
    v.set(VarId::SiteUpslopeDirFromNorth, upslope);
}

pub(super) fn ridge_to_valley_dist(v: &mut VariableStore) {
    let map_dist = v.value(VarId::SiteRidgeToValleyMapDist);
    let scale = v.value(VarId::MapScale);
    let miles = if scale < SMIDGEN { 0.0 } else { map_dist / scale };
    v.set(VarId::SiteRidgeToValleyDist, miles);
}

pub(super) fn wind_from_north(v: &mut VariableStore) {
    let degrees = compass_degrees(v, VarId::WindDirFromCompass);
    v.set(VarId::WindDirFromNorth, degrees);
}

/// Angle from upslope to the direction the wind blows toward
///
/// Wind direction is entered as the source; the vector points the other way.
/// Results within half a degree of upslope snap to zero.
pub(super) fn wind_from_upslope(v: &mut VariableStore) {
    let upslope = v.value(VarId::SiteUpslopeDirFromNorth);
    let mut vector = v.value(VarId::WindDirFromNorth) - 180.0;
    if vector < 0.0 {
        vector += 360.0;
    }
    let mut dir = vector - upslope;
    if dir < 0.0 {
        dir += 360.0;
    }
    if dir.abs() < 0.5 {
        dir = 0.0;
    }
    v.set(VarId::WindDirFromUpslope, dir);
}

pub(super) fn wind_adj_factor(v: &mut VariableStore) -> Result<()> {
    let waf = wind::wind_adjustment_factor(
        v.value(VarId::TreeCanopyCover),
        v.value(VarId::TreeCoverHt),
        v.value(VarId::TreeCrownRatio),
        v.value(VarId::SurfaceFuelBedDepth),
    );
    v.set(VarId::WindAdjFactor, waf.factor);
    v.set_item(VarId::WindAdjMethod, waf.method.index())?;
    v.set(VarId::TreeCanopyCrownFraction, waf.crown_fill);
    Ok(())
}

pub(super) fn wind_at_20ft(v: &mut VariableStore) {
    let w10m = v.value(VarId::WindSpeedAt10M);
    v.set(VarId::WindSpeedAt20Ft, wind::wind_at_20ft(w10m));
}

pub(super) fn wind_at_midflame(v: &mut VariableStore) {
    let midflame = v.value(VarId::WindSpeedAt20Ft) * v.value(VarId::WindAdjFactor);
    v.set(VarId::WindSpeedAtMidflame, midflame);
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn store() -> VariableStore {
        VariableStore::new(&["1".to_string()], &["D1L1".to_string()]).unwrap()
    }

    #[test]
    fn test_map_scale_guard() {
        let mut v = store();
        v.set(VarId::MapFraction, 0.0);
        map_scale(&mut v);
        assert_eq!(v.value(VarId::MapScale), 0.0);

        v.set(VarId::MapFraction, 24_000.0);
        map_scale(&mut v);
        assert_relative_eq!(v.value(VarId::MapScale), 2.64);
    }

    #[test]
    fn test_upslope_opposes_aspect() {
        let mut v = store();
        v.set(VarId::SiteAspectDirFromNorth, 90.0);
        upslope_from_north(&mut v);
        assert_eq!(v.value(VarId::SiteUpslopeDirFromNorth), 270.0);

        v.set(VarId::SiteAspectDirFromNorth, 200.0);
        upslope_from_north(&mut v);
        assert_eq!(v.value(VarId::SiteUpslopeDirFromNorth), 20.0);
    }

    #[test]
    fn test_wind_from_upslope_wraps() {
        let mut v = store();
        v.set(VarId::WindDirFromNorth, 0.0);
        v.set(VarId::SiteUpslopeDirFromNorth, 180.0);
        wind_from_upslope(&mut v);
        assert_eq!(v.value(VarId::WindDirFromUpslope), 0.0);

        v.set(VarId::WindDirFromNorth, 270.0);
        v.set(VarId::SiteUpslopeDirFromNorth, 0.0);
        wind_from_upslope(&mut v);
        assert_eq!(v.value(VarId::WindDirFromUpslope), 90.0);
    }

    #[test]
    fn test_map_slope() {
        let mut v = store();
        v.set(VarId::MapContourInterval, 40.0);
        v.set(VarId::MapContourCount, 5.0);
        v.set(VarId::MapFraction, 24_000.0);
        v.set(VarId::MapDist, 0.1);
        map_slope(&mut v);
        assert_relative_eq!(v.value(VarId::SiteSlopeReach), 200.0);
        assert_relative_eq!(v.value(VarId::SiteSlopeDegrees), 45.0, epsilon = 1e-9);

        slope_fraction(&mut v);
        assert_relative_eq!(v.value(VarId::SiteSlopeFraction), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_compass_items() {
        let mut v = store();
        v.set_item(VarId::WindDirFromCompass, 4).unwrap();
        wind_from_north(&mut v);
        assert_eq!(v.value(VarId::WindDirFromNorth), 90.0);
    }
}
