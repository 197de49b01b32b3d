//! Crown module procedure

use super::Reconfig;
use crate::config::{IntensityInput, Prop};
use crate::function::FunId;
use crate::variable::VarId;

const ALWAYS: &[FunId] = &[
    FunId::CrownFireActiveCrown,
    FunId::CrownFireActiveRatio,
    FunId::CrownFireArea,
    FunId::CrownFireCritCrownSpreadRate,
    FunId::CrownFireCritSurfFireInt,
    FunId::CrownFireCritSurfFlameLeng,
    FunId::CrownFireLengthToWidth,
    FunId::CrownFirePerimeter,
    FunId::CrownFireSpreadDist,
    FunId::CrownFireSpreadMapDist,
    FunId::CrownFireSpreadRate,
    FunId::CrownFireTransToCrown,
    FunId::CrownFireType,
    FunId::CrownFireFlameLeng,
    FunId::CrownFireFuelLoad,
    FunId::CrownFireHeatPerUnitArea,
    FunId::CrownFireHeatPerUnitAreaCanopy,
    FunId::CrownFireLineInt,
    FunId::CrownFirePowerOfFire,
    FunId::CrownFirePowerOfWind,
    FunId::CrownFirePowerRatio,
    FunId::CrownFireWindDriven,
];

const OUTPUTS: &[(VarId, Prop)] = &[
    (VarId::CrownFireActiveCrown, Prop::CrownCalcActiveCrown),
    (VarId::CrownFireActiveRatio, Prop::CrownCalcActiveRatio),
    (VarId::CrownFireArea, Prop::CrownCalcFireArea),
    (VarId::CrownFireCritCrownSpreadRate, Prop::CrownCalcCriticalCrownSpreadRate),
    (VarId::CrownFireCritSurfFireInt, Prop::CrownCalcCriticalSurfaceIntensity),
    (VarId::CrownFireCritSurfFlameLeng, Prop::CrownCalcCriticalSurfaceFlameLeng),
    (VarId::CrownFireFlameLeng, Prop::CrownCalcFlameLeng),
    (VarId::CrownFireFuelLoad, Prop::CrownCalcFuelLoad),
    (VarId::CrownFireHeatPerUnitArea, Prop::CrownCalcHeatPerUnitArea),
    (VarId::CrownFireHeatPerUnitAreaCanopy, Prop::CrownCalcHeatPerUnitAreaCanopy),
    (VarId::CrownFireLengthToWidth, Prop::CrownCalcFireLengthToWidth),
    (VarId::CrownFireLineInt, Prop::CrownCalcFireLineInt),
    (VarId::CrownFirePerimeter, Prop::CrownCalcFirePerimeter),
    (VarId::CrownFirePowerOfFire, Prop::CrownCalcPowerOfFire),
    (VarId::CrownFirePowerOfWind, Prop::CrownCalcPowerOfWind),
    (VarId::CrownFirePowerRatio, Prop::CrownCalcPowerRatio),
    (VarId::CrownFireSpreadDist, Prop::CrownCalcCrownSpreadDist),
    (VarId::CrownFireSpreadRate, Prop::CrownCalcCrownSpreadRate),
    (VarId::CrownFireTransRatio, Prop::CrownCalcTransitionRatio),
    (VarId::CrownFireTransToCrown, Prop::CrownCalcTransitionToCrown),
    (VarId::CrownFireType, Prop::CrownCalcCrownFireType),
    (VarId::CrownFireWindDriven, Prop::CrownCalcWindDriven),
];

impl Reconfig<'_> {
    pub(super) fn crown(&mut self) {
        if Self::skip("crown", self.config.modules.crown) {
            return;
        }
        self.on(ALWAYS);
        self.off(&[FunId::CrownFireTransRatioFromFireIntAtVector]);
        if self.config.modules.surface {
            self.on(&[FunId::CrownFireTransRatioFromFireIntAtVector]);
        } else {
            // Without a surface run the surface intensity is entered
            match self.config.crown_input {
                IntensityInput::FlameLength => self.on(&[FunId::CrownFireTransRatioFromFlameLengAtVector]),
                IntensityInput::FirelineIntensity => self.on(&[FunId::CrownFireTransRatioFromFireIntAtVector]),
            }
            if self.config.surface.wind_speed.from_10m() {
                self.on(&[FunId::WindSpeedAt20Ft]);
            }
        }
        self.outputs(OUTPUTS);
        if self.config.map_distances {
            self.on(&[FunId::MapScale]);
            self.output(VarId::CrownFireSpreadMapDist, Prop::CrownCalcCrownSpreadDist);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Configuration, PropertyDict};
    use crate::function::FunctionRegistry;
    use crate::variable::VariableStore;

    fn run(d: PropertyDict) -> FunctionRegistry {
        let config = Configuration::from_dict(d);
        let mut funs = FunctionRegistry::new();
        let mut vars = VariableStore::new(&["1".to_string()], &["D1L1".to_string()]).unwrap();
        Reconfig::new(&config, &mut funs, &mut vars).crown();
        funs
    }

    #[test]
    fn test_inactive_crown_touches_nothing() {
        assert_eq!(run(PropertyDict::new()).active().count(), 0);
    }

    #[test]
    fn test_standalone_crown_uses_entered_flame_length() {
        let mut d = PropertyDict::new();
        d.set_bool(Prop::SurfaceModuleActive, false).unwrap();
        d.set_bool(Prop::CrownModuleActive, true).unwrap();
        d.select(&[Prop::CrownConfUseFireLineInt, Prop::CrownConfUseFlameLeng], Prop::CrownConfUseFlameLeng);
        d.select(
            &[Prop::SurfaceConfWindSpeedAtMidflame, Prop::SurfaceConfWindSpeedAt10M],
            Prop::SurfaceConfWindSpeedAt10M,
        );
        let funs = run(d);
        assert!(funs.is_active(FunId::CrownFireTransRatioFromFlameLengAtVector));
        assert!(!funs.is_active(FunId::CrownFireTransRatioFromFireIntAtVector));
        assert!(funs.is_active(FunId::WindSpeedAt20Ft));
        assert!(funs.is_active(FunId::CrownFireType));
    }

    #[test]
    fn test_crown_with_surface_uses_fireline_intensity() {
        let mut d = PropertyDict::new();
        d.set_bool(Prop::CrownModuleActive, true).unwrap();
        d.set_bool(Prop::CrownConfUseFlameLeng, true).unwrap();
        let funs = run(d);
        assert!(funs.is_active(FunId::CrownFireTransRatioFromFireIntAtVector));
        assert!(!funs.is_active(FunId::CrownFireTransRatioFromFlameLengAtVector));
        assert!(!funs.is_active(FunId::WindSpeedAt20Ft));
    }
}
