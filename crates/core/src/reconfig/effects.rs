//! Scorch, mortality, ignition, weather and safety zone procedures

use super::{Reconfig, WAF_USER_INPUT};
use crate::config::{Humidity, IntensityInput, Prop, WindSpeed};
use crate::error::Result;
use crate::function::FunId;
use crate::variable::VarId;

impl Reconfig<'_> {
    pub(super) fn scorch(&mut self) -> Result<()> {
        if Self::skip("scorch", self.config.modules.scorch) || !self.calc(Prop::ScorchCalcScorchHt) {
            return Ok(());
        }
        self.show(VarId::SurfaceFireScorchHtAtVector, true);
        if self.config.modules.surface {
            self.on(&[FunId::SurfaceFireScorchHtFromFliAtVector]);
            return Ok(());
        }

        // Scorch height from an entered flame length or intensity
        self.off(&[FunId::WindSpeedAt20Ft, FunId::WindSpeedAtMidflame, FunId::WindAdjFactor]);
        match self.config.scorch_input {
            IntensityInput::FlameLength => self.on(&[FunId::SurfaceFireScorchHtFromFlameLengAtVector]),
            IntensityInput::FirelineIntensity => self.on(&[FunId::SurfaceFireScorchHtFromFliAtVector]),
        }
        let wind = self.config.surface.wind_speed;
        if wind == WindSpeed::Midflame {
            self.fix(VarId::WindAdjFactor, 1.0);
            return self.pick(VarId::WindAdjMethod, WAF_USER_INPUT, true);
        }
        self.on(&[FunId::WindSpeedAtMidflame]);
        self.funs.set_active(FunId::WindAdjFactor, wind.computes_waf());
        if wind.from_10m() {
            self.on(&[FunId::WindSpeedAt20Ft]);
        }
        self.output(VarId::WindSpeedAtMidflame, Prop::SurfaceCalcWindSpeedAtMidflame);
        self.pick(VarId::WindAdjMethod, WAF_USER_INPUT, !wind.computes_waf())
    }

    pub(super) fn mortality(&mut self) {
        if Self::skip("mortality", self.config.modules.mortality) {
            return;
        }
        // Crown base height would otherwise feed back into crown ratio
        self.off(&[
            FunId::TreeCrownBaseHt,
            FunId::TreeMortalityRateFofemAtVector,
            FunId::TreeMortalityRateFofem2AtVector,
        ]);
        self.on(&[
            FunId::TreeCrownVolScorchedAtVector,
            FunId::TreeMortalityCountAtVector,
            FunId::TreeMortalityRateFofemHoodAtVector,
            FunId::TreeBarkThicknessFofem,
        ]);
        if self.config.modules.crown {
            self.on(&[FunId::TreeCrownRatio]);
        }
        self.outputs(&[
            (VarId::TreeBarkThickness, Prop::MortalityCalcBarkThickness),
            (VarId::TreeCrownLengScorchedAtVector, Prop::MortalityCalcTreeCrownLengScorched),
            (VarId::TreeCrownVolScorchedAtVector, Prop::MortalityCalcTreeCrownVolScorched),
            (VarId::TreeMortalityCountAtVector, Prop::MortalityCalcTreeMortalityCount),
            (VarId::TreeMortalityRateAtVector, Prop::MortalityCalcTreeMortalityRate),
        ]);
        if self.config.modules.surface && !self.config.modules.scorch {
            self.on(&[FunId::SurfaceFireScorchHtFromFliAtVector]);
        }
    }

    pub(super) fn ignition(&mut self) {
        if Self::skip("ignition", self.config.modules.ignition) {
            return;
        }
        self.on(&[FunId::IgnitionFirebrandProb, FunId::IgnitionLightningProb, FunId::SurfaceFuelTemp]);
        self.outputs(&[
            (VarId::IgnitionFirebrandProb, Prop::IgnitionCalcIgnitionFirebrandProb),
            (VarId::IgnitionLightningProb, Prop::IgnitionCalcIgnitionLightningProb),
            (VarId::SurfaceFuelTemp, Prop::IgnitionCalcFuelTemp),
        ]);
        if self.config.modules.surface {
            self.on(&[
                FunId::IgnitionFirebrandFuelMoisFromDead1Hr,
                FunId::IgnitionLightningFuelMoisFromDead100Hr,
            ]);
        }
    }

    pub(super) fn weather(&mut self) {
        if Self::skip("weather", self.config.modules.weather) {
            return;
        }
        self.on(&[
            FunId::WthrRelativeHumidity,
            FunId::WthrCumulusBaseHt,
            FunId::WthrHeatIndex,
            FunId::WthrSummerSimmerIndex,
            FunId::WthrWindChillTemp,
        ]);
        if self.config.humidity == Humidity::WetBulbElev {
            self.on(&[FunId::WthrDewPointTemp]);
            self.output(VarId::WthrDewPointTemp, Prop::WeatherCalcWthrDewPointTemp);
        }
        self.outputs(&[
            (VarId::WthrRelativeHumidity, Prop::WeatherCalcWthrRelativeHumidity),
            (VarId::WthrCumulusBaseHt, Prop::WeatherCalcWthrCumulusBaseHt),
            (VarId::WthrHeatIndex, Prop::WeatherCalcWthrHeatIndex),
            (VarId::WthrSummerSimmerIndex, Prop::WeatherCalcWthrSummerSimmerIndex),
            (VarId::WthrWindChillTemp, Prop::WeatherCalcWthrWindChillTemp),
        ]);
    }

    pub(super) fn safety(&mut self) {
        if Self::skip("safety", self.config.modules.safety) {
            return;
        }
        let radius = self.calc(Prop::SafetyCalcRadius);
        let sep = self.calc(Prop::SafetyCalcSepDist);
        let size = self.calc(Prop::SafetyCalcSize);
        self.show(VarId::SafetyZoneRadius, radius);
        self.show(VarId::SafetyZoneSepDist, sep);
        self.show(VarId::SafetyZoneSize, size);
        if radius || sep || size {
            self.on(&[FunId::SafetyZoneSepDist]);
        }
        if radius || size {
            self.on(&[FunId::SafetyZoneRadius]);
        }
        if self.config.modules.surface {
            self.on(&[FunId::SurfaceFireFlameLengAtHead]);
            self.var(VarId::SurfaceFireFlameLengAtHead).is_user_input = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Configuration, PropertyDict};
    use crate::function::FunctionRegistry;
    use crate::variable::VariableStore;

    fn graph(d: PropertyDict) -> (Configuration, FunctionRegistry, VariableStore) {
        let vars = VariableStore::new(&["1".to_string()], &["D1L1".to_string()]).unwrap();
        (Configuration::from_dict(d), FunctionRegistry::new(), vars)
    }

    #[test]
    fn test_standalone_scorch_from_flame_length() {
        let mut d = PropertyDict::new();
        d.set_bool(Prop::SurfaceModuleActive, false).unwrap();
        d.set_bool(Prop::ScorchModuleActive, true).unwrap();
        d.select(&[Prop::ScorchConfUseFireLineInt, Prop::ScorchConfUseFlameLeng], Prop::ScorchConfUseFlameLeng);
        d.select(
            &[Prop::SurfaceConfWindSpeedAtMidflame, Prop::SurfaceConfWindSpeedAt20Ft],
            Prop::SurfaceConfWindSpeedAt20Ft,
        );
        let (config, mut funs, mut vars) = graph(d);
        Reconfig::new(&config, &mut funs, &mut vars).scorch().unwrap();
        assert!(funs.is_active(FunId::SurfaceFireScorchHtFromFlameLengAtVector));
        assert!(!funs.is_active(FunId::SurfaceFireScorchHtFromFliAtVector));
        assert!(funs.is_active(FunId::WindSpeedAtMidflame));
        assert!(!funs.is_active(FunId::WindAdjFactor));
        assert!(vars.get(VarId::SurfaceFireScorchHtAtVector).is_user_output);
        assert!(vars.get(VarId::WindAdjMethod).is_constant);
    }

    #[test]
    fn test_scorch_switched_off_by_calc() {
        let mut d = PropertyDict::new();
        d.set_bool(Prop::ScorchModuleActive, true).unwrap();
        d.set_bool(Prop::ScorchCalcScorchHt, false).unwrap();
        let (config, mut funs, mut vars) = graph(d);
        Reconfig::new(&config, &mut funs, &mut vars).scorch().unwrap();
        assert_eq!(funs.active().count(), 0);
    }

    #[test]
    fn test_mortality_without_scorch_module() {
        let mut d = PropertyDict::new();
        d.set_bool(Prop::MortalityModuleActive, true).unwrap();
        d.set_bool(Prop::CrownModuleActive, true).unwrap();
        let (config, mut funs, mut vars) = graph(d);
        funs.activate(&[FunId::TreeCrownBaseHt]);
        Reconfig::new(&config, &mut funs, &mut vars).mortality();
        assert!(!funs.is_active(FunId::TreeCrownBaseHt));
        assert!(funs.is_active(FunId::TreeCrownRatio));
        assert!(funs.is_active(FunId::TreeMortalityRateFofemHoodAtVector));
        assert!(!funs.is_active(FunId::TreeMortalityRateFofemAtVector));
        assert!(funs.is_active(FunId::SurfaceFireScorchHtFromFliAtVector));
        assert!(vars.get(VarId::TreeMortalityRateAtVector).is_user_output);
    }

    #[test]
    fn test_weather_from_wet_bulb() {
        let mut d = PropertyDict::new();
        d.set_bool(Prop::WeatherModuleActive, true).unwrap();
        d.select(
            &[Prop::WeatherConfHumidityFromDewPoint, Prop::WeatherConfHumidityFromWetBulbElev],
            Prop::WeatherConfHumidityFromWetBulbElev,
        );
        d.set_bool(Prop::WeatherCalcWthrDewPointTemp, true).unwrap();
        let (config, mut funs, mut vars) = graph(d);
        Reconfig::new(&config, &mut funs, &mut vars).weather();
        assert!(funs.is_active(FunId::WthrDewPointTemp));
        assert!(vars.get(VarId::WthrDewPointTemp).is_user_output);
        assert!(vars.get(VarId::WthrRelativeHumidity).is_user_output);
    }

    #[test]
    fn test_safety_separation_only() {
        let mut d = PropertyDict::new();
        d.set_bool(Prop::SafetyModuleActive, true).unwrap();
        d.set_bool(Prop::SafetyCalcRadius, false).unwrap();
        d.set_bool(Prop::SafetyCalcSepDist, true).unwrap();
        let (config, mut funs, mut vars) = graph(d);
        Reconfig::new(&config, &mut funs, &mut vars).safety();
        assert!(funs.is_active(FunId::SafetyZoneSepDist));
        assert!(!funs.is_active(FunId::SafetyZoneRadius));
        assert!(funs.is_active(FunId::SurfaceFireFlameLengAtHead));
        assert!(!vars.get(VarId::SafetyZoneRadius).is_user_output);
    }

    #[test]
    fn test_ignition_reads_surface_moistures() {
        let mut d = PropertyDict::new();
        d.set_bool(Prop::IgnitionModuleActive, true).unwrap();
        let (config, mut funs, mut vars) = graph(d);
        Reconfig::new(&config, &mut funs, &mut vars).ignition();
        assert!(funs.is_active(FunId::IgnitionFirebrandFuelMoisFromDead1Hr));
        assert!(funs.is_active(FunId::SurfaceFuelTemp));
        assert!(!vars.get(VarId::SurfaceFuelTemp).is_user_output);
    }
}
