//! Flat property dictionary consulted by reconfiguration
//!
//! Every property has a stable external name and a default. Files overlay the
//! defaults as a flat TOML table:
//!
//! ```toml
//! surfaceModuleActive = true
//! surfaceConfFuelModels = false
//! surfaceConfFuelAreaWeighted = true
//! containConfMaxSteps = 5000
//! ```

use crate::error::{EqError, Result};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A property value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropValue {
    Bool(bool),
    Int(i64),
}

impl PropValue {
    fn type_name(self) -> &'static str {
        match self {
            PropValue::Bool(_) => "a boolean",
            PropValue::Int(_) => "an integer",
        }
    }
}

macro_rules! properties {
    ($( $id:ident => $name:literal = $default:expr; )*) => {
        /// Identifier of a configuration property
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Prop {
            $($id,)*
        }

        impl Prop {
            pub const ALL: &'static [Prop] = &[$(Prop::$id,)*];
            pub const COUNT: usize = Self::ALL.len();

            /// Stable external name
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Prop::$id => $name,)*
                }
            }

            /// Value used when no configuration overrides it
            #[must_use]
            pub const fn default_value(self) -> PropValue {
                match self {
                    $(Prop::$id => $default,)*
                }
            }

            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($name => Some(Prop::$id),)*
                    _ => None,
                }
            }

            #[must_use]
            pub const fn index(self) -> usize {
                self as usize
            }
        }
    };
}

const ON: PropValue = PropValue::Bool(true);
const OFF: PropValue = PropValue::Bool(false);

const fn int(value: i64) -> PropValue {
    PropValue::Int(value)
}

properties! {
    // Containment
    ContainCalcAttackPerimeter => "containCalcAttackPerimeter" = OFF;
    ContainCalcAttackSize => "containCalcAttackSize" = OFF;
    ContainCalcCost => "containCalcCost" = OFF;
    ContainCalcDiagram => "containCalcDiagram" = OFF;
    ContainCalcLine => "containCalcLine" = ON;
    ContainCalcResourcesUsed => "containCalcResourcesUsed" = ON;
    ContainCalcSize => "containCalcSize" = ON;
    ContainCalcStatus => "containCalcStatus" = ON;
    ContainCalcTime => "containCalcTime" = ON;
    ContainConfLimitDistOff => "containConfLimitDistOff" = ON;
    ContainConfLimitDistOn => "containConfLimitDistOn" = OFF;
    ContainConfMaxSteps => "containConfMaxSteps" = int(10000);
    ContainConfMinSteps => "containConfMinSteps" = int(250);
    ContainConfResourcesMultiple => "containConfResourcesMultiple" = OFF;
    ContainConfResourcesSingle => "containConfResourcesSingle" = ON;
    ContainConfRetry => "containConfRetry" = ON;
    ContainModuleActive => "containModuleActive" = OFF;

    // Crown
    CrownCalcActiveCrown => "crownCalcActiveCrown" = OFF;
    CrownCalcActiveRatio => "crownCalcActiveRatio" = OFF;
    CrownCalcCriticalCrownSpreadRate => "crownCalcCriticalCrownSpreadRate" = OFF;
    CrownCalcCriticalSurfaceFlameLeng => "crownCalcCriticalSurfaceFlameLeng" = OFF;
    CrownCalcCriticalSurfaceIntensity => "crownCalcCriticalSurfaceIntensity" = OFF;
    CrownCalcCrownFireType => "crownCalcCrownFireType" = ON;
    CrownCalcCrownSpreadDist => "crownCalcCrownSpreadDist" = OFF;
    CrownCalcCrownSpreadRate => "crownCalcCrownSpreadRate" = ON;
    CrownCalcFireArea => "crownCalcFireArea" = OFF;
    CrownCalcFireLengthToWidth => "crownCalcFireLengthToWidth" = OFF;
    CrownCalcFireLineInt => "crownCalcFireLineInt" = OFF;
    CrownCalcFirePerimeter => "crownCalcFirePerimeter" = OFF;
    CrownCalcFlameLeng => "crownCalcFlameLeng" = OFF;
    CrownCalcFuelLoad => "crownCalcFuelLoad" = OFF;
    CrownCalcHeatPerUnitArea => "crownCalcHeatPerUnitArea" = OFF;
    CrownCalcHeatPerUnitAreaCanopy => "crownCalcHeatPerUnitAreaCanopy" = OFF;
    CrownCalcPowerOfFire => "crownCalcPowerOfFire" = OFF;
    CrownCalcPowerOfWind => "crownCalcPowerOfWind" = OFF;
    CrownCalcPowerRatio => "crownCalcPowerRatio" = OFF;
    CrownCalcTransitionRatio => "crownCalcTransitionRatio" = OFF;
    CrownCalcTransitionToCrown => "crownCalcTransitionToCrown" = ON;
    CrownCalcWindDriven => "crownCalcWindDriven" = OFF;
    CrownConfUseFireLineInt => "crownConfUseFireLineInt" = ON;
    CrownConfUseFlameLeng => "crownConfUseFlameLeng" = OFF;
    CrownModuleActive => "crownModuleActive" = OFF;

    // Documentation
    DocDescriptionActive => "docDescriptionActive" = OFF;
    DocFireActive => "docFireActive" = OFF;
    DocRxActive => "docRxActive" = OFF;
    DocTrainingActive => "docTrainingActive" = OFF;

    // Ignition
    IgnitionCalcFuelTemp => "ignitionCalcFuelTemp" = OFF;
    IgnitionCalcIgnitionFirebrandProb => "ignitionCalcIgnitionFirebrandProb" = ON;
    IgnitionCalcIgnitionLightningProb => "ignitionCalcIgnitionLightningProb" = ON;
    IgnitionModuleActive => "ignitionModuleActive" = OFF;

    MapCalcDist => "mapCalcDist" = OFF;

    // Mortality
    MortalityCalcBarkThickness => "mortalityCalcBarkThickness" = OFF;
    MortalityCalcTreeCrownLengScorched => "mortalityCalcTreeCrownLengScorched" = OFF;
    MortalityCalcTreeCrownVolScorched => "mortalityCalcTreeCrownVolScorched" = OFF;
    MortalityCalcTreeMortalityCount => "mortalityCalcTreeMortalityCount" = OFF;
    MortalityCalcTreeMortalityRate => "mortalityCalcTreeMortalityRate" = ON;
    MortalityModuleActive => "mortalityModuleActive" = OFF;

    // Safety zone
    SafetyCalcRadius => "safetyCalcRadius" = ON;
    SafetyCalcSepDist => "safetyCalcSepDist" = OFF;
    SafetyCalcSize => "safetyCalcSize" = OFF;
    SafetyModuleActive => "safetyModuleActive" = OFF;

    // Scorch
    ScorchCalcScorchHt => "scorchCalcScorchHt" = ON;
    ScorchConfUseFireLineInt => "scorchConfUseFireLineInt" = ON;
    ScorchConfUseFlameLeng => "scorchConfUseFlameLeng" = OFF;
    ScorchModuleActive => "scorchModuleActive" = OFF;

    // Size
    SizeCalcFireArea => "sizeCalcFireArea" = ON;
    SizeCalcFireDistAtBack => "sizeCalcFireDistAtBack" = OFF;
    SizeCalcFireDistAtFront => "sizeCalcFireDistAtFront" = OFF;
    SizeCalcFireLengDist => "sizeCalcFireLengDist" = OFF;
    SizeCalcFireLengToWidth => "sizeCalcFireLengToWidth" = OFF;
    SizeCalcFirePerimeter => "sizeCalcFirePerimeter" = ON;
    SizeCalcFireShapeDiagram => "sizeCalcFireShapeDiagram" = OFF;
    SizeCalcFireWidthDist => "sizeCalcFireWidthDist" = OFF;
    SizeModuleActive => "sizeModuleActive" = OFF;

    // Spotting
    SpotCalcCoverHtBurningPile => "spotCalcCoverHtBurningPile" = OFF;
    SpotCalcCoverHtSurfaceFire => "spotCalcCoverHtSurfaceFire" = OFF;
    SpotCalcCoverHtTorchingTrees => "spotCalcCoverHtTorchingTrees" = OFF;
    SpotCalcDistBurningPile => "spotCalcDistBurningPile" = ON;
    SpotCalcDistSurfaceFire => "spotCalcDistSurfaceFire" = ON;
    SpotCalcDistTorchingTrees => "spotCalcDistTorchingTrees" = ON;
    SpotCalcFirebrandDriftSurfaceFire => "spotCalcFirebrandDriftSurfaceFire" = OFF;
    SpotCalcFirebrandHtBurningPile => "spotCalcFirebrandHtBurningPile" = OFF;
    SpotCalcFirebrandHtSurfaceFire => "spotCalcFirebrandHtSurfaceFire" = OFF;
    SpotCalcFirebrandHtTorchingTrees => "spotCalcFirebrandHtTorchingTrees" = OFF;
    SpotCalcFlameDurTorchingTrees => "spotCalcFlameDurTorchingTrees" = OFF;
    SpotCalcFlameHtTorchingTrees => "spotCalcFlameHtTorchingTrees" = OFF;
    SpotCalcFlameRatioTorchingTrees => "spotCalcFlameRatioTorchingTrees" = OFF;
    SpotCalcFlatDistBurningPile => "spotCalcFlatDistBurningPile" = OFF;
    SpotCalcFlatDistSurfaceFire => "spotCalcFlatDistSurfaceFire" = OFF;
    SpotCalcFlatDistTorchingTrees => "spotCalcFlatDistTorchingTrees" = OFF;
    SpotModuleActive => "spotModuleActive" = OFF;

    // Surface outputs
    SurfaceCalcAspenLoadDead1 => "surfaceCalcAspenLoadDead1" = OFF;
    SurfaceCalcAspenLoadLiveHerb => "surfaceCalcAspenLoadLiveHerb" = OFF;
    SurfaceCalcAspenLoadLiveWoody => "surfaceCalcAspenLoadLiveWoody" = OFF;
    SurfaceCalcAspenMortality => "surfaceCalcAspenMortality" = OFF;
    SurfaceCalcAspenSavrDead1 => "surfaceCalcAspenSavrDead1" = OFF;
    SurfaceCalcAspenSavrLiveWoody => "surfaceCalcAspenSavrLiveWoody" = OFF;
    SurfaceCalcCrownFillPortion => "surfaceCalcCrownFillPortion" = OFF;
    SurfaceCalcCrownRatio => "surfaceCalcCrownRatio" = OFF;
    SurfaceCalcFireCharacteristicsDiagram => "surfaceCalcFireCharacteristicsDiagram" = OFF;
    SurfaceCalcFireDist => "surfaceCalcFireDist" = OFF;
    SurfaceCalcFireEffWind => "surfaceCalcFireEffWind" = OFF;
    SurfaceCalcFireFlameLeng => "surfaceCalcFireFlameLeng" = ON;
    SurfaceCalcFireHeatPerUnitArea => "surfaceCalcFireHeatPerUnitArea" = ON;
    SurfaceCalcFireHeatSource => "surfaceCalcFireHeatSource" = OFF;
    SurfaceCalcFireLineInt => "surfaceCalcFireLineInt" = ON;
    SurfaceCalcFireMaxDirDiagram => "surfaceCalcFireMaxDirDiagram" = OFF;
    SurfaceCalcFireMaxDirFromUpslope => "surfaceCalcFireMaxDirFromUpslope" = OFF;
    SurfaceCalcFireReactionInt => "surfaceCalcFireReactionInt" = ON;
    SurfaceCalcFireReactionIntDead => "surfaceCalcFireReactionIntDead" = OFF;
    SurfaceCalcFireReactionIntLive => "surfaceCalcFireReactionIntLive" = OFF;
    SurfaceCalcFireResidenceTime => "surfaceCalcFireResidenceTime" = OFF;
    SurfaceCalcFireSlopeFactor => "surfaceCalcFireSlopeFactor" = OFF;
    SurfaceCalcFireSpread => "surfaceCalcFireSpread" = ON;
    SurfaceCalcFireWindFactor => "surfaceCalcFireWindFactor" = OFF;
    SurfaceCalcFireWindSpeedFlag => "surfaceCalcFireWindSpeedFlag" = OFF;
    SurfaceCalcFireWindSpeedLimit => "surfaceCalcFireWindSpeedLimit" = OFF;
    SurfaceCalcFuelBedBetaRatio => "surfaceCalcFuelBedBetaRatio" = OFF;
    SurfaceCalcFuelBedBulkDensity => "surfaceCalcFuelBedBulkDensity" = OFF;
    SurfaceCalcFuelBedDeadFraction => "surfaceCalcFuelBedDeadFraction" = OFF;
    SurfaceCalcFuelBedHeatSink => "surfaceCalcFuelBedHeatSink" = OFF;
    SurfaceCalcFuelBedLiveFraction => "surfaceCalcFuelBedLiveFraction" = OFF;
    SurfaceCalcFuelBedMextLive => "surfaceCalcFuelBedMextLive" = OFF;
    SurfaceCalcFuelBedMoisDead => "surfaceCalcFuelBedMoisDead" = OFF;
    SurfaceCalcFuelBedMoisLive => "surfaceCalcFuelBedMoisLive" = OFF;
    SurfaceCalcFuelBedPackingRatio => "surfaceCalcFuelBedPackingRatio" = OFF;
    SurfaceCalcFuelBedSigma => "surfaceCalcFuelBedSigma" = OFF;
    SurfaceCalcFuelLoadDead => "surfaceCalcFuelLoadDead" = OFF;
    SurfaceCalcFuelLoadDeadHerb => "surfaceCalcFuelLoadDeadHerb" = OFF;
    SurfaceCalcFuelLoadLive => "surfaceCalcFuelLoadLive" = OFF;
    SurfaceCalcFuelLoadTransferFraction => "surfaceCalcFuelLoadTransferFraction" = OFF;
    SurfaceCalcFuelLoadUndeadHerb => "surfaceCalcFuelLoadUndeadHerb" = OFF;
    SurfaceCalcPalmettoBedDepth => "surfaceCalcPalmettoBedDepth" = OFF;
    SurfaceCalcPalmettoLoadDead1 => "surfaceCalcPalmettoLoadDead1" = OFF;
    SurfaceCalcPalmettoLoadDead10 => "surfaceCalcPalmettoLoadDead10" = OFF;
    SurfaceCalcPalmettoLoadDeadFoliage => "surfaceCalcPalmettoLoadDeadFoliage" = OFF;
    SurfaceCalcPalmettoLoadLitter => "surfaceCalcPalmettoLoadLitter" = OFF;
    SurfaceCalcPalmettoLoadLive1 => "surfaceCalcPalmettoLoadLive1" = OFF;
    SurfaceCalcPalmettoLoadLive10 => "surfaceCalcPalmettoLoadLive10" = OFF;
    SurfaceCalcPalmettoLoadLiveFoliage => "surfaceCalcPalmettoLoadLiveFoliage" = OFF;
    SurfaceCalcSlopeReach => "surfaceCalcSlopeReach" = OFF;
    SurfaceCalcSlopeRise => "surfaceCalcSlopeRise" = OFF;
    SurfaceCalcSlopeSteepness => "surfaceCalcSlopeSteepness" = OFF;
    SurfaceCalcWindAdjFactor => "surfaceCalcWindAdjFactor" = OFF;
    SurfaceCalcWindAdjMethod => "surfaceCalcWindAdjMethod" = OFF;
    SurfaceCalcWindSpeedAtMidflame => "surfaceCalcWindSpeedAtMidflame" = OFF;

    // Surface options
    SurfaceConfDegreesWrtNorth => "surfaceConfDegreesWrtNorth" = OFF;
    SurfaceConfDegreesWrtUpslope => "surfaceConfDegreesWrtUpslope" = ON;
    SurfaceConfFuel2Dimensional => "surfaceConfFuel2Dimensional" = OFF;
    SurfaceConfFuel2DDepth => "surfaceConfFuel2DDepth" = int(10);
    SurfaceConfFuel2DLaterals => "surfaceConfFuel2DLaterals" = int(2);
    SurfaceConfFuel2DSamples => "surfaceConfFuel2DSamples" = int(10);
    SurfaceConfFuelAreaWeighted => "surfaceConfFuelAreaWeighted" = OFF;
    SurfaceConfFuelAspen => "surfaceConfFuelAspen" = OFF;
    SurfaceConfFuelHarmonicMean => "surfaceConfFuelHarmonicMean" = OFF;
    SurfaceConfFuelModels => "surfaceConfFuelModels" = ON;
    SurfaceConfFuelPalmettoGallberry => "surfaceConfFuelPalmettoGallberry" = OFF;
    SurfaceConfFuelParms => "surfaceConfFuelParms" = OFF;
    SurfaceConfLoadTransferCalc => "surfaceConfLoadTransferCalc" = ON;
    SurfaceConfLoadTransferInput => "surfaceConfLoadTransferInput" = OFF;
    SurfaceConfMoisLifeCat => "surfaceConfMoisLifeCat" = OFF;
    SurfaceConfMoisScenario => "surfaceConfMoisScenario" = OFF;
    SurfaceConfMoisTimeLag => "surfaceConfMoisTimeLag" = ON;
    SurfaceConfSlopeDegrees => "surfaceConfSlopeDegrees" = OFF;
    SurfaceConfSlopeDerived => "surfaceConfSlopeDerived" = OFF;
    SurfaceConfSlopeFraction => "surfaceConfSlopeFraction" = ON;
    SurfaceConfSlopeInput => "surfaceConfSlopeInput" = ON;
    SurfaceConfSpreadDirInput => "surfaceConfSpreadDirInput" = OFF;
    SurfaceConfSpreadDirMax => "surfaceConfSpreadDirMax" = ON;
    SurfaceConfWindDirInput => "surfaceConfWindDirInput" = OFF;
    SurfaceConfWindDirUpslope => "surfaceConfWindDirUpslope" = ON;
    SurfaceConfWindLimitApplied => "surfaceConfWindLimitApplied" = ON;
    SurfaceConfWindSpeedAt10M => "surfaceConfWindSpeedAt10M" = OFF;
    SurfaceConfWindSpeedAt10MCalc => "surfaceConfWindSpeedAt10MCalc" = OFF;
    SurfaceConfWindSpeedAt20Ft => "surfaceConfWindSpeedAt20Ft" = OFF;
    SurfaceConfWindSpeedAt20FtCalc => "surfaceConfWindSpeedAt20FtCalc" = OFF;
    SurfaceConfWindSpeedAtMidflame => "surfaceConfWindSpeedAtMidflame" = ON;
    SurfaceModuleActive => "surfaceModuleActive" = ON;

    // Weather
    WeatherCalcWthrCumulusBaseHt => "weatherCalcWthrCumulusBaseHt" = OFF;
    WeatherCalcWthrDewPointTemp => "weatherCalcWthrDewPointTemp" = OFF;
    WeatherCalcWthrHeatIndex => "weatherCalcWthrHeatIndex" = OFF;
    WeatherCalcWthrRelativeHumidity => "weatherCalcWthrRelativeHumidity" = ON;
    WeatherCalcWthrSummerSimmerIndex => "weatherCalcWthrSummerSimmerIndex" = OFF;
    WeatherCalcWthrWindChillTemp => "weatherCalcWthrWindChillTemp" = OFF;
    WeatherConfHumidityFromDewPoint => "weatherConfHumidityFromDewPoint" = ON;
    WeatherConfHumidityFromWetBulbElev => "weatherConfHumidityFromWetBulbElev" = OFF;
    WeatherModuleActive => "weatherModuleActive" = OFF;
}

/// Boolean and integer switches keyed by [`Prop`]
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDict {
    values: Vec<PropValue>,
}

impl Default for PropertyDict {
    fn default() -> Self {
        Self {
            values: Prop::ALL.iter().map(|p| p.default_value()).collect(),
        }
    }
}

impl PropertyDict {
    /// Dictionary holding every default
    pub fn new() -> Self {
        Self::default()
    }

    /// Boolean value; integer properties read as true when nonzero
    pub fn boolean(&self, prop: Prop) -> bool {
        match self.values[prop.index()] {
            PropValue::Bool(b) => b,
            PropValue::Int(i) => i != 0,
        }
    }

    /// Integer value; boolean properties read as 0 or 1
    pub fn integer(&self, prop: Prop) -> i64 {
        match self.values[prop.index()] {
            PropValue::Bool(b) => i64::from(b),
            PropValue::Int(i) => i,
        }
    }

    pub fn get(&self, prop: Prop) -> PropValue {
        self.values[prop.index()]
    }

    /// Sets a property; the value must have the default's type
    pub fn set(&mut self, prop: Prop, value: PropValue) -> Result<()> {
        let default = prop.default_value();
        if std::mem::discriminant(&default) != std::mem::discriminant(&value) {
            return Err(EqError::PropertyType {
                name: prop.name().to_string(),
                expected: default.type_name(),
            });
        }
        self.values[prop.index()] = value;
        Ok(())
    }

    pub fn set_bool(&mut self, prop: Prop, value: bool) -> Result<()> {
        self.set(prop, PropValue::Bool(value))
    }

    pub fn set_int(&mut self, prop: Prop, value: i64) -> Result<()> {
        self.set(prop, PropValue::Int(value))
    }

    /// Sets a property by external name
    pub fn set_by_name(&mut self, name: &str, value: PropValue) -> Result<()> {
        let prop = Prop::from_name(name).ok_or_else(|| EqError::UnknownProperty(name.to_string()))?;
        self.set(prop, value)
    }

    /// Sets `chosen` true and every other member of `group` false
    pub fn select(&mut self, group: &[Prop], chosen: Prop) {
        for &p in group {
            self.values[p.index()] = PropValue::Bool(p == chosen);
        }
    }

    /// Overlays a flat TOML table on the defaults
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let table: FxHashMap<String, PropValue> =
            toml::from_str(text).map_err(|e| EqError::Config(e.to_string()))?;
        let mut dict = Self::default();
        let mut names: Vec<_> = table.into_iter().collect();
        names.sort_by(|a, b| a.0.cmp(&b.0));
        for (name, value) in names {
            dict.set_by_name(&name, value).map_err(|e| match e {
                EqError::UnknownProperty(n) => EqError::Config(format!("unknown property \"{n}\"")),
                other => other,
            })?;
        }
        Ok(dict)
    }

    /// Reads a TOML file with [`PropertyDict::from_toml_str`]
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| EqError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&text)
    }

    /// Properties whose value differs from the default, by name
    pub fn overrides(&self) -> impl Iterator<Item = (&'static str, PropValue)> + '_ {
        Prop::ALL
            .iter()
            .filter(|p| self.values[p.index()] != p.default_value())
            .map(|p| (p.name(), self.values[p.index()]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let d = PropertyDict::new();
        assert!(d.boolean(Prop::SurfaceModuleActive));
        assert!(!d.boolean(Prop::CrownModuleActive));
        assert_eq!(d.integer(Prop::ContainConfMaxSteps), 10000);
        assert_eq!(d.overrides().count(), 0);
    }

    #[test]
    fn test_names_resolve() {
        for &p in Prop::ALL {
            assert_eq!(Prop::from_name(p.name()), Some(p));
        }
    }

    #[test]
    fn test_type_checked_set() {
        let mut d = PropertyDict::new();
        assert!(d.set_bool(Prop::ContainConfMinSteps, true).is_err());
        d.set_int(Prop::ContainConfMinSteps, 10).unwrap();
        assert_eq!(d.integer(Prop::ContainConfMinSteps), 10);
        assert_eq!(
            d.set_by_name("noSuchThing", PropValue::Bool(true)),
            Err(EqError::UnknownProperty("noSuchThing".to_string()))
        );
    }

    #[test]
    fn test_toml_overlay() {
        let text = r"
            surfaceConfFuelModels = false
            surfaceConfFuelHarmonicMean = true
            containConfMaxSteps = 500
        ";
        let d = PropertyDict::from_toml_str(text).unwrap();
        assert!(d.boolean(Prop::SurfaceConfFuelHarmonicMean));
        assert!(!d.boolean(Prop::SurfaceConfFuelModels));
        assert_eq!(d.integer(Prop::ContainConfMaxSteps), 500);
        assert!(d.boolean(Prop::SurfaceModuleActive));
        assert_eq!(d.overrides().count(), 3);
    }

    #[test]
    fn test_toml_rejects_unknown_and_mistyped() {
        assert!(matches!(
            PropertyDict::from_toml_str("bogus = true"),
            Err(EqError::Config(_))
        ));
        assert!(matches!(
            PropertyDict::from_toml_str("surfaceModuleActive = 3"),
            Err(EqError::PropertyType { .. })
        ));
        assert!(matches!(
            PropertyDict::from_toml_str("surfaceModuleActive ="),
            Err(EqError::Config(_))
        ));
    }

    #[test]
    fn test_select_group() {
        let mut d = PropertyDict::new();
        let group = [Prop::SurfaceConfMoisTimeLag, Prop::SurfaceConfMoisLifeCat, Prop::SurfaceConfMoisScenario];
        d.select(&group, Prop::SurfaceConfMoisScenario);
        assert!(!d.boolean(Prop::SurfaceConfMoisTimeLag));
        assert!(d.boolean(Prop::SurfaceConfMoisScenario));
    }
}
