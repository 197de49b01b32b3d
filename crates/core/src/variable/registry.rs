//! Compile-time variable registry
//!
//! Every variable the equation library reads or writes is a [`VarId`]
//! variant. The external name (`vSurfaceFireSpreadAtHead`, ...) stays stable
//! for drivers that address variables by string.

use super::items;
use serde::{Deserialize, Serialize};

/// Where a discrete variable's items come from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Items {
    /// Fixed list
    Static(&'static [&'static str]),
    /// Fuel-model catalog names
    FuelModels,
    /// Moisture-scenario catalog names
    MoistureScenarios,
}

/// Storage kind of a variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarKind {
    Continuous,
    Discrete(Items),
    /// Delimited numeric tokens; the native value mirrors the first token
    List,
    Text,
}

/// Static description of one variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VarSpec {
    pub kind: VarKind,
    pub native_units: &'static str,
    pub display_units: &'static str,
    pub decimals: u8,
}

const fn cont(native_units: &'static str, display_units: &'static str, decimals: u8) -> VarSpec {
    VarSpec {
        kind: VarKind::Continuous,
        native_units,
        display_units,
        decimals,
    }
}

const fn list(native_units: &'static str, display_units: &'static str, decimals: u8) -> VarSpec {
    VarSpec {
        kind: VarKind::List,
        native_units,
        display_units,
        decimals,
    }
}

const fn disc(items: &'static [&'static str]) -> VarSpec {
    VarSpec {
        kind: VarKind::Discrete(Items::Static(items)),
        native_units: "item",
        display_units: "item",
        decimals: 0,
    }
}

const fn fuel_models() -> VarSpec {
    VarSpec {
        kind: VarKind::Discrete(Items::FuelModels),
        native_units: "item",
        display_units: "item",
        decimals: 0,
    }
}

const fn scenarios() -> VarSpec {
    VarSpec {
        kind: VarKind::Discrete(Items::MoistureScenarios),
        native_units: "item",
        display_units: "item",
        decimals: 0,
    }
}

const fn text() -> VarSpec {
    VarSpec {
        kind: VarKind::Text,
        native_units: "text",
        display_units: "text",
        decimals: 0,
    }
}

macro_rules! variables {
    ($($variant:ident => $name:literal, $spec:expr;)+) => {
        /// Identifier of every variable in the store
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum VarId {
            $($variant,)+
        }

        impl VarId {
            /// All variables in declaration order
            pub const ALL: &'static [VarId] = &[$(VarId::$variant,)+];

            /// Number of variables
            pub const COUNT: usize = Self::ALL.len();

            /// Stable external name
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                }
            }

            /// Kind, units and formatting
            pub const fn spec(self) -> VarSpec {
                match self {
                    $(Self::$variant => $spec,)+
                }
            }

            /// Resolves an external name
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($name => Some(Self::$variant),)+
                    _ => None,
                }
            }

            /// Position in [`VarId::ALL`]
            pub const fn index(self) -> usize {
                self as usize
            }
        }
    };
}

variables! {
    ContainAttackBack => "vContainAttackBack", cont("ch","ch",1);
    ContainAttackDist => "vContainAttackDist", cont("ch","ch",0);
    ContainAttackHead => "vContainAttackHead", cont("ch","ch",1);
    ContainAttackPerimeter => "vContainAttackPerimeter", cont("ch","ch",1);
    ContainAttackSize => "vContainAttackSize", cont("ac","ac",2);
    ContainAttackTactic => "vContainAttackTactic", disc(items::ATTACK_TACTIC);
    ContainCost => "vContainCost", cont("$","$",0);
    ContainDiagram => "vContainDiagram", cont("ratio","ratio",0);
    ContainLimitDist => "vContainLimitDist", cont("ch","ch",0);
    ContainLine => "vContainLine", cont("ch","ch",0);
    ContainPoints => "vContainPoints", cont("count","count",0);
    ContainResourceArrival => "vContainResourceArrival", list("min","h",2);
    ContainResourceBaseCost => "vContainResourceBaseCost", list("$","$",0);
    ContainResourceDuration => "vContainResourceDuration", list("min","h",2);
    ContainResourceHourCost => "vContainResourceHourCost", list("$/h","$/h",0);
    ContainResourceName => "vContainResourceName", text();
    ContainResourceProd => "vContainResourceProd", list("ch/h","ch/h",1);
    ContainResourcesUsed => "vContainResourcesUsed", cont("count","count",0);
    ContainReportBack => "vContainReportBack", cont("ch","ch",1);
    ContainReportHead => "vContainReportHead", cont("ch","ch",1);
    ContainReportRatio => "vContainReportRatio", cont("ratio","ratio",2);
    ContainReportSize => "vContainReportSize", cont("ac","ac",1);
    ContainReportSpread => "vContainReportSpread", cont("ch/h","ch/h",1);
    ContainSize => "vContainSize", cont("ac","ac",1);
    ContainStatus => "vContainStatus", disc(items::CONTAIN_STATUS);
    ContainTime => "vContainTime", cont("min","h",1);
    ContainXMax => "vContainXMax", cont("ch","ch",1);
    ContainXMin => "vContainXMin", cont("ch","ch",1);
    ContainYMax => "vContainYMax", cont("ch","ch",1);
    CrownFireActiveCrown => "vCrownFireActiveCrown", disc(items::NO_YES);
    CrownFireActiveRatio => "vCrownFireActiveRatio", cont("ratio","ratio",2);
    CrownFireArea => "vCrownFireArea", cont("ac","ac",1);
    CrownFireCritCrownSpreadRate => "vCrownFireCritCrownSpreadRate", cont("ft/min","ch/h",1);
    CrownFireCritSurfFireInt => "vCrownFireCritSurfFireInt", cont("Btu/ft/s","Btu/ft/s",0);
    CrownFireCritSurfFlameLeng => "vCrownFireCritSurfFlameLeng", cont("ft","ft",1);
    CrownFireFlameLeng => "vCrownFireFlameLeng", cont("ft","ft",1);
    CrownFireFuelLoad => "vCrownFireFuelLoad", cont("lb/ft2","ton/ac",2);
    CrownFireHeatPerUnitArea => "vCrownFireHeatPerUnitArea", cont("Btu/ft2","Btu/ft2",0);
    CrownFireHeatPerUnitAreaCanopy => "vCrownFireHeatPerUnitAreaCanopy", cont("Btu/ft2","Btu/ft2",0);
    CrownFireLengthToWidth => "vCrownFireLengthToWidth", cont("ratio","ratio",2);
    CrownFireLineInt => "vCrownFireLineInt", cont("Btu/ft/s","Btu/ft/s",0);
    CrownFirePerimeter => "vCrownFirePerimeter", cont("ft","ch",1);
    CrownFirePowerOfFire => "vCrownFirePowerOfFire", cont("ft-lb/s/ft2","ft-lb/s/ft2",1);
    CrownFirePowerOfWind => "vCrownFirePowerOfWind", cont("ft-lb/s/ft2","ft-lb/s/ft2",1);
    CrownFirePowerRatio => "vCrownFirePowerRatio", cont("ratio","ratio",2);
    CrownFireSpreadDist => "vCrownFireSpreadDist", cont("ft","ch",1);
    CrownFireSpreadMapDist => "vCrownFireSpreadMapDist", cont("in","in",2);
    CrownFireSpreadRate => "vCrownFireSpreadRate", cont("ft/min","ch/h",1);
    CrownFireTransRatio => "vCrownFireTransRatio", cont("ratio","ratio",2);
    CrownFireTransToCrown => "vCrownFireTransToCrown", disc(items::NO_YES);
    CrownFireType => "vCrownFireType", disc(items::CROWN_FIRE_TYPE);
    CrownFireWindDriven => "vCrownFireWindDriven", disc(items::WIND_DRIVEN);
    DocDescription => "vDocDescription", text();
    DocFireAnalyst => "vDocFireAnalyst", text();
    DocFireName => "vDocFireName", text();
    DocFirePeriod => "vDocFirePeriod", text();
    DocRxAdminUnit => "vDocRxAdminUnit", text();
    DocRxName => "vDocRxName", text();
    DocRxPreparedBy => "vDocRxPreparedBy", text();
    DocTrainingCourse => "vDocTrainingCourse", text();
    DocTrainingExercise => "vDocTrainingExercise", text();
    DocTrainingTrainee => "vDocTrainingTrainee", text();
    IgnitionFirebrandFuelMois => "vIgnitionFirebrandFuelMois", cont("fraction","%",0);
    IgnitionFirebrandProb => "vIgnitionFirebrandProb", cont("fraction","%",0);
    IgnitionLightningDuffDepth => "vIgnitionLightningDuffDepth", cont("in","in",1);
    IgnitionLightningFuelMois => "vIgnitionLightningFuelMois", cont("fraction","%",0);
    IgnitionLightningFuelType => "vIgnitionLightningFuelType", disc(items::LIGHTNING_FUEL_TYPE);
    IgnitionLightningProb => "vIgnitionLightningProb", cont("fraction","%",0);
    MapContourCount => "vMapContourCount", cont("count","count",0);
    MapContourInterval => "vMapContourInterval", cont("ft","ft",0);
    MapDist => "vMapDist", cont("in","in",2);
    MapFraction => "vMapFraction", cont("ratio","ratio",0);
    MapScale => "vMapScale", cont("in/mi","in/mi",4);
    SafetyZoneEquipmentArea => "vSafetyZoneEquipmentArea", cont("ft2","ft2",0);
    SafetyZoneEquipmentNumber => "vSafetyZoneEquipmentNumber", cont("count","count",0);
    SafetyZonePersonnelArea => "vSafetyZonePersonnelArea", cont("ft2","ft2",0);
    SafetyZonePersonnelNumber => "vSafetyZonePersonnelNumber", cont("count","count",0);
    SafetyZoneRadius => "vSafetyZoneRadius", cont("ft","ft",0);
    SafetyZoneSepDist => "vSafetyZoneSepDist", cont("ft","ft",0);
    SafetyZoneSize => "vSafetyZoneSize", cont("ft2","ac",2);
    SiteAspectDirFromCompass => "vSiteAspectDirFromCompass", disc(items::COMPASS);
    SiteAspectDirFromNorth => "vSiteAspectDirFromNorth", cont("deg","deg",0);
    SiteElevation => "vSiteElevation", cont("ft","ft",0);
    SiteLatitude => "vSiteLatitude", cont("deg","deg",2);
    SiteLongitude => "vSiteLongitude", cont("deg","deg",2);
    SiteRidgeToValleyDist => "vSiteRidgeToValleyDist", cont("mi","mi",2);
    SiteRidgeToValleyElev => "vSiteRidgeToValleyElev", cont("ft","ft",0);
    SiteRidgeToValleyMapDist => "vSiteRidgeToValleyMapDist", cont("in","in",2);
    SiteSlopeDegrees => "vSiteSlopeDegrees", cont("deg","deg",0);
    SiteSlopeFraction => "vSiteSlopeFraction", cont("fraction","%",0);
    SiteSlopeReach => "vSiteSlopeReach", cont("ft","ft",0);
    SiteSlopeRise => "vSiteSlopeRise", cont("ft","ft",0);
    SiteSunShading => "vSiteSunShading", cont("fraction","%",0);
    SiteTimeZone => "vSiteTimeZone", text();
    SiteUpslopeDirFromNorth => "vSiteUpslopeDirFromNorth", cont("deg","deg",0);
    SpotCoverHtBurningPile => "vSpotCoverHtBurningPile", cont("ft","ft",0);
    SpotCoverHtSurfaceFire => "vSpotCoverHtSurfaceFire", cont("ft","ft",0);
    SpotCoverHtTorchingTrees => "vSpotCoverHtTorchingTrees", cont("ft","ft",0);
    SpotDistBurningPile => "vSpotDistBurningPile", cont("mi","mi",2);
    SpotDistSurfaceFire => "vSpotDistSurfaceFire", cont("mi","mi",2);
    SpotDistTorchingTrees => "vSpotDistTorchingTrees", cont("mi","mi",2);
    SpotFirebrandDriftSurfaceFire => "vSpotFirebrandDriftSurfaceFire", cont("mi","mi",2);
    SpotFirebrandHtBurningPile => "vSpotFirebrandHtBurningPile", cont("ft","ft",0);
    SpotFirebrandHtSurfaceFire => "vSpotFirebrandHtSurfaceFire", cont("ft","ft",0);
    SpotFirebrandHtTorchingTrees => "vSpotFirebrandHtTorchingTrees", cont("ft","ft",0);
    SpotFlameDurTorchingTrees => "vSpotFlameDurTorchingTrees", cont("min","min",2);
    SpotFlameHtTorchingTrees => "vSpotFlameHtTorchingTrees", cont("ft","ft",1);
    SpotFlameRatioTorchingTrees => "vSpotFlameRatioTorchingTrees", cont("ratio","ratio",2);
    SpotFlatDistBurningPile => "vSpotFlatDistBurningPile", cont("mi","mi",2);
    SpotFlatDistSurfaceFire => "vSpotFlatDistSurfaceFire", cont("mi","mi",2);
    SpotFlatDistTorchingTrees => "vSpotFlatDistTorchingTrees", cont("mi","mi",2);
    SpotFireSource => "vSpotFireSource", disc(items::FIRE_SOURCE);
    SpotMapDistBurningPile => "vSpotMapDistBurningPile", cont("in","in",2);
    SpotMapDistSurfaceFire => "vSpotMapDistSurfaceFire", cont("in","in",2);
    SpotMapDistTorchingTrees => "vSpotMapDistTorchingTrees", cont("in","in",2);
    SpotTorchingTrees => "vSpotTorchingTrees", cont("count","count",0);
    SurfaceFireArea => "vSurfaceFireArea", cont("ac","ac",1);
    SurfaceFireCharacteristicsDiagram => "vSurfaceFireCharacteristicsDiagram", cont("ratio","ratio",0);
    SurfaceFireDistAtBack => "vSurfaceFireDistAtBack", cont("ft","ch",1);
    SurfaceFireDistAtHead => "vSurfaceFireDistAtHead", cont("ft","ch",1);
    SurfaceFireDistAtVector => "vSurfaceFireDistAtVector", cont("ft","ch",1);
    SurfaceFireEccentricity => "vSurfaceFireEccentricity", cont("ratio","ratio",2);
    SurfaceFireEffWindAtHead => "vSurfaceFireEffWindAtHead", cont("mi/h","mi/h",1);
    SurfaceFireEffWindAtVector => "vSurfaceFireEffWindAtVector", cont("mi/h","mi/h",1);
    SurfaceFireElapsedTime => "vSurfaceFireElapsedTime", cont("min","h",1);
    SurfaceFireFlameAngleAtVector => "vSurfaceFireFlameAngleAtVector", cont("deg","deg",0);
    SurfaceFireFlameHtAtVector => "vSurfaceFireFlameHtAtVector", cont("ft","ft",1);
    SurfaceFireFlameHtPile => "vSurfaceFireFlameHtPile", cont("ft","ft",1);
    SurfaceFireFlameLengAtHead => "vSurfaceFireFlameLengAtHead", cont("ft","ft",1);
    SurfaceFireFlameLengAtVector => "vSurfaceFireFlameLengAtVector", cont("ft","ft",1);
    SurfaceFireHeatPerUnitArea => "vSurfaceFireHeatPerUnitArea", cont("Btu/ft2","Btu/ft2",0);
    SurfaceFireHeatSource => "vSurfaceFireHeatSource", cont("Btu/ft2/min","Btu/ft2/min",0);
    SurfaceFireLengDist => "vSurfaceFireLengDist", cont("ft","ch",1);
    SurfaceFireLengMapDist => "vSurfaceFireLengMapDist", cont("in","in",2);
    SurfaceFireLengthToWidth => "vSurfaceFireLengthToWidth", cont("ratio","ratio",2);
    SurfaceFireLineIntAtHead => "vSurfaceFireLineIntAtHead", cont("Btu/ft/s","Btu/ft/s",0);
    SurfaceFireLineIntAtVector => "vSurfaceFireLineIntAtVector", cont("Btu/ft/s","Btu/ft/s",0);
    SurfaceFireMapDistAtBack => "vSurfaceFireMapDistAtBack", cont("in","in",2);
    SurfaceFireMapDistAtHead => "vSurfaceFireMapDistAtHead", cont("in","in",2);
    SurfaceFireMapDistAtVector => "vSurfaceFireMapDistAtVector", cont("in","in",2);
    SurfaceFireMaxDirDiagram => "vSurfaceFireMaxDirDiagram", cont("ratio","ratio",0);
    SurfaceFireMaxDirFromNorth => "vSurfaceFireMaxDirFromNorth", cont("deg","deg",0);
    SurfaceFireMaxDirFromUpslope => "vSurfaceFireMaxDirFromUpslope", cont("deg","deg",0);
    SurfaceFireNoWindRate => "vSurfaceFireNoWindRate", cont("ft/min","ch/h",1);
    SurfaceFirePerimeter => "vSurfaceFirePerimeter", cont("ft","ch",1);
    SurfaceFirePropagatingFlux => "vSurfaceFirePropagatingFlux", cont("fraction","fraction",4);
    SurfaceFireReactionInt => "vSurfaceFireReactionInt", cont("Btu/ft2/min","Btu/ft2/min",0);
    SurfaceFireReactionIntDead => "vSurfaceFireReactionIntDead", cont("Btu/ft2/min","Btu/ft2/min",0);
    SurfaceFireReactionIntLive => "vSurfaceFireReactionIntLive", cont("Btu/ft2/min","Btu/ft2/min",0);
    SurfaceFireResidenceTime => "vSurfaceFireResidenceTime", cont("min","min",3);
    SurfaceFireScorchHtAtVector => "vSurfaceFireScorchHtAtVector", cont("ft","ft",0);
    SurfaceFireSeverityAspen => "vSurfaceFireSeverityAspen", disc(items::ASPEN_SEVERITY);
    SurfaceFireShapeDiagram => "vSurfaceFireShapeDiagram", cont("ratio","ratio",0);
    SurfaceFireSlopeFactor => "vSurfaceFireSlopeFactor", cont("ratio","ratio",2);
    SurfaceFireSpreadAtBack => "vSurfaceFireSpreadAtBack", cont("ft/min","ch/h",1);
    SurfaceFireSpreadAtHead => "vSurfaceFireSpreadAtHead", cont("ft/min","ch/h",1);
    SurfaceFireSpreadAtVector => "vSurfaceFireSpreadAtVector", cont("ft/min","ch/h",1);
    SurfaceFireVectorBeta => "vSurfaceFireVectorBeta", cont("deg","deg",0);
    SurfaceFireVectorDirFromCompass => "vSurfaceFireVectorDirFromCompass", disc(items::COMPASS);
    SurfaceFireVectorDirFromNorth => "vSurfaceFireVectorDirFromNorth", cont("deg","deg",0);
    SurfaceFireVectorDirFromUpslope => "vSurfaceFireVectorDirFromUpslope", cont("deg","deg",0);
    SurfaceFireWidthDist => "vSurfaceFireWidthDist", cont("ft","ch",1);
    SurfaceFireWidthMapDist => "vSurfaceFireWidthMapDist", cont("in","in",2);
    SurfaceFireWindFactor => "vSurfaceFireWindFactor", cont("ratio","ratio",2);
    SurfaceFireWindSpeedFlag => "vSurfaceFireWindSpeedFlag", disc(items::NO_YES);
    SurfaceFireWindSpeedLimit => "vSurfaceFireWindSpeedLimit", cont("mi/h","mi/h",1);
    SurfaceFuelAspenCuring => "vSurfaceFuelAspenCuring", cont("fraction","%",0);
    SurfaceFuelAspenLoadDead1 => "vSurfaceFuelAspenLoadDead1", cont("lb/ft2","ton/ac",2);
    SurfaceFuelAspenLoadDead10 => "vSurfaceFuelAspenLoadDead10", cont("lb/ft2","ton/ac",2);
    SurfaceFuelAspenLoadLiveHerb => "vSurfaceFuelAspenLoadLiveHerb", cont("lb/ft2","ton/ac",2);
    SurfaceFuelAspenLoadLiveWoody => "vSurfaceFuelAspenLoadLiveWoody", cont("lb/ft2","ton/ac",2);
    SurfaceFuelAspenSavrDead1 => "vSurfaceFuelAspenSavrDead1", cont("ft2/ft3","ft2/ft3",0);
    SurfaceFuelAspenSavrDead10 => "vSurfaceFuelAspenSavrDead10", cont("ft2/ft3","ft2/ft3",0);
    SurfaceFuelAspenSavrLiveHerb => "vSurfaceFuelAspenSavrLiveHerb", cont("ft2/ft3","ft2/ft3",0);
    SurfaceFuelAspenSavrLiveWoody => "vSurfaceFuelAspenSavrLiveWoody", cont("ft2/ft3","ft2/ft3",0);
    SurfaceFuelAspenType => "vSurfaceFuelAspenType", disc(items::ASPEN_TYPE);
    SurfaceFuelBedBetaRatio => "vSurfaceFuelBedBetaRatio", cont("ratio","ratio",2);
    SurfaceFuelBedBulkDensity => "vSurfaceFuelBedBulkDensity", cont("lb/ft3","lb/ft3",4);
    SurfaceFuelBedCoverage1 => "vSurfaceFuelBedCoverage1", cont("fraction","%",0);
    SurfaceFuelBedDeadFraction => "vSurfaceFuelBedDeadFraction", cont("fraction","fraction",2);
    SurfaceFuelBedLiveFraction => "vSurfaceFuelBedLiveFraction", cont("fraction","fraction",2);
    SurfaceFuelBedDepth => "vSurfaceFuelBedDepth", cont("ft","ft",2);
    SurfaceFuelBedHeatSink => "vSurfaceFuelBedHeatSink", cont("Btu/ft3","Btu/ft3",1);
    SurfaceFuelBedMextDead => "vSurfaceFuelBedMextDead", cont("fraction","%",0);
    SurfaceFuelBedMextLive => "vSurfaceFuelBedMextLive", cont("fraction","%",0);
    SurfaceFuelBedModel => "vSurfaceFuelBedModel", fuel_models();
    SurfaceFuelBedModel1 => "vSurfaceFuelBedModel1", fuel_models();
    SurfaceFuelBedModel2 => "vSurfaceFuelBedModel2", fuel_models();
    SurfaceFuelBedMoisDead => "vSurfaceFuelBedMoisDead", cont("fraction","%",0);
    SurfaceFuelBedMoisLive => "vSurfaceFuelBedMoisLive", cont("fraction","%",0);
    SurfaceFuelBedPackingRatio => "vSurfaceFuelBedPackingRatio", cont("ratio","ratio",4);
    SurfaceFuelBedSigma => "vSurfaceFuelBedSigma", cont("ft2/ft3","ft2/ft3",0);
    SurfaceFuelHeatDead => "vSurfaceFuelHeatDead", cont("Btu/lb","Btu/lb",0);
    SurfaceFuelHeatLive => "vSurfaceFuelHeatLive", cont("Btu/lb","Btu/lb",0);
    SurfaceFuelLoadDead => "vSurfaceFuelLoadDead", cont("lb/ft2","ton/ac",2);
    SurfaceFuelLoadDead1 => "vSurfaceFuelLoadDead1", cont("lb/ft2","ton/ac",2);
    SurfaceFuelLoadDead10 => "vSurfaceFuelLoadDead10", cont("lb/ft2","ton/ac",2);
    SurfaceFuelLoadDead100 => "vSurfaceFuelLoadDead100", cont("lb/ft2","ton/ac",2);
    SurfaceFuelLoadDeadHerb => "vSurfaceFuelLoadDeadHerb", cont("lb/ft2","ton/ac",2);
    SurfaceFuelLoadLive => "vSurfaceFuelLoadLive", cont("lb/ft2","ton/ac",2);
    SurfaceFuelLoadLiveHerb => "vSurfaceFuelLoadLiveHerb", cont("lb/ft2","ton/ac",2);
    SurfaceFuelLoadLiveWood => "vSurfaceFuelLoadLiveWood", cont("lb/ft2","ton/ac",2);
    SurfaceFuelLoadTransferEq => "vSurfaceFuelLoadTransferEq", disc(items::LOAD_TRANSFER_EQ);
    SurfaceFuelLoadTransferFraction => "vSurfaceFuelLoadTransferFraction", cont("fraction","%",0);
    SurfaceFuelLoadUndeadHerb => "vSurfaceFuelLoadUndeadHerb", cont("lb/ft2","ton/ac",2);
    SurfaceFuelMoisDead1 => "vSurfaceFuelMoisDead1", cont("fraction","%",0);
    SurfaceFuelMoisDead10 => "vSurfaceFuelMoisDead10", cont("fraction","%",0);
    SurfaceFuelMoisDead100 => "vSurfaceFuelMoisDead100", cont("fraction","%",0);
    SurfaceFuelMoisDead1000 => "vSurfaceFuelMoisDead1000", cont("fraction","%",0);
    SurfaceFuelMoisLifeDead => "vSurfaceFuelMoisLifeDead", cont("fraction","%",0);
    SurfaceFuelMoisLifeLive => "vSurfaceFuelMoisLifeLive", cont("fraction","%",0);
    SurfaceFuelMoisLiveHerb => "vSurfaceFuelMoisLiveHerb", cont("fraction","%",0);
    SurfaceFuelMoisLiveWood => "vSurfaceFuelMoisLiveWood", cont("fraction","%",0);
    SurfaceFuelMoisScenario => "vSurfaceFuelMoisScenario", scenarios();
    SurfaceFuelPalmettoAge => "vSurfaceFuelPalmettoAge", cont("yr","yr",1);
    SurfaceFuelPalmettoCover => "vSurfaceFuelPalmettoCover", cont("fraction","%",0);
    SurfaceFuelPalmettoHeight => "vSurfaceFuelPalmettoHeight", cont("ft","ft",1);
    SurfaceFuelPalmettoLoadDead1 => "vSurfaceFuelPalmettoLoadDead1", cont("lb/ft2","ton/ac",2);
    SurfaceFuelPalmettoLoadDead10 => "vSurfaceFuelPalmettoLoadDead10", cont("lb/ft2","ton/ac",2);
    SurfaceFuelPalmettoLoadDeadFoliage => "vSurfaceFuelPalmettoLoadDeadFoliage", cont("lb/ft2","ton/ac",2);
    SurfaceFuelPalmettoLoadLitter => "vSurfaceFuelPalmettoLoadLitter", cont("lb/ft2","ton/ac",2);
    SurfaceFuelPalmettoLoadLive1 => "vSurfaceFuelPalmettoLoadLive1", cont("lb/ft2","ton/ac",2);
    SurfaceFuelPalmettoLoadLive10 => "vSurfaceFuelPalmettoLoadLive10", cont("lb/ft2","ton/ac",2);
    SurfaceFuelPalmettoLoadLiveFoliage => "vSurfaceFuelPalmettoLoadLiveFoliage", cont("lb/ft2","ton/ac",2);
    SurfaceFuelPalmettoOverstoryBasalArea => "vSurfaceFuelPalmettoOverstoryBasalArea", cont("ft2","ft2",0);
    SurfaceFuelSavrDead1 => "vSurfaceFuelSavrDead1", cont("ft2/ft3","ft2/ft3",0);
    SurfaceFuelSavrLiveHerb => "vSurfaceFuelSavrLiveHerb", cont("ft2/ft3","ft2/ft3",0);
    SurfaceFuelSavrLiveWood => "vSurfaceFuelSavrLiveWood", cont("ft2/ft3","ft2/ft3",0);
    SurfaceFuelTemp => "vSurfaceFuelTemp", cont("F","F",0);
    TimeIntegerDate => "vTimeIntegerDate", cont("yyyymmdd","yyyymmdd",0);
    TimeJulianDate => "vTimeJulianDate", cont("days","days",1);
    TreeBarkThickness => "vTreeBarkThickness", cont("in","in",2);
    TreeCanopyBulkDens => "vTreeCanopyBulkDens", cont("lb/ft3","kg/m3",3);
    TreeCanopyCover => "vTreeCanopyCover", cont("fraction","%",0);
    TreeCanopyCrownFraction => "vTreeCanopyCrownFraction", cont("fraction","%",0);
    TreeCount => "vTreeCount", cont("count","count",0);
    TreeCoverHt => "vTreeCoverHt", cont("ft","ft",0);
    TreeCoverHtDownwind => "vTreeCoverHtDownwind", cont("ft","ft",0);
    TreeCrownBaseHt => "vTreeCrownBaseHt", cont("ft","ft",1);
    TreeCrownLengFractionScorchedAtVector => "vTreeCrownLengFractionScorchedAtVector", cont("fraction","%",0);
    TreeCrownLengScorchedAtVector => "vTreeCrownLengScorchedAtVector", cont("ft","ft",1);
    TreeCrownRatio => "vTreeCrownRatio", cont("fraction","%",0);
    TreeCrownVolScorchedAtVector => "vTreeCrownVolScorchedAtVector", cont("fraction","%",0);
    TreeDbh => "vTreeDbh", cont("in","in",1);
    TreeFoliarMois => "vTreeFoliarMois", cont("fraction","%",0);
    TreeHt => "vTreeHt", cont("ft","ft",0);
    TreeMortalityCountAtVector => "vTreeMortalityCountAtVector", cont("count","count",0);
    TreeMortalityRateAspenAtVector => "vTreeMortalityRateAspenAtVector", cont("fraction","%",0);
    TreeMortalityRateAtVector => "vTreeMortalityRateAtVector", cont("fraction","%",0);
    TreeSpecies => "vTreeSpecies", disc(items::SPECIES);
    TreeSpeciesMortality => "vTreeSpeciesMortality", disc(items::SPECIES_MORTALITY);
    TreeSpeciesSpot => "vTreeSpeciesSpot", disc(items::SPECIES_SPOT);
    WindAdjFactor => "vWindAdjFactor", cont("ratio","ratio",2);
    WindAdjMethod => "vWindAdjMethod", disc(items::WIND_ADJ_METHOD);
    WindDirFromCompass => "vWindDirFromCompass", disc(items::COMPASS);
    WindDirFromNorth => "vWindDirFromNorth", cont("deg","deg",0);
    WindDirFromUpslope => "vWindDirFromUpslope", cont("deg","deg",0);
    WindSpeedAt10M => "vWindSpeedAt10M", cont("mi/h","mi/h",1);
    WindSpeedAt20Ft => "vWindSpeedAt20Ft", cont("mi/h","mi/h",1);
    WindSpeedAtMidflame => "vWindSpeedAtMidflame", cont("mi/h","mi/h",1);
    WthrAirTemp => "vWthrAirTemp", cont("F","F",0);
    WthrCumulusBaseHt => "vWthrCumulusBaseHt", cont("ft","ft",0);
    WthrDewPointTemp => "vWthrDewPointTemp", cont("F","F",0);
    WthrHeatIndex => "vWthrHeatIndex", cont("F","F",0);
    WthrLightningStrikeType => "vWthrLightningStrikeType", disc(items::LIGHTNING_CHARGE);
    WthrRelativeHumidity => "vWthrRelativeHumidity", cont("%","%",0);
    WthrSummerSimmerIndex => "vWthrSummerSimmerIndex", cont("F","F",0);
    WthrWetBulbTemp => "vWthrWetBulbTemp", cont("F","F",0);
    WthrWindChillTemp => "vWthrWindChillTemp", cont("F","F",0);
}
