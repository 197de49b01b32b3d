//! Compile-time node registry
//!
//! [`FunId`] variants are declared in execution order. Each carries its
//! external name and the variables it reads and writes, which the graph uses
//! for tracing and for deriving the leaf inputs of the active subgraph.
//! Particle-level reads and writes are not listed.

use crate::variable::VarId;

macro_rules! functions {
    ($( $id:ident => $name:literal, [$($input:ident),* $(,)?] => [$($output:ident),* $(,)?]; )*) => {
        /// Identifier of a computation node
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum FunId {
            $($id,)*
        }

        impl FunId {
            /// Every node in execution order
            pub const ALL: &'static [FunId] = &[$(FunId::$id,)*];
            pub const COUNT: usize = Self::ALL.len();

            /// Stable external name
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(FunId::$id => $name,)*
                }
            }

            /// Variables read by the node
            #[must_use]
            pub const fn inputs(self) -> &'static [VarId] {
                match self {
                    $(FunId::$id => &[$(VarId::$input),*],)*
                }
            }

            /// Variables written by the node
            #[must_use]
            pub const fn outputs(self) -> &'static [VarId] {
                match self {
                    $(FunId::$id => &[$(VarId::$output),*],)*
                }
            }

            /// Resolves an external name
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($name => Some(FunId::$id),)*
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

functions! {
    // Time, map and site
    TimeJulianDate => "fTimeJulianDate", [TimeIntegerDate] => [TimeJulianDate];
    MapScale => "fMapScale", [MapFraction] => [MapScale];
    MapSlope => "fMapSlope", [MapContourInterval, MapContourCount, MapFraction, MapDist]
        => [SiteSlopeDegrees, SiteSlopeRise, SiteSlopeReach];
    SiteSlopeFraction => "fSiteSlopeFraction", [SiteSlopeDegrees] => [SiteSlopeFraction];
    SiteAspectDirFromNorth => "fSiteAspectDirFromNorth", [SiteAspectDirFromCompass] => [SiteAspectDirFromNorth];
    SiteUpslopeDirFromNorth => "fSiteUpslopeDirFromNorth", [SiteAspectDirFromNorth] => [SiteUpslopeDirFromNorth];
    SiteRidgeToValleyDist => "fSiteRidgeToValleyDist", [SiteRidgeToValleyMapDist, MapScale] => [SiteRidgeToValleyDist];

    // Wind direction
    WindDirFromNorth => "fWindDirFromNorth", [WindDirFromCompass] => [WindDirFromNorth];
    WindDirFromUpslope => "fWindDirFromUpslope", [SiteUpslopeDirFromNorth, WindDirFromNorth] => [WindDirFromUpslope];

    // Fuel moisture by class and scenario
    SurfaceFuelMoisLifeClass => "fSurfaceFuelMoisLifeClass", [SurfaceFuelMoisLifeDead, SurfaceFuelMoisLifeLive]
        => [SurfaceFuelMoisDead1, SurfaceFuelMoisDead10, SurfaceFuelMoisDead100, SurfaceFuelMoisDead1000,
            SurfaceFuelMoisLiveHerb, SurfaceFuelMoisLiveWood];
    SurfaceFuelMoisScenarioModel => "fSurfaceFuelMoisScenarioModel", [SurfaceFuelMoisScenario]
        => [SurfaceFuelMoisDead1, SurfaceFuelMoisDead10, SurfaceFuelMoisDead100, SurfaceFuelMoisDead1000,
            SurfaceFuelMoisLiveHerb, SurfaceFuelMoisLiveWood];

    // Fuel bed
    SurfaceFuelBedModel => "fSurfaceFuelBedModel", [SurfaceFuelBedModel]
        => [SurfaceFuelLoadTransferEq, SurfaceFuelBedDepth, SurfaceFuelBedMextDead, SurfaceFuelHeatDead,
            SurfaceFuelHeatLive, SurfaceFuelLoadDead1, SurfaceFuelLoadDead10, SurfaceFuelLoadDead100,
            SurfaceFuelLoadLiveHerb, SurfaceFuelLoadLiveWood, SurfaceFuelSavrDead1, SurfaceFuelSavrLiveHerb,
            SurfaceFuelSavrLiveWood];
    SurfaceFuelBedParms => "fSurfaceFuelBedParms",
        [SurfaceFuelLoadDead1, SurfaceFuelLoadDead10, SurfaceFuelLoadDead100, SurfaceFuelLoadLiveHerb,
         SurfaceFuelLoadLiveWood, SurfaceFuelHeatDead, SurfaceFuelHeatLive, SurfaceFuelSavrDead1,
         SurfaceFuelSavrLiveHerb, SurfaceFuelSavrLiveWood] => [];
    SurfaceFuelPalmettoModel => "fSurfaceFuelPalmettoModel",
        [SurfaceFuelPalmettoAge, SurfaceFuelPalmettoCover, SurfaceFuelPalmettoHeight,
         SurfaceFuelPalmettoOverstoryBasalArea]
        => [SurfaceFuelBedDepth, SurfaceFuelBedMextDead, SurfaceFuelPalmettoLoadDead1,
            SurfaceFuelPalmettoLoadDead10, SurfaceFuelPalmettoLoadDeadFoliage, SurfaceFuelPalmettoLoadLitter,
            SurfaceFuelPalmettoLoadLive1, SurfaceFuelPalmettoLoadLive10, SurfaceFuelPalmettoLoadLiveFoliage];
    SurfaceFuelPalmettoParms => "fSurfaceFuelPalmettoParms",
        [SurfaceFuelPalmettoLoadDead1, SurfaceFuelPalmettoLoadDead10, SurfaceFuelPalmettoLoadDeadFoliage,
         SurfaceFuelPalmettoLoadLive1, SurfaceFuelPalmettoLoadLive10, SurfaceFuelPalmettoLoadLiveFoliage,
         SurfaceFuelPalmettoLoadLitter] => [];
    SurfaceFuelAspenModel => "fSurfaceFuelAspenModel", [SurfaceFuelAspenCuring, SurfaceFuelAspenType]
        => [SurfaceFuelBedDepth, SurfaceFuelBedMextDead, SurfaceFuelAspenLoadDead1, SurfaceFuelAspenLoadDead10,
            SurfaceFuelAspenLoadLiveHerb, SurfaceFuelAspenLoadLiveWoody, SurfaceFuelAspenSavrDead1,
            SurfaceFuelAspenSavrDead10, SurfaceFuelAspenSavrLiveHerb, SurfaceFuelAspenSavrLiveWoody];
    SurfaceFuelAspenParms => "fSurfaceFuelAspenParms",
        [SurfaceFuelAspenLoadDead1, SurfaceFuelAspenLoadDead10, SurfaceFuelAspenLoadLiveHerb,
         SurfaceFuelAspenLoadLiveWoody, SurfaceFuelAspenSavrDead1, SurfaceFuelAspenSavrDead10,
         SurfaceFuelAspenSavrLiveHerb, SurfaceFuelAspenSavrLiveWoody] => [];
    SurfaceFuelLoadTransferFraction => "fSurfaceFuelLoadTransferFraction",
        [SurfaceFuelMoisLiveHerb, SurfaceFuelLoadTransferEq] => [SurfaceFuelLoadTransferFraction];
    SurfaceFuelMoisTimeLag => "fSurfaceFuelMoisTimeLag",
        [SurfaceFuelMoisDead1, SurfaceFuelMoisDead10, SurfaceFuelMoisDead100, SurfaceFuelMoisDead1000,
         SurfaceFuelMoisLiveHerb, SurfaceFuelMoisLiveWood] => [];
    SurfaceFuelBedIntermediates => "fSurfaceFuelBedIntermediates",
        [SurfaceFuelLoadTransferEq, SurfaceFuelLoadTransferFraction, SurfaceFuelBedDepth, SurfaceFuelBedMextDead]
        => [SurfaceFuelBedSigma, SurfaceFuelBedBulkDensity, SurfaceFuelBedPackingRatio, SurfaceFuelBedBetaRatio,
            SurfaceFuelBedDeadFraction, SurfaceFuelBedLiveFraction, SurfaceFuelLoadDeadHerb,
            SurfaceFuelLoadUndeadHerb, SurfaceFuelLoadDead, SurfaceFuelLoadLive];
    SurfaceFuelBedHeatSink => "fSurfaceFuelBedHeatSink", [SurfaceFuelBedBulkDensity, SurfaceFuelBedMextDead]
        => [SurfaceFuelBedMoisDead, SurfaceFuelBedMoisLive, SurfaceFuelBedMextLive, SurfaceFuelBedHeatSink];

    // Canopy and wind speed
    TreeCrownRatio => "fTreeCrownRatio", [TreeCrownBaseHt, TreeCoverHt] => [TreeCrownRatio];
    TreeCrownBaseHt => "fTreeCrownBaseHt", [TreeCrownRatio, TreeHt] => [TreeCrownBaseHt];
    WindAdjFactor => "fWindAdjFactor", [TreeCanopyCover, TreeCoverHt, TreeCrownRatio, SurfaceFuelBedDepth]
        => [WindAdjFactor, WindAdjMethod, TreeCanopyCrownFraction];
    WindSpeedAt20Ft => "fWindSpeedAt20Ft", [WindSpeedAt10M] => [WindSpeedAt20Ft];
    WindSpeedAtMidflame => "fWindSpeedAtMidflame", [WindSpeedAt20Ft, WindAdjFactor] => [WindSpeedAtMidflame];

    // Surface fire
    SurfaceFireResidenceTime => "fSurfaceFireResidenceTime", [SurfaceFuelBedSigma] => [SurfaceFireResidenceTime];
    SurfaceFirePropagatingFlux => "fSurfaceFirePropagatingFlux",
        [SurfaceFuelBedPackingRatio, SurfaceFuelBedSigma] => [SurfaceFirePropagatingFlux];
    SurfaceFireReactionInt => "fSurfaceFireReactionInt",
        [SurfaceFuelBedMextDead, SurfaceFuelBedMoisDead, SurfaceFuelBedMextLive, SurfaceFuelBedMoisLive]
        => [SurfaceFireReactionInt, SurfaceFireReactionIntDead, SurfaceFireReactionIntLive];
    SurfaceFireNoWindRate => "fSurfaceFireNoWindRate",
        [SurfaceFuelBedHeatSink, SurfaceFireReactionInt, SurfaceFirePropagatingFlux] => [SurfaceFireNoWindRate];
    SurfaceFireSpreadAtHead => "fSurfaceFireSpreadAtHead",
        [SurfaceFireNoWindRate, SurfaceFireReactionInt, SiteSlopeFraction, WindSpeedAtMidflame, WindDirFromUpslope]
        => [SurfaceFireSpreadAtHead, SurfaceFireMaxDirFromUpslope, SurfaceFireEffWindAtHead,
            SurfaceFireWindSpeedLimit, SurfaceFireWindSpeedFlag, SurfaceFireWindFactor, SurfaceFireSlopeFactor];
    SurfaceFireLineIntAtHead => "fSurfaceFireLineIntAtHead",
        [SurfaceFireResidenceTime, SurfaceFireSpreadAtHead, SurfaceFireReactionInt] => [SurfaceFireLineIntAtHead];
    SurfaceFireFlameLengAtHead => "fSurfaceFireFlameLengAtHead", [SurfaceFireLineIntAtHead]
        => [SurfaceFireFlameLengAtHead];
    SurfaceFireLengthToWidth => "fSurfaceFireLengthToWidth", [SurfaceFireEffWindAtHead] => [SurfaceFireLengthToWidth];
    SurfaceFireEccentricity => "fSurfaceFireEccentricity", [SurfaceFireLengthToWidth] => [SurfaceFireEccentricity];
    SurfaceFireVectorDirFromNorth => "fSurfaceFireVectorDirFromNorth", [SurfaceFireVectorDirFromCompass]
        => [SurfaceFireVectorDirFromNorth];
    SurfaceFireVectorDirFromUpslope => "fSurfaceFireVectorDirFromUpslope",
        [SiteUpslopeDirFromNorth, SurfaceFireVectorDirFromNorth] => [SurfaceFireVectorDirFromUpslope];
    SurfaceFireVectorBeta => "fSurfaceFireVectorBeta",
        [SurfaceFireMaxDirFromUpslope, SurfaceFireVectorDirFromUpslope] => [SurfaceFireVectorBeta];
    SurfaceFireSpreadAtBeta => "fSurfaceFireSpreadAtBeta",
        [SurfaceFireEccentricity, SurfaceFireSpreadAtHead, SurfaceFireVectorBeta] => [SurfaceFireSpreadAtVector];
    SurfaceFireLineIntAtVector => "fSurfaceFireLineIntAtVector",
        [SurfaceFireResidenceTime, SurfaceFireSpreadAtVector, SurfaceFireReactionInt] => [SurfaceFireLineIntAtVector];
    SurfaceFireFlameLengAtVector => "fSurfaceFireFlameLengAtVector", [SurfaceFireLineIntAtVector]
        => [SurfaceFireFlameLengAtVector];
    SurfaceFireEffWindAtVector => "fSurfaceFireEffWindAtVector",
        [SurfaceFireNoWindRate, SurfaceFireSpreadAtVector] => [SurfaceFireEffWindAtVector];
    SurfaceFireHeatPerUnitArea => "fSurfaceFireHeatPerUnitArea",
        [SurfaceFireReactionInt, SurfaceFireResidenceTime] => [SurfaceFireHeatPerUnitArea];
    SurfaceFuelBedWeighted => "fSurfaceFuelBedWeighted",
        [SurfaceFuelBedModel1, SurfaceFuelBedModel2, SurfaceFuelBedCoverage1]
        => [SurfaceFireSpreadAtHead, SurfaceFireSpreadAtVector, SurfaceFireReactionInt,
            SurfaceFireMaxDirFromUpslope, WindAdjFactor, WindSpeedAtMidflame, SurfaceFireEffWindAtHead,
            SurfaceFireEffWindAtVector, SurfaceFireWindSpeedLimit, SurfaceFireWindSpeedFlag,
            SurfaceFireLengthToWidth, SurfaceFireEccentricity, SurfaceFireNoWindRate, SurfaceFireHeatPerUnitArea,
            SurfaceFireLineIntAtHead, SurfaceFireLineIntAtVector, SurfaceFireFlameLengAtHead,
            SurfaceFireFlameLengAtVector, SurfaceFuelBedDepth];
    SurfaceFireMaxDirFromNorth => "fSurfaceFireMaxDirFromNorth",
        [SiteUpslopeDirFromNorth, SurfaceFireMaxDirFromUpslope] => [SurfaceFireMaxDirFromNorth];
    SurfaceFireHeatSource => "fSurfaceFireHeatSource", [SurfaceFireSpreadAtHead, SurfaceFuelBedHeatSink]
        => [SurfaceFireHeatSource];
    SurfaceFireFlameHtAtVector => "fSurfaceFireFlameHtAtVector",
        [SurfaceFireFlameLengAtVector, SurfaceFireFlameAngleAtVector] => [SurfaceFireFlameHtAtVector];
    SurfaceFireCharacteristicsDiagram => "fSurfaceFireCharacteristicsDiagram", [SurfaceFireCharacteristicsDiagram]
        => [SurfaceFireCharacteristicsDiagram];
    SurfaceFireMaxDirDiagram => "fSurfaceFireMaxDirDiagram", [SurfaceFireMaxDirDiagram]
        => [SurfaceFireMaxDirDiagram];
    SurfaceFireDistAtHead => "fSurfaceFireDistAtHead", [SurfaceFireSpreadAtHead, SurfaceFireElapsedTime]
        => [SurfaceFireDistAtHead];
    SurfaceFireDistAtVector => "fSurfaceFireDistAtVector", [SurfaceFireSpreadAtVector, SurfaceFireElapsedTime]
        => [SurfaceFireDistAtVector];
    SurfaceFireMapDistAtHead => "fSurfaceFireMapDistAtHead", [SurfaceFireDistAtHead, MapScale]
        => [SurfaceFireMapDistAtHead];
    SurfaceFireMapDistAtVector => "fSurfaceFireMapDistAtVector", [SurfaceFireDistAtVector, MapScale]
        => [SurfaceFireMapDistAtVector];

    // Scorch
    SurfaceFireScorchHtFromFliAtVector => "fSurfaceFireScorchHtFromFliAtVector",
        [WthrAirTemp, WindSpeedAtMidflame, SurfaceFireLineIntAtVector] => [SurfaceFireScorchHtAtVector];
    SurfaceFireScorchHtFromFlameLengAtVector => "fSurfaceFireScorchHtFromFlameLengAtVector",
        [WthrAirTemp, WindSpeedAtMidflame, SurfaceFireFlameLengAtVector] => [SurfaceFireScorchHtAtVector];

    // Size
    SurfaceFireSpreadAtBack => "fSurfaceFireSpreadAtBack", [SurfaceFireEccentricity, SurfaceFireSpreadAtHead]
        => [SurfaceFireSpreadAtBack];
    SurfaceFireDistAtBack => "fSurfaceFireDistAtBack", [SurfaceFireSpreadAtBack, SurfaceFireElapsedTime]
        => [SurfaceFireDistAtBack];
    SurfaceFireMapDistAtBack => "fSurfaceFireMapDistAtBack", [SurfaceFireDistAtBack, MapScale]
        => [SurfaceFireMapDistAtBack];
    SurfaceFireLengDist => "fSurfaceFireLengDist", [SurfaceFireDistAtBack, SurfaceFireDistAtHead]
        => [SurfaceFireLengDist];
    SurfaceFireLengMapDist => "fSurfaceFireLengMapDist", [SurfaceFireLengDist, MapScale] => [SurfaceFireLengMapDist];
    SurfaceFireWidthDist => "fSurfaceFireWidthDist", [SurfaceFireLengDist, SurfaceFireLengthToWidth]
        => [SurfaceFireWidthDist];
    SurfaceFireWidthMapDist => "fSurfaceFireWidthMapDist", [SurfaceFireWidthDist, MapScale]
        => [SurfaceFireWidthMapDist];
    SurfaceFireArea => "fSurfaceFireArea", [SurfaceFireLengDist, SurfaceFireWidthDist] => [SurfaceFireArea];
    SurfaceFirePerimeter => "fSurfaceFirePerimeter", [SurfaceFireLengDist, SurfaceFireWidthDist]
        => [SurfaceFirePerimeter];
    SurfaceFireShapeDiagram => "fSurfaceFireShapeDiagram", [SurfaceFireShapeDiagram] => [SurfaceFireShapeDiagram];

    // Crown
    CrownFireCritSurfFireInt => "fCrownFireCritSurfFireInt", [TreeFoliarMois, TreeCrownBaseHt]
        => [CrownFireCritSurfFireInt];
    CrownFireCritSurfFlameLeng => "fCrownFireCritSurfFlameLeng", [CrownFireCritSurfFireInt]
        => [CrownFireCritSurfFlameLeng];
    CrownFireCritCrownSpreadRate => "fCrownFireCritCrownSpreadRate", [TreeCanopyBulkDens]
        => [CrownFireCritCrownSpreadRate];
    CrownFireTransRatioFromFireIntAtVector => "fCrownFireTransRatioFromFireIntAtVector",
        [CrownFireCritSurfFireInt, SurfaceFireLineIntAtVector] => [CrownFireTransRatio];
    CrownFireTransRatioFromFlameLengAtVector => "fCrownFireTransRatioFromFlameLengAtVector",
        [CrownFireCritSurfFireInt, SurfaceFireFlameLengAtVector] => [CrownFireTransRatio];
    CrownFireTransToCrown => "fCrownFireTransToCrown", [CrownFireTransRatio] => [CrownFireTransToCrown];
    CrownFireSpreadRate => "fCrownFireSpreadRate",
        [SurfaceFuelMoisDead1, SurfaceFuelMoisDead10, SurfaceFuelMoisDead100, SurfaceFuelMoisLiveWood,
         WindSpeedAt20Ft] => [CrownFireSpreadRate];
    CrownFireActiveRatio => "fCrownFireActiveRatio", [CrownFireSpreadRate, CrownFireCritCrownSpreadRate]
        => [CrownFireActiveRatio];
    CrownFireActiveCrown => "fCrownFireActiveCrown", [CrownFireActiveRatio] => [CrownFireActiveCrown];
    CrownFireType => "fCrownFireType", [CrownFireActiveRatio, CrownFireTransRatio] => [CrownFireType];
    CrownFireFuelLoad => "fCrownFireFuelLoad", [TreeCanopyBulkDens, TreeCoverHt, TreeCrownBaseHt]
        => [CrownFireFuelLoad];
    CrownFireHeatPerUnitAreaCanopy => "fCrownFireHeatPerUnitAreaCanopy", [CrownFireFuelLoad]
        => [CrownFireHeatPerUnitAreaCanopy];
    CrownFireHeatPerUnitArea => "fCrownFireHeatPerUnitArea",
        [SurfaceFireHeatPerUnitArea, CrownFireHeatPerUnitAreaCanopy] => [CrownFireHeatPerUnitArea];
    CrownFireLineInt => "fCrownFireLineInt", [CrownFireHeatPerUnitArea, CrownFireSpreadRate] => [CrownFireLineInt];
    CrownFireFlameLeng => "fCrownFireFlameLeng", [CrownFireLineInt] => [CrownFireFlameLeng];
    CrownFirePowerOfFire => "fCrownFirePowerOfFire", [CrownFireLineInt] => [CrownFirePowerOfFire];
    CrownFirePowerOfWind => "fCrownFirePowerOfWind", [WindSpeedAt20Ft, CrownFireSpreadRate]
        => [CrownFirePowerOfWind];
    CrownFirePowerRatio => "fCrownFirePowerRatio", [CrownFirePowerOfFire, CrownFirePowerOfWind]
        => [CrownFirePowerRatio];
    CrownFireWindDriven => "fCrownFireWindDriven", [CrownFirePowerRatio] => [CrownFireWindDriven];
    CrownFireLengthToWidth => "fCrownFireLengthToWidth", [WindSpeedAt20Ft] => [CrownFireLengthToWidth];
    CrownFireSpreadDist => "fCrownFireSpreadDist", [CrownFireSpreadRate, SurfaceFireElapsedTime]
        => [CrownFireSpreadDist];
    CrownFireSpreadMapDist => "fCrownFireSpreadMapDist", [CrownFireSpreadDist, MapScale] => [CrownFireSpreadMapDist];
    CrownFireArea => "fCrownFireArea", [CrownFireSpreadDist, CrownFireLengthToWidth] => [CrownFireArea];
    CrownFirePerimeter => "fCrownFirePerimeter", [CrownFireSpreadDist, CrownFireLengthToWidth]
        => [CrownFirePerimeter];

    // Containment
    ContainFFReportSize => "fContainFFReportSize", [SurfaceFireArea] => [ContainReportSize];
    ContainFFReportSpread => "fContainFFReportSpread", [SurfaceFireSpreadAtHead] => [ContainReportSpread];
    ContainFFReportRatio => "fContainFFReportRatio", [SurfaceFireLengthToWidth] => [ContainReportRatio];
    ContainFF => "fContainFF",
        [ContainAttackDist, ContainAttackTactic, ContainReportRatio, ContainReportSize, ContainReportSpread,
         ContainLimitDist, ContainResourceArrival, ContainResourceDuration, ContainResourceName,
         ContainResourceProd, ContainResourceBaseCost, ContainResourceHourCost]
        => [ContainAttackBack, ContainAttackHead, ContainAttackPerimeter, ContainAttackSize, ContainCost,
            ContainLine, ContainPoints, ContainReportBack, ContainReportHead, ContainResourcesUsed, ContainSize,
            ContainStatus, ContainTime, ContainXMax, ContainXMin, ContainYMax];
    ContainFFSingle => "fContainFFSingle",
        [ContainAttackDist, ContainAttackTactic, ContainReportRatio, ContainReportSize, ContainReportSpread,
         ContainLimitDist, ContainResourceArrival, ContainResourceDuration, ContainResourceName,
         ContainResourceProd, ContainResourceBaseCost, ContainResourceHourCost]
        => [ContainAttackBack, ContainAttackHead, ContainAttackPerimeter, ContainAttackSize, ContainCost,
            ContainLine, ContainPoints, ContainReportBack, ContainReportHead, ContainResourcesUsed, ContainSize,
            ContainStatus, ContainTime, ContainXMax, ContainXMin, ContainYMax];

    // Spotting
    SpotDistBurningPile => "fSpotDistBurningPile",
        [SpotFireSource, TreeCoverHtDownwind, SurfaceFireFlameHtPile, SiteRidgeToValleyElev, SiteRidgeToValleyDist,
         WindSpeedAt20Ft]
        => [SpotCoverHtBurningPile, SpotDistBurningPile, SpotFirebrandHtBurningPile, SpotFlatDistBurningPile];
    SpotDistSurfaceFire => "fSpotDistSurfaceFire",
        [TreeCoverHtDownwind, SurfaceFireFlameLengAtHead, SiteRidgeToValleyElev, SiteRidgeToValleyDist,
         SpotFireSource, WindSpeedAt20Ft]
        => [SpotCoverHtSurfaceFire, SpotDistSurfaceFire, SpotFirebrandDriftSurfaceFire,
            SpotFirebrandHtSurfaceFire, SpotFlatDistSurfaceFire];
    SpotDistTorchingTrees => "fSpotDistTorchingTrees",
        [TreeCoverHtDownwind, SiteRidgeToValleyElev, SiteRidgeToValleyDist, SpotFireSource, WindSpeedAt20Ft,
         SpotTorchingTrees, TreeDbh, TreeHt, TreeSpeciesSpot]
        => [SpotCoverHtTorchingTrees, SpotDistTorchingTrees, SpotFirebrandHtTorchingTrees,
            SpotFlameDurTorchingTrees, SpotFlameHtTorchingTrees, SpotFlameRatioTorchingTrees,
            SpotFlatDistTorchingTrees];
    SpotMapDistBurningPile => "fSpotMapDistBurningPile", [SpotDistBurningPile, MapScale] => [SpotMapDistBurningPile];
    SpotMapDistSurfaceFire => "fSpotMapDistSurfaceFire", [SpotDistSurfaceFire, MapScale] => [SpotMapDistSurfaceFire];
    SpotMapDistTorchingTrees => "fSpotMapDistTorchingTrees", [SpotDistTorchingTrees, MapScale]
        => [SpotMapDistTorchingTrees];

    // Tree mortality
    TreeBarkThicknessFofem => "fTreeBarkThicknessFofem", [TreeSpecies, TreeDbh] => [TreeBarkThickness];
    TreeCrownVolScorchedAtVector => "fTreeCrownVolScorchedAtVector",
        [TreeCrownRatio, SurfaceFireScorchHtAtVector, TreeCoverHt]
        => [TreeCrownLengScorchedAtVector, TreeCrownLengFractionScorchedAtVector, TreeCrownVolScorchedAtVector];
    TreeMortalityRateFofemAtVector => "fTreeMortalityRateFofemAtVector",
        [TreeSpecies, TreeBarkThickness, TreeCrownVolScorchedAtVector, SurfaceFireScorchHtAtVector]
        => [TreeMortalityRateAtVector];
    TreeMortalityRateFofem2AtVector => "fTreeMortalityRateFofem2AtVector",
        [TreeSpeciesMortality, TreeBarkThickness, TreeCrownVolScorchedAtVector, SurfaceFireScorchHtAtVector]
        => [TreeMortalityRateAtVector];
    TreeMortalityRateFofemHoodAtVector => "fTreeMortalityRateFofemHoodAtVector",
        [TreeSpecies, TreeDbh, TreeCrownLengFractionScorchedAtVector, TreeCrownVolScorchedAtVector,
         TreeBarkThickness, SurfaceFireScorchHtAtVector] => [TreeMortalityRateAtVector];
    TreeMortalityRateAspenAtVector => "fTreeMortalityRateAspenAtVector",
        [TreeDbh, SurfaceFireFlameLengAtVector, SurfaceFireSeverityAspen] => [TreeMortalityRateAspenAtVector];
    TreeMortalityCountAtVector => "fTreeMortalityCountAtVector", [TreeMortalityRateAtVector, TreeCount]
        => [TreeMortalityCountAtVector];

    // Ignition
    SurfaceFuelTemp => "fSurfaceFuelTemp", [WthrAirTemp, SiteSunShading] => [SurfaceFuelTemp];
    IgnitionFirebrandFuelMoisFromDead1Hr => "fIgnitionFirebrandFuelMoisFromDead1Hr", [SurfaceFuelMoisDead1]
        => [IgnitionFirebrandFuelMois];
    IgnitionFirebrandProb => "fIgnitionFirebrandProb", [SurfaceFuelTemp, IgnitionFirebrandFuelMois]
        => [IgnitionFirebrandProb];
    IgnitionLightningFuelMoisFromDead100Hr => "fIgnitionLightningFuelMoisFromDead100Hr", [SurfaceFuelMoisDead100]
        => [IgnitionLightningFuelMois];
    IgnitionLightningProb => "fIgnitionLightningProb",
        [IgnitionLightningFuelType, IgnitionLightningDuffDepth, IgnitionLightningFuelMois, WthrLightningStrikeType]
        => [IgnitionLightningProb];

    // Weather
    WthrDewPointTemp => "fWthrDewPointTemp", [WthrAirTemp, WthrWetBulbTemp, SiteElevation] => [WthrDewPointTemp];
    WthrRelativeHumidity => "fWthrRelativeHumidity", [WthrAirTemp, WthrDewPointTemp] => [WthrRelativeHumidity];
    WthrCumulusBaseHt => "fWthrCumulusBaseHt", [WthrAirTemp, WthrDewPointTemp] => [WthrCumulusBaseHt];
    WthrHeatIndex => "fWthrHeatIndex", [WthrAirTemp, WthrRelativeHumidity] => [WthrHeatIndex];
    WthrSummerSimmerIndex => "fWthrSummerSimmerIndex", [WthrAirTemp, WthrRelativeHumidity]
        => [WthrSummerSimmerIndex];
    WthrWindChillTemp => "fWthrWindChillTemp", [WthrAirTemp, WindSpeedAtMidflame] => [WthrWindChillTemp];

    // Safety zone
    SafetyZoneSepDist => "fSafetyZoneSepDist", [SurfaceFireFlameLengAtHead] => [SafetyZoneSepDist];
    SafetyZoneRadius => "fSafetyZoneRadius",
        [SafetyZoneEquipmentArea, SafetyZoneEquipmentNumber, SafetyZonePersonnelArea, SafetyZonePersonnelNumber,
         SafetyZoneSepDist] => [SafetyZoneRadius, SafetyZoneSize];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_resolve() {
        for &id in FunId::ALL {
            assert!(id.name().starts_with('f'));
            assert_eq!(FunId::from_name(id.name()), Some(id));
        }
        assert_eq!(FunId::from_name("fNope"), None);
    }

    #[test]
    fn test_declared_order_puts_producers_first() {
        assert!(FunId::SurfaceFuelBedIntermediates < FunId::SurfaceFuelBedHeatSink);
        assert!(FunId::SurfaceFireSpreadAtHead < FunId::SurfaceFuelBedWeighted);
        assert!(FunId::SurfaceFuelBedWeighted < FunId::SurfaceFireMaxDirFromNorth);
        assert!(FunId::SurfaceFireArea < FunId::ContainFFReportSize);
        assert!(FunId::CrownFireCritSurfFireInt < FunId::CrownFireTransRatioFromFireIntAtVector);
    }

    #[test]
    fn test_declared_io() {
        let f = FunId::SurfaceFireReactionInt;
        assert_eq!(f.inputs().len(), 4);
        assert_eq!(f.outputs()[0], VarId::SurfaceFireReactionInt);
        assert!(FunId::SurfaceFuelBedParms.outputs().is_empty());
    }
}
