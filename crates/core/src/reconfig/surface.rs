//! Surface module procedure

use super::{Reconfig, WAF_USER_INPUT};
use crate::config::{Degrees, FuelChoice, LoadTransfer, Moisture, Prop, Slope, SlopeUnits, SpreadDir, WindDir, WindSpeed};
use crate::error::Result;
use crate::function::FunId;
use crate::variable::VarId;

const ALWAYS: &[FunId] = &[
    FunId::SurfaceFireCharacteristicsDiagram,
    FunId::SurfaceFireDistAtHead,
    FunId::SurfaceFireDistAtVector,
    FunId::SurfaceFireEccentricity,
    FunId::SurfaceFireEffWindAtVector,
    FunId::SurfaceFireFlameLengAtHead,
    FunId::SurfaceFireFlameLengAtVector,
    FunId::SurfaceFireMaxDirFromNorth,
    FunId::SurfaceFireHeatSource,
    FunId::SurfaceFireMaxDirDiagram,
    FunId::SurfaceFireMapDistAtHead,
    FunId::SurfaceFireMapDistAtVector,
    FunId::SurfaceFireSpreadAtBack,
    FunId::SurfaceFireSpreadAtHead,
    FunId::SurfaceFireVectorBeta,
    FunId::SurfaceFireSpreadAtBeta,
    FunId::SurfaceFireHeatPerUnitArea,
    FunId::SurfaceFireLengthToWidth,
    FunId::SurfaceFireLineIntAtHead,
    FunId::SurfaceFireLineIntAtVector,
    FunId::SurfaceFireNoWindRate,
    FunId::SurfaceFirePropagatingFlux,
    FunId::SurfaceFireReactionInt,
    FunId::SurfaceFireResidenceTime,
    FunId::SurfaceFuelBedIntermediates,
    FunId::SurfaceFuelBedHeatSink,
    FunId::SurfaceFuelMoisTimeLag,
];

/// Nodes the blend node runs once per fuel model
const BLENDED: &[FunId] = &[
    FunId::SurfaceFuelBedModel,
    FunId::SurfaceFuelBedParms,
    FunId::SurfaceFuelLoadTransferFraction,
    FunId::SurfaceFuelBedIntermediates,
    FunId::SurfaceFireResidenceTime,
    FunId::SurfaceFuelMoisLifeClass,
    FunId::SurfaceFuelMoisScenarioModel,
    FunId::SurfaceFuelMoisTimeLag,
    FunId::SurfaceFuelBedHeatSink,
    FunId::SurfaceFirePropagatingFlux,
    FunId::SurfaceFireReactionInt,
    FunId::SurfaceFireNoWindRate,
    FunId::WindAdjFactor,
    FunId::WindSpeedAt20Ft,
    FunId::WindSpeedAtMidflame,
    FunId::SurfaceFireSpreadAtHead,
    FunId::SurfaceFireLineIntAtHead,
    FunId::SurfaceFireFlameLengAtHead,
    FunId::SurfaceFireLengthToWidth,
    FunId::SurfaceFireEccentricity,
    FunId::SurfaceFireVectorBeta,
    FunId::SurfaceFireSpreadAtBeta,
    FunId::SurfaceFireLineIntAtVector,
    FunId::SurfaceFireFlameLengAtVector,
    FunId::SurfaceFireEffWindAtVector,
    FunId::SurfaceFireHeatPerUnitArea,
];

/// Per-model intermediates, hidden when two models are blended
const PER_MODEL: &[(VarId, Prop)] = &[
    (VarId::SurfaceFireHeatSource, Prop::SurfaceCalcFireHeatSource),
    (VarId::SurfaceFireReactionIntDead, Prop::SurfaceCalcFireReactionIntDead),
    (VarId::SurfaceFireReactionIntLive, Prop::SurfaceCalcFireReactionIntLive),
    (VarId::SurfaceFireMaxDirDiagram, Prop::SurfaceCalcFireMaxDirDiagram),
    (VarId::SurfaceFireCharacteristicsDiagram, Prop::SurfaceCalcFireCharacteristicsDiagram),
    (VarId::SurfaceFuelLoadTransferFraction, Prop::SurfaceCalcFuelLoadTransferFraction),
    (VarId::SurfaceFuelLoadDead, Prop::SurfaceCalcFuelLoadDead),
    (VarId::SurfaceFuelLoadDeadHerb, Prop::SurfaceCalcFuelLoadDeadHerb),
    (VarId::SurfaceFuelLoadLive, Prop::SurfaceCalcFuelLoadLive),
    (VarId::SurfaceFuelLoadUndeadHerb, Prop::SurfaceCalcFuelLoadUndeadHerb),
    (VarId::SurfaceFuelBedSigma, Prop::SurfaceCalcFuelBedSigma),
    (VarId::SurfaceFuelBedPackingRatio, Prop::SurfaceCalcFuelBedPackingRatio),
    (VarId::SurfaceFuelBedBulkDensity, Prop::SurfaceCalcFuelBedBulkDensity),
    (VarId::SurfaceFuelBedBetaRatio, Prop::SurfaceCalcFuelBedBetaRatio),
    (VarId::SurfaceFuelBedDeadFraction, Prop::SurfaceCalcFuelBedDeadFraction),
    (VarId::SurfaceFuelBedLiveFraction, Prop::SurfaceCalcFuelBedLiveFraction),
    (VarId::SurfaceFuelBedHeatSink, Prop::SurfaceCalcFuelBedHeatSink),
    (VarId::SurfaceFuelBedMoisDead, Prop::SurfaceCalcFuelBedMoisDead),
    (VarId::SurfaceFuelBedMoisLive, Prop::SurfaceCalcFuelBedMoisLive),
    (VarId::SurfaceFuelBedMextLive, Prop::SurfaceCalcFuelBedMextLive),
    (VarId::SurfaceFireResidenceTime, Prop::SurfaceCalcFireResidenceTime),
    (VarId::SurfaceFireWindFactor, Prop::SurfaceCalcFireWindFactor),
    (VarId::SurfaceFireSlopeFactor, Prop::SurfaceCalcFireSlopeFactor),
];

const WIND_SPEEDS: [VarId; 3] = [VarId::WindSpeedAtMidflame, VarId::WindSpeedAt20Ft, VarId::WindSpeedAt10M];

impl Reconfig<'_> {
    pub(super) fn surface(&mut self) -> Result<()> {
        if Self::skip("surface", self.config.modules.surface) {
            return Ok(());
        }
        self.on(ALWAYS);
        self.off(&[FunId::TreeCrownRatio]);
        self.var(VarId::SurfaceFuelLoadDeadHerb).is_constant = true;

        let s = self.config.surface;
        self.fuel(s.fuel);
        self.load_transfer(s.fuel, s.load_transfer)?;
        match s.moisture {
            Moisture::TimeLag => {}
            Moisture::LifeCategory => self.on(&[FunId::SurfaceFuelMoisLifeClass]),
            Moisture::Scenario => self.on(&[FunId::SurfaceFuelMoisScenarioModel]),
        }
        self.surface_wind_speed(s.wind_speed, s.fuel.is_two_fuel())?;
        self.spread_direction(s.spread_dir, s.degrees);
        self.wind_direction(s.wind_dir, s.degrees);
        self.max_direction(s.degrees);
        self.slope(s.slope, s.slope_units);
        self.surface_outputs(s.fuel.is_two_fuel());
        self.fix(VarId::SurfaceFuelMoisDead1000, 0.20);
        Ok(())
    }

    fn fuel(&mut self, fuel: FuelChoice) {
        match fuel {
            FuelChoice::Models => self.on(&[FunId::SurfaceFuelBedParms, FunId::SurfaceFuelBedModel]),
            FuelChoice::Parms => self.on(&[FunId::SurfaceFuelBedParms]),
            FuelChoice::AreaWeighted | FuelChoice::HarmonicMean | FuelChoice::TwoDimensional => {
                self.on(&[FunId::SurfaceFuelBedWeighted]);
                let eq = self.var(VarId::SurfaceFuelLoadTransferEq);
                eq.is_user_input = false;
                eq.is_constant = true;
                self.off(BLENDED);
            }
            FuelChoice::PalmettoGallberry => {
                self.on(&[FunId::SurfaceFuelPalmettoModel, FunId::SurfaceFuelPalmettoParms]);
                self.outputs(&[
                    (VarId::SurfaceFuelPalmettoLoadDead1, Prop::SurfaceCalcPalmettoLoadDead1),
                    (VarId::SurfaceFuelPalmettoLoadDead10, Prop::SurfaceCalcPalmettoLoadDead10),
                    (VarId::SurfaceFuelPalmettoLoadDeadFoliage, Prop::SurfaceCalcPalmettoLoadDeadFoliage),
                    (VarId::SurfaceFuelPalmettoLoadLive1, Prop::SurfaceCalcPalmettoLoadLive1),
                    (VarId::SurfaceFuelPalmettoLoadLive10, Prop::SurfaceCalcPalmettoLoadLive10),
                    (VarId::SurfaceFuelPalmettoLoadLiveFoliage, Prop::SurfaceCalcPalmettoLoadLiveFoliage),
                    (VarId::SurfaceFuelPalmettoLoadLitter, Prop::SurfaceCalcPalmettoLoadLitter),
                    (VarId::SurfaceFuelBedDepth, Prop::SurfaceCalcPalmettoBedDepth),
                ]);
            }
            FuelChoice::Aspen => {
                self.on(&[
                    FunId::SurfaceFuelAspenModel,
                    FunId::SurfaceFuelAspenParms,
                    FunId::TreeMortalityRateAspenAtVector,
                ]);
                self.outputs(&[
                    (VarId::SurfaceFuelAspenLoadDead1, Prop::SurfaceCalcAspenLoadDead1),
                    (VarId::SurfaceFuelAspenLoadLiveHerb, Prop::SurfaceCalcAspenLoadLiveHerb),
                    (VarId::SurfaceFuelAspenLoadLiveWoody, Prop::SurfaceCalcAspenLoadLiveWoody),
                    (VarId::SurfaceFuelAspenSavrDead1, Prop::SurfaceCalcAspenSavrDead1),
                    (VarId::SurfaceFuelAspenSavrLiveWoody, Prop::SurfaceCalcAspenSavrLiveWoody),
                    (VarId::TreeMortalityRateAspenAtVector, Prop::SurfaceCalcAspenMortality),
                ]);
                for id in [
                    VarId::SurfaceFuelAspenLoadDead10,
                    VarId::SurfaceFuelAspenSavrDead10,
                    VarId::SurfaceFuelAspenSavrLiveHerb,
                    VarId::SurfaceFuelBedDepth,
                ] {
                    self.show(id, false);
                }
            }
        }
    }

    fn load_transfer(&mut self, fuel: FuelChoice, transfer: LoadTransfer) -> Result<()> {
        let calc = transfer == LoadTransfer::Calc;
        self.var(VarId::SurfaceFuelLoadTransferFraction).is_user_input = !calc;
        self.funs.set_active(FunId::SurfaceFuelLoadTransferFraction, calc);

        // Palmetto-gallberry and aspen beds carry no transferable herb load
        if matches!(fuel, FuelChoice::PalmettoGallberry | FuelChoice::Aspen) {
            self.pick(VarId::SurfaceFuelLoadTransferEq, 0, true)?;
            self.on(&[FunId::SurfaceFuelLoadTransferFraction]);
            let ltf = self.var(VarId::SurfaceFuelLoadTransferFraction);
            ltf.is_user_input = false;
            ltf.is_constant = true;
            ltf.update(0.0);
        }
        Ok(())
    }

    fn surface_wind_speed(&mut self, wind: WindSpeed, weighted: bool) -> Result<()> {
        if wind == WindSpeed::Midflame {
            self.fix(VarId::TreeCanopyCrownFraction, 0.0);
            self.fix(VarId::WindAdjFactor, 1.0);
            return self.pick(VarId::WindAdjMethod, WAF_USER_INPUT, true);
        }
        self.on(&[FunId::WindSpeedAtMidflame]);
        self.funs.set_active(FunId::WindAdjFactor, wind.computes_waf());
        if wind.from_10m() {
            self.on(&[FunId::WindSpeedAt20Ft]);
        }
        self.output(VarId::WindSpeedAtMidflame, Prop::SurfaceCalcWindSpeedAtMidflame);
        if wind.computes_waf() {
            if weighted {
                self.var(VarId::SurfaceFuelBedDepth).is_constant = true;
            }
            if self.config.modules.crown {
                self.on(&[FunId::TreeCrownRatio]);
                self.output(VarId::TreeCrownRatio, Prop::SurfaceCalcCrownRatio);
            }
            // Crown fill portion is entered
            let fill = self.var(VarId::TreeCanopyCrownFraction);
            fill.is_constant = false;
            fill.update(0.0);
            self.pick(VarId::WindAdjMethod, WAF_USER_INPUT, false)
        } else {
            self.fix(VarId::TreeCanopyCrownFraction, 0.0);
            self.pick(VarId::WindAdjMethod, WAF_USER_INPUT, true)
        }
    }

    fn spread_direction(&mut self, dir: SpreadDir, degrees: Degrees) {
        match dir {
            SpreadDir::Max => {
                self.fix(VarId::SurfaceFireVectorDirFromUpslope, 0.0);
                self.fix(VarId::SurfaceFireVectorBeta, 0.0);
                self.off(&[FunId::SurfaceFireVectorBeta]);
                self.show(VarId::SurfaceFireDistAtHead, false);
                self.output(VarId::SurfaceFireDistAtVector, Prop::SurfaceCalcFireDist);
                self.output(VarId::SurfaceFireEffWindAtHead, Prop::SurfaceCalcFireEffWind);
                self.output(VarId::SurfaceFireFlameLengAtHead, Prop::SurfaceCalcFireFlameLeng);
                self.output(VarId::SurfaceFireLineIntAtHead, Prop::SurfaceCalcFireLineInt);
                self.output(VarId::SurfaceFireSpreadAtHead, Prop::SurfaceCalcFireSpread);
            }
            SpreadDir::Input => {
                self.var(VarId::SurfaceFireVectorDirFromUpslope).is_constant = false;
                if degrees == Degrees::WrtNorth {
                    self.on(&[FunId::SurfaceFireVectorDirFromUpslope]);
                }
                self.output(VarId::SurfaceFireDistAtVector, Prop::SurfaceCalcFireDist);
                self.output(VarId::SurfaceFireEffWindAtVector, Prop::SurfaceCalcFireEffWind);
                self.output(VarId::SurfaceFireFlameLengAtVector, Prop::SurfaceCalcFireFlameLeng);
                self.output(VarId::SurfaceFireLineIntAtVector, Prop::SurfaceCalcFireLineInt);
                self.output(VarId::SurfaceFireSpreadAtVector, Prop::SurfaceCalcFireSpread);
            }
        }
        if self.config.map_distances {
            self.on(&[FunId::MapScale]);
            self.output(VarId::SurfaceFireMapDistAtVector, Prop::SurfaceCalcFireDist);
        }
    }

    fn wind_direction(&mut self, dir: WindDir, degrees: Degrees) {
        for id in WIND_SPEEDS {
            self.var(id).set_label("");
        }
        self.var(VarId::WindDirFromUpslope).is_constant = false;
        match dir {
            WindDir::Input => {
                if degrees == Degrees::WrtNorth {
                    self.on(&[FunId::WindDirFromUpslope]);
                }
            }
            WindDir::Upslope => {
                self.fix(VarId::WindDirFromUpslope, 0.0);
                for id in WIND_SPEEDS {
                    self.var(id).set_label("Upslope");
                }
            }
        }
    }

    fn max_direction(&mut self, degrees: Degrees) {
        let shown = self.calc(Prop::SurfaceCalcFireMaxDirFromUpslope)
            || self.calc(Prop::SurfaceCalcFireMaxDirDiagram)
            || (self.config.modules.size && self.calc(Prop::SizeCalcFireShapeDiagram));
        match degrees {
            Degrees::WrtUpslope => self.show(VarId::SurfaceFireMaxDirFromUpslope, shown),
            Degrees::WrtNorth => {
                self.on(&[FunId::SiteUpslopeDirFromNorth]);
                self.show(VarId::SurfaceFireMaxDirFromNorth, shown);
            }
        }
    }

    fn slope(&mut self, slope: Slope, units: SlopeUnits) {
        match (slope, units) {
            (Slope::Input, SlopeUnits::Fraction) => {}
            (Slope::Input, SlopeUnits::Degrees) => self.on(&[FunId::SiteSlopeFraction]),
            (Slope::Derived, _) => {
                self.on(&[FunId::MapSlope, FunId::MapScale, FunId::SiteSlopeFraction]);
                self.output(VarId::SiteSlopeReach, Prop::SurfaceCalcSlopeReach);
                self.output(VarId::SiteSlopeRise, Prop::SurfaceCalcSlopeRise);
                if self.calc(Prop::SurfaceCalcSlopeSteepness) {
                    self.show(VarId::SiteSlopeFraction, units == SlopeUnits::Fraction);
                    self.show(VarId::SiteSlopeDegrees, units == SlopeUnits::Degrees);
                }
            }
        }
    }

    fn surface_outputs(&mut self, two_fuel: bool) {
        self.outputs(&[
            (VarId::SurfaceFireHeatPerUnitArea, Prop::SurfaceCalcFireHeatPerUnitArea),
            (VarId::SurfaceFireReactionInt, Prop::SurfaceCalcFireReactionInt),
            (VarId::SurfaceFireWindSpeedFlag, Prop::SurfaceCalcFireWindSpeedFlag),
            (VarId::SurfaceFireWindSpeedLimit, Prop::SurfaceCalcFireWindSpeedLimit),
            (VarId::TreeCanopyCrownFraction, Prop::SurfaceCalcCrownFillPortion),
            (VarId::WindAdjFactor, Prop::SurfaceCalcWindAdjFactor),
            (VarId::WindAdjMethod, Prop::SurfaceCalcWindAdjMethod),
        ]);
        for &(id, prop) in PER_MODEL {
            let shown = !two_fuel && self.calc(prop);
            self.show(id, shown);
        }
    }
}
