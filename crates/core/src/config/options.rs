//! Typed option groups derived from a [`PropertyDict`]
//!
//! Each option group becomes an enum, so an ambiguous flag set cannot reach
//! reconfiguration. Conversion takes the first true choice in priority order.
//! A group with no true choice resolves to its fallback: the `else` branch for
//! two-way groups, the first choice otherwise.

use super::properties::{Prop, PropertyDict};
use serde::{Deserialize, Serialize};

/// How surface fuel is specified
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FuelChoice {
    /// Catalog fuel model
    Models,
    /// Fuel parameters entered directly
    Parms,
    /// Two fuel models, area-weighted spread rate
    AreaWeighted,
    /// Two fuel models, harmonic-mean spread rate
    HarmonicMean,
    /// Two fuel models, expected two-dimensional spread rate
    TwoDimensional,
    PalmettoGallberry,
    Aspen,
}

impl FuelChoice {
    /// True for the three two-fuel blend choices
    pub fn is_two_fuel(self) -> bool {
        matches!(
            self,
            FuelChoice::AreaWeighted | FuelChoice::HarmonicMean | FuelChoice::TwoDimensional
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoadTransfer {
    Calc,
    Input,
}

/// How dead and live moistures are specified
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Moisture {
    TimeLag,
    LifeCategory,
    Scenario,
}

/// Height at which wind speed is entered, and whether the adjustment factor is computed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindSpeed {
    Midflame,
    At20Ft,
    At20FtCalc,
    At10M,
    At10MCalc,
}

impl WindSpeed {
    /// Entered at 10 m and converted to 20 ft
    pub fn from_10m(self) -> bool {
        matches!(self, WindSpeed::At10M | WindSpeed::At10MCalc)
    }

    /// Adjustment factor computed from canopy and fuel
    pub fn computes_waf(self) -> bool {
        matches!(self, WindSpeed::At20FtCalc | WindSpeed::At10MCalc)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpreadDir {
    /// Direction of maximum spread only
    Max,
    /// User-entered spread direction
    Input,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindDir {
    Input,
    Upslope,
}

/// Reference for entered directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Degrees {
    WrtUpslope,
    WrtNorth,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Slope {
    Input,
    /// Derived from map contours
    Derived,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlopeUnits {
    Fraction,
    Degrees,
}

/// Surface intensity measure entered when the surface module is off
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntensityInput {
    FlameLength,
    FirelineIntensity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resources {
    Single,
    Multiple,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Humidity {
    WetBulbElev,
    DewPoint,
}

/// Master switch per module
#[expect(clippy::struct_excessive_bools, reason = "one switch per module")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Modules {
    pub surface: bool,
    pub crown: bool,
    pub size: bool,
    pub contain: bool,
    pub spot: bool,
    pub scorch: bool,
    pub mortality: bool,
    pub ignition: bool,
    pub weather: bool,
    pub safety: bool,
}

/// Documentation field groups
#[expect(clippy::struct_excessive_bools, reason = "one switch per field group")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Documentation {
    pub description: bool,
    pub fire: bool,
    pub rx: bool,
    pub training: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceOptions {
    pub fuel: FuelChoice,
    pub load_transfer: LoadTransfer,
    pub moisture: Moisture,
    pub wind_speed: WindSpeed,
    pub spread_dir: SpreadDir,
    pub wind_dir: WindDir,
    pub degrees: Degrees,
    pub slope: Slope,
    pub slope_units: SlopeUnits,
    pub wind_limit_applied: bool,
    /// Sample count, depth and lateral extent for the two-dimensional sampler
    pub samples_2d: usize,
    pub depth_2d: usize,
    pub laterals_2d: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainOptions {
    pub resources: Resources,
    pub dist_limit: bool,
    pub retry: bool,
    pub min_steps: usize,
    pub max_steps: usize,
}

/// Fully resolved configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    pub modules: Modules,
    pub docs: Documentation,
    pub surface: SurfaceOptions,
    pub crown_input: IntensityInput,
    pub scorch_input: IntensityInput,
    pub contain: ContainOptions,
    pub humidity: Humidity,
    pub map_distances: bool,
    props: PropertyDict,
}

impl Default for Configuration {
    fn default() -> Self {
        Self::from_dict(PropertyDict::default())
    }
}

/// First choice whose property is true, or `fallback`
fn first_true<T: Copy>(props: &PropertyDict, choices: &[(Prop, T)], fallback: T) -> T {
    choices
        .iter()
        .find(|(p, _)| props.boolean(*p))
        .map_or(fallback, |&(_, c)| c)
}

fn count(props: &PropertyDict, prop: Prop) -> usize {
    props.integer(prop).max(0) as usize
}

impl Configuration {
    /// Resolves every option group from a property dictionary
    pub fn from_dict(props: PropertyDict) -> Self {
        let p = &props;
        let modules = Modules {
            surface: p.boolean(Prop::SurfaceModuleActive),
            crown: p.boolean(Prop::CrownModuleActive),
            size: p.boolean(Prop::SizeModuleActive),
            contain: p.boolean(Prop::ContainModuleActive),
            spot: p.boolean(Prop::SpotModuleActive),
            scorch: p.boolean(Prop::ScorchModuleActive),
            mortality: p.boolean(Prop::MortalityModuleActive),
            ignition: p.boolean(Prop::IgnitionModuleActive),
            weather: p.boolean(Prop::WeatherModuleActive),
            safety: p.boolean(Prop::SafetyModuleActive),
        };
        let docs = Documentation {
            description: p.boolean(Prop::DocDescriptionActive),
            fire: p.boolean(Prop::DocFireActive),
            rx: p.boolean(Prop::DocRxActive),
            training: p.boolean(Prop::DocTrainingActive),
        };
        let surface = SurfaceOptions {
            fuel: first_true(
                p,
                &[
                    (Prop::SurfaceConfFuelModels, FuelChoice::Models),
                    (Prop::SurfaceConfFuelParms, FuelChoice::Parms),
                    (Prop::SurfaceConfFuelAreaWeighted, FuelChoice::AreaWeighted),
                    (Prop::SurfaceConfFuelHarmonicMean, FuelChoice::HarmonicMean),
                    (Prop::SurfaceConfFuel2Dimensional, FuelChoice::TwoDimensional),
                    (Prop::SurfaceConfFuelPalmettoGallberry, FuelChoice::PalmettoGallberry),
                    (Prop::SurfaceConfFuelAspen, FuelChoice::Aspen),
                ],
                FuelChoice::Models,
            ),
            load_transfer: first_true(
                p,
                &[
                    (Prop::SurfaceConfLoadTransferCalc, LoadTransfer::Calc),
                    (Prop::SurfaceConfLoadTransferInput, LoadTransfer::Input),
                ],
                LoadTransfer::Calc,
            ),
            moisture: first_true(
                p,
                &[
                    (Prop::SurfaceConfMoisTimeLag, Moisture::TimeLag),
                    (Prop::SurfaceConfMoisLifeCat, Moisture::LifeCategory),
                    (Prop::SurfaceConfMoisScenario, Moisture::Scenario),
                ],
                Moisture::TimeLag,
            ),
            wind_speed: first_true(
                p,
                &[
                    (Prop::SurfaceConfWindSpeedAtMidflame, WindSpeed::Midflame),
                    (Prop::SurfaceConfWindSpeedAt20Ft, WindSpeed::At20Ft),
                    (Prop::SurfaceConfWindSpeedAt20FtCalc, WindSpeed::At20FtCalc),
                    (Prop::SurfaceConfWindSpeedAt10M, WindSpeed::At10M),
                    (Prop::SurfaceConfWindSpeedAt10MCalc, WindSpeed::At10MCalc),
                ],
                WindSpeed::Midflame,
            ),
            spread_dir: first_true(p, &[(Prop::SurfaceConfSpreadDirMax, SpreadDir::Max)], SpreadDir::Input),
            wind_dir: first_true(p, &[(Prop::SurfaceConfWindDirInput, WindDir::Input)], WindDir::Upslope),
            degrees: first_true(
                p,
                &[(Prop::SurfaceConfDegreesWrtUpslope, Degrees::WrtUpslope)],
                Degrees::WrtNorth,
            ),
            slope: first_true(p, &[(Prop::SurfaceConfSlopeInput, Slope::Input)], Slope::Derived),
            slope_units: first_true(
                p,
                &[
                    (Prop::SurfaceConfSlopeFraction, SlopeUnits::Fraction),
                    (Prop::SurfaceConfSlopeDegrees, SlopeUnits::Degrees),
                ],
                SlopeUnits::Fraction,
            ),
            wind_limit_applied: p.boolean(Prop::SurfaceConfWindLimitApplied),
            samples_2d: count(p, Prop::SurfaceConfFuel2DSamples),
            depth_2d: count(p, Prop::SurfaceConfFuel2DDepth),
            laterals_2d: count(p, Prop::SurfaceConfFuel2DLaterals),
        };
        let crown_input = first_true(
            p,
            &[(Prop::CrownConfUseFlameLeng, IntensityInput::FlameLength)],
            IntensityInput::FirelineIntensity,
        );
        let scorch_input = first_true(
            p,
            &[(Prop::ScorchConfUseFlameLeng, IntensityInput::FlameLength)],
            IntensityInput::FirelineIntensity,
        );
        let contain = ContainOptions {
            resources: first_true(
                p,
                &[
                    (Prop::ContainConfResourcesSingle, Resources::Single),
                    (Prop::ContainConfResourcesMultiple, Resources::Multiple),
                ],
                Resources::Single,
            ),
            dist_limit: p.boolean(Prop::ContainConfLimitDistOn),
            retry: p.boolean(Prop::ContainConfRetry),
            min_steps: count(p, Prop::ContainConfMinSteps),
            max_steps: count(p, Prop::ContainConfMaxSteps),
        };
        let humidity = first_true(
            p,
            &[(Prop::WeatherConfHumidityFromWetBulbElev, Humidity::WetBulbElev)],
            Humidity::DewPoint,
        );
        Self {
            modules,
            docs,
            surface,
            crown_input,
            scorch_input,
            contain,
            humidity,
            map_distances: p.boolean(Prop::MapCalcDist),
            props,
        }
    }

    /// Value of an output-visibility switch
    pub fn calc(&self, prop: Prop) -> bool {
        self.props.boolean(prop)
    }

    /// Underlying property dictionary
    pub fn props(&self) -> &PropertyDict {
        &self.props
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_resolution() {
        let c = Configuration::default();
        assert!(c.modules.surface);
        assert!(!c.modules.crown);
        assert_eq!(c.surface.fuel, FuelChoice::Models);
        assert_eq!(c.surface.wind_speed, WindSpeed::Midflame);
        assert_eq!(c.surface.spread_dir, SpreadDir::Max);
        assert_eq!(c.surface.wind_dir, WindDir::Upslope);
        assert_eq!(c.contain.resources, Resources::Single);
        assert_eq!(c.contain.max_steps, 10000);
        assert_eq!(c.humidity, Humidity::DewPoint);
    }

    #[test]
    fn test_first_true_wins() {
        let mut d = PropertyDict::new();
        d.set_bool(Prop::SurfaceConfFuelHarmonicMean, true).unwrap();
        d.set_bool(Prop::SurfaceConfFuelAspen, true).unwrap();
        d.set_bool(Prop::SurfaceConfFuelModels, false).unwrap();
        let c = Configuration::from_dict(d);
        assert_eq!(c.surface.fuel, FuelChoice::HarmonicMean);
        assert!(c.surface.fuel.is_two_fuel());
    }

    #[test]
    fn test_empty_group_falls_back() {
        let mut d = PropertyDict::new();
        d.set_bool(Prop::SurfaceConfSpreadDirMax, false).unwrap();
        d.set_bool(Prop::SurfaceConfWindSpeedAtMidflame, false).unwrap();
        let c = Configuration::from_dict(d);
        assert_eq!(c.surface.spread_dir, SpreadDir::Input);
        assert_eq!(c.surface.wind_speed, WindSpeed::Midflame);
    }

    #[test]
    fn test_wind_speed_helpers() {
        assert!(WindSpeed::At10MCalc.from_10m());
        assert!(WindSpeed::At10MCalc.computes_waf());
        assert!(!WindSpeed::At20Ft.computes_waf());
        assert!(!WindSpeed::Midflame.from_10m());
    }
}
