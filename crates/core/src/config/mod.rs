//! Configuration properties and their typed resolution

mod options;
mod properties;

pub use options::{
    ContainOptions, Configuration, Degrees, Documentation, FuelChoice, Humidity, IntensityInput, LoadTransfer,
    Modules, Moisture, Resources, Slope, SlopeUnits, SpreadDir, SurfaceOptions, WindDir, WindSpeed,
};
pub use properties::{Prop, PropValue, PropertyDict};
