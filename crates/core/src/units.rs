//! Unit conversion service
//!
//! Every unit belongs to a dimension and maps onto the dimension's base unit
//! through `base = value × factor + offset`. Native values are always stored
//! in the variable's native units; display values are derived with the
//! `(factor, offset)` pair returned by [`factor_offset`].

use crate::error::{EqError, Result};
use rustc_hash::FxHashMap;
use std::sync::OnceLock;

/// Physical dimension a unit measures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Length,
    Area,
    Speed,
    Load,
    Density,
    HeatContent,
    SurfaceToVolume,
    FirelineIntensity,
    HeatPerArea,
    ReactionIntensity,
    HeatSink,
    Fraction,
    Ratio,
    Count,
    Angle,
    Temperature,
    Time,
    Money,
    MoneyRate,
    MapScale,
    Power,
    Date,
    Item,
    Text,
}

/// One entry of the unit table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Unit {
    pub name: &'static str,
    pub dimension: Dimension,
    pub factor: f64,
    pub offset: f64,
}

const fn unit(name: &'static str, dimension: Dimension, factor: f64) -> Unit {
    Unit {
        name,
        dimension,
        factor,
        offset: 0.0,
    }
}

const UNITS: &[Unit] = &[
    // Length (base ft)
    unit("ft", Dimension::Length, 1.0),
    unit("in", Dimension::Length, 1.0 / 12.0),
    unit("mi", Dimension::Length, 5280.0),
    unit("ch", Dimension::Length, 66.0),
    unit("m", Dimension::Length, 3.280839895),
    unit("cm", Dimension::Length, 0.03280839895),
    unit("km", Dimension::Length, 3280.839895),
    // Area (base ft2)
    unit("ft2", Dimension::Area, 1.0),
    unit("ac", Dimension::Area, 43560.0),
    unit("ha", Dimension::Area, 107639.1042),
    unit("m2", Dimension::Area, 10.76391042),
    unit("mi2", Dimension::Area, 27878400.0),
    // Speed (base ft/min)
    unit("ft/min", Dimension::Speed, 1.0),
    unit("ch/h", Dimension::Speed, 1.1),
    unit("mi/h", Dimension::Speed, 88.0),
    unit("ft/s", Dimension::Speed, 60.0),
    unit("m/min", Dimension::Speed, 3.280839895),
    unit("m/s", Dimension::Speed, 196.8503937),
    unit("km/h", Dimension::Speed, 54.68066492),
    // Fuel load (base lb/ft2)
    unit("lb/ft2", Dimension::Load, 1.0),
    unit("ton/ac", Dimension::Load, 2000.0 / 43560.0),
    unit("kg/m2", Dimension::Load, 0.2048161436),
    unit("tonne/ha", Dimension::Load, 0.02048161436),
    // Density (base lb/ft3)
    unit("lb/ft3", Dimension::Density, 1.0),
    unit("kg/m3", Dimension::Density, 0.06242796058),
    // Heat content (base Btu/lb)
    unit("Btu/lb", Dimension::HeatContent, 1.0),
    unit("kJ/kg", Dimension::HeatContent, 0.4299226139),
    // Surface area to volume ratio (base ft2/ft3)
    unit("ft2/ft3", Dimension::SurfaceToVolume, 1.0),
    unit("m2/m3", Dimension::SurfaceToVolume, 0.3048),
    unit("Btu/ft/s", Dimension::FirelineIntensity, 1.0),
    unit("kW/m", Dimension::FirelineIntensity, 0.2886719),
    unit("Btu/ft2", Dimension::HeatPerArea, 1.0),
    unit("kJ/m2", Dimension::HeatPerArea, 0.08805508),
    unit("Btu/ft2/min", Dimension::ReactionIntensity, 1.0),
    unit("kW/m2", Dimension::ReactionIntensity, 5.283305),
    unit("Btu/ft3", Dimension::HeatSink, 1.0),
    unit("kJ/m3", Dimension::HeatSink, 0.02683919),
    unit("fraction", Dimension::Fraction, 1.0),
    unit("%", Dimension::Fraction, 0.01),
    unit("ratio", Dimension::Ratio, 1.0),
    unit("count", Dimension::Count, 1.0),
    unit("deg", Dimension::Angle, 1.0),
    unit("F", Dimension::Temperature, 1.0),
    Unit {
        name: "C",
        dimension: Dimension::Temperature,
        factor: 1.8,
        offset: 32.0,
    },
    // Time (base min)
    unit("min", Dimension::Time, 1.0),
    unit("s", Dimension::Time, 1.0 / 60.0),
    unit("h", Dimension::Time, 60.0),
    unit("days", Dimension::Time, 1440.0),
    unit("yr", Dimension::Time, 525960.0),
    unit("$", Dimension::Money, 1.0),
    unit("$/h", Dimension::MoneyRate, 1.0),
    unit("in/mi", Dimension::MapScale, 1.0),
    unit("cm/km", Dimension::MapScale, 0.6336),
    unit("ft-lb/s/ft2", Dimension::Power, 1.0),
    unit("yyyymmdd", Dimension::Date, 1.0),
    unit("item", Dimension::Item, 1.0),
    unit("text", Dimension::Text, 1.0),
];

fn table() -> &'static FxHashMap<&'static str, Unit> {
    static TABLE: OnceLock<FxHashMap<&'static str, Unit>> = OnceLock::new();
    TABLE.get_or_init(|| UNITS.iter().map(|u| (u.name, *u)).collect())
}

/// Looks up a unit by name
pub fn lookup(name: &str) -> Result<Unit> {
    table()
        .get(name)
        .copied()
        .ok_or_else(|| EqError::UnknownUnits(name.to_string()))
}

/// Linear `(factor, offset)` pair so that `to = from × factor + offset`
pub fn factor_offset(from: &str, to: &str) -> Result<(f64, f64)> {
    let a = lookup(from)?;
    let b = lookup(to)?;
    if a.dimension != b.dimension {
        return Err(EqError::IncompatibleUnits {
            from: from.to_string(),
            to: to.to_string(),
        });
    }
    Ok((a.factor / b.factor, (a.offset - b.offset) / b.factor))
}

/// Converts a scalar between two named units
pub fn convert(value: f64, from: &str, to: &str) -> Result<f64> {
    let (factor, offset) = factor_offset(from, to)?;
    Ok(value * factor + offset)
}
