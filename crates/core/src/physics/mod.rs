//! Fire behavior formula library
//!
//! Pure functions over native-unit scalars. The equation nodes read their
//! inputs from the variable store, call into these modules and write the
//! results back; nothing here touches the store.

pub mod albini_spotting;
pub mod crown_fire;
pub mod fire_shape;
pub mod fuel_types;
pub mod ignition;
pub mod julian;
pub mod mortality;
pub mod rothermel;
pub mod safety_zone;
pub mod weather;
pub mod wind;
