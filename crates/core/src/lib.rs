//! Fire Behavior Core Library
//!
//! A configurable calculator for wildland surface fire behavior, built as a
//! dependency graph of equation nodes over named, unit-aware variables.
//!
//! ## Layout
//!
//! - [`variable`] and [`function`]: the fixed variable and node registries
//! - [`config`]: module switches and option groups, loadable from TOML
//! - [`equations`]: one node per formula, reading and writing the store
//! - [`physics`]: pure fire-behavior formulas (Rothermel spread, fire shape,
//!   crown fire, spotting, mortality, ignition, weather)
//! - [`graph`]: the [`ComputationGraph`] that reconfigures and runs the nodes
//!
//! ## Example
//!
//! ```no_run
//! use behave_core::{ComputationGraph, VarId};
//!
//! let mut graph = ComputationGraph::standard()?;
//! graph.reconfigure()?;
//! graph.set_text("vSurfaceFuelBedModel", "1")?;
//! graph.set_value("vWindSpeedAtMidflame", 5.0)?;
//! graph.calculate()?;
//! let ros = graph.vars().value(VarId::SurfaceFireSpreadAtHead);
//! assert!(ros >= 0.0);
//! # Ok::<(), behave_core::EqError>(())
//! ```

/// Threshold below which a quantity counts as zero
pub const SMIDGEN: f64 = 1.0e-7;

// Registries and values
pub mod error;
pub mod function;
pub mod tokenizer;
pub mod units;
pub mod variable;

// Configuration and reference data
pub mod catalog;
pub mod config;

// Formulas and nodes
pub mod contain;
pub mod equations;
pub mod expected_spread;
pub mod fuel_bed;
pub mod physics;
pub mod state;

// Driver
pub mod graph;
mod reconfig;
pub mod trace;

pub use catalog::{Catalog, FuelModel, MoistureScenario};
pub use config::{Configuration, Prop, PropValue, PropertyDict};
pub use contain::{ContainStatus, ContainmentSimulator, FriedFriedSimulator};
pub use error::{EnglishMessages, EqError, MessageCatalog, Result};
pub use expected_spread::{ExpectedSpreadSampler, FinneySampler};
pub use function::{FunId, FunctionRegistry};
pub use graph::ComputationGraph;
pub use trace::{BufferSink, TraceRecord, TraceSink, TraceValue, TracingSink};
pub use variable::{VarId, Variable, VariableStore};
