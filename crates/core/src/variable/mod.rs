//! Variable registry and store

pub mod items;
mod registry;
mod store;

pub use registry::{Items, VarId, VarKind, VarSpec};
pub use store::{Variable, VariableStore};
