//! Mutable computation state and the read-only context nodes run against

use crate::catalog::Catalog;
use crate::config::Configuration;
use crate::contain::ContainmentSimulator;
use crate::error::Result;
use crate::expected_spread::ExpectedSpreadSampler;
use crate::fuel_bed::{FuelBedState, FuelParticle};
use crate::variable::VariableStore;

/// Everything the equation nodes write
///
/// Cloning gives an isolated snapshot; the two-fuel blend runs each pass on
/// one.
#[derive(Debug, Clone)]
pub struct EqState {
    pub vars: VariableStore,
    /// Particles of the current fuel bed, rebuilt by the fuel-parameter nodes
    pub particles: Vec<FuelParticle>,
    /// Bed intermediates from the last bed-intermediates node
    pub bed: FuelBedState,
    /// Particle loads after the herbaceous transfer, one per particle
    pub bed_loads: Vec<f64>,
}

impl EqState {
    /// Fresh state whose catalog-backed variables list the catalog's names
    pub fn new(catalog: &Catalog) -> Result<Self> {
        Ok(Self {
            vars: VariableStore::new(&catalog.fuel_model_names(), &catalog.scenario_names())?,
            particles: Vec::new(),
            bed: FuelBedState::default(),
            bed_loads: Vec::new(),
        })
    }
}

/// Collaborators shared by every node in a calculation
#[derive(Clone, Copy)]
pub struct EqContext<'a> {
    pub config: &'a Configuration,
    pub catalog: &'a Catalog,
    pub contain: &'a dyn ContainmentSimulator,
    pub sampler: &'a dyn ExpectedSpreadSampler,
}
