//! The computation graph and its driver
//!
//! A [`ComputationGraph`] owns every variable, the node activation flags, the
//! resolved configuration and the collaborators the nodes call into. Nodes run
//! in [`FunId`] declaration order; the graph never sorts them.

use crate::catalog::Catalog;
use crate::config::{Configuration, PropertyDict};
use crate::contain::{ContainmentSimulator, FriedFriedSimulator};
use crate::equations;
use crate::error::{EqError, Result};
use crate::expected_spread::{ExpectedSpreadSampler, FinneySampler};
use crate::function::{FunId, FunctionRegistry};
use crate::reconfig::Reconfig;
use crate::state::{EqContext, EqState};
use crate::trace::{TraceRecord, TraceSink, TraceValue};
use crate::variable::{VarId, Variable, VariableStore};
use rustc_hash::FxHashSet;
use std::sync::Arc;
use tracing::{debug, trace};

/// Variables, nodes and configuration of one fire-behavior worksheet
///
/// # Lifecycle
///
/// 1. Build with [`ComputationGraph::new`]; every node starts inactive and
///    every mask cleared.
/// 2. Call [`ComputationGraph::reconfigure`] after changing the configuration.
/// 3. Enter the values listed by [`ComputationGraph::active_inputs`].
/// 4. Call [`ComputationGraph::calculate`] and read the user outputs.
///
/// Reconfiguration never resets flags set by an earlier run for modules that
/// are now inactive. Call [`ComputationGraph::clear_activation`] first when a
/// clean slate is wanted.
pub struct ComputationGraph {
    state: EqState,
    funs: FunctionRegistry,
    config: Configuration,
    catalog: Catalog,
    contain: Box<dyn ContainmentSimulator>,
    sampler: Box<dyn ExpectedSpreadSampler>,
    trace: Option<Arc<dyn TraceSink>>,
}

impl std::fmt::Debug for ComputationGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComputationGraph")
            .field("active", &self.funs.active().count())
            .field("config", &self.config)
            .field("traced", &self.trace.is_some())
            .finish_non_exhaustive()
    }
}

impl ComputationGraph {
    /// Graph over `catalog` with the default containment simulator and sampler
    pub fn new(catalog: Catalog, config: Configuration) -> Result<Self> {
        Ok(Self {
            state: EqState::new(&catalog)?,
            funs: FunctionRegistry::new(),
            config,
            catalog,
            contain: Box::new(FriedFriedSimulator),
            sampler: Box::new(FinneySampler::default()),
            trace: None,
        })
    }

    /// Graph over the standard catalog and default configuration
    pub fn standard() -> Result<Self> {
        Self::new(Catalog::default(), Configuration::default())
    }

    /// Replaces the containment simulator
    pub fn with_simulator(mut self, simulator: Box<dyn ContainmentSimulator>) -> Self {
        self.contain = simulator;
        self
    }

    /// Replaces the two-dimensional expected-spread sampler
    pub fn with_sampler(mut self, sampler: Box<dyn ExpectedSpreadSampler>) -> Self {
        self.sampler = sampler;
        self
    }

    /// Attaches or detaches the per-node trace sink
    pub fn set_trace_sink(&mut self, sink: Option<Arc<dyn TraceSink>>) {
        self.trace = sink;
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Installs a new configuration; takes effect at the next reconfiguration
    pub fn set_config(&mut self, config: Configuration) {
        self.config = config;
    }

    /// Resolves `props` and installs the result
    pub fn set_properties(&mut self, props: PropertyDict) {
        self.config = Configuration::from_dict(props);
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn vars(&self) -> &VariableStore {
        &self.state.vars
    }

    pub fn vars_mut(&mut self) -> &mut VariableStore {
        &mut self.state.vars
    }

    pub fn state(&self) -> &EqState {
        &self.state
    }

    pub fn functions(&self) -> &FunctionRegistry {
        &self.funs
    }

    /// Applies the current configuration to node flags and variable masks
    pub fn reconfigure(&mut self) -> Result<()> {
        Reconfig::new(&self.config, &mut self.funs, &mut self.state.vars).run()
    }

    /// Deactivates every node and clears every variable mask
    pub fn clear_activation(&mut self) {
        self.funs.clear();
        self.state.vars.clear_masks();
    }

    /// Runs every active node in execution order
    ///
    /// Stops at the first failing node. Variables written before the failure
    /// keep their new values.
    pub fn calculate(&mut self) -> Result<()> {
        let active: Vec<FunId> = self.funs.active().collect();
        debug!(nodes = active.len(), "calculating");
        for id in active {
            self.invoke(id)?;
        }
        Ok(())
    }

    /// Runs one node if it is active
    pub fn invoke(&mut self, id: FunId) -> Result<()> {
        if !self.funs.is_active(id) {
            return Ok(());
        }
        trace!(function = id.name(), "invoking");
        let ctx = EqContext {
            config: &self.config,
            catalog: &self.catalog,
            contain: self.contain.as_ref(),
            sampler: self.sampler.as_ref(),
        };
        equations::run(id, &mut self.state, &ctx)?;
        if let Some(sink) = &self.trace {
            sink.record(&self.record(id));
        }
        Ok(())
    }

    fn record(&self, id: FunId) -> TraceRecord {
        let values = |ids: &[VarId]| -> Vec<TraceValue> {
            ids.iter()
                .map(|&v| {
                    let var = self.state.vars.get(v);
                    TraceValue {
                        name: var.name(),
                        value: var.display(),
                        units: var.display_units().to_string(),
                    }
                })
                .collect()
        };
        TraceRecord {
            function: id.name(),
            inputs: values(id.inputs()),
            outputs: values(id.outputs()),
        }
    }

    /// Leaf inputs of the active subgraph
    ///
    /// Declared inputs of active nodes that no active node writes, minus the
    /// variables the configuration holds constant, in [`VarId`] order.
    pub fn active_inputs(&self) -> Vec<VarId> {
        let produced: FxHashSet<VarId> = self
            .funs
            .active()
            .flat_map(|id| id.outputs().iter().copied())
            .collect();
        let mut inputs: Vec<VarId> = self
            .funs
            .active()
            .flat_map(|id| id.inputs().iter().copied())
            .filter(|v| !produced.contains(v) && !self.state.vars.get(*v).is_constant)
            .collect::<FxHashSet<_>>()
            .into_iter()
            .collect();
        inputs.sort_unstable();
        inputs
    }

    /// Whether fuel parameters are entered and may be seeded from a catalog model
    pub fn can_init_from_fuel_model(&self) -> bool {
        self.funs.is_active(FunId::SurfaceFuelBedParms) && !self.funs.is_active(FunId::SurfaceFuelBedModel)
    }

    /// Variable by external name
    pub fn variable(&self, name: &str) -> Result<&Variable> {
        self.state.vars.by_name(name)
    }

    /// Node by external name
    pub fn function(&self, name: &str) -> Result<FunId> {
        FunId::from_name(name).ok_or_else(|| EqError::UnknownFunction(name.to_string()))
    }

    /// Activation flag of the node called `name`
    pub fn is_active(&self, name: &str) -> Result<bool> {
        Ok(self.funs.is_active(self.function(name)?))
    }

    /// Writes a native value to the variable called `name`
    pub fn set_value(&mut self, name: &str, native: f64) -> Result<()> {
        self.state.vars.by_name_mut(name)?.update(native);
        Ok(())
    }

    /// Selects a discrete item of the variable called `name`
    pub fn set_item(&mut self, name: &str, index: usize) -> Result<()> {
        self.state.vars.by_name_mut(name)?.update_item(index)
    }

    /// Stores entry text on the variable called `name`
    pub fn set_text(&mut self, name: &str, text: &str) -> Result<()> {
        self.state.vars.by_name_mut(name)?.set_text(text)
    }
}
