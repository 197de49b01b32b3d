//! Reconfiguration engine
//!
//! Turns a [`Configuration`] into node activation flags and variable masks.
//! The eleven module procedures run in a fixed order because later modules
//! test earlier modules' master switches:
//!
//! 1. Documentation
//! 2. Surface
//! 3. Crown
//! 4. Size
//! 5. Contain
//! 6. Spot
//! 7. Scorch
//! 8. Mortality
//! 9. Ignition
//! 10. Weather
//! 11. Safety
//!
//! A procedure whose module is inactive returns without touching anything, so
//! flags set by an earlier reconfiguration survive until
//! [`crate::ComputationGraph::clear_activation`] resets them.

mod contain;
mod crown;
mod effects;
mod spread;
mod surface;

use crate::config::{Configuration, Prop};
use crate::error::Result;
use crate::function::{FunId, FunctionRegistry};
use crate::variable::{VarId, Variable, VariableStore};
use tracing::debug;

/// Item of the wind adjustment method that takes the factor as entered
const WAF_USER_INPUT: usize = 2;

/// Mutable view of one graph while a reconfiguration runs
pub(crate) struct Reconfig<'a> {
    config: &'a Configuration,
    funs: &'a mut FunctionRegistry,
    vars: &'a mut VariableStore,
}

impl<'a> Reconfig<'a> {
    pub(crate) fn new(
        config: &'a Configuration,
        funs: &'a mut FunctionRegistry,
        vars: &'a mut VariableStore,
    ) -> Self {
        Self { config, funs, vars }
    }

    /// Runs every module procedure in order
    pub(crate) fn run(&mut self) -> Result<()> {
        self.documentation();
        self.surface()?;
        self.crown();
        self.size();
        self.contain();
        self.spot();
        self.scorch()?;
        self.mortality();
        self.ignition();
        self.weather();
        self.safety();
        debug!(active = self.funs.active().count(), "reconfiguration finished");
        Ok(())
    }

    fn on(&mut self, ids: &[FunId]) {
        self.funs.activate(ids);
    }

    fn off(&mut self, ids: &[FunId]) {
        self.funs.deactivate(ids);
    }

    fn calc(&self, prop: Prop) -> bool {
        self.config.calc(prop)
    }

    fn var(&mut self, id: VarId) -> &mut Variable {
        self.vars.get_mut(id)
    }

    /// Shows `id` as a result when `prop` is set
    fn output(&mut self, id: VarId, prop: Prop) {
        let shown = self.calc(prop);
        self.var(id).is_user_output = shown;
    }

    fn outputs(&mut self, list: &[(VarId, Prop)]) {
        for &(id, prop) in list {
            self.output(id, prop);
        }
    }

    fn show(&mut self, id: VarId, shown: bool) {
        self.var(id).is_user_output = shown;
    }

    /// Pins `id` at a native value
    fn fix(&mut self, id: VarId, value: f64) {
        let v = self.var(id);
        v.is_constant = true;
        v.update(value);
    }

    /// Selects item `index` of `id`, pinning it when `constant`
    fn pick(&mut self, id: VarId, index: usize, constant: bool) -> Result<()> {
        let v = self.var(id);
        v.is_constant = constant;
        v.update_item(index)
    }

    /// Skips a module whose master switch is off
    fn skip(module: &'static str, active: bool) -> bool {
        if active {
            debug!(module, "reconfiguring module");
        } else {
            debug!(module, "module inactive, flags left as they were");
        }
        !active
    }

    fn documentation(&mut self) {
        let docs = self.config.docs;
        let groups: [(bool, &[VarId]); 4] = [
            (docs.description, &[VarId::DocDescription]),
            (docs.rx, &[VarId::DocRxAdminUnit, VarId::DocRxName, VarId::DocRxPreparedBy]),
            (docs.fire, &[VarId::DocFireAnalyst, VarId::DocFireName, VarId::DocFirePeriod]),
            (
                docs.training,
                &[VarId::DocTrainingCourse, VarId::DocTrainingExercise, VarId::DocTrainingTrainee],
            ),
        ];
        for (active, ids) in groups {
            if !active {
                continue;
            }
            for &id in ids {
                let v = self.var(id);
                v.is_user_input = true;
                v.is_user_output = true;
            }
        }
        debug!(module = "documentation", "reconfigured documentation fields");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PropertyDict;

    fn store() -> VariableStore {
        VariableStore::new(&["1".to_string()], &["D1L1".to_string()]).unwrap()
    }

    #[test]
    fn test_documentation_groups() {
        let mut d = PropertyDict::new();
        d.set_bool(Prop::DocFireActive, true).unwrap();
        let config = Configuration::from_dict(d);
        let mut funs = FunctionRegistry::new();
        let mut vars = store();
        Reconfig::new(&config, &mut funs, &mut vars).documentation();
        assert!(vars.get(VarId::DocFireName).is_user_input);
        assert!(vars.get(VarId::DocFirePeriod).is_user_output);
        assert!(!vars.get(VarId::DocRxName).is_user_input);
        assert_eq!(funs.active().count(), 0);
    }

    #[test]
    fn test_pick_pins_item() {
        let config = Configuration::default();
        let mut funs = FunctionRegistry::new();
        let mut vars = store();
        let mut r = Reconfig::new(&config, &mut funs, &mut vars);
        r.pick(VarId::WindAdjMethod, 2, true).unwrap();
        assert!(r.pick(VarId::WindAdjMethod, 3, true).is_err());
        assert_eq!(vars.item(VarId::WindAdjMethod), 2);
        assert!(vars.get(VarId::WindAdjMethod).is_constant);
    }
}
