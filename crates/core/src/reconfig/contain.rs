//! Containment module procedure

use super::Reconfig;
use crate::config::{Prop, Resources};
use crate::function::FunId;
use crate::variable::VarId;

const OUTPUTS: &[(VarId, Prop)] = &[
    (VarId::ContainLine, Prop::ContainCalcLine),
    (VarId::ContainResourcesUsed, Prop::ContainCalcResourcesUsed),
    (VarId::ContainSize, Prop::ContainCalcSize),
    (VarId::ContainStatus, Prop::ContainCalcStatus),
    (VarId::ContainTime, Prop::ContainCalcTime),
    (VarId::ContainCost, Prop::ContainCalcCost),
    (VarId::ContainDiagram, Prop::ContainCalcDiagram),
    (VarId::ContainAttackPerimeter, Prop::ContainCalcAttackPerimeter),
    (VarId::ContainAttackSize, Prop::ContainCalcAttackSize),
];

impl Reconfig<'_> {
    pub(super) fn contain(&mut self) {
        if Self::skip("contain", self.config.modules.contain) {
            return;
        }
        let opts = self.config.contain;
        let single = opts.resources == Resources::Single;
        self.funs.set_active(FunId::ContainFF, !single);
        self.funs.set_active(FunId::ContainFFSingle, single);
        self.var(VarId::ContainResourceName).is_constant = single;

        let limit = self.var(VarId::ContainLimitDist);
        limit.is_constant = !opts.dist_limit;
        limit.is_user_input = opts.dist_limit;

        self.outputs(OUTPUTS);
        let costed = self.vars.get(VarId::ContainCost).is_user_output;
        self.var(VarId::ContainResourceBaseCost).is_constant = !costed;
        self.var(VarId::ContainResourceHourCost).is_constant = !costed;

        if self.config.modules.surface || self.config.modules.size {
            self.on(&[FunId::ContainFFReportSpread, FunId::ContainFFReportRatio]);
        }
        if self.config.modules.size {
            self.on(&[FunId::ContainFFReportSize]);
        }
        self.on(&[FunId::ContainFFReportSpread]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Configuration, PropertyDict};
    use crate::function::FunctionRegistry;
    use crate::variable::VariableStore;

    fn run(d: PropertyDict) -> (FunctionRegistry, VariableStore) {
        let config = Configuration::from_dict(d);
        let mut funs = FunctionRegistry::new();
        let mut vars = VariableStore::new(&["1".to_string()], &["D1L1".to_string()]).unwrap();
        Reconfig::new(&config, &mut funs, &mut vars).contain();
        (funs, vars)
    }

    #[test]
    fn test_single_resource_defaults() {
        let mut d = PropertyDict::new();
        d.set_bool(Prop::ContainModuleActive, true).unwrap();
        let (funs, vars) = run(d);
        assert!(funs.is_active(FunId::ContainFFSingle));
        assert!(!funs.is_active(FunId::ContainFF));
        assert!(funs.is_active(FunId::ContainFFReportSpread));
        assert!(funs.is_active(FunId::ContainFFReportRatio));
        assert!(!funs.is_active(FunId::ContainFFReportSize));
        assert!(vars.get(VarId::ContainResourceName).is_constant);
        assert!(vars.get(VarId::ContainLimitDist).is_constant);
        assert!(!vars.get(VarId::ContainLimitDist).is_user_input);
        assert!(vars.get(VarId::ContainResourceBaseCost).is_constant);
        assert!(vars.get(VarId::ContainStatus).is_user_output);
    }

    #[test]
    fn test_multiple_resources_with_cost_and_limit() {
        let mut d = PropertyDict::new();
        d.set_bool(Prop::ContainModuleActive, true).unwrap();
        d.set_bool(Prop::SizeModuleActive, true).unwrap();
        d.select(
            &[Prop::ContainConfResourcesSingle, Prop::ContainConfResourcesMultiple],
            Prop::ContainConfResourcesMultiple,
        );
        d.select(
            &[Prop::ContainConfLimitDistOff, Prop::ContainConfLimitDistOn],
            Prop::ContainConfLimitDistOn,
        );
        d.set_bool(Prop::ContainCalcCost, true).unwrap();
        let (funs, vars) = run(d);
        assert!(funs.is_active(FunId::ContainFF));
        assert!(!funs.is_active(FunId::ContainFFSingle));
        assert!(funs.is_active(FunId::ContainFFReportSize));
        assert!(vars.get(VarId::ContainLimitDist).is_user_input);
        assert!(!vars.get(VarId::ContainResourceHourCost).is_constant);
        assert!(!vars.get(VarId::ContainResourceName).is_constant);
    }
}
