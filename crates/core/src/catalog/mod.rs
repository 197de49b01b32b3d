//! Fuel-model and moisture-scenario catalogs

mod fuel_model;
mod moisture;

pub use fuel_model::{standard_models, FuelModel, TONS_PER_ACRE};
pub use moisture::{standard_scenarios, MoistureScenario};

use crate::error::{EqError, Result};
use rustc_hash::FxHashMap;

/// Name-indexed fuel models and moisture scenarios
#[derive(Debug, Clone)]
pub struct Catalog {
    fuel_models: Vec<FuelModel>,
    scenarios: Vec<MoistureScenario>,
    fuel_index: FxHashMap<String, usize>,
    scenario_index: FxHashMap<String, usize>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(standard_models(), standard_scenarios())
    }
}

impl Catalog {
    /// Later entries replace earlier ones with the same name
    pub fn new(fuel_models: Vec<FuelModel>, scenarios: Vec<MoistureScenario>) -> Self {
        let mut catalog = Self {
            fuel_models: Vec::new(),
            scenarios: Vec::new(),
            fuel_index: FxHashMap::default(),
            scenario_index: FxHashMap::default(),
        };
        fuel_models.into_iter().for_each(|m| catalog.add_fuel_model(m));
        scenarios.into_iter().for_each(|s| catalog.add_scenario(s));
        catalog
    }

    pub fn add_fuel_model(&mut self, model: FuelModel) {
        if let Some(&i) = self.fuel_index.get(&model.name) {
            self.fuel_models[i] = model;
        } else {
            self.fuel_index.insert(model.name.clone(), self.fuel_models.len());
            self.fuel_models.push(model);
        }
    }

    pub fn add_scenario(&mut self, scenario: MoistureScenario) {
        if let Some(&i) = self.scenario_index.get(&scenario.name) {
            self.scenarios[i] = scenario;
        } else {
            self.scenario_index.insert(scenario.name.clone(), self.scenarios.len());
            self.scenarios.push(scenario);
        }
    }

    pub fn fuel_model(&self, name: &str) -> Result<&FuelModel> {
        self.fuel_index
            .get(name)
            .map(|&i| &self.fuel_models[i])
            .ok_or_else(|| EqError::FuelModelNotFound(name.to_string()))
    }

    pub fn scenario(&self, name: &str) -> Result<&MoistureScenario> {
        self.scenario_index
            .get(name)
            .map(|&i| &self.scenarios[i])
            .ok_or_else(|| EqError::MoistureScenarioNotFound(name.to_string()))
    }

    /// Fuel model names in catalog order
    pub fn fuel_model_names(&self) -> Vec<String> {
        self.fuel_models.iter().map(|m| m.name.clone()).collect()
    }

    /// Scenario names in catalog order
    pub fn scenario_names(&self) -> Vec<String> {
        self.scenarios.iter().map(|s| s.name.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        let c = Catalog::default();
        assert_eq!(c.fuel_model("10").unwrap().name, "10");
        assert_eq!(c.scenario("D2L3").unwrap().name, "D2L3");
        assert_eq!(
            c.fuel_model("99").unwrap_err(),
            EqError::FuelModelNotFound("99".to_string())
        );
        assert_eq!(
            c.scenario("D9").unwrap_err().message_key(),
            "EqCalc:MoisScenarioNotFound"
        );
    }

    #[test]
    fn test_replace_keeps_position() {
        let mut c = Catalog::default();
        let mut m = c.fuel_model("3").unwrap().clone();
        m.depth = 4.0;
        c.add_fuel_model(m);
        assert_eq!(c.fuel_model("3").unwrap().depth, 4.0);
        assert_eq!(c.fuel_model_names()[2], "3");
        assert_eq!(c.fuel_model_names().len(), 19);
    }
}
