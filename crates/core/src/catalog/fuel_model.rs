//! Surface fuel models
//!
//! # References
//! - Anderson, H.E. (1982). Aids to determining fuel models for estimating
//!   fire behavior. USDA Forest Service GTR INT-122.
//! - Scott, J.H. & Burgan, R.E. (2005). Standard fire behavior fuel models.
//!   USDA Forest Service GTR RMRS-153.

use serde::{Deserialize, Serialize};

/// Tons per acre to pounds per square foot
pub const TONS_PER_ACRE: f64 = 0.0459137;

/// One fuel model in native units (ft, lb/ft², ft²/ft³, Btu/lb, fraction)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelModel {
    pub name: String,
    pub description: String,
    pub depth: f64,
    pub mext: f64,
    pub heat_dead: f64,
    pub heat_live: f64,
    pub load1: f64,
    pub load10: f64,
    pub load100: f64,
    pub load_herb: f64,
    pub load_wood: f64,
    pub savr1: f64,
    pub savr_herb: f64,
    pub savr_wood: f64,
    /// Herbaceous load transfer equation: 0 static, 1 dynamic
    pub transfer: usize,
}

impl FuelModel {
    /// Builds a model from loads in tons per acre and moisture of extinction in percent
    fn tons(
        name: &str,
        description: &str,
        loads: [f64; 5],
        savr: [f64; 3],
        depth: f64,
        mext_pct: f64,
        transfer: usize,
    ) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            depth,
            mext: mext_pct / 100.0,
            heat_dead: 8000.0,
            heat_live: 8000.0,
            load1: loads[0] * TONS_PER_ACRE,
            load10: loads[1] * TONS_PER_ACRE,
            load100: loads[2] * TONS_PER_ACRE,
            load_herb: loads[3] * TONS_PER_ACRE,
            load_wood: loads[4] * TONS_PER_ACRE,
            savr1: savr[0],
            savr_herb: savr[1],
            savr_wood: savr[2],
            transfer,
        }
    }

    /// Total fuel load (lb/ft²)
    pub fn total_load(&self) -> f64 {
        self.load1 + self.load10 + self.load100 + self.load_herb + self.load_wood
    }
}

/// The 13 original models followed by a selection of dynamic-era models
pub fn standard_models() -> Vec<FuelModel> {
    vec![
        FuelModel::tons("1", "Short grass", [0.74, 0.0, 0.0, 0.0, 0.0], [3500.0, 1500.0, 1500.0], 1.0, 12.0, 0),
        FuelModel::tons(
            "2",
            "Timber grass and understory",
            [2.0, 1.0, 0.5, 0.5, 0.0],
            [3000.0, 1500.0, 1500.0],
            1.0,
            15.0,
            0,
        ),
        FuelModel::tons("3", "Tall grass", [3.01, 0.0, 0.0, 0.0, 0.0], [1500.0, 1500.0, 1500.0], 2.5, 25.0, 0),
        FuelModel::tons("4", "Chaparral", [5.01, 4.01, 2.0, 0.0, 5.01], [2000.0, 1500.0, 1500.0], 6.0, 20.0, 0),
        FuelModel::tons("5", "Brush", [1.0, 0.5, 0.0, 0.0, 2.0], [2000.0, 1500.0, 1500.0], 2.0, 20.0, 0),
        FuelModel::tons("6", "Dormant brush", [1.5, 2.5, 2.0, 0.0, 0.0], [1750.0, 1500.0, 1500.0], 2.5, 25.0, 0),
        FuelModel::tons("7", "Southern rough", [1.13, 1.87, 1.5, 0.0, 0.37], [1750.0, 1500.0, 1550.0], 2.5, 40.0, 0),
        FuelModel::tons(
            "8",
            "Short needle litter",
            [1.5, 1.0, 2.5, 0.0, 0.0],
            [2000.0, 1500.0, 1500.0],
            0.2,
            30.0,
            0,
        ),
        FuelModel::tons(
            "9",
            "Long needle or hardwood litter",
            [2.92, 0.41, 0.15, 0.0, 0.0],
            [2500.0, 1500.0, 1500.0],
            0.2,
            25.0,
            0,
        ),
        FuelModel::tons(
            "10",
            "Timber litter and understory",
            [3.01, 2.0, 5.01, 0.0, 2.0],
            [2000.0, 1500.0, 1500.0],
            1.0,
            25.0,
            0,
        ),
        FuelModel::tons("11", "Light logging slash", [1.5, 4.51, 5.51, 0.0, 0.0], [1500.0, 1500.0, 1500.0], 1.0, 15.0, 0),
        FuelModel::tons(
            "12",
            "Medium logging slash",
            [4.01, 14.03, 16.53, 0.0, 0.0],
            [1500.0, 1500.0, 1500.0],
            2.3,
            20.0,
            0,
        ),
        FuelModel::tons(
            "13",
            "Heavy logging slash",
            [7.01, 23.04, 28.05, 0.0, 0.0],
            [1500.0, 1500.0, 1500.0],
            3.0,
            25.0,
            0,
        ),
        FuelModel::tons("gr1", "Short, sparse dry climate grass", [0.1, 0.0, 0.0, 0.3, 0.0], [2200.0, 2000.0, 1500.0], 0.4, 15.0, 1),
        FuelModel::tons("gr2", "Low load, dry climate grass", [0.1, 0.0, 0.0, 1.0, 0.0], [2000.0, 1800.0, 1500.0], 1.0, 15.0, 1),
        FuelModel::tons(
            "gs2",
            "Moderate load, dry climate grass-shrub",
            [0.5, 0.5, 0.0, 0.6, 1.0],
            [2000.0, 1800.0, 1800.0],
            1.5,
            15.0,
            1,
        ),
        FuelModel::tons(
            "sh2",
            "Moderate load, dry climate shrub",
            [1.35, 2.4, 0.75, 0.0, 3.85],
            [2000.0, 1500.0, 1600.0],
            1.0,
            15.0,
            0,
        ),
        FuelModel::tons(
            "tu1",
            "Light load, dry climate timber-grass-shrub",
            [0.2, 0.9, 1.5, 0.2, 0.9],
            [2000.0, 1800.0, 1600.0],
            0.6,
            20.0,
            1,
        ),
        FuelModel::tons(
            "tl3",
            "Moderate load conifer litter",
            [0.5, 2.2, 2.8, 0.0, 0.0],
            [2000.0, 1500.0, 1500.0],
            0.3,
            20.0,
            0,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_model_1_load() {
        let models = standard_models();
        let m1 = &models[0];
        assert_eq!(m1.name, "1");
        assert_relative_eq!(m1.load1, 0.74 * TONS_PER_ACRE);
        assert_relative_eq!(m1.mext, 0.12);
        assert_relative_eq!(m1.total_load(), m1.load1);
    }

    #[test]
    fn test_dynamic_models_flagged() {
        let models = standard_models();
        let dynamic: Vec<_> = models.iter().filter(|m| m.transfer == 1).map(|m| m.name.as_str()).collect();
        assert_eq!(dynamic, vec!["gr1", "gr2", "gs2", "tu1"]);
    }
}
