//! Named moisture scenarios
//!
//! Dead classes D1 (very low) to D4 (high) crossed with live classes L1
//! (fully cured) to L4 (fully green).

use serde::{Deserialize, Serialize};

/// Six size-class moistures as fractions of oven-dry weight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoistureScenario {
    pub name: String,
    pub description: String,
    pub dead1: f64,
    pub dead10: f64,
    pub dead100: f64,
    pub dead1000: f64,
    pub live_herb: f64,
    pub live_wood: f64,
}

const DEAD: [(&str, &str, [f64; 3]); 4] = [
    ("D1", "Very low dead fuel moisture", [3.0, 4.0, 5.0]),
    ("D2", "Low dead fuel moisture", [6.0, 7.0, 8.0]),
    ("D3", "Moderate dead fuel moisture", [9.0, 10.0, 11.0]),
    ("D4", "High dead fuel moisture", [12.0, 13.0, 14.0]),
];

const LIVE: [(&str, &str, [f64; 2]); 4] = [
    ("L1", "fully cured herbaceous", [30.0, 60.0]),
    ("L2", "2/3 cured herbaceous", [60.0, 90.0]),
    ("L3", "1/3 cured herbaceous", [90.0, 120.0]),
    ("L4", "fully green herbaceous", [120.0, 150.0]),
];

/// All sixteen dead × live combinations
pub fn standard_scenarios() -> Vec<MoistureScenario> {
    DEAD.iter()
        .flat_map(|&(dname, ddesc, dead)| {
            LIVE.iter().map(move |&(lname, ldesc, live)| MoistureScenario {
                name: format!("{dname}{lname}"),
                description: format!("{ddesc}, {ldesc}"),
                dead1: dead[0] / 100.0,
                dead10: dead[1] / 100.0,
                dead100: dead[2] / 100.0,
                dead1000: (dead[2] + 2.0) / 100.0,
                live_herb: live[0] / 100.0,
                live_wood: live[1] / 100.0,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sixteen_scenarios() {
        let s = standard_scenarios();
        assert_eq!(s.len(), 16);
        assert_eq!(s[0].name, "D1L1");
        assert_eq!(s[15].name, "D4L4");
        assert_relative_eq!(s[5].dead10, 0.07);
        assert_relative_eq!(s[5].live_herb, 0.60);
    }
}
