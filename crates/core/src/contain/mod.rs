//! Initial-attack containment
//!
//! The containment nodes build a [`ContainInput`] from the variable store and
//! hand it to a [`ContainmentSimulator`]. Distances are chains, rates chains
//! per hour, times minutes since the fire was reported and sizes acres.

mod fried;

pub use fried::FriedFriedSimulator;

use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Where line construction starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tactic {
    HeadAttack,
    RearAttack,
}

impl Tactic {
    /// Tactic from its item index; anything but 1 is a head attack
    pub fn from_index(index: usize) -> Self {
        if index == 1 {
            Self::RearAttack
        } else {
            Self::HeadAttack
        }
    }
}

/// One suppression resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainResource {
    pub name: String,
    /// Arrival (min since report)
    pub arrival: f64,
    /// Time on the line (min)
    pub duration: f64,
    /// Line production rate (ch/h), split evenly between both flanks
    pub production: f64,
    pub base_cost: f64,
    pub hour_cost: f64,
}

/// Everything a simulator needs for one run
#[derive(Debug, Clone, PartialEq)]
pub struct ContainInput {
    /// Fire size at report (ac)
    pub report_size: f64,
    /// Head spread rate at report (ch/h)
    pub report_rate: f64,
    pub lw_ratio: f64,
    pub resources: Vec<ContainResource>,
    pub tactic: Tactic,
    /// Distance between the fire edge and the line (ch)
    pub attack_dist: f64,
    /// Head distance at which the run gives up (ch)
    pub dist_limit: f64,
    pub retry: bool,
    pub min_steps: usize,
    pub max_steps: usize,
}

/// Terminal state of a simulation run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContainStatus {
    Unreported,
    Reported,
    Attacked,
    Contained,
    Overrun,
    Exhausted,
    Overflow,
    DistLimit,
}

impl ContainStatus {
    /// Position in the Unreported..DistLimit sequence
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Results of a simulation run
#[derive(Debug, Clone, PartialEq)]
pub struct ContainOutcome {
    pub status: ContainStatus,
    /// Enclosed area (ac)
    pub final_size: f64,
    pub final_cost: f64,
    /// Line built on both flanks (ch)
    pub final_line: f64,
    /// Time the run ended (min since report)
    pub final_time: f64,
    /// Head and back distances when line construction began (ch)
    pub attack_head: f64,
    pub attack_back: f64,
    /// Head and back distances when the first resource arrived (ch)
    pub initial_attack_head: f64,
    pub initial_attack_back: f64,
    /// Head and back distances at report (ch)
    pub report_head: f64,
    pub report_back: f64,
    pub step: usize,
    pub resources_used: usize,
    /// Left-flank line positions; the right flank mirrors them across the x axis
    pub perimeter: Vec<Point2<f64>>,
    pub x_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl ContainOutcome {
    /// Outcome of a run that never attacked
    pub fn unattacked(status: ContainStatus, report_head: f64, report_back: f64) -> Self {
        Self {
            status,
            final_size: 0.0,
            final_cost: 0.0,
            final_line: 0.0,
            final_time: 0.0,
            attack_head: 0.0,
            attack_back: 0.0,
            initial_attack_head: 0.0,
            initial_attack_back: 0.0,
            report_head,
            report_back,
            step: 0,
            resources_used: 0,
            perimeter: Vec::new(),
            x_min: 0.0,
            x_max: 0.0,
            y_max: 0.0,
        }
    }
}

/// Containment model behind the containment nodes
pub trait ContainmentSimulator: Send + Sync {
    /// Runs to a terminal status
    fn run(&self, input: &ContainInput) -> ContainOutcome;
}

/// Outcome item reported for a terminal status: 0 contained, 1 withdrawn, 2 escaped
const OUTCOME_BY_STATUS: [usize; 8] = [2, 2, 2, 0, 1, 2, 2, 2];

/// Collapses a run into the reported outcome item and final size
///
/// Anything short of containment reports a size of -1. Such runs are
/// "withdrawn" when line was built and "escaped" otherwise.
pub fn reported_outcome(outcome: &ContainOutcome) -> (usize, f64) {
    let status = OUTCOME_BY_STATUS[outcome.status.index()];
    if status == 0 {
        (0, outcome.final_size)
    } else if outcome.final_line > 0.0 {
        (1, -1.0)
    } else {
        (2, -1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(status: ContainStatus, line: f64) -> ContainOutcome {
        ContainOutcome {
            final_line: line,
            final_size: 12.5,
            ..ContainOutcome::unattacked(status, 1.0, 0.5)
        }
    }

    #[test]
    fn test_contained_keeps_size() {
        assert_eq!(reported_outcome(&outcome(ContainStatus::Contained, 40.0)), (0, 12.5));
    }

    #[test]
    fn test_failures_force_sentinel_size() {
        assert_eq!(reported_outcome(&outcome(ContainStatus::Overrun, 40.0)), (1, -1.0));
        assert_eq!(reported_outcome(&outcome(ContainStatus::Overrun, 0.0)), (2, -1.0));
        assert_eq!(reported_outcome(&outcome(ContainStatus::Exhausted, 3.0)), (1, -1.0));
        assert_eq!(reported_outcome(&outcome(ContainStatus::DistLimit, 0.0)), (2, -1.0));
    }

    #[test]
    fn test_tactic_index() {
        assert_eq!(Tactic::from_index(1), Tactic::RearAttack);
        assert_eq!(Tactic::from_index(0), Tactic::HeadAttack);
        assert_eq!(ContainStatus::DistLimit.index(), 7);
    }
}
