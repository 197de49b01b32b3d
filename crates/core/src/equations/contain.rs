//! Containment nodes
//!
//! The report nodes convert surface fire outputs into containment units. The
//! two run nodes differ only in how resources are read: the multiple-resource
//! node splits every list variable into tokens, the single-resource node uses
//! each variable's first value and the whole name text.

use crate::config::ContainOptions;
use crate::contain::{reported_outcome, ContainInput, ContainOutcome, ContainResource, ContainmentSimulator, Tactic};
use crate::error::Result;
use crate::physics::fire_shape;
use crate::tokenizer::{self, LIST_DELIMITERS};
use crate::variable::{VarId, VariableStore};
use tracing::debug;

/// Head distance limit used when the limit is switched off (ch)
const UNLIMITED_DIST: f64 = 1.0e6;

/// Acres per square chain
const ACRES_PER_SQ_CHAIN: f64 = 0.1;

pub(super) fn report_size(v: &mut VariableStore) {
    let acres = v.value(VarId::SurfaceFireArea);
    v.set(VarId::ContainReportSize, acres);
}

/// Head spread rate from ft/min to ch/h
pub(super) fn report_spread(v: &mut VariableStore) {
    let fpm = v.value(VarId::SurfaceFireSpreadAtHead);
    v.set(VarId::ContainReportSpread, fpm * 60.0 / 66.0);
}

pub(super) fn report_ratio(v: &mut VariableStore) {
    let lw = v.value(VarId::SurfaceFireLengthToWidth);
    v.set(VarId::ContainReportRatio, lw);
}

/// Runs every resource named in the resource list
pub(super) fn contain_multiple(
    v: &mut VariableStore,
    options: &ContainOptions,
    simulator: &dyn ContainmentSimulator,
) -> Result<()> {
    let with_cost = v.get(VarId::ContainCost).is_user_output;
    let names: Vec<String> = tokenizer::tokens(v.text(VarId::ContainResourceName), LIST_DELIMITERS)
        .map(str::to_string)
        .collect();
    let resources = names
        .into_iter()
        .enumerate()
        .map(|(i, name)| resource(v, name, i, with_cost))
        .collect();

    let input = contain_input(v, options, resources);
    let outcome = simulator.run(&input);
    let length = outcome.initial_attack_back + outcome.initial_attack_head;
    store_outcome(v, &outcome, &input, length, (outcome.initial_attack_back, outcome.initial_attack_head))
}

/// Runs the single resource described by the first value of each list
pub(super) fn contain_single(
    v: &mut VariableStore,
    options: &ContainOptions,
    simulator: &dyn ContainmentSimulator,
) -> Result<()> {
    let with_cost = v.get(VarId::ContainCost).is_user_output;
    let name = v.text(VarId::ContainResourceName).to_string();
    let resources = vec![resource(v, name, 0, with_cost)];

    let input = contain_input(v, options, resources);
    let outcome = simulator.run(&input);
    let length = outcome.attack_back + outcome.attack_head;
    store_outcome(v, &outcome, &input, length, (outcome.attack_back, outcome.attack_head))
}

/// Resource `index` of the list variables, converted to native units
///
/// Costs are read only when the cost output was requested.
fn resource(v: &VariableStore, name: String, index: usize, with_cost: bool) -> ContainResource {
    let token = |id: VarId| v.get(id).token_native(index);
    let (base_cost, hour_cost) = if with_cost {
        (token(VarId::ContainResourceBaseCost), token(VarId::ContainResourceHourCost))
    } else {
        (0.0, 0.0)
    };
    ContainResource {
        name,
        arrival: token(VarId::ContainResourceArrival),
        duration: token(VarId::ContainResourceDuration),
        production: token(VarId::ContainResourceProd),
        base_cost,
        hour_cost,
    }
}

fn contain_input(v: &VariableStore, options: &ContainOptions, resources: Vec<ContainResource>) -> ContainInput {
    let dist_limit = if options.dist_limit {
        v.value(VarId::ContainLimitDist)
    } else {
        UNLIMITED_DIST
    };
    ContainInput {
        report_size: v.value(VarId::ContainReportSize),
        report_rate: v.value(VarId::ContainReportSpread),
        lw_ratio: v.value(VarId::ContainReportRatio),
        resources,
        tactic: Tactic::from_index(v.item(VarId::ContainAttackTactic)),
        attack_dist: v.value(VarId::ContainAttackDist),
        dist_limit,
        retry: options.retry,
        min_steps: options.min_steps,
        max_steps: options.max_steps,
    }
}

/// Writes a finished run; `length` and `attack` describe the fire when line building began
fn store_outcome(
    v: &mut VariableStore,
    outcome: &ContainOutcome,
    input: &ContainInput,
    length: f64,
    attack: (f64, f64),
) -> Result<()> {
    let (status, final_size) = reported_outcome(outcome);
    debug!(
        resources = input.resources.len(),
        status = ?outcome.status,
        steps = outcome.step,
        "containment run finished"
    );

    let width = fire_shape::width(length, input.lw_ratio);
    v.set(VarId::ContainAttackBack, attack.0);
    v.set(VarId::ContainAttackHead, attack.1);
    v.set(VarId::ContainAttackPerimeter, fire_shape::perimeter(length, width));
    v.set(VarId::ContainAttackSize, fire_shape::area(length, width) * ACRES_PER_SQ_CHAIN);
    v.set(VarId::ContainCost, outcome.final_cost);
    v.set(VarId::ContainLine, outcome.final_line);
    v.set(VarId::ContainPoints, (outcome.step + 1) as f64);
    v.set(VarId::ContainReportBack, outcome.report_back);
    v.set(VarId::ContainReportHead, outcome.report_head);
    v.set(VarId::ContainResourcesUsed, outcome.resources_used as f64);
    v.set(VarId::ContainSize, final_size);
    v.set_item(VarId::ContainStatus, status)?;
    v.set(VarId::ContainTime, outcome.final_time);
    v.set(VarId::ContainXMax, outcome.x_max);
    v.set(VarId::ContainXMin, outcome.x_min);
    v.set(VarId::ContainYMax, outcome.y_max);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contain::ContainStatus;
    use approx::assert_relative_eq;
    use std::sync::Mutex;

    /// Records its input and replays a canned outcome
    struct Canned {
        outcome: ContainOutcome,
        seen: Mutex<Option<ContainInput>>,
    }

    impl Canned {
        fn new(outcome: ContainOutcome) -> Self {
            Self {
                outcome,
                seen: Mutex::new(None),
            }
        }

        fn seen(&self) -> ContainInput {
            self.seen.lock().unwrap().clone().unwrap()
        }
    }

    impl ContainmentSimulator for Canned {
        fn run(&self, input: &ContainInput) -> ContainOutcome {
            *self.seen.lock().unwrap() = Some(input.clone());
            self.outcome.clone()
        }
    }

    fn options() -> ContainOptions {
        ContainOptions {
            resources: crate::config::Resources::Multiple,
            dist_limit: false,
            retry: true,
            min_steps: 250,
            max_steps: 1000,
        }
    }

    fn store() -> VariableStore {
        let mut v = VariableStore::new(&["1".to_string()], &["D1L1".to_string()]).unwrap();
        v.set(VarId::ContainReportSize, 1.0);
        v.set(VarId::ContainReportSpread, 5.0);
        v.set(VarId::ContainReportRatio, 2.0);
        v.set(VarId::ContainLimitDist, 100.0);
        v.set_text(VarId::ContainResourceName, "Crew1 Crew2").unwrap();
        v.set_text(VarId::ContainResourceArrival, "1 2").unwrap();
        v.set_text(VarId::ContainResourceDuration, "8 8").unwrap();
        v.set_text(VarId::ContainResourceProd, "10, 20").unwrap();
        v.set_text(VarId::ContainResourceBaseCost, "100 200").unwrap();
        v.set_text(VarId::ContainResourceHourCost, "10 20").unwrap();
        v
    }

    fn contained() -> ContainOutcome {
        let mut outcome = ContainOutcome::unattacked(ContainStatus::Contained, 3.0, 1.0);
        outcome.final_size = 12.5;
        outcome.final_line = 40.0;
        outcome.initial_attack_head = 6.0;
        outcome.initial_attack_back = 2.0;
        outcome.attack_head = 7.0;
        outcome.attack_back = 3.0;
        outcome.step = 9;
        outcome
    }

    #[test]
    fn test_report_spread_in_chains_per_hour() {
        let mut v = store();
        v.set(VarId::SurfaceFireSpreadAtHead, 11.0);
        report_spread(&mut v);
        assert_relative_eq!(v.value(VarId::ContainReportSpread), 10.0);
    }

    #[test]
    fn test_multiple_resources_from_tokens() {
        let mut v = store();
        let sim = Canned::new(contained());
        contain_multiple(&mut v, &options(), &sim).unwrap();

        let input = sim.seen();
        assert_eq!(input.resources.len(), 2);
        assert_eq!(input.resources[1].name, "Crew2");
        assert_relative_eq!(input.resources[1].production, 20.0);
        // hours on display, minutes native
        assert_relative_eq!(input.resources[0].arrival, 60.0);
        assert_relative_eq!(input.dist_limit, UNLIMITED_DIST);
        // cost not requested
        assert_eq!(input.resources[0].base_cost, 0.0);

        assert_eq!(v.item_name(VarId::ContainStatus), "Contained");
        assert_relative_eq!(v.value(VarId::ContainSize), 12.5);
        assert_relative_eq!(v.value(VarId::ContainAttackHead), 6.0);
        assert_eq!(v.value(VarId::ContainPoints), 10.0);
        let width = fire_shape::width(8.0, 2.0);
        assert_relative_eq!(v.value(VarId::ContainAttackSize), fire_shape::area(8.0, width) * 0.1);
    }

    #[test]
    fn test_single_resource_uses_attack_distances() {
        let mut v = store();
        v.get_mut(VarId::ContainCost).is_user_output = true;
        let mut opts = options();
        opts.dist_limit = true;
        let sim = Canned::new(contained());
        contain_single(&mut v, &opts, &sim).unwrap();

        let input = sim.seen();
        assert_eq!(input.resources.len(), 1);
        assert_eq!(input.resources[0].name, "Crew1 Crew2");
        assert_relative_eq!(input.resources[0].base_cost, 100.0);
        assert_relative_eq!(input.dist_limit, 100.0);
        assert_relative_eq!(v.value(VarId::ContainAttackBack), 3.0);
    }

    #[test]
    fn test_uncontained_outcomes_report_sentinel_size() {
        let mut v = store();
        let mut outcome = contained();
        outcome.status = ContainStatus::Overrun;
        contain_multiple(&mut v, &options(), &Canned::new(outcome.clone())).unwrap();
        assert_eq!(v.item_name(VarId::ContainStatus), "Withdrawn");
        assert_eq!(v.value(VarId::ContainSize), -1.0);

        outcome.status = ContainStatus::Exhausted;
        outcome.final_line = 0.0;
        contain_multiple(&mut v, &options(), &Canned::new(outcome)).unwrap();
        assert_eq!(v.item_name(VarId::ContainStatus), "Escaped");
    }
}
