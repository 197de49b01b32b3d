//! Containment outcomes reported through the graph
use approx::assert_relative_eq;
use behave_core::contain::{ContainInput, ContainOutcome};
use behave_core::{ComputationGraph, ContainStatus, ContainmentSimulator, FunId, Prop, PropertyDict, VarId};
use std::sync::{Arc, Mutex};
use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}

/// Replays one outcome and remembers the last input
struct Scripted {
    outcome: ContainOutcome,
    seen: Arc<Mutex<Option<ContainInput>>>,
}

impl ContainmentSimulator for Scripted {
    fn run(&self, input: &ContainInput) -> ContainOutcome {
        *self.seen.lock().unwrap() = Some(input.clone());
        self.outcome.clone()
    }
}

fn outcome(status: ContainStatus, final_size: f64, final_line: f64) -> ContainOutcome {
    let mut o = ContainOutcome::unattacked(status, 2.0, 0.5);
    o.final_size = final_size;
    o.final_line = final_line;
    o.final_time = 90.0;
    o.attack_head = 4.0;
    o.attack_back = 1.0;
    o.resources_used = 1;
    o
}

/// Standalone containment graph driven by `outcome`
fn graph(d: PropertyDict, outcome: ContainOutcome) -> (ComputationGraph, Arc<Mutex<Option<ContainInput>>>) {
    let seen = Arc::new(Mutex::new(None));
    let simulator = Scripted {
        outcome,
        seen: Arc::clone(&seen),
    };
    let mut g = ComputationGraph::standard()
        .unwrap()
        .with_simulator(Box::new(simulator));
    g.set_properties(d);
    g.reconfigure().unwrap();
    let v = g.vars_mut();
    v.set(VarId::ContainReportSize, 1.0);
    v.set(VarId::ContainReportRatio, 2.0);
    v.set(VarId::ContainAttackDist, 0.0);
    g.set_text("vContainResourceName", "Dozer 1").unwrap();
    g.set_text("vContainResourceArrival", "1").unwrap();
    g.set_text("vContainResourceDuration", "8").unwrap();
    g.set_text("vContainResourceProd", "20").unwrap();
    (g, seen)
}

fn standalone() -> PropertyDict {
    let mut d = PropertyDict::new();
    d.set_bool(Prop::SurfaceModuleActive, false).unwrap();
    d.set_bool(Prop::ContainModuleActive, true).unwrap();
    d
}

#[test]
fn test_contained_run_reports_simulated_size() {
    let (mut g, seen) = graph(standalone(), outcome(ContainStatus::Contained, 12.5, 30.0));
    g.calculate().unwrap();

    let v = g.vars();
    assert_eq!(v.item_name(VarId::ContainStatus), "Contained");
    assert_relative_eq!(v.value(VarId::ContainSize), 12.5);
    assert_relative_eq!(v.value(VarId::ContainLine), 30.0);
    assert_relative_eq!(v.value(VarId::ContainAttackHead), 4.0);
    assert_relative_eq!(v.value(VarId::ContainAttackBack), 1.0);

    let input = seen.lock().unwrap().clone().unwrap();
    assert_eq!(input.resources.len(), 1);
    assert_eq!(input.resources[0].name, "Dozer 1");
    assert_relative_eq!(input.resources[0].arrival, 60.0);
    assert_relative_eq!(input.dist_limit, 1.0e6);
}

#[test]
fn test_escape_with_line_is_withdrawn() {
    let (mut g, _) = graph(standalone(), outcome(ContainStatus::Overrun, 40.0, 12.0));
    g.calculate().unwrap();
    assert_eq!(g.vars().item_name(VarId::ContainStatus), "Withdrawn");
    assert_relative_eq!(g.vars().value(VarId::ContainSize), -1.0);
}

#[test]
fn test_escape_without_line_is_escaped() {
    for status in [ContainStatus::Exhausted, ContainStatus::Overflow, ContainStatus::DistLimit] {
        let (mut g, _) = graph(standalone(), outcome(status, 40.0, 0.0));
        g.calculate().unwrap();
        assert_eq!(g.vars().item_name(VarId::ContainStatus), "Escaped", "{status:?}");
        assert_relative_eq!(g.vars().value(VarId::ContainSize), -1.0);
    }
}

#[test]
fn test_multiple_resources_reach_the_simulator() {
    let mut d = standalone();
    d.select(
        &[Prop::ContainConfResourcesSingle, Prop::ContainConfResourcesMultiple],
        Prop::ContainConfResourcesMultiple,
    );
    d.select(
        &[Prop::ContainConfLimitDistOff, Prop::ContainConfLimitDistOn],
        Prop::ContainConfLimitDistOn,
    );
    let (mut g, seen) = graph(d, outcome(ContainStatus::Contained, 3.0, 10.0));
    assert!(g.is_active("fContainFF").unwrap());
    assert!(!g.functions().is_active(FunId::ContainFFSingle));

    g.set_text("vContainResourceName", "Crew1 Crew2").unwrap();
    g.set_text("vContainResourceArrival", "0.5 1.5").unwrap();
    g.set_text("vContainResourceDuration", "8 8").unwrap();
    g.set_text("vContainResourceProd", "10 20").unwrap();
    g.set_value("vContainLimitDist", 500.0).unwrap();
    g.calculate().unwrap();

    let input = seen.lock().unwrap().clone().unwrap();
    let names: Vec<&str> = input.resources.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["Crew1", "Crew2"]);
    assert_relative_eq!(input.resources[1].arrival, 90.0);
    assert_relative_eq!(input.resources[1].production, 20.0);
    assert_relative_eq!(input.dist_limit, 500.0);
}
