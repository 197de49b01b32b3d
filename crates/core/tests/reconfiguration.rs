//! Module switches and option groups applied to a full graph
use behave_core::{ComputationGraph, FunId, Prop, PropertyDict, VarId};
use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}

const MODULES: [Prop; 10] = [
    Prop::SurfaceModuleActive,
    Prop::CrownModuleActive,
    Prop::SizeModuleActive,
    Prop::ContainModuleActive,
    Prop::SpotModuleActive,
    Prop::ScorchModuleActive,
    Prop::MortalityModuleActive,
    Prop::IgnitionModuleActive,
    Prop::WeatherModuleActive,
    Prop::SafetyModuleActive,
];

/// Every module off except `only`
fn only(module: Option<Prop>) -> PropertyDict {
    let mut d = PropertyDict::new();
    for prop in MODULES {
        d.set_bool(prop, Some(prop) == module).unwrap();
    }
    d
}

fn configured(d: PropertyDict) -> ComputationGraph {
    let mut g = ComputationGraph::standard().unwrap();
    g.set_properties(d);
    g.reconfigure().unwrap();
    g
}

#[test]
fn test_inactive_modules_touch_nothing_on_first_activation() {
    let g = configured(only(None));
    assert_eq!(g.functions().active().count(), 0);
    assert_eq!(g.vars().user_outputs().count(), 0);
    assert_eq!(g.vars().user_inputs().count(), 0);
}

#[test]
fn test_each_module_activates_its_own_nodes() {
    for module in MODULES {
        let g = configured(only(Some(module)));
        assert!(
            g.functions().active().count() > 0,
            "{} activated no nodes",
            module.name()
        );
        assert!(
            g.vars().user_outputs().count() > 0,
            "{} showed no outputs",
            module.name()
        );
    }
}

#[test]
fn test_wind_speed_choices_are_exclusive() {
    // (choice, midflame node, adjustment factor node, 20 ft node)
    let cases = [
        (Prop::SurfaceConfWindSpeedAtMidflame, false, false, false),
        (Prop::SurfaceConfWindSpeedAt20Ft, true, false, false),
        (Prop::SurfaceConfWindSpeedAt20FtCalc, true, true, false),
        (Prop::SurfaceConfWindSpeedAt10M, true, false, true),
        (Prop::SurfaceConfWindSpeedAt10MCalc, true, true, true),
    ];
    let group: Vec<Prop> = cases.iter().map(|c| c.0).collect();
    for (choice, midflame, waf, at20ft) in cases {
        let mut d = PropertyDict::new();
        d.select(&group, choice);
        let g = configured(d);
        let f = g.functions();
        assert_eq!(f.is_active(FunId::WindSpeedAtMidflame), midflame, "{}", choice.name());
        assert_eq!(f.is_active(FunId::WindAdjFactor), waf, "{}", choice.name());
        assert_eq!(f.is_active(FunId::WindSpeedAt20Ft), at20ft, "{}", choice.name());
        assert_eq!(g.vars().get(VarId::WindAdjMethod).is_constant, !waf, "{}", choice.name());
    }
}

#[test]
fn test_fuel_choices_are_exclusive() {
    let cases = [
        (Prop::SurfaceConfFuelModels, FunId::SurfaceFuelBedModel),
        (Prop::SurfaceConfFuelParms, FunId::SurfaceFuelBedParms),
        (Prop::SurfaceConfFuelAreaWeighted, FunId::SurfaceFuelBedWeighted),
        (Prop::SurfaceConfFuelHarmonicMean, FunId::SurfaceFuelBedWeighted),
        (Prop::SurfaceConfFuel2Dimensional, FunId::SurfaceFuelBedWeighted),
        (Prop::SurfaceConfFuelPalmettoGallberry, FunId::SurfaceFuelPalmettoModel),
        (Prop::SurfaceConfFuelAspen, FunId::SurfaceFuelAspenModel),
    ];
    let group: Vec<Prop> = cases.iter().map(|c| c.0).collect();
    for (choice, node) in cases {
        let mut d = PropertyDict::new();
        d.select(&group, choice);
        let g = configured(d);
        assert!(g.functions().is_active(node), "{}", choice.name());
        let palmetto = g.functions().is_active(FunId::SurfaceFuelPalmettoModel);
        let aspen = g.functions().is_active(FunId::SurfaceFuelAspenModel);
        let weighted = g.functions().is_active(FunId::SurfaceFuelBedWeighted);
        assert!(
            usize::from(palmetto) + usize::from(aspen) + usize::from(weighted) <= 1,
            "{}",
            choice.name()
        );
    }
}

#[test]
fn test_ambiguous_group_takes_first_choice() {
    let mut d = PropertyDict::new();
    d.set_bool(Prop::SurfaceConfFuelModels, true).unwrap();
    d.set_bool(Prop::SurfaceConfFuelHarmonicMean, true).unwrap();
    let g = configured(d);
    assert!(g.functions().is_active(FunId::SurfaceFuelBedModel));
    assert!(!g.functions().is_active(FunId::SurfaceFuelBedWeighted));
}

#[test]
fn test_reconfigure_is_repeatable() {
    let mut d = only(Some(Prop::SurfaceModuleActive));
    d.set_bool(Prop::CrownModuleActive, true).unwrap();
    d.set_bool(Prop::SizeModuleActive, true).unwrap();
    let mut g = configured(d);
    let first: Vec<FunId> = g.functions().active().collect();
    let outputs: Vec<VarId> = g.vars().user_outputs().collect();
    g.reconfigure().unwrap();
    assert_eq!(g.functions().active().collect::<Vec<_>>(), first);
    assert_eq!(g.vars().user_outputs().collect::<Vec<_>>(), outputs);
}

#[test]
fn test_switching_a_module_off_keeps_its_flags() {
    let mut d = PropertyDict::new();
    d.set_bool(Prop::IgnitionModuleActive, true).unwrap();
    let mut g = configured(d.clone());
    assert!(g.functions().is_active(FunId::IgnitionFirebrandProb));

    d.set_bool(Prop::IgnitionModuleActive, false).unwrap();
    g.set_properties(d);
    g.reconfigure().unwrap();
    assert!(g.functions().is_active(FunId::IgnitionFirebrandProb));
    assert!(g.vars().get(VarId::IgnitionFirebrandProb).is_user_output);

    g.clear_activation();
    g.reconfigure().unwrap();
    assert!(!g.functions().is_active(FunId::IgnitionFirebrandProb));
    assert!(!g.vars().get(VarId::IgnitionFirebrandProb).is_user_output);
}

#[test]
fn test_documentation_groups_are_entered() {
    let mut d = only(None);
    d.set_bool(Prop::DocFireActive, true).unwrap();
    let g = configured(d);
    assert_eq!(g.functions().active().count(), 0);
    assert!(g.vars().user_inputs().count() > 0);
}
