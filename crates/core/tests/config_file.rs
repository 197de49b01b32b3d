//! Worksheet configuration read from TOML
use behave_core::config::{FuelChoice, WindSpeed};
use behave_core::{ComputationGraph, Configuration, EqError, FunId, Prop, PropValue, PropertyDict, VarId};
use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}

const CROWN_WORKSHEET: &str = r#"
# surface and crown fire from 10 m winds
crownModuleActive = true
surfaceConfWindSpeedAtMidflame = false
surfaceConfWindSpeedAt10MCalc = true
surfaceConfFuelModels = false
surfaceConfFuelHarmonicMean = true
containConfMaxSteps = 2000
"#;

#[test]
fn test_worksheet_file_drives_reconfiguration() {
    let props = PropertyDict::from_toml_str(CROWN_WORKSHEET).unwrap();
    let config = Configuration::from_dict(props.clone());
    assert!(config.modules.crown);
    assert_eq!(config.surface.wind_speed, WindSpeed::At10MCalc);
    assert_eq!(config.surface.fuel, FuelChoice::HarmonicMean);
    assert_eq!(config.contain.max_steps, 2000);

    let mut g = ComputationGraph::standard().unwrap();
    g.set_properties(props);
    g.reconfigure().unwrap();
    assert!(g.functions().is_active(FunId::SurfaceFuelBedWeighted));
    assert!(g.functions().is_active(FunId::WindSpeedAt20Ft));
    assert!(g.functions().is_active(FunId::WindAdjFactor));
    assert!(g.functions().is_active(FunId::CrownFireSpreadRate));
    // the blend computes its own bed depth for the adjustment factor
    assert!(g.vars().get(VarId::SurfaceFuelBedDepth).is_constant);
}

#[test]
fn test_overrides_list_only_changed_properties() {
    let props = PropertyDict::from_toml_str(CROWN_WORKSHEET).unwrap();
    let overrides: Vec<(&str, PropValue)> = props.overrides().collect();
    assert_eq!(overrides.len(), 6);
    assert!(overrides.contains(&("containConfMaxSteps", PropValue::Int(2000))));
    assert!(overrides.contains(&("crownModuleActive", PropValue::Bool(true))));
}

#[test]
fn test_unknown_property_is_a_config_error() {
    let err = PropertyDict::from_toml_str("surfaceModuleActive = true\nnoSuchThing = 1").unwrap_err();
    assert!(matches!(err, EqError::Config(ref msg) if msg.contains("noSuchThing")));
}

#[test]
fn test_load_reads_file() {
    let path = std::env::temp_dir().join(format!("behave-config-{}.toml", std::process::id()));
    std::fs::write(&path, "sizeModuleActive = true\n").unwrap();
    let props = PropertyDict::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert!(props.boolean(Prop::SizeModuleActive));

    let missing = PropertyDict::load(path.with_extension("missing"));
    assert!(matches!(missing, Err(EqError::Config(_))));
}
