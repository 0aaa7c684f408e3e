use std::fs;
use std::path::Path;

use airfoil_lift_calculator::bernoulli::scenario;
use airfoil_lift_calculator::bernoulli::{CoefficientSource, estimate_lift};
use airfoil_lift_calculator::config::{
    QuantityConfig, find_scenario, load_scenarios,
};
use airfoil_lift_calculator::uncertain::Sampler;

#[test]
fn shipped_manifest_lists_the_three_scenarios() {
    let scenarios = load_scenarios("configs/scenarios.yaml").unwrap();
    assert_eq!(scenarios.len(), 3);
    assert!(find_scenario(&scenarios, scenario::DETERMINISTIC).is_some());
    assert!(find_scenario(&scenarios, scenario::ENVIRONMENT_UNCERTAIN).is_some());
    assert!(find_scenario(&scenarios, scenario::AOA_UNCERTAIN).is_some());

    let environment = find_scenario(&scenarios, scenario::ENVIRONMENT_UNCERTAIN).unwrap();
    match &environment.temperature_c {
        QuantityConfig::Gaussian { mean, std_dev } => {
            assert_eq!(*mean, 0.0);
            assert_eq!(*std_dev, 50.0);
        }
        other => panic!("expected gaussian temperature, got {other:?}"),
    }
}

#[test]
fn manifest_deterministic_matches_the_builtin_definition() {
    let scenarios = load_scenarios("configs/scenarios.yaml").unwrap();
    let manifest = find_scenario(&scenarios, scenario::DETERMINISTIC).unwrap();
    let config =
        scenario::from_manifest(manifest, Path::new("data/naca2412_cp_all_angles.csv")).unwrap();
    assert!(matches!(config.coefficients, CoefficientSource::Builtin10Deg));

    let mut from_manifest = Sampler::seeded(0, 1000);
    let mut from_builtin = Sampler::seeded(0, 1000);
    let a = estimate_lift(&config, &mut from_manifest).unwrap();
    let b = estimate_lift(&scenario::deterministic(), &mut from_builtin).unwrap();
    assert_eq!(a.lift_force_n, b.lift_force_n);
}

#[test]
fn manifest_table_source_loads_the_all_angles_table() {
    let scenarios = load_scenarios("configs/scenarios.yaml").unwrap();
    let manifest = find_scenario(&scenarios, scenario::AOA_UNCERTAIN).unwrap();
    let config =
        scenario::from_manifest(manifest, Path::new("data/naca2412_cp_all_angles.csv")).unwrap();
    assert!(matches!(config.coefficients, CoefficientSource::UncertainAoa(_)));
}

#[test]
fn toml_directory_manifests_load_sorted() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("b_gusty.toml"),
        r#"
name = "gusty"
planform_area_m2 = 0.5

[elevation_m]
type = "fixed"
value = 0.0

[temperature_c]
type = "fixed"
value = 20.0

[relative_humidity]
type = "uniform"
low = 0.0
high = 0.5

[free_stream_m_s]
type = "uniform"
low = 20.0
high = 40.0

[coefficients]
type = "builtin"
"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("a_calm.toml"),
        r#"
name = "calm"
planform_area_m2 = 0.23

[elevation_m]
type = "fixed"
value = 0.0

[temperature_c]
type = "fixed"
value = 15.0

[relative_humidity]
type = "fixed"
value = 0.0

[free_stream_m_s]
type = "fixed"
value = 30.0

[coefficients]
type = "builtin"
"#,
    )
    .unwrap();

    let scenarios = load_scenarios(dir.path()).unwrap();
    assert_eq!(scenarios.len(), 2);
    assert_eq!(scenarios[0].name, "calm");
    assert_eq!(scenarios[1].name, "gusty");
}

#[test]
fn missing_manifest_is_an_error() {
    assert!(load_scenarios("configs/absent.yaml").is_err());
}
