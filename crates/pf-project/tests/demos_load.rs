use pf_core::UnitSystem;
use pf_project::{FlowInputDef, SolveFor};
use std::path::Path;

#[test]
fn demos_load_and_validate() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../demos");
    let demos = [
        "01_water_head_loss_si.yaml",
        "02_water_flow_rate_imperial.yaml",
        "03_gravity_drain_velocity.yaml",
    ];

    for name in demos {
        let path = root.join(name);
        let case = pf_project::load_yaml(&path)
            .unwrap_or_else(|e| panic!("Failed to load {}: {}", name, e));
        pf_project::validate_case(&case)
            .unwrap_or_else(|e| panic!("Failed to validate {}: {}", name, e));
    }
}

#[test]
fn imperial_demo_fields() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../demos/02_water_flow_rate_imperial.yaml");
    let case = pf_project::load_yaml(&path).unwrap();
    assert_eq!(case.system, UnitSystem::Imperial);
    assert_eq!(case.flow, Some(FlowInputDef::FlowRate(0.5)));
    assert_eq!(case.accessories.len(), 2);
}

#[test]
fn velocity_demo_defaults() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../demos/03_gravity_drain_velocity.yaml");
    let case = pf_project::load_yaml(&path).unwrap();
    assert_eq!(case.solve_for, SolveFor::Velocity);
    assert_eq!(case.boundary.p1, 0.0);
    assert_eq!(case.boundary.z1, 15.0);
    assert!(case.accessories.iter().all(|a| a.count == 1));
    assert!(case.search.is_none());
}
