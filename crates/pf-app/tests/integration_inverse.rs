//! Inverse-path calculations: velocity from the energy balance.

use pf_app::{calculate, case_service};
use pf_project::{FlowInputDef, SolveFor};
use std::path::Path;

fn demo(name: &str) -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../demos").join(name)
}

#[test]
fn gravity_drain_balances_elevation() {
    let case = case_service::load_case(&demo("03_gravity_drain_velocity.yaml")).unwrap();
    let out = calculate(&case).unwrap();
    let analysis = out.analysis.as_ref().expect("15 m of head drives a flow");

    assert!(analysis.flow.velocity() > 0.0);
    assert!((analysis.head_loss.total() - 15.0).abs() < 1e-4);
    assert!(out.diagnostics.is_empty());
    assert_eq!(out.chart.len(), 20);
}

#[test]
fn inverse_matches_forward() {
    let case = case_service::load_case(&demo("03_gravity_drain_velocity.yaml")).unwrap();
    let solved = calculate(&case).unwrap().analysis.unwrap();

    let mut forward = case.clone();
    forward.solve_for = SolveFor::HeadLoss;
    forward.flow = Some(FlowInputDef::Velocity(solved.flow.velocity()));
    let check = calculate(&forward).unwrap().analysis.unwrap();

    assert!((check.head_loss.total() - 15.0).abs() < 1e-4);
}

#[test]
fn adverse_elevation_reports_no_solution() {
    let mut case = case_service::load_case(&demo("03_gravity_drain_velocity.yaml")).unwrap();
    case.boundary.z1 = 0.0;
    case.boundary.z2 = 15.0;
    let out = calculate(&case).unwrap();

    assert!(out.result.is_none());
    assert!(out.analysis.is_none());
    assert!(out.diagnostics.contains_code("velocity_not_converged"));
    assert!(
        out.messages()
            .iter()
            .any(|m| m.contains("check whether the available energy is sufficient"))
    );
    assert_eq!(out.chart.len(), 20);
}

#[test]
fn custom_search_interval() {
    let mut case = case_service::load_case(&demo("03_gravity_drain_velocity.yaml")).unwrap();
    case.search = Some(pf_project::SearchDef {
        v_min: 0.01,
        v_max: 0.02,
    });
    // The balancing velocity lies outside [0.01, 0.02]: no bracket, both
    // secant seeds clamp to 0.02, and Newton from the midpoint still gets there
    let out = calculate(&case).unwrap();
    let a = out.analysis.expect("newton is not bounded by the search interval");
    assert!(a.flow.velocity() > 0.02);
    assert!((a.head_loss.total() - 15.0).abs() < 1e-4);
}
