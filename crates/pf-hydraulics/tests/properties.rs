//! Property tests for the friction, head loss and velocity solvers.

use pf_core::{UnitSystem, relative_error};
use pf_hydraulics::{
    EnergyBoundary, FluidProperties, FrictionMethod, MinorLossBudget, PipeFlow, PipeSegment,
    VelocitySearch, colebrook_residual, friction_factor, swamee_jain, total_head_loss,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn laminar_friction_is_64_over_re(re in 1e-3_f64..1999.999, rr in 0.0_f64..0.05) {
        let sol = friction_factor(re, rr);
        prop_assert_eq!(sol.f, 64.0 / re);
        prop_assert_eq!(sol.method, FrictionMethod::Laminar);
    }

    #[test]
    fn turbulent_friction_satisfies_colebrook(
        log_re in 3.302_f64..8.0,
        rr in 0.0_f64..0.05,
    ) {
        let re = 10f64.powf(log_re).max(2000.0);
        let sol = friction_factor(re, rr);
        if sol.converged() {
            prop_assert!(sol.f > 0.0);
            prop_assert!(colebrook_residual(sol.f, re, rr).abs() < 1e-6);
        } else {
            prop_assert!(sol.diagnostics.contains_code("friction_not_converged"));
            prop_assert_eq!(Some(sol.f), swamee_jain(re, rr));
        }
    }

    #[test]
    fn non_positive_re_gives_zero(re in -1e6_f64..=0.0) {
        let sol = friction_factor(re, 0.001);
        prop_assert_eq!(sol.f, 0.0);
        prop_assert!(!sol.diagnostics.is_empty());
    }

    #[test]
    fn head_loss_increases_with_velocity_turbulent(
        v in 0.1_f64..15.0,
        bump in 0.01_f64..1.0,
        sum_k in 0.0_f64..20.0,
    ) {
        // water in a 100 mm pipe: Re > 9000 over this range
        let nu = 0.001 / 998.0;
        let d = 0.1;
        let hl = |v: f64| {
            let re = pf_hydraulics::reynolds_number(v, d, nu);
            let f = friction_factor(re, 4.5e-4).f;
            total_head_loss(f, 100.0, d, v, sum_k, 9.81)
        };
        let v2 = v * (1.0 + bump);
        prop_assert!(hl(v2) > hl(v));
    }

    #[test]
    fn head_loss_increases_with_velocity_laminar(
        v in 0.001_f64..0.5,
        bump in 0.01_f64..1.0,
    ) {
        // glycerine-like oil: Re < 2000 up to 1.5 m/s
        let nu = 1.0 / 1260.0;
        let d = 0.05;
        let hl = |v: f64| {
            let re = pf_hydraulics::reynolds_number(v, d, nu);
            let f = friction_factor(re, 0.0).f;
            total_head_loss(f, 10.0, d, v, 1.0, 9.81)
        };
        prop_assert!(hl(v * (1.0 + bump)) > hl(v));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn velocity_round_trip(v in 0.2_f64..12.0, length in 10.0_f64..500.0) {
        let flow = PipeFlow::new(
            UnitSystem::Si,
            FluidProperties::new(998.0, 0.001).unwrap(),
            PipeSegment::new(length, 0.1, 4.5e-5).unwrap(),
            MinorLossBudget::new(2.0),
        );
        let hl = flow.analyze_velocity(v, 1.0).unwrap().head_loss.total();
        let boundary = EnergyBoundary::pressure_only(998.0 * 9.81 * hl, 0.0);
        let solved = flow
            .velocity_solver(VelocitySearch::default())
            .solve(&boundary)
            .flow();
        prop_assert!(solved.is_some());
        let got = solved.unwrap().velocity();
        prop_assert!(relative_error(got, v) < 1e-3, "v = {}, got {}", v, got);
    }
}
