//! Calculation service: resolve a case, run the forward or inverse path and
//! format the result.

use pf_core::{Diagnostics, UnitSystem};
use pf_hydraulics::{
    ChartRange, EnergyBoundary, FlowAnalysis, FlowState, FluidProperties, PipeFlow, PipeSegment,
    VelocityOutcome, VelocitySearch,
};
use pf_project::{CaseDef, FlowInputDef, SolveFor};
use pf_tables::{pipe_diameter, roughness, sum_minor_losses};
use serde::Serialize;
use tracing::{info, warn};

use crate::case_service;
use crate::error::{AppError, AppResult};
use crate::report::{ChartSeries, ResultRecord};

/// Everything one calculation produces.
///
/// `result` is `None` only when the velocity solve found no root; the
/// diagnostics then say why. The chart is always present.
#[derive(Debug, Clone, Serialize)]
pub struct CalculationOutcome {
    pub name: String,
    pub system: UnitSystem,
    pub solve_for: SolveFor,
    pub result: Option<ResultRecord>,
    pub chart: ChartSeries,
    pub diagnostics: Diagnostics,
    #[serde(skip)]
    pub analysis: Option<FlowAnalysis>,
}

impl CalculationOutcome {
    pub fn messages(&self) -> Vec<String> {
        self.diagnostics.iter().map(|d| d.to_string()).collect()
    }
}

/// Turn a case into resolved pipe-flow inputs using the lookup tables.
pub fn resolve_case(case: &CaseDef) -> AppResult<PipeFlow> {
    let system = case.system;
    let fluid = FluidProperties::new(case.fluid.density, case.fluid.viscosity)?;

    let diameter = pipe_diameter(case.pipe.nominal, case.pipe.schedule, system);
    let eps = roughness(&case.pipe.material, system);
    let minor = sum_minor_losses(
        case.accessories
            .iter()
            .map(|a| (a.name.as_str(), u32::try_from(a.count).unwrap_or(0))),
    );

    // Rejects a non-positive cross-section before anything is solved
    let pipe = PipeSegment::new(case.pipe.length, diameter, eps)?;
    Ok(PipeFlow::new(system, fluid, pipe, minor))
}

/// Validate, resolve and solve one case.
pub fn calculate(case: &CaseDef) -> AppResult<CalculationOutcome> {
    case_service::validate_case(case)?;
    let flow = resolve_case(case)?;
    let area = flow.pipe.area();
    let mut diagnostics = Diagnostics::new();

    let analysis = match case.solve_for {
        SolveFor::HeadLoss => {
            let state = match case.flow {
                Some(FlowInputDef::Velocity(v)) => FlowState::from_velocity(v, area),
                Some(FlowInputDef::FlowRate(q)) => FlowState::from_flow_rate(q, area),
                None => {
                    return Err(AppError::InvalidInput(
                        "a velocity or flow rate is required to compute head loss".to_string(),
                    ));
                }
            };
            Some(flow.analyze(state, case.pump_efficiency)?)
        }
        SolveFor::Velocity => {
            let search = match case.search {
                Some(s) => VelocitySearch::new(s.v_min, s.v_max)?,
                None => VelocitySearch::default(),
            };
            let b = case.boundary;
            let boundary = EnergyBoundary::new(b.p1, b.p2, b.z1, b.z2);
            match flow.velocity_solver(search).solve(&boundary) {
                VelocityOutcome::Solved { flow: state, .. } => {
                    Some(flow.analyze(state, case.pump_efficiency)?)
                }
                outcome @ VelocityOutcome::NoSolution { .. } => {
                    warn!(case = %case.name, "no velocity balances the available energy");
                    diagnostics.extend(outcome.diagnostics());
                    None
                }
            }
        }
    };

    if let Some(a) = &analysis {
        diagnostics.extend(a.diagnostics().iter().cloned());
    }

    let samples = flow
        .sweep(ChartRange::for_system(case.system))?
        .par_collect();
    let chart = ChartSeries::from_samples(&samples, case.system);

    info!(
        case = %case.name,
        system = %case.system,
        solved = analysis.is_some(),
        diagnostics = diagnostics.len(),
        "calculation finished"
    );

    Ok(CalculationOutcome {
        name: case.name.clone(),
        system: case.system,
        solve_for: case.solve_for,
        result: analysis
            .as_ref()
            .map(|a| ResultRecord::from_analysis(a, case.system)),
        chart,
        diagnostics,
        analysis,
    })
}
