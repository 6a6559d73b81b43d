//! Lookup of problems by name and a one-call runner.

use crate::gravity_collapse::GravityCollapse;
use crate::problem::{Problem, ProblemContext};
use crate::report::AccuracyReport;
use agoge_math::poisson::IsolatedPoissonSolver;
use agoge_types::config::{FromParameters, GridConfig, ParameterSystem};
use agoge_types::constants::PhysicalConstants;
use agoge_types::error::{AgogeError, AgogeResult};
use agoge_types::state::Field3D;

/// Namespace of the grid parameters.
pub const GRID_PREFIX: &str = "grid";

type ProblemBuilder = fn() -> Box<dyn Problem>;

fn problems() -> Vec<(&'static str, ProblemBuilder)> {
    vec![("GravityCollapse", build_gravity_collapse as ProblemBuilder)]
}

fn build_gravity_collapse() -> Box<dyn Problem> {
    Box::new(GravityCollapse::new())
}

/// Names accepted by [`make_problem`].
pub fn available_problems() -> Vec<&'static str> {
    problems().into_iter().map(|(name, _)| name).collect()
}

pub fn make_problem(name: &str) -> AgogeResult<Box<dyn Problem>> {
    problems()
        .into_iter()
        .find(|&(n, _)| n == name)
        .map(|(_, build)| build())
        .ok_or_else(|| {
            AgogeError::UnknownProblem(format!(
                "{name} (available: {})",
                available_problems().join(", ")
            ))
        })
}

/// Register grid and problem defaults, build the field and run the problem
/// with the isolated Poisson solver.
pub fn run_problem(
    name: &str,
    params: &mut ParameterSystem,
    constants: PhysicalConstants,
) -> AgogeResult<(Field3D, Option<AccuracyReport>)> {
    let problem = make_problem(name)?;
    GridConfig::register_defaults(GRID_PREFIX, params);
    problem.register_parameters(params);

    let grid = GridConfig::from_parameters(GRID_PREFIX, params)?.create_grid()?;
    log::info!(
        "[{}] grid {}x{}x{} on [{}, {}]x[{}, {}]x[{}, {}]",
        problem.name(),
        grid.nx,
        grid.ny,
        grid.nz,
        grid.bbox.xmin,
        grid.bbox.xmax,
        grid.bbox.ymin,
        grid.bbox.ymax,
        grid.bbox.zmin,
        grid.bbox.zmax
    );

    let mut field = Field3D::new(grid);
    let solver = IsolatedPoissonSolver::from_constants(&constants);
    let context = ProblemContext::new(constants, &solver);
    let report = problem.initialize(&mut field, params, &context)?;
    Ok((field, report))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_known_problem() {
        let problem = make_problem("GravityCollapse").unwrap();
        assert_eq!(problem.name(), "GravityCollapse");
        assert_eq!(available_problems(), vec!["GravityCollapse"]);
    }

    #[test]
    fn test_unknown_problem_lists_available() {
        match make_problem("Sedov") {
            Err(AgogeError::UnknownProblem(msg)) => {
                assert!(msg.contains("Sedov"));
                assert!(msg.contains("GravityCollapse"));
            }
            Err(other) => panic!("expected UnknownProblem, got {other:?}"),
            Ok(_) => panic!("expected UnknownProblem, got a problem"),
        }
    }

    #[test]
    fn test_run_problem_registers_everything() {
        let mut params = ParameterSystem::new();
        params.set("grid.nx", "4");
        params.set("grid.ny", "4");
        params.set("grid.nz", "4");
        let (field, report) =
            run_problem("GravityCollapse", &mut params, PhysicalConstants::default()).unwrap();
        assert_eq!(field.grid.cell_count(), 64);
        assert!(params.contains("GravityCollapse.grav_method"));
        assert!(params.contains("grid.xmax"));

        let report = report.unwrap();
        assert_eq!(report.cells, 64);
        assert!(report.l1.is_finite() && report.l1 >= 0.0);
        assert!(report.l2 >= 0.0);
    }

    #[test]
    fn test_run_problem_rejects_bad_grid() {
        let mut params = ParameterSystem::new();
        params.set("grid.nx", "0");
        assert!(run_problem("GravityCollapse", &mut params, PhysicalConstants::default()).is_err());
    }
}
