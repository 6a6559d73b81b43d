//! Common utilities for integration tests
#![allow(dead_code)]

pub mod mock_solvers;

pub use mock_solvers::{AnalyticSphereSolver, FailingSolver, RecordingSolver, SphereCentre};

use agoge_problems::gravity_collapse::PROBLEM_NAME;
use agoge_types::config::ParameterSystem;

/// Parameters with the given mass, radius and (optional) method already set.
pub fn collapse_params(mass: f64, radius: f64, method: Option<&str>) -> ParameterSystem {
    let mut params = ParameterSystem::new();
    params.set(format!("{PROBLEM_NAME}.mass_solar"), mass.to_string());
    params.set(format!("{PROBLEM_NAME}.r_jeans"), radius.to_string());
    if let Some(method) = method {
        params.set(format!("{PROBLEM_NAME}.grav_method"), method);
    }
    params
}
