// ─────────────────────────────────────────────────────────────────────
// Agoge Gravity — Problem
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use crate::report::AccuracyReport;
use agoge_math::poisson::PotentialSolver;
use agoge_types::config::ParameterSystem;
use agoge_types::constants::PhysicalConstants;
use agoge_types::error::AgogeResult;
use agoge_types::state::Field3D;

/// Read-only collaborators handed to [`Problem::initialize`].
pub struct ProblemContext<'a> {
    pub constants: PhysicalConstants,
    pub solver: &'a dyn PotentialSolver,
}

impl<'a> ProblemContext<'a> {
    pub fn new(constants: PhysicalConstants, solver: &'a dyn PotentialSolver) -> Self {
        ProblemContext { constants, solver }
    }
}

/// A named test problem.
pub trait Problem {
    /// Namespace for the problem's parameters, e.g. `"GravityCollapse"`.
    fn name(&self) -> &str;

    /// Add the problem's defaults. Must not overwrite values already set.
    fn register_parameters(&self, params: &mut ParameterSystem);

    /// Populate `field` from resolved parameters.
    ///
    /// Problems with a known solution return the accuracy of the solve.
    fn initialize(
        &self,
        field: &mut Field3D,
        params: &ParameterSystem,
        context: &ProblemContext<'_>,
    ) -> AgogeResult<Option<AccuracyReport>>;
}
