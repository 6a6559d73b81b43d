//! Stand-in potential solvers for testing
//!
//! These write known potentials (or nothing at all), so the comparison
//! step can be checked independently of any real Poisson solve.

use agoge_math::poisson::{GravityMethod, PotentialSolver};
use agoge_problems::gravity_collapse::uniform_sphere_potential;
use agoge_types::error::{AgogeError, AgogeResult};
use agoge_types::state::Field3D;
use std::cell::Cell;

/// Where the stub puts the centre of the sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SphereCentre {
    /// Domain midpoint, where the fill actually places the sphere.
    Midpoint,
    /// Coordinate origin, the convention the comparison assumes.
    Origin,
}

/// Writes the exact uniform-sphere potential into `field.phi`.
pub struct AnalyticSphereSolver {
    pub g: f64,
    pub mass: f64,
    pub radius: f64,
    pub centre: SphereCentre,
}

impl AnalyticSphereSolver {
    pub fn new(g: f64, mass: f64, radius: f64, centre: SphereCentre) -> Self {
        Self {
            g,
            mass,
            radius,
            centre,
        }
    }
}

impl PotentialSolver for AnalyticSphereSolver {
    fn solve(&self, field: &mut Field3D, _method: GravityMethod) -> AgogeResult<()> {
        let [cx, cy, cz] = match self.centre {
            SphereCentre::Midpoint => field.grid.bbox.midpoint(),
            SphereCentre::Origin => [0.0, 0.0, 0.0],
        };
        let grid = field.grid.clone();
        for k in 0..grid.nz {
            for j in 0..grid.ny {
                for i in 0..grid.nx {
                    let x = grid.x_center(i) - cx;
                    let y = grid.y_center(j) - cy;
                    let z = grid.z_center(k) - cz;
                    let r = (x * x + y * y + z * z).sqrt();
                    field.phi[grid.interior_index(i, j, k)] =
                        uniform_sphere_potential(r, self.g, self.mass, self.radius);
                }
            }
        }
        Ok(())
    }
}

/// Leaves the field untouched and remembers the requested method.
#[derive(Default)]
pub struct RecordingSolver {
    pub calls: Cell<usize>,
    pub last_method: Cell<Option<GravityMethod>>,
}

impl PotentialSolver for RecordingSolver {
    fn solve(&self, _field: &mut Field3D, method: GravityMethod) -> AgogeResult<()> {
        self.calls.set(self.calls.get() + 1);
        self.last_method.set(Some(method));
        Ok(())
    }
}

/// Always fails, to check error propagation.
pub struct FailingSolver;

impl PotentialSolver for FailingSolver {
    fn solve(&self, _field: &mut Field3D, _method: GravityMethod) -> AgogeResult<()> {
        Err(AgogeError::SolverError("out of memory in transform".to_string()))
    }
}
