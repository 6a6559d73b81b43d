//! Isolated-boundary Poisson solver for the gravitational potential.
//!
//! Solves ∇²Φ = 4πGρ on a cell-centred `Field3D` with vacuum boundary
//! conditions using the Hockney-Eastwood method: the density is zero-padded
//! to twice the grid size on every axis and convolved with the free-space
//! Green's function -G/|r| by spectral multiplication. Padding removes the
//! periodic images, so the result equals direct summation over all cells.

use crate::fft::{dft3_naive, fft3, Direction};
use agoge_types::constants::PhysicalConstants;
use agoge_types::error::{AgogeError, AgogeResult};
use agoge_types::state::{Field3D, Grid3D};
use ndarray::Array3;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::fmt;

/// ∫ dV / |r| over a unit cube, evaluated at its centre.
/// Self-interaction of a cell of side h is then -G m · CUBE_SELF_POTENTIAL / h.
const CUBE_SELF_POTENTIAL: f64 = 2.380_077_2;

/// Transform kernel used by the solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GravityMethod {
    /// Direct O(n²) DFT per lane.
    #[default]
    NaiveDft,
    /// rustfft planner, O(n log n).
    CooleyTukey,
}

impl GravityMethod {
    pub const NAIVE_DFT: &'static str = "naive_dft";
    pub const COOLEY_TUKEY: &'static str = "cooley_tukey";

    /// Map a method name to a kernel.
    ///
    /// Only `"cooley_tukey"` selects [`GravityMethod::CooleyTukey`]; every
    /// other string, recognised or not, falls back to the enum default.
    pub fn from_name(name: &str) -> Self {
        match name {
            Self::COOLEY_TUKEY => GravityMethod::CooleyTukey,
            _ => GravityMethod::default(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            GravityMethod::NaiveDft => Self::NAIVE_DFT,
            GravityMethod::CooleyTukey => Self::COOLEY_TUKEY,
        }
    }

    fn transform(&self, data: &mut Array3<Complex64>, direction: Direction) {
        match self {
            GravityMethod::NaiveDft => dft3_naive(data, direction),
            GravityMethod::CooleyTukey => fft3(data, direction),
        }
    }
}

impl fmt::Display for GravityMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Anything that can fill `field.phi` from `field.rho`.
pub trait PotentialSolver {
    fn solve(&self, field: &mut Field3D, method: GravityMethod) -> AgogeResult<()>;
}

/// Free-space (vacuum boundary) solver.
#[derive(Debug, Clone, Copy)]
pub struct IsolatedPoissonSolver {
    pub g: f64,
}

impl IsolatedPoissonSolver {
    pub fn new(g: f64) -> Self {
        IsolatedPoissonSolver { g }
    }

    pub fn from_constants(constants: &PhysicalConstants) -> Self {
        IsolatedPoissonSolver { g: constants.g }
    }

    /// Green's function sampled on the doubled grid, wrapped so that offset
    /// p and 2n - p map to the same separation.
    fn green_kernel(&self, grid: &Grid3D, shape: (usize, usize, usize)) -> Array3<Complex64> {
        let (pz, py, px) = shape;
        let h = grid.cell_volume().cbrt();
        let self_term = -self.g * CUBE_SELF_POTENTIAL / h;
        let wrap = |p: usize, len: usize| p.min(len - p) as f64;

        Array3::from_shape_fn(shape, |(k, j, i)| {
            let sx = wrap(i, px) * grid.dx;
            let sy = wrap(j, py) * grid.dy;
            let sz = wrap(k, pz) * grid.dz;
            let r = (sx * sx + sy * sy + sz * sz).sqrt();
            let value = if r > 0.0 { -self.g / r } else { self_term };
            Complex64::new(value, 0.0)
        })
    }
}

impl PotentialSolver for IsolatedPoissonSolver {
    fn solve(&self, field: &mut Field3D, method: GravityMethod) -> AgogeResult<()> {
        let grid = &field.grid;
        let (nx, ny, nz) = (grid.nx, grid.ny, grid.nz);
        if grid.cell_count() == 0 {
            return Err(AgogeError::SolverError(format!(
                "grid must have nx,ny,nz >= 1, got ({nx}, {ny}, {nz})"
            )));
        }
        if !self.g.is_finite() {
            return Err(AgogeError::SolverError(format!(
                "gravitational constant must be finite, got {}",
                self.g
            )));
        }
        field.check_shape()?;

        let shape = (2 * nz, 2 * ny, 2 * nx);
        let dv = grid.cell_volume();

        let mut mass = Array3::<Complex64>::zeros(shape);
        for k in 0..nz {
            for j in 0..ny {
                for i in 0..nx {
                    let idx = grid.interior_index(i, j, k);
                    mass[[k, j, i]] = Complex64::new(field.rho[idx] * dv, 0.0);
                }
            }
        }
        let mut kernel = self.green_kernel(grid, shape);

        method.transform(&mut mass, Direction::Forward);
        method.transform(&mut kernel, Direction::Forward);
        mass.zip_mut_with(&kernel, |m, &g| *m *= g);
        method.transform(&mut mass, Direction::Inverse);

        for k in 0..nz {
            for j in 0..ny {
                for i in 0..nx {
                    let idx = grid.interior_index(i, j, k);
                    field.phi[idx] = mass[[k, j, i]].re;
                }
            }
        }

        log::debug!(
            "isolated Poisson solve ({method}) on {nx}x{ny}x{nz} cells, padded to {}x{}x{}",
            shape.2,
            shape.1,
            shape.0
        );
        Ok(())
    }
}
