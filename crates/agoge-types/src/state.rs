// ─────────────────────────────────────────────────────────────────────
// Agoge Gravity — State
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use crate::error::{AgogeError, AgogeResult};
use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box of the computational domain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
    pub zmin: f64,
    pub zmax: f64,
}

impl BoundingBox {
    pub fn new(xmin: f64, xmax: f64, ymin: f64, ymax: f64, zmin: f64, zmax: f64) -> Self {
        BoundingBox {
            xmin,
            xmax,
            ymin,
            ymax,
            zmin,
            zmax,
        }
    }

    /// Cube `[lo, hi]³`.
    pub fn cube(lo: f64, hi: f64) -> Self {
        BoundingBox::new(lo, hi, lo, hi, lo, hi)
    }

    /// Geometric midpoint of the box.
    pub fn midpoint(&self) -> [f64; 3] {
        [
            0.5 * (self.xmin + self.xmax),
            0.5 * (self.ymin + self.ymax),
            0.5 * (self.zmin + self.zmax),
        ]
    }

    /// Edge lengths along x, y, z.
    pub fn extent(&self) -> [f64; 3] {
        [
            self.xmax - self.xmin,
            self.ymax - self.ymin,
            self.zmax - self.zmin,
        ]
    }
}

/// 3D cell-centred Cartesian grid with precomputed centre coordinates.
///
/// Cells are addressed by `(i, j, k)` along `(x, y, z)`. The linear
/// interior index runs x fastest: `i + nx * (j + ny * k)`.
#[derive(Debug, Clone)]
pub struct Grid3D {
    pub nx: usize,
    pub ny: usize,
    pub nz: usize,
    pub bbox: BoundingBox,
    pub dx: f64,
    pub dy: f64,
    pub dz: f64,
    pub x: Array1<f64>, // cell centres [nx]
    pub y: Array1<f64>, // cell centres [ny]
    pub z: Array1<f64>, // cell centres [nz]
}

impl Grid3D {
    pub fn new(nx: usize, ny: usize, nz: usize, bbox: BoundingBox) -> Self {
        let [lx, ly, lz] = bbox.extent();
        let dx = lx / nx.max(1) as f64;
        let dy = ly / ny.max(1) as f64;
        let dz = lz / nz.max(1) as f64;

        let x = Array1::from_shape_fn(nx, |i| bbox.xmin + (i as f64 + 0.5) * dx);
        let y = Array1::from_shape_fn(ny, |j| bbox.ymin + (j as f64 + 0.5) * dy);
        let z = Array1::from_shape_fn(nz, |k| bbox.zmin + (k as f64 + 0.5) * dz);

        Grid3D {
            nx,
            ny,
            nz,
            bbox,
            dx,
            dy,
            dz,
            x,
            y,
            z,
        }
    }

    /// Uniform `n³` grid on the cube `[lo, hi]³`.
    pub fn cube(n: usize, lo: f64, hi: f64) -> Self {
        Grid3D::new(n, n, n, BoundingBox::cube(lo, hi))
    }

    #[inline]
    pub fn x_center(&self, i: usize) -> f64 {
        self.x[i]
    }

    #[inline]
    pub fn y_center(&self, j: usize) -> f64 {
        self.y[j]
    }

    #[inline]
    pub fn z_center(&self, k: usize) -> f64 {
        self.z[k]
    }

    #[inline]
    pub fn interior_index(&self, i: usize, j: usize, k: usize) -> usize {
        i + self.nx * (j + self.ny * k)
    }

    /// Bounds-checked variant of [`Grid3D::interior_index`].
    pub fn checked_index(&self, i: usize, j: usize, k: usize) -> AgogeResult<usize> {
        if i >= self.nx || j >= self.ny || k >= self.nz {
            return Err(AgogeError::GridOutOfBounds { i, j, k });
        }
        Ok(self.interior_index(i, j, k))
    }

    /// Inverse of [`Grid3D::interior_index`].
    pub fn cell_coords(&self, idx: usize) -> (usize, usize, usize) {
        let i = idx % self.nx;
        let j = (idx / self.nx) % self.ny;
        let k = idx / (self.nx * self.ny);
        (i, j, k)
    }

    pub fn cell_count(&self) -> usize {
        self.nx * self.ny * self.nz
    }

    pub fn cell_volume(&self) -> f64 {
        self.dx * self.dy * self.dz
    }
}

/// Conserved quantities plus gravitational potential of a single cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellState {
    pub rho: f64,
    pub momentum: [f64; 3],
    pub energy: f64,
    pub phi: f64,
}

/// Cell-centred field state on a [`Grid3D`], one flat array per quantity.
#[derive(Debug, Clone)]
pub struct Field3D {
    pub grid: Grid3D,
    pub rho: Array1<f64>,  // mass density
    pub rhou: Array1<f64>, // x momentum
    pub rhov: Array1<f64>, // y momentum
    pub rhow: Array1<f64>, // z momentum
    pub e: Array1<f64>,    // total energy density
    pub phi: Array1<f64>,  // gravitational potential
}

impl Field3D {
    pub fn new(grid: Grid3D) -> Self {
        let n = grid.cell_count();
        Field3D {
            grid,
            rho: Array1::zeros(n),
            rhou: Array1::zeros(n),
            rhov: Array1::zeros(n),
            rhow: Array1::zeros(n),
            e: Array1::zeros(n),
            phi: Array1::zeros(n),
        }
    }

    /// Every array must hold exactly one entry per grid cell.
    pub fn check_shape(&self) -> AgogeResult<()> {
        let cells = self.grid.cell_count();
        let arrays = [
            ("rho", &self.rho),
            ("rhou", &self.rhou),
            ("rhov", &self.rhov),
            ("rhow", &self.rhow),
            ("e", &self.e),
            ("phi", &self.phi),
        ];
        for (name, array) in arrays {
            if array.len() != cells {
                return Err(AgogeError::FieldShape {
                    name,
                    len: array.len(),
                    cells,
                });
            }
        }
        Ok(())
    }

    pub fn cell(&self, idx: usize) -> CellState {
        CellState {
            rho: self.rho[idx],
            momentum: [self.rhou[idx], self.rhov[idx], self.rhow[idx]],
            energy: self.e[idx],
            phi: self.phi[idx],
        }
    }

    pub fn set_cell(&mut self, idx: usize, cell: CellState) {
        self.rho[idx] = cell.rho;
        self.rhou[idx] = cell.momentum[0];
        self.rhov[idx] = cell.momentum[1];
        self.rhow[idx] = cell.momentum[2];
        self.e[idx] = cell.energy;
        self.phi[idx] = cell.phi;
    }

    /// Total mass `Σ ρ dV` over interior cells.
    pub fn total_mass(&self) -> f64 {
        self.rho.sum() * self.grid.cell_volume()
    }
}
