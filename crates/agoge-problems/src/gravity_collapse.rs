// ─────────────────────────────────────────────────────────────────────
// Agoge Gravity — Gravity Collapse
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Cold uniform-density sphere: a self-gravity verification problem.
//!
//! The sphere (mass M, radius R) is placed at the midpoint of the domain
//! with zero velocity and floor energy. After the potential solve, Φ is
//! compared with the closed-form uniform-sphere potential
//!
//!   r ≤ R:  Φ = -G M / (2 R³) · (3 R² - r²)
//!   r > R:  Φ = -G M / r
//!
//! and L1/L2 error norms are reported.
//!
//! NOTE: the comparison measures r from the raw cell-centre coordinates,
//! not from the domain midpoint used by the fill. The two agree only when
//! the domain is centred on the origin.

use crate::problem::{Problem, ProblemContext};
use crate::report::{AccuracyReport, ErrorAccumulator};
use agoge_math::poisson::GravityMethod;
use agoge_types::config::{param_key, FromParameters, ParameterSystem};
use agoge_types::constants::{DENSITY_FLOOR, ENERGY_FLOOR};
use agoge_types::error::AgogeResult;
use agoge_types::state::Field3D;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Parameter namespace.
pub const PROBLEM_NAME: &str = "GravityCollapse";

/// Total mass in code units (1.0 ≙ one solar mass).
pub const DEFAULT_MASS: f64 = 1.0;

/// Sphere radius in code units (nominally a Jeans length).
pub const DEFAULT_RADIUS: f64 = 1.0;

/// Solver kernel used when the parameter is empty.
pub const DEFAULT_METHOD: &str = GravityMethod::COOLEY_TUKEY;

/// Typed view of the `GravityCollapse.*` parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GravityCollapseConfig {
    pub mass_solar: f64,
    pub r_jeans: f64,
    pub grav_method: String,
}

impl Default for GravityCollapseConfig {
    fn default() -> Self {
        GravityCollapseConfig {
            mass_solar: DEFAULT_MASS,
            r_jeans: DEFAULT_RADIUS,
            grav_method: DEFAULT_METHOD.to_string(),
        }
    }
}

impl GravityCollapseConfig {
    /// Method name with the empty string replaced by [`DEFAULT_METHOD`].
    pub fn method_name(&self) -> &str {
        if self.grav_method.is_empty() {
            DEFAULT_METHOD
        } else {
            &self.grav_method
        }
    }

    /// Kernel selected by [`Self::method_name`]. Unrecognised names fall
    /// through to the enum's own default, not to [`DEFAULT_METHOD`].
    pub fn method(&self) -> GravityMethod {
        GravityMethod::from_name(self.method_name())
    }
}

impl FromParameters for GravityCollapseConfig {
    fn register_defaults(prefix: &str, params: &mut ParameterSystem) {
        params.add_default(param_key(prefix, "mass_solar"), "1.0");
        params.add_default(param_key(prefix, "r_jeans"), "1.0");
        params.add_default(param_key(prefix, "grav_method"), DEFAULT_METHOD);
    }

    fn from_parameters(prefix: &str, params: &ParameterSystem) -> AgogeResult<Self> {
        Ok(GravityCollapseConfig {
            mass_solar: params.get_f64(&param_key(prefix, "mass_solar"))?,
            r_jeans: params.get_f64(&param_key(prefix, "r_jeans"))?,
            grav_method: params.get_string(&param_key(prefix, "grav_method"))?,
        })
    }
}

/// Interior density of a uniform sphere: M / (4/3 π R³).
pub fn uniform_sphere_density(mass: f64, radius: f64) -> f64 {
    let volume = (4.0 / 3.0) * PI * radius * radius * radius;
    mass / volume
}

/// Closed-form potential of a uniform sphere at distance `r` from its centre.
pub fn uniform_sphere_potential(r: f64, g: f64, mass: f64, radius: f64) -> f64 {
    if r <= radius {
        -(g * mass) / (2.0 * radius * radius * radius) * (3.0 * radius * radius - r * r)
    } else {
        -(g * mass) / r
    }
}

/// Fill `field` with a cold sphere centred on the domain midpoint.
///
/// Inside `r² ≤ R²` the density is M/V, elsewhere [`DENSITY_FLOOR`].
/// Momentum is zero, energy is [`ENERGY_FLOOR`] and the potential is reset
/// to zero everywhere.
pub fn fill_uniform_sphere(field: &mut Field3D, mass: f64, radius: f64) -> AgogeResult<()> {
    field.check_shape()?;
    let rho_inside = uniform_sphere_density(mass, radius);
    let r2_max = radius * radius;
    let [x_mid, y_mid, z_mid] = field.grid.bbox.midpoint();

    let grid = &field.grid;
    for k in 0..grid.nz {
        let zc = grid.z_center(k) - z_mid;
        for j in 0..grid.ny {
            let yc = grid.y_center(j) - y_mid;
            for i in 0..grid.nx {
                let xc = grid.x_center(i) - x_mid;
                let idx = grid.interior_index(i, j, k);
                let r2 = xc * xc + yc * yc + zc * zc;

                field.rho[idx] = if r2 <= r2_max {
                    rho_inside
                } else {
                    DENSITY_FLOOR
                };
                field.rhou[idx] = 0.0;
                field.rhov[idx] = 0.0;
                field.rhow[idx] = 0.0;
                field.e[idx] = ENERGY_FLOOR;
                field.phi[idx] = 0.0;
            }
        }
    }
    Ok(())
}

/// L1/L2 error of `field.phi` against the uniform-sphere potential, with r
/// taken from the raw cell-centre coordinates.
pub fn compare_with_analytic(
    field: &Field3D,
    g: f64,
    mass: f64,
    radius: f64,
    method: GravityMethod,
) -> AgogeResult<AccuracyReport> {
    field.check_shape()?;
    let grid = &field.grid;
    let mut acc = ErrorAccumulator::new();
    for k in 0..grid.nz {
        let z = grid.z_center(k);
        for j in 0..grid.ny {
            let y = grid.y_center(j);
            for i in 0..grid.nx {
                let x = grid.x_center(i);
                let r = (x * x + y * y + z * z).sqrt();
                let exact = uniform_sphere_potential(r, g, mass, radius);
                acc.push(field.phi[grid.interior_index(i, j, k)], exact);
            }
        }
    }
    Ok(acc.finish(method))
}

fn warn_on_degenerate(mass: f64, radius: f64) {
    if !(mass.is_finite() && mass > 0.0) {
        log::warn!("[{PROBLEM_NAME}] mass_solar={mass} is not positive; density will be degenerate");
    }
    if !(radius.is_finite() && radius > 0.0) {
        log::warn!(
            "[{PROBLEM_NAME}] r_jeans={radius} is not positive; density and potential will be non-finite"
        );
    }
}

/// The cold-sphere problem.
#[derive(Debug, Clone, Copy, Default)]
pub struct GravityCollapse;

impl GravityCollapse {
    pub fn new() -> Self {
        GravityCollapse
    }

    /// Fill, solve and compare. Solver errors propagate unchanged.
    pub fn run(
        &self,
        field: &mut Field3D,
        params: &ParameterSystem,
        context: &ProblemContext<'_>,
    ) -> AgogeResult<AccuracyReport> {
        let config = GravityCollapseConfig::from_parameters(PROBLEM_NAME, params)?;
        let g = context.constants.g;
        let mass = config.mass_solar;
        let radius = config.r_jeans;
        warn_on_degenerate(mass, radius);

        fill_uniform_sphere(field, mass, radius)?;

        let method = config.method();
        log::info!(
            "[{PROBLEM_NAME}] Using gravity solver method={} ({method})",
            config.method_name()
        );
        context.solver.solve(field, method)?;

        let report = compare_with_analytic(field, g, mass, radius, method)?;
        log::info!("[{PROBLEM_NAME}] Uniform-sphere potential check: {report}");
        Ok(report)
    }
}

impl Problem for GravityCollapse {
    fn name(&self) -> &str {
        PROBLEM_NAME
    }

    fn register_parameters(&self, params: &mut ParameterSystem) {
        GravityCollapseConfig::register_defaults(PROBLEM_NAME, params);
    }

    fn initialize(
        &self,
        field: &mut Field3D,
        params: &ParameterSystem,
        context: &ProblemContext<'_>,
    ) -> AgogeResult<Option<AccuracyReport>> {
        self.run(field, params, context).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agoge_types::state::{BoundingBox, Grid3D};

    #[test]
    fn test_potential_continuous_at_surface() {
        let (g, m, r) = (1.3, 2.0, 0.7);
        let inside = uniform_sphere_potential(r, g, m, r);
        let outside = uniform_sphere_potential(r * (1.0 + 1e-12), g, m, r);
        assert!((inside - (-g * m / r)).abs() < 1e-12);
        assert!((inside - outside).abs() < 1e-9);
    }

    #[test]
    fn test_potential_at_centre() {
        // Φ(0) = -3/2 G M / R
        let phi = uniform_sphere_potential(0.0, 1.0, 1.0, 2.0);
        assert!((phi + 0.75).abs() < 1e-15);
    }

    #[test]
    fn test_density_of_unit_sphere() {
        let rho = uniform_sphere_density(1.0, 1.0);
        assert!((rho - 3.0 / (4.0 * PI)).abs() < 1e-15);
    }

    #[test]
    fn test_register_then_bind_defaults() {
        let mut params = ParameterSystem::new();
        GravityCollapse.register_parameters(&mut params);
        let cfg = GravityCollapseConfig::from_parameters(PROBLEM_NAME, &params).unwrap();
        assert_eq!(cfg, GravityCollapseConfig::default());
        assert!(params.contains("GravityCollapse.mass_solar"));
        assert!(params.contains("GravityCollapse.r_jeans"));
        assert!(params.contains("GravityCollapse.grav_method"));
    }

    #[test]
    fn test_registration_keeps_user_values() {
        let mut params = ParameterSystem::new();
        params.set("GravityCollapse.r_jeans", "0.5");
        params.set("GravityCollapse.grav_method", "naive_dft");
        GravityCollapse.register_parameters(&mut params);
        GravityCollapse.register_parameters(&mut params);
        let cfg = GravityCollapseConfig::from_parameters(PROBLEM_NAME, &params).unwrap();
        assert_eq!(cfg.r_jeans, 0.5);
        assert_eq!(cfg.mass_solar, 1.0);
        assert_eq!(cfg.method(), GravityMethod::NaiveDft);
    }

    #[test]
    fn test_binding_without_registration_fails() {
        let params = ParameterSystem::new();
        assert!(GravityCollapseConfig::from_parameters(PROBLEM_NAME, &params).is_err());
    }

    #[test]
    fn test_method_resolution_is_two_step() {
        let mut cfg = GravityCollapseConfig::default();
        assert_eq!(cfg.method(), GravityMethod::CooleyTukey);

        cfg.grav_method = String::new();
        assert_eq!(cfg.method_name(), "cooley_tukey");
        assert_eq!(cfg.method(), GravityMethod::CooleyTukey);

        cfg.grav_method = "multigrid".to_string();
        assert_eq!(cfg.method(), GravityMethod::NaiveDft);
    }

    #[test]
    fn test_fill_offset_domain_uses_midpoint() {
        // Domain [0,4]³: the sphere sits at (2,2,2), so the corner cell is empty
        // and the cells around the midpoint are filled.
        let mut field = Field3D::new(Grid3D::new(4, 4, 4, BoundingBox::cube(0.0, 4.0)));
        fill_uniform_sphere(&mut field, 1.0, 1.0).unwrap();
        let grid = field.grid.clone();
        let rho_in = uniform_sphere_density(1.0, 1.0);

        assert_eq!(field.rho[grid.interior_index(0, 0, 0)], DENSITY_FLOOR);
        for (i, j, k) in [(1, 1, 1), (2, 2, 2), (1, 2, 1)] {
            assert_eq!(field.rho[grid.interior_index(i, j, k)], rho_in);
        }
    }

    #[test]
    fn test_fill_overwrites_previous_state() {
        let mut field = Field3D::new(Grid3D::cube(4, -1.0, 1.0));
        field.rhou.fill(3.0);
        field.phi.fill(-7.0);
        field.e.fill(9.0);
        fill_uniform_sphere(&mut field, 1.0, 0.5).unwrap();
        assert!(field.rhou.iter().all(|&v| v == 0.0));
        assert!(field.phi.iter().all(|&v| v == 0.0));
        assert!(field.e.iter().all(|&v| v == ENERGY_FLOOR));
    }
}
