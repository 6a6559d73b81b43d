// ─────────────────────────────────────────────────────────────────────
// Agoge Gravity — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// Gravitational constant in code units.
pub const G_CODE: f64 = 1.0;

/// Gravitational constant (m³ kg⁻¹ s⁻²) - real SI value.
/// NOTE: problems run in code units (G = 1) unless the context overrides it.
pub const G_SI: f64 = 6.67430e-11;

/// Density assigned to empty cells. Never exactly zero so downstream
/// equations of state stay well-defined.
pub const DENSITY_FLOOR: f64 = 1.0e-10;

/// Total energy density of cold, pressureless gas.
pub const ENERGY_FLOOR: f64 = 1.0e-10;

/// Read-only physical constants handed to problems and solvers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalConstants {
    /// Gravitational constant in the units of the run.
    pub g: f64,
}

impl PhysicalConstants {
    pub fn new(g: f64) -> Self {
        PhysicalConstants { g }
    }
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        PhysicalConstants { g: G_CODE }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_code_units() {
        assert_eq!(PhysicalConstants::default().g, 1.0);
        assert_eq!(PhysicalConstants::new(G_SI).g, G_SI);
    }

    #[test]
    fn test_floors_are_positive() {
        assert!(DENSITY_FLOOR > 0.0);
        assert!(ENERGY_FLOOR > 0.0);
    }
}
