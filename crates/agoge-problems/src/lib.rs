// ─────────────────────────────────────────────────────────────────────
// Agoge Gravity — Problems
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Verification problems for the Agoge self-gravity solver.
//!
//! A problem registers its parameters, fills a `Field3D`, drives the
//! potential solver and checks the result against a closed-form answer.

pub mod gravity_collapse;
pub mod logging;
pub mod problem;
pub mod registry;
pub mod report;

pub use gravity_collapse::{GravityCollapse, GravityCollapseConfig};
pub use problem::{Problem, ProblemContext};
pub use report::AccuracyReport;
