//! Spectral primitives and the self-gravity solver for Agoge.

pub mod fft;
pub mod poisson;

pub use poisson::{GravityMethod, IsolatedPoissonSolver, PotentialSolver};
