use agoge_math::poisson::GravityMethod;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Error norms of a numerical potential against the analytic one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AccuracyReport {
    /// Solver kernel the potential came from.
    pub method: GravityMethod,
    /// Mean absolute error.
    pub l1: f64,
    /// Root-mean-square error.
    pub l2: f64,
    /// Number of cells the norms were taken over.
    pub cells: usize,
}

impl fmt::Display for AccuracyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "L1= {:e}, L2= {:e}  (over {} cells, {})",
            self.l1, self.l2, self.cells, self.method
        )
    }
}

/// Running sums for [`AccuracyReport`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ErrorAccumulator {
    sum_abs: f64,
    sum_sqr: f64,
    count: usize,
}

impl ErrorAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, numeric: f64, exact: f64) {
        let diff = numeric - exact;
        self.sum_abs += diff.abs();
        self.sum_sqr += diff * diff;
        self.count += 1;
    }

    /// L1 = Σ|Δ|/N, L2 = sqrt(ΣΔ²/N).
    pub fn finish(self, method: GravityMethod) -> AccuracyReport {
        let n = self.count as f64;
        AccuracyReport {
            method,
            l1: self.sum_abs / n,
            l2: (self.sum_sqr / n).sqrt(),
            cells: self.count,
        }
    }
}
