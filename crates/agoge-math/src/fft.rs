//! 3D discrete Fourier transforms on `Array3<Complex64>`.
//!
//! Both kernels transform in place, one axis at a time.
//! Convention matches numpy:
//! - Forward transform: unnormalized
//! - Inverse transform: normalized by 1/(n0*n1*n2)

use ndarray::{Array3, Axis};
use num_complex::Complex64;
use rustfft::{FftDirection, FftPlanner};
use std::f64::consts::PI;

/// Transform direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Inverse,
}

impl Direction {
    fn sign(self) -> f64 {
        match self {
            Direction::Forward => -1.0,
            Direction::Inverse => 1.0,
        }
    }
}

impl From<Direction> for FftDirection {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::Forward => FftDirection::Forward,
            Direction::Inverse => FftDirection::Inverse,
        }
    }
}

/// Apply `f` to every 1D lane along `axis`, staging each lane in a
/// contiguous buffer.
fn transform_axis<F>(data: &mut Array3<Complex64>, axis: usize, mut f: F)
where
    F: FnMut(&mut [Complex64]),
{
    let len = data.len_of(Axis(axis));
    let mut buffer = vec![Complex64::new(0.0, 0.0); len];
    for mut lane in data.lanes_mut(Axis(axis)) {
        for (b, v) in buffer.iter_mut().zip(lane.iter()) {
            *b = *v;
        }
        f(&mut buffer);
        for (v, b) in lane.iter_mut().zip(buffer.iter()) {
            *v = *b;
        }
    }
}

fn normalize(data: &mut Array3<Complex64>) {
    let n = data.len();
    if n > 0 {
        let norm = 1.0 / n as f64;
        data.mapv_inplace(|c| c * norm);
    }
}

/// Direct O(n²)-per-lane DFT.
pub fn dft3_naive(data: &mut Array3<Complex64>, direction: Direction) {
    for axis in 0..3 {
        let n = data.len_of(Axis(axis));
        if n <= 1 {
            continue;
        }
        // Twiddle table indexed by (k * t) mod n keeps the phase argument small.
        let twiddles: Vec<Complex64> = (0..n)
            .map(|m| Complex64::from_polar(1.0, direction.sign() * 2.0 * PI * m as f64 / n as f64))
            .collect();
        let mut scratch = vec![Complex64::new(0.0, 0.0); n];
        transform_axis(data, axis, |lane| {
            scratch.copy_from_slice(lane);
            for (k, out) in lane.iter_mut().enumerate() {
                let mut acc = Complex64::new(0.0, 0.0);
                for (t, &x) in scratch.iter().enumerate() {
                    acc += x * twiddles[(k * t) % n];
                }
                *out = acc;
            }
        });
    }
    if direction == Direction::Inverse {
        normalize(data);
    }
}

/// Fast transform through the rustfft planner (Cooley-Tukey family,
/// mixed radix for non power-of-two lengths).
pub fn fft3(data: &mut Array3<Complex64>, direction: Direction) {
    let mut planner = FftPlanner::new();
    for axis in 0..3 {
        let n = data.len_of(Axis(axis));
        if n <= 1 {
            continue;
        }
        let plan = planner.plan_fft(n, direction.into());
        transform_axis(data, axis, |lane| plan.process(lane));
    }
    if direction == Direction::Inverse {
        normalize(data);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(shape: (usize, usize, usize)) -> Array3<Complex64> {
        Array3::from_shape_fn(shape, |(k, j, i)| {
            Complex64::new(
                (i as f64 * 0.7 + j as f64 * 1.3).sin() + k as f64,
                (k as f64 * 0.4 - i as f64).cos(),
            )
        })
    }

    #[test]
    fn test_fft3_roundtrip() {
        let original = sample((8, 4, 16));
        let mut data = original.clone();
        fft3(&mut data, Direction::Forward);
        fft3(&mut data, Direction::Inverse);

        for (idx, &val) in original.indexed_iter() {
            assert!(
                (data[idx] - val).norm() < 1e-10,
                "FFT roundtrip failed at {idx:?}: {} vs {val}",
                data[idx]
            );
        }
    }

    #[test]
    fn test_naive_matches_fft() {
        // Non power-of-two lengths exercise the mixed-radix planner.
        let original = sample((6, 5, 3));
        let mut naive = original.clone();
        let mut fast = original;
        dft3_naive(&mut naive, Direction::Forward);
        fft3(&mut fast, Direction::Forward);

        for (idx, &val) in fast.indexed_iter() {
            assert!(
                (naive[idx] - val).norm() < 1e-9,
                "naive vs fft mismatch at {idx:?}: {} vs {val}",
                naive[idx]
            );
        }
    }

    #[test]
    fn test_naive_roundtrip() {
        let original = sample((4, 4, 4));
        let mut data = original.clone();
        dft3_naive(&mut data, Direction::Forward);
        dft3_naive(&mut data, Direction::Inverse);
        for (idx, &val) in original.indexed_iter() {
            assert!((data[idx] - val).norm() < 1e-10);
        }
    }

    #[test]
    fn test_dc_component() {
        // For a constant field, the DC component should be N*value
        let val = 3.0;
        let mut data = Array3::from_elem((4, 6, 8), Complex64::new(val, 0.0));
        fft3(&mut data, Direction::Forward);

        let expected_dc = (4 * 6 * 8) as f64 * val;
        assert!(
            (data[[0, 0, 0]].re - expected_dc).abs() < 1e-10,
            "DC component: {} vs {expected_dc}",
            data[[0, 0, 0]].re
        );
        for (idx, v) in data.indexed_iter() {
            if idx != (0, 0, 0) {
                assert!(v.norm() < 1e-10, "non-DC mode {idx:?} should vanish");
            }
        }
    }

    #[test]
    fn test_singleton_axes_untouched() {
        let original = sample((1, 1, 5));
        let mut a = original.clone();
        let mut b = original;
        dft3_naive(&mut a, Direction::Forward);
        fft3(&mut b, Direction::Forward);
        for (x, y) in a.iter().zip(b.iter()) {
            assert!((x - y).norm() < 1e-10);
        }
    }
}
