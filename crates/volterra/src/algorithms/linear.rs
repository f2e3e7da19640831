//! Closed-form straight-line least squares.
//!
//! ## Purpose
//!
//! Fits `y = slope * x + intercept` to real data by solving the 2x2 normal
//! equations directly. This is the single-feature, memoryless special case
//! of the Volterra estimator (`P = 1`, `M = 0`) and is handy as a baseline.
//!
//! ## Design notes
//!
//! * **Centered sums**: Slope and intercept are computed from centered
//!   moments, which avoids the cancellation of the raw-sum formulas.
//! * **Rank-deficient data**: When every `x` is the same value `c`, the system
//!   has infinitely many solutions; the minimum-norm one
//!   (`slope = c * ȳ / (c² + 1)`, `intercept = ȳ / (c² + 1)`) is returned, which
//!   is what the pseudo-inverse solve yields.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::VolterraError;

/// Slope and intercept of a fitted line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineFit<T> {
    /// Coefficient on `x`.
    pub slope: T,

    /// Constant term.
    pub intercept: T,
}

impl<T: Float> LineFit<T> {
    /// Evaluate the line at every `x`.
    pub fn estimate(&self, x: &[T]) -> Vec<T> {
        x.iter().map(|&xi| self.slope * xi + self.intercept).collect()
    }
}

/// Fit a straight line through `(x, y)` by ordinary least squares.
///
/// # Errors
///
/// * `EmptyInput` when `x` is empty.
/// * `MismatchedInputs` when `x` and `y` differ in length.
pub fn fit_line<T: Float>(x: &[T], y: &[T]) -> Result<LineFit<T>, VolterraError> {
    if x.len() != y.len() {
        return Err(VolterraError::MismatchedInputs {
            x_len: x.len(),
            y_len: y.len(),
        });
    }
    if x.is_empty() {
        return Err(VolterraError::EmptyInput);
    }

    let n = T::from(x.len()).unwrap_or(T::one());
    let x_mean = x.iter().fold(T::zero(), |acc, &v| acc + v) / n;
    let y_mean = y.iter().fold(T::zero(), |acc, &v| acc + v) / n;

    let mut sxx = T::zero();
    let mut sxy = T::zero();
    for (&xi, &yi) in x.iter().zip(y.iter()) {
        let dx = xi - x_mean;
        sxx = sxx + dx * dx;
        sxy = sxy + dx * (yi - y_mean);
    }

    let scale = x.iter().fold(T::zero(), |acc, &v| acc.max(v.abs()));
    let tol = T::epsilon() * n * (scale * scale).max(T::one());

    if sxx <= tol {
        // Constant x: minimum-norm solution of `slope * c + intercept = ȳ`.
        let denom = x_mean * x_mean + T::one();
        return Ok(LineFit {
            slope: x_mean * y_mean / denom,
            intercept: y_mean / denom,
        });
    }

    let slope = sxy / sxx;
    Ok(LineFit {
        slope,
        intercept: y_mean - slope * x_mean,
    })
}
