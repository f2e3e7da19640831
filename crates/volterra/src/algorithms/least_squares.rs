//! Pseudo-inverse least-squares coefficient estimation.
//!
//! ## Purpose
//!
//! This module solves `min ||[X | 1] c - y||^2` for the coefficient vector `c`
//! of a Volterra model, where `X` is the feature matrix and the appended
//! column of ones carries the bias.
//!
//! ## Design notes
//!
//! * **Moore–Penrose**: The solve goes through the SVD-based pseudo-inverse,
//!   so collinear or rank-deficient feature columns (e.g. zero-padded lags,
//!   repeated samples) yield the minimum-norm solution instead of a failure.
//! * **Relative cutoff**: Singular values at or below `rcond * sigma_max` are
//!   treated as zero. The default `rcond` is `max(rows, cols) * epsilon`.
//! * **Finite only**: Features can overflow even when the raw samples are
//!   finite (e.g. `1e100^4`), so the solve re-checks what it receives.
//! * **Bounded SVD**: The iteration count is capped, so a decomposition that
//!   does not converge is reported instead of looping.
//! * **Stateless**: Nothing is retained between calls.
//!
//! ## Invariants
//!
//! * The returned weights have exactly `X.ncols()` entries, plus the bias.
//! * Exactly representable data (no noise, full rank) is reproduced to
//!   working precision.
//!
//! ## Non-goals
//!
//! * This module does not apply ridge or other regularization.
//! * This module does not select model order or memory depth.

// External dependencies
use nalgebra::{DMatrix, DVector};
use num_traits::Zero;

// Internal dependencies
use crate::primitives::coefficients::Coefficients;
use crate::primitives::errors::VolterraError;
use crate::primitives::matrix::FeatureMatrix;
use crate::primitives::sample::Sample;

/// SVD iterations allowed per squared singular-value count.
const SVD_ITERATIONS_PER_VALUE: usize = 100;

// ============================================================================
// Public Entry Points
// ============================================================================

/// Estimate coefficients with the default singular-value cutoff.
///
/// # Errors
///
/// * `EmptyInput` when the feature matrix has no rows.
/// * `MismatchedInputs` when row counts of features and outputs differ.
/// * `InvalidNumericValue` when a feature or output is NaN or infinite.
/// * `SolverFailure` when the SVD does not converge.
pub fn fit<T: Sample>(
    features: &FeatureMatrix<T>,
    outputs: &[T],
) -> Result<Coefficients<T>, VolterraError> {
    fit_with_rcond(features, outputs, None)
}

/// Estimate coefficients with an explicit relative singular-value cutoff.
///
/// `None` selects the default `max(rows, cols) * epsilon`.
pub fn fit_with_rcond<T: Sample>(
    features: &FeatureMatrix<T>,
    outputs: &[T],
    rcond: Option<T::RealField>,
) -> Result<Coefficients<T>, VolterraError> {
    if features.nrows() != outputs.len() {
        return Err(VolterraError::MismatchedInputs {
            x_len: features.nrows(),
            y_len: outputs.len(),
        });
    }
    if features.is_empty() {
        return Err(VolterraError::EmptyInput);
    }
    if let Some(i) = outputs.iter().position(|v| !v.is_finite()) {
        return Err(VolterraError::InvalidNumericValue(format!(
            "y[{}]={}",
            i, outputs[i]
        )));
    }
    if let Some(k) = features.as_slice().iter().position(|v| !v.is_finite()) {
        let width = features.ncols();
        return Err(VolterraError::InvalidNumericValue(format!(
            "feature[{},{}]={}",
            k / width,
            k % width,
            features.as_slice()[k]
        )));
    }

    let augmented = features.to_augmented();
    let pinv = pseudo_inverse(augmented, rcond)?;
    let solution = pinv * DVector::from_column_slice(outputs);

    let width = features.ncols();
    let weights: Vec<T> = solution.iter().take(width).copied().collect();
    Ok(Coefficients::new(weights, solution[width]))
}

/// Moore–Penrose pseudo-inverse of a dense matrix.
///
/// `rcond` is relative to the largest singular value; `None` selects
/// `max(rows, cols) * epsilon`.
///
/// # Errors
///
/// * `InvalidNumericValue` when the matrix holds a NaN or infinite entry.
/// * `SolverFailure` when the SVD does not converge.
pub fn pseudo_inverse<T: Sample>(
    matrix: DMatrix<T>,
    rcond: Option<T::RealField>,
) -> Result<DMatrix<T>, VolterraError> {
    let (rows, cols) = matrix.shape();
    if let Some(k) = matrix.iter().position(|v| !v.is_finite()) {
        // nalgebra storage is column-major.
        return Err(VolterraError::InvalidNumericValue(format!(
            "matrix[{},{}]={}",
            k % rows,
            k / rows,
            matrix[k]
        )));
    }
    let rcond = rcond.unwrap_or_else(|| default_rcond::<T>(rows, cols));

    let svd = matrix
        .try_svd(true, true, T::epsilon(), svd_max_iterations(rows, cols))
        .ok_or(VolterraError::SolverFailure("SVD did not converge"))?;

    let sigma_max = svd
        .singular_values
        .iter()
        .cloned()
        .fold(T::RealField::zero(), |acc, s| if s > acc { s } else { acc });
    let cutoff = rcond * sigma_max;

    svd.pseudo_inverse(cutoff)
        .map_err(VolterraError::SolverFailure)
}

/// Default relative cutoff: `max(rows, cols) * epsilon`.
#[inline]
pub fn default_rcond<T: Sample>(rows: usize, cols: usize) -> T::RealField {
    let scale: T::RealField = nalgebra::convert(rows.max(cols) as f64);
    scale * T::epsilon()
}

// Iteration cap for a `rows x cols` decomposition. Never zero, since nalgebra
// reads zero as unlimited.
#[inline]
fn svd_max_iterations(rows: usize, cols: usize) -> usize {
    let n = rows.min(cols).max(1);
    n.saturating_mul(n).saturating_mul(SVD_ITERATIONS_PER_VALUE)
}
