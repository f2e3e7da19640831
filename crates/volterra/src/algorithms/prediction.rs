//! Model output prediction.
//!
//! ## Purpose
//!
//! This module applies a coefficient vector to a feature matrix:
//! `y_i = sum_j w_j * X[i][j] + bias`.
//!
//! ## Design notes
//!
//! * **Bias always applied**: Feature rows are never augmented by the caller;
//!   the bias stored in [`Coefficients`] is added here. This keeps the
//!   predictor consistent with the estimator, which solves against an
//!   augmented matrix.
//!
//! ## Invariants
//!
//! * One output per feature row, in row order.
//! * The weight count must equal the feature column count.

// Internal dependencies
use crate::primitives::coefficients::Coefficients;
use crate::primitives::errors::VolterraError;
use crate::primitives::matrix::FeatureMatrix;
use crate::primitives::sample::Sample;

/// Predict one output per feature row.
///
/// # Errors
///
/// * `MismatchedCoefficients` when the weight count differs from `features.ncols()`.
pub fn predict<T: Sample>(
    features: &FeatureMatrix<T>,
    coefficients: &Coefficients<T>,
) -> Result<Vec<T>, VolterraError> {
    let weights = coefficients.weights();
    if weights.len() != features.ncols() {
        return Err(VolterraError::MismatchedCoefficients {
            features: features.ncols(),
            weights: weights.len(),
        });
    }

    let bias = coefficients.bias();
    Ok(features
        .rows()
        .map(|row| dot(row, weights) + bias)
        .collect())
}

/// Plain dot product `sum_j a_j * b_j` (no conjugation).
#[inline]
pub fn dot<T: Sample>(a: &[T], b: &[T]) -> T {
    a.iter()
        .zip(b.iter())
        .fold(T::zero(), |acc, (&x, &w)| acc + x * w)
}
