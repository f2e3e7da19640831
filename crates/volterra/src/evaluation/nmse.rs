//! Normalized mean-square error in decibels.
//!
//! ## Purpose
//!
//! Scores a prediction against the actual outputs:
//!
//! ```text
//! NMSE = 10 * log10( sum |actual - predicted|^2 / (sum |actual|^2 + eps) )
//! ```
//!
//! ## Design notes
//!
//! * **Accumulated denominator**: The reference energy is summed over every
//!   sample, not taken from a single sample.
//! * **Soft degenerate case**: `eps` keeps an all-zero reference finite instead
//!   of raising an error.
//! * **Asymmetric**: The denominator depends on `actual` only, so swapping the
//!   arguments changes the score in general.
//!
//! ## Invariants
//!
//! * A perfect prediction of a non-zero signal scores `-inf`.
//! * Lower is better; 0 dB means the error carries as much energy as the signal.

// External dependencies
use nalgebra::ComplexField;

// Internal dependencies
use crate::math::norms::{energy, squared_distance};
use crate::primitives::errors::VolterraError;
use crate::primitives::sample::Sample;

/// Default denominator guard.
pub const DEFAULT_NMSE_EPSILON: f64 = 1e-12;

/// NMSE in dB with the default denominator guard.
///
/// # Errors
///
/// * `MismatchedPredictions` when the sequences differ in length.
pub fn nmse<T: Sample>(predicted: &[T], actual: &[T]) -> Result<T::RealField, VolterraError> {
    nmse_with_epsilon(predicted, actual, DEFAULT_NMSE_EPSILON)
}

/// NMSE in dB with an explicit denominator guard.
pub fn nmse_with_epsilon<T: Sample>(
    predicted: &[T],
    actual: &[T],
    epsilon: f64,
) -> Result<T::RealField, VolterraError> {
    if predicted.len() != actual.len() {
        return Err(VolterraError::MismatchedPredictions {
            predicted: predicted.len(),
            actual: actual.len(),
        });
    }

    let num = squared_distance(actual, predicted);
    let den = energy(actual);
    let eps: T::RealField = nalgebra::convert(epsilon);
    let ten: T::RealField = nalgebra::convert(10.0);

    Ok(ten * (num / (den + eps)).log10())
}
