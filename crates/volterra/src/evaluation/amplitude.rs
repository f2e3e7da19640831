//! AM/AM amplitude comparison data.
//!
//! Prepares the magnitude pairs needed to draw a "predicted vs. actual"
//! scatter plot with a `y = x` reference line. Rendering is left to the
//! caller.

// Internal dependencies
use crate::primitives::errors::VolterraError;
use crate::primitives::sample::Sample;

/// Magnitudes of actual and predicted outputs, paired by sample index.
#[derive(Debug, Clone, PartialEq)]
pub struct AmplitudeComparison<R> {
    /// `|actual_i|`.
    pub actual: Vec<R>,

    /// `|predicted_i|`.
    pub predicted: Vec<R>,

    /// Endpoints `(min, max)` of the `y = x` reference line over both series.
    pub reference: Option<(R, R)>,
}

impl<R> AmplitudeComparison<R> {
    /// Number of plotted points.
    pub fn len(&self) -> usize {
        self.actual.len()
    }

    /// Whether there is nothing to plot.
    pub fn is_empty(&self) -> bool {
        self.actual.is_empty()
    }

    /// Iterate over `(actual, predicted)` magnitude pairs.
    pub fn pairs(&self) -> impl Iterator<Item = (&R, &R)> {
        self.actual.iter().zip(self.predicted.iter())
    }
}

/// Build the amplitude comparison of `predicted` against `actual`.
///
/// # Errors
///
/// * `MismatchedPredictions` when the sequences differ in length.
pub fn amplitude_comparison<T: Sample>(
    predicted: &[T],
    actual: &[T],
) -> Result<AmplitudeComparison<T::RealField>, VolterraError> {
    if predicted.len() != actual.len() {
        return Err(VolterraError::MismatchedPredictions {
            predicted: predicted.len(),
            actual: actual.len(),
        });
    }

    let actual: Vec<T::RealField> = actual.iter().map(|v| v.modulus()).collect();
    let predicted: Vec<T::RealField> = predicted.iter().map(|v| v.modulus()).collect();

    let reference = actual.iter().chain(predicted.iter()).cloned().fold(
        None,
        |range: Option<(T::RealField, T::RealField)>, v| match range {
            None => Some((v.clone(), v)),
            Some((lo, hi)) => {
                let lo = if v < lo { v.clone() } else { lo };
                let hi = if v > hi { v } else { hi };
                Some((lo, hi))
            }
        },
    );

    Ok(AmplitudeComparison {
        actual,
        predicted,
        reference,
    })
}
