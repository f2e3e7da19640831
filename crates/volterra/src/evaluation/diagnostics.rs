//! Diagnostic metrics for Volterra model quality assessment.
//!
//! ## Purpose
//!
//! This module summarizes how well a model's predictions match the actual
//! outputs, on the training set or on held-out validation data.
//!
//! ## Key concepts
//!
//! * **NMSE**: Error energy relative to signal energy, in dB.
//! * **RMSE / MAE**: Root-mean-square and mean absolute error magnitudes.
//! * **Max error**: Largest single-sample error magnitude.
//!
//! ## Invariants
//!
//! * RMSE, MAE and max error are non-negative.
//! * All metrics are computed on error moduli, so complex samples are handled
//!   the same way as real ones.
//!
//! ## Non-goals
//!
//! * This module does not compute confidence intervals for the coefficients.

// External dependencies
use core::fmt::{Display, Formatter, Result};
use nalgebra::RealField;

// Internal dependencies
use crate::evaluation::nmse::nmse;
use crate::math::norms::{absolute_distance, max_abs_distance, squared_distance};
use crate::primitives::errors::VolterraError;
use crate::primitives::sample::Sample;

/// Fit-quality metrics of a prediction.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostics<R> {
    /// Number of samples scored.
    pub n: usize,

    /// Normalized mean-square error in dB.
    pub nmse_db: R,

    /// Root-mean-square error magnitude.
    pub rmse: R,

    /// Mean absolute error magnitude.
    pub mae: R,

    /// Largest absolute error magnitude.
    pub max_abs_error: R,
}

impl<R: RealField> Diagnostics<R> {
    /// Compute diagnostics of `predicted` against `actual`.
    ///
    /// # Errors
    ///
    /// * `MismatchedPredictions` when the sequences differ in length.
    pub fn compute<T>(predicted: &[T], actual: &[T]) -> core::result::Result<Self, VolterraError>
    where
        T: Sample<RealField = R>,
    {
        let nmse_db = nmse(predicted, actual)?;
        let n = actual.len();

        if n == 0 {
            return Ok(Self {
                n,
                nmse_db,
                rmse: R::zero(),
                mae: R::zero(),
                max_abs_error: R::zero(),
            });
        }

        let n_r: R = nalgebra::convert(n as f64);
        let rmse = (squared_distance(predicted, actual) / n_r.clone()).sqrt();
        let mae = absolute_distance(predicted, actual) / n_r;
        let max_abs_error = max_abs_distance(predicted, actual);

        Ok(Self {
            n,
            nmse_db,
            rmse,
            mae,
            max_abs_error,
        })
    }
}

impl<R: Display> Display for Diagnostics<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Volterra Diagnostics:")?;
        writeln!(f, "  Samples:      {}", self.n)?;
        writeln!(f, "  NMSE (dB):    {:.4}", self.nmse_db)?;
        writeln!(f, "  RMSE:         {:.6}", self.rmse)?;
        writeln!(f, "  MAE:          {:.6}", self.mae)?;
        write!(f, "  Max |error|:  {:.6}", self.max_abs_error)
    }
}
