//! Pipeline execution for Volterra modeling.
//!
//! ## Purpose
//!
//! This module runs the fixed modeling pipeline on already-validated data:
//!
//! ```text
//! training:   samples ─► expand ─► fit ─► (predict ─► diagnostics)
//! validation: samples ─► expand ─► predict ─► NMSE / diagnostics / amplitude
//! ```
//!
//! ## Design notes
//!
//! * **Linear**: Every run goes through the stages once, in order; there are no
//!   retries and no branching beyond optional outputs.
//! * **Execution hint**: The `parallel` flag only changes how feature rows are
//!   filled; results are identical either way.
//!
//! ## Invariants
//!
//! * The validation path expands with the exact order, memory depth and basis
//!   the coefficients were fitted with.
//!
//! ## Non-goals
//!
//! * This module does not validate raw inputs (see the validator).
//! * This module does not log or retry.

// Internal dependencies
use crate::algorithms::expansion::expand;
#[cfg(feature = "parallel")]
use crate::algorithms::expansion::expand_parallel;
use crate::algorithms::least_squares::fit_with_rcond;
use crate::algorithms::prediction::predict;
use crate::engine::output::{ValidationReport, VolterraFit};
use crate::evaluation::amplitude::amplitude_comparison;
use crate::evaluation::diagnostics::Diagnostics;
use crate::math::basis::Basis;
use crate::primitives::errors::VolterraError;
use crate::primitives::matrix::FeatureMatrix;
use crate::primitives::sample::Sample;

// ============================================================================
// Configuration
// ============================================================================

/// Validated configuration of one modeling run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolterraConfig {
    /// Polynomial order `P` (>= 1).
    pub order: usize,

    /// Memory depth `M`.
    pub memory_depth: usize,

    /// Nonlinear basis.
    pub basis: Basis,

    /// Relative singular-value cutoff (`None` = automatic).
    pub rcond: Option<f64>,

    /// Keep the model output on the training inputs.
    pub return_fitted: bool,

    /// Compute training-set diagnostics.
    pub return_diagnostics: bool,

    /// Fill feature rows in parallel.
    pub parallel: bool,
}

impl Default for VolterraConfig {
    fn default() -> Self {
        Self {
            order: 1,
            memory_depth: 0,
            basis: Basis::default(),
            rcond: None,
            return_fitted: false,
            return_diagnostics: false,
            parallel: false,
        }
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Stateless driver of the modeling pipeline.
pub struct VolterraExecutor;

impl VolterraExecutor {
    /// Expand samples according to the configuration.
    pub fn expand<T: Sample>(
        samples: &[T],
        order: usize,
        memory_depth: usize,
        basis: Basis,
        parallel: bool,
    ) -> Result<FeatureMatrix<T>, VolterraError> {
        #[cfg(feature = "parallel")]
        {
            if parallel {
                expand_parallel(samples, order, memory_depth, basis)
            } else {
                expand(samples, order, memory_depth, basis)
            }
        }

        #[cfg(not(feature = "parallel"))]
        {
            let _ = parallel;
            expand(samples, order, memory_depth, basis)
        }
    }

    /// Expand the training inputs and estimate coefficients.
    pub fn train<T: Sample>(
        config: &VolterraConfig,
        x: &[T],
        y: &[T],
    ) -> Result<VolterraFit<T>, VolterraError> {
        let features = Self::expand(
            x,
            config.order,
            config.memory_depth,
            config.basis,
            config.parallel,
        )?;

        let rcond = config.rcond.map(nalgebra::convert::<f64, T::RealField>);
        let coefficients = fit_with_rcond(&features, y, rcond)?;

        let needs_output = config.return_fitted || config.return_diagnostics;
        let fitted = if needs_output {
            Some(predict(&features, &coefficients)?)
        } else {
            None
        };

        let diagnostics = match (&fitted, config.return_diagnostics) {
            (Some(values), true) => Some(Diagnostics::compute(values, y)?),
            _ => None,
        };

        Ok(VolterraFit {
            coefficients,
            order: config.order,
            memory_depth: config.memory_depth,
            basis: config.basis,
            fitted: if config.return_fitted { fitted } else { None },
            diagnostics,
            rcond: config.rcond,
            parallel: config.parallel,
        })
    }

    /// Predict with a fitted model on new inputs.
    pub fn predict<T: Sample>(model: &VolterraFit<T>, x: &[T]) -> Result<Vec<T>, VolterraError> {
        let features = Self::expand(
            x,
            model.order,
            model.memory_depth,
            model.basis,
            model.parallel,
        )?;
        predict(&features, &model.coefficients)
    }

    /// Score a fitted model on held-out data.
    pub fn validate<T: Sample>(
        model: &VolterraFit<T>,
        x: &[T],
        y: &[T],
    ) -> Result<ValidationReport<T>, VolterraError> {
        let predictions = Self::predict(model, x)?;
        let diagnostics = Diagnostics::compute(&predictions, y)?;
        let amplitude = amplitude_comparison(&predictions, y)?;

        Ok(ValidationReport {
            nmse_db: diagnostics.nmse_db.clone(),
            predictions,
            diagnostics,
            amplitude,
        })
    }
}
