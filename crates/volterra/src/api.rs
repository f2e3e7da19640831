//! High-level API for Volterra model estimation.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements a
//! fluent builder for the model structure (polynomial order, memory depth,
//! basis) and solver options, and exposes `fit` / `predict` / `validate`
//! over any [`SampleInput`] container.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Parameters are checked once, when `.build()` is called.
//! * **Type-Safe**: Generic over real and complex [`Sample`] types.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`VolterraBuilder`] via `Volterra::new()`.
//! 2. Chain configuration methods (`.order()`, `.memory_depth()`, etc.).
//! 3. Call `.build()` to obtain a [`VolterraModel`].
//! 4. Call `.fit(&x, &y)` for a [`VolterraFit`], then `.predict()` or `.validate()`.

// External dependencies
use core::marker::PhantomData;

// Internal dependencies
use crate::engine::executor::{VolterraConfig, VolterraExecutor};
use crate::engine::validator::Validator;
use crate::primitives::input::SampleInput;

// Publicly re-exported types
pub use crate::algorithms::expansion::expand;
pub use crate::algorithms::least_squares::{fit, fit_with_rcond};
pub use crate::algorithms::linear::{LineFit, fit_line};
pub use crate::algorithms::prediction::predict;
pub use crate::engine::output::{ValidationReport, VolterraFit, format_coefficients};
pub use crate::evaluation::amplitude::{AmplitudeComparison, amplitude_comparison};
pub use crate::evaluation::diagnostics::Diagnostics;
pub use crate::evaluation::nmse::{DEFAULT_NMSE_EPSILON, nmse, nmse_with_epsilon};
pub use crate::math::basis::Basis;
pub use crate::primitives::coefficients::Coefficients;
pub use crate::primitives::errors::{ErrorKind, VolterraError};
pub use crate::primitives::matrix::FeatureMatrix;
pub use crate::primitives::sample::Sample;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a Volterra model.
#[derive(Debug, Clone)]
pub struct VolterraBuilder<T> {
    /// Polynomial order `P`.
    pub order: Option<usize>,

    /// Memory depth `M`.
    pub memory_depth: Option<usize>,

    /// Nonlinear basis.
    pub basis: Option<Basis>,

    /// Relative singular-value cutoff for the pseudo-inverse.
    pub rcond: Option<f64>,

    /// Keep model output on the training inputs.
    pub return_fitted: Option<bool>,

    /// Compute training diagnostics.
    pub return_diagnostics: Option<bool>,

    /// Parallel execution hint.
    pub parallel: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,

    _sample: PhantomData<T>,
}

impl<T: Sample> Default for VolterraBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Sample> VolterraBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            order: None,
            memory_depth: None,
            basis: None,
            rcond: None,
            return_fitted: None,
            return_diagnostics: None,
            parallel: None,
            duplicate_param: None,
            _sample: PhantomData,
        }
    }

    /// Set the polynomial order `P` (number of degree groups, default 1).
    pub fn order(mut self, order: usize) -> Self {
        if self.order.is_some() {
            self.duplicate_param = Some("order");
        }
        self.order = Some(order);
        self
    }

    /// Set the memory depth `M` (number of past samples per degree, default 0).
    pub fn memory_depth(mut self, memory_depth: usize) -> Self {
        if self.memory_depth.is_some() {
            self.duplicate_param = Some("memory_depth");
        }
        self.memory_depth = Some(memory_depth);
        self
    }

    /// Set the nonlinear basis (default `Power`).
    pub fn basis(mut self, basis: Basis) -> Self {
        if self.basis.is_some() {
            self.duplicate_param = Some("basis");
        }
        self.basis = Some(basis);
        self
    }

    /// Set the relative singular-value cutoff of the pseudo-inverse.
    pub fn rcond(mut self, rcond: f64) -> Self {
        if self.rcond.is_some() {
            self.duplicate_param = Some("rcond");
        }
        self.rcond = Some(rcond);
        self
    }

    /// Include model output on the training inputs.
    pub fn return_fitted(mut self) -> Self {
        self.return_fitted = Some(true);
        self
    }

    /// Include training-set diagnostics (NMSE, RMSE, ...).
    pub fn return_diagnostics(mut self) -> Self {
        self.return_diagnostics = Some(true);
        self
    }

    /// Fill feature rows in parallel.
    ///
    /// Without the `parallel` cargo feature this flag is accepted and ignored;
    /// rows are filled serially and the results are identical.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }

    /// Validate the configuration and produce a model.
    pub fn build(self) -> Result<VolterraModel<T>, VolterraError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let defaults = VolterraConfig::default();
        let config = VolterraConfig {
            order: self.order.unwrap_or(defaults.order),
            memory_depth: self.memory_depth.unwrap_or(defaults.memory_depth),
            basis: self.basis.unwrap_or(defaults.basis),
            rcond: self.rcond,
            return_fitted: self.return_fitted.unwrap_or(defaults.return_fitted),
            return_diagnostics: self
                .return_diagnostics
                .unwrap_or(defaults.return_diagnostics),
            parallel: self.parallel.unwrap_or(defaults.parallel),
        };

        Validator::validate_order(config.order)?;
        FeatureMatrix::<T>::column_count(config.order, config.memory_depth)?;
        if let Some(rcond) = config.rcond {
            Validator::validate_rcond(rcond)?;
        }

        Ok(VolterraModel {
            config,
            _sample: PhantomData,
        })
    }
}

// ============================================================================
// Model
// ============================================================================

/// Validated model structure, ready to be fitted.
#[derive(Debug, Clone)]
pub struct VolterraModel<T> {
    config: VolterraConfig,
    _sample: PhantomData<T>,
}

impl<T: Sample> VolterraModel<T> {
    /// Configuration used by this model.
    pub fn config(&self) -> &VolterraConfig {
        &self.config
    }

    /// Fit coefficients mapping `inputs` to `outputs`.
    ///
    /// # Errors
    ///
    /// * `EmptyInput`, `MismatchedInputs` or `InvalidNumericValue` for bad data.
    /// * `SolverFailure` when the SVD does not converge.
    pub fn fit<I, O>(&self, inputs: &I, outputs: &O) -> Result<VolterraFit<T>, VolterraError>
    where
        I: SampleInput<T> + ?Sized,
        O: SampleInput<T> + ?Sized,
    {
        let x = inputs.as_sample_slice()?;
        let y = outputs.as_sample_slice()?;
        Validator::validate_inputs(x, y)?;

        VolterraExecutor::train(&self.config, x, y)
    }
}

// ============================================================================
// Fitted Model Operations
// ============================================================================

impl<T: Sample> VolterraFit<T> {
    /// Model output for each of `inputs`.
    pub fn predict<I>(&self, inputs: &I) -> Result<Vec<T>, VolterraError>
    where
        I: SampleInput<T> + ?Sized,
    {
        let x = inputs.as_sample_slice()?;
        Validator::validate_finite(x, "x")?;

        VolterraExecutor::predict(self, x)
    }

    /// Predict on `inputs` and score against `outputs`.
    pub fn validate<I, O>(&self, inputs: &I, outputs: &O) -> Result<ValidationReport<T>, VolterraError>
    where
        I: SampleInput<T> + ?Sized,
        O: SampleInput<T> + ?Sized,
    {
        let x = inputs.as_sample_slice()?;
        let y = outputs.as_sample_slice()?;
        Validator::validate_inputs(x, y)?;

        VolterraExecutor::validate(self, x, y)
    }
}
