//! Error types for Volterra model estimation.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while expanding
//! samples into a feature matrix, estimating coefficients, predicting, and
//! scoring a model against held-out data.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending values (e.g., both lengths of a mismatch).
//! * **Deferred**: Builder misuse is recorded while chaining and reported at `build()`.
//! * **Classified**: Every variant maps onto an [`ErrorKind`] so callers can branch
//!   on the failure class without matching individual variants.
//!
//! ## Key concepts
//!
//! 1. **Argument errors**: Polynomial order, tolerance, empty or non-finite input.
//! 2. **Shape errors**: Paired sequences whose lengths or widths do not line up.
//! 3. **Numerical errors**: The SVD backing the pseudo-inverse failed to converge.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// External dependencies
use core::fmt::{Display, Formatter, Result};
use std::error::Error;

// ============================================================================
// Error Classification
// ============================================================================

/// Broad failure class of a [`VolterraError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A parameter or input value is malformed.
    InvalidArgument,

    /// Paired inputs have incompatible row or column counts.
    ShapeMismatch,

    /// The numerical backend could not produce a solution.
    Numerical,
}

// ============================================================================
// Error Type
// ============================================================================

/// Error type for Volterra operations.
#[derive(Debug, Clone, PartialEq)]
pub enum VolterraError {
    /// No samples were supplied where at least one row is required.
    EmptyInput,

    /// Generic invalid input error with a descriptive message.
    InvalidInput(String),

    /// Polynomial order must be at least 1.
    InvalidOrder(usize),

    /// Singular-value cutoff must be finite and non-negative.
    InvalidTolerance(f64),

    /// Input data contains NaN or infinite values.
    InvalidNumericValue(String),

    /// Input and output sequences (or feature rows and outputs) differ in length.
    MismatchedInputs {
        /// Number of input samples or feature rows.
        x_len: usize,
        /// Number of output samples.
        y_len: usize,
    },

    /// Coefficient weights do not line up with the feature columns.
    MismatchedCoefficients {
        /// Number of feature columns.
        features: usize,
        /// Number of weights (bias excluded).
        weights: usize,
    },

    /// Predicted and actual sequences differ in length.
    MismatchedPredictions {
        /// Number of predicted values.
        predicted: usize,
        /// Number of actual values.
        actual: usize,
    },

    /// The singular value decomposition did not converge.
    SolverFailure(&'static str),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

impl VolterraError {
    /// Classify this error into the broad failure taxonomy.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyInput
            | Self::InvalidInput(_)
            | Self::InvalidOrder(_)
            | Self::InvalidTolerance(_)
            | Self::InvalidNumericValue(_)
            | Self::DuplicateParameter { .. } => ErrorKind::InvalidArgument,
            Self::MismatchedInputs { .. }
            | Self::MismatchedCoefficients { .. }
            | Self::MismatchedPredictions { .. } => ErrorKind::ShapeMismatch,
            Self::SolverFailure(_) => ErrorKind::Numerical,
        }
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for VolterraError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input arrays are empty"),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::InvalidOrder(order) => {
                write!(f, "Invalid polynomial order: {order} (must be >= 1)")
            }
            Self::InvalidTolerance(tol) => {
                write!(f, "Invalid rcond: {tol} (must be >= 0 and finite)")
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::MismatchedInputs { x_len, y_len } => {
                write!(
                    f,
                    "Length mismatch: inputs have {x_len} rows, outputs have {y_len}"
                )
            }
            Self::MismatchedCoefficients { features, weights } => {
                write!(
                    f,
                    "Coefficient mismatch: feature rows have {features} columns, got {weights} weights"
                )
            }
            Self::MismatchedPredictions { predicted, actual } => {
                write!(
                    f,
                    "Length mismatch: {predicted} predicted values, {actual} actual values"
                )
            }
            Self::SolverFailure(msg) => write!(f, "Least-squares solve failed: {msg}"),
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

impl Error for VolterraError {}
