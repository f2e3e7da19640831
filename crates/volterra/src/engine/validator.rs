//! Input validation for Volterra configuration and data.
//!
//! ## Purpose
//!
//! This module provides validation functions for model parameters and input
//! sequences. It checks requirements such as paired lengths, finite values,
//! and parameter bounds before any matrix is built.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not transform or filter input data.
//! * This module does not provide automatic correction of invalid inputs.

// Internal dependencies
use crate::primitives::errors::VolterraError;
use crate::primitives::sample::Sample;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for Volterra configuration and input data.
///
/// All methods return `Result<(), VolterraError>` and fail fast upon
/// identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate paired training sequences.
    pub fn validate_inputs<T: Sample>(x: &[T], y: &[T]) -> Result<(), VolterraError> {
        // Check 1: Non-empty arrays
        if x.is_empty() || y.is_empty() {
            return Err(VolterraError::EmptyInput);
        }

        // Check 2: Matching lengths
        if x.len() != y.len() {
            return Err(VolterraError::MismatchedInputs {
                x_len: x.len(),
                y_len: y.len(),
            });
        }

        // Check 3: All values finite
        Self::validate_finite(x, "x")?;
        Self::validate_finite(y, "y")
    }

    /// Validate that every sample is finite.
    pub fn validate_finite<T: Sample>(values: &[T], name: &str) -> Result<(), VolterraError> {
        match values.iter().position(|v| !v.is_finite()) {
            Some(i) => Err(VolterraError::InvalidNumericValue(format!(
                "{}[{}]={}",
                name, i, values[i]
            ))),
            None => Ok(()),
        }
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the polynomial order.
    pub fn validate_order(order: usize) -> Result<(), VolterraError> {
        if order == 0 {
            return Err(VolterraError::InvalidOrder(order));
        }
        Ok(())
    }

    /// Validate a relative singular-value cutoff.
    pub fn validate_rcond(rcond: f64) -> Result<(), VolterraError> {
        if !rcond.is_finite() || rcond < 0.0 {
            return Err(VolterraError::InvalidTolerance(rcond));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), VolterraError> {
        if let Some(param) = duplicate_param {
            return Err(VolterraError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
