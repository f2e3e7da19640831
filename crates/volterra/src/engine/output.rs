//! Output types and text rendering for Volterra operations.
//!
//! ## Purpose
//!
//! This module defines the result structures returned by the high-level API
//! ([`VolterraFit`] for training, [`ValidationReport`] for held-out scoring)
//! and the human-readable coefficient formatter.
//!
//! ## Design notes
//!
//! * **Optional outputs**: Fitted values and training diagnostics are only
//!   populated when requested.
//! * **Ergonomics**: Implements `Display` for human-readable output.
//! * **Fixed precision**: Coefficients are always rendered with 6 decimals.
//!
//! ## Invariants
//!
//! * `coefficients.weights().len() == order * (memory_depth + 1)`.
//! * Populated per-sample vectors have the same length as the input data.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores and renders results.
//! * This module does not provide serialization/deserialization logic.

// External dependencies
use core::fmt::{Display, Formatter, Result, Write};

// Internal dependencies
use crate::evaluation::amplitude::AmplitudeComparison;
use crate::evaluation::diagnostics::Diagnostics;
use crate::math::basis::Basis;
use crate::primitives::coefficients::Coefficients;
use crate::primitives::sample::Sample;

// ============================================================================
// Coefficient Formatting
// ============================================================================

/// Render coefficients as `c1=<value>, c2=<value>, ...` with 6 decimals.
pub fn format_coefficients<T: Display>(coefficients: &[T]) -> String {
    let mut out = String::new();
    for (i, c) in coefficients.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        // Writing into a String cannot fail.
        let _ = write!(out, "c{}={:.6}", i + 1, c);
    }
    out
}

impl<T: Display + Copy> Display for Coefficients<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(&format_coefficients(&self.to_vec()))
    }
}

// ============================================================================
// Result Structures
// ============================================================================

/// Fitted Volterra model.
#[derive(Debug, Clone, PartialEq)]
pub struct VolterraFit<T: Sample> {
    /// Estimated weights and bias.
    pub coefficients: Coefficients<T>,

    /// Polynomial order `P`.
    pub order: usize,

    /// Memory depth `M`.
    pub memory_depth: usize,

    /// Basis used to build the features.
    pub basis: Basis,

    /// Model output on the training inputs.
    pub fitted: Option<Vec<T>>,

    /// Training-set diagnostics.
    pub diagnostics: Option<Diagnostics<T::RealField>>,

    /// Relative singular-value cutoff used by the solve (`None` = automatic).
    pub rcond: Option<f64>,

    /// Whether feature expansion runs in parallel.
    pub parallel: bool,
}

impl<T: Sample> VolterraFit<T> {
    /// Weight of the degree-`degree` (1-based) term at lag `lag`.
    pub fn weight(&self, degree: usize, lag: usize) -> Option<T> {
        if degree > self.order {
            return None;
        }
        self.coefficients.weight(degree, lag, self.memory_depth)
    }

    /// Constant term of the model.
    pub fn bias(&self) -> T {
        self.coefficients.bias()
    }
}

/// Result of scoring a fitted model on held-out data.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationReport<T: Sample> {
    /// Model output for each validation input.
    pub predictions: Vec<T>,

    /// NMSE of the predictions in dB.
    pub nmse_db: T::RealField,

    /// Full diagnostics of the predictions.
    pub diagnostics: Diagnostics<T::RealField>,

    /// Magnitude pairs for an AM/AM plot.
    pub amplitude: AmplitudeComparison<T::RealField>,
}

// ============================================================================
// Display Implementations
// ============================================================================

impl<T: Sample> Display for VolterraFit<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Order (P):     {}", self.order)?;
        writeln!(f, "  Memory (M):    {}", self.memory_depth)?;
        writeln!(f, "  Basis:         {}", self.basis.name())?;
        writeln!(f, "  Coefficients:  {}", self.coefficients.len())?;
        writeln!(f)?;

        if let Some(diag) = &self.diagnostics {
            writeln!(f, "{}", diag)?;
            writeln!(f)?;
        }

        writeln!(f, "Coefficients:")?;
        writeln!(f, "{:>8} {:>6}  {}", "Degree", "Lag", "Value")?;
        writeln!(f, "{:-<40}", "")?;

        let taps = self.memory_depth + 1;
        for (j, w) in self.coefficients.weights().iter().enumerate() {
            writeln!(f, "{:>8} {:>6}  {:.6}", j / taps + 1, j % taps, w)?;
        }
        writeln!(f, "{:>8} {:>6}  {:.6}", "bias", "-", self.coefficients.bias())
    }
}

impl<T: Sample> Display for ValidationReport<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Validation:")?;
        writeln!(f, "  Samples:   {}", self.predictions.len())?;
        writeln!(f, "  NMSE (dB): {:.4}", self.nmse_db)?;
        writeln!(f)?;
        write!(f, "{}", self.diagnostics)
    }
}
