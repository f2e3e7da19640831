//! Nonlinear basis functions for Volterra feature expansion.
//!
//! ## Purpose
//!
//! This module defines how a single lagged sample is raised to each
//! polynomial degree. Two families are provided:
//!
//! | Basis      | Degree-`p` term          | Typical use                         |
//! |------------|--------------------------|-------------------------------------|
//! | `Power`    | `x^p`                    | real-valued static/memory polynomials |
//! | `Envelope` | `|x|^(2p-2) * x`         | complex baseband (AM/AM, AM/PM)     |
//!
//! ## Design notes
//!
//! * **Incremental**: Successive degrees are obtained by multiplying by a fixed
//!   per-sample factor (`x` or `|x|^2`), so no integer exponent is ever formed.
//! * **Type-agnostic**: Both bases apply to real and complex samples.
//!
//! ## Invariants
//!
//! * Degree 1 is the identity for both bases.
//! * For `Envelope`, `|term(p)| == |x|^(2p-1)`.

// Internal dependencies
use crate::primitives::sample::Sample;

/// Nonlinearity applied to each lagged sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Basis {
    /// Plain powers: `x^p`.
    #[default]
    Power,

    /// Envelope-weighted samples: `|x|^(2p-2) * x`.
    Envelope,
}

impl Basis {
    /// Factor that carries the degree-`p` term to degree `p + 1`.
    #[inline]
    pub fn step<T: Sample>(&self, x: T) -> T {
        match self {
            Self::Power => x,
            Self::Envelope => T::from_real(x.modulus_squared()),
        }
    }

    /// Degree-`degree` term of `x` (`degree` is 1-based).
    ///
    /// Degree 0 is treated as degree 1.
    pub fn evaluate<T: Sample>(&self, x: T, degree: usize) -> T {
        let factor = self.step(x);
        let mut term = x;
        for _ in 1..degree {
            term *= factor;
        }
        term
    }

    /// Human-readable name of the basis.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Power => "Power",
            Self::Envelope => "Envelope",
        }
    }
}
