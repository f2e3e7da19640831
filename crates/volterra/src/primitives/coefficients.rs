//! Coefficient vector of a fitted Volterra model.
//!
//! ## Purpose
//!
//! This module defines [`Coefficients`], the immutable result of a
//! least-squares fit: one weight per feature column plus a bias term.
//!
//! ## Design notes
//!
//! * **Explicit bias**: The bias is a named field rather than an implicit last
//!   element, so the predictor can never misalign it with the feature columns.
//! * **Flat view**: `to_vec` / `from_vec` convert to and from the flat layout
//!   (weights first, bias last) used by external tooling.
//!
//! ## Invariants
//!
//! * `len() == weights().len() + 1`.

// Internal dependencies
use crate::primitives::errors::VolterraError;

/// Weights for each feature column plus a trailing bias.
#[derive(Debug, Clone, PartialEq)]
pub struct Coefficients<T> {
    weights: Vec<T>,
    bias: T,
}

impl<T: Copy> Coefficients<T> {
    /// Build from explicit weights and bias.
    pub fn new(weights: Vec<T>, bias: T) -> Self {
        Self { weights, bias }
    }

    /// Build from the flat layout, taking the last element as the bias.
    pub fn from_vec(mut flat: Vec<T>) -> Result<Self, VolterraError> {
        let bias = flat.pop().ok_or_else(|| {
            VolterraError::InvalidInput("coefficient vector must contain a bias".to_string())
        })?;
        Ok(Self {
            weights: flat,
            bias,
        })
    }

    /// Flat layout: weights followed by the bias.
    pub fn to_vec(&self) -> Vec<T> {
        let mut flat = Vec::with_capacity(self.len());
        flat.extend_from_slice(&self.weights);
        flat.push(self.bias);
        flat
    }

    /// Feature weights, in feature-column order.
    #[inline]
    pub fn weights(&self) -> &[T] {
        &self.weights
    }

    /// Constant term.
    #[inline]
    pub fn bias(&self) -> T {
        self.bias
    }

    /// Total number of coefficients, bias included.
    #[allow(clippy::len_without_is_empty)]
    #[inline]
    pub fn len(&self) -> usize {
        self.weights.len() + 1
    }

    /// Weight of the degree-`degree` (1-based) term at lag `lag`.
    ///
    /// Returns `None` when the pair falls outside the stored weights.
    pub fn weight(&self, degree: usize, lag: usize, memory_depth: usize) -> Option<T> {
        if degree == 0 || lag > memory_depth {
            return None;
        }
        let idx = (degree - 1)
            .checked_mul(memory_depth + 1)?
            .checked_add(lag)?;
        self.weights.get(idx).copied()
    }
}
