//! Feature matrix storage.
//!
//! ## Purpose
//!
//! This module defines [`FeatureMatrix`], the row-major container produced by
//! the feature expander and consumed by the estimator and the predictor.
//!
//! ## Design notes
//!
//! * **Contiguous**: One `Vec<T>` holds every row back to back.
//! * **Self-describing**: The matrix remembers the polynomial order and memory
//!   depth it was built with, so columns can be addressed by `(degree, lag)`.
//!
//! ## Key concepts
//!
//! * **Column order**: Degree-major, lag-minor. Column `(p - 1) * (M + 1) + m`
//!   holds the degree-`p` term of the sample `m` steps in the past.
//!
//! ## Invariants
//!
//! * `nrows()` equals the number of input samples.
//! * `ncols()` equals `order * (memory_depth + 1)` and is never zero.
//! * `as_slice().len() == nrows() * ncols()`.

// External dependencies
use core::slice::ChunksExact;
use nalgebra::{ComplexField, DMatrix};

// Internal dependencies
use crate::primitives::errors::VolterraError;

/// Row-major matrix of Volterra features, one row per input sample.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureMatrix<T> {
    data: Vec<T>,
    nrows: usize,
    order: usize,
    memory_depth: usize,
}

impl<T> FeatureMatrix<T> {
    /// Number of feature columns for a given order and memory depth.
    ///
    /// Returns `InvalidInput` when the count does not fit in `usize`.
    pub fn column_count(order: usize, memory_depth: usize) -> Result<usize, VolterraError> {
        memory_depth
            .checked_add(1)
            .and_then(|taps| taps.checked_mul(order))
            .ok_or_else(|| {
                VolterraError::InvalidInput(format!(
                    "feature width overflows for order {order} and memory depth {memory_depth}"
                ))
            })
    }

    /// Assemble a matrix from row-major data.
    pub(crate) fn from_parts(
        data: Vec<T>,
        nrows: usize,
        order: usize,
        memory_depth: usize,
    ) -> Self {
        debug_assert_eq!(data.len(), nrows * order * (memory_depth + 1));
        Self {
            data,
            nrows,
            order,
            memory_depth,
        }
    }

    /// Number of rows (input samples).
    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of feature columns.
    #[inline]
    pub fn ncols(&self) -> usize {
        self.order * (self.memory_depth + 1)
    }

    /// Whether the matrix has no rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nrows == 0
    }

    /// Polynomial order `P` used to build the matrix.
    #[inline]
    pub fn order(&self) -> usize {
        self.order
    }

    /// Memory depth `M` used to build the matrix.
    #[inline]
    pub fn memory_depth(&self) -> usize {
        self.memory_depth
    }

    /// Column holding the degree-`degree` term at lag `lag`.
    ///
    /// `degree` is 1-based, `lag` is 0-based.
    #[inline]
    pub fn column_index(&self, degree: usize, lag: usize) -> usize {
        debug_assert!(degree >= 1 && degree <= self.order && lag <= self.memory_depth);
        (degree - 1) * (self.memory_depth + 1) + lag
    }

    /// Feature row for sample `i`.
    #[inline]
    pub fn row(&self, i: usize) -> &[T] {
        let width = self.ncols();
        &self.data[i * width..(i + 1) * width]
    }

    /// Iterate over feature rows in time order.
    #[inline]
    pub fn rows(&self) -> ChunksExact<'_, T> {
        self.data.chunks_exact(self.ncols())
    }

    /// Raw row-major storage.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T: Copy> FeatureMatrix<T> {
    /// Feature of sample `i` for the given degree (1-based) and lag.
    #[inline]
    pub fn get(&self, i: usize, degree: usize, lag: usize) -> T {
        self.row(i)[self.column_index(degree, lag)]
    }
}

impl<T: ComplexField + Copy> FeatureMatrix<T> {
    /// Copy the features into a dense matrix with a trailing column of ones.
    pub fn to_augmented(&self) -> DMatrix<T> {
        let width = self.ncols();
        DMatrix::from_fn(self.nrows, width + 1, |i, j| {
            if j < width {
                self.data[i * width + j]
            } else {
                T::one()
            }
        })
    }
}
