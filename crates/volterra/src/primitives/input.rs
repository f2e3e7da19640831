//! Input abstractions for sample sequences.
//!
//! ## Purpose
//!
//! This module provides a unified abstraction for "an ordered sequence of
//! scalars", allowing the high-level API to accept slices, vectors, column
//! vectors of single-element rows, and `ndarray` arrays through one interface.
//!
//! ## Design notes
//!
//! * **Zero-copy**: Every implementation hands out a view of the caller's buffer.
//! * **Flattening**: `N x 1` containers (nested one-element rows, single-column
//!   2-D arrays) are viewed as length-`N` sequences.
//! * **Fail-fast validation**: Non-contiguous arrays and multi-column 2-D arrays
//!   are rejected instead of being copied or reshaped silently.
//!
//! ## Invariants
//!
//! * Returned slices cover every element of the input container, in order.
//!
//! ## Non-goals
//!
//! * This module does not check values for finiteness (see the validator).
//! * This module does not reshape multi-output data.

// External dependencies
use ndarray::{ArrayBase, Data, Ix1, Ix2};

// Internal dependencies
use crate::primitives::errors::VolterraError;

/// Trait for containers that can be viewed as an ordered sequence of samples.
pub trait SampleInput<T> {
    /// View the input as a contiguous slice of samples.
    fn as_sample_slice(&self) -> Result<&[T], VolterraError>;
}

impl<T> SampleInput<T> for [T] {
    fn as_sample_slice(&self) -> Result<&[T], VolterraError> {
        Ok(self)
    }
}

impl<T> SampleInput<T> for Vec<T> {
    fn as_sample_slice(&self) -> Result<&[T], VolterraError> {
        Ok(self.as_slice())
    }
}

impl<T, const N: usize> SampleInput<T> for [T; N] {
    fn as_sample_slice(&self) -> Result<&[T], VolterraError> {
        Ok(self.as_slice())
    }
}

impl<T> SampleInput<T> for [[T; 1]] {
    fn as_sample_slice(&self) -> Result<&[T], VolterraError> {
        Ok(self.as_flattened())
    }
}

impl<T> SampleInput<T> for Vec<[T; 1]> {
    fn as_sample_slice(&self) -> Result<&[T], VolterraError> {
        Ok(self.as_flattened())
    }
}

impl<T, S> SampleInput<T> for ArrayBase<S, Ix1>
where
    S: Data<Elem = T>,
{
    fn as_sample_slice(&self) -> Result<&[T], VolterraError> {
        self.as_slice().ok_or_else(|| {
            VolterraError::InvalidInput("ndarray input must be contiguous in memory".to_string())
        })
    }
}

impl<T, S> SampleInput<T> for ArrayBase<S, Ix2>
where
    S: Data<Elem = T>,
{
    fn as_sample_slice(&self) -> Result<&[T], VolterraError> {
        if self.ncols() != 1 {
            return Err(VolterraError::InvalidInput(format!(
                "2-D input must have exactly one column, got {}",
                self.ncols()
            )));
        }
        self.as_slice().ok_or_else(|| {
            VolterraError::InvalidInput("ndarray input must be contiguous in memory".to_string())
        })
    }
}
