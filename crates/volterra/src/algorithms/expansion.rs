//! Volterra feature expansion.
//!
//! ## Purpose
//!
//! This module turns a raw sample sequence into the memory-polynomial feature
//! matrix: for every sample index `i`, every degree `p` in `1..=P` and every
//! lag `m` in `0..=M`, one feature `basis(x[i - m], p)`.
//!
//! ## Design notes
//!
//! * **Zero history**: Lags reaching before the first sample contribute 0.
//! * **Row-local**: Each row depends only on the input, so rows can be filled
//!   independently (and concurrently with the `parallel` feature).
//! * **Incremental powers**: Degrees of one lagged sample are produced by
//!   repeated multiplication with the basis step factor.
//!
//! ## Invariants
//!
//! * Output has exactly `samples.len()` rows and `P * (M + 1)` columns.
//! * Column order is degree-major, lag-minor.
//! * `M >= samples.len()` is valid; the affected lags are all zero.

// External dependencies
#[cfg(feature = "parallel")]
use rayon::prelude::*;

// Internal dependencies
use crate::math::basis::Basis;
use crate::primitives::errors::VolterraError;
use crate::primitives::matrix::FeatureMatrix;
use crate::primitives::sample::Sample;

// ============================================================================
// Expansion
// ============================================================================

/// Expand `samples` into a Volterra feature matrix.
///
/// # Errors
///
/// * `InvalidOrder` when `order == 0`.
/// * `InvalidInput` when the matrix size is not representable.
pub fn expand<T: Sample>(
    samples: &[T],
    order: usize,
    memory_depth: usize,
    basis: Basis,
) -> Result<FeatureMatrix<T>, VolterraError> {
    let (width, mut data) = allocate(samples.len(), order, memory_depth)?;

    for (i, row) in data.chunks_exact_mut(width).enumerate() {
        fill_row(samples, i, row, order, memory_depth, basis);
    }

    Ok(FeatureMatrix::from_parts(
        data,
        samples.len(),
        order,
        memory_depth,
    ))
}

/// Expand `samples` with rows filled in parallel.
///
/// Produces exactly the same matrix as [`expand`].
#[cfg(feature = "parallel")]
pub fn expand_parallel<T: Sample>(
    samples: &[T],
    order: usize,
    memory_depth: usize,
    basis: Basis,
) -> Result<FeatureMatrix<T>, VolterraError> {
    let (width, mut data) = allocate(samples.len(), order, memory_depth)?;

    data.par_chunks_mut(width)
        .enumerate()
        .for_each(|(i, row)| fill_row(samples, i, row, order, memory_depth, basis));

    Ok(FeatureMatrix::from_parts(
        data,
        samples.len(),
        order,
        memory_depth,
    ))
}

// ============================================================================
// Helpers
// ============================================================================

// Validate dimensions and allocate a zeroed row-major buffer.
fn allocate<T: Sample>(
    n: usize,
    order: usize,
    memory_depth: usize,
) -> Result<(usize, Vec<T>), VolterraError> {
    if order == 0 {
        return Err(VolterraError::InvalidOrder(order));
    }
    let width = FeatureMatrix::<T>::column_count(order, memory_depth)?;
    let too_large = || {
        VolterraError::InvalidInput(format!(
            "feature matrix of {n} rows x {width} columns is too large"
        ))
    };
    let total = n.checked_mul(width).ok_or_else(too_large)?;
    let bytes = total
        .checked_mul(core::mem::size_of::<T>())
        .ok_or_else(too_large)?;
    if bytes > isize::MAX as usize {
        return Err(too_large());
    }
    Ok((width, vec![T::zero(); total]))
}

// Fill one feature row. The row must arrive zeroed.
#[inline]
fn fill_row<T: Sample>(
    samples: &[T],
    i: usize,
    row: &mut [T],
    order: usize,
    memory_depth: usize,
    basis: Basis,
) {
    let taps = memory_depth + 1;
    // Lags beyond `i` stay zero.
    let max_lag = memory_depth.min(i);

    for lag in 0..=max_lag {
        let x = samples[i - lag];
        let factor = basis.step(x);
        let mut term = x;
        for degree in 0..order {
            row[degree * taps + lag] = term;
            term *= factor;
        }
    }
}
