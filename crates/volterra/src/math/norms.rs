//! Energy and distance sums over sample sequences.
//!
//! These are the accumulation kernels behind the NMSE score and the fit
//! diagnostics. Every sum works on squared moduli, so real and complex
//! samples share the same code.

// External dependencies
use num_traits::Zero;

// Internal dependencies
use crate::primitives::sample::Sample;

/// Sum of `|x_i|^2`.
#[inline]
pub fn energy<T: Sample>(values: &[T]) -> T::RealField {
    values
        .iter()
        .fold(T::RealField::zero(), |acc, v| acc + v.modulus_squared())
}

/// Sum of `|a_i - b_i|^2` over the common prefix of both slices.
#[inline]
pub fn squared_distance<T: Sample>(a: &[T], b: &[T]) -> T::RealField {
    a.iter()
        .zip(b.iter())
        .fold(T::RealField::zero(), |acc, (&x, &y)| {
            acc + (x - y).modulus_squared()
        })
}

/// Sum of `|a_i - b_i|` over the common prefix of both slices.
#[inline]
pub fn absolute_distance<T: Sample>(a: &[T], b: &[T]) -> T::RealField {
    a.iter()
        .zip(b.iter())
        .fold(T::RealField::zero(), |acc, (&x, &y)| acc + (x - y).modulus())
}

/// Largest `|a_i - b_i|`, or zero for empty input.
#[inline]
pub fn max_abs_distance<T: Sample>(a: &[T], b: &[T]) -> T::RealField {
    a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| (x - y).modulus())
        .fold(T::RealField::zero(), |acc, d| if d > acc { d } else { acc })
}
