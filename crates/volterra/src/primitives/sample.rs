//! Scalar sample abstraction.
//!
//! ## Purpose
//!
//! This module defines the [`Sample`] trait, the single numeric element type
//! shared by every stage of the pipeline. Real (`f32`, `f64`) and complex
//! (`Complex<f32>`, `Complex<f64>`) baseband samples are supported through the
//! same generic code paths.
//!
//! ## Design notes
//!
//! * **nalgebra-backed**: `Sample` extends `ComplexField`, so the same type feeds
//!   the SVD used by the estimator without conversion.
//! * **Copy**: Every supported sample is a plain value type.
//!
//! ## Invariants
//!
//! * `modulus()` of a sample is a non-negative value of its real field.
//! * `epsilon()` is the machine epsilon of the underlying real precision.

// External dependencies
use nalgebra::ComplexField;
use num_complex::Complex;

/// Scalar value of a time series: real or complex, single or double precision.
pub trait Sample: ComplexField + Copy {
    /// Machine epsilon of the underlying real type.
    fn epsilon() -> Self::RealField;
}

impl Sample for f32 {
    #[inline]
    fn epsilon() -> f32 {
        f32::EPSILON
    }
}

impl Sample for f64 {
    #[inline]
    fn epsilon() -> f64 {
        f64::EPSILON
    }
}

impl Sample for Complex<f32> {
    #[inline]
    fn epsilon() -> f32 {
        f32::EPSILON
    }
}

impl Sample for Complex<f64> {
    #[inline]
    fn epsilon() -> f64 {
        f64::EPSILON
    }
}
