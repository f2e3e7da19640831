#![cfg(feature = "dev")]
//! Tests for the NMSE error scorer.
//!
//! ## Test Organization
//!
//! 1. **Known Values** - Hand-computed scores
//! 2. **Properties** - Perfect prediction, asymmetry, scale invariance
//! 3. **Degenerate Cases** - Zero reference, mismatched lengths

use approx::assert_relative_eq;
use num_complex::Complex64;

use volterra::internals::evaluation::nmse::{DEFAULT_NMSE_EPSILON, nmse, nmse_with_epsilon};
use volterra::internals::primitives::errors::VolterraError;

// ============================================================================
// Known Value Tests
// ============================================================================

/// Test an error with one tenth of the signal energy scores -10 dB.
#[test]
fn test_nmse_minus_ten_db() {
    let actual = vec![1.0, -1.0, 1.0, -1.0];
    // Error energy 0.4, signal energy 4.
    let error = 0.1_f64.sqrt();
    let predicted: Vec<f64> = actual.iter().map(|v| v + error).collect();

    let score = nmse_with_epsilon(&predicted, &actual, 0.0).unwrap();
    assert_relative_eq!(score, -10.0, epsilon = 1e-9);
}

/// Test predicting zeros scores 0 dB.
#[test]
fn test_nmse_zero_prediction() {
    let actual = vec![3.0, -4.0, 1.0];
    let predicted = vec![0.0; 3];

    let score: f64 = nmse(&predicted, &actual).unwrap();
    assert_relative_eq!(score, 0.0, epsilon = 1e-9);
}

/// Test complex samples use squared moduli.
#[test]
fn test_nmse_complex() {
    let actual = vec![Complex64::new(3.0, 4.0)];
    let predicted = vec![Complex64::new(3.0, 4.5)];

    // |0.5i|^2 / |3+4i|^2 = 0.25 / 25 = 0.01 -> -20 dB
    let score: f64 = nmse(&predicted, &actual).unwrap();
    assert_relative_eq!(score, -20.0, epsilon = 1e-9);
}

// ============================================================================
// Property Tests
// ============================================================================

/// Test a perfect prediction of a non-zero signal scores negative infinity.
#[test]
fn test_nmse_perfect_prediction() {
    let actual = vec![0.5, 1.5, -2.0];
    let score: f64 = nmse(&actual, &actual).unwrap();

    assert!(score.is_infinite() && score < 0.0);
}

/// Test that the score depends on which argument is the reference.
#[test]
fn test_nmse_asymmetric() {
    let a = vec![1.0, 2.0, 3.0];
    let b = vec![2.0, 4.0, 6.0];

    let ab = nmse(&a, &b).unwrap();
    let ba = nmse(&b, &a).unwrap();

    // err energy 14; ref energy 56 vs 14.
    assert_relative_eq!(ab, 10.0 * (0.25_f64).log10(), epsilon = 1e-9);
    assert_relative_eq!(ba, 0.0, epsilon = 1e-9);
    assert!(ab != ba);
}

/// Test that scaling both sequences leaves the score unchanged.
#[test]
fn test_nmse_scale_invariant() {
    let actual = vec![1.0, -0.5, 0.25, 2.0];
    let predicted = vec![1.1, -0.4, 0.2, 1.9];

    let base = nmse(&predicted, &actual).unwrap();
    let scaled_actual: Vec<f64> = actual.iter().map(|v| v * 100.0).collect();
    let scaled_predicted: Vec<f64> = predicted.iter().map(|v| v * 100.0).collect();
    let scaled = nmse(&scaled_predicted, &scaled_actual).unwrap();

    assert_relative_eq!(base, scaled, epsilon = 1e-6);
}

// ============================================================================
// Degenerate Case Tests
// ============================================================================

/// Test an all-zero reference yields a large finite positive score.
#[test]
fn test_nmse_zero_reference() {
    let actual = vec![0.0; 4];
    let predicted = vec![1.0; 4];

    let score: f64 = nmse(&predicted, &actual).unwrap();

    assert!(score.is_finite());
    assert!(score > 100.0);
    assert_relative_eq!(
        score,
        10.0 * (4.0 / DEFAULT_NMSE_EPSILON).log10(),
        epsilon = 1e-9
    );
}

/// Test empty sequences.
#[test]
fn test_nmse_empty() {
    let empty: Vec<f64> = vec![];
    let score = nmse(&empty, &empty).unwrap();

    // 0 / eps
    assert!(score.is_infinite() && score < 0.0);
}

/// Test that mismatched lengths are rejected.
#[test]
fn test_nmse_mismatched() {
    let res = nmse(&[1.0, 2.0], &[1.0]);

    assert!(matches!(
        res,
        Err(VolterraError::MismatchedPredictions {
            predicted: 2,
            actual: 1
        })
    ));
}
