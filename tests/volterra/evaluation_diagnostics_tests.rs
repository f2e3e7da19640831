#![cfg(feature = "dev")]
//! Tests for diagnostics and amplitude comparison.
//!
//! ## Test Organization
//!
//! 1. **Diagnostics** - RMSE, MAE, max error, NMSE
//! 2. **Amplitude Comparison** - AM/AM magnitude pairs and reference line
//! 3. **Edge Cases** - Empty and mismatched inputs

use approx::assert_relative_eq;
use num_complex::Complex64;

use volterra::internals::evaluation::amplitude::amplitude_comparison;
use volterra::internals::evaluation::diagnostics::Diagnostics;
use volterra::internals::evaluation::nmse::nmse;
use volterra::internals::primitives::errors::VolterraError;

// ============================================================================
// Diagnostics Tests
// ============================================================================

/// Test hand-computed metrics on real data.
#[test]
fn test_diagnostics_real() {
    let actual = vec![1.0, 2.0, 3.0, 4.0];
    let predicted = vec![1.0, 2.5, 2.0, 4.5];

    let d = Diagnostics::compute(&predicted, &actual).unwrap();

    // errors: 0, 0.5, 1.0, 0.5
    assert_eq!(d.n, 4);
    assert_relative_eq!(d.rmse, (1.5_f64 / 4.0).sqrt(), epsilon = 1e-12);
    assert_relative_eq!(d.mae, 0.5, epsilon = 1e-12);
    assert_relative_eq!(d.max_abs_error, 1.0, epsilon = 1e-12);
    assert_relative_eq!(d.nmse_db, nmse(&predicted, &actual).unwrap(), epsilon = 1e-12);
}

/// Test metrics use error moduli for complex samples.
#[test]
fn test_diagnostics_complex() {
    let actual = vec![Complex64::new(1.0, 0.0), Complex64::new(0.0, 1.0)];
    let predicted = vec![Complex64::new(1.0, 0.0), Complex64::new(0.3, 1.4)];

    let d = Diagnostics::compute(&predicted, &actual).unwrap();

    // |0.3 + 0.4i| = 0.5
    assert_relative_eq!(d.max_abs_error, 0.5, epsilon = 1e-12);
    assert_relative_eq!(d.mae, 0.25, epsilon = 1e-12);
    assert_relative_eq!(d.rmse, (0.25_f64 / 2.0).sqrt(), epsilon = 1e-12);
}

/// Test a perfect prediction.
#[test]
fn test_diagnostics_perfect() {
    let actual = vec![0.1, -0.2, 0.3];
    let d: Diagnostics<f64> = Diagnostics::compute(&actual, &actual).unwrap();

    assert_eq!(d.rmse, 0.0);
    assert_eq!(d.mae, 0.0);
    assert_eq!(d.max_abs_error, 0.0);
    assert!(d.nmse_db.is_infinite());
}

/// Test the text rendering.
#[test]
fn test_diagnostics_display() {
    let actual = vec![1.0, 2.0];
    let predicted = vec![1.0, 1.0];
    let d = Diagnostics::compute(&predicted, &actual).unwrap();

    let text = d.to_string();
    assert!(text.starts_with("Volterra Diagnostics:"));
    assert!(text.contains("Samples:      2"));
    assert!(text.contains("MAE:          0.500000"));
    assert!(text.contains("NMSE (dB):    -6.9897"));
}

// ============================================================================
// Amplitude Comparison Tests
// ============================================================================

/// Test magnitudes and the reference line span.
#[test]
fn test_amplitude_comparison_complex() {
    let actual = vec![Complex64::new(3.0, 4.0), Complex64::new(0.0, -1.0)];
    let predicted = vec![Complex64::new(0.0, 6.0), Complex64::new(0.5, 0.0)];

    let cmp = amplitude_comparison(&predicted, &actual).unwrap();

    assert_eq!(cmp.len(), 2);
    assert_relative_eq!(cmp.actual[0], 5.0, epsilon = 1e-12);
    assert_relative_eq!(cmp.actual[1], 1.0, epsilon = 1e-12);
    assert_relative_eq!(cmp.predicted[0], 6.0, epsilon = 1e-12);
    assert_relative_eq!(cmp.predicted[1], 0.5, epsilon = 1e-12);

    let (lo, hi) = cmp.reference.unwrap();
    assert_relative_eq!(lo, 0.5, epsilon = 1e-12);
    assert_relative_eq!(hi, 6.0, epsilon = 1e-12);
}

/// Test pairs are ordered as (actual, predicted).
#[test]
fn test_amplitude_pairs() {
    let actual = vec![-2.0, 1.0];
    let predicted = vec![1.5, -0.5];

    let cmp = amplitude_comparison(&predicted, &actual).unwrap();
    let pairs: Vec<(f64, f64)> = cmp.pairs().map(|(a, p)| (*a, *p)).collect();

    assert_eq!(pairs, vec![(2.0, 1.5), (1.0, 0.5)]);
}

// ============================================================================
// Edge Case Tests
// ============================================================================

/// Test empty input gives no points and no reference line.
#[test]
fn test_edge_empty() {
    let empty: Vec<f64> = vec![];

    let cmp = amplitude_comparison(&empty, &empty).unwrap();
    assert!(cmp.is_empty());
    assert!(cmp.reference.is_none());

    let d = Diagnostics::compute(&empty, &empty).unwrap();
    assert_eq!(d.n, 0);
    assert_eq!(d.rmse, 0.0);
}

/// Test mismatched lengths are rejected.
#[test]
fn test_edge_mismatched() {
    let a = vec![1.0, 2.0];
    let b = vec![1.0];

    assert!(matches!(
        amplitude_comparison(&a, &b),
        Err(VolterraError::MismatchedPredictions { .. })
    ));
    assert!(matches!(
        Diagnostics::compute(&a, &b),
        Err(VolterraError::MismatchedPredictions { .. })
    ));
}
