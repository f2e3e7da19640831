#![cfg(feature = "dev")]
//! Tests for Volterra feature expansion.
//!
//! These tests verify the feature matrix construction used for:
//! - Memory-polynomial model training
//! - Prediction on held-out data
//!
//! ## Test Organization
//!
//! 1. **Shape** - Row and column counts for various P, M, N
//! 2. **Zero Padding** - Lags before the first sample
//! 3. **Power Basis** - Real-valued powers
//! 4. **Envelope Basis** - Complex envelope terms
//! 5. **Validation** - Invalid order
//! 6. **Parallel** - Equivalence of parallel and serial expansion

use approx::assert_relative_eq;
use num_complex::Complex64;

use volterra::internals::algorithms::expansion::expand;
use volterra::internals::math::basis::Basis;
use volterra::internals::primitives::errors::VolterraError;

// ============================================================================
// Helper Functions
// ============================================================================

fn ramp(n: usize) -> Vec<f64> {
    (1..=n).map(|i| i as f64).collect()
}

fn complex_tone(n: usize) -> Vec<Complex64> {
    (0..n)
        .map(|k| Complex64::from_polar(0.2 + 0.1 * k as f64, 0.7 * k as f64))
        .collect()
}

// ============================================================================
// Shape Tests
// ============================================================================

/// Test row and column counts across a grid of orders and memory depths.
#[test]
fn test_expand_shape() {
    let samples = ramp(7);
    for order in 1..=4 {
        for memory_depth in 0..=3 {
            let x = expand(&samples, order, memory_depth, Basis::Power).unwrap();
            assert_eq!(x.nrows(), samples.len());
            assert_eq!(x.ncols(), order * (memory_depth + 1));
            assert_eq!(x.order(), order);
            assert_eq!(x.memory_depth(), memory_depth);
            assert_eq!(x.as_slice().len(), x.nrows() * x.ncols());
        }
    }
}

/// Test expansion of an empty sequence.
///
/// Verifies that no rows are produced but the width is still defined.
#[test]
fn test_expand_empty_samples() {
    let samples: Vec<f64> = vec![];
    let x = expand(&samples, 2, 3, Basis::Power).unwrap();

    assert_eq!(x.nrows(), 0);
    assert_eq!(x.ncols(), 8);
    assert!(x.is_empty());
    assert_eq!(x.rows().count(), 0);
}

// ============================================================================
// Zero Padding Tests
// ============================================================================

/// Test that every lag reaching before the first sample is exactly zero.
#[test]
fn test_expand_zero_padding() {
    let samples = ramp(6);
    let (order, memory_depth) = (3, 4);
    let x = expand(&samples, order, memory_depth, Basis::Power).unwrap();

    for i in 0..samples.len() {
        for degree in 1..=order {
            for lag in 0..=memory_depth {
                let value = x.get(i, degree, lag);
                if lag > i {
                    assert_eq!(value, 0.0, "row {i}, degree {degree}, lag {lag}");
                } else {
                    assert_ne!(value, 0.0, "row {i}, degree {degree}, lag {lag}");
                }
            }
        }
    }
}

/// Test memory depth larger than the sequence.
///
/// Verifies that expansion succeeds and only available history is non-zero.
#[test]
fn test_expand_memory_longer_than_input() {
    let samples = vec![2.0, 3.0];
    let x = expand(&samples, 1, 5, Basis::Power).unwrap();

    assert_eq!(x.nrows(), 2);
    assert_eq!(x.ncols(), 6);
    assert_eq!(x.row(0), &[2.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
    assert_eq!(x.row(1), &[3.0, 2.0, 0.0, 0.0, 0.0, 0.0]);
}

// ============================================================================
// Power Basis Tests
// ============================================================================

/// Test the documented P=1, M=1 example.
#[test]
fn test_expand_linear_memory_rows() {
    let samples = vec![1.0, 2.0, 3.0, 4.0, 5.0];
    let x = expand(&samples, 1, 1, Basis::Power).unwrap();

    let expected = [[1.0, 0.0], [2.0, 1.0], [3.0, 2.0], [4.0, 3.0], [5.0, 4.0]];
    for (row, want) in x.rows().zip(expected.iter()) {
        assert_eq!(row, want);
    }
}

/// Test that the (p=1, m=0) column is the identity tap.
#[test]
fn test_expand_identity_tap() {
    let samples = vec![0.3, -1.7, 2.5, 0.0, -0.25];
    let x = expand(&samples, 3, 2, Basis::Power).unwrap();

    for (i, &s) in samples.iter().enumerate() {
        assert_eq!(x.get(i, 1, 0), s);
    }
}

/// Test degree-major, lag-minor column order and power values.
#[test]
fn test_expand_power_column_order() {
    let samples = vec![2.0, 3.0];
    let x = expand(&samples, 3, 1, Basis::Power).unwrap();

    // Columns: (1,0) (1,1) (2,0) (2,1) (3,0) (3,1)
    assert_eq!(x.row(1), &[3.0, 2.0, 9.0, 4.0, 27.0, 8.0]);
    assert_eq!(x.column_index(2, 1), 3);
}

/// Test power basis with negative samples keeps sign on odd degrees.
#[test]
fn test_expand_power_negative_samples() {
    let samples = vec![-2.0];
    let x = expand(&samples, 4, 0, Basis::Power).unwrap();

    assert_eq!(x.row(0), &[-2.0, 4.0, -8.0, 16.0]);
}

// ============================================================================
// Envelope Basis Tests
// ============================================================================

/// Test envelope terms against the closed form |x|^(2p-2) * x.
#[test]
fn test_expand_envelope_closed_form() {
    let samples = complex_tone(9);
    let (order, memory_depth) = (4, 2);
    let x = expand(&samples, order, memory_depth, Basis::Envelope).unwrap();

    for i in 0..samples.len() {
        for degree in 1..=order {
            for lag in 0..=memory_depth.min(i) {
                let s = samples[i - lag];
                let expected = s * s.norm().powi(2 * degree as i32 - 2);
                let got = x.get(i, degree, lag);
                assert_relative_eq!(got.re, expected.re, epsilon = 1e-12);
                assert_relative_eq!(got.im, expected.im, epsilon = 1e-12);
            }
        }
    }
}

/// Test that envelope term magnitude scales with the odd power 2p-1.
#[test]
fn test_expand_envelope_magnitude_odd_power() {
    let samples = complex_tone(5);
    let x = expand(&samples, 5, 1, Basis::Envelope).unwrap();

    for i in 1..samples.len() {
        for degree in 1..=5 {
            let s = samples[i - 1];
            let expected = s.norm().powi(2 * degree as i32 - 1);
            assert_relative_eq!(
                x.get(i, degree, 1).norm(),
                expected,
                max_relative = 1e-12
            );
        }
    }
}

/// Test envelope basis keeps the phase of the sample.
#[test]
fn test_expand_envelope_preserves_phase() {
    let s = Complex64::from_polar(1.5, 0.9);
    let x = expand(&[s], 3, 0, Basis::Envelope).unwrap();

    for degree in 1..=3 {
        assert_relative_eq!(x.get(0, degree, 0).arg(), 0.9, epsilon = 1e-12);
    }
}

/// Test envelope basis on real samples: |x|^(2p-2) * x.
#[test]
fn test_expand_envelope_real_samples() {
    let samples = vec![-2.0];
    let x = expand(&samples, 3, 0, Basis::Envelope).unwrap();

    assert_eq!(x.row(0), &[-2.0, -8.0, -32.0]);
}

/// Test every populated entry equals the per-sample basis term.
#[test]
fn test_expand_matches_basis_evaluate() {
    let samples = complex_tone(8);
    let (order, memory_depth) = (4, 3);

    for basis in [Basis::Power, Basis::Envelope] {
        let x = expand(&samples, order, memory_depth, basis).unwrap();
        for i in 0..samples.len() {
            for degree in 1..=order {
                for lag in 0..=memory_depth.min(i) {
                    assert_eq!(
                        x.get(i, degree, lag),
                        basis.evaluate(samples[i - lag], degree),
                        "{} basis, row {i}, degree {degree}, lag {lag}",
                        basis.name()
                    );
                }
            }
        }
    }
}

/// Test that degree 0 evaluates like degree 1.
#[test]
fn test_basis_evaluate_degree_zero() {
    for basis in [Basis::Power, Basis::Envelope] {
        assert_eq!(basis.evaluate(-1.5_f64, 0), -1.5);
        assert_eq!(basis.evaluate(-1.5_f64, 0), basis.evaluate(-1.5_f64, 1));
    }
    assert_eq!(Basis::Power.evaluate(-1.5_f64, 3), -3.375);
    assert_eq!(Basis::Envelope.evaluate(-1.5_f64, 2), -3.375);
}

// ============================================================================
// Validation Tests
// ============================================================================

/// Test that order 0 is rejected.
#[test]
fn test_expand_rejects_zero_order() {
    let samples = ramp(3);
    let res = expand(&samples, 0, 1, Basis::Power);

    assert!(matches!(res, Err(VolterraError::InvalidOrder(0))));
}

/// Test that an unrepresentable width is rejected.
#[test]
fn test_expand_rejects_overflowing_width() {
    let samples = ramp(3);
    let res = expand(&samples, 2, usize::MAX, Basis::Power);

    assert!(matches!(res, Err(VolterraError::InvalidInput(_))));
}

/// Test that a matrix too large to allocate is rejected instead of panicking.
#[test]
fn test_expand_rejects_unallocatable_matrix() {
    // Element count fits in usize, byte count does not.
    let res = expand(&[1.0, 2.0], 1, usize::MAX / 4, Basis::Power);
    assert!(matches!(res, Err(VolterraError::InvalidInput(_))));

    // Byte count fits in usize but exceeds isize::MAX.
    let res = expand(&[1.0], 1, usize::MAX / 16, Basis::Power);
    assert!(matches!(res, Err(VolterraError::InvalidInput(_))));
}

// ============================================================================
// Parallel Tests
// ============================================================================

/// Test that parallel expansion matches serial expansion exactly.
#[cfg(feature = "parallel")]
#[test]
fn test_expand_parallel_matches_serial() {
    use volterra::internals::algorithms::expansion::expand_parallel;

    let samples = complex_tone(257);
    let serial = expand(&samples, 5, 4, Basis::Envelope).unwrap();
    let parallel = expand_parallel(&samples, 5, 4, Basis::Envelope).unwrap();

    assert_eq!(serial, parallel);
}
