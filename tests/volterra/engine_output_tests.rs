#![cfg(feature = "dev")]
//! Tests for result structures and coefficient formatting.
//!
//! ## Test Organization
//!
//! 1. **Coefficient Formatting** - `c<i>=<value>` rendering
//! 2. **Coefficients** - Flat layout, weight lookup
//! 3. **Fit Result** - Accessors and text rendering

use volterra::internals::engine::output::{VolterraFit, format_coefficients};
use volterra::internals::math::basis::Basis;
use volterra::internals::primitives::coefficients::Coefficients;
use volterra::internals::primitives::errors::VolterraError;

// ============================================================================
// Helper Functions
// ============================================================================

fn sample_fit() -> VolterraFit<f64> {
    VolterraFit {
        coefficients: Coefficients::new(vec![1.0, 0.5, -0.25, 0.125], 0.75),
        order: 2,
        memory_depth: 1,
        basis: Basis::Power,
        fitted: None,
        diagnostics: None,
        rcond: None,
        parallel: false,
    }
}

// ============================================================================
// Coefficient Formatting Tests
// ============================================================================

/// Test a column vector is rendered flattened with six decimals.
#[test]
fn test_format_coefficients_column_vector() {
    let column = [[1.23456789], [2.0]];
    let flat: Vec<f64> = column.iter().flatten().copied().collect();

    assert_eq!(format_coefficients(&flat), "c1=1.234568, c2=2.000000");
}

/// Test negative values and an empty list.
#[test]
fn test_format_coefficients_edge_values() {
    assert_eq!(format_coefficients(&[-0.5]), "c1=-0.500000");
    assert_eq!(format_coefficients::<f64>(&[]), "");
}

/// Test the Display impl includes the bias as the last entry.
#[test]
fn test_coefficients_display() {
    let c = Coefficients::new(vec![2.0, 0.0], 1.0);

    assert_eq!(c.to_string(), "c1=2.000000, c2=0.000000, c3=1.000000");
}

// ============================================================================
// Coefficients Tests
// ============================================================================

/// Test the flat layout round-trip keeps the bias last.
#[test]
fn test_coefficients_flat_layout() {
    let c = Coefficients::from_vec(vec![1.0, 2.0, 3.0]).unwrap();

    assert_eq!(c.weights(), &[1.0, 2.0]);
    assert_eq!(c.bias(), 3.0);
    assert_eq!(c.len(), 3);
    assert_eq!(c.to_vec(), vec![1.0, 2.0, 3.0]);
}

/// Test an empty flat vector has no bias.
#[test]
fn test_coefficients_from_empty() {
    let res = Coefficients::<f64>::from_vec(vec![]);

    assert!(matches!(res, Err(VolterraError::InvalidInput(_))));
}

/// Test weight lookup by degree and lag.
#[test]
fn test_coefficients_weight_lookup() {
    let c = Coefficients::new(vec![1.0, 0.5, -0.25, 0.125], 0.75);

    assert_eq!(c.weight(1, 0, 1), Some(1.0));
    assert_eq!(c.weight(1, 1, 1), Some(0.5));
    assert_eq!(c.weight(2, 0, 1), Some(-0.25));
    assert_eq!(c.weight(2, 1, 1), Some(0.125));
    assert_eq!(c.weight(0, 0, 1), None);
    assert_eq!(c.weight(1, 2, 1), None);
    assert_eq!(c.weight(3, 0, 1), None);
}

// ============================================================================
// Fit Result Tests
// ============================================================================

/// Test fit accessors.
#[test]
fn test_fit_accessors() {
    let fit = sample_fit();

    assert_eq!(fit.weight(2, 1), Some(0.125));
    assert_eq!(fit.weight(3, 0), None);
    assert_eq!(fit.bias(), 0.75);
}

/// Test the fit summary lists every coefficient and the bias.
#[test]
fn test_fit_display() {
    let text = sample_fit().to_string();

    assert!(text.contains("Order (P):     2"));
    assert!(text.contains("Memory (M):    1"));
    assert!(text.contains("Basis:         Power"));
    assert!(text.contains("Coefficients:  5"));
    assert!(text.contains("-0.250000"));
    assert!(text.contains("bias"));
    assert!(text.contains("0.750000"));
    assert!(!text.contains("Volterra Diagnostics:"));
}
