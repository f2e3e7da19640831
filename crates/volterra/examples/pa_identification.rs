//! Volterra Power-Amplifier Identification Examples
//!
//! This example demonstrates:
//! - Fitting a real-valued memory polynomial
//! - Identifying a complex baseband amplifier with the envelope basis
//! - Held-out validation with NMSE and AM/AM data
//! - Choosing order and memory depth by validation score

use num_complex::Complex64;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};
use std::error::Error;
use volterra::prelude::*;

fn main() -> Result<(), Box<dyn Error>> {
    println!("{}", "=".repeat(80));
    println!("Volterra Behavioral Modeling Examples");
    println!("{}", "=".repeat(80));
    println!();

    example_1_real_memory_polynomial()?;
    example_2_complex_baseband()?;
    example_3_structure_selection()?;

    Ok(())
}

/// Complex baseband amplifier: compression, AM/PM and a short memory tail.
fn amplifier(x: &[Complex64]) -> Vec<Complex64> {
    let a1 = Complex64::new(1.0, 0.02);
    let a3 = Complex64::new(-0.12, 0.03);
    let m1 = Complex64::new(0.08, -0.01);
    (0..x.len())
        .map(|n| {
            let v = x[n];
            let prev = if n > 0 { x[n - 1] } else { Complex64::new(0.0, 0.0) };
            a1 * v + a3 * v * v.norm_sqr() + m1 * prev
        })
        .collect()
}

/// Random QPSK-like baseband signal with Gaussian amplitude jitter.
fn baseband(n: usize, rng: &mut StdRng) -> Result<Vec<Complex64>, Box<dyn Error>> {
    let jitter = Normal::<f64>::new(0.0, 0.15)?;
    Ok((0..n)
        .map(|k| {
            let phase = std::f64::consts::FRAC_PI_4 * (2 * (k % 4) + 1) as f64;
            let amp = (0.6 + jitter.sample(rng)).abs();
            Complex64::from_polar(amp, phase + 0.05 * k as f64)
        })
        .collect())
}

/// Example 1: Real Memory Polynomial
/// Fits a cubic amplifier with one tap of memory on real samples
fn example_1_real_memory_polynomial() -> Result<(), Box<dyn Error>> {
    println!("Example 1: Real Memory Polynomial");
    println!("{}", "-".repeat(80));

    let x: Vec<f64> = (0..200)
        .map(|k| (0.07 * k as f64).sin() + 0.3 * (0.41 * k as f64).cos())
        .collect();
    let y: Vec<f64> = (0..x.len())
        .map(|n| {
            let prev = if n > 0 { x[n - 1] } else { 0.0 };
            0.95 * x[n] - 0.15 * x[n].powi(3) + 0.1 * prev
        })
        .collect();

    let model = Volterra::new()
        .order(3) // Up to cubic terms
        .memory_depth(1) // Current and previous sample
        .return_diagnostics()
        .build()?;

    let fitted = model.fit(&x, &y)?;
    println!("{}", fitted);
    println!("Flat: {}", fitted.coefficients);

    println!();
    Ok(())
}

/// Example 2: Complex Baseband
/// Identifies an amplifier from noisy measurements and validates on fresh data
fn example_2_complex_baseband() -> Result<(), Box<dyn Error>> {
    println!("Example 2: Complex Baseband");
    println!("{}", "-".repeat(80));

    let mut rng = StdRng::seed_from_u64(7);
    let noise = Normal::new(0.0, 1e-3)?;

    let x_train = baseband(2_000, &mut rng)?;
    let y_train: Vec<Complex64> = amplifier(&x_train)
        .into_iter()
        .map(|v| v + Complex64::new(noise.sample(&mut rng), noise.sample(&mut rng)))
        .collect();

    let x_val = baseband(500, &mut rng)?;
    let y_val = amplifier(&x_val);

    let fitted = Volterra::new()
        .order(3)
        .memory_depth(2)
        .basis(Envelope) // |x|^(2p-2) x terms
        .build()?
        .fit(&x_train, &y_train)?;

    let report = fitted.validate(&x_val, &y_val)?;
    println!("{}", report);

    if let Some((lo, hi)) = report.amplitude.reference {
        println!("AM/AM reference line: y = x over [{lo:.4}, {hi:.4}]");
    }
    for (actual, predicted) in report.amplitude.pairs().take(5) {
        println!("  |y| = {actual:.4}  |y_hat| = {predicted:.4}");
    }

    println!();
    Ok(())
}

/// Example 3: Structure Selection
/// Scores a small grid of orders and memory depths on held-out data
fn example_3_structure_selection() -> Result<(), Box<dyn Error>> {
    println!("Example 3: Structure Selection");
    println!("{}", "-".repeat(80));

    let mut rng = StdRng::seed_from_u64(11);
    let x_train = baseband(1_000, &mut rng)?;
    let y_train = amplifier(&x_train);
    let x_val = baseband(300, &mut rng)?;
    let y_val = amplifier(&x_val);

    println!("{:>6} {:>8} {:>12}", "Order", "Memory", "NMSE (dB)");
    for order in 1..=3 {
        for memory_depth in 0..=2 {
            let nmse_db = Volterra::new()
                .order(order)
                .memory_depth(memory_depth)
                .basis(Envelope)
                .build()?
                .fit(&x_train, &y_train)?
                .validate(&x_val, &y_val)?
                .nmse_db;
            println!("{:>6} {:>8} {:>12.2}", order, memory_depth, nmse_db);
        }
    }

    println!();
    Ok(())
}
