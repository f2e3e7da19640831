//! Volterra benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Scalability of the full fit (1K to 20K samples)
//! - Model structure (polynomial order, memory depth)
//! - Individual stages (expansion, estimation, prediction, scoring)
//! - Complex baseband data with the envelope basis
//!
//! For serial expansion, use `VOLTERRA_EXECUTION=serial cargo bench`.
//! For parallel expansion, use `VOLTERRA_EXECUTION=parallel cargo bench`.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use num_complex::Complex64;
use rand::prelude::*;
use rand_distr::{Normal, Uniform};
use std::env;
use std::hint::black_box;
use volterra::prelude::*;

// ============================================================================
// Helper Functions
// ============================================================================

fn get_config() -> (bool, &'static str) {
    match env::var("VOLTERRA_EXECUTION").ok().as_deref() {
        Some("serial") => (false, "serial"),
        _ => (true, "parallel"),
    }
}

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Generate a real cubic system with one tap of memory and Gaussian noise.
fn generate_real_data(size: usize, seed: u64) -> (Vec<f64>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let input_dist = Uniform::new(-1.0, 1.0).unwrap();
    let noise_dist = Normal::new(0.0, 1e-3).unwrap();

    let x: Vec<f64> = (0..size).map(|_| input_dist.sample(&mut rng)).collect();
    let y: Vec<f64> = (0..size)
        .map(|n| {
            let prev = if n > 0 { x[n - 1] } else { 0.0 };
            0.9 * x[n] - 0.1 * x[n].powi(3) + 0.2 * prev + noise_dist.sample(&mut rng)
        })
        .collect();
    (x, y)
}

/// Generate a complex baseband amplifier with compression, AM/PM and memory.
fn generate_complex_data(size: usize, seed: u64) -> (Vec<Complex64>, Vec<Complex64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let iq_dist = Normal::new(0.0, 0.4).unwrap();
    let noise_dist = Normal::new(0.0, 1e-4).unwrap();

    let x: Vec<Complex64> = (0..size)
        .map(|_| Complex64::new(iq_dist.sample(&mut rng), iq_dist.sample(&mut rng)))
        .collect();
    let y: Vec<Complex64> = (0..size)
        .map(|n| {
            let v = x[n];
            let prev = if n > 0 { x[n - 1] } else { Complex64::new(0.0, 0.0) };
            let noise = Complex64::new(noise_dist.sample(&mut rng), noise_dist.sample(&mut rng));
            Complex64::new(1.0, 0.02) * v + Complex64::new(-0.12, 0.03) * v * v.norm_sqr()
                + Complex64::new(0.08, -0.01) * prev
                + noise
        })
        .collect();
    (x, y)
}

// ============================================================================
// Benchmark Functions
// ============================================================================

fn bench_scalability(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("scalability_{}", mode_name));
    group.sample_size(50);

    for size in [1_000, 5_000, 20_000] {
        group.throughput(Throughput::Elements(size as u64));

        let (x, y) = generate_real_data(size, 42);

        group.bench_with_input(BenchmarkId::new("fit", size), &size, |b, _| {
            b.iter(|| {
                Volterra::new()
                    .order(3)
                    .memory_depth(2)
                    .parallel(use_parallel)
                    .build()
                    .unwrap()
                    .fit(black_box(&x), black_box(&y))
                    .unwrap()
            })
        });
    }
    group.finish();
}

fn bench_order(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("order_{}", mode_name));
    group.sample_size(50);

    let (x, y) = generate_real_data(5_000, 42);

    for order in [1, 3, 5, 7] {
        group.bench_with_input(BenchmarkId::new("fit", order), &order, |b, &order| {
            b.iter(|| {
                Volterra::new()
                    .order(order)
                    .memory_depth(2)
                    .parallel(use_parallel)
                    .build()
                    .unwrap()
                    .fit(black_box(&x), black_box(&y))
                    .unwrap()
            })
        });
    }
    group.finish();
}

fn bench_memory_depth(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("memory_depth_{}", mode_name));
    group.sample_size(50);

    let (x, y) = generate_real_data(5_000, 42);

    for memory_depth in [0, 2, 4, 8] {
        group.bench_with_input(
            BenchmarkId::new("fit", memory_depth),
            &memory_depth,
            |b, &memory_depth| {
                b.iter(|| {
                    Volterra::new()
                        .order(3)
                        .memory_depth(memory_depth)
                        .parallel(use_parallel)
                        .build()
                        .unwrap()
                        .fit(black_box(&x), black_box(&y))
                        .unwrap()
                })
            },
        );
    }
    group.finish();
}

fn bench_stages(c: &mut Criterion) {
    let mut group = c.benchmark_group("stages");
    group.sample_size(100);

    let (x, y) = generate_real_data(10_000, 7);
    let features = expand(&x, 3, 2, Power).unwrap();
    let coefficients = fit(&features, &y).unwrap();
    let predicted = predict(&features, &coefficients).unwrap();

    group.bench_function("expand", |b| {
        b.iter(|| expand(black_box(&x), 3, 2, Power).unwrap())
    });
    group.bench_function("fit", |b| {
        b.iter(|| fit(black_box(&features), black_box(&y)).unwrap())
    });
    group.bench_function("predict", |b| {
        b.iter(|| predict(black_box(&features), black_box(&coefficients)).unwrap())
    });
    group.bench_function("nmse", |b| {
        b.iter(|| nmse(black_box(&predicted), black_box(&y)).unwrap())
    });

    group.finish();
}

fn bench_complex(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("complex_{}", mode_name));
    group.sample_size(50);

    for size in [1_000, 5_000] {
        group.throughput(Throughput::Elements(size as u64));

        let (x, y) = generate_complex_data(size, 11);
        let (x_val, y_val) = generate_complex_data(size / 2, 12);

        group.bench_with_input(BenchmarkId::new("fit_validate", size), &size, |b, _| {
            b.iter(|| {
                Volterra::new()
                    .order(5)
                    .memory_depth(3)
                    .basis(Envelope)
                    .parallel(use_parallel)
                    .build()
                    .unwrap()
                    .fit(black_box(&x), black_box(&y))
                    .unwrap()
                    .validate(black_box(&x_val), black_box(&y_val))
                    .unwrap()
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_scalability,
    bench_order,
    bench_memory_depth,
    bench_stages,
    bench_complex,
);

criterion_main!(benches);
