//! # Volterra — Memory-Polynomial Behavioral Modeling for Rust
//!
//! Estimate Volterra-series (memory polynomial) models of nonlinear systems,
//! such as RF power amplifiers, from measured input/output data, and score
//! them on held-out data.
//!
//! ## What is a Volterra model?
//!
//! A Volterra series represents a nonlinear system's output as a weighted sum
//! of powers of the current and past inputs. This crate implements the
//! diagonal ("memory polynomial") form:
//!
//! ```text
//! y[n] = Σ_{p=1..P} Σ_{m=0..M} a(p, m) · φ_p(x[n − m]) + b
//! ```
//!
//! where `P` is the polynomial order, `M` the memory depth, and `φ_p` either
//! `x^p` (`Power` basis) or `|x|^(2p−2)·x` (`Envelope` basis, for complex
//! baseband signals).
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use volterra::prelude::*;
//!
//! let x = vec![1.0, 3.0, 2.0, 5.0, 4.0];
//! let y: Vec<f64> = x.iter().map(|v| 2.0 * v + 1.0).collect();
//!
//! // Build the model
//! let model = Volterra::new()
//!     .order(1)           // Linear terms only
//!     .memory_depth(1)    // Current and previous sample
//!     .build()?;
//!
//! // Fit the model to the data
//! let fitted = model.fit(&x, &y)?;
//!
//! assert!((fitted.weight(1, 0).unwrap() - 2.0).abs() < 1e-8);
//! assert!(fitted.weight(1, 1).unwrap().abs() < 1e-8);
//! assert!((fitted.bias() - 1.0).abs() < 1e-8);
//!
//! // c1=<lag 0>, c2=<lag 1>, c3=<bias>
//! println!("{}", fitted.coefficients);
//! # Result::<(), VolterraError>::Ok(())
//! ```
//!
//! ### Complex Baseband with Validation
//!
//! ```rust
//! use num_complex::Complex64;
//! use volterra::prelude::*;
//!
//! let pa = |v: Complex64| v - 0.1 * v * v.norm_sqr();
//! let x: Vec<Complex64> = (0..64)
//!     .map(|n| Complex64::from_polar(0.5 + 0.01 * n as f64, 0.3 * n as f64))
//!     .collect();
//! let y: Vec<Complex64> = x.iter().map(|&v| pa(v)).collect();
//!
//! let model = Volterra::new()
//!     .order(3)
//!     .memory_depth(1)
//!     .basis(Envelope)
//!     .return_diagnostics()
//!     .build()?;
//!
//! let fitted = model.fit(&x[..48], &y[..48])?;
//! let report = fitted.validate(&x[48..], &y[48..])?;
//!
//! assert!(report.nmse_db < -100.0);
//! println!("{}", report);
//! # Result::<(), VolterraError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Every operation returns `Result<_, VolterraError>`. Errors are classified by
//! [`VolterraError::kind`](prelude::VolterraError::kind) into invalid
//! arguments, shape mismatches and numerical failures:
//!
//! ```rust
//! use volterra::prelude::*;
//!
//! let err = Volterra::<f64>::new().order(0).build().unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::InvalidArgument);
//! ```
//!
//! ### Low-level Pipeline
//!
//! The individual stages are available as free functions:
//!
//! ```rust
//! use volterra::prelude::*;
//!
//! let samples = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let outputs: Vec<f64> = samples.iter().map(|v| 2.0 * v + 1.0).collect();
//!
//! let features = expand(&samples, 1, 1, Power)?;
//! assert_eq!(features.row(0), &[1.0, 0.0]);
//!
//! let coefficients = fit(&features, &outputs)?;
//! let predicted = predict(&features, &coefficients)?;
//! let score = nmse(&predicted, &outputs)?;
//! assert!(score < -100.0);
//! # Result::<(), VolterraError>::Ok(())
//! ```
//!
//! ## Features
//!
//! * `parallel` (default): fill feature-matrix rows with `rayon`.
//! * `dev`: expose internal modules for integration tests.

// Layer 1: Primitives - data structures and basic utilities.
mod primitives;

// Layer 2: Math - pure mathematical functions.
mod math;

// Layer 3: Algorithms - expansion, estimation and prediction.
mod algorithms;

// Layer 4: Evaluation - scoring and diagnostics.
mod evaluation;

// Layer 5: Engine - orchestration and execution control.
mod engine;

// High-level fluent API.
mod api;

// Standard Volterra prelude.
pub mod prelude {
    pub use crate::api::{
        AmplitudeComparison,
        Basis::{Envelope, Power},
        Coefficients, DEFAULT_NMSE_EPSILON, Diagnostics, ErrorKind, FeatureMatrix, LineFit,
        Sample, ValidationReport, VolterraBuilder as Volterra, VolterraError, VolterraFit,
        VolterraModel, amplitude_comparison, expand, fit, fit_line, fit_with_rcond,
        format_coefficients, nmse, nmse_with_epsilon, predict,
    };
    pub use crate::api::Basis;
    pub use crate::primitives::input::SampleInput;
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
