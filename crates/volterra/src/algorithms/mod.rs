//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer implements the core Volterra modeling algorithms:
//! - Feature expansion of a raw sample sequence
//! - Pseudo-inverse least-squares coefficient estimation
//! - Prediction from a coefficient vector
//! - Closed-form straight-line fitting
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Feature expansion.
pub mod expansion;

/// Coefficient estimation.
pub mod least_squares;

/// Output prediction.
pub mod prediction;

/// Straight-line least squares.
pub mod linear;
