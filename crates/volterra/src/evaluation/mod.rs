//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer scores model predictions against actual outputs:
//! - NMSE in dB (the primary validation metric)
//! - Diagnostic summaries (RMSE, MAE, max error)
//! - Amplitude pairs for AM/AM plotting
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Normalized mean-square error.
pub mod nmse;

/// Fit-quality diagnostics.
pub mod diagnostics;

/// Amplitude comparison for plotting.
pub mod amplitude;
