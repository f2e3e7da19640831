//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions used throughout the crate:
//! - Nonlinear basis functions for the feature expansion
//! - Energy and distance sums for scoring
//!
//! These are reusable mathematical building blocks with no pipeline-specific logic.
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
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Nonlinear basis functions (power / envelope).
pub mod basis;

/// Energy and distance sums.
pub mod norms;
