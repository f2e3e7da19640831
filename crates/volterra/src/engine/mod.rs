//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer orchestrates the modeling pipeline:
//! - Validation of configuration and data
//! - Execution of the expand/fit/predict/score stages
//! - Result structures and text rendering
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Pipeline executor.
pub mod executor;

/// Result types and formatting.
pub mod output;

/// Input and parameter validation.
pub mod validator;
