//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions used by the simplicial pipeline:
//! - Elementary symmetric polynomials
//! - The nalgebra linear algebra bridge
//! - Quadratic-form distances
//! - Covariance estimation
//!
//! These are reusable mathematical building blocks with no algorithm-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Elementary symmetric polynomials.
pub mod symmetric;

/// Linear algebra backend abstraction.
pub mod linalg;

/// Quadratic-form distances.
pub mod quadratic;

/// Covariance estimation.
pub mod covariance;
