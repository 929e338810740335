//! # simplicial-distance — k-Simplicial distances for Rust
//!
//! Mahalanobis-like distances built from the eigen-structure of a covariance
//! matrix, following the construction in "Simplicial variances, potentials
//! and Mahalanobis distances".
//!
//! ## What is a k-Simplicial distance?
//!
//! For a covariance `Σ` with eigenvalues `λ₁..λₙ` and a degree `1 <= k <= n`,
//! the distance between `x1` and `x2` is the quadratic form
//!
//! ```text
//! d_k(x1, x2) = (x1 - x2)ᵀ · S(k, Σ) · (x1 - x2)
//!
//! S(k, Σ) = Q(k, Σ) / e_k(λ)
//! Q(k, Σ) = Σ_{i=0}^{k-1} (-1)^i · e_{k-i-1}(λ) · Σ^i
//! ```
//!
//! where `e_j` is the degree-j elementary symmetric polynomial. The degree
//! interpolates between two classical metrics:
//!
//! - **k = 1**: `S = I / tr(Σ)`, a scaled Euclidean distance.
//! - **k = n**: `S = Σ⁻¹` (Cayley-Hamilton), the squared Mahalanobis distance.
//!
//! Intermediate degrees weight the simplices spanned by k + 1 points, which
//! stays well defined for rank-deficient covariances as long as `k` does not
//! exceed the rank.
//!
//! ## Quick start
//!
//! ```rust
//! use simplicial_distance::prelude::*;
//!
//! let covariance: SquareMatrix<f64> = SquareMatrix::from_rows(&[[2.0, 0.0], [0.0, 1.0]])?;
//!
//! // Low-level pipeline: S matrix, then the quadratic form.
//! let s = s_matrix(1, &covariance)?;
//! assert!((s[(0, 0)] - 1.0 / 3.0).abs() < 1e-12);
//!
//! let d = distance(&[1.0, 0.0], &[0.0, 0.0], &s)?;
//! assert!((d - 1.0 / 3.0).abs() < 1e-12);
//! # Result::<(), SimplicialError>::Ok(())
//! ```
//!
//! ## Builder
//!
//! The fluent builder validates its inputs and, by default, refuses degrees
//! whose normalizer vanishes instead of returning a matrix of `inf`/`NaN`:
//!
//! ```rust
//! use simplicial_distance::prelude::*;
//!
//! let covariance: SquareMatrix<f64> = SquareMatrix::from_rows(&[[2.0, 0.0], [0.0, 1.0]])?;
//!
//! let metric = SimplicialDistance::new()
//!     .degree(2)
//!     .method(Recurrence)
//!     .build(&covariance)?;
//!
//! // k = n recovers the inverse covariance.
//! let d = metric.distance(&[1.0, 1.0], &[0.0, 0.0])?;
//! assert!((d - 1.5).abs() < 1e-12);
//! # Result::<(), SimplicialError>::Ok(())
//! ```
//!
//! ## Error handling
//!
//! Every fallible operation returns `Result<_, SimplicialError>`:
//!
//! - Shape problems: `EmptyInput`, `NotSquare`, `DimensionMismatch`.
//! - Invalid arguments: `NotSymmetric`, `InvalidDegree`, `InvalidTolerance`,
//!   `InvalidNumericValue`, `TooFewSamples`, `DuplicateParameter`.
//! - `DegenerateDistance` when the normalizer vanishes under
//!   `DegeneratePolicy::Reject`. With `Propagate` (the default of the bare
//!   `s_matrix` function) the division follows IEEE semantics instead.
//!
//! ## Logging
//!
//! Pipeline steps emit `tracing` events at debug level and degenerate
//! normalizers at warn level. No subscriber is installed by the crate.
//!
//! ## Feature flags
//!
//! - `std` (default): link the standard library. Without it the crate is `no_std` + `alloc`.
//! - `dev`: expose the [`internals`] module for white-box testing.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - data structures and basic utilities.
//
// Contains the square matrix value type and the crate error type.
mod primitives;

// Layer 2: Math - pure mathematical functions.
//
// Contains elementary symmetric polynomials, the nalgebra bridge,
// quadratic-form distances and covariance estimation.
mod math;

// Layer 3: Algorithms - the simplicial construction.
//
// Contains the Q-function and the S-function.
mod algorithms;

// Layer 4: Engine - input validation.
mod engine;

// High-level fluent API.
//
// Provides the `SimplicialDistanceBuilder` and the fitted `SimplicialMetric`.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types and functions:
///
/// ```
/// use simplicial_distance::prelude::*;
/// ```
pub mod prelude {
    pub use crate::algorithms::qmatrix::{q_matrix, q_matrix_with};
    pub use crate::algorithms::smatrix::{s_matrix, SMatrixOutput, SimplicialContext};
    pub use crate::api::{
        CovarianceNormalization::{Population, Sample},
        DegeneratePolicy::{Propagate, Reject},
        SimplicialDistanceBuilder as SimplicialDistance, SimplicialError, SimplicialMetric,
        SquareMatrix,
        SymmetricMethod::{Combinations, Recurrence},
    };
    pub use crate::api::{CovarianceNormalization, DegeneratePolicy, SymmetricMethod};
    pub use crate::math::covariance::covariance;
    pub use crate::math::linalg::FloatLinalg;
    pub use crate::math::quadratic::{distance, distances_to};
    pub use crate::math::symmetric::{elementary_symmetric, elementary_symmetric_upto};
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal simplicial algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal validation engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
