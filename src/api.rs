//! High-level API for k-Simplicial distances.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements a
//! fluent builder for configuring the simplicial degree and numeric policies,
//! and produces a fitted [`SimplicialMetric`] that holds the S matrix.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Fail-fast**: Unlike the bare `s_matrix` function, the builder rejects
//!   degenerate configurations (`DegeneratePolicy::Reject` by default).
//! * **Type-Safe**: Generic over `FloatLinalg` types (f32 and f64).
//!
//! ## Key concepts
//!
//! ### Configuration Flow
//!
//! 1. Create a [`SimplicialDistanceBuilder`] via `SimplicialDistance::new()`.
//! 2. Chain configuration methods (`.degree()`, `.method()`, etc.).
//! 3. Call `.build(&covariance)` or `.fit(&samples, dimensions)`.
//! 4. Query distances on the returned [`SimplicialMetric`].

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::algorithms::smatrix::{default_symmetry_tolerance, SimplicialContext};
use crate::engine::validator::Validator;
use crate::math::covariance::covariance;
use crate::math::linalg::FloatLinalg;
use crate::math::quadratic;

// Publicly re-exported types
pub use crate::algorithms::smatrix::DegeneratePolicy;
pub use crate::math::covariance::CovarianceNormalization;
pub use crate::math::symmetric::SymmetricMethod;
pub use crate::primitives::errors::SimplicialError;
pub use crate::primitives::matrix::SquareMatrix;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a k-Simplicial distance.
#[derive(Debug, Clone)]
pub struct SimplicialDistanceBuilder<T: FloatLinalg> {
    /// Simplicial degree k (default: 1).
    pub degree: Option<usize>,

    /// Elementary symmetric evaluation method (default: Combinations).
    pub method: Option<SymmetricMethod>,

    /// Relative symmetry tolerance (default: `sqrt(eps)`).
    pub symmetry_tolerance: Option<T>,

    /// Handling of a vanishing normalizer (default: Reject).
    pub degenerate_policy: Option<DegeneratePolicy>,

    /// Covariance estimator used by `fit` (default: Sample).
    pub normalization: Option<CovarianceNormalization>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: FloatLinalg> Default for SimplicialDistanceBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FloatLinalg> SimplicialDistanceBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            degree: None,
            method: None,
            symmetry_tolerance: None,
            degenerate_policy: None,
            normalization: None,
            duplicate_param: None,
        }
    }

    /// Set the simplicial degree k.
    pub fn degree(mut self, degree: usize) -> Self {
        if self.degree.is_some() {
            self.duplicate_param = Some("degree");
        }
        self.degree = Some(degree);
        self
    }

    /// Set the elementary symmetric evaluation method.
    pub fn method(mut self, method: SymmetricMethod) -> Self {
        if self.method.is_some() {
            self.duplicate_param = Some("method");
        }
        self.method = Some(method);
        self
    }

    /// Set the relative symmetry tolerance.
    pub fn symmetry_tolerance(mut self, tolerance: T) -> Self {
        if self.symmetry_tolerance.is_some() {
            self.duplicate_param = Some("symmetry_tolerance");
        }
        self.symmetry_tolerance = Some(tolerance);
        self
    }

    /// Set the degenerate-normalizer policy.
    pub fn degenerate_policy(mut self, policy: DegeneratePolicy) -> Self {
        if self.degenerate_policy.is_some() {
            self.duplicate_param = Some("degenerate_policy");
        }
        self.degenerate_policy = Some(policy);
        self
    }

    /// Set the covariance estimator used by `fit`.
    pub fn normalization(mut self, normalization: CovarianceNormalization) -> Self {
        if self.normalization.is_some() {
            self.duplicate_param = Some("normalization");
        }
        self.normalization = Some(normalization);
        self
    }

    /// Build the metric from a covariance matrix.
    pub fn build(self, covariance: &SquareMatrix<T>) -> Result<SimplicialMetric<T>, SimplicialError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let tolerance = self
            .symmetry_tolerance
            .unwrap_or_else(default_symmetry_tolerance);
        Validator::validate_tolerance(tolerance)?;

        Validator::validate_covariance(covariance)?;
        let degree = self.degree.unwrap_or(1);
        Validator::validate_degree(degree, covariance.dimension())?;

        let context = SimplicialContext {
            covariance,
            degree,
            method: self.method.unwrap_or_default(),
            symmetry_tolerance: tolerance,
            degenerate_policy: self.degenerate_policy.unwrap_or(DegeneratePolicy::Reject),
        };
        let output = context.compute()?;

        tracing::debug!(
            degree,
            dimension = covariance.dimension(),
            rank = output.rank,
            "built simplicial metric"
        );

        Ok(SimplicialMetric {
            degree,
            rank: output.rank,
            normalizer: output.normalizer,
            eigenvalues: output.eigenvalues,
            s: output.s,
            covariance: covariance.clone(),
        })
    }

    /// Estimate the covariance of row-major `samples` and build the metric.
    pub fn fit(self, samples: &[T], dimensions: usize) -> Result<SimplicialMetric<T>, SimplicialError> {
        Validator::validate_samples(samples, dimensions)?;
        let normalization = self.normalization.unwrap_or_default();
        let covariance = covariance(samples, dimensions, normalization)?;
        self.build(&covariance)
    }
}

// ============================================================================
// Fitted Metric
// ============================================================================

/// A k-Simplicial distance bound to one covariance matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct SimplicialMetric<T> {
    degree: usize,
    rank: usize,
    normalizer: T,
    eigenvalues: Vec<T>,
    s: SquareMatrix<T>,
    covariance: SquareMatrix<T>,
}

impl<T: FloatLinalg> SimplicialMetric<T> {
    /// Distance `(x1 - x2)' S (x1 - x2)`.
    pub fn distance(&self, x1: &[T], x2: &[T]) -> Result<T, SimplicialError> {
        quadratic::distance(x1, x2, &self.s)
    }

    /// Distances from `query` to every row of row-major `points`.
    pub fn distances_to(&self, query: &[T], points: &[T]) -> Result<Vec<T>, SimplicialError> {
        quadratic::distances_to(query, points, &self.s)
    }

    /// The S matrix.
    pub fn s_matrix(&self) -> &SquareMatrix<T> {
        &self.s
    }

    /// The covariance the metric was built from.
    pub fn covariance(&self) -> &SquareMatrix<T> {
        &self.covariance
    }

    /// Covariance eigenvalues.
    pub fn eigenvalues(&self) -> &[T] {
        &self.eigenvalues
    }

    /// The normalizer `e_k(λ)`.
    pub fn normalizer(&self) -> T {
        self.normalizer
    }

    /// Simplicial degree k.
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Effective rank of the covariance.
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// Dimension n of the space.
    pub fn dimension(&self) -> usize {
        self.s.dimension()
    }
}
