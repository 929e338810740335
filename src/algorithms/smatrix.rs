//! S-function: the k-Simplicial distance matrix.
//!
//! ## Purpose
//!
//! This module builds
//!
//! ```text
//! S(k, Σ) = Q(k, Σ, λ) / e_k(λ)
//! ```
//!
//! from a symmetric covariance `Σ` with eigenvalues `λ`.
//!
//! ## Design notes
//!
//! * **Symmetric input**: Covariance must be symmetric within a relative
//!   tolerance; eigenvalues then come from the real symmetric solver.
//! * **Degeneracy policy**: When `e_k(λ)` vanishes (k above the effective rank
//!   of `Σ`, or `k > n`) the division is undefined. `Propagate` lets IEEE
//!   division produce `inf`/`NaN` entries and logs a warning; `Reject` fails
//!   fast with `DegenerateDistance`.
//!
//! ## Key concepts
//!
//! * `k = 1`: `S = I / tr(Σ)`, a scaled Euclidean metric.
//! * `k = n`: by Cayley-Hamilton `S = Σ^{-1}`, the Mahalanobis metric.
//!
//! ## Invariants
//!
//! * `S` has the shape of `Σ`.
//! * `S(0, Σ)` is the zero matrix (`Q = 0`, `e_0 = 1`).
//!
//! ## Non-goals
//!
//! * This module does not support complex eigenvalues of non-symmetric input.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::qmatrix::q_matrix_with;
use crate::math::linalg::{effective_rank, FloatLinalg};
use crate::math::symmetric::SymmetricMethod;
use crate::primitives::errors::SimplicialError;
use crate::primitives::matrix::SquareMatrix;

// ============================================================================
// Configuration Types
// ============================================================================

/// Handling of a vanishing elementary symmetric normalizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DegeneratePolicy {
    /// Divide anyway; non-finite entries reach the caller.
    #[default]
    Propagate,

    /// Return `DegenerateDistance` instead of a non-finite matrix.
    Reject,
}

/// Default relative symmetry tolerance: `sqrt(eps)`.
#[inline]
pub fn default_symmetry_tolerance<T: Float>() -> T {
    T::epsilon().sqrt()
}

/// Result of an S-matrix computation.
#[derive(Debug, Clone, PartialEq)]
pub struct SMatrixOutput<T> {
    /// The distance matrix `S(k, Σ)`.
    pub s: SquareMatrix<T>,

    /// Eigenvalues of the covariance.
    pub eigenvalues: Vec<T>,

    /// The normalizer `e_k(λ)`.
    pub normalizer: T,

    /// Number of numerically non-zero eigenvalues.
    pub rank: usize,
}

// ============================================================================
// Context
// ============================================================================

/// Everything needed to compute one S matrix.
#[derive(Debug, Clone)]
pub struct SimplicialContext<'a, T> {
    /// Covariance matrix `Σ`.
    pub covariance: &'a SquareMatrix<T>,

    /// Simplicial degree `k`.
    pub degree: usize,

    /// Elementary symmetric evaluation method.
    pub method: SymmetricMethod,

    /// Relative tolerance for the symmetry check.
    pub symmetry_tolerance: T,

    /// Handling of a vanishing normalizer.
    pub degenerate_policy: DegeneratePolicy,
}

impl<'a, T: FloatLinalg> SimplicialContext<'a, T> {
    /// Context with default method, tolerance and policy.
    pub fn new(covariance: &'a SquareMatrix<T>, degree: usize) -> Self {
        Self {
            covariance,
            degree,
            method: SymmetricMethod::default(),
            symmetry_tolerance: default_symmetry_tolerance(),
            degenerate_policy: DegeneratePolicy::default(),
        }
    }

    /// Compute `S(k, Σ)` together with its spectral by-products.
    pub fn compute(&self) -> Result<SMatrixOutput<T>, SimplicialError> {
        let covariance = self.covariance;
        let degree = self.degree;
        let n = covariance.dimension();
        if n == 0 {
            return Err(SimplicialError::EmptyInput);
        }

        if let Some((row, col)) = covariance.first_asymmetry(self.symmetry_tolerance) {
            return Err(SimplicialError::NotSymmetric { row, col });
        }

        let eigenvalues = covariance.symmetric_eigenvalues();
        let rank = effective_rank(&eigenvalues);
        tracing::debug!(degree, dimension = n, rank, "computing simplicial S matrix");

        if self.degenerate_policy == DegeneratePolicy::Reject && degree > rank {
            return Err(SimplicialError::DegenerateDistance { degree, rank });
        }

        let q = q_matrix_with(self.method, degree, covariance, &eigenvalues)?;
        let normalizer = self.method.evaluate(degree, &eigenvalues);
        let s = q.divide(normalizer);

        if degree > rank || normalizer == T::zero() || !s.is_finite() {
            match self.degenerate_policy {
                DegeneratePolicy::Reject => {
                    return Err(SimplicialError::DegenerateDistance { degree, rank });
                }
                DegeneratePolicy::Propagate => {
                    tracing::warn!(
                        degree,
                        rank,
                        "elementary symmetric normalizer is degenerate; S matrix may not be finite"
                    );
                }
            }
        }

        Ok(SMatrixOutput {
            s,
            eigenvalues,
            normalizer,
            rank,
        })
    }
}

/// S matrix with default settings; degeneracy propagates as `inf`/`NaN`.
pub fn s_matrix<T: FloatLinalg>(
    k: usize,
    covariance: &SquareMatrix<T>,
) -> Result<SquareMatrix<T>, SimplicialError> {
    Ok(SimplicialContext::new(covariance, k).compute()?.s)
}
