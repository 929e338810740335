//! Linear algebra backend abstraction.
//!
//! ## Purpose
//!
//! This module bridges generic `Float` code to nalgebra for the dense
//! operations the simplicial pipeline needs: matrix products, matrix powers,
//! symmetric eigenvalues and quadratic forms.
//!
//! ## Design notes
//!
//! * Row-major slices cross the bridge; nalgebra matrices never leak into
//!   the public API.
//! * Eigenvalues come from the symmetric QR solver, so they are
//!   always real. Callers must check symmetry first.
//! * Generic over `FloatLinalg` types (f32 and f64) which delegate to nalgebra.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::Debug;
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::SimplicialError;
use crate::primitives::matrix::SquareMatrix;

// ============================================================================
// FloatLinalg Trait
// ============================================================================

/// Helper trait to bridge generic Float types to the nalgebra backend.
pub trait FloatLinalg: Float + Debug + Send + Sync + 'static {
    /// Eigenvalues of a symmetric n x n row-major matrix.
    fn symmetric_eigenvalues(a: &[Self], n: usize) -> Vec<Self>;
    /// Row-major product of two n x n row-major matrices.
    fn matrix_product(a: &[Self], b: &[Self], n: usize) -> Vec<Self>;
    /// Quadratic form v' M v for an n x n row-major matrix M.
    fn quadratic_form(v: &[Self], m: &[Self], n: usize) -> Self;
}

impl FloatLinalg for f64 {
    #[inline]
    fn symmetric_eigenvalues(a: &[Self], n: usize) -> Vec<Self> {
        nalgebra_backend::symmetric_eigenvalues(a, n)
    }
    #[inline]
    fn matrix_product(a: &[Self], b: &[Self], n: usize) -> Vec<Self> {
        nalgebra_backend::matrix_product(a, b, n)
    }
    #[inline]
    fn quadratic_form(v: &[Self], m: &[Self], n: usize) -> Self {
        nalgebra_backend::quadratic_form(v, m, n)
    }
}

impl FloatLinalg for f32 {
    #[inline]
    fn symmetric_eigenvalues(a: &[Self], n: usize) -> Vec<Self> {
        nalgebra_backend::symmetric_eigenvalues(a, n)
    }
    #[inline]
    fn matrix_product(a: &[Self], b: &[Self], n: usize) -> Vec<Self> {
        nalgebra_backend::matrix_product(a, b, n)
    }
    #[inline]
    fn quadratic_form(v: &[Self], m: &[Self], n: usize) -> Self {
        nalgebra_backend::quadratic_form(v, m, n)
    }
}

// ============================================================================
// Nalgebra Backend Implementation
// ============================================================================

/// Nalgebra-based linear algebra operations.
pub mod nalgebra_backend {
    use super::*;
    use nalgebra::{DMatrix, DVector, RealField};

    /// Eigenvalues of a symmetric row-major matrix.
    pub fn symmetric_eigenvalues<T: RealField + Copy>(a: &[T], n: usize) -> Vec<T> {
        let matrix = DMatrix::from_row_slice(n, n, a);
        matrix.symmetric_eigenvalues().as_slice().to_vec()
    }

    /// Product of two row-major matrices, returned row-major.
    pub fn matrix_product<T: RealField + Copy>(a: &[T], b: &[T], n: usize) -> Vec<T> {
        let lhs = DMatrix::from_row_slice(n, n, a);
        let rhs = DMatrix::from_row_slice(n, n, b);
        // Column-major storage of the transpose is row-major storage of the product.
        (lhs * rhs).transpose().as_slice().to_vec()
    }

    /// Quadratic form v' M v.
    pub fn quadratic_form<T: RealField + Copy>(v: &[T], m: &[T], n: usize) -> T {
        let x = DVector::from_column_slice(v);
        let matrix = DMatrix::from_row_slice(n, n, m);
        (x.transpose() * &matrix * &x)[(0, 0)]
    }
}

// ============================================================================
// SquareMatrix Extensions
// ============================================================================

impl<T: FloatLinalg> SquareMatrix<T> {
    /// Matrix product `self * other`.
    pub fn matmul(&self, other: &Self) -> Result<Self, SimplicialError> {
        if self.dimension() != other.dimension() {
            return Err(SimplicialError::DimensionMismatch {
                expected: self.dimension(),
                got: other.dimension(),
            });
        }
        Ok(self.product(other))
    }

    /// Matrix power `self^exponent`, with `self^0` the identity.
    ///
    /// Uses binary exponentiation over matrix products, never elementwise powers.
    pub fn power(&self, exponent: u32) -> Self {
        let mut result = Self::identity(self.dimension());
        let mut base = self.clone();
        let mut e = exponent;
        while e > 0 {
            if e & 1 == 1 {
                result = result.product(&base);
            }
            e >>= 1;
            if e > 0 {
                base = base.product(&base);
            }
        }
        result
    }

    /// Eigenvalues of a symmetric matrix, in backend order.
    pub fn symmetric_eigenvalues(&self) -> Vec<T> {
        T::symmetric_eigenvalues(self.as_slice(), self.dimension())
    }

    /// Product of two matrices of equal dimension.
    pub(crate) fn product(&self, other: &Self) -> Self {
        let n = self.dimension();
        let data = T::matrix_product(self.as_slice(), other.as_slice(), n);
        Self::from_parts(data, n)
    }
}

// ============================================================================
// Spectral Utilities
// ============================================================================

/// Number of eigenvalues that are numerically non-zero.
///
/// An eigenvalue counts as zero when `|λ| <= n * eps * max|λ|`.
pub fn effective_rank<T: Float>(eigenvalues: &[T]) -> usize {
    let largest = eigenvalues
        .iter()
        .fold(T::zero(), |acc, &v| acc.max(v.abs()));
    if largest == T::zero() {
        return 0;
    }

    let n = T::from(eigenvalues.len()).unwrap_or_else(T::nan);
    let threshold = n * T::epsilon() * largest;
    eigenvalues.iter().filter(|v| v.abs() > threshold).count()
}
