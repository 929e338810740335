//! Dense square matrix storage.
//!
//! ## Purpose
//!
//! This module provides `SquareMatrix`, the immutable value type used for
//! covariance matrices and the derived S and Q matrices.
//!
//! ## Design notes
//!
//! * **Row-major**: Entries are stored row by row in a single `Vec`.
//! * **Validated construction**: Constructors reject empty and ragged input.
//! * **Backend-free**: Products, powers and eigenvalues live in `math::linalg`,
//!   which extends this type through the `FloatLinalg` bridge.
//!
//! ## Invariants
//!
//! * `data.len() == dimension * dimension`.
//! * `new` and `from_rows` only build matrices with `dimension >= 1`.
//!   `identity(0)` and `zeros(0)` are empty; the distance and S-matrix entry
//!   points reject them with `EmptyInput`.
//!
//! ## Non-goals
//!
//! * This module does not implement sparse or rectangular storage.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::ops::Index;
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::SimplicialError;

// ============================================================================
// SquareMatrix
// ============================================================================

/// Dense n x n matrix stored in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct SquareMatrix<T> {
    data: Vec<T>,
    dimension: usize,
}

impl<T: Float> SquareMatrix<T> {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Build a matrix from row-major data.
    pub fn new(data: Vec<T>, dimension: usize) -> Result<Self, SimplicialError> {
        if dimension == 0 || data.is_empty() {
            return Err(SimplicialError::EmptyInput);
        }
        if data.len() != dimension * dimension {
            return Err(SimplicialError::DimensionMismatch {
                expected: dimension * dimension,
                got: data.len(),
            });
        }
        Ok(Self { data, dimension })
    }

    /// Build a matrix from a list of equally long rows.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self, SimplicialError> {
        let n = rows.len();
        if n == 0 {
            return Err(SimplicialError::EmptyInput);
        }

        let mut data = Vec::with_capacity(n * n);
        for row in rows {
            let row = row.as_ref();
            if row.len() != n {
                return Err(SimplicialError::NotSquare {
                    rows: n,
                    cols: row.len(),
                });
            }
            data.extend_from_slice(row);
        }

        Ok(Self { data, dimension: n })
    }

    /// Wrap row-major data whose length is already known to be `dimension^2`.
    pub(crate) fn from_parts(data: Vec<T>, dimension: usize) -> Self {
        debug_assert_eq!(data.len(), dimension * dimension);
        Self { data, dimension }
    }

    /// Identity matrix of the given dimension.
    pub fn identity(dimension: usize) -> Self {
        let mut data = vec![T::zero(); dimension * dimension];
        for i in 0..dimension {
            data[i * dimension + i] = T::one();
        }
        Self { data, dimension }
    }

    /// Zero matrix of the given dimension.
    pub fn zeros(dimension: usize) -> Self {
        Self {
            data: vec![T::zero(); dimension * dimension],
            dimension,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Number of rows (and columns).
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Entry at `(row, col)`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.data[row * self.dimension + col]
    }

    /// Row `i` as a slice.
    #[inline]
    pub fn row(&self, i: usize) -> &[T] {
        &self.data[i * self.dimension..(i + 1) * self.dimension]
    }

    /// Row-major entries.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consume the matrix and return its row-major entries.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    // ========================================================================
    // Elementwise Operations
    // ========================================================================

    /// Transposed copy.
    pub fn transpose(&self) -> Self {
        let n = self.dimension;
        let mut data = Vec::with_capacity(n * n);
        for col in 0..n {
            for row in 0..n {
                data.push(self.get(row, col));
            }
        }
        Self { data, dimension: n }
    }

    /// Copy with every entry divided by `divisor`.
    ///
    /// Division by zero follows IEEE semantics (`inf` or `NaN`).
    pub fn divide(&self, divisor: T) -> Self {
        Self {
            data: self.data.iter().map(|&v| v / divisor).collect(),
            dimension: self.dimension,
        }
    }

    /// In-place `self += factor * other`.
    pub(crate) fn add_scaled(&mut self, other: &Self, factor: T) {
        debug_assert_eq!(self.dimension, other.dimension);
        for (acc, &v) in self.data.iter_mut().zip(other.data.iter()) {
            *acc = *acc + factor * v;
        }
    }

    // ========================================================================
    // Inspection
    // ========================================================================

    /// Largest absolute entry.
    pub fn max_abs(&self) -> T {
        self.data.iter().fold(T::zero(), |acc, &v| acc.max(v.abs()))
    }

    /// True if every entry is finite.
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|v| v.is_finite())
    }

    /// First `(row, col)` with `row < col` whose mirrored entries differ by
    /// more than `tolerance` times the largest absolute entry.
    pub fn first_asymmetry(&self, tolerance: T) -> Option<(usize, usize)> {
        let n = self.dimension;
        let bound = tolerance * self.max_abs();
        for row in 0..n {
            for col in (row + 1)..n {
                if (self.get(row, col) - self.get(col, row)).abs() > bound {
                    return Some((row, col));
                }
            }
        }
        None
    }
}

impl<T> Index<(usize, usize)> for SquareMatrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.data[row * self.dimension + col]
    }
}
