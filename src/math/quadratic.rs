//! Quadratic-form distances.
//!
//! ## Purpose
//!
//! This module evaluates `(x1 - x2)' M (x1 - x2)` for an arbitrary square
//! matrix `M`. With `M = S(k, Σ)` this is the k-Simplicial distance; with
//! `M = Σ^{-1}` it is the squared Mahalanobis distance.
//!
//! ## Design notes
//!
//! * **Injected backend**: The product runs through `FloatLinalg`, so the
//!   linear algebra capability is part of the type bound, not global state.
//! * **Generic matrix**: No symmetry or definiteness is assumed.
//!
//! ## Invariants
//!
//! * `distance(x, x, M) == 0` for every `M`.
//! * `distance(x1, x2, M) == distance(x2, x1, M)` since `(-d)' M (-d) = d' M d`.
//!
//! ## Non-goals
//!
//! * This module does not take square roots; callers wanting a metric in
//!   the original units apply `sqrt` themselves.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::math::linalg::FloatLinalg;
use crate::primitives::errors::SimplicialError;
use crate::primitives::matrix::SquareMatrix;

/// Quadratic form `(x1 - x2)' matrix (x1 - x2)`.
pub fn distance<T: FloatLinalg>(
    x1: &[T],
    x2: &[T],
    matrix: &SquareMatrix<T>,
) -> Result<T, SimplicialError> {
    let n = matrix.dimension();
    check_length(x1, n)?;
    check_length(x2, n)?;

    let diff: Vec<T> = x1.iter().zip(x2.iter()).map(|(&a, &b)| a - b).collect();
    Ok(T::quadratic_form(&diff, matrix.as_slice(), n))
}

/// Quadratic-form distance from `query` to every row of `points`.
///
/// `points` holds row-major samples of the matrix dimension.
pub fn distances_to<T: FloatLinalg>(
    query: &[T],
    points: &[T],
    matrix: &SquareMatrix<T>,
) -> Result<Vec<T>, SimplicialError> {
    let n = matrix.dimension();
    if n == 0 {
        return Err(SimplicialError::EmptyInput);
    }
    check_length(query, n)?;
    if points.len() % n != 0 {
        return Err(SimplicialError::DimensionMismatch {
            expected: n,
            got: points.len() % n,
        });
    }

    points
        .chunks_exact(n)
        .map(|point| distance(query, point, matrix))
        .collect()
}

#[inline]
fn check_length<T>(v: &[T], n: usize) -> Result<(), SimplicialError> {
    if v.len() != n {
        return Err(SimplicialError::DimensionMismatch {
            expected: n,
            got: v.len(),
        });
    }
    Ok(())
}
