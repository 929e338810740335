//! Elementary symmetric polynomials of eigenvalue sets.
//!
//! ## Purpose
//!
//! This module computes `e_k(λ)`, the sum over every k-element subset of
//! the values of the product of that subset. It is the scalar building block
//! of both the Q matrix and the S normalizer.
//!
//! ## Design notes
//!
//! * **Combinations**: The reference method enumerates every k-subset of
//!   indices in lexicographic order. Cost is `C(n, k) * k`, fine for the
//!   small dimensions covariance matrices usually have.
//! * **Recurrence**: `e_j <- e_j + x * e_{j-1}` over the values yields the
//!   whole table `e_0..=e_k` in `O(n * k)`.
//!
//! ## Key concepts
//!
//! * `e_0 = 1` (empty product) for any input, including an empty one.
//! * `e_k = 0` whenever `k > n` (no k-subsets exist).
//! * `e_1` is the trace and `e_n` the determinant when the values are eigenvalues.
//!
//! ## Invariants
//!
//! * Results are invariant under permutation of the values.
//! * Both methods agree up to floating-point rounding.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// Method Selection
// ============================================================================

/// Strategy for evaluating elementary symmetric polynomials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SymmetricMethod {
    /// Explicit enumeration of every k-subset of indices.
    #[default]
    Combinations,

    /// Incremental recurrence over the values.
    Recurrence,
}

impl SymmetricMethod {
    /// Evaluate `e_k(values)`.
    pub fn evaluate<T: Float>(self, k: usize, values: &[T]) -> T {
        match self {
            Self::Combinations => elementary_symmetric(k, values),
            Self::Recurrence => elementary_symmetric_upto(k, values)[k],
        }
    }

    /// Evaluate the table `[e_0, e_1, ..., e_k]`.
    pub fn evaluate_upto<T: Float>(self, k: usize, values: &[T]) -> Vec<T> {
        match self {
            Self::Combinations => (0..=k).map(|j| elementary_symmetric(j, values)).collect(),
            Self::Recurrence => elementary_symmetric_upto(k, values),
        }
    }
}

// ============================================================================
// Combination Enumeration
// ============================================================================

/// Elementary symmetric polynomial of degree `k` by subset enumeration.
pub fn elementary_symmetric<T: Float>(k: usize, values: &[T]) -> T {
    if k == 0 {
        return T::one();
    }

    let n = values.len();
    if k > n {
        return T::zero();
    }

    let mut indices: Vec<usize> = (0..k).collect();
    let mut total = T::zero();
    loop {
        let product = indices
            .iter()
            .fold(T::one(), |acc, &i| acc * values[i]);
        total = total + product;

        if !next_combination(&mut indices, n) {
            return total;
        }
    }
}

/// Advance `indices` to the next k-subset of `0..n` in lexicographic order.
///
/// Returns `false` once the last subset has been visited.
fn next_combination(indices: &mut [usize], n: usize) -> bool {
    let k = indices.len();

    // Rightmost slot that has not reached its maximum value `n - k + pos`.
    let Some(pos) = (0..k).rev().find(|&pos| indices[pos] < n - k + pos) else {
        return false;
    };

    indices[pos] += 1;
    for j in (pos + 1)..k {
        indices[j] = indices[j - 1] + 1;
    }
    true
}

// ============================================================================
// Recurrence
// ============================================================================

/// Table `[e_0, ..., e_k]` built by folding in one value at a time.
pub fn elementary_symmetric_upto<T: Float>(k: usize, values: &[T]) -> Vec<T> {
    let mut table = vec![T::zero(); k + 1];
    table[0] = T::one();

    for (seen, &x) in values.iter().enumerate() {
        // Descending so each e_{j-1} still holds the previous prefix's value.
        for j in (1..=k.min(seen + 1)).rev() {
            table[j] = table[j] + x * table[j - 1];
        }
    }

    table
}
