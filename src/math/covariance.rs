//! Covariance estimation from samples.
//!
//! ## Purpose
//!
//! This module estimates the covariance matrix that feeds the S-function
//! from a flat, row-major sample set.
//!
//! ## Design notes
//!
//! * **Two-pass**: The mean is computed first, then centered cross-products
//!   are accumulated, which is more stable than the one-pass `E[xy] - E[x]E[y]`.
//! * **Mirrored**: Only the upper triangle is accumulated; the lower triangle
//!   is copied, so the result is exactly symmetric.
//!
//! ## Key concepts
//!
//! * **Sample**: Unbiased estimator, divides by `n - 1`.
//! * **Population**: Maximum-likelihood estimator, divides by `n`.
//!
//! ## Non-goals
//!
//! * This module does not handle missing values or sample weights.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::SimplicialError;
use crate::primitives::matrix::SquareMatrix;

/// Normalization applied to the centered cross-product sums.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CovarianceNormalization {
    /// Divide by `n - 1` (unbiased).
    #[default]
    Sample,

    /// Divide by `n`.
    Population,
}

impl CovarianceNormalization {
    /// Smallest sample count the estimator accepts.
    pub fn min_samples(self) -> usize {
        match self {
            Self::Sample => 2,
            Self::Population => 1,
        }
    }

    fn denominator(self, count: usize) -> usize {
        match self {
            Self::Sample => count - 1,
            Self::Population => count,
        }
    }
}

/// Covariance matrix of row-major `samples` with `dimensions` columns.
pub fn covariance<T: Float>(
    samples: &[T],
    dimensions: usize,
    normalization: CovarianceNormalization,
) -> Result<SquareMatrix<T>, SimplicialError> {
    if dimensions == 0 || samples.is_empty() {
        return Err(SimplicialError::EmptyInput);
    }
    if samples.len() % dimensions != 0 {
        return Err(SimplicialError::DimensionMismatch {
            expected: dimensions,
            got: samples.len() % dimensions,
        });
    }

    let count = samples.len() / dimensions;
    let min = normalization.min_samples();
    if count < min {
        return Err(SimplicialError::TooFewSamples { got: count, min });
    }

    let count_t = T::from(count).unwrap_or_else(T::nan);
    let mut mean = vec![T::zero(); dimensions];
    for row in samples.chunks_exact(dimensions) {
        for (m, &v) in mean.iter_mut().zip(row.iter()) {
            *m = *m + v;
        }
    }
    for m in mean.iter_mut() {
        *m = *m / count_t;
    }

    let mut data = vec![T::zero(); dimensions * dimensions];
    let mut centered: Vec<T> = Vec::with_capacity(dimensions);
    for row in samples.chunks_exact(dimensions) {
        centered.clear();
        centered.extend(row.iter().zip(mean.iter()).map(|(&v, &m)| v - m));
        for i in 0..dimensions {
            for j in i..dimensions {
                data[i * dimensions + j] = data[i * dimensions + j] + centered[i] * centered[j];
            }
        }
    }

    let denom = T::from(normalization.denominator(count)).unwrap_or_else(T::nan);
    for i in 0..dimensions {
        for j in i..dimensions {
            let value = data[i * dimensions + j] / denom;
            data[i * dimensions + j] = value;
            data[j * dimensions + i] = value;
        }
    }

    SquareMatrix::new(data, dimensions)
}
