//! Q-function: signed, weighted sum of covariance powers.
//!
//! ## Purpose
//!
//! This module computes
//!
//! ```text
//! Q(k, Σ, λ) = Σ_{i=0}^{k-1} (-1)^i · e_{k-i-1}(λ) · Σ^i
//! ```
//!
//! the numerator of the S matrix.
//!
//! ## Design notes
//!
//! * **Running power**: `Σ^i` is carried from one term to the next, so the
//!   whole sum costs `k - 1` matrix products.
//! * **Explicit zero**: The accumulator starts as the zero matrix of `Σ`'s
//!   shape, so `k = 0` yields a matrix, not a scalar.
//! * **Coefficient table**: `e_0..=e_{k-1}` is evaluated once up front.
//!
//! ## Invariants
//!
//! * `Q(0, Σ, λ)` is the zero matrix.
//! * `Q(1, Σ, λ)` is the identity.
//! * The covariance is never mutated.

// Internal dependencies
use crate::math::linalg::FloatLinalg;
use crate::math::symmetric::SymmetricMethod;
use crate::primitives::errors::SimplicialError;
use crate::primitives::matrix::SquareMatrix;

/// Q matrix using the default elementary symmetric method.
pub fn q_matrix<T: FloatLinalg>(
    k: usize,
    covariance: &SquareMatrix<T>,
    eigenvalues: &[T],
) -> Result<SquareMatrix<T>, SimplicialError> {
    q_matrix_with(SymmetricMethod::default(), k, covariance, eigenvalues)
}

/// Q matrix using an explicit elementary symmetric method.
pub fn q_matrix_with<T: FloatLinalg>(
    method: SymmetricMethod,
    k: usize,
    covariance: &SquareMatrix<T>,
    eigenvalues: &[T],
) -> Result<SquareMatrix<T>, SimplicialError> {
    let n = covariance.dimension();
    if eigenvalues.len() != n {
        return Err(SimplicialError::DimensionMismatch {
            expected: n,
            got: eigenvalues.len(),
        });
    }

    let mut q = SquareMatrix::zeros(n);
    if k == 0 {
        return Ok(q);
    }

    let coefficients = method.evaluate_upto(k - 1, eigenvalues);
    let mut power = SquareMatrix::identity(n);
    for i in 0..k {
        let sign = if i % 2 == 0 { T::one() } else { -T::one() };
        q.add_scaled(&power, sign * coefficients[k - i - 1]);

        if i + 1 < k {
            power = power.product(covariance);
        }
    }

    Ok(q)
}
