//! Input validation for simplicial distance configuration and data.
//!
//! ## Purpose
//!
//! This module provides the fail-fast checks the high-level API runs before
//! building an S matrix: finite inputs, degree bounds and builder hygiene.
//! Symmetry is checked where the S matrix is computed.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Degree Bounds**: The simplicial degree must lie in `1..=n`.
//! * **Finite Checks**: Covariance entries and samples must be finite.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not symmetrize, clamp or otherwise repair inputs.
//! * This module does not detect rank deficiency (see `algorithms::smatrix`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::SimplicialError;
use crate::primitives::matrix::SquareMatrix;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for simplicial distance configuration and input data.
///
/// Provides static methods that return `Result<(), SimplicialError>` and fail
/// fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Data Validation
    // ========================================================================

    /// Validate that the covariance is non-empty and every entry is finite.
    pub fn validate_covariance<T: Float>(covariance: &SquareMatrix<T>) -> Result<(), SimplicialError> {
        let n = covariance.dimension();
        if n == 0 {
            return Err(SimplicialError::EmptyInput);
        }

        for i in 0..n {
            for (j, &val) in covariance.row(i).iter().enumerate() {
                if !val.is_finite() {
                    return Err(SimplicialError::InvalidNumericValue(format!(
                        "covariance[{}][{}]={}",
                        i,
                        j,
                        val.to_f64().unwrap_or(f64::NAN)
                    )));
                }
            }
        }
        Ok(())
    }

    /// Validate a flat row-major sample set.
    pub fn validate_samples<T: Float>(samples: &[T], dimensions: usize) -> Result<(), SimplicialError> {
        if samples.is_empty() || dimensions == 0 {
            return Err(SimplicialError::EmptyInput);
        }

        for (i, &val) in samples.iter().enumerate() {
            if !val.is_finite() {
                return Err(SimplicialError::InvalidNumericValue(format!(
                    "samples[{}][{}]={}",
                    i / dimensions,
                    i % dimensions,
                    val.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the simplicial degree against the covariance dimension.
    ///
    /// # Notes
    ///
    /// * Degree 0 yields the zero matrix and is rejected here.
    /// * Degrees above `dimension` always have a zero normalizer.
    pub fn validate_degree(degree: usize, dimension: usize) -> Result<(), SimplicialError> {
        if degree == 0 || degree > dimension {
            return Err(SimplicialError::InvalidDegree { degree, dimension });
        }
        Ok(())
    }

    /// Validate the relative symmetry tolerance.
    pub fn validate_tolerance<T: Float>(tol: T) -> Result<(), SimplicialError> {
        if !tol.is_finite() || tol < T::zero() {
            return Err(SimplicialError::InvalidTolerance(
                tol.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), SimplicialError> {
        if let Some(param) = duplicate_param {
            return Err(SimplicialError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
