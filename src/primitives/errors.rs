//! Error types for simplicial distance computation.
//!
//! ## Purpose
//!
//! This module defines the single error enum returned by every fallible
//! operation in the crate, from matrix construction to the fitted metric.
//!
//! ## Design notes
//!
//! * **Structured**: Variants carry the offending sizes or indices.
//! * **no_std-friendly**: `Display` is hand-written; `std::error::Error` is
//!   implemented only with the `std` feature.
//!
//! ## Key concepts
//!
//! * **Shape errors**: `EmptyInput`, `NotSquare`, `DimensionMismatch`.
//! * **Argument errors**: `NotSymmetric`, `InvalidDegree`, `InvalidTolerance`,
//!   `InvalidNumericValue`, `TooFewSamples`, `DuplicateParameter`.
//! * **Degeneracy**: `DegenerateDistance`, raised only when the caller opts
//!   into fail-fast handling of a vanishing normalizer.
//!
//! ## Non-goals
//!
//! * This module does not perform any validation itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;

use core::fmt;

/// Errors produced while building or applying a simplicial distance.
#[derive(Debug, Clone, PartialEq)]
pub enum SimplicialError {
    /// A matrix or sample set has no entries.
    EmptyInput,

    /// Matrix data does not describe a square matrix.
    NotSquare {
        /// Number of rows supplied.
        rows: usize,
        /// Number of columns in the first offending row.
        cols: usize,
    },

    /// Vector or matrix dimensions disagree.
    DimensionMismatch {
        /// Dimension required by the matrix.
        expected: usize,
        /// Dimension actually supplied.
        got: usize,
    },

    /// Covariance matrix is not symmetric within tolerance.
    NotSymmetric {
        /// Row of the first asymmetric entry.
        row: usize,
        /// Column of the first asymmetric entry.
        col: usize,
    },

    /// Simplicial degree outside `1..=dimension`.
    InvalidDegree {
        /// Requested degree.
        degree: usize,
        /// Matrix dimension.
        dimension: usize,
    },

    /// Symmetry tolerance is negative or not finite.
    InvalidTolerance(f64),

    /// Input contains NaN or infinite values.
    InvalidNumericValue(String),

    /// Not enough samples to estimate a covariance matrix.
    TooFewSamples {
        /// Number of samples supplied.
        got: usize,
        /// Minimum number required.
        min: usize,
    },

    /// The elementary symmetric normalizer vanishes for this degree.
    DegenerateDistance {
        /// Requested degree.
        degree: usize,
        /// Effective rank of the covariance matrix.
        rank: usize,
    },

    /// A builder parameter was configured more than once.
    DuplicateParameter {
        /// Name of the repeated parameter.
        parameter: &'static str,
    },
}

impl fmt::Display for SimplicialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "Input is empty"),
            Self::NotSquare { rows, cols } => {
                write!(f, "Matrix is not square: {} rows, row with {} columns", rows, cols)
            }
            Self::DimensionMismatch { expected, got } => {
                write!(f, "Dimension mismatch: expected {}, got {}", expected, got)
            }
            Self::NotSymmetric { row, col } => write!(
                f,
                "Covariance is not symmetric: entry ({}, {}) differs from ({}, {})",
                row, col, col, row
            ),
            Self::InvalidDegree { degree, dimension } => write!(
                f,
                "Invalid degree: {} (must be in [1, {}])",
                degree, dimension
            ),
            Self::InvalidTolerance(tol) => {
                write!(f, "Invalid tolerance: {} (must be >= 0 and finite)", tol)
            }
            Self::InvalidNumericValue(msg) => write!(f, "Invalid numeric value: {}", msg),
            Self::TooFewSamples { got, min } => {
                write!(f, "Too few samples: got {}, need at least {}", got, min)
            }
            Self::DegenerateDistance { degree, rank } => write!(
                f,
                "Degenerate distance: normalizer vanishes for degree {} (effective rank {})",
                degree, rank
            ),
            Self::DuplicateParameter { parameter } => write!(
                f,
                "Parameter '{}' was set multiple times. Each parameter can only be configured once.",
                parameter
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SimplicialError {}
