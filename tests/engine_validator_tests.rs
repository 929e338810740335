#![cfg(feature = "dev")]
//! Tests for input validation.

use simplicial_distance::internals::engine::validator::Validator;
use simplicial_distance::internals::primitives::errors::SimplicialError;
use simplicial_distance::internals::primitives::matrix::SquareMatrix;

// ============================================================================
// Data Validation
// ============================================================================

#[test]
fn test_validate_covariance_finite() {
    let ok = SquareMatrix::from_rows(&[[1.0, 0.0], [0.0, 1.0]]).unwrap();
    assert!(Validator::validate_covariance(&ok).is_ok());

    let bad = SquareMatrix::from_rows(&[[1.0, 0.0], [f64::NAN, 1.0]]).unwrap();
    match Validator::validate_covariance(&bad) {
        Err(SimplicialError::InvalidNumericValue(msg)) => {
            assert!(msg.starts_with("covariance[1][0]"), "got {}", msg)
        }
        other => panic!("expected InvalidNumericValue, got {:?}", other),
    }

    let inf = SquareMatrix::from_rows(&[[1.0, 0.0], [0.0, f64::INFINITY]]).unwrap();
    assert!(Validator::validate_covariance(&inf).is_err());
}

#[test]
fn test_validate_covariance_rejects_empty() {
    assert_eq!(
        Validator::validate_covariance(&SquareMatrix::<f64>::zeros(0)),
        Err(SimplicialError::EmptyInput)
    );
}

#[test]
fn test_validate_samples() {
    assert!(Validator::validate_samples(&[1.0, 2.0, 3.0, 4.0], 2).is_ok());
    assert_eq!(
        Validator::validate_samples::<f64>(&[], 2),
        Err(SimplicialError::EmptyInput)
    );
    assert_eq!(
        Validator::validate_samples(&[1.0, 2.0], 0),
        Err(SimplicialError::EmptyInput)
    );
    match Validator::validate_samples(&[1.0, 2.0, 3.0, f64::NAN], 2) {
        Err(SimplicialError::InvalidNumericValue(msg)) => {
            assert!(msg.starts_with("samples[1][1]"), "got {}", msg)
        }
        other => panic!("expected InvalidNumericValue, got {:?}", other),
    }
}

// ============================================================================
// Parameter Validation
// ============================================================================

#[test]
fn test_validate_degree() {
    assert!(Validator::validate_degree(1, 3).is_ok());
    assert!(Validator::validate_degree(3, 3).is_ok());
    assert_eq!(
        Validator::validate_degree(0, 3),
        Err(SimplicialError::InvalidDegree {
            degree: 0,
            dimension: 3
        })
    );
    assert_eq!(
        Validator::validate_degree(4, 3),
        Err(SimplicialError::InvalidDegree {
            degree: 4,
            dimension: 3
        })
    );
}

#[test]
fn test_validate_tolerance() {
    assert!(Validator::validate_tolerance(0.0).is_ok());
    assert!(Validator::validate_tolerance(1e-9).is_ok());
    assert_eq!(
        Validator::validate_tolerance(-1.0),
        Err(SimplicialError::InvalidTolerance(-1.0))
    );
    assert!(Validator::validate_tolerance(f64::INFINITY).is_err());
    assert!(Validator::validate_tolerance(f64::NAN).is_err());
}

#[test]
fn test_validate_no_duplicates() {
    assert!(Validator::validate_no_duplicates(None).is_ok());
    assert_eq!(
        Validator::validate_no_duplicates(Some("degree")),
        Err(SimplicialError::DuplicateParameter { parameter: "degree" })
    );
}
