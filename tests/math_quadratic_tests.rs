//! Tests for quadratic-form distances.

use approx::assert_relative_eq;
use simplicial_distance::prelude::*;

// ============================================================================
// Quadratic Form
// ============================================================================

#[test]
fn test_identity_is_squared_euclidean() {
    let m = SquareMatrix::identity(3);
    let d = distance(&[1.0, 2.0, 3.0], &[4.0, 6.0, 8.0], &m).unwrap();
    assert_relative_eq!(d, 50.0);
}

#[test]
fn test_general_matrix() {
    // d = [1, 2], d' M = [7, 10], d' M d = 27
    let m = SquareMatrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    let d = distance(&[1.0, 2.0], &[0.0, 0.0], &m).unwrap();
    assert_relative_eq!(d, 27.0);
}

#[test]
fn test_same_point_is_zero() {
    let m = SquareMatrix::from_rows(&[[1.0, -2.0], [5.0, 4.0]]).unwrap();
    let x = [0.25, -3.5];
    assert_eq!(distance(&x, &x, &m).unwrap(), 0.0);
}

#[test]
fn test_swap_symmetry() {
    let m = SquareMatrix::from_rows(&[[2.0, 0.5, 0.1], [0.5, 1.0, 0.2], [0.1, 0.2, 3.0]]).unwrap();
    let x1 = [1.0, -2.0, 0.5];
    let x2 = [0.3, 4.0, -1.0];
    let d12 = distance(&x1, &x2, &m).unwrap();
    let d21 = distance(&x2, &x1, &m).unwrap();
    assert_relative_eq!(d12, d21, epsilon = 1e-12);
}

#[test]
fn test_end_to_end_scenario() {
    let cov = SquareMatrix::from_rows(&[[2.0, 0.0], [0.0, 1.0]]).unwrap();
    let s = s_matrix(1, &cov).unwrap();
    let d = distance(&[1.0, 0.0], &[0.0, 0.0], &s).unwrap();
    assert_relative_eq!(d, 1.0 / 3.0, epsilon = 1e-12);
}

#[test]
fn test_f32() {
    let m = SquareMatrix::from_rows(&[[2.0_f32, 0.0], [0.0, 0.5]]).unwrap();
    let d = distance(&[1.0_f32, 2.0], &[0.0, 0.0], &m).unwrap();
    assert_relative_eq!(d, 4.0_f32, epsilon = 1e-6);
}

#[test]
fn test_dimension_mismatch() {
    let m = SquareMatrix::<f64>::identity(2);
    assert_eq!(
        distance(&[1.0, 2.0, 3.0], &[0.0, 0.0], &m).unwrap_err(),
        SimplicialError::DimensionMismatch { expected: 2, got: 3 }
    );
    assert_eq!(
        distance(&[1.0, 2.0], &[0.0], &m).unwrap_err(),
        SimplicialError::DimensionMismatch { expected: 2, got: 1 }
    );
}

// ============================================================================
// Batch Distances
// ============================================================================

#[test]
fn test_distances_to() {
    let m = SquareMatrix::from_rows(&[[1.0, 0.0], [0.0, 4.0]]).unwrap();
    let points = [1.0, 0.0, 0.0, 1.0, 1.0, 1.0];
    let d = distances_to(&[0.0, 0.0], &points, &m).unwrap();
    assert_eq!(d.len(), 3);
    assert_relative_eq!(d[0], 1.0);
    assert_relative_eq!(d[1], 4.0);
    assert_relative_eq!(d[2], 5.0);
}

#[test]
fn test_distances_to_empty_points() {
    let m = SquareMatrix::<f64>::identity(2);
    let d = distances_to(&[0.0, 0.0], &[], &m).unwrap();
    assert!(d.is_empty());
}

#[test]
fn test_distances_to_empty_matrix() {
    let m = SquareMatrix::<f64>::zeros(0);
    assert_eq!(
        distances_to(&[], &[1.0, 2.0], &m).unwrap_err(),
        SimplicialError::EmptyInput
    );
}

#[test]
fn test_distances_to_partial_row() {
    let m = SquareMatrix::<f64>::identity(2);
    assert_eq!(
        distances_to(&[0.0, 0.0], &[1.0, 2.0, 3.0], &m).unwrap_err(),
        SimplicialError::DimensionMismatch { expected: 2, got: 1 }
    );
    assert_eq!(
        distances_to(&[0.0], &[1.0, 2.0], &m).unwrap_err(),
        SimplicialError::DimensionMismatch { expected: 2, got: 1 }
    );
}
