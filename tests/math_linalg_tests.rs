#![cfg(feature = "dev")]
//! Tests for the nalgebra bridge and spectral utilities.

use approx::assert_relative_eq;
use simplicial_distance::internals::math::linalg::{effective_rank, nalgebra_backend, FloatLinalg};

// ============================================================================
// Backend Operations
// ============================================================================

#[test]
fn test_matrix_product_row_major() {
    let a = [1.0, 2.0, 3.0, 4.0];
    let b = [5.0, 6.0, 7.0, 8.0];
    let c = nalgebra_backend::matrix_product(&a, &b, 2);
    assert_eq!(c, vec![19.0, 22.0, 43.0, 50.0]);
}

#[test]
fn test_quadratic_form() {
    let m = [1.0, 2.0, 3.0, 4.0];
    assert_relative_eq!(nalgebra_backend::quadratic_form(&[1.0, 2.0], &m, 2), 27.0);
}

#[test]
fn test_symmetric_eigenvalues() {
    let m = [4.0, 1.0, 0.0, 1.0, 3.0, 1.0, 0.0, 1.0, 2.0];
    let eig = nalgebra_backend::symmetric_eigenvalues(&m, 3);
    assert_eq!(eig.len(), 3);
    // trace and determinant are preserved
    assert_relative_eq!(eig.iter().sum::<f64>(), 9.0, epsilon = 1e-12);
    assert_relative_eq!(eig.iter().product::<f64>(), 18.0, epsilon = 1e-10);
}

#[test]
fn test_trait_dispatch_f32() {
    let c = <f32 as FloatLinalg>::matrix_product(&[1.0, 0.0, 0.0, 1.0], &[2.0, 3.0, 4.0, 5.0], 2);
    assert_eq!(c, vec![2.0_f32, 3.0, 4.0, 5.0]);

    let q = <f32 as FloatLinalg>::quadratic_form(&[1.0, 1.0], &[1.0, 0.0, 0.0, 1.0], 2);
    assert_relative_eq!(q, 2.0_f32);

    let eig = <f32 as FloatLinalg>::symmetric_eigenvalues(&[3.0, 0.0, 0.0, 1.0], 2);
    assert_relative_eq!(eig.iter().sum::<f32>(), 4.0, epsilon = 1e-6);
}

// ============================================================================
// Effective Rank
// ============================================================================

#[test]
fn test_effective_rank_full() {
    assert_eq!(effective_rank(&[3.0, 1.0, 0.5]), 3);
}

#[test]
fn test_effective_rank_with_zero() {
    assert_eq!(effective_rank(&[3.0, 0.0]), 1);
    assert_eq!(effective_rank(&[3.0, 1e-17, -2e-17]), 1);
}

#[test]
fn test_effective_rank_all_zero() {
    assert_eq!(effective_rank(&[0.0, 0.0]), 0);
    assert_eq!(effective_rank::<f64>(&[]), 0);
}

#[test]
fn test_effective_rank_counts_negative() {
    assert_eq!(effective_rank(&[2.0, -1.0]), 2);
}
