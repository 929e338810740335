//! k-Simplicial distance benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Elementary symmetric evaluation (combinations vs recurrence)
//! - S matrix construction across dimensions and degrees
//! - Batch quadratic-form distances
//!
//! Run with: `cargo bench`

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::prelude::*;
use rand_distr::Normal;
use simplicial_distance::prelude::*;
use std::hint::black_box;

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Generate Gaussian samples with per-dimension scales.
fn generate_samples(count: usize, dimensions: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let normal = Normal::new(0.0, 1.0).unwrap();
    (0..count * dimensions)
        .map(|i| normal.sample(&mut rng) * (1.0 + (i % dimensions) as f64))
        .collect()
}

/// Generate a well-conditioned covariance matrix.
fn generate_covariance(dimensions: usize, seed: u64) -> SquareMatrix<f64> {
    let samples = generate_samples(dimensions * 20, dimensions, seed);
    covariance(&samples, dimensions, Sample).unwrap()
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_elementary_symmetric(c: &mut Criterion) {
    let mut group = c.benchmark_group("elementary_symmetric");
    group.sample_size(100);

    let mut rng = StdRng::seed_from_u64(42);
    for n in [4, 8, 12, 16] {
        let values: Vec<f64> = (0..n).map(|_| rng.gen_range(0.1..4.0)).collect();
        let k = n / 2;

        group.bench_with_input(BenchmarkId::new("combinations", n), &values, |b, v| {
            b.iter(|| Combinations.evaluate(black_box(k), black_box(v)))
        });
        group.bench_with_input(BenchmarkId::new("recurrence", n), &values, |b, v| {
            b.iter(|| Recurrence.evaluate(black_box(k), black_box(v)))
        });
    }

    group.finish();
}

fn bench_s_matrix(c: &mut Criterion) {
    let mut group = c.benchmark_group("s_matrix");
    group.sample_size(50);

    for n in [2, 4, 8, 12] {
        let cov = generate_covariance(n, 7);
        for k in [1, n / 2, n] {
            if k == 0 {
                continue;
            }
            group.bench_with_input(
                BenchmarkId::new(format!("n{}", n), k),
                &(k, &cov),
                |b, &(k, cov)| b.iter(|| s_matrix(black_box(k), black_box(cov)).unwrap()),
            );
        }
    }

    group.finish();
}

fn bench_distances(c: &mut Criterion) {
    let mut group = c.benchmark_group("distances_to");
    group.sample_size(50);

    let dimensions = 8;
    let cov = generate_covariance(dimensions, 11);
    let metric = SimplicialDistance::new()
        .degree(4)
        .method(Recurrence)
        .build(&cov)
        .unwrap();
    let query = vec![0.0; dimensions];

    for count in [100, 1_000, 10_000] {
        let points = generate_samples(count, dimensions, 13);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &points, |b, p| {
            b.iter(|| metric.distances_to(black_box(&query), black_box(p)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_elementary_symmetric,
    bench_s_matrix,
    bench_distances
);
criterion_main!(benches);
