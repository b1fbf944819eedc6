//! Benchmarks for the elimination core.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use matrica_core::Mat;
use matrica_gauss::{classify, determinant, rref};

/// Generates a reproducible random square matrix.
fn random_square(n: usize, seed: u64) -> Mat {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    Mat::random(n, n, -100.0, 100.0, &mut rng)
}

/// Generates a reproducible random augmented matrix.
fn random_augmented(rows: usize, vars: usize, seed: u64) -> Mat {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    Mat::random(rows, vars + 1, -100.0, 100.0, &mut rng)
}

fn bench_determinant(c: &mut Criterion) {
    let mut group = c.benchmark_group("determinant");

    for n in [4, 8, 16, 20] {
        let m = random_square(n, 42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| black_box(determinant(&m).unwrap()));
        });
    }

    group.finish();
}

fn bench_rref(c: &mut Criterion) {
    let mut group = c.benchmark_group("rref");

    for n in [4, 8, 16, 20] {
        let aug = random_augmented(n, n - 1, 42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| black_box(rref(&aug)));
        });
    }

    group.finish();
}

fn bench_classify(c: &mut Criterion) {
    let reduced = rref(&random_augmented(20, 19, 42));
    c.bench_function("classify/20", |b| {
        b.iter(|| black_box(classify(&reduced)));
    });
}

criterion_group!(benches, bench_determinant, bench_rref, bench_classify);
criterion_main!(benches);
