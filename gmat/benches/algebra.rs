//! Benchmarks for cofactor expansion, products and structural edits

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use gmat::Matrix;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_matrix(rows: usize, columns: usize, seed: u64) -> Matrix<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let data = (0..rows * columns).map(|_| rng.gen_range(-1.0..1.0)).collect();
    Matrix::from_vec(data, rows, columns).unwrap()
}

fn bench_determinant(c: &mut Criterion) {
    let mut group = c.benchmark_group("determinant");

    // Factorial growth: keep sizes small
    for size in [2, 4, 6, 8] {
        let matrix = random_matrix(size, size, size as u64);
        group.bench_with_input(BenchmarkId::from_parameter(size), &matrix, |b, m| {
            b.iter(|| black_box(m.determinant().unwrap()))
        });
    }

    group.finish();
}

fn bench_inverse(c: &mut Criterion) {
    let matrix = random_matrix(5, 5, 11);
    c.bench_function("inverse_5x5", |b| b.iter(|| black_box(matrix.inverse().unwrap())));
}

fn bench_multiply(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiply");

    for size in [16, 64, 128] {
        let a = random_matrix(size, size, 1);
        let b_matrix = random_matrix(size, size, 2);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| black_box(a.multiply(&b_matrix).unwrap()))
        });
    }

    group.finish();
}

fn bench_structural_edits(c: &mut Criterion) {
    let mut group = c.benchmark_group("structural_edits");
    let base = random_matrix(256, 256, 3);

    group.bench_function("insert_remove_row", |b| {
        let mut m = base.clone();
        b.iter(|| {
            m.insert_row(vec![0.0; 256], 128).unwrap();
            black_box(m.remove_row(128).unwrap());
        })
    });

    group.bench_function("insert_remove_column", |b| {
        let mut m = base.clone();
        b.iter(|| {
            m.insert_column(vec![0.0; 256], 128).unwrap();
            black_box(m.remove_column(128).unwrap());
        })
    });

    group.bench_function("transpose", |b| b.iter(|| black_box(base.transpose())));

    group.finish();
}

criterion_group!(
    benches,
    bench_determinant,
    bench_inverse,
    bench_multiply,
    bench_structural_edits
);
criterion_main!(benches);
