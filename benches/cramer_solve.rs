use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use nalgebra::{DMatrix, DVector};

use circuit_lab::linalg::solve_cramer;
use circuit_lab::math::{CScalar, Scalar};

fn build_real_system() -> (DMatrix<Scalar>, DVector<Scalar>) {
    // Conductance matrix shape from the DC nodal worksheet.
    let a = DMatrix::from_row_slice(
        3,
        3,
        &[
            0.054, -0.015, 0.0, //
            -0.015, 0.046, -0.031, //
            0.0, -0.031, 0.056,
        ],
    );
    let b = DVector::from_vec(vec![2.264, 0.9, -0.2]);
    (a, b)
}

fn build_complex_system() -> (DMatrix<CScalar>, DVector<CScalar>) {
    // Loop matrix shape from the AC mesh worksheet.
    let j = CScalar::new(0.0, 1.0);
    let a = DMatrix::from_row_slice(
        3,
        3,
        &[
            12.0 + j * 32.6,
            -j * 44.0,
            j * 11.4,
            -j * 44.0,
            14.0 + j * 22.3,
            CScalar::new(-14.0, 0.0),
            j * 11.4,
            CScalar::new(-14.0, 0.0),
            14.0 + j * 41.4,
        ],
    );
    let b = DVector::from_vec(vec![
        CScalar::new(-35.0, 0.0),
        CScalar::new(-55.0, 0.0),
        CScalar::default(),
    ]);
    (a, b)
}

fn bench_cramer(c: &mut Criterion) {
    let mut group = c.benchmark_group("cramer_solve");

    group.bench_function(BenchmarkId::new("real", 3), |b| {
        b.iter_batched(
            build_real_system,
            |(a, rhs)| solve_cramer(&a, &rhs),
            BatchSize::SmallInput,
        )
    });

    group.bench_function(BenchmarkId::new("complex", 3), |b| {
        b.iter_batched(
            build_complex_system,
            |(a, rhs)| solve_cramer(&a, &rhs),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_cramer);
criterion_main!(benches);
