//! Benchmarks for factorizations and solvers.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use densa::linalg::{
    Buffer, CholeskyMode, CholeskyPolicy, CholeskySolver, Crout, DirectSolver, Doolittle,
    FullPivoting, GaussSeidel, GaussianSolver, Givens, GramSchmidt, Householder,
    IterativeCholesky, IterativeConfig, IterativeSolver, Jacobi, LuPolicy, LuSolver,
    ModifiedGramSchmidt, QrPolicy, QrSolver, RecursiveCholesky,
};

/// Symmetric and strictly diagonally dominant, so every strategy applies.
fn dominant(n: usize) -> Buffer<f64> {
    Buffer::from_fn(n, n, |i, j| {
        if i == j {
            2.0 * n as f64
        } else {
            1.0 / (1.0 + (i + j) as f64)
        }
    })
}

fn bench_lu(c: &mut Criterion) {
    let mut group = c.benchmark_group("lu");
    for n in [8, 32, 64] {
        let a = dominant(n);
        group.bench_with_input(BenchmarkId::new("doolittle", n), &a, |b, a| {
            b.iter(|| Doolittle::factor(black_box(a)));
        });
        group.bench_with_input(BenchmarkId::new("crout", n), &a, |b, a| {
            b.iter(|| Crout::factor(black_box(a)));
        });
        group.bench_with_input(BenchmarkId::new("full_pivoting", n), &a, |b, a| {
            b.iter(|| FullPivoting::factor(black_box(a)));
        });
    }
    group.finish();
}

fn bench_qr(c: &mut Criterion) {
    let mut group = c.benchmark_group("qr");
    for n in [8, 32, 64] {
        let a = dominant(n);
        group.bench_with_input(BenchmarkId::new("gram_schmidt", n), &a, |b, a| {
            b.iter(|| GramSchmidt::factor(black_box(a)));
        });
        group.bench_with_input(BenchmarkId::new("modified_gram_schmidt", n), &a, |b, a| {
            b.iter(|| ModifiedGramSchmidt::factor(black_box(a)));
        });
        group.bench_with_input(BenchmarkId::new("householder", n), &a, |b, a| {
            b.iter(|| Householder::factor(black_box(a)));
        });
        group.bench_with_input(BenchmarkId::new("givens", n), &a, |b, a| {
            b.iter(|| Givens::factor(black_box(a)));
        });
    }
    group.finish();
}

fn bench_cholesky(c: &mut Criterion) {
    let mut group = c.benchmark_group("cholesky");
    for n in [8, 32, 64] {
        let a = dominant(n);
        group.bench_with_input(BenchmarkId::new("iterative", n), &a, |b, a| {
            b.iter(|| IterativeCholesky::factor(black_box(a), CholeskyMode::Strict));
        });
        group.bench_with_input(BenchmarkId::new("recursive", n), &a, |b, a| {
            b.iter(|| RecursiveCholesky::factor(black_box(a), CholeskyMode::Strict));
        });
    }
    group.finish();
}

fn bench_solvers(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");
    let config = IterativeConfig::default();
    for n in [8, 32, 64] {
        let a = dominant(n);
        let rhs: Vec<f64> = (0..n).map(|i| i as f64).collect();
        group.bench_with_input(BenchmarkId::new("gaussian", n), &n, |b, _| {
            b.iter(|| GaussianSolver::solve(black_box(&a), black_box(&rhs)));
        });
        group.bench_with_input(BenchmarkId::new("lu", n), &n, |b, _| {
            b.iter(|| LuSolver::solve(black_box(&a), black_box(&rhs)));
        });
        group.bench_with_input(BenchmarkId::new("cholesky", n), &n, |b, _| {
            b.iter(|| CholeskySolver::solve(black_box(&a), black_box(&rhs)));
        });
        group.bench_with_input(BenchmarkId::new("qr", n), &n, |b, _| {
            b.iter(|| QrSolver::solve(black_box(&a), black_box(&rhs)));
        });
        group.bench_with_input(BenchmarkId::new("jacobi", n), &n, |b, _| {
            b.iter(|| Jacobi::solve(black_box(&a), black_box(&rhs), &config));
        });
        group.bench_with_input(BenchmarkId::new("gauss_seidel", n), &n, |b, _| {
            b.iter(|| GaussSeidel::solve(black_box(&a), black_box(&rhs), &config));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_lu, bench_qr, bench_cholesky, bench_solvers);
criterion_main!(benches);
