//! Benchmark of a small budget sweep through the proximal solver.

use criterion::{Criterion, criterion_group, criterion_main};
use hobart_estimation::EstimationPipeline;
use hobart_solver::ProximalSolver;
use ndarray::Array2;

/// Tridiagonal SPD test covariance.
fn test_covariance(n: usize) -> Array2<f64> {
    let mut y = Array2::<f64>::zeros((n, n));
    for i in 0..n {
        y[[i, i]] = 2.0;
        if i + 1 < n {
            y[[i, i + 1]] = 0.5;
            y[[i + 1, i]] = 0.5;
        }
    }
    y
}

fn bench_sweep(c: &mut Criterion) {
    let y = test_covariance(6);
    let pipeline = EstimationPipeline::new(ProximalSolver::default());

    c.bench_function("sweep_6x6_three_budgets", |b| {
        b.iter(|| pipeline.sweep(&y, &[4.0, 2.0, 1.0]).unwrap())
    });
}

criterion_group!(benches, bench_sweep);
criterion_main!(benches);
