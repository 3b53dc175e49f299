use RustedFDM::numerical::FD_BVP::direct_solver::solve_direct;
use RustedFDM::numerical::FD_BVP::gauss_seidel::solve_sor;
use RustedFDM::numerical::FD_BVP::solution::BoundaryConditions;
use criterion::{Criterion, criterion_group, criterion_main};
use std::f64::consts::PI;
use std::hint::black_box;

fn source(x: f64) -> f64 {
    4.0 * PI * PI * (2.0 * PI * x).sin()
}

fn bench_direct(c: &mut Criterion) {
    let bc = BoundaryConditions::new(0.0, 0.0);
    let mut group = c.benchmark_group("Thomas");
    for n in [100usize, 1000, 10000] {
        group.bench_function(format!("n = {}", n), |b| {
            b.iter(|| solve_direct(black_box(n), &source, &bc))
        });
    }
    group.finish();
}

fn bench_sor(c: &mut Criterion) {
    let bc = BoundaryConditions::new(0.0, 0.0);
    let mut group = c.benchmark_group("SOR n = 50");
    for omega in [1.0, 1.5, 1.88] {
        group.bench_function(format!("omega = {}", omega), |b| {
            b.iter(|| solve_sor(50, &source, &bc, black_box(omega)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_direct, bench_sor);
criterion_main!(benches);
