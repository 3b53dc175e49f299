//! Direct solution of the central-difference system for -u'' = f by the Thomas algorithm.
//!
//! ```
//! use RustedFDM::numerical::FD_BVP::direct_solver::solve_direct;
//! use RustedFDM::numerical::FD_BVP::solution::BoundaryConditions;
//! let bc = BoundaryConditions::new(0.0, 0.0);
//! // -u'' = 2, exact solution x(1-x) is reproduced to rounding
//! let solution = solve_direct(9, &|_x: f64| 2.0, &bc);
//! assert_eq!(solution.len(), 11);
//! assert!((solution.value(5) - 0.25).abs() < 1e-12);
//! ```
use crate::numerical::FD_BVP::assembly::{build_grid, build_rhs, mesh_step, with_boundaries};
use crate::numerical::FD_BVP::error_metrics::discrete_residual;
use crate::numerical::FD_BVP::solution::{BoundaryConditions, Solution};
use crate::somelinalg::tridiagonal::TridiagonalSystem;
use log::info;

/// Solve the n x n (-1, 2, -1) system in O(n). Always one "iteration".
/// The matrix is irreducibly diagonally dominant, so the Thomas pivots never vanish.
pub fn solve_direct<F>(n: usize, f: &F, bc: &BoundaryConditions) -> Solution
where
    F: Fn(f64) -> f64,
{
    let h = mesh_step(n);
    let b = build_rhs(n, f, bc);
    let matrix = TridiagonalSystem::laplacian_1d(n);
    let interior = matrix.solve(&b);
    let u = with_boundaries(&interior, bc);
    let x = build_grid(n);
    let residual = discrete_residual(&u, h, f);
    info!(
        "direct solver: n = {}, h = {:.3e}, {}, residual = {:.3e}",
        n, h, bc, residual
    );
    Solution::new(u, x, 1, residual)
}
