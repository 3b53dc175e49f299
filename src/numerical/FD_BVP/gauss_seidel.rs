//! Gauss-Seidel / successive over-relaxation (SOR) for the central-difference
//! system of -u'' = f. Updates are done in place in increasing index order,
//! so every sweep already uses the freshly updated left neighbour.
use crate::numerical::FD_BVP::assembly::{build_grid, build_source_term, mesh_step};
use crate::numerical::FD_BVP::error_metrics::discrete_residual;
use crate::numerical::FD_BVP::solution::{BoundaryConditions, Solution};
use log::{debug, info, warn};
use nalgebra::DVector;

pub const DEFAULT_TOLERANCE: f64 = 1e-10;
pub const DEFAULT_MAX_ITERATIONS: usize = 10000;

/// stopping and relaxation parameters of the iterative solver
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterativeParams {
    /// stop when max |u_new - u_old| over one sweep is <= tolerance
    pub tolerance: f64,
    pub max_iterations: usize,
    /// omega: 1.0 is plain Gauss-Seidel, (1,2) over-relaxation, (0,1) under-relaxation
    pub relaxation: f64,
}

impl Default for IterativeParams {
    fn default() -> Self {
        IterativeParams {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            relaxation: 1.0,
        }
    }
}

impl IterativeParams {
    pub fn new(tolerance: f64, max_iterations: usize, relaxation: f64) -> IterativeParams {
        IterativeParams {
            tolerance,
            max_iterations,
            relaxation,
        }
    }
    /// default tolerance and cap with relaxation factor omega
    pub fn sor(omega: f64) -> IterativeParams {
        IterativeParams {
            relaxation: omega,
            ..IterativeParams::default()
        }
    }
}

/// Relaxation sweeps until the per-sweep change drops to the tolerance or the cap is hit.
/// Hitting the cap is not an error: the returned iteration count equals `max_iterations`.
pub fn solve_iterative<F>(
    n: usize,
    f: &F,
    bc: &BoundaryConditions,
    params: &IterativeParams,
) -> Solution
where
    F: Fn(f64) -> f64,
{
    let omega = params.relaxation;
    if !(omega > 0.0 && omega < 2.0) {
        warn!("relaxation factor {} is outside (0, 2), iterations will not converge", omega);
    }
    let h = mesh_step(n);
    let x = build_grid(n);
    // h^2 f(x_i), evaluated once
    let source = build_source_term(n, f);
    // initial guess: straight line between the boundary values
    let mut u = DVector::from_fn(n + 2, |i, _| bc.linear_interpolation(x[i]));
    u[0] = bc.u0();
    u[n + 1] = bc.u1();

    let mut iterations = 0;
    let mut error = f64::MAX;
    while error > params.tolerance && iterations < params.max_iterations {
        let mut max_change: f64 = 0.0;
        for i in 1..=n {
            let old = u[i];
            let gs_value = 0.5 * (u[i - 1] + u[i + 1] + source[i - 1]);
            u[i] = (1.0 - omega) * old + omega * gs_value;
            max_change = max_change.max((u[i] - old).abs());
        }
        error = max_change;
        iterations += 1;
        if iterations % 1000 == 0 {
            debug!("sweep {}: max change = {:.3e}", iterations, error);
        }
    }

    let residual = discrete_residual(&u, h, f);
    if error > params.tolerance {
        warn!(
            "iteration cap {} reached, last change {:.3e} > tolerance {:.3e}",
            params.max_iterations, error, params.tolerance
        );
    } else {
        info!(
            "SOR (omega = {}) converged: n = {}, {} sweeps, residual = {:.3e}",
            omega, n, iterations, residual
        );
    }
    Solution::new(u, x, iterations, residual)
}

/// plain Gauss-Seidel with default tolerance and cap
pub fn solve_gauss_seidel<F>(n: usize, f: &F, bc: &BoundaryConditions) -> Solution
where
    F: Fn(f64) -> f64,
{
    solve_iterative(n, f, bc, &IterativeParams::default())
}

/// SOR with default tolerance and cap
pub fn solve_sor<F>(n: usize, f: &F, bc: &BoundaryConditions, omega: f64) -> Solution
where
    F: Fn(f64) -> f64,
{
    solve_iterative(n, f, bc, &IterativeParams::sor(omega))
}
