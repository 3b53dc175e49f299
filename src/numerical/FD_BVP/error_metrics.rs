//! Accuracy measures of a finite-difference solution against an analytic reference,
//! empirical convergence order, and the discrete residual used by both solvers.
use crate::numerical::FD_BVP::FD_errors::FDError;
use crate::numerical::FD_BVP::solution::Solution;
use log::debug;
use nalgebra::DVector;

/// L2 norm of (u_num - u_exact) over [0,1], composite trapezoidal rule on the solution grid.
/// The spacing is taken from the first two grid points.
pub fn l2_error<F>(solution: &Solution, exact: &F) -> f64
where
    F: Fn(f64) -> f64,
{
    let x = solution.x_points();
    let u = solution.values();
    if x.len() < 2 {
        return 0.0;
    }
    let h = x[1] - x[0];
    let diff: Vec<f64> = x.iter().zip(u.iter()).map(|(&xi, &ui)| ui - exact(xi)).collect();
    let error: f64 = diff
        .windows(2)
        .map(|w| 0.5 * h * (w[0] * w[0] + w[1] * w[1]))
        .sum();
    error.sqrt()
}

/// max_i |u_num(x_i) - u_exact(x_i)|
pub fn max_error<F>(solution: &Solution, exact: &F) -> f64
where
    F: Fn(f64) -> f64,
{
    solution
        .x_points()
        .iter()
        .zip(solution.values().iter())
        .map(|(&xi, &ui)| (ui - exact(xi)).abs())
        .fold(0.0, f64::max)
}

fn check_samples(errors: &[f64], mesh_sizes: &[f64]) -> Result<(), FDError> {
    if errors.len() != mesh_sizes.len() || errors.len() < 2 {
        return Err(FDError::InvalidConfiguration(format!(
            "convergence order needs at least 2 (error, mesh size) pairs of equal length, got {} errors and {} mesh sizes",
            errors.len(),
            mesh_sizes.len()
        )));
    }
    Ok(())
}

fn usable_pair(errors: &[f64], mesh_sizes: &[f64], i: usize) -> bool {
    errors[i] > 0.0 && errors[i - 1] > 0.0 && mesh_sizes[i] > 0.0 && mesh_sizes[i - 1] > 0.0
}

/// Aggregate slope of log(error) against log(h):
///  p = sum ln(e_i/e_{i-1}) / sum ln(h_i/h_{i-1})
/// Pairs with a non-positive error or mesh size are skipped. If all pairs are skipped
/// the result is NaN.
pub fn convergence_order(errors: &[f64], mesh_sizes: &[f64]) -> Result<f64, FDError> {
    check_samples(errors, mesh_sizes)?;
    let mut sum_log_ratio = 0.0;
    let mut sum_log_mesh_ratio = 0.0;
    for i in 1..errors.len() {
        if !usable_pair(errors, mesh_sizes, i) {
            debug!("convergence order: skipping pair ({}, {})", i - 1, i);
            continue;
        }
        sum_log_ratio += (errors[i] / errors[i - 1]).ln();
        sum_log_mesh_ratio += (mesh_sizes[i] / mesh_sizes[i - 1]).ln();
    }
    Ok(sum_log_ratio / sum_log_mesh_ratio)
}

/// Order of every refinement step; None for the first sample and for skipped pairs.
pub fn pairwise_orders(errors: &[f64], mesh_sizes: &[f64]) -> Result<Vec<Option<f64>>, FDError> {
    check_samples(errors, mesh_sizes)?;
    let mut orders = vec![None; errors.len()];
    for i in 1..errors.len() {
        if usable_pair(errors, mesh_sizes, i) {
            orders[i] = Some(
                (errors[i] / errors[i - 1]).ln() / (mesh_sizes[i] / mesh_sizes[i - 1]).ln(),
            );
        }
    }
    Ok(orders)
}

/// max over interior points of |-(u_{i-1} - 2u_i + u_{i+1})/h^2 - f(x_i)|, x_i = i*h
pub fn discrete_residual<F>(u: &DVector<f64>, h: f64, f: &F) -> f64
where
    F: Fn(f64) -> f64,
{
    let h2 = h * h;
    let mut max_residual: f64 = 0.0;
    for i in 1..u.len().saturating_sub(1) {
        let xi = i as f64 * h;
        let r = (-(u[i - 1] - 2.0 * u[i] + u[i + 1]) / h2 - f(xi)).abs();
        max_residual = max_residual.max(r);
    }
    max_residual
}
