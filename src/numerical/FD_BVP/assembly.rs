//! Grid and right-hand side of the central-difference discretization of -u'' = f on [0,1]:
//!
//!  -u_{i-1} + 2u_i - u_{i+1} = h^2 f(x_i),  i = 1..n,  h = 1/(n+1)
//!
//! Known boundary values u_0, u_{n+1} are moved to the right-hand side.
//! n >= 1 is the caller's responsibility.
use crate::numerical::FD_BVP::solution::BoundaryConditions;
use nalgebra::DVector;

/// grid spacing for n interior unknowns
pub fn mesh_step(n: usize) -> f64 {
    1.0 / (n + 1) as f64
}

/// x_i = i*h, i = 0..n+1
pub fn build_grid(n: usize) -> DVector<f64> {
    let h = mesh_step(n);
    DVector::from_fn(n + 2, |i, _| i as f64 * h)
}

/// h^2 f(x_{i+1}) for interior index i = 0..n-1, without boundary terms
pub fn build_source_term<F>(n: usize, f: &F) -> DVector<f64>
where
    F: Fn(f64) -> f64,
{
    let h = mesh_step(n);
    let h2 = h * h;
    DVector::from_fn(n, |i, _| h2 * f((i + 1) as f64 * h))
}

/// right-hand side of the tridiagonal system: source term with b_0 += u0, b_{n-1} += u1
pub fn build_rhs<F>(n: usize, f: &F, bc: &BoundaryConditions) -> DVector<f64>
where
    F: Fn(f64) -> f64,
{
    let mut b = build_source_term(n, f);
    b[0] += bc.u0();
    b[n - 1] += bc.u1();
    b
}

/// interior values plus both boundary values -> full grid vector of length n+2
pub fn with_boundaries(interior: &DVector<f64>, bc: &BoundaryConditions) -> DVector<f64> {
    let n = interior.len();
    let mut u = DVector::zeros(n + 2);
    u[0] = bc.u0();
    u.rows_mut(1, n).copy_from(interior);
    u[n + 1] = bc.u1();
    u
}
