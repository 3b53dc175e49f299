/// finite-difference solution of -u'' = f with Dirichlet boundary conditions:
/// direct (Thomas) and iterative (Gauss-Seidel/SOR) solvers, error metrics, convergence studies
/// Example
/// ```
/// use RustedFDM::numerical::FD_BVP::direct_solver::solve_direct;
/// use RustedFDM::numerical::FD_BVP::error_metrics::{convergence_order, l2_error};
/// use RustedFDM::numerical::FD_BVP::solution::BoundaryConditions;
/// let pi = std::f64::consts::PI;
/// let f = |x: f64| 4.0 * pi * pi * (2.0 * pi * x).sin();
/// let exact = |x: f64| (2.0 * pi * x).sin();
/// let bc = BoundaryConditions::new(0.0, 0.0);
/// let mut errors = Vec::new();
/// let mut mesh_sizes = Vec::new();
/// for n in [10, 20, 40, 80, 160] {
///     let solution = solve_direct(n, &f, &bc);
///     errors.push(l2_error(&solution, &exact));
///     mesh_sizes.push(1.0 / (n + 1) as f64);
/// }
/// let order = convergence_order(&errors, &mesh_sizes).unwrap();
/// assert!((order - 2.0).abs() < 0.5);
/// ```
pub mod FD_BVP;
/// trapezoidal and Simpson quadrature
pub mod quadrature;
