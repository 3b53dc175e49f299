//! Finite-difference solvers for the two-point boundary value problem
//! -u''(x) = f(x) on [0,1], u(0) = u0, u(1) = u1
#![allow(non_snake_case)]
/// error type shared by the module
pub mod FD_errors;
/// boundary conditions and the solution value
pub mod solution;
/// grid and right-hand side
pub mod assembly;
/// Thomas algorithm
pub mod direct_solver;
/// Gauss-Seidel and SOR
pub mod gauss_seidel;
/// L2/max errors, convergence order, discrete residual
pub mod error_metrics;
/// model problems with exact solutions
pub mod test_problems;
/// mesh refinement studies
pub mod convergence;
/// solver facade: method choice, logging, task documents, saving and plotting
pub mod FD_api;

mod FD_BVP_tests;
