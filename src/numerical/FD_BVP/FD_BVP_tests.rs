#[cfg(test)]
mod tests {
    use crate::numerical::FD_BVP::FD_api::FDMethod;
    use crate::numerical::FD_BVP::direct_solver::solve_direct;
    use crate::numerical::FD_BVP::error_metrics::{convergence_order, l2_error, max_error};
    use crate::numerical::FD_BVP::gauss_seidel::{IterativeParams, solve_iterative, solve_sor};
    use crate::numerical::FD_BVP::solution::BoundaryConditions;
    use crate::numerical::FD_BVP::test_problems::PoissonProblem;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;
    use strum::IntoEnumIterator;

    fn sine_source(x: f64) -> f64 {
        4.0 * PI * PI * (2.0 * PI * x).sin()
    }
    fn sine_exact(x: f64) -> f64 {
        (2.0 * PI * x).sin()
    }

    #[test]
    fn test_zero_source_linear_for_all_boundary_pairs() {
        let pairs = [(0.0, 0.0), (1.0, 2.0), (-3.5, 0.25), (10.0, -10.0)];
        for (u0, u1) in pairs {
            let bc = BoundaryConditions::new(u0, u1);
            for n in [1usize, 3, 10, 64] {
                let solution = solve_direct(n, &|_x: f64| 0.0, &bc);
                for (x, u) in solution.points() {
                    let expected = u0 + (u1 - u0) * x;
                    assert!((u - expected).abs() < 1e-10 * (1.0 + expected.abs()));
                }
            }
        }
    }

    #[test]
    fn test_direct_residual_is_tiny() {
        // rounding in the residual grows like eps * n^2: about 3e-10 already at n = 1000
        for n in [5usize, 10, 20, 50] {
            for problem in PoissonProblem::iter() {
                let f = problem.source();
                let solution = solve_direct(n, &f, &problem.boundary_conditions());
                assert!(
                    solution.residual() <= 1e-10,
                    "{:?}, n = {}: residual {}",
                    problem,
                    n,
                    solution.residual()
                );
            }
        }
    }

    #[test]
    fn test_known_analytical_solution() {
        let bc = BoundaryConditions::new(0.0, 0.0);
        let solution = solve_direct(50, &sine_source, &bc);
        let error = l2_error(&solution, &sine_exact);
        assert!(error < 1e-3, "L2 error = {}", error);
    }

    #[test]
    fn test_direct_convergence_order() {
        let bc = BoundaryConditions::new(0.0, 0.0);
        let mut errors = Vec::new();
        let mut mesh_sizes = Vec::new();
        for n in [10usize, 20, 40, 80, 160] {
            let solution = solve_direct(n, &sine_source, &bc);
            errors.push(l2_error(&solution, &sine_exact));
            mesh_sizes.push(1.0 / (n + 1) as f64);
        }
        let order = convergence_order(&errors, &mesh_sizes).unwrap();
        assert!(order > 1.5 && order < 2.5, "order = {}", order);
    }

    #[test]
    fn test_quadratic_source_max_error() {
        let problem = PoissonProblem::QuadraticSource;
        let exact = problem.exact_solution();
        for n in [5usize, 10, 20, 50] {
            let solution = solve_direct(n, &problem.source(), &problem.boundary_conditions());
            assert!(max_error(&solution, &exact) < 0.1);
        }
    }

    #[test]
    fn test_direct_and_gauss_seidel_agree() {
        let bc = BoundaryConditions::new(0.0, 0.0);
        let direct = solve_direct(30, &sine_source, &bc);
        let params = IterativeParams::new(1e-10, 10000, 1.0);
        let gs = solve_iterative(30, &sine_source, &bc, &params);
        assert!(gs.iterations() < 10000);
        for i in 0..direct.len() {
            assert!(
                (direct.value(i) - gs.value(i)).abs() < 1e-6,
                "solutions differ at point {}",
                i
            );
        }
        assert_eq!(direct.x_points(), gs.x_points());
    }

    #[test]
    fn test_sor_factors_converge() {
        let bc = BoundaryConditions::new(0.0, 1.0);
        for omega in [0.8, 1.0, 1.2, 1.5] {
            let solution = solve_sor(20, &|_x: f64| 1.0, &bc, omega);
            assert!(solution.iterations() < 10000);
            assert!(solution.residual() < 1e-6);
        }
    }

    #[test]
    fn test_boundary_values_exact_for_every_method() {
        let bc = BoundaryConditions::new(0.3, -1.7);
        let f = |x: f64| x.exp() * (5.0 * x).sin();
        let methods = [
            FDMethod::Direct,
            FDMethod::gauss_seidel(),
            FDMethod::sor(1.4),
            FDMethod::Iterative(IterativeParams::new(1e-12, 3, 0.9)),
        ];
        for method in methods {
            for n in [1usize, 7, 25] {
                let solution = method.solve(n, &f, &bc);
                assert_eq!(solution.value(0), 0.3);
                assert_eq!(solution.value(n + 1), -1.7);
                assert_eq!(solution.len(), n + 2);
            }
        }
    }

    #[test]
    fn test_gauss_seidel_reaches_discretization_accuracy() {
        for problem in PoissonProblem::iter() {
            let f = problem.source();
            let exact = problem.exact_solution();
            let bc = problem.boundary_conditions();
            let direct = solve_direct(15, &f, &bc);
            let sor = FDMethod::sor(1.6).solve(15, &f, &bc);
            assert_relative_eq!(
                l2_error(&direct, &exact),
                l2_error(&sor, &exact),
                epsilon = 1e-7
            );
        }
    }

    #[test]
    fn test_solvers_do_not_share_state() {
        let bc = BoundaryConditions::new(0.0, 0.0);
        let first = solve_direct(12, &sine_source, &bc);
        let _other = solve_direct(40, &|x: f64| x, &bc);
        let again = solve_direct(12, &sine_source, &bc);
        assert_eq!(first, again);
    }
}
