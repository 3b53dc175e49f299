#![allow(non_snake_case)]
use RustedFDM::Utils::logger::init_logger;
use RustedFDM::numerical::FD_BVP::FD_api::{FDMethod, FDsolver};
use RustedFDM::numerical::FD_BVP::convergence::ConvergenceStudy;
use RustedFDM::numerical::FD_BVP::direct_solver::solve_direct;
use RustedFDM::numerical::FD_BVP::error_metrics::{l2_error, max_error};
use RustedFDM::numerical::FD_BVP::gauss_seidel::{solve_gauss_seidel, solve_sor};
use RustedFDM::numerical::FD_BVP::solution::BoundaryConditions;
use RustedFDM::numerical::FD_BVP::test_problems::PoissonProblem;
use log::{error, info};
use std::f64::consts::PI;
use strum::IntoEnumIterator;

fn main() {
    let _ = init_logger(Some("info".to_string()), None);
    let example = 0;
    match example {
        0 => {
            // -u'' = 4 pi^2 sin(2 pi x), u(0) = 0, u(1) = 0, exact solution u = sin(2 pi x)
            let f = |x: f64| 4.0 * PI * PI * (2.0 * PI * x).sin();
            let exact = |x: f64| (2.0 * PI * x).sin();
            let bc = BoundaryConditions::new(0.0, 0.0);
            let n = 50;

            let direct = solve_direct(n, &f, &bc);
            info!("direct solution: {}", direct);
            info!("L2 error: {:.6e}", l2_error(&direct, &exact));

            let gs = solve_gauss_seidel(n, &f, &bc);
            info!("Gauss-Seidel solution: {}", gs);
            info!("L2 error: {:.6e}", l2_error(&gs, &exact));

            match ConvergenceStudy::new(PoissonProblem::SineWave, FDMethod::Direct).run() {
                Ok(report) => println!("{}", report.table()),
                Err(e) => error!("{}", e),
            }
        }
        1 => {
            // convergence study of every model problem with both solvers
            for problem in PoissonProblem::iter() {
                for method in [FDMethod::Direct, FDMethod::sor(1.8)] {
                    match ConvergenceStudy::new(problem, method)
                        .with_n_values(vec![8, 16, 32, 64])
                        .run()
                    {
                        Ok(report) => println!("{}\n", report.table()),
                        Err(e) => error!("{}", e),
                    }
                }
            }
        }
        2 => {
            // number of sweeps against the relaxation factor
            let problem = PoissonProblem::ConstantSource;
            let f = problem.source();
            let exact = problem.exact_solution();
            let bc = problem.boundary_conditions();
            for omega in [0.8, 1.0, 1.2, 1.5, 1.7, 1.9] {
                let solution = solve_sor(40, &f, &bc, omega);
                println!(
                    "omega = {:.1}: {} sweeps, residual = {:.2e}, max error = {:.2e}",
                    omega,
                    solution.iterations(),
                    solution.residual(),
                    max_error(&solution, &exact)
                );
            }
        }
        3 => {
            // the same job described by a task document
            let task = "
            problem
              name: exponential
              n: 100
            solver
              method: sor
              relaxation: 1.9
            logging
              loglevel: info
            ";
            match FDsolver::from_task(task) {
                Ok(mut solver) => {
                    if let Err(e) = solver.solve() {
                        error!("{}", e);
                        return;
                    }
                    if let Err(e) = solver.save_to_csv(Some("exponential.csv".to_string())) {
                        error!("{}", e);
                    }
                    if let Err(e) = solver.plot_result(Some("exponential.png".to_string())) {
                        error!("{}", e);
                    }
                }
                Err(e) => error!("{}", e),
            }
        }
        _ => println!("no such example"),
    }
}
