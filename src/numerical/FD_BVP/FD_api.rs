//!  general api for the finite-difference solvers of -u'' = f, u(0) = u0, u(1) = u1
//! Example#1
//! ```
//! use RustedFDM::numerical::FD_BVP::FD_api::{FDMethod, FDsolver};
//! use RustedFDM::numerical::FD_BVP::solution::BoundaryConditions;
//! let pi = std::f64::consts::PI;
//! let mut solver = FDsolver::new(
//!     50,
//!     Box::new(move |x: f64| 4.0 * pi * pi * (2.0 * pi * x).sin()),
//!     BoundaryConditions::new(0.0, 0.0),
//!     FDMethod::Direct,
//! );
//! solver.set_exact_solution(Box::new(move |x: f64| (2.0 * pi * x).sin()));
//! solver.loglevel = Some("off".to_string());
//! solver.solve().unwrap();
//! assert!(solver.l2_error().unwrap() < 1e-3);
//! ```
//! Example#2
//! ```
//! use RustedFDM::numerical::FD_BVP::FD_api::FDsolver;
//! let task = "
//! problem
//!   name: constant_source
//!   n: 20
//! solver
//!   method: sor
//!   relaxation: 1.5
//! logging
//!   loglevel: off
//! ";
//! let mut solver = FDsolver::from_task(task).unwrap();
//! let solution = solver.solve().unwrap();
//! assert!(solution.residual() < 1e-6);
//! ```
use crate::Utils::logger::{
    init_logger, parse_log_level, save_solution_to_csv, save_solution_to_file,
    timestamped_log_name,
};
use crate::Utils::plots::plot_solution;
use crate::Utils::task_parser::{get_f64, get_string, get_usize, parse_task_document};
use crate::numerical::FD_BVP::FD_errors::FDError;
use crate::numerical::FD_BVP::assembly::mesh_step;
use crate::numerical::FD_BVP::direct_solver::solve_direct;
use crate::numerical::FD_BVP::error_metrics::{l2_error, max_error};
use crate::numerical::FD_BVP::gauss_seidel::{IterativeParams, solve_iterative};
use crate::numerical::FD_BVP::solution::{BoundaryConditions, Solution};
use crate::numerical::FD_BVP::test_problems::{PoissonProblem, ScalarFn};
use log::{info, warn};
use std::collections::HashMap;
use std::time::Instant;
use tabled::{builder::Builder, settings::Style};

/// the two solution strategies sharing the same assembly
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum FDMethod {
    /// Thomas algorithm, exact up to rounding
    #[default]
    Direct,
    /// Gauss-Seidel (relaxation 1.0) or SOR
    Iterative(IterativeParams),
}

impl FDMethod {
    pub fn gauss_seidel() -> FDMethod {
        FDMethod::Iterative(IterativeParams::default())
    }
    pub fn sor(omega: f64) -> FDMethod {
        FDMethod::Iterative(IterativeParams::sor(omega))
    }
    pub fn solve<F>(&self, n: usize, f: &F, bc: &BoundaryConditions) -> Solution
    where
        F: Fn(f64) -> f64,
    {
        match self {
            FDMethod::Direct => solve_direct(n, f, bc),
            FDMethod::Iterative(params) => solve_iterative(n, f, bc, params),
        }
    }
    pub fn name(&self) -> String {
        match self {
            FDMethod::Direct => "direct (Thomas)".to_string(),
            FDMethod::Iterative(p) if p.relaxation == 1.0 => "Gauss-Seidel".to_string(),
            FDMethod::Iterative(p) => format!("SOR (omega = {})", p.relaxation),
        }
    }
    /// "direct" | "thomas" | "gauss_seidel" | "gs" | "sor"; iterative methods take `params`
    pub fn from_name(name: &str, params: IterativeParams) -> Result<FDMethod, FDError> {
        match name.trim().to_lowercase().as_str() {
            "direct" | "thomas" => Ok(FDMethod::Direct),
            "gauss_seidel" | "gauss-seidel" | "gs" => Ok(FDMethod::Iterative(IterativeParams {
                relaxation: 1.0,
                ..params
            })),
            "sor" => Ok(FDMethod::Iterative(params)),
            other => Err(FDError::InvalidConfiguration(format!(
                "unknown method '{}', expected direct, gauss_seidel or sor",
                other
            ))),
        }
    }
}

pub struct FDsolver {
    pub n: usize,
    pub bc: BoundaryConditions,
    pub method: FDMethod,
    source: ScalarFn,
    exact: Option<ScalarFn>,
    pub loglevel: Option<String>,
    pub log_to_file: Option<String>,
    result: Option<Solution>,
    calc_statistics: HashMap<String, String>,
}

impl FDsolver {
    pub fn new(n: usize, source: ScalarFn, bc: BoundaryConditions, method: FDMethod) -> FDsolver {
        FDsolver {
            n,
            bc,
            method,
            source,
            exact: None,
            loglevel: Some("info".to_string()),
            log_to_file: None,
            result: None,
            calc_statistics: HashMap::new(),
        }
    }
    /// model problem from the catalogue, its exact solution is attached
    pub fn from_problem(problem: PoissonProblem, n: usize, method: FDMethod) -> FDsolver {
        let mut solver = FDsolver::new(n, problem.source(), problem.boundary_conditions(), method);
        solver.exact = Some(problem.exact_solution());
        solver
    }
    /// Build a solver from a task document. Recognised keys:
    /// problem: name (required), n (default 50);
    /// solver: method (default direct), tolerance, max_iterations, relaxation;
    /// boundary: u0, u1 (default: the problem's own values);
    /// logging: loglevel, log_file ("auto" gives log_<date>_<time>.txt)
    pub fn from_task(document: &str) -> Result<FDsolver, FDError> {
        let doc = parse_task_document(document)?;
        let name = get_string(&doc, "problem", "name")?.ok_or_else(|| {
            FDError::InvalidConfiguration("task document needs problem.name".to_string())
        })?;
        let problem = PoissonProblem::from_name(&name)?;
        let n = get_usize(&doc, "problem", "n")?.unwrap_or(50);
        if n == 0 {
            return Err(FDError::InvalidConfiguration(
                "problem.n must be at least 1".to_string(),
            ));
        }
        let defaults = IterativeParams::default();
        let relaxation = get_f64(&doc, "solver", "relaxation")?;
        let params = IterativeParams {
            tolerance: get_f64(&doc, "solver", "tolerance")?.unwrap_or(defaults.tolerance),
            max_iterations: get_usize(&doc, "solver", "max_iterations")?
                .unwrap_or(defaults.max_iterations),
            relaxation: relaxation.unwrap_or(defaults.relaxation),
        };
        let method = match get_string(&doc, "solver", "method")? {
            Some(m) => FDMethod::from_name(&m, params)?,
            None => FDMethod::Direct,
        };
        match (method, relaxation) {
            (FDMethod::Iterative(p), Some(omega)) if p.relaxation != omega => {
                return Err(FDError::InvalidConfiguration(format!(
                    "relaxation {} is ignored by gauss_seidel, use method: sor",
                    omega
                )));
            }
            (FDMethod::Direct, Some(omega)) => {
                warn!("relaxation {} has no effect on the direct solver", omega);
            }
            _ => {}
        }
        let mut solver = FDsolver::from_problem(problem, n, method);
        let problem_bc = problem.boundary_conditions();
        solver.bc = BoundaryConditions::new(
            get_f64(&doc, "boundary", "u0")?.unwrap_or(problem_bc.u0()),
            get_f64(&doc, "boundary", "u1")?.unwrap_or(problem_bc.u1()),
        );
        if solver.bc != problem_bc {
            // the catalogue solution no longer matches the boundary data
            solver.exact = None;
        }
        if let Some(level) = get_string(&doc, "logging", "loglevel")? {
            parse_log_level(&level)?;
            solver.loglevel = Some(level);
        }
        solver.log_to_file = match get_string(&doc, "logging", "log_file")? {
            Some(name) if name == "auto" => Some(timestamped_log_name()),
            other => other,
        };
        Ok(solver)
    }

    pub fn set_exact_solution(&mut self, exact: ScalarFn) {
        self.exact = Some(exact);
    }

    /// solve without touching the logger
    pub fn solver(&mut self) -> &Solution {
        let begin = Instant::now();
        let solution = self.method.solve(self.n, &self.source, &self.bc);
        let elapsed = begin.elapsed();
        self.calc_statistics
            .insert("time elapsed, ms".to_string(), format!("{:.3}", elapsed.as_secs_f64() * 1e3));
        self.result.insert(solution)
    }

    // wrapper around solver function to implement logging
    pub fn solve(&mut self) -> Result<&Solution, FDError> {
        let is_logging_disabled = match &self.loglevel {
            Some(level) => parse_log_level(level)?.is_none(),
            None => false,
        };
        if !is_logging_disabled {
            init_logger(self.loglevel.clone(), self.log_to_file.clone())?;
            info!("solving -u'' = f with {} on {} interior points, {}", self.method.name(), self.n, self.bc);
            self.solver();
            self.calc_statistics();
        } else {
            self.solver();
        }
        self.result
            .as_ref()
            .ok_or_else(|| FDError::InvalidConfiguration("no result".to_string()))
    }

    pub fn get_result(&self) -> Option<&Solution> {
        self.result.as_ref()
    }
    pub fn l2_error(&self) -> Option<f64> {
        match (&self.result, &self.exact) {
            (Some(solution), Some(exact)) => Some(l2_error(solution, exact)),
            _ => None,
        }
    }
    pub fn max_error(&self) -> Option<f64> {
        match (&self.result, &self.exact) {
            (Some(solution), Some(exact)) => Some(max_error(solution, exact)),
            _ => None,
        }
    }

    /// statistics of the last solve as a table
    pub fn statistics_table(&self) -> String {
        let mut stats = self.calc_statistics.clone();
        stats.insert("n".to_string(), self.n.to_string());
        stats.insert("h".to_string(), format!("{:.4e}", mesh_step(self.n)));
        stats.insert("method".to_string(), self.method.name());
        if let Some(solution) = &self.result {
            stats.insert("iterations".to_string(), solution.iterations().to_string());
            stats.insert("residual".to_string(), format!("{:.3e}", solution.residual()));
        }
        if let Some(e) = self.l2_error() {
            stats.insert("L2 error".to_string(), format!("{:.3e}", e));
        }
        if let Some(e) = self.max_error() {
            stats.insert("max error".to_string(), format!("{:.3e}", e));
        }
        let mut rows: Vec<(String, String)> = stats.into_iter().collect();
        rows.sort();
        let mut builder = Builder::default();
        for (key, value) in rows {
            builder.push_record(vec![key, value]);
        }
        let mut table = builder.build();
        table.with(Style::modern_rounded());
        table.to_string()
    }
    fn calc_statistics(&self) {
        info!("\n \n CALC STATISTICS \n \n {}", self.statistics_table());
    }

    ///////////////////////////////////////////////////////////////////////////////////
    //                     functions to save and plot the result
    ///////////////////////////////////////////////////////////////////////////////////
    fn solved(&self) -> Result<&Solution, FDError> {
        self.result.as_ref().ok_or_else(|| {
            FDError::InvalidConfiguration("solve() must be called before saving results".to_string())
        })
    }
    pub fn save_to_csv(&self, filename: Option<String>) -> Result<(), FDError> {
        let name = filename.unwrap_or_else(|| "result.csv".to_string());
        save_solution_to_csv(self.solved()?, self.exact.as_deref(), &name)
    }
    pub fn save_to_file(&self, filename: Option<String>) -> Result<(), FDError> {
        let name = filename.unwrap_or_else(|| "result.txt".to_string());
        save_solution_to_file(self.solved()?, self.exact.as_deref(), &name)
    }
    pub fn plot_result(&self, filename: Option<String>) -> Result<(), FDError> {
        let name = filename.unwrap_or_else(|| "solution.png".to_string());
        let title = format!("-u'' = f, {}", self.method.name());
        plot_solution(self.solved()?, self.exact.as_deref(), &title, &name)
    }
}
