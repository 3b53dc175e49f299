//! Mesh-refinement study: solve a model problem on a sequence of grids, measure errors
//! against the exact solution and estimate the empirical order of accuracy.
use crate::numerical::FD_BVP::FD_api::FDMethod;
use crate::numerical::FD_BVP::FD_errors::FDError;
use crate::numerical::FD_BVP::assembly::mesh_step;
use crate::numerical::FD_BVP::error_metrics::{
    convergence_order, l2_error, max_error, pairwise_orders,
};
use crate::numerical::FD_BVP::test_problems::PoissonProblem;
use crate::numerical::quadrature::simpson_rule;
use log::info;
use tabled::{builder::Builder, settings::Style};

pub const DEFAULT_N_VALUES: [usize; 5] = [10, 20, 40, 80, 160];
// panels for the norm of the exact solution
const NORM_PANELS: usize = 1000;

#[derive(Debug, Clone)]
pub struct ConvergenceStudy {
    pub problem: PoissonProblem,
    pub method: FDMethod,
    pub n_values: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConvergenceRow {
    pub n: usize,
    pub h: f64,
    pub l2_error: f64,
    pub max_error: f64,
    pub relative_l2_error: f64,
    pub iterations: usize,
    /// order with respect to the previous row
    pub order: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConvergenceReport {
    pub problem_name: String,
    pub method_name: String,
    pub rows: Vec<ConvergenceRow>,
    /// aggregate log-log slope over all refinements
    pub order: f64,
}

impl ConvergenceStudy {
    pub fn new(problem: PoissonProblem, method: FDMethod) -> ConvergenceStudy {
        ConvergenceStudy {
            problem,
            method,
            n_values: DEFAULT_N_VALUES.to_vec(),
        }
    }
    pub fn with_n_values(mut self, n_values: Vec<usize>) -> ConvergenceStudy {
        self.n_values = n_values;
        self
    }

    pub fn run(&self) -> Result<ConvergenceReport, FDError> {
        let f = self.problem.source();
        let exact = self.problem.exact_solution();
        let bc = self.problem.boundary_conditions();
        let exact_squared = |x: f64| {
            let v = exact(x);
            v * v
        };
        let exact_norm = simpson_rule(&exact_squared, 0.0, 1.0, NORM_PANELS)?.sqrt();

        let mut rows = Vec::with_capacity(self.n_values.len());
        for &n in &self.n_values {
            let solution = self.method.solve(n, &f, &bc);
            let l2 = l2_error(&solution, &exact);
            let relative = if exact_norm > 0.0 { l2 / exact_norm } else { l2 };
            rows.push(ConvergenceRow {
                n,
                h: mesh_step(n),
                l2_error: l2,
                max_error: max_error(&solution, &exact),
                relative_l2_error: relative,
                iterations: solution.iterations(),
                order: None,
            });
        }
        let errors: Vec<f64> = rows.iter().map(|r| r.l2_error).collect();
        let mesh_sizes: Vec<f64> = rows.iter().map(|r| r.h).collect();
        let orders = pairwise_orders(&errors, &mesh_sizes)?;
        for (row, order) in rows.iter_mut().zip(orders) {
            row.order = order;
        }
        let order = convergence_order(&errors, &mesh_sizes)?;
        info!(
            "convergence study of {} with {}: order = {:.3}",
            self.problem.name(),
            self.method.name(),
            order
        );
        Ok(ConvergenceReport {
            problem_name: self.problem.name().to_string(),
            method_name: self.method.name(),
            rows,
            order,
        })
    }
}

impl ConvergenceReport {
    pub fn errors(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.l2_error).collect()
    }
    pub fn mesh_sizes(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.h).collect()
    }
    /// pretty table of the study
    pub fn table(&self) -> String {
        let mut builder = Builder::default();
        builder.push_record(vec![
            "n".to_string(),
            "h".to_string(),
            "L2 error".to_string(),
            "max error".to_string(),
            "rel. L2 error".to_string(),
            "iterations".to_string(),
            "order".to_string(),
        ]);
        for row in &self.rows {
            builder.push_record(vec![
                row.n.to_string(),
                format!("{:.4}", row.h),
                format!("{:.2e}", row.l2_error),
                format!("{:.2e}", row.max_error),
                format!("{:.2e}", row.relative_l2_error),
                row.iterations.to_string(),
                row.order.map_or("-".to_string(), |p| format!("{:.2}", p)),
            ]);
        }
        let mut table = builder.build();
        table.with(Style::modern_rounded());
        format!(
            "{} / {}\n{}\nglobal convergence order: {:.2}",
            self.problem_name, self.method_name, table, self.order
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_study_is_second_order() {
        let report = ConvergenceStudy::new(PoissonProblem::SineWave, FDMethod::Direct)
            .run()
            .unwrap();
        assert_eq!(report.rows.len(), 5);
        assert!(report.order > 1.5 && report.order < 2.5, "order = {}", report.order);
        assert!(report.rows[0].order.is_none());
        for row in &report.rows[1..] {
            let p = row.order.unwrap();
            assert!(p > 1.5 && p < 2.5);
        }
        // errors decrease with refinement
        let errors = report.errors();
        assert!(errors.windows(2).all(|w| w[1] < w[0]));
    }

    #[test]
    fn test_table_contains_rows() {
        let report = ConvergenceStudy::new(PoissonProblem::Exponential, FDMethod::Direct)
            .with_n_values(vec![4, 8])
            .run()
            .unwrap();
        let table = report.table();
        assert!(table.contains("exponential"));
        assert!(table.contains("L2 error"));
        assert!(table.contains("global convergence order"));
    }

    #[test]
    fn test_single_grid_is_invalid() {
        let res = ConvergenceStudy::new(PoissonProblem::SineWave, FDMethod::Direct)
            .with_n_values(vec![10])
            .run();
        assert!(matches!(res, Err(FDError::InvalidConfiguration(_))));
    }
}
