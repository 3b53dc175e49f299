use nalgebra::DVector;
use std::fmt;

/// Dirichlet boundary values u(0) = u0, u(1) = u1
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryConditions {
    u0: f64,
    u1: f64,
}

impl BoundaryConditions {
    pub fn new(u0: f64, u1: f64) -> BoundaryConditions {
        BoundaryConditions { u0, u1 }
    }
    pub fn u0(&self) -> f64 {
        self.u0
    }
    pub fn u1(&self) -> f64 {
        self.u1
    }
    /// straight line through both boundary values, the solution for f = 0
    pub fn linear_interpolation(&self, x: f64) -> f64 {
        self.u0 + (self.u1 - self.u0) * x
    }
}

impl fmt::Display for BoundaryConditions {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "BC(u(0)={:.3}, u(1)={:.3})", self.u0, self.u1)
    }
}

/// Result of a finite-difference solve on the grid x_0 = 0, ..., x_{n+1} = 1.
/// Created once by a solver and read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    values: DVector<f64>,
    x_points: DVector<f64>,
    iterations: usize,
    residual: f64,
}

impl Solution {
    pub fn new(
        values: DVector<f64>,
        x_points: DVector<f64>,
        iterations: usize,
        residual: f64,
    ) -> Solution {
        assert_eq!(
            values.len(),
            x_points.len(),
            "values and grid must have the same length"
        );
        Solution {
            values,
            x_points,
            iterations,
            residual,
        }
    }
    /// grid values u_0..u_{n+1}, boundaries included
    pub fn values(&self) -> &DVector<f64> {
        &self.values
    }
    pub fn x_points(&self) -> &DVector<f64> {
        &self.x_points
    }
    /// 1 for the direct solver, number of sweeps for the iterative one
    pub fn iterations(&self) -> usize {
        self.iterations
    }
    /// max |discrete Laplacian defect| over interior points
    pub fn residual(&self) -> f64 {
        self.residual
    }
    pub fn value(&self, index: usize) -> f64 {
        self.values[index]
    }
    pub fn len(&self) -> usize {
        self.values.len()
    }
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
    /// (x_i, u_i) pairs
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.x_points
            .iter()
            .zip(self.values.iter())
            .map(|(&x, &u)| (x, u))
            .collect()
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Solution[size={}, iterations={}, residual={:.2e}]",
            self.values.len(),
            self.iterations,
            self.residual
        )
    }
}
