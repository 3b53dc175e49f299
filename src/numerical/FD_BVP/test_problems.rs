//! a collection of model problems -u'' = f on [0,1] with known exact solutions, for testing purposes
use crate::numerical::FD_BVP::FD_errors::FDError;
use crate::numerical::FD_BVP::solution::BoundaryConditions;
use std::f64::consts::{E, PI};
use strum_macros::EnumIter;

/// boxed scalar evaluator double -> double
pub type ScalarFn = Box<dyn Fn(f64) -> f64>;

/*
SineWave:        f = 4 pi^2 sin(2 pi x)   u = sin(2 pi x)     u(0)=0, u(1)=0
Linear:          f = 0                    u = 1 + x           u(0)=1, u(1)=2
ConstantSource:  f = 2                    u = x(1-x)          u(0)=0, u(1)=0
QuadraticSource: f = 2x^2                 u = (x - x^4)/6     u(0)=0, u(1)=0
Exponential:     f = -e^x                 u = e^x             u(0)=1, u(1)=e
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum PoissonProblem {
    SineWave,
    Linear,
    ConstantSource,
    QuadraticSource,
    Exponential,
}

impl PoissonProblem {
    pub fn source(&self) -> ScalarFn {
        match self {
            PoissonProblem::SineWave => Box::new(|x: f64| 4.0 * PI * PI * (2.0 * PI * x).sin()),
            PoissonProblem::Linear => constant(0.0),
            PoissonProblem::ConstantSource => constant(2.0),
            PoissonProblem::QuadraticSource => quadratic(2.0, 0.0, 0.0),
            PoissonProblem::Exponential => Box::new(|x: f64| -x.exp()),
        }
    }
    pub fn exact_solution(&self) -> ScalarFn {
        match self {
            PoissonProblem::SineWave => Box::new(|x: f64| (2.0 * PI * x).sin()),
            PoissonProblem::Linear => linear(1.0, 1.0),
            PoissonProblem::ConstantSource => quadratic(-1.0, 1.0, 0.0),
            PoissonProblem::QuadraticSource => Box::new(|x: f64| (x - x.powi(4)) / 6.0),
            PoissonProblem::Exponential => Box::new(|x: f64| x.exp()),
        }
    }
    pub fn boundary_conditions(&self) -> BoundaryConditions {
        match self {
            PoissonProblem::Linear => BoundaryConditions::new(1.0, 2.0),
            PoissonProblem::Exponential => BoundaryConditions::new(1.0, E),
            _ => BoundaryConditions::new(0.0, 0.0),
        }
    }
    pub fn name(&self) -> &'static str {
        match self {
            PoissonProblem::SineWave => "sine_wave",
            PoissonProblem::Linear => "linear",
            PoissonProblem::ConstantSource => "constant_source",
            PoissonProblem::QuadraticSource => "quadratic_source",
            PoissonProblem::Exponential => "exponential",
        }
    }
    pub fn from_name(name: &str) -> Result<PoissonProblem, FDError> {
        match name.trim().to_lowercase().as_str() {
            "sine_wave" | "sine" => Ok(PoissonProblem::SineWave),
            "linear" => Ok(PoissonProblem::Linear),
            "constant_source" | "constant" => Ok(PoissonProblem::ConstantSource),
            "quadratic_source" | "quadratic" => Ok(PoissonProblem::QuadraticSource),
            "exponential" | "exp" => Ok(PoissonProblem::Exponential),
            other => Err(FDError::InvalidConfiguration(format!(
                "unknown problem name '{}'",
                other
            ))),
        }
    }
}

//////////////////////////////// simple evaluator builders ////////////////////////////////
/// x -> c
pub fn constant(c: f64) -> ScalarFn {
    Box::new(move |_x: f64| c)
}
/// x -> a*x + b
pub fn linear(a: f64, b: f64) -> ScalarFn {
    Box::new(move |x: f64| a * x + b)
}
/// x -> a*x^2 + b*x + c
pub fn quadratic(a: f64, b: f64, c: f64) -> ScalarFn {
    Box::new(move |x: f64| a * x * x + b * x + c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use strum::IntoEnumIterator;

    #[test]
    fn test_exact_solutions_match_boundary_conditions() {
        for problem in PoissonProblem::iter() {
            let exact = problem.exact_solution();
            let bc = problem.boundary_conditions();
            assert_relative_eq!(exact(0.0), bc.u0(), epsilon = 1e-12);
            assert_relative_eq!(exact(1.0), bc.u1(), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_exact_solutions_satisfy_equation() {
        // -u'' by a fine central difference against f
        let d = 1e-4;
        for problem in PoissonProblem::iter() {
            let u = problem.exact_solution();
            let f = problem.source();
            for x in [0.2, 0.5, 0.7] {
                let minus_u2 = -(u(x - d) - 2.0 * u(x) + u(x + d)) / (d * d);
                assert!((minus_u2 - f(x)).abs() < 1e-4 * (1.0 + f(x).abs()), "{:?} at {}", problem, x);
            }
        }
    }

    #[test]
    fn test_names_round_trip() {
        for problem in PoissonProblem::iter() {
            assert_eq!(PoissonProblem::from_name(problem.name()).unwrap(), problem);
        }
        assert!(PoissonProblem::from_name("helmholtz").is_err());
    }

    #[test]
    fn test_builders() {
        assert_eq!(constant(3.0)(10.0), 3.0);
        assert_eq!(linear(2.0, 1.0)(3.0), 7.0);
        assert_eq!(quadratic(1.0, -1.0, 2.0)(2.0), 4.0);
    }
}
