//! Composite Newton-Cotes quadrature on a uniform partition of [a, b].
use crate::numerical::FD_BVP::FD_errors::FDError;

/// composite trapezoidal rule with n panels
pub fn trapezoidal_rule<F>(f: &F, a: f64, b: f64, n: usize) -> f64
where
    F: Fn(f64) -> f64,
{
    let h = (b - a) / n as f64;
    let mut sum = 0.5 * (f(a) + f(b));
    for i in 1..n {
        sum += f(a + i as f64 * h);
    }
    h * sum
}

/// composite Simpson rule, n panels, n must be even
pub fn simpson_rule<F>(f: &F, a: f64, b: f64, n: usize) -> Result<f64, FDError>
where
    F: Fn(f64) -> f64,
{
    if n == 0 || n % 2 != 0 {
        return Err(FDError::InvalidConfiguration(format!(
            "Simpson rule needs an even, positive number of panels, got {}",
            n
        )));
    }
    let h = (b - a) / n as f64;
    let mut sum = f(a) + f(b);
    for i in 1..n {
        let x = a + i as f64 * h;
        sum += if i % 2 == 0 { 2.0 * f(x) } else { 4.0 * f(x) };
    }
    Ok(h / 3.0 * sum)
}

/// sqrt(int_a^b f^2 dx) by the trapezoidal rule
pub fn l2_norm<F>(f: &F, a: f64, b: f64, n: usize) -> f64
where
    F: Fn(f64) -> f64,
{
    let f2 = |x: f64| {
        let v = f(x);
        v * v
    };
    trapezoidal_rule(&f2, a, b, n).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_trapezoidal_exact_for_linear() {
        let res = trapezoidal_rule(&|x: f64| 3.0 * x + 1.0, 0.0, 2.0, 4);
        assert_relative_eq!(res, 8.0, epsilon = 1e-12);
    }

    #[test]
    fn test_simpson_exact_for_cubic() {
        let res = simpson_rule(&|x: f64| x * x * x, 0.0, 1.0, 2).unwrap();
        assert_relative_eq!(res, 0.25, epsilon = 1e-14);
    }

    #[test]
    fn test_simpson_odd_panels() {
        let res = simpson_rule(&|x: f64| x, 0.0, 1.0, 3);
        assert!(matches!(res, Err(FDError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_l2_norm_of_sine() {
        // int_0^1 sin^2(2 pi x) dx = 1/2
        let norm = l2_norm(&|x: f64| (2.0 * PI * x).sin(), 0.0, 1.0, 200);
        assert_relative_eq!(norm, 0.5f64.sqrt(), epsilon = 1e-10);
    }
}
