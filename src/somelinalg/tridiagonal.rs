#![allow(non_snake_case)]
use nalgebra::DVector;

///////////////////////////////////////////////
///  TRIDIAGONAL LINEAR SYSTEMS
////////////////////////////////////////////////
/// Tridiagonal matrix stored as three diagonals:
/// `lower` has n-1 entries (a_0..a_{n-2}, row i+1), `diag` has n entries,
/// `upper` has n-1 entries (c_0..c_{n-2}, row i).
#[derive(Debug, Clone, PartialEq)]
pub struct TridiagonalSystem {
    pub lower: Vec<f64>,
    pub diag: Vec<f64>,
    pub upper: Vec<f64>,
}

impl TridiagonalSystem {
    pub fn new(lower: Vec<f64>, diag: Vec<f64>, upper: Vec<f64>) -> TridiagonalSystem {
        let n = diag.len();
        assert!(n > 0, "tridiagonal system must have at least one row");
        assert_eq!(lower.len(), n - 1, "lower diagonal must have n-1 entries");
        assert_eq!(upper.len(), n - 1, "upper diagonal must have n-1 entries");
        TridiagonalSystem { lower, diag, upper }
    }
    /// matrix with constant sub-, main and super-diagonal
    pub fn constant(n: usize, sub: f64, main: f64, sup: f64) -> TridiagonalSystem {
        let off = n.saturating_sub(1);
        TridiagonalSystem::new(vec![sub; off], vec![main; n], vec![sup; off])
    }
    /// the (-1, 2, -1) matrix of the central-difference second derivative
    pub fn laplacian_1d(n: usize) -> TridiagonalSystem {
        TridiagonalSystem::constant(n, -1.0, 2.0, -1.0)
    }

    pub fn size(&self) -> usize {
        self.diag.len()
    }
    /// A*x
    pub fn mul_vec(&self, x: &DVector<f64>) -> DVector<f64> {
        let n = self.size();
        assert_eq!(x.len(), n, "vector length must match matrix size");
        let mut y = DVector::zeros(n);
        for i in 0..n {
            let mut s = self.diag[i] * x[i];
            if i > 0 {
                s += self.lower[i - 1] * x[i - 1];
            }
            if i + 1 < n {
                s += self.upper[i] * x[i + 1];
            }
            y[i] = s;
        }
        y
    }
    /// weak row diagonal dominance |b_i| >= |a_{i-1}| + |c_i|, strict in at least one row;
    /// for an irreducible matrix it guarantees nonzero Thomas pivots
    pub fn is_diagonally_dominant(&self) -> bool {
        let n = self.size();
        let mut strict = false;
        for i in 0..n {
            let mut off = 0.0;
            if i > 0 {
                off += self.lower[i - 1].abs();
            }
            if i + 1 < n {
                off += self.upper[i].abs();
            }
            let d = self.diag[i].abs();
            if d < off {
                return false;
            }
            if d > off {
                strict = true;
            }
        }
        strict
    }
    /// solve A*x = rhs with the Thomas algorithm
    pub fn solve(&self, rhs: &DVector<f64>) -> DVector<f64> {
        thomas_solve(&self.lower, &self.diag, &self.upper, rhs.as_slice())
    }
}

/// Thomas algorithm (tridiagonal Gaussian elimination without pivoting), O(n).
///
/// - `a`: sub-diagonal, n-1 entries
/// - `b`: main diagonal, n entries
/// - `c`: super-diagonal, n-1 entries
/// - `d`: right-hand side, n entries
///
/// Inputs are borrowed; the modified coefficients live in buffers owned by the call.
pub fn thomas_solve(a: &[f64], b: &[f64], c: &[f64], d: &[f64]) -> DVector<f64> {
    let n = d.len();
    assert!(n > 0, "system size must be > 0");
    assert_eq!(b.len(), n, "main diagonal must have n entries");
    assert_eq!(a.len(), n - 1, "sub-diagonal must have n-1 entries");
    assert_eq!(c.len(), n - 1, "super-diagonal must have n-1 entries");

    let mut c_prime = vec![0.0; n - 1];
    let mut d_prime = vec![0.0; n];
    // forward sweep
    if n > 1 {
        c_prime[0] = c[0] / b[0];
    }
    d_prime[0] = d[0] / b[0];
    for i in 1..n {
        let denom = b[i] - a[i - 1] * c_prime[i - 1];
        if i < n - 1 {
            c_prime[i] = c[i] / denom;
        }
        d_prime[i] = (d[i] - a[i - 1] * d_prime[i - 1]) / denom;
    }
    // back substitution
    let mut x = DVector::zeros(n);
    x[n - 1] = d_prime[n - 1];
    for i in (0..n - 1).rev() {
        x[i] = d_prime[i] - c_prime[i] * x[i + 1];
    }
    x
}
