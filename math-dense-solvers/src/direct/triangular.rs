//! Triangular solvers
//!
//! Forward substitution for unit lower-triangular systems and back
//! substitution for upper-triangular systems. Only the relevant triangle of
//! the input matrix is read.

use crate::error::{DenseSolverError, Result};
use crate::norms::{check_len, check_square};
use ndarray::{Array1, Array2, s};

/// Solve `L y = b` where `L` is unit lower-triangular.
///
/// The diagonal of `L` is assumed to be 1 and is never read.
pub fn forward_substitution(l: &Array2<f64>, b: &Array1<f64>) -> Result<Array1<f64>> {
    let n = check_square(l)?;
    check_len(n, b)?;

    let mut y = Array1::zeros(n);
    for i in 0..n {
        let dot = l.slice(s![i, ..i]).dot(&y.slice(s![..i]));
        y[i] = b[i] - dot;
    }
    Ok(y)
}

/// Solve `U x = y` where `U` is upper-triangular.
///
/// A zero diagonal entry fails with [`DenseSolverError::SingularMatrix`]
/// instead of producing non-finite values.
pub fn back_substitution(u: &Array2<f64>, y: &Array1<f64>) -> Result<Array1<f64>> {
    let n = check_square(u)?;
    check_len(n, y)?;

    let mut x = Array1::zeros(n);
    for i in (0..n).rev() {
        let u_ii = u[[i, i]];
        if u_ii == 0.0 {
            return Err(DenseSolverError::SingularMatrix { column: i });
        }
        let dot = u.slice(s![i, i + 1..]).dot(&x.slice(s![i + 1..]));
        x[i] = (y[i] - dot) / u_ii;
    }
    Ok(x)
}
