//! LU decomposition solver
//!
//! Doolittle LU factorization with partial pivoting for dense square systems.
//! Produces explicit factors `P * A = L * U` with `L` unit lower-triangular
//! and `U` upper-triangular.
//!
//! # Pivoting rule
//!
//! At step `k` the pivot is the row in `k..n` with the largest `|U[row, k]|`.
//! Ties go to the lowest row index (the first occurrence of the maximum), so
//! the permutation is reproducible. Comparison uses the absolute value only;
//! there is no row scaling or equilibration.

use super::triangular::{back_substitution, forward_substitution};
use crate::error::{DenseSolverError, Result};
use crate::norms::{check_len, check_square};
use crate::permutation::Permutation;
use ndarray::{Array1, Array2, s};

/// LU factorization result
///
/// Holds the row permutation and the explicit `L` and `U` factors.
#[derive(Debug, Clone)]
pub struct LuFactorization {
    /// Row permutation `P`
    pub p: Permutation,
    /// Unit lower-triangular factor
    pub l: Array2<f64>,
    /// Upper-triangular factor
    pub u: Array2<f64>,
}

impl LuFactorization {
    /// Matrix dimension
    #[inline]
    pub fn dim(&self) -> usize {
        self.u.nrows()
    }

    /// Solve `A x = b` using the pre-computed factors
    pub fn solve(&self, b: &Array1<f64>) -> Result<Array1<f64>> {
        check_len(self.dim(), b)?;

        let pb = self.p.apply(b);
        let y = forward_substitution(&self.l, &pb)?;
        back_substitution(&self.u, &y)
    }

    /// Determinant of the original matrix: sign(P) * prod(diag(U))
    pub fn determinant(&self) -> f64 {
        self.p.sign() * self.u.diag().iter().product::<f64>()
    }

    /// Rebuild the original matrix as `P^T * L * U`
    pub fn reconstruct(&self) -> Array2<f64> {
        let lu = self.l.dot(&self.u);
        self.p.inverse().apply_rows(&lu)
    }
}

/// Compute the LU factorization of `a` with partial pivoting.
///
/// Works on a private copy; `a` is never modified. Fails with
/// [`DenseSolverError::SingularMatrix`] when every candidate pivot in a
/// column is exactly zero.
pub fn lu_factorize(a: &Array2<f64>) -> Result<LuFactorization> {
    let n = check_square(a)?;

    let mut u = a.clone();
    let mut l = Array2::<f64>::zeros((n, n));
    let mut p = Permutation::identity(n);
    let mut swaps = 0usize;

    for k in 0..n {
        // Find pivot (first index of the maximum)
        let mut max_val = u[[k, k]].abs();
        let mut max_row = k;

        for i in (k + 1)..n {
            let val = u[[i, k]].abs();
            if val > max_val {
                max_val = val;
                max_row = i;
            }
        }

        if max_val == 0.0 {
            log::trace!("LU: zero pivot column {} (n = {})", k, n);
            return Err(DenseSolverError::SingularMatrix { column: k });
        }

        // Swap rows in U, P and the finished part of L
        if max_row != k {
            for j in 0..n {
                u.swap([k, j], [max_row, j]);
            }
            for j in 0..k {
                l.swap([k, j], [max_row, j]);
            }
            p.swap(k, max_row);
            swaps += 1;
        }

        l[[k, k]] = 1.0;

        // Compute multipliers and eliminate
        let pivot = u[[k, k]];
        let pivot_row = u.slice(s![k, k..]).to_owned();
        for i in (k + 1)..n {
            let mult = u[[i, k]] / pivot;
            l[[i, k]] = mult;

            let mut row = u.slice_mut(s![i, k..]);
            row.scaled_add(-mult, &pivot_row);
            u[[i, k]] = 0.0;
        }
    }

    log::trace!("LU: factored {}x{} matrix with {} row swaps", n, n, swaps);

    Ok(LuFactorization { p, l, u })
}

/// Solve `A x = b` using LU decomposition
///
/// This is a convenience function that combines factorization and solve.
/// Dimensions are checked before any elimination work starts.
pub fn lu_solve(a: &Array2<f64>, b: &Array1<f64>) -> Result<Array1<f64>> {
    let n = check_square(a)?;
    check_len(n, b)?;

    let factorization = lu_factorize(a)?;
    factorization.solve(b)
}
