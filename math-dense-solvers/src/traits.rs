//! Core traits for dense solvers
//!
//! [`LinearSolve`] is the narrow capability the condition estimator needs:
//! anything that can solve `M x = rhs` for a square `M`. It is implemented
//! for the built-in [`LuSolver`] and for plain closures, so callers can plug
//! in their own solver without wrapping it in a type.

use crate::direct::lu_solve;
use crate::error::Result;
use ndarray::{Array1, Array2};

/// Capability to solve a square linear system `M x = rhs`.
pub trait LinearSolve {
    /// Solve `matrix * x = rhs` and return `x`
    fn solve(&self, matrix: &Array2<f64>, rhs: &Array1<f64>) -> Result<Array1<f64>>;
}

impl<F> LinearSolve for F
where
    F: Fn(&Array2<f64>, &Array1<f64>) -> Result<Array1<f64>>,
{
    #[inline]
    fn solve(&self, matrix: &Array2<f64>, rhs: &Array1<f64>) -> Result<Array1<f64>> {
        self(matrix, rhs)
    }
}

/// General dense solver backed by LU with partial pivoting
#[derive(Clone, Copy, Debug, Default)]
pub struct LuSolver;

impl LinearSolve for LuSolver {
    fn solve(&self, matrix: &Array2<f64>, rhs: &Array1<f64>) -> Result<Array1<f64>> {
        lu_solve(matrix, rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DenseSolverError;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_lu_solver() {
        let a = array![[2.0_f64, 1.0], [1.0, 3.0]];
        let b = array![3.0_f64, 5.0];

        let x = LuSolver.solve(&a, &b).unwrap();

        assert_relative_eq!(x[0], 0.8, epsilon = 1e-12);
        assert_relative_eq!(x[1], 1.4, epsilon = 1e-12);
    }

    #[test]
    fn test_closure_solver() {
        // Diagonal-only solver as a closure
        let diag_solve = |m: &Array2<f64>, rhs: &Array1<f64>| -> Result<Array1<f64>> {
            Ok(Array1::from_iter(
                rhs.iter().enumerate().map(|(i, r)| r / m[[i, i]]),
            ))
        };
        let a = array![[2.0_f64, 0.0], [0.0, 4.0]];
        let b = array![1.0_f64, 1.0];

        let x = diag_solve.solve(&a, &b).unwrap();

        assert_eq!(x, array![0.5, 0.25]);
    }

    #[test]
    fn test_solver_error_propagates() {
        let a = array![[1.0_f64, 1.0], [1.0, 1.0]];
        let b = array![1.0_f64, 1.0];

        assert_eq!(
            LuSolver.solve(&a, &b).unwrap_err(),
            DenseSolverError::SingularMatrix { column: 1 }
        );
    }
}
