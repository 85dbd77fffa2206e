//! Hager-style 1-norm condition number estimation
//!
//! Estimates `κ₁(A) = ||A||_1 * ||A^{-1}||_1` without forming `A^{-1}`.
//! Each iteration performs two solves through a caller-supplied
//! [`LinearSolve`]: one with `A^T` and one with `A`.
//!
//! The result is a heuristic **lower bound** on `||A^{-1}||_1` (and hence on
//! `κ₁`). It is usually within a small factor of the true value but it is not
//! a guaranteed bound and must not be reported as one.

use crate::error::Result;
use crate::norms::{check_len, check_square, norm1, vector_norm1};
use crate::traits::LinearSolve;
use ndarray::{Array1, Array2};

/// Condition estimator configuration
#[derive(Debug, Clone)]
pub struct ConditionConfig {
    /// Maximum number of power iterations
    pub max_iterations: usize,
    /// Stop once an estimate fails to exceed the previous one by more than this
    pub convergence_margin: f64,
    /// Print progress every N iterations (0 = no output)
    pub print_interval: usize,
}

impl Default for ConditionConfig {
    fn default() -> Self {
        Self {
            max_iterations: 10,
            convergence_margin: 1e-12,
            print_interval: 0,
        }
    }
}

/// Condition estimator result
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionEstimate {
    /// Estimate of κ₁(A) = ||A||_1 * `inv_norm1`
    pub kappa1: f64,
    /// Estimate of ||A^{-1}||_1 (a lower bound in practice)
    pub inv_norm1: f64,
    /// Exact ||A||_1
    pub norm1: f64,
    /// Number of iterations performed
    pub iterations: usize,
    /// Whether the estimate stopped improving before `max_iterations`
    pub converged: bool,
}

impl ConditionEstimate {
    /// `(kappa1, inv_norm1)` pair
    pub fn into_pair(self) -> (f64, f64) {
        (self.kappa1, self.inv_norm1)
    }
}

/// Estimate κ₁(A) with the default configuration.
pub fn estimate_condition_1<S>(a: &Array2<f64>, solver: &S) -> Result<ConditionEstimate>
where
    S: LinearSolve + ?Sized,
{
    estimate_condition_1_with_config(a, solver, &ConditionConfig::default())
}

/// Estimate κ₁(A), reusing `solver` as a black box.
///
/// Iteration, starting from `x = (1/n, ..., 1/n)`:
/// 1. `s = sign(x)` with zeros mapped to `+1`
/// 2. solve `A^T y = s`, take `j` = first index of `max |y_j|`
/// 3. solve `A z = e_j`, estimate `||z||_1`, set `x = z`
///
/// Stops when an estimate does not exceed the previous one by more than
/// `convergence_margin`. The reported `inv_norm1` is the last estimate that
/// did improve. Errors from `solver` (typically a singular matrix) propagate.
pub fn estimate_condition_1_with_config<S>(
    a: &Array2<f64>,
    solver: &S,
    config: &ConditionConfig,
) -> Result<ConditionEstimate>
where
    S: LinearSolve + ?Sized,
{
    let n = check_square(a)?;
    let a_t = a.t().to_owned();

    let mut x = Array1::from_elem(n, 1.0 / n as f64);
    let mut best = 0.0_f64;
    let mut iterations = 0;
    let mut converged = false;

    for iter in 0..config.max_iterations {
        iterations = iter + 1;

        let s = x.mapv(|v| if v < 0.0 { -1.0 } else { 1.0 });
        let y = solver.solve(&a_t, &s)?;
        check_len(n, &y)?;
        let j = argmax_abs(&y);

        let mut e_j = Array1::<f64>::zeros(n);
        e_j[j] = 1.0;
        let z = solver.solve(a, &e_j)?;
        check_len(n, &z)?;
        let estimate = vector_norm1(&z);
        x = z;

        if config.print_interval > 0 && iterations % config.print_interval == 0 {
            log::info!(
                "Condition estimate iteration {}: ||A^-1||_1 >= {:.6e} (j = {})",
                iterations,
                estimate,
                j
            );
        }

        if estimate <= best + config.convergence_margin {
            converged = true;
            break;
        }
        best = estimate;
    }

    if converged {
        log::debug!(
            "Condition estimate stopped after {} iterations: ||A^-1||_1 ~ {:.6e}",
            iterations,
            best
        );
    }

    let a_norm = norm1(a);
    Ok(ConditionEstimate {
        kappa1: a_norm * best,
        inv_norm1: best,
        norm1: a_norm,
        iterations,
        converged,
    })
}

/// First index of the entry with the largest magnitude
fn argmax_abs(y: &Array1<f64>) -> usize {
    let mut best = 0;
    let mut best_val = f64::NEG_INFINITY;
    for (i, v) in y.iter().enumerate() {
        let av = v.abs();
        if av > best_val {
            best_val = av;
            best = i;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direct::lu_solve;
    use crate::error::DenseSolverError;
    use crate::traits::LuSolver;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_identity() {
        let a = Array2::<f64>::eye(4);

        let est = estimate_condition_1(&a, &LuSolver).unwrap();

        assert_relative_eq!(est.kappa1, 1.0, epsilon = 1e-14);
        assert_relative_eq!(est.inv_norm1, 1.0, epsilon = 1e-14);
        assert!(est.converged);
        assert_eq!(est.iterations, 2);
    }

    #[test]
    fn test_diagonal_exact() {
        // ||A||_1 = 100, ||A^-1||_1 = 1
        let a = array![[1.0_f64, 0.0, 0.0], [0.0, 10.0, 0.0], [0.0, 0.0, 100.0]];

        let (kappa, inv) = estimate_condition_1(&a, &LuSolver).unwrap().into_pair();

        assert_relative_eq!(inv, 1.0, epsilon = 1e-12);
        assert_relative_eq!(kappa, 100.0, epsilon = 1e-10);
    }

    #[test]
    fn test_lower_bound_of_exact_value() {
        let a = array![[4.0_f64, 1.0, 2.0], [0.5, 3.0, -1.0], [1.0, -2.0, 5.0]];

        // Exact ||A^-1||_1 from the columns of the inverse
        let mut exact = 0.0_f64;
        for j in 0..3 {
            let mut e = Array1::<f64>::zeros(3);
            e[j] = 1.0;
            let col = lu_solve(&a, &e).unwrap();
            exact = exact.max(vector_norm1(&col));
        }

        let est = estimate_condition_1(&a, &LuSolver).unwrap();

        assert!(est.inv_norm1 <= exact * (1.0 + 1e-12));
        assert!(est.inv_norm1 >= exact / 3.0);
        assert_relative_eq!(est.kappa1, est.norm1 * est.inv_norm1);
    }

    #[test]
    fn test_closure_solver_and_max_iterations() {
        let calls = std::cell::Cell::new(0usize);
        let counting = |m: &Array2<f64>, rhs: &Array1<f64>| -> Result<Array1<f64>> {
            calls.set(calls.get() + 1);
            lu_solve(m, rhs)
        };
        let a = array![[2.0_f64, 1.0], [1.0, 3.0]];
        let config = ConditionConfig {
            max_iterations: 1,
            ..Default::default()
        };

        let est = estimate_condition_1_with_config(&a, &counting, &config).unwrap();

        assert_eq!(est.iterations, 1);
        assert!(!est.converged);
        assert_eq!(calls.get(), 2);
        assert!(est.inv_norm1 > 0.0);
    }

    #[test]
    fn test_singular_propagates() {
        let a = array![[1.0_f64, 2.0], [2.0, 4.0]];

        let err = estimate_condition_1(&a, &LuSolver).unwrap_err();
        assert!(err.is_singular());
    }

    #[test]
    fn test_solver_output_length_checked() {
        let wrong_len = |_: &Array2<f64>, _: &Array1<f64>| -> Result<Array1<f64>> {
            Ok(array![0.0, 0.0, 5.0])
        };
        let a = array![[2.0_f64, 1.0], [1.0, 3.0]];

        let err = estimate_condition_1(&a, &wrong_len).unwrap_err();
        assert_eq!(
            err,
            DenseSolverError::DimensionMismatch {
                expected: 2,
                got: 3
            }
        );
    }

    #[test]
    fn test_second_solve_length_checked() {
        let calls = std::cell::Cell::new(0usize);
        let short_second = |m: &Array2<f64>, rhs: &Array1<f64>| -> Result<Array1<f64>> {
            calls.set(calls.get() + 1);
            if calls.get() == 2 {
                Ok(array![1.0])
            } else {
                lu_solve(m, rhs)
            }
        };
        let a = array![[2.0_f64, 1.0], [1.0, 3.0]];

        let err = estimate_condition_1(&a, &short_second).unwrap_err();
        assert!(err.is_dimension_mismatch());
    }

    #[test]
    fn test_non_square_rejected() {
        let a = Array2::<f64>::zeros((2, 3));

        assert_eq!(
            estimate_condition_1(&a, &LuSolver).unwrap_err(),
            DenseSolverError::DimensionMismatch {
                expected: 2,
                got: 3
            }
        );
    }

    #[test]
    fn test_argmax_abs_first_occurrence() {
        let y = array![1.0_f64, -3.0, 3.0, 2.0];
        assert_eq!(argmax_abs(&y), 1);
    }
}
