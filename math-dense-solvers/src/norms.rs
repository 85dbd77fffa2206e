//! Norms, residual metrics and shape checks for dense matrices and vectors
//!
//! The matrix norms are the induced operator norms:
//! - 1-norm: maximum absolute column sum
//! - infinity-norm: maximum absolute row sum

use crate::error::{DenseSolverError, Result};
use ndarray::{Array1, Array2, Axis};

/// Check that `a` is square with order at least 1 and return the order.
pub fn check_square(a: &Array2<f64>) -> Result<usize> {
    let (rows, cols) = a.dim();
    if rows != cols {
        return Err(DenseSolverError::DimensionMismatch {
            expected: rows,
            got: cols,
        });
    }
    if rows == 0 {
        return Err(DenseSolverError::EmptySystem);
    }
    Ok(rows)
}

/// Check that a vector has length `n`.
#[inline]
pub fn check_len(n: usize, b: &Array1<f64>) -> Result<()> {
    if b.len() != n {
        return Err(DenseSolverError::DimensionMismatch {
            expected: n,
            got: b.len(),
        });
    }
    Ok(())
}

/// Matrix 1-norm: ||A||_1 = max_j Σ_i |a_ij|
pub fn norm1(a: &Array2<f64>) -> f64 {
    a.axis_iter(Axis(1))
        .map(|col| col.iter().map(|v| v.abs()).sum::<f64>())
        .fold(0.0, f64::max)
}

/// Matrix infinity-norm: ||A||_inf = max_i Σ_j |a_ij|
pub fn norm_inf(a: &Array2<f64>) -> f64 {
    a.axis_iter(Axis(0))
        .map(|row| row.iter().map(|v| v.abs()).sum::<f64>())
        .fold(0.0, f64::max)
}

/// Vector 1-norm: ||x||_1 = Σ |x_i|
#[inline]
pub fn vector_norm1(x: &Array1<f64>) -> f64 {
    x.iter().map(|v| v.abs()).sum()
}

/// Vector infinity-norm: ||x||_inf = max |x_i|
#[inline]
pub fn vector_norm_inf(x: &Array1<f64>) -> f64 {
    x.iter().fold(0.0, |acc, v| acc.max(v.abs()))
}

/// Vector 2-norm: ||x||_2 = sqrt(Σ x_i^2)
#[inline]
pub fn vector_norm(x: &Array1<f64>) -> f64 {
    x.iter().map(|v| v * v).sum::<f64>().sqrt()
}

/// Relative residual ||A x - b||_2 / ||b||_2
///
/// Falls back to the absolute residual when `b` is the zero vector.
pub fn relative_residual(a: &Array2<f64>, x: &Array1<f64>, b: &Array1<f64>) -> f64 {
    let r = a.dot(x) - b;
    let r_norm = vector_norm(&r);
    let b_norm = vector_norm(b);
    if b_norm > 0.0 { r_norm / b_norm } else { r_norm }
}

/// Relative error ||approx - exact||_2 / ||exact||_2
///
/// Falls back to the absolute error when `exact` is the zero vector.
pub fn relative_error(approx: &Array1<f64>, exact: &Array1<f64>) -> f64 {
    assert_eq!(
        approx.len(),
        exact.len(),
        "Vector lengths must match for relative error"
    );
    let diff = approx - exact;
    let exact_norm = vector_norm(exact);
    if exact_norm > 0.0 {
        vector_norm(&diff) / exact_norm
    } else {
        vector_norm(&diff)
    }
}
