//! Newton-form interpolation helpers
//!
//! The Newton form of the interpolating polynomial through `(x_i, y_i)` is
//!
//! ```text
//! P(t) = c_0 + c_1 (t - x_0) + c_2 (t - x_0)(t - x_1) + ... + c_{n-1} (t - x_0)...(t - x_{n-2})
//! ```
//!
//! where `c_k` are the divided differences `f[x_0, ..., x_k]`.

use super::node_gap;
use crate::error::{DenseSolverError, Result};
use ndarray::Array1;

/// Newton divided-difference coefficients of the polynomial through `(nodes, values)`.
pub fn divided_differences(nodes: &[f64], values: &Array1<f64>) -> Result<Array1<f64>> {
    let n = nodes.len();
    if n == 0 {
        return Err(DenseSolverError::EmptySystem);
    }
    if values.len() != n {
        return Err(DenseSolverError::DimensionMismatch {
            expected: n,
            got: values.len(),
        });
    }

    let mut coef = values.clone();
    for j in 1..n {
        // Descending so coef[i - 1] still holds the previous level
        for i in (j..n).rev() {
            let gap = node_gap(nodes, i - j, i)?;
            coef[i] = (coef[i] - coef[i - 1]) / gap;
        }
    }
    Ok(coef)
}

/// Expand Newton-form coefficients into monomial coefficients `[a_0, a_1, ...]`.
///
/// Only `nodes[0..n-1]` enter the Newton basis; the last node is accepted so
/// the same node slice can be passed to both helpers.
pub fn newton_to_monomial(nodes: &[f64], coef: &Array1<f64>) -> Result<Array1<f64>> {
    let n = coef.len();
    if n == 0 {
        return Err(DenseSolverError::EmptySystem);
    }
    if nodes.len() != n {
        return Err(DenseSolverError::DimensionMismatch {
            expected: n,
            got: nodes.len(),
        });
    }

    // poly holds the coefficients of the partial Horner sum, lowest degree first
    let mut poly = Array1::<f64>::zeros(n);
    poly[0] = coef[n - 1];
    let mut degree = 0;
    for k in (0..n - 1).rev() {
        // poly <- (t - x_k) * poly + coef[k]
        for j in (1..=degree + 1).rev() {
            poly[j] = poly[j - 1] - nodes[k] * poly[j];
        }
        poly[0] = -nodes[k] * poly[0] + coef[k];
        degree += 1;
    }
    Ok(poly)
}

/// Evaluate `Σ a_j t^j` with Horner's rule.
pub fn horner(coef: &Array1<f64>, t: f64) -> f64 {
    coef.iter().rev().fold(0.0, |acc, &a| acc * t + a)
}
