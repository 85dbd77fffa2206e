//! Björck–Pereyra solver for Vandermonde systems
//!
//! Solves `V(x) c = b` for the monomial coefficients `c` in O(n²) operations
//! without forming `V`. The forward sweep turns `b` into Newton divided
//! differences; the backward sweep unwinds the nested Newton form into
//! monomial coefficients.

use super::node_gap;
use crate::error::{DenseSolverError, Result};
use ndarray::Array1;

/// Solve the Vandermonde system `V(nodes) c = b`.
///
/// Fails with [`DenseSolverError::DuplicateNode`] when two nodes coincide
/// within [`super::DUPLICATE_NODE_TOLERANCE`]. For large `n` with
/// equispaced nodes the result drifts away from a general LU solve; this
/// reflects the conditioning of `V`, not an error in either solver.
pub fn solve_vandermonde(nodes: &[f64], b: &Array1<f64>) -> Result<Array1<f64>> {
    let n = nodes.len();
    if n == 0 {
        return Err(DenseSolverError::EmptySystem);
    }
    if b.len() != n {
        return Err(DenseSolverError::DimensionMismatch {
            expected: n,
            got: b.len(),
        });
    }

    let x = nodes;
    let mut d = b.clone();

    // Forward sweep: all denominators of a step are checked before any update
    let mut gaps = vec![0.0; n];
    for k in 0..n.saturating_sub(1) {
        for i in (k + 1)..n {
            gaps[i] = node_gap(x, k, i)?;
        }
        let dk = d[k];
        for i in (k + 1)..n {
            d[i] = (d[i] - dk) / gaps[i];
        }
    }

    // Backward sweep
    let mut c = Array1::<f64>::zeros(n);
    c[n - 1] = d[n - 1];
    for k in (0..n - 1).rev() {
        c[k] = d[k] - x[k] * c[k + 1];
        for j in (k + 1)..(n - 1) {
            c[j] -= x[k] * c[j + 1];
        }
    }

    Ok(c)
}
