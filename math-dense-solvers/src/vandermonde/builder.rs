//! Vandermonde matrix construction

use crate::error::{DenseSolverError, Result};
use ndarray::{Array2, ArrayView1};

/// Build the Vandermonde matrix `V[i, j] = x_i^j` for `j = 0..n`.
///
/// Columns are built recursively: column 0 is all ones and column `j` is
/// column `j - 1` multiplied elementwise by the nodes.
pub fn build_vandermonde(nodes: &[f64]) -> Result<Array2<f64>> {
    let n = nodes.len();
    if n == 0 {
        return Err(DenseSolverError::EmptySystem);
    }

    let x = ArrayView1::from(nodes);
    let mut v = Array2::<f64>::ones((n, n));
    for j in 1..n {
        let prev = &v.column(j - 1) * &x;
        v.column_mut(j).assign(&prev);
    }
    Ok(v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_small_literal() {
        let v = build_vandermonde(&[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(
            v,
            array![[1.0, 1.0, 1.0], [1.0, 2.0, 4.0], [1.0, 3.0, 9.0]]
        );
    }

    #[test]
    fn test_single_node() {
        let v = build_vandermonde(&[7.5]).unwrap();
        assert_eq!(v, array![[1.0]]);
    }

    #[test]
    fn test_negative_and_zero_nodes() {
        let v = build_vandermonde(&[-2.0, 0.0, 0.5, 1.0]).unwrap();

        assert_eq!(v.row(0).to_vec(), vec![1.0, -2.0, 4.0, -8.0]);
        assert_eq!(v.row(1).to_vec(), vec![1.0, 0.0, 0.0, 0.0]);
        assert_eq!(v.row(2).to_vec(), vec![1.0, 0.5, 0.25, 0.125]);
    }

    #[test]
    fn test_empty_nodes() {
        assert_eq!(build_vandermonde(&[]), Err(DenseSolverError::EmptySystem));
    }
}
