//! Vandermonde systems in the monomial basis
//!
//! - [`build_vandermonde`]: explicit `V[i, j] = x_i^j`
//! - [`solve_vandermonde`]: Björck–Pereyra O(n²) solve of `V(x) c = b`
//! - [`divided_differences`] / [`newton_to_monomial`]: Newton-form interpolation
//!
//! Nodes closer than [`DUPLICATE_NODE_TOLERANCE`] are treated as duplicates.

mod bjorck_pereyra;
mod builder;
mod newton;

pub use bjorck_pereyra::solve_vandermonde;
pub use builder::build_vandermonde;
pub use newton::{divided_differences, horner, newton_to_monomial};

use crate::error::{DenseSolverError, Result};

/// Absolute tolerance below which two nodes are considered equal
pub const DUPLICATE_NODE_TOLERANCE: f64 = 1e-8;

/// Denominator `x[second] - x[first]`, rejecting coincident nodes.
#[inline]
pub(crate) fn node_gap(x: &[f64], first: usize, second: usize) -> Result<f64> {
    let gap = x[second] - x[first];
    if gap.abs() <= DUPLICATE_NODE_TOLERANCE {
        log::debug!(
            "duplicate nodes x[{}] = {} and x[{}] = {}",
            first,
            x[first],
            second,
            x[second]
        );
        return Err(DenseSolverError::DuplicateNode { first, second });
    }
    Ok(gap)
}
