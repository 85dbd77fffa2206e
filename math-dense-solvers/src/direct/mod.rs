//! Direct solvers for linear systems
//!
//! This module provides direct (non-iterative) solvers:
//! - [`lu_factorize`] / [`lu_solve`]: LU decomposition with partial pivoting
//! - [`forward_substitution`] / [`back_substitution`]: triangular solves

mod lu;
mod triangular;

pub use lu::{LuFactorization, lu_factorize, lu_solve};
pub use triangular::{back_substitution, forward_substitution};
