//! Dense linear solvers and conditioning estimates
//!
//! This crate provides small, single-threaded `f64` kernels for square dense
//! systems:
//!
//! # Features
//!
//! - **LU**: Doolittle factorization with partial pivoting (`P A = L U`)
//!   and the matching triangular solvers
//! - **Vandermonde**: monomial-basis matrix builder and the Björck–Pereyra
//!   O(n²) solver, plus Newton divided-difference helpers
//! - **Conditioning**: Hager-style 1-norm condition number estimator that
//!   accepts any [`LinearSolve`] implementation, including closures
//!
//! Every call works on private copies of its inputs and keeps no state
//! between calls.
//!
//! # Example
//!
//! ```
//! use math_audio_dense_solvers::{LuSolver, build_vandermonde, estimate_condition_1, lu_solve, solve_vandermonde};
//! use ndarray::array;
//!
//! let nodes = [0.0, 0.5, 1.0];
//! let b = array![1.0, 2.0, 4.0];
//!
//! let c_fast = solve_vandermonde(&nodes, &b).unwrap();
//! let v = build_vandermonde(&nodes).unwrap();
//! let c_lu = lu_solve(&v, &b).unwrap();
//! assert!((c_fast[2] - c_lu[2]).abs() < 1e-12);
//!
//! let estimate = estimate_condition_1(&v, &LuSolver).unwrap();
//! assert!(estimate.kappa1 >= 1.0);
//! ```

pub mod condition;
pub mod direct;
pub mod error;
pub mod norms;
pub mod permutation;
pub mod traits;
pub mod vandermonde;

// Re-export main types
pub use error::{DenseSolverError, Result};
pub use permutation::Permutation;
pub use traits::{LinearSolve, LuSolver};

// Re-export direct solvers
pub use direct::{LuFactorization, back_substitution, forward_substitution, lu_factorize, lu_solve};

// Re-export Vandermonde tools
pub use vandermonde::{
    DUPLICATE_NODE_TOLERANCE, build_vandermonde, divided_differences, horner, newton_to_monomial,
    solve_vandermonde,
};

// Re-export conditioning
pub use condition::{
    ConditionConfig, ConditionEstimate, estimate_condition_1, estimate_condition_1_with_config,
};
pub use norms::{norm_inf, norm1, relative_error, relative_residual};
