//! Error types for dense solver operations.
//!
//! Every failure is terminal for the call that raised it: no partial results
//! are returned and nothing is retried internally.

use thiserror::Error;

/// Errors that can occur while factoring or solving dense systems.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DenseSolverError {
    /// A pivot column is identically zero, or U has a zero diagonal entry.
    #[error("matrix is singular: zero pivot in column {column}")]
    SingularMatrix {
        /// Column (elimination step) where the zero pivot was found
        column: usize,
    },

    /// Two interpolation nodes coincide within tolerance.
    #[error("duplicate interpolation nodes at indices {first} and {second}")]
    DuplicateNode {
        /// Index of the earlier node
        first: usize,
        /// Index of the later node
        second: usize,
    },

    /// Matrix is not square, or a vector does not match the matrix order.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch {
        /// Expected length or column count
        expected: usize,
        /// Actual length or column count
        got: usize,
    },

    /// The system has order zero.
    #[error("empty system: order must be at least 1")]
    EmptySystem,
}

/// A specialized `Result` type for dense solver operations.
pub type Result<T> = std::result::Result<T, DenseSolverError>;

impl DenseSolverError {
    /// Returns `true` if this is a singular-matrix error.
    pub fn is_singular(&self) -> bool {
        matches!(self, DenseSolverError::SingularMatrix { .. })
    }

    /// Returns `true` if this is a duplicate-node error.
    pub fn is_duplicate_node(&self) -> bool {
        matches!(self, DenseSolverError::DuplicateNode { .. })
    }

    /// Returns `true` if this is a dimension error (including empty systems).
    pub fn is_dimension_mismatch(&self) -> bool {
        matches!(
            self,
            DenseSolverError::DimensionMismatch { .. } | DenseSolverError::EmptySystem
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singular_display() {
        let err = DenseSolverError::SingularMatrix { column: 2 };
        assert_eq!(err.to_string(), "matrix is singular: zero pivot in column 2");
    }

    #[test]
    fn test_duplicate_node_display() {
        let err = DenseSolverError::DuplicateNode {
            first: 0,
            second: 3,
        };
        assert!(err.to_string().contains("0 and 3"));
    }

    #[test]
    fn test_predicates() {
        let singular = DenseSolverError::SingularMatrix { column: 0 };
        let dup = DenseSolverError::DuplicateNode {
            first: 0,
            second: 1,
        };
        let dim = DenseSolverError::DimensionMismatch {
            expected: 3,
            got: 2,
        };

        assert!(singular.is_singular());
        assert!(!singular.is_duplicate_node());
        assert!(dup.is_duplicate_node());
        assert!(!dup.is_dimension_mismatch());
        assert!(dim.is_dimension_mismatch());
        assert!(DenseSolverError::EmptySystem.is_dimension_mismatch());
    }
}
