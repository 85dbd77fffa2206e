//! Row permutations produced by partial pivoting
//!
//! Stored as a compact index array: `perm[k]` is the row of the original
//! matrix that ends up at position `k`. Applying the permutation to the
//! rows of `A` gives exactly `P * A`, where `P` is [`Permutation::to_matrix`].

use ndarray::{Array1, Array2};

/// A bijection on `{0, ..., n-1}` describing a row reordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permutation {
    perm: Vec<usize>,
}

impl Permutation {
    /// Identity permutation of order `n`
    pub fn identity(n: usize) -> Self {
        Self {
            perm: (0..n).collect(),
        }
    }

    /// Build from an index array, returning `None` if it is not a bijection.
    pub fn from_indices(perm: Vec<usize>) -> Option<Self> {
        let n = perm.len();
        let mut seen = vec![false; n];
        for &p in &perm {
            if p >= n || seen[p] {
                return None;
            }
            seen[p] = true;
        }
        Some(Self { perm })
    }

    /// Order of the permutation
    #[inline]
    pub fn len(&self) -> usize {
        self.perm.len()
    }

    /// Whether the permutation is of order zero
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.perm.is_empty()
    }

    /// The underlying index array
    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        &self.perm
    }

    /// Exchange positions `i` and `j`
    #[inline]
    pub fn swap(&mut self, i: usize, j: usize) {
        self.perm.swap(i, j);
    }

    /// Compute `P * b`
    pub fn apply(&self, b: &Array1<f64>) -> Array1<f64> {
        assert_eq!(b.len(), self.len(), "Vector length must match permutation");
        Array1::from_iter(self.perm.iter().map(|&p| b[p]))
    }

    /// Compute `P * A` by gathering rows of `a`
    pub fn apply_rows(&self, a: &Array2<f64>) -> Array2<f64> {
        assert_eq!(a.nrows(), self.len(), "Row count must match permutation");
        let mut out = Array2::zeros(a.dim());
        for (k, &p) in self.perm.iter().enumerate() {
            out.row_mut(k).assign(&a.row(p));
        }
        out
    }

    /// The inverse permutation, so that `inverse().apply(&apply(&b)) == b`
    pub fn inverse(&self) -> Self {
        let mut inv = vec![0; self.len()];
        for (k, &p) in self.perm.iter().enumerate() {
            inv[p] = k;
        }
        Self { perm: inv }
    }

    /// Explicit 0/1 permutation matrix `P` with `P[k, perm[k]] = 1`
    pub fn to_matrix(&self) -> Array2<f64> {
        let n = self.len();
        let mut p = Array2::zeros((n, n));
        for (k, &col) in self.perm.iter().enumerate() {
            p[[k, col]] = 1.0;
        }
        p
    }

    /// Parity: `1.0` for an even permutation, `-1.0` for an odd one
    pub fn sign(&self) -> f64 {
        let n = self.len();
        let mut visited = vec![false; n];
        let mut transpositions = 0;
        for start in 0..n {
            if visited[start] {
                continue;
            }
            let mut len = 0;
            let mut i = start;
            while !visited[i] {
                visited[i] = true;
                i = self.perm[i];
                len += 1;
            }
            transpositions += len - 1;
        }
        if transpositions % 2 == 0 { 1.0 } else { -1.0 }
    }
}
