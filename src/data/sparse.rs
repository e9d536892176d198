//! Compressed sparse row (CSR) matrices for incidence and adjacency queries.
//!
//! Column indices within each row are sorted and unique. Duplicate triplets
//! are merged with a caller-supplied combiner (boolean patterns use `||`).

use serde::{Deserialize, Serialize};

use crate::data::adjacency::AdjacencyList;

/// CSR sparse matrix with values of type `T`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SparseMatrix<T> {
    nrows: usize,
    ncols: usize,
    /// `offsets[i]..offsets[i + 1]` is the range of row `i` in `indices`/`values`.
    offsets: Vec<usize>,
    indices: Vec<usize>,
    values: Vec<T>,
}

/// Boolean incidence/adjacency pattern.
pub type SparsePattern = SparseMatrix<bool>;

impl<T: Copy> SparseMatrix<T> {
    /// Empty `nrows × ncols` matrix.
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self {
            nrows,
            ncols,
            offsets: vec![0; nrows + 1],
            indices: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Assemble from `(row, col, value)` triplets, merging duplicates with `combine`.
    ///
    /// Panics in debug builds if a triplet lies outside the matrix shape.
    pub fn from_triplets_with<I, F>(nrows: usize, ncols: usize, triplets: I, combine: F) -> Self
    where
        I: IntoIterator<Item = (usize, usize, T)>,
        F: Fn(T, T) -> T,
    {
        let mut entries: Vec<(usize, usize, T)> = triplets.into_iter().collect();
        debug_assert!(
            entries.iter().all(|&(i, j, _)| i < nrows && j < ncols),
            "triplet out of bounds for {nrows}x{ncols} matrix"
        );
        // stable: duplicates combine in insertion order
        entries.sort_by_key(|&(i, j, _)| (i, j));

        let mut offsets = vec![0usize; nrows + 1];
        let mut indices = Vec::with_capacity(entries.len());
        let mut values: Vec<T> = Vec::with_capacity(entries.len());
        let mut last: Option<(usize, usize)> = None;
        for (i, j, v) in entries {
            if last == Some((i, j)) {
                if let Some(prev) = values.last_mut() {
                    *prev = combine(*prev, v);
                }
                continue;
            }
            last = Some((i, j));
            offsets[i + 1] += 1;
            indices.push(j);
            values.push(v);
        }
        for i in 0..nrows {
            offsets[i + 1] += offsets[i];
        }

        Self {
            nrows,
            ncols,
            offsets,
            indices,
            values,
        }
    }

    /// Transposed copy.
    pub fn transpose(&self) -> Self {
        let mut counts = vec![0usize; self.ncols + 1];
        for &j in &self.indices {
            counts[j + 1] += 1;
        }
        for j in 0..self.ncols {
            counts[j + 1] += counts[j];
        }
        let offsets = counts.clone();
        let mut cursor = counts;
        let mut indices = vec![0usize; self.indices.len()];
        let mut slots: Vec<Option<T>> = vec![None; self.values.len()];
        // rows are visited in ascending order, so each transposed row stays sorted
        for i in 0..self.nrows {
            for k in self.offsets[i]..self.offsets[i + 1] {
                let j = self.indices[k];
                let dst = cursor[j];
                indices[dst] = i;
                slots[dst] = Some(self.values[k]);
                cursor[j] += 1;
            }
        }
        Self {
            nrows: self.ncols,
            ncols: self.nrows,
            offsets,
            indices,
            values: slots.into_iter().flatten().collect(),
        }
    }

    /// Value stored at `(i, j)`, if any.
    pub fn get(&self, i: usize, j: usize) -> Option<T> {
        let cols = self.row_indices(i);
        cols.binary_search(&j)
            .ok()
            .map(|k| self.values[self.offsets[i] + k])
    }

    /// All stored entries as `(row, col, value)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, T)> + '_ {
        (0..self.nrows).flat_map(move |i| {
            (self.offsets[i]..self.offsets[i + 1]).map(move |k| (i, self.indices[k], self.values[k]))
        })
    }
}

impl<T> SparseMatrix<T> {
    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Number of stored entries.
    #[inline]
    pub fn nnz(&self) -> usize {
        self.indices.len()
    }

    /// Sorted column indices of row `i`.
    #[inline]
    pub fn row_indices(&self, i: usize) -> &[usize] {
        &self.indices[self.offsets[i]..self.offsets[i + 1]]
    }

    /// Values of row `i`, aligned with [`row_indices`](Self::row_indices).
    #[inline]
    pub fn row_values(&self, i: usize) -> &[T] {
        &self.values[self.offsets[i]..self.offsets[i + 1]]
    }

    #[inline]
    pub fn contains(&self, i: usize, j: usize) -> bool {
        self.row_indices(i).binary_search(&j).is_ok()
    }

    /// Number of stored entries per row.
    pub fn row_counts(&self) -> Vec<usize> {
        self.offsets.windows(2).map(|w| w[1] - w[0]).collect()
    }

    /// Raw CSR offsets (`nrows + 1` entries).
    #[inline]
    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    /// Boolean product pattern `self · other`: `(i, k)` is stored iff some `j`
    /// has both `(i, j)` in `self` and `(j, k)` in `other`.
    pub fn pattern_product<U>(&self, other: &SparseMatrix<U>) -> SparsePattern {
        debug_assert_eq!(self.ncols, other.nrows, "shape mismatch in product");
        let mut marker = vec![usize::MAX; other.ncols];
        let mut offsets = Vec::with_capacity(self.nrows + 1);
        let mut indices = Vec::new();
        offsets.push(0);
        for i in 0..self.nrows {
            let start = indices.len();
            for &j in self.row_indices(i) {
                for &k in other.row_indices(j) {
                    if marker[k] != i {
                        marker[k] = i;
                        indices.push(k);
                    }
                }
            }
            indices[start..].sort_unstable();
            offsets.push(indices.len());
        }
        let nnz = indices.len();
        SparseMatrix {
            nrows: self.nrows,
            ncols: other.ncols,
            offsets,
            indices,
            values: vec![true; nnz],
        }
    }

    /// Compressed adjacency list with the same row structure as this matrix.
    pub fn to_adjacency_list(&self) -> AdjacencyList {
        AdjacencyList {
            xadj: self.offsets.clone(),
            adjncy: self.indices.clone(),
        }
    }
}

impl SparsePattern {
    /// Assemble a boolean pattern from `(row, col)` pairs.
    pub fn from_pattern<I>(nrows: usize, ncols: usize, pairs: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        Self::from_triplets_with(
            nrows,
            ncols,
            pairs.into_iter().map(|(i, j)| (i, j, true)),
            |a, b| a || b,
        )
    }
}
