//! Dense row-major integer/boolean tables.
//!
//! A `Table<T>` is the fixed-width counterpart of [`SparseMatrix`](super::sparse::SparseMatrix):
//! cell connectivity (NC × NVC), cell-to-edge (NC × NEC) and similar tables
//! whose width is known per mesh type.

use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::mesh_error::MeshError;

/// Dense `rows × cols` table stored row-major.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "RawTable<T>",
    bound(deserialize = "T: Deserialize<'de>")
)]
pub struct Table<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

/// Serialized form of [`Table`], checked for shape on the way in.
#[derive(Deserialize)]
struct RawTable<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T> TryFrom<RawTable<T>> for Table<T> {
    type Error = MeshError;

    fn try_from(raw: RawTable<T>) -> Result<Self, Self::Error> {
        Table::try_from_flat(raw.rows, raw.cols, raw.data)
    }
}

impl<T: Copy> Table<T> {
    /// Table filled with `value`.
    pub fn filled(rows: usize, cols: usize, value: T) -> Self {
        Self {
            rows,
            cols,
            data: vec![value; rows * cols],
        }
    }

    /// Build from fixed-width rows.
    pub fn from_rows<const N: usize>(rows: &[[T; N]]) -> Self {
        let mut data = Vec::with_capacity(rows.len() * N);
        for row in rows {
            data.extend_from_slice(row);
        }
        Self {
            rows: rows.len(),
            cols: N,
            data,
        }
    }

    /// Build from variable-length rows, rejecting ragged input.
    ///
    /// An empty input produces a `0 × 0` table.
    pub fn try_from_nested(rows: &[Vec<T>]) -> Result<Self, MeshError> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(MeshError::RaggedCells {
                    cell: i,
                    expected: cols,
                    found: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            data,
        })
    }

    /// Copy the selected rows into a new table.
    pub fn select_rows(&self, indices: &[usize]) -> Self {
        let mut data = Vec::with_capacity(indices.len() * self.cols);
        for &i in indices {
            data.extend_from_slice(self.row(i));
        }
        Self {
            rows: indices.len(),
            cols: self.cols,
            data,
        }
    }
}

impl<T> Table<T> {
    /// Wrap a flat row-major buffer. `data.len()` must equal `rows * cols`.
    pub fn try_from_flat(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, MeshError> {
        if rows.checked_mul(cols) != Some(data.len()) {
            return Err(MeshError::RaggedCells {
                cell: rows,
                expected: rows.saturating_mul(cols),
                found: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Row `i` as a slice.
    #[inline]
    pub fn row(&self, i: usize) -> &[T] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    #[inline]
    pub fn row_mut(&mut self, i: usize) -> &mut [T] {
        &mut self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Iterate rows in order.
    pub fn iter_rows(&self) -> impl ExactSizeIterator<Item = &[T]> + '_ {
        (0..self.rows).map(move |i| self.row(i))
    }

    /// Flat row-major view.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T> Index<(usize, usize)> for Table<T> {
    type Output = T;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &T {
        debug_assert!(j < self.cols, "column {j} out of range ({})", self.cols);
        &self.data[i * self.cols + j]
    }
}

impl<T> IndexMut<(usize, usize)> for Table<T> {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        debug_assert!(j < self.cols, "column {j} out of range ({})", self.cols);
        &mut self.data[i * self.cols + j]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_rows_must_have_equal_length() {
        let err = Table::try_from_nested(&[vec![0usize, 1, 2], vec![0, 1]]).unwrap_err();
        assert_eq!(
            err,
            MeshError::RaggedCells {
                cell: 1,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn row_access_and_selection() {
        let t = Table::from_rows(&[[0usize, 1, 2], [3, 4, 5], [6, 7, 8]]);
        assert_eq!(t.rows(), 3);
        assert_eq!(t.cols(), 3);
        assert_eq!(t.row(1), &[3, 4, 5]);
        assert_eq!(t[(2, 0)], 6);
        let s = t.select_rows(&[2, 0]);
        assert_eq!(s.as_slice(), &[6, 7, 8, 0, 1, 2]);
    }

    #[test]
    fn deserialization_checks_shape() {
        let t: Table<usize> = serde_json::from_str(r#"{"rows":1,"cols":2,"data":[4,5]}"#).unwrap();
        assert_eq!(t.row(0), &[4, 5]);
        let bad = serde_json::from_str::<Table<usize>>(r#"{"rows":2,"cols":2,"data":[4,5]}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn empty_nested_input_is_empty_table() {
        let t: Table<usize> = Table::try_from_nested(&[]).unwrap();
        assert!(t.is_empty());
        assert_eq!(t.cols(), 0);
    }
}
