//! Matrix module - immutable integer grid
//!
//! A matrix is a rows x cols grid of [`Scalar`] stored in a flat vector,
//! row-major (`row * cols + col`). Coordinates are `(row, col)`, 0-indexed.
//!
//! The value may be non-square or empty; only the engine cares about shape
//! and it reports those cases as errors. Once built a matrix is never
//! mutated: the helpers in `cofactor-core` always return fresh values.

use std::fmt;
use std::ops::Index;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{MatrixError, Scalar};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    /// Row-major entries, `rows * cols` long
    cells: Vec<Scalar>,
}

impl Matrix {
    /// Build from a list of rows.
    ///
    /// Every row must have the same length as the first one. An empty list
    /// gives the empty 0x0 matrix.
    pub fn from_rows(rows: Vec<Vec<Scalar>>) -> Result<Self, MatrixError> {
        let row_count = rows.len();
        let cols = rows.first().map_or(0, Vec::len);

        let mut cells = Vec::with_capacity(row_count * cols);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != cols {
                return Err(MatrixError::RaggedRow {
                    row: i,
                    expected: cols,
                    found: row.len(),
                });
            }
            cells.extend(row);
        }

        Ok(Self {
            rows: row_count,
            cols,
            cells,
        })
    }

    /// Build a rows x cols matrix from a function of `(row, col)`.
    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> Scalar,
    {
        let mut cells = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                cells.push(f(r, c));
            }
        }
        Self { rows, cols, cells }
    }

    /// All-zero matrix
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![0; rows * cols],
        }
    }

    /// n x n identity
    pub fn identity(n: usize) -> Self {
        Self::from_fn(n, n, |r, c| if r == c { 1 } else { 0 })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `Some(n)` for an n x n matrix, `None` otherwise.
    pub fn order(&self) -> Option<usize> {
        self.is_square().then_some(self.rows)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// True when there are no entries at all.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline(always)]
    fn offset(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(row * self.cols + col)
    }

    /// Entry at `(row, col)`, `None` if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Scalar> {
        self.offset(row, col).map(|idx| self.cells[idx])
    }

    /// Row `row` as a slice, `None` if out of bounds.
    pub fn row(&self, row: usize) -> Option<&[Scalar]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        Some(&self.cells[start..start + self.cols])
    }

    /// Iterate over rows as slices.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Scalar]> + '_ {
        (0..self.rows).map(move |r| {
            let start = r * self.cols;
            &self.cells[start..start + self.cols]
        })
    }

    /// Copy out as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<Scalar>> {
        self.iter_rows().map(<[Scalar]>::to_vec).collect()
    }
}

/// Direct access to `(row, col)`.
///
/// Panics when out of bounds; use [`Matrix::get`] for a checked lookup.
impl Index<(usize, usize)> for Matrix {
    type Output = Scalar;

    fn index(&self, (row, col): (usize, usize)) -> &Scalar {
        match self.offset(row, col) {
            Some(idx) => &self.cells[idx],
            None => panic!(
                "index ({}, {}) out of range for {}x{} matrix",
                row, col, self.rows, self.cols
            ),
        }
    }
}

impl fmt::Display for Matrix {
    /// One bracketed row per line: `[1, 2, 3]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.iter_rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for (j, v) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", v)?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}

// Serialized as a list of rows; deserialization goes through `from_rows`.
impl Serialize for Matrix {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_rows().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Matrix {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let rows = Vec::<Vec<Scalar>>::deserialize(deserializer)?;
        Matrix::from_rows(rows).map_err(serde::de::Error::custom)
    }
}
