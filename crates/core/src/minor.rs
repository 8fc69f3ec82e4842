//! Minor extraction - delete one row and one column
//!
//! The minor is a new owned matrix. Relative order of the surviving rows and
//! columns is preserved and the parent is left untouched.

use crate::types::{Matrix, MatrixError};

/// Submatrix of `matrix` without `row` and `col`.
///
/// `matrix` must be square with order n >= 2, and both indices must lie in
/// `[0, n - 1]`.
pub fn minor(matrix: &Matrix, row: usize, col: usize) -> Result<Matrix, MatrixError> {
    let n = match matrix.order() {
        Some(n) if n >= 2 => n,
        Some(_) => return Err(MatrixError::DegenerateSize),
        None => {
            return Err(MatrixError::NotSquare {
                rows: matrix.rows(),
                cols: matrix.cols(),
            })
        }
    };
    if row >= n || col >= n {
        return Err(MatrixError::IndexOutOfRange { row, col, order: n });
    }

    Ok(strip(matrix, n, row, col))
}

/// Unchecked core of [`minor`]; `row` and `col` are known to be in range.
fn strip(matrix: &Matrix, n: usize, row: usize, col: usize) -> Matrix {
    Matrix::from_fn(n - 1, n - 1, |r, c| {
        let src_row = if r < row { r } else { r + 1 };
        let src_col = if c < col { c } else { c + 1 };
        matrix[(src_row, src_col)]
    })
}
