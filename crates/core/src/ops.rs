//! Matrix helpers - transpose, product and elementary row operations
//!
//! All helpers return a new matrix. They exist to state and check the
//! algebraic properties of the determinant (row swaps negate it, row scaling
//! scales it, it is multiplicative, transposition leaves it unchanged).

use crate::types::{Matrix, MatrixError, Scalar};

pub fn transpose(matrix: &Matrix) -> Matrix {
    Matrix::from_fn(matrix.cols(), matrix.rows(), |r, c| matrix[(c, r)])
}

/// Product `a * b` with checked arithmetic.
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
    if a.cols() != b.rows() {
        return Err(MatrixError::DimensionMismatch {
            left: (a.rows(), a.cols()),
            right: (b.rows(), b.cols()),
        });
    }

    let mut rows = Vec::with_capacity(a.rows());
    for lhs in a.iter_rows() {
        let mut out = Vec::with_capacity(b.cols());
        for c in 0..b.cols() {
            let mut sum: Scalar = 0;
            for (k, x) in lhs.iter().enumerate() {
                let y = b[(k, c)];
                let term = x.checked_mul(y).ok_or(MatrixError::Overflow)?;
                sum = sum.checked_add(term).ok_or(MatrixError::Overflow)?;
            }
            out.push(sum);
        }
        rows.push(out);
    }
    Matrix::from_rows(rows)
}

/// Copy of `matrix` with rows `i` and `j` exchanged.
pub fn swap_rows(matrix: &Matrix, i: usize, j: usize) -> Result<Matrix, MatrixError> {
    check_row(matrix, i)?;
    check_row(matrix, j)?;
    Ok(Matrix::from_fn(matrix.rows(), matrix.cols(), |r, c| {
        let src = if r == i {
            j
        } else if r == j {
            i
        } else {
            r
        };
        matrix[(src, c)]
    }))
}

/// Copy of `matrix` with row `i` multiplied by `k`.
pub fn scale_row(matrix: &Matrix, i: usize, k: Scalar) -> Result<Matrix, MatrixError> {
    check_row(matrix, i)?;
    let mut rows = matrix.to_rows();
    for v in rows[i].iter_mut() {
        *v = v.checked_mul(k).ok_or(MatrixError::Overflow)?;
    }
    Matrix::from_rows(rows)
}

/// Copy of `matrix` with row `i` replaced by `values`.
pub fn with_row(matrix: &Matrix, i: usize, values: &[Scalar]) -> Result<Matrix, MatrixError> {
    check_row(matrix, i)?;
    if values.len() != matrix.cols() {
        return Err(MatrixError::RaggedRow {
            row: i,
            expected: matrix.cols(),
            found: values.len(),
        });
    }
    let mut rows = matrix.to_rows();
    rows[i] = values.to_vec();
    Matrix::from_rows(rows)
}

fn check_row(matrix: &Matrix, i: usize) -> Result<(), MatrixError> {
    if i >= matrix.rows() {
        return Err(MatrixError::IndexOutOfRange {
            row: i,
            col: 0,
            order: matrix.rows(),
        });
    }
    Ok(())
}
