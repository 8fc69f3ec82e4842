//! Determinant by recursive Laplace expansion along the first row
//!
//! Shape is checked once, up front. The recursive body then assumes a square
//! matrix of order n >= 1:
//!
//! - n = 1: the single entry
//! - n = 2: `a*d - b*c`
//! - n >= 3: `sum_j m[0][j] * (-1)^j * det(minor(m, 0, j))`, in column order
//!
//! Products and sums are carried out in [`BigInt`], so the result is exact
//! for any entries the matrix can hold.

use log::{debug, trace};
use num_bigint::BigInt;
use num_traits::Zero;

use crate::minor::minor;
use crate::types::{Matrix, MatrixError};

/// Determinant of a square matrix.
///
/// Fails with [`MatrixError::DegenerateSize`] for an empty matrix and
/// [`MatrixError::NotSquare`] when rows and columns differ. No recursive work
/// is started in either case.
pub fn determinant(matrix: &Matrix) -> Result<BigInt, MatrixError> {
    let n = check_square(matrix)?;
    debug!("determinant: expanding order {}", n);

    let det = expand(matrix, n, 0)?;
    debug!("determinant: order {} -> {}", n, det);
    Ok(det)
}

/// Cofactor `(-1)^(row+col) * det(minor(matrix, row, col))`.
pub fn cofactor(matrix: &Matrix, row: usize, col: usize) -> Result<BigInt, MatrixError> {
    let sub = minor(matrix, row, col)?;
    let n = sub.rows();
    let det = expand(&sub, n, 1)?;
    Ok(if (row + col) % 2 == 0 { det } else { -det })
}

/// Order of `matrix`, or the shape error that rules it out.
pub(crate) fn check_square(matrix: &Matrix) -> Result<usize, MatrixError> {
    if matrix.is_empty() {
        return Err(MatrixError::DegenerateSize);
    }
    matrix.order().ok_or(MatrixError::NotSquare {
        rows: matrix.rows(),
        cols: matrix.cols(),
    })
}

fn expand(matrix: &Matrix, n: usize, depth: usize) -> Result<BigInt, MatrixError> {
    match n {
        1 => entry(matrix, 0, 0),
        2 => {
            let ad = entry(matrix, 0, 0)? * entry(matrix, 1, 1)?;
            let bc = entry(matrix, 0, 1)? * entry(matrix, 1, 0)?;
            Ok(ad - bc)
        }
        _ => {
            trace!("expand: depth {} order {}", depth, n);
            let mut det = BigInt::zero();
            for j in 0..n {
                let a = entry(matrix, 0, j)?;
                // A zero entry contributes nothing; its minor need not be built.
                if a.is_zero() {
                    continue;
                }
                let sub = minor(matrix, 0, j)?;
                let term = a * expand(&sub, n - 1, depth + 1)?;
                if j % 2 == 0 {
                    det += term;
                } else {
                    det -= term;
                }
            }
            Ok(det)
        }
    }
}

#[inline]
fn entry(matrix: &Matrix, row: usize, col: usize) -> Result<BigInt, MatrixError> {
    matrix
        .get(row, col)
        .map(BigInt::from)
        .ok_or(MatrixError::IndexOutOfRange {
            row,
            col,
            order: matrix.rows(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::types::Scalar;

    fn m(rows: Vec<Vec<Scalar>>) -> Matrix {
        Matrix::from_rows(rows).unwrap()
    }

    fn big(v: i64) -> Result<BigInt, MatrixError> {
        Ok(BigInt::from(v))
    }

    #[test]
    fn test_base_cases() {
        assert_eq!(determinant(&m(vec![vec![5]])), big(5));
        assert_eq!(determinant(&m(vec![vec![-7]])), big(-7));
        assert_eq!(determinant(&m(vec![vec![1, 2], vec![3, 4]])), big(-2));
        assert_eq!(determinant(&m(vec![vec![1, 2], vec![1, 2]])), big(0));
    }

    #[test]
    fn test_three_by_three() {
        let a = m(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 10]]);
        assert_eq!(determinant(&a), big(-3));
        assert_eq!(determinant(&Matrix::identity(3)), big(1));
    }

    #[test]
    fn test_zero_first_row_entries_are_skipped_without_changing_result() {
        // Expanding [[0, 2, 0], [1, 3, 4], [5, 6, 7]] along the first row
        // leaves only the j = 1 term: -2 * (1*7 - 4*5) = 26.
        let a = m(vec![vec![0, 2, 0], vec![1, 3, 4], vec![5, 6, 7]]);
        assert_eq!(determinant(&a), big(26));
    }

    #[test]
    fn test_shape_errors() {
        let tall = m(vec![vec![1, 2], vec![3, 4], vec![5, 6]]);
        assert_eq!(
            determinant(&tall),
            Err(MatrixError::NotSquare { rows: 3, cols: 2 })
        );
        assert_eq!(determinant(&m(vec![])), Err(MatrixError::DegenerateSize));
        assert_eq!(determinant(&m(vec![vec![]])), Err(MatrixError::DegenerateSize));
    }

    #[test]
    fn test_large_entries_stay_exact() {
        // a*d and b*c are far outside i128, their difference is not.
        let huge = Scalar::MAX / 2;
        let singular = m(vec![vec![huge, huge], vec![huge, huge]]);
        assert_eq!(determinant(&singular), big(0));

        let diag = m(vec![vec![huge, 0], vec![0, huge]]);
        assert_eq!(determinant(&diag), Ok(BigInt::from(huge) * BigInt::from(huge)));
    }

    #[test]
    fn test_cofactor_signs() {
        let a = m(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 10]]);
        // minor(0,0) = [[5,6],[8,10]] -> 2
        assert_eq!(cofactor(&a, 0, 0), big(2));
        // minor(0,1) = [[4,6],[7,10]] -> -2, sign -1
        assert_eq!(cofactor(&a, 0, 1), big(2));
        // minor(1,0) = [[2,3],[8,10]] -> -4, sign -1
        assert_eq!(cofactor(&a, 1, 0), big(4));
    }
}
