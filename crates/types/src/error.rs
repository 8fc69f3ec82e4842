//! Error taxonomy shared by the engine and its helpers.
//!
//! Every variant is structural: it describes a bad shape or an out-of-range
//! request, so none of them is ever worth retrying.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// Row count differs from column count.
    #[error("matrix is not square: {rows} rows, {cols} columns")]
    NotSquare { rows: usize, cols: usize },

    /// Empty matrix (n < 1), or a matrix too small to have a minor.
    #[error("matrix order is too small for this operation")]
    DegenerateSize,

    /// Row or column index outside `[0, order - 1]`.
    ///
    /// Coming out of the determinant engine this is a bug in the engine,
    /// not a property of the input.
    #[error("index ({row}, {col}) out of range for order {order}")]
    IndexOutOfRange { row: usize, col: usize, order: usize },

    /// A row whose length differs from the first row.
    #[error("row {row} has {found} entries, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Inner dimensions of a product do not agree.
    #[error("cannot multiply {}x{} by {}x{}", .left.0, .left.1, .right.0, .right.1)]
    DimensionMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },

    /// Checked `i128` arithmetic in a matrix helper left the `Scalar` range.
    #[error("integer overflow in matrix arithmetic")]
    Overflow,

    /// Order above the configured ceiling.
    #[error("matrix order {order} exceeds the configured maximum of {max}")]
    TooLarge { order: usize, max: usize },
}
