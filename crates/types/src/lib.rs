//! Core types module - shared data structures and constants
//!
//! This crate defines the value types used throughout the workspace. They are
//! plain data with no I/O, so they can be used by the engine, the console
//! front-end and the tests alike.
//!
//! # Scalars
//!
//! Entries are [`Scalar`] (`i128`). The determinant itself is evaluated in
//! arbitrary precision by `cofactor-core`; only the matrix helpers there
//! (product, row scaling) stay in `Scalar` and report
//! [`MatrixError::Overflow`] instead of wrapping.
//!
//! # Limits
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_MAX_ORDER` | 10 | Default ceiling on `n` applied by the configured engine |
//! | `MAX_ORDER_ENV` | `COFACTOR_MAX_ORDER` | Environment override for the ceiling |
//!
//! Laplace expansion costs O(n!) base cases, so a 10×10 matrix already means
//! millions of 2×2 evaluations. The bare `determinant` function has no ceiling;
//! only the configured engine enforces one.
//!
//! # Examples
//!
//! ```
//! use cofactor_types::{Matrix, MatrixError};
//!
//! let m = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
//! assert_eq!(m.order(), Some(2));
//! assert_eq!(m.get(1, 0), Some(3));
//!
//! // Ragged rows are rejected at construction
//! let err = Matrix::from_rows(vec![vec![1, 2], vec![3]]).unwrap_err();
//! assert_eq!(err, MatrixError::RaggedRow { row: 1, expected: 2, found: 1 });
//! ```

pub mod error;
pub mod matrix;

pub use error::MatrixError;
pub use matrix::Matrix;

/// Integer type for matrix entries.
pub type Scalar = i128;

/// Default ceiling on the matrix order accepted by the configured engine.
pub const DEFAULT_MAX_ORDER: usize = 10;

/// Environment variable overriding [`DEFAULT_MAX_ORDER`].
pub const MAX_ORDER_ENV: &str = "COFACTOR_MAX_ORDER";
