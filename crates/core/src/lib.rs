//! Core determinant module - pure, deterministic, and testable
//!
//! This crate evaluates determinants of square integer matrices by recursive
//! Laplace (cofactor) expansion along the first row. It has **zero
//! dependencies** on I/O, which keeps it:
//!
//! - **Exact**: expansion runs in [`BigInt`], so no intermediate product can overflow
//! - **Pure**: every recursive step builds its own minor, inputs are never mutated
//! - **Testable**: every operation is a plain function of its arguments
//!
//! # Module Structure
//!
//! - [`minor`]: submatrix extraction (delete one row and one column)
//! - [`determinant`]: the recursive expansion and its shape checks
//! - [`engine`]: the configured entry point with an order ceiling
//! - [`ops`]: transpose, product and row operations used to state properties
//!
//! # Cost
//!
//! Recursion depth equals the order `n`. The expansion reaches O(n!) base
//! cases and does O(n! * n^2) work including minor extraction, so it is meant
//! for small matrices. [`Engine`] rejects orders above
//! [`DEFAULT_MAX_ORDER`](cofactor_types::DEFAULT_MAX_ORDER) unless configured
//! otherwise.
//!
//! # Example
//!
//! ```
//! use cofactor_core::{determinant, BigInt};
//! use cofactor_types::Matrix;
//!
//! let m = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 10]]).unwrap();
//! assert_eq!(determinant(&m).unwrap(), BigInt::from(-3));
//! ```

pub mod determinant;
pub mod engine;
pub mod minor;
pub mod ops;

pub use cofactor_types as types;
pub use num_bigint::BigInt;

// Re-export commonly used items for convenience
pub use determinant::{cofactor, determinant};
pub use engine::{Engine, EngineConfig};
pub use minor::minor;
