//! Cofactor (workspace facade crate).
//!
//! Re-exports the member crates under short names so callers can write
//! `cofactor::core::determinant` and `cofactor::types::Matrix`. The command
//! line front-end lives in [`cli`].

pub mod cli;

pub use cofactor_core as core;
pub use cofactor_input as input;
pub use cofactor_types as types;

pub use cofactor_core::{determinant, BigInt, Engine, EngineConfig};
pub use cofactor_types::{Matrix, MatrixError, Scalar};
