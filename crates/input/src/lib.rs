//! Console input module (engine-facing).
//!
//! Turns text into [`Matrix`](cofactor_types::Matrix) values. Two sources are
//! supported:
//!
//! - interactive entry through [`Prompter`], which asks for the order and
//!   then every entry, re-prompting on invalid integers
//! - a JSON document holding the matrix as a list of rows
//!
//! The prompter works on any `BufRead`/`Write` pair, so it can be driven from
//! a terminal or from an in-memory buffer in tests.

pub mod error;
pub mod parse;
pub mod prompt;

pub use cofactor_types as types;

pub use error::InputError;
pub use parse::{parse_int, parse_matrix_json, parse_order, parse_row};
pub use prompt::Prompter;
