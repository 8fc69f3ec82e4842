//! Configured entry point with an order ceiling
//!
//! [`determinant`](crate::determinant) itself has no cutoff. Callers that
//! take matrices from outside (the console front-end) go through [`Engine`],
//! which rejects orders above the configured maximum before any expansion
//! starts, since cost grows factorially with the order.

use log::{debug, warn};
use num_bigint::BigInt;

use crate::determinant::{check_square, determinant};
use crate::types::{Matrix, MatrixError, DEFAULT_MAX_ORDER, MAX_ORDER_ENV};

/// Engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Largest accepted order; `None` disables the ceiling.
    pub max_order: Option<usize>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_order: Some(DEFAULT_MAX_ORDER),
        }
    }
}

impl EngineConfig {
    /// Create from environment variables (`COFACTOR_MAX_ORDER`)
    pub fn from_env() -> Self {
        let raw = std::env::var(MAX_ORDER_ENV).ok();
        Self {
            max_order: parse_max_order(raw.as_deref()),
        }
    }

    pub fn with_max_order(mut self, max_order: Option<usize>) -> Self {
        self.max_order = max_order;
        self
    }

    pub fn unbounded() -> Self {
        Self { max_order: None }
    }
}

/// Interpret a ceiling value from the environment.
///
/// Missing or unparsable values fall back to [`DEFAULT_MAX_ORDER`]; see
/// [`parse_max_order_value`] for the accepted spellings.
pub fn parse_max_order(raw: Option<&str>) -> Option<usize> {
    let Some(raw) = raw else {
        return Some(DEFAULT_MAX_ORDER);
    };
    match parse_max_order_value(raw) {
        Some(max) => max,
        None => {
            warn!(
                "{}: ignoring invalid value {:?}, using {}",
                MAX_ORDER_ENV, raw, DEFAULT_MAX_ORDER
            );
            Some(DEFAULT_MAX_ORDER)
        }
    }
}

/// Strict form of [`parse_max_order`]: `None` when `raw` is not a ceiling.
///
/// A positive integer sets the ceiling; `0`, `none` and `off` disable it.
pub fn parse_max_order_value(raw: &str) -> Option<Option<usize>> {
    let value = raw.trim();
    if value.eq_ignore_ascii_case("none") || value.eq_ignore_ascii_case("off") {
        return Some(None);
    }
    match value.parse::<usize>() {
        Ok(0) => Some(None),
        Ok(n) => Some(Some(n)),
        Err(_) => None,
    }
}

#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Check shape, then the ceiling, then expand.
    pub fn determinant(&self, matrix: &Matrix) -> Result<BigInt, MatrixError> {
        let order = check_square(matrix)?;
        if let Some(max) = self.config.max_order {
            if order > max {
                debug!("engine: rejecting order {} (max {})", order, max);
                return Err(MatrixError::TooLarge { order, max });
            }
        }
        determinant(matrix)
    }
}
