//! Interactive matrix entry.
//!
//! Asks for the order, then for every entry in row-major order. Invalid
//! integers, non-positive orders and orders above the ceiling are reported
//! and asked again; only end of input or an I/O failure stops the loop.

use std::io::{BufRead, Write};

use crate::parse::{parse_int, parse_order};
use crate::types::{Matrix, Scalar};
use crate::InputError;

pub const ORDER_PROMPT: &str = "Enter the matrix order (positive integer): ";
pub const INVALID_INTEGER_MSG: &str = "Please enter a valid integer!";
pub const NON_POSITIVE_MSG: &str = "Please enter a positive integer!";

pub struct Prompter<R, W> {
    input: R,
    output: W,
    line: String,
    /// Largest order `read_order` accepts; `None` accepts any.
    max_order: Option<usize>,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            line: String::new(),
            max_order: None,
        }
    }

    pub fn with_max_order(mut self, max_order: Option<usize>) -> Self {
        self.max_order = max_order;
        self
    }

    /// Give back the output sink (used by tests to inspect the transcript).
    pub fn into_output(self) -> W {
        self.output
    }

    /// Prompt until a valid integer is entered.
    pub fn read_int(&mut self, prompt: &str) -> Result<Scalar, InputError> {
        loop {
            let line = self.ask(prompt)?;
            match parse_int(line) {
                Ok(v) => return Ok(v),
                Err(_) => writeln!(self.output, "{}", INVALID_INTEGER_MSG)?,
            }
        }
    }

    /// Prompt until a positive integer no larger than the ceiling is entered.
    pub fn read_order(&mut self, prompt: &str) -> Result<usize, InputError> {
        loop {
            let line = self.ask(prompt)?;
            match parse_order(line) {
                Ok(n) => match self.max_order {
                    Some(max) if n > max => {
                        writeln!(self.output, "Please enter an order no larger than {}!", max)?
                    }
                    _ => return Ok(n),
                },
                Err(InputError::NonPositiveOrder(_)) => {
                    writeln!(self.output, "{}", NON_POSITIVE_MSG)?
                }
                Err(_) => writeln!(self.output, "{}", INVALID_INTEGER_MSG)?,
            }
        }
    }

    /// Ask for the order and then each entry (prompts are 1-based).
    pub fn read_matrix(&mut self) -> Result<Matrix, InputError> {
        let n = self.read_order(ORDER_PROMPT)?;
        let mut rows = Vec::new();
        for i in 0..n {
            let mut row = Vec::new();
            for j in 0..n {
                let prompt = format!("Row {}, column {}: ", i + 1, j + 1);
                row.push(self.read_int(&prompt)?);
            }
            rows.push(row);
        }
        Ok(Matrix::from_rows(rows)?)
    }

    fn ask(&mut self, prompt: &str) -> Result<&str, InputError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        self.line.clear();
        if self.input.read_line(&mut self.line)? == 0 {
            return Err(InputError::UnexpectedEof);
        }
        Ok(self.line.as_str())
    }
}
