//! Text parsing for integers, orders, rows and JSON matrices.

use crate::types::{Matrix, Scalar};
use crate::InputError;

/// Parse one integer, ignoring surrounding whitespace.
pub fn parse_int(s: &str) -> Result<Scalar, InputError> {
    let trimmed = s.trim();
    trimmed
        .parse::<Scalar>()
        .map_err(|_| InputError::InvalidInteger(trimmed.to_string()))
}

/// Parse a matrix order; must be a positive integer.
pub fn parse_order(s: &str) -> Result<usize, InputError> {
    let n = parse_int(s)?;
    if n <= 0 {
        return Err(InputError::NonPositiveOrder(n));
    }
    usize::try_from(n).map_err(|_| InputError::InvalidInteger(s.trim().to_string()))
}

/// Parse a row of exactly `expected` integers separated by whitespace and/or commas.
///
/// ```
/// use cofactor_input::parse_row;
///
/// assert_eq!(parse_row("1, 2  -3", 3).unwrap(), vec![1, 2, -3]);
/// assert!(parse_row("1 2", 3).is_err());
/// ```
pub fn parse_row(s: &str, expected: usize) -> Result<Vec<Scalar>, InputError> {
    let values = s
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|tok| !tok.is_empty())
        .map(parse_int)
        .collect::<Result<Vec<_>, _>>()?;

    if values.len() != expected {
        return Err(InputError::RowLength {
            expected,
            found: values.len(),
        });
    }
    Ok(values)
}

/// Parse a matrix written as a JSON list of rows, e.g. `[[1, 2], [3, 4]]`.
pub fn parse_matrix_json(s: &str) -> Result<Matrix, InputError> {
    let rows: Vec<Vec<Scalar>> = serde_json::from_str(s)?;
    Ok(Matrix::from_rows(rows)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MatrixError;

    #[test]
    fn test_parse_int() {
        assert_eq!(parse_int(" 42\n").unwrap(), 42);
        assert_eq!(parse_int("-7").unwrap(), -7);
        assert!(matches!(parse_int("4x"), Err(InputError::InvalidInteger(s)) if s == "4x"));
        assert!(parse_int("").is_err());
        assert!(parse_int("1.5").is_err());
    }

    #[test]
    fn test_parse_order() {
        assert_eq!(parse_order("3").unwrap(), 3);
        assert!(matches!(parse_order("0"), Err(InputError::NonPositiveOrder(0))));
        assert!(matches!(parse_order("-2"), Err(InputError::NonPositiveOrder(-2))));
        assert!(matches!(parse_order("three"), Err(InputError::InvalidInteger(_))));
    }

    #[test]
    fn test_parse_row_length_mismatch() {
        assert!(matches!(
            parse_row("1 2 3 4", 3),
            Err(InputError::RowLength { expected: 3, found: 4 })
        ));
        assert!(matches!(parse_row("1 b 3", 3), Err(InputError::InvalidInteger(_))));
    }

    #[test]
    fn test_parse_matrix_json() {
        let m = parse_matrix_json("[[1, 2], [3, 4]]").unwrap();
        assert_eq!(m.to_rows(), vec![vec![1, 2], vec![3, 4]]);

        assert!(matches!(
            parse_matrix_json("[[1, 2], [3]]"),
            Err(InputError::Matrix(MatrixError::RaggedRow { row: 1, .. }))
        ));
        assert!(matches!(parse_matrix_json("[[1, \"a\"]]"), Err(InputError::Json(_))));
    }
}
