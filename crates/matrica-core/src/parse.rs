//! Parsing of the plain-text matrix format.
//!
//! The format is line-oriented: the first line holds the row and column
//! counts, each following line holds one matrix row of whitespace-separated
//! numbers. Dimensions must lie in `1..=20` and every entry must satisfy
//! `|value| <= 1e9`.

use thiserror::Error;

use crate::matrix::{Mat, MAX_DIM, MAX_ENTRY};

/// Errors produced while parsing a text matrix.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ParseError {
    /// The size header line is missing or does not hold two integers.
    #[error("expected a header line with two dimensions")]
    BadHeader,

    /// The header dimensions fall outside `1..=MAX_DIM`.
    #[error("dimensions {rows}x{cols} outside supported range 1..={MAX_DIM}")]
    DimensionOutOfRange {
        /// Declared number of rows.
        rows: usize,
        /// Declared number of columns.
        cols: usize,
    },

    /// A square matrix was required but the header declared otherwise.
    #[error("matrix must be square, got {rows}x{cols}")]
    NotSquare {
        /// Declared number of rows.
        rows: usize,
        /// Declared number of columns.
        cols: usize,
    },

    /// Fewer data lines than the declared row count.
    #[error("missing row {row}")]
    MissingRow {
        /// Zero-based index of the missing row.
        row: usize,
    },

    /// A data line held the wrong number of entries.
    #[error("row {row} has {found} entries, expected {expected}")]
    RowLength {
        /// Zero-based row index.
        row: usize,
        /// Declared column count.
        expected: usize,
        /// Number of entries found on the line.
        found: usize,
    },

    /// An entry failed to parse as a finite number within bounds.
    #[error("row {row}: invalid entry {token:?}")]
    BadEntry {
        /// Zero-based row index.
        row: usize,
        /// The offending token.
        token: String,
    },
}

/// Parses a matrix from text.
///
/// With `must_be_square` set, a non-square header is rejected up front so
/// callers never feed rectangular input to square-only operations.
///
/// # Errors
///
/// Returns a [`ParseError`] describing the first malformed line or entry.
pub fn matrix_from_str(input: &str, must_be_square: bool) -> Result<Mat, ParseError> {
    let mut lines = input.lines();

    let header = lines.next().ok_or(ParseError::BadHeader)?;
    let mut dims = header.split_whitespace();
    let rows: usize = dims
        .next()
        .and_then(|t| t.parse().ok())
        .ok_or(ParseError::BadHeader)?;
    let cols: usize = dims
        .next()
        .and_then(|t| t.parse().ok())
        .ok_or(ParseError::BadHeader)?;

    if !(1..=MAX_DIM).contains(&rows) || !(1..=MAX_DIM).contains(&cols) {
        return Err(ParseError::DimensionOutOfRange { rows, cols });
    }
    if must_be_square && rows != cols {
        return Err(ParseError::NotSquare { rows, cols });
    }

    let mut matrix = Mat::zeros(rows, cols);
    for row in 0..rows {
        let line = lines.next().ok_or(ParseError::MissingRow { row })?;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != cols {
            return Err(ParseError::RowLength {
                row,
                expected: cols,
                found: tokens.len(),
            });
        }
        for (col, token) in tokens.iter().enumerate() {
            matrix[(row, col)] = parse_entry(token, row)?;
        }
    }
    Ok(matrix)
}

/// Parses a single entry, enforcing finiteness and the `MAX_ENTRY` bound.
///
/// # Errors
///
/// Returns [`ParseError::BadEntry`] for non-numeric, non-finite, or
/// out-of-range tokens.
pub fn parse_entry(token: &str, row: usize) -> Result<f64, ParseError> {
    let bad = || ParseError::BadEntry {
        row,
        token: token.to_owned(),
    };
    let value: f64 = token.parse().map_err(|_| bad())?;
    if !value.is_finite() || value.abs() > MAX_ENTRY {
        return Err(bad());
    }
    Ok(value)
}
