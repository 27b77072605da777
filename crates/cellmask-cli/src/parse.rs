//! Puzzle text reader.
//!
//! A puzzle is 9 lines; the first 9 characters of each line must be ASCII
//! digits, `0` meaning blank. Anything after the ninth character is
//! ignored, as is any input after the ninth line, so annotated puzzle
//! files pass through unchanged.

use std::io::BufRead;

/// Reasons a puzzle text cannot be turned into a grid.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub(crate) enum ParseError {
    /// The underlying reader failed.
    #[display("failed to read puzzle: {_0}")]
    Io(#[from] std::io::Error),
    /// A line has fewer than 9 characters.
    #[display("line {line} has {len} characters, expected at least 9")]
    LineTooShort { line: usize, len: usize },
    /// A cell character is not a digit.
    #[display("line {line} contains non-digit character {found:?}")]
    NotADigit { line: usize, found: char },
    /// The input ended before 9 lines were read.
    #[display("expected 9 puzzle lines, found {rows}")]
    NotEnoughRows { rows: usize },
}

/// Reads a 9x9 grid of digits from `reader`.
///
/// # Errors
///
/// Fails if the input has fewer than 9 lines, a line is shorter than 9
/// characters, a cell is not an ASCII digit, or reading itself fails.
pub(crate) fn read_grid<R>(reader: R) -> Result<[[u8; 9]; 9], ParseError>
where
    R: BufRead,
{
    let mut grid = [[0u8; 9]; 9];
    let mut lines = reader.lines();
    for (row, cells) in grid.iter_mut().enumerate() {
        let Some(line) = lines.next() else {
            return Err(ParseError::NotEnoughRows { rows: row });
        };
        let line = line?;
        if line.len() < 9 {
            return Err(ParseError::LineTooShort {
                line: row + 1,
                len: line.len(),
            });
        }
        for (cell, &byte) in cells.iter_mut().zip(&line.as_bytes()[..9]) {
            if !byte.is_ascii_digit() {
                return Err(ParseError::NotADigit {
                    line: row + 1,
                    found: char::from(byte),
                });
            }
            *cell = byte - b'0';
        }
    }
    Ok(grid)
}
