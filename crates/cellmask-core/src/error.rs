//! Error types for board construction and solving.

use crate::{digit::Digit, position::Position};

/// Errors detected while constructing a [`Board`](crate::Board) from an
/// input grid.
///
/// Both variants are terminal: a caller must not proceed with a partially
/// constructed board. A conflicting set of givens is reported as
/// [`BoardError::ConstraintViolation`], which is deliberately distinct from
/// [`NoSolution`]: the former means the puzzle is invalid, the latter that
/// a structurally valid puzzle admits no solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    /// A cell value was outside the range 0-9.
    #[display("value {value} at {pos} is out of range 0-9")]
    OutOfRange {
        /// The offending cell.
        pos: Position,
        /// The rejected value.
        value: u8,
    },
    /// A given digit appears twice in a row, column, or block.
    #[display("given digit {digit} at {pos} conflicts with its row, column, or block")]
    ConstraintViolation {
        /// The cell whose given clashed with an earlier one.
        pos: Position,
        /// The duplicated digit.
        digit: Digit,
    },
}

/// The puzzle is structurally valid but admits no solution: propagation and
/// exhaustive search both ran out without completing the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("no solution exists")]
pub struct NoSolution;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = BoardError::OutOfRange {
            pos: Position::new(3, 4),
            value: 12,
        };
        assert_eq!(err.to_string(), "value 12 at (3, 4) is out of range 0-9");

        let err = BoardError::ConstraintViolation {
            pos: Position::new(0, 8),
            digit: Digit::new(5),
        };
        assert_eq!(
            err.to_string(),
            "given digit 5 at (0, 8) conflicts with its row, column, or block"
        );

        assert_eq!(NoSolution.to_string(), "no solution exists");
    }
}
