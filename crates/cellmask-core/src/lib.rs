//! Core solving engine for 9x9 sudoku puzzles.
//!
//! The crate is organized around two components, consumed in order:
//!
//! 1. [`Board`] owns the grid of digits and, for every still-blank cell,
//!    a 9-bit [`DigitMask`] of the digits still legally placeable there,
//!    kept consistent with row, column, and 3x3 block usage. Placement is
//!    incremental: filling a cell strips the digit from every peer mask.
//! 2. A backtracking search (internal) is built lazily over the cells that
//!    naked-single propagation could not decide, exploring row-by-row
//!    permutations of missing digits onto blank columns, pruned by column
//!    and block masks.
//!
//! [`Board::resolve`] drives both: propagation to a fixed point, then the
//! search; the result is either a fully solved board or a definitive
//! [`NoSolution`].
//!
//! The engine performs no I/O and allocates only in the final search
//! commit; reading puzzle text and printing grids belong to front ends
//! such as `cellmask-cli`.
//!
//! # Examples
//!
//! ```
//! use cellmask_core::{Board, Position};
//!
//! let grid = [
//!     [0, 9, 2, 1, 3, 0, 0, 5, 0],
//!     [8, 0, 0, 6, 0, 0, 3, 0, 9],
//!     [1, 0, 0, 0, 9, 7, 0, 8, 0],
//!     [7, 5, 0, 0, 0, 0, 1, 0, 0],
//!     [2, 0, 3, 0, 6, 0, 4, 0, 8],
//!     [0, 0, 9, 0, 0, 0, 0, 7, 2],
//!     [0, 4, 0, 2, 5, 0, 0, 0, 1],
//!     [5, 0, 6, 0, 0, 3, 0, 0, 7],
//!     [0, 8, 0, 0, 7, 4, 6, 2, 0],
//! ];
//!
//! let mut board = Board::from_grid(&grid)?;
//! board.resolve()?;
//!
//! assert!(board.is_solved());
//! assert_eq!(board.get(Position::new(0, 0)).map(u8::from), Some(6));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod board;
pub mod digit;
pub mod error;
pub mod mask;
pub mod position;
mod search;

pub use self::{
    board::Board,
    digit::Digit,
    error::{BoardError, NoSolution},
    mask::DigitMask,
    position::Position,
};
