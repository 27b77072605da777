//! Backtracking search over the cells propagation could not decide.
//!
//! The search works row by row: for each row it pairs the list of
//! still-blank columns with the list of digits the row is still missing
//! (row-completeness makes the two lists equally long), then explores
//! permutations of digits onto columns, pruned by column and block
//! used-digit masks. Row uniqueness needs no check at all, since a
//! permutation places each missing digit exactly once.
//!
//! The search owns copies of the column and block masks and undoes every
//! mutation on backtrack, so a failed search leaves no trace; only a full
//! assignment is handed back to the board for commit.

use tinyvec::ArrayVec;

use crate::{board::Board, digit::Digit, mask::DigitMask, position::Position};

/// One cell assignment chosen by a successful search.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Placement {
    pub(crate) pos: Position,
    pub(crate) digit: Digit,
}

/// Depth-first permutation search over a board's unresolved cells.
///
/// Built once after propagation stalls; disposable. `digits[r]` holds the
/// row's missing digits in working order: the digit committed for the
/// pivot column is swapped into the pivot slot, so the final ordering
/// pairs `columns[r][i]` with `digits[r][i]`.
#[derive(Debug)]
pub(crate) struct PermutationSearch {
    columns: [ArrayVec<[u8; 9]>; 9],
    digits: [ArrayVec<[u8; 9]>; 9],
    col_used: [DigitMask; 9],
    block_used: [DigitMask; 9],
}

impl PermutationSearch {
    /// Captures the unresolved cells and used-digit masks of `board`.
    pub(crate) fn new(board: &Board) -> Self {
        let mut columns: [ArrayVec<[u8; 9]>; 9] = Default::default();
        let mut digits: [ArrayVec<[u8; 9]>; 9] = Default::default();
        let mut col_used = [DigitMask::EMPTY; 9];
        let mut block_used = [DigitMask::EMPTY; 9];

        for i in 0..9 {
            col_used[i] = board.used_in_col(i);
            block_used[i] = board.used_in_block(i);
        }
        for row in 0..9u8 {
            for digit in DigitMask::FULL.difference(board.used_in_row(usize::from(row))) {
                digits[usize::from(row)].push(digit.get());
            }
            for col in 0..9u8 {
                if board.get(Position::new(row, col)).is_none() {
                    columns[usize::from(row)].push(col);
                }
            }
            // row-completeness: a row missing k digits has exactly k blanks
            assert_eq!(
                digits[usize::from(row)].len(),
                columns[usize::from(row)].len(),
                "row {row} state out of sync"
            );
        }
        Self {
            columns,
            digits,
            col_used,
            block_used,
        }
    }

    /// Runs the search to completion.
    ///
    /// Returns the full set of assignments on success, `None` if no
    /// complete assignment exists. Deterministic: rows are processed in
    /// ascending order and the lowest-indexed blank column of a row is
    /// always resolved first, so with multiple solutions the first one
    /// under that traversal is returned.
    pub(crate) fn run(mut self) -> Option<Vec<Placement>> {
        if !self.traverse(0) {
            return None;
        }
        let mut placements = Vec::new();
        for row in 0..9u8 {
            let r = usize::from(row);
            for (col, digit) in self.columns[r].iter().zip(&self.digits[r]) {
                placements.push(Placement {
                    pos: Position::new(row, *col),
                    digit: Digit::new(*digit),
                });
            }
        }
        Some(placements)
    }

    fn traverse(&mut self, row: usize) -> bool {
        if row == 9 {
            return true;
        }
        if self.columns[row].is_empty() {
            return self.traverse(row + 1);
        }
        self.traverse_row(row, 0)
    }

    fn traverse_row(&mut self, row: usize, pivot: usize) -> bool {
        if pivot == self.columns[row].len() {
            return self.traverse(row + 1);
        }
        let col = usize::from(self.columns[row][pivot]);
        let block = row / 3 * 3 + col / 3;

        for i in pivot..self.digits[row].len() {
            let digit = Digit::new(self.digits[row][i]);
            if self.col_used[col].contains(digit) || self.block_used[block].contains(digit) {
                continue;
            }
            self.col_used[col].insert(digit);
            self.block_used[block].insert(digit);
            self.digits[row].swap(pivot, i);

            if self.traverse_row(row, pivot + 1) {
                return true;
            }

            self.digits[row].swap(pivot, i);
            self.col_used[col].remove(digit);
            self.block_used[block].remove(digit);
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_unresolved_cells_per_row() {
        let mut grid = [[0u8; 9]; 9];
        grid[0] = [1, 2, 3, 4, 5, 6, 7, 8, 9];
        grid[4][0] = 5;
        let board = Board::from_grid(&grid).unwrap();

        let search = PermutationSearch::new(&board);
        assert!(search.columns[0].is_empty());
        assert!(search.digits[0].is_empty());
        assert_eq!(search.columns[4].as_slice(), [1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(search.digits[4].as_slice(), [1, 2, 3, 4, 6, 7, 8, 9]);
        assert_eq!(search.columns[8].len(), 9);
    }

    #[test]
    fn search_failure_restores_masks() {
        // (0, 8) needs the row's last digit 9, but column 8 already has it
        let mut grid = [[0u8; 9]; 9];
        grid[0] = [1, 2, 3, 4, 5, 6, 7, 8, 0];
        grid[1][8] = 9;
        let board = Board::from_grid(&grid).unwrap();

        let search = PermutationSearch::new(&board);
        let col_used = search.col_used;
        let block_used = search.block_used;
        // run() consumes; rebuild to inspect state after a failing traverse
        let mut search = PermutationSearch::new(&board);
        assert!(!search.traverse(0));
        assert_eq!(search.col_used, col_used);
        assert_eq!(search.block_used, block_used);
    }

    #[test]
    fn search_solves_without_propagation_help() {
        let board = Board::from_grid(&[[0u8; 9]; 9]).unwrap();
        let placements = PermutationSearch::new(&board).run().unwrap();
        assert_eq!(placements.len(), 81);

        // committed placements must form a valid grid
        let mut check = Board::from_grid(&[[0u8; 9]; 9]).unwrap();
        for placement in placements {
            check.place(placement.pos, placement.digit);
        }
        assert!(check.is_solved());
    }
}
