//! The 9x9 board and the two-phase solving entry point.

use std::fmt;

use crate::{
    digit::Digit,
    error::{BoardError, NoSolution},
    mask::DigitMask,
    position::Position,
    search::PermutationSearch,
};

/// A 9x9 sudoku board with per-cell candidate tracking.
///
/// For every blank cell the board maintains a [`DigitMask`] of the digits
/// still legally placeable there, kept consistent with the used-digit sets
/// of its row, column, and 3x3 block. Blanks only ever become filled; a
/// placement is never reverted.
///
/// Solving is two-phase: [`resolve`](Board::resolve) first fills every
/// naked single (a blank whose candidate mask is a singleton) to a fixed
/// point, then runs a backtracking search over whatever remains.
///
/// # Examples
///
/// ```
/// use cellmask_core::Board;
///
/// let grid = [
///     [0, 9, 2, 1, 3, 0, 0, 5, 0],
///     [8, 0, 0, 6, 0, 0, 3, 0, 9],
///     [1, 0, 0, 0, 9, 7, 0, 8, 0],
///     [7, 5, 0, 0, 0, 0, 1, 0, 0],
///     [2, 0, 3, 0, 6, 0, 4, 0, 8],
///     [0, 0, 9, 0, 0, 0, 0, 7, 2],
///     [0, 4, 0, 2, 5, 0, 0, 0, 1],
///     [5, 0, 6, 0, 0, 3, 0, 0, 7],
///     [0, 8, 0, 0, 7, 4, 6, 2, 0],
/// ];
///
/// let mut board = Board::from_grid(&grid)?;
/// board.resolve()?;
/// assert!(board.is_solved());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<Digit>; 9]; 9],
    /// Candidate masks; meaningful only for blank cells, cleared on fill.
    candidates: [[DigitMask; 9]; 9],
    row_used: [DigitMask; 9],
    col_used: [DigitMask; 9],
    block_used: [DigitMask; 9],
    /// Count of still-blank cells; zero means solved.
    remaining: u8,
}

impl Board {
    /// Constructs a board from a grid of cell values, `0` meaning blank.
    ///
    /// Every given digit is placed with full candidate propagation, so the
    /// returned board is ready for [`resolve`](Board::resolve).
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfRange`] if any value is greater than 9,
    /// and [`BoardError::ConstraintViolation`] if the givens already break
    /// row, column, or block uniqueness. Both name the offending cell.
    pub fn from_grid(grid: &[[u8; 9]; 9]) -> Result<Self, BoardError> {
        for pos in Position::all() {
            let value = grid[pos.row_index()][pos.col_index()];
            if value > 9 {
                return Err(BoardError::OutOfRange { pos, value });
            }
        }

        let blanks = grid.iter().flatten().filter(|&&value| value == 0).count();
        let mut board = Self {
            cells: [[None; 9]; 9],
            candidates: [[DigitMask::FULL; 9]; 9],
            row_used: [DigitMask::EMPTY; 9],
            col_used: [DigitMask::EMPTY; 9],
            block_used: [DigitMask::EMPTY; 9],
            remaining: u8::try_from(blanks).expect("at most 81 blanks"),
        };

        for pos in Position::all() {
            let value = grid[pos.row_index()][pos.col_index()];
            if let Some(digit) = Digit::new_checked(value) {
                board.record(pos, digit)?;
            }
        }
        Ok(board)
    }

    /// Returns the digit at `pos`, or `None` if the cell is blank.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.row_index()][pos.col_index()]
    }

    /// Returns the candidate mask at `pos`.
    ///
    /// The mask of a filled cell is empty; the mask of a blank cell equals
    /// the full digit set minus everything already used in its row, column,
    /// and block.
    #[must_use]
    pub fn candidates(&self, pos: Position) -> DigitMask {
        self.candidates[pos.row_index()][pos.col_index()]
    }

    /// Returns the number of still-blank cells.
    #[must_use]
    pub fn remaining(&self) -> u8 {
        self.remaining
    }

    /// Returns `true` if every cell is filled.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.remaining == 0
    }

    /// Copies the board back out as a grid of values, `0` meaning blank.
    #[must_use]
    pub fn to_grid(&self) -> [[u8; 9]; 9] {
        let mut grid = [[0; 9]; 9];
        for pos in Position::all() {
            if let Some(digit) = self.get(pos) {
                grid[pos.row_index()][pos.col_index()] = digit.get();
            }
        }
        grid
    }

    /// Places `digit` into the blank cell at `pos` and propagates the
    /// removal to every peer candidate mask.
    ///
    /// # Panics
    ///
    /// Panics if the cell is already filled, or if `digit` is already used
    /// in the cell's row, column, or block. Either means the caller broke
    /// the placement contract; this is not a recoverable condition.
    pub fn place(&mut self, pos: Position, digit: Digit) {
        assert!(self.get(pos).is_none(), "cell {pos} is already filled");
        if let Err(err) = self.record(pos, digit) {
            panic!("placement contract violated: {err}");
        }
        self.remaining -= 1;
    }

    /// Writes `digit` at `pos` and maintains every mask, without touching
    /// the blank count. Shared by given-digit entry and [`Board::place`].
    fn record(&mut self, pos: Position, digit: Digit) -> Result<(), BoardError> {
        let (row, col, block) = (pos.row_index(), pos.col_index(), pos.block_index());
        if self.row_used[row].contains(digit)
            || self.col_used[col].contains(digit)
            || self.block_used[block].contains(digit)
        {
            return Err(BoardError::ConstraintViolation { pos, digit });
        }
        self.row_used[row].insert(digit);
        self.col_used[col].insert(digit);
        self.block_used[block].insert(digit);
        self.cells[row][col] = Some(digit);

        for i in 0..9 {
            self.candidates[row][i].remove(digit);
            self.candidates[i][col].remove(digit);
        }
        let (band, stack) = (row / 3 * 3, col / 3 * 3);
        for r in band..band + 3 {
            for c in stack..stack + 3 {
                self.candidates[r][c].remove(digit);
            }
        }
        self.candidates[row][col] = DigitMask::EMPTY;
        Ok(())
    }

    /// Fills the next blank cell whose candidate mask is a singleton.
    ///
    /// Scans row-major, resuming cyclically from the last resolved cell
    /// rather than restarting at the top-left. Returns `false` when no
    /// blank cell is forced.
    fn fill_forced(&mut self, cursor: &mut u8) -> bool {
        let start = *cursor;
        for step in 0..81 {
            let index = (start + step) % 81;
            let pos = Position::from_cell_index(index);
            if self.get(pos).is_some() {
                continue;
            }
            if let Some(digit) = self.candidates(pos).as_single() {
                self.place(pos, digit);
                *cursor = index;
                return true;
            }
        }
        false
    }

    /// Solves the board in place.
    ///
    /// Repeats naked-single propagation until no blank cell is forced. If
    /// cells remain, a backtracking [`PermutationSearch`] over the
    /// unresolved cells either produces a complete assignment, which is
    /// committed back into the board, or proves there is none. Search is
    /// all-or-nothing: a failed search leaves the board exactly as
    /// propagation left it.
    ///
    /// An already-solved board returns `Ok` immediately.
    ///
    /// # Errors
    ///
    /// Returns [`NoSolution`] if the puzzle admits no solution.
    pub fn resolve(&mut self) -> Result<(), NoSolution> {
        let mut cursor = 0;
        while self.remaining > 0 && self.fill_forced(&mut cursor) {}
        if self.remaining == 0 {
            return Ok(());
        }

        let placements = PermutationSearch::new(self).run().ok_or(NoSolution)?;
        for placement in placements {
            self.place(placement.pos, placement.digit);
        }
        debug_assert_eq!(self.remaining, 0);
        Ok(())
    }

    /// Returns a displayable dump of every cell's candidate mask.
    ///
    /// Each mask renders as the nine-character form of
    /// [`DigitMask`'s `Display`](DigitMask#impl-Display-for-DigitMask);
    /// filled cells show as all zeros.
    #[must_use]
    pub fn mask_display(&self) -> MaskDisplay<'_> {
        MaskDisplay(self)
    }

    pub(crate) fn used_in_row(&self, row: usize) -> DigitMask {
        self.row_used[row]
    }

    pub(crate) fn used_in_col(&self, col: usize) -> DigitMask {
        self.col_used[col]
    }

    pub(crate) fn used_in_block(&self, block: usize) -> DigitMask {
        self.block_used[block]
    }
}

impl fmt::Display for Board {
    /// Renders the grid with 3x3 group borders, blanks as `0`:
    ///
    /// ```text
    /// -------------------------
    /// | 0 9 2 | 1 3 0 | 0 5 0 |
    /// ...
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            if row % 3 == 0 {
                writeln!(f, "{}", "-".repeat(25))?;
            }
            for (col, cell) in cells.iter().enumerate() {
                let sep = if col % 3 == 0 { "| " } else { "" };
                let value = cell.map_or(0, Digit::get);
                write!(f, "{sep}{value} ")?;
            }
            writeln!(f, "|")?;
        }
        writeln!(f, "{}", "-".repeat(25))
    }
}

/// Candidate-mask dump returned by [`Board::mask_display`].
#[derive(Debug, Clone, Copy)]
pub struct MaskDisplay<'a>(&'a Board);

impl fmt::Display for MaskDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, masks) in self.0.candidates.iter().enumerate() {
            if row % 3 == 0 {
                writeln!(f, "{}", "-".repeat(97))?;
            }
            for (col, mask) in masks.iter().enumerate() {
                let sep = if col % 3 == 0 { "| " } else { "" };
                write!(f, "{sep}{mask} ")?;
            }
            writeln!(f, "|")?;
        }
        writeln!(f, "{}", "-".repeat(97))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds a grid from nine rows of nine ASCII digits.
    fn grid(rows: [&str; 9]) -> [[u8; 9]; 9] {
        let mut grid = [[0; 9]; 9];
        for (r, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), 9);
            for (c, ch) in row.bytes().enumerate() {
                assert!(ch.is_ascii_digit());
                grid[r][c] = ch - b'0';
            }
        }
        grid
    }

    /// The regression puzzle; solvable, unique solution.
    const EASY: [&str; 9] = [
        "092130050",
        "800600309",
        "100097080",
        "750000100",
        "203060408",
        "009000072",
        "040250001",
        "506003007",
        "080074620",
    ];

    const EASY_SOLUTION: [&str; 9] = [
        "692138754",
        "875642319",
        "134597286",
        "758429163",
        "213765498",
        "469381572",
        "947256831",
        "526813947",
        "381974625",
    ];

    /// A 17-clue puzzle with a unique solution.
    const SEVENTEEN_CLUES: [&str; 9] = [
        "000000010",
        "400000000",
        "020000000",
        "000050407",
        "008000300",
        "001090000",
        "300400200",
        "050100000",
        "000806000",
    ];

    const SEVENTEEN_CLUES_SOLUTION: [&str; 9] = [
        "693784512",
        "487512936",
        "125963874",
        "932651487",
        "568247391",
        "741398625",
        "319475268",
        "856129743",
        "274836159",
    ];

    /// Asserts the fundamental sudoku invariant: every row, column, and
    /// block contains each digit exactly once.
    fn assert_valid_solution(board: &Board) {
        assert!(board.is_solved());
        for i in 0..9 {
            let mut row = DigitMask::EMPTY;
            let mut col = DigitMask::EMPTY;
            for j in 0..9 {
                row.insert(board.get(Position::new(i, j)).unwrap());
                col.insert(board.get(Position::new(j, i)).unwrap());
            }
            assert_eq!(row, DigitMask::FULL, "row {i}");
            assert_eq!(col, DigitMask::FULL, "col {i}");
        }
        for block in 0..9 {
            let mut seen = DigitMask::EMPTY;
            for cell in 0..9 {
                let pos = Position::new(block / 3 * 3 + cell / 3, block % 3 * 3 + cell % 3);
                seen.insert(board.get(pos).unwrap());
            }
            assert_eq!(seen, DigitMask::FULL, "block {block}");
        }
    }

    /// Asserts the candidate-mask invariant for every blank cell.
    fn assert_masks_consistent(board: &Board) {
        for pos in Position::all() {
            let used = board.used_in_row(pos.row_index())
                | board.used_in_col(pos.col_index())
                | board.used_in_block(pos.block_index());
            let expected = match board.get(pos) {
                Some(_) => DigitMask::EMPTY,
                None => DigitMask::FULL.difference(used),
            };
            assert_eq!(board.candidates(pos), expected, "cell {pos}");
        }
    }

    #[test]
    fn construct_counts_blanks() {
        let board = Board::from_grid(&grid(EASY)).unwrap();
        assert_eq!(board.remaining(), 44);
        assert!(!board.is_solved());
        assert_masks_consistent(&board);
    }

    #[test]
    fn construct_rejects_out_of_range_value() {
        let mut bad = grid(EASY);
        bad[6][2] = 10;
        let err = Board::from_grid(&bad).unwrap_err();
        assert_eq!(
            err,
            BoardError::OutOfRange {
                pos: Position::new(6, 2),
                value: 10,
            }
        );
    }

    #[test]
    fn construct_rejects_row_duplicate() {
        // two 5s in row 0
        let mut bad = grid(EASY);
        bad[0][0] = 5;
        bad[0][7] = 5;
        let err = Board::from_grid(&bad).unwrap_err();
        assert!(matches!(err, BoardError::ConstraintViolation { .. }));
    }

    #[test]
    fn construct_rejects_block_duplicate() {
        // same digit twice in the top-left block, different rows and columns
        let mut bad = [[0u8; 9]; 9];
        bad[0][0] = 7;
        bad[2][2] = 7;
        let err = Board::from_grid(&bad).unwrap_err();
        assert_eq!(
            err,
            BoardError::ConstraintViolation {
                pos: Position::new(2, 2),
                digit: Digit::new(7),
            }
        );
    }

    #[test]
    fn place_updates_peer_masks() {
        let mut board = Board::from_grid(&[[0; 9]; 9]).unwrap();
        let pos = Position::new(4, 4);
        let digit = Digit::new(6);
        board.place(pos, digit);

        assert_eq!(board.get(pos), Some(digit));
        assert_eq!(board.candidates(pos), DigitMask::EMPTY);
        assert_eq!(board.remaining(), 80);

        let mut peers = 0;
        for other in Position::all() {
            if other == pos {
                continue;
            }
            let is_peer = other.row() == pos.row()
                || other.col() == pos.col()
                || other.block() == pos.block();
            assert_eq!(board.candidates(other).contains(digit), !is_peer, "{other}");
            peers += i32::from(is_peer);
        }
        assert_eq!(peers, 20);
        assert_masks_consistent(&board);
    }

    #[test]
    #[should_panic(expected = "placement contract violated")]
    fn place_conflicting_digit_panics() {
        let mut board = Board::from_grid(&[[0; 9]; 9]).unwrap();
        board.place(Position::new(0, 0), Digit::new(3));
        // same digit in the same row
        board.place(Position::new(0, 5), Digit::new(3));
    }

    #[test]
    #[should_panic(expected = "already filled")]
    fn place_on_filled_cell_panics() {
        let mut board = Board::from_grid(&[[0; 9]; 9]).unwrap();
        board.place(Position::new(0, 0), Digit::new(3));
        board.place(Position::new(0, 0), Digit::new(4));
    }

    #[test]
    fn resolve_solved_input_is_noop() {
        let mut board = Board::from_grid(&grid(EASY_SOLUTION)).unwrap();
        assert_eq!(board.remaining(), 0);
        board.resolve().unwrap();
        assert_eq!(board.to_grid(), grid(EASY_SOLUTION));
    }

    #[test]
    fn resolve_single_blank_by_propagation() {
        let mut input = grid(EASY_SOLUTION);
        input[3][6] = 0;
        let mut board = Board::from_grid(&input).unwrap();
        assert_eq!(board.remaining(), 1);
        assert_eq!(
            board.candidates(Position::new(3, 6)).as_single(),
            Some(Digit::new(1))
        );

        board.resolve().unwrap();
        assert_eq!(board.to_grid(), grid(EASY_SOLUTION));
    }

    #[test]
    fn resolve_easy_puzzle() {
        let mut board = Board::from_grid(&grid(EASY)).unwrap();
        board.resolve().unwrap();
        assert_valid_solution(&board);
        assert_eq!(board.to_grid(), grid(EASY_SOLUTION));
    }

    #[test]
    fn resolve_preserves_givens() {
        let input = grid(EASY);
        let mut board = Board::from_grid(&input).unwrap();
        board.resolve().unwrap();
        for pos in Position::all() {
            let given = input[pos.row_index()][pos.col_index()];
            if given != 0 {
                assert_eq!(board.get(pos).map(Digit::get), Some(given));
            }
        }
    }

    #[test]
    fn resolve_empty_grid_finds_a_solution() {
        // propagation stalls immediately; this exercises the search alone
        let mut board = Board::from_grid(&[[0; 9]; 9]).unwrap();
        board.resolve().unwrap();
        assert_valid_solution(&board);
    }

    #[test]
    fn resolve_seventeen_clue_puzzle() {
        let mut board = Board::from_grid(&grid(SEVENTEEN_CLUES)).unwrap();
        board.resolve().unwrap();
        assert_valid_solution(&board);
        assert_eq!(board.to_grid(), grid(SEVENTEEN_CLUES_SOLUTION));
    }

    #[test]
    fn resolve_reports_no_solution() {
        // Structurally valid givens, but (0, 8) needs a 9 and its column
        // already has one. Construction succeeds; solving must not.
        let mut input = [[0u8; 9]; 9];
        for col in 0..8 {
            input[0][col] = u8::try_from(col).unwrap() + 1;
        }
        input[1][8] = 9;
        let mut board = Board::from_grid(&input).unwrap();
        assert!(board.candidates(Position::new(0, 8)).is_empty());

        let before = board.clone();
        assert_eq!(board.resolve(), Err(NoSolution));
        // failed search commits nothing beyond what propagation filled
        assert_eq!(board.remaining(), before.remaining());
    }

    #[test]
    fn remaining_is_monotonic() {
        let mut board = Board::from_grid(&grid(EASY)).unwrap();
        let mut last = board.remaining();
        for pos in Position::all() {
            if board.get(pos).is_none() {
                if let Some(digit) = board.candidates(pos).as_single() {
                    board.place(pos, digit);
                    assert_eq!(board.remaining(), last - 1);
                    last -= 1;
                }
            }
        }
        assert!(last < 44);
    }

    #[test]
    fn display_grid_format() {
        let board = Board::from_grid(&grid(EASY)).unwrap();
        let text = board.to_string();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("-".repeat(25).as_str()));
        assert_eq!(lines.next(), Some("| 0 9 2 | 1 3 0 | 0 5 0 |"));
        assert_eq!(text.lines().count(), 13);
        assert_eq!(text.lines().last(), Some("-".repeat(25).as_str()));
    }

    #[test]
    fn display_masks_format() {
        let board = Board::from_grid(&[[0; 9]; 9]).unwrap();
        let text = board.mask_display().to_string();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("-".repeat(97).as_str()));
        let full = "111111111";
        assert_eq!(
            lines.next().unwrap(),
            format!("| {full} {full} {full} | {full} {full} {full} | {full} {full} {full} |")
        );
        assert_eq!(text.lines().count(), 13);
    }

    #[test]
    fn masks_stay_consistent_through_solving() {
        let mut board = Board::from_grid(&grid(SEVENTEEN_CLUES)).unwrap();
        assert_masks_consistent(&board);
        board.resolve().unwrap();
        assert_masks_consistent(&board);
    }
}
