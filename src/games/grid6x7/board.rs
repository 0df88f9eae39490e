//! 6×7 gravity-drop board implementation.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Layout, MoveList};
use crate::core::{BoardError, Cell, Player};

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Marks in a row needed to win.
pub const CONNECT: usize = 4;

/// Window directions as `(row step, col step)`: horizontal, vertical,
/// down-right diagonal, up-right diagonal.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

/// 6 rows × 7 columns, marks drop to the lowest empty row, four in a row wins.
///
/// A move is a column index `0..7`; the board resolves the row.
/// Row 0 is the top, row 5 is the bottom.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid6x7Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Grid6x7Board {
    /// Create a new empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the cell at a specific position.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Row a mark dropped into `col` would land on, or `None` if the column
    /// is full or does not exist.
    #[must_use]
    pub fn landing_row(&self, col: usize) -> Option<usize> {
        if col >= COLS {
            return None;
        }
        (0..ROWS).rev().find(|&row| self.cells[row][col].is_empty())
    }

    /// Check if a column is full.
    #[must_use]
    pub fn is_column_full(&self, col: usize) -> bool {
        self.landing_row(col).is_none()
    }

    /// Does a run of `CONNECT` marks start at `(row, col)` heading `(dr, dc)`?
    fn window_filled(&self, row: usize, col: usize, (dr, dc): (isize, isize), mark: Cell) -> bool {
        (0..CONNECT as isize).all(|i| {
            let r = row as isize + dr * i;
            let c = col as isize + dc * i;
            (0..ROWS as isize).contains(&r)
                && (0..COLS as isize).contains(&c)
                && self.cells[r as usize][c as usize] == mark
        })
    }
}

impl Board for Grid6x7Board {
    type Move = u8;

    fn dimensions(&self) -> (usize, usize) {
        (ROWS, COLS)
    }

    fn apply_move(&mut self, col: u8, player: Player) -> bool {
        let Some(row) = self.landing_row(col as usize) else {
            return false;
        };
        self.cells[row][col as usize] = player.to_cell();
        true
    }

    fn has_won(&self, player: Player) -> bool {
        let mark = player.to_cell();
        (0..ROWS).any(|row| {
            (0..COLS).any(|col| {
                DIRECTIONS
                    .iter()
                    .any(|&dir| self.window_filled(row, col, dir, mark))
            })
        })
    }

    fn available_moves(&self) -> MoveList<u8> {
        (0..COLS)
            .filter(|&col| !self.is_column_full(col))
            .map(|col| col as u8)
            .collect()
    }

    fn locate(&self, col: u8) -> Result<(usize, usize), BoardError> {
        if col as usize >= COLS {
            return Err(BoardError::OutOfRange {
                mv: col,
                min: 0,
                max: (COLS - 1) as u8,
            });
        }
        self.landing_row(col as usize)
            .map(|row| (row, col as usize))
            .ok_or(BoardError::ColumnFull(col))
    }

    fn layout(&self) -> Layout {
        Layout::new(ROWS, COLS, self.cells.iter().flatten().copied().collect())
    }
}
