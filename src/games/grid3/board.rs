//! 3×3 board implementation.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Layout, MoveList};
use crate::core::{BoardError, Cell, Player};

pub const ROWS: usize = 3;
pub const COLS: usize = 3;

/// Lowest move identifier (top-left cell).
pub const FIRST_MOVE: u8 = 1;
/// Highest move identifier (bottom-right cell).
pub const LAST_MOVE: u8 = 9;

/// The eight winning lines: 3 rows, 3 columns, 2 diagonals.
const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// 3×3 grid, three in a row wins.
///
/// Moves are numbered 1..=9 in row-major order:
///
/// ```text
/// 1 2 3
/// 4 5 6
/// 7 8 9
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid3Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Grid3Board {
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

    /// Move identifier for a `(row, col)` cell.
    #[must_use]
    pub fn move_at(row: usize, col: usize) -> u8 {
        (row * COLS + col) as u8 + FIRST_MOVE
    }
}

impl Board for Grid3Board {
    type Move = u8;

    fn dimensions(&self) -> (usize, usize) {
        (ROWS, COLS)
    }

    fn apply_move(&mut self, mv: u8, player: Player) -> bool {
        let Ok((row, col)) = self.locate(mv) else {
            return false;
        };
        if !self.cells[row][col].is_empty() {
            return false;
        }
        self.cells[row][col] = player.to_cell();
        true
    }

    fn has_won(&self, player: Player) -> bool {
        let mark = player.to_cell();
        LINES
            .iter()
            .any(|line| line.iter().all(|&(r, c)| self.cells[r][c] == mark))
    }

    fn available_moves(&self) -> MoveList<u8> {
        let mut moves = MoveList::new();
        for row in 0..ROWS {
            for col in 0..COLS {
                if self.cells[row][col].is_empty() {
                    moves.push(Self::move_at(row, col));
                }
            }
        }
        moves
    }

    fn locate(&self, mv: u8) -> Result<(usize, usize), BoardError> {
        if !(FIRST_MOVE..=LAST_MOVE).contains(&mv) {
            return Err(BoardError::OutOfRange {
                mv,
                min: FIRST_MOVE,
                max: LAST_MOVE,
            });
        }
        let index = (mv - FIRST_MOVE) as usize;
        Ok((index / COLS, index % COLS))
    }

    fn layout(&self) -> Layout {
        Layout::new(ROWS, COLS, self.cells.iter().flatten().copied().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(rows: [&str; 3]) -> Grid3Board {
        let mut board = Grid3Board::new();
        for (r, row) in rows.iter().enumerate() {
            for (c, ch) in row.chars().enumerate() {
                let player = match ch {
                    'X' => Player::X,
                    'O' => Player::O,
                    _ => continue,
                };
                assert!(board.apply_move(Grid3Board::move_at(r, c), player));
            }
        }
        board
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Grid3Board::new();
        assert_eq!(board.available_moves().as_slice(), &[1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(board.layout().count(Cell::Empty), 9);
        assert!(!board.is_terminal());
    }

    #[test]
    fn test_locate() {
        let board = Grid3Board::new();
        assert_eq!(board.locate(1), Ok((0, 0)));
        assert_eq!(board.locate(5), Ok((1, 1)));
        assert_eq!(board.locate(6), Ok((1, 2)));
        assert_eq!(board.locate(9), Ok((2, 2)));
        assert_eq!(
            board.locate(0),
            Err(BoardError::OutOfRange { mv: 0, min: 1, max: 9 })
        );
        assert!(board.locate(10).is_err());
    }

    #[test]
    fn test_apply_move_occupied() {
        let mut board = Grid3Board::new();
        assert!(board.apply_move(5, Player::X));
        assert_eq!(board.get(1, 1), Cell::X);

        let before = board.layout();
        assert!(!board.apply_move(5, Player::O));
        assert_eq!(board.layout(), before);
    }

    #[test]
    fn test_apply_move_out_of_range() {
        let mut board = Grid3Board::new();
        assert!(!board.apply_move(0, Player::X));
        assert!(!board.apply_move(10, Player::X));
        assert_eq!(board, Grid3Board::new());
    }

    #[test]
    fn test_available_moves_row_major() {
        let board = board_from(["X  ", " O ", "  X"]);
        assert_eq!(board.available_moves().as_slice(), &[2, 3, 4, 6, 7, 8]);
    }

    #[test]
    fn test_row_win() {
        let board = board_from(["XXX", "OO ", "   "]);
        assert!(board.has_won(Player::X));
        assert!(!board.has_won(Player::O));
        assert_eq!(board.evaluate(), 1);
        assert!(board.is_terminal());
    }

    #[test]
    fn test_column_win() {
        let board = board_from(["XO ", "XO ", " O "]);
        assert!(board.has_won(Player::O));
        assert_eq!(board.evaluate(), -1);
    }

    #[test]
    fn test_diagonal_wins() {
        assert!(board_from(["X  ", " X ", "  X"]).has_won(Player::X));
        assert!(board_from(["  O", " O ", "O  "]).has_won(Player::O));
    }

    #[test]
    fn test_draw() {
        let board = board_from(["XOX", "XOO", "OXX"]);
        assert!(board.is_terminal());
        assert_eq!(board.winner(), None);
        assert_eq!(board.evaluate(), 0);
        assert!(board.available_moves().is_empty());
    }

    #[test]
    fn test_clone_is_independent() {
        let board = board_from(["X  ", "   ", "   "]);
        let mut clone = board;
        clone.apply_move(9, Player::O);
        assert_eq!(board.get(2, 2), Cell::Empty);
        assert_eq!(clone.get(2, 2), Cell::O);
    }

    #[test]
    fn test_layout_matches_cells() {
        let board = board_from(["X  ", " O ", "   "]);
        let layout = board.layout();
        assert_eq!(layout.get(0, 0), Some(Cell::X));
        assert_eq!(layout.get(1, 1), Some(Cell::O));
        assert_eq!(layout.to_string(), "|X| | |\n| |O| |\n| | | |");
    }
}
