//! Three in a row on a 3×3 grid.
//!
//! - Players alternate placing a mark in any empty cell
//! - Three marks in a row, column or diagonal win
//! - A full board with no line is a draw
//!
//! The full game tree is small enough to search exhaustively (depth 9),
//! which makes this game the engine's reference regression case.

mod board;

pub use board::{Grid3Board, COLS, FIRST_MOVE, LAST_MOVE, ROWS};
