//! Four in a row on a 6×7 grid with gravity.
//!
//! - A move names a column; the mark drops to the lowest empty row
//! - Four marks in a horizontal, vertical or diagonal run win
//! - A full board with no run is a draw

mod board;

pub use board::{Grid6x7Board, COLS, CONNECT, ROWS};
