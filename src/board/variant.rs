//! Runtime selection between the shipped games.
//!
//! The search is generic over `Board`, but a UI picks its game at runtime.
//! `AnyBoard` wraps either concrete board behind one type so a session can
//! hold whichever the user chose.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{BoardError, Player};
use crate::games::{Grid3Board, Grid6x7Board};

use super::contract::{Board, MoveList};
use super::layout::Layout;

/// Which game to play.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// 3×3, three in a row.
    #[default]
    Grid3,
    /// 6×7 gravity drop, four in a row.
    Grid6x7,
}

impl Variant {
    /// Human-readable game name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Variant::Grid3 => "Tic-Tac-Toe",
            Variant::Grid6x7 => "Connect Four",
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for an unrecognised variant name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown game variant {0:?}")]
pub struct UnknownVariant(pub String);

impl FromStr for Variant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "grid3" | "tic-tac-toe" | "tictactoe" => Ok(Variant::Grid3),
            "grid6x7" | "connect-four" | "connect4" => Ok(Variant::Grid6x7),
            _ => Err(UnknownVariant(s.to_string())),
        }
    }
}

/// Either shipped board. Moves are `u8` for both.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnyBoard {
    Grid3(Grid3Board),
    Grid6x7(Grid6x7Board),
}

impl AnyBoard {
    /// The variant this board plays.
    #[must_use]
    pub fn variant(&self) -> Variant {
        match self {
            AnyBoard::Grid3(_) => Variant::Grid3,
            AnyBoard::Grid6x7(_) => Variant::Grid6x7,
        }
    }
}

/// Construct an empty board of the given kind.
///
/// ```
/// use grid_minimax::board::{new_board, Board, Variant};
///
/// let board = new_board(Variant::Grid6x7);
/// assert_eq!(board.dimensions(), (6, 7));
/// assert_eq!(board.available_moves().len(), 7);
/// ```
#[must_use]
pub fn new_board(variant: Variant) -> AnyBoard {
    match variant {
        Variant::Grid3 => AnyBoard::Grid3(Grid3Board::new()),
        Variant::Grid6x7 => AnyBoard::Grid6x7(Grid6x7Board::new()),
    }
}

impl Board for AnyBoard {
    type Move = u8;

    fn dimensions(&self) -> (usize, usize) {
        match self {
            AnyBoard::Grid3(b) => b.dimensions(),
            AnyBoard::Grid6x7(b) => b.dimensions(),
        }
    }

    fn apply_move(&mut self, mv: u8, player: Player) -> bool {
        match self {
            AnyBoard::Grid3(b) => b.apply_move(mv, player),
            AnyBoard::Grid6x7(b) => b.apply_move(mv, player),
        }
    }

    fn has_won(&self, player: Player) -> bool {
        match self {
            AnyBoard::Grid3(b) => b.has_won(player),
            AnyBoard::Grid6x7(b) => b.has_won(player),
        }
    }

    fn available_moves(&self) -> MoveList<u8> {
        match self {
            AnyBoard::Grid3(b) => b.available_moves(),
            AnyBoard::Grid6x7(b) => b.available_moves(),
        }
    }

    fn locate(&self, mv: u8) -> Result<(usize, usize), BoardError> {
        match self {
            AnyBoard::Grid3(b) => b.locate(mv),
            AnyBoard::Grid6x7(b) => b.locate(mv),
        }
    }

    fn layout(&self) -> Layout {
        match self {
            AnyBoard::Grid3(b) => b.layout(),
            AnyBoard::Grid6x7(b) => b.layout(),
        }
    }

    fn is_terminal(&self) -> bool {
        match self {
            AnyBoard::Grid3(b) => b.is_terminal(),
            AnyBoard::Grid6x7(b) => b.is_terminal(),
        }
    }

    fn evaluate(&self) -> crate::core::Score {
        match self {
            AnyBoard::Grid3(b) => b.evaluate(),
            AnyBoard::Grid6x7(b) => b.evaluate(),
        }
    }
}
