//! Players and cell states.
//!
//! ## Player
//!
//! The two sides of every game. `X` moves first and is the maximizing side
//! of the search; `O` is the minimizing side.
//!
//! ## Cell
//!
//! The closed set of states a grid cell can hold. Boards store `Cell`s and
//! compare them with exhaustive matches rather than marker strings.

use serde::{Deserialize, Serialize};

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// First player, maximizer. Wins score `+1`.
    X,
    /// Second player, minimizer. Wins score `-1`.
    O,
}

impl Player {
    /// Both players in turn order.
    pub const ALL: [Player; 2] = [Player::X, Player::O];

    /// Get the other player.
    #[must_use]
    pub const fn other(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// The cell state this player's mark occupies.
    #[must_use]
    pub const fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    /// Display symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }

    /// The player who moves when the search is (or is not) maximizing.
    ///
    /// ```
    /// use grid_minimax::core::Player;
    ///
    /// assert_eq!(Player::from_maximizing(true), Player::X);
    /// assert_eq!(Player::from_maximizing(false), Player::O);
    /// ```
    #[must_use]
    pub const fn from_maximizing(maximizing: bool) -> Player {
        if maximizing {
            Player::X
        } else {
            Player::O
        }
    }

    /// Is this the maximizing side?
    #[must_use]
    pub const fn is_maximizer(self) -> bool {
        matches!(self, Player::X)
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// State of a single grid cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    /// The player occupying this cell, if any.
    #[must_use]
    pub const fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Display symbol (`' '` for an empty cell).
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        player.to_cell()
    }
}
