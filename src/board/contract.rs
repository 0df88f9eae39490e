//! Board trait for game implementations.
//!
//! Games implement `Board` to define their rules:
//! - What moves are legal
//! - How a move changes the grid
//! - Win conditions
//!
//! The search only ever talks to this trait, so it runs unchanged against
//! any two-player, perfect-information, alternating-move grid game.

use std::fmt::Debug;

use smallvec::SmallVec;

use crate::core::{BoardError, Player, Score, DRAW, O_WINS, X_WINS};

use super::layout::Layout;

/// Candidate moves for a position.
/// SmallVec keeps up to 9 moves inline, which covers both shipped games.
pub type MoveList<M> = SmallVec<[M; 9]>;

/// Board trait.
///
/// ## Implementation Notes
///
/// - `apply_move`: Return `false` and leave the board untouched for any move
///   not in `available_moves()`
/// - `available_moves`: Deterministic baseline order; the search shuffles it
/// - `Clone`: Must be a deep, independent copy. The search clones a board for
///   every hypothetical continuation and never mutates the original
pub trait Board: Clone {
    /// Move identifier understood by this board.
    type Move: Copy + Eq + Debug;

    /// Grid size as `(rows, cols)`.
    fn dimensions(&self) -> (usize, usize);

    /// Place `player`'s mark at the position `mv` denotes.
    ///
    /// Returns `false` with no mutation when the move is not legal.
    fn apply_move(&mut self, mv: Self::Move, player: Player) -> bool;

    /// Does `player` occupy a complete winning line?
    fn has_won(&self, player: Player) -> bool;

    /// Legal moves in the board's baseline order.
    fn available_moves(&self) -> MoveList<Self::Move>;

    /// Resolve a move to the `(row, col)` cell it targets.
    fn locate(&self, mv: Self::Move) -> Result<(usize, usize), BoardError>;

    /// Read-only snapshot of every cell, for rendering.
    fn layout(&self) -> Layout;

    /// The game is over: nobody can move or somebody has won.
    fn is_terminal(&self) -> bool {
        self.available_moves().is_empty() || self.has_won(Player::X) || self.has_won(Player::O)
    }

    /// `+1` if X has won, `-1` if O has won, `0` otherwise.
    ///
    /// A draw and an unfinished game both score `0`; check `is_terminal`
    /// first when the difference matters.
    fn evaluate(&self) -> Score {
        if self.has_won(Player::X) {
            X_WINS
        } else if self.has_won(Player::O) {
            O_WINS
        } else {
            DRAW
        }
    }

    /// The player who has won, if any.
    fn winner(&self) -> Option<Player> {
        Player::ALL.into_iter().find(|&p| self.has_won(p))
    }
}
