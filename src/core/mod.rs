//! Core engine types: players, cells, scores, RNG, errors.
//!
//! This module contains the fundamental building blocks shared by every
//! board and by the search. Nothing here knows about a particular game.

pub mod error;
pub mod player;
pub mod rng;
pub mod score;

pub use error::{BoardError, DifficultyError, LayoutError, SessionError};
pub use player::{Cell, Player};
pub use rng::GameRng;
pub use score::{Score, DRAW, O_WINS, SCORE_MAX, SCORE_MIN, X_WINS};
