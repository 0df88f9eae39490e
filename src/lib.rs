//! # grid-minimax
//!
//! A generic adversarial search engine for two-player grid games.
//!
//! ## Design Principles
//!
//! 1. **Game-Agnostic**: The search only sees the `Board` trait. Any
//!    two-player, perfect-information, alternating-move grid game plugs in.
//!
//! 2. **Value Boards**: Boards are small owned arrays of `Cell`s. Cloning is
//!    a full copy, so hypothetical lines never share storage with the
//!    position they came from.
//!
//! 3. **Injectable Randomness**: Ties are broken by shuffling candidate
//!    moves through a `MoveOrdering`. Tests pin a seed or keep the natural
//!    order; production draws a seed from the OS.
//!
//! ## Modules
//!
//! - `core`: Players, cells, scores, RNG, errors
//! - `board`: `Board` trait, `Layout` snapshots, runtime variant selection
//! - `games`: 3×3 three-in-a-row and 6×7 gravity-drop four-in-a-row
//! - `search`: Depth-limited minimax with alpha-beta pruning
//! - `session`: Turn alternation, computer opponent, result tally

pub mod board;
pub mod core;
pub mod games;
pub mod search;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    BoardError, Cell, DifficultyError, GameRng, LayoutError, Player, Score, SessionError, SCORE_MAX,
    SCORE_MIN,
};

pub use crate::board::{new_board, AnyBoard, Board, Layout, MoveList, Variant};

pub use crate::games::{Grid3Board, Grid6x7Board};

pub use crate::search::{
    search, Minimax, MoveOrdering, NaturalOrder, ScoreMode, SearchConfig, SearchResult,
    SearchStats,
};

pub use crate::session::{
    new_session, Difficulty, GameMode, MoveOutcome, RoundResult, RoundStatus, Session,
    SessionConfig, Tally,
};
