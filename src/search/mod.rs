//! Adversarial game-tree search.
//!
//! ## Overview
//!
//! Depth-limited minimax with alpha-beta pruning over any `Board`:
//!
//! - **Generic**: Runs unmodified against every `Board` implementation
//! - **Non-mutating**: Explores clones; the caller's board is never touched
//! - **Randomized ties**: Candidate moves are shuffled at every node so
//!   equally good moves are chosen unpredictably
//! - **Injectable ordering**: Seeded `GameRng` or `NaturalOrder` for tests
//!
//! ## Usage
//!
//! ```rust
//! use grid_minimax::board::Board;
//! use grid_minimax::core::Player;
//! use grid_minimax::games::Grid6x7Board;
//! use grid_minimax::search::{Minimax, SearchConfig};
//!
//! let mut board = Grid6x7Board::new();
//! board.apply_move(3, Player::X);
//!
//! let mut search = Minimax::new(SearchConfig::default().with_depth(4).with_seed(7));
//! let result = search.search(&board, false);
//! if let Some(column) = result.best_move {
//!     board.apply_move(column, Player::O);
//! }
//! println!("{} nodes", search.stats().nodes);
//! ```

pub mod config;
pub mod minimax;
pub mod ordering;
pub mod stats;

pub use config::{ScoreMode, SearchConfig};
pub use minimax::{search, Minimax, SearchResult};
pub use ordering::{MoveOrdering, NaturalOrder};
pub use stats::SearchStats;
