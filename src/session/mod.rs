//! Headless game sessions.
//!
//! A session is what a front end drives: it alternates turns, rejects
//! illegal moves without advancing, lets the computer play its side at a
//! chosen difficulty and keeps a running tally of results. Rendering and
//! input prompting stay with the caller.
//!
//! ```
//! use grid_minimax::board::Variant;
//! use grid_minimax::session::{new_session, Difficulty, GameMode, MoveOutcome, SessionConfig};
//!
//! let difficulty: Difficulty = "3".parse().unwrap();
//! let config = SessionConfig::new(Variant::Grid6x7)
//!     .with_mode(GameMode::vs_computer(difficulty))
//!     .with_seed(42);
//! let mut session = new_session(&config);
//!
//! assert_eq!(session.play(3), Ok(MoveOutcome::Continue { next: grid_minimax::core::Player::O }));
//! let (_column, outcome) = session.computer_turn().unwrap().unwrap();
//! assert!(matches!(outcome, MoveOutcome::Continue { .. }));
//! ```

pub mod difficulty;
#[allow(clippy::module_inception)]
pub mod session;
pub mod tally;

pub use difficulty::Difficulty;
pub use session::{new_session, GameMode, MoveOutcome, RoundStatus, Session, SessionConfig};
pub use tally::{RoundResult, Tally};
