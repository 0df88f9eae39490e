//! Board trait and board snapshots.
//!
//! Games implement `Board` to define:
//! - Legal moves for each position
//! - How a move changes the grid
//! - Win conditions
//!
//! The search engine calls into `Board` but never interprets
//! game-specific concepts directly.

pub mod contract;
pub mod layout;
pub mod variant;

pub use contract::{Board, MoveList};
pub use layout::Layout;
pub use variant::{new_board, AnyBoard, UnknownVariant, Variant};
