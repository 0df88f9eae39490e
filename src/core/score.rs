//! Search scores.
//!
//! Scores are seen from X's side: `+1` is an X win, `-1` an O win and `0`
//! covers both a draw and a position with no result yet.

/// Evaluation of a position from X's point of view.
pub type Score = i32;

/// Stand-in for negative infinity in the alpha-beta window.
pub const SCORE_MIN: Score = Score::MIN;

/// Stand-in for positive infinity in the alpha-beta window.
pub const SCORE_MAX: Score = Score::MAX;

/// Score of an X win.
pub const X_WINS: Score = 1;

/// Score of an O win.
pub const O_WINS: Score = -1;

/// Score of a draw or an undecided position.
pub const DRAW: Score = 0;
