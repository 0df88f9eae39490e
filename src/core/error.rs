//! Structured error types.
//!
//! Illegal moves are not errors: `Board::apply_move` reports them with a
//! `false` return. The errors here cover malformed input at the edges.

/// Errors from resolving a move identifier to a board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("move {mv} is outside the valid range {min}..={max}")]
    OutOfRange { mv: u8, min: u8, max: u8 },

    #[error("column {0} is full")]
    ColumnFull(u8),
}

/// Errors from building a `Layout` out of raw parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("Layout must have at least one row and one column, got {rows}x{cols}")]
    Empty { rows: usize, cols: usize },

    #[error("Layout must have rows * cols cells: expected {expected}, found {found}")]
    CellCount { expected: usize, found: usize },
}

/// Errors from parsing or validating a computer difficulty.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DifficultyError {
    #[error("difficulty must be a number, got {0:?}")]
    NotANumber(String),

    #[error("difficulty must be between {min} and {max}, got {value}")]
    OutOfRange { value: i64, min: u8, max: u8 },
}

/// Errors from driving a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("the round is over; start a new round first")]
    RoundOver,

    #[error("no legal move is available")]
    NoLegalMove,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_error_display() {
        let err = BoardError::OutOfRange { mv: 10, min: 1, max: 9 };
        assert_eq!(err.to_string(), "move 10 is outside the valid range 1..=9");
        assert_eq!(BoardError::ColumnFull(3).to_string(), "column 3 is full");
    }

    #[test]
    fn test_difficulty_error_display() {
        let err = DifficultyError::NotANumber("abc".to_string());
        assert_eq!(err.to_string(), "difficulty must be a number, got \"abc\"");

        let err = DifficultyError::OutOfRange { value: 11, min: 1, max: 10 };
        assert_eq!(err.to_string(), "difficulty must be between 1 and 10, got 11");
    }

    #[test]
    fn test_session_error_display() {
        assert_eq!(
            SessionError::RoundOver.to_string(),
            "the round is over; start a new round first"
        );
    }
}
