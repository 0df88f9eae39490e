//! Turn-by-turn game session.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::board::{new_board, AnyBoard, Board, Layout, Variant};
use crate::core::{Player, SessionError};
use crate::search::{Minimax, ScoreMode, SearchConfig};

use super::difficulty::Difficulty;
use super::tally::{RoundResult, Tally};

/// Who plays.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum GameMode {
    /// Two people share the board.
    #[default]
    TwoPlayer,
    /// One side is played by the search.
    VsComputer {
        difficulty: Difficulty,
        computer: Player,
    },
}

impl GameMode {
    /// Computer plays O, the usual setup.
    #[must_use]
    pub fn vs_computer(difficulty: Difficulty) -> Self {
        GameMode::VsComputer {
            difficulty,
            computer: Player::O,
        }
    }

    /// The side the computer plays, if any.
    #[must_use]
    pub fn computer(&self) -> Option<Player> {
        match self {
            GameMode::TwoPlayer => None,
            GameMode::VsComputer { computer, .. } => Some(*computer),
        }
    }
}

/// Session configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub variant: Variant,
    pub mode: GameMode,
    /// Seed for the computer's tie-breaking. `None` seeds from the OS.
    pub seed: Option<u64>,
    pub score_mode: ScoreMode,
}

impl SessionConfig {
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_score_mode(mut self, mode: ScoreMode) -> Self {
        self.score_mode = mode;
        self
    }

    fn search_config(&self) -> SearchConfig {
        SearchConfig {
            seed: self.seed,
            score_mode: self.score_mode,
            ..SearchConfig::default()
        }
    }
}

/// Result of attempting a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was illegal. Nothing changed; the same player moves again.
    Rejected,
    /// The move was played and the game goes on.
    Continue { next: Player },
    /// The move completed a winning line.
    Won(Player),
    /// The move filled the board without a winner.
    Draw,
}

/// State of the current round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundStatus {
    InProgress,
    Finished(RoundResult),
}

/// A sequence of rounds on one kind of board.
///
/// X moves first every round. The session owns its board; callers render
/// from `layout()` and feed moves back through `play` / `computer_turn`.
pub struct Session<B: Board> {
    initial: B,
    board: B,
    mode: GameMode,
    current: Player,
    status: RoundStatus,
    tally: Tally,
    search: Minimax,
}

impl<B: Board> Session<B> {
    /// Start a session from `board`, which later rounds also start from.
    ///
    /// A board that is already over starts the round finished; nothing is
    /// added to the tally for it.
    pub fn new(board: B, mode: GameMode, search: SearchConfig) -> Self {
        let status = Self::opening_status(&board);
        Self {
            initial: board.clone(),
            board,
            mode,
            current: Player::X,
            status,
            tally: Tally::default(),
            search: Minimax::new(search),
        }
    }

    fn opening_status(board: &B) -> RoundStatus {
        if !board.is_terminal() {
            RoundStatus::InProgress
        } else if let Some(winner) = board.winner() {
            RoundStatus::Finished(RoundResult::Winner(winner))
        } else {
            RoundStatus::Finished(RoundResult::Draw)
        }
    }

    /// Play `mv` for the player whose turn it is.
    pub fn play(&mut self, mv: B::Move) -> Result<MoveOutcome, SessionError> {
        if matches!(self.status, RoundStatus::Finished(_)) {
            return Err(SessionError::RoundOver);
        }

        let player = self.current;
        if !self.board.apply_move(mv, player) {
            debug!("rejected move {mv:?} for {player}");
            return Ok(MoveOutcome::Rejected);
        }

        Ok(self.settle(player))
    }

    /// Let the computer move if it is its turn.
    ///
    /// Returns `Ok(None)` in two-player mode or on the human's turn. Fails
    /// with `RoundOver` in either mode once the round has finished.
    pub fn computer_turn(&mut self) -> Result<Option<(B::Move, MoveOutcome)>, SessionError> {
        if matches!(self.status, RoundStatus::Finished(_)) {
            return Err(SessionError::RoundOver);
        }
        let GameMode::VsComputer {
            difficulty,
            computer,
        } = self.mode
        else {
            return Ok(None);
        };
        if self.current != computer {
            return Ok(None);
        }

        self.search.set_depth(difficulty.depth());
        let mv = self
            .search
            .choose_move(&self.board, computer)
            .ok_or(SessionError::NoLegalMove)?;
        let outcome = self.play(mv)?;
        Ok(Some((mv, outcome)))
    }

    fn settle(&mut self, player: Player) -> MoveOutcome {
        if self.board.has_won(player) {
            self.finish(RoundResult::Winner(player));
            MoveOutcome::Won(player)
        } else if self.board.is_terminal() {
            self.finish(RoundResult::Draw);
            MoveOutcome::Draw
        } else {
            self.current = player.other();
            MoveOutcome::Continue {
                next: self.current,
            }
        }
    }

    fn finish(&mut self, result: RoundResult) {
        self.status = RoundStatus::Finished(result);
        self.tally.record(result);
        info!("round over: {result:?} ({})", self.tally);
    }

    /// Clear the board for another round. The tally is kept.
    pub fn new_round(&mut self) {
        self.board = self.initial.clone();
        self.current = Player::X;
        self.status = Self::opening_status(&self.board);
    }

    /// Start over: new round and an empty tally.
    pub fn reset(&mut self) {
        self.new_round();
        self.tally.reset();
    }

    /// Switch between two-player and computer play. Takes effect immediately.
    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
    }

    #[must_use]
    pub fn board(&self) -> &B {
        &self.board
    }

    #[must_use]
    pub fn layout(&self) -> Layout {
        self.board.layout()
    }

    #[must_use]
    pub fn current_player(&self) -> Player {
        self.current
    }

    #[must_use]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    #[must_use]
    pub fn status(&self) -> RoundStatus {
        self.status
    }

    #[must_use]
    pub fn tally(&self) -> Tally {
        self.tally
    }

    /// Is the computer due to move?
    #[must_use]
    pub fn is_computer_turn(&self) -> bool {
        self.status == RoundStatus::InProgress && self.mode.computer() == Some(self.current)
    }
}

/// Create a session on an empty board of the configured variant.
pub fn new_session(config: &SessionConfig) -> Session<AnyBoard> {
    Session::new(new_board(config.variant), config.mode, config.search_config())
}
