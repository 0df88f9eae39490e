//! Running score across rounds.

use serde::{Deserialize, Serialize};

use crate::core::Player;

/// How a finished round ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundResult {
    Winner(Player),
    Draw,
}

/// Wins per player and draws since the session started or was reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub x_wins: u32,
    pub o_wins: u32,
    pub draws: u32,
}

impl Tally {
    /// Count a finished round.
    pub fn record(&mut self, result: RoundResult) {
        match result {
            RoundResult::Winner(Player::X) => self.x_wins += 1,
            RoundResult::Winner(Player::O) => self.o_wins += 1,
            RoundResult::Draw => self.draws += 1,
        }
    }

    /// Wins for one player.
    #[must_use]
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }

    /// Rounds counted so far.
    #[must_use]
    pub fn rounds(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "X Wins: {}   O Wins: {}   Draws: {}",
            self.x_wins, self.o_wins, self.draws
        )
    }
}
