//! Computer difficulty levels.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::DifficultyError;

/// Computer difficulty in `1..=10`, used directly as the search depth.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Difficulty(u8);

impl Difficulty {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    /// Validate a difficulty level.
    pub fn new(level: u8) -> Result<Self, DifficultyError> {
        if (Self::MIN..=Self::MAX).contains(&level) {
            Ok(Self(level))
        } else {
            Err(DifficultyError::OutOfRange {
                value: level as i64,
                min: Self::MIN,
                max: Self::MAX,
            })
        }
    }

    #[must_use]
    pub const fn level(self) -> u8 {
        self.0
    }

    /// Search depth for this difficulty.
    #[must_use]
    pub const fn depth(self) -> u32 {
        self.0 as u32
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self(5)
    }
}

impl FromStr for Difficulty {
    type Err = DifficultyError;

    /// Parse user input such as `" 7 "`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value: i64 = trimmed
            .parse()
            .map_err(|_| DifficultyError::NotANumber(trimmed.to_string()))?;

        u8::try_from(value)
            .ok()
            .and_then(|level| Self::new(level).ok())
            .ok_or(DifficultyError::OutOfRange {
                value,
                min: Self::MIN,
                max: Self::MAX,
            })
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = DifficultyError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::new(level)
    }
}

impl From<Difficulty> for u8 {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.0
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
