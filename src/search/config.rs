//! Search configuration parameters.

use serde::{Deserialize, Serialize};

/// How terminal positions are scored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreMode {
    /// `+1` / `0` / `-1` regardless of how far away the result is.
    /// A win next move and a win ten moves later look the same.
    #[default]
    Flat,

    /// Terminal scores are multiplied by `remaining depth + 1`, so the
    /// search prefers faster wins and slower losses.
    DepthWeighted,
}

/// Search configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Plies to look ahead. 0 evaluates the root without searching.
    pub depth: u32,

    /// Seed for the move-ordering shuffle.
    /// `None` seeds from the operating system.
    pub seed: Option<u64>,

    /// Enable alpha-beta cutoffs.
    /// Disabling them runs a plain minimax with the same result.
    pub alpha_beta: bool,

    /// Terminal scoring rule.
    pub score_mode: ScoreMode,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 9,
            seed: None,
            alpha_beta: true,
            score_mode: ScoreMode::Flat,
        }
    }
}

impl SearchConfig {
    /// Create a new config with custom depth.
    #[must_use]
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Create a new config with custom seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Create a new config with alpha-beta cutoffs switched on or off.
    #[must_use]
    pub fn with_alpha_beta(mut self, enabled: bool) -> Self {
        self.alpha_beta = enabled;
        self
    }

    /// Create a new config with a custom scoring rule.
    #[must_use]
    pub fn with_score_mode(mut self, mode: ScoreMode) -> Self {
        self.score_mode = mode;
        self
    }
}
