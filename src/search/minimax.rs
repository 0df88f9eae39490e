//! Depth-limited minimax with alpha-beta pruning.
//!
//! X maximizes and O minimizes. Every hypothetical continuation is played on
//! a clone of the board, so the caller's board is never touched. Candidate
//! moves are reordered by a `MoveOrdering` before each node is expanded;
//! the reported score does not depend on that order.

use std::time::Instant;

use log::{debug, trace, warn};

use crate::board::Board;
use crate::core::{GameRng, Player, Score, SCORE_MAX, SCORE_MIN};

use super::config::{ScoreMode, SearchConfig};
use super::ordering::MoveOrdering;
use super::stats::SearchStats;

/// Outcome of a search: the best score found and the move that achieves it.
///
/// `best_move` is `None` when the searched position was terminal or the
/// depth was 0. Such a result must never be played.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult<M> {
    pub score: Score,
    pub best_move: Option<M>,
}

impl<M> SearchResult<M> {
    fn leaf(score: Score) -> Self {
        Self {
            score,
            best_move: None,
        }
    }
}

/// Minimax search context.
///
/// Generic over the move-ordering source. Owns the configuration and the
/// statistics of the most recent root search.
pub struct Minimax<O: MoveOrdering = GameRng> {
    config: SearchConfig,
    ordering: O,
    stats: SearchStats,
}

impl Minimax<GameRng> {
    /// Create a search that shuffles moves with an RNG seeded from the config.
    pub fn new(config: SearchConfig) -> Self {
        let rng = GameRng::from_optional_seed(config.seed);
        debug!("move ordering seeded with {}", rng.seed());
        Self::with_ordering(config, rng)
    }
}

impl<O: MoveOrdering> Minimax<O> {
    /// Create a search with a custom move-ordering source.
    pub fn with_ordering(config: SearchConfig, ordering: O) -> Self {
        Self {
            config,
            ordering,
            stats: SearchStats::default(),
        }
    }

    /// Search `board` to the configured depth with a full window.
    pub fn search<B: Board>(&mut self, board: &B, maximizing: bool) -> SearchResult<B::Move> {
        self.search_window(board, maximizing, self.config.depth, SCORE_MIN, SCORE_MAX)
    }

    /// Search `board` to `depth` plies inside the `(alpha, beta)` window.
    pub fn search_window<B: Board>(
        &mut self,
        board: &B,
        maximizing: bool,
        depth: u32,
        alpha: Score,
        beta: Score,
    ) -> SearchResult<B::Move> {
        let start = Instant::now();
        self.stats.reset();

        let result = self.minimax(board, maximizing, depth, alpha, beta, 0);

        self.stats.time_us = start.elapsed().as_micros() as u64;
        debug!(
            "searched {} to depth {}: score {} move {:?} ({} nodes, {} cutoffs, {}us)",
            Player::from_maximizing(maximizing),
            depth,
            result.score,
            result.best_move,
            self.stats.nodes,
            self.stats.cutoffs,
            self.stats.time_us,
        );
        result
    }

    /// Pick a move for `player`, or `None` if the game is already over.
    ///
    /// Falls back to an available move, picked through the ordering source,
    /// when the search reports no move on a live board (depth 0).
    pub fn choose_move<B: Board>(&mut self, board: &B, player: Player) -> Option<B::Move> {
        if board.is_terminal() {
            return None;
        }

        let result = self.search(board, player.is_maximizer());
        result.best_move.or_else(|| {
            let mut moves = board.available_moves();
            self.ordering.order(moves.as_mut_slice());
            let fallback = moves.first().copied();
            warn!("search returned no move for {player}; falling back to {fallback:?}");
            fallback
        })
    }

    fn minimax<B: Board>(
        &mut self,
        board: &B,
        maximizing: bool,
        depth: u32,
        mut alpha: Score,
        mut beta: Score,
        ply: u32,
    ) -> SearchResult<B::Move> {
        self.stats.nodes += 1;
        self.stats.max_ply = self.stats.max_ply.max(ply);

        // Terminal positions are scored even when depth remains
        if board.is_terminal() || depth == 0 {
            self.stats.leaves += 1;
            return SearchResult::leaf(self.leaf_score(board, depth));
        }

        let player = Player::from_maximizing(maximizing);
        let mut moves = board.available_moves();
        self.ordering.order(moves.as_mut_slice());

        let mut best = SearchResult {
            score: if maximizing { SCORE_MIN } else { SCORE_MAX },
            best_move: None,
        };

        for mv in moves {
            let mut child = board.clone();
            let applied = child.apply_move(mv, player);
            debug_assert!(applied, "available move {mv:?} was rejected");

            let child_score = self
                .minimax(&child, !maximizing, depth - 1, alpha, beta, ply + 1)
                .score;

            if maximizing {
                if child_score > best.score {
                    best = SearchResult {
                        score: child_score,
                        best_move: Some(mv),
                    };
                    alpha = alpha.max(child_score);
                }
            } else if child_score < best.score {
                best = SearchResult {
                    score: child_score,
                    best_move: Some(mv),
                };
                beta = beta.min(child_score);
            }

            if self.config.alpha_beta && beta <= alpha {
                self.stats.cutoffs += 1;
                trace!("cutoff at ply {ply} after {mv:?} (alpha {alpha}, beta {beta})");
                break;
            }
        }

        best
    }

    fn leaf_score<B: Board>(&self, board: &B, depth: u32) -> Score {
        let score = board.evaluate();
        match self.config.score_mode {
            ScoreMode::Flat => score,
            ScoreMode::DepthWeighted => {
                // Stays strictly inside the (SCORE_MIN, SCORE_MAX) sentinels
                let weight = Score::try_from(depth)
                    .unwrap_or(Score::MAX)
                    .saturating_add(1)
                    .min(SCORE_MAX - 1);
                score * weight
            }
        }
    }

    /// Get statistics of the most recent search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Change the search depth for later searches.
    pub fn set_depth(&mut self, depth: u32) {
        self.config.depth = depth;
    }
}

/// Run one alpha-beta search with a borrowed ordering source.
///
/// ```
/// use grid_minimax::core::{SCORE_MAX, SCORE_MIN};
/// use grid_minimax::games::Grid3Board;
/// use grid_minimax::search::{search, NaturalOrder};
///
/// let result = search(&Grid3Board::new(), true, 9, SCORE_MIN, SCORE_MAX, &mut NaturalOrder);
/// assert_eq!(result.score, 0); // perfect play draws
/// assert!(result.best_move.is_some());
/// ```
pub fn search<B: Board, O: MoveOrdering>(
    board: &B,
    maximizing: bool,
    depth: u32,
    alpha: Score,
    beta: Score,
    ordering: &mut O,
) -> SearchResult<B::Move> {
    let config = SearchConfig::default().with_depth(depth);
    Minimax::with_ordering(config, ordering).search_window(board, maximizing, depth, alpha, beta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::{Grid3Board, Grid6x7Board};
    use crate::search::NaturalOrder;

    fn grid3(moves: &[(u8, Player)]) -> Grid3Board {
        let mut board = Grid3Board::new();
        for &(mv, player) in moves {
            assert!(board.apply_move(mv, player));
        }
        board
    }

    fn natural(config: SearchConfig) -> Minimax<NaturalOrder> {
        Minimax::with_ordering(config, NaturalOrder)
    }

    #[test]
    fn test_terminal_root_returns_no_move() {
        let board = grid3(&[
            (1, Player::X),
            (4, Player::O),
            (2, Player::X),
            (5, Player::O),
            (3, Player::X),
        ]);
        let mut search = natural(SearchConfig::default());
        let result = search.search(&board, false);

        assert_eq!(result, SearchResult { score: 1, best_move: None });
        assert_eq!(search.stats().nodes, 1);
    }

    #[test]
    fn test_depth_zero_returns_no_move() {
        let mut search = natural(SearchConfig::default().with_depth(0));
        let result = search.search(&Grid3Board::new(), true);

        assert_eq!(result, SearchResult { score: 0, best_move: None });
    }

    #[test]
    fn test_takes_immediate_win() {
        // X: 1 2   O: 4 5   X to move, 3 wins on the spot
        let board = grid3(&[
            (1, Player::X),
            (4, Player::O),
            (2, Player::X),
            (5, Player::O),
        ]);

        let mut flat = natural(SearchConfig::default());
        assert_eq!(flat.search(&board, true).score, 1);

        let mut weighted =
            natural(SearchConfig::default().with_score_mode(ScoreMode::DepthWeighted));
        let result = weighted.search(&board, true);
        assert_eq!(result.best_move, Some(3));
        assert!(result.score > 1);
    }

    #[test]
    fn test_weighted_score_at_extreme_depth() {
        // X has already won along the top row
        let board = grid3(&[
            (1, Player::X),
            (4, Player::O),
            (2, Player::X),
            (5, Player::O),
            (3, Player::X),
        ]);

        for depth in [u32::MAX, i32::MAX as u32, i32::MAX as u32 - 1] {
            let config = SearchConfig::default()
                .with_depth(depth)
                .with_score_mode(ScoreMode::DepthWeighted);
            let result = natural(config).search(&board, false);
            assert_eq!(result.score, SCORE_MAX - 1, "depth {depth}");
            assert_eq!(result.best_move, None);
        }
    }

    #[test]
    fn test_weighted_lost_position_still_reports_move() {
        // X: 1 2 4 threatens 3 and 7; every O reply loses
        let board = grid3(&[
            (1, Player::X),
            (5, Player::O),
            (2, Player::X),
            (9, Player::O),
            (4, Player::X),
        ]);
        let config = SearchConfig::default()
            .with_depth(u32::MAX)
            .with_score_mode(ScoreMode::DepthWeighted);
        let result = natural(config).search(&board, false);

        assert_eq!(result.score, SCORE_MAX - 1);
        assert!(result.best_move.is_some());
    }

    #[test]
    fn test_blocks_only_defence() {
        // X: 1 2   O: 5   O to move must take 3
        let board = grid3(&[(1, Player::X), (5, Player::O), (2, Player::X)]);

        for seed in 0..5 {
            let mut search = Minimax::new(SearchConfig::default().with_seed(seed));
            let result = search.search(&board, false);
            assert_eq!(result.best_move, Some(3));
            assert_eq!(result.score, 0);
        }
    }

    #[test]
    fn test_search_does_not_mutate_board() {
        let board = grid3(&[(5, Player::X)]);
        let before = board;
        let mut search = Minimax::new(SearchConfig::default().with_seed(1));
        search.search(&board, false);
        assert_eq!(board, before);
    }

    #[test]
    fn test_pruning_preserves_score_and_saves_work() {
        let board = grid3(&[(1, Player::X)]);

        let mut pruned = natural(SearchConfig::default());
        let mut full = natural(SearchConfig::default().with_alpha_beta(false));

        let a = pruned.search(&board, false);
        let b = full.search(&board, false);

        assert_eq!(a.score, b.score);
        assert_eq!(full.stats().cutoffs, 0);
        assert!(pruned.stats().cutoffs > 0);
        assert!(pruned.stats().nodes < full.stats().nodes);
    }

    #[test]
    fn test_stats_are_recorded() {
        let mut search = natural(SearchConfig::default().with_depth(3));
        search.search(&Grid6x7Board::new(), true);

        let stats = search.stats();
        assert!(stats.nodes > 1);
        assert!(stats.leaves > 0);
        assert_eq!(stats.max_ply, 3);
    }

    #[test]
    fn test_same_seed_same_move() {
        let board = Grid6x7Board::new();
        let config = SearchConfig::default().with_depth(4).with_seed(12345);

        let a = Minimax::new(config.clone()).search(&board, true);
        let b = Minimax::new(config).search(&board, true);

        assert_eq!(a, b);
    }

    #[test]
    fn test_choose_move_terminal_is_none() {
        let board = grid3(&[
            (1, Player::O),
            (2, Player::O),
            (3, Player::O),
        ]);
        let mut search = natural(SearchConfig::default());
        assert_eq!(search.choose_move(&board, Player::X), None);
    }

    #[test]
    fn test_choose_move_falls_back_at_depth_zero() {
        let board = grid3(&[(1, Player::X)]);
        let mut search = natural(SearchConfig::default().with_depth(0));
        assert_eq!(search.choose_move(&board, Player::O), Some(2));
    }

    #[test]
    fn test_free_search_with_window() {
        let board = grid3(&[(1, Player::X), (5, Player::O), (2, Player::X)]);
        let result = search(&board, false, 9, SCORE_MIN, SCORE_MAX, &mut NaturalOrder);
        assert_eq!(result.best_move, Some(3));
    }

    #[test]
    fn test_set_depth() {
        let mut search = natural(SearchConfig::default());
        search.set_depth(2);
        assert_eq!(search.config().depth, 2);
    }
}
