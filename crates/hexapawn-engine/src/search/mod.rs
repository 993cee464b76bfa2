//! Position solving.

mod negamax;

use hexapawn_core::{Board, Move};
use tracing::debug;

use crate::outcome::Outcome;
use negamax::{SearchContext, negamax};

/// Knobs for a [`Searcher`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchConfig {
    /// Emit a `trace` event with the rendered board for every apply and undo.
    pub trace: bool,
}

/// Result of a completed search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Value of the position for the side to move.
    pub outcome: Outcome,
    /// The first winning root move in generation order, when the outcome is a win.
    pub winning_move: Option<Move>,
    /// Positions expanded.
    pub nodes: u64,
    /// Deepest ply expanded, counting the root as ply 0.
    pub max_ply: u32,
}

/// Exhaustive solver. Holds configuration only; all search state lives on
/// the stack of a single [`solve`](Searcher::solve) call.
#[derive(Debug, Clone, Default)]
pub struct Searcher {
    config: SearchConfig,
}

impl Searcher {
    /// Create a searcher with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a searcher with the given configuration.
    pub fn with_config(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Decide whether the side to move can force a win.
    ///
    /// The board is mutated during the search and restored before returning.
    pub fn solve(&self, board: &mut Board) -> SearchResult {
        let mut ctx = SearchContext::new(self.config.trace);
        let outcome = negamax(board, 0, &mut ctx);

        debug!(
            %outcome,
            nodes = ctx.nodes,
            max_ply = ctx.max_ply,
            winning_move = ?ctx.winning_move,
            "search finished"
        );

        SearchResult {
            outcome,
            winning_move: ctx.winning_move,
            nodes: ctx.nodes,
            max_ply: ctx.max_ply,
        }
    }
}

/// Solve `board` with the default configuration.
pub fn solve(board: &mut Board) -> Outcome {
    Searcher::new().solve(board).outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    use hexapawn_core::Position;

    #[test]
    fn starting_3x3_is_lost_for_first_player() {
        let mut board = Board::starting_position();
        let result = Searcher::new().solve(&mut board);
        assert_eq!(result.outcome, Outcome::Loss);
        assert_eq!(result.winning_move, None);
        assert!(result.nodes > 1);
    }

    #[test]
    fn board_restored_after_solve() {
        let mut board = Board::starting_position();
        solve(&mut board);
        assert_eq!(board, Board::starting_position());
    }

    #[test]
    fn winning_move_reported() {
        let mut board: Board = "W\n.p.\nP..\n...".parse().unwrap();
        let result = Searcher::new().solve(&mut board);
        assert_eq!(result.outcome, Outcome::Win);
        assert_eq!(
            result.winning_move,
            Some(Move::new(Position::new(1, 0), Position::new(0, 0)))
        );
    }

    #[test]
    fn trace_does_not_change_result() {
        let config = SearchConfig { trace: true };
        let searcher = Searcher::with_config(config.clone());
        assert_eq!(searcher.config(), &config);

        let mut board = Board::starting_position();
        let traced = searcher.solve(&mut board);
        let plain = Searcher::new().solve(&mut board);
        assert_eq!(traced, plain);
    }

    #[test]
    fn side_without_pawns_loses() {
        let mut board: Board = "W\nppp\n...\n...".parse().unwrap();
        assert_eq!(solve(&mut board), Outcome::Loss);
    }
}
