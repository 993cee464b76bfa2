//! Full-depth negamax over win/loss values.

use hexapawn_core::{Board, Move, generate_legal_moves};
use tracing::trace;

use crate::outcome::Outcome;

/// Mutable state shared by every node of one search.
pub(super) struct SearchContext {
    /// Positions expanded so far.
    pub nodes: u64,
    /// Deepest ply expanded so far.
    pub max_ply: u32,
    /// First winning move found at the root, if any.
    pub winning_move: Option<Move>,
    /// Log every apply and undo.
    pub trace: bool,
}

impl SearchContext {
    pub(super) fn new(trace: bool) -> Self {
        Self {
            nodes: 0,
            max_ply: 0,
            winning_move: None,
            trace,
        }
    }
}

/// Negamax search to terminal positions.
///
/// Returns the outcome for the side to move. Stops at the first winning
/// move. The board is left exactly as it was found.
pub(super) fn negamax(board: &mut Board, ply: u32, ctx: &mut SearchContext) -> Outcome {
    ctx.nodes += 1;
    ctx.max_ply = ctx.max_ply.max(ply);

    let moves = generate_legal_moves(board);

    // A side with no move has lost.
    if moves.is_empty() {
        return Outcome::Loss;
    }

    for &mv in moves.as_slice() {
        let reached_home = board.apply_move(mv);
        if ctx.trace {
            trace!(ply, %mv, reached_home, "apply\n{board}");
        }

        let outcome = if reached_home {
            Outcome::Win
        } else {
            -negamax(board, ply + 1, ctx)
        };

        board.undo_move(mv);
        if ctx.trace {
            trace!(ply, %mv, %outcome, "undo");
        }

        if outcome.is_win() {
            if ply == 0 {
                ctx.winning_move = Some(mv);
            }
            return Outcome::Win;
        }
    }

    Outcome::Loss
}

#[cfg(test)]
mod tests {
    use super::{SearchContext, negamax};
    use crate::outcome::Outcome;
    use hexapawn_core::{Board, Move, Position};

    fn run(text: &str) -> (Outcome, SearchContext) {
        let mut board: Board = text.parse().unwrap();
        let mut ctx = SearchContext::new(false);
        let outcome = negamax(&mut board, 0, &mut ctx);
        (outcome, ctx)
    }

    #[test]
    fn no_moves_is_loss() {
        let (outcome, ctx) = run("W\n.p.\n.P.\n...");
        assert_eq!(outcome, Outcome::Loss);
        assert_eq!(ctx.nodes, 1);
        assert_eq!(ctx.winning_move, None);
    }

    #[test]
    fn immediate_promotion_short_circuits() {
        let (outcome, ctx) = run("W\n...\nP..\n..p");
        assert_eq!(outcome, Outcome::Win);
        assert_eq!(ctx.nodes, 1);
        assert_eq!(
            ctx.winning_move,
            Some(Move::new(Position::new(1, 0), Position::new(0, 0)))
        );
    }

    #[test]
    fn opponent_without_moves_loses() {
        // After the only advance, Black has no pawns and so no reply.
        let (outcome, ctx) = run("W\n...\n...\n...\n..P");
        assert_eq!(outcome, Outcome::Win);
        assert_eq!(ctx.nodes, 2);
        assert_eq!(ctx.max_ply, 1);
    }

    #[test]
    fn forced_loss_after_only_move() {
        // Black's only advance lets White reach row 0.
        let (outcome, ctx) = run("B\n..p\nP..\n...");
        assert_eq!(outcome, Outcome::Loss);
        assert_eq!(ctx.winning_move, None);
    }
}
