//! Perft (performance test) for move generation and undo verification.

use crate::board::Board;
use crate::movegen::generate_legal_moves;

/// Count the number of leaf nodes at the given depth.
///
/// Depth 0 returns 1 (the current position). Depth 1 returns the number
/// of moves. A move that reaches the home rank ends the game and counts as
/// a single leaf. The board is restored before returning.
pub fn perft(board: &mut Board, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = generate_legal_moves(board);

    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for &mv in moves.as_slice() {
        let won = board.apply_move(mv);
        nodes += if won { 1 } else { perft(board, depth - 1) };
        board.undo_move(mv);
    }
    nodes
}

/// Run perft with per-move breakdown (useful for debugging).
///
/// Returns `(move, node_count)` pairs in generation order.
pub fn divide(board: &mut Board, depth: usize) -> Vec<(String, u64)> {
    let moves = generate_legal_moves(board);
    moves
        .as_slice()
        .iter()
        .map(|&mv| {
            let won = board.apply_move(mv);
            let count = if won || depth <= 1 { 1 } else { perft(board, depth - 1) };
            board.undo_move(mv);
            (mv.to_string(), count)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    #[test]
    fn perft_depth_0() {
        let mut board = Board::starting_position();
        assert_eq!(perft(&mut board, 0), 1);
    }

    #[test]
    fn perft_start_depth_1() {
        let mut board = Board::starting_position();
        assert_eq!(perft(&mut board, 1), 3);
    }

    #[test]
    fn perft_start_depth_2() {
        // Edge advances leave Black 3 replies, the centre advance 4.
        let mut board = Board::starting_position();
        assert_eq!(perft(&mut board, 2), 10);
    }

    #[test]
    fn perft_start_depth_3() {
        let mut board = Board::starting_position();
        assert_eq!(perft(&mut board, 3), 28);
    }

    #[test]
    fn perft_start_depth_4() {
        let mut board = Board::starting_position();
        assert_eq!(perft(&mut board, 4), 60);
    }

    // --- Progressed 6x6, Black to move ---

    fn progressed_6x6() -> Board {
        "B\n....p.\n...PP.\n..p..p\n.P...P\npP.P..\n......"
            .parse()
            .unwrap()
    }

    #[test]
    fn perft_6x6_depth_1() {
        assert_eq!(perft(&mut progressed_6x6(), 1), 4);
    }

    #[test]
    fn perft_6x6_depth_2() {
        assert_eq!(perft(&mut progressed_6x6(), 2), 14);
    }

    #[test]
    fn perft_6x6_depth_3() {
        assert_eq!(perft(&mut progressed_6x6(), 3), 32);
    }

    #[test]
    fn perft_4x4_start() {
        let mut board: Board = "W\npppp\n....\n....\nPPPP".parse().unwrap();
        assert_eq!(perft(&mut board, 1), 4);
        assert_eq!(perft(&mut board, 2), 16);
        assert_eq!(perft(&mut board, 3), 66);
        assert_eq!(perft(&mut board, 4), 280);
    }

    #[test]
    fn perft_restores_board() {
        let mut board = progressed_6x6();
        let original = board.clone();
        perft(&mut board, 4);
        assert_eq!(board, original);
    }

    #[test]
    fn perft_counts_winning_move_as_leaf() {
        // The only move reaches row 0, so deeper searches stay at 1.
        let mut board: Board = "W\n...\n..P\n...".parse().unwrap();
        assert_eq!(perft(&mut board, 1), 1);
        assert_eq!(perft(&mut board, 5), 1);
    }

    #[test]
    fn divide_start_depth_2() {
        let mut board = Board::starting_position();
        let results = divide(&mut board, 2);
        assert_eq!(
            results,
            vec![
                ("(2,0)-(1,0)".to_string(), 3),
                ("(2,1)-(1,1)".to_string(), 4),
                ("(2,2)-(1,2)".to_string(), 3),
            ]
        );
        assert_eq!(board, Board::starting_position());
    }
}
