//! End-to-end solver tests on known positions.
//!
//! Verifies outcomes, color symmetry, node counts, and that the board is
//! left untouched by a search.

use hexapawn_core::{Board, Move, Position, generate_legal_moves};
use hexapawn_engine::{Outcome, Searcher, solve};

const START_3X3: &str = "W\nppp\n...\nPPP";
const START_4X3: &str = "W\nppp\n...\n...\nPPP";
const START_3X4: &str = "W\npppp\n....\nPPPP";
const START_4X4: &str = "W\npppp\n....\n....\nPPPP";
const PROGRESSED_6X6: &str = "B\n....p.\n...PP.\n..p..p\n.P...P\npP.P..\n......";
const LONE_PAWN_4X3: &str = "W\n...\n...\n...\n..P";
const MIDGAME_4X4: &str = "W\n.ppp\np...\n.PP.\nP..P";

fn board(text: &str) -> Board {
    text.parse().unwrap()
}

fn outcome_of(text: &str) -> Outcome {
    solve(&mut board(text))
}

// ── Known values ──────────────────────────────────────────────────────────────

#[test]
fn standard_3x3_is_second_player_win() {
    assert_eq!(outcome_of(START_3X3), Outcome::Loss);
    assert_eq!(outcome_of("B\nppp\n...\nPPP"), Outcome::Loss);
}

#[test]
fn taller_3_wide_board_is_lost_for_mover() {
    assert_eq!(outcome_of(START_4X3), Outcome::Loss);
}

#[test]
fn wider_boards_are_first_player_wins() {
    assert_eq!(outcome_of(START_3X4), Outcome::Win);
    assert_eq!(outcome_of(START_4X4), Outcome::Win);
}

#[test]
fn progressed_6x6_black_wins() {
    assert_eq!(outcome_of(PROGRESSED_6X6), Outcome::Win);
}

#[test]
fn midgame_4x4_white_wins() {
    assert_eq!(outcome_of(MIDGAME_4X4), Outcome::Win);
}

#[test]
fn lone_pawn_wins_by_advancing() {
    let mut b = board(LONE_PAWN_4X3);
    let result = Searcher::new().solve(&mut b);
    assert_eq!(result.outcome, Outcome::Win);
    assert_eq!(
        result.winning_move,
        Some(Move::new(Position::new(3, 2), Position::new(2, 2)))
    );
}

#[test]
fn side_with_no_pawns_loses() {
    assert_eq!(outcome_of("W\nppp\n...\n..."), Outcome::Loss);
    assert_eq!(outcome_of("B\n....\n....\n.PP."), Outcome::Loss);
}

#[test]
fn fully_blocked_side_loses() {
    assert_eq!(outcome_of("W\np.p\n.p.\n.P."), Outcome::Loss);
}

// ── Properties ────────────────────────────────────────────────────────────────

#[test]
fn mirrored_positions_have_same_outcome() {
    for text in [
        START_3X3,
        START_4X3,
        START_3X4,
        START_4X4,
        PROGRESSED_6X6,
        MIDGAME_4X4,
        LONE_PAWN_4X3,
        "B\np..p\n.P..\n..p.\nPP..",
        "W\n.....\n.p...\n..P..\n.....\n.....",
    ] {
        let mut original = board(text);
        let mut mirror = original.mirrored();
        assert_eq!(
            solve(&mut original),
            solve(&mut mirror),
            "color symmetry broken for {text:?}"
        );
    }
}

#[test]
fn search_leaves_board_untouched() {
    for text in [START_3X3, START_4X4, PROGRESSED_6X6, MIDGAME_4X4] {
        let mut b = board(text);
        let before = b.clone();
        solve(&mut b);
        assert_eq!(b, before, "board changed by search of {text:?}");
        b.validate().unwrap();
    }
}

#[test]
fn outcome_agrees_with_children() {
    // A position is a win iff some move reaches the home rank or leads to a
    // position that is lost for the opponent.
    for text in [START_3X3, START_3X4, MIDGAME_4X4, PROGRESSED_6X6] {
        let mut b = board(text);
        let expected = solve(&mut b);

        let mut any_win = false;
        for &mv in generate_legal_moves(&b).as_slice() {
            let reached_home = b.apply_move(mv);
            any_win |= reached_home || solve(&mut b) == Outcome::Loss;
            b.undo_move(mv);
        }
        let derived = if any_win { Outcome::Win } else { Outcome::Loss };
        assert_eq!(derived, expected, "inconsistent value for {text:?}");
    }
}

// ── Search statistics ─────────────────────────────────────────────────────────

#[test]
fn node_counts_are_reproducible() {
    let searcher = Searcher::new();
    assert_eq!(searcher.solve(&mut board(START_3X3)).nodes, 50);
    assert_eq!(searcher.solve(&mut board(START_4X3)).nodes, 270);
    assert_eq!(searcher.solve(&mut board(START_4X4)).nodes, 1495);
    assert_eq!(searcher.solve(&mut board(PROGRESSED_6X6)).nodes, 4);
}

#[test]
fn max_ply_bounded_by_game_length() {
    let result = Searcher::new().solve(&mut board(START_3X3));
    // Each of six pawns can advance at most twice on three rows.
    assert!(result.max_ply >= 2 && result.max_ply <= 12, "max_ply = {}", result.max_ply);
}
