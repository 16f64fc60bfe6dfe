//! "Perft" move-generation test: count the leaves of the successor tree at a given depth.
//! See: http://www.aartbik.com/MISC/reversi.html

use crate::{CaptureRule, GameState, Player};

/// Count leaves below the starting position (Black to move) under `rule`.
pub fn run_perft(rule: CaptureRule, depth: u32) -> u64 {
    perft(GameState::with_rule(Player::Black, rule), depth)
}

/// Count leaves `depth` plies below `state`. Finished games count as a single leaf.
/// A stuck side to move passes without using up depth.
pub fn perft(state: GameState, depth: u32) -> u64 {
    if depth == 0 || state.is_terminal() {
        return 1;
    }

    // A forced pass is not a ply.
    if state.legal_moves().is_empty() {
        return perft(state.pass(), depth);
    }

    state
        .successors()
        .map(|(_, next)| perft(next, depth - 1))
        .sum()
}

#[test]
fn perft_orthogonal_01() {
    assert_eq!(run_perft(CaptureRule::Orthogonal, 1), 4);
}

#[test]
fn perft_orthogonal_02() {
    assert_eq!(run_perft(CaptureRule::Orthogonal, 2), 8);
}

#[test]
fn perft_orthogonal_03() {
    assert_eq!(run_perft(CaptureRule::Orthogonal, 3), 20);
}

#[test]
fn perft_orthogonal_04() {
    assert_eq!(run_perft(CaptureRule::Orthogonal, 4), 44);
}

#[test]
fn perft_orthogonal_05() {
    assert_eq!(run_perft(CaptureRule::Orthogonal, 5), 116);
}

#[test]
fn perft_standard_01() {
    assert_eq!(run_perft(CaptureRule::Standard, 1), 4);
}

#[test]
fn perft_standard_02() {
    assert_eq!(run_perft(CaptureRule::Standard, 2), 12);
}

#[test]
fn perft_standard_03() {
    assert_eq!(run_perft(CaptureRule::Standard, 3), 56);
}

#[test]
fn perft_standard_04() {
    assert_eq!(run_perft(CaptureRule::Standard, 4), 244);
}
