//! Whole-game scenarios driven through the public API.

use flipline_othello::{Board, CaptureRule, GameState, Location, Outcome, Player};

fn loc(s: &str) -> Location {
    s.parse().unwrap()
}

#[test]
fn first_legal_opening() {
    let start = GameState::new(Player::Black);
    let first = start.legal_moves().first().unwrap();
    assert_eq!(first, loc("D3"));

    let next = start.apply(first).unwrap();
    assert_eq!(next.disk_count(Player::Black), 4);
    assert_eq!(next.disk_count(Player::White), 1);
    assert_eq!(next.active_player(), Player::White);
    assert!(!next.passed());
    assert_eq!(next.legal_moves().as_slice(), &[loc("E3"), loc("C5")]);
}

/// Play the first legal move every turn, passing when stuck, and check the per-move
/// invariants. Returns the final state with the number of moves and passes made.
fn play_first_moves(rule: CaptureRule) -> (GameState, usize, usize) {
    let mut state = GameState::with_rule(Player::Black, rule);
    let (mut moves, mut passes) = (0, 0);

    while !state.is_terminal() {
        let Some(mv) = state.legal_moves().first() else {
            state = state.pass();
            passes += 1;
            continue;
        };
        let next = state.apply(mv).unwrap();

        assert_eq!(next.count_occupied(), state.count_occupied() + 1);
        assert_eq!(next.active_player(), !state.active_player());
        assert!(!next.passed());

        state = next;
        moves += 1;
    }
    (state, moves, passes)
}

#[test]
fn first_move_game_orthogonal() {
    let (end, moves, passes) = play_first_moves(CaptureRule::Orthogonal);
    assert_eq!(moves, 58);
    assert_eq!(passes, 1);
    assert_eq!(end.disk_count(Player::Black), 19);
    assert_eq!(end.disk_count(Player::White), 43);
    assert_eq!(end.board().count_empty(), 2);
    assert_eq!(end.winner(), Outcome::Win(Player::White));
}

#[test]
fn first_move_game_standard() {
    let (end, moves, passes) = play_first_moves(CaptureRule::Standard);
    assert_eq!(moves, 60);
    assert_eq!(passes, 4);
    assert_eq!(end.disk_count(Player::Black), 19);
    assert_eq!(end.disk_count(Player::White), 45);
    assert_eq!(end.winner(), Outcome::Win(Player::White));
}

/// Every successor of every state reached in a game hands the move to the other side.
fn check_alternation(rule: CaptureRule, pick: impl Fn(usize, usize) -> usize) {
    let mut state = GameState::with_rule(Player::Black, rule);
    let mut ply = 0;

    while !state.is_terminal() {
        let moves = state.legal_moves();
        if moves.is_empty() {
            let passed = state.pass();
            assert_eq!(passed.active_player(), !state.active_player());
            state = passed;
            continue;
        }

        for mv in &moves {
            let next = state.apply(*mv).unwrap();
            assert_eq!(next.active_player(), !state.active_player(), "{} after {}", mv, ply);
        }
        state = state.apply(moves.as_slice()[pick(ply, moves.len())]).unwrap();
        ply += 1;
    }
}

#[test]
fn apply_alternates_players_across_games() {
    for rule in [CaptureRule::Orthogonal, CaptureRule::Standard] {
        check_alternation(rule, |_, _| 0);
        check_alternation(rule, |_, len| len - 1);
        check_alternation(rule, |ply, len| ply % len);
        check_alternation(rule, |ply, len| (ply * 7 + 3) % len);
    }
}

#[test]
fn stuck_opponent_still_gets_the_turn() {
    let board: Board = "
        XOO.....
        ........
        ........
        ........
        ........
        ........
        ........
        ......OX"
        .parse()
        .unwrap();
    let state = GameState::from_board(board, Player::Black, CaptureRule::Orthogonal);

    let next = state.apply(loc("D1")).unwrap();
    assert_eq!(next.active_player(), Player::White);
    assert!(next.legal_moves().is_empty());
    assert!(!next.is_terminal());
    assert_eq!(next.pass().legal_moves().as_slice(), &[loc("F8")]);
}
