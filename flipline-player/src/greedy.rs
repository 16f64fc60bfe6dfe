//! One-ply "most captures" choice.
//!
//! Looks at every successor and keeps the one that leaves the opponent with the fewest
//! disks. Cheap and short-sighted: a baseline, not a strong player.

use crate::strategy::NoLegalMoveError;
use flipline_othello::{GameState, Location};

/// Choose the successor minimizing the opponent's disk count.
/// Ties go to the earliest move in [`GameState::legal_moves`] order.
pub fn choose(state: &GameState) -> Result<(Location, GameState), NoLegalMoveError> {
    let opponent = !state.active_player();
    state
        .successors()
        .min_by_key(|(_, next)| next.disk_count(opponent))
        .ok_or_else(|| NoLegalMoveError::at(state))
}

pub fn select_move(state: &GameState) -> Result<GameState, NoLegalMoveError> {
    choose(state).map(|(_, next)| next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flipline_othello::{Board, CaptureRule, Player};

    fn loc(s: &str) -> Location {
        s.parse().unwrap()
    }

    #[test]
    fn greedy_takes_first_of_equal_openings() {
        let (mv, next) = choose(&GameState::default()).unwrap();
        assert_eq!(mv, loc("D3"));
        assert_eq!(next.disk_count(Player::White), 1);
    }

    #[test]
    fn greedy_minimizes_opponent_disks() {
        let board: Board = "
            ...O....
            ...O....
            ..OOO...
            ...OOOO.
            ..OOXXXX
            ...XXX..
            ........
            ........"
            .parse()
            .unwrap();
        let state = GameState::from_board(board, Player::White, CaptureRule::Orthogonal);
        assert_eq!(
            state.legal_moves().as_slice(),
            &[loc("G6"), loc("D7"), loc("E7"), loc("F7")]
        );

        // E7 and F7 both leave Black five disks; E7 comes first.
        let (mv, next) = choose(&state).unwrap();
        assert_eq!(mv, loc("E7"));
        assert_eq!(next.disk_count(Player::Black), 5);
        assert_eq!(select_move(&state), Ok(next));
    }
}
