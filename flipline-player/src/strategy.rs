use crate::config::StrategyConfig;
use crate::greedy;
use crate::minimax::Minimax;
use crate::random::RandomStrategy;
use derive_more::{Display, Error};
use flipline_othello::{GameState, Location, Player};
use log::debug;
use std::fmt;

/// A strategy was asked to move in a position where the side to move has no legal move.
/// Callers should check [`GameState::is_terminal`] (and pass when stuck) first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
#[display(fmt = "{} has no legal move to choose from", player)]
pub struct NoLegalMoveError {
    pub player: Player,
}

impl NoLegalMoveError {
    pub(crate) fn at(state: &GameState) -> Self {
        Self {
            player: state.active_player(),
        }
    }
}

/// The move-selection policies a seat can be filled with.
#[derive(Clone, Debug)]
pub enum Strategy {
    Random(RandomStrategy),
    GreedyCapture,
    Minimax(Minimax),
}

impl Strategy {
    /// Build the policy described by `config` for the player of `color`.
    /// Minimax maximizes the disk difference for `color`.
    pub fn from_config(config: &StrategyConfig, color: Player) -> Self {
        match *config {
            StrategyConfig::Random { seed: Some(seed) } => {
                Strategy::Random(RandomStrategy::seeded(seed))
            }
            StrategyConfig::Random { seed: None } => Strategy::Random(RandomStrategy::new()),
            StrategyConfig::Greedy => Strategy::GreedyCapture,
            StrategyConfig::Minimax { depth } => Strategy::Minimax(Minimax::new(depth, color)),
        }
    }

    /// Move this strategy to the seat of `color`. Only minimax cares which side it plays.
    pub fn take_seat(&mut self, color: Player) {
        if let Strategy::Minimax(minimax) = self {
            *minimax = Minimax::new(minimax.depth(), color);
        }
    }

    /// Pick a legal move for the side to move and return it with the resulting state.
    pub fn choose(&mut self, state: &GameState) -> Result<(Location, GameState), NoLegalMoveError> {
        let (mv, next) = match self {
            Strategy::Random(random) => random.choose(state),
            Strategy::GreedyCapture => greedy::choose(state),
            Strategy::Minimax(minimax) => minimax
                .search(state)
                .map(|found| (found.best_move, found.state)),
        }?;
        debug!("{} chose {} for {}", self, mv, state.active_player());
        Ok((mv, next))
    }

    /// Pick a legal move for the side to move and return the resulting state.
    pub fn select_move(&mut self, state: &GameState) -> Result<GameState, NoLegalMoveError> {
        self.choose(state).map(|(_, next)| next)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Random(_) => f.write_str("random"),
            Strategy::GreedyCapture => f.write_str("greedy"),
            Strategy::Minimax(minimax) => write!(f, "minimax:{}", minimax.depth()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flipline_othello::{Board, CaptureRule};

    fn stuck_state() -> GameState {
        let board: Board = "
            XO......
            ........
            ........
            ........
            ........
            ........
            ........
            .......O"
            .parse()
            .unwrap();
        GameState::from_board(board, Player::White, CaptureRule::Orthogonal)
    }

    #[test]
    fn every_strategy_rejects_positions_without_moves() {
        let state = stuck_state();
        let mut strategies = [
            Strategy::Random(RandomStrategy::seeded(1)),
            Strategy::GreedyCapture,
            Strategy::Minimax(Minimax::new(2, Player::White)),
        ];
        for strategy in strategies.iter_mut() {
            assert_eq!(
                strategy.select_move(&state),
                Err(NoLegalMoveError {
                    player: Player::White
                })
            );
        }
    }

    #[test]
    fn from_config_builds_each_variant() {
        let random = Strategy::from_config(&StrategyConfig::Random { seed: Some(3) }, Player::Black);
        assert!(matches!(random, Strategy::Random(_)));
        let greedy = Strategy::from_config(&StrategyConfig::Greedy, Player::Black);
        assert!(matches!(greedy, Strategy::GreedyCapture));

        let mut minimax = Strategy::from_config(&StrategyConfig::Minimax { depth: 3 }, Player::White);
        match &minimax {
            Strategy::Minimax(inner) => assert_eq!((inner.depth(), inner.color()), (3, Player::White)),
            other => panic!("expected minimax, got {}", other),
        }
        minimax.take_seat(Player::Black);
        match &minimax {
            Strategy::Minimax(inner) => assert_eq!(inner.color(), Player::Black),
            other => panic!("expected minimax, got {}", other),
        }
        assert_eq!(minimax.to_string(), "minimax:3");
    }

    #[test]
    fn select_move_returns_a_successor() {
        let state = GameState::default();
        let successors: Vec<GameState> = state.successors().map(|(_, next)| next).collect();
        let mut strategies = [
            Strategy::Random(RandomStrategy::seeded(9)),
            Strategy::GreedyCapture,
            Strategy::Minimax(Minimax::new(3, Player::Black)),
        ];
        for strategy in strategies.iter_mut() {
            let next = strategy.select_move(&state).unwrap();
            assert!(successors.contains(&next), "{} left the successor set", strategy);
        }
    }
}
