//! Uniformly random move choice. Useful as a baseline any real strategy should beat.

use crate::strategy::NoLegalMoveError;
use flipline_othello::{GameState, Location};
use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use rand::SeedableRng;

/// Picks uniformly among the legal moves using its own random source.
#[derive(Clone, Debug)]
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    /// A strategy seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// A strategy whose choices are reproducible for a given `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn choose(&mut self, state: &GameState) -> Result<(Location, GameState), NoLegalMoveError> {
        state
            .successors()
            .choose(&mut self.rng)
            .ok_or_else(|| NoLegalMoveError::at(state))
    }

    pub fn select_move(&mut self, state: &GameState) -> Result<GameState, NoLegalMoveError> {
        self.choose(state).map(|(_, next)| next)
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}
