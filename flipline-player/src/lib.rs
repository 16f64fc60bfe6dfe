//! `flipline-player` chooses moves for [`flipline_othello`] games.
//!
//! Every policy sits behind the closed [`Strategy`] enum and is picked by a
//! [`StrategyConfig`] when a seat is filled:
//!
//!  - [`RandomStrategy`]: uniform over the legal moves, optionally seeded.
//!  - [`greedy`]: one-ply lookahead that leaves the opponent the fewest disks.
//!  - [`Minimax`]: fixed-depth exhaustive search on disk difference, no pruning.
//!
//! The [`arena`] module plays strategies against each other.

pub mod arena;
pub mod config;
pub mod greedy;
pub mod minimax;
pub mod random;

mod strategy;

pub use config::{ConfigError, MatchConfig, ParseStrategyError, StrategyConfig};
pub use minimax::{Minimax, SearchResult};
pub use random::RandomStrategy;
pub use strategy::{NoLegalMoveError, Strategy};
