//! `flipline-othello` holds the game-state side of a four-direction Othello variant.
//!
//! The crate is organized in three layers:
//!
//!  - [`Location`] and [`LocationList`] name squares on the board and ordered sets of them.
//!  - [`Board`] is a plain 8x8 grid of [`Cell`]s together with the capture-line scan.
//!    It knows nothing about whose turn it is.
//!  - [`GameState`] is an immutable snapshot: board, side to move and disk counts.
//!    Every transition returns a fresh value, so search branches never share a grid.
//!
//! The default [`CaptureRule::Orthogonal`] only walks rows and columns when looking for
//! flips. [`CaptureRule::Standard`] adds the diagonals and plays tournament Othello.

pub mod test_utils;

mod board;
mod game;
mod location;
mod utils;

pub use board::*;
pub use game::*;
pub use location::*;

/// The number of spaces on one edge of an Othello board.
pub const EDGE_LENGTH: usize = 8;

/// The number of spaces on an Othello board.
pub const NUM_SPACES: usize = 64;
