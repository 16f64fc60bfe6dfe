//! Utilities used for testing, benchmarking and driving games by hand.

mod perft;
pub use perft::{perft, run_perft};

pub mod play;
pub use play::read_move;
