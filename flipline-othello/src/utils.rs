//! Text rendering shared by the board and game state.

use crate::EDGE_LENGTH;
use std::fmt::{self, Formatter};

/// Write 64 glyphs as a grid labelled with column letters and 1-based row numbers.
/// `glyphs` must yield exactly 64 items in row-major order.
pub fn format_grid<I: IntoIterator<Item = char>>(glyphs: I, f: &mut Formatter) -> fmt::Result {
    let mut glyphs = glyphs.into_iter();
    write!(f, "  A B C D E F G H")?;

    for row in 1..=EDGE_LENGTH {
        write!(f, "\n{}", row)?;
        for _ in 0..EDGE_LENGTH {
            write!(f, " {}", glyphs.next().ok_or(fmt::Error)?)?;
        }
    }

    match glyphs.next() {
        None => Ok(()),
        Some(_) => Err(fmt::Error),
    }
}
