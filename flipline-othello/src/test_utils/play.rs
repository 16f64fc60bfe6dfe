//! Prompting a human for moves over any line-oriented stream.

use crate::{GameState, Location};
use std::io::{self, BufRead, Write};

/// Show `state`, then read locations from `input` until one is legal, and return the
/// resulting state. Unparseable or illegal input is reported on `output` and asked again.
///
/// Fails with [`io::ErrorKind::InvalidInput`] if the side to move has no legal move,
/// and with [`io::ErrorKind::UnexpectedEof`] if `input` runs dry.
pub fn read_move<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    state: &GameState,
) -> io::Result<GameState> {
    let legal = state.legal_moves();
    if legal.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} has no legal move", state.active_player()),
        ));
    }

    writeln!(output, "\n{}\n", state)?;
    loop {
        write!(output, "Enter a move: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before a move was entered",
            ));
        }

        let loc: Location = match line.parse() {
            Ok(loc) => loc,
            Err(_) => {
                writeln!(output, "Cannot parse move.")?;
                continue;
            }
        };

        match state.apply(loc) {
            Ok(next) => return Ok(next),
            Err(_) => writeln!(output, "Invalid move. Legal moves: {}", legal)?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;
    use std::io::Cursor;

    #[test]
    fn read_move_retries_until_legal() {
        let state = GameState::default();
        let mut input = Cursor::new("zz\nA1\nd3\n");
        let mut output = Vec::new();

        let next = read_move(&mut input, &mut output, &state).unwrap();
        assert_eq!(next, state.apply("D3".parse().unwrap()).unwrap());
        assert_eq!(next.active_player(), Player::White);

        let transcript = String::from_utf8(output).unwrap();
        assert!(transcript.contains("Cannot parse move."));
        assert!(transcript.contains("Invalid move. Legal moves: [D3, C4, F5, E6]"));
    }

    #[test]
    fn read_move_reports_eof() {
        let state = GameState::default();
        let mut input = Cursor::new("A1\n");
        let err = read_move(&mut input, &mut Vec::new(), &state).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
