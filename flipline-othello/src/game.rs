//! Implements game-level Othello logic.
//!
//! [`GameState`] is the only type that knows whose turn it is. It never changes once
//! built: [`GameState::apply`] and [`GameState::successors`] hand back new values, so
//! any number of search branches can hold states derived from the same parent.

use crate::board::{Board, CaptureRule, Cell};
use crate::location::{Location, LocationList};
use derive_more::{Display, Error};
use log::debug;
use std::fmt;

/// One of the two players in a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Player {
    #[default]
    Black,
    White,
}

impl std::ops::Not for Player {
    type Output = Self;

    /// Gets the other player.
    fn not(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Black => f.write_str("Black"),
            Player::White => f.write_str("White"),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Display, Error)]
#[display(fmt = "invalid player string")]
pub struct ParsePlayerError;

impl std::str::FromStr for Player {
    type Err = ParsePlayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "b" | "black" | "x" => Ok(Player::Black),
            "w" | "white" | "o" => Ok(Player::White),
            _ => Err(ParsePlayerError),
        }
    }
}

/// The result of a game, as far as it can be told from one state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    Win(Player),
    Tie,
    /// The game is still in progress.
    Undetermined,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Win(player) => write!(f, "{} wins", player),
            Outcome::Tie => f.write_str("Tie"),
            Outcome::Undetermined => f.write_str("Undetermined"),
        }
    }
}

/// Raised by [`GameState::apply`] when the location captures nothing for the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
#[display(fmt = "illegal move {} for {}", location, player)]
pub struct InvalidMoveError {
    pub location: Location,
    pub player: Player,
}

/// The complete state of an Othello game.
///
/// Disk counts are cached, but only ever computed by scanning the grid when a state
/// is built, so they cannot drift from the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GameState {
    board: Board,
    active_player: Player,
    rule: CaptureRule,
    passed: bool,
    black_disks: u8,
    white_disks: u8,
}

impl Default for GameState {
    /// Gets the starting position with Black to move under the orthogonal rule.
    fn default() -> Self {
        Self::new(Player::default())
    }
}

impl GameState {
    /// The starting position with `first_mover` to play, under the orthogonal rule.
    pub fn new(first_mover: Player) -> Self {
        Self::with_rule(first_mover, CaptureRule::default())
    }

    /// The starting position with `first_mover` to play under `rule`.
    pub fn with_rule(first_mover: Player, rule: CaptureRule) -> Self {
        Self::from_board(Board::starting(), first_mover, rule)
    }

    /// Wrap an arbitrary board. The side to move is taken as given, even if it has
    /// no legal moves; see [`GameState::pass`].
    pub fn from_board(board: Board, active_player: Player, rule: CaptureRule) -> Self {
        Self::build(board, active_player, rule, false)
    }

    fn build(board: Board, active_player: Player, rule: CaptureRule, passed: bool) -> Self {
        Self {
            board,
            active_player,
            rule,
            passed,
            black_disks: board.count(Cell::Black),
            white_disks: board.count(Cell::White),
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn active_player(&self) -> Player {
        self.active_player
    }

    #[inline]
    pub fn rule(&self) -> CaptureRule {
        self.rule
    }

    /// True if this state was reached by [`GameState::pass`].
    #[inline]
    pub fn passed(&self) -> bool {
        self.passed
    }

    /// Number of disks of `player`'s color on the board.
    #[inline]
    pub fn disk_count(&self, player: Player) -> u8 {
        match player {
            Player::Black => self.black_disks,
            Player::White => self.white_disks,
        }
    }

    /// Score the board for `player` as: # own disks - # opponent disks.
    #[inline]
    pub fn score(&self, player: Player) -> i8 {
        self.disk_count(player) as i8 - self.disk_count(!player) as i8
    }

    #[inline]
    pub fn count_occupied(&self) -> u8 {
        self.black_disks + self.white_disks
    }

    /// Get the legal placements for the side to move, in row-major order.
    pub fn legal_moves(&self) -> LocationList {
        self.moves_for(self.active_player)
    }

    fn moves_for(&self, player: Player) -> LocationList {
        let mut moves = LocationList::default();
        for loc in Location::all().filter(|&loc| self.board.is_legal(loc, player, self.rule)) {
            moves.push(loc);
        }
        moves
    }

    fn has_moves(&self, player: Player) -> bool {
        Location::all().any(|loc| self.board.is_legal(loc, player, self.rule))
    }

    /// Place a disk for the side to move.
    ///
    /// The new state always has the opponent to move, even when the opponent has no
    /// legal move. A stuck opponent in a live game must then [`GameState::pass`].
    pub fn apply(&self, loc: Location) -> Result<GameState, InvalidMoveError> {
        let flips = self.board.flips(loc, self.active_player, self.rule);
        if flips.is_empty() {
            return Err(InvalidMoveError {
                location: loc,
                player: self.active_player,
            });
        }

        let next = self.place(loc, &flips);
        debug!(
            "{} plays {} flipping {} ({} to move)",
            self.active_player,
            loc,
            flips.len(),
            next.active_player
        );
        Ok(next)
    }

    fn place(&self, loc: Location, flips: &LocationList) -> GameState {
        let mover = self.active_player;
        let mut board = self.board;
        board.set(loc, Cell::from(mover));
        for &square in flips {
            board.set(square, Cell::from(mover));
        }

        Self::build(board, !mover, self.rule, false)
    }

    /// Lazily generate `(move, successor)` pairs in [`GameState::legal_moves`] order.
    /// Every successor owns its own board.
    pub fn successors(&self) -> impl Iterator<Item = (Location, GameState)> + '_ {
        Location::all().filter_map(move |loc| {
            let flips = self.board.flips(loc, self.active_player, self.rule);
            if flips.is_empty() {
                None
            } else {
                Some((loc, self.place(loc, &flips)))
            }
        })
    }

    /// Hand the turn to the opponent without placing a disk. Only meaningful when the
    /// side to move has no legal move and the game is not over.
    pub fn pass(&self) -> GameState {
        Self::build(self.board, !self.active_player, self.rule, true)
    }

    /// True iff neither the side to move nor its opponent has a legal move.
    pub fn is_terminal(&self) -> bool {
        !self.has_moves(self.active_player) && !self.has_moves(!self.active_player)
    }

    /// The winner by disk count once the game is over.
    pub fn winner(&self) -> Outcome {
        if !self.is_terminal() {
            return Outcome::Undetermined;
        }
        match self.black_disks.cmp(&self.white_disks) {
            std::cmp::Ordering::Greater => Outcome::Win(Player::Black),
            std::cmp::Ordering::Less => Outcome::Win(Player::White),
            std::cmp::Ordering::Equal => Outcome::Tie,
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board)?;
        write!(
            f,
            "{} to move ({}). Black: {}, White: {}",
            self.active_player,
            Cell::from(self.active_player).glyph(),
            self.black_disks,
            self.white_disks
        )?;
        if self.passed {
            f.write_str(" (last move was a pass)")?;
        }
        Ok(())
    }
}
