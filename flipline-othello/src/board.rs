//! The 8x8 grid and the capture-line scan.
//!
//! A [`Board`] is turn-agnostic: callers say which [`Player`] is placing a disk and
//! under which [`CaptureRule`]. By convention row 0 is the top of the board and
//! every scan runs in row-major order.

use crate::game::Player;
use crate::location::{Location, LocationList};
use crate::{utils, EDGE_LENGTH, NUM_SPACES};
use derive_more::{Display, Error};
use std::convert::TryFrom;
use std::fmt;

/// The contents of a single square.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl Cell {
    /// The player owning the disk in this cell, if any.
    #[inline]
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Player::Black),
            Cell::White => Some(Player::White),
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Single-character glyph used by text renderers.
    pub fn glyph(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Black => 'X',
            Cell::White => 'O',
        }
    }

    fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            '.' | '-' => Some(Cell::Empty),
            'X' | 'x' | '#' | 'B' | 'b' => Some(Cell::Black),
            'O' | 'o' | 'W' | 'w' => Some(Cell::White),
            _ => None,
        }
    }

    fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Cell::Empty),
            1 => Some(Cell::Black),
            2 => Some(Cell::White),
            _ => None,
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }
}

/// Which straight lines a placement may capture along.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CaptureRule {
    /// Rows and columns only.
    #[default]
    Orthogonal,
    /// Rows, columns and diagonals, as in tournament Othello.
    Standard,
}

impl CaptureRule {
    const ORTHOGONAL: [(isize, isize); 4] = [(0, 1), (0, -1), (-1, 0), (1, 0)];
    const STANDARD: [(isize, isize); 8] = [
        (0, 1),
        (0, -1),
        (-1, 0),
        (1, 0),
        (-1, -1),
        (-1, 1),
        (1, -1),
        (1, 1),
    ];

    /// The (row, column) steps walked from a placed disk.
    #[inline]
    pub fn directions(self) -> &'static [(isize, isize)] {
        match self {
            CaptureRule::Orthogonal => &Self::ORTHOGONAL,
            CaptureRule::Standard => &Self::STANDARD,
        }
    }
}

impl fmt::Display for CaptureRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureRule::Orthogonal => f.write_str("orthogonal"),
            CaptureRule::Standard => f.write_str("standard"),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Display, Error)]
#[display(fmt = "unknown capture rule (expected \"orthogonal\" or \"standard\")")]
pub struct ParseCaptureRuleError;

impl std::str::FromStr for CaptureRule {
    type Err = ParseCaptureRuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "orthogonal" | "orth" => Ok(CaptureRule::Orthogonal),
            "standard" | "full" => Ok(CaptureRule::Standard),
            _ => Err(ParseCaptureRuleError),
        }
    }
}

/// Raised when raw input cannot describe a legal 8x8 grid.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum InvalidStateError {
    #[display(fmt = "board has {} rows, expected 8", rows)]
    WrongRowCount { rows: usize },
    #[display(fmt = "row {} has {} cells, expected 8", row, len)]
    WrongRowLength { row: usize, len: usize },
    #[display(fmt = "board has {} cells, expected 64", cells)]
    WrongCellCount { cells: usize },
    #[display(fmt = "unknown cell glyph {:?} at index {}", glyph, index)]
    UnknownGlyph { index: usize, glyph: char },
    #[display(fmt = "unknown cell code {} at row {}, column {}", code, row, col)]
    UnknownCode { row: usize, col: usize, code: u8 },
}

/// An 8x8 grid of cells.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Board {
    cells: [[Cell; EDGE_LENGTH]; EDGE_LENGTH],
}

impl Default for Board {
    /// Gets the starting position.
    fn default() -> Self {
        Self::starting()
    }
}

impl Board {
    /// A board with no disks on it.
    pub const fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; EDGE_LENGTH]; EDGE_LENGTH],
        }
    }

    /// The four interlocking center disks: White on D4 and E5, Black on E4 and D5.
    pub fn starting() -> Self {
        let mut board = Self::empty();
        board.cells[3][3] = Cell::White;
        board.cells[4][4] = Cell::White;
        board.cells[3][4] = Cell::Black;
        board.cells[4][3] = Cell::Black;
        board
    }

    /// Build a board directly from a grid of cells.
    pub const fn from_cells(cells: [[Cell; EDGE_LENGTH]; EDGE_LENGTH]) -> Self {
        Self { cells }
    }

    #[inline]
    pub fn get(&self, loc: Location) -> Cell {
        let (row, col) = loc.to_coords();
        self.cells[row][col]
    }

    #[inline]
    pub(crate) fn set(&mut self, loc: Location, cell: Cell) {
        let (row, col) = loc.to_coords();
        self.cells[row][col] = cell;
    }

    /// Read access to the full grid, row-major, for renderers.
    #[inline]
    pub fn rows(&self) -> &[[Cell; EDGE_LENGTH]; EDGE_LENGTH] {
        &self.cells
    }

    /// Iterate over every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().flat_map(|row| row.iter().copied())
    }

    /// Count the cells holding exactly `cell`.
    pub fn count(&self, cell: Cell) -> u8 {
        self.cells().filter(|&c| c == cell).count() as u8
    }

    /// Count the cells holding a disk of either color.
    pub fn count_occupied(&self) -> u8 {
        NUM_SPACES as u8 - self.count_empty()
    }

    pub fn count_empty(&self) -> u8 {
        self.count(Cell::Empty)
    }

    /// The opponent disks `player` would flip by placing at `loc`.
    ///
    /// A line is captured when, walking outward from `loc`, one or more opponent
    /// disks are followed directly by one of `player`'s own. Returns an empty list
    /// when `loc` is occupied or captures nothing, which is exactly when the
    /// placement is illegal.
    pub fn flips(&self, loc: Location, player: Player, rule: CaptureRule) -> LocationList {
        let mut flipped = LocationList::default();
        if !self.get(loc).is_empty() {
            return flipped;
        }

        for &direction in rule.directions() {
            if let Some(run) = self.capture_run(loc, player, direction) {
                for square in run {
                    flipped.push(square);
                }
            }
        }
        flipped
    }

    /// Whether `player` may place a disk at `loc`.
    pub fn is_legal(&self, loc: Location, player: Player, rule: CaptureRule) -> bool {
        self.get(loc).is_empty()
            && rule
                .directions()
                .iter()
                .any(|&direction| self.capture_run(loc, player, direction).is_some())
    }

    /// Walk from `loc` along `direction`, returning the run of opponent disks if it
    /// is closed off by one of `player`'s disks.
    fn capture_run(
        &self,
        loc: Location,
        player: Player,
        direction: (isize, isize),
    ) -> Option<LocationList> {
        let own = Cell::from(player);
        let opponent = Cell::from(!player);
        let mut run = LocationList::default();
        let mut cursor = loc.offset(direction)?;

        while self.get(cursor) == opponent {
            run.push(cursor);
            cursor = cursor.offset(direction)?;
        }

        if !run.is_empty() && self.get(cursor) == own {
            Some(run)
        } else {
            None
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        utils::format_grid(self.cells().map(Cell::glyph), f)
    }
}

/// Parse 64 glyphs in row-major order. Whitespace is ignored, so both a single
/// line and the eight-line form produced by `Display` (minus labels) work.
impl std::str::FromStr for Board {
    type Err = InvalidStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let glyphs: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if glyphs.len() != NUM_SPACES {
            return Err(InvalidStateError::WrongCellCount {
                cells: glyphs.len(),
            });
        }

        let mut board = Self::empty();
        for (index, (&glyph, loc)) in glyphs.iter().zip(Location::all()).enumerate() {
            let cell =
                Cell::from_glyph(glyph).ok_or(InvalidStateError::UnknownGlyph { index, glyph })?;
            board.set(loc, cell);
        }
        Ok(board)
    }
}

/// Build a board from numeric rows: 0 is empty, 1 is Black, 2 is White.
impl TryFrom<Vec<Vec<u8>>> for Board {
    type Error = InvalidStateError;

    fn try_from(rows: Vec<Vec<u8>>) -> Result<Self, Self::Error> {
        if rows.len() != EDGE_LENGTH {
            return Err(InvalidStateError::WrongRowCount { rows: rows.len() });
        }

        let mut cells = [[Cell::Empty; EDGE_LENGTH]; EDGE_LENGTH];
        for (row, codes) in rows.iter().enumerate() {
            if codes.len() != EDGE_LENGTH {
                return Err(InvalidStateError::WrongRowLength {
                    row,
                    len: codes.len(),
                });
            }
            for (col, &code) in codes.iter().enumerate() {
                cells[row][col] =
                    Cell::from_code(code).ok_or(InvalidStateError::UnknownCode { row, col, code })?;
            }
        }
        Ok(Self::from_cells(cells))
    }
}
