//! Fixed-depth minimax over the successor tree, without pruning.
//!
//! Leaves are valued by disk difference from the maximizing color's point of view,
//! both at the depth cutoff and at finished games. Depth counts plies: every move
//! takes exactly one off, however many disks it flipped, and a forced pass takes none.

use crate::strategy::NoLegalMoveError;
use flipline_othello::{GameState, Location, Player};
use log::trace;

/// A fixed-depth minimax searcher playing for `color`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Minimax {
    depth: u32,
    color: Player,
}

/// The outcome of a root search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Location,
    /// The state reached by playing `best_move`.
    pub state: GameState,
    /// Backed-up disk difference for the maximizing color.
    pub value: i8,
    /// Number of states valued below the root, forced passes included.
    pub nodes: u64,
}

impl Minimax {
    /// Search `depth` plies ahead, maximizing the disk difference for `color`.
    /// A depth of zero is treated as one: the root's moves are always looked at.
    pub fn new(depth: u32, color: Player) -> Self {
        Self {
            depth: depth.max(1),
            color,
        }
    }

    #[inline]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// The color whose disk difference is maximized.
    #[inline]
    pub fn color(&self) -> Player {
        self.color
    }

    /// Expand the root once and keep the successor with the best backed-up value for the
    /// side to move: the maximum if that is `color`, the minimum otherwise. Ties go to the
    /// earliest move in [`GameState::legal_moves`] order.
    pub fn search(&self, state: &GameState) -> Result<SearchResult, NoLegalMoveError> {
        let maximizing = state.active_player() == self.color;
        let mut nodes = 0;
        let mut best: Option<SearchResult> = None;

        for (mv, child) in state.successors() {
            let value = self.value_counted(
                &child,
                self.depth - 1,
                child.active_player() == self.color,
                &mut nodes,
            );
            let improves = match best {
                None => true,
                Some(ref found) if maximizing => value > found.value,
                Some(ref found) => value < found.value,
            };
            if improves {
                best = Some(SearchResult {
                    best_move: mv,
                    state: child,
                    value,
                    nodes: 0,
                });
            }
        }

        let mut found = best.ok_or_else(|| NoLegalMoveError::at(state))?;
        found.nodes = nodes;
        trace!(
            "minimax depth {} for {}: {} (value {}, {} nodes)",
            self.depth,
            self.color,
            found.best_move,
            found.value,
            nodes
        );
        Ok(found)
    }

    pub fn select_move(&self, state: &GameState) -> Result<GameState, NoLegalMoveError> {
        self.search(state).map(|found| found.state)
    }

    /// Value `state` by looking `depth` plies ahead.
    ///
    /// `maximizing` says whether the side to move in `state` plays for `color`. Children
    /// are valued with the flag recomputed from their own side to move.
    pub fn value(&self, state: &GameState, depth: u32, maximizing: bool) -> i8 {
        self.value_counted(state, depth, maximizing, &mut 0)
    }

    fn value_counted(&self, state: &GameState, depth: u32, maximizing: bool, nodes: &mut u64) -> i8 {
        *nodes += 1;
        if depth == 0 || state.is_terminal() {
            return state.score(self.color);
        }

        // Stuck but not finished: pass without spending a ply.
        if state.legal_moves().is_empty() {
            return self.value_counted(&state.pass(), depth, !maximizing, nodes);
        }

        let mut values = state.successors().map(|(_, child)| {
            let child_maximizing = child.active_player() == self.color;
            self.value_counted(&child, depth - 1, child_maximizing, nodes)
        });
        let first = values.next().unwrap_or_else(|| state.score(self.color));
        if maximizing {
            values.fold(first, i8::max)
        } else {
            values.fold(first, i8::min)
        }
    }
}
