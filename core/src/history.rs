//! The set of positions that have ever been alive.

use std::collections::HashSet;

use crate::cell::Pos;
use crate::grid::Grid;

/// Set of every position observed `Alive` in any generation so far.
///
/// The set only grows. It is owned by whoever drives the simulation and
/// passed by `&mut` into `advance()`, which is its only writer once the run
/// has started.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AliveHistory {
    cells: HashSet<Pos>,
}

impl AliveHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a history containing every `Alive` cell of `grid`.
    pub fn from_grid(grid: &Grid) -> Self {
        let mut ret = Self::new();
        ret.extend(grid.alive_cells());
        ret
    }

    /// Returns `true` if the position has ever been alive.
    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        self.cells.contains(&pos)
    }

    /// Returns the number of positions that have ever been alive.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if no position has ever been alive.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Records positions as having been alive and returns how many of them
    /// were new.
    pub fn extend(&mut self, positions: impl IntoIterator<Item = Pos>) -> usize {
        let old_len = self.cells.len();
        self.cells.extend(positions);
        self.cells.len() - old_len
    }
}
