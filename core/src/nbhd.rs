//! Neighborhoods and neighbor counting.

use std::ops::Index;

use crate::cell::{CellState, Pos};
use crate::grid::Grid;

/// Relative position of a neighbor, as `(row delta, column delta)`.
pub type Offset = (isize, isize);

/// The 8 cells orthogonally and diagonally adjacent to a cell.
pub const MOORE: [Offset; 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// The 4 cells orthogonally adjacent to a cell.
pub const VON_NEUMANN: [Offset; 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];

/// Standard range-1 neighborhood shape.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Neighborhood {
    /// 8-cell neighborhood.
    Moore,
    /// 4-cell neighborhood.
    VonNeumann,
}
impl Neighborhood {
    /// Returns the offsets of the neighborhood, excluding the center cell.
    pub fn offsets(self) -> &'static [Offset] {
        match self {
            Neighborhood::Moore => &MOORE,
            Neighborhood::VonNeumann => &VON_NEUMANN,
        }
    }
}

/// Number of neighbors in each cell state.
///
/// States that were not asked for are always reported as zero.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct NeighborCounts([usize; 3]);
impl Index<CellState> for NeighborCounts {
    type Output = usize;

    fn index(&self, state: CellState) -> &usize {
        &self.0[state as usize]
    }
}
impl NeighborCounts {
    /// Returns the number of neighbors in the given state.
    #[inline]
    pub fn get(&self, state: CellState) -> usize {
        self[state]
    }
    /// Returns the number of `Alive` neighbors.
    #[inline]
    pub fn alive(&self) -> usize {
        self[CellState::Alive]
    }
    /// Returns the number of `Zombie` neighbors.
    #[inline]
    pub fn zombie(&self) -> usize {
        self[CellState::Zombie]
    }
}

/// Counts, for each state in `states`, the cells at `pos + offset` holding
/// that state.
///
/// Offsets that land outside the grid are skipped; the grid does not wrap.
pub fn count_neighbors(
    grid: &Grid,
    pos: Pos,
    offsets: &[Offset],
    states: &[CellState],
) -> NeighborCounts {
    let mut counts = NeighborCounts::default();
    for &offset in offsets {
        if let Some(neighbor) = grid.offset(pos, offset) {
            let cell = grid[neighbor];
            if states.contains(&cell) {
                counts.0[cell as usize] += 1;
            }
        }
    }
    counts
}

/// Counts `Alive` cells in the given neighborhood of `pos`.
#[inline]
pub fn count_alive(grid: &Grid, pos: Pos, nbhd: Neighborhood) -> usize {
    count_neighbors(grid, pos, nbhd.offsets(), &[CellState::Alive]).alive()
}
