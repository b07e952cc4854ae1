use rand::RngCore;

use super::{life_law, TransitionRule};
use crate::cell::{CellState, Pos};
use crate::grid::Grid;
use crate::history::AliveHistory;
use crate::nbhd::{count_alive, Neighborhood};

/// Conway's Game of Life (B3/S23) in the Moore neighborhood.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Classic;
impl TransitionRule for Classic {
    fn next_state(
        &self,
        grid: &Grid,
        pos: Pos,
        _history: &AliveHistory,
        _rng: &mut dyn RngCore,
    ) -> CellState {
        life_law(grid[pos], count_alive(grid, pos, self.neighborhood()))
    }
}

/// Birth on 3 and survival on exactly 2, counted in the von Neumann
/// neighborhood.
///
/// Unlike `Classic`, a live cell with 3 neighbors dies.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct VonNeumann;
impl TransitionRule for VonNeumann {
    fn next_state(
        &self,
        grid: &Grid,
        pos: Pos,
        _history: &AliveHistory,
        _rng: &mut dyn RngCore,
    ) -> CellState {
        let live_neighbors = count_alive(grid, pos, self.neighborhood());
        match (grid[pos], live_neighbors) {
            (CellState::Alive, 2) => CellState::Alive,
            (CellState::Dead, 3) => CellState::Alive,
            _ => CellState::Dead,
        }
    }

    fn neighborhood(&self) -> Neighborhood {
        Neighborhood::VonNeumann
    }
}
