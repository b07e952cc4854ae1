use rand::{Rng, RngCore};

use super::{life_law, TransitionRule};
use crate::cell::{CellState, Pos};
use crate::grid::Grid;
use crate::history::AliveHistory;
use crate::nbhd::count_alive;

/// Probability that a dead cell which has been alive before comes back to
/// life on its own in a single generation.
pub const RESPAWN_PROBABILITY: f64 = 0.01;

/// `Classic`, except that dead cells which have ever been alive respawn with
/// probability `RESPAWN_PROBABILITY` regardless of their neighbors.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Respawn;
impl TransitionRule for Respawn {
    fn next_state(
        &self,
        grid: &Grid,
        pos: Pos,
        history: &AliveHistory,
        rng: &mut dyn RngCore,
    ) -> CellState {
        let current = grid[pos];
        let next = life_law(current, count_alive(grid, pos, self.neighborhood()));
        // Only draw a random number when it can change the outcome.
        if next == CellState::Dead
            && current == CellState::Dead
            && history.contains(pos)
            && rng.gen::<f64>() <= RESPAWN_PROBABILITY
        {
            CellState::Alive
        } else {
            next
        }
    }
}
