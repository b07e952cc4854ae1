use rand::{Rng, RngCore};

use super::{life_law, TransitionRule};
use crate::cell::{CellState, Pos};
use crate::grid::Grid;
use crate::history::AliveHistory;
use crate::nbhd::count_neighbors;

/// A live cell turns into a zombie on its own with probability
/// `1 / ZOMBIE_INFECTION_ODDS` per generation.
pub const ZOMBIE_INFECTION_ODDS: u32 = 1000;

/// Three-state rule where zombies spread to isolated live cells.
///
/// - A live cell is spontaneously infected with probability `1 /
///   ZOMBIE_INFECTION_ODDS`. Otherwise, if it has no live neighbors and at
///   least one zombie neighbor, it becomes a zombie. Otherwise it follows the
///   `Classic` survival law.
/// - A zombie stays a zombie forever.
/// - A dead cell follows the `Classic` birth law; zombies do not count
///   toward birth.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Zombie;
impl TransitionRule for Zombie {
    fn next_state(
        &self,
        grid: &Grid,
        pos: Pos,
        _history: &AliveHistory,
        rng: &mut dyn RngCore,
    ) -> CellState {
        let current = grid[pos];
        if current == CellState::Zombie {
            return CellState::Zombie;
        }

        let counts = count_neighbors(
            grid,
            pos,
            self.neighborhood().offsets(),
            &[CellState::Alive, CellState::Zombie],
        );
        if current == CellState::Alive {
            if rng.gen_ratio(1, ZOMBIE_INFECTION_ODDS) {
                return CellState::Zombie;
            }
            if counts.alive() == 0 && counts.zombie() >= 1 {
                return CellState::Zombie;
            }
        }
        life_law(current, counts.alive())
    }
}
