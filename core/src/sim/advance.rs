//! The function that applies a rule to each cell in a grid.

use log::trace;
use rand::RngCore;

use super::rule::TransitionRule;
use crate::grid::Grid;
use crate::history::AliveHistory;

/// Computes the next generation of `grid` under `rule`.
///
/// Every cell is evaluated against the unmodified `grid`. Once the whole new
/// grid is known, every position that is alive in it is added to `history`,
/// so no cell in this generation can observe another's result. The returned
/// grid has the same dimensions as the input.
///
/// This is deterministic for a given `rng` state.
#[must_use = "This method returns a new value instead of mutating its input"]
pub fn advance(
    grid: &Grid,
    rule: &impl TransitionRule,
    history: &mut AliveHistory,
    rng: &mut dyn RngCore,
) -> Grid {
    let next = grid.map_cells(|pos| rule.next_state(grid, pos, &*history, rng));
    let new_in_history = history.extend(next.alive_cells());
    trace!(
        "Advanced {}x{} grid: population {} -> {}, {} new in history",
        grid.width(),
        grid.height(),
        grid.population(),
        next.population(),
        new_in_history,
    );
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rule::{Classic, Respawn};
    use crate::tests::{always, grid_from_str, never};

    #[test]
    fn test_advance_dead_board_stays_dead() {
        let grid = Grid::make_dead(7, 5).unwrap();
        let mut history = AliveHistory::new();
        let next = advance(&grid, &Classic, &mut history, &mut never());
        assert_eq!(grid, next);
        assert!(history.is_empty());
    }

    #[test]
    fn test_advance_blinker() {
        let horizontal = grid_from_str(
            "
            ...
            OOO
            ...
            ",
        );
        let vertical = grid_from_str(
            "
            .O.
            .O.
            .O.
            ",
        );
        let mut history = AliveHistory::from_grid(&horizontal);
        let mut rng = never();
        let mut grid = horizontal.clone();
        for gen in 1..=6 {
            grid = advance(&grid, &Classic, &mut history, &mut rng);
            if gen % 2 == 1 {
                assert_eq!(vertical, grid, "generation {}", gen);
            } else {
                assert_eq!(horizontal, grid, "generation {}", gen);
            }
        }
        assert_eq!(5, history.len());
    }

    #[test]
    fn test_advance_does_not_modify_input() {
        let grid = grid_from_str(
            "
            .O..
            ..O.
            OOO.
            ....
            ",
        );
        let before = grid.clone();
        let mut history = AliveHistory::new();
        let next = advance(&grid, &Classic, &mut history, &mut never());
        assert_eq!(before, grid);
        assert_ne!(grid, next);
        assert_eq!((4, 4), (next.width(), next.height()));
    }

    #[test]
    fn test_advance_records_history() {
        let grid = grid_from_str(
            "
            O.O
            ...
            .O.
            ",
        );
        // Start with an empty history so that the original cells can never
        // respawn.
        let mut history = AliveHistory::new();
        let next = advance(&grid, &Respawn, &mut history, &mut always());
        assert_eq!(
            grid_from_str(
                "
                ...
                .O.
                ...
                ",
            ),
            next,
        );
        assert_eq!(1, history.len());
        assert!(history.contains((1, 1)));

        // Only cells that are already dead can respawn, so the lonely cell
        // dies first ...
        let next = advance(&next, &Respawn, &mut history, &mut always());
        assert_eq!(0, next.population());
        assert_eq!(1, history.len());
        // ... and comes back a generation later.
        let next = advance(&next, &Respawn, &mut history, &mut always());
        assert_eq!(vec![(1, 1)], next.alive_cells().collect::<Vec<_>>());
    }
}
