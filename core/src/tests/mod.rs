use rand::rngs::mock::StepRng;

use crate::cell::CellState;
use crate::grid::Grid;


/// Parses a grid drawn with `.` for dead cells, `O` for live cells, and `Z`
/// for zombies. Blank lines and indentation are ignored.
pub(crate) fn grid_from_str(s: &str) -> Grid {
    let rows: Vec<Vec<CellState>> = s
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            line.chars()
                .map(|ch| match ch {
                    '.' => CellState::Dead,
                    'O' => CellState::Alive,
                    'Z' => CellState::Zombie,
                    _ => panic!("Bad cell character {:?}", ch),
                })
                .collect()
        })
        .collect();
    Grid::from_rows(&rows).expect("Bad test grid")
}

/// Returns a random source whose draws never trigger a probabilistic
/// transition.
pub(crate) fn never() -> StepRng {
    StepRng::new(u64::MAX, 0)
}

/// Returns a random source whose draws always trigger a probabilistic
/// transition.
pub(crate) fn always() -> StepRng {
    StepRng::new(0, 0)
}
