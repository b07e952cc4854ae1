//! Detection of small still lifes and oscillators in a single generation.
//!
//! A motif only counts if it is isolated: every cell in the one-cell-wide
//! border around its bounding box must be dead. Border cells outside the
//! grid count as dead. Each cell belongs to at most one reported pattern.

use itertools::Itertools;
use log::trace;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::cell::{CellState, Pos};
use crate::grid::Grid;

/// Kind of motif.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PatternKind {
    /// 2x2 still life.
    Block,
    /// 3-cell period-2 oscillator, in either phase.
    Blinker,
}
impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
impl FromStr for PatternKind {
    type Err = UnknownPatternKind;

    fn from_str(s: &str) -> Result<Self, UnknownPatternKind> {
        match s.trim().to_ascii_lowercase().as_str() {
            "block" => Ok(PatternKind::Block),
            "blinker" => Ok(PatternKind::Blinker),
            _ => Err(UnknownPatternKind(s.to_owned())),
        }
    }
}
impl PatternKind {
    /// Returns the name of the kind of motif.
    pub fn as_str(self) -> &'static str {
        match self {
            PatternKind::Block => "block",
            PatternKind::Blinker => "blinker",
        }
    }
}

/// Error returned when parsing an unknown kind of motif.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPatternKind(pub String);
impl fmt::Display for UnknownPatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown pattern kind {:?}", self.0)
    }
}
impl std::error::Error for UnknownPatternKind {}

/// Motif found in a grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    /// Kind of motif.
    pub kind: PatternKind,
    /// Cells occupied by the motif, in row-major order. The first cell is
    /// the top-left anchor.
    pub cells: Vec<Pos>,
}
impl Pattern {
    /// Returns the top-left cell of the motif.
    pub fn anchor(&self) -> Pos {
        self.cells[0]
    }
}

/// Shape of a motif, as offsets from its top-left cell.
struct Motif {
    kind: PatternKind,
    offsets: &'static [Pos],
}
impl Motif {
    /// Returns the number of rows and columns spanned by the motif.
    fn size(&self) -> (usize, usize) {
        let rows = self.offsets.iter().map(|&(dr, _)| dr).max().unwrap_or(0) + 1;
        let cols = self.offsets.iter().map(|&(_, dc)| dc).max().unwrap_or(0) + 1;
        (rows, cols)
    }

    /// Returns the motif anchored at `anchor` if all of its cells are alive
    /// and unclaimed and its border is dead.
    fn match_at(&self, grid: &Grid, anchor: Pos, claimed: &HashSet<Pos>) -> Option<Pattern> {
        let mut cells = Vec::with_capacity(self.offsets.len());
        for &(dr, dc) in self.offsets {
            // A motif that sticks out of the grid does not match.
            let pos = grid.offset(anchor, (dr as isize, dc as isize))?;
            if grid[pos] != CellState::Alive || claimed.contains(&pos) {
                return None;
            }
            cells.push(pos);
        }

        let (rows, cols) = self.size();
        let border_is_dead = (-1..=rows as isize)
            .cartesian_product(-1..=cols as isize)
            .filter_map(|offset| grid.offset(anchor, offset))
            .filter(|pos| !cells.contains(pos))
            .all(|pos| grid[pos] == CellState::Dead);
        if border_is_dead {
            Some(Pattern {
                kind: self.kind,
                cells,
            })
        } else {
            None
        }
    }
}

/// Motifs to look for, in priority order.
const MOTIFS: &[Motif] = &[
    Motif {
        kind: PatternKind::Block,
        offsets: &[(0, 0), (0, 1), (1, 0), (1, 1)],
    },
    // Horizontal blinker takes priority over vertical.
    Motif {
        kind: PatternKind::Blinker,
        offsets: &[(0, 0), (0, 1), (0, 2)],
    },
    Motif {
        kind: PatternKind::Blinker,
        offsets: &[(0, 0), (1, 0), (2, 0)],
    },
];

/// Finds isolated blocks and blinkers in a grid.
///
/// Live cells are scanned in row-major order. At each unclaimed live cell,
/// the first motif that matches there is reported and its cells are
/// claimed, so patterns come out ordered by their top-left cell and no cell
/// is reported twice. The result depends only on `grid`.
pub fn detect_patterns(grid: &Grid) -> Vec<Pattern> {
    let mut claimed = HashSet::new();
    let mut ret = vec![];
    for anchor in grid.alive_cells() {
        if claimed.contains(&anchor) {
            continue;
        }
        if let Some(pattern) = MOTIFS
            .iter()
            .find_map(|motif| motif.match_at(grid, anchor, &claimed))
        {
            claimed.extend(pattern.cells.iter().copied());
            ret.push(pattern);
        }
    }
    trace!("Detected {} patterns", ret.len());
    ret
}

#[cfg(test)]
mod tests;
