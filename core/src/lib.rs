//! Fixed-size 2D cellular automaton engine: grids, transition rules,
//! generation stepping, and motif detection.

#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all)]
#![deny(clippy::correctness)]

pub mod cell;
pub mod grid;
pub mod history;
pub mod io;
pub mod nbhd;
pub mod patterns;
pub mod sim;

pub mod traits {
    //! Traits that must be in scope to call rule methods.
    pub use crate::sim::rule::TransitionRule;
}

pub mod prelude {
    //! Commonly used types and functions.
    pub use crate::traits::*;

    pub use crate::cell::{CellState, Pos};
    pub use crate::grid::{Grid, GridError, GridResult};
    pub use crate::history::AliveHistory;
    pub use crate::io::{BoardError, BoardResult, Fill, Placement};
    pub use crate::nbhd::{count_neighbors, Neighborhood, NeighborCounts, MOORE, VON_NEUMANN};
    pub use crate::patterns::{detect_patterns, Pattern, PatternKind};
    pub use crate::sim::rule::{Classic, Respawn, Rule, UnknownRule, VonNeumann, Zombie};
    pub use crate::sim::{advance, Simulation};
}

#[cfg(test)]
mod tests;
