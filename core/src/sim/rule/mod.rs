//! Everything related to the description of a cellular automaton rule,
//! primarily the transition function.

use enum_dispatch::enum_dispatch;
use rand::RngCore;
use std::fmt;
use std::str::FromStr;

mod respawn;
mod totalistic;
mod zombie;

use crate::cell::{CellState, Pos};
use crate::grid::Grid;
use crate::history::AliveHistory;
use crate::nbhd::Neighborhood;
pub use respawn::{Respawn, RESPAWN_PROBABILITY};
pub use totalistic::{Classic, VonNeumann};
pub use zombie::{Zombie, ZOMBIE_INFECTION_ODDS};

/// Cellular automaton transition rule.
///
/// A rule owns no state. It computes a single cell's next state from the
/// previous generation only, so cells can be evaluated in any order.
#[enum_dispatch]
pub trait TransitionRule {
    /// Returns the next state of the cell at `pos`.
    ///
    /// `history` holds every position that was alive in an earlier
    /// generation. `rng` is only consulted by probabilistic rules.
    fn next_state(
        &self,
        grid: &Grid,
        pos: Pos,
        history: &AliveHistory,
        rng: &mut dyn RngCore,
    ) -> CellState;

    /// Returns the neighborhood that the rule counts neighbors in.
    fn neighborhood(&self) -> Neighborhood {
        Neighborhood::Moore
    }
}

/// One of the built-in rules.
#[allow(missing_docs)]
#[enum_dispatch(TransitionRule)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Rule {
    Classic,
    Respawn,
    Zombie,
    VonNeumann,
}
impl Default for Rule {
    fn default() -> Self {
        Classic.into()
    }
}
impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
impl FromStr for Rule {
    type Err = UnknownRule;

    fn from_str(s: &str) -> Result<Self, UnknownRule> {
        match s.trim().to_ascii_lowercase().as_str() {
            "classic" | "life" => Ok(Classic.into()),
            "respawn" => Ok(Respawn.into()),
            "zombie" => Ok(Zombie.into()),
            "neumann" | "vonneumann" | "von-neumann" | "von neumann" => Ok(VonNeumann.into()),
            _ => Err(UnknownRule(s.to_owned())),
        }
    }
}

impl Rule {
    /// Every built-in rule, in the order they should be offered to a user.
    pub const ALL: [Rule; 4] = [
        Rule::Classic(Classic),
        Rule::Respawn(Respawn),
        Rule::Zombie(Zombie),
        Rule::VonNeumann(VonNeumann),
    ];

    /// Returns the short name of the rule, which `Rule::from_str()` accepts.
    pub fn name(self) -> &'static str {
        match self {
            Rule::Classic(_) => "classic",
            Rule::Respawn(_) => "respawn",
            Rule::Zombie(_) => "zombie",
            Rule::VonNeumann(_) => "neumann",
        }
    }

    /// Returns a human-friendly name for the rule.
    pub fn label(self) -> &'static str {
        match self {
            Rule::Classic(_) => "Classic",
            Rule::Respawn(_) => "Respawn",
            Rule::Zombie(_) => "Zombie",
            Rule::VonNeumann(_) => "Von Neumann",
        }
    }
}

/// Error returned when parsing the name of a rule that does not exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRule(pub String);
impl fmt::Display for UnknownRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown rule {:?} (expected one of: {})",
            self.0,
            Rule::ALL
                .iter()
                .map(|r| r.name())
                .collect::<Vec<_>>()
                .join(", "),
        )
    }
}
impl std::error::Error for UnknownRule {}

/// Standard birth/survival law: a dead cell is born with exactly 3 live
/// neighbors and a live cell survives with 2 or 3.
#[inline]
pub(crate) fn life_law(current: CellState, live_neighbors: usize) -> CellState {
    if live_neighbors == 3 || (current.is_alive() && live_neighbors == 2) {
        CellState::Alive
    } else {
        CellState::Dead
    }
}
