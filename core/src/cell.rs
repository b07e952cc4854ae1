//! Cell states and grid positions.

use std::convert::TryFrom;
use std::fmt;

/// Position of a cell in a grid, as `(row, column)`.
pub type Pos = (usize, usize);

/// State of a single cell.
///
/// `Zombie` only arises under the zombie rule. Every other rule treats any
/// state other than `Alive` as "not alive" when counting neighbors.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CellState {
    /// Empty cell.
    Dead = 0,
    /// Live cell.
    Alive = 1,
    /// Infected cell; absorbing under the zombie rule.
    Zombie = 2,
}
impl Default for CellState {
    fn default() -> Self {
        Self::Dead
    }
}
impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellState::Dead => write!(f, "dead"),
            CellState::Alive => write!(f, "alive"),
            CellState::Zombie => write!(f, "zombie"),
        }
    }
}

impl CellState {
    /// All cell states, in order of their numeric value.
    pub const ALL: [CellState; 3] = [CellState::Dead, CellState::Alive, CellState::Zombie];

    /// Returns the numeric value of the state, as used in board files.
    #[inline]
    pub fn to_u8(self) -> u8 {
        self as u8
    }

    /// Returns `true` if the state is `Alive`.
    #[inline]
    pub fn is_alive(self) -> bool {
        self == CellState::Alive
    }
}

impl TryFrom<u8> for CellState {
    type Error = u8;

    /// Converts a numeric board-file value into a state, returning the value
    /// back if it is out of range.
    fn try_from(value: u8) -> Result<Self, u8> {
        match value {
            0 => Ok(CellState::Dead),
            1 => Ok(CellState::Alive),
            2 => Ok(CellState::Zombie),
            other => Err(other),
        }
    }
}
