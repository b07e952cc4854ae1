//! Board files and board construction.
//!
//! A board file is JSON with a `format` tag: either `"grid"`, giving every
//! cell as a number (0 = dead, 1 = alive, 2 = zombie), or `"coordinates"`,
//! giving the board size and a list of live `[row, col]` pairs.

use std::fmt;
use std::str::FromStr;

mod board;
mod canvas;

pub use board::{load_board_from_file, load_board_from_str, BoardFile, BoardFormat};
pub use canvas::{create_board, integrate_pattern, BoardSource, DEFAULT_HEIGHT, DEFAULT_WIDTH};

use crate::grid::GridError;

/// Result type returned by fallible board routines.
pub type BoardResult<T> = Result<T, BoardError>;

/// Error encountered while loading or constructing a board.
#[allow(missing_docs)]
#[derive(Debug)]
pub enum BoardError {
    Io(std::io::Error),
    Json(serde_json::Error),
    MissingField {
        format: BoardFormat,
        field: &'static str,
    },
    InvalidCellValue {
        row: usize,
        col: usize,
        value: i64,
    },
    BadCoordinate(Vec<i64>),
    CellOutOfBounds {
        row: i64,
        col: i64,
        width: usize,
        height: usize,
    },
    PatternTooLarge {
        pattern: (usize, usize),
        board: (usize, usize),
    },
    UnknownFill(String),
    UnknownPlacement(String),
    Grid(GridError),
}
impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::Io(e) => write!(f, "Unable to read board file: {}", e),
            BoardError::Json(e) => write!(f, "Invalid board file: {}", e),
            BoardError::MissingField { format, field } => {
                write!(f, "{:?} format requires {:?}", format.as_str(), field)
            }
            BoardError::InvalidCellValue { row, col, value } => write!(
                f,
                "Invalid cell value {} at ({}, {}); expected 0, 1, or 2",
                value, row, col,
            ),
            BoardError::BadCoordinate(cell) => write!(
                f,
                "Each alive cell must contain exactly two integers; got {:?}",
                cell,
            ),
            BoardError::CellOutOfBounds {
                row,
                col,
                width,
                height,
            } => write!(
                f,
                "Alive cell ({}, {}) is outside board bounds (height={}, width={})",
                row, col, height, width,
            ),
            BoardError::PatternTooLarge { pattern, board } => write!(
                f,
                "Board is smaller than pattern. Pattern size: {}x{}, Board size: {}x{}",
                pattern.0, pattern.1, board.0, board.1,
            ),
            BoardError::UnknownFill(s) => {
                write!(f, "Unknown fill mode {:?}; expected 'dead' or 'random'", s)
            }
            BoardError::UnknownPlacement(s) => write!(
                f,
                "Unknown placement {:?}; expected 'topleft' or 'center'",
                s,
            ),
            BoardError::Grid(e) => write!(f, "{}", e),
        }
    }
}
impl std::error::Error for BoardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BoardError::Io(e) => Some(e),
            BoardError::Json(e) => Some(e),
            BoardError::Grid(e) => Some(e),
            _ => None,
        }
    }
}
impl From<std::io::Error> for BoardError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
impl From<serde_json::Error> for BoardError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}
impl From<GridError> for BoardError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

/// Contents of the canvas around a pattern.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Fill {
    /// Every cell outside the pattern is dead.
    Dead,
    /// Every cell outside the pattern is dead or alive with equal
    /// probability.
    Random,
}
impl Default for Fill {
    fn default() -> Self {
        Self::Dead
    }
}
impl FromStr for Fill {
    type Err = BoardError;

    fn from_str(s: &str) -> BoardResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dead" => Ok(Self::Dead),
            "random" => Ok(Self::Random),
            _ => Err(BoardError::UnknownFill(s.to_owned())),
        }
    }
}

/// Location of a pattern within a larger canvas.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Placement {
    /// Pattern starts at the top-left cell.
    TopLeft,
    /// Pattern is centered, rounding toward the top-left.
    Center,
}
impl Default for Placement {
    fn default() -> Self {
        Self::TopLeft
    }
}
impl FromStr for Placement {
    type Err = BoardError;

    fn from_str(s: &str) -> BoardResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "topleft" | "top-left" => Ok(Self::TopLeft),
            "center" | "centre" => Ok(Self::Center),
            _ => Err(BoardError::UnknownPlacement(s.to_owned())),
        }
    }
}
