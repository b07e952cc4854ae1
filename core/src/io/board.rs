use log::debug;
use serde::Deserialize;
use std::collections::HashSet;
use std::convert::TryFrom;
use std::path::Path;

use super::{BoardError, BoardResult};
use crate::cell::CellState;
use crate::grid::Grid;

/// Layout of a board file.
#[derive(Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BoardFormat {
    /// Full grid of cell values.
    Grid,
    /// Board size plus a list of live cells.
    Coordinates,
}
impl BoardFormat {
    /// Returns the name used for the format in board files.
    pub fn as_str(self) -> &'static str {
        match self {
            BoardFormat::Grid => "grid",
            BoardFormat::Coordinates => "coordinates",
        }
    }
}

/// Raw contents of a board file, before validation.
///
/// Cell values and coordinates are kept as signed integers so that values
/// outside the valid range produce a specific error instead of a generic
/// parse failure.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BoardFile {
    /// Layout of the file.
    pub format: BoardFormat,

    /// Rows of cell values, for the `grid` format.
    #[serde(default)]
    pub grid: Option<Vec<Vec<i64>>>,

    /// Number of columns, for the `coordinates` format.
    #[serde(default)]
    pub width: Option<usize>,
    /// Number of rows, for the `coordinates` format.
    #[serde(default)]
    pub height: Option<usize>,
    /// `[row, col]` pairs of live cells, for the `coordinates` format.
    #[serde(default)]
    pub alive_cells: Option<Vec<Vec<i64>>>,
}

impl BoardFile {
    /// Converts the file contents into a grid.
    pub fn to_grid(&self) -> BoardResult<Grid> {
        match self.format {
            BoardFormat::Grid => {
                let rows = self.require(&self.grid, "grid")?;
                grid_from_values(rows)
            }
            BoardFormat::Coordinates => {
                let width = *self.require(&self.width, "width")?;
                let height = *self.require(&self.height, "height")?;
                let alive_cells = self.require(&self.alive_cells, "alive_cells")?;
                grid_from_coordinates(width, height, alive_cells)
            }
        }
    }

    fn require<'a, T>(&self, field: &'a Option<T>, name: &'static str) -> BoardResult<&'a T> {
        field.as_ref().ok_or(BoardError::MissingField {
            format: self.format,
            field: name,
        })
    }
}

fn grid_from_values(rows: &[Vec<i64>]) -> BoardResult<Grid> {
    let mut cell_rows = Vec::with_capacity(rows.len());
    for (row, values) in rows.iter().enumerate() {
        let mut cells = Vec::with_capacity(values.len());
        for (col, &value) in values.iter().enumerate() {
            let cell = u8::try_from(value)
                .ok()
                .and_then(|v| CellState::try_from(v).ok())
                .ok_or(BoardError::InvalidCellValue { row, col, value })?;
            cells.push(cell);
        }
        cell_rows.push(cells);
    }
    Ok(Grid::from_rows(&cell_rows)?)
}

fn grid_from_coordinates(width: usize, height: usize, alive_cells: &[Vec<i64>]) -> BoardResult<Grid> {
    let dead = Grid::make_dead(width, height)?;
    let mut alive = HashSet::with_capacity(alive_cells.len());
    for cell in alive_cells {
        let (row, col) = match cell.as_slice() {
            &[row, col] => (row, col),
            _ => return Err(BoardError::BadCoordinate(cell.clone())),
        };
        let pos = usize::try_from(row)
            .ok()
            .zip(usize::try_from(col).ok())
            .filter(|&pos| dead.contains(pos))
            .ok_or(BoardError::CellOutOfBounds {
                row,
                col,
                width,
                height,
            })?;
        alive.insert(pos);
    }
    Ok(dead.map_cells(|pos| {
        if alive.contains(&pos) {
            CellState::Alive
        } else {
            CellState::Dead
        }
    }))
}

/// Loads a board from a JSON string.
pub fn load_board_from_str(s: &str) -> BoardResult<Grid> {
    let file: BoardFile = serde_json::from_str(s)?;
    let grid = file.to_grid()?;
    debug!(
        "Loaded {}x{} board in {:?} format",
        grid.width(),
        grid.height(),
        file.format.as_str(),
    );
    Ok(grid)
}

/// Loads a board from a JSON file.
pub fn load_board_from_file(path: impl AsRef<Path>) -> BoardResult<Grid> {
    let s = std::fs::read_to_string(path)?;
    load_board_from_str(&s)
}
