use log::debug;
use rand::Rng;
use std::path::PathBuf;

use super::{load_board_from_file, BoardError, BoardResult, Fill, Placement};
use crate::grid::Grid;

/// Width of a random board when none is given.
pub const DEFAULT_WIDTH: usize = 50;
/// Height of a random board when none is given.
pub const DEFAULT_HEIGHT: usize = 40;

/// Places `pattern` into a new `width` by `height` board.
///
/// Cells outside the pattern are filled according to `fill`. Returns an
/// error if the pattern does not fit.
pub fn integrate_pattern<R: Rng + ?Sized>(
    pattern: &Grid,
    width: usize,
    height: usize,
    fill: Fill,
    placement: Placement,
    rng: &mut R,
) -> BoardResult<Grid> {
    if pattern.width() > width || pattern.height() > height {
        return Err(BoardError::PatternTooLarge {
            pattern: (pattern.width(), pattern.height()),
            board: (width, height),
        });
    }

    let background = match fill {
        Fill::Dead => Grid::make_dead(width, height)?,
        Fill::Random => Grid::make_random(width, height, rng)?,
    };
    let (dr, dc) = match placement {
        Placement::TopLeft => (0, 0),
        Placement::Center => ((height - pattern.height()) / 2, (width - pattern.width()) / 2),
    };

    Ok(background.map_cells(|(row, col)| {
        row.checked_sub(dr)
            .zip(col.checked_sub(dc))
            .and_then(|pos| pattern.get(pos))
            .unwrap_or(background[(row, col)])
    }))
}

/// Description of where the starting board comes from.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BoardSource {
    /// Board file to load, if any.
    pub file: Option<PathBuf>,
    /// Board width.
    pub width: Option<usize>,
    /// Board height.
    pub height: Option<usize>,
    /// Canvas fill around a loaded pattern.
    pub fill: Fill,
    /// Location of a loaded pattern within the canvas.
    pub placement: Placement,
}

/// Builds the starting board.
///
/// With a file, the file is loaded as-is, or placed into a larger canvas if
/// both `width` and `height` are given. Without a file, the board is random
/// and defaults to `DEFAULT_WIDTH` by `DEFAULT_HEIGHT`.
pub fn create_board<R: Rng + ?Sized>(source: &BoardSource, rng: &mut R) -> BoardResult<Grid> {
    match &source.file {
        Some(path) => {
            let pattern = load_board_from_file(path)?;
            match (source.width, source.height) {
                (Some(width), Some(height)) => integrate_pattern(
                    &pattern,
                    width,
                    height,
                    source.fill,
                    source.placement,
                    rng,
                ),
                _ => Ok(pattern),
            }
        }
        None => {
            let width = source.width.unwrap_or(DEFAULT_WIDTH);
            let height = source.height.unwrap_or(DEFAULT_HEIGHT);
            debug!("Generating random {}x{} board", width, height);
            Ok(Grid::make_random(width, height, rng)?)
        }
    }
}
