//! Drawing grids as text.

use itertools::Itertools;

use crate::config::GfxConfig;
use lifecell_core::prelude::*;

/// Draws a grid with one line per row and one glyph per cell.
pub fn render(grid: &Grid, gfx: &GfxConfig) -> String {
    grid.rows()
        .map(|row| row.iter().map(|&cell| gfx.cell_glyph(cell)).collect::<String>())
        .join("\n")
}

/// Recolors the cells of each pattern in a rendered grid.
///
/// Positions that fall outside `rendered` are ignored.
pub fn apply_pattern_colors(rendered: &str, patterns: &[Pattern], gfx: &GfxConfig) -> String {
    let mut lines = rendered
        .split('\n')
        .map(|line| line.chars().collect_vec())
        .collect_vec();
    for pattern in patterns {
        let glyph = gfx.pattern_glyph(pattern.kind);
        for &(row, col) in &pattern.cells {
            if let Some(ch) = lines.get_mut(row).and_then(|line| line.get_mut(col)) {
                *ch = glyph;
            }
        }
    }
    lines
        .into_iter()
        .map(|line| line.into_iter().collect::<String>())
        .join("\n")
}
