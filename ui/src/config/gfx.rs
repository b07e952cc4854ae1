use lifecell_core::prelude::{CellState, PatternKind};

/// Glyphs used to draw the board, and terminal behavior.
#[derive(Debug, Clone)]
pub struct GfxConfig {
    /// Glyph for each cell state.
    pub dead_glyph: char,
    pub alive_glyph: char,
    pub zombie_glyph: char,

    /// Glyph for cells that belong to a detected pattern.
    pub block_glyph: char,
    pub blinker_glyph: char,

    /// Whether to clear the terminal before drawing each frame.
    pub clear_screen: bool,
}
impl Default for GfxConfig {
    fn default() -> Self {
        Self {
            dead_glyph: '⬛',
            alive_glyph: '⬜',
            zombie_glyph: '🟩',

            block_glyph: '🟫',
            blinker_glyph: '🟦',

            clear_screen: true,
        }
    }
}
impl GfxConfig {
    /// Returns the glyph used to draw a cell.
    pub fn cell_glyph(&self, cell: CellState) -> char {
        match cell {
            CellState::Dead => self.dead_glyph,
            CellState::Alive => self.alive_glyph,
            CellState::Zombie => self.zombie_glyph,
        }
    }
    /// Returns the glyph used to highlight cells of a pattern.
    pub fn pattern_glyph(&self, kind: PatternKind) -> char {
        match kind {
            PatternKind::Block => self.block_glyph,
            PatternKind::Blinker => self.blinker_glyph,
        }
    }
}
