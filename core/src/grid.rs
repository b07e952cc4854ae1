//! Fixed-size rectangular grids of cells.

use itertools::Itertools;
use rand::Rng;
use std::fmt;
use std::ops::Index;

use crate::cell::{CellState, Pos};

/// Result type returned by fallible grid constructors.
pub type GridResult<T> = Result<T, GridError>;

/// Error encountered when constructing a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Width or height is zero.
    EmptyDimensions {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },
    /// The number of cells does not fit in memory.
    TooLarge {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },
    /// A row does not have the same length as the first row.
    Jagged {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        got: usize,
    },
}
impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::EmptyDimensions { width, height } => {
                write!(f, "Grid must not be empty (got {}x{})", width, height)
            }
            GridError::TooLarge { width, height } => {
                write!(f, "Grid is too large ({}x{})", width, height)
            }
            GridError::Jagged { row, expected, got } => write!(
                f,
                "Grid is not rectangular: row {} has {} cells; expected {}",
                row, got, expected,
            ),
        }
    }
}
impl std::error::Error for GridError {}

/// Rectangular `width` by `height` array of cells, addressed by `(row,
/// column)`.
///
/// A grid has no public mutators; each generation is a new `Grid`, so a
/// reference to an old generation stays valid while the next one is
/// computed.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Box<[CellState]>,
}

impl Index<Pos> for Grid {
    type Output = CellState;

    /// Returns the cell at `(row, col)`.
    ///
    /// # Panics
    ///
    /// This function panics if the position is out of bounds. Use
    /// `Grid::get()` for checked access.
    #[inline]
    fn index(&self, pos: Pos) -> &CellState {
        &self.cells[self.flatten_idx(pos)]
    }
}

impl Grid {
    /// Creates a grid filled entirely with `Dead` cells.
    pub fn make_dead(width: usize, height: usize) -> GridResult<Self> {
        let len = check_dimensions(width, height)?;
        Ok(Self::from_flat_slice(
            width,
            height,
            vec![CellState::Dead; len],
        ))
    }

    /// Creates a grid where each cell is independently `Dead` or `Alive` with
    /// equal probability.
    pub fn make_random<R: Rng + ?Sized>(
        width: usize,
        height: usize,
        rng: &mut R,
    ) -> GridResult<Self> {
        let len = check_dimensions(width, height)?;
        let cells = (0..len)
            .map(|_| {
                if rng.gen::<bool>() {
                    CellState::Alive
                } else {
                    CellState::Dead
                }
            })
            .collect_vec();
        Ok(Self::from_flat_slice(width, height, cells))
    }

    /// Creates a grid from a list of rows, which must all have the same
    /// nonzero length.
    pub fn from_rows<R: AsRef<[CellState]>>(rows: &[R]) -> GridResult<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.as_ref().len());
        check_dimensions(width, height)?;

        let mut cells = Vec::with_capacity(width * height);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(GridError::Jagged {
                    row: i,
                    expected: width,
                    got: row.len(),
                });
            }
            cells.extend_from_slice(row);
        }
        Ok(Self::from_flat_slice(width, height, cells))
    }

    /// Creates a grid from row-major cell data.
    ///
    /// # Panics
    ///
    /// This function panics if the length of `cells` does not match the
    /// dimensions, or if either dimension is zero.
    pub(crate) fn from_flat_slice(
        width: usize,
        height: usize,
        cells: impl Into<Box<[CellState]>>,
    ) -> Self {
        let cells = cells.into();
        assert!(width > 0 && height > 0, "Grid must not be empty");
        assert_eq!(width * height, cells.len(), "Wrong size for Grid");
        Self {
            width,
            height,
            cells,
        }
    }

    /// Returns the number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }
    /// Returns the number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns `true` if the position is inside the grid.
    #[inline]
    pub fn contains(&self, (row, col): Pos) -> bool {
        row < self.height && col < self.width
    }

    /// Returns the cell at `(row, col)`, or `None` if it is out of bounds.
    #[inline]
    pub fn get(&self, pos: Pos) -> Option<CellState> {
        if self.contains(pos) {
            Some(self[pos])
        } else {
            None
        }
    }

    /// Returns the position `(row + dr, col + dc)`, or `None` if it falls
    /// outside the grid. There is no wraparound.
    #[inline]
    pub fn offset(&self, (row, col): Pos, (dr, dc): (isize, isize)) -> Option<Pos> {
        let row = checked_offset(row, dr)?;
        let col = checked_offset(col, dc)?;
        Some((row, col)).filter(|&pos| self.contains(pos))
    }

    /// Returns an iterator over all positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Pos> {
        (0..self.height).cartesian_product(0..self.width)
    }

    /// Returns an iterator over all cells in row-major order, enumerated by
    /// their positions.
    pub fn iter_enumerated<'a>(&'a self) -> impl 'a + Iterator<Item = (Pos, CellState)> {
        self.positions().zip(self.cells.iter().copied())
    }

    /// Returns an iterator over the rows of the grid.
    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> {
        self.cells.chunks(self.width)
    }

    /// Returns an iterator over the positions of `Alive` cells in row-major
    /// order.
    pub fn alive_cells<'a>(&'a self) -> impl 'a + Iterator<Item = Pos> {
        self.iter_enumerated()
            .filter(|(_, cell)| cell.is_alive())
            .map(|(pos, _)| pos)
    }

    /// Returns the number of cells in the given state.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&cell| cell == state).count()
    }

    /// Returns the number of `Alive` cells.
    pub fn population(&self) -> usize {
        self.count(CellState::Alive)
    }

    /// Creates a new grid of the same size by computing each cell from its
    /// position.
    #[must_use = "This method returns a new value instead of mutating its input"]
    pub fn map_cells(&self, f: impl FnMut(Pos) -> CellState) -> Grid {
        Grid::from_flat_slice(self.width, self.height, self.positions().map(f).collect_vec())
    }

    /// Returns the index into `cells` corresponding to a position.
    fn flatten_idx(&self, (row, col): Pos) -> usize {
        assert!(
            self.contains((row, col)),
            "Position ({}, {}) is outside {}x{} grid",
            row,
            col,
            self.width,
            self.height,
        );
        row * self.width + col
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {}x{}", self.width, self.height)?;
        fmt::Display::fmt(self, f)
    }
}
impl fmt::Display for Grid {
    /// Formats the grid with one line per row, using `.` for dead cells, `O`
    /// for live cells, and `Z` for zombies.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                let ch = match cell {
                    CellState::Dead => '.',
                    CellState::Alive => 'O',
                    CellState::Zombie => 'Z',
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Returns the number of cells in a grid of the given size.
fn check_dimensions(width: usize, height: usize) -> GridResult<usize> {
    if width == 0 || height == 0 {
        return Err(GridError::EmptyDimensions { width, height });
    }
    width
        .checked_mul(height)
        .filter(|&len| len <= isize::MAX as usize / std::mem::size_of::<CellState>())
        .ok_or(GridError::TooLarge { width, height })
}

fn checked_offset(x: usize, dx: isize) -> Option<usize> {
    if dx < 0 {
        x.checked_sub(dx.unsigned_abs())
    } else {
        x.checked_add(dx as usize)
    }
}
