use std::fmt::{self, Debug, Display};

use serde::{Deserialize, Serialize};

use crate::{visualize_grid, GameError};

/// The value stored in a cell.
///
/// `0` is an empty cell, any other value `e` is a tile showing `2^e`.
pub type Exponent = u8;

/// The largest exponent a cell may hold, so that every tile value fits into a `u64`.
pub const MAX_EXPONENT: Exponent = 63;

/// Read and write access to a square matrix, independent of how the
/// cells are laid out in memory.
///
/// The geometric transforms are written against this trait only, so they
/// are correct for row-major and column-major storage alike.
pub trait SquareMatrix {
    type Cell: Copy;

    fn size(&self) -> usize;

    fn get(&self, row: usize, col: usize) -> Self::Cell;

    fn set(&mut self, row: usize, col: usize, value: Self::Cell);

    fn swap(&mut self, a: (usize, usize), b: (usize, usize)) {
        let tmp = self.get(a.0, a.1);
        self.set(a.0, a.1, self.get(b.0, b.1));
        self.set(b.0, b.1, tmp);
    }
}

/// The N x N playing field.
///
/// Serializes as a list of rows.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Exponent>>", into = "Vec<Vec<Exponent>>")]
pub struct Grid {
    size: usize,
    // Row-major, i.e. indexed by [row * size + col].
    cells: Vec<Exponent>,
}

impl Grid {
    /// Creates an empty grid.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![0; size * size],
        }
    }

    /// Creates a grid from its rows.
    ///
    /// Every row must have as many cells as there are rows, and no cell may
    /// exceed [`MAX_EXPONENT`].
    pub fn from_rows<R: AsRef<[Exponent]>>(rows: &[R]) -> Result<Self, GameError> {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);
        for (row, cells_in_row) in rows.iter().enumerate() {
            let cells_in_row = cells_in_row.as_ref();
            if cells_in_row.len() != size {
                return Err(GameError::NotSquare {
                    row,
                    len: cells_in_row.len(),
                    size,
                });
            }
            if let Some(col) = cells_in_row.iter().position(|&v| v > MAX_EXPONENT) {
                return Err(GameError::ExponentOutOfRange {
                    row,
                    col,
                    exponent: cells_in_row[col],
                });
            }
            cells.extend_from_slice(cells_in_row);
        }
        Ok(Self { size, cells })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Panics if the coordinates are out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Exponent {
        self.cells[self.idx(row, col)]
    }

    /// Panics if the coordinates are out of bounds or the value exceeds
    /// [`MAX_EXPONENT`].
    pub fn set(&mut self, row: usize, col: usize, value: Exponent) {
        assert!(
            value <= MAX_EXPONENT,
            "exponent {} is larger than {}",
            value,
            MAX_EXPONENT
        );
        let idx = self.idx(row, col);
        self.cells[idx] = value;
    }

    pub fn row(&self, row: usize) -> &[Exponent] {
        &self.cells[row * self.size..(row + 1) * self.size]
    }

    pub(crate) fn row_mut(&mut self, row: usize) -> &mut [Exponent] {
        &mut self.cells[row * self.size..(row + 1) * self.size]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Exponent]> {
        // chunks() panics on a chunk size of zero; an empty grid has no cells anyway
        self.cells.chunks(self.size.max(1))
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Exponent> + '_ {
        self.cells.iter().copied()
    }

    /// Coordinates `(row, col)` of every empty cell, in row-major order.
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &value)| value == 0)
            .map(|(idx, _)| (idx / self.size, idx % self.size))
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&value| value != 0)
    }

    fn idx(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.size && col < self.size,
            "({}, {}) is outside of a {}x{} grid",
            row,
            col,
            self.size,
            self.size
        );
        row * self.size + col
    }
}

impl SquareMatrix for Grid {
    type Cell = Exponent;

    fn size(&self) -> usize {
        self.size
    }

    fn get(&self, row: usize, col: usize) -> Exponent {
        Grid::get(self, row, col)
    }

    fn set(&mut self, row: usize, col: usize, value: Exponent) {
        Grid::set(self, row, col, value)
    }

    fn swap(&mut self, a: (usize, usize), b: (usize, usize)) {
        let (idx_a, idx_b) = (self.idx(a.0, a.1), self.idx(b.0, b.1));
        self.cells.swap(idx_a, idx_b);
    }
}

impl TryFrom<Vec<Vec<Exponent>>> for Grid {
    type Error = GameError;

    fn try_from(rows: Vec<Vec<Exponent>>) -> Result<Self, Self::Error> {
        Grid::from_rows(&rows)
    }
}

impl From<Grid> for Vec<Vec<Exponent>> {
    fn from(grid: Grid) -> Self {
        grid.rows().map(<[Exponent]>::to_vec).collect()
    }
}

impl Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.rows() {
            writeln!(f, "{:?}", row)?;
        }
        Ok(())
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widest = crate::tile_value(crate::highest_exponent(self));
        write!(f, "{}", visualize_grid(self, crate::decimal_digits(widest)))
    }
}
