//! Read-only board snapshots for rendering.

use serde::{Deserialize, Serialize};

use crate::core::{Cell, LayoutError};

/// Row-major snapshot of a board's cells.
///
/// Row 0 is the top row. Snapshots are plain values: they never alias the
/// board they came from. Deserialization goes through the same checks as
/// `try_new`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawLayout")]
pub struct Layout {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

/// Unchecked wire form of `Layout`.
#[derive(Deserialize)]
struct RawLayout {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl TryFrom<RawLayout> for Layout {
    type Error = LayoutError;

    fn try_from(raw: RawLayout) -> Result<Self, Self::Error> {
        Self::try_new(raw.rows, raw.cols, raw.cells)
    }
}

impl Layout {
    /// Create a layout from row-major cells.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero or `cells` does not hold exactly
    /// `rows * cols` cells. Boards always build valid layouts.
    pub fn new(rows: usize, cols: usize, cells: Vec<Cell>) -> Self {
        match Self::try_new(rows, cols, cells) {
            Ok(layout) => layout,
            Err(err) => panic!("{err}"),
        }
    }

    /// Create a layout, rejecting empty grids and mismatched cell counts.
    pub fn try_new(rows: usize, cols: usize, cells: Vec<Cell>) -> Result<Self, LayoutError> {
        if rows == 0 || cols == 0 {
            return Err(LayoutError::Empty { rows, cols });
        }
        let expected = rows
            .checked_mul(cols)
            .ok_or(LayoutError::CellCount { expected: usize::MAX, found: cells.len() })?;
        if cells.len() != expected {
            return Err(LayoutError::CellCount { expected, found: cells.len() });
        }
        Ok(Self { rows, cols, cells })
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get the cell at `(row, col)`, or `None` outside the grid.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.rows && col < self.cols {
            self.cells.get(row * self.cols + col).copied()
        } else {
            None
        }
    }

    /// Iterate over rows, top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.cols)
    }

    /// All cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of cells in the given state.
    #[must_use]
    pub fn count(&self, state: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == state).count()
    }
}

impl std::fmt::Display for Layout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.iter_rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let symbols: Vec<String> = row.iter().map(|c| c.symbol().to_string()).collect();
            write!(f, "|{}|", symbols.join("|"))?;
        }
        Ok(())
    }
}
