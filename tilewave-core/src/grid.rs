use bitvec::prelude::*;
use thiserror::Error;
use tilewave_tiles::TileId;

/// Boundary handling for neighbor lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BoundaryCondition {
    /// Edges wrap around (toroidal topology).
    Periodic,
    /// Grid edges are open; a missing neighbor imposes no constraint.
    #[default]
    Finite,
}

/// Errors rejected at grid construction time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// One or both grid dimensions were zero.
    #[error("grid dimensions must be positive, got {height}x{width}")]
    ZeroDimension {
        /// Requested row count.
        height: usize,
        /// Requested column count.
        width: usize,
    },
    /// The tile universe was empty.
    #[error("tile universe must not be empty")]
    EmptyTileUniverse,
}

/// Per-cell possibility sets with a parallel collapsed-value slot.
///
/// Storage only, no policy: cells are narrowed by the propagator and
/// committed by the collapser. Once a cell's value is set, its possibility
/// set is the matching singleton.
#[derive(Debug, Clone, PartialEq)]
pub struct PossibilityGrid {
    /// Number of rows.
    pub height: usize,
    /// Number of columns.
    pub width: usize,
    num_tiles: usize,
    cells: Vec<BitVec>,
    values: Vec<Option<TileId>>,
}

impl PossibilityGrid {
    /// Creates a grid with every cell's possibility set equal to the full
    /// tile universe and no value committed.
    ///
    /// # Errors
    ///
    /// Returns `GridError::ZeroDimension` or `GridError::EmptyTileUniverse`
    /// for degenerate inputs.
    pub fn new(height: usize, width: usize, num_tiles: usize) -> Result<Self, GridError> {
        if height == 0 || width == 0 {
            return Err(GridError::ZeroDimension { height, width });
        }
        if num_tiles == 0 {
            return Err(GridError::EmptyTileUniverse);
        }
        let size = height * width;
        Ok(Self {
            height,
            width,
            num_tiles,
            cells: vec![bitvec![1; num_tiles]; size],
            values: vec![None; size],
        })
    }

    /// Size of the tile universe.
    #[must_use]
    pub const fn num_tiles(&self) -> usize {
        self.num_tiles
    }

    /// Total number of cells.
    #[must_use]
    pub const fn total_cells(&self) -> usize {
        self.height * self.width
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.height && col < self.width {
            Some(row * self.width + col)
        } else {
            None
        }
    }

    /// The possibility set at `(row, col)`, or `None` if out of bounds.
    #[must_use]
    pub fn possibilities(&self, row: usize, col: usize) -> Option<&BitVec> {
        self.index(row, col).and_then(|idx| self.cells.get(idx))
    }

    /// Mutable access to the possibility set at `(row, col)`.
    #[must_use]
    pub fn possibilities_mut(&mut self, row: usize, col: usize) -> Option<&mut BitVec> {
        self.index(row, col)
            .and_then(move |idx| self.cells.get_mut(idx))
    }

    /// The committed tile at `(row, col)`; `None` while uncollapsed or out
    /// of bounds.
    #[must_use]
    pub fn value(&self, row: usize, col: usize) -> Option<TileId> {
        self.index(row, col)
            .and_then(|idx| self.values.get(idx).copied().flatten())
    }

    /// Commits a tile value. The collapser keeps the possibility singleton
    /// in sync; callers pre-seeding a grid must do the same.
    pub fn set_value(&mut self, row: usize, col: usize, id: TileId) {
        if let Some(idx) = self.index(row, col) {
            if let Some(slot) = self.values.get_mut(idx) {
                *slot = Some(id);
            }
        }
    }

    /// Whether the cell has a committed value.
    #[must_use]
    pub fn is_collapsed(&self, row: usize, col: usize) -> bool {
        self.value(row, col).is_some()
    }

    /// Number of collapsed cells.
    #[must_use]
    pub fn collapsed_count(&self) -> usize {
        self.values.iter().filter(|value| value.is_some()).count()
    }

    /// Whether every cell has a committed value.
    #[must_use]
    pub fn is_fully_collapsed(&self) -> bool {
        self.values.iter().all(Option::is_some)
    }

    /// The four neighbor positions of `(row, col)` in fixed N, E, S, W
    /// order. `Periodic` wraps modulo the dimensions; `Finite` yields
    /// `None` across an edge.
    #[must_use]
    pub fn neighbors(
        &self,
        row: usize,
        col: usize,
        boundary: BoundaryCondition,
    ) -> [Option<(usize, usize)>; 4] {
        match boundary {
            BoundaryCondition::Periodic => [
                Some(((row + self.height - 1) % self.height, col)),
                Some((row, (col + 1) % self.width)),
                Some(((row + 1) % self.height, col)),
                Some((row, (col + self.width - 1) % self.width)),
            ],
            BoundaryCondition::Finite => [
                row.checked_sub(1).map(|r| (r, col)),
                (col + 1 < self.width).then(|| (row, col + 1)),
                (row + 1 < self.height).then(|| (row + 1, col)),
                col.checked_sub(1).map(|c| (row, c)),
            ],
        }
    }

    /// The solved `(row, col) -> tile` mapping, or `None` while any cell
    /// remains uncollapsed.
    #[must_use]
    pub fn tile_map(&self) -> Option<Vec<Vec<TileId>>> {
        let mut rows = Vec::with_capacity(self.height);
        for row in 0..self.height {
            let mut cols = Vec::with_capacity(self.width);
            for col in 0..self.width {
                cols.push(self.value(row, col)?);
            }
            rows.push(cols);
        }
        Some(rows)
    }
}
