use crate::grid::{BoundaryCondition, PossibilityGrid};
use crate::queue::PropagationQueue;
use bitvec::prelude::*;
use log::trace;
use std::collections::HashSet;
use thiserror::Error;
use tilewave_tiles::{Direction, Socket, TileId, TileSet};

/// Errors raised during constraint propagation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PropagationError {
    /// A cell's possibility set became empty: no tile satisfies all
    /// neighbor constraints at `(row, col)`. The attempt cannot be
    /// completed and propagation stops immediately.
    #[error("contradiction detected during propagation at ({0}, {1})")]
    Contradiction(usize, usize),
}

/// Arc-consistency propagator over border sockets.
///
/// A cell's possibility set is recomputed as the set of tiles whose socket
/// in every direction is reachable from the corresponding neighbor's
/// remaining possibilities.
#[derive(Debug, Clone, Copy)]
pub struct Propagator {
    boundary: BoundaryCondition,
}

impl Propagator {
    /// Creates a propagator for the given boundary handling.
    #[must_use]
    pub const fn new(boundary: BoundaryCondition) -> Self {
        Self { boundary }
    }

    /// The configured boundary handling.
    #[must_use]
    pub const fn boundary(&self) -> BoundaryCondition {
        self.boundary
    }

    /// Recomputes the possibility set at `(row, col)` from its neighbors.
    ///
    /// Per direction, the allowed sockets are the facing sockets of every
    /// tile still possible at that neighbor; a missing neighbor (open
    /// boundary) contributes the facing sockets of the whole universe. A
    /// tile stays possible iff its own socket in every direction is a
    /// member of that direction's allowed set.
    ///
    /// Returns the existing, uncollapsed neighbors to re-examine when the
    /// possibility count changed, or an empty list when it did not. The
    /// count comparison is deliberate: sets derive from neighbors only, so
    /// an equal count means no further propagation is needed from here.
    ///
    /// # Errors
    ///
    /// Returns `PropagationError::Contradiction` when the recomputed set is
    /// empty; the grid is left unmodified at `(row, col)` in that case.
    pub fn update_cell(
        &self,
        grid: &mut PossibilityGrid,
        tileset: &TileSet,
        row: usize,
        col: usize,
    ) -> Result<Vec<(usize, usize)>, PropagationError> {
        let neighbors = grid.neighbors(row, col, self.boundary);
        let before = grid.possibilities(row, col).map_or(0, |p| p.count_ones());

        // Allowed socket set per direction, built from the facing side of
        // each neighbor's remaining tiles.
        let mut allowed: [HashSet<Socket>; Direction::COUNT] =
            core::array::from_fn(|_| HashSet::new());
        for direction in Direction::ALL {
            let facing = direction.opposite();
            let slot = &mut allowed[direction.index()];
            match neighbors[direction.index()] {
                Some((n_row, n_col)) => {
                    if let Some(possible) = grid.possibilities(n_row, n_col) {
                        for tile_index in possible.iter_ones() {
                            if let Some(socket) = tileset.socket(TileId(tile_index), facing) {
                                slot.insert(socket);
                            }
                        }
                    }
                }
                None => {
                    for tile in tileset.tiles() {
                        slot.insert(tile.socket(facing));
                    }
                }
            }
        }

        let num_tiles = grid.num_tiles();
        let mut updated = bitvec![0; num_tiles];
        let mut after = 0;
        for tile_index in 0..num_tiles {
            let Some(tile) = tileset.tile(TileId(tile_index)) else {
                continue;
            };
            let possible = Direction::ALL
                .iter()
                .all(|&direction| allowed[direction.index()].contains(&tile.socket(direction)));
            if possible {
                updated.set(tile_index, true);
                after += 1;
            }
        }

        if after == 0 {
            return Err(PropagationError::Contradiction(row, col));
        }
        if let Some(cell) = grid.possibilities_mut(row, col) {
            *cell = updated;
        }
        if after == before {
            return Ok(Vec::new());
        }
        trace!("cell ({row}, {col}) narrowed from {before} to {after} possibilities");
        Ok(neighbors
            .iter()
            .flatten()
            .copied()
            .filter(|&(n_row, n_col)| !grid.is_collapsed(n_row, n_col))
            .collect())
    }

    /// Drains the queue to a fixpoint, re-enqueueing every changed
    /// neighbor with deduplicated inserts.
    ///
    /// # Errors
    ///
    /// Stops immediately and returns the contradiction on the first empty
    /// possibility set; remaining queue entries are not processed.
    pub fn propagate(
        &self,
        grid: &mut PossibilityGrid,
        tileset: &TileSet,
        queue: &mut PropagationQueue,
    ) -> Result<(), PropagationError> {
        while let Some((row, col)) = queue.pop() {
            for coord in self.update_cell(grid, tileset, row, col)? {
                queue.push(coord);
            }
        }
        Ok(())
    }
}
