use crate::grid::PossibilityGrid;
use crate::SolverError;
use log::trace;
use rand::seq::SliceRandom;
use rand::Rng;
use tilewave_tiles::TileId;

/// Commits one concrete tile to a cell: samples a tile id uniformly at
/// random from the current possibility set, sets the value, and replaces
/// the set with the singleton.
///
/// # Errors
///
/// The solver loop guarantees the target cell exists and its possibility
/// set is non-empty; either violation is a programming error and surfaces
/// as `SolverError::Internal`.
pub fn collapse_cell<R: Rng + ?Sized>(
    grid: &mut PossibilityGrid,
    row: usize,
    col: usize,
    rng: &mut R,
) -> Result<TileId, SolverError> {
    let cell = grid.possibilities(row, col).ok_or_else(|| {
        SolverError::Internal(format!("collapse target ({row}, {col}) out of bounds"))
    })?;
    let candidates: Vec<usize> = cell.iter_ones().collect();
    let &chosen = candidates.choose(rng).ok_or_else(|| {
        SolverError::Internal(format!(
            "collapse requested on empty possibility set at ({row}, {col})"
        ))
    })?;

    if let Some(cell) = grid.possibilities_mut(row, col) {
        cell.fill(false);
        cell.set(chosen, true);
    }
    grid.set_value(row, col, TileId(chosen));
    trace!("collapsed ({row}, {col}) to tile {chosen}");
    Ok(TileId(chosen))
}
