use crate::grid::PossibilityGrid;
use rand::seq::SliceRandom;
use rand::Rng;

/// Picks the next cell to collapse: the uncollapsed cell with the fewest
/// remaining possibilities, ties broken uniformly at random.
///
/// The full cell-index list is shuffled once, then scanned tracking the
/// running minimum with a strict comparison, so among equal-count
/// candidates the first one encountered in random order wins. This is
/// equivalent to collecting all ties and sampling one, without the extra
/// pass.
///
/// Returns `None` when every cell is collapsed.
pub fn select_lowest_entropy<R: Rng + ?Sized>(
    grid: &PossibilityGrid,
    rng: &mut R,
) -> Option<(usize, usize)> {
    let mut order: Vec<usize> = (0..grid.total_cells()).collect();
    order.shuffle(rng);

    let mut selected = None;
    let mut lowest = usize::MAX;
    for cell_index in order {
        let row = cell_index / grid.width;
        let col = cell_index % grid.width;
        if grid.is_collapsed(row, col) {
            continue;
        }
        let count = grid.possibilities(row, col).map_or(0, |p| p.count_ones());
        if count < lowest {
            lowest = count;
            selected = Some((row, col));
        }
    }
    selected
}
