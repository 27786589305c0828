use rand::rngs::StdRng;
use rand::SeedableRng;
use tilewave_core::entropy::select_lowest_entropy;
use tilewave_core::PossibilityGrid;
use tilewave_tiles::TileId;

fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

#[test]
fn fully_collapsed_grid_yields_none() {
    let mut grid = PossibilityGrid::new(2, 2, 2).unwrap();
    for row in 0..2 {
        for col in 0..2 {
            let cell = grid.possibilities_mut(row, col).unwrap();
            cell.fill(false);
            cell.set(0, true);
            grid.set_value(row, col, TileId(0));
        }
    }
    assert_eq!(select_lowest_entropy(&grid, &mut seeded_rng(0)), None);
}

#[test]
fn most_constrained_cell_wins() {
    let mut grid = PossibilityGrid::new(2, 2, 4).unwrap();
    // Narrow (1, 0) to two possibilities; everything else keeps four.
    let cell = grid.possibilities_mut(1, 0).unwrap();
    cell.set(0, false);
    cell.set(3, false);

    for seed in 0..20 {
        assert_eq!(
            select_lowest_entropy(&grid, &mut seeded_rng(seed)),
            Some((1, 0))
        );
    }
}

#[test]
fn collapsed_cells_are_skipped() {
    let mut grid = PossibilityGrid::new(1, 2, 2).unwrap();
    let cell = grid.possibilities_mut(0, 0).unwrap();
    cell.fill(false);
    cell.set(1, true);
    grid.set_value(0, 0, TileId(1));

    // (0, 0) has the lower count but is collapsed; (0, 1) must be chosen.
    for seed in 0..10 {
        assert_eq!(
            select_lowest_entropy(&grid, &mut seeded_rng(seed)),
            Some((0, 1))
        );
    }
}

#[test]
fn ties_break_randomly_across_seeds() {
    // All four cells tie at the full universe; over many seeds every cell
    // should be selected at least once.
    let grid = PossibilityGrid::new(2, 2, 3).unwrap();
    let mut seen = [[false; 2]; 2];
    for seed in 0..200 {
        let (row, col) = select_lowest_entropy(&grid, &mut seeded_rng(seed)).unwrap();
        seen[row][col] = true;
    }
    assert!(
        seen.iter().flatten().all(|&s| s),
        "tie-breaking never selected some cells: {seen:?}"
    );
}
