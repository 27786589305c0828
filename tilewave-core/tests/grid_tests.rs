use tilewave_core::{BoundaryCondition, GridError, PossibilityGrid};
use tilewave_tiles::TileId;

#[test]
fn new_grid_starts_fully_open() {
    let grid = PossibilityGrid::new(2, 3, 4).unwrap();
    assert_eq!(grid.height, 2);
    assert_eq!(grid.width, 3);
    assert_eq!(grid.num_tiles(), 4);
    assert_eq!(grid.total_cells(), 6);
    assert_eq!(grid.collapsed_count(), 0);
    for row in 0..2 {
        for col in 0..3 {
            assert_eq!(grid.possibilities(row, col).unwrap().count_ones(), 4);
            assert!(!grid.is_collapsed(row, col));
            assert_eq!(grid.value(row, col), None);
        }
    }
}

#[test]
fn degenerate_dimensions_are_rejected() {
    assert_eq!(
        PossibilityGrid::new(0, 3, 2),
        Err(GridError::ZeroDimension {
            height: 0,
            width: 3
        })
    );
    assert_eq!(
        PossibilityGrid::new(3, 0, 2),
        Err(GridError::ZeroDimension {
            height: 3,
            width: 0
        })
    );
    assert_eq!(PossibilityGrid::new(3, 3, 0), Err(GridError::EmptyTileUniverse));
}

#[test]
fn out_of_bounds_access_yields_none() {
    let mut grid = PossibilityGrid::new(2, 2, 1).unwrap();
    assert!(grid.possibilities(2, 0).is_none());
    assert!(grid.possibilities(0, 2).is_none());
    assert!(grid.possibilities_mut(5, 5).is_none());
    assert_eq!(grid.value(2, 2), None);
}

#[test]
fn committing_a_value_marks_the_cell_collapsed() {
    let mut grid = PossibilityGrid::new(2, 2, 3).unwrap();
    grid.set_value(1, 0, TileId(2));
    assert!(grid.is_collapsed(1, 0));
    assert_eq!(grid.value(1, 0), Some(TileId(2)));
    assert_eq!(grid.collapsed_count(), 1);
    assert!(!grid.is_fully_collapsed());
}

#[test]
fn periodic_neighbors_wrap_around_edges() {
    let grid = PossibilityGrid::new(3, 3, 1).unwrap();
    // N, E, S, W order.
    assert_eq!(
        grid.neighbors(0, 0, BoundaryCondition::Periodic),
        [Some((2, 0)), Some((0, 1)), Some((1, 0)), Some((0, 2))]
    );
    assert_eq!(
        grid.neighbors(2, 2, BoundaryCondition::Periodic),
        [Some((1, 2)), Some((2, 0)), Some((0, 2)), Some((2, 1))]
    );
}

#[test]
fn finite_neighbors_stop_at_edges() {
    let grid = PossibilityGrid::new(3, 3, 1).unwrap();
    assert_eq!(
        grid.neighbors(0, 0, BoundaryCondition::Finite),
        [None, Some((0, 1)), Some((1, 0)), None]
    );
    assert_eq!(
        grid.neighbors(1, 1, BoundaryCondition::Finite),
        [Some((0, 1)), Some((1, 2)), Some((2, 1)), Some((1, 0))]
    );
    assert_eq!(
        grid.neighbors(2, 2, BoundaryCondition::Finite),
        [Some((1, 2)), None, None, Some((2, 1))]
    );
}

#[test]
fn tile_map_requires_full_collapse() {
    let mut grid = PossibilityGrid::new(1, 2, 2).unwrap();
    assert_eq!(grid.tile_map(), None);
    grid.set_value(0, 0, TileId(0));
    assert_eq!(grid.tile_map(), None);
    grid.set_value(0, 1, TileId(1));
    assert_eq!(grid.tile_map(), Some(vec![vec![TileId(0), TileId(1)]]));
}
