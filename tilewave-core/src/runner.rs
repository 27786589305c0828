use crate::collapse::collapse_cell;
use crate::entropy::select_lowest_entropy;
use crate::grid::{BoundaryCondition, PossibilityGrid};
use crate::propagator::{PropagationError, Propagator};
use crate::queue::PropagationQueue;
use crate::SolverError;
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use tilewave_tiles::{TileId, TileSet};

/// Callback invoked after every completed outer step.
pub type ProgressCallback = Box<dyn Fn(&ProgressInfo) + Send + Sync>;

/// Snapshot of solve progress handed to the progress callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressInfo {
    /// Cells collapsed so far.
    pub collapsed_cells: usize,
    /// Total cells in the grid.
    pub total_cells: usize,
    /// Outer steps completed so far.
    pub iterations: u64,
}

/// Options for a solve attempt.
pub struct SolverConfig {
    /// Boundary handling for neighbor lookups.
    pub boundary: BoundaryCondition,
    /// Seed for the random number generator; entropy-seeded when `None`.
    pub seed: Option<u64>,
    /// Ceiling on outer steps; defaults to ten times the cell count.
    pub max_iterations: Option<u64>,
    /// Invoked after every completed outer step.
    pub progress_callback: Option<ProgressCallback>,
}

impl SolverConfig {
    /// Creates a new builder for `SolverConfig`.
    #[must_use]
    pub fn builder() -> SolverConfigBuilder {
        SolverConfigBuilder::default()
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            boundary: BoundaryCondition::default(),
            seed: None,
            max_iterations: None,
            progress_callback: None,
        }
    }
}

/// Builder for `SolverConfig`.
#[derive(Default)]
pub struct SolverConfigBuilder {
    boundary: BoundaryCondition,
    seed: Option<u64>,
    max_iterations: Option<u64>,
    progress_callback: Option<ProgressCallback>,
}

impl SolverConfigBuilder {
    /// Sets the boundary handling.
    #[must_use]
    pub const fn boundary(mut self, boundary: BoundaryCondition) -> Self {
        self.boundary = boundary;
        self
    }

    /// Sets the random seed for deterministic runs.
    #[must_use]
    pub const fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the ceiling on outer steps.
    #[must_use]
    pub const fn max_iterations(mut self, max: u64) -> Self {
        self.max_iterations = Some(max);
        self
    }

    /// Sets the progress callback.
    #[must_use]
    pub fn progress_callback(mut self, callback: ProgressCallback) -> Self {
        self.progress_callback = Some(callback);
        self
    }

    /// Builds the `SolverConfig`.
    #[must_use]
    pub fn build(self) -> SolverConfig {
        SolverConfig {
            boundary: self.boundary,
            seed: self.seed,
            max_iterations: self.max_iterations,
            progress_callback: self.progress_callback,
        }
    }
}

/// State of a solve attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverState {
    /// Uncollapsed cells remain and no contradiction has been found.
    Running,
    /// Every cell carries a committed tile; the grid is a valid solution.
    Succeeded,
    /// A possibility set became empty at `(row, col)`. The grid is left
    /// partially collapsed and must be discarded, not reused.
    Contradicted {
        /// Row of the contradictory cell.
        row: usize,
        /// Column of the contradictory cell.
        col: usize,
    },
}

/// One solve attempt: owns the grid and drives the collapse-propagate loop.
///
/// No automatic retry happens here; on contradiction the caller decides
/// whether to start over with a fresh solver.
pub struct Solver {
    tileset: Arc<TileSet>,
    grid: PossibilityGrid,
    propagator: Propagator,
    queue: PropagationQueue,
    rng: StdRng,
    state: SolverState,
    iterations: u64,
    max_iterations: u64,
    progress_callback: Option<ProgressCallback>,
}

impl Solver {
    /// Creates a solver with a fresh, fully open grid.
    ///
    /// # Errors
    ///
    /// Returns `SolverError::Grid` for zero dimensions or an empty tile
    /// universe.
    pub fn new(
        tileset: Arc<TileSet>,
        height: usize,
        width: usize,
        config: SolverConfig,
    ) -> Result<Self, SolverError> {
        let grid = PossibilityGrid::new(height, width, tileset.num_tiles())?;
        let rng = config
            .seed
            .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
        let max_iterations = config
            .max_iterations
            .unwrap_or_else(|| (grid.total_cells() as u64).saturating_mul(10));
        Ok(Self {
            tileset,
            grid,
            propagator: Propagator::new(config.boundary),
            queue: PropagationQueue::new(),
            rng,
            state: SolverState::Running,
            iterations: 0,
            max_iterations,
            progress_callback: config.progress_callback,
        })
    }

    /// Current state of the attempt.
    #[must_use]
    pub const fn state(&self) -> SolverState {
        self.state
    }

    /// Read access to the grid (for diagnostics and rendering).
    #[must_use]
    pub const fn grid(&self) -> &PossibilityGrid {
        &self.grid
    }

    /// Outer steps completed so far.
    #[must_use]
    pub const fn iterations(&self) -> u64 {
        self.iterations
    }

    /// Performs one outer step: select the lowest-entropy cell, collapse
    /// it, and drain propagation to a fixpoint. This is the natural yield
    /// point for cooperative scheduling.
    ///
    /// Returns the state after the step; calling `step` in a terminal
    /// state is a no-op returning that state.
    ///
    /// # Errors
    ///
    /// Returns `SolverError::Contradiction` when a possibility set runs
    /// empty (the state moves to `Contradicted` and the grid must be
    /// discarded), or `SolverError::MaxIterationsReached` when the step
    /// ceiling is hit.
    pub fn step(&mut self) -> Result<SolverState, SolverError> {
        if self.state != SolverState::Running {
            return Ok(self.state);
        }
        if self.iterations >= self.max_iterations {
            return Err(SolverError::MaxIterationsReached(self.max_iterations));
        }
        self.iterations += 1;

        let Some((row, col)) = select_lowest_entropy(&self.grid, &mut self.rng) else {
            self.state = SolverState::Succeeded;
            info!(
                "all {} cells collapsed after {} steps",
                self.grid.total_cells(),
                self.iterations - 1
            );
            return Ok(self.state);
        };

        let chosen = collapse_cell(&mut self.grid, row, col, &mut self.rng)?;
        debug!("step {}: collapsed ({row}, {col}) to {chosen:?}", self.iterations);

        self.queue.clear();
        let boundary = self.propagator.boundary();
        for (n_row, n_col) in self.grid.neighbors(row, col, boundary).iter().flatten() {
            if !self.grid.is_collapsed(*n_row, *n_col) {
                self.queue.push((*n_row, *n_col));
            }
        }
        if let Err(PropagationError::Contradiction(c_row, c_col)) =
            self.propagator
                .propagate(&mut self.grid, &self.tileset, &mut self.queue)
        {
            self.state = SolverState::Contradicted {
                row: c_row,
                col: c_col,
            };
            warn!(
                "contradiction at ({c_row}, {c_col}) after {} steps",
                self.iterations
            );
            return Err(SolverError::Contradiction(c_row, c_col));
        }

        if let Some(callback) = &self.progress_callback {
            callback(&ProgressInfo {
                collapsed_cells: self.grid.collapsed_count(),
                total_cells: self.grid.total_cells(),
                iterations: self.iterations,
            });
        }
        Ok(SolverState::Running)
    }

    /// Steps until the attempt reaches a terminal state.
    ///
    /// # Errors
    ///
    /// As `step`.
    pub fn run(&mut self) -> Result<(), SolverError> {
        loop {
            if self.step()? == SolverState::Succeeded {
                return Ok(());
            }
        }
    }

    /// The solved `(row, col) -> tile` mapping; `None` unless the attempt
    /// succeeded.
    #[must_use]
    pub fn tile_map(&self) -> Option<Vec<Vec<TileId>>> {
        if self.state == SolverState::Succeeded {
            self.grid.tile_map()
        } else {
            None
        }
    }
}

/// Runs a full solve attempt on a fresh grid and returns the solved
/// mapping.
///
/// # Errors
///
/// As `Solver::new` and `Solver::step`.
pub fn run(
    tileset: Arc<TileSet>,
    height: usize,
    width: usize,
    config: SolverConfig,
) -> Result<Vec<Vec<TileId>>, SolverError> {
    let mut solver = Solver::new(tileset, height, width, config)?;
    solver.run()?;
    solver.tile_map().ok_or_else(|| {
        SolverError::Internal("solver reported success without a full collapse".to_owned())
    })
}
