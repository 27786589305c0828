//! Core solver for border-socket tile collapse.
//!
//! Fills a rectangular grid with tile ids such that every pair of adjacent
//! cells carries equal sockets on the shared edge, by repeatedly collapsing
//! the most constrained cell and propagating arc-consistency to a fixpoint.
//! The tile universe comes from `tilewave-tiles`; this crate holds the
//! stateful algorithm only.

use thiserror::Error;

/// Committing a single tile choice to a cell.
pub mod collapse;
/// Selection of the next cell to collapse.
pub mod entropy;
/// Possibility storage and neighbor lookup.
pub mod grid;
/// Arc-consistency propagation over border sockets.
pub mod propagator;
/// Deduplicated worklist of cells awaiting re-examination.
pub mod queue;
/// The outer collapse-propagate loop.
pub mod runner;

pub use crate::grid::{BoundaryCondition, GridError, PossibilityGrid};
pub use crate::propagator::{PropagationError, Propagator};
pub use crate::queue::PropagationQueue;
pub use crate::runner::{run, ProgressInfo, Solver, SolverConfig, SolverState};

/// Errors surfaced by a solve attempt.
#[derive(Error, Debug)]
pub enum SolverError {
    /// Invalid grid configuration, rejected before solving starts.
    #[error("grid configuration error: {0}")]
    Grid(#[from] GridError),
    /// A cell's possibility set became empty; this attempt cannot be
    /// completed and the grid must be discarded. Retrying with a fresh
    /// solver is a caller policy choice.
    #[error("contradiction found at ({0}, {1})")]
    Contradiction(usize, usize),
    /// The configured iteration ceiling was exceeded.
    #[error("maximum iterations ({0}) reached")]
    MaxIterationsReached(u64),
    /// A loop invariant was violated; this indicates a defect in the
    /// solver, not a property of the input.
    #[error("internal error: {0}")]
    Internal(String),
}
