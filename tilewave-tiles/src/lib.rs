//! Tileset definitions for the tilewave solver.
//!
//! A tileset is an ordered, immutable arena of tiles, each carrying one
//! border socket per cardinal direction. Two tiles may share an edge iff
//! the sockets on the facing sides are equal. Rotated and mirrored
//! variants are produced as new arena entries during preprocessing; the
//! solver never deals with transformations at runtime.

use thiserror::Error;

pub mod loader;
pub mod transform;
pub mod types;

pub use crate::transform::{expand_tiles, Transformation};
pub use crate::types::{Direction, Socket, Tile, TileId, TileSet, TileSetError};

/// Errors that can occur while loading a tileset definition file.
#[derive(Error, Debug)]
pub enum LoadError {
    /// I/O failure reading the rule file.
    #[error("I/O error reading rule file: {0}")]
    Io(#[from] std::io::Error),
    /// The file content could not be parsed as RON.
    #[error("failed to parse rule file: {0}")]
    Parse(String),
    /// The file parsed but described an invalid tileset.
    #[error("invalid rule data: {0}")]
    InvalidData(String),
}

impl From<TileSetError> for LoadError {
    fn from(error: TileSetError) -> Self {
        Self::InvalidData(error.to_string())
    }
}
