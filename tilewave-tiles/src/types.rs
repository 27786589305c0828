use thiserror::Error;

/// Unique identifier for a tile, an index into the `TileSet`'s tile list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(pub usize);

/// Border-compatibility key carried on one side of a tile.
///
/// Two tiles are adjacency-compatible across a shared edge iff the sockets
/// on the facing sides are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Socket(pub u32);

/// Cardinal direction from a cell towards one of its four neighbors.
///
/// The discriminant doubles as the index into socket and neighbor arrays;
/// the N, E, S, W order is fixed throughout the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

impl Direction {
    /// All four directions in the fixed N, E, S, W order.
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Number of directions.
    pub const COUNT: usize = 4;

    /// The direction pointing back across the same edge.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }

    /// Index into per-direction arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// An immutable tile: one border socket per direction, N, E, S, W order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    /// Border sockets indexed by `Direction`.
    pub sockets: [Socket; Direction::COUNT],
}

impl Tile {
    /// Creates a tile from its four border sockets in N, E, S, W order.
    #[must_use]
    pub const fn new(sockets: [Socket; Direction::COUNT]) -> Self {
        Self { sockets }
    }

    /// The socket on the given side.
    #[must_use]
    pub const fn socket(&self, direction: Direction) -> Socket {
        self.sockets[direction.index()]
    }
}

/// Errors that can occur during `TileSet` creation or validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TileSetError {
    /// The provided tile list was empty; the solver needs at least one tile.
    #[error("tile set must contain at least one tile")]
    EmptyTileSet,
}

/// Ordered, immutable collection of tiles addressed by `TileId`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileSet {
    tiles: Vec<Tile>,
}

impl TileSet {
    /// Creates a new `TileSet` from the given tiles.
    ///
    /// # Errors
    ///
    /// Returns `TileSetError::EmptyTileSet` if `tiles` is empty.
    pub fn new(tiles: Vec<Tile>) -> Result<Self, TileSetError> {
        if tiles.is_empty() {
            return Err(TileSetError::EmptyTileSet);
        }
        Ok(Self { tiles })
    }

    /// Number of tiles in the set.
    #[must_use]
    pub fn num_tiles(&self) -> usize {
        self.tiles.len()
    }

    /// The tile with the given id, or `None` if out of bounds.
    #[must_use]
    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(id.0)
    }

    /// All tiles in id order.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// The socket of tile `id` on the given side, or `None` if `id` is out
    /// of bounds.
    #[must_use]
    pub fn socket(&self, id: TileId, direction: Direction) -> Option<Socket> {
        self.tile(id).map(|tile| tile.socket(direction))
    }

    /// Checks whether tile `b` may sit in direction `direction` of tile `a`.
    ///
    /// Out-of-bounds ids are treated as incompatible.
    #[must_use]
    pub fn compatible(&self, a: TileId, b: TileId, direction: Direction) -> bool {
        match (self.socket(a, direction), self.socket(b, direction.opposite())) {
            (Some(own), Some(facing)) => own == facing,
            _ => false,
        }
    }
}
