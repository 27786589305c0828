use crate::types::{Direction, Socket, Tile};
use log::debug;

/// Planar transformations applied to tiles during preprocessing.
///
/// Each transformation of a base tile yields a brand-new arena entry with
/// permuted sockets; the solver only ever sees the expanded, flat tile
/// list. Rotations are clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transformation {
    Identity,
    Rot90,
    Rot180,
    Rot270,
    /// Flip across the vertical axis (east and west swap).
    MirrorX,
    /// Flip across the horizontal axis (north and south swap).
    MirrorY,
}

impl Transformation {
    /// A short name used to label transformed tile variants.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Identity => "identity",
            Self::Rot90 => "rot90",
            Self::Rot180 => "rot180",
            Self::Rot270 => "rot270",
            Self::MirrorX => "mirror-x",
            Self::MirrorY => "mirror-y",
        }
    }

    /// Permutes a socket array (N, E, S, W order) under this transformation.
    #[must_use]
    pub const fn apply(self, sockets: [Socket; Direction::COUNT]) -> [Socket; Direction::COUNT] {
        let [n, e, s, w] = sockets;
        match self {
            Self::Identity => [n, e, s, w],
            Self::Rot90 => [w, n, e, s],
            Self::Rot180 => [s, w, n, e],
            Self::Rot270 => [e, s, w, n],
            Self::MirrorX => [n, w, s, e],
            Self::MirrorY => [s, e, n, w],
        }
    }
}

/// Expands base tiles into one arena entry per distinct transformed variant.
///
/// The identity variant of every base tile always comes first, followed by
/// the requested transformations in order. Variants whose socket array
/// duplicates an earlier variant of the *same* base tile are dropped;
/// coincidental matches between different base tiles are kept, since they
/// represent different source tiles. Returns the expanded tiles alongside
/// a display name per entry (`name` or `name@rot90` style).
#[must_use]
pub fn expand_tiles(
    tiles: &[(String, Tile)],
    transforms: &[Transformation],
) -> Vec<(String, Tile)> {
    let mut expanded = Vec::with_capacity(tiles.len() * (transforms.len() + 1));
    for (name, tile) in tiles {
        let mut variants: Vec<[Socket; Direction::COUNT]> = vec![tile.sockets];
        expanded.push((name.clone(), *tile));
        for &transform in transforms {
            let sockets = transform.apply(tile.sockets);
            if variants.contains(&sockets) {
                continue;
            }
            variants.push(sockets);
            expanded.push((format!("{name}@{}", transform.label()), Tile::new(sockets)));
        }
    }
    debug!(
        "expanded {} base tiles into {} variants",
        tiles.len(),
        expanded.len()
    );
    expanded
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TileSetError;
    use crate::TileSet;

    fn tile(n: u32, e: u32, s: u32, w: u32) -> Tile {
        Tile::new([Socket(n), Socket(e), Socket(s), Socket(w)])
    }

    #[test]
    fn rotations_cycle_sockets_clockwise() {
        let base = tile(1, 2, 3, 4).sockets;
        assert_eq!(
            Transformation::Rot90.apply(base),
            [Socket(4), Socket(1), Socket(2), Socket(3)]
        );
        assert_eq!(
            Transformation::Rot180.apply(base),
            [Socket(3), Socket(4), Socket(1), Socket(2)]
        );
        assert_eq!(
            Transformation::Rot270.apply(Transformation::Rot90.apply(base)),
            Transformation::Rot180.apply(Transformation::Rot180.apply(base))
        );
    }

    #[test]
    fn mirrors_swap_one_axis() {
        let base = tile(1, 2, 3, 4).sockets;
        assert_eq!(
            Transformation::MirrorX.apply(base),
            [Socket(1), Socket(4), Socket(3), Socket(2)]
        );
        assert_eq!(
            Transformation::MirrorY.apply(base),
            [Socket(3), Socket(2), Socket(1), Socket(4)]
        );
    }

    #[test]
    fn expansion_skips_duplicate_variants_of_a_base_tile() {
        // A fully symmetric tile produces no extra variants.
        let tiles = vec![("plain".to_owned(), tile(0, 0, 0, 0))];
        let expanded = expand_tiles(
            &tiles,
            &[
                Transformation::Rot90,
                Transformation::Rot180,
                Transformation::Rot270,
            ],
        );
        assert_eq!(expanded.len(), 1);
        assert_eq!(expanded[0].0, "plain");
    }

    #[test]
    fn expansion_keeps_distinct_variants_and_labels_them() {
        let tiles = vec![("corner".to_owned(), tile(1, 1, 0, 0))];
        let expanded = expand_tiles(&tiles, &[Transformation::Rot90, Transformation::Rot180]);
        assert_eq!(expanded.len(), 3);
        assert_eq!(expanded[1].0, "corner@rot90");
        assert_eq!(expanded[1].1, tile(0, 1, 1, 0));
        assert_eq!(expanded[2].0, "corner@rot180");
        assert_eq!(expanded[2].1, tile(0, 0, 1, 1));

        let set = TileSet::new(expanded.into_iter().map(|(_, t)| t).collect());
        assert!(!matches!(set, Err(TileSetError::EmptyTileSet)));
    }
}
