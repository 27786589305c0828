use crate::transform::{expand_tiles, Transformation};
use crate::types::{Socket, Tile, TileSet};
use crate::LoadError;
use log::debug;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

// --- Structs mirroring the RON rule-file format ---

#[derive(Debug, Clone, Deserialize)]
struct RonTileData {
    /// Unique display name for the tile.
    name: String,
    /// Border sockets in N, E, S, W order.
    sockets: (u32, u32, u32, u32),
}

/// Top-level structure of a tilewave rule file in RON format.
#[derive(Debug, Clone, Deserialize)]
struct RonRuleFile {
    /// All base tiles.
    tiles: Vec<RonTileData>,
    /// Transformations applied to every base tile during expansion.
    #[serde(default)]
    transforms: Vec<String>,
}

fn transform_name_to_transformation(name: &str) -> Result<Transformation, LoadError> {
    match name {
        "rot90" => Ok(Transformation::Rot90),
        "rot180" => Ok(Transformation::Rot180),
        "rot270" => Ok(Transformation::Rot270),
        "mirror-x" => Ok(Transformation::MirrorX),
        "mirror-y" => Ok(Transformation::MirrorY),
        _ => Err(LoadError::InvalidData(format!(
            "unknown transformation: {name}"
        ))),
    }
}

/// Parses a tileset definition from a RON string.
///
/// Returns the expanded `TileSet` together with one display name per tile
/// id (transformed variants are labelled `name@rot90` style).
///
/// # Errors
///
/// Returns `LoadError` if the content is not valid RON, defines no tiles,
/// repeats a tile name, or names an unknown transformation.
pub fn load_from_str(content: &str) -> Result<(TileSet, Vec<String>), LoadError> {
    let rule_file: RonRuleFile = ron::from_str(content)
        .map_err(|e| LoadError::Parse(format!("RON deserialization failed: {e}")))?;

    if rule_file.tiles.is_empty() {
        return Err(LoadError::InvalidData("no tiles defined".to_owned()));
    }
    let mut seen_names = HashSet::new();
    for tile_data in &rule_file.tiles {
        if !seen_names.insert(tile_data.name.as_str()) {
            return Err(LoadError::InvalidData(format!(
                "duplicate tile name: {}",
                tile_data.name
            )));
        }
    }

    let transforms: Vec<Transformation> = rule_file
        .transforms
        .iter()
        .map(|name| transform_name_to_transformation(name))
        .collect::<Result<_, _>>()?;

    let base_tiles: Vec<(String, Tile)> = rule_file
        .tiles
        .into_iter()
        .map(|tile_data| {
            let (n, e, s, w) = tile_data.sockets;
            (
                tile_data.name,
                Tile::new([Socket(n), Socket(e), Socket(s), Socket(w)]),
            )
        })
        .collect();

    let expanded = expand_tiles(&base_tiles, &transforms);
    let (names, tiles): (Vec<String>, Vec<Tile>) = expanded.into_iter().unzip();
    let tileset = TileSet::new(tiles)?;
    debug!("loaded tileset with {} tiles", tileset.num_tiles());
    Ok((tileset, names))
}

/// Loads a tileset definition from a RON rule file on disk.
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read, otherwise as
/// `load_from_str`.
pub fn load_from_file(path: &Path) -> Result<(TileSet, Vec<String>), LoadError> {
    let content = std::fs::read_to_string(path)?;
    load_from_str(&content)
}
