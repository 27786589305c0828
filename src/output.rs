use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use tilewave_tiles::TileId;

/// Renders a solved grid as one line per row, tiles separated by spaces
/// and shown by their rule-file names.
pub fn render_tile_map(map: &[Vec<TileId>], names: &[String]) -> String {
    let mut out = String::new();
    for row in map {
        let mut first = true;
        for tile in row {
            if !first {
                out.push(' ');
            }
            first = false;
            match names.get(tile.0) {
                Some(name) => out.push_str(name),
                None => {
                    let _ = write!(out, "#{}", tile.0);
                }
            }
        }
        out.push('\n');
    }
    out
}

/// Writes the rendered grid to `path`, creating parent directories as
/// needed.
pub fn save_to_file(rendered: &str, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
    }
    fs::write(path, rendered)
        .with_context(|| format!("failed to write output to {}", path.display()))?;
    log::info!("Output saved to {}", path.display());
    Ok(())
}
