//! Command-line tile map generator driven by border-socket constraints.

pub mod config;
pub mod output;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use config::AppConfig;
use std::sync::Arc;
use tilewave_core::{run, BoundaryCondition, SolverConfig, SolverError};
use tilewave_tiles::loader::load_from_file;
use tilewave_tiles::TileId;

fn main() -> Result<()> {
    env_logger::init();

    let config = AppConfig::parse();
    log::debug!("Loaded config: {config:?}");

    log::info!("Loading rules from {}", config.rule_file.display());
    let (tileset, names) = load_from_file(&config.rule_file)
        .with_context(|| format!("failed to load rules from {}", config.rule_file.display()))?;
    log::info!("Rules loaded: {} tiles", tileset.num_tiles());

    let tileset = Arc::new(tileset);
    let boundary = if config.periodic {
        BoundaryCondition::Periodic
    } else {
        BoundaryCondition::Finite
    };

    let map = solve_with_retries(&tileset, &config, boundary)?;

    let rendered = output::render_tile_map(&map, &names);
    match &config.output_path {
        Some(path) => output::save_to_file(&rendered, path)?,
        None => print!("{rendered}"),
    }
    Ok(())
}

/// Runs fresh solve attempts until one succeeds or the attempt budget is
/// spent. A seeded run derives one seed per attempt so retries actually
/// explore different collapse orders.
fn solve_with_retries(
    tileset: &Arc<tilewave_tiles::TileSet>,
    config: &AppConfig,
    boundary: BoundaryCondition,
) -> Result<Vec<Vec<TileId>>> {
    for attempt in 0..config.attempts {
        let mut solver_config = SolverConfig::builder().boundary(boundary);
        if let Some(base_seed) = config.seed {
            solver_config = solver_config.seed(base_seed.wrapping_add(u64::from(attempt)));
        }
        match run(
            Arc::clone(tileset),
            config.height,
            config.width,
            solver_config.build(),
        ) {
            Ok(map) => {
                log::info!("Solved on attempt {}", attempt + 1);
                return Ok(map);
            }
            Err(SolverError::Contradiction(row, col)) => {
                log::warn!(
                    "Attempt {} hit a contradiction at ({row}, {col}); retrying",
                    attempt + 1
                );
            }
            Err(other) => return Err(other).context("solver failed"),
        }
    }
    Err(anyhow!(
        "no solution found after {} attempts",
        config.attempts
    ))
}
