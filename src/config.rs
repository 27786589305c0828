use clap::Parser;
use std::path::PathBuf;

/// Command-line configuration for the tilewave generator.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct AppConfig {
    /// Path to the RON rule file defining tiles and their border sockets.
    #[arg(short, long, value_name = "FILE")]
    pub rule_file: PathBuf,

    /// Width of the output grid.
    #[arg(long, default_value_t = 10)]
    pub width: usize,

    /// Height of the output grid.
    #[arg(long, default_value_t = 10)]
    pub height: usize,

    /// Wrap the grid toroidally instead of leaving the borders open.
    #[arg(long, default_value_t = false)]
    pub periodic: bool,

    /// Optional seed for the random number generator.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Maximum number of attempts before giving up on a contradictory run.
    #[arg(long, default_value_t = 10)]
    pub attempts: u32,

    /// Optional path to save the generated grid; printed to stdout otherwise.
    #[arg(short, long, value_name = "FILE")]
    pub output_path: Option<PathBuf>,
}
