// thermotrack_cli/src/cli.rs

use clap::Parser;
use std::path::PathBuf;

/// Thermotrack: draw a vehicle trajectory from its pose log, optionally
/// coloured by the temperature log recorded alongside it.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the pose (trajectory) log.
    #[arg(long = "log-pose")]
    pub log_pose: PathBuf,

    /// Path to the temperature log.
    #[arg(long = "log-temp")]
    pub log_temp: Option<PathBuf>,

    /// Draw orientation axes on every N-th pose.
    #[arg(
        long = "f",
        default_value_t = 1,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub stride: u64,

    /// Configuration file (TOML). Defaults to `thermotrack.toml` if present.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the effective configuration before running.
    #[arg(long, default_value_t = false)]
    pub print_config: bool,
}
