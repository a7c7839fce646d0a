use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Notos synthetic weather pipeline.
#[derive(Parser)]
#[command(
    name = "notos",
    version,
    about = "Synthetic weather pipeline for hydraulic simulation inputs"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Generate per-area weather timeseries.
    Generate(GenerateArgs),
    /// Interpolate area timeseries onto query points.
    Interpolate(InterpolateArgs),
    /// Convert timeseries to the simulation engine line format.
    Convert(ConvertArgs),
}

/// Arguments for the `generate` subcommand.
#[derive(clap::Args)]
pub struct GenerateArgs {
    /// Path to the JSON generation request.
    pub request: PathBuf,

    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "notos.toml")]
    pub config: PathBuf,

    /// Write the reply here instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override global RNG seed from config.
    #[arg(short, long)]
    pub seed: Option<u64>,
}

/// Arguments for the `interpolate` subcommand.
#[derive(clap::Args)]
pub struct InterpolateArgs {
    /// Path to the JSON interpolation request.
    pub request: PathBuf,

    /// Write the reply here instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `convert` subcommand.
#[derive(clap::Args)]
pub struct ConvertArgs {
    /// Path to the JSON conversion request.
    pub request: PathBuf,

    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "notos.toml")]
    pub config: PathBuf,

    /// Write the reply here instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
