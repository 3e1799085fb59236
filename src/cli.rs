use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Seeded seasonal-ARIMA synthetic series generator.
#[derive(Parser)]
#[command(
    name = "rnd",
    version,
    about = "Seeded seasonal-ARIMA synthetic series generator"
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
    /// Generate a batch and export its series.
    Generate(GenerateArgs),
    /// Print the configuration key of a model configuration.
    Key(KeyArgs),
    /// Describe a configuration key or resolve a series moniker.
    Inspect(InspectArgs),
}

/// Arguments for the `generate` subcommand.
#[derive(clap::Args)]
pub struct GenerateArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "rnd.toml")]
    pub config: PathBuf,

    /// Override the seed from config.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Override the number of series from config.
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// Override the CSV summary report path from config.
    #[arg(short, long)]
    pub report: Option<PathBuf>,

    /// Override the JSON series output path from config.
    #[arg(short, long)]
    pub json: Option<PathBuf>,
}

/// Arguments for the `key` subcommand.
#[derive(clap::Args)]
pub struct KeyArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "rnd.toml")]
    pub config: PathBuf,

    /// Override the seed from config.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Print the moniker of every series instead of the key.
    #[arg(long)]
    pub children: bool,
}

/// Arguments for the `inspect` subcommand.
#[derive(clap::Args)]
pub struct InspectArgs {
    /// Configuration key, or series moniker `<key>#<index>`.
    pub target: String,
}
