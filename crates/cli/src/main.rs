//! Developer CLI for the build engine.
//!
//! Run with: `cargo run -p loadout-cli -- <command>`

mod commands;
mod config;
mod logging;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use commands::{Items, Records, Resolve, Stats};
use config::CliConfig;

/// Inspect, resolve and score character builds
#[derive(Parser)]
#[command(name = "loadout")]
#[command(about = "Build resolution and stat tools", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory holding items.ron and config.toml
    #[arg(short, long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Decode, resolve and aggregate a build query
    Stats(Stats),

    /// Show what link resolution adds to a build query
    Resolve(Resolve),

    /// List catalog items
    Items(Items),

    /// Convert between build queries and storage records
    Records(Records),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for LOADOUT_DATA_DIR and RUST_LOG)
    let _ = dotenvy::dotenv();

    logging::setup_logging();

    let cli = Cli::parse();
    let config = CliConfig::from_env().with_data_dir(cli.data_dir);

    match cli.command {
        Command::Stats(cmd) => cmd.execute(&config),
        Command::Resolve(cmd) => cmd.execute(&config),
        Command::Items(cmd) => cmd.execute(&config),
        Command::Records(cmd) => cmd.execute(&config),
    }
}
