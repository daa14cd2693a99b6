//! CLI subcommands.

mod items;
mod records;
mod resolve;
mod stats;

pub use items::Items;
pub use records::Records;
pub use resolve::Resolve;
pub use stats::Stats;

use anyhow::{Context, Result};
use build_content::ContentFactory;
use runtime::OracleManager;

use crate::config::CliConfig;

#[derive(Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Summary,
    /// JSON output
    Json,
}

/// Loads catalog and configuration from the configured data directory.
pub fn load_oracles(config: &CliConfig) -> Result<OracleManager> {
    let data_dir = config.data_dir();
    let factory = ContentFactory::new(&data_dir);
    OracleManager::load(&factory)
        .with_context(|| format!("Failed to load content from {}", data_dir.display()))
}

pub fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}
