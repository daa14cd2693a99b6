//! Convert between build queries and storage records.
//!
//! Records are the flat rows a storage layer keeps per equipped item:
//!
//! ```json
//! [{ "item_id": "wrangler", "category": "weapon", "index": 0, "amount": null }]
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use build_core::{BuildItemRecord, EngineConfig, from_records, to_records};
use clap::Parser;
use console::style;

use super::{load_oracles, print_json};
use crate::config::CliConfig;

/// Convert between build queries and storage records
#[derive(Parser)]
pub struct Records {
    /// Build query to export as records
    #[arg(value_name = "QUERY", conflicts_with = "from")]
    query: Option<String>,

    /// JSON records file to import as a query
    #[arg(long, value_name = "FILE")]
    from: Option<PathBuf>,

    /// Build name used when importing records
    #[arg(short, long, default_value = EngineConfig::DEFAULT_BUILD_NAME)]
    name: String,
}

impl Records {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let oracles = load_oracles(config)?;

        match (self.query, self.from) {
            (Some(query), _) => {
                let build = oracles
                    .engine()
                    .decode(&query)
                    .context("Failed to decode build query")?;
                print_json(&to_records(&build))
            }
            (None, Some(path)) => {
                let content = std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read records: {}", path.display()))?;
                let records: Vec<BuildItemRecord> = serde_json::from_str(&content)
                    .with_context(|| format!("Failed to parse records: {}", path.display()))?;

                let total = records.len();
                let build = from_records(oracles.catalog(), self.name, records);
                let placed = build.items.equipped_count();
                if placed < total {
                    tracing::warn!("{} of {} records not placed", total - placed, total);
                }

                println!(
                    "{} {}/{}",
                    style("Placed:").bold().cyan(),
                    placed,
                    total
                );
                println!("?{}", oracles.engine().encode(&build));
                Ok(())
            }
            (None, None) => anyhow::bail!("Pass a QUERY to export or --from FILE to import"),
        }
    }
}
