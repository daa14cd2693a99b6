//! Show what link resolution adds to a build.

use anyhow::{Context, Result};
use build_core::{BuildItemRecord, ItemCategory, to_records};
use clap::Parser;
use console::style;

use super::{OutputFormat, load_oracles, print_json};
use crate::config::CliConfig;

/// Show what link resolution adds to a build query
#[derive(Parser)]
pub struct Resolve {
    /// Build query string
    #[arg(value_name = "QUERY")]
    query: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

impl Resolve {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let oracles = load_oracles(config)?;
        let engine = oracles.engine();

        let decoded = engine
            .decode(&self.query)
            .context("Failed to decode build query")?;
        let before = to_records(&decoded);
        let resolved = engine.resolve(decoded);
        let after = to_records(&resolved);

        let derived: Vec<&BuildItemRecord> = after
            .iter()
            .filter(|record| !before.contains(record))
            .collect();

        match self.format {
            OutputFormat::Summary => {
                println!(
                    "{} {}",
                    style("Build:").bold().cyan(),
                    resolved.name
                );
                println!();
                println!("{}", style("=== Derived by links ===").bold().green());
                if derived.is_empty() {
                    println!("  (nothing)");
                }
                for record in &derived {
                    println!("  {}", describe(record));
                }
                println!();
                println!(
                    "{} ?{}",
                    style("Resolved query:").bold().cyan(),
                    engine.encode(&resolved)
                );
            }
            OutputFormat::Json => print_json(&serde_json::json!({
                "name": resolved.name,
                "derived": derived,
                "query": engine.encode(&resolved),
            }))?,
        }
        Ok(())
    }
}

fn describe(record: &BuildItemRecord) -> String {
    let slot = match record.index {
        Some(index) => format!("{}[{}]", record.category, index),
        None => record.category.to_string(),
    };
    match (record.category, record.amount) {
        (ItemCategory::Trait, Some(amount)) => {
            format!("+ {:<12} {} x{}", slot, record.item_id, amount)
        }
        _ => format!("+ {:<12} {}", slot, record.item_id),
    }
}
