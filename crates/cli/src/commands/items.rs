//! List catalog items.

use std::str::FromStr;

use anyhow::Result;
use build_core::{CatalogOracle, Item, ItemCategory};
use clap::Parser;
use console::style;

use super::{OutputFormat, load_oracles, print_json};
use crate::config::CliConfig;

/// List catalog items
#[derive(Parser)]
pub struct Items {
    /// Only list one category (e.g. weapon, trait, relicfragment)
    #[arg(short, long, value_name = "CATEGORY", value_parser = parse_category)]
    category: Option<ItemCategory>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

impl Items {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let oracles = load_oracles(config)?;
        let items: Vec<Item> = match self.category {
            Some(category) => oracles.catalog().items_in(category).cloned().collect(),
            None => oracles.catalog().all_items(),
        };

        match self.format {
            OutputFormat::Summary => print_summary(&items),
            OutputFormat::Json => print_json(&items)?,
        }
        Ok(())
    }
}

fn parse_category(raw: &str) -> std::result::Result<ItemCategory, String> {
    ItemCategory::from_str(raw).map_err(|_| format!("unknown category '{}'", raw))
}

fn print_summary(items: &[Item]) {
    println!(
        "{} {}",
        style("Items:").bold().cyan(),
        items.len()
    );
    println!();
    for item in items {
        let link = item
            .linked
            .as_ref()
            .map(|link| format!(" -> {} '{}'", link.category, link.name))
            .unwrap_or_default();
        println!(
            "  {:<14} {:<26} {}{}",
            style(item.category()).yellow(),
            item.id,
            item.name,
            style(link).dim()
        );
    }
}
