//! Decode, resolve and aggregate a build query.

use anyhow::{Context, Result};
use build_core::{Evaluation, ResistanceKind, StatsReport};
use clap::Parser;
use console::style;

use super::{OutputFormat, load_oracles, print_json};
use crate::config::CliConfig;

/// Decode, resolve and aggregate a build query
#[derive(Parser)]
pub struct Stats {
    /// Build query string (e.g. "name=Tank&helm=leto_mark_ii_helmet")
    #[arg(value_name = "QUERY")]
    query: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

impl Stats {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let oracles = load_oracles(config)?;
        let evaluation = oracles
            .engine()
            .evaluate(&self.query)
            .context("Failed to decode build query")?;

        match self.format {
            OutputFormat::Summary => print_summary(&evaluation),
            OutputFormat::Json => print_json(&evaluation)?,
        }
        Ok(())
    }
}

fn print_summary(evaluation: &Evaluation) {
    println!(
        "{} {}",
        style("Build:").bold().cyan(),
        evaluation.build.name
    );
    println!(
        "{} {}",
        style("Items:").bold().cyan(),
        evaluation.build.items.equipped_count()
    );
    println!();
    print_stats(&evaluation.stats);
    println!();
    println!("{} ?{}", style("Query:").bold().cyan(), evaluation.query);
}

pub(super) fn print_stats(stats: &StatsReport) {
    println!("{}", style("=== Stats ===").bold().green());
    println!("  Armor:        {:>8.2}", stats.armor);
    println!("  Health:       {:>8.2}", stats.health);
    println!("  Stamina:      {:>8.2}", stats.stamina);
    println!("  Weight:       {:>8.2}", stats.weight);
    println!(
        "  Weight class: {:>8}",
        style(stats.weight_class.as_ref()).bold().yellow()
    );
    println!();
    println!("{}", style("Resistances:").bold().yellow());
    for kind in [
        ResistanceKind::Fire,
        ResistanceKind::Blight,
        ResistanceKind::Shock,
        ResistanceKind::Bleed,
        ResistanceKind::Toxin,
    ] {
        println!("  {:<7} {}", kind.as_ref(), stats.resistances.get(kind));
    }
}
