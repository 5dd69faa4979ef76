//! Takt CLI
//!
//! Command-line interface for validating Takt aggregation configuration files
//! before rolling them out to a stage.
//!
//! # Usage
//!
//! ```bash
//! takt --help
//! takt validate --config aggregation.yaml
//! takt validate --config aggregation.yaml --json
//! ```

#![deny(unsafe_code)]

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use shared::config::{duration, loader, AggregationConfig};
use shared::models::MetricType;

/// Takt CLI - Aggregation configuration tooling
#[derive(Debug, Parser)]
#[command(name = "takt")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate an aggregation configuration file and show the effective settings
    Validate {
        /// Path to the aggregation configuration file
        #[arg(short, long, env = "TAKT_AGGREGATION_CONFIG")]
        config: PathBuf,

        /// Print the effective configuration as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Validate { config, json }) => validate_config(&config, json),
        None => {
            println!("Takt CLI v{}", env!("CARGO_PKG_VERSION"));
            println!("Use --help for usage information");
            Ok(())
        }
    }
}

/// Loads a configuration file, validates it and prints the effective settings.
fn validate_config(path: &Path, json: bool) -> Result<()> {
    let config = loader::load_from_path(path)
        .with_context(|| format!("Failed to load '{}'", path.display()))?;

    config
        .validate()
        .with_context(|| format!("Configuration '{}' is invalid", path.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    println!("Configuration '{}' is valid", path.display());
    print_summary(&config);
    Ok(())
}

/// Prints the settings the stage would run with.
fn print_summary(config: &AggregationConfig) {
    if config.rules.is_empty() {
        println!("  interval: {}", duration::format(config.interval));
    } else {
        println!("  rules: {} (global interval unused)", config.rules.len());
        for rule in &config.rules {
            println!("    {}: {}", rule.name, duration::format(rule.interval));
        }
    }

    let bypassed: Vec<String> = [
        MetricType::Counter,
        MetricType::Gauge,
        MetricType::Histogram,
        MetricType::Summary,
    ]
    .into_iter()
    .filter(|metric_type| config.is_pass_through(*metric_type))
    .map(|metric_type| metric_type.to_string())
    .collect();

    if bypassed.is_empty() {
        println!("  pass-through: none");
    } else {
        println!("  pass-through: {}", bypassed.join(", "));
    }
}
