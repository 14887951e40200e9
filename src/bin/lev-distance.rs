//! lev-distance -- print the edit distance between two strings.
//!
//! Usage: lev-distance [--format distance|similarity|json] <source> <target>

use anyhow::Context;
use clap::Parser;
use lev_distance::config::{CliConfig, OutputFormat};
use lev_distance::{DistanceReport, distance, similarity};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout carries only the result.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = CliConfig::parse();
    tracing::debug!(format = ?config.format, "comparing strings");

    match config.format {
        OutputFormat::Distance => println!("{}", distance(&config.source, &config.target)),
        OutputFormat::Similarity => println!("{}", similarity(&config.source, &config.target)),
        OutputFormat::Json => {
            let json = DistanceReport::compute(&config.source, &config.target)
                .to_json()
                .context("failed to render distance report")?;
            println!("{json}");
        }
    }

    Ok(())
}
