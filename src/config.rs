//! Command-line configuration for the `lev-distance` binary.

use clap::{Parser, ValueEnum};

/// What the binary prints for a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// The integer edit distance.
    #[default]
    Distance,
    /// The similarity ratio in `[0.0, 1.0]`.
    Similarity,
    /// The full [`DistanceReport`](crate::report::DistanceReport) as JSON.
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "lev-distance")]
#[command(about = "Print the Levenshtein edit distance between two strings")]
#[command(version)]
pub struct CliConfig {
    #[arg(help = "String to transform")]
    pub source: String,
    #[arg(help = "String to transform it into")]
    pub target: String,
    #[arg(long, short, value_enum, default_value = "distance", help = "Output format")]
    pub format: OutputFormat,
}
