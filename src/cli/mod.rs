//! CLI interface using clap
//!
//! Provides the command-line interface for CodeHarvest

mod commands;

pub use commands::*;

use clap::Parser;
use std::path::PathBuf;

/// CodeHarvest - extract code blocks from conversation dumps and notes
#[derive(Parser, Debug)]
#[command(name = "codeharvest")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Files to process
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output directory (default: extracted_code)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format (text, json)
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,

    /// Path to a configuration file
    #[arg(short, long, env = "CODEHARVEST_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
