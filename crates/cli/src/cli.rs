//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// A quality gate that validates dbt build artifacts against configurable checks
#[derive(Parser)]
#[command(name = "gatecheck")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Location of the config file
    #[arg(
        long = "config-file",
        env = "GATECHECK_CONFIG",
        value_name = "PATH",
        default_value = crate::config::DEFAULT_CONFIG_FILE
    )]
    pub config_file: PathBuf,

    /// Directory containing the dbt artifacts (overrides the config file)
    #[arg(long = "artifacts-dir", value_name = "PATH")]
    pub artifacts_dir: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Write the full results as JSON to a file
    #[arg(long = "output-file", value_name = "PATH")]
    pub output_file: Option<PathBuf>,

    /// Write a markdown file listing failed checks, for a GitHub PR comment
    #[arg(long)]
    pub create_pr_comment_file: bool,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Csv,
    Json,
    Junit,
    Sarif,
    Tap,
}
