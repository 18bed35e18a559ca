//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Prism - booking analytics and reporting
#[derive(Parser)]
#[command(name = "prism")]
#[command(about = "Analyze booking exports and render analytics reports")]
#[command(version)]
pub struct Cli {
    /// Directory holding the CSV exports (overrides config)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Output directory for rendered reports (overrides config)
    #[arg(long, global = true)]
    pub out_dir: Option<PathBuf>,

    /// SQLite database path (overrides config)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the full pipeline: ingest, analyze, persist, render
    Run {
        /// How many top phrases to keep in the vocabulary analysis
        #[arg(long)]
        top: Option<usize>,

        /// Consolidated document formats to render (html, markdown, json)
        #[arg(long, value_delimiter = ',')]
        format: Option<Vec<String>>,

        /// Render only the consolidated documents, skip the site pages
        #[arg(long)]
        no_site: bool,
    },
    /// Re-render reports from the latest stored analysis snapshot
    Report {
        /// Render a specific snapshot instead of the latest
        #[arg(long)]
        snapshot: Option<i64>,
    },
    /// Show recent pipeline runs
    History {
        /// How many runs to show
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
    /// Print the resolved configuration as TOML
    Config,
}
