//! The prism binary.

mod cli;
mod commands;
mod progress;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use prism_core::config::{CliOverrides, PrismConfig};
use prism_core::errors::PipelineError;

use crate::cli::{Cli, Commands};

fn main() {
    let args = Cli::parse();
    init_logging();

    let overrides = CliOverrides {
        data_dir: args.data_dir.clone(),
        out_dir: args.out_dir.clone(),
        db_path: args.db.clone(),
        top_phrases: match args.command {
            Commands::Run { top, .. } => top,
            _ => None,
        },
        formats: match &args.command {
            Commands::Run { format, .. } => format.clone(),
            _ => None,
        },
        site: match args.command {
            Commands::Run { no_site, .. } if no_site => Some(false),
            _ => None,
        },
    };

    let config = match PrismConfig::load(std::path::Path::new("."), Some(&overrides)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("configuration error: {e}");
            std::process::exit(2);
        }
    };

    let result = match args.command {
        Commands::Run { .. } => commands::run::execute(&config),
        Commands::Report { snapshot } => commands::report::execute(&config, snapshot),
        Commands::History { limit } => commands::history::execute(&config, limit),
        Commands::Config => commands::config::execute(&config),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        let code = match e {
            PipelineError::Config(_) => 2,
            _ => 1,
        };
        std::process::exit(code);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("PRISM_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
