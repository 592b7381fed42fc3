// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Sortbench CLI
//!
//! Command-line interface for benchmarking sort algorithms across input
//! distributions. Records go to stdout, logs to stderr.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{run::RunArgs, trials::TrialsArgs};

/// Sortbench - Sort algorithm benchmark over systematically varied inputs
#[derive(Parser)]
#[command(name = "sortbench")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = commands::DEFAULT_CONFIG)]
    pub config: String,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the full length x bound x distribution sweep
    Run(RunArgs),

    /// Run repeated trials for one array shape and print timing statistics
    Trials(TrialsArgs),

    /// List registered algorithms
    List,

    /// Validate a configuration file
    Validate {
        /// Path to the configuration file
        file: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging; stdout is reserved for records
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    // Dispatch to command handlers
    match cli.command {
        Commands::Run(args) => commands::run::execute(&cli.config, &args),
        Commands::Trials(args) => commands::trials::execute(&cli.config, &args),
        Commands::List => commands::list::execute(),
        Commands::Validate { file } => commands::validate::execute(&file),
    }
}
