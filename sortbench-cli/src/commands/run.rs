// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! `sortbench run` command - Full sweep over the configured cross product.

use clap::Args;
use sortbench_core::{BenchmarkRunner, ConfigLoader, DistributionKind, RandomSource, ReportFormat};

use super::{load_config, select_algorithms, stdout_reporter};

#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// Array length (repeatable, replaces the configured list)
    #[arg(short, long = "length")]
    pub lengths: Vec<usize>,

    /// Exclusive value upper bound (repeatable, replaces the configured list)
    #[arg(short, long = "bound")]
    pub bounds: Vec<u32>,

    /// Distribution kind, e.g. sorted_ascending or random (repeatable)
    #[arg(short, long = "distribution")]
    pub distributions: Vec<DistributionKind>,

    /// Share of positions holding the identical value
    #[arg(long)]
    pub share: Option<f64>,

    /// Seed for a reproducible run
    #[arg(long)]
    pub seed: Option<u64>,

    /// Algorithm to run (repeatable; default: all)
    #[arg(short, long = "algorithm")]
    pub algorithms: Vec<String>,

    /// Output format: delimited or json
    #[arg(short, long)]
    pub format: Option<ReportFormat>,

    /// Field delimiter of the delimited format
    #[arg(long)]
    pub delimiter: Option<String>,

    /// Print a column header before the first record
    #[arg(long)]
    pub header: bool,
}

pub fn execute(config_path: &str, args: &RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = load_config(config_path)?;

    if !args.lengths.is_empty() {
        config.sweep.lengths = args.lengths.clone();
    }
    if !args.bounds.is_empty() {
        config.sweep.value_bounds = args.bounds.clone();
    }
    if !args.distributions.is_empty() {
        config.sweep.distributions = args.distributions.clone();
    }
    if let Some(share) = args.share {
        config.sweep.identical_share = share;
    }
    if let Some(format) = args.format {
        config.report.format = format;
    }
    if let Some(delimiter) = &args.delimiter {
        config.report.delimiter = delimiter.clone();
    }
    if args.header {
        config.report.header = true;
    }
    ConfigLoader::validate_sweep(&config.sweep)?;
    ConfigLoader::validate_report(&config.report)?;

    let registry = select_algorithms(&args.algorithms, config.algorithms.as_deref())?;
    let rng = RandomSource::from_seed_option(args.seed.or(config.seed));
    tracing::info!(
        combinations = config.sweep.combinations(),
        algorithms = ?registry.names(),
        "Running sweep"
    );

    let mut runner = BenchmarkRunner::new(registry, rng);
    let mut reporter = stdout_reporter(&config.report);
    let summary = runner.run_sweep(&config.sweep, reporter.as_mut())?;

    tracing::info!(
        records = summary.records,
        skipped = summary.skipped,
        "Sweep finished"
    );
    Ok(())
}
