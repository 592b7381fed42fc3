// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! `sortbench trials` command - Repeated trials with timing statistics.

use clap::Args;
use sortbench_core::{
    BenchmarkRunner, Config, ConfigLoader, DistributionKind, RandomSource, ReportFormat,
};

use super::{load_config, select_algorithms, stdout_reporter};

#[derive(Args, Debug, Default)]
pub struct TrialsArgs {
    /// Array length
    #[arg(short, long)]
    pub length: Option<usize>,

    /// Exclusive value upper bound
    #[arg(short, long)]
    pub bound: Option<u32>,

    /// Number of trials per algorithm
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// Distribution kind of every trial array
    #[arg(short, long)]
    pub distribution: Option<DistributionKind>,

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
}

/// Apply command-line overrides on top of the loaded configuration.
fn apply_overrides(config: &mut Config, args: &TrialsArgs) {
    let plan = &mut config.trials;
    if let Some(length) = args.length {
        plan.length = length;
    }
    if let Some(bound) = args.bound {
        plan.value_bound = bound;
    }
    if let Some(count) = args.count {
        plan.count = count;
    }
    if let Some(distribution) = args.distribution {
        plan.distribution = distribution;
    }
    if let Some(share) = args.share {
        plan.identical_share = share;
    }
    if let Some(format) = args.format {
        config.report.format = format;
    }
}

pub fn execute(config_path: &str, args: &TrialsArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = load_config(config_path)?;
    apply_overrides(&mut config, args);
    ConfigLoader::validate_trials(&config.trials)?;

    let registry = select_algorithms(&args.algorithms, config.algorithms.as_deref())?;
    let rng = RandomSource::from_seed_option(args.seed.or(config.seed));

    let mut runner = BenchmarkRunner::new(registry, rng);
    let mut reporter = stdout_reporter(&config.report);
    let emitted = runner.run_trials(&config.trials, reporter.as_mut())?;

    if emitted == 0 {
        tracing::warn!("No summaries emitted: value bound exceeds length for a sorted distribution");
    }
    Ok(())
}
