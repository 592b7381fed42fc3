// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! `sortbench validate` command - Validate configuration file.

use sortbench_core::{ConfigLoader, ReportFormat};

fn join<T: std::fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn execute(file: &str) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!(file = %file, "Validating configuration");

    match ConfigLoader::load_file(file) {
        Ok(config) => {
            println!("✓ Configuration is valid");
            println!();
            match config.seed {
                Some(seed) => println!("Seed:                 {}", seed),
                None => println!("Seed:                 (entropy)"),
            }
            match &config.algorithms {
                Some(names) => println!("Algorithms:           {}", names.join(", ")),
                None => println!("Algorithms:           (all registered)"),
            }
            println!();
            println!("Sweep ({} combinations):", config.sweep.combinations());
            println!("  Lengths:            {}", join(&config.sweep.lengths));
            println!("  Value Bounds:       {}", join(&config.sweep.value_bounds));
            println!("  Distributions:      {}", join(&config.sweep.distributions));
            println!("  Identical Share:    {}", config.sweep.identical_share);
            println!();
            println!("Trials:");
            println!("  Length:             {}", config.trials.length);
            println!("  Value Bound:        {}", config.trials.value_bound);
            println!("  Count:              {}", config.trials.count);
            println!("  Distribution:       {}", config.trials.distribution);
            println!();
            println!("Report:");
            match config.report.format {
                ReportFormat::Delimited => println!(
                    "  Format:             delimited ({:?}, header: {})",
                    config.report.delimiter, config.report.header
                ),
                ReportFormat::Json => println!("  Format:             json lines"),
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("✗ Configuration validation failed:");
            eprintln!("  {}", e);
            std::process::exit(1);
        }
    }
}
