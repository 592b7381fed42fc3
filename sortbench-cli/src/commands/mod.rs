// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! CLI command modules and the helpers they share.

use std::io::{self, BufWriter, StdoutLock};
use std::path::Path;

use sortbench_core::{
    AlgorithmRegistry, Config, ConfigLoader, DelimitedReporter, JsonLinesReporter, ReportFormat,
    ReportSettings, Reporter, SortBenchResult,
};

pub mod list;
pub mod run;
pub mod trials;
pub mod validate;

/// Configuration file read when `--config` is not given.
pub const DEFAULT_CONFIG: &str = "sortbench.yaml";

/// Load the configuration, falling back to defaults when the default file is absent.
///
/// An explicitly named file that does not exist is still an error.
pub fn load_config(path: &str) -> SortBenchResult<Config> {
    if path == DEFAULT_CONFIG && !Path::new(path).exists() {
        tracing::debug!(path = %path, "No configuration file, using defaults");
        return Ok(Config::default());
    }

    tracing::info!(path = %path, "Loading configuration");
    ConfigLoader::load_file(path)
}

/// Registry restricted to the CLI or config selection, if any.
pub fn select_algorithms(
    flags: &[String],
    configured: Option<&[String]>,
) -> SortBenchResult<AlgorithmRegistry> {
    let registry = AlgorithmRegistry::standard();
    match (flags, configured) {
        ([], None) => Ok(registry),
        ([], Some(names)) => registry.select(names),
        (names, _) => registry.select(names),
    }
}

/// Buffered reporter over stdout for the chosen output settings.
pub fn stdout_reporter(settings: &ReportSettings) -> Box<dyn Reporter> {
    let writer: BufWriter<StdoutLock<'static>> = BufWriter::new(io::stdout().lock());
    match settings.format {
        ReportFormat::Delimited => Box::new(
            DelimitedReporter::new(writer)
                .delimiter(settings.delimiter.clone())
                .header(settings.header),
        ),
        ReportFormat::Json => Box::new(JsonLinesReporter::new(writer)),
    }
}

