// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! YAML sweep configuration with strict validation.
//!
//! Every section is optional; defaults reproduce the classic sweep over lengths
//! `{10, 1000, 100000}`, bounds `{10, 100000}` and every supported distribution.
//! Any invalid field is rejected before a single array is generated.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::error::{ConfigError, SortBenchError, SortBenchResult};
use crate::registry::AlgorithmRegistry;
use crate::report::DEFAULT_DELIMITER;
use crate::types::DistributionKind;

/// Raw sweep section as parsed from YAML (before validation).
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSweep {
    #[serde(default = "default_lengths")]
    lengths: Vec<usize>,
    #[serde(default = "default_value_bounds")]
    value_bounds: Vec<u32>,
    #[serde(default = "default_distributions")]
    distributions: Vec<DistributionKind>,
    #[serde(default = "default_identical_share")]
    identical_share: f64,
}

fn default_lengths() -> Vec<usize> {
    vec![10, 1_000, 100_000]
}

fn default_value_bounds() -> Vec<u32> {
    vec![10, 100_000]
}

fn default_distributions() -> Vec<DistributionKind> {
    DistributionKind::SUPPORTED.to_vec()
}

fn default_identical_share() -> f64 {
    0.1
}

impl Default for RawSweep {
    fn default() -> Self {
        Self {
            lengths: default_lengths(),
            value_bounds: default_value_bounds(),
            distributions: default_distributions(),
            identical_share: default_identical_share(),
        }
    }
}

/// Raw repeated-trial section.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawTrials {
    #[serde(default = "default_trial_length")]
    length: usize,
    #[serde(default = "default_trial_bound")]
    value_bound: u32,
    #[serde(default = "default_trial_count")]
    count: usize,
    #[serde(default = "default_trial_distribution")]
    distribution: DistributionKind,
    #[serde(default = "default_identical_share")]
    identical_share: f64,
}

fn default_trial_length() -> usize {
    10_000
}

fn default_trial_bound() -> u32 {
    10_000
}

fn default_trial_count() -> usize {
    100
}

fn default_trial_distribution() -> DistributionKind {
    DistributionKind::Random
}

impl Default for RawTrials {
    fn default() -> Self {
        Self {
            length: default_trial_length(),
            value_bound: default_trial_bound(),
            count: default_trial_count(),
            distribution: default_trial_distribution(),
            identical_share: default_identical_share(),
        }
    }
}

/// Output encoding of the record stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    #[default]
    Delimited,
    Json,
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "delimited" | "csv" => Ok(Self::Delimited),
            "json" | "jsonl" => Ok(Self::Json),
            _ => Err(format!("unknown report format: {}", s)),
        }
    }
}

/// Raw report section.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawReport {
    #[serde(default)]
    format: ReportFormat,
    #[serde(default = "default_delimiter")]
    delimiter: String,
    #[serde(default)]
    header: bool,
}

fn default_delimiter() -> String {
    DEFAULT_DELIMITER.to_string()
}

impl Default for RawReport {
    fn default() -> Self {
        Self {
            format: ReportFormat::default(),
            delimiter: default_delimiter(),
            header: false,
        }
    }
}

/// Raw root configuration file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    algorithms: Option<Vec<String>>,
    #[serde(default)]
    sweep: RawSweep,
    #[serde(default)]
    trials: RawTrials,
    #[serde(default)]
    report: RawReport,
}

/// Validated sweep: the full cross product of lengths, bounds and kinds.
#[derive(Debug, Clone, PartialEq)]
pub struct Sweep {
    pub lengths: Vec<usize>,
    pub value_bounds: Vec<u32>,
    pub distributions: Vec<DistributionKind>,
    /// Used only by [`DistributionKind::RandomWithIdenticalShare`].
    pub identical_share: f64,
}

impl Default for Sweep {
    fn default() -> Self {
        let raw = RawSweep::default();
        Self {
            lengths: raw.lengths,
            value_bounds: raw.value_bounds,
            distributions: raw.distributions,
            identical_share: raw.identical_share,
        }
    }
}

impl Sweep {
    /// Number of (length, bound, distribution) combinations, skipped ones included.
    pub fn combinations(&self) -> usize {
        self.lengths.len() * self.value_bounds.len() * self.distributions.len()
    }
}

/// Validated repeated-trial plan.
#[derive(Debug, Clone, PartialEq)]
pub struct TrialPlan {
    pub length: usize,
    pub value_bound: u32,
    pub count: usize,
    pub distribution: DistributionKind,
    pub identical_share: f64,
}

impl Default for TrialPlan {
    fn default() -> Self {
        let raw = RawTrials::default();
        Self {
            length: raw.length,
            value_bound: raw.value_bound,
            count: raw.count,
            distribution: raw.distribution,
            identical_share: raw.identical_share,
        }
    }
}

/// Validated output settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSettings {
    pub format: ReportFormat,
    pub delimiter: String,
    pub header: bool,
}

impl Default for ReportSettings {
    fn default() -> Self {
        let raw = RawReport::default();
        Self {
            format: raw.format,
            delimiter: raw.delimiter,
            header: raw.header,
        }
    }
}

/// Complete validated configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Fixed seed for a reproducible run; `None` seeds from entropy.
    pub seed: Option<u64>,
    /// Algorithm subset by name; `None` runs every registered algorithm.
    pub algorithms: Option<Vec<String>>,
    pub sweep: Sweep,
    pub trials: TrialPlan,
    pub report: ReportSettings,
}

/// Configuration loader with strict validation.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and validate configuration from a YAML file.
    pub fn load_file(path: impl AsRef<Path>) -> SortBenchResult<Config> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(SortBenchError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| SortBenchError::Io {
            context: "reading config file",
            source: e,
        })?;

        Self::load_string(&content)
    }

    /// Load and validate configuration from a YAML string.
    /// An empty document yields the defaults.
    pub fn load_string(content: &str) -> SortBenchResult<Config> {
        let raw: RawConfig = if content.trim().is_empty() {
            RawConfig::default()
        } else {
            serde_yaml::from_str(content).map_err(|e| SortBenchError::ConfigParse {
                message: format!("YAML parse error: {}", e),
            })?
        };

        Self::validate(raw)
    }

    fn validate(raw: RawConfig) -> SortBenchResult<Config> {
        let algorithms = match raw.algorithms {
            Some(names) => Some(Self::validate_algorithm_names(names)?),
            None => None,
        };

        let sweep = Sweep {
            lengths: raw.sweep.lengths,
            value_bounds: raw.sweep.value_bounds,
            distributions: raw.sweep.distributions,
            identical_share: raw.sweep.identical_share,
        };
        Self::validate_sweep(&sweep)?;

        let trials = TrialPlan {
            length: raw.trials.length,
            value_bound: raw.trials.value_bound,
            count: raw.trials.count,
            distribution: raw.trials.distribution,
            identical_share: raw.trials.identical_share,
        };
        Self::validate_trials(&trials)?;

        let report = ReportSettings {
            format: raw.report.format,
            delimiter: raw.report.delimiter,
            header: raw.report.header,
        };
        Self::validate_report(&report)?;

        Ok(Config {
            seed: raw.seed,
            algorithms,
            sweep,
            trials,
            report,
        })
    }

    /// Validate a sweep built from a file or from CLI overrides.
    pub fn validate_sweep(sweep: &Sweep) -> Result<(), ConfigError> {
        if sweep.lengths.is_empty() {
            return Err(ConfigError::MissingRequiredField {
                field: "lengths",
                context: "sweep".to_string(),
            });
        }
        if sweep.value_bounds.is_empty() {
            return Err(ConfigError::MissingRequiredField {
                field: "value_bounds",
                context: "sweep".to_string(),
            });
        }
        if sweep.distributions.is_empty() {
            return Err(ConfigError::MissingRequiredField {
                field: "distributions",
                context: "sweep".to_string(),
            });
        }

        if let Some(&length) = sweep.lengths.iter().find(|&&l| l == 0) {
            return Err(ConfigError::InvalidFieldValue {
                field: "lengths",
                value: length.to_string(),
                reason: "Array length must be greater than 0".to_string(),
            });
        }
        if let Some(&bound) = sweep.value_bounds.iter().find(|&&b| b < 1) {
            return Err(ConfigError::InvalidFieldValue {
                field: "value_bounds",
                value: bound.to_string(),
                reason: "Value upper bound must be greater than 0".to_string(),
            });
        }
        for kind in &sweep.distributions {
            Self::validate_distribution("distributions", *kind)?;
        }
        Self::validate_share(sweep.identical_share)
    }

    /// Validate a trial plan built from a file or from CLI overrides.
    pub fn validate_trials(plan: &TrialPlan) -> Result<(), ConfigError> {
        if plan.length == 0 {
            return Err(ConfigError::InvalidFieldValue {
                field: "length",
                value: "0".to_string(),
                reason: "Array length must be greater than 0".to_string(),
            });
        }
        if plan.value_bound < 1 {
            return Err(ConfigError::InvalidFieldValue {
                field: "value_bound",
                value: plan.value_bound.to_string(),
                reason: "Value upper bound must be greater than 0".to_string(),
            });
        }
        if plan.count == 0 {
            return Err(ConfigError::InvalidFieldValue {
                field: "count",
                value: "0".to_string(),
                reason: "At least one trial must be run".to_string(),
            });
        }
        Self::validate_distribution("distribution", plan.distribution)?;
        Self::validate_share(plan.identical_share)
    }

    /// Validate output settings built from a file or from CLI overrides.
    pub fn validate_report(report: &ReportSettings) -> Result<(), ConfigError> {
        if report.delimiter.is_empty() || report.delimiter.contains('\n') {
            return Err(ConfigError::InvalidFieldValue {
                field: "delimiter",
                value: format!("{:?}", report.delimiter),
                reason: "Delimiter must be non-empty and fit on one line".to_string(),
            });
        }
        Ok(())
    }

    fn validate_distribution(field: &'static str, kind: DistributionKind) -> Result<(), ConfigError> {
        if !kind.is_supported() {
            return Err(ConfigError::InvalidFieldValue {
                field,
                value: kind.to_string(),
                reason: "Distribution kind is not supported by the generator".to_string(),
            });
        }
        Ok(())
    }

    fn validate_share(share: f64) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&share) {
            return Err(ConfigError::InvalidFieldValue {
                field: "identical_share",
                value: share.to_string(),
                reason: "Share must be between 0 and 1".to_string(),
            });
        }
        Ok(())
    }

    fn validate_algorithm_names(names: Vec<String>) -> Result<Vec<String>, ConfigError> {
        if names.is_empty() {
            return Err(ConfigError::MissingRequiredField {
                field: "algorithms",
                context: "an explicit algorithm list".to_string(),
            });
        }

        let registry = AlgorithmRegistry::standard();
        let mut seen = HashSet::new();
        for name in &names {
            if !registry.contains(name) {
                return Err(ConfigError::UnknownAlgorithm { name: name.clone() });
            }
            if !seen.insert(name.to_ascii_lowercase()) {
                return Err(ConfigError::DuplicateAlgorithm { name: name.clone() });
            }
        }
        Ok(names)
    }
}
