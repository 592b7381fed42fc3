// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Aggregated timings for the repeated-trial mode.

use std::time::Duration;

use crate::types::ArraySpecification;

/// Min / max / mean / median over a set of elapsed-time samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingStats {
    pub min: Duration,
    pub max: Duration,
    pub mean: Duration,
    pub median: Duration,
}

impl TimingStats {
    /// Calculate statistics from elapsed-time samples.
    pub fn from_samples(samples: &[Duration]) -> Self {
        if samples.is_empty() {
            return Self {
                min: Duration::ZERO,
                max: Duration::ZERO,
                mean: Duration::ZERO,
                median: Duration::ZERO,
            };
        }

        let mut sorted = samples.to_vec();
        sorted.sort_unstable();
        let len = sorted.len();

        let total: u128 = sorted.iter().map(|d| d.as_nanos()).sum();
        let mean_ns = total / len as u128;

        Self {
            min: sorted[0],
            max: sorted[len - 1],
            mean: Duration::from_nanos(mean_ns as u64),
            median: sorted[len / 2],
        }
    }

    /// Format a duration in human-readable form (auto-selects ns/μs/ms/s).
    pub fn format_duration(duration: Duration) -> String {
        let ns = duration.as_nanos();
        if ns < 1_000 {
            format!("{}ns", ns)
        } else if ns < 1_000_000 {
            format!("{:.2}μs", ns as f64 / 1_000.0)
        } else if ns < 1_000_000_000 {
            format!("{:.2}ms", ns as f64 / 1_000_000.0)
        } else {
            format!("{:.2}s", ns as f64 / 1_000_000_000.0)
        }
    }
}

/// Aggregated outcome of many independent trials of one algorithm.
#[derive(Debug, Clone, PartialEq)]
pub struct TrialSummary {
    pub specification: ArraySpecification,
    pub algorithm_name: String,
    pub trials: usize,
    pub stats: TimingStats,
}
