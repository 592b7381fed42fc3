// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Benchmark runner for timing every registered algorithm against identical input.
//!
//! For each (length, bound, distribution) combination one base array is
//! generated; every algorithm then sorts its own copy under a monotonic timer.
//! Records are forwarded to the reporter as soon as they are produced.

use std::hint::black_box;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::algorithms::is_sorted;
use crate::config::{Sweep, TrialPlan};
use crate::error::{SortBenchError, SortBenchResult};
use crate::generator;
use crate::registry::{AlgorithmDescriptor, AlgorithmRegistry};
use crate::report::Reporter;
use crate::rng::RandomSource;
use crate::stats::{TimingStats, TrialSummary};
use crate::types::{ArraySpecification, BenchmarkRecord, DistributionKind};

/// Counters for one completed sweep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepSummary {
    /// Combinations visited, skipped ones included.
    pub combinations: usize,
    /// Combinations skipped by the sorted-family bound policy.
    pub skipped: usize,
    /// Records forwarded to the reporter.
    pub records: usize,
}

/// Build the base array for a specification.
///
/// Returns `Ok(None)` when the sorted-family policy skips the combination
/// (`bound > length`). Generator errors are returned unchanged.
pub fn generate(
    rng: &mut RandomSource,
    spec: &ArraySpecification,
) -> SortBenchResult<Option<Vec<u32>>> {
    if spec.is_skipped() {
        return Ok(None);
    }

    let length = spec.length();
    let bound = spec.value_bound();
    let array = match spec.distribution() {
        DistributionKind::SortedAscending => generator::sorted_ascending(length, bound),
        DistributionKind::SortedDescending => generator::sorted_descending(length, bound),
        DistributionKind::AscendingWithOneSwap => {
            generator::sorted_ascending_with_one_swap(rng, length, bound)
        }
        DistributionKind::Random => generator::uniform_random(rng, length, bound)?,
        DistributionKind::RandomWithIdenticalShare => {
            generator::uniform_random_with_identical_share(
                rng,
                length,
                bound,
                spec.identical_share(),
            )?
        }
        DistributionKind::AllIdentical => {
            warn!(distribution = %spec.distribution(), "Distribution kind has no generator");
            return Err(SortBenchError::UnsupportedDistribution(spec.distribution()));
        }
    };

    Ok(Some(array))
}

/// Sort a private copy of `base` and return the elapsed time of the sort alone.
pub fn time_sort(
    algorithm: &AlgorithmDescriptor,
    base: &[u32],
    value_bound: u32,
    rng: &mut RandomSource,
) -> Duration {
    let mut array = base.to_vec();

    let start = Instant::now();
    algorithm.sort(black_box(&mut array), value_bound, rng);
    let elapsed = start.elapsed();

    debug_assert!(is_sorted(&array), "{} left its input unsorted", algorithm.name());
    elapsed
}

/// Runs sweeps and repeated trials over a fixed algorithm registry.
///
/// The runner owns the single random source of a run, so seeding it once
/// makes every generated array and every quicksort pivot reproducible.
pub struct BenchmarkRunner {
    registry: AlgorithmRegistry,
    rng: RandomSource,
}

impl BenchmarkRunner {
    /// Create a new runner.
    pub fn new(registry: AlgorithmRegistry, rng: RandomSource) -> Self {
        Self { registry, rng }
    }

    pub fn registry(&self) -> &AlgorithmRegistry {
        &self.registry
    }

    /// Run the full cross product of a sweep, streaming records to `reporter`.
    ///
    /// Stops at the first error; an invalid generator argument aborts the sweep.
    pub fn run_sweep<R: Reporter + ?Sized>(
        &mut self,
        sweep: &Sweep,
        reporter: &mut R,
    ) -> SortBenchResult<SweepSummary> {
        info!(
            lengths = ?sweep.lengths,
            value_bounds = ?sweep.value_bounds,
            distributions = sweep.distributions.len(),
            algorithms = self.registry.len(),
            seed = ?self.rng.seed(),
            "Starting sweep"
        );

        let mut summary = SweepSummary::default();
        if let Err(err) = self.visit_sweep(sweep, reporter, &mut summary) {
            finish_after_error(reporter);
            return Err(err);
        }

        reporter.finish()?;
        info!(
            combinations = summary.combinations,
            skipped = summary.skipped,
            records = summary.records,
            "Sweep complete"
        );
        Ok(summary)
    }

    fn visit_sweep<R: Reporter + ?Sized>(
        &mut self,
        sweep: &Sweep,
        reporter: &mut R,
        summary: &mut SweepSummary,
    ) -> SortBenchResult<()> {
        for &length in &sweep.lengths {
            for &value_bound in &sweep.value_bounds {
                for &distribution in &sweep.distributions {
                    let spec = ArraySpecification::new(
                        length,
                        value_bound,
                        distribution,
                        sweep.identical_share,
                    );

                    summary.combinations += 1;
                    match self.run_combination(&spec, reporter)? {
                        Some(records) => summary.records += records,
                        None => summary.skipped += 1,
                    }
                }
            }
        }
        Ok(())
    }

    /// Generate one base array and time every algorithm against it.
    ///
    /// Returns the number of records emitted, or `None` if the combination was
    /// skipped by the bound policy.
    pub fn run_combination<R: Reporter + ?Sized>(
        &mut self,
        spec: &ArraySpecification,
        reporter: &mut R,
    ) -> SortBenchResult<Option<usize>> {
        let Some(base) = generate(&mut self.rng, spec)? else {
            debug!(
                length = spec.length(),
                value_bound = spec.value_bound(),
                distribution = %spec.distribution(),
                "Skipping combination: value bound exceeds length"
            );
            return Ok(None);
        };

        debug!(
            length = spec.length(),
            value_bound = spec.value_bound(),
            distribution = %spec.distribution_label(),
            "Generated base array"
        );

        let mut emitted = 0;
        for algorithm in self.registry.iter() {
            let elapsed = time_sort(algorithm, &base, spec.value_bound(), &mut self.rng);
            debug!(
                algorithm = algorithm.name(),
                elapsed_ns = elapsed.as_nanos() as u64,
                "Timed sort"
            );

            reporter.record(&BenchmarkRecord::new(*spec, algorithm.name(), elapsed))?;
            emitted += 1;
        }

        Ok(Some(emitted))
    }

    /// Repeated-trial mode: `plan.count` fresh arrays per algorithm, aggregated
    /// into one summary per algorithm.
    ///
    /// Returns the number of summaries emitted.
    pub fn run_trials<R: Reporter + ?Sized>(
        &mut self,
        plan: &TrialPlan,
        reporter: &mut R,
    ) -> SortBenchResult<usize> {
        let spec = ArraySpecification::new(
            plan.length,
            plan.value_bound,
            plan.distribution,
            plan.identical_share,
        );

        info!(
            length = plan.length,
            value_bound = plan.value_bound,
            distribution = %spec.distribution_label(),
            trials = plan.count,
            algorithms = self.registry.len(),
            seed = ?self.rng.seed(),
            "Starting repeated trials"
        );

        if spec.is_skipped() {
            debug!("Skipping trials: value bound exceeds length");
            reporter.finish()?;
            return Ok(0);
        }

        match self.trial_summaries(plan, &spec, reporter) {
            Ok(emitted) => {
                reporter.finish()?;
                Ok(emitted)
            }
            Err(err) => {
                finish_after_error(reporter);
                Err(err)
            }
        }
    }

    fn trial_summaries<R: Reporter + ?Sized>(
        &mut self,
        plan: &TrialPlan,
        spec: &ArraySpecification,
        reporter: &mut R,
    ) -> SortBenchResult<usize> {
        let mut emitted = 0;
        for algorithm in self.registry.iter() {
            let mut samples = Vec::with_capacity(plan.count);
            for _ in 0..plan.count {
                let Some(base) = generate(&mut self.rng, spec)? else {
                    break;
                };
                samples.push(time_sort(algorithm, &base, spec.value_bound(), &mut self.rng));
            }

            let stats = TimingStats::from_samples(&samples);
            debug!(
                algorithm = algorithm.name(),
                mean = %TimingStats::format_duration(stats.mean),
                "Trials complete"
            );

            reporter.summary(&TrialSummary {
                specification: *spec,
                algorithm_name: algorithm.name().to_string(),
                trials: samples.len(),
                stats,
            })?;
            emitted += 1;
        }
        Ok(emitted)
    }
}

/// Flush what was already written; the original error takes precedence.
fn finish_after_error<R: Reporter + ?Sized>(reporter: &mut R) {
    if let Err(flush_err) = reporter.finish() {
        warn!(error = %flush_err, "Failed to flush output after error");
    }
}
