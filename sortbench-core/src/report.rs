// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Streaming record output.
//!
//! Reporters write each record as it arrives and keep nothing but their
//! writer, so memory stays bounded however large the sweep is.
//!
//! # Delimited format
//!
//! One line per record, fields joined with the delimiter (default `;`):
//!
//! ```text
//! length;value_bound;distribution;algorithm;elapsed_us
//! 1000;10;RandomWithIdenticalShare:0.1;MergeSort;84.211
//! ```
//!
//! Elapsed time is in microseconds with three decimals. Trial summaries use
//! `length;value_bound;distribution;algorithm;trials;min_us;max_us;mean_us;median_us`.

use std::io::Write;
use std::time::Duration;

use serde::Serialize;

use crate::error::{SortBenchError, SortBenchResult};
use crate::stats::TrialSummary;
use crate::types::{BenchmarkRecord, DistributionKind};

/// Default field delimiter of the delimited format.
pub const DEFAULT_DELIMITER: &str = ";";

/// Consumer of benchmark output.
pub trait Reporter {
    /// Emit one single-shot record.
    fn record(&mut self, record: &BenchmarkRecord) -> SortBenchResult<()>;

    /// Emit one repeated-trial summary.
    fn summary(&mut self, summary: &TrialSummary) -> SortBenchResult<()>;

    /// Flush buffered output.
    fn finish(&mut self) -> SortBenchResult<()> {
        Ok(())
    }
}

fn io_error(context: &'static str) -> impl FnOnce(std::io::Error) -> SortBenchError {
    move |source| SortBenchError::Io { context, source }
}

fn micros(duration: Duration) -> String {
    format!("{:.3}", duration.as_nanos() as f64 / 1_000.0)
}

/// Delimited text reporter, the canonical output contract.
pub struct DelimitedReporter<W: Write> {
    writer: W,
    delimiter: String,
    header: bool,
    header_written: bool,
}

impl<W: Write> DelimitedReporter<W> {
    /// Create a reporter using the default `;` delimiter and no header.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            delimiter: DEFAULT_DELIMITER.to_string(),
            header: false,
            header_written: false,
        }
    }

    /// Set the field delimiter.
    pub fn delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Set whether a column header precedes the first line.
    pub fn header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }

    /// Consume the reporter and return the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_fields(&mut self, fields: &[String]) -> SortBenchResult<()> {
        writeln!(self.writer, "{}", fields.join(self.delimiter.as_str()))
            .map_err(io_error("writing delimited line"))
    }

    fn write_header_once(&mut self, columns: &[&str]) -> SortBenchResult<()> {
        if self.header && !self.header_written {
            let fields: Vec<String> = columns.iter().map(|c| c.to_string()).collect();
            self.write_fields(&fields)?;
            self.header_written = true;
        }
        Ok(())
    }
}

impl<W: Write> Reporter for DelimitedReporter<W> {
    fn record(&mut self, record: &BenchmarkRecord) -> SortBenchResult<()> {
        self.write_header_once(&[
            "length",
            "value_bound",
            "distribution",
            "algorithm",
            "elapsed_us",
        ])?;

        let spec = &record.specification;
        self.write_fields(&[
            spec.length().to_string(),
            spec.value_bound().to_string(),
            spec.distribution_label(),
            record.algorithm_name.clone(),
            micros(record.elapsed),
        ])
    }

    fn summary(&mut self, summary: &TrialSummary) -> SortBenchResult<()> {
        self.write_header_once(&[
            "length",
            "value_bound",
            "distribution",
            "algorithm",
            "trials",
            "min_us",
            "max_us",
            "mean_us",
            "median_us",
        ])?;

        let spec = &summary.specification;
        self.write_fields(&[
            spec.length().to_string(),
            spec.value_bound().to_string(),
            spec.distribution_label(),
            summary.algorithm_name.clone(),
            summary.trials.to_string(),
            micros(summary.stats.min),
            micros(summary.stats.max),
            micros(summary.stats.mean),
            micros(summary.stats.median),
        ])
    }

    fn finish(&mut self) -> SortBenchResult<()> {
        self.writer.flush().map_err(io_error("flushing output"))
    }
}

#[derive(Serialize)]
struct RecordLine<'a> {
    length: usize,
    value_bound: u32,
    distribution: DistributionKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    identical_share: Option<f64>,
    algorithm: &'a str,
    elapsed_ns: u64,
}

#[derive(Serialize)]
struct SummaryLine<'a> {
    length: usize,
    value_bound: u32,
    distribution: DistributionKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    identical_share: Option<f64>,
    algorithm: &'a str,
    trials: usize,
    min_ns: u64,
    max_ns: u64,
    mean_ns: u64,
    median_ns: u64,
}

fn share_of(distribution: DistributionKind, share: f64) -> Option<f64> {
    (distribution == DistributionKind::RandomWithIdenticalShare).then_some(share)
}

/// JSON Lines reporter: one `serde_json` object per line.
pub struct JsonLinesReporter<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesReporter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_line<T: Serialize>(&mut self, line: &T) -> SortBenchResult<()> {
        serde_json::to_writer(&mut self.writer, line)?;
        self.writer
            .write_all(b"\n")
            .map_err(io_error("writing json line"))
    }
}

impl<W: Write> Reporter for JsonLinesReporter<W> {
    fn record(&mut self, record: &BenchmarkRecord) -> SortBenchResult<()> {
        let spec = &record.specification;
        self.write_line(&RecordLine {
            length: spec.length(),
            value_bound: spec.value_bound(),
            distribution: spec.distribution(),
            identical_share: share_of(spec.distribution(), spec.identical_share()),
            algorithm: &record.algorithm_name,
            elapsed_ns: record.elapsed.as_nanos() as u64,
        })
    }

    fn summary(&mut self, summary: &TrialSummary) -> SortBenchResult<()> {
        let spec = &summary.specification;
        self.write_line(&SummaryLine {
            length: spec.length(),
            value_bound: spec.value_bound(),
            distribution: spec.distribution(),
            identical_share: share_of(spec.distribution(), spec.identical_share()),
            algorithm: &summary.algorithm_name,
            trials: summary.trials,
            min_ns: summary.stats.min.as_nanos() as u64,
            max_ns: summary.stats.max.as_nanos() as u64,
            mean_ns: summary.stats.mean.as_nanos() as u64,
            median_ns: summary.stats.median.as_nanos() as u64,
        })
    }

    fn finish(&mut self) -> SortBenchResult<()> {
        self.writer.flush().map_err(io_error("flushing output"))
    }
}

/// Keeps everything it receives. Intended for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryReporter {
    pub records: Vec<BenchmarkRecord>,
    pub summaries: Vec<TrialSummary>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Reporter for MemoryReporter {
    fn record(&mut self, record: &BenchmarkRecord) -> SortBenchResult<()> {
        self.records.push(record.clone());
        Ok(())
    }

    fn summary(&mut self, summary: &TrialSummary) -> SortBenchResult<()> {
        self.summaries.push(summary.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::TimingStats;
    use crate::types::ArraySpecification;

    fn record(kind: DistributionKind, elapsed_ns: u64) -> BenchmarkRecord {
        BenchmarkRecord::new(
            ArraySpecification::new(1000, 10, kind, 0.1),
            "MergeSort",
            Duration::from_nanos(elapsed_ns),
        )
    }

    fn summary() -> TrialSummary {
        TrialSummary {
            specification: ArraySpecification::new(100, 50, DistributionKind::Random, 0.1),
            algorithm_name: "HeapSort".to_string(),
            trials: 3,
            stats: TimingStats {
                min: Duration::from_nanos(1_000),
                max: Duration::from_nanos(3_000),
                mean: Duration::from_nanos(2_000),
                median: Duration::from_nanos(2_500),
            },
        }
    }

    #[test]
    fn test_delimited_record_line() {
        let mut reporter = DelimitedReporter::new(Vec::new());
        reporter
            .record(&record(DistributionKind::SortedAscending, 84_211))
            .unwrap();

        let out = String::from_utf8(reporter.into_inner()).unwrap();
        assert_eq!(out, "1000;10;SortedAscending;MergeSort;84.211\n");
    }

    #[test]
    fn test_delimited_share_suffix() {
        let mut reporter = DelimitedReporter::new(Vec::new()).delimiter(",");
        reporter
            .record(&record(DistributionKind::RandomWithIdenticalShare, 1_500))
            .unwrap();

        let out = String::from_utf8(reporter.into_inner()).unwrap();
        assert_eq!(out, "1000,10,RandomWithIdenticalShare:0.1,MergeSort,1.500\n");
    }

    #[test]
    fn test_delimited_header_written_once() {
        let mut reporter = DelimitedReporter::new(Vec::new()).header(true);
        reporter.record(&record(DistributionKind::Random, 1)).unwrap();
        reporter.record(&record(DistributionKind::Random, 2)).unwrap();
        reporter.finish().unwrap();

        let out = String::from_utf8(reporter.into_inner()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "length;value_bound;distribution;algorithm;elapsed_us");
        assert_eq!(lines[2], "1000;10;Random;MergeSort;0.002");
    }

    #[test]
    fn test_delimited_summary_line() {
        let mut reporter = DelimitedReporter::new(Vec::new());
        reporter.summary(&summary()).unwrap();

        let out = String::from_utf8(reporter.into_inner()).unwrap();
        assert_eq!(out, "100;50;Random;HeapSort;3;1.000;3.000;2.000;2.500\n");
    }

    #[test]
    fn test_json_lines() {
        let mut reporter = JsonLinesReporter::new(Vec::new());
        reporter
            .record(&record(DistributionKind::RandomWithIdenticalShare, 42))
            .unwrap();
        reporter.record(&record(DistributionKind::Random, 7)).unwrap();
        reporter.summary(&summary()).unwrap();

        let out = String::from_utf8(reporter.into_inner()).unwrap();
        let lines: Vec<serde_json::Value> = out
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0]["distribution"], "random_with_identical_share");
        assert_eq!(lines[0]["identical_share"], 0.1);
        assert_eq!(lines[0]["elapsed_ns"], 42);
        assert!(lines[1].get("identical_share").is_none());
        assert_eq!(lines[2]["trials"], 3);
        assert_eq!(lines[2]["median_ns"], 2_500);
    }

    #[test]
    fn test_memory_reporter() {
        let mut reporter = MemoryReporter::new();
        reporter.record(&record(DistributionKind::Random, 1)).unwrap();
        reporter.summary(&summary()).unwrap();
        assert_eq!(reporter.records.len(), 1);
        assert_eq!(reporter.summaries.len(), 1);
    }
}
