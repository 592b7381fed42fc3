//! Sortbench Core Library
//!
//! Benchmarks classic in-memory sort algorithms across systematically varied
//! input distributions. Provides the array generator, the four sort
//! algorithms, the algorithm registry, the benchmark runner and streaming
//! reporters.

pub mod algorithms;
pub mod config;
pub mod error;
pub mod generator;
pub mod registry;
pub mod report;
pub mod rng;
pub mod runner;
pub mod stats;
pub mod types;

// Re-export commonly used types
pub use config::{Config, ConfigLoader, ReportFormat, ReportSettings, Sweep, TrialPlan};
pub use error::{ConfigError, InvalidArgumentError, SortBenchError, SortBenchResult};
pub use registry::{AlgorithmDescriptor, AlgorithmRegistry};
pub use report::{DelimitedReporter, JsonLinesReporter, MemoryReporter, Reporter};
pub use rng::RandomSource;
pub use runner::{BenchmarkRunner, SweepSummary};
pub use stats::{TimingStats, TrialSummary};
pub use types::{ArraySpecification, BenchmarkRecord, DistributionKind};
