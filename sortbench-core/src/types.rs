// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Data model shared by the generator, runner and reporters.
//!
//! An [`ArraySpecification`] both drives generation and labels output, so it is
//! immutable once constructed and cheap to copy into every record.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Structural shape imposed on a generated benchmark input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistributionKind {
    /// Linear ramp scaled into `[0, bound)`.
    SortedAscending,
    /// Mirror of the ascending ramp.
    SortedDescending,
    /// Ascending ramp with two distinct positions swapped.
    AscendingWithOneSwap,
    /// Every element drawn independently from `[0, bound)`.
    Random,
    /// A fixed share of positions holds one common value, the rest differ from it.
    RandomWithIdenticalShare,
    /// Declared but not produced by the generator. Selecting it fails fast.
    AllIdentical,
}

impl DistributionKind {
    /// Every kind the generator can produce, in sweep order.
    pub const SUPPORTED: [DistributionKind; 5] = [
        Self::SortedAscending,
        Self::SortedDescending,
        Self::AscendingWithOneSwap,
        Self::Random,
        Self::RandomWithIdenticalShare,
    ];

    /// Get the label used in reports.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::SortedAscending => "SortedAscending",
            Self::SortedDescending => "SortedDescending",
            Self::AscendingWithOneSwap => "AscendingWithOneSwap",
            Self::Random => "Random",
            Self::RandomWithIdenticalShare => "RandomWithIdenticalShare",
            Self::AllIdentical => "AllIdentical",
        }
    }

    /// Sorted-family kinds are built from the deterministic ramp and are only
    /// generated when `bound <= length`.
    pub const fn is_sorted_family(&self) -> bool {
        matches!(
            self,
            Self::SortedAscending | Self::SortedDescending | Self::AscendingWithOneSwap
        )
    }

    pub const fn is_supported(&self) -> bool {
        !matches!(self, Self::AllIdentical)
    }
}

impl fmt::Display for DistributionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for DistributionKind {
    type Err = String;

    /// Accepts both the report label (`SortedAscending`) and the config
    /// spelling (`sorted_ascending`), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match normalized.as_str() {
            "sortedascending" => Ok(Self::SortedAscending),
            "sorteddescending" => Ok(Self::SortedDescending),
            "ascendingwithoneswap" => Ok(Self::AscendingWithOneSwap),
            "random" => Ok(Self::Random),
            "randomwithidenticalshare" => Ok(Self::RandomWithIdenticalShare),
            "allidentical" => Ok(Self::AllIdentical),
            _ => Err(format!("unknown distribution kind: {}", s)),
        }
    }
}

/// Description of one benchmark input: size, value range and shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArraySpecification {
    length: usize,
    value_bound: u32,
    distribution: DistributionKind,
    identical_share: f64,
}

impl ArraySpecification {
    /// Create a new specification.
    ///
    /// Values are not validated here; the generator rejects an invalid share
    /// or bound when it is asked to build the array.
    pub fn new(
        length: usize,
        value_bound: u32,
        distribution: DistributionKind,
        identical_share: f64,
    ) -> Self {
        Self {
            length,
            value_bound,
            distribution,
            identical_share,
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn value_bound(&self) -> u32 {
        self.value_bound
    }

    pub fn distribution(&self) -> DistributionKind {
        self.distribution
    }

    /// Share of identical elements. Only meaningful for
    /// [`DistributionKind::RandomWithIdenticalShare`].
    pub fn identical_share(&self) -> f64 {
        self.identical_share
    }

    /// Whether the sorted-family skip policy applies (`bound > length`).
    pub fn is_skipped(&self) -> bool {
        self.distribution.is_sorted_family() && self.value_bound as u64 > self.length as u64
    }

    /// Distribution label, suffixed with `:share` for the identical-share kind.
    pub fn distribution_label(&self) -> String {
        match self.distribution {
            DistributionKind::RandomWithIdenticalShare => {
                format!("{}:{}", self.distribution.label(), self.identical_share)
            }
            kind => kind.label().to_string(),
        }
    }
}

/// One timed outcome of running an algorithm against a specification.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkRecord {
    pub specification: ArraySpecification,
    pub algorithm_name: String,
    pub elapsed: Duration,
}

impl BenchmarkRecord {
    pub fn new(
        specification: ArraySpecification,
        algorithm_name: impl Into<String>,
        elapsed: Duration,
    ) -> Self {
        Self {
            specification,
            algorithm_name: algorithm_name.into(),
            elapsed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distribution_labels() {
        assert_eq!(DistributionKind::SortedAscending.to_string(), "SortedAscending");
        assert_eq!(
            DistributionKind::RandomWithIdenticalShare.label(),
            "RandomWithIdenticalShare"
        );
    }

    #[test]
    fn test_distribution_from_str() {
        assert_eq!(
            "sorted_descending".parse::<DistributionKind>().unwrap(),
            DistributionKind::SortedDescending
        );
        assert_eq!(
            "AscendingWithOneSwap".parse::<DistributionKind>().unwrap(),
            DistributionKind::AscendingWithOneSwap
        );
        assert_eq!(
            "random-with-identical-share".parse::<DistributionKind>().unwrap(),
            DistributionKind::RandomWithIdenticalShare
        );
        assert!("bogus".parse::<DistributionKind>().is_err());
    }

    #[test]
    fn test_sorted_family() {
        assert!(DistributionKind::SortedAscending.is_sorted_family());
        assert!(DistributionKind::AscendingWithOneSwap.is_sorted_family());
        assert!(!DistributionKind::Random.is_sorted_family());
        assert!(!DistributionKind::RandomWithIdenticalShare.is_sorted_family());
    }

    #[test]
    fn test_supported_excludes_all_identical() {
        assert!(!DistributionKind::SUPPORTED.contains(&DistributionKind::AllIdentical));
        assert!(!DistributionKind::AllIdentical.is_supported());
    }

    #[test]
    fn test_skip_policy() {
        let spec = ArraySpecification::new(10, 100, DistributionKind::SortedAscending, 0.1);
        assert!(spec.is_skipped());

        let spec = ArraySpecification::new(100, 100, DistributionKind::SortedDescending, 0.1);
        assert!(!spec.is_skipped());

        let spec = ArraySpecification::new(10, 100, DistributionKind::Random, 0.1);
        assert!(!spec.is_skipped());
    }

    #[test]
    fn test_label_suffix_only_for_identical_share() {
        let spec = ArraySpecification::new(10, 10, DistributionKind::RandomWithIdenticalShare, 0.1);
        assert_eq!(spec.distribution_label(), "RandomWithIdenticalShare:0.1");

        let spec = ArraySpecification::new(10, 10, DistributionKind::Random, 0.1);
        assert_eq!(spec.distribution_label(), "Random");
    }

    #[test]
    fn test_serde_snake_case() {
        let kind: DistributionKind = serde_yaml::from_str("ascending_with_one_swap").unwrap();
        assert_eq!(kind, DistributionKind::AscendingWithOneSwap);
    }
}
