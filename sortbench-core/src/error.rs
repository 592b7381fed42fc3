//! Custom error types for sortbench.
//!
//! Explicit enum error types only. No `Box<dyn Error>`, no `anyhow::Result`.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::DistributionKind;

/// Top-level error type for the benchmark harness.
#[derive(Debug, Error)]
pub enum SortBenchError {
    // =========================================================================
    // Generator Errors - Propagated, Never Suppressed
    // =========================================================================
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] InvalidArgumentError),

    #[error("Distribution kind {0} is not supported by the generator")]
    UnsupportedDistribution(DistributionKind),

    // =========================================================================
    // Configuration Errors - Fail-Fast on Invalid Config
    // =========================================================================
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Configuration parse error: {message}")]
    ConfigParse { message: String },

    // =========================================================================
    // Registry Errors
    // =========================================================================
    #[error("Algorithm already registered: {0}")]
    AlgorithmAlreadyRegistered(String),

    #[error("Algorithm not found: {0}")]
    AlgorithmNotFound(String),

    // =========================================================================
    // Output Errors
    // =========================================================================
    #[error("IO error: {context} - {source}")]
    Io {
        context: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize record: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Invalid generator arguments, raised before any array is allocated.
#[derive(Debug, Error, PartialEq)]
pub enum InvalidArgumentError {
    #[error("identical element share {share} has to be between 0 and 1")]
    IdenticalShareOutOfRange { share: f64 },

    #[error("value upper bound {bound} has to be greater than 0")]
    ValueBoundTooSmall { bound: u32 },

    #[error("value upper bound {bound} leaves no value distinct from the identical one for {remaining} positions")]
    NoDistinctValues { bound: u32, remaining: usize },
}

/// Configuration validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required field: {field} in {context}")]
    MissingRequiredField {
        field: &'static str,
        context: String,
    },

    #[error("Invalid field value: {field} = {value} - {reason}")]
    InvalidFieldValue {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("Unknown algorithm: {name}")]
    UnknownAlgorithm { name: String },

    #[error("Algorithm listed twice: {name}")]
    DuplicateAlgorithm { name: String },
}

/// Result type alias using SortBenchError.
pub type SortBenchResult<T> = Result<T, SortBenchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let err = InvalidArgumentError::IdenticalShareOutOfRange { share: 1.5 };
        assert!(err.to_string().contains("1.5"));
        assert!(err.to_string().contains("between 0 and 1"));
    }

    #[test]
    fn test_error_chain() {
        let err = InvalidArgumentError::ValueBoundTooSmall { bound: 0 };
        let top: SortBenchError = err.into();
        assert!(matches!(
            top,
            SortBenchError::InvalidArgument(InvalidArgumentError::ValueBoundTooSmall { bound: 0 })
        ));
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::MissingRequiredField {
            field: "lengths",
            context: "sweep".to_string(),
        };
        assert!(err.to_string().contains("lengths"));
        assert!(err.to_string().contains("sweep"));
    }
}
