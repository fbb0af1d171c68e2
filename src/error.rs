//! Error types
//!
//! Classification itself never fails: malformed sample sequences are
//! reported as [`SampleRejection`] diagnostics and the classifier resets.
//! Only configuration and trace files produce real errors.

use thiserror::Error;

/// Errors raised while building or loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Misconfigured threshold {name}: {value} is out of range")]
    MisconfiguredThreshold { name: &'static str, value: f64 },

    #[error("Swipe detection needs a max duration or a min speed")]
    MissingSwipeCriterion,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised while saving or loading sample traces
#[derive(Error, Debug)]
pub enum TraceError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid trace: {0}")]
    InvalidTrace(String),
}

/// Result type for trace operations
pub type TraceResult<T> = Result<T, TraceError>;

/// Why a pointer sample was ignored by the classifier
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleRejection {
    #[error("move sample without a preceding begin")]
    MoveWithoutBegin,

    #[error("release sample without a preceding begin")]
    ReleaseWithoutBegin,

    #[error("begin sample while the pointer is already down")]
    RepeatedBegin,

    #[error("sample timestamp went backwards")]
    TimeWentBackwards,
}

/// Checks that a threshold is finite and non-negative
pub(crate) fn check_threshold(name: &'static str, value: f64) -> ConfigResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::MisconfiguredThreshold { name, value })
    }
}

/// Checks that a dimension is finite and strictly positive
pub(crate) fn check_positive(name: &'static str, value: f64) -> ConfigResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::MisconfiguredThreshold { name, value })
    }
}
