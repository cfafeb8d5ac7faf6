use thiserror::Error;

use crate::metrics::Metric;

/// Validation and contract errors exposed by `finmetrics-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("symbol cannot be empty")]
    EmptySymbol,
    #[error("symbol length {len} exceeds max {max}")]
    SymbolTooLong { len: usize, max: usize },
    #[error("symbol must start with an ASCII letter: '{ch}'")]
    SymbolInvalidStart { ch: char },
    #[error("symbol contains invalid character '{ch}' at index {index}")]
    SymbolInvalidChar { ch: char, index: usize },

    #[error("date must be formatted as YYYY-MM-DD: '{value}'")]
    InvalidDate { value: String },

    #[error("field '{field}' must be finite")]
    NonFiniteValue { field: &'static str },
    #[error("field '{field}' must be greater than zero")]
    NonPositiveValue { field: &'static str },

    #[error("invalid config value for '{field}': {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    #[error("unknown metric '{value}', expected one of xirr, sharpe, volatility, beta")]
    UnknownMetric { value: String },

    #[error("request_id must be at least 8 characters")]
    InvalidRequestId,
    #[error("schema_version must match vMAJOR.MINOR.PATCH: '{value}'")]
    InvalidSchemaVersion { value: String },
    #[error("error code cannot be empty")]
    EmptyErrorCode,
    #[error("error message cannot be empty")]
    EmptyErrorMessage,
}

/// Failure of a single metric computation.
///
/// The plain scalar API absorbs these into `0.0`; the `try_*` API returns them.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MetricError {
    #[error("{metric}: insufficient data (need at least {required} points, got {actual})")]
    InsufficientData {
        metric: Metric,
        required: usize,
        actual: usize,
    },

    #[error("{metric}: numerical failure: {reason}")]
    NumericalFailure { metric: Metric, reason: String },
}

impl MetricError {
    pub fn insufficient(metric: Metric, required: usize, actual: usize) -> Self {
        Self::InsufficientData {
            metric,
            required,
            actual,
        }
    }

    pub fn numerical(metric: Metric, reason: impl Into<String>) -> Self {
        Self::NumericalFailure {
            metric,
            reason: reason.into(),
        }
    }

    pub const fn metric(&self) -> Metric {
        match self {
            Self::InsufficientData { metric, .. } | Self::NumericalFailure { metric, .. } => {
                *metric
            }
        }
    }

    /// Stable machine-readable code used in envelopes.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InsufficientData { .. } => "insufficient_data",
            Self::NumericalFailure { .. } => "numerical_failure",
        }
    }
}

/// Top-level error type for core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
