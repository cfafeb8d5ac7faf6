//! Conversion of already-downloaded price payloads into [`PriceSeries`].
//!
//! Nothing here performs I/O; callers hand in the raw response body.

pub mod alphavantage;
pub mod records;

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{PriceSeries, ValidationError};

/// Provider failure category, mapped to a stable client-facing code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderErrorKind {
    RateLimited,
    InvalidSymbol,
    NoData,
    Malformed,
}

impl ProviderErrorKind {
    pub const fn code(self) -> &'static str {
        match self {
            Self::RateLimited => "rate_limited",
            Self::InvalidSymbol => "invalid_symbol",
            Self::NoData => "not_found",
            Self::Malformed => "malformed_payload",
        }
    }

    pub const fn retryable(self) -> bool {
        matches!(self, Self::RateLimited)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ProviderError {
    kind: ProviderErrorKind,
    message: String,
}

impl ProviderError {
    pub fn new(kind: ProviderErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::RateLimited, message)
    }

    pub fn invalid_symbol(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::InvalidSymbol, message)
    }

    pub fn no_data(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::NoData, message)
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::Malformed, message)
    }

    pub const fn kind(&self) -> ProviderErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub const fn retryable(&self) -> bool {
        self.kind.retryable()
    }
}

impl From<serde_json::Error> for ProviderError {
    fn from(error: serde_json::Error) -> Self {
        Self::malformed(format!("invalid JSON: {error}"))
    }
}

impl From<ValidationError> for ProviderError {
    fn from(error: ValidationError) -> Self {
        Self::malformed(error.to_string())
    }
}

/// Shape of a price payload on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputFormat {
    /// Alpha Vantage `TIME_SERIES_DAILY` response.
    #[default]
    Alphavantage,
    /// JSON array of `{ "date": "YYYY-MM-DD", "close": number }`.
    Records,
}

impl InputFormat {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Alphavantage => "alphavantage",
            Self::Records => "records",
        }
    }

    pub fn parse_series(self, body: &str) -> Result<PriceSeries, ProviderError> {
        match self {
            Self::Alphavantage => alphavantage::parse_daily_series(body),
            Self::Records => records::parse_records(body),
        }
    }
}

impl Display for InputFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InputFormat {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "alphavantage" => Ok(Self::Alphavantage),
            "records" => Ok(Self::Records),
            other => Err(ValidationError::InvalidConfig {
                field: "input",
                reason: format!("unknown input format '{other}'"),
            }),
        }
    }
}
