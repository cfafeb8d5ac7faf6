//! # Metrics Engine
//!
//! Four independent, pure calculations over daily closes:
//!
//! | Metric | Function | Unit |
//! |--------|----------|------|
//! | Extended return rate (XIRR) | [`extended_return_rate`] | percent per year |
//! | Sharpe ratio | [`sharpe_ratio`] | ratio |
//! | Volatility | [`volatility`] | percent per year |
//! | Beta | [`beta`] | ratio |
//!
//! ## Failure contract
//!
//! The plain functions never fail: too little data or a numerical failure yields
//! `0.0` and a `tracing` event. The `try_*` methods on [`MetricsEngine`] return the
//! same values but surface the failure as a [`MetricError`], so a degraded `0.0`
//! can be told apart from a real one.
//!
//! ```rust
//! use finmetrics_core::{MetricError, MetricsEngine, PriceSeries};
//!
//! let series = PriceSeries::from_pairs([("2024-01-01", 100.0)]).expect("series");
//! let engine = MetricsEngine::default();
//!
//! assert_eq!(engine.volatility(&series), 0.0);
//! assert!(matches!(
//!     engine.try_volatility(&series),
//!     Err(MetricError::InsufficientData { .. })
//! ));
//! ```

mod beta;
pub mod returns;
mod sharpe;
pub mod solver;
mod volatility;
mod xirr;

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub use beta::align_on_dates;
pub use xirr::{annualized_return, xirr, CashFlow};

use crate::{MetricError, MetricsConfig, PriceSeries, ValidationError};

/// Identifies one of the four metrics in errors, logs and CLI arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    #[serde(rename = "xirr")]
    ExtendedReturnRate,
    #[serde(rename = "sharpe")]
    SharpeRatio,
    Volatility,
    Beta,
}

impl Metric {
    pub const ALL: [Self; 4] = [
        Self::ExtendedReturnRate,
        Self::SharpeRatio,
        Self::Volatility,
        Self::Beta,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ExtendedReturnRate => "xirr",
            Self::SharpeRatio => "sharpe",
            Self::Volatility => "volatility",
            Self::Beta => "beta",
        }
    }
}

impl Display for Metric {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Metric {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "xirr" | "extended_return_rate" => Ok(Self::ExtendedReturnRate),
            "sharpe" | "sharpe_ratio" => Ok(Self::SharpeRatio),
            "volatility" => Ok(Self::Volatility),
            "beta" => Ok(Self::Beta),
            other => Err(ValidationError::UnknownMetric {
                value: other.to_owned(),
            }),
        }
    }
}

/// Stateless calculator parameterized by a [`MetricsConfig`].
///
/// Holds no mutable state, so one engine can be shared across threads freely.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MetricsEngine {
    config: MetricsConfig,
}

impl MetricsEngine {
    pub const fn new(config: MetricsConfig) -> Self {
        Self { config }
    }

    pub const fn config(&self) -> &MetricsConfig {
        &self.config
    }

    /// Annualized return (percent) of buying at the earliest close and selling
    /// at the latest one.
    pub fn extended_return_rate(&self, series: &PriceSeries) -> f64 {
        absorb(self.try_extended_return_rate(series))
    }

    /// Sharpe ratio against the configured risk-free rate.
    pub fn sharpe_ratio(&self, series: &PriceSeries) -> f64 {
        self.sharpe_ratio_with(series, self.config.risk_free_rate)
    }

    pub fn sharpe_ratio_with(&self, series: &PriceSeries, risk_free_rate: f64) -> f64 {
        absorb(self.try_sharpe_ratio_with(series, risk_free_rate))
    }

    /// Annualized volatility in percent.
    pub fn volatility(&self, series: &PriceSeries) -> f64 {
        absorb(self.try_volatility(series))
    }

    pub fn beta(&self, stock: &PriceSeries, market: &PriceSeries) -> f64 {
        absorb(self.try_beta(stock, market))
    }

    pub fn try_extended_return_rate(&self, series: &PriceSeries) -> Result<f64, MetricError> {
        xirr::extended_return_rate(series, &self.config)
    }

    pub fn try_sharpe_ratio(&self, series: &PriceSeries) -> Result<f64, MetricError> {
        self.try_sharpe_ratio_with(series, self.config.risk_free_rate)
    }

    pub fn try_sharpe_ratio_with(
        &self,
        series: &PriceSeries,
        risk_free_rate: f64,
    ) -> Result<f64, MetricError> {
        if !risk_free_rate.is_finite() {
            return Err(MetricError::numerical(
                Metric::SharpeRatio,
                "risk-free rate must be finite",
            ));
        }
        sharpe::sharpe_ratio(series, risk_free_rate, &self.config)
    }

    pub fn try_volatility(&self, series: &PriceSeries) -> Result<f64, MetricError> {
        volatility::volatility(series, &self.config)
    }

    pub fn try_beta(&self, stock: &PriceSeries, market: &PriceSeries) -> Result<f64, MetricError> {
        beta::beta(stock, market)
    }
}

/// [`MetricsEngine::extended_return_rate`] with the default configuration.
pub fn extended_return_rate(series: &PriceSeries) -> f64 {
    MetricsEngine::default().extended_return_rate(series)
}

/// [`MetricsEngine::sharpe_ratio_with`] with the default configuration.
pub fn sharpe_ratio(series: &PriceSeries, risk_free_rate: f64) -> f64 {
    MetricsEngine::default().sharpe_ratio_with(series, risk_free_rate)
}

/// [`MetricsEngine::volatility`] with the default configuration.
pub fn volatility(series: &PriceSeries) -> f64 {
    MetricsEngine::default().volatility(series)
}

/// [`MetricsEngine::beta`] with the default configuration.
pub fn beta(stock: &PriceSeries, market: &PriceSeries) -> f64 {
    MetricsEngine::default().beta(stock, market)
}

/// Daily returns of the date-sorted closes, requiring at least two points.
fn sorted_daily_returns(series: &PriceSeries, metric: Metric) -> Result<Vec<f64>, MetricError> {
    if series.len() < 2 {
        return Err(MetricError::insufficient(metric, 2, series.len()));
    }
    let returns = returns::daily_returns(&series.closes_sorted());
    if returns.is_empty() {
        return Err(MetricError::insufficient(metric, 2, series.len()));
    }
    Ok(returns)
}

fn absorb(result: Result<f64, MetricError>) -> f64 {
    result.unwrap_or_else(|error| {
        match &error {
            MetricError::InsufficientData { .. } => {
                debug!(metric = %error.metric(), %error, "metric unavailable, reporting 0.0");
            }
            MetricError::NumericalFailure { .. } => {
                warn!(metric = %error.metric(), %error, "metric computation failed, reporting 0.0");
            }
        }
        0.0
    })
}
