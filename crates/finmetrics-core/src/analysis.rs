//! Per-symbol report combining the metrics, rounded for display, with the
//! qualitative buckets shown to end users.

use serde::{Deserialize, Serialize};

use crate::metrics::Metric;
use crate::{MetricError, MetricsEngine, PriceSeries, Symbol, TradingDate};

const REPORT_DECIMALS: i32 = 3;

/// Volatility bucket: below 20% low, below 40% medium, otherwise high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn from_volatility(volatility_pct: f64) -> Self {
        if volatility_pct < 20.0 {
            Self::Low
        } else if volatility_pct < 40.0 {
            Self::Medium
        } else {
            Self::High
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SharpeRating {
    Poor,
    Subpar,
    Good,
    VeryGood,
}

impl SharpeRating {
    pub fn from_sharpe(sharpe: f64) -> Self {
        if sharpe < 0.0 {
            Self::Poor
        } else if sharpe < 1.0 {
            Self::Subpar
        } else if sharpe < 2.0 {
            Self::Good
        } else {
            Self::VeryGood
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Poor => "poor",
            Self::Subpar => "subpar",
            Self::Good => "good",
            Self::VeryGood => "very_good",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockAnalysis {
    pub symbol: Symbol,
    /// Extended return rate, percent per year.
    pub xirr: f64,
    pub sharpe: f64,
    /// Annualized volatility, percent.
    pub volatility: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beta: Option<f64>,
    pub risk_level: RiskLevel,
    pub sharpe_rating: SharpeRating,
    pub observations: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_date: Option<TradingDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_date: Option<TradingDate>,
}

/// Analysis plus the metric failures that were absorbed into `0.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    pub analysis: StockAnalysis,
    pub failures: Vec<MetricError>,
}

impl AnalysisReport {
    pub fn warnings(&self) -> Vec<String> {
        self.failures
            .iter()
            .map(|failure| format!("{failure}; reported as 0"))
            .collect()
    }

    pub fn failed(&self, metric: Metric) -> bool {
        self.failures.iter().any(|failure| failure.metric() == metric)
    }
}

/// Compute every metric for `series` (and beta when `benchmark` is given).
pub fn analyze(
    symbol: Symbol,
    series: &PriceSeries,
    benchmark: Option<&PriceSeries>,
    engine: &MetricsEngine,
) -> AnalysisReport {
    let mut failures = Vec::new();
    let mut settle = |result: Result<f64, MetricError>| match result {
        Ok(value) => round_to(value, REPORT_DECIMALS),
        Err(error) => {
            tracing::warn!(%symbol, %error, "metric failed during analysis");
            failures.push(error);
            0.0
        }
    };

    let xirr = settle(engine.try_extended_return_rate(series));
    let sharpe = settle(engine.try_sharpe_ratio(series));
    let volatility = settle(engine.try_volatility(series));
    let beta = benchmark.map(|market| settle(engine.try_beta(series, market)));

    let span = series.first_last();
    let analysis = StockAnalysis {
        risk_level: RiskLevel::from_volatility(volatility),
        sharpe_rating: SharpeRating::from_sharpe(sharpe),
        observations: series.len(),
        first_date: span.map(|(first, _)| first.date),
        last_date: span.map(|(_, last)| last.date),
        symbol,
        xirr,
        sharpe,
        volatility,
        beta,
    };

    AnalysisReport { analysis, failures }
}

/// Round half away from zero to `decimals` places, on the scaled binary value.
///
/// Ties follow `f64::round`, not banker's rounding over the exact decimal
/// expansion, so `1.0005` becomes `1.001`. A result of zero is always `+0.0`.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    let rounded = (value * factor).round() / factor;
    if !rounded.is_finite() {
        value
    } else if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}
