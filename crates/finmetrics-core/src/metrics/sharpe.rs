//! Annualized Sharpe ratio of daily close-to-close returns.
//!
//! `(mean_daily * D - risk_free) / (std_daily * sqrt(D))` with `D` trading days per
//! year and a sample (ddof = 1) standard deviation. Not a percentage.

use tracing::debug;

use super::{sorted_daily_returns, Metric};
use crate::metrics::returns::SampleStats;
use crate::{MetricError, MetricsConfig, PriceSeries};

pub(crate) fn sharpe_ratio(
    series: &PriceSeries,
    risk_free_rate: f64,
    config: &MetricsConfig,
) -> Result<f64, MetricError> {
    let metric = Metric::SharpeRatio;
    let returns = sorted_daily_returns(series, metric)?;

    let stats = SampleStats::from_values(&returns);
    let std_daily = stats
        .sample_std_dev()
        .ok_or_else(|| MetricError::insufficient(metric, 3, series.len()))?;

    let trading_days = config.trading_days();
    let annualized_return = stats.mean() * trading_days;
    let annualized_volatility = std_daily * trading_days.sqrt();

    if annualized_volatility == 0.0 {
        debug!(observations = returns.len(), "flat returns, sharpe ratio reported as 0");
        return Ok(0.0);
    }

    let ratio = (annualized_return - risk_free_rate) / annualized_volatility;
    if !ratio.is_finite() {
        return Err(MetricError::numerical(metric, "sharpe ratio is not finite"));
    }
    Ok(ratio)
}
