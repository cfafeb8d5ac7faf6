//! Annualized volatility: sample standard deviation of daily returns times
//! `sqrt(trading days)`, as a percentage.

use super::{sorted_daily_returns, Metric};
use crate::metrics::returns::SampleStats;
use crate::{MetricError, MetricsConfig, PriceSeries};

pub(crate) fn volatility(series: &PriceSeries, config: &MetricsConfig) -> Result<f64, MetricError> {
    let metric = Metric::Volatility;
    let returns = sorted_daily_returns(series, metric)?;

    let std_daily = SampleStats::from_values(&returns)
        .sample_std_dev()
        .ok_or_else(|| MetricError::insufficient(metric, 3, series.len()))?;

    let annualized = std_daily * config.trading_days().sqrt() * 100.0;
    if !annualized.is_finite() {
        return Err(MetricError::numerical(metric, "volatility is not finite"));
    }
    Ok(annualized)
}
