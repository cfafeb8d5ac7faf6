//! Extended internal rate of return.
//!
//! [`xirr`] solves `sum(cf_i / (1 + r)^(t_i)) = 0` for an arbitrary dated cash-flow
//! schedule, where `t_i` is the year fraction since the earliest flow. The
//! extended return rate of a price series is the two-flow case: buy at the first
//! close, sell at the last one. When Newton fails on that case the closed-form
//! annualized return is used instead; for two flows both are the same number.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::solver::newton;
use super::Metric;
use crate::{MetricError, MetricsConfig, PriceSeries, TradingDate};

/// Signed amount paid (negative) or received (positive) on a date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CashFlow {
    pub date: TradingDate,
    pub amount: f64,
}

impl CashFlow {
    pub const fn new(date: TradingDate, amount: f64) -> Self {
        Self { date, amount }
    }
}

/// Annualized rate (as a fraction) that zeroes the net present value of `flows`.
///
/// Needs at least one outflow and one inflow on different dates.
pub fn xirr(flows: &[CashFlow], config: &MetricsConfig) -> Result<f64, MetricError> {
    let metric = Metric::ExtendedReturnRate;
    if flows.len() < 2 {
        return Err(MetricError::insufficient(metric, 2, flows.len()));
    }
    if !flows.iter().all(|flow| flow.amount.is_finite()) {
        return Err(MetricError::numerical(metric, "cash flow amounts must be finite"));
    }
    if !flows.iter().any(|flow| flow.amount < 0.0) || !flows.iter().any(|flow| flow.amount > 0.0)
    {
        return Err(MetricError::numerical(
            metric,
            "cash flows need at least one outflow and one inflow",
        ));
    }

    let Some(origin) = flows.iter().map(|flow| flow.date).min() else {
        return Err(MetricError::insufficient(metric, 2, 0));
    };
    let timed = flows
        .iter()
        .map(|flow| {
            let years = origin.days_until(flow.date) as f64 / config.days_per_year;
            (flow.amount, years)
        })
        .collect::<Vec<_>>();

    let npv = |rate: f64| {
        let base = 1.0 + rate;
        if base <= 0.0 {
            return f64::NAN;
        }
        timed
            .iter()
            .map(|(amount, years)| amount / base.powf(*years))
            .sum::<f64>()
    };
    let npv_slope = |rate: f64| {
        let base = 1.0 + rate;
        if base <= 0.0 {
            return f64::NAN;
        }
        timed
            .iter()
            .map(|(amount, years)| -years * amount / base.powf(years + 1.0))
            .sum::<f64>()
    };

    newton(npv, npv_slope, &config.solver)
        .map_err(|error| MetricError::numerical(metric, error.to_string()))
}

/// `(final / initial)^(days_per_year / days) - 1`, or `0.0` for a non-positive span.
pub fn annualized_return(initial: f64, final_price: f64, days: i64, days_per_year: f64) -> f64 {
    if days <= 0 {
        return 0.0;
    }
    (final_price / initial).powf(days_per_year / days as f64) - 1.0
}

pub(crate) fn extended_return_rate(
    series: &PriceSeries,
    config: &MetricsConfig,
) -> Result<f64, MetricError> {
    let metric = Metric::ExtendedReturnRate;
    let sorted = series.sorted();
    let [first, .., last] = sorted.as_slice() else {
        return Err(MetricError::insufficient(metric, 2, sorted.len()));
    };

    let days = first.date.days_until(last.date);
    if days <= 0 {
        return Err(MetricError::numerical(
            metric,
            format!("holding period from {} to {} spans no days", first.date, last.date),
        ));
    }

    if first.close == last.close {
        return Ok(0.0);
    }

    let flows = [
        CashFlow::new(first.date, -first.close),
        CashFlow::new(last.date, last.close),
    ];
    let rate = xirr(&flows, config).unwrap_or_else(|error| {
        debug!(%error, days, "xirr solver failed, using closed-form annualized return");
        annualized_return(first.close, last.close, days, config.days_per_year)
    });

    if !rate.is_finite() {
        return Err(MetricError::numerical(
            metric,
            format!("annualized return over {days} days overflowed"),
        ));
    }
    Ok(rate * 100.0)
}
