//! Beta of a security against a benchmark.
//!
//! Both series are inner-joined on exact dates (no tolerance, no fill), the joined
//! rows are sorted by date and differenced into paired daily returns. Beta is the
//! sample covariance of the pairs over the sample variance of the benchmark
//! returns, both with ddof = 1.

use std::collections::BTreeMap;

use tracing::debug;

use super::returns::{daily_returns, sample_covariance, SampleStats};
use super::Metric;
use crate::{MetricError, PriceSeries, TradingDate};

/// Rows present in both series, ascending by date as `(date, stock, market)`.
///
/// A date repeated in either input contributes one row per matching pair.
pub fn align_on_dates(stock: &PriceSeries, market: &PriceSeries) -> Vec<(TradingDate, f64, f64)> {
    let mut market_by_date: BTreeMap<TradingDate, Vec<f64>> = BTreeMap::new();
    for point in market.points() {
        market_by_date.entry(point.date).or_default().push(point.close);
    }

    let mut aligned = stock
        .points()
        .iter()
        .filter_map(|point| {
            market_by_date
                .get(&point.date)
                .map(|closes| closes.iter().map(move |close| (point.date, point.close, *close)))
        })
        .flatten()
        .collect::<Vec<_>>();
    aligned.sort_by_key(|(date, _, _)| *date);
    aligned
}

pub(crate) fn beta(stock: &PriceSeries, market: &PriceSeries) -> Result<f64, MetricError> {
    let metric = Metric::Beta;
    let shortest = stock.len().min(market.len());
    if shortest < 2 {
        return Err(MetricError::insufficient(metric, 2, shortest));
    }

    let aligned = align_on_dates(stock, market);
    if aligned.len() < 2 {
        return Err(MetricError::insufficient(metric, 2, aligned.len()));
    }

    let (stock_closes, market_closes): (Vec<f64>, Vec<f64>) = aligned
        .iter()
        .map(|(_, stock_close, market_close)| (*stock_close, *market_close))
        .unzip();
    let stock_returns = daily_returns(&stock_closes);
    let market_returns = daily_returns(&market_closes);
    if market_returns.len() < 2 {
        return Err(MetricError::insufficient(metric, 3, aligned.len()));
    }

    let covariance = sample_covariance(&stock_returns, &market_returns)
        .ok_or_else(|| MetricError::numerical(metric, "return samples are not paired"))?;
    let market_variance = SampleStats::from_values(&market_returns)
        .sample_variance()
        .ok_or_else(|| MetricError::insufficient(metric, 3, aligned.len()))?;

    if market_variance == 0.0 {
        debug!(pairs = market_returns.len(), "flat benchmark, beta reported as 0");
        return Ok(0.0);
    }

    let beta = covariance / market_variance;
    if !beta.is_finite() {
        return Err(MetricError::numerical(metric, "beta is not finite"));
    }
    Ok(beta)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(pairs: &[(&'static str, f64)]) -> PriceSeries {
        PriceSeries::from_pairs(pairs.iter().copied()).expect("series")
    }

    #[test]
    fn leveraged_copy_has_beta_two() {
        // stock returns are exactly twice the market returns
        let market = series(&[
            ("2024-01-01", 100.0),
            ("2024-01-02", 101.0),
            ("2024-01-03", 99.0),
            ("2024-01-04", 102.0),
        ]);
        let mut closes = vec![50.0];
        for pair in market.closes_sorted().windows(2) {
            let market_return = (pair[1] - pair[0]) / pair[0];
            let last = *closes.last().expect("seeded");
            closes.push(last * (1.0 + 2.0 * market_return));
        }
        let stock = PriceSeries::from_pairs(
            ["2024-01-01", "2024-01-02", "2024-01-03", "2024-01-04"]
                .into_iter()
                .zip(closes),
        )
        .expect("stock");

        let value = beta(&stock, &market).expect("value");
        assert!((value - 2.0).abs() < 1e-9, "beta was {value}");
    }

    #[test]
    fn unmatched_dates_are_dropped() {
        let stock = series(&[
            ("2024-01-01", 10.0),
            ("2024-01-02", 11.0),
            ("2024-01-05", 12.0),
        ]);
        let market = series(&[
            ("2024-01-02", 200.0),
            ("2024-01-03", 201.0),
            ("2024-01-05", 205.0),
        ]);
        let aligned = align_on_dates(&stock, &market);
        assert_eq!(aligned.len(), 2);
        assert_eq!(aligned[0].1, 11.0);
        assert_eq!(aligned[1].2, 205.0);
    }

    #[test]
    fn flat_market_gives_zero() {
        let stock = series(&[
            ("2024-01-01", 10.0),
            ("2024-01-02", 12.0),
            ("2024-01-03", 9.0),
        ]);
        let market = series(&[
            ("2024-01-01", 400.0),
            ("2024-01-02", 400.0),
            ("2024-01-03", 400.0),
        ]);
        assert_eq!(beta(&stock, &market), Ok(0.0));
    }

    #[test]
    fn disjoint_dates_are_insufficient() {
        let stock = series(&[("2024-01-01", 10.0), ("2024-01-02", 12.0)]);
        let market = series(&[("2024-02-01", 10.0), ("2024-02-02", 12.0)]);
        let err = beta(&stock, &market).expect_err("no overlap");
        assert!(matches!(
            err,
            MetricError::InsufficientData { actual: 0, .. }
        ));
    }

    #[test]
    fn two_shared_dates_leave_a_single_return_pair() {
        let stock = series(&[
            ("2024-01-01", 10.0),
            ("2024-01-02", 11.0),
            ("2024-01-03", 12.0),
        ]);
        let market = series(&[
            ("2024-01-02", 200.0),
            ("2024-01-03", 204.0),
            ("2024-01-04", 201.0),
        ]);
        let err = beta(&stock, &market).expect_err("one return pair");
        assert!(matches!(
            err,
            MetricError::InsufficientData { required: 3, actual: 2, .. }
        ));
        assert_eq!(crate::metrics::beta(&stock, &market), 0.0);
    }

}
