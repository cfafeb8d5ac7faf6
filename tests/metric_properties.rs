use finmetrics_core::metrics::{self, returns};
use finmetrics_core::{MetricError, MetricsEngine, PricePoint, PriceSeries};

fn series(pairs: &[(&str, f64)]) -> PriceSeries {
    PriceSeries::from_pairs(pairs.iter().copied()).expect("valid series")
}

fn reference_series() -> PriceSeries {
    series(&[
        ("2024-01-02", 100.0),
        ("2024-01-03", 102.0),
        ("2024-01-04", 101.0),
        ("2024-01-05", 105.0),
        ("2024-01-08", 103.5),
        ("2024-01-09", 107.25),
    ])
}

#[test]
fn every_metric_is_zero_below_two_points() {
    let empty = PriceSeries::default();
    let single = series(&[("2024-01-02", 100.0)]);
    let long = reference_series();

    for short in [&empty, &single] {
        assert_eq!(metrics::extended_return_rate(short), 0.0);
        assert_eq!(metrics::sharpe_ratio(short, 0.02), 0.0);
        assert_eq!(metrics::volatility(short), 0.0);
        assert_eq!(metrics::beta(short, &long), 0.0);
        assert_eq!(metrics::beta(&long, short), 0.0);
    }
}

#[test]
fn extended_return_rate_ignores_input_order() {
    let ordered = reference_series();
    let mut reversed = ordered.points().to_vec();
    reversed.reverse();
    let mut shuffled = ordered.points().to_vec();
    shuffled.swap(0, 3);
    shuffled.swap(1, 5);

    let expected = metrics::extended_return_rate(&ordered);
    assert_eq!(metrics::extended_return_rate(&PriceSeries::new(reversed)), expected);
    assert_eq!(metrics::extended_return_rate(&PriceSeries::new(shuffled)), expected);
}

#[test]
fn unchanged_price_has_zero_extended_return() {
    let flat = series(&[("2023-06-01", 42.0), ("2024-06-01", 42.0)]);
    let value = metrics::extended_return_rate(&flat);
    assert_eq!(value, 0.0);
    assert!(value.is_sign_positive());

    let overnight = series(&[("2024-03-01", 42.0), ("2024-03-04", 42.0)]);
    assert_eq!(metrics::extended_return_rate(&overnight), 0.0);
}

#[test]
fn one_day_ten_percent_gain_matches_closed_form() {
    let pair = series(&[("2024-01-02", 110.0), ("2024-01-01", 100.0)]);
    let value = metrics::extended_return_rate(&pair);
    let expected = ((110.0_f64 / 100.0).powf(365.25 / 1.0) - 1.0) * 100.0;
    assert!(value > 1.0e16);
    assert!(((value - expected) / expected).abs() < 1e-9);
}

#[test]
fn one_year_return_agrees_with_annualized_formula() {
    let year = series(&[("2023-01-03", 80.0), ("2023-07-03", 70.0), ("2024-01-03", 92.0)]);
    let value = metrics::extended_return_rate(&year);
    let expected = metrics::annualized_return(80.0, 92.0, 365, 365.25) * 100.0;
    assert!((value - expected).abs() < 1e-6, "{value} vs {expected}");
}

#[test]
fn flat_prices_have_no_volatility_or_sharpe() {
    let flat = series(&[
        ("2024-01-02", 25.0),
        ("2024-01-03", 25.0),
        ("2024-01-04", 25.0),
        ("2024-01-05", 25.0),
    ]);
    let engine = MetricsEngine::default();

    assert_eq!(engine.try_volatility(&flat), Ok(0.0));
    assert_eq!(engine.try_sharpe_ratio(&flat), Ok(0.0));
    assert_eq!(metrics::sharpe_ratio(&flat, 0.02), 0.0);
}

#[test]
fn reference_returns_match_sample_statistics() {
    let closes = [100.0, 102.0, 101.0, 105.0];
    let daily = returns::daily_returns(&closes);
    assert!((daily[0] - 0.02).abs() < 1e-12);
    assert!((daily[1] + 0.009_803_921_568_627).abs() < 1e-12);
    assert!((daily[2] - 0.039_603_960_396_04).abs() < 1e-12);

    let stats = returns::SampleStats::from_values(&daily);
    assert!((stats.mean() - 0.016_600_012_942_470_7).abs() < 1e-9);
    let std = stats.sample_std_dev().expect("three returns");
    assert!((std - 0.024_878_798_886_846_3).abs() < 1e-9);

    let dated = series(&[
        ("2024-01-01", 100.0),
        ("2024-01-02", 102.0),
        ("2024-01-03", 101.0),
        ("2024-01-04", 105.0),
    ]);
    let volatility = metrics::volatility(&dated);
    assert!((volatility - std * 252f64.sqrt() * 100.0).abs() < 1e-9);
}

#[test]
fn flat_market_has_no_beta() {
    let stock = reference_series();
    let market = PriceSeries::new(
        stock
            .points()
            .iter()
            .map(|point| PricePoint::new(point.date, 4_000.0).expect("point"))
            .collect(),
    );
    assert_eq!(metrics::beta(&stock, &market), 0.0);
    assert_eq!(MetricsEngine::default().try_beta(&stock, &market), Ok(0.0));
}

#[test]
fn beta_only_uses_shared_dates() {
    let stock = series(&[
        ("2024-01-02", 10.0),
        ("2024-01-03", 10.5),
        ("2024-01-04", 10.2),
        ("2024-01-05", 10.8),
    ]);
    let market = series(&[
        ("2024-01-02", 100.0),
        ("2024-01-03", 101.0),
        ("2024-01-04", 99.0),
        ("2024-01-05", 102.0),
    ]);
    let expected = metrics::beta(&stock, &market);

    // extra dates on either side have no counterpart and must not matter
    let mut padded_stock = stock.clone();
    padded_stock.push(PricePoint::parse("2023-12-29", 3.0).expect("point"));
    let mut padded_market = market.clone();
    padded_market.push(PricePoint::parse("2024-01-06", 500.0).expect("point"));

    assert_eq!(metrics::beta(&padded_stock, &padded_market), expected);
    assert_eq!(metrics::beta(&padded_stock, &market), expected);
    assert!(expected > 0.0);
}

#[test]
fn beta_with_no_shared_dates_is_zero() {
    let stock = series(&[("2024-01-02", 10.0), ("2024-01-03", 11.0), ("2024-01-04", 12.0)]);
    let market = series(&[("2024-02-02", 10.0), ("2024-02-03", 11.0), ("2024-02-04", 12.0)]);

    assert_eq!(metrics::beta(&stock, &market), 0.0);
    assert!(matches!(
        MetricsEngine::default().try_beta(&stock, &market),
        Err(MetricError::InsufficientData { actual: 0, .. })
    ));
}

#[test]
fn repeated_calls_are_bit_identical() {
    let prices = reference_series();
    let market = series(&[
        ("2024-01-02", 300.0),
        ("2024-01-03", 303.0),
        ("2024-01-04", 301.0),
        ("2024-01-05", 306.0),
        ("2024-01-08", 305.0),
        ("2024-01-09", 309.0),
    ]);

    let first = [
        metrics::extended_return_rate(&prices),
        metrics::sharpe_ratio(&prices, 0.02),
        metrics::volatility(&prices),
        metrics::beta(&prices, &market),
    ];
    let second = [
        metrics::extended_return_rate(&prices),
        metrics::sharpe_ratio(&prices, 0.02),
        metrics::volatility(&prices),
        metrics::beta(&prices, &market),
    ];
    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.to_bits(), b.to_bits());
    }
}

#[test]
fn engine_is_shareable_across_threads() {
    let engine = MetricsEngine::default();
    let prices = reference_series();
    let expected = engine.volatility(&prices);

    let results = std::thread::scope(|scope| {
        let handles = (0..4)
            .map(|_| scope.spawn(|| engine.volatility(&prices)))
            .collect::<Vec<_>>();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("worker panicked"))
            .collect::<Vec<_>>()
    });

    assert!(results.iter().all(|value| value.to_bits() == expected.to_bits()));
}
