use finmetrics_core::provider::{alphavantage, records};
use finmetrics_core::{analyze, InputFormat, MetricsEngine, ProviderErrorKind, Symbol};

const IBM_DAILY: &str = r#"{
    "Meta Data": {
        "1. Information": "Daily Prices (open, high, low, close) and Volumes",
        "2. Symbol": "IBM",
        "3. Last Refreshed": "2024-03-08",
        "4. Output Size": "Compact",
        "5. Time Zone": "US/Eastern"
    },
    "Time Series (Daily)": {
        "2024-03-08": {"1. open": "195.0900", "2. high": "197.7700", "3. low": "194.5000", "4. close": "195.9500", "5. volume": "3907100"},
        "2024-03-07": {"1. open": "197.5800", "2. high": "198.7300", "3. low": "196.1400", "4. close": "198.5300", "5. volume": "3871757"},
        "2024-03-06": {"1. open": "193.5000", "2. high": "198.1300", "3. low": "192.9600", "4. close": "196.1600", "5. volume": "6945818"},
        "2024-03-05": {"1. open": "185.8000", "2. high": "192.9400", "3. low": "185.2600", "4. close": "191.9500", "5. volume": "7314531"},
        "2024-03-04": {"1. open": "187.7600", "2. high": "188.3000", "3. low": "185.7900", "4. close": "186.7100", "5. volume": "4203345"}
    }
}"#;

#[test]
fn daily_payload_feeds_analysis() {
    let series = alphavantage::parse_daily_series(IBM_DAILY).expect("payload");
    assert_eq!(series.len(), 5);

    let symbol = Symbol::parse("ibm").expect("symbol");
    let report = analyze(symbol, &series, None, &MetricsEngine::default());
    assert!(report.failures.is_empty());
    assert!(report.analysis.xirr > 0.0);
    assert!(report.analysis.volatility > 0.0);
}

#[test]
fn provider_failures_map_to_client_codes() {
    let cases = [
        (
            r#"{"Note": "Our standard API call frequency is 5 calls per minute."}"#,
            ProviderErrorKind::RateLimited,
            "rate_limited",
        ),
        (
            r#"{"Information": "Daily rate limit reached."}"#,
            ProviderErrorKind::RateLimited,
            "rate_limited",
        ),
        (
            r#"{"Error Message": "Invalid API call. Please retry or visit the documentation."}"#,
            ProviderErrorKind::InvalidSymbol,
            "invalid_symbol",
        ),
        (r#"{}"#, ProviderErrorKind::NoData, "not_found"),
        ("not json", ProviderErrorKind::Malformed, "malformed_payload"),
    ];

    for (body, kind, code) in cases {
        let err = alphavantage::parse_daily_series(body).expect_err("must fail");
        assert_eq!(err.kind(), kind, "{body}");
        assert_eq!(err.code(), code);
    }
}

#[test]
fn input_format_dispatches_to_parser() {
    let body = r#"[{"date":"2024-03-05","close":191.95},{"date":"2024-03-04","close":186.71}]"#;
    let via_format = InputFormat::Records.parse_series(body).expect("records");
    let direct = records::parse_records(body).expect("records");
    assert_eq!(via_format, direct);

    let err = InputFormat::Alphavantage
        .parse_series(body)
        .expect_err("records are not an alphavantage payload");
    assert_eq!(err.kind(), ProviderErrorKind::Malformed);
}
