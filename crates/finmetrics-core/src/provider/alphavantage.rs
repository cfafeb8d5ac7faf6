//! Alpha Vantage `TIME_SERIES_DAILY` payloads.
//!
//! Alpha Vantage answers with HTTP 200 even for failures, so the body decides:
//!
//! | Body | Result |
//! |------|--------|
//! | `"Note"` / `"Information"` key | [`ProviderErrorKind::RateLimited`](super::ProviderErrorKind) |
//! | `"Error Message"` key | [`ProviderErrorKind::InvalidSymbol`](super::ProviderErrorKind) |
//! | no `"Time Series ..."` key | [`ProviderErrorKind::NoData`](super::ProviderErrorKind) |

use std::collections::BTreeMap;
use std::collections::HashMap;

use serde::Deserialize;

use super::ProviderError;
use crate::{PricePoint, PriceSeries, TradingDate};

const RATE_LIMIT_KEYS: [&str; 2] = ["Note", "Information"];
const ERROR_KEY: &str = "Error Message";
const TIME_SERIES_PREFIX: &str = "Time Series";

/// The series key varies with the requested function, e.g.
/// `"Time Series (Daily)"`, so the top level is kept as raw values.
#[derive(Debug, Deserialize)]
struct AlphaVantageTimeSeriesResponse {
    #[serde(flatten)]
    fields: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct AlphaVantageDailyBar {
    #[serde(rename = "4. close")]
    close: String,
}

impl AlphaVantageTimeSeriesResponse {
    fn message(&self, key: &str) -> Option<String> {
        self.fields.get(key).map(|value| match value.as_str() {
            Some(text) => text.to_owned(),
            None => value.to_string(),
        })
    }

    fn time_series(&self) -> Option<&serde_json::Value> {
        self.fields
            .iter()
            .find(|(key, _)| key.starts_with(TIME_SERIES_PREFIX))
            .map(|(_, value)| value)
    }
}

/// Parse a `TIME_SERIES_DAILY` body into a price series (oldest first).
pub fn parse_daily_series(body: &str) -> Result<PriceSeries, ProviderError> {
    let response: AlphaVantageTimeSeriesResponse = serde_json::from_str(body)?;

    if let Some(message) = RATE_LIMIT_KEYS.iter().find_map(|key| response.message(key)) {
        return Err(ProviderError::rate_limited(format!(
            "alphavantage rate limit exceeded: {message}"
        )));
    }

    if let Some(message) = response.message(ERROR_KEY) {
        return Err(ProviderError::invalid_symbol(format!(
            "alphavantage rejected the symbol: {message}"
        )));
    }

    let raw_series = response
        .time_series()
        .ok_or_else(|| ProviderError::no_data("no time series data in response"))?;
    let bars: BTreeMap<String, AlphaVantageDailyBar> =
        serde_json::from_value(raw_series.clone())
            .map_err(|error| ProviderError::malformed(format!("invalid daily bar: {error}")))?;

    if bars.is_empty() {
        return Err(ProviderError::no_data("time series contains no bars"));
    }

    bars.into_iter()
        .map(|(date, bar)| normalize_bar(&date, &bar))
        .collect::<Result<PriceSeries, _>>()
}

fn normalize_bar(date: &str, bar: &AlphaVantageDailyBar) -> Result<PricePoint, ProviderError> {
    let date = TradingDate::parse(date)?;
    let close = bar.close.trim().parse::<f64>().map_err(|_| {
        ProviderError::malformed(format!("close '{}' on {date} is not a number", bar.close))
    })?;
    Ok(PricePoint::new(date, close)?)
}
