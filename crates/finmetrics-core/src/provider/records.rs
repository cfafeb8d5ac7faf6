use crate::PriceSeries;

use super::ProviderError;

/// Parse a JSON array of `{ "date": "YYYY-MM-DD", "close": number }` records.
pub fn parse_records(body: &str) -> Result<PriceSeries, ProviderError> {
    let series: PriceSeries = serde_json::from_str(body)?;
    if series.is_empty() {
        return Err(ProviderError::no_data("price record list is empty"));
    }
    Ok(series)
}
