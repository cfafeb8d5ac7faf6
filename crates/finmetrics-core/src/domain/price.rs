use serde::{Deserialize, Serialize};

use crate::{TradingDate, ValidationError};

/// Daily closing price on a given date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPricePoint")]
pub struct PricePoint {
    pub date: TradingDate,
    pub close: f64,
}

impl PricePoint {
    pub fn new(date: TradingDate, close: f64) -> Result<Self, ValidationError> {
        validate_positive("close", close)?;
        Ok(Self { date, close })
    }

    /// Convenience constructor from an ISO date string.
    pub fn parse(date: &str, close: f64) -> Result<Self, ValidationError> {
        Self::new(TradingDate::parse(date)?, close)
    }
}

#[derive(Deserialize)]
struct RawPricePoint {
    date: TradingDate,
    close: f64,
}

impl TryFrom<RawPricePoint> for PricePoint {
    type Error = ValidationError;

    fn try_from(value: RawPricePoint) -> Result<Self, Self::Error> {
        Self::new(value.date, value.close)
    }
}

/// Daily closes in caller order.
///
/// Input order carries no meaning. Every calculation works on [`PriceSeries::sorted`],
/// a stable ascending-by-date view, so records sharing a date keep their input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    pub fn new(points: Vec<PricePoint>) -> Self {
        Self { points }
    }

    /// Build a series from `(date, close)` pairs, validating each one.
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        pairs
            .into_iter()
            .map(|(date, close)| PricePoint::parse(date, close))
            .collect::<Result<Vec<_>, _>>()
            .map(Self::new)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn push(&mut self, point: PricePoint) {
        self.points.push(point);
    }

    pub fn sorted(&self) -> Vec<PricePoint> {
        let mut sorted = self.points.clone();
        sorted.sort_by_key(|point| point.date);
        sorted
    }

    pub fn closes_sorted(&self) -> Vec<f64> {
        self.sorted().into_iter().map(|point| point.close).collect()
    }

    /// Earliest and latest points by date, if the series has at least one point.
    pub fn first_last(&self) -> Option<(PricePoint, PricePoint)> {
        let sorted = self.sorted();
        Some((*sorted.first()?, *sorted.last()?))
    }
}

impl FromIterator<PricePoint> for PriceSeries {
    fn from_iter<T: IntoIterator<Item = PricePoint>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl From<Vec<PricePoint>> for PriceSeries {
    fn from(points: Vec<PricePoint>) -> Self {
        Self::new(points)
    }
}

fn validate_positive(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteValue { field });
    }
    if value <= 0.0 {
        return Err(ValidationError::NonPositiveValue { field });
    }
    Ok(())
}
