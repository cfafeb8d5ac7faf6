//! # Domain Models
//!
//! Validated input types for the metrics engine.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Symbol`] | Validated ticker symbol |
//! | [`TradingDate`] | Calendar date of a daily close (`YYYY-MM-DD`) |
//! | [`PricePoint`] | Date plus positive, finite closing price |
//! | [`PriceSeries`] | Closes in caller order with a sorted view |
//!
//! Construction enforces invariants, so a `PriceSeries` never holds a zero,
//! negative or non-finite close:
//!
//! ```rust
//! use finmetrics_core::{PricePoint, ValidationError};
//!
//! let point = PricePoint::parse("2024-01-02", 185.64).expect("valid point");
//! assert_eq!(point.date.to_string(), "2024-01-02");
//!
//! let invalid = PricePoint::parse("2024-01-02", 0.0);
//! assert!(matches!(invalid, Err(ValidationError::NonPositiveValue { .. })));
//! ```

mod date;
mod price;
mod symbol;

pub use date::TradingDate;
pub use price::{PricePoint, PriceSeries};
pub use symbol::Symbol;
