//! # Finmetrics Core
//!
//! Performance metrics over daily closing prices.
//!
//! ## Overview
//!
//! - **Domain models** for tickers, trading dates and price series
//! - **Metrics engine** computing XIRR, Sharpe ratio, volatility and beta
//! - **Analysis report** with rounding and risk buckets for presentation
//! - **Provider payload parsing** for Alpha Vantage daily series and plain records
//! - **Response envelope** with metadata and structured errors
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`analysis`] | Per-symbol report and qualitative buckets |
//! | [`config`] | Engine configuration |
//! | [`domain`] | Symbol, TradingDate, PricePoint, PriceSeries |
//! | [`envelope`] | Response envelope with metadata |
//! | [`error`] | Core error types |
//! | [`metrics`] | The metrics engine |
//! | [`provider`] | Payload parsing (no I/O) |
//!
//! ## Quick Start
//!
//! ```rust
//! use finmetrics_core::{metrics, PriceSeries};
//!
//! let series = PriceSeries::from_pairs([
//!     ("2024-01-01", 100.0),
//!     ("2024-01-02", 102.0),
//!     ("2024-01-03", 101.0),
//!     ("2024-01-04", 105.0),
//! ])
//! .expect("valid closes");
//!
//! let volatility = metrics::volatility(&series);
//! let sharpe = metrics::sharpe_ratio(&series, 0.02);
//! assert!(volatility > 0.0);
//! assert!(sharpe.is_finite());
//! ```
//!
//! ## Error Handling
//!
//! Metric functions never fail; they degrade to `0.0` and log through `tracing`.
//! Everything else returns `Result` with structured errors:
//!
//! ```rust
//! use finmetrics_core::provider::{alphavantage, ProviderErrorKind};
//!
//! let err = alphavantage::parse_daily_series(r#"{"Note": "limit reached"}"#).unwrap_err();
//! match err.kind() {
//!     ProviderErrorKind::RateLimited => { /* wait and retry */ }
//!     ProviderErrorKind::InvalidSymbol | ProviderErrorKind::NoData => { /* report */ }
//!     ProviderErrorKind::Malformed => {}
//! }
//! ```

pub mod analysis;
pub mod config;
pub mod domain;
pub mod envelope;
pub mod error;
pub mod metrics;
pub mod provider;

// Re-export commonly used types at crate root for convenience

// Analysis
pub use analysis::{analyze, AnalysisReport, RiskLevel, SharpeRating, StockAnalysis};

// Configuration
pub use config::{MetricsConfig, SolverConfig};

// Domain models
pub use domain::{PricePoint, PriceSeries, Symbol, TradingDate};

// Envelope types
pub use envelope::{Envelope, EnvelopeError, EnvelopeMeta, SCHEMA_VERSION};

// Error types
pub use error::{CoreError, MetricError, ValidationError};

// Metrics engine
pub use metrics::{CashFlow, Metric, MetricsEngine};

// Provider parsing
pub use provider::{InputFormat, ProviderError, ProviderErrorKind};
