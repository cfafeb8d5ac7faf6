//! CLI argument definitions for finmetrics.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `analyze` | XIRR, Sharpe, volatility (and beta with a benchmark) for one file |
//! | `metric` | A single metric for one file |
//!
//! # Examples
//!
//! ```bash
//! # Analyze a saved Alpha Vantage TIME_SERIES_DAILY response
//! finmetrics analyze ibm_daily.json --pretty
//!
//! # Beta against a benchmark stored as plain records
//! finmetrics metric beta aapl.json --benchmark spy.json --input records
//!
//! # Fail the run when any metric fell back to 0
//! finmetrics analyze aapl.json --strict
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use finmetrics_core::{InputFormat, Metric};

/// Performance metrics from daily closing prices.
#[derive(Debug, Parser)]
#[command(
    name = "finmetrics",
    author,
    version,
    about = "Performance metrics (XIRR, Sharpe, volatility, beta) from daily closes"
)]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Treat warnings and errors as failures (exit code 5).
    #[arg(long, global = true, default_value_t = false)]
    pub strict: bool,

    /// JSON file with engine settings; missing fields keep their defaults.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Annual risk-free rate as a fraction, overriding the config file.
    #[arg(long, global = true)]
    pub risk_free_rate: Option<f64>,

    /// Log filter (e.g. `debug`, `finmetrics_core=trace`); falls back to RUST_LOG.
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compute every metric for a price file.
    Analyze(AnalyzeArgs),
    /// Compute one metric for a price file.
    Metric(MetricArgs),
}

#[derive(Debug, Args)]
pub struct SourceArgs {
    /// Price file to read.
    pub prices: PathBuf,

    /// Benchmark price file (enables beta).
    #[arg(long)]
    pub benchmark: Option<PathBuf>,

    /// Payload shape of the price files.
    #[arg(long, value_enum, default_value_t = InputSelector::Alphavantage)]
    pub input: InputSelector,
}

#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Ticker to report under; defaults to the price file stem.
    #[arg(long)]
    pub symbol: Option<String>,
}

#[derive(Debug, Args)]
pub struct MetricArgs {
    /// Metric to compute.
    #[arg(value_enum)]
    pub metric: MetricSelector,

    #[command(flatten)]
    pub source: SourceArgs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputSelector {
    Alphavantage,
    Records,
}

impl From<InputSelector> for InputFormat {
    fn from(value: InputSelector) -> Self {
        match value {
            InputSelector::Alphavantage => InputFormat::Alphavantage,
            InputSelector::Records => InputFormat::Records,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MetricSelector {
    Xirr,
    Sharpe,
    Volatility,
    Beta,
}

impl From<MetricSelector> for Metric {
    fn from(value: MetricSelector) -> Self {
        match value {
            MetricSelector::Xirr => Metric::ExtendedReturnRate,
            MetricSelector::Sharpe => Metric::SharpeRatio,
            MetricSelector::Volatility => Metric::Volatility,
            MetricSelector::Beta => Metric::Beta,
        }
    }
}
