mod analyze;
mod metric;

use std::path::Path;

use finmetrics_core::{
    Envelope, EnvelopeError, EnvelopeMeta, InputFormat, MetricsConfig, MetricsEngine, PriceSeries,
};
use serde_json::Value;
use tracing::debug;

use crate::cli::{Cli, Command, SourceArgs};
use crate::error::CliError;

pub struct CommandResult {
    pub data: Value,
    pub warnings: Vec<String>,
    pub errors: Vec<EnvelopeError>,
}

impl CommandResult {
    pub fn ok(data: Value) -> Self {
        Self {
            data,
            warnings: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// No data, only the error that prevented it.
    pub fn failed(error: EnvelopeError) -> Self {
        Self {
            data: Value::Null,
            warnings: Vec::new(),
            errors: vec![error],
        }
    }

    pub fn with_warnings(mut self, warnings: Vec<String>) -> Self {
        self.warnings.extend(warnings);
        self
    }
}

pub fn run(cli: &Cli) -> Result<Envelope<Value>, CliError> {
    let engine = build_engine(cli)?;

    let outcome = match &cli.command {
        Command::Analyze(args) => analyze::run(args, &engine),
        Command::Metric(args) => metric::run(args, &engine),
    };

    let CommandResult {
        data,
        warnings,
        errors,
    } = match outcome {
        Ok(result) => result,
        Err(CliError::Provider { path, source }) => {
            let mut error = EnvelopeError::from(&source);
            error.message = format!("{path}: {}", error.message);
            CommandResult::failed(error)
        }
        Err(error) => return Err(error),
    };

    let mut meta = EnvelopeMeta::generate();
    for warning in warnings {
        meta.push_warning(warning);
    }

    Envelope::with_errors(meta, data, errors).map_err(CliError::from)
}

fn build_engine(cli: &Cli) -> Result<MetricsEngine, CliError> {
    let mut config = match &cli.config {
        Some(path) => MetricsConfig::load(path)?,
        None => MetricsConfig::default(),
    };
    if let Some(rate) = cli.risk_free_rate {
        config = config.with_risk_free_rate(rate)?;
    }
    debug!(?config, "metrics engine configured");
    Ok(MetricsEngine::new(config))
}

/// Primary series plus the optional benchmark, both parsed with the same format.
pub(crate) struct LoadedSeries {
    pub prices: PriceSeries,
    pub benchmark: Option<PriceSeries>,
}

pub(crate) fn load_sources(source: &SourceArgs) -> Result<LoadedSeries, CliError> {
    let format = InputFormat::from(source.input);
    let prices = load_series(&source.prices, format)?;
    let benchmark = source
        .benchmark
        .as_deref()
        .map(|path| load_series(path, format))
        .transpose()?;
    Ok(LoadedSeries { prices, benchmark })
}

fn load_series(path: &Path, format: InputFormat) -> Result<PriceSeries, CliError> {
    let body = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.display().to_string(),
        source,
    })?;
    let series = format
        .parse_series(&body)
        .map_err(|source| CliError::Provider {
            path: path.display().to_string(),
            source,
        })?;
    debug!(path = %path.display(), %format, points = series.len(), "loaded price series");
    Ok(series)
}
