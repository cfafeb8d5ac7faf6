use finmetrics_core::{Metric, MetricsEngine, ValidationError};
use serde_json::json;

use crate::cli::MetricArgs;
use crate::error::CliError;

use super::{load_sources, CommandResult};

pub fn run(args: &MetricArgs, engine: &MetricsEngine) -> Result<CommandResult, CliError> {
    let metric = Metric::from(args.metric);
    let loaded = load_sources(&args.source)?;

    let outcome = match metric {
        Metric::ExtendedReturnRate => engine.try_extended_return_rate(&loaded.prices),
        Metric::SharpeRatio => engine.try_sharpe_ratio(&loaded.prices),
        Metric::Volatility => engine.try_volatility(&loaded.prices),
        Metric::Beta => {
            let benchmark = loaded.benchmark.as_ref().ok_or_else(|| {
                ValidationError::InvalidConfig {
                    field: "benchmark",
                    reason: String::from("beta requires --benchmark"),
                }
            })?;
            engine.try_beta(&loaded.prices, benchmark)
        }
    };

    let (value, warnings) = match outcome {
        Ok(value) => (value, Vec::new()),
        Err(error) => {
            tracing::warn!(%metric, %error, "metric fell back to 0");
            (0.0, vec![format!("{error}; reported as 0")])
        }
    };

    let data = json!({
        "metric": metric,
        "value": value,
        "observations": loaded.prices.len(),
    });
    Ok(CommandResult::ok(data).with_warnings(warnings))
}
