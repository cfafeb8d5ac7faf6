use std::path::Path;

use finmetrics_core::{analyze, MetricsEngine, Symbol};

use crate::cli::AnalyzeArgs;
use crate::error::CliError;

use super::{load_sources, CommandResult};

pub fn run(args: &AnalyzeArgs, engine: &MetricsEngine) -> Result<CommandResult, CliError> {
    let symbol = match &args.symbol {
        Some(raw) => Symbol::parse(raw)?,
        None => symbol_from_path(&args.source.prices)?,
    };
    let loaded = load_sources(&args.source)?;

    let report = analyze(symbol, &loaded.prices, loaded.benchmark.as_ref(), engine);
    let warnings = report.warnings();
    let data = serde_json::to_value(&report.analysis)?;

    Ok(CommandResult::ok(data).with_warnings(warnings))
}

/// Ticker from the file stem up to the first `_` (`aapl_daily.json` -> `AAPL`).
fn symbol_from_path(path: &Path) -> Result<Symbol, CliError> {
    let stem = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or_default();
    let ticker = stem.split('_').next().unwrap_or(stem);
    Symbol::parse(ticker).map_err(CliError::from)
}
