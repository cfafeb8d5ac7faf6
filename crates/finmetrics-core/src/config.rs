//! Tunable constants of the metrics engine.
//!
//! Every field has a default, so an empty JSON object (or no file at all) yields
//! the standard setup: 2% risk-free rate, 252 trading days, 365.25-day XIRR basis
//! and a Newton solver started at 10% with 100 iterations.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{CoreError, ValidationError};

pub const DEFAULT_RISK_FREE_RATE: f64 = 0.02;
pub const DEFAULT_TRADING_DAYS_PER_YEAR: u32 = 252;
pub const DEFAULT_DAYS_PER_YEAR: f64 = 365.25;

/// Newton-Raphson settings used by the XIRR solver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    pub initial_guess: f64,
    pub max_iterations: u32,
    /// Absolute step size below which the iteration counts as converged.
    pub tolerance: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            initial_guess: 0.1,
            max_iterations: 100,
            tolerance: 1.48e-8,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    /// Annual risk-free rate as a fraction (0.02 = 2%).
    pub risk_free_rate: f64,
    pub trading_days_per_year: u32,
    /// Day-count basis for the XIRR exponent.
    pub days_per_year: f64,
    pub solver: SolverConfig,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            risk_free_rate: DEFAULT_RISK_FREE_RATE,
            trading_days_per_year: DEFAULT_TRADING_DAYS_PER_YEAR,
            days_per_year: DEFAULT_DAYS_PER_YEAR,
            solver: SolverConfig::default(),
        }
    }
}

impl MetricsConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, CoreError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|error| {
            ValidationError::InvalidConfig {
                field: "path",
                reason: format!("cannot read {}: {error}", path.display()),
            }
        })?;
        Self::from_json_str(&raw)
    }

    pub fn with_risk_free_rate(mut self, risk_free_rate: f64) -> Result<Self, ValidationError> {
        self.risk_free_rate = risk_free_rate;
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.risk_free_rate.is_finite() {
            return Err(invalid("risk_free_rate", "must be finite"));
        }
        if self.trading_days_per_year == 0 {
            return Err(invalid("trading_days_per_year", "must be greater than zero"));
        }
        if !(self.days_per_year.is_finite() && self.days_per_year > 0.0) {
            return Err(invalid("days_per_year", "must be a positive finite number"));
        }
        if !self.solver.initial_guess.is_finite() || self.solver.initial_guess <= -1.0 {
            return Err(invalid("solver.initial_guess", "must be finite and above -1"));
        }
        if self.solver.max_iterations == 0 {
            return Err(invalid("solver.max_iterations", "must be greater than zero"));
        }
        if !(self.solver.tolerance.is_finite() && self.solver.tolerance > 0.0) {
            return Err(invalid("solver.tolerance", "must be a positive finite number"));
        }
        Ok(())
    }

    pub(crate) fn trading_days(&self) -> f64 {
        f64::from(self.trading_days_per_year)
    }
}

fn invalid(field: &'static str, reason: &str) -> ValidationError {
    ValidationError::InvalidConfig {
        field,
        reason: reason.to_owned(),
    }
}
