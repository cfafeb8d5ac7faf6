//! Newton-Raphson root finding over a single scalar.

use thiserror::Error;

use crate::SolverConfig;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SolverError {
    #[error("derivative vanished at x = {at}")]
    ZeroDerivative { at: f64 },
    #[error("iteration left the finite domain after {iterations} steps")]
    NonFinite { iterations: u32 },
    #[error("no convergence within {iterations} iterations (last x = {last})")]
    NoConvergence { iterations: u32, last: f64 },
}

/// Find `x` with `f(x) = 0` starting from `config.initial_guess`.
///
/// Converges once a Newton step is smaller than `config.tolerance`. Both closures
/// may return non-finite values to signal that `x` is outside their domain.
pub fn newton<F, D>(f: F, derivative: D, config: &SolverConfig) -> Result<f64, SolverError>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    let mut x = config.initial_guess;

    for iteration in 1..=config.max_iterations {
        let value = f(x);
        let slope = derivative(x);

        if !value.is_finite() || !slope.is_finite() {
            return Err(SolverError::NonFinite {
                iterations: iteration - 1,
            });
        }
        if value == 0.0 {
            return Ok(x);
        }
        if slope == 0.0 {
            return Err(SolverError::ZeroDerivative { at: x });
        }

        let next = x - value / slope;
        if !next.is_finite() {
            return Err(SolverError::NonFinite {
                iterations: iteration,
            });
        }
        if (next - x).abs() < config.tolerance {
            return Ok(next);
        }
        x = next;
    }

    Err(SolverError::NoConvergence {
        iterations: config.max_iterations,
        last: x,
    })
}
