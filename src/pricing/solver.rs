//! Newton-Raphson solver for implied volatility calculation.
//!
//! This module finds the volatility that makes the Black-Scholes price
//! equal to an observed market price. Iteration stops once the relative
//! change in the volatility guess drops to the configured tolerance, when
//! the iteration cap is reached, or when vega evaluates to exactly zero.

use super::black_scholes::BlackScholes;
use super::error::PricingError;
use super::types::{OptionParams, OptionType, SolveReport, SolveStatus};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Value returned by [`calc_implied_volatility`] when vega vanishes.
pub const DEGENERATE_VOLATILITY: f64 = -1.0;

/// Configuration for the Newton-Raphson solver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Convergence tolerance on the relative change of the guess.
    pub tolerance: f64,
    /// Maximum iterations before returning the last guess.
    pub max_iterations: u32,
    /// Starting volatility (default: 1.0 = 100%).
    pub initial_guess: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-4,
            max_iterations: 1000,
            initial_guess: 1.0,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum number of iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the convergence tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the initial volatility guess.
    #[must_use]
    pub fn with_initial_guess(mut self, initial_guess: f64) -> Self {
        self.initial_guess = initial_guess;
        self
    }

    /// Decodes a configuration from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    /// [`PricingError::Deserialization`] for malformed JSON, and
    /// [`PricingError::InvalidConfig`] when the decoded values fail
    /// [`SolverConfig::validate`].
    pub fn from_json(data: &str) -> Result<Self, PricingError> {
        let config: Self =
            serde_json::from_str(data).map_err(|error| PricingError::Deserialization {
                message: error.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the configuration can drive at least one Newton step.
    ///
    /// The loop starts from a relative change of 1, so the tolerance must
    /// lie strictly between 0 and 1.
    ///
    /// # Errors
    /// [`PricingError::InvalidConfig`] when the tolerance is outside (0, 1),
    /// the iteration cap is zero, or the initial guess is not positive.
    pub fn validate(&self) -> Result<(), PricingError> {
        if self.tolerance.is_nan() || self.tolerance <= 0.0 || self.tolerance >= 1.0 {
            return Err(PricingError::InvalidConfig {
                message: format!(
                    "tolerance must be in (0, 1), got {}",
                    self.tolerance
                ),
            });
        }

        if self.max_iterations == 0 {
            return Err(PricingError::InvalidConfig {
                message: "max iterations must be at least 1".to_string(),
            });
        }

        if self.initial_guess.is_nan() || self.initial_guess <= 0.0 {
            return Err(PricingError::InvalidConfig {
                message: format!(
                    "initial guess must be positive, got {}",
                    self.initial_guess
                ),
            });
        }

        Ok(())
    }
}

/// Solves for implied volatility using the Newton-Raphson method.
///
/// Each step refines the guess with
/// σ_{n+1} = σ_n - (BS(σ_n) - market_price) / vega(σ_n)
/// where vega is [`BlackScholes::calc_vega`].
///
/// # Arguments
/// - `params`: Option parameters (spot, strike, rate, time, type)
/// - `market_price`: Observed market price to match
/// - `config`: Solver configuration
///
/// # Returns
/// - `Ok(report)`: terminal state, last guess and iteration count
/// - `Err(PricingError)`: invalid configuration, or a guess/contract that
///   fails parameter derivation (including a step that drives σ to ≤ 0)
///
/// # Example
/// ```
/// use options_calculator::prelude::*;
///
/// let params = OptionParams::call(100.0, 100.0, 0.05, 1.0);
/// let report = solve_iv(&params, 10.4506, &SolverConfig::default())?;
/// assert!(report.is_converged());
/// assert!((report.volatility - 0.2).abs() < 1e-3);
/// # Ok::<(), PricingError>(())
/// ```
pub fn solve_iv(
    params: &OptionParams,
    market_price: f64,
    config: &SolverConfig,
) -> Result<SolveReport, PricingError> {
    config.validate()?;

    let mut vol = config.initial_guess;
    let mut relative_change = 1.0;
    let mut iterations = 0;

    while relative_change > config.tolerance && iterations < config.max_iterations {
        iterations += 1;

        let d1 = params.d1(vol)?;
        let d2 = params.d2(d1, vol)?;

        let residual = params.price_with(vol, d1, d2) - market_price;
        let vega = BlackScholes::calc_vega(params.spot, d1, params.time_to_expiry);

        if vega == 0.0 {
            debug!(iterations, vol, "vega vanished, solve is degenerate");
            return Ok(SolveReport {
                volatility: vol,
                iterations,
                last_relative_change: relative_change,
                status: SolveStatus::DegenerateDerivative,
            });
        }

        let next = vol - residual / vega;
        relative_change = ((next - vol) / vol).abs();
        trace!(iterations, vol, residual, vega, relative_change, "newton step");
        vol = next;
    }

    let status = if !vol.is_finite() || relative_change.is_nan() {
        debug!(iterations, vol, relative_change, "guess is not finite");
        SolveStatus::NonFinite
    } else if relative_change <= config.tolerance {
        debug!(iterations, vol, "implied volatility converged");
        SolveStatus::Converged
    } else {
        debug!(iterations, vol, relative_change, "iteration cap reached");
        SolveStatus::IterationsExhausted
    };

    Ok(SolveReport {
        volatility: vol,
        iterations,
        last_relative_change: relative_change,
        status,
    })
}

/// Implied volatility with the default solver configuration.
///
/// Returns [`DEGENERATE_VOLATILITY`] (`-1.0`) when vega is exactly zero.
/// When the iteration cap is hit the last guess is returned as if it had
/// converged; use [`solve_iv`] to tell the two apart.
///
/// # Errors
/// [`PricingError::InvalidArgument`] when strike or time to expiry is not
/// positive, or when a Newton step drives the guess to ≤ 0.
pub fn calc_implied_volatility(
    option_type: OptionType,
    market_price: f64,
    spot: f64,
    strike: f64,
    rate: f64,
    time: f64,
) -> Result<f64, PricingError> {
    let params = OptionParams::new(spot, strike, rate, time, option_type);
    let report = solve_iv(&params, market_price, &SolverConfig::default())?;
    Ok(report.implied_volatility())
}
