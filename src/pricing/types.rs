//! Types for pricing and implied volatility calculation.

use super::black_scholes::BlackScholes;
use super::error::PricingError;
use super::solver::DEGENERATE_VOLATILITY;
use serde::{Deserialize, Serialize};

/// Option type, selecting the pricing formula the solver inverts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OptionType {
    /// Call option (right to buy the underlying at strike price).
    Call,
    /// Put option (right to sell the underlying at strike price).
    Put,
}

impl OptionType {
    /// Maps a host-side `is_call` flag onto the option type.
    #[must_use]
    pub fn from_is_call(is_call: bool) -> Self {
        if is_call {
            OptionType::Call
        } else {
            OptionType::Put
        }
    }

    /// Prices this option type from precomputed `d1` and `d2`.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn price(
        self,
        vol: f64,
        spot: f64,
        strike: f64,
        rate: f64,
        time: f64,
        d1: f64,
        d2: f64,
    ) -> f64 {
        match self {
            OptionType::Call => BlackScholes::call_price(vol, spot, strike, rate, time, d1, d2),
            OptionType::Put => BlackScholes::put_price(vol, spot, strike, rate, time, d1, d2),
        }
    }
}

/// Contract and market inputs for pricing or implied volatility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionParams {
    /// Underlying spot price in price units.
    pub spot: f64,
    /// Option strike price in price units.
    pub strike: f64,
    /// Risk-free interest rate (annualized, continuously compounded).
    pub risk_free_rate: f64,
    /// Time to expiration in years (e.g., 30 days = 30.0 / 365.0).
    pub time_to_expiry: f64,
    /// Option type (Call or Put).
    pub option_type: OptionType,
}

impl OptionParams {
    /// Creates new option parameters.
    #[must_use]
    pub fn new(
        spot: f64,
        strike: f64,
        risk_free_rate: f64,
        time_to_expiry: f64,
        option_type: OptionType,
    ) -> Self {
        Self {
            spot,
            strike,
            risk_free_rate,
            time_to_expiry,
            option_type,
        }
    }

    /// Creates parameters for a call option.
    #[must_use]
    pub fn call(spot: f64, strike: f64, risk_free_rate: f64, time_to_expiry: f64) -> Self {
        Self::new(
            spot,
            strike,
            risk_free_rate,
            time_to_expiry,
            OptionType::Call,
        )
    }

    /// Creates parameters for a put option.
    #[must_use]
    pub fn put(spot: f64, strike: f64, risk_free_rate: f64, time_to_expiry: f64) -> Self {
        Self::new(
            spot,
            strike,
            risk_free_rate,
            time_to_expiry,
            OptionType::Put,
        )
    }

    /// Decodes parameters from JSON.
    ///
    /// # Errors
    /// [`PricingError::Deserialization`] when `data` is not valid JSON or
    /// lacks a required field.
    pub fn from_json(data: &str) -> Result<Self, PricingError> {
        serde_json::from_str(data).map_err(|error| PricingError::Deserialization {
            message: error.to_string(),
        })
    }

    /// d1 at the given volatility.
    pub fn d1(&self, vol: f64) -> Result<f64, PricingError> {
        BlackScholes::calc_d1(
            vol,
            self.spot,
            self.strike,
            self.risk_free_rate,
            self.time_to_expiry,
        )
    }

    /// d2 paired with a `d1` computed at the same volatility.
    pub fn d2(&self, d1: f64, vol: f64) -> Result<f64, PricingError> {
        BlackScholes::calc_d2(d1, vol, self.time_to_expiry)
    }

    /// Theoretical price at the given volatility.
    ///
    /// # Errors
    /// Propagates [`PricingError::InvalidArgument`] from parameter derivation.
    pub fn price(&self, vol: f64) -> Result<f64, PricingError> {
        let d1 = self.d1(vol)?;
        let d2 = self.d2(d1, vol)?;
        Ok(self.price_with(vol, d1, d2))
    }

    pub(crate) fn price_with(&self, vol: f64, d1: f64, d2: f64) -> f64 {
        self.option_type.price(
            vol,
            self.spot,
            self.strike,
            self.risk_free_rate,
            self.time_to_expiry,
            d1,
            d2,
        )
    }

    /// Calculates the intrinsic value of the option.
    ///
    /// For calls: max(0, spot - strike)
    /// For puts: max(0, strike - spot)
    #[must_use]
    pub fn intrinsic_value(&self) -> f64 {
        match self.option_type {
            OptionType::Call => (self.spot - self.strike).max(0.0),
            OptionType::Put => (self.strike - self.spot).max(0.0),
        }
    }
}

/// Terminal state of a Newton-Raphson solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolveStatus {
    /// Relative change in the guess dropped to the tolerance.
    Converged,
    /// Iteration cap reached before the tolerance was met.
    IterationsExhausted,
    /// Vega evaluated to exactly zero; no further step is possible.
    DegenerateDerivative,
    /// The guess or its relative change became NaN or infinite.
    NonFinite,
}

/// Outcome of an implied volatility solve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveReport {
    /// Last volatility guess. For a degenerate solve this is the guess
    /// at which vega vanished.
    pub volatility: f64,
    /// Number of Newton iterations started.
    pub iterations: u32,
    /// Relative change produced by the last completed step.
    pub last_relative_change: f64,
    /// How the solve terminated.
    pub status: SolveStatus,
}

impl SolveReport {
    /// Returns true if the tolerance was met.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == SolveStatus::Converged
    }

    /// Returns true if the solve stopped on a zero derivative.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.status == SolveStatus::DegenerateDerivative
    }

    /// Collapses the report to the scalar contract: the `-1` sentinel on a
    /// degenerate solve, otherwise the last guess whether or not it converged.
    /// A non-finite solve hands back its guess unchanged, usually NaN.
    #[must_use]
    pub fn implied_volatility(&self) -> f64 {
        match self.status {
            SolveStatus::DegenerateDerivative => DEGENERATE_VOLATILITY,
            SolveStatus::Converged
            | SolveStatus::IterationsExhausted
            | SolveStatus::NonFinite => self.volatility,
        }
    }

    /// Serializes the report to JSON.
    ///
    /// # Errors
    /// [`PricingError::Serialization`] if the encoder rejects the report.
    pub fn to_json(&self) -> Result<String, PricingError> {
        serde_json::to_string(self).map_err(|error| PricingError::Serialization {
            message: error.to_string(),
        })
    }
}
