//! Black-Scholes pricing model for European calls and puts.
//!
//! The functions here are the building blocks the implied volatility
//! solver iterates over. Parameter derivation validates its inputs;
//! the pricing functions trust the caller and do pure arithmetic on
//! precomputed `d1` and `d2`.

use super::error::PricingError;
use statrs::function::erf::erfc;
use std::f64::consts::FRAC_1_SQRT_2;
use tracing::debug;

/// Black-Scholes pricing model implementation.
///
/// Stateless; every method is a pure function of its arguments.
pub struct BlackScholes;

impl BlackScholes {
    /// Standard normal cumulative distribution function (CDF).
    ///
    /// Computed through the complementary error function,
    /// Φ(x) = 0.5 · erfc(−x/√2). Far tails underflow to exactly 0
    /// and saturate to exactly 1.
    ///
    /// # Arguments
    /// - `x`: Input value
    ///
    /// # Returns
    /// Probability that a standard normal variable is less than or equal to x
    #[must_use]
    pub fn cdf_norm(x: f64) -> f64 {
        0.5 * erfc(-x * FRAC_1_SQRT_2)
    }

    /// Calculates the d1 parameter of the Black-Scholes formula.
    ///
    /// d1 = [ln(S/K) + (r + σ²/2)T] / (σ√T)
    ///
    /// # Arguments
    /// - `vol`: Volatility (σ)
    /// - `spot`: Current underlying price (S)
    /// - `strike`: Option strike price (K)
    /// - `rate`: Risk-free interest rate (r)
    /// - `time`: Time to expiration in years (T)
    ///
    /// # Errors
    /// [`PricingError::InvalidArgument`] when `vol`, `time` or `strike` is
    /// not strictly positive. NaN inputs are not rejected and yield NaN.
    pub fn calc_d1(
        vol: f64,
        spot: f64,
        strike: f64,
        rate: f64,
        time: f64,
    ) -> Result<f64, PricingError> {
        if vol <= 0.0 || time <= 0.0 || strike <= 0.0 {
            debug!(vol, time, strike, "rejected d1 inputs");
            return Err(PricingError::invalid_argument(format!(
                "volatility, time to expiry and strike must be positive, got vol={vol}, time={time}, strike={strike}"
            )));
        }

        Ok((1.0 / (vol * time.sqrt())) * ((spot / strike).ln() + (rate + vol * vol / 2.0) * time))
    }

    /// Calculates the d2 parameter of the Black-Scholes formula.
    ///
    /// d2 = d1 − σ√T
    ///
    /// `d1` must have been derived from the same `vol` and `time`.
    ///
    /// # Errors
    /// [`PricingError::InvalidArgument`] when `vol` or `time` is not
    /// strictly positive.
    pub fn calc_d2(d1: f64, vol: f64, time: f64) -> Result<f64, PricingError> {
        if vol <= 0.0 || time <= 0.0 {
            debug!(vol, time, "rejected d2 inputs");
            return Err(PricingError::invalid_argument(format!(
                "volatility and time to expiry must be positive, got vol={vol}, time={time}"
            )));
        }

        Ok(d1 - vol * time.sqrt())
    }

    /// Black-Scholes call price.
    ///
    /// C = N(d1)·S − N(d2)·K·e^(−rT)
    ///
    /// `vol` is part of the signature but not read; the volatility is
    /// already folded into `d1` and `d2`.
    #[must_use]
    pub fn call_price(
        _vol: f64,
        spot: f64,
        strike: f64,
        rate: f64,
        time: f64,
        d1: f64,
        d2: f64,
    ) -> f64 {
        Self::cdf_norm(d1) * spot - Self::cdf_norm(d2) * strike * (-rate * time).exp()
    }

    /// Black-Scholes put price.
    ///
    /// P = −N(−d1)·S + N(−d2)·K·e^(−rT)
    #[must_use]
    pub fn put_price(
        _vol: f64,
        spot: f64,
        strike: f64,
        rate: f64,
        time: f64,
        d1: f64,
        d2: f64,
    ) -> f64 {
        -Self::cdf_norm(-d1) * spot + Self::cdf_norm(-d2) * strike * (-rate * time).exp()
    }

    /// Volatility sensitivity used by the Newton-Raphson solver.
    ///
    /// Vega = S · N(d1) · √T
    ///
    /// Note this weights by the normal CDF at d1, not the density that
    /// textbook vega uses. Solver trajectories and the zero-vega sentinel
    /// depend on this exact form, so it must not be swapped for the PDF.
    #[must_use]
    pub fn calc_vega(spot: f64, d1: f64, time: f64) -> f64 {
        spot * Self::cdf_norm(d1) * time.sqrt()
    }
}
