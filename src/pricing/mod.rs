//! Black-Scholes pricing and implied volatility for European options.
//!
//! Components, leaf-first:
//!
//! - [`BlackScholes::cdf_norm`]: standard normal CDF
//! - [`BlackScholes::calc_d1`] / [`BlackScholes::calc_d2`]: validated parameter derivation
//! - [`BlackScholes::call_price`] / [`BlackScholes::put_price`]: closed-form prices
//! - [`BlackScholes::calc_vega`]: volatility sensitivity consumed by the solver
//! - [`solve_iv`] / [`calc_implied_volatility`]: Newton-Raphson inversion
//!
//! Every function is pure. Independent solves can run on separate threads
//! without coordination.
//!
//! # Example
//!
//! ```
//! use options_calculator::pricing::{OptionType, calc_implied_volatility};
//!
//! let iv = calc_implied_volatility(OptionType::Call, 10.4506, 100.0, 100.0, 0.05, 1.0)?;
//! println!("IV: {:.2}%", iv * 100.0);
//! # Ok::<(), options_calculator::pricing::PricingError>(())
//! ```

mod black_scholes;
mod error;
mod solver;
mod types;

pub use black_scholes::BlackScholes;
pub use error::PricingError;
pub use solver::{DEGENERATE_VOLATILITY, SolverConfig, calc_implied_volatility, solve_iv};
pub use types::{OptionParams, OptionType, SolveReport, SolveStatus};
