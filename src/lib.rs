//! # options-calculator
//!
//! Black-Scholes pricing for European calls and puts, and a Newton-Raphson
//! solver that recovers implied volatility from an observed market price.
//!
//! The crate is a pure computation library. It performs no I/O and holds no
//! state between calls; hosts wrap it in whatever binding or CLI they need.
//! Diagnostics are emitted through [`tracing`] and are silent unless the host
//! installs a subscriber.
//!
//! ```
//! use options_calculator::prelude::*;
//!
//! let params = OptionParams::call(100.0, 100.0, 0.05, 1.0);
//! let price = params.price(0.2)?;
//! let iv = calc_implied_volatility(OptionType::Call, price, 100.0, 100.0, 0.05, 1.0)?;
//! assert!((iv - 0.2).abs() < 1e-3);
//! # Ok::<(), PricingError>(())
//! ```

pub mod prelude;
pub mod pricing;
