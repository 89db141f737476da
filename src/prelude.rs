//! Flat re-exports of the public pricing API.

pub use crate::pricing::{
    BlackScholes, DEGENERATE_VOLATILITY, OptionParams, OptionType, PricingError, SolveReport,
    SolveStatus, SolverConfig, calc_implied_volatility, solve_iv,
};
