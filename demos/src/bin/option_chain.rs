//! Example pricing a small option chain and inverting it back to implied volatility.
//!
//! This example shows how to:
//! 1. Price calls and puts across strikes with a volatility smile
//! 2. Recover the implied volatility of each quote with the Newton-Raphson solver
//! 3. Tell converged solves from exhausted or degenerate ones
//!
//! Run with `RUST_LOG=options_calculator=trace` to see every Newton step.

use options_calculator::prelude::*;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

const SPOT: f64 = 100.0;
const RATE: f64 = 0.05;
const EXPIRY: f64 = 0.5;

fn smile_vol(strike: f64) -> f64 {
    let moneyness = (strike / SPOT).ln();
    0.22 + 0.4 * moneyness * moneyness - 0.05 * moneyness
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = SolverConfig::default();
    info!(
        tolerance = config.tolerance,
        max_iterations = config.max_iterations,
        "Solver configured"
    );

    for strike in [80.0, 90.0, 100.0, 110.0, 120.0] {
        for option_type in [OptionType::Call, OptionType::Put] {
            let params = OptionParams::new(SPOT, strike, RATE, EXPIRY, option_type);
            let vol = smile_vol(strike);

            let price = match params.price(vol) {
                Ok(price) => price,
                Err(e) => {
                    error!("Failed to price {:?} K={}: {}", option_type, strike, e);
                    continue;
                }
            };

            match solve_iv(&params, price, &config) {
                Ok(report) if report.is_converged() => info!(
                    "{:?} K={:.0} price={:.4} vol={:.4} iv={:.4} iterations={}",
                    option_type, strike, price, vol, report.volatility, report.iterations
                ),
                Ok(report) => warn!(
                    "{:?} K={:.0} solve ended as {:?}: {}",
                    option_type,
                    strike,
                    report.status,
                    report.to_json().unwrap_or_default()
                ),
                Err(e) => error!("{:?} K={:.0} solve failed: {}", option_type, strike, e),
            }
        }
    }

    // Far out-of-the-money contract whose vega underflows at the initial guess.
    match calc_implied_volatility(OptionType::Call, 0.5, 1e-30, 100.0, 0.0, 1.0) {
        Ok(iv) if iv == DEGENERATE_VOLATILITY => warn!("Degenerate solve returned sentinel {}", iv),
        Ok(iv) => info!("Unexpected implied volatility {}", iv),
        Err(e) => error!("Degenerate example failed: {}", e),
    }

    match serde_json::to_string_pretty(&config) {
        Ok(json) => info!("Solver configuration:\n{}", json),
        Err(e) => error!("Failed to encode configuration: {}", e),
    }
}
