use options_calculator::prelude::*;
use std::thread;

const TOLERANCE: f64 = 1e-3;

#[test]
fn test_reference_scenario() {
    let params = OptionParams::call(100.0, 100.0, 0.05, 1.0);
    let price = params.price(0.2).unwrap();
    assert!((price - 10.4506).abs() < 1e-4);

    let iv = calc_implied_volatility(OptionType::from_is_call(true), price, 100.0, 100.0, 0.05, 1.0)
        .unwrap();
    assert!((iv - 0.2).abs() < TOLERANCE);
}

#[test]
fn test_round_trip_various_moneyness() {
    let target_vol = 0.25;
    let config = SolverConfig::default();

    for strike in [80.0, 90.0, 100.0, 110.0, 120.0] {
        for option_type in [OptionType::Call, OptionType::Put] {
            let params = OptionParams::new(100.0, strike, 0.05, 0.5, option_type);
            let market_price = params.price(target_vol).unwrap();

            let report = solve_iv(&params, market_price, &config).unwrap();
            assert!(report.is_converged(), "{option_type:?} K={strike} did not converge");
            assert!(report.iterations < config.max_iterations);
            assert!(
                (report.volatility - target_vol).abs() < TOLERANCE,
                "{option_type:?} K={strike} recovered {}",
                report.volatility
            );
        }
    }
}

#[test]
fn test_round_trip_various_maturities() {
    let target_vol = 0.25;

    for days in [7, 30, 90, 365, 730] {
        let time = days as f64 / 365.0;
        let params = OptionParams::call(100.0, 100.0, 0.01, time);
        let market_price = params.price(target_vol).unwrap();

        let iv = calc_implied_volatility(OptionType::Call, market_price, 100.0, 100.0, 0.01, time)
            .unwrap();
        assert!(
            (iv - target_vol).abs() < TOLERANCE,
            "Failed for {days} days maturity"
        );
    }
}

#[test]
fn test_scalar_api_matches_report() {
    let params = OptionParams::put(100.0, 105.0, 0.02, 0.75);
    let market_price = params.price(0.4).unwrap();

    let report = solve_iv(&params, market_price, &SolverConfig::default()).unwrap();
    let iv = calc_implied_volatility(OptionType::Put, market_price, 100.0, 105.0, 0.02, 0.75)
        .unwrap();

    assert_eq!(iv, report.implied_volatility());
}

#[test]
fn test_degenerate_vega_returns_sentinel() {
    // Vega underflows to zero at the initial guess for a far out-of-the-money call.
    let iv = calc_implied_volatility(OptionType::Call, 0.5, 1e-30, 100.0, 0.0, 1.0).unwrap();
    assert_eq!(iv, -1.0);
    assert_eq!(iv, DEGENERATE_VOLATILITY);

    let params = OptionParams::call(1e-30, 100.0, 0.0, 1.0);
    let report = solve_iv(&params, 0.5, &SolverConfig::default()).unwrap();
    assert!(report.is_degenerate());
    assert_eq!(report.iterations, 1);
}

#[test]
fn test_invalid_contract_propagates() {
    let result = calc_implied_volatility(OptionType::Call, 5.0, 100.0, -100.0, 0.05, 1.0);
    assert!(matches!(result, Err(PricingError::InvalidArgument { .. })));

    let result = calc_implied_volatility(OptionType::Put, 5.0, 100.0, 100.0, 0.05, 0.0);
    assert!(matches!(result, Err(PricingError::InvalidArgument { .. })));
}

#[test]
fn test_iteration_cap_is_reported() {
    let params = OptionParams::call(100.0, 100.0, 0.05, 1.0);
    let config = SolverConfig::new().with_max_iterations(3);

    let report = solve_iv(&params, 10.4506, &config).unwrap();

    assert_eq!(report.status, SolveStatus::IterationsExhausted);
    assert_eq!(report.iterations, 3);
    assert!(report.volatility > 0.2);
}

#[test]
fn test_tighter_tolerance_closer_result() {
    let params = OptionParams::call(100.0, 100.0, 0.05, 1.0);
    let market_price = params.price(0.2).unwrap();

    let loose = solve_iv(&params, market_price, &SolverConfig::default()).unwrap();
    let tight = solve_iv(
        &params,
        market_price,
        &SolverConfig::new().with_tolerance(1e-10),
    )
    .unwrap();

    assert!(tight.is_converged());
    assert!(tight.iterations > loose.iterations);
    assert!((tight.volatility - 0.2).abs() <= (loose.volatility - 0.2).abs());
    assert!((tight.volatility - 0.2).abs() < 1e-8);
}

#[test]
fn test_config_from_json_drives_solve() {
    let config = SolverConfig::from_json(r#"{"tolerance":1e-8,"initial_guess":0.5}"#).unwrap();
    let params = OptionParams::from_json(
        r#"{"spot":100.0,"strike":100.0,"risk_free_rate":0.05,"time_to_expiry":1.0,"option_type":"Call"}"#,
    )
    .unwrap();

    let report = solve_iv(&params, params.price(0.2).unwrap(), &config).unwrap();
    assert!((report.volatility - 0.2).abs() < 1e-6);
}

#[test]
fn test_parallel_solves_match_serial() {
    let contracts: Vec<(OptionParams, f64)> = [0.15, 0.2, 0.35, 0.5, 0.8]
        .iter()
        .zip([90.0, 95.0, 100.0, 105.0, 110.0])
        .map(|(&vol, strike)| {
            let params = OptionParams::call(100.0, strike, 0.03, 0.5);
            let price = params.price(vol).unwrap();
            (params, price)
        })
        .collect();

    let config = SolverConfig::default();
    let serial: Vec<f64> = contracts
        .iter()
        .map(|(params, price)| solve_iv(params, *price, &config).unwrap().volatility)
        .collect();

    let parallel: Vec<f64> = thread::scope(|scope| {
        let handles: Vec<_> = contracts
            .iter()
            .map(|(params, price)| {
                let config = &config;
                scope.spawn(move || solve_iv(params, *price, config).unwrap().volatility)
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(serial, parallel);
}
