
use black_scholes_lib::{
    black_scholes_call_put, load_market_params, price_batch, price_configured, price_csv_file,
    read_market_params, MarketParams, PricingConfig,
};
use test_utils::{
    create_test_config, create_verbose_test_config, load_test_params, BATCH_CONFIG, PARAMS_CSV,
};

/// Every row of the shipped CSV prices to exactly what the pricing call returns
#[test]
fn test_batch_matches_single_calls() {
    let rows = load_test_params();
    println!("Loaded {} parameter rows", rows.len());
    assert_eq!(rows.len(), 7);

    let results = price_batch(&rows, &create_verbose_test_config()).expect("Batch pricing failed");
    assert_eq!(results.len(), rows.len());

    for (row, result) in rows.iter().zip(&results) {
        let (call, put) = black_scholes_call_put(
            row.underlying_price,
            row.strike_price,
            row.years_to_exp,
            row.risk_free_rate,
            row.volatility,
        );
        assert_eq!(result.params(), *row);
        assert_eq!(result.call_price, call);
        assert_eq!(result.put_price, put);
    }

    // Expired rows carry intrinsic value
    assert_eq!((results[1].call_price, results[1].put_price), (10.0, 0.0));
    assert_eq!((results[2].call_price, results[2].put_price), (0.0, 10.0));
    assert_eq!((results[3].call_price, results[3].put_price), (0.0, 0.0));
}

#[test]
fn test_config_file_resolves_batch_input() {
    let config = PricingConfig::from_file(BATCH_CONFIG).expect("Failed to load config");
    assert!(config.validate_inputs);
    assert_eq!(config.params, MarketParams::demo());

    let input = config.batch_input.clone().expect("batch_input should be set");
    assert!(input.ends_with("params.csv"));
    assert_eq!(
        load_market_params(&input).unwrap(),
        load_market_params(PARAMS_CSV).unwrap()
    );

    let mut out = Vec::new();
    let results = price_csv_file(&input, &mut out, &config).expect("CSV pricing failed");

    // Output parses back with the same inputs in the same order
    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("underlying_price,strike_price,"));
    let reparsed = read_market_params(text.as_bytes()).unwrap();
    let priced: Vec<_> = results.iter().map(|r| r.params()).collect();
    assert_eq!(reparsed, priced);
}

#[test]
fn test_degenerate_rows_without_validation() {
    let rows = load_market_params("tests/data/degenerate.csv").unwrap();
    let results = price_batch(&rows, &create_test_config()).unwrap();

    assert!(results[0].prices().is_finite());
    assert!(results[1].call_price.is_nan() && results[1].put_price.is_nan());
    assert!(results[2].call_price.is_nan() && results[2].put_price.is_nan());
}

#[test]
fn test_degenerate_rows_with_validation() {
    let config = PricingConfig::strict();
    let err = price_csv_file("tests/data/degenerate.csv", std::io::sink(), &config).unwrap_err();
    assert!(err.to_string().contains("row 1"), "unexpected error: {:#}", err);
}

#[test]
fn test_missing_files_are_reported() {
    let err = load_market_params("tests/data/does_not_exist.csv").unwrap_err();
    assert!(err.to_string().contains("does_not_exist.csv"));

    let err = PricingConfig::from_file("tests/data/does_not_exist.toml").unwrap_err();
    assert!(err.to_string().contains("does_not_exist.toml"));
}

/// The single-set path keeps degenerate prices and only rejects them under validation
#[test]
fn test_configured_parameters_follow_the_same_policy_as_batches() {
    let mut config = PricingConfig::demo();
    let prices = price_configured(&config).expect("Demo pricing failed");
    assert!((prices.call_price - 8.916037).abs() < 1e-6);
    assert!((prices.put_price - 6.935905).abs() < 1e-6);

    config.params = MarketParams::new(100.0, 100.0, 1.0, 0.0, 0.0);
    let prices = price_configured(&config).expect("Unvalidated pricing should not fail");
    assert!(!prices.is_finite());
    assert!(prices.call_price.is_nan() && prices.put_price.is_nan());

    config.validate_inputs = true;
    assert!(price_configured(&config).is_err());
}
