//! # Black-Scholes-Lib: Closed-Form European Option Pricing
//!
//! `black-scholes-lib` prices European call and put options under the Black-Scholes model
//! from five scalar market inputs: spot `S`, strike `K`, time to expiration `T` (years),
//! risk-free rate `r` and volatility `sigma`.
//!
//! ## Core Features
//!
//! - **Closed-form pricing**: one exact evaluation per call, no iteration
//! - **Library-grade normal CDF**: `Φ(x) = 0.5 * (1 + erf(x / √2))` on top of `libm::erf`
//! - **Batch pricing**: CSV in, CSV out, rows priced independently
//! - **TOML configuration**: parameter set, verbosity and opt-in input validation
//!
//! ## Quick Start
//!
//! ```rust
//! use black_scholes_lib::black_scholes_call_put;
//!
//! let (call, put) = black_scholes_call_put(100.0, 100.0, 1.0, 0.02, 0.2);
//! assert!((call - 8.9160).abs() < 1e-4);
//! assert!((put - 6.9359).abs() < 1e-4);
//! ```
//!
//! ## Degenerate Inputs
//!
//! Pricing never fails. Inputs outside the model's domain (negative `T`, zero `sigma`
//! with positive `T`, non-positive `S` or `K`) are not intercepted: the resulting
//! infinities and NaNs are returned as computed. Callers that want to reject such
//! inputs can call [`MarketParams::validate`] or enable
//! [`PricingConfig::validate_inputs`] for batch runs.

// ================================================================================================
// MODULES
// ================================================================================================

pub mod models;
pub mod pricing;

// ================================================================================================
// IMPORTS
// ================================================================================================

use anyhow::Result;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

// Core pricing functions and model
pub use models::bs::{black_scholes_call_put, norm_cdf, BlackScholes};
pub use models::traits::OptionPricer;

// Market data, results and configuration
pub use pricing::{
    batch::{load_market_params, read_market_params, write_pricing_results},
    config::PricingConfig,
    types::{CallPutPrices, MarketParams, PricingResult},
};

// ================================================================================================
// DEFAULT CONFIGURATIONS
// ================================================================================================

/// Pre-configured pricing settings for common use cases.
///
/// - [`demo()`]: the illustrative at-the-money parameter set with warnings enabled
/// - [`quiet()`]: silent library settings
/// - [`strict()`]: inputs validated before pricing
pub mod default_configs {
    use crate::pricing::config::PricingConfig;

    /// Settings used by the demonstration entry point.
    ///
    /// Prices `S=100, K=100, T=1, r=0.02, sigma=0.2` and reports non-finite
    /// prices on stderr.
    ///
    /// # Example
    ///
    /// ```rust
    /// use black_scholes_lib::default_configs;
    ///
    /// let config = default_configs::demo();
    /// assert_eq!(config.params.strike_price, 100.0);
    /// ```
    pub fn demo() -> PricingConfig {
        PricingConfig::demo()
    }

    /// Silent settings for library use. Nothing is validated or printed.
    pub fn quiet() -> PricingConfig {
        PricingConfig::quiet()
    }

    /// Settings that reject out-of-domain inputs.
    ///
    /// # Example
    ///
    /// ```rust
    /// use black_scholes_lib::{default_configs, price_batch, MarketParams};
    ///
    /// let rows = vec![MarketParams::new(100.0, 100.0, -1.0, 0.02, 0.2)];
    /// assert!(price_batch(&rows, &default_configs::strict()).is_err());
    /// ```
    pub fn strict() -> PricingConfig {
        PricingConfig::strict()
    }
}

/// Price one parameter set with the Black-Scholes model.
///
/// # Example
///
/// ```rust
/// use black_scholes_lib::{price, MarketParams};
///
/// let prices = price(&MarketParams::new(90.0, 100.0, 0.0, 0.02, 0.2));
/// assert_eq!((prices.call_price, prices.put_price), (0.0, 10.0));
/// ```
pub fn price(params: &MarketParams) -> CallPutPrices {
    BlackScholes.price(params)
}

/// Price the parameter set held by `config` with the Black-Scholes model.
///
/// Non-finite prices are returned unchanged and, with `verbosity > 0`,
/// reported on stderr.
///
/// # Errors
///
/// * `anyhow::Error` if `config.validate_inputs` is set and the parameters fail
///   [`MarketParams::validate`]
pub fn price_configured(config: &PricingConfig) -> Result<CallPutPrices> {
    pricing::batch::price_single(&BlackScholes, &config.params, config)
}

/// Price a batch of parameter sets with the Black-Scholes model.
///
/// Rows are priced independently and returned in input order, each next to
/// its inputs.
///
/// # Errors
///
/// * `anyhow::Error` if `config.validate_inputs` is set and a row fails
///   [`MarketParams::validate`]
pub fn price_batch(rows: &[MarketParams], config: &PricingConfig) -> Result<Vec<PricingResult>> {
    pricing::batch::price_batch(&BlackScholes, rows, config)
}

/// Price every row of a CSV file and write the results as CSV.
///
/// # Errors
///
/// * `anyhow::Error` if the input cannot be read or parsed
/// * `anyhow::Error` if validation is enabled and a row is invalid
/// * `anyhow::Error` if the output cannot be written
pub fn price_csv_file<W: std::io::Write>(
    input: impl AsRef<std::path::Path>,
    output: W,
    config: &PricingConfig,
) -> Result<Vec<PricingResult>> {
    let rows = load_market_params(input)?;
    let results = price_batch(&rows, config)?;
    write_pricing_results(output, &results)?;
    Ok(results)
}
