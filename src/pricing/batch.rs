//! Batch pricing of parameter rows read from and written to CSV.
//!
//! Each row is priced independently and results keep the input order.

use crate::models::traits::OptionPricer;
use crate::models::utils::put_call_parity_gap;
use crate::pricing::config::PricingConfig;
use crate::pricing::types::{CallPutPrices, MarketParams, PricingResult};
use anyhow::{Context, Result};
use std::io::{Read, Write};
use std::path::Path;

/// Report non-finite prices on stderr when `verbosity > 0`.
///
/// Returns whether the prices were non-finite; the prices themselves are
/// never altered.
pub fn warn_if_non_finite(
    model_name: &str,
    label: &str,
    params: &MarketParams,
    prices: &CallPutPrices,
    verbosity: u8,
) -> bool {
    if prices.is_finite() {
        return false;
    }
    if verbosity > 0 {
        eprintln!(
            "Warning: {} produced non-finite prices for {} (S={}, K={}, T={}, r={}, sigma={}): call={}, put={}",
            model_name,
            label,
            params.underlying_price,
            params.strike_price,
            params.years_to_exp,
            params.risk_free_rate,
            params.volatility,
            prices.call_price,
            prices.put_price
        );
    }
    true
}

/// Price a single parameter set with `pricer`, honouring `config`.
///
/// Validation only runs when `config.validate_inputs` is set.
pub fn price_single<P: OptionPricer + ?Sized>(
    pricer: &P,
    params: &MarketParams,
    config: &PricingConfig,
) -> Result<CallPutPrices> {
    if config.validate_inputs {
        params.validate()?;
    }
    let prices = pricer.price(params);
    warn_if_non_finite(
        pricer.model_name(),
        "the configured parameters",
        params,
        &prices,
        config.verbosity,
    );
    Ok(prices)
}

/// Price every row with `pricer`.
///
/// With `config.validate_inputs` set, the first row that fails
/// [`MarketParams::validate`] aborts the batch. Otherwise nothing is checked
/// and non-finite prices are returned as computed; with `verbosity > 0` they
/// are reported on stderr. With `verbosity > 1` every row is printed along
/// with its put-call parity gap.
pub fn price_batch<P: OptionPricer + ?Sized>(
    pricer: &P,
    rows: &[MarketParams],
    config: &PricingConfig,
) -> Result<Vec<PricingResult>> {
    let mut results = Vec::with_capacity(rows.len());

    for (i, params) in rows.iter().enumerate() {
        if config.validate_inputs {
            params
                .validate()
                .with_context(|| format!("Invalid parameters in row {}", i))?;
        }

        let prices = pricer.price(params);

        warn_if_non_finite(
            pricer.model_name(),
            &format!("row {}", i),
            params,
            &prices,
            config.verbosity,
        );
        if config.verbosity > 1 {
            println!(
                "  row {}: call = {:.6}, put = {:.6}, parity gap = {:e}",
                i,
                prices.call_price,
                prices.put_price,
                put_call_parity_gap(&prices, params)
            );
        }

        results.push(PricingResult::new(params, prices));
    }

    Ok(results)
}

/// Read parameter rows from CSV with a header row.
///
/// Columns may use the long names (`underlying_price`, `strike_price`,
/// `years_to_exp`, `risk_free_rate`, `volatility`) or the short ones
/// (`S`, `K`, `T`, `r`, `sigma`).
pub fn read_market_params<R: Read>(reader: R) -> Result<Vec<MarketParams>> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut rows = Vec::new();

    for (i, record) in reader.deserialize::<MarketParams>().enumerate() {
        let params = record.with_context(|| format!("Failed to parse CSV record {}", i))?;
        rows.push(params);
    }

    Ok(rows)
}

/// Load parameter rows from a CSV file
pub fn load_market_params(path: impl AsRef<Path>) -> Result<Vec<MarketParams>> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open CSV file {}", path.display()))?;
    read_market_params(file).with_context(|| format!("Invalid CSV file {}", path.display()))
}

/// Write priced rows as CSV with a header row
pub fn write_pricing_results<W: Write>(writer: W, results: &[PricingResult]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    for result in results {
        writer
            .serialize(result)
            .context("Failed to write pricing result")?;
    }
    writer.flush().context("Failed to flush CSV output")?;
    Ok(())
}
