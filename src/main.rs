// Demonstration entry point.
//
// Usage:
//     black-scholes               prices S=100, K=100, T=1, r=0.02, sigma=0.2
//     black-scholes <config.toml> prices the configured parameters, or every
//                                 row of `batch_input` when the config sets it
//
// Batch results are written to stdout as CSV.

use anyhow::{Context, Result};
use black_scholes_lib::{price_configured, price_csv_file, PricingConfig};

fn main() -> Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => PricingConfig::from_file(&path)
            .with_context(|| format!("Could not load configuration from {}", path))?,
        None => PricingConfig::demo(),
    };

    if let Some(input) = config.batch_input.as_ref() {
        let stdout = std::io::stdout();
        let results = price_csv_file(input, stdout.lock(), &config)?;
        if config.verbosity > 0 {
            eprintln!("Priced {} rows from {}", results.len(), input.display());
        }
        return Ok(());
    }

    let prices = price_configured(&config)?;
    println!("Call Price: {}", prices.call_price);
    println!("Put Price: {}", prices.put_price);

    Ok(())
}
