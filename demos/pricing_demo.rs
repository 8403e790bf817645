// demos/pricing_demo.rs

//! Demonstration of Black-Scholes pricing with black-scholes-lib
//!
//! This example shows how to:
//! 1. Price the illustrative at-the-money option
//! 2. Check put-call parity on the result
//! 3. Price a small strike ladder in batch and write it as CSV
//! 4. See how degenerate inputs come out of the pricer

use anyhow::Result;
use black_scholes_lib::models::utils::put_call_parity_gap;
use black_scholes_lib::{
    default_configs, price, price_batch, write_pricing_results, MarketParams,
};

fn main() -> Result<()> {
    println!("Black-Scholes Pricing Demo");
    println!("==========================");

    let params = MarketParams::demo();
    println!(
        "\nStep 1: S={}, K={}, T={}y, r={}, sigma={}",
        params.underlying_price,
        params.strike_price,
        params.years_to_exp,
        params.risk_free_rate,
        params.volatility
    );
    let prices = price(&params);
    println!("  Call Price: {:.4}", prices.call_price);
    println!("  Put Price:  {:.4}", prices.put_price);

    println!("\nStep 2: Put-call parity");
    println!(
        "  (C - P) - (S - K*e^(-rT)) = {:e}",
        put_call_parity_gap(&prices, &params)
    );

    println!("\nStep 3: Strike ladder");
    let ladder: Vec<MarketParams> = (0..9)
        .map(|i| MarketParams {
            strike_price: 80.0 + 5.0 * i as f64,
            ..params
        })
        .collect();
    let results = price_batch(&ladder, &default_configs::quiet())?;
    println!("{:<8} {:<12} {:<12}", "Strike", "Call", "Put");
    println!("{}", "-".repeat(32));
    for result in &results {
        println!(
            "{:<8.0} {:<12.4} {:<12.4}",
            result.strike_price, result.call_price, result.put_price
        );
    }
    println!("\nAs CSV:");
    write_pricing_results(std::io::stdout().lock(), &results)?;

    println!("\nStep 4: Degenerate inputs are returned as computed");
    let degenerate = [
        MarketParams::new(100.0, 100.0, 0.0, 0.02, 0.2),
        MarketParams::new(100.0, 100.0, -1.0, 0.02, 0.2),
        MarketParams::new(100.0, 100.0, 1.0, 0.0, 0.0),
    ];
    for p in &degenerate {
        let prices = price(p);
        println!(
            "  T={:>4}, r={:.2}, sigma={:.1} -> call={}, put={}",
            p.years_to_exp, p.risk_free_rate, p.volatility, prices.call_price, prices.put_price
        );
    }
    for p in &degenerate {
        if let Err(e) = p.validate() {
            println!("  strict policy would reject T={}: {}", p.years_to_exp, e);
        }
    }

    Ok(())
}
