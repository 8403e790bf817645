// Example: plot_price_curve.rs
// Plots Black-Scholes call and put prices against spot for a fixed strike,
// together with the intrinsic value at expiry.
//
// Usage:
//     cargo run --example plot_price_curve -- [strike] [years_to_exp] [rate] [vol]
//
// The output image will be written to price_curve.svg in the working directory.

use std::env;
use std::error::Error;

use black_scholes_lib::models::utils::intrinsic_values;
use black_scholes_lib::{price, MarketParams};
use plotters::prelude::*;

fn arg_or(args: &[String], index: usize, default: f64) -> Result<f64, Box<dyn Error>> {
    match args.get(index) {
        Some(raw) => Ok(raw.parse::<f64>()?),
        None => Ok(default),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();
    let strike = arg_or(&args, 1, 100.0)?;
    let t = arg_or(&args, 2, 1.0)?;
    let r = arg_or(&args, 3, 0.02)?;
    let sigma = arg_or(&args, 4, 0.2)?;

    let spot_min = strike * 0.5;
    let spot_max = strike * 1.5;
    let steps = 200;

    let mut call_line = Vec::with_capacity(steps + 1);
    let mut put_line = Vec::with_capacity(steps + 1);
    let mut call_payoff = Vec::with_capacity(steps + 1);
    let mut put_payoff = Vec::with_capacity(steps + 1);

    for i in 0..=steps {
        let spot = spot_min + (spot_max - spot_min) * (i as f64) / (steps as f64);
        let prices = price(&MarketParams::new(spot, strike, t, r, sigma));
        let (call_iv, put_iv) = intrinsic_values(spot, strike);
        call_line.push((spot, prices.call_price));
        put_line.push((spot, prices.put_price));
        call_payoff.push((spot, call_iv));
        put_payoff.push((spot, put_iv));
    }

    let y_max = call_line
        .iter()
        .chain(put_line.iter())
        .map(|&(_, p)| p)
        .filter(|p| p.is_finite())
        .fold(0.0_f64, f64::max)
        * 1.1;

    let root = SVGBackend::new("price_curve.svg", (1280, 768)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(
            format!(
                "Black-Scholes Prices | K={:.2}, T={:.2}y, r={:.2}%, sigma={:.1}%",
                strike,
                t,
                r * 100.0,
                sigma * 100.0
            ),
            ("sans-serif", 30),
        )
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(spot_min..spot_max, 0.0..y_max.max(1.0))?;

    chart
        .configure_mesh()
        .x_desc("Spot ($)")
        .y_desc("Option Price ($)")
        .draw()?;

    chart.draw_series(vec![PathElement::new(call_line, RED)])?;
    chart.draw_series(vec![PathElement::new(put_line, BLUE)])?;

    // Payoff at expiry
    chart.draw_series(vec![PathElement::new(call_payoff, RED.mix(0.4))])?;
    chart.draw_series(vec![PathElement::new(put_payoff, BLUE.mix(0.4))])?;

    println!("Chart saved to price_curve.svg");
    Ok(())
}
