pub mod bs;

/// Common traits used by all pricing models
pub mod traits {
    use crate::pricing::types::{CallPutPrices, MarketParams};

    /// Option pricing model producing call and put prices for one parameter set.
    ///
    /// Implementations are stateless, so a single pricer can be shared freely
    /// between threads.
    pub trait OptionPricer: Send + Sync {
        /// Returns the name of the model (e.g., "black-scholes")
        fn model_name(&self) -> &str;

        /// Price the call and the put for the given market parameters
        fn price(&self, params: &MarketParams) -> CallPutPrices;
    }
}

/// Utility functions shared by the closed-form pricers
pub mod utils {
    use crate::pricing::types::{CallPutPrices, MarketParams};

    /// Payoff of immediate exercise: `(max(S - K, 0), max(K - S, 0))`
    pub fn intrinsic_values(spot: f64, strike: f64) -> (f64, f64) {
        ((spot - strike).max(0.0), (strike - spot).max(0.0))
    }

    /// Continuous discount factor `e^(-r*T)`
    pub fn discount_factor(r: f64, t: f64) -> f64 {
        (-r * t).exp()
    }

    /// Black-Scholes `d1` and `d2`.
    ///
    /// Unguarded: zero volatility divides by zero and negative `t` takes the
    /// square root of a negative number.
    pub fn d1_d2(spot: f64, strike: f64, t: f64, r: f64, sigma: f64) -> (f64, f64) {
        let vol_sqrt_t = sigma * t.sqrt();
        let d1 = ((spot / strike).ln() + (r + 0.5 * sigma * sigma) * t) / vol_sqrt_t;
        (d1, d1 - vol_sqrt_t)
    }

    /// Deviation from put-call parity: `(C - P) - (S - K*e^(-r*T))`
    pub fn put_call_parity_gap(prices: &CallPutPrices, params: &MarketParams) -> f64 {
        let forward_value = params.underlying_price
            - params.strike_price * discount_factor(params.risk_free_rate, params.years_to_exp);
        (prices.call_price - prices.put_price) - forward_value
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn intrinsic_values_floor_at_zero() {
            assert_eq!(intrinsic_values(110.0, 100.0), (10.0, 0.0));
            assert_eq!(intrinsic_values(90.0, 100.0), (0.0, 10.0));
            assert_eq!(intrinsic_values(100.0, 100.0), (0.0, 0.0));
        }

        #[test]
        fn d1_d2_at_the_money() {
            let (d1, d2) = d1_d2(100.0, 100.0, 1.0, 0.02, 0.2);
            assert!((d1 - 0.2).abs() < 1e-15);
            assert!(d2.abs() < 1e-15);
        }

        #[test]
        fn zero_volatility_gives_non_finite_d1() {
            let (d1, d2) = d1_d2(100.0, 100.0, 1.0, 0.02, 0.0);
            assert_eq!(d1, f64::INFINITY);
            assert_eq!(d2, f64::INFINITY);

            let (d1, _) = d1_d2(100.0, 100.0, 1.0, 0.0, 0.0);
            assert!(d1.is_nan());
        }

        #[test]
        fn discount_factor_handles_negative_rates() {
            assert!(discount_factor(-0.01, 2.0) > 1.0);
            assert_eq!(discount_factor(0.05, 0.0), 1.0);
        }
    }
}
