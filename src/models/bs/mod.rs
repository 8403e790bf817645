// Closed-form Black-Scholes pricing of European calls and puts.
// No input is validated here: degenerate parameters flow through IEEE-754
// arithmetic and come out as infinities or NaNs.

use crate::models::traits::OptionPricer;
use crate::models::utils::{d1_d2, discount_factor, intrinsic_values};
use crate::pricing::types::{CallPutPrices, MarketParams};

/// Standard normal cumulative distribution function.
pub fn norm_cdf(x: f64) -> f64 {
    // 0.5 * [1 + erf(x / sqrt(2))]
    0.5 * (1.0 + libm::erf(x / std::f64::consts::SQRT_2))
}

/// Call and put prices of a European option under Black-Scholes assumptions.
///
/// Returns `(call, put)`. When `T` is exactly zero the option pays its
/// intrinsic value and `r`/`sigma` are ignored. Any other `T`, negative
/// included, goes through the closed-form expressions.
///
/// ```
/// use black_scholes_lib::models::bs::black_scholes_call_put;
///
/// let (call, put) = black_scholes_call_put(110.0, 100.0, 0.0, 0.05, 0.3);
/// assert_eq!((call, put), (10.0, 0.0));
/// ```
#[allow(non_snake_case)]
pub fn black_scholes_call_put(S: f64, K: f64, T: f64, r: f64, sigma: f64) -> (f64, f64) {
    if T == 0.0 {
        return intrinsic_values(S, K);
    }
    let (d1, d2) = d1_d2(S, K, T, r, sigma);
    let df = discount_factor(r, T);
    let call = S * norm_cdf(d1) - K * df * norm_cdf(d2);
    let put = K * df * norm_cdf(-d2) - S * norm_cdf(-d1);
    (call, put)
}

/// Black-Scholes model as an [`OptionPricer`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BlackScholes;

impl OptionPricer for BlackScholes {
    fn model_name(&self) -> &str {
        "black-scholes"
    }

    fn price(&self, params: &MarketParams) -> CallPutPrices {
        black_scholes_call_put(
            params.underlying_price,
            params.strike_price,
            params.years_to_exp,
            params.risk_free_rate,
            params.volatility,
        )
        .into()
    }
}
