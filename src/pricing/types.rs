use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

/// The five scalar market inputs of a single pricing call
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketParams {
    /// Spot price of the underlying (S)
    #[serde(alias = "S")]
    pub underlying_price: f64,
    /// Strike price (K)
    #[serde(alias = "K")]
    pub strike_price: f64,
    /// Time to expiration in years (T)
    #[serde(alias = "T", alias = "time_to_expiry")]
    pub years_to_exp: f64,
    /// Annualized risk-free rate as a decimal (r)
    #[serde(alias = "r")]
    pub risk_free_rate: f64,
    /// Annualized volatility of log-returns (sigma)
    #[serde(alias = "sigma")]
    pub volatility: f64,
}

impl MarketParams {
    pub fn new(s: f64, k: f64, t: f64, r: f64, sigma: f64) -> Self {
        Self {
            underlying_price: s,
            strike_price: k,
            years_to_exp: t,
            risk_free_rate: r,
            volatility: sigma,
        }
    }

    /// Illustrative at-the-money parameter set: S=100, K=100, T=1, r=2%, sigma=20%
    pub fn demo() -> Self {
        Self::new(100.0, 100.0, 1.0, 0.02, 0.2)
    }

    /// Check the parameters against the usual domain of the model.
    ///
    /// Pricing never calls this on its own; it is a policy callers may opt
    /// into (see [`PricingConfig::validate_inputs`](crate::PricingConfig)).
    pub fn validate(&self) -> Result<()> {
        if !self.underlying_price.is_finite() || self.underlying_price <= 0.0 {
            return Err(anyhow!(
                "Underlying price must be positive and finite, got {}",
                self.underlying_price
            ));
        }
        if !self.strike_price.is_finite() || self.strike_price <= 0.0 {
            return Err(anyhow!(
                "Strike price must be positive and finite, got {}",
                self.strike_price
            ));
        }
        if !self.years_to_exp.is_finite() || self.years_to_exp < 0.0 {
            return Err(anyhow!(
                "Time to expiration must be non-negative and finite, got {}",
                self.years_to_exp
            ));
        }
        if !self.risk_free_rate.is_finite() {
            return Err(anyhow!(
                "Risk-free rate must be finite, got {}",
                self.risk_free_rate
            ));
        }
        if !self.volatility.is_finite() || self.volatility < 0.0 {
            return Err(anyhow!(
                "Volatility must be non-negative and finite, got {}",
                self.volatility
            ));
        }
        if self.years_to_exp > 0.0 && self.volatility == 0.0 {
            return Err(anyhow!(
                "Volatility must be positive when time to expiration is positive (T={})",
                self.years_to_exp
            ));
        }
        Ok(())
    }
}

impl Default for MarketParams {
    fn default() -> Self {
        Self::demo()
    }
}

/// Call and put prices returned by a pricer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CallPutPrices {
    pub call_price: f64,
    pub put_price: f64,
}

impl CallPutPrices {
    pub fn is_finite(&self) -> bool {
        self.call_price.is_finite() && self.put_price.is_finite()
    }
}

impl From<(f64, f64)> for CallPutPrices {
    fn from((call_price, put_price): (f64, f64)) -> Self {
        Self {
            call_price,
            put_price,
        }
    }
}

/// One priced row: the inputs next to the resulting prices
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingResult {
    /// Spot price of the underlying
    pub underlying_price: f64,
    /// Strike price
    pub strike_price: f64,
    /// Time to expiration in years
    pub years_to_exp: f64,
    /// Risk-free rate
    pub risk_free_rate: f64,
    /// Volatility
    pub volatility: f64,
    /// Model call price
    pub call_price: f64,
    /// Model put price
    pub put_price: f64,
}

impl PricingResult {
    pub fn new(params: &MarketParams, prices: CallPutPrices) -> Self {
        Self {
            underlying_price: params.underlying_price,
            strike_price: params.strike_price,
            years_to_exp: params.years_to_exp,
            risk_free_rate: params.risk_free_rate,
            volatility: params.volatility,
            call_price: prices.call_price,
            put_price: prices.put_price,
        }
    }

    pub fn params(&self) -> MarketParams {
        MarketParams::new(
            self.underlying_price,
            self.strike_price,
            self.years_to_exp,
            self.risk_free_rate,
            self.volatility,
        )
    }

    pub fn prices(&self) -> CallPutPrices {
        CallPutPrices {
            call_price: self.call_price,
            put_price: self.put_price,
        }
    }
}
