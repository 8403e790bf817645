use crate::pricing::types::MarketParams;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration struct for pricing runs
///
/// Every field has a default, so an empty TOML document is a valid
/// configuration that prices [`MarketParams::demo()`].
///
/// ```toml
/// verbosity = 1
/// validate_inputs = true
///
/// [params]
/// underlying_price = 105.0
/// strike_price = 100.0
/// years_to_exp = 0.5
/// risk_free_rate = 0.03
/// volatility = 0.25
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PricingConfig {
    /// Parameter set priced by the single-shot entry point
    #[serde(default)]
    pub params: MarketParams,

    /// Verbosity level (0=silent, 1=warnings, 2=per-row output)
    #[serde(default = "default_verbosity")]
    pub verbosity: u8,

    /// Reject out-of-domain inputs instead of letting NaN/inf propagate
    #[serde(default)]
    pub validate_inputs: bool,

    /// CSV file of parameter rows to price in batch
    #[serde(default)]
    pub batch_input: Option<PathBuf>,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            params: MarketParams::default(),
            verbosity: default_verbosity(),
            validate_inputs: false,
            batch_input: None,
        }
    }
}

impl PricingConfig {
    /// Demonstration settings: the illustrative parameter set, warnings on
    pub fn demo() -> Self {
        Self {
            params: MarketParams::demo(),
            verbosity: 1,
            validate_inputs: false,
            batch_input: None,
        }
    }

    /// Library settings: silent, no validation
    pub fn quiet() -> Self {
        Self {
            verbosity: 0,
            ..Self::default()
        }
    }

    /// Strict settings: inputs are validated before pricing
    pub fn strict() -> Self {
        Self {
            verbosity: 1,
            validate_inputs: true,
            ..Self::default()
        }
    }

    /// Parse a configuration from a TOML document
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("Failed to parse pricing config")
    }

    /// Load a configuration from a TOML file.
    ///
    /// A relative `batch_input` path is resolved against the directory of the
    /// config file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let mut config = Self::from_toml_str(&contents)
            .with_context(|| format!("Invalid config file {}", path.display()))?;

        if let (Some(input), Some(dir)) = (config.batch_input.as_ref(), path.parent()) {
            if input.is_relative() {
                config.batch_input = Some(dir.join(input));
            }
        }
        Ok(config)
    }
}

fn default_verbosity() -> u8 {
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = PricingConfig::from_toml_str("").unwrap();
        assert_eq!(config, PricingConfig::default());
        assert_eq!(config.params, MarketParams::demo());
    }

    #[test]
    fn parses_full_document() {
        let config = PricingConfig::from_toml_str(
            r#"
            verbosity = 2
            validate_inputs = true
            batch_input = "rows.csv"

            [params]
            underlying_price = 105.0
            strike_price = 100.0
            years_to_exp = 0.5
            risk_free_rate = 0.03
            volatility = 0.25
            "#,
        )
        .unwrap();
        assert_eq!(config.verbosity, 2);
        assert!(config.validate_inputs);
        assert_eq!(config.batch_input, Some(PathBuf::from("rows.csv")));
        assert_eq!(config.params, MarketParams::new(105.0, 100.0, 0.5, 0.03, 0.25));
    }

    #[test]
    fn accepts_short_parameter_names() {
        let config = PricingConfig::from_toml_str(
            r#"
            [params]
            S = 90.0
            K = 100.0
            T = 2.0
            r = -0.005
            sigma = 0.3
            "#,
        )
        .unwrap();
        assert_eq!(config.params, MarketParams::new(90.0, 100.0, 2.0, -0.005, 0.3));
    }

    #[test]
    fn incomplete_params_table_is_an_error() {
        let result = PricingConfig::from_toml_str("[params]\nunderlying_price = 100.0\n");
        assert!(result.is_err());
    }

    #[test]
    fn presets() {
        assert_eq!(PricingConfig::quiet().verbosity, 0);
        assert!(PricingConfig::strict().validate_inputs);
        assert_eq!(PricingConfig::demo().params, MarketParams::demo());
    }
}
