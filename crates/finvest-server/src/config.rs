//! Server Configuration
//!
//! Read from the environment (after `.env` is loaded).

use std::str::FromStr;

use finvest_analytics::{DEFAULT_RISK_FREE_RATE, DEFAULT_RSI_PERIOD, RiskProfile};
use thiserror::Error;

#[derive(Error, Debug)]
#[error("Invalid value for {key}: '{value}'")]
pub struct ConfigError {
    pub key: &'static str,
    pub value: String,
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Socket address to listen on
    pub bind_addr: String,

    /// Used when a Sharpe request omits the rate
    pub risk_free_rate: f64,

    /// Used when an RSI request omits the period
    pub rsi_period: usize,

    /// Used when a risk request omits the profile
    pub risk_profile: RiskProfile,

    /// ISO code for formatted money values
    pub currency: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3000".into(),
            risk_free_rate: DEFAULT_RISK_FREE_RATE,
            rsi_period: DEFAULT_RSI_PERIOD,
            risk_profile: RiskProfile::default(),
            currency: finvest_analytics::format::DEFAULT_CURRENCY.into(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys keep their defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Ok(Self {
            bind_addr: lookup("BIND_ADDR").unwrap_or(defaults.bind_addr),
            risk_free_rate: parse(&lookup, "FINVEST_RISK_FREE_RATE")?
                .unwrap_or(defaults.risk_free_rate),
            rsi_period: parse(&lookup, "FINVEST_RSI_PERIOD")?.unwrap_or(defaults.rsi_period),
            risk_profile: parse(&lookup, "FINVEST_RISK_PROFILE")?
                .unwrap_or(defaults.risk_profile),
            currency: lookup("FINVEST_CURRENCY")
                .map(|c| c.trim().to_uppercase())
                .unwrap_or(defaults.currency),
        })
    }
}

fn parse<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<T>, ConfigError> {
    lookup(key)
        .map(|value| {
            value
                .trim()
                .parse()
                .map_err(|_| ConfigError { key, value })
        })
        .transpose()
}
