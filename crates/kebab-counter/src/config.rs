//! # Shop Configuration
//!
//! Values come from three layers, later ones winning:
//! 1. [`ShopConfig::default`];
//! 2. a JSON document ([`ShopConfig::from_json_str`]), where every field is optional;
//! 3. `KEBAB_*` environment variables ([`ShopConfig::apply_env`]).
//!
//! | Variable                    | Field                 | Example      |
//! |-----------------------------|-----------------------|--------------|
//! | `KEBAB_PREPARATION_MINUTES` | `preparation_minutes` | `15`         |
//! | `KEBAB_TICK_INTERVAL_SECS`  | `tick_interval_secs`  | `60`         |
//! | `KEBAB_PICKUP_CHOICES`      | `pickup_choices`      | `15,20,30`   |
//! | `KEBAB_CURRENCY_SYMBOL`     | `currency_symbol`     | `€`          |

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

pub const ENV_PREFIX: &str = "KEBAB_";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config could not be parsed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid value {value:?} for {var}")]
    InvalidEnv { var: String, value: String },
    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShopConfig {
    /// Countdown length, in ticks, for an order without a chosen pickup time.
    pub preparation_minutes: u32,
    /// How often the countdown advances.
    pub tick_interval_secs: u64,
    /// Pickup times a customer may choose from, in minutes.
    pub pickup_choices: Vec<u32>,
    pub currency_symbol: String,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            preparation_minutes: 15,
            tick_interval_secs: 60,
            pickup_choices: vec![15, 20, 30],
            currency_symbol: "€".to_string(),
        }
    }
}

impl ShopConfig {
    /// Defaults overridden by the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().apply_env(|var| std::env::var(var).ok())
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Applies `KEBAB_*` overrides read through `lookup`, then validates.
    pub fn apply_env<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| {
            let var = format!("{ENV_PREFIX}{name}");
            lookup(&var).map(|value| (var, value))
        };
        let invalid = |var: String, value: String| ConfigError::InvalidEnv { var, value };

        if let Some((var, value)) = read("PREPARATION_MINUTES") {
            self.preparation_minutes = value.trim().parse().map_err(|_| invalid(var, value))?;
        }
        if let Some((var, value)) = read("TICK_INTERVAL_SECS") {
            self.tick_interval_secs = value.trim().parse().map_err(|_| invalid(var, value))?;
        }
        if let Some((var, value)) = read("PICKUP_CHOICES") {
            let parsed: Result<Vec<u32>, _> = value
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::parse)
                .collect();
            self.pickup_choices = parsed.map_err(|_| invalid(var, value))?;
        }
        if let Some((_, value)) = read("CURRENCY_SYMBOL") {
            self.currency_symbol = value;
        }

        self.validate()?;
        debug!(config = ?self, "Config loaded");
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.preparation_minutes == 0 {
            return Err(ConfigError::Invalid("preparation_minutes must be positive".into()));
        }
        if self.tick_interval_secs == 0 {
            return Err(ConfigError::Invalid("tick_interval_secs must be positive".into()));
        }
        if self.pickup_choices.contains(&0) {
            return Err(ConfigError::Invalid("pickup choices must be positive".into()));
        }
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(self.tick_interval_secs)
    }
}
