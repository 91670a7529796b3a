//! # Configuration State
//!
//! Stores storefront configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`ZELION_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no lock needed.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;
use zelion_core::Money;

pub const ENV_STORE_NAME: &str = "ZELION_STORE_NAME";
pub const ENV_CURRENCY_CODE: &str = "ZELION_CURRENCY_CODE";
pub const ENV_CURRENCY_SYMBOL: &str = "ZELION_CURRENCY_SYMBOL";
pub const ENV_CURRENCY_DECIMALS: &str = "ZELION_CURRENCY_DECIMALS";
pub const ENV_CATALOG_PATH: &str = "ZELION_CATALOG_PATH";

/// Highest supported number of currency decimals.
const MAX_CURRENCY_DECIMALS: u8 = 4;

/// Errors raised while loading configuration or the catalog it points at.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} has invalid value '{value}': {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },

    #[error("cannot read catalog file {path}: {source}")]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("catalog file {path} rejected: {source}")]
    CatalogInvalid {
        path: PathBuf,
        #[source]
        source: zelion_core::CoreError,
    },
}

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Store name (header and receipts)
    pub store_name: String,

    /// Currency code (ISO 4217)
    pub currency_code: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Number of minor-unit decimal places. Catalog prices are whole rupees,
    /// so the default is 0.
    pub currency_decimals: u8,

    /// JSON catalog to load instead of the built-in one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Store: "Zelion Cricket"
    /// - Currency: INR (₹), no decimals
    /// - Catalog: built-in
    fn default() -> Self {
        ConfigState {
            store_name: "Zelion Cricket".to_string(),
            currency_code: "INR".to_string(),
            currency_symbol: "₹".to_string(),
            currency_decimals: 0,
            catalog_path: None,
        }
    }
}

impl ConfigState {
    /// Creates a ConfigState from environment variables and defaults.
    ///
    /// Invalid values are logged and the default is kept.
    ///
    /// ## Environment Variables
    /// - `ZELION_STORE_NAME`: Override store name
    /// - `ZELION_CURRENCY_CODE` / `ZELION_CURRENCY_SYMBOL`: Override currency
    /// - `ZELION_CURRENCY_DECIMALS`: Minor-unit digits (0 to 4)
    /// - `ZELION_CATALOG_PATH`: JSON catalog file
    pub fn from_env() -> Self {
        Self::from_lookup_lenient(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup, logging and skipping
    /// invalid values.
    pub fn from_lookup_lenient<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();
        config.apply(lookup, |err| {
            warn!(error = %err, "ignoring configuration value");
        });
        config
    }

    /// Like [`ConfigState::from_env`], but fails on the first invalid value.
    pub fn try_from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();
        let mut first_error = None;
        config.apply(lookup, |err| {
            first_error.get_or_insert(err);
        });
        match first_error {
            Some(err) => Err(err),
            None => Ok(config),
        }
    }

    fn apply<F, E>(&mut self, lookup: F, mut on_error: E)
    where
        F: Fn(&str) -> Option<String>,
        E: FnMut(ConfigError),
    {
        if let Some(store_name) = non_empty(lookup(ENV_STORE_NAME)) {
            self.store_name = store_name;
        }

        if let Some(code) = non_empty(lookup(ENV_CURRENCY_CODE)) {
            self.currency_code = code.to_uppercase();
        }

        if let Some(symbol) = non_empty(lookup(ENV_CURRENCY_SYMBOL)) {
            self.currency_symbol = symbol;
        }

        if let Some(raw) = non_empty(lookup(ENV_CURRENCY_DECIMALS)) {
            match raw.parse::<u8>() {
                Ok(decimals) if decimals <= MAX_CURRENCY_DECIMALS => {
                    self.currency_decimals = decimals;
                }
                _ => on_error(ConfigError::InvalidValue {
                    key: ENV_CURRENCY_DECIMALS,
                    value: raw,
                    reason: format!("expected an integer from 0 to {}", MAX_CURRENCY_DECIMALS),
                }),
            }
        }

        if let Some(path) = non_empty(lookup(ENV_CATALOG_PATH)) {
            self.catalog_path = Some(PathBuf::from(path));
        }
    }

    /// Formats an amount in minor units as a currency string, grouping
    /// thousands.
    ///
    /// ## Example
    /// ```rust
    /// # use zelion_storefront::state::ConfigState;
    /// # use zelion_core::Money;
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(Money::from_minor(15999)), "₹15,999");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        let minor = amount.amount();
        let divisor = 10_i64.pow(self.currency_decimals as u32);
        let whole = (minor / divisor).unsigned_abs();
        let frac = (minor % divisor).unsigned_abs();

        let mut out = String::new();
        if minor < 0 {
            out.push('-');
        }
        out.push_str(&self.currency_symbol);
        out.push_str(&group_thousands(whole));
        if self.currency_decimals > 0 {
            out.push_str(&format!(
                ".{:0width$}",
                frac,
                width = self.currency_decimals as usize
            ));
        }
        out
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
