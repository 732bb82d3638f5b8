//! Configuration types for farecast

use crate::currency::{ConversionError, CurrencyConverter};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub model: ModelConfig,
    #[serde(default)]
    pub currency: CurrencyConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Fare model configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    /// Path to the JSON model artifact
    pub path: PathBuf,
}

/// Currency display and conversion configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CurrencyConfig {
    /// Currency the model predicts in
    #[serde(default = "default_base_currency")]
    pub base: String,

    /// Decimal places shown for fares
    #[serde(default = "default_display_precision")]
    pub display_precision: u32,

    /// Units of each target currency per one unit of base currency
    #[serde(default)]
    pub rates: BTreeMap<String, Decimal>,
}

fn default_base_currency() -> String {
    "INR".to_string()
}
fn default_display_precision() -> u32 {
    2
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            base: default_base_currency(),
            display_precision: default_display_precision(),
            rates: BTreeMap::new(),
        }
    }
}

impl CurrencyConfig {
    /// Build a converter from the configured rates
    pub fn converter(&self) -> Result<CurrencyConverter, ConversionError> {
        CurrencyConverter::new(&self.base, &self.rates, self.display_precision)
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_format: LogFormatConfig,
}

/// Log output format as written in the config file
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormatConfig {
    #[default]
    Pretty,
    Json,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormatConfig::Pretty,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Configuration bundled with the binary
    pub fn embedded_default() -> anyhow::Result<Self> {
        Ok(toml::from_str(include_str!("../config.toml.example"))?)
    }
}
