//! Currency conversion module
//!
//! Converts base-currency fares using statically configured rates

mod converter;

pub use converter::CurrencyConverter;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An amount tagged with its ISO currency code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// Upper-case currency code
    pub currency: String,
    pub amount: Decimal,
}

/// Currency conversion errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// No rate configured for the requested currency
    #[error("no exchange rate configured for {0}")]
    UnknownCurrency(String),
    /// Configured rate is zero or negative
    #[error("invalid exchange rate for {currency}: {rate}")]
    InvalidRate { currency: String, rate: Decimal },
}

/// Normalize a currency code for lookup
pub(crate) fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}
