//! Static-rate currency converter

use super::{normalize_code, ConversionError, Money};
use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::BTreeMap;

/// Converts amounts out of a single base currency
#[derive(Debug, Clone)]
pub struct CurrencyConverter {
    base: String,
    /// Units of target currency per one unit of base currency
    rates: BTreeMap<String, Decimal>,
    precision: u32,
}

impl CurrencyConverter {
    /// Create a converter, rejecting non-positive rates
    pub fn new(
        base: &str,
        rates: &BTreeMap<String, Decimal>,
        precision: u32,
    ) -> Result<Self, ConversionError> {
        let mut normalized = BTreeMap::new();
        for (code, rate) in rates {
            let code = normalize_code(code);
            if *rate <= Decimal::ZERO {
                return Err(ConversionError::InvalidRate {
                    currency: code,
                    rate: *rate,
                });
            }
            normalized.insert(code, *rate);
        }

        Ok(Self {
            base: normalize_code(base),
            rates: normalized,
            precision,
        })
    }

    /// Base currency code
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Currencies a base amount can be converted into, base excluded
    pub fn supported(&self) -> impl Iterator<Item = &str> {
        self.rates.keys().map(String::as_str)
    }

    /// Convert a base-currency amount into `target`
    pub fn convert(&self, amount: Decimal, target: &str) -> Result<Money, ConversionError> {
        let target = normalize_code(target);
        let rate = if target == self.base {
            Decimal::ONE
        } else {
            *self
                .rates
                .get(&target)
                .ok_or_else(|| ConversionError::UnknownCurrency(target.clone()))?
        };

        let converted = (amount * rate)
            .round_dp_with_strategy(self.precision, RoundingStrategy::MidpointAwayFromZero);

        tracing::debug!(%amount, %rate, currency = %target, %converted, "Converted fare");

        Ok(Money {
            currency: target,
            amount: converted,
        })
    }
}
