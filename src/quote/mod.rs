//! Fare quotes
//!
//! Presentation-ready record of one prediction, with optional conversions

use crate::currency::{ConversionError, CurrencyConverter, Money};
use crate::model::{FarePrediction, FlightQuery};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

/// Quote identifier
pub type QuoteId = Uuid;

/// Quote construction errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuoteError {
    /// Fare does not fit a decimal amount
    #[error("fare {0} cannot be represented as a decimal amount")]
    Unrepresentable(f64),
    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

/// A rounded, timestamped fare prediction
#[derive(Debug, Clone, Serialize)]
pub struct FareQuote {
    pub id: QuoteId,
    pub issued_at: DateTime<Utc>,
    pub query: FlightQuery,
    /// Fare in the base currency, rounded for display
    pub amount: Decimal,
    pub currency: String,
    pub summary: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub conversions: Vec<Money>,
}

impl FareQuote {
    /// Build a quote for a prediction
    pub fn new(
        query: FlightQuery,
        prediction: FarePrediction,
        currency: &str,
        precision: u32,
    ) -> Result<Self, QuoteError> {
        let amount = prediction
            .rounded(precision)
            .ok_or(QuoteError::Unrepresentable(prediction.amount))?;

        Ok(Self {
            id: Uuid::new_v4(),
            issued_at: Utc::now(),
            query,
            amount,
            currency: currency.to_uppercase(),
            summary: summary(&query),
            conversions: Vec::new(),
        })
    }

    /// Attach conversions into each of `targets`
    pub fn with_conversions<S: AsRef<str>>(
        mut self,
        converter: &CurrencyConverter,
        targets: &[S],
    ) -> Result<Self, QuoteError> {
        for target in targets {
            self.conversions
                .push(converter.convert(self.amount, target.as_ref())?);
        }
        Ok(self)
    }
}

fn summary(query: &FlightQuery) -> String {
    format!(
        "This is the estimated fare for a {} min flight with {} stop(s).",
        query.duration_minutes, query.stop_count
    )
}
