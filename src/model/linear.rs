//! Linear regression fare model
//!
//! fare = intercept + duration_coef * duration_minutes + stops_coef * stop_count

use super::{
    FareEstimator, FarePrediction, FlightQuery, InvalidInputError, ModelLoadError,
    MAX_DURATION_MINUTES, MAX_STOPS, MIN_DURATION_MINUTES,
};
use rust_decimal::Decimal;
use std::time::Instant;

/// Corners of the input domain; a linear function takes its extremes here
const DOMAIN_CORNERS: [(u32, u32); 4] = [
    (MIN_DURATION_MINUTES, 0),
    (MIN_DURATION_MINUTES, MAX_STOPS),
    (MAX_DURATION_MINUTES, 0),
    (MAX_DURATION_MINUTES, MAX_STOPS),
];

/// Frozen two-feature linear model
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFareModel {
    intercept: f64,
    duration_coef: f64,
    stops_coef: f64,
}

impl LinearFareModel {
    /// Build a model from fitted coefficients
    ///
    /// Rejects non-finite coefficients and any model that would quote a
    /// negative or decimal-overflowing fare for a valid query.
    pub fn new(
        intercept: f64,
        duration_coef: f64,
        stops_coef: f64,
    ) -> Result<Self, ModelLoadError> {
        for (name, value) in [
            ("intercept", intercept),
            ("duration_coef", duration_coef),
            ("stops_coef", stops_coef),
        ] {
            if !value.is_finite() {
                return Err(ModelLoadError::NonFiniteCoefficient { name });
            }
        }

        let model = Self {
            intercept,
            duration_coef,
            stops_coef,
        };

        for (duration_minutes, stop_count) in DOMAIN_CORNERS {
            let amount = model.evaluate(duration_minutes, stop_count);
            if !amount.is_finite() || amount < 0.0 {
                return Err(ModelLoadError::NegativeFare {
                    duration_minutes,
                    stop_count,
                    amount,
                });
            }
            if Decimal::try_from(amount).is_err() {
                return Err(ModelLoadError::FareOutOfRange {
                    duration_minutes,
                    stop_count,
                    amount,
                });
            }
        }

        Ok(model)
    }

    /// Fare when duration and stops are both zero
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Fare change per extra minute of flight
    pub fn duration_coef(&self) -> f64 {
        self.duration_coef
    }

    /// Fare change per extra stop
    pub fn stops_coef(&self) -> f64 {
        self.stops_coef
    }

    /// Cheapest and most expensive fare over the valid input domain
    pub fn fare_range(&self) -> (f64, f64) {
        DOMAIN_CORNERS
            .iter()
            .map(|&(d, s)| self.evaluate(d, s))
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            })
    }

    fn evaluate(&self, duration_minutes: u32, stop_count: u32) -> f64 {
        self.intercept
            + self.duration_coef * f64::from(duration_minutes)
            + self.stops_coef * f64::from(stop_count)
    }
}

impl FareEstimator for LinearFareModel {
    fn estimate(&self, query: &FlightQuery) -> Result<FarePrediction, InvalidInputError> {
        let start = Instant::now();

        if let Err(e) = query.validate() {
            metrics::counter!("farecast_invalid_queries_total").increment(1);
            tracing::debug!(
                duration_minutes = query.duration_minutes,
                stop_count = query.stop_count,
                error = %e,
                "Rejected fare query"
            );
            return Err(e);
        }

        let amount = self.evaluate(query.duration_minutes, query.stop_count);

        metrics::counter!("farecast_predictions_total").increment(1);
        metrics::histogram!("farecast_estimate_latency_us")
            .record(start.elapsed().as_micros() as f64);
        metrics::gauge!("farecast_last_fare").set(amount);
        tracing::debug!(
            duration_minutes = query.duration_minutes,
            stop_count = query.stop_count,
            amount,
            "Estimated fare"
        );

        Ok(FarePrediction { amount })
    }
}
