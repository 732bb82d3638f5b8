//! Fare model types

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Shortest flight the model accepts, in minutes
pub const MIN_DURATION_MINUTES: u32 = 30;
/// Longest flight the model accepts, in minutes
pub const MAX_DURATION_MINUTES: u32 = 600;
/// Highest stop count the model accepts
pub const MAX_STOPS: u32 = 2;

/// A single fare request: flight duration and number of stops
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FlightQuery {
    /// Flight duration in minutes
    pub duration_minutes: u32,
    /// Number of intermediate stops
    pub stop_count: u32,
}

impl FlightQuery {
    /// Create a query without validating it
    pub fn new(duration_minutes: u32, stop_count: u32) -> Self {
        Self {
            duration_minutes,
            stop_count,
        }
    }

    /// Check the query against the model's input domain
    pub fn validate(&self) -> Result<(), InvalidInputError> {
        if !(MIN_DURATION_MINUTES..=MAX_DURATION_MINUTES).contains(&self.duration_minutes) {
            return Err(InvalidInputError::DurationOutOfRange {
                value: self.duration_minutes,
                min: MIN_DURATION_MINUTES,
                max: MAX_DURATION_MINUTES,
            });
        }
        if self.stop_count > MAX_STOPS {
            return Err(InvalidInputError::StopsOutOfRange {
                value: self.stop_count,
                max: MAX_STOPS,
            });
        }
        Ok(())
    }
}

/// Predicted fare in the model's base currency
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FarePrediction {
    /// Raw model output
    pub amount: f64,
}

impl FarePrediction {
    /// Amount rounded half-away-from-zero to `dp` decimal places
    ///
    /// Returns `None` if the amount cannot be represented as a `Decimal`.
    pub fn rounded(&self, dp: u32) -> Option<Decimal> {
        Decimal::try_from(self.amount)
            .ok()
            .map(|d| d.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero))
    }
}

/// Query outside the model's input domain
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInputError {
    /// Duration below or above the accepted range
    #[error("duration {value} min is outside [{min}, {max}]")]
    DurationOutOfRange { value: u32, min: u32, max: u32 },
    /// Too many stops
    #[error("stop count {value} is outside [0, {max}]")]
    StopsOutOfRange { value: u32, max: u32 },
    /// A query inside a batch failed validation (1-based position)
    #[error("query {position}: {source}")]
    InBatch {
        position: usize,
        #[source]
        source: Box<InvalidInputError>,
    },
}

/// Persisted model could not be turned into a usable fare model
#[derive(Debug, Error)]
pub enum ModelLoadError {
    /// Artifact missing or unreadable
    #[error("cannot read model artifact {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Artifact is not valid JSON for the expected schema
    #[error("cannot parse model artifact: {0}")]
    Parse(#[from] serde_json::Error),
    /// Artifact written by an unknown format revision
    #[error("unsupported artifact format version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },
    /// Artifact holds something other than a linear regression
    #[error("unsupported model type {0:?}")]
    UnsupportedModelType(String),
    /// Feature names do not match duration and stop count
    #[error("feature mismatch: expected {expected:?}, found {found:?}")]
    FeatureMismatch {
        expected: Vec<String>,
        found: Vec<String>,
    },
    /// Wrong number of coefficients
    #[error("expected {expected} coefficients, found {found}")]
    CoefficientCount { expected: usize, found: usize },
    /// NaN or infinite coefficient
    #[error("coefficient {name} is not finite")]
    NonFiniteCoefficient { name: &'static str },
    /// Model would produce a negative fare somewhere in the input domain
    #[error("model yields fare {amount} at {duration_minutes} min / {stop_count} stop(s)")]
    NegativeFare {
        duration_minutes: u32,
        stop_count: u32,
        amount: f64,
    },
    /// Model would produce a fare too large to hold as a decimal amount
    #[error("fare {amount} at {duration_minutes} min / {stop_count} stop(s) exceeds decimal range")]
    FareOutOfRange {
        duration_minutes: u32,
        stop_count: u32,
        amount: f64,
    },
    /// Refused to overwrite an existing artifact
    #[error("model artifact {0} already exists")]
    AlreadyExists(PathBuf),
}
