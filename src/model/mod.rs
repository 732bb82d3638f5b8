//! Fare model module
//!
//! Predicts a ticket fare from flight duration and stop count using a frozen
//! linear regression loaded once at startup.

mod artifact;
mod linear;
mod types;

pub use artifact::{load_model, ModelArtifact, FEATURES, FORMAT_VERSION, MODEL_TYPE};
pub use linear::LinearFareModel;
pub use types::{
    FarePrediction, FlightQuery, InvalidInputError, ModelLoadError, MAX_DURATION_MINUTES, MAX_STOPS,
    MIN_DURATION_MINUTES,
};

/// Trait for fare estimator implementations
pub trait FareEstimator: Send + Sync {
    /// Predict the fare for a single query
    fn estimate(&self, query: &FlightQuery) -> Result<FarePrediction, InvalidInputError>;

    /// Predict fares for every query, failing on the first invalid one
    fn estimate_batch(
        &self,
        queries: &[FlightQuery],
    ) -> Result<Vec<FarePrediction>, InvalidInputError> {
        queries
            .iter()
            .enumerate()
            .map(|(i, query)| {
                self.estimate(query).map_err(|e| InvalidInputError::InBatch {
                    position: i + 1,
                    source: Box::new(e),
                })
            })
            .collect()
    }
}
