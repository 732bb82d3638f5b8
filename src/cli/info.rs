//! Info command implementation

use super::{load_estimator, OutputFormat};
use crate::config::Config;
use crate::model::{
    LinearFareModel, ModelArtifact, MAX_DURATION_MINUTES, MAX_STOPS, MIN_DURATION_MINUTES,
};
use chrono::{DateTime, Utc};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

/// Description of the loaded model
#[derive(Debug, Clone, Serialize)]
pub struct ModelInfo {
    pub model_type: String,
    pub format_version: u32,
    pub currency: String,
    pub features: Vec<String>,
    pub intercept: f64,
    pub duration_coef: f64,
    pub stops_coef: f64,
    pub training_rows: Option<u64>,
    pub trained_at: Option<DateTime<Utc>>,
    pub duration_range: (u32, u32),
    pub max_stops: u32,
    /// Cheapest and most expensive fare the model can quote
    pub fare_range: (f64, f64),
}

impl ModelInfo {
    pub fn new(model: &LinearFareModel, artifact: &ModelArtifact) -> Self {
        Self {
            model_type: artifact.model_type.clone(),
            format_version: artifact.format_version,
            currency: artifact.currency.clone(),
            features: artifact.features.clone(),
            intercept: model.intercept(),
            duration_coef: model.duration_coef(),
            stops_coef: model.stops_coef(),
            training_rows: artifact.training_rows,
            trained_at: artifact.trained_at,
            duration_range: (MIN_DURATION_MINUTES, MAX_DURATION_MINUTES),
            max_stops: MAX_STOPS,
            fare_range: model.fare_range(),
        }
    }
}

impl InfoArgs {
    pub fn execute(&self, config: &Config, model_override: Option<&PathBuf>) -> anyhow::Result<()> {
        let (model, artifact) = load_estimator(config, model_override)?;
        let info = ModelInfo::new(&model, &artifact);

        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&info)?),
            OutputFormat::Table => {
                println!("Model: {} (format v{})", info.model_type, info.format_version);
                println!("  Currency: {}", info.currency);
                println!("  Features: {}", info.features.join(", "));
                println!(
                    "  Fare = {:.4} + {:.4} * duration + {:.4} * stops",
                    info.intercept, info.duration_coef, info.stops_coef
                );
                println!(
                    "  Inputs: {}-{} min, 0-{} stops",
                    info.duration_range.0, info.duration_range.1, info.max_stops
                );
                println!(
                    "  Fare range: {:.2} - {:.2} {}",
                    info.fare_range.0, info.fare_range.1, info.currency
                );
                if let Some(rows) = info.training_rows {
                    println!("  Training rows: {}", rows);
                }
                if let Some(trained_at) = info.trained_at {
                    println!("  Trained at: {}", trained_at.to_rfc3339());
                }
            }
        }

        Ok(())
    }
}
