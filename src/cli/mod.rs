//! CLI interface for farecast
//!
//! Provides subcommands for:
//! - `predict`: Estimate the fare for one flight
//! - `batch`: Estimate fares for a JSON file of flights
//! - `info`: Show what the loaded model does
//! - `config`: Show the active configuration
//! - `init-model`: Write a model artifact from fitted coefficients

mod batch;
mod info;
mod init_model;
mod predict;

pub use batch::BatchArgs;
pub use info::{InfoArgs, ModelInfo};
pub use init_model::InitModelArgs;
pub use predict::PredictArgs;

use crate::config::Config;
use crate::model::{load_model, LinearFareModel, ModelArtifact};
use crate::telemetry::{self, CounterMetric};
use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "farecast")]
#[command(about = "Flight fare estimator backed by a linear regression model")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,

    /// Model artifact to load instead of the configured one
    #[arg(short, long, global = true)]
    pub model: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Estimate the fare for one flight
    Predict(PredictArgs),
    /// Estimate fares for every flight in a JSON file
    Batch(BatchArgs),
    /// Show model details
    Info(InfoArgs),
    /// Show configuration
    Config,
    /// Write a model artifact from fitted coefficients
    InitModel(InitModelArgs),
}

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Load the fare model for a command
///
/// Refuses models whose currency differs from the configured base, since
/// conversion rates are quoted against that base.
pub fn load_estimator(
    config: &Config,
    model_override: Option<&PathBuf>,
) -> anyhow::Result<(LinearFareModel, ModelArtifact)> {
    let path = model_override.unwrap_or(&config.model.path);

    let (model, artifact) = match load_model(path) {
        Ok(loaded) => loaded,
        Err(e) => {
            telemetry::increment(CounterMetric::ModelLoadFailures);
            tracing::error!(path = %path.display(), error = %e, "Failed to load fare model");
            return Err(e).with_context(|| format!("loading model from {}", path.display()));
        }
    };
    telemetry::increment(CounterMetric::ModelLoads);

    if !artifact.currency.eq_ignore_ascii_case(&config.currency.base) {
        anyhow::bail!(
            "model currency {} does not match configured base currency {}",
            artifact.currency,
            config.currency.base
        );
    }

    Ok((model, artifact))
}
