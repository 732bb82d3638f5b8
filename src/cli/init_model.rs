//! Init-model command implementation

use crate::model::{LinearFareModel, ModelArtifact};
use anyhow::Context;
use chrono::Utc;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct InitModelArgs {
    /// Where to write the artifact
    #[arg(short, long, default_value = "models/flight_price_model.json")]
    pub output: PathBuf,

    /// Fitted intercept
    #[arg(long, allow_hyphen_values = true)]
    pub intercept: f64,

    /// Fitted fare change per minute of duration
    #[arg(long, allow_hyphen_values = true)]
    pub duration_coef: f64,

    /// Fitted fare change per stop
    #[arg(long, allow_hyphen_values = true)]
    pub stops_coef: f64,

    /// Currency the model was fitted in
    #[arg(long, default_value = "INR")]
    pub currency: String,

    /// Number of rows the model was fitted on
    #[arg(long)]
    pub training_rows: Option<u64>,

    /// Overwrite an existing artifact
    #[arg(long)]
    pub force: bool,
}

impl InitModelArgs {
    /// Validate the coefficients and build the artifact to write
    pub fn artifact(&self) -> anyhow::Result<ModelArtifact> {
        let model = LinearFareModel::new(self.intercept, self.duration_coef, self.stops_coef)
            .context("rejected coefficients")?;

        let mut artifact = ModelArtifact::from_model(&model, &self.currency);
        artifact.training_rows = self.training_rows;
        artifact.trained_at = Some(Utc::now());
        Ok(artifact)
    }

    pub fn execute(&self) -> anyhow::Result<()> {
        let artifact = self.artifact()?;
        artifact
            .save(&self.output, self.force)
            .with_context(|| format!("writing {}", self.output.display()))?;

        println!("Wrote model artifact to {}", self.output.display());
        Ok(())
    }
}
