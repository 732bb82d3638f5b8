//! Versioned model artifact
//!
//! JSON document holding the fitted coefficients of the fare model. The
//! schema is checked on load so a stale or foreign file fails at startup
//! instead of producing nonsense fares.

use super::{LinearFareModel, ModelLoadError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Current artifact format revision
pub const FORMAT_VERSION: u32 = 1;
/// The only model family this crate can serve
pub const MODEL_TYPE: &str = "linear_regression";
/// Feature names, in coefficient order
pub const FEATURES: [&str; 2] = ["Duration_mins", "Stops_Num"];

/// On-disk form of a fitted fare model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub format_version: u32,
    pub model_type: String,
    /// Currency the model was trained on
    pub currency: String,
    pub features: Vec<String>,
    pub intercept: f64,
    /// One coefficient per entry of `features`
    pub coefficients: Vec<f64>,
    /// Number of rows the model was fitted on
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub training_rows: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trained_at: Option<DateTime<Utc>>,
}

impl ModelArtifact {
    /// Describe an already-validated model
    pub fn from_model(model: &LinearFareModel, currency: impl Into<String>) -> Self {
        Self {
            format_version: FORMAT_VERSION,
            model_type: MODEL_TYPE.to_string(),
            currency: currency.into().to_uppercase(),
            features: FEATURES.iter().map(|f| f.to_string()).collect(),
            intercept: model.intercept(),
            coefficients: vec![model.duration_coef(), model.stops_coef()],
            training_rows: None,
            trained_at: None,
        }
    }

    /// Read and parse an artifact without validating it
    pub fn read(path: impl AsRef<Path>) -> Result<Self, ModelLoadError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| ModelLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Parse an artifact from its JSON text
    pub fn parse(content: &str) -> Result<Self, ModelLoadError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Check the schema and build the model it describes
    pub fn to_model(&self) -> Result<LinearFareModel, ModelLoadError> {
        if self.format_version != FORMAT_VERSION {
            return Err(ModelLoadError::UnsupportedVersion {
                found: self.format_version,
                expected: FORMAT_VERSION,
            });
        }

        if self.model_type != MODEL_TYPE {
            return Err(ModelLoadError::UnsupportedModelType(self.model_type.clone()));
        }

        if self.features.iter().map(String::as_str).ne(FEATURES) {
            return Err(ModelLoadError::FeatureMismatch {
                expected: FEATURES.iter().map(|f| f.to_string()).collect(),
                found: self.features.clone(),
            });
        }

        let [duration_coef, stops_coef] = self.coefficients[..] else {
            return Err(ModelLoadError::CoefficientCount {
                expected: FEATURES.len(),
                found: self.coefficients.len(),
            });
        };

        LinearFareModel::new(self.intercept, duration_coef, stops_coef)
    }

    /// Write the artifact as pretty JSON
    ///
    /// Fails with [`ModelLoadError::AlreadyExists`] when `path` exists and
    /// `overwrite` is false.
    pub fn save(&self, path: impl AsRef<Path>, overwrite: bool) -> Result<(), ModelLoadError> {
        let path = path.as_ref();
        if !overwrite && path.exists() {
            return Err(ModelLoadError::AlreadyExists(path.to_path_buf()));
        }

        let io_err = |source| ModelLoadError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }

        let mut content = serde_json::to_string_pretty(self)?;
        content.push('\n');
        std::fs::write(path, content).map_err(io_err)?;

        tracing::info!(path = %path.display(), "Wrote model artifact");
        Ok(())
    }
}

/// Load and validate the artifact at `path`
pub fn load_model(
    path: impl AsRef<Path>,
) -> Result<(LinearFareModel, ModelArtifact), ModelLoadError> {
    let path = path.as_ref();
    let artifact = ModelArtifact::read(path)?;
    let model = artifact.to_model()?;

    tracing::info!(
        path = %path.display(),
        currency = %artifact.currency,
        intercept = model.intercept(),
        duration_coef = model.duration_coef(),
        stops_coef = model.stops_coef(),
        "Loaded fare model"
    );

    Ok((model, artifact))
}
