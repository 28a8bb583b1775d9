//! Loading of the pre-trained pipeline artifact.
//!
//! The artifact is produced offline by the training pipeline and consumed
//! here as data: feature names, fitted scaler parameters, logistic
//! coefficients, and display metadata. Some deployments ship the fitted
//! scaler as a second artifact; when configured, it overrides the scaler
//! embedded in the pipeline artifact.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::ModelSettings;
use crate::models::FEATURE_COUNT;
use crate::risk::RiskError;

/// Fitted standard-scaler parameters, one entry per feature.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScalerParams {
    pub mean: Vec<f64>,
    pub std: Vec<f64>,
}

/// Validation metrics recorded when the pipeline was trained. Display
/// metadata only; nothing in the request path computes with these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelMetrics {
    pub recall: f64,
    pub accuracy: f64,
}

/// Summary of the training dataset, shown on the overview page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub name: String,
    pub total_samples: u32,
    pub feature_count: u32,
    pub positive_cases: u32,
    pub negative_cases: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactMetadata {
    pub algorithm: String,
    pub version: String,
    pub metrics: ModelMetrics,
    pub dataset: DatasetSummary,
}

/// The pre-trained classification pipeline, loaded once at startup and
/// treated as a read-only process-wide resource afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineArtifact {
    pub feature_names: Vec<String>,
    pub scaler: ScalerParams,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
    pub metadata: ArtifactMetadata,
}

impl PipelineArtifact {
    /// Load an artifact from disk.
    ///
    /// # Errors
    /// `ArtifactUnavailable` if the file is missing or unreadable;
    /// `ArtifactInvalid` if it parses but is internally inconsistent.
    pub fn load(path: &Path) -> Result<Self, RiskError> {
        let raw = fs::read_to_string(path).map_err(|e| RiskError::ArtifactUnavailable {
            message: format!("{}: {}", path.display(), e),
        })?;
        let artifact: PipelineArtifact =
            serde_json::from_str(&raw).map_err(|e| RiskError::ArtifactUnavailable {
                message: format!("{}: {}", path.display(), e),
            })?;
        artifact.validate()?;
        Ok(artifact)
    }

    /// Replace the embedded scaler with a separately shipped one.
    pub fn with_scaler(mut self, scaler: ScalerParams) -> Result<Self, RiskError> {
        self.scaler = scaler;
        self.validate()?;
        Ok(self)
    }

    /// Consistency checks over the fitted parameters.
    pub fn validate(&self) -> Result<(), RiskError> {
        if self.feature_names.len() != FEATURE_COUNT {
            return Err(RiskError::ArtifactInvalid {
                message: format!(
                    "expected {} feature names, found {}",
                    FEATURE_COUNT,
                    self.feature_names.len()
                ),
            });
        }
        if self.coefficients.len() != FEATURE_COUNT {
            return Err(RiskError::ArtifactInvalid {
                message: format!(
                    "expected {} coefficients, found {}",
                    FEATURE_COUNT,
                    self.coefficients.len()
                ),
            });
        }
        if self.scaler.mean.len() != FEATURE_COUNT || self.scaler.std.len() != FEATURE_COUNT {
            return Err(RiskError::ArtifactInvalid {
                message: "scaler parameter length does not match feature count".to_string(),
            });
        }
        if self.scaler.std.iter().any(|s| *s <= 0.0) {
            return Err(RiskError::ArtifactInvalid {
                message: "scaler std contains a non-positive entry".to_string(),
            });
        }
        Ok(())
    }
}

/// Load the pipeline artifact (and the separate scaler artifact, when one
/// is configured) from the fixed paths in settings.
pub fn load_pipeline(settings: &ModelSettings) -> Result<PipelineArtifact, RiskError> {
    let mut artifact = PipelineArtifact::load(Path::new(&settings.pipeline_path))?;

    if let Some(scaler_path) = &settings.scaler_path {
        let raw = fs::read_to_string(scaler_path).map_err(|e| RiskError::ArtifactUnavailable {
            message: format!("{}: {}", scaler_path, e),
        })?;
        let scaler: ScalerParams =
            serde_json::from_str(&raw).map_err(|e| RiskError::ArtifactUnavailable {
                message: format!("{}: {}", scaler_path, e),
            })?;
        artifact = artifact.with_scaler(scaler)?;
        info!(path = %scaler_path, "Applied separate scaler artifact");
    }

    info!(
        path = %settings.pipeline_path,
        algorithm = %artifact.metadata.algorithm,
        version = %artifact.metadata.version,
        "Loaded pipeline artifact"
    );
    Ok(artifact)
}
