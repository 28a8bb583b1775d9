pub mod classifier_service;
pub mod explanation_service;
pub mod model_artifact;

pub use classifier_service::RiskClassifier;
pub use explanation_service::{Explainer, LinearAttributionExplainer};
pub use model_artifact::{
    load_pipeline, ArtifactMetadata, DatasetSummary, ModelMetrics, PipelineArtifact, ScalerParams,
};

use crate::config::ModelSettings;
use crate::risk::RiskError;

/// The classifier facade and its explanation engine, loaded together at
/// startup and shared read-only across requests.
#[derive(Debug, Clone)]
pub struct LoadedPipeline {
    pub classifier: RiskClassifier,
    pub explainer: LinearAttributionExplainer,
}

impl LoadedPipeline {
    /// Load the configured artifacts and build both components.
    ///
    /// # Errors
    /// `ArtifactUnavailable`/`ArtifactInvalid` when an artifact is
    /// missing, unreadable, or inconsistent. The caller decides whether
    /// that is fatal; the prediction surface treats it as terminal for
    /// the process lifetime.
    pub fn load(settings: &ModelSettings) -> Result<Self, RiskError> {
        let artifact = load_pipeline(settings)?;
        let explainer = LinearAttributionExplainer::new(artifact.clone());
        let classifier = RiskClassifier::new(artifact)?;
        Ok(Self {
            classifier,
            explainer,
        })
    }
}
