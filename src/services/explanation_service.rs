//! Explanation engine boundary.
//!
//! The engine receives the preprocessed feature vector plus the raw
//! probability function and returns a ranked, signed attribution list for
//! the positive class. A sampling-based engine (LIME and friends) plugs in
//! behind the same trait; the shipped implementation reads the exact
//! per-feature contributions off the linear pipeline instead.

use crate::models::{AttributionItem, FEATURE_COUNT};
use crate::services::model_artifact::PipelineArtifact;

pub trait Explainer: Send + Sync {
    /// Ranked (feature, signed weight) attributions for the positive
    /// class, strongest influence first. Must not mutate its inputs.
    fn explain(
        &self,
        features: &[f64; FEATURE_COUNT],
        predict: &dyn Fn(&[f64; FEATURE_COUNT]) -> f64,
    ) -> Vec<AttributionItem>;
}

/// Exact local attribution for the linear pipeline: each feature's weight
/// is its standardized value times its fitted coefficient.
#[derive(Debug, Clone)]
pub struct LinearAttributionExplainer {
    artifact: PipelineArtifact,
}

impl LinearAttributionExplainer {
    pub fn new(artifact: PipelineArtifact) -> Self {
        Self { artifact }
    }
}

impl Explainer for LinearAttributionExplainer {
    fn explain(
        &self,
        features: &[f64; FEATURE_COUNT],
        _predict: &dyn Fn(&[f64; FEATURE_COUNT]) -> f64,
    ) -> Vec<AttributionItem> {
        let scaler = &self.artifact.scaler;
        let mut items: Vec<AttributionItem> = self
            .artifact
            .feature_names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                // Same standardization the probability function applies.
                let z = (features[i] - scaler.mean[i]) / scaler.std[i];
                AttributionItem {
                    feature_name: name.clone(),
                    signed_weight: z * self.artifact.coefficients[i],
                }
            })
            .collect();

        items.sort_by(|a, b| {
            b.signed_weight
                .abs()
                .partial_cmp(&a.signed_weight.abs())
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        items
    }
}
