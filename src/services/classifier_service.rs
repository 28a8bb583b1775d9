//! Risk Classifier Facade: one operation, patient record in, positive
//! class probability out.

use tracing::debug;

use crate::models::{PatientRecord, FEATURE_COUNT};
use crate::risk::RiskError;
use crate::services::model_artifact::PipelineArtifact;

/// Wraps the loaded pipeline. Pure over its input once constructed.
#[derive(Debug, Clone)]
pub struct RiskClassifier {
    artifact: PipelineArtifact,
}

impl RiskClassifier {
    /// # Errors
    /// `ArtifactInvalid` if the artifact's fitted parameters are
    /// inconsistent.
    pub fn new(artifact: PipelineArtifact) -> Result<Self, RiskError> {
        artifact.validate()?;
        Ok(Self { artifact })
    }

    pub fn artifact(&self) -> &PipelineArtifact {
        &self.artifact
    }

    /// Probability of the positive ("disease present") class for a record.
    ///
    /// # Errors
    /// `InvalidRecord` if any field is outside its selectable domain.
    pub fn classify(&self, record: &PatientRecord) -> Result<f64, RiskError> {
        record
            .validate()
            .map_err(|reasons| RiskError::InvalidRecord { reasons })?;

        let features = record.to_feature_vector();
        let probability = self.probability_for(&features);

        debug!(
            probability = %probability,
            "Classified patient record"
        );
        Ok(probability)
    }

    /// The raw probability function over an encoded feature vector. This
    /// is what gets handed to the explanation engine.
    pub fn probability_for(&self, features: &[f64; FEATURE_COUNT]) -> f64 {
        let z = self
            .standardized(features)
            .iter()
            .zip(self.artifact.coefficients.iter())
            .map(|(x, c)| x * c)
            .sum::<f64>()
            + self.artifact.intercept;
        sigmoid(z)
    }

    /// Standardize a feature vector with the fitted scaler.
    pub fn standardized(&self, features: &[f64; FEATURE_COUNT]) -> [f64; FEATURE_COUNT] {
        let mut out = [0.0; FEATURE_COUNT];
        for (i, value) in features.iter().enumerate() {
            out[i] = (value - self.artifact.scaler.mean[i]) / self.artifact.scaler.std[i];
        }
        out
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sigmoid_is_bounded_and_centered() {
        assert!((sigmoid(0.0) - 0.5).abs() < f64::EPSILON);
        assert!(sigmoid(50.0) <= 1.0);
        assert!(sigmoid(-50.0) >= 0.0);
        assert!(sigmoid(-1.0) < sigmoid(1.0));
    }
}
