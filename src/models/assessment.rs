use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Discrete risk tier for human-facing display.
/// Variant order gives the tier ranking: low < medium < high.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::Low => "low",
            RiskTier::Medium => "medium",
            RiskTier::High => "high",
        }
    }

    /// Tier rank for monotonicity checks: low = 0, medium = 1, high = 2.
    pub fn rank(&self) -> u8 {
        match self {
            RiskTier::Low => 0,
            RiskTier::Medium => 1,
            RiskTier::High => 2,
        }
    }
}

/// One classification result. Created fresh per request, never stored,
/// never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub id: Uuid,
    /// Positive-class probability in [0, 1].
    pub probability: f64,
    pub tier: RiskTier,
    /// Fixed, localized recommendation for the tier.
    pub recommendation: String,
    /// Probability as a percentage rounded to one decimal, the way the
    /// result panel renders it. Tiering uses the unrounded probability.
    pub display_percent: f64,
    pub generated_at: DateTime<Utc>,
}
