//! Three-way risk tier classification over the probability score.
//!
//! Two threshold schemes exist in the product's history and are kept as
//! named configurations instead of being reconciled silently. The
//! asymmetric 25/46 scheme is the shipped policy.

use serde::Serialize;
use tracing::debug;

use crate::models::RiskTier;
use crate::risk::RiskError;

/// Score (probability * 100) at which medium risk starts. Inclusive.
pub const MEDIUM_THRESHOLD: f64 = 25.0;

/// Score at which high risk starts under the asymmetric scheme. Inclusive.
pub const HIGH_THRESHOLD: f64 = 46.0;

/// High boundary of the medium band under the midpoint scheme. A score of
/// exactly 50 is still medium there; only scores above it are high.
pub const MIDPOINT_HIGH_THRESHOLD: f64 = 50.0;

/// A named tiering policy: the threshold table for `tier_for`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThresholdScheme {
    pub name: &'static str,
    pub medium_threshold: f64,
    pub high_threshold: f64,
    /// Whether a score exactly at `high_threshold` is already high risk.
    pub high_bound_inclusive: bool,
}

impl ThresholdScheme {
    /// Scheme A: `< 25` low, `25 <= s < 46` medium, `>= 46` high.
    /// The shipped policy.
    pub const fn asymmetric() -> Self {
        Self {
            name: "asymmetric-25-46",
            medium_threshold: MEDIUM_THRESHOLD,
            high_threshold: HIGH_THRESHOLD,
            high_bound_inclusive: true,
        }
    }

    /// Scheme B: `< 25` low, `25 <= s <= 50` medium, `> 50` high.
    /// Kept as a named alternative for the older revisions' behavior.
    pub const fn midpoint() -> Self {
        Self {
            name: "midpoint-25-50",
            medium_threshold: MEDIUM_THRESHOLD,
            high_threshold: MIDPOINT_HIGH_THRESHOLD,
            high_bound_inclusive: false,
        }
    }

    /// Resolve a scheme from its configuration name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "asymmetric" | "asymmetric-25-46" => Some(Self::asymmetric()),
            "midpoint" | "midpoint-25-50" => Some(Self::midpoint()),
            _ => None,
        }
    }

    /// Classify a positive-class probability into a tier.
    ///
    /// # Errors
    /// `InvalidProbability` if `probability` is outside [0, 1] or NaN.
    pub fn tier_for(&self, probability: f64) -> Result<RiskTier, RiskError> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(RiskError::InvalidProbability { value: probability });
        }

        let score = probability * 100.0;
        let is_high = if self.high_bound_inclusive {
            score >= self.high_threshold
        } else {
            score > self.high_threshold
        };

        let tier = if is_high {
            RiskTier::High
        } else if score >= self.medium_threshold {
            RiskTier::Medium
        } else {
            RiskTier::Low
        };

        debug!(
            scheme = %self.name,
            score = %score,
            tier = %tier.as_str(),
            "Classified risk tier"
        );

        Ok(tier)
    }
}

impl Default for ThresholdScheme {
    fn default() -> Self {
        Self::asymmetric()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lower_bounds_are_inclusive() {
        let scheme = ThresholdScheme::asymmetric();
        assert_eq!(scheme.tier_for(0.25).unwrap(), RiskTier::Medium);
        assert_eq!(scheme.tier_for(0.46).unwrap(), RiskTier::High);
    }

    #[test]
    fn midpoint_scheme_keeps_fifty_medium() {
        let scheme = ThresholdScheme::midpoint();
        assert_eq!(scheme.tier_for(0.50).unwrap(), RiskTier::Medium);
        assert_eq!(scheme.tier_for(0.505).unwrap(), RiskTier::High);
    }

    #[test]
    fn nan_is_rejected() {
        let scheme = ThresholdScheme::asymmetric();
        assert!(scheme.tier_for(f64::NAN).is_err());
    }
}
