//! Turns a raw probability into the categorized, human-facing result:
//! tier, recommendation, display score, colored attributions, and the
//! chart inputs the result page draws.

use chrono::Utc;
use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use crate::models::{
    AttributionColor, AttributionItem, ColoredAttribution, RiskAssessment, RiskTier,
};
use crate::risk::{RiskError, ThresholdScheme};
use crate::session::SessionContext;

/// The single configuration point mapping weight sign to chart color.
/// Revisions of the product swapped which color meant which sign, so the
/// mapping is never inlined at a call site.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SignColorMap {
    pub supports_disease: &'static str,
    pub opposes_disease: &'static str,
}

impl SignColorMap {
    /// Current mapping: positive weights (pushing toward "disease") in
    /// red, negative weights in green.
    pub const fn standard() -> Self {
        Self {
            supports_disease: "red",
            opposes_disease: "green",
        }
    }

    /// The swapped mapping used by older revisions.
    pub const fn inverted() -> Self {
        Self {
            supports_disease: "green",
            opposes_disease: "red",
        }
    }
}

/// Gauge bands as the result page draws them: 0-46 green, 46-75 yellow,
/// 75-100 red. Display configuration only; tiering thresholds live in
/// [`ThresholdScheme`].
pub const GAUGE_BANDS: [(f64, f64, &str); 3] = [
    (0.0, 46.0, "green"),
    (46.0, 75.0, "yellow"),
    (75.0, 100.0, "red"),
];

#[derive(Debug, Clone, Serialize)]
pub struct GaugeBand {
    pub lower: f64,
    pub upper: f64,
    pub color: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GaugeChartSpec {
    pub title: String,
    /// Score in [0, 100]; also where the threshold line is drawn.
    pub value: f64,
    pub bands: Vec<GaugeBand>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PieSegment {
    pub label: String,
    pub value: f64,
    pub color: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PieChartSpec {
    pub title: String,
    pub segments: Vec<PieSegment>,
}

/// Stateless presenter over a tiering policy and a sign-to-color map.
#[derive(Debug, Clone, Copy)]
pub struct RiskPresenter {
    scheme: ThresholdScheme,
    colors: SignColorMap,
}

impl RiskPresenter {
    pub fn new(scheme: ThresholdScheme, colors: SignColorMap) -> Self {
        Self { scheme, colors }
    }

    pub fn scheme(&self) -> &ThresholdScheme {
        &self.scheme
    }

    /// Build the full assessment for a probability: tier, localized
    /// recommendation, and the display score rounded to one decimal.
    ///
    /// # Errors
    /// `InvalidProbability` if `probability` is outside [0, 1].
    pub fn assess(
        &self,
        probability: f64,
        ctx: &SessionContext,
    ) -> Result<RiskAssessment, RiskError> {
        let tier = self.scheme.tier_for(probability)?;
        let display_percent = (probability * 1000.0).round() / 10.0;

        debug!(
            probability = %probability,
            tier = %tier.as_str(),
            locale = %ctx.locale.as_str(),
            "Assembled risk assessment"
        );

        Ok(RiskAssessment {
            id: Uuid::new_v4(),
            probability,
            tier,
            recommendation: ctx.catalog().recommendation(tier).to_string(),
            display_percent,
            generated_at: Utc::now(),
        })
    }

    /// The probability-interpretation sentence for an assessment.
    pub fn interpretation(&self, tier: RiskTier, display_percent: f64, ctx: &SessionContext) -> String {
        ctx.catalog().interpretation(tier, display_percent)
    }

    /// Color attribution items by weight sign and rank them by magnitude,
    /// largest influence first. Weights themselves are never recomputed.
    pub fn color_attributions(&self, items: &[AttributionItem]) -> Vec<ColoredAttribution> {
        let mut colored: Vec<ColoredAttribution> = items
            .iter()
            .map(|item| {
                let (color, render_color) = if item.signed_weight > 0.0 {
                    (AttributionColor::SupportsDisease, self.colors.supports_disease)
                } else {
                    (AttributionColor::OpposesDisease, self.colors.opposes_disease)
                };
                ColoredAttribution {
                    feature_name: item.feature_name.clone(),
                    signed_weight: item.signed_weight,
                    color,
                    render_color: render_color.to_string(),
                }
            })
            .collect();

        colored.sort_by(|a, b| {
            b.signed_weight
                .abs()
                .partial_cmp(&a.signed_weight.abs())
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        colored
    }

    /// The gauge the result panel draws next to the tier box.
    pub fn gauge_chart(&self, display_percent: f64, ctx: &SessionContext) -> GaugeChartSpec {
        GaugeChartSpec {
            title: ctx.catalog().risk_level_label.to_string(),
            value: display_percent,
            bands: GAUGE_BANDS
                .iter()
                .map(|(lower, upper, color)| GaugeBand {
                    lower: *lower,
                    upper: *upper,
                    color: (*color).to_string(),
                })
                .collect(),
        }
    }

    /// The probability-breakdown pie: no-disease vs disease shares.
    pub fn pie_chart(&self, display_percent: f64, ctx: &SessionContext) -> PieChartSpec {
        let catalog = ctx.catalog();
        PieChartSpec {
            title: catalog.risk_distribution.to_string(),
            segments: vec![
                PieSegment {
                    label: catalog.no_disease.to_string(),
                    value: 100.0 - display_percent,
                    color: "green".to_string(),
                },
                PieSegment {
                    label: catalog.disease.to_string(),
                    value: display_percent,
                    color: "red".to_string(),
                },
            ],
        }
    }
}

impl Default for RiskPresenter {
    fn default() -> Self {
        Self::new(ThresholdScheme::default(), SignColorMap::standard())
    }
}
