use axum::{
    extract::{Query, State},
    response::Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::AppError;
use crate::models::{ColoredAttribution, PatientRecord, RiskAssessment, FEATURE_COUNT};
use crate::risk::{GaugeChartSpec, PieChartSpec};
use crate::services::Explainer;
use crate::session::{AppPage, SessionContext};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct LangQuery {
    pub lang: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ConfidenceBreakdown {
    /// Probability mass of whichever class the model favored.
    pub prediction_confidence: f64,
    pub no_disease_probability: f64,
    pub disease_probability: f64,
}

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub assessment: RiskAssessment,
    /// Localized tier label, e.g. "RISIKO TINGGI".
    pub tier_label: String,
    /// Localized sentence explaining which threshold band the score fell in.
    pub interpretation: String,
    pub confidence: ConfidenceBreakdown,
    /// Attributions colored by weight sign, strongest influence first.
    pub attributions: Vec<ColoredAttribution>,
    pub gauge: GaugeChartSpec,
    pub pie: PieChartSpec,
}

/// POST /api/v1/predict
///
/// Runs the full record -> probability -> tier pipeline synchronously and
/// returns the display-ready result. Stateless: nothing is stored.
pub async fn predict(
    State(state): State<AppState>,
    Query(params): Query<LangQuery>,
    Json(record): Json<PatientRecord>,
) -> Result<Json<PredictResponse>, AppError> {
    let lang = params
        .lang
        .unwrap_or_else(|| state.settings.locale.default_lang.clone());
    let ctx = SessionContext::from_lang(Some(&lang), AppPage::Predict);

    let pipeline = state.pipeline.as_ref().ok_or_else(|| {
        AppError::ResourceUnavailable(
            "model pipeline artifact was not loaded at startup".to_string(),
        )
    })?;

    let probability = pipeline.classifier.classify(&record)?;
    let assessment = state.presenter.assess(probability, &ctx)?;

    let features = record.to_feature_vector();
    let predict_fn = |f: &[f64; FEATURE_COUNT]| pipeline.classifier.probability_for(f);
    let attributions = pipeline.explainer.explain(&features, &predict_fn);
    let colored = state.presenter.color_attributions(&attributions);

    info!(
        tier = %assessment.tier.as_str(),
        display_percent = %assessment.display_percent,
        locale = %ctx.locale.as_str(),
        "Prediction served"
    );

    let response = PredictResponse {
        tier_label: ctx.catalog().tier_label(assessment.tier).to_string(),
        interpretation: state
            .presenter
            .interpretation(assessment.tier, assessment.display_percent, &ctx),
        confidence: ConfidenceBreakdown {
            prediction_confidence: probability.max(1.0 - probability),
            no_disease_probability: 1.0 - probability,
            disease_probability: probability,
        },
        attributions: colored,
        gauge: state.presenter.gauge_chart(assessment.display_percent, &ctx),
        pie: state.presenter.pie_chart(assessment.display_percent, &ctx),
        assessment,
    };

    Ok(Json(response))
}

#[derive(Debug, Serialize)]
pub struct ModelCardResponse {
    pub title: String,
    pub algorithm: String,
    pub version: String,
    pub recall: f64,
    pub accuracy: f64,
    pub feature_count: usize,
    pub threshold_scheme: String,
}

/// GET /api/v1/model
pub async fn model_card(
    State(state): State<AppState>,
    Query(params): Query<LangQuery>,
) -> Result<Json<ModelCardResponse>, AppError> {
    let lang = params
        .lang
        .unwrap_or_else(|| state.settings.locale.default_lang.clone());
    let ctx = SessionContext::from_lang(Some(&lang), AppPage::Predict);

    let pipeline = state.pipeline.as_ref().ok_or_else(|| {
        AppError::ResourceUnavailable(
            "model pipeline artifact was not loaded at startup".to_string(),
        )
    })?;
    let metadata = &pipeline.classifier.artifact().metadata;

    Ok(Json(ModelCardResponse {
        title: ctx.catalog().model_info_title.to_string(),
        algorithm: metadata.algorithm.clone(),
        version: metadata.version.clone(),
        recall: metadata.metrics.recall,
        accuracy: metadata.metrics.accuracy,
        feature_count: pipeline.classifier.artifact().feature_names.len(),
        threshold_scheme: state.presenter.scheme().name.to_string(),
    }))
}
