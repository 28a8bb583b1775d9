use axum::{
    extract::{Query, State},
    response::Json,
};
use serde::Serialize;

use crate::error::AppError;
use crate::handlers::predict::LangQuery;
use crate::session::{AppPage, SessionContext};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct MetricTile {
    pub label: String,
    pub value: u32,
}

#[derive(Debug, Serialize)]
pub struct DatasetOverviewResponse {
    pub title: String,
    pub source: String,
    pub tiles: Vec<MetricTile>,
}

/// GET /api/v1/dataset/overview
///
/// The home-page metrics row. Served from artifact metadata; the dataset
/// itself is never read here.
pub async fn dataset_overview(
    State(state): State<AppState>,
    Query(params): Query<LangQuery>,
) -> Result<Json<DatasetOverviewResponse>, AppError> {
    let lang = params
        .lang
        .unwrap_or_else(|| state.settings.locale.default_lang.clone());
    let ctx = SessionContext::from_lang(Some(&lang), AppPage::Home);
    let catalog = ctx.catalog();

    let pipeline = state.pipeline.as_ref().ok_or_else(|| {
        AppError::ResourceUnavailable(
            "model pipeline artifact was not loaded at startup".to_string(),
        )
    })?;
    let dataset = &pipeline.classifier.artifact().metadata.dataset;

    Ok(Json(DatasetOverviewResponse {
        title: catalog.dataset_overview_title.to_string(),
        source: dataset.name.clone(),
        tiles: vec![
            MetricTile {
                label: catalog.total_samples_title.to_string(),
                value: dataset.total_samples,
            },
            MetricTile {
                label: catalog.features_title.to_string(),
                value: dataset.feature_count,
            },
            MetricTile {
                label: catalog.positive_cases_title.to_string(),
                value: dataset.positive_cases,
            },
            MetricTile {
                label: catalog.healthy_cases_title.to_string(),
                value: dataset.negative_cases,
            },
        ],
    }))
}

#[derive(Debug, Serialize)]
pub struct AboutResponse {
    pub title: String,
    pub description: String,
    pub disclaimer_title: String,
    pub disclaimer: String,
    pub language: String,
}

/// GET /api/v1/about
///
/// Static localized content; stays available when the model artifact
/// failed to load.
pub async fn about(
    State(state): State<AppState>,
    Query(params): Query<LangQuery>,
) -> Result<Json<AboutResponse>, AppError> {
    let lang = params
        .lang
        .unwrap_or_else(|| state.settings.locale.default_lang.clone());
    let ctx = SessionContext::from_lang(Some(&lang), AppPage::About);
    let catalog = ctx.catalog();

    Ok(Json(AboutResponse {
        title: catalog.about_title.to_string(),
        description: catalog.about_description.to_string(),
        disclaimer_title: catalog.disclaimer_title.to_string(),
        disclaimer: catalog.disclaimer.to_string(),
        language: ctx.locale.as_str().to_string(),
    }))
}
