use std::sync::Arc;

use axum::body::Body;
use axum::extract::{Query, State};
use axum::http::{header, Request, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use tower::ServiceExt;

use heart_risk_monitor::config::Settings;
use heart_risk_monitor::handlers::{
    about, create_info_routes, create_prediction_routes, dataset_overview, health_check,
    model_card, predict,
};
use heart_risk_monitor::handlers::predict::LangQuery;
use heart_risk_monitor::models::{
    ChestPainType, PatientRecord, RestingEcg, RiskTier, Sex, StSlope, FEATURE_NAMES,
};
use heart_risk_monitor::risk::{RiskPresenter, SignColorMap, ThresholdScheme};
use heart_risk_monitor::services::{
    ArtifactMetadata, DatasetSummary, LinearAttributionExplainer, ModelMetrics,
    PipelineArtifact, RiskClassifier, ScalerParams, LoadedPipeline,
};
use heart_risk_monitor::{AppError, AppState};

fn test_artifact() -> PipelineArtifact {
    PipelineArtifact {
        feature_names: FEATURE_NAMES.iter().map(|n| n.to_string()).collect(),
        scaler: ScalerParams {
            mean: vec![53.5, 0.79, 2.25, 132.4, 198.8, 0.23, 0.6, 136.8, 0.4, 0.89, 0.64],
            std: vec![9.4, 0.41, 0.93, 18.5, 109.4, 0.42, 0.81, 25.5, 0.49, 1.07, 0.61],
        },
        coefficients: vec![0.35, 0.62, 0.78, 0.12, -0.1, 0.33, 0.05, -0.42, 0.55, 0.8, 0.95],
        intercept: 0.21,
        metadata: ArtifactMetadata {
            algorithm: "LogisticRegression".to_string(),
            version: "1.2.0".to_string(),
            metrics: ModelMetrics {
                recall: 0.92,
                accuracy: 0.90,
            },
            dataset: DatasetSummary {
                name: "Heart Failure Prediction (Kaggle)".to_string(),
                total_samples: 918,
                feature_count: 11,
                positive_cases: 508,
                negative_cases: 410,
            },
        },
    }
}

fn state_with_pipeline() -> AppState {
    let artifact = test_artifact();
    let pipeline = LoadedPipeline {
        explainer: LinearAttributionExplainer::new(artifact.clone()),
        classifier: RiskClassifier::new(artifact).unwrap(),
    };
    AppState {
        settings: Settings::default(),
        presenter: RiskPresenter::new(ThresholdScheme::asymmetric(), SignColorMap::standard()),
        pipeline: Some(Arc::new(pipeline)),
    }
}

fn state_without_pipeline() -> AppState {
    AppState {
        settings: Settings::default(),
        presenter: RiskPresenter::default(),
        pipeline: None,
    }
}

fn sample_record() -> PatientRecord {
    PatientRecord {
        age: 58,
        sex: Sex::Male,
        chest_pain_type: ChestPainType::Asymptomatic,
        resting_bp: 130,
        cholesterol: 240,
        fasting_bs: false,
        resting_ecg: RestingEcg::Normal,
        max_hr: 150,
        exercise_angina: false,
        oldpeak: 1.0,
        st_slope: StSlope::Flat,
    }
}

#[tokio::test]
async fn health_reports_model_status() {
    let response = health_check(State(state_with_pipeline())).await.unwrap();
    assert_eq!(response.0.status, "healthy");
    assert!(response.0.model_loaded);

    let response = health_check(State(state_without_pipeline())).await.unwrap();
    assert_eq!(response.0.status, "healthy");
    assert!(!response.0.model_loaded);
}

#[tokio::test]
async fn predict_returns_full_display_payload() {
    let response = predict(
        State(state_with_pipeline()),
        Query(LangQuery {
            lang: Some("en".to_string()),
        }),
        Json(sample_record()),
    )
    .await
    .unwrap();

    let body = response.0;
    assert!((0.0..=1.0).contains(&body.assessment.probability));
    assert_eq!(
        body.assessment.tier,
        ThresholdScheme::asymmetric()
            .tier_for(body.assessment.probability)
            .unwrap()
    );
    assert_eq!(body.attributions.len(), FEATURE_NAMES.len());
    assert!(body.interpretation.contains(&format!(
        "{:.1}%",
        body.assessment.display_percent
    )));
    assert_eq!(body.gauge.bands.len(), 3);
    assert_eq!(body.pie.segments.len(), 2);
    let pie_total: f64 = body.pie.segments.iter().map(|s| s.value).sum();
    assert!((pie_total - 100.0).abs() < 1e-9);
}

#[tokio::test]
async fn predict_localizes_result_strings() {
    let response = predict(
        State(state_with_pipeline()),
        Query(LangQuery {
            lang: Some("id".to_string()),
        }),
        Json(sample_record()),
    )
    .await
    .unwrap();

    let body = response.0;
    let expected_label = match body.assessment.tier {
        RiskTier::Low => "RISIKO RENDAH",
        RiskTier::Medium => "RISIKO SEDANG",
        RiskTier::High => "RISIKO TINGGI",
    };
    assert_eq!(body.tier_label, expected_label);
}

#[tokio::test]
async fn predict_without_model_is_resource_unavailable() {
    let result = predict(
        State(state_without_pipeline()),
        Query(LangQuery { lang: None }),
        Json(sample_record()),
    )
    .await;

    assert!(matches!(result, Err(AppError::ResourceUnavailable(_))));
}

#[tokio::test]
async fn predict_rejects_out_of_domain_record() {
    let mut record = sample_record();
    record.resting_bp = 999;

    let result = predict(
        State(state_with_pipeline()),
        Query(LangQuery { lang: None }),
        Json(record),
    )
    .await;

    assert!(matches!(result, Err(AppError::InvalidInput(_))));
}

#[tokio::test]
async fn model_card_exposes_artifact_metadata_and_policy() {
    let response = model_card(
        State(state_with_pipeline()),
        Query(LangQuery {
            lang: Some("en".to_string()),
        }),
    )
    .await
    .unwrap();

    let body = response.0;
    assert_eq!(body.algorithm, "LogisticRegression");
    assert_eq!(body.feature_count, 11);
    assert_eq!(body.threshold_scheme, "asymmetric-25-46");
    assert_eq!(body.title, "Model Info");
}

#[tokio::test]
async fn dataset_overview_serves_artifact_summary() {
    let response = dataset_overview(
        State(state_with_pipeline()),
        Query(LangQuery {
            lang: Some("en".to_string()),
        }),
    )
    .await
    .unwrap();

    let body = response.0;
    assert_eq!(body.tiles.len(), 4);
    assert_eq!(body.tiles[0].value, 918);
    assert_eq!(body.tiles[2].value + body.tiles[3].value, 918);
}

fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", create_prediction_routes())
        .nest("/api/v1", create_info_routes())
        .with_state(state)
}

#[tokio::test]
async fn router_serves_health_and_about() {
    let app = app(state_without_pipeline());

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/about?lang=en")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn router_maps_missing_model_to_service_unavailable() {
    let app = app(state_without_pipeline());

    let body = serde_json::to_vec(&sample_record()).unwrap();
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/predict")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn router_maps_invalid_record_to_bad_request() {
    let app = app(state_with_pipeline());

    let mut record = sample_record();
    record.age = 150;
    let body = serde_json::to_vec(&record).unwrap();
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/predict")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn about_serves_without_model_artifact() {
    // The about page stays usable when artifact loading failed.
    let response = about(
        State(state_without_pipeline()),
        Query(LangQuery { lang: None }),
    )
    .await
    .unwrap();
    assert_eq!(response.0.language, "id");
    assert!(response.0.title.contains("aplikasi"));
}
