pub mod health;
pub mod info;
pub mod predict;

pub use health::{health_check, HealthResponse};
pub use info::{about, dataset_overview, AboutResponse, DatasetOverviewResponse};
pub use predict::{model_card, predict, ModelCardResponse, PredictResponse};

use axum::{
    routing::{get, post},
    Router,
};

use crate::AppState;

/// Prediction endpoints: the classify pipeline and the model card.
pub fn create_prediction_routes() -> Router<AppState> {
    Router::new()
        .route("/predict", post(predict))
        .route("/model", get(model_card))
}

/// Informational endpoints backing the home and about pages.
pub fn create_info_routes() -> Router<AppState> {
    Router::new()
        .route("/dataset/overview", get(dataset_overview))
        .route("/about", get(about))
}
