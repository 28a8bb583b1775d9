pub mod config;
pub mod error;
pub mod handlers;
pub mod i18n;
pub mod models;
pub mod risk;
pub mod services;
pub mod session;

pub use error::types::*;

use std::sync::Arc;

/// Shared application state. The loaded pipeline is read-only after
/// startup; `None` means artifact loading failed and prediction endpoints
/// answer 503 for the rest of the process lifetime.
#[derive(Clone)]
pub struct AppState {
    pub settings: config::Settings,
    pub presenter: risk::RiskPresenter,
    pub pipeline: Option<Arc<services::LoadedPipeline>>,
}
