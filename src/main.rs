use heart_risk_monitor::{
    config::Settings,
    handlers::{create_info_routes, create_prediction_routes, health_check},
    risk::{RiskPresenter, SignColorMap, ThresholdScheme},
    services::LoadedPipeline,
    AppState,
};
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting Heart Risk Monitor");

    // Load configuration
    let settings = Settings::new()?;
    info!("Configuration loaded successfully");

    let scheme = ThresholdScheme::from_name(&settings.risk.threshold_scheme).ok_or_else(|| {
        heart_risk_monitor::AppError::ConfigError(format!(
            "unknown threshold scheme '{}'",
            settings.risk.threshold_scheme
        ))
    })?;
    info!(scheme = %scheme.name, "Risk tiering policy selected");

    // Load the pipeline artifact. Failure is terminal for prediction but
    // the rest of the surface keeps serving.
    let pipeline = match LoadedPipeline::load(&settings.model) {
        Ok(pipeline) => Some(Arc::new(pipeline)),
        Err(e) => {
            error!("Model pipeline unavailable: {}", e);
            None
        }
    };

    let state = AppState {
        presenter: RiskPresenter::new(scheme, SignColorMap::standard()),
        pipeline,
        settings: settings.clone(),
    };

    // Start the web server
    let server_handle = {
        let config = settings.clone();
        tokio::spawn(async move {
            if let Err(e) = start_web_server(state, config).await {
                error!("Web server error: {}", e);
            }
        })
    };

    info!("Heart Risk Monitor started successfully");
    info!(
        "API server running on {}:{}",
        settings.api.host, settings.api.port
    );

    tokio::select! {
        _ = server_handle => {
            error!("Web server stopped unexpectedly");
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Received shutdown signal");
        }
    }

    info!("Shutting down Heart Risk Monitor");
    Ok(())
}

async fn start_web_server(
    state: AppState,
    settings: Settings,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    use axum::{routing::get, Router};
    use std::net::SocketAddr;
    use tower_http::{cors::CorsLayer, trace::TraceLayer};

    let app = Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", create_prediction_routes())
        .nest("/api/v1", create_info_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], settings.api.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("API endpoints available at:");
    info!("  GET    /health - Liveness and model status");
    info!("  POST   /api/v1/predict?lang={{id|en}} - Run prediction");
    info!("  GET    /api/v1/model - Model card");
    info!("  GET    /api/v1/dataset/overview - Dataset summary");
    info!("  GET    /api/v1/about - About content");

    axum::serve(listener, app).await?;
    Ok(())
}
