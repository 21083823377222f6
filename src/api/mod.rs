//! API handlers for the staffing REST endpoints

pub mod alerts;
pub mod forecasts;
pub mod health;
pub mod openapi;
pub mod queue;
pub mod settings;
pub mod staffing;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Settings
        .route("/settings", get(settings::get_settings).put(settings::update_settings))
        .route("/settings/reset", post(settings::reset_settings))
        // Forecasts
        .route("/forecasts/manual", post(forecasts::create_manual_forecast))
        // Staffing
        .route("/staffing/report", post(staffing::compute_report))
        .route("/staffing/zone", post(staffing::zone_requirement))
        .route("/staffing/cross-check", post(staffing::cross_check))
        // Alerts
        .route("/alerts/classify", post(alerts::classify))
        .route("/alerts/sequence", post(alerts::classify_sequence))
        // Queue model
        .route("/queue/metrics", post(queue::metrics))
        .route("/queue/minimum-servers", post(queue::minimum_servers))
        .with_state(state);

    // OpenAPI documentation
    let openapi = openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
