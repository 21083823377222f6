//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{alerts, forecasts, health, queue, settings, staffing};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Checkpoint Staffing API",
        version = "1.0.0",
        description = "Immigration checkpoint staffing and congestion calculation API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Settings
        settings::get_settings,
        settings::update_settings,
        settings::reset_settings,
        // Forecasts
        forecasts::create_manual_forecast,
        // Staffing
        staffing::compute_report,
        staffing::zone_requirement,
        staffing::cross_check,
        // Alerts
        alerts::classify,
        alerts::classify_sequence,
        // Queue model
        queue::metrics,
        queue::minimum_servers,
    ),
    components(
        schemas(
            // Health
            health::HealthResponse,
            // Settings
            crate::models::parameters::Parameters,
            crate::models::parameters::ServiceRates,
            crate::models::parameters::ForeignRatio,
            crate::models::parameters::AlertThresholds,
            crate::models::parameters::StaffingRates,
            crate::models::parameters::UpdateParameters,
            crate::models::parameters::UpdateServiceRates,
            crate::models::parameters::UpdateForeignRatio,
            crate::models::parameters::UpdateAlertThresholds,
            // Forecasts
            forecasts::ManualForecastRequest,
            crate::models::forecast::Forecast,
            crate::models::forecast::HourlyPassengerBucket,
            crate::models::forecast::ZonePassengers,
            // Staffing
            staffing::ReportRequest,
            staffing::ZoneRequirementRequest,
            staffing::CrossCheckRequest,
            staffing::CrossCheckResponse,
            crate::models::requirement::DailyRequirementReport,
            crate::models::requirement::HourlyRequirement,
            crate::models::requirement::ZoneRequirement,
            crate::models::requirement::Summary,
            // Alerts
            alerts::ClassifyRequest,
            alerts::ClassifyResponse,
            alerts::HourTotal,
            alerts::SequenceRequest,
            alerts::SequenceResponse,
            // Queue model
            queue::MetricsRequest,
            queue::MinimumServersRequest,
            queue::MinimumServersResponse,
            crate::models::queue::QueueMetrics,
            crate::models::queue::CrossCheckRow,
            crate::models::queue::CrossCheckReport,
            // Shared
            crate::models::enums::Zone,
            crate::models::enums::Direction,
            crate::models::enums::AlertLevel,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "settings", description = "Engine parameters"),
        (name = "forecasts", description = "Passenger forecasts"),
        (name = "staffing", description = "Staffing requirement calculation"),
        (name = "alerts", description = "Congestion alert classification"),
        (name = "queue", description = "M/M/c queueing model")
    )
)]
pub struct ApiDoc;

/// Create OpenAPI router with Swagger UI
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
